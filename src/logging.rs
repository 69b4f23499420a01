//! Logging
//!
//! Routes `log` records to the browser console through `wasm_logger`.

use log::LevelFilter;

/// Install the console logger at `filter`. Call once, before anything logs.
/// `Off` installs nothing and silences the facade.
pub fn init(filter: LevelFilter) {
    match filter.to_level() {
        Some(level) => wasm_logger::init(wasm_logger::Config::new(level)),
        None => log::set_max_level(LevelFilter::Off),
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_off_installs_no_logger() {
        init(LevelFilter::Off);
        assert_eq!(log::max_level(), LevelFilter::Off);
        assert!(!log::log_enabled!(log::Level::Error));
    }
}
