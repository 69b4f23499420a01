//! Page Layout Component
//!
//! Full-viewport frame: a fixed-height header above a body region that takes
//! the rest of the viewport height.

use leptos::prelude::*;

use crate::components::Header;
use crate::config::DEFAULT_HEADER_HEIGHT;

/// Pixel heights of the two regions for a concrete viewport
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct RegionHeights {
    pub header: u32,
    pub body: u32,
}

/// Sizing of the layout regions
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct LayoutFrame {
    pub header_height: u32,
}

impl Default for LayoutFrame {
    fn default() -> Self {
        Self::new(DEFAULT_HEADER_HEIGHT)
    }
}

impl LayoutFrame {
    pub const fn new(header_height: u32) -> Self {
        Self { header_height }
    }

    pub fn root_style(&self) -> &'static str {
        "display: flex; flex-direction: column; width: 100vw; height: 100vh;"
    }

    pub fn header_style(&self) -> String {
        format!("width: 100%; height: {}px; flex: none;", self.header_height)
    }

    pub fn body_style(&self) -> String {
        format!("width: 100%; height: calc(100vh - {}px);", self.header_height)
    }

    /// Resolve both regions for a viewport. A header taller than the viewport
    /// is clamped to it, so the two heights always add up to `viewport`.
    pub fn split(&self, viewport: u32) -> RegionHeights {
        let header = self.header_height.min(viewport);
        RegionHeights {
            header,
            body: viewport - header,
        }
    }
}

/// Page frame hosting arbitrary content below the header
#[component]
pub fn Layout(
    /// Header height in pixels
    #[prop(optional)]
    header_height: Option<u32>,
    children: Children,
) -> impl IntoView {
    let frame = header_height.map(LayoutFrame::new).unwrap_or_default();

    view! {
        <div class="layout" style=frame.root_style()>
            <Header style=frame.header_style() />
            <div class="layout-body" style=frame.body_style()>
                {children()}
            </div>
        </div>
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::context::provide_test_context;

    fn render_with_child(header_height: u32) -> String {
        let owner = Owner::new();
        owner.with(|| {
            provide_test_context();
            view! {
                <Layout header_height=header_height>
                    <p id="kid">"child content"</p>
                </Layout>
            }
            .to_html()
        })
    }

    #[test]
    fn test_children_rendered_once() {
        let html = render_with_child(72);
        assert_eq!(html.matches(r#"id="kid""#).count(), 1);
        assert_eq!(html.matches("child content").count(), 1);
        assert!(html.contains("calc(100vh - 72px)"));
        assert!(html.contains(r#"class="page-header""#));
    }

    #[test]
    fn test_header_height_prop_reaches_both_regions() {
        let html = render_with_child(120);
        assert!(html.contains("height: 120px;"));
        assert!(html.contains("calc(100vh - 120px)"));
    }

    #[test]
    fn test_header_height_defaults_to_72px() {
        let owner = Owner::new();
        let html = owner.with(|| {
            provide_test_context();
            view! { <Layout><p>"body"</p></Layout> }.to_html()
        });
        assert!(html.contains("height: 72px;"));
        assert!(html.contains("calc(100vh - 72px)"));
    }

    #[test]
    fn test_default_header_is_72px() {
        let frame = LayoutFrame::default();
        assert_eq!(frame.header_height, 72);
        assert_eq!(frame.body_style(), "width: 100%; height: calc(100vh - 72px);");
        assert!(frame.header_style().contains("height: 72px;"));
    }

    #[test]
    fn test_regions_fill_viewport() {
        for header_height in [0, 1, 48, 72, 120, 799, 800, 801, 5000, u32::MAX] {
            let frame = LayoutFrame::new(header_height);
            for viewport in [0, 1, 600, 800, 1080] {
                let regions = frame.split(viewport);
                assert_eq!(regions.header + regions.body, viewport);
                assert!(regions.header <= header_height);
            }
        }
    }

    #[test]
    fn test_split_regular_viewport() {
        assert_eq!(
            LayoutFrame::new(72).split(900),
            RegionHeights { header: 72, body: 828 }
        );
    }

    #[test]
    fn test_oversized_header_leaves_empty_body() {
        assert_eq!(
            LayoutFrame::new(1200).split(900),
            RegionHeights { header: 900, body: 0 }
        );
    }
}
