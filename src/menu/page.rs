//! Page abstraction
//!
//! The hosting page is an external collaborator: the menu builder only
//! needs the current URL and a navigation header to append to.

#[cfg(test)]
use mockall::automock;

use crate::menu::dom::Element;

/// Trait for the page the menu is attached to
#[cfg_attr(test, automock)]
pub trait Page: Send + Sync {
    /// The URL of the page currently being viewed
    fn current_url(&self) -> String;

    /// Appends an element to the page's navigation header
    fn append_to_header(&mut self, element: Element);
}

/// In-memory page that renders its navigation header to HTML.
///
/// Used by the CLI and by tests; a browser-backed implementation would
/// wrap the live document instead.
#[derive(Debug, Clone)]
pub struct RenderedPage {
    current_url: String,
    header: Vec<Element>,
}

impl RenderedPage {
    pub fn new(current_url: &str) -> Self {
        Self {
            current_url: current_url.to_string(),
            header: Vec::new(),
        }
    }

    /// Elements appended to the navigation header so far
    pub fn header_elements(&self) -> &[Element] {
        &self.header
    }

    /// Renders the navigation header and its appended menus as HTML.
    pub fn render_header(&self) -> String {
        let children: String = self.header.iter().map(|el| el.to_html()).collect();
        format!(
            r#"<div class="{}">{}</div>"#,
            crate::config::NAV_HEADER_CLASS,
            children
        )
    }
}

impl Page for RenderedPage {
    fn current_url(&self) -> String {
        self.current_url.clone()
    }

    fn append_to_header(&mut self, element: Element) {
        self.header.push(element);
    }
}
