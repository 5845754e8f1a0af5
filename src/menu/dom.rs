//! Menu element model
//!
//! A minimal element tree standing in for the page's document nodes. The
//! class names match the stylesheet the documentation theme ships with.

/// Class of the dropdown container element
pub const DROPDOWN_CLASS: &str = "md-flex__cell md-flex__cell--shrink dropdown";

/// Class of the trigger button element
pub const BUTTON_CLASS: &str = "dropdownbutton";

/// Class of the content panel holding the version links
pub const CONTENT_CLASS: &str = "dropdown-content md-hero";

/// A single element of the assembled menu
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Element {
    pub tag: String,
    pub class: Option<String>,
    pub text: Option<String>,
    pub title: Option<String>,
    pub href: Option<String>,
    pub children: Vec<Element>,
}

impl Element {
    pub fn new(tag: &str) -> Self {
        Self {
            tag: tag.to_string(),
            class: None,
            text: None,
            title: None,
            href: None,
            children: Vec::new(),
        }
    }

    /// The dropdown container element
    pub fn dropdown() -> Self {
        let mut el = Self::new("div");
        el.class = Some(DROPDOWN_CLASS.to_string());
        el
    }

    /// The trigger button element (text set once the manifest resolves)
    pub fn button() -> Self {
        let mut el = Self::new("button");
        el.class = Some(BUTTON_CLASS.to_string());
        el
    }

    /// The content panel element
    pub fn content() -> Self {
        let mut el = Self::new("div");
        el.class = Some(CONTENT_CLASS.to_string());
        el
    }

    /// A version link; label is used for both the visible text and the title
    pub fn link(label: &str, href: &str) -> Self {
        let mut el = Self::new("a");
        el.text = Some(label.to_string());
        el.title = Some(label.to_string());
        el.href = Some(href.to_string());
        el
    }

    pub fn set_text(&mut self, text: &str) {
        self.text = Some(text.to_string());
    }

    pub fn append_child(&mut self, child: Element) {
        self.children.push(child);
    }

    /// Renders the element and its children as HTML.
    pub fn to_html(&self) -> String {
        let mut html = format!("<{}", self.tag);
        if let Some(class) = &self.class {
            html.push_str(&format!(r#" class="{}""#, escape(class)));
        }
        if let Some(href) = &self.href {
            html.push_str(&format!(r#" href="{}""#, escape(href)));
        }
        if let Some(title) = &self.title {
            html.push_str(&format!(r#" title="{}""#, escape(title)));
        }
        html.push('>');
        if let Some(text) = &self.text {
            html.push_str(&escape(text));
        }
        for child in &self.children {
            html.push_str(&child.to_html());
        }
        html.push_str(&format!("</{}>", self.tag));
        html
    }
}

fn escape(s: &str) -> String {
    s.replace('&', "&amp;")
        .replace('<', "&lt;")
        .replace('>', "&gt;")
        .replace('"', "&quot;")
}
