//! Menu presentation layer
//!
//! # Modules
//!
//! - [`builder`]: orchestrates manifest loading, link resolution, and the
//!   single attach to the page header
//! - [`dom`]: element model for the dropdown, button, panel, and links
//! - [`page`]: the page abstraction the menu is attached to

pub mod builder;
pub mod dom;
pub mod page;

pub use builder::MenuBuilder;
pub use dom::Element;
pub use page::{Page, RenderedPage};
