// mod.rs - Input loaders

pub mod csv;
pub mod html;

pub use html::{extract_links, link_regex};
