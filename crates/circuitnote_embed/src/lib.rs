pub mod document;
pub mod html;
pub mod resolver;
pub mod token;

pub use document::{render_document, render_page};
pub use html::render_embed;
pub use resolver::{CircuitEmbed, ResolvedEmbed, ViewMode};
