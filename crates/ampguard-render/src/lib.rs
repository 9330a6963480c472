//! Rendering of audit reports for people: the console text format and Markdown.

#![forbid(unsafe_code)]

mod markdown;
mod model;
mod text;

pub use markdown::render_markdown;
pub use model::{
    RenderableExclusion, RenderableExclusionGroup, RenderableFinding, RenderableHeader,
    RenderableReport, RenderableStatus,
};
pub use text::render_text;
