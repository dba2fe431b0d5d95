//! Markdown → HTML rendering for recommendation output.
//!
//! parse (pulldown-cmark) → transform (drop raw HTML from the model) → serialize.

use pulldown_cmark::{html, Event, Options, Parser};
use thiserror::Error;

#[derive(Debug, Error)]
#[error("Failed to render markdown: {0}")]
pub struct RenderError(String);

pub fn markdown_to_html(markdown: &str) -> Result<String, RenderError> {
    let mut options = Options::empty();
    options.insert(Options::ENABLE_TABLES);
    options.insert(Options::ENABLE_STRIKETHROUGH);

    let events =
        Parser::new_ext(markdown, options).filter(|event| !matches!(event, Event::Html(_)));

    let mut buffer = Vec::with_capacity(markdown.len() * 3 / 2);
    html::write_html(&mut buffer, events).map_err(|e| RenderError(e.to_string()))?;

    String::from_utf8(buffer).map_err(|e| RenderError(e.to_string()))
}
