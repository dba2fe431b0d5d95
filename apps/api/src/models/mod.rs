pub mod document;
pub mod prompt;
