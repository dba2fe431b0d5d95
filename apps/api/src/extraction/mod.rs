// Job description extraction: fetch a posting, pick the rule for its host, pull the text.

pub mod fetcher;
pub mod rules;
