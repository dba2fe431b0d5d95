//! Extraction rules — hostname-keyed selection of job-description text from HTML.
//!
//! Each supported job board gets a map entry; every other host falls through
//! to the default class-based rule.

use std::collections::HashMap;

use scraper::{ElementRef, Html, Selector};
use thiserror::Error;
use tracing::debug;

pub const MICROSOFT_CAREERS_HOST: &str = "jobs.careers.microsoft.com";

#[derive(Debug, Error)]
pub enum ExtractionError {
    #[error("Invalid selector '{selector}': {reason}")]
    Selector {
        selector: &'static str,
        reason: String,
    },
}

/// How text is selected out of a parsed page.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum ExtractionRule {
    /// Elements matching `container` that have exactly `child_count`
    /// direct children matching `child`.
    Structural {
        container: &'static str,
        child: &'static str,
        child_count: usize,
    },
    /// Every element matching a class selector.
    Class { selector: &'static str },
}

impl ExtractionRule {
    /// Concatenated text of all matched elements, in document order.
    /// No match yields an empty string.
    pub fn extract(&self, document: &Html) -> Result<String, ExtractionError> {
        match self {
            ExtractionRule::Structural {
                container,
                child,
                child_count,
            } => {
                let container_selector = parse_selector(container)?;
                let child_selector = parse_selector(child)?;

                Ok(document
                    .select(&container_selector)
                    .filter(|el| matching_children(el, &child_selector) == *child_count)
                    .flat_map(|el| el.text())
                    .collect())
            }
            ExtractionRule::Class { selector } => {
                let selector = parse_selector(selector)?;
                Ok(document
                    .select(&selector)
                    .flat_map(|el| el.text())
                    .collect())
            }
        }
    }
}

fn matching_children(element: &ElementRef<'_>, selector: &Selector) -> usize {
    element
        .children()
        .filter_map(ElementRef::wrap)
        .filter(|child| selector.matches(child))
        .count()
}

fn parse_selector(selector: &'static str) -> Result<Selector, ExtractionError> {
    Selector::parse(selector).map_err(|e| ExtractionError::Selector {
        selector,
        reason: format!("{e:?}"),
    })
}

/// Hostname → rule table with a catch-all default.
#[derive(Debug, Clone)]
pub struct ExtractionRegistry {
    rules: HashMap<&'static str, ExtractionRule>,
    default_rule: ExtractionRule,
}

impl Default for ExtractionRegistry {
    fn default() -> Self {
        Self::new(ExtractionRule::Class {
            selector: ".job-description",
        })
        .with_rule(
            MICROSOFT_CAREERS_HOST,
            ExtractionRule::Structural {
                container: "div.ms-Stack",
                child: "div",
                child_count: 3,
            },
        )
    }
}

impl ExtractionRegistry {
    pub fn new(default_rule: ExtractionRule) -> Self {
        Self {
            rules: HashMap::new(),
            default_rule,
        }
    }

    pub fn with_rule(mut self, host: &'static str, rule: ExtractionRule) -> Self {
        self.rules.insert(host, rule);
        self
    }

    /// Exact hostname match, falling back to the default rule.
    pub fn rule_for(&self, host: &str) -> &ExtractionRule {
        self.rules.get(host).unwrap_or(&self.default_rule)
    }

    /// Parses `html` and applies the rule registered for `host`.
    pub fn extract(&self, host: &str, html: &str) -> Result<String, ExtractionError> {
        let document = Html::parse_document(html);
        let text = self.rule_for(host).extract(&document)?;

        if text.is_empty() {
            debug!(host, "Extraction rule matched no text");
        }
        Ok(text)
    }
}
