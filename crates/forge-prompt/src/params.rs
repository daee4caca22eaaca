//! Loosely typed template parameters.

use std::collections::BTreeMap;

use serde::{Deserialize, Serialize};

/// A single template parameter: free text or a list of items.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(untagged)]
pub enum ParamValue {
    Text(String),
    List(Vec<String>),
}

/// Named parameters a template is rendered from.
///
/// Lookups never fail. A missing key reads as an empty string or empty list.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct TemplateParams(BTreeMap<String, ParamValue>);

impl TemplateParams {
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    #[must_use]
    pub fn with_text(mut self, key: &str, value: impl Into<String>) -> Self {
        self.0.insert(key.to_string(), ParamValue::Text(value.into()));
        self
    }

    #[must_use]
    pub fn with_list<I, S>(mut self, key: &str, items: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        let items = items.into_iter().map(Into::into).collect();
        self.0.insert(key.to_string(), ParamValue::List(items));
        self
    }

    /// Text value for `key`. Lists are joined with `", "`.
    #[must_use]
    pub fn text(&self, key: &str) -> String {
        match self.0.get(key) {
            Some(ParamValue::Text(text)) => text.clone(),
            Some(ParamValue::List(items)) => items.join(", "),
            None => String::new(),
        }
    }

    /// List value for `key`. A text value is a one-item list unless empty.
    #[must_use]
    pub fn list(&self, key: &str) -> Vec<String> {
        match self.0.get(key) {
            Some(ParamValue::List(items)) => items.clone(),
            Some(ParamValue::Text(text)) if !text.is_empty() => vec![text.clone()],
            _ => Vec::new(),
        }
    }

    /// List value for `key` rendered as `- item` lines.
    #[must_use]
    pub fn bullets(&self, key: &str) -> String {
        self.list(key)
            .iter()
            .map(|item| format!("- {item}"))
            .collect::<Vec<_>>()
            .join("\n")
    }
}
