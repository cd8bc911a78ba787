// SPDX-License-Identifier: GPL-3.0-only
use std::collections::{BTreeMap, HashMap};
use crate::forms::rules::{FieldKind, FieldRule};
use crate::utils::validate_url;

/// Raw submitted form values, keyed by field name.
pub type FormInput = HashMap<String, String>;

pub const REQUIRED_MESSAGE: &str = "This field is required.";
pub const INVALID_URL_MESSAGE: &str = "Invalid URL.";

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum FieldValue {
    Text(String),
    Flag(bool),
    Empty,
}

/// Normalized values of a form that passed validation.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct FieldBag {
    values: BTreeMap<&'static str, FieldValue>,
}

impl FieldBag {
    pub fn text(&self, name: &str) -> Option<&str> {
        match self.values.get(name) {
            Some(FieldValue::Text(text)) => Some(text.as_str()),
            _ => None,
        }
    }

    pub fn flag(&self, name: &str) -> bool {
        matches!(self.values.get(name), Some(FieldValue::Flag(true)))
    }
}

/// Per-field validation failures, one reason per field.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct FormErrors {
    errors: BTreeMap<String, String>,
}

impl FormErrors {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn single(field: &str, reason: impl Into<String>) -> Self {
        let mut errors = Self::new();
        errors.insert(field, reason);
        errors
    }

    pub fn insert(&mut self, field: &str, reason: impl Into<String>) {
        self.errors.insert(field.to_string(), reason.into());
    }

    pub fn get(&self, field: &str) -> Option<&str> {
        self.errors.get(field).map(String::as_str)
    }

    pub fn is_empty(&self) -> bool {
        self.errors.is_empty()
    }

    pub fn len(&self) -> usize {
        self.errors.len()
    }

    pub fn iter(&self) -> impl Iterator<Item = (&str, &str)> {
        self.errors.iter().map(|(k, v)| (k.as_str(), v.as_str()))
    }
}

/// Validate `input` against a rule table.
///
/// A value that is blank after trimming counts as missing. Accepted text is
/// trimmed unless the rule says otherwise. Every rule is checked so that all
/// failing fields are reported at once.
pub fn validate(rules: &[FieldRule], input: &FormInput) -> Result<FieldBag, FormErrors> {
    let mut bag = FieldBag::default();
    let mut errors = FormErrors::new();

    for rule in rules {
        let raw = input.get(rule.name).map(String::as_str).unwrap_or("");
        match check_field(rule, raw) {
            Ok(value) => {
                bag.values.insert(rule.name, value);
            }
            Err(reason) => errors.insert(rule.name, reason),
        }
    }

    if errors.is_empty() {
        Ok(bag)
    } else {
        Err(errors)
    }
}

fn check_field(rule: &FieldRule, raw: &str) -> Result<FieldValue, String> {
    let trimmed = raw.trim();

    if rule.kind == FieldKind::Boolean {
        // Unchecked boxes are simply not submitted
        return Ok(FieldValue::Flag(!matches!(trimmed, "" | "false")));
    }

    if trimmed.is_empty() {
        return if rule.required {
            Err(REQUIRED_MESSAGE.to_string())
        } else {
            Ok(FieldValue::Empty)
        };
    }

    let value = if rule.trim { trimmed } else { raw };

    if rule.kind == FieldKind::Url && validate_url(value).is_err() {
        return Err(INVALID_URL_MESSAGE.to_string());
    }

    Ok(FieldValue::Text(value.to_string()))
}
