// Copyright 2026, Jeroen van Erp <jeroen@geeko.me>
// SPDX-License-Identifier: Apache-2.0

//! Field selectors over the object an event is about.
//!
//! A selector is a set of `path=value` equality clauses the API server applies
//! when listing events. Clauses keep their insertion order so the serialized
//! form is stable: `involvedObject.name=web-0,involvedObject.kind=Pod`.

use crate::constants::fields;
use std::fmt;

/// Ordered set of equality clauses, keyed by field path
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct FieldSelector {
    clauses: Vec<(String, String)>,
}

impl FieldSelector {
    pub fn new() -> Self {
        Self::default()
    }

    /// Require `path` to equal `value`. An existing clause for the same path is
    /// replaced in place.
    pub fn insert(&mut self, path: impl Into<String>, value: impl Into<String>) {
        let path = path.into();
        let value = value.into();
        match self.clauses.iter_mut().find(|(p, _)| *p == path) {
            Some((_, v)) => *v = value,
            None => self.clauses.push((path, value)),
        }
    }

    pub fn get(&self, path: &str) -> Option<&str> {
        self.clauses
            .iter()
            .find(|(p, _)| p == path)
            .map(|(_, v)| v.as_str())
    }

    pub fn len(&self) -> usize {
        self.clauses.len()
    }

    pub fn is_empty(&self) -> bool {
        self.clauses.is_empty()
    }

    pub fn iter(&self) -> impl Iterator<Item = (&str, &str)> {
        self.clauses.iter().map(|(p, v)| (p.as_str(), v.as_str()))
    }
}

impl fmt::Display for FieldSelector {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        for (i, (path, value)) in self.clauses.iter().enumerate() {
            if i > 0 {
                f.write_str(",")?;
            }
            write!(f, "{}={}", path, escape_value(value))?;
        }
        Ok(())
    }
}

/// Escape the characters that are significant in the selector grammar
fn escape_value(value: &str) -> String {
    let mut escaped = String::with_capacity(value.len());
    for c in value.chars() {
        if matches!(c, '\\' | ',' | '=') {
            escaped.push('\\');
        }
        escaped.push(c);
    }
    escaped
}

/// Field path holding the involved object's name for the given API version.
///
/// Every version served today uses the same path; the lookup exists so a future
/// version can rename the field without touching call sites.
pub fn involved_object_name_field_label(api_version: &str) -> &'static str {
    match api_version {
        _ => fields::INVOLVED_OBJECT_NAME,
    }
}

/// Build a selector matching events about an involved object.
///
/// Only the arguments that are present become clauses, in the order name,
/// namespace, kind, uid.
pub fn build_field_selector(
    api_version: &str,
    name: Option<&str>,
    namespace: Option<&str>,
    kind: Option<&str>,
    uid: Option<&str>,
) -> FieldSelector {
    let mut selector = FieldSelector::new();
    if let Some(name) = name {
        selector.insert(involved_object_name_field_label(api_version), name);
    }
    if let Some(namespace) = namespace {
        selector.insert(fields::INVOLVED_OBJECT_NAMESPACE, namespace);
    }
    if let Some(kind) = kind {
        selector.insert(fields::INVOLVED_OBJECT_KIND, kind);
    }
    if let Some(uid) = uid {
        selector.insert(fields::INVOLVED_OBJECT_UID, uid);
    }
    selector
}
