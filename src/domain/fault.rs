// SPDX-License-Identifier: MPL-2.0
//! Fault records and the catalog the monitor draws from.
//!
//! The catalog is compiled into the program. Codes are kept as literal
//! strings: `"051"` and `"43"` are both valid and are never re-padded.

use crate::error::CatalogError;
use std::collections::HashSet;

/// Support article linked from every built-in fault.
pub const SUPPORT_ARTICLE_URL: &str =
    "https://cmsosnow.service-now.com/kb?id=kb_article_view&sysparm_article=KB0021579";

/// A simulated fault definition.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct FaultRecord {
    pub code: String,
    pub message: String,
    pub url: String,
}

impl FaultRecord {
    #[must_use]
    pub fn new(code: impl Into<String>, message: impl Into<String>, url: impl Into<String>) -> Self {
        Self {
            code: code.into(),
            message: message.into(),
            url: url.into(),
        }
    }
}

/// Ordered, non-empty, immutable list of fault records.
///
/// Construction validates that the list is not empty and that no two records
/// share a code or a message, so index selection is always well defined.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Catalog {
    records: Vec<FaultRecord>,
}

impl Catalog {
    /// Builds a catalog from the given records.
    ///
    /// # Errors
    ///
    /// Returns [`CatalogError::Empty`] for an empty list, or a duplicate
    /// error naming the first repeated code or message.
    pub fn new(records: Vec<FaultRecord>) -> Result<Self, CatalogError> {
        if records.is_empty() {
            return Err(CatalogError::Empty);
        }

        let mut codes = HashSet::new();
        let mut messages = HashSet::new();
        for record in &records {
            if !codes.insert(record.code.as_str()) {
                return Err(CatalogError::DuplicateCode(record.code.clone()));
            }
            if !messages.insert(record.message.as_str()) {
                return Err(CatalogError::DuplicateMessage(record.message.clone()));
            }
        }

        Ok(Self { records })
    }

    /// The catalog shipped with the application.
    #[must_use]
    pub fn builtin() -> Self {
        Self {
            records: vec![
                FaultRecord::new("120", "Error 120: Network timeout", SUPPORT_ARTICLE_URL),
                FaultRecord::new(
                    "051",
                    "Error 051: Authentication failed",
                    SUPPORT_ARTICLE_URL,
                ),
                FaultRecord::new("43", "Error 43: Server unavailable", SUPPORT_ARTICLE_URL),
            ],
        }
    }

    #[must_use]
    pub fn len(&self) -> usize {
        self.records.len()
    }

    /// Always false; kept for API symmetry with `len`.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.records.is_empty()
    }

    #[must_use]
    pub fn get(&self, index: usize) -> Option<&FaultRecord> {
        self.records.get(index)
    }

    pub fn iter(&self) -> impl Iterator<Item = &FaultRecord> {
        self.records.iter()
    }

    #[must_use]
    pub fn records(&self) -> &[FaultRecord] {
        &self.records
    }
}

impl Default for Catalog {
    fn default() -> Self {
        Self::builtin()
    }
}
