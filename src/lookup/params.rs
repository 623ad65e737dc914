//! Query parameter parsing for the expert lookup endpoint.
//!
//! Turns the raw `sub_id` and `select` query parameters into a validated
//! [`LookupRequest`]. Splitting is the same for both parameters: split on
//! commas, trim whitespace, drop empty parts. Values are opaque: no
//! deduplication, no validation against a known field set, order preserved.

use crate::error::LookupError;

/// Field list forwarded to the store when `select` is absent.
pub const DEFAULT_SELECT_FIELD: &str = "orcid";

/// Default cap on identifiers accepted per request.
///
/// The upstream store places no bound of its own, so the gateway enforces
/// one to keep the generated filter clause a sane size.
pub const DEFAULT_MAX_SUB_IDS: usize = 200;

/// Split a comma-separated parameter into trimmed, non-empty parts.
pub fn split_list(raw: &str) -> Vec<String> {
    raw.split(',')
        .map(str::trim)
        .filter(|part| !part.is_empty())
        .map(str::to_string)
        .collect()
}

/// A validated lookup request, parsed per call and never persisted.
///
/// Invariant: `identifiers` and `fields` are non-empty by construction.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct LookupRequest {
    /// Identifier values matched against the store's `sub_id` column
    pub identifiers: Vec<String>,

    /// Column names the store should return
    pub fields: Vec<String>,
}

impl LookupRequest {
    /// Build a request from the raw query parameters.
    ///
    /// # Arguments
    ///
    /// * `sub_id` - Raw `sub_id` parameter value, if present
    /// * `select` - Raw `select` parameter value, if present
    /// * `max_ids` - Cap on accepted identifiers
    ///
    /// # Errors
    ///
    /// Returns [`LookupError::MissingSubIds`] when `sub_id` is absent or
    /// resolves to an empty list, and [`LookupError::TooManySubIds`] when
    /// the list exceeds `max_ids`. Validation happens before any store
    /// contact.
    pub fn from_query(
        sub_id: Option<&str>,
        select: Option<&str>,
        max_ids: usize,
    ) -> Result<Self, LookupError> {
        let identifiers = sub_id.map(split_list).unwrap_or_default();

        if identifiers.is_empty() {
            return Err(LookupError::MissingSubIds);
        }

        if identifiers.len() > max_ids {
            return Err(LookupError::TooManySubIds {
                count: identifiers.len(),
                max: max_ids,
            });
        }

        let fields = match select {
            Some(raw) => {
                let fields = split_list(raw);
                if fields.is_empty() {
                    vec![DEFAULT_SELECT_FIELD.to_string()]
                } else {
                    fields
                }
            }
            None => vec![DEFAULT_SELECT_FIELD.to_string()],
        };

        Ok(Self {
            identifiers,
            fields,
        })
    }
}

// =============================================================================
// Tests
// =============================================================================
