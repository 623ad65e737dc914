//! External data store boundary.
//!
//! The gateway never manages the store's connections, schema, or migrations.
//! All it needs is one operation: a filtered read over the expert collection.
//! The [`ExpertStore`] trait is that seam; [`RestExpertStore`] is the
//! production implementation speaking the platform's REST dialect, and tests
//! substitute in-memory mocks.

mod rest;

use async_trait::async_trait;
use serde_json::Value;

use crate::error::StoreError;

pub use rest::RestExpertStore;

/// Name of the collection holding expert records.
pub const EXPERT_COLLECTION: &str = "academic_with_tags";

/// Column matched against the supplied identifiers.
pub const IDENTIFIER_COLUMN: &str = "sub_id";

/// Trait for reading expert records from an external store.
///
/// Implementations perform a single "select these columns where the
/// identifier column is in this set" read and return the rows as opaque
/// JSON values. Connection lifecycle, timeouts, and credentials are the
/// implementation's concern.
#[async_trait]
pub trait ExpertStore: Send + Sync {
    /// Fetch expert rows matching any of `sub_ids`, selecting only `fields`.
    ///
    /// An empty row set is a valid success. Errors carry the store's own
    /// message so the handler can pass it through to the caller.
    async fn fetch_experts(
        &self,
        fields: &[String],
        sub_ids: &[String],
    ) -> Result<Vec<Value>, StoreError>;
}
