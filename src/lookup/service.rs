//! Filtered lookup dispatcher.
//!
//! Issues exactly one read per request against the external store: select
//! the requested fields from the expert collection, restricted to rows whose
//! identifier column matches any of the supplied identifiers.

use std::sync::Arc;

use serde_json::Value;
use tracing::debug;

use crate::error::StoreError;
use crate::store::ExpertStore;

use super::LookupRequest;

/// Dispatches validated lookup requests to an [`ExpertStore`].
///
/// Stateless between requests; the only held state is the injected store
/// client, constructed once per process and reused. No retries, no ordering,
/// no pagination: the full matching set comes back as-is, and an empty set
/// is a success.
pub struct ExpertLookup<S: ExpertStore> {
    store: Arc<S>,
}

impl<S: ExpertStore> ExpertLookup<S> {
    /// Create a new dispatcher around the given store client.
    pub fn new(store: S) -> Self {
        Self {
            store: Arc::new(store),
        }
    }

    /// Access the underlying store client.
    pub fn store(&self) -> &S {
        &self.store
    }

    /// Perform the single filtered read for a validated request.
    ///
    /// Rows are returned verbatim; the dispatcher never inspects their
    /// contents. Store failures of any kind surface as [`StoreError`]
    /// without subtype distinction here.
    pub async fn fetch(&self, request: &LookupRequest) -> Result<Vec<Value>, StoreError> {
        debug!(
            identifiers = request.identifiers.len(),
            fields = request.fields.len(),
            "dispatching expert lookup"
        );

        self.store
            .fetch_experts(&request.fields, &request.identifiers)
            .await
    }
}

impl<S: ExpertStore> Clone for ExpertLookup<S> {
    fn clone(&self) -> Self {
        Self {
            store: Arc::clone(&self.store),
        }
    }
}

// =============================================================================
// Tests
// =============================================================================
