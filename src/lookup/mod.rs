//! Expert lookup pipeline.
//!
//! The lookup path is three independently testable stages joined by plain
//! data, not behavior:
//!
//! ```text
//! ┌──────────────────┐    ┌──────────────────┐    ┌──────────────────┐
//! │  params parsing  │ →  │  ExpertLookup    │ →  │  response shape  │
//! │  (LookupRequest) │    │  (one store read)│    │  (server module) │
//! └──────────────────┘    └──────────────────┘    └──────────────────┘
//! ```
//!
//! [`params`] normalizes the raw query string into a [`LookupRequest`];
//! [`service`] issues exactly one filtered read against the external store
//! and returns the rows untouched. Neither stage retains state between
//! requests.

mod params;
mod service;

pub use params::{split_list, LookupRequest, DEFAULT_MAX_SUB_IDS, DEFAULT_SELECT_FIELD};
pub use service::ExpertLookup;
