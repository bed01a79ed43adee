//! # Remote API Boundary
//!
//! The remote Datadog service is abstracted behind the [`DowntimesApi`]
//! trait so command logic never depends on a live HTTP endpoint.
//!
//! ## Implementations
//!
//! - [`http::DatadogClient`]: production client over `reqwest` (blocking)
//! - [`memory::InMemoryApi`]: in-memory fake for tests, including a failing
//!   variant for error-path coverage
//!
//! The trait covers exactly the six operations this tool consumes; it is
//! not a general Datadog client.

use crate::error::Result;
use crate::model::{Downtime, DowntimePatch};

pub mod http;
pub mod memory;

/// The remote downtime operations consumed by the commands.
///
/// Read operations take `&self`; operations that change remote state take
/// `&mut self` so test doubles can mutate without interior mutability.
pub trait DowntimesApi {
    /// Check that the configured credentials are accepted.
    fn validate(&self) -> Result<()>;

    /// Fetch one downtime by ID.
    fn get_downtime(&self, id: i64) -> Result<Downtime>;

    /// Fetch all current downtimes.
    fn list_downtimes(&self) -> Result<Vec<Downtime>>;

    /// Schedule a new downtime.
    fn create_downtime(&mut self, patch: &DowntimePatch) -> Result<Downtime>;

    /// Apply a partial update to an existing downtime.
    fn update_downtime(&mut self, id: i64, patch: &DowntimePatch) -> Result<Downtime>;

    /// Cancel a downtime by ID.
    fn cancel_downtime(&mut self, id: i64) -> Result<()>;
}
