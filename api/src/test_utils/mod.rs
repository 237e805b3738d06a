//! Test utilities
//!
//! Fixtures and manual mock stores for unit testing. Manual mocks keep
//! the failure paths explicit; the production store is already
//! in-memory, so most tests use it directly.
//!
//! Note: the endpoint tests in `integration_tests` mount the real
//! router with the memory store. The AppState would need to be made
//! generic to push a mock store through the HTTP layer, so the fault
//! path is covered at the service layer plus the `AppError` response
//! mapping instead.

pub mod fixtures;
pub mod mocks;

pub use fixtures::*;
pub use mocks::*;
