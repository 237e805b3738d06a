//! Collection store port
//!
//! Primitive operations over the authoritative set of testimonials.
//! Ordering of listings is the service's responsibility; `all` makes no
//! ordering promise beyond insertion order.

use async_trait::async_trait;

use crate::domain::entities::{Testimonial, TestimonialId};
use crate::error::DomainError;

/// Backing store for testimonial records
#[async_trait]
pub trait TestimonialStore: Send + Sync {
    /// Snapshot of every record, in insertion order
    async fn all(&self) -> Result<Vec<Testimonial>, DomainError>;

    /// Exact-match lookup; `None` is a normal outcome, not a fault
    async fn find_by_id(&self, id: &TestimonialId) -> Result<Option<Testimonial>, DomainError>;

    /// Append a record. The caller guarantees id uniqueness by assigning
    /// ids from `next_id`; no duplicate check happens here.
    async fn append(&self, record: Testimonial) -> Result<(), DomainError>;

    /// Write back an updated record. Returns false if the id is absent.
    async fn replace(&self, record: Testimonial) -> Result<bool, DomainError>;

    /// Remove the record with this id, preserving the relative order of
    /// the rest. Returns false if the id is absent.
    async fn remove(&self, id: &TestimonialId) -> Result<bool, DomainError>;

    /// Next id from the monotonic counter stored alongside the
    /// collection. Ids are never reused, even after deletions.
    async fn next_id(&self) -> Result<TestimonialId, DomainError>;
}
