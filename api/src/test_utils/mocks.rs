//! Mock store implementations
//!
//! `FailingStore` errors on every operation, for exercising the 500
//! path at the API boundary.

use async_trait::async_trait;

use crate::domain::entities::{Testimonial, TestimonialId};
use crate::domain::ports::TestimonialStore;
use crate::error::DomainError;

#[derive(Default)]
pub struct FailingStore;

impl FailingStore {
    pub fn new() -> Self {
        Self
    }

    fn fault<T>(&self) -> Result<T, DomainError> {
        Err(DomainError::Internal("backing store unavailable".to_string()))
    }
}

#[async_trait]
impl TestimonialStore for FailingStore {
    async fn all(&self) -> Result<Vec<Testimonial>, DomainError> {
        self.fault()
    }

    async fn find_by_id(&self, _id: &TestimonialId) -> Result<Option<Testimonial>, DomainError> {
        self.fault()
    }

    async fn append(&self, _record: Testimonial) -> Result<(), DomainError> {
        self.fault()
    }

    async fn replace(&self, _record: Testimonial) -> Result<bool, DomainError> {
        self.fault()
    }

    async fn remove(&self, _id: &TestimonialId) -> Result<bool, DomainError> {
        self.fault()
    }

    async fn next_id(&self) -> Result<TestimonialId, DomainError> {
        self.fault()
    }
}
