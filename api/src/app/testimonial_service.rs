//! Testimonial service
//!
//! Business-level operations over the collection store: listing with
//! filters, timestamp management, id assignment, and CRUD. Every
//! operation awaits a configurable simulated I/O latency so the store
//! behaves like a real latency-bearing backend without blocking a
//! thread.

use std::sync::Arc;
use std::time::Duration;

use chrono::Utc;
use tokio::sync::Mutex;

use crate::domain::entities::{NewTestimonial, Testimonial, TestimonialId, TestimonialPatch};
use crate::domain::ports::TestimonialStore;
use crate::error::DomainError;

/// Service for reading and mutating testimonials
pub struct TestimonialService<S>
where
    S: TestimonialStore,
{
    store: Arc<S>,
    read_latency: Duration,
    write_latency: Duration,
    /// Serializes mutating operations across their full
    /// read-modify-write span, so concurrent requests cannot lose
    /// updates or interleave id assignment with the append.
    write_guard: Mutex<()>,
}

impl<S> TestimonialService<S>
where
    S: TestimonialStore,
{
    pub fn new(store: Arc<S>, read_latency: Duration, write_latency: Duration) -> Self {
        Self {
            store,
            read_latency,
            write_latency,
            write_guard: Mutex::new(()),
        }
    }

    /// Service with zero simulated latency, for tests
    #[cfg(test)]
    pub fn immediate(store: Arc<S>) -> Self {
        Self::new(store, Duration::ZERO, Duration::ZERO)
    }

    async fn simulate_io(&self, latency: Duration) {
        if !latency.is_zero() {
            tokio::time::sleep(latency).await;
        }
    }

    /// All testimonials, newest first
    pub async fn get_all(&self) -> Result<Vec<Testimonial>, DomainError> {
        self.simulate_io(self.read_latency).await;
        let mut records = self.store.all().await?;
        sort_newest_first(&mut records);
        Ok(records)
    }

    /// The featured subset, newest first
    pub async fn get_featured(&self) -> Result<Vec<Testimonial>, DomainError> {
        self.simulate_io(self.read_latency).await;
        let mut records = self.store.all().await?;
        records.retain(Testimonial::is_featured);
        sort_newest_first(&mut records);
        Ok(records)
    }

    /// Exact (case-sensitive) industry match, newest first
    pub async fn get_by_industry(&self, industry: &str) -> Result<Vec<Testimonial>, DomainError> {
        self.simulate_io(self.read_latency).await;
        let mut records = self.store.all().await?;
        records.retain(|r| r.industry.as_deref() == Some(industry));
        sort_newest_first(&mut records);
        Ok(records)
    }

    /// `Ok(None)` means not found; that is a normal outcome here
    pub async fn get_by_id(
        &self,
        id: &TestimonialId,
    ) -> Result<Option<Testimonial>, DomainError> {
        self.simulate_io(self.read_latency).await;
        self.store.find_by_id(id).await
    }

    /// Assign an id and timestamps, persist, and return the record.
    /// Field validation happened at the API boundary already.
    pub async fn create(&self, draft: NewTestimonial) -> Result<Testimonial, DomainError> {
        let _guard = self.write_guard.lock().await;
        self.simulate_io(self.write_latency).await;

        let id = self.store.next_id().await?;
        let record = draft.into_record(id, Utc::now());
        self.store.append(record.clone()).await?;
        Ok(record)
    }

    /// Shallow-merge the patch onto the existing record and re-stamp
    /// `updated_at`. `id` and `created_at` survive the merge untouched.
    pub async fn update(
        &self,
        id: &TestimonialId,
        patch: TestimonialPatch,
    ) -> Result<Option<Testimonial>, DomainError> {
        let _guard = self.write_guard.lock().await;
        self.simulate_io(self.write_latency).await;

        let Some(existing) = self.store.find_by_id(id).await? else {
            return Ok(None);
        };

        let mut updated = existing.clone();
        patch.apply(&mut updated);
        updated.id = existing.id;
        updated.created_at = existing.created_at;
        updated.updated_at = Utc::now();

        self.store.replace(updated.clone()).await?;
        Ok(Some(updated))
    }

    /// True if a record was removed, false if the id was not found
    pub async fn delete(&self, id: &TestimonialId) -> Result<bool, DomainError> {
        let _guard = self.write_guard.lock().await;
        self.simulate_io(self.write_latency).await;
        self.store.remove(id).await
    }
}

/// Descending by `created_at`, computed at read time
fn sort_newest_first(records: &mut [Testimonial]) {
    records.sort_by(|a, b| b.created_at.cmp(&a.created_at));
}
