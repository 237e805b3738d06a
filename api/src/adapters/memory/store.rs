//! In-memory testimonial store
//!
//! A `Vec` behind an `RwLock`, plus a monotonic id counter. Lookups are
//! linear scans; removal preserves the relative order of the remaining
//! records. The counter never goes backwards, so ids stay unique across
//! the process lifetime even after deletions.

use std::sync::atomic::{AtomicU64, Ordering};
use std::sync::RwLock;

use async_trait::async_trait;

use crate::domain::entities::{Testimonial, TestimonialId};
use crate::domain::ports::TestimonialStore;
use crate::error::DomainError;

#[derive(Default)]
pub struct MemoryTestimonialStore {
    records: RwLock<Vec<Testimonial>>,
    next_id: AtomicU64,
}

impl MemoryTestimonialStore {
    pub fn new() -> Self {
        Self {
            records: RwLock::new(Vec::new()),
            next_id: AtomicU64::new(1),
        }
    }

    /// Pre-populate the store, seeding the id counter past the highest
    /// numeric id found so new ids never collide with existing ones.
    pub fn with_records(records: Vec<Testimonial>) -> Self {
        let highest = records
            .iter()
            .filter_map(|r| r.id.0.parse::<u64>().ok())
            .max()
            .unwrap_or(0);
        Self {
            records: RwLock::new(records),
            next_id: AtomicU64::new(highest + 1),
        }
    }

    fn read(&self) -> Result<std::sync::RwLockReadGuard<'_, Vec<Testimonial>>, DomainError> {
        self.records
            .read()
            .map_err(|_| DomainError::Internal("store lock poisoned".to_string()))
    }

    fn write(&self) -> Result<std::sync::RwLockWriteGuard<'_, Vec<Testimonial>>, DomainError> {
        self.records
            .write()
            .map_err(|_| DomainError::Internal("store lock poisoned".to_string()))
    }
}

#[async_trait]
impl TestimonialStore for MemoryTestimonialStore {
    async fn all(&self) -> Result<Vec<Testimonial>, DomainError> {
        Ok(self.read()?.clone())
    }

    async fn find_by_id(&self, id: &TestimonialId) -> Result<Option<Testimonial>, DomainError> {
        Ok(self.read()?.iter().find(|r| &r.id == id).cloned())
    }

    async fn append(&self, record: Testimonial) -> Result<(), DomainError> {
        self.write()?.push(record);
        Ok(())
    }

    async fn replace(&self, record: Testimonial) -> Result<bool, DomainError> {
        let mut records = self.write()?;
        match records.iter().position(|r| r.id == record.id) {
            Some(index) => {
                records[index] = record;
                Ok(true)
            }
            None => Ok(false),
        }
    }

    async fn remove(&self, id: &TestimonialId) -> Result<bool, DomainError> {
        let mut records = self.write()?;
        match records.iter().position(|r| &r.id == id) {
            Some(index) => {
                records.remove(index);
                Ok(true)
            }
            None => Ok(false),
        }
    }

    async fn next_id(&self) -> Result<TestimonialId, DomainError> {
        Ok(TestimonialId::from(
            self.next_id.fetch_add(1, Ordering::SeqCst),
        ))
    }
}
