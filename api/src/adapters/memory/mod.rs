//! In-memory store adapter
//!
//! The collection has no persistence by design: all state lives for the
//! process lifetime and is lost on restart.

pub mod seed;
pub mod store;

pub use seed::seed_testimonials;
pub use store::MemoryTestimonialStore;
