//! Adapters
//!
//! Concrete implementations of domain ports.

pub mod memory;

pub use memory::{seed_testimonials, MemoryTestimonialStore};
