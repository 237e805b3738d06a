//! Application layer
//!
//! Services coordinate between domain entities and ports.

pub mod testimonial_service;

pub use testimonial_service::TestimonialService;
