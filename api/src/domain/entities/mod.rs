//! Domain entities
//!
//! Pure domain models representing core business concepts.

pub mod testimonial;

pub use testimonial::{NewTestimonial, Testimonial, TestimonialId, TestimonialPatch};
