//! HTTP handlers
//!
//! Axum request handlers for the API endpoints.

pub mod testimonials;

pub use testimonials::{
    create_testimonial, delete_testimonial, get_testimonial, list_testimonials,
    update_testimonial,
};
