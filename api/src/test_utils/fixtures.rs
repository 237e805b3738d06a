//! Test fixtures
//!
//! Factory functions for creating test data with sensible defaults.

use chrono::Utc;

use crate::domain::entities::{NewTestimonial, Testimonial, TestimonialId};

/// Create a test testimonial with a given id
pub fn test_testimonial(id: &str) -> Testimonial {
    let now = Utc::now();
    Testimonial {
        id: TestimonialId::from(id),
        name: format!("Reviewer {}", id),
        role: "Engineer".to_string(),
        company: "Acme".to_string(),
        content: "Works as advertised.".to_string(),
        avatar: None,
        rating: Some(5),
        featured: None,
        industry: None,
        location: None,
        created_at: now,
        updated_at: now,
    }
}

/// Create a minimal valid draft
pub fn test_draft() -> NewTestimonial {
    NewTestimonial {
        name: "A".to_string(),
        role: "B".to_string(),
        company: "C".to_string(),
        content: "D".to_string(),
        avatar: None,
        rating: None,
        featured: None,
        industry: None,
        location: None,
    }
}
