//! Demo testimonials
//!
//! The records the marketing site ships with. Loaded at startup unless
//! `SHOWCASE_SEED_DEMO_DATA` disables them.

use chrono::{DateTime, Utc};

use crate::domain::entities::{Testimonial, TestimonialId};

#[allow(clippy::too_many_arguments)]
fn record(
    id: &str,
    name: &str,
    role: &str,
    company: &str,
    content: &str,
    rating: i32,
    featured: bool,
    industry: &str,
    location: &str,
    created_at: &str,
) -> Testimonial {
    let created_at: DateTime<Utc> = created_at.parse().expect("valid seed timestamp");
    Testimonial {
        id: TestimonialId::from(id),
        name: name.to_string(),
        role: role.to_string(),
        company: company.to_string(),
        content: content.to_string(),
        avatar: Some("/api/placeholder/64/64".to_string()),
        rating: Some(rating),
        featured: Some(featured),
        industry: Some(industry.to_string()),
        location: Some(location.to_string()),
        created_at,
        updated_at: created_at,
    }
}

pub fn seed_testimonials() -> Vec<Testimonial> {
    vec![
        record(
            "1",
            "Sarah Johnson",
            "CEO",
            "TechForward",
            "This platform has completely transformed how we approach digital innovation. \
             The results have exceeded all our expectations, and our team's productivity \
             has increased by 200%.",
            5,
            true,
            "Technology",
            "San Francisco, CA",
            "2024-01-15T10:00:00Z",
        ),
        record(
            "2",
            "Michael Chen",
            "CTO",
            "DataFlow Solutions",
            "The most intuitive and powerful web platform we've ever used. Our development \
             cycle has been cut in half, and our team's productivity has increased \
             dramatically.",
            5,
            true,
            "Data Analytics",
            "New York, NY",
            "2024-01-20T14:30:00Z",
        ),
        record(
            "3",
            "Emily Rodriguez",
            "Head of Design",
            "Creative Labs",
            "Beautiful design meets powerful functionality. It's exactly what we needed to \
             bring our creative vision to life. The design system is incredibly well \
             thought out.",
            5,
            true,
            "Creative Services",
            "Los Angeles, CA",
            "2024-02-01T09:15:00Z",
        ),
        record(
            "4",
            "David Kim",
            "Product Manager",
            "InnovateNow",
            "The analytics and insights provided by this platform have been game-changing \
             for our product development process. We can make data-driven decisions faster \
             than ever.",
            5,
            false,
            "Product Development",
            "Seattle, WA",
            "2024-02-10T16:20:00Z",
        ),
        record(
            "5",
            "Lisa Thompson",
            "VP of Engineering",
            "ScaleUp Ventures",
            "The platform's scalability is phenomenal. We went from handling 1,000 users to \
             over 100,000 without any infrastructure changes. The auto-scaling just works.",
            5,
            false,
            "Venture Capital",
            "Austin, TX",
            "2024-02-15T11:45:00Z",
        ),
        record(
            "6",
            "James Wilson",
            "Founder",
            "EcoSolutions",
            "As a sustainability-focused company, we appreciate the platform's commitment \
             to green technology. Our carbon footprint has decreased while our performance \
             improved.",
            4,
            false,
            "Environmental Technology",
            "Portland, OR",
            "2024-02-20T13:10:00Z",
        ),
    ]
}
