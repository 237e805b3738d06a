//! Testimonial domain entity
//!
//! A customer-quote record with rating, attribution, and classification
//! metadata. Field names serialize in camelCase to match the public JSON
//! contract (`createdAt`, `updatedAt`).

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

/// Unique identifier for a testimonial
///
/// Ids are sequential decimal strings assigned by the store's monotonic
/// counter, so they remain unique even after deletions.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(transparent)]
pub struct TestimonialId(pub String);

impl From<&str> for TestimonialId {
    fn from(id: &str) -> Self {
        Self(id.to_string())
    }
}

impl From<String> for TestimonialId {
    fn from(id: String) -> Self {
        Self(id)
    }
}

impl From<u64> for TestimonialId {
    fn from(n: u64) -> Self {
        Self(n.to_string())
    }
}

impl std::fmt::Display for TestimonialId {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.0)
    }
}

/// A published testimonial
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Testimonial {
    pub id: TestimonialId,
    pub name: String,
    pub role: String,
    pub company: String,
    /// The quoted review body
    pub content: String,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub avatar: Option<String>,
    /// Star rating in [1, 5]; validated at the API boundary
    #[serde(skip_serializing_if = "Option::is_none")]
    pub rating: Option<i32>,
    /// Selects the homepage-highlighted subset; absent means false
    #[serde(skip_serializing_if = "Option::is_none")]
    pub featured: Option<bool>,
    /// Free-text category used for exact-match filtering
    #[serde(skip_serializing_if = "Option::is_none")]
    pub industry: Option<String>,
    /// Display-only
    #[serde(skip_serializing_if = "Option::is_none")]
    pub location: Option<String>,
    pub created_at: DateTime<Utc>,
    pub updated_at: DateTime<Utc>,
}

impl Testimonial {
    pub fn is_featured(&self) -> bool {
        self.featured.unwrap_or(false)
    }
}

/// Data needed to create a new testimonial (no system fields)
#[derive(Debug, Clone)]
pub struct NewTestimonial {
    pub name: String,
    pub role: String,
    pub company: String,
    pub content: String,
    pub avatar: Option<String>,
    pub rating: Option<i32>,
    pub featured: Option<bool>,
    pub industry: Option<String>,
    pub location: Option<String>,
}

impl NewTestimonial {
    /// Materialize the draft into a full record with system fields assigned
    pub fn into_record(self, id: TestimonialId, now: DateTime<Utc>) -> Testimonial {
        Testimonial {
            id,
            name: self.name,
            role: self.role,
            company: self.company,
            content: self.content,
            avatar: self.avatar,
            rating: self.rating,
            featured: self.featured,
            industry: self.industry,
            location: self.location,
            created_at: now,
            updated_at: now,
        }
    }
}

/// Partial update for a testimonial
///
/// Carries only the mutable fields: `id` and `created_at` cannot be
/// expressed here, so a merge can never change identity or creation time.
/// `Some` overwrites the field, `None` preserves it.
#[derive(Debug, Clone, Default)]
pub struct TestimonialPatch {
    pub name: Option<String>,
    pub role: Option<String>,
    pub company: Option<String>,
    pub content: Option<String>,
    pub avatar: Option<String>,
    pub rating: Option<i32>,
    pub featured: Option<bool>,
    pub industry: Option<String>,
    pub location: Option<String>,
}

impl TestimonialPatch {
    /// Shallow-merge the patch onto `record`, leaving system fields alone
    pub fn apply(self, record: &mut Testimonial) {
        if let Some(name) = self.name {
            record.name = name;
        }
        if let Some(role) = self.role {
            record.role = role;
        }
        if let Some(company) = self.company {
            record.company = company;
        }
        if let Some(content) = self.content {
            record.content = content;
        }
        if let Some(avatar) = self.avatar {
            record.avatar = Some(avatar);
        }
        if let Some(rating) = self.rating {
            record.rating = Some(rating);
        }
        if let Some(featured) = self.featured {
            record.featured = Some(featured);
        }
        if let Some(industry) = self.industry {
            record.industry = Some(industry);
        }
        if let Some(location) = self.location {
            record.location = Some(location);
        }
    }
}
