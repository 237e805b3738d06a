//! Testimonial handlers
//!
//! Stateless translation between HTTP requests and the testimonial
//! service. Every response body is the `{success, data|error}` envelope
//! the carousel client branches on; that shape must not change.

use axum::{
    extract::{Path, Query, State},
    http::StatusCode,
    Json,
};
use serde::{Deserialize, Serialize};

use crate::domain::entities::{NewTestimonial, Testimonial, TestimonialId, TestimonialPatch};
use crate::error::AppError;
use crate::AppState;

/// Query parameters for listing testimonials
#[derive(Debug, Deserialize)]
pub struct ListTestimonialsQuery {
    /// `featured=true` wins over `industry` when both are given
    pub featured: Option<bool>,
    pub industry: Option<String>,
}

/// Envelope for list responses
#[derive(Debug, Serialize)]
pub struct ListResponse {
    pub success: bool,
    pub data: Vec<Testimonial>,
    pub count: usize,
}

/// Envelope for single-record responses
#[derive(Debug, Serialize)]
pub struct ItemResponse {
    pub success: bool,
    pub data: Testimonial,
}

/// Envelope for delete responses
#[derive(Debug, Serialize)]
pub struct DeleteResponse {
    pub success: bool,
    pub message: String,
}

/// Request to create a testimonial
///
/// Required fields are `Option` so presence is checked here, with the
/// first missing field reported by name, instead of an opaque
/// deserialization rejection.
#[derive(Debug, Deserialize)]
pub struct CreateTestimonialRequest {
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

impl CreateTestimonialRequest {
    /// Presence and range checks; the service does not re-validate
    fn validate(self) -> Result<NewTestimonial, AppError> {
        let name = require_field(self.name, "name")?;
        let role = require_field(self.role, "role")?;
        let company = require_field(self.company, "company")?;
        let content = require_field(self.content, "content")?;
        validate_rating(self.rating)?;

        Ok(NewTestimonial {
            name,
            role,
            company,
            content,
            avatar: self.avatar,
            rating: self.rating,
            featured: self.featured,
            industry: self.industry,
            location: self.location,
        })
    }
}

/// Request to update a testimonial; any subset of mutable fields.
/// `id` and `createdAt` are not representable here, so a request body
/// carrying them cannot mutate identity or creation time.
#[derive(Debug, Default, Deserialize)]
pub struct UpdateTestimonialRequest {
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

impl UpdateTestimonialRequest {
    fn validate(self) -> Result<TestimonialPatch, AppError> {
        validate_rating(self.rating)?;
        Ok(TestimonialPatch {
            name: self.name,
            role: self.role,
            company: self.company,
            content: self.content,
            avatar: self.avatar,
            rating: self.rating,
            featured: self.featured,
            industry: self.industry,
            location: self.location,
        })
    }
}

fn require_field(value: Option<String>, field: &str) -> Result<String, AppError> {
    match value {
        Some(v) if !v.is_empty() => Ok(v),
        _ => Err(AppError::Validation(format!(
            "Missing required field: {}",
            field
        ))),
    }
}

fn validate_rating(rating: Option<i32>) -> Result<(), AppError> {
    match rating {
        Some(r) if !(1..=5).contains(&r) => Err(AppError::Validation(
            "Rating must be between 1 and 5".to_string(),
        )),
        _ => Ok(()),
    }
}

/// GET /testimonials
///
/// List testimonials, optionally filtered by `featured=true` or an
/// exact `industry` match. Always sorted newest first.
pub async fn list_testimonials(
    State(state): State<AppState>,
    Query(query): Query<ListTestimonialsQuery>,
) -> Result<Json<ListResponse>, AppError> {
    let testimonials = if query.featured == Some(true) {
        state.testimonial_service.get_featured().await?
    } else if let Some(industry) = query.industry.as_deref() {
        state.testimonial_service.get_by_industry(industry).await?
    } else {
        state.testimonial_service.get_all().await?
    };

    let count = testimonials.len();
    Ok(Json(ListResponse {
        success: true,
        data: testimonials,
        count,
    }))
}

/// GET /testimonials/:id
pub async fn get_testimonial(
    State(state): State<AppState>,
    Path(id): Path<String>,
) -> Result<Json<ItemResponse>, AppError> {
    let testimonial = state
        .testimonial_service
        .get_by_id(&TestimonialId::from(id))
        .await?
        .ok_or_else(|| AppError::NotFound("Testimonial not found".to_string()))?;

    Ok(Json(ItemResponse {
        success: true,
        data: testimonial,
    }))
}

/// POST /testimonials
pub async fn create_testimonial(
    State(state): State<AppState>,
    Json(request): Json<CreateTestimonialRequest>,
) -> Result<(StatusCode, Json<ItemResponse>), AppError> {
    let draft = request.validate()?;
    let testimonial = state.testimonial_service.create(draft).await?;

    Ok((
        StatusCode::CREATED,
        Json(ItemResponse {
            success: true,
            data: testimonial,
        }),
    ))
}

/// PUT /testimonials/:id
pub async fn update_testimonial(
    State(state): State<AppState>,
    Path(id): Path<String>,
    Json(request): Json<UpdateTestimonialRequest>,
) -> Result<Json<ItemResponse>, AppError> {
    let patch = request.validate()?;
    let testimonial = state
        .testimonial_service
        .update(&TestimonialId::from(id), patch)
        .await?
        .ok_or_else(|| AppError::NotFound("Testimonial not found".to_string()))?;

    Ok(Json(ItemResponse {
        success: true,
        data: testimonial,
    }))
}

/// DELETE /testimonials/:id
pub async fn delete_testimonial(
    State(state): State<AppState>,
    Path(id): Path<String>,
) -> Result<Json<DeleteResponse>, AppError> {
    let deleted = state
        .testimonial_service
        .delete(&TestimonialId::from(id))
        .await?;

    if !deleted {
        return Err(AppError::NotFound("Testimonial not found".to_string()));
    }

    Ok(Json(DeleteResponse {
        success: true,
        message: "Testimonial deleted successfully".to_string(),
    }))
}
