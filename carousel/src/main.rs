//! Showcase carousel
//!
//! Terminal client for the showcase testimonial API. Fetches featured
//! testimonials and rotates through them, one quote at a time, with the
//! same navigation rules the web carousel uses.

mod client;
mod controller;

use std::sync::Arc;
use std::time::Duration;

use anyhow::Result;
use tracing_subscriber::EnvFilter;

use client::{ApiClient, Testimonial};
use controller::{CarouselController, CarouselOptions, TestimonialFilter};

fn render(testimonial: &Testimonial, position: usize, total: usize) {
    let stars = "*".repeat(testimonial.rating.unwrap_or(0).max(0) as usize);
    println!();
    println!("  [{}/{}] {}", position + 1, total, stars);
    println!("  \"{}\"", testimonial.content);
    println!(
        "  - {}, {} at {}",
        testimonial.name, testimonial.role, testimonial.company
    );
}

#[tokio::main]
async fn main() -> Result<()> {
    // Log to stderr so the rendered quotes own stdout
    tracing_subscriber::fmt()
        .with_env_filter(EnvFilter::from_default_env())
        .with_writer(std::io::stderr)
        .init();

    tracing::info!("Starting showcase carousel");

    let client = Arc::new(ApiClient::from_env()?);
    let controller = CarouselController::new(
        client,
        TestimonialFilter {
            featured: true,
            industry: None,
        },
        CarouselOptions {
            auto_play: true,
            interval: Duration::from_secs(5),
        },
    );

    controller.load().await;

    if let Some(message) = controller.error_message() {
        anyhow::bail!("Failed to load testimonials: {}", message);
    }
    if controller.item_count() == 0 {
        tracing::warn!("No testimonials to display");
        return Ok(());
    }

    tracing::info!("Loaded {} testimonials", controller.item_count());

    // Echo the current quote whenever the auto-advance timer moves it.
    let mut shown = None;
    loop {
        let index = controller.current_index();
        if index != shown {
            if let Some(testimonial) = controller.current() {
                render(
                    &testimonial,
                    index.unwrap_or(0),
                    controller.item_count(),
                );
            }
            shown = index;
        }
        tokio::time::sleep(Duration::from_millis(250)).await;
    }
}
