//! Carousel controller
//!
//! The data-driven core of the testimonial carousel: a
//! `Loading -> {Ready, Error}` state machine around the list fetch,
//! circular navigation over the fetched items, and an optional
//! auto-advance timer. Rendering is the caller's concern.

use std::sync::atomic::{AtomicBool, AtomicU64, Ordering};
use std::sync::{Arc, Mutex};
use std::time::Duration;

use async_trait::async_trait;
use tokio::task::JoinHandle;

use crate::client::{ClientError, Testimonial};

/// Filter inputs for the list fetch
#[derive(Debug, Clone, Default)]
pub struct TestimonialFilter {
    pub featured: bool,
    pub industry: Option<String>,
}

/// Where the carousel gets its testimonials from
///
/// The HTTP client implements this; tests plug in stub sources.
#[async_trait]
pub trait TestimonialSource: Send + Sync + 'static {
    async fn fetch(&self, filter: &TestimonialFilter) -> Result<Vec<Testimonial>, ClientError>;
}

/// Auto-advance configuration
#[derive(Debug, Clone)]
pub struct CarouselOptions {
    pub auto_play: bool,
    pub interval: Duration,
}

impl Default for CarouselOptions {
    fn default() -> Self {
        Self {
            auto_play: true,
            interval: Duration::from_secs(5),
        }
    }
}

enum CarouselState {
    Loading,
    Ready { items: Vec<Testimonial>, index: usize },
    Error { message: String },
}

struct Inner {
    state: Mutex<CarouselState>,
    filter: Mutex<TestimonialFilter>,
    /// Fetch generation: a commit only lands if its generation is still
    /// the latest, so a superseded fetch's response is discarded.
    generation: AtomicU64,
    auto_play: AtomicBool,
    interval: Mutex<Duration>,
    timer: Mutex<Option<JoinHandle<()>>>,
}

impl Inner {
    /// Circular step forward; no-op unless ready with items
    fn advance(&self) {
        let mut state = self.state.lock().unwrap();
        if let CarouselState::Ready { items, index } = &mut *state {
            if !items.is_empty() {
                *index = (*index + 1) % items.len();
            }
        }
    }

    fn item_count(&self) -> usize {
        match &*self.state.lock().unwrap() {
            CarouselState::Ready { items, .. } => items.len(),
            _ => 0,
        }
    }

    fn cancel_timer(&self) {
        if let Some(handle) = self.timer.lock().unwrap().take() {
            handle.abort();
        }
    }
}

impl Drop for Inner {
    fn drop(&mut self) {
        self.cancel_timer();
    }
}

/// Drives a rotating single-item display over a fetched testimonial list
pub struct CarouselController<S>
where
    S: TestimonialSource,
{
    source: Arc<S>,
    inner: Arc<Inner>,
}

impl<S> CarouselController<S>
where
    S: TestimonialSource,
{
    pub fn new(source: Arc<S>, filter: TestimonialFilter, options: CarouselOptions) -> Self {
        Self {
            source,
            inner: Arc::new(Inner {
                state: Mutex::new(CarouselState::Loading),
                filter: Mutex::new(filter),
                generation: AtomicU64::new(0),
                auto_play: AtomicBool::new(options.auto_play),
                interval: Mutex::new(options.interval),
                timer: Mutex::new(None),
            }),
        }
    }

    /// Enter `Loading` and fetch with the current filter. If a newer
    /// load starts while this one is in flight, the stale result is
    /// dropped on return (latest request wins).
    pub async fn load(&self) {
        let generation = self.inner.generation.fetch_add(1, Ordering::SeqCst) + 1;
        *self.inner.state.lock().unwrap() = CarouselState::Loading;

        let filter = self.inner.filter.lock().unwrap().clone();
        let result = self.source.fetch(&filter).await;

        if self.inner.generation.load(Ordering::SeqCst) != generation {
            return;
        }

        *self.inner.state.lock().unwrap() = match result {
            Ok(items) => CarouselState::Ready { items, index: 0 },
            Err(err) => {
                tracing::warn!("Failed to load testimonials: {}", err);
                CarouselState::Error {
                    message: err.to_string(),
                }
            }
        };

        // List length may have changed.
        self.restart_timer();
    }

    /// Change the filter inputs and re-fetch
    pub async fn set_filter(&self, filter: TestimonialFilter) {
        *self.inner.filter.lock().unwrap() = filter;
        self.load().await;
    }

    /// Re-trigger the fetch after a failure; no-op outside `Error`
    pub async fn retry(&self) {
        let failed = matches!(
            &*self.inner.state.lock().unwrap(),
            CarouselState::Error { .. }
        );
        if failed {
            self.load().await;
        }
    }

    pub fn next(&self) {
        self.inner.advance();
    }

    pub fn previous(&self) {
        let mut state = self.inner.state.lock().unwrap();
        if let CarouselState::Ready { items, index } = &mut *state {
            if !items.is_empty() {
                *index = (*index + items.len() - 1) % items.len();
            }
        }
    }

    /// Absolute jump; out-of-range indexes are ignored
    pub fn go_to(&self, target: usize) {
        let mut state = self.inner.state.lock().unwrap();
        if let CarouselState::Ready { items, index } = &mut *state {
            if target < items.len() {
                *index = target;
            }
        }
    }

    pub fn current(&self) -> Option<Testimonial> {
        match &*self.inner.state.lock().unwrap() {
            CarouselState::Ready { items, index } => items.get(*index).cloned(),
            _ => None,
        }
    }

    pub fn current_index(&self) -> Option<usize> {
        match &*self.inner.state.lock().unwrap() {
            CarouselState::Ready { items, index } if !items.is_empty() => Some(*index),
            _ => None,
        }
    }

    pub fn item_count(&self) -> usize {
        self.inner.item_count()
    }

    pub fn is_loading(&self) -> bool {
        matches!(&*self.inner.state.lock().unwrap(), CarouselState::Loading)
    }

    pub fn error_message(&self) -> Option<String> {
        match &*self.inner.state.lock().unwrap() {
            CarouselState::Error { message } => Some(message.clone()),
            _ => None,
        }
    }

    pub fn set_auto_play(&self, enabled: bool) {
        self.inner.auto_play.store(enabled, Ordering::SeqCst);
        self.restart_timer();
    }

    pub fn set_interval(&self, interval: Duration) {
        *self.inner.interval.lock().unwrap() = interval;
        self.restart_timer();
    }

    /// Tear down and recreate the auto-advance task. Runs only while
    /// enabled and rotating between at least two items.
    fn restart_timer(&self) {
        self.inner.cancel_timer();

        if !self.inner.auto_play.load(Ordering::SeqCst) || self.inner.item_count() <= 1 {
            return;
        }

        let interval = *self.inner.interval.lock().unwrap();
        let inner = Arc::clone(&self.inner);
        let handle = tokio::spawn(async move {
            let mut ticker = tokio::time::interval(interval);
            // The first tick completes immediately; skip it.
            ticker.tick().await;
            loop {
                ticker.tick().await;
                inner.advance();
            }
        });

        *self.inner.timer.lock().unwrap() = Some(handle);
    }
}

impl<S> Drop for CarouselController<S>
where
    S: TestimonialSource,
{
    fn drop(&mut self) {
        self.inner.cancel_timer();
    }
}
