use std::sync::Arc;
use std::sync::atomic::{AtomicBool, AtomicU64, Ordering};
use std::thread::{self, JoinHandle};
use std::time::Instant;

use parking_lot::{Condvar, Mutex};
use tracing::{debug, trace, warn};

use crate::controllers::explorer::{ExplorerError, WorkerSpawnError};
use crate::controllers::interactive::data::frame_data::FrameData;
use crate::controllers::interactive::errors::render_error::RenderError;
use crate::controllers::interactive::events::render_event::RenderEvent;
use crate::controllers::interactive::ports::frame_sink::FrameSink;
use crate::core::actions::navigate::{centre_on, zoom_at};
use crate::core::actions::render_frame::render_frame;
use crate::core::cache::value_cache::{CacheStats, ValueCache};
use crate::core::data::pixel_rect::PixelRect;
use crate::core::data::point::Point;
use crate::core::data::render_settings::RenderSettings;
use crate::core::data::viewport::ViewportState;
use crate::core::fractals::mandelbrot::algorithm::MandelbrotAlgorithmError;

#[derive(Debug, Clone, Copy)]
struct Job {
    generation: u64,
    viewport: ViewportState,
}

struct SharedState {
    pixel_rect: PixelRect,
    settings: RenderSettings,
    cache: Option<ValueCache>,
    generation: AtomicU64,
    last_completed_generation: AtomicU64,
    latest_job: Mutex<Option<Job>>,
    wake: Condvar,
    shutdown: AtomicBool,
    sink: Arc<dyn FrameSink>,
}

/// Non-blocking counterpart of [`MandelbrotExplorer`](crate::MandelbrotExplorer).
///
/// The viewport is updated as soon as a command is accepted; the matching frame
/// follows later through the sink. Superseded jobs are cancelled mid-render and
/// their frames are never delivered.
pub struct InteractiveController {
    shared: Arc<SharedState>,
    viewport: Mutex<ViewportState>,
    worker: Option<JoinHandle<()>>,
}

impl InteractiveController {
    /// Starts the worker and submits the initial frame as generation 1.
    pub fn new(
        pixel_rect: PixelRect,
        settings: RenderSettings,
        sink: Arc<dyn FrameSink>,
    ) -> Result<Self, ExplorerError> {
        if settings.max_iterations == 0 {
            return Err(MandelbrotAlgorithmError::ZeroMaxIterations.into());
        }

        let shared = Arc::new(SharedState {
            pixel_rect,
            settings,
            cache: settings.caching_enabled.then(ValueCache::new),
            generation: AtomicU64::new(0),
            last_completed_generation: AtomicU64::new(0),
            latest_job: Mutex::new(None),
            wake: Condvar::new(),
            shutdown: AtomicBool::new(false),
            sink,
        });

        let worker_shared = Arc::clone(&shared);
        let worker = thread::Builder::new()
            .name("render-worker".to_string())
            .spawn(move || Self::worker_loop(&worker_shared))
            .map_err(WorkerSpawnError::from)?;

        let controller = Self {
            shared,
            viewport: Mutex::new(ViewportState::default()),
            worker: Some(worker),
        };
        controller.refresh();

        Ok(controller)
    }

    pub fn zoom(&self, pixel: Point, factor: f64) -> Result<u64, ExplorerError> {
        let mut viewport = self.viewport.lock();
        let next = zoom_at(*viewport, self.shared.pixel_rect, pixel, factor)?;
        *viewport = next;

        Ok(self.submit(next))
    }

    pub fn centre(&self, pixel: Point) -> Result<u64, ExplorerError> {
        let mut viewport = self.viewport.lock();
        let next = centre_on(*viewport, self.shared.pixel_rect, pixel)?;
        *viewport = next;

        Ok(self.submit(next))
    }

    pub fn refresh(&self) -> u64 {
        let viewport = self.viewport.lock();

        self.submit(*viewport)
    }

    #[must_use]
    pub fn viewport(&self) -> ViewportState {
        *self.viewport.lock()
    }

    #[must_use]
    pub fn cache_stats(&self) -> Option<CacheStats> {
        self.shared.cache.as_ref().map(ValueCache::stats)
    }

    #[must_use]
    pub fn last_completed_generation(&self) -> u64 {
        self.shared
            .last_completed_generation
            .load(Ordering::Acquire)
    }

    pub fn shutdown(&mut self) {
        {
            // held so the worker cannot miss the wakeup between its check and its wait
            let _guard = self.shared.latest_job.lock();
            self.shared.shutdown.store(true, Ordering::Release);
        }
        self.shared.wake.notify_one();

        if let Some(handle) = self.worker.take() {
            if handle.join().is_err() {
                warn!("render worker panicked");
            }
        }
    }

    fn submit(&self, viewport: ViewportState) -> u64 {
        let generation = self.shared.generation.fetch_add(1, Ordering::SeqCst) + 1;

        *self.shared.latest_job.lock() = Some(Job {
            generation,
            viewport,
        });
        self.shared.wake.notify_one();

        trace!(generation, zoom = viewport.zoom(), "submitted render");

        generation
    }

    fn worker_loop(shared: &SharedState) {
        loop {
            let job = {
                let mut guard = shared.latest_job.lock();
                loop {
                    if shared.shutdown.load(Ordering::Acquire) {
                        return;
                    }

                    if let Some(job) = guard.take() {
                        break job;
                    }

                    shared.wake.wait(&mut guard);
                }
            };

            let cancel_token = || {
                shared.shutdown.load(Ordering::Relaxed)
                    || job.generation != shared.generation.load(Ordering::Relaxed)
            };

            let start = Instant::now();
            let result = render_frame(
                shared.pixel_rect,
                shared.settings,
                job.viewport,
                shared.cache.as_ref(),
                &cancel_token,
            );
            let render_duration = start.elapsed();

            let event = match result {
                Ok(pixel_buffer) => RenderEvent::Frame(FrameData {
                    generation: job.generation,
                    viewport: job.viewport,
                    pixel_buffer,
                    render_duration,
                }),
                Err(err) if err.is_cancelled() => {
                    debug!(generation = job.generation, "render superseded");
                    continue;
                }
                Err(err) => {
                    warn!(generation = job.generation, %err, "render failed");
                    RenderEvent::Error(RenderError {
                        generation: job.generation,
                        message: err.to_string(),
                    })
                }
            };

            if job.generation != shared.generation.load(Ordering::Acquire) {
                debug!(generation = job.generation, "dropping stale frame");
                continue;
            }

            debug!(
                generation = job.generation,
                elapsed_ms = render_duration.as_millis() as u64,
                "render complete"
            );

            shared.sink.submit(event);
            shared
                .last_completed_generation
                .store(job.generation, Ordering::Release);
        }
    }
}

impl Drop for InteractiveController {
    fn drop(&mut self) {
        self.shutdown();
    }
}
