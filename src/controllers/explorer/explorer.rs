use std::time::Instant;

use tracing::{debug, info, warn};

use crate::controllers::explorer::errors::ExplorerError;
use crate::core::actions::cancellation::NeverCancel;
use crate::core::actions::navigate::{centre_on, zoom_at};
use crate::core::actions::render_frame::render_frame;
use crate::core::cache::value_cache::{CacheStats, ValueCache};
use crate::core::data::pixel_buffer::PixelBuffer;
use crate::core::data::pixel_rect::PixelRect;
use crate::core::data::point::Point;
use crate::core::data::render_settings::RenderSettings;
use crate::core::data::viewport::ViewportState;
use crate::core::fractals::mandelbrot::algorithm::MandelbrotAlgorithmError;

/// Synchronous view over the Mandelbrot set.
///
/// Owns the viewport, the current frame and (when caching is enabled) the value cache.
/// Every navigation call recomputes the full frame before returning, so the image is
/// never stale. A rejected call leaves viewport and frame untouched.
#[derive(Debug)]
pub struct MandelbrotExplorer {
    pixel_rect: PixelRect,
    settings: RenderSettings,
    viewport: ViewportState,
    cache: Option<ValueCache>,
    image: PixelBuffer,
}

impl MandelbrotExplorer {
    /// Default viewport, caching on, serial rendering.
    pub fn initialize(width: u32, height: u32, max_iterations: u32) -> Result<Self, ExplorerError> {
        let pixel_rect = PixelRect::new(width, height)?;

        Self::with_settings(pixel_rect, RenderSettings::new(max_iterations))
    }

    pub fn with_settings(
        pixel_rect: PixelRect,
        settings: RenderSettings,
    ) -> Result<Self, ExplorerError> {
        if settings.max_iterations == 0 {
            return Err(MandelbrotAlgorithmError::ZeroMaxIterations.into());
        }

        let viewport = ViewportState::default();
        let cache = settings.caching_enabled.then(ValueCache::new);

        info!(
            width = pixel_rect.width(),
            height = pixel_rect.height(),
            max_iterations = settings.max_iterations,
            caching_enabled = settings.caching_enabled,
            strategy = ?settings.strategy,
            "initializing explorer"
        );

        let mut explorer = Self {
            pixel_rect,
            settings,
            viewport,
            cache,
            image: PixelBuffer::new(pixel_rect),
        };
        explorer.image = explorer.recompute(viewport)?;

        Ok(explorer)
    }

    /// Zooms by `factor` toward the point under `pixel` and re-renders.
    pub fn zoom(&mut self, pixel: Point, factor: f64) -> Result<&PixelBuffer, ExplorerError> {
        let viewport = zoom_at(self.viewport, self.pixel_rect, pixel, factor)
            .inspect_err(|err| warn!(x = pixel.x, y = pixel.y, factor, %err, "zoom rejected"))?;

        self.apply(viewport)
    }

    /// Moves the point under `pixel` to the centre of the view and re-renders.
    pub fn centre(&mut self, pixel: Point) -> Result<&PixelBuffer, ExplorerError> {
        let viewport = centre_on(self.viewport, self.pixel_rect, pixel)
            .inspect_err(|err| warn!(x = pixel.x, y = pixel.y, %err, "centre rejected"))?;

        self.apply(viewport)
    }

    /// Re-renders the unchanged viewport.
    pub fn refresh(&mut self) -> Result<&PixelBuffer, ExplorerError> {
        self.apply(self.viewport)
    }

    #[must_use]
    pub fn image(&self) -> &PixelBuffer {
        &self.image
    }

    #[must_use]
    pub fn viewport(&self) -> ViewportState {
        self.viewport
    }

    #[must_use]
    pub fn pixel_rect(&self) -> PixelRect {
        self.pixel_rect
    }

    /// `None` when the explorer was built with caching disabled.
    #[must_use]
    pub fn cache_stats(&self) -> Option<CacheStats> {
        self.cache.as_ref().map(ValueCache::stats)
    }

    fn apply(&mut self, viewport: ViewportState) -> Result<&PixelBuffer, ExplorerError> {
        let image = self.recompute(viewport)?;

        self.viewport = viewport;
        self.image = image;

        Ok(&self.image)
    }

    fn recompute(&self, viewport: ViewportState) -> Result<PixelBuffer, ExplorerError> {
        let start = Instant::now();
        let image = render_frame(
            self.pixel_rect,
            self.settings,
            viewport,
            self.cache.as_ref(),
            &NeverCancel,
        )?;

        let stats = self.cache_stats().unwrap_or_default();
        debug!(
            zoom = viewport.zoom(),
            offset_real = viewport.offset().real,
            offset_imag = viewport.offset().imag,
            elapsed_ms = start.elapsed().as_millis() as u64,
            cache_hits = stats.hits,
            cache_misses = stats.misses,
            "recomputed frame"
        );

        Ok(image)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::core::data::complex::Complex;
    use crate::core::data::render_settings::RenderStrategy;
    use crate::core::fractals::mandelbrot::colour_map::colour_of;

    fn explorer() -> MandelbrotExplorer {
        MandelbrotExplorer::initialize(100, 100, 100).unwrap()
    }

    #[test]
    fn test_initialize_uses_default_viewport() {
        let explorer = explorer();

        assert_eq!(explorer.viewport(), ViewportState::default());
        assert_eq!(explorer.image().pixel_rect(), PixelRect::new(100, 100).unwrap());
    }

    #[test]
    fn test_initial_image_is_not_blank() {
        let explorer = explorer();

        assert!(explorer.image().buffer().iter().any(|&b| b != 0));
    }

    #[test]
    fn test_initial_render_misses_once_per_pixel() {
        let explorer = explorer();

        assert_eq!(
            explorer.cache_stats(),
            Some(CacheStats {
                hits: 0,
                misses: 10_000
            })
        );
    }

    #[test]
    fn test_initialize_rejects_zero_max_iterations() {
        let result = MandelbrotExplorer::initialize(10, 10, 0);

        assert_eq!(
            result.unwrap_err(),
            ExplorerError::Algorithm(MandelbrotAlgorithmError::ZeroMaxIterations)
        );
    }

    #[test]
    fn test_initialize_rejects_empty_frame() {
        assert!(matches!(
            MandelbrotExplorer::initialize(0, 10, 100),
            Err(ExplorerError::PixelRect(_))
        ));
    }

    #[test]
    fn test_zoom_updates_viewport_and_image() {
        let mut explorer = explorer();
        let before = explorer.image().clone();

        explorer.zoom(Point { x: 75, y: 75 }, 2.0).unwrap();

        assert_eq!(explorer.viewport().zoom(), 2.0);
        assert_eq!(explorer.viewport().offset(), Complex::new(0.375, 0.5));
        assert_ne!(explorer.image(), &before);
    }

    #[test]
    fn test_zoom_in_and_out_at_centre_is_served_from_cache() {
        let mut explorer = explorer();
        let original = explorer.image().clone();

        explorer.zoom(Point { x: 50, y: 50 }, 1.1).unwrap();
        let after_zoom_in = explorer.cache_stats().unwrap();
        explorer.zoom(Point { x: 50, y: 50 }, 1.0 / 1.1).unwrap();
        let after_zoom_out = explorer.cache_stats().unwrap();

        assert_eq!(explorer.viewport(), ViewportState::default());
        assert_eq!(explorer.image(), &original);
        assert_eq!(after_zoom_out.misses, after_zoom_in.misses);
        assert_eq!(after_zoom_out.hits, after_zoom_in.hits + 10_000);
    }

    #[test]
    fn test_centre_on_centre_keeps_offset_and_hits_cache() {
        let mut explorer = explorer();
        let original = explorer.image().clone();

        explorer.centre(Point { x: 50, y: 50 }).unwrap();

        assert_eq!(explorer.viewport(), ViewportState::default());
        assert_eq!(explorer.image(), &original);
        assert_eq!(
            explorer.cache_stats(),
            Some(CacheStats {
                hits: 10_000,
                misses: 10_000
            })
        );
    }

    #[test]
    fn test_centre_on_other_pixel_changes_offset_and_image() {
        let mut explorer = explorer();
        let original = explorer.image().clone();

        explorer.centre(Point { x: 75, y: 75 }).unwrap();

        assert_ne!(explorer.viewport().offset(), Complex::new(-0.5, 0.0));
        assert_eq!(explorer.viewport().zoom(), 1.0);
        assert_ne!(explorer.image(), &original);
    }

    #[test]
    fn test_refresh_is_pixel_identical() {
        let mut explorer = explorer();
        let original = explorer.image().clone();

        let refreshed = explorer.refresh().unwrap();

        assert_eq!(refreshed, &original);
    }

    #[test]
    fn test_rejected_pixel_leaves_state_untouched() {
        let mut explorer = explorer();
        let original = explorer.image().clone();

        let zoom_result = explorer.zoom(Point { x: 100, y: 0 }, 2.0).map(|_| ());
        let centre_result = explorer.centre(Point { x: 0, y: -1 }).map(|_| ());

        assert!(matches!(zoom_result, Err(ExplorerError::Navigate(_))));
        assert!(matches!(centre_result, Err(ExplorerError::Navigate(_))));
        assert_eq!(explorer.viewport(), ViewportState::default());
        assert_eq!(explorer.image(), &original);
    }

    #[test]
    fn test_rejected_factor_leaves_state_untouched() {
        let mut explorer = explorer();

        assert!(explorer.zoom(Point { x: 10, y: 10 }, 0.0).is_err());
        assert_eq!(explorer.viewport(), ViewportState::default());
    }

    #[test]
    fn test_without_caching_reports_no_stats() {
        let pixel_rect = PixelRect::new(20, 10).unwrap();
        let settings = RenderSettings::new(30).with_caching(false);

        let explorer = MandelbrotExplorer::with_settings(pixel_rect, settings).unwrap();

        assert_eq!(explorer.cache_stats(), None);
    }

    #[test]
    fn test_parallel_explorer_matches_serial_explorer() {
        let pixel_rect = PixelRect::new(64, 48).unwrap();
        let serial_settings = RenderSettings::new(60);
        let parallel_settings = serial_settings.with_strategy(RenderStrategy::Parallel);

        let mut serial = MandelbrotExplorer::with_settings(pixel_rect, serial_settings).unwrap();
        let mut parallel =
            MandelbrotExplorer::with_settings(pixel_rect, parallel_settings).unwrap();

        serial.zoom(Point { x: 10, y: 30 }, 3.0).unwrap();
        parallel.zoom(Point { x: 10, y: 30 }, 3.0).unwrap();

        assert_eq!(serial.image(), parallel.image());
    }

    #[test]
    fn test_corner_pixel_colour_matches_mapping() {
        let explorer = MandelbrotExplorer::initialize(4, 2, 100).unwrap();

        // top-left maps to -2.25 - 1i, which escapes after one iteration
        assert_eq!(
            explorer.image().colour_at(Point { x: 0, y: 0 }),
            Ok(colour_of(1, 100))
        );
    }
}
