use serde::Deserialize;

/// How the per-pixel loop is scheduled. Both produce identical frames.
#[derive(Debug, Copy, Clone, PartialEq, Eq, Default, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum RenderStrategy {
    /// One thread, rows in order.
    #[default]
    Serial,
    /// Rows spread over rayon's work-stealing pool.
    Parallel,
}

/// Everything about a render that stays fixed while the viewport moves.
#[derive(Debug, Copy, Clone, PartialEq, Eq)]
pub struct RenderSettings {
    pub max_iterations: u32,
    pub caching_enabled: bool,
    pub strategy: RenderStrategy,
}

impl RenderSettings {
    #[must_use]
    pub fn new(max_iterations: u32) -> Self {
        Self {
            max_iterations,
            caching_enabled: true,
            strategy: RenderStrategy::Serial,
        }
    }

    #[must_use]
    pub fn with_caching(mut self, caching_enabled: bool) -> Self {
        self.caching_enabled = caching_enabled;
        self
    }

    #[must_use]
    pub fn with_strategy(mut self, strategy: RenderStrategy) -> Self {
        self.strategy = strategy;
        self
    }
}
