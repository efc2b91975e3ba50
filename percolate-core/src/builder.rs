//! Builder utilities for configuring the percolation engine.
//!
//! Collects the tracking strategy and canvas dimensions and validates them
//! before constructing a [`Percolation`] instance.

use crate::{
    Result,
    partition::Canvas,
    percolation::Percolation,
    stats::MaxSizeTracking,
};

/// Configures and constructs [`Percolation`] instances.
///
/// # Examples
/// ```
/// use percolate_core::{MaxSizeTracking, PercolationBuilder};
///
/// let engine = PercolationBuilder::new()
///     .with_max_size_tracking(MaxSizeTracking::Scan)
///     .with_canvas(1024.0, 768.0)
///     .build()
///     .expect("builder configuration is valid");
/// assert_eq!(engine.max_size_tracking(), MaxSizeTracking::Scan);
/// assert_eq!(engine.canvas().width(), 1024.0);
/// ```
#[derive(Debug, Clone)]
pub struct PercolationBuilder {
    tracking: MaxSizeTracking,
    width: f64,
    height: f64,
}

impl Default for PercolationBuilder {
    fn default() -> Self {
        Self {
            tracking: MaxSizeTracking::default(),
            width: Canvas::DEFAULT_WIDTH,
            height: Canvas::DEFAULT_HEIGHT,
        }
    }
}

impl PercolationBuilder {
    /// Creates a builder populated with default parameters.
    ///
    /// # Examples
    /// ```
    /// use percolate_core::{MaxSizeTracking, PercolationBuilder};
    ///
    /// let builder = PercolationBuilder::new();
    /// assert_eq!(builder.max_size_tracking(), MaxSizeTracking::Incremental);
    /// assert_eq!(builder.canvas_size(), (800.0, 600.0));
    /// ```
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Selects how the largest subgraph size is tracked.
    #[must_use]
    pub const fn with_max_size_tracking(mut self, tracking: MaxSizeTracking) -> Self {
        self.tracking = tracking;
        self
    }

    /// Returns the configured tracking strategy.
    #[must_use]
    pub const fn max_size_tracking(&self) -> MaxSizeTracking {
        self.tracking
    }

    /// Overrides the canvas used for snapshot grid placement.
    #[must_use]
    pub const fn with_canvas(mut self, width: f64, height: f64) -> Self {
        self.width = width;
        self.height = height;
        self
    }

    /// Returns the configured `(width, height)`.
    #[must_use]
    pub const fn canvas_size(&self) -> (f64, f64) {
        (self.width, self.height)
    }

    /// Validates the configuration and constructs a [`Percolation`] instance.
    ///
    /// # Errors
    /// Returns [`crate::PercolateError::InvalidCanvas`] when either canvas
    /// dimension is not finite and positive.
    ///
    /// # Examples
    /// ```
    /// use percolate_core::{PercolateError, PercolationBuilder};
    ///
    /// let err = PercolationBuilder::new()
    ///     .with_canvas(-1.0, 10.0)
    ///     .build()
    ///     .expect_err("negative width is rejected");
    /// assert!(matches!(err, PercolateError::InvalidCanvas { .. }));
    /// ```
    pub fn build(self) -> Result<Percolation> {
        let canvas = Canvas::new(self.width, self.height)?;
        Ok(Percolation::new(self.tracking, canvas))
    }
}
