//! Grid placement of subgraph centers on a rectangular canvas.
//!
//! Subgraphs are tiled on a near-square grid whose aspect follows the
//! canvas: `columns = ceil(sqrt(count * width / height))` and
//! `rows = ceil(count / columns)`. Cells are filled in row-major order and a
//! subgraph sits at the middle of its cell. A lone subgraph is centered on
//! the whole canvas.

use crate::{Result, error::PercolateError};

/// Drawing area that subgraph centers are spread over.
///
/// # Examples
/// ```
/// use percolate_core::Canvas;
///
/// let canvas = Canvas::new(400.0, 300.0).expect("dimensions are positive");
/// assert_eq!(canvas.width(), 400.0);
/// assert!(Canvas::new(0.0, 300.0).is_err());
/// ```
#[derive(Clone, Copy, Debug, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize))]
pub struct Canvas {
    width: f64,
    height: f64,
}

impl Canvas {
    /// Default canvas width.
    pub const DEFAULT_WIDTH: f64 = 800.0;
    /// Default canvas height.
    pub const DEFAULT_HEIGHT: f64 = 600.0;

    /// Creates a canvas after checking both dimensions are finite and positive.
    ///
    /// # Errors
    /// Returns [`PercolateError::InvalidCanvas`] otherwise.
    pub fn new(width: f64, height: f64) -> Result<Self> {
        let valid = |value: f64| value.is_finite() && value > 0.0;
        if valid(width) && valid(height) {
            Ok(Self { width, height })
        } else {
            Err(PercolateError::InvalidCanvas { width, height })
        }
    }

    /// Returns the canvas width.
    #[must_use]
    #[rustfmt::skip]
    pub const fn width(&self) -> f64 { self.width }

    /// Returns the canvas height.
    #[must_use]
    #[rustfmt::skip]
    pub const fn height(&self) -> f64 { self.height }

    /// Returns the middle of the canvas.
    #[must_use]
    pub fn center(&self) -> Point {
        Point {
            x: self.width / 2.0,
            y: self.height / 2.0,
        }
    }
}

impl Default for Canvas {
    fn default() -> Self {
        Self {
            width: Self::DEFAULT_WIDTH,
            height: Self::DEFAULT_HEIGHT,
        }
    }
}

/// A position on the canvas.
#[derive(Clone, Copy, Debug, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct Point {
    /// Horizontal coordinate.
    pub x: f64,
    /// Vertical coordinate.
    pub y: f64,
}

/// Returns the `(columns, rows)` grid used for `count` subgraphs.
///
/// # Examples
/// ```
/// use percolate_core::{Canvas, grid_dimensions};
///
/// let canvas = Canvas::new(400.0, 400.0)?;
/// assert_eq!(grid_dimensions(4, &canvas), (2, 2));
/// assert_eq!(grid_dimensions(0, &canvas), (0, 0));
/// # Ok::<(), percolate_core::PercolateError>(())
/// ```
#[must_use]
pub fn grid_dimensions(count: usize, canvas: &Canvas) -> (usize, usize) {
    if count == 0 {
        return (0, 0);
    }
    let ideal = (count as f64 * canvas.width / canvas.height).sqrt().ceil();
    let columns = (ideal as usize).max(1);
    (columns, count.div_ceil(columns))
}

/// Returns one center per subgraph, in the order the subgraphs are given.
///
/// # Examples
/// ```
/// use percolate_core::{Canvas, Point, grid_centers};
///
/// let canvas = Canvas::new(400.0, 400.0)?;
/// let centers = grid_centers(4, &canvas);
/// assert_eq!(centers[1], Point { x: 300.0, y: 100.0 });
/// assert_eq!(grid_centers(1, &canvas), vec![Point { x: 200.0, y: 200.0 }]);
/// # Ok::<(), percolate_core::PercolateError>(())
/// ```
#[must_use]
pub fn grid_centers(count: usize, canvas: &Canvas) -> Vec<Point> {
    if count == 1 {
        return vec![canvas.center()];
    }
    let (columns, rows) = grid_dimensions(count, canvas);
    if columns == 0 {
        return Vec::new();
    }
    let cell_width = canvas.width / columns as f64;
    let cell_height = canvas.height / rows as f64;
    (0..count)
        .map(|position| {
            let column = position % columns;
            let row = position / columns;
            Point {
                x: (column as f64 + 0.5) * cell_width,
                y: (row as f64 + 0.5) * cell_height,
            }
        })
        .collect()
}
