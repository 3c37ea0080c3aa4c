//! The accumulation buffer and the splatting engine.

use std::sync::OnceLock;

use tracing::trace;

use crate::error::{HeatmapError, HeatmapResult};
use crate::stamp::Stamp;

/// Radius of the stamp used by the plain `add_point*` operations.
const DEFAULT_STAMP_RADIUS: i32 = 4;

fn default_stamp() -> &'static Stamp {
    static DEFAULT: OnceLock<Stamp> = OnceLock::new();
    DEFAULT.get_or_init(|| {
        Stamp::generate(DEFAULT_STAMP_RADIUS).expect("default stamp radius is non-negative")
    })
}

/// A fixed-size 2D grid of summed density contributions.
///
/// Cells are row-major `f64` starting at 0.0. The buffer tracks a
/// running maximum: it is raised whenever a splat pushes a cell above
/// it, and never lowered, so negative-weight stamps can shrink cells
/// without touching a previously recorded high.
///
/// The buffer is exclusively owned by its creator; ingestion is
/// single-threaded by design. For parallel workloads, fill one buffer
/// per disjoint tile and merge cell-wise afterwards.
#[derive(Debug, Clone)]
pub struct Heatmap {
    width: usize,
    height: usize,
    cells: Vec<f64>,
    max: f64,
}

/// Equality is dimensions plus exact cell values. The running maximum
/// is history-dependent and deliberately excluded.
impl PartialEq for Heatmap {
    fn eq(&self, other: &Self) -> bool {
        self.width == other.width && self.height == other.height && self.cells == other.cells
    }
}

impl Heatmap {
    /// Create an empty buffer. Both dimensions must be positive.
    pub fn new(width: usize, height: usize) -> HeatmapResult<Self> {
        if width == 0 || height == 0 {
            return Err(HeatmapError::InvalidDimension(format!(
                "heatmap dimensions must be positive, got {width}x{height}"
            )));
        }
        Ok(Self {
            width,
            height,
            cells: vec![0.0; width * height],
            max: 0.0,
        })
    }

    pub fn width(&self) -> usize {
        self.width
    }

    pub fn height(&self) -> usize {
        self.height
    }

    /// The running maximum cell value; 0.0 for an untouched buffer.
    pub fn max(&self) -> f64 {
        self.max
    }

    /// Row-major cell values.
    pub fn cells(&self) -> &[f64] {
        &self.cells
    }

    /// Cell value at `(x, y)`, or `None` outside the buffer.
    pub fn get(&self, x: i32, y: i32) -> Option<f64> {
        if !self.admits(x, y) {
            return None;
        }
        Some(self.cells[y as usize * self.width + x as usize])
    }

    /// Splat the built-in default stamp at `(x, y)` with weight 1.0.
    pub fn add_point(&mut self, x: i32, y: i32) {
        self.add_weighted_point_with_stamp(x, y, 1.0, default_stamp());
    }

    /// Batch form of [`Heatmap::add_point`], applied in input order.
    pub fn add_points(&mut self, points: &[(i32, i32)]) {
        let stamp = default_stamp();
        for &(x, y) in points {
            self.add_weighted_point_with_stamp(x, y, 1.0, stamp);
        }
    }

    /// Splat `stamp` centered at `(x, y)` with weight 1.0.
    pub fn add_point_with_stamp(&mut self, x: i32, y: i32, stamp: &Stamp) {
        self.add_weighted_point_with_stamp(x, y, 1.0, stamp);
    }

    /// Splat `stamp` centered at `(x, y)`, scaled by `weight`.
    ///
    /// A center outside `[0, width-1] x [0, height-1]` drops the whole
    /// contribution silently: no partial splat, no error. Admitted
    /// stamps are clipped cell-by-cell at the buffer edges.
    pub fn add_weighted_point_with_stamp(&mut self, x: i32, y: i32, weight: f64, stamp: &Stamp) {
        if !self.admits(x, y) {
            trace!(x, y, "point center outside buffer, dropping stamp");
            return;
        }
        self.max = splat(
            &mut self.cells,
            self.width,
            self.height,
            x,
            y,
            weight,
            stamp,
            self.max,
        );
    }

    /// Batch form of [`Heatmap::add_point_with_stamp`].
    pub fn add_points_with_stamp(&mut self, points: &[(i32, i32)], stamp: &Stamp) {
        for &(x, y) in points {
            self.add_weighted_point_with_stamp(x, y, 1.0, stamp);
        }
    }

    /// Batch form of [`Heatmap::add_weighted_point_with_stamp`], one
    /// shared weight for every point.
    pub fn add_weighted_points_with_stamp(
        &mut self,
        points: &[(i32, i32)],
        weight: f64,
        stamp: &Stamp,
    ) {
        for &(x, y) in points {
            self.add_weighted_point_with_stamp(x, y, weight, stamp);
        }
    }

    fn admits(&self, x: i32, y: i32) -> bool {
        x >= 0 && y >= 0 && (x as usize) < self.width && (y as usize) < self.height
    }
}

/// Add one weighted stamp onto a cell grid, clipping at the edges.
///
/// The caller has already admitted the center. Returns the updated
/// running maximum: raised when a cell's new value exceeds it, never
/// lowered.
#[allow(clippy::too_many_arguments)]
fn splat(
    cells: &mut [f64],
    width: usize,
    height: usize,
    x: i32,
    y: i32,
    weight: f64,
    stamp: &Stamp,
    mut max: f64,
) -> f64 {
    let half_w = (stamp.width() / 2) as i32;
    let half_h = (stamp.height() / 2) as i32;
    let data = stamp.data();

    for j in 0..stamp.height() {
        let ty = y + j as i32 - half_h;
        if ty < 0 || ty as usize >= height {
            continue;
        }
        let row = ty as usize * width;
        for i in 0..stamp.width() {
            let tx = x + i as i32 - half_w;
            if tx < 0 || tx as usize >= width {
                continue;
            }
            let cell = &mut cells[row + tx as usize];
            *cell += weight * data[j * stamp.width() + i];
            if *cell > max {
                max = *cell;
            }
        }
    }
    max
}
