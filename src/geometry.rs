//! Coordinate conversion between pointer/screen space and document space.
//!
//! Document space is the normalized `[0,1]×[0,1]` system (x = evolution,
//! y = value chain). The rendered surface uses a viewBox of
//! `-80 0 1080 600`; nodes live in the plot sub-rectangle x 0..1000,
//! y 50..550. These functions reproduce that offset rather than mapping
//! 1:1 to the viewBox, so a pointer over the axis gutter clamps to the
//! plot boundary.
//!
//! All conversions are pure, total, and clamp out-of-bounds input.

use crate::constants::{
    PLOT_HEIGHT, PLOT_TOP, PLOT_WIDTH, VIEWBOX_HEIGHT, VIEWBOX_MIN_X, VIEWBOX_WIDTH,
};

/// Pointer position relative to the canvas element's bounding box.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct ScreenPoint {
    pub x: f32,
    pub y: f32,
}

impl ScreenPoint {
    pub fn new(x: f32, y: f32) -> Self {
        Self { x, y }
    }
}

/// Position in normalized document space.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct MapPoint {
    pub x: f32,
    pub y: f32,
}

impl MapPoint {
    pub fn new(x: f32, y: f32) -> Self {
        Self { x, y }
    }

    /// Clamp both axes into `[0,1]`.
    pub fn clamped(self) -> Self {
        Self {
            x: self.x.clamp(0.0, 1.0),
            y: self.y.clamp(0.0, 1.0),
        }
    }
}

/// Position on the drawing surface (viewBox units).
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct SurfacePoint {
    pub x: f32,
    pub y: f32,
}

/// Size of the canvas element's bounding box in pixels.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct CanvasBounds {
    pub width: f32,
    pub height: f32,
}

impl CanvasBounds {
    pub fn new(width: f32, height: f32) -> Self {
        Self { width, height }
    }
}

/// Convert a pointer position to document coordinates, clamped to `[0,1]²`.
pub fn screen_to_map(p: ScreenPoint, bounds: CanvasBounds) -> MapPoint {
    screen_to_map_unclamped(p, bounds).clamped()
}

/// Unclamped variant used by hit testing, where warping an off-plot pointer
/// onto the plot boundary would produce spurious hits on border nodes.
pub fn screen_to_map_unclamped(p: ScreenPoint, bounds: CanvasBounds) -> MapPoint {
    let width = if bounds.width > 0.0 { bounds.width } else { 1.0 };
    let height = if bounds.height > 0.0 { bounds.height } else { 1.0 };

    let surface_x = (p.x / width) * VIEWBOX_WIDTH + VIEWBOX_MIN_X;
    let surface_y = (p.y / height) * VIEWBOX_HEIGHT;

    MapPoint {
        x: surface_x / PLOT_WIDTH,
        y: (surface_y - PLOT_TOP) / PLOT_HEIGHT,
    }
}

/// Inverse of [`screen_to_map`] for in-bounds points.
pub fn map_to_screen(p: MapPoint, bounds: CanvasBounds) -> ScreenPoint {
    let surface = map_to_surface(p);
    ScreenPoint {
        x: (surface.x - VIEWBOX_MIN_X) / VIEWBOX_WIDTH * bounds.width,
        y: surface.y / VIEWBOX_HEIGHT * bounds.height,
    }
}

/// Convert document coordinates to the drawing surface (viewBox units).
/// Used by hit testing and the exporters.
pub fn map_to_surface(p: MapPoint) -> SurfacePoint {
    SurfacePoint {
        x: p.x * PLOT_WIDTH,
        y: p.y * PLOT_HEIGHT + PLOT_TOP,
    }
}

/// Distance from a point to the segment `a..b`, in surface units.
pub fn segment_distance(p: SurfacePoint, a: SurfacePoint, b: SurfacePoint) -> f32 {
    let dx = b.x - a.x;
    let dy = b.y - a.y;
    let len_sq = dx * dx + dy * dy;

    // Degenerate segment (coincident endpoints)
    if len_sq <= f32::EPSILON {
        return ((p.x - a.x).powi(2) + (p.y - a.y).powi(2)).sqrt();
    }

    let t = (((p.x - a.x) * dx + (p.y - a.y) * dy) / len_sq).clamp(0.0, 1.0);
    let proj_x = a.x + t * dx;
    let proj_y = a.y + t * dy;
    ((p.x - proj_x).powi(2) + (p.y - proj_y).powi(2)).sqrt()
}
