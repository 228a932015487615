//! Application-wide constants.
//!
//! Centralizes magic numbers for the drawing surface, hit testing,
//! persistence, and the draw.io exporter.

// ============================================================================
// Drawing Surface
// ============================================================================

/// Left edge of the rendered viewBox (axis labels live in the negative band)
pub const VIEWBOX_MIN_X: f32 = -80.0;

/// Total width of the rendered viewBox
pub const VIEWBOX_WIDTH: f32 = 1080.0;

/// Total height of the rendered viewBox
pub const VIEWBOX_HEIGHT: f32 = 600.0;

/// Width of the plot area (document x 0..1 spans surface x 0..1000)
pub const PLOT_WIDTH: f32 = 1000.0;

/// Top edge of the plot area (document y 0 sits below the header band)
pub const PLOT_TOP: f32 = 50.0;

/// Height of the plot area (document y 0..1 spans surface y 50..550)
pub const PLOT_HEIGHT: f32 = 500.0;

// ============================================================================
// Hit Testing
// ============================================================================

/// Radius of a node disc on the drawing surface
pub const NODE_RADIUS: f32 = 25.0;

/// Maximum distance (surface units) from an edge segment that still counts
/// as a hit on that edge
pub const EDGE_HIT_TOLERANCE: f32 = 6.0;

// ============================================================================
// Persistence
// ============================================================================

/// Auto-save interval in seconds
pub const AUTOSAVE_INTERVAL_SECS: u64 = 30;

/// Well-known storage slot for the periodic auto-save snapshot,
/// distinct from user-initiated named exports
pub const AUTOSAVE_KEY: &str = "wardley-map-autosave";

/// Interchange format version written into export metadata
pub const FORMAT_VERSION: &str = "1.0";

/// Default title for untitled documents
pub const DEFAULT_TITLE: &str = "Untitled Map";

// ============================================================================
// Node Defaults
// ============================================================================

/// Default fill color for nodes created without an explicit color
pub const DEFAULT_NODE_COLOR: &str = "#6B7280";

// ============================================================================
// draw.io Export
// ============================================================================

/// Evolution 0..1 becomes 100..900 on the draw.io page
pub const DRAWIO_X_SCALE: f32 = 800.0;
pub const DRAWIO_X_OFFSET: f32 = 100.0;

/// Value chain 0..1 becomes 100..700 on the draw.io page
pub const DRAWIO_Y_SCALE: f32 = 600.0;
pub const DRAWIO_Y_OFFSET: f32 = 100.0;

/// Node ellipse dimensions on the draw.io page
pub const DRAWIO_ELLIPSE_WIDTH: f32 = 80.0;
pub const DRAWIO_ELLIPSE_HEIGHT: f32 = 50.0;

/// Connector stroke colors by edge kind
pub const DRAWIO_FLOW_COLOR: &str = "#10B981";
pub const DRAWIO_DEPENDENCY_COLOR: &str = "#666666";
