/// Minimum pixel count (h*w) to use row-level Rayon parallelism.
pub const PARALLEL_PIXEL_THRESHOLD: usize = 65_536;

/// Zoom scale applied after `reset`.
pub const DEFAULT_ZOOM: f32 = 1.0;

/// Lower bound for the zoom scale unless overridden by config.
pub const DEFAULT_MIN_ZOOM: f32 = 0.1;

/// Upper bound for the zoom scale unless overridden by config.
pub const DEFAULT_MAX_ZOOM: f32 = 20.0;

/// Columns kept free on the right edge when a crop is pinned against it.
pub const RIGHT_EDGE_INSET: i32 = 1;

/// Rows kept free on the bottom edge when a crop is pinned against it.
pub const BOTTOM_EDGE_INSET: i32 = 0;
