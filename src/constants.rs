//! Follow and camera constants.
//!
//! Centralizing magic numbers makes tuning easier and documents intent.

// =============================================================================
// FOLLOW DEFAULTS
// =============================================================================

/// Default follow speed (world units per frame). Zero teleports.
pub const FOLLOW_DEFAULT_SPEED: f32 = 0.0;
/// Dead-zone radius at or below which the dead zone is disabled
pub const FOLLOW_RADIUS_DISABLED: f32 = 0.0;

// =============================================================================
// CAMERA
// =============================================================================

/// Default zoom level (screen pixels per world unit)
pub const CAMERA_DEFAULT_ZOOM: f32 = 1.0;
/// Minimum zoom level
pub const CAMERA_MIN_ZOOM: f32 = 0.1;
/// Maximum zoom level
pub const CAMERA_MAX_ZOOM: f32 = 16.0;

// =============================================================================
// DEMO
// =============================================================================

/// Viewport width used by the demo binary
pub const DEMO_VIEWPORT_WIDTH: f32 = 800.0;
/// Viewport height used by the demo binary
pub const DEMO_VIEWPORT_HEIGHT: f32 = 600.0;
/// Number of frames the demo simulates
pub const DEMO_FRAME_COUNT: u32 = 600;
/// Frames between progress log lines
pub const DEMO_LOG_INTERVAL: u32 = 60;
/// Maximum random steering applied to the wandering target per frame
pub const DEMO_TARGET_JITTER: f32 = 0.4;
/// Speed cap of the wandering target (world units per frame)
pub const DEMO_TARGET_MAX_SPEED: f32 = 6.0;
