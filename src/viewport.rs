//! The viewport capability the follow controller drives.

use crate::events::ViewportEvent;
use glam::Vec2;

/// A 2D camera the follow controller can read and move.
///
/// The controller only borrows a viewport for the duration of one
/// `update` call; it never owns or outlives it.
pub trait Viewport {
    /// Current center in world space
    fn center(&self) -> Vec2;

    /// Visual center of the screen in canvas space
    fn screen_center(&self) -> Vec2;

    /// Convert a canvas-space point into world space
    fn to_world(&self, canvas: Vec2) -> Vec2;

    /// Recenter the viewport on a world-space point
    fn move_center(&mut self, center: Vec2);

    /// Report a change to whoever listens on this viewport
    fn notify(&mut self, event: ViewportEvent);
}
