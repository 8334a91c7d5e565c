//! Viewport change notifications.
//!
//! The follow controller reports every camera move it makes through the
//! viewport it drives. Hosts drain the queue once per frame to react
//! (redraw culling, HUD updates, etc.) without coupling to the controller.

use glam::Vec2;

/// What caused the viewport to move
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum MoveKind {
    /// The follow controller moved the camera toward its target
    Follow,
}

/// Events a viewport can be notified of
#[derive(Debug, Clone, PartialEq)]
pub enum ViewportEvent {
    /// The viewport center changed
    Moved {
        kind: MoveKind,
        /// Center after the move (world space)
        center: Vec2,
    },
}

/// Notifications a viewport has received and the host has not read yet
#[derive(Debug, Default)]
pub struct EventQueue {
    events: Vec<ViewportEvent>,
}

impl EventQueue {
    pub fn new() -> Self {
        Self { events: Vec::new() }
    }

    /// Record a notification
    pub fn push(&mut self, event: ViewportEvent) {
        self.events.push(event);
    }

    /// Hand every pending notification to the caller, oldest first
    pub fn drain(&mut self) -> impl Iterator<Item = ViewportEvent> + '_ {
        self.events.drain(..)
    }

    pub fn is_empty(&self) -> bool {
        self.events.is_empty()
    }

    pub fn len(&self) -> usize {
        self.events.len()
    }
}
