//! Camera follow controller for 2D viewports.
//!
//! A [`FollowController`] moves a [`Viewport`] once per frame so that a
//! [`Target`] stays on (or within a dead zone around) a follow point, using
//! one of three motion policies: teleport, constant speed, or eased
//! acceleration with braking.

pub mod camera;
pub mod components;
pub mod config;
pub mod constants;
pub mod events;
pub mod follow;
pub mod target;
pub mod viewport;

pub use camera::Camera;
pub use config::{ConfigError, FollowConfig, MotionPolicy};
pub use events::{EventQueue, MoveKind, ViewportEvent};
pub use follow::FollowController;
pub use target::{EntityTarget, Target};
pub use viewport::Viewport;
