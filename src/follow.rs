//! Per-frame camera following.
//!
//! Each frame the controller works out where the viewport center has to be
//! for the target to sit on the follow point (or on the edge of the dead
//! zone around it), then moves the viewport toward that center according
//! to the configured motion policy: teleport, constant speed, or eased
//! acceleration with braking.

use crate::config::{ConfigError, FollowConfig, MotionPolicy};
use crate::events::{MoveKind, ViewportEvent};
use crate::target::Target;
use crate::viewport::Viewport;
use glam::Vec2;

/// Keeps a viewport centered on a target.
///
/// Owns the follow configuration and the eased-motion velocity. The
/// viewport and target are borrowed per `update` call.
#[derive(Debug, Clone)]
pub struct FollowController {
    config: FollowConfig,
    /// Per-axis speed magnitude built up by acceleration, always in `[0, speed]`
    velocity: Vec2,
    paused: bool,
    in_dead_zone: bool,
}

impl FollowController {
    pub fn new(config: FollowConfig) -> Result<Self, ConfigError> {
        config.validate()?;
        Ok(Self {
            config,
            velocity: Vec2::ZERO,
            paused: false,
            in_dead_zone: false,
        })
    }

    pub fn config(&self) -> &FollowConfig {
        &self.config
    }

    /// Replace the configuration. Velocity carries over, capped at the new speed.
    pub fn set_config(&mut self, config: FollowConfig) -> Result<(), ConfigError> {
        config.validate()?;
        self.velocity = self.velocity.min(Vec2::splat(config.speed));
        self.config = config;
        Ok(())
    }

    /// Canvas-space follow point; `None` means the screen center
    pub fn follow_point(&self) -> Option<Vec2> {
        self.config.follow_point
    }

    pub fn set_follow_point(&mut self, point: Option<Vec2>) {
        self.config.follow_point = point;
    }

    pub fn velocity(&self) -> Vec2 {
        self.velocity
    }

    pub fn pause(&mut self) {
        self.paused = true;
    }

    pub fn resume(&mut self) {
        self.paused = false;
    }

    pub fn is_paused(&self) -> bool {
        self.paused
    }

    /// World-space position the target is steered toward
    pub fn resolve_follow_point<V: Viewport + ?Sized>(&self, viewport: &V) -> Vec2 {
        let canvas = self
            .config
            .follow_point
            .unwrap_or_else(|| viewport.screen_center());
        viewport.to_world(canvas)
    }

    /// Advance one frame. `elapsed` is in the same frame units as speed and acceleration.
    pub fn update<V, T>(&mut self, viewport: &mut V, target: &T, elapsed: f32)
    where
        V: Viewport + ?Sized,
        T: Target + ?Sized,
    {
        if self.paused {
            return;
        }
        puffin::profile_function!();

        let Some(target_pos) = target.position() else {
            log::debug!("Follow target has no position, skipping frame");
            return;
        };
        let center = viewport.center();
        debug_assert!(target_pos.is_finite(), "Follow target position is not finite: {target_pos}");
        debug_assert!(center.is_finite(), "Viewport center is not finite: {center}");

        let follow_world = self.resolve_follow_point(viewport);

        // Where the follow point has to end up
        let mut goal = target_pos;
        if let Some(radius) = self.config.dead_zone() {
            let offset = target_pos - follow_world;
            let distance = offset.length();
            if distance <= radius {
                if !self.in_dead_zone {
                    log::debug!("Target entered dead zone ({distance:.2} <= {radius})");
                    self.in_dead_zone = true;
                }
                return;
            }
            if self.in_dead_zone {
                log::debug!("Target left dead zone ({distance:.2} > {radius})");
                self.in_dead_zone = false;
            }
            let angle = offset.y.atan2(offset.x);
            goal = target_pos - Vec2::new(angle.cos(), angle.sin()) * radius;
        }

        // Follow point keeps its offset from the center while the camera moves
        let to = goal - (follow_world - center);
        let delta = to - center;
        if delta.x == 0.0 && delta.y == 0.0 {
            return;
        }

        let next = match self.config.policy() {
            MotionPolicy::Teleport => to,
            MotionPolicy::ConstantSpeed { speed } => {
                step_toward(center, to, delta, Vec2::splat(speed))
            }
            MotionPolicy::Accelerated {
                speed,
                acceleration,
            } => {
                let distance = delta.length();
                if distance == 0.0 {
                    return;
                }
                let deceleration_distance = self.velocity.length_squared() / (2.0 * acceleration);
                let step = Vec2::splat(acceleration * elapsed);
                self.velocity = if distance > deceleration_distance {
                    (self.velocity + step).min(Vec2::splat(speed))
                } else {
                    (self.velocity - step).clamp(Vec2::ZERO, Vec2::splat(speed))
                };
                step_toward(center, to, delta, self.velocity)
            }
        };

        log::trace!("Follow moved center {center} -> {next} (goal {to})");
        viewport.move_center(next);
        viewport.notify(ViewportEvent::Moved {
            kind: MoveKind::Follow,
            center: next,
        });
    }
}

/// Move from `center` along `delta` by `magnitude` per axis.
/// Each axis snaps to `to` on its own instead of overshooting.
fn step_toward(center: Vec2, to: Vec2, delta: Vec2, magnitude: Vec2) -> Vec2 {
    let angle = delta.y.atan2(delta.x);
    let change = Vec2::new(angle.cos() * magnitude.x, angle.sin() * magnitude.y);

    let x = if change.x.abs() > delta.x.abs() {
        to.x
    } else {
        center.x + change.x
    };
    let y = if change.y.abs() > delta.y.abs() {
        to.y
    } else {
        center.y + change.y
    };
    Vec2::new(x, y)
}
