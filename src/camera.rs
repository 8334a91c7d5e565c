use crate::constants::*;
use crate::events::{EventQueue, ViewportEvent};
use crate::viewport::Viewport;
use glam::{Mat4, Vec2};

/// Orthographic 2D camera.
///
/// Screen (canvas) coordinates have their origin at the top-left corner with
/// y pointing down; world coordinates have y pointing up.
pub struct Camera {
    pub position: Vec2,
    pub zoom: f32,
    pub viewport_width: f32,
    pub viewport_height: f32,
    events: EventQueue,
}

impl Camera {
    pub fn new(viewport_width: f32, viewport_height: f32) -> Self {
        Self {
            position: Vec2::ZERO,
            zoom: CAMERA_DEFAULT_ZOOM,
            viewport_width,
            viewport_height,
            events: EventQueue::new(),
        }
    }

    pub fn resize(&mut self, width: f32, height: f32) {
        self.viewport_width = width;
        self.viewport_height = height;
    }

    pub fn set_zoom(&mut self, zoom: f32) {
        self.zoom = zoom.clamp(CAMERA_MIN_ZOOM, CAMERA_MAX_ZOOM);
    }

    pub fn screen_to_world(&self, screen_x: f32, screen_y: f32) -> Vec2 {
        let ndc_x = (screen_x / self.viewport_width) * 2.0 - 1.0;
        let ndc_y = 1.0 - (screen_y / self.viewport_height) * 2.0;

        let world_x = (ndc_x * self.viewport_width) / (2.0 * self.zoom) + self.position.x;
        let world_y = (ndc_y * self.viewport_height) / (2.0 * self.zoom) + self.position.y;

        Vec2::new(world_x, world_y)
    }

    pub fn world_to_screen(&self, world: Vec2) -> Vec2 {
        let ndc_x = (world.x - self.position.x) * 2.0 * self.zoom / self.viewport_width;
        let ndc_y = (world.y - self.position.y) * 2.0 * self.zoom / self.viewport_height;

        Vec2::new(
            (ndc_x + 1.0) * 0.5 * self.viewport_width,
            (1.0 - ndc_y) * 0.5 * self.viewport_height,
        )
    }

    pub fn projection_matrix(&self) -> Mat4 {
        let (min, max) = self.visible_bounds();
        Mat4::orthographic_rh(min.x, max.x, min.y, max.y, -1.0, 1.0)
    }

    /// World-space rectangle currently on screen as (min, max)
    pub fn visible_bounds(&self) -> (Vec2, Vec2) {
        let half = Vec2::new(
            self.viewport_width / (2.0 * self.zoom),
            self.viewport_height / (2.0 * self.zoom),
        );
        (self.position - half, self.position + half)
    }

    /// Drain the notifications collected since the last call
    pub fn drain_events(&mut self) -> impl Iterator<Item = ViewportEvent> + '_ {
        self.events.drain()
    }

    pub fn has_pending_events(&self) -> bool {
        !self.events.is_empty()
    }
}

impl Viewport for Camera {
    fn center(&self) -> Vec2 {
        self.position
    }

    fn screen_center(&self) -> Vec2 {
        Vec2::new(self.viewport_width * 0.5, self.viewport_height * 0.5)
    }

    fn to_world(&self, canvas: Vec2) -> Vec2 {
        self.screen_to_world(canvas.x, canvas.y)
    }

    fn move_center(&mut self, center: Vec2) {
        self.position = center;
    }

    fn notify(&mut self, event: ViewportEvent) {
        self.events.push(event);
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use glam::Vec3;

    fn approx_eq(a: Vec2, b: Vec2) -> bool {
        (a - b).length() < 1e-4
    }

    #[test]
    fn test_screen_center_maps_to_position() {
        let mut camera = Camera::new(800.0, 600.0);
        camera.position = Vec2::new(25.0, -40.0);
        let center = camera.to_world(camera.screen_center());
        assert!(approx_eq(center, camera.position));
    }

    #[test]
    fn test_screen_y_points_down() {
        let camera = Camera::new(800.0, 600.0);
        // Top-left corner of the screen is up and left in world space
        let corner = camera.screen_to_world(0.0, 0.0);
        assert!(approx_eq(corner, Vec2::new(-400.0, 300.0)));
    }

    #[test]
    fn test_zoom_scales_conversion() {
        let mut camera = Camera::new(800.0, 600.0);
        camera.set_zoom(2.0);
        let right_edge = camera.screen_to_world(800.0, 300.0);
        assert!(approx_eq(right_edge, Vec2::new(200.0, 0.0)));
    }

    #[test]
    fn test_zoom_is_clamped() {
        let mut camera = Camera::new(800.0, 600.0);
        camera.set_zoom(1000.0);
        assert_eq!(camera.zoom, CAMERA_MAX_ZOOM);
        camera.set_zoom(0.0);
        assert_eq!(camera.zoom, CAMERA_MIN_ZOOM);
    }

    #[test]
    fn test_world_to_screen_inverts_screen_to_world() {
        let mut camera = Camera::new(800.0, 600.0);
        camera.position = Vec2::new(12.0, 7.0);
        camera.set_zoom(1.5);
        let world = camera.screen_to_world(130.0, 470.0);
        assert!(approx_eq(camera.world_to_screen(world), Vec2::new(130.0, 470.0)));
    }

    #[test]
    fn test_resize_moves_screen_center() {
        let mut camera = Camera::new(800.0, 600.0);
        camera.resize(1024.0, 768.0);
        assert_eq!(camera.screen_center(), Vec2::new(512.0, 384.0));
        assert!(approx_eq(camera.to_world(camera.screen_center()), Vec2::ZERO));
    }

    #[test]
    fn test_projection_maps_view_to_clip_space() {
        let mut camera = Camera::new(800.0, 600.0);
        camera.position = Vec2::new(100.0, -50.0);
        camera.set_zoom(2.0);
        let projection = camera.projection_matrix();

        let center = projection.project_point3(Vec3::new(100.0, -50.0, 0.0));
        assert!(approx_eq(center.truncate(), Vec2::ZERO));

        // Top-right corner of the visible area lands on (1, 1)
        let (_, max) = camera.visible_bounds();
        let corner = projection.project_point3(max.extend(0.0));
        assert!(approx_eq(corner.truncate(), Vec2::ONE));
    }

    #[test]
    fn test_visible_bounds() {
        let mut camera = Camera::new(800.0, 600.0);
        camera.position = Vec2::new(100.0, 0.0);
        let (min, max) = camera.visible_bounds();
        assert!(approx_eq(min, Vec2::new(-300.0, -300.0)));
        assert!(approx_eq(max, Vec2::new(500.0, 300.0)));
    }
}
