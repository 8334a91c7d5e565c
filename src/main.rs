use camera_follow::components::{Followed, Position, Velocity};
use camera_follow::constants::*;
use camera_follow::{Camera, EntityTarget, FollowConfig, FollowController, Viewport, ViewportEvent};
use glam::Vec2;
use hecs::World;
use rand::Rng;
use std::path::PathBuf;

fn main() -> Result<(), Box<dyn std::error::Error>> {
    env_logger::Builder::from_default_env()
        .filter_module("camera_follow", log::LevelFilter::Debug)
        .filter_module("follow_demo", log::LevelFilter::Debug)
        .init();

    puffin::set_scopes_on(std::env::var_os("FOLLOW_PROFILE").is_some());

    let config = match std::env::args().nth(1).map(PathBuf::from) {
        Some(path) => {
            log::info!("Loading follow config from {}", path.display());
            FollowConfig::load(&path)?
        }
        None => FollowConfig::default()
            .with_speed(8.0)
            .with_acceleration(0.5)
            .with_radius(40.0),
    };
    log::info!("Following with {:?}", config.policy());

    let mut camera = Camera::new(DEMO_VIEWPORT_WIDTH, DEMO_VIEWPORT_HEIGHT);
    let mut follow = FollowController::new(config)?;

    let mut world = World::new();
    world.spawn((Position::new(0.0, 0.0), Velocity::new(2.0, 1.0), Followed));

    let mut rng = rand::thread_rng();
    let mut moves = 0usize;

    for frame in 0..DEMO_FRAME_COUNT {
        puffin::GlobalProfiler::lock().new_frame();

        wander(&mut world, &mut rng);

        // Shift the anchor to the left third halfway through, pause for a while after that
        if frame == DEMO_FRAME_COUNT / 2 {
            let anchor = Vec2::new(DEMO_VIEWPORT_WIDTH / 3.0, DEMO_VIEWPORT_HEIGHT / 2.0);
            log::info!("Frame {frame}: moving follow point to {anchor}");
            follow.set_follow_point(Some(anchor));
        }
        if frame == DEMO_FRAME_COUNT * 2 / 3 {
            log::info!("Frame {frame}: pausing");
            follow.pause();
        }
        if frame == DEMO_FRAME_COUNT * 3 / 4 {
            log::info!("Frame {frame}: resuming");
            follow.resume();
        }

        let followed = world
            .query::<&Followed>()
            .iter()
            .next()
            .map(|(entity, _)| entity);
        if let Some(entity) = followed {
            follow.update(&mut camera, &EntityTarget::new(&world, entity), 1.0);
        }

        for event in camera.drain_events() {
            match event {
                ViewportEvent::Moved { .. } => moves += 1,
            }
        }

        if frame % DEMO_LOG_INTERVAL == 0 {
            let target = followed
                .and_then(|entity| world.get::<&Position>(entity).ok().map(|p| p.as_vec2()))
                .unwrap_or_default();
            log::info!(
                "Frame {frame}: target {target:.1}, center {:.1}, follow point {:.1}, velocity {:.2}",
                camera.center(),
                follow.resolve_follow_point(&camera),
                follow.velocity()
            );
        }
    }

    log::info!("Camera moved on {moves} of {DEMO_FRAME_COUNT} frames");
    Ok(())
}

/// Random walk for every entity with a velocity
fn wander(world: &mut World, rng: &mut impl Rng) {
    for (_, (pos, vel)) in world.query_mut::<(&mut Position, &mut Velocity)>() {
        let jitter = Vec2::new(
            rng.gen_range(-DEMO_TARGET_JITTER..=DEMO_TARGET_JITTER),
            rng.gen_range(-DEMO_TARGET_JITTER..=DEMO_TARGET_JITTER),
        );
        let steered = (Vec2::new(vel.x, vel.y) + jitter).clamp_length_max(DEMO_TARGET_MAX_SPEED);
        *vel = Velocity::new(steered.x, steered.y);
        *pos = Position::from(pos.as_vec2() + steered);
    }
}
