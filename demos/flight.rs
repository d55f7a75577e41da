//! Headless run of the lift-off scene.
//!
//! Plays the flight sequence, keeps the exhaust particles attached to the
//! vehicle and prints where everything is once per simulated second. Frames
//! use a fixed step unless `--realtime` is passed, in which case a [`Timer`]
//! paces them against the wall clock. Pass a settings JSON path to override
//! the defaults:
//!
//! ```text
//! RUST_LOG=debug cargo run --example flight -- --realtime settings.json
//! ```

use std::time::Duration;

use glam::Vec3;
use liftoff::prelude::*;
use liftoff::scene::perspective;

const FRAME_DT: f32 = 1.0 / 60.0;

#[derive(Debug)]
struct ShipMesh;

fn main() -> anyhow::Result<()> {
    env_logger::init();

    let mut realtime = false;
    let mut settings_path = None;
    for arg in std::env::args().skip(1) {
        if arg == "--realtime" {
            realtime = true;
        } else {
            settings_path = Some(arg);
        }
    }

    let settings = match settings_path {
        Some(path) => Settings::from_json_file(path)?,
        None => Settings::default(),
    };

    let mesh = ShipMesh;
    let plan = FlightPlan::new(settings.flight.clone());

    // The second instance stays parked on the pad next to the one that flies.
    let mut ships = ObjectInstanceGroup::new(&mesh);
    ships.create_instance(plan.start_transform());
    ships.create_instance(Transform::from_position(Vec3::new(-19.0, -0.97, 10.0)));

    let mut channels = plan.build_channels();
    channels.play_all();

    let mut exhaust = ParticleSource::new(settings.particles.clone());
    exhaust.set_relative_position(Vec3::new(1.5, 0.0, 0.0));
    exhaust.set_active(true);

    let camera = FlyCamera::new(settings.camera.clone());
    let projection = perspective(60f32.to_radians(), 16.0 / 9.0, 0.1, 2000.0);

    let mut timer = realtime.then(|| Timer::with_max_delta(Duration::from_millis(100)));
    let mut next_report = 1.0;
    let mut frame = 0u32;

    while !channels.is_finished() {
        let dt = match timer.as_mut() {
            Some(timer) => {
                std::thread::sleep(Duration::from_secs_f32(FRAME_DT));
                timer.tick()
            }
            None => FRAME_DT,
        };

        let ship = ships.transform_mut(0)?;
        channels.update(dt, ship);
        exhaust.attach_to(ship);
        exhaust.update(dt);

        let batch = ships.proj_camera_world_array(projection, camera.view_matrix());

        frame += 1;
        let elapsed = channels.channel(Channel::PositionY).total_elapsed();
        if elapsed >= next_report {
            next_report += 1.0;
            let ship = ships.transform(0)?;
            println!(
                "t={elapsed:>5.2}s  position={:>8.2}  yaw={:>6.1}°  particles={:>3}  clip_w={:.2}",
                ship.position,
                liftoff::utils::rad_to_deg(ship.rotation.y),
                exhaust.alive_count(),
                batch[0].w_axis.w,
            );
        }
    }

    println!(
        "Flight finished after {frame} frames; vehicle parked at {}",
        ships.transform(0)?.position
    );
    Ok(())
}
