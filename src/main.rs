//! Handloft entry point
//!
//! The real demo runs in the browser; the native binary is a headless
//! smoke run that drops the balloon onto a held hand landmark and logs
//! what the simulation does.

#[cfg(not(target_arch = "wasm32"))]
fn main() {
    use glam::Vec2;
    use rand::SeedableRng;
    use rand_pcg::Pcg32;

    use handloft::consts::{ARENA_HEIGHT, ARENA_WIDTH};
    use handloft::sim::{Arena, Balloon, step};
    use handloft::tuning::BalloonTuning;

    env_logger::init();
    log::info!("Handloft (native) starting headless smoke run...");

    let arena = match Arena::new(ARENA_WIDTH, ARENA_HEIGHT) {
        Ok(arena) => arena,
        Err(err) => {
            log::error!("bad arena config: {err}");
            std::process::exit(1);
        }
    };
    let tuning = BalloonTuning::load();
    let mut rng = Pcg32::seed_from_u64(42);
    let mut balloon = match Balloon::spawn(tuning, &arena, &mut rng) {
        Ok(balloon) => balloon,
        Err(err) => {
            log::error!("bad balloon config: {err}");
            std::process::exit(1);
        }
    };

    // One landmark held mid-fall, as if a fingertip waited under the balloon
    let hand_point = Vec2::new(arena.width * 0.5, 400.0);
    let mut lifts = 0u32;

    for frame in 0..3000 {
        let falling = balloon.vel.y >= 0.0;
        step(&mut balloon, &arena, &[hand_point]);
        if falling && balloon.vel.y < 0.0 {
            lifts += 1;
            log::info!(
                "frame {frame}: lift at y={:.1}, vel.y={:.2}",
                balloon.pos.y,
                balloon.vel.y
            );
        }
    }

    println!(
        "after 3000 frames: pos=({:.1}, {:.1}), vel=({:.2}, {:.2}), {lifts} lifts",
        balloon.pos.x, balloon.pos.y, balloon.vel.x, balloon.vel.y
    );
}

#[cfg(target_arch = "wasm32")]
fn main() {
    // WASM entry points live in `handloft::bridge`, this is just to satisfy the compiler
}
