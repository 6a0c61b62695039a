//! Lunar Lander entry point
//!
//! Headless attract mode: a scripted pilot flies one session against a
//! [`DrawList`] canvas at a fixed 60 Hz frame time and reports the outcome.
//! Optional arguments: a JSON tuning file, then a quality preset
//! (`low`, `medium` or `high`).

use std::error::Error;

use lunar_lander::consts::{SCREEN_HEIGHT, SCREEN_WIDTH};
use lunar_lander::platform::{InputTracker, KeyState};
use lunar_lander::renderer::{DrawList, render};
use lunar_lander::sim::{GamePhase, Session, Verdict, Viewport, tick};
use lunar_lander::{QualityPreset, Settings, Tuning};

const FRAME_DT: f32 = 1.0 / 60.0;
/// Two minutes of flight
const MAX_FRAMES: u64 = 60 * 120;

/// Keys a simple autopilot would hold this frame
fn pilot(session: &Session, frame: u64) -> KeyState {
    let mut keys = KeyState::default();
    match session.phase {
        GamePhase::Splash | GamePhase::GameOver => {
            keys.confirm = true;
            return keys;
        }
        GamePhase::Playing => {}
    }

    // Turn assist on once, right after launch
    if frame == 1 && !session.assist {
        keys.assist = true;
    }

    let craft = &session.craft;
    let Some(pad) = session.pads.iter().min_by(|a, b| {
        (a.center_x() - craft.pos.x)
            .abs()
            .partial_cmp(&(b.center_x() - craft.pos.x).abs())
            .unwrap_or(std::cmp::Ordering::Equal)
    }) else {
        return keys;
    };

    // Lean toward the pad, level out as horizontal speed matches
    let dx = pad.center_x() - craft.pos.x;
    let desired_vx = (dx * 0.01).clamp(-1.5, 1.5);
    let target_rotation = ((desired_vx - craft.vel.x) * 30.0).clamp(-25.0, 25.0);
    if craft.rotation > target_rotation + 2.0 {
        keys.left = true;
    } else if craft.rotation < target_rotation - 2.0 {
        keys.right = true;
    }

    // Hover while off target, descend gently once above it
    let altitude = pad.y - craft.pos.y;
    let desired_vy = if dx.abs() < 20.0 {
        (altitude * 0.005).clamp(0.15, 1.0)
    } else {
        0.0
    };
    keys.thrust = craft.vel.y > desired_vy;
    keys
}

fn main() -> Result<(), Box<dyn Error>> {
    #[cfg(not(target_arch = "wasm32"))]
    env_logger::Builder::from_env(env_logger::Env::default().default_filter_or("info")).init();

    let mut args = std::env::args().skip(1);
    let tuning = match args.next() {
        Some(path) => Tuning::from_json(&std::fs::read_to_string(&path)?)?,
        None => Tuning::default(),
    };
    let quality = match args.next() {
        Some(name) => QualityPreset::parse(&name).unwrap_or_else(|| {
            log::warn!("Unknown quality preset '{name}', using Medium");
            QualityPreset::Medium
        }),
        None => QualityPreset::default(),
    };

    let settings = Settings::from_preset(quality);
    log::info!("Quality: {}", settings.quality.as_str());
    let mut session = Session::new(tuning, Viewport::new(SCREEN_WIDTH, SCREEN_HEIGHT));
    let mut canvas = DrawList::new(SCREEN_WIDTH, SCREEN_HEIGHT);
    let mut tracker = InputTracker::new();

    let mut verdict = Verdict::NoVerdict;
    let mut frames = 0;
    for frame in 0..MAX_FRAMES {
        let keys = pilot(&session, frame);
        let input = tracker.frame(keys, FRAME_DT);
        verdict = tick(&mut session, &input);

        canvas.clear();
        render(&session, &mut canvas, &settings);
        log::trace!(
            "frame {frame}: {} triangles, {} particles",
            canvas.triangle_count(),
            session.particles.len()
        );

        frames = frame + 1;
        if verdict.is_terminal() {
            break;
        }
    }

    if !verdict.is_terminal() {
        log::warn!("Pilot still airborne after {frames} frames");
    }
    println!(
        "{:?} after {frames} frames ({:.1}s): score {}, fuel {:.1}",
        verdict, session.elapsed, session.score, session.craft.fuel
    );
    Ok(())
}
