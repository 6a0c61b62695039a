//! Frame composition: splash screen, world, HUD and game-over overlay
//!
//! Everything here takes the session by shared reference.

use glam::Vec2;

use super::Canvas;
use super::vertex::{Color, colors};
use crate::settings::Settings;
use crate::sim::{GamePhase, Session, Verdict};

const TITLE_SIZE: f32 = 40.0;
const SCORE_SIZE: f32 = 30.0;
const TEXT_SIZE: f32 = 20.0;
const HUD_MARGIN: f32 = 10.0;
const HUD_LINE: f32 = 30.0;

/// Draw the current frame
pub fn render<R>(session: &Session<R>, canvas: &mut impl Canvas, settings: &Settings) {
    match session.phase {
        GamePhase::Splash => draw_splash(canvas),
        GamePhase::Playing | GamePhase::GameOver => {
            draw_world(session, canvas, settings);
            draw_hud(session, canvas);
            if session.phase == GamePhase::GameOver {
                draw_game_over(session, canvas);
            }
        }
    }
}

fn draw_centered(canvas: &mut impl Canvas, text: &str, y: f32, size: f32, color: Color) {
    let x = canvas.screen_size().x / 2.0 - canvas.measure_text(text, size) / 2.0;
    canvas.draw_text(text, Vec2::new(x, y), size, color);
}

fn draw_splash(canvas: &mut impl Canvas) {
    let h = canvas.screen_size().y;
    draw_centered(canvas, "LUNAR LANDER", h / 3.0, TITLE_SIZE, colors::TITLE);
    draw_centered(canvas, "Press ENTER to start", h / 2.0, TEXT_SIZE, colors::WHITE);
    draw_centered(
        canvas,
        "Press A to toggle assist mode",
        h / 2.0 + HUD_LINE,
        TEXT_SIZE,
        colors::WHITE,
    );
}

fn draw_world<R>(session: &Session<R>, canvas: &mut impl Canvas, settings: &Settings) {
    for (a, b) in session.terrain.segments() {
        canvas.draw_line(a, b, colors::TERRAIN);
    }

    for pad in &session.pads {
        canvas.draw_rect(
            Vec2::new(pad.x, pad.y),
            Vec2::new(pad.width, pad.height),
            colors::PAD,
        );
    }

    let segments = settings.particle_segments();
    if segments > 0 {
        for particle in session.particles.iter() {
            canvas.draw_circle(particle.pos, particle.size, segments, particle.display_color());
        }
    }

    let craft = &session.craft;
    let [left, right, nose] = craft.hull(session.tuning.hull_radius);
    canvas.draw_triangle(left, right, nose, colors::CRAFT);

    if settings.flight_indicators {
        let speed = craft.speed();
        let speed_color = traffic_light(speed, 0.2, 0.4);
        canvas.draw_text(
            &format!("{speed:.2}"),
            craft.pos + Vec2::new(-20.0, -40.0),
            TEXT_SIZE,
            speed_color,
        );

        let tilt = craft.tilt();
        let tilt_color = traffic_light(tilt, 5.0, 10.0);
        canvas.draw_text(
            &format!("{tilt:.1}"),
            craft.pos + Vec2::new(20.0, -40.0),
            TEXT_SIZE,
            tilt_color,
        );
    }
}

/// Green below `good`, yellow below `fair`, red otherwise
fn traffic_light(value: f32, good: f32, fair: f32) -> Color {
    if value < good {
        colors::GREEN
    } else if value < fair {
        colors::YELLOW
    } else {
        colors::RED
    }
}

fn draw_hud<R>(session: &Session<R>, canvas: &mut impl Canvas) {
    let line = |i: f32| Vec2::new(HUD_MARGIN, HUD_MARGIN + i * HUD_LINE);

    canvas.draw_text(&format!("SCORE: {}", session.score), line(0.0), TEXT_SIZE, colors::WHITE);
    canvas.draw_text(
        &format!("FUEL: {:.0}", session.craft.fuel),
        line(1.0),
        TEXT_SIZE,
        colors::WHITE,
    );
    let (assist, assist_color) = if session.assist {
        ("ASSIST: ON", colors::GREEN)
    } else {
        ("ASSIST: OFF", colors::RED)
    };
    canvas.draw_text(assist, line(2.0), TEXT_SIZE, assist_color);

    if let Some((reason, color)) = verdict_banner(session.verdict) {
        canvas.draw_text(reason, line(3.0), TEXT_SIZE, color);
    }
}

/// Banner text for a verdict (none while flying)
pub fn verdict_banner(verdict: Verdict) -> Option<(&'static str, Color)> {
    match verdict {
        Verdict::NoVerdict => None,
        Verdict::TerrainCollision => Some(("COLLISION: TERRAIN", colors::RED)),
        Verdict::PadSuccess => Some(("LANDED SUCCESSFULLY", colors::GREEN)),
        Verdict::PadFailure => Some(("LANDING FAILED", colors::YELLOW)),
    }
}

fn draw_game_over<R>(session: &Session<R>, canvas: &mut impl Canvas) {
    let h = canvas.screen_size().y;
    let (message, color) = if session.score > 0 {
        ("LANDED!", colors::GREEN)
    } else {
        ("CRASHED!", colors::RED)
    };
    draw_centered(canvas, message, h / 3.0, TITLE_SIZE, color);
    draw_centered(
        canvas,
        &format!("SCORE: {}", session.score),
        h / 2.0,
        SCORE_SIZE,
        colors::WHITE,
    );
    draw_centered(canvas, "Press ENTER to retry", h * 2.0 / 3.0, TEXT_SIZE, colors::WHITE);
}
