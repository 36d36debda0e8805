use super::entities::Bounds;
use super::session::{PlayerInput, Session, Timers};
use super::spawner;

/// Moves everything by one frame and runs the clock-driven rules.
pub fn advance(session: &mut Session, input: PlayerInput, dt: u64) {
    move_player(session, input);
    if input.fire {
        spawner::fire(session);
    }
    track_player(session);
    move_entities(session);
    prune_offscreen(session);
    accumulate_score(session, dt);
    cycle_shields(session, dt);
    expire_invincibility(session);
}

fn move_player(session: &mut Session, input: PlayerInput) {
    let speed = session.config.player_speed;
    let max_x = (session.config.width - session.player.bounds.w).max(0.0);
    let b = &mut session.player.bounds;
    if input.left {
        b.x -= speed;
    }
    if input.right {
        b.x += speed;
    }
    b.x = b.x.clamp(0.0, max_x);
}

/// Enemy slides towards the player's centre, never overshooting, so it
/// settles instead of jittering once aligned.
fn track_player(session: &mut Session) {
    let step = session.config.enemy_step;
    let gap = session.player.bounds.center_x() - session.enemy.bounds.center_x();
    session.enemy.bounds.x += gap.clamp(-step, step);
}

fn move_entities(session: &mut Session) {
    for ball in &mut session.balls {
        ball.advance();
    }
    for fire in &mut session.fireballs {
        fire.advance();
    }
    let fall = session.config.powerup_fall_speed;
    for p in &mut session.powerups {
        p.bounds.y += fall;
    }
}

fn outside(b: &Bounds, field: &Bounds) -> bool {
    b.right() < field.x || b.x > field.right() || b.bottom() < field.y || b.y > field.bottom()
}

fn prune_offscreen(session: &mut Session) {
    let field = session.playfield();
    session.balls.retain(|b| !outside(&b.bounds, &field));
    session.fireballs.retain(|f| !outside(&f.bounds, &field));
    session.powerups.retain(|p| !outside(&p.bounds, &field));
}

fn accumulate_score(session: &mut Session, dt: u64) {
    let seconds = Timers::elapse(&mut session.timers.score, dt, session.config.score_interval_ms);
    session.score += seconds;
}

fn cycle_shields(session: &mut Session, dt: u64) {
    let toggles = Timers::elapse(&mut session.timers.shield_cycle, dt, session.config.shield_cycle_ms);
    for _ in 0..toggles {
        session.shields_visible = !session.shields_visible;
        let visible = session.shields_visible;
        for shield in &mut session.shields {
            shield.set_visible(visible);
        }
        log::debug!("Shields {}", if visible { "up" } else { "down" });
    }
}

fn expire_invincibility(session: &mut Session) {
    if let Some(since) = session.player.invincible_since {
        if session.now_ms - since >= session.config.invincible_ms {
            session.player.invincible_since = None;
        }
    }
}
