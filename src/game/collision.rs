use super::session::Session;

/// Resolves all overlaps for this frame. Every collision consumes the
/// projectile or power-up involved.
pub fn resolve(session: &mut Session) {
    fireballs(session);
    balls_vs_player(session);
    powerups_vs_player(session);
}

/// A fireball stops at the first active shield it touches; only fireballs
/// that got past every shield can knock out an enemy ball.
fn fireballs(session: &mut Session) {
    let shields = &mut session.shields;
    let balls = &mut session.balls;
    session.fireballs.retain(|fire| {
        if let Some(shield) = shields
            .iter_mut()
            .find(|s| s.active && fire.bounds.intersects(&s.bounds))
        {
            if shield.absorb_hit() {
                log::debug!("Shield broken after {} hits", shield.hits);
            }
            return false;
        }
        if let Some(i) = balls.iter().position(|b| fire.bounds.intersects(&b.bounds)) {
            balls.remove(i);
            return false;
        }
        true
    });
}

fn balls_vs_player(session: &mut Session) {
    let damage = session.config.damage;
    let player = &mut session.player;
    let mut drained = false;
    session.balls.retain(|ball| {
        if !ball.bounds.intersects(&player.bounds) {
            return true;
        }
        if player.take_hit(damage) && player.health == 0 {
            drained = true;
        }
        false
    });
    if drained {
        session.lost = true;
    }
}

fn powerups_vs_player(session: &mut Session) {
    let player = &session.player.bounds;
    let before = session.powerups.len();
    session.powerups.retain(|p| !p.bounds.intersects(player));
    if session.powerups.len() < before {
        // A second pickup restarts the window rather than stacking
        session.player.invincible_since = Some(session.now_ms);
    }
}
