use std::f32::consts::TAU;

use rand::Rng;

use super::entities::{Bounds, PowerUp, Projectile};
use super::session::{Session, Timers};

/// Fires every spawn whose interval elapsed during this frame.
pub fn run_timers(session: &mut Session, dt: u64) {
    let single = Timers::elapse(&mut session.timers.single_shot, dt, session.config.single_shot_ms);
    for _ in 0..single {
        spawn_single(session);
    }

    let bursts = Timers::elapse(&mut session.timers.burst, dt, session.config.burst_ms);
    let count = session.config.burst_count;
    for _ in 0..bursts {
        spawn_burst(session, count);
    }

    let powerups = Timers::elapse(&mut session.timers.powerup, dt, session.config.powerup_ms);
    for _ in 0..powerups {
        spawn_powerup(session);
    }
}

/// One ball dropping straight down from under the enemy.
pub fn spawn_single(session: &mut Session) {
    let e = session.enemy.bounds;
    let bounds = Bounds::mid_top(e.center_x(), e.bottom(), session.config.ball_size);
    session
        .balls
        .push(Projectile::new(bounds, 0.0, session.config.ball_speed));
}

/// `n` balls from the enemy's centre, evenly spread over a full circle.
pub fn spawn_burst(session: &mut Session, n: usize) {
    let e = session.enemy.bounds;
    let speed = session.config.ball_speed;
    let size = session.config.ball_size;
    for i in 0..n {
        let angle = i as f32 * TAU / n as f32;
        let bounds = Bounds::centered(e.center_x(), e.center_y(), size);
        session
            .balls
            .push(Projectile::new(bounds, angle.cos() * speed, angle.sin() * speed));
    }
}

pub fn spawn_powerup(session: &mut Session) {
    let margin = session.config.powerup_margin;
    let width = session.config.width;
    let x = if width > 2.0 * margin {
        session.rng.gen_range(margin..=width - margin)
    } else {
        width / 2.0
    };
    session.powerups.push(PowerUp {
        bounds: Bounds::mid_top(x, 0.0, session.config.powerup_size),
    });
}

/// Player shot. Respects the fire cooldown; returns false if still cooling down.
pub fn fire(session: &mut Session) -> bool {
    let now = session.now_ms;
    let ready = session
        .player
        .last_fire
        .map_or(true, |last| now - last >= session.config.fire_cooldown_ms);
    if !ready {
        return false;
    }
    let p = session.player.bounds;
    let bounds = Bounds::mid_bottom(p.center_x(), p.y, session.config.ball_size);
    session
        .fireballs
        .push(Projectile::new(bounds, 0.0, -session.config.fireball_speed));
    session.player.last_fire = Some(now);
    true
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::config::GameConfig;
    use approx::assert_relative_eq;

    fn session() -> Session {
        Session::with_seed(GameConfig::default(), 7)
    }

    #[test]
    fn burst_of_twenty_is_evenly_spaced() {
        let mut s = session();
        spawn_burst(&mut s, 20);
        assert_eq!(s.balls.len(), 20);

        let cx = s.enemy.bounds.center_x();
        let cy = s.enemy.bounds.center_y();
        for (i, ball) in s.balls.iter().enumerate() {
            let speed = (ball.dx * ball.dx + ball.dy * ball.dy).sqrt();
            assert_relative_eq!(speed, 5.0, epsilon = 1e-4);

            let mut degrees = ball.dy.atan2(ball.dx).to_degrees();
            if degrees < -1e-3 {
                degrees += 360.0;
            }
            assert_relative_eq!(degrees, i as f32 * 18.0, epsilon = 1e-3);

            assert_relative_eq!(ball.bounds.center_x(), cx);
            assert_relative_eq!(ball.bounds.center_y(), cy);
        }
    }

    #[test]
    fn single_shot_drops_from_enemy() {
        let mut s = session();
        spawn_single(&mut s);
        let ball = s.balls[0];
        assert_eq!((ball.dx, ball.dy), (0.0, 5.0));
        assert_eq!(ball.bounds.y, s.enemy.bounds.bottom());
        assert_eq!(ball.bounds.center_x(), s.enemy.bounds.center_x());
    }

    #[test]
    fn powerups_spawn_inside_margins() {
        let mut s = session();
        for _ in 0..200 {
            spawn_powerup(&mut s);
        }
        assert!(s
            .powerups
            .iter()
            .all(|p| (50.0..=750.0).contains(&p.bounds.center_x()) && p.bounds.y == 0.0));
    }

    #[test]
    fn fire_respects_cooldown() {
        let mut s = session();
        assert!(fire(&mut s));
        assert_eq!(s.fireballs[0].bounds.bottom(), s.player.bounds.y);
        assert_eq!(s.fireballs[0].dy, -8.0);

        s.now_ms += 999;
        assert!(!fire(&mut s));
        s.now_ms += 1;
        assert!(fire(&mut s));
        assert_eq!(s.fireballs.len(), 2);
    }

    #[test]
    fn timers_spawn_on_schedule() {
        let mut s = session();
        run_timers(&mut s, 999);
        assert!(s.balls.is_empty());
        run_timers(&mut s, 1);
        assert_eq!(s.balls.len(), 1);
        run_timers(&mut s, 2000);
        // two more singles and the first burst
        assert_eq!(s.balls.len(), 3 + 20);
        assert!(s.powerups.is_empty());
        run_timers(&mut s, 7000);
        assert_eq!(s.powerups.len(), 1);
    }
}
