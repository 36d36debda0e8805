use std::fs;

use crossterm::event::{KeyCode, KeyEvent, KeyModifiers};

use bullet_hell::game::{Bounds, PlayerInput, PowerUp, Projectile, Session, StepOutcome};
use bullet_hell::{App, GameConfig, Scene};

fn quiet_config(dir: &tempfile::TempDir) -> GameConfig {
    GameConfig {
        frame_ms: 10,
        single_shot_ms: 0,
        burst_ms: 0,
        powerup_ms: 0,
        scores_path: Some(dir.path().join("highscores.json")),
        ..GameConfig::default()
    }
}

fn ball_on(player: &Bounds) -> Projectile {
    Projectile::new(Bounds::new(player.x, player.y, 24.0, 24.0), 0.0, 0.0)
}

fn press(app: &mut App, code: KeyCode) {
    app.on_key(KeyEvent::new(code, KeyModifiers::NONE));
}

#[test]
fn play_lose_and_save_score() {
    let dir = tempfile::tempdir().unwrap();
    let mut app = App::with_seed(quiet_config(&dir), 42);

    press(&mut app, KeyCode::Enter);
    assert_eq!(app.scene, Scene::Playing);
    assert_eq!(app.session.player.health, 100);

    // Survive a couple of seconds first so the score is non-zero
    for _ in 0..250 {
        app.on_tick();
    }
    assert_eq!(app.session.score, 2);

    let p = app.session.player.bounds;
    app.session.balls.push(ball_on(&p));
    app.on_tick();
    assert_eq!(app.session.player.health, 90);
    assert_eq!(app.scene, Scene::Playing);

    for _ in 0..9 {
        app.session.balls.push(ball_on(&p));
    }
    app.on_tick();
    assert_eq!(app.session.player.health, 0);
    assert_eq!(app.scene, Scene::Lose);
    let final_score = app.session.score;

    app.on_tick();
    assert_eq!(app.scene, Scene::NameEntry);
    assert!(app.name_buffer.is_empty());

    for c in "Bob".chars() {
        press(&mut app, KeyCode::Char(c));
    }
    press(&mut app, KeyCode::Enter);
    assert_eq!(app.scene, Scene::Menu);

    let raw = fs::read_to_string(dir.path().join("highscores.json")).unwrap();
    let saved: serde_json::Value = serde_json::from_str(&raw).unwrap();
    assert_eq!(saved, serde_json::json!([{ "name": "Bob", "score": final_score }]));
}

#[test]
fn lose_is_reported_once() {
    let dir = tempfile::tempdir().unwrap();
    let mut session = Session::with_seed(quiet_config(&dir), 1);
    session.player.health = 10;

    let p = session.player.bounds;
    session.balls.push(ball_on(&p));
    assert_eq!(session.step(PlayerInput::default()), StepOutcome::JustLost);

    session.balls.push(ball_on(&p));
    assert_eq!(session.step(PlayerInput::default()), StepOutcome::GameOver);
    assert_eq!(session.player.health, 0);
}

#[test]
fn invincibility_lasts_exactly_its_duration() {
    let dir = tempfile::tempdir().unwrap();
    let mut session = Session::with_seed(quiet_config(&dir), 1);
    let p = session.player.bounds;

    session.powerups.push(PowerUp {
        bounds: Bounds::new(p.x, p.y, 24.0, 24.0),
    });
    // The power-up falls a little before touching the player
    session.step(PlayerInput::default());
    let picked_at = session.player.invincible_since.expect("power-up collected");
    assert!(session.powerups.is_empty());

    while session.now_ms + 10 < picked_at + 2990 {
        session.step(PlayerInput::default());
    }
    // Last frame inside the window
    session.balls.push(ball_on(&p));
    session.step(PlayerInput::default());
    assert_eq!(session.now_ms, picked_at + 2990);
    assert_eq!(session.player.health, 100);

    // First frame after it
    session.balls.push(ball_on(&p));
    session.step(PlayerInput::default());
    assert!(!session.player.is_invincible());
    assert_eq!(session.player.health, 90);
}

#[test]
fn holding_fire_shoots_once_per_cooldown() {
    let dir = tempfile::tempdir().unwrap();
    let mut session = Session::with_seed(quiet_config(&dir), 1);
    // Drop the shields so fireballs fly freely
    session.step(PlayerInput::default());
    for shield in &mut session.shields {
        shield.set_visible(false);
    }

    let fire = PlayerInput {
        fire: true,
        ..PlayerInput::default()
    };
    let mut shots = 0;
    for _ in 0..250 {
        let before = session.fireballs.len();
        session.step(fire);
        if session.fireballs.len() > before {
            shots += 1;
        }
    }
    // 2.5 seconds of held fire: shots at 0s, 1s and 2s
    assert_eq!(shots, 3);
}

#[test]
fn default_session_spawns_on_its_own() {
    let mut session = Session::with_seed(GameConfig::default(), 9);
    // 3 seconds at 16ms per frame
    for _ in 0..188 {
        session.step(PlayerInput::default());
    }
    assert!(session.now_ms >= 3000);
    // Some balls may already have hit the player or left the screen
    assert!(!session.balls.is_empty());
    assert!(session.score >= 3);
}
