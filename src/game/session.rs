use rand::rngs::StdRng;
use rand::SeedableRng;

use super::entities::{Bounds, Enemy, Player, PowerUp, Projectile, Shield};
use super::{collision, spawner, step};
use crate::config::GameConfig;

// Shield placement relative to the enemy's horizontal centre
const SHIELD_GAP_OUTER: f32 = 150.0;
const SHIELD_GAP_INNER: f32 = 50.0;
const PLAYER_BOTTOM_MARGIN: f32 = 50.0;
const ENEMY_TOP_MARGIN: f32 = 50.0;

/// Held controls for one frame.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct PlayerInput {
    pub left: bool,
    pub right: bool,
    pub fire: bool,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum StepOutcome {
    Continue,
    /// Health reached zero during this step.
    JustLost,
    /// The session had already ended; nothing was simulated.
    GameOver,
}

/// Time accumulated towards each periodic event, in milliseconds.
#[derive(Debug, Clone, Default)]
pub(super) struct Timers {
    pub single_shot: u64,
    pub burst: u64,
    pub powerup: u64,
    pub score: u64,
    pub shield_cycle: u64,
}

impl Timers {
    /// Advances `acc` by `dt` and returns how many whole intervals elapsed.
    pub fn elapse(acc: &mut u64, dt: u64, interval: u64) -> u32 {
        if interval == 0 {
            return 0;
        }
        *acc += dt;
        let mut fired = 0;
        while *acc >= interval {
            *acc -= interval;
            fired += 1;
        }
        fired
    }
}

/// Everything that belongs to one game from start to game over.
#[derive(Debug, Clone)]
pub struct Session {
    pub config: GameConfig,
    pub player: Player,
    pub enemy: Enemy,
    pub balls: Vec<Projectile>,
    pub fireballs: Vec<Projectile>,
    pub shields: Vec<Shield>,
    pub powerups: Vec<PowerUp>,
    pub score: u32,
    /// Simulated milliseconds since the session started.
    pub now_ms: u64,
    pub shields_visible: bool,
    pub lost: bool,
    pub(super) timers: Timers,
    pub(super) rng: StdRng,
}

impl Session {
    pub fn new(config: GameConfig) -> Self {
        Self::with_rng(config, StdRng::from_entropy())
    }

    /// Deterministic session for replays and tests.
    pub fn with_seed(config: GameConfig, seed: u64) -> Self {
        Self::with_rng(config, StdRng::seed_from_u64(seed))
    }

    fn with_rng(config: GameConfig, rng: StdRng) -> Self {
        let cx = config.width / 2.0;
        let player = Player {
            bounds: Bounds::mid_bottom(cx, config.height - PLAYER_BOTTOM_MARGIN, config.player_size),
            health: config.max_health,
            invincible_since: None,
            last_fire: None,
        };
        let enemy = Enemy {
            bounds: Bounds::mid_top(cx, ENEMY_TOP_MARGIN, config.enemy_size),
        };

        let ecx = enemy.bounds.center_x();
        let top = enemy.bounds.bottom();
        let (sw, sh) = (config.shield_size.w, config.shield_size.h);
        let shields = [
            ecx - sw - SHIELD_GAP_OUTER,
            ecx - sw / 2.0 - SHIELD_GAP_INNER,
            ecx + SHIELD_GAP_INNER,
        ]
        .into_iter()
        .map(|x| Shield::new(Bounds::new(x, top, sw, sh), config.shield_max_hits))
        .collect();

        Self {
            player,
            enemy,
            balls: Vec::new(),
            fireballs: Vec::new(),
            shields,
            powerups: Vec::new(),
            score: 0,
            now_ms: 0,
            shields_visible: true,
            lost: false,
            timers: Timers::default(),
            rng,
            config,
        }
    }

    /// Runs one frame: timed spawns, movement, then collisions.
    pub fn step(&mut self, input: PlayerInput) -> StepOutcome {
        if self.lost {
            return StepOutcome::GameOver;
        }
        let dt = self.config.frame_ms;
        self.now_ms += dt;

        spawner::run_timers(self, dt);
        step::advance(self, input, dt);
        collision::resolve(self);

        if self.lost {
            log::info!("Game over at {}s with score {}", self.now_ms / 1000, self.score);
            StepOutcome::JustLost
        } else {
            StepOutcome::Continue
        }
    }

    pub fn invincible_remaining_ms(&self) -> u64 {
        self.player
            .invincible_since
            .map(|since| (since + self.config.invincible_ms).saturating_sub(self.now_ms))
            .unwrap_or(0)
    }

    pub fn playfield(&self) -> Bounds {
        Bounds::new(0.0, 0.0, self.config.width, self.config.height)
    }
}
