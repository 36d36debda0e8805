use crate::config::SpriteSize;

/// Axis-aligned rectangle in playfield pixels, y pointing down.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Bounds {
    pub x: f32,
    pub y: f32,
    pub w: f32,
    pub h: f32,
}

impl Bounds {
    pub const fn new(x: f32, y: f32, w: f32, h: f32) -> Self {
        Self { x, y, w, h }
    }

    pub fn mid_top(cx: f32, top: f32, size: SpriteSize) -> Self {
        Self::new(cx - size.w / 2.0, top, size.w, size.h)
    }

    pub fn mid_bottom(cx: f32, bottom: f32, size: SpriteSize) -> Self {
        Self::new(cx - size.w / 2.0, bottom - size.h, size.w, size.h)
    }

    pub fn centered(cx: f32, cy: f32, size: SpriteSize) -> Self {
        Self::new(cx - size.w / 2.0, cy - size.h / 2.0, size.w, size.h)
    }

    pub fn right(&self) -> f32 {
        self.x + self.w
    }

    pub fn bottom(&self) -> f32 {
        self.y + self.h
    }

    pub fn center_x(&self) -> f32 {
        self.x + self.w / 2.0
    }

    pub fn center_y(&self) -> f32 {
        self.y + self.h / 2.0
    }

    /// Strict overlap: rectangles that only share an edge do not intersect.
    pub fn intersects(&self, other: &Bounds) -> bool {
        self.x < other.right()
            && self.right() > other.x
            && self.y < other.bottom()
            && self.bottom() > other.y
    }

    pub fn translate(&mut self, dx: f32, dy: f32) {
        self.x += dx;
        self.y += dy;
    }
}

/// A ball fired by the enemy or a fireball fired by the player.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Projectile {
    pub bounds: Bounds,
    pub dx: f32,
    pub dy: f32,
}

impl Projectile {
    pub fn new(bounds: Bounds, dx: f32, dy: f32) -> Self {
        Self { bounds, dx, dy }
    }

    pub fn advance(&mut self) {
        self.bounds.translate(self.dx, self.dy);
    }
}

#[derive(Debug, Clone, PartialEq)]
pub struct Shield {
    pub bounds: Bounds,
    pub active: bool,
    pub hits: u32,
    pub max_hits: u32,
}

impl Shield {
    pub fn new(bounds: Bounds, max_hits: u32) -> Self {
        Self {
            bounds,
            active: true,
            hits: 0,
            max_hits,
        }
    }

    /// Registers one fireball hit. Returns true if that hit broke the shield.
    pub fn absorb_hit(&mut self) -> bool {
        if !self.active {
            return false;
        }
        self.hits += 1;
        if self.hits >= self.max_hits {
            self.active = false;
            return true;
        }
        false
    }

    /// Shows or hides the shield. Showing it restores it at full strength.
    pub fn set_visible(&mut self, visible: bool) {
        self.active = visible;
        if visible {
            self.hits = 0;
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq)]
pub struct PowerUp {
    pub bounds: Bounds,
}

#[derive(Debug, Clone, PartialEq)]
pub struct Player {
    pub bounds: Bounds,
    pub health: u32,
    /// Session time the current invincibility window opened.
    pub invincible_since: Option<u64>,
    pub last_fire: Option<u64>,
}

impl Player {
    pub fn is_invincible(&self) -> bool {
        self.invincible_since.is_some()
    }

    /// Applies damage unless invincible. Returns true if health dropped.
    pub fn take_hit(&mut self, damage: u32) -> bool {
        if self.is_invincible() {
            return false;
        }
        self.health = self.health.saturating_sub(damage);
        true
    }
}

#[derive(Debug, Clone, PartialEq)]
pub struct Enemy {
    pub bounds: Bounds,
}
