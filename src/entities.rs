/// All game entity types — pure data plus basic rect geometry, no game rules.

/// Axis-aligned rectangle in logical viewport units (top-left + size).
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct Rect {
    pub x: i32,
    pub y: i32,
    pub w: i32,
    pub h: i32,
}

impl Rect {
    pub fn new(x: i32, y: i32, w: i32, h: i32) -> Self {
        Rect { x, y, w, h }
    }

    /// Build a rect of the given size centered on `(cx, cy)`.
    pub fn from_center(cx: i32, cy: i32, w: i32, h: i32) -> Self {
        Rect {
            x: cx - w / 2,
            y: cy - h / 2,
            w,
            h,
        }
    }

    pub fn left(&self) -> i32 {
        self.x
    }

    pub fn right(&self) -> i32 {
        self.x + self.w
    }

    pub fn top(&self) -> i32 {
        self.y
    }

    pub fn bottom(&self) -> i32 {
        self.y + self.h
    }

    pub fn center_x(&self) -> i32 {
        self.x + self.w / 2
    }

    pub fn center_y(&self) -> i32 {
        self.y + self.h / 2
    }

    /// A copy shifted by `(dx, dy)`.
    pub fn moved(&self, dx: i32, dy: i32) -> Self {
        Rect {
            x: self.x + dx,
            y: self.y + dy,
            ..*self
        }
    }

    /// Strict overlap test — rects that merely touch along an edge do
    /// not collide.
    pub fn overlaps(&self, other: &Rect) -> bool {
        self.left() < other.right()
            && self.right() > other.left()
            && self.top() < other.bottom()
            && self.bottom() > other.top()
    }
}

// ── Player ────────────────────────────────────────────────────────────────────

#[derive(Clone, Debug, PartialEq)]
pub enum PlayerPose {
    /// Normal flight, glyph keyed by the facing direction.
    Normal,
    /// One-frame celebration shown when a beam destroys a bomb.
    Hit,
    /// Terminal pose shown during the defeat pause.
    Defeated,
}

#[derive(Clone, Debug)]
pub struct Player {
    pub rect: Rect,
    /// Last nonzero net movement vector — the facing direction. Persists
    /// across idle frames and seeds the beam's velocity.
    pub dire: (i32, i32),
    pub pose: PlayerPose,
}

// ── Bomb ──────────────────────────────────────────────────────────────────────

#[derive(Clone, Copy, Debug, PartialEq)]
pub enum BombColor {
    Red,
    Green,
    Blue,
    Cyan,
}

#[derive(Clone, Debug)]
pub struct Bomb {
    /// Square bounding rect, side = 2 × radius.
    pub rect: Rect,
    pub vx: i32,
    pub vy: i32,
    pub radius: i32,
    pub color: BombColor,
}

// ── Beam ──────────────────────────────────────────────────────────────────────

#[derive(Clone, Debug)]
pub struct Beam {
    pub rect: Rect,
    /// Velocity fixed at creation to the player's facing direction.
    pub vx: i32,
    pub vy: i32,
}

// ── Explosion ─────────────────────────────────────────────────────────────────

#[derive(Clone, Debug)]
pub struct Explosion {
    /// Center of the destroyed bomb at destruction time.
    pub x: i32,
    pub y: i32,
    /// Remaining render frames; starts at 4, decremented once per frame.
    /// The remaining value also selects which flip-variant is drawn.
    pub life: i32,
}

// ── Input snapshot ────────────────────────────────────────────────────────────

/// Which directional keys are held this frame.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub struct DirKeys {
    pub up: bool,
    pub down: bool,
    pub left: bool,
    pub right: bool,
}

// ── Master game state ─────────────────────────────────────────────────────────

#[derive(Clone, Debug, PartialEq)]
pub enum GameStatus {
    Playing,
    GameOver,
}

/// The entire game state.  Cloneable so pure update functions can
/// return a new copy without mutating the original.
#[derive(Clone, Debug)]
pub struct GameState {
    pub player: Player,
    pub bombs: Vec<Bomb>,
    /// At most one beam is tracked; firing again replaces it.
    pub beam: Option<Beam>,
    pub explosions: Vec<Explosion>,
    pub score: u32,
    pub status: GameStatus,
    /// Frame counter — observability only, never consulted by game rules.
    pub frame: u64,
}
