/// Pure game-logic functions.
///
/// Every public function takes an immutable reference to the current
/// `GameState` (and, where needed, an RNG handle) and returns a brand-new
/// `GameState`.  Side effects are limited to the injected RNG.

use rand::Rng;

use crate::entities::{
    Beam, Bomb, BombColor, DirKeys, Explosion, GameState, GameStatus, Player, PlayerPose, Rect,
};

// ── Viewport & tuning constants ──────────────────────────────────────────────

/// Logical viewport width — constant for the program lifetime.
pub const WIDTH: i32 = 1600;
/// Logical viewport height — constant for the program lifetime.
pub const HEIGHT: i32 = 900;

/// Bombs alive at game start.
pub const NUM_OF_BOMBS: usize = 5;

/// Per-axis speed quantum; every moving entity travels in multiples of this.
pub const STEP: i32 = 5;

pub const PLAYER_SIZE: i32 = 80;
pub const BEAM_W: i32 = 40;
pub const BEAM_H: i32 = 12;

/// Render frames an explosion lives for.
pub const EXPLOSION_LIFE: i32 = 4;

const BOMB_RADII: [i32; 3] = [10, 20, 30];
const BOMB_COLORS: [BombColor; 4] = [
    BombColor::Red,
    BombColor::Green,
    BombColor::Blue,
    BombColor::Cyan,
];

// ── Bounds ───────────────────────────────────────────────────────────────────

/// Per-axis containment test against the fixed viewport.
///
/// Returns `(within_x, within_y)` — `true` means the rect lies fully inside
/// the viewport on that axis.  Edge contact (`left == 0`, `right == WIDTH`)
/// still counts as inside.  Pure and idempotent.
pub fn check_bound(rect: &Rect) -> (bool, bool) {
    let within_x = rect.left() >= 0 && rect.right() <= WIDTH;
    let within_y = rect.top() >= 0 && rect.bottom() <= HEIGHT;
    (within_x, within_y)
}

// ── Input ────────────────────────────────────────────────────────────────────

/// Net movement for one frame: the vector sum of each held key's fixed
/// contribution.  Opposite keys cancel; two orthogonal keys held together
/// form one of the four diagonals.
pub fn sum_move(keys: &DirKeys) -> (i32, i32) {
    let delta = [
        (keys.up, (0, -STEP)),
        (keys.down, (0, STEP)),
        (keys.left, (-STEP, 0)),
        (keys.right, (STEP, 0)),
    ];
    let mut mv = (0, 0);
    for (held, (dx, dy)) in delta {
        if held {
            mv.0 += dx;
            mv.1 += dy;
        }
    }
    mv
}

// ── Constructors ─────────────────────────────────────────────────────────────

/// Spawn one bomb: random radius, palette color, uniform position over the
/// whole viewport (the circle may clip an edge at spawn — preserved
/// behavior), and a diagonal velocity with each component drawn from ±STEP.
pub fn spawn_bomb(rng: &mut impl Rng) -> Bomb {
    let radius = BOMB_RADII[rng.gen_range(0..BOMB_RADII.len())];
    let color = BOMB_COLORS[rng.gen_range(0..BOMB_COLORS.len())];
    let cx = rng.gen_range(0..=WIDTH);
    let cy = rng.gen_range(0..=HEIGHT);
    let vx = if rng.gen_bool(0.5) { STEP } else { -STEP };
    let vy = if rng.gen_bool(0.5) { STEP } else { -STEP };
    Bomb {
        rect: Rect::from_center(cx, cy, 2 * radius, 2 * radius),
        vx,
        vy,
        radius,
        color,
    }
}

/// Build the initial game state: the kokaton centered at (900, 400) facing
/// right, five fresh bombs, nothing else in flight.
pub fn init_state(rng: &mut impl Rng) -> GameState {
    GameState {
        player: Player {
            rect: Rect::from_center(900, 400, PLAYER_SIZE, PLAYER_SIZE),
            dire: (STEP, 0),
            pose: PlayerPose::Normal,
        },
        bombs: (0..NUM_OF_BOMBS).map(|_| spawn_bomb(rng)).collect(),
        beam: None,
        explosions: Vec::new(),
        score: 0,
        status: GameStatus::Playing,
        frame: 0,
    }
}

// ── Input-driven state transitions (pure) ────────────────────────────────────

/// Fire a beam from the player's current facing direction.
///
/// The beam spawns at the player's center offset by half the sprite size in
/// the facing direction (so it emerges at the sprite's edge) and inherits
/// the facing vector as its velocity.  Any beam already in flight is simply
/// replaced — most recent fire wins.
pub fn fire_beam(state: &GameState) -> GameState {
    let (vx, vy) = state.player.dire;
    let p = &state.player.rect;
    let cx = p.center_x() + p.w / 2 * vx / STEP;
    let cy = p.center_y() + p.h / 2 * vy / STEP;
    GameState {
        beam: Some(Beam {
            rect: Rect::from_center(cx, cy, BEAM_W, BEAM_H),
            vx,
            vy,
        }),
        ..state.clone()
    }
}

// ── Per-frame tick (pure) ────────────────────────────────────────────────────

/// Advance the simulation by one frame.
///
/// Collision resolution runs against the rects as of the previous frame,
/// before anything moves; removals are applied in a separate compaction
/// step rather than while iterating.
pub fn tick(state: &GameState, keys: &DirKeys) -> GameState {
    let frame = state.frame + 1;

    // ── 1. Player ↔ bombs: any overlap ends the session ──────────────────────
    // The returned state is frozen apart from the pose so the defeat frame
    // renders exactly what the player collided with.
    if state
        .bombs
        .iter()
        .any(|bomb| state.player.rect.overlaps(&bomb.rect))
    {
        return GameState {
            player: Player {
                pose: PlayerPose::Defeated,
                ..state.player.clone()
            },
            status: GameStatus::GameOver,
            frame,
            ..state.clone()
        };
    }

    let mut player = state.player.clone();
    // A hit celebration lasts one frame
    if player.pose == PlayerPose::Hit {
        player.pose = PlayerPose::Normal;
    }

    // ── 2. Age surviving explosions ──────────────────────────────────────────
    // Aged before collision resolution so an explosion spawned this frame
    // still shows all four of its variants.
    let mut explosions: Vec<Explosion> = state
        .explosions
        .iter()
        .map(|e| Explosion {
            life: e.life - 1,
            ..*e
        })
        .filter(|e| e.life > 0)
        .collect();

    // ── 3. Beam ↔ bombs: first overlapping bomb only ─────────────────────────
    let mut bombs = state.bombs.clone();
    let mut beam = state.beam.clone();
    let mut score = state.score;

    let hit = beam
        .as_ref()
        .and_then(|b| bombs.iter().position(|bomb| bomb.rect.overlaps(&b.rect)));
    if let Some(i) = hit {
        let dead = bombs.remove(i);
        explosions.push(Explosion {
            x: dead.rect.center_x(),
            y: dead.rect.center_y(),
            life: EXPLOSION_LIFE,
        });
        beam = None;
        player.pose = PlayerPose::Hit;
        score += 1;
    }

    // ── 4. Move the player — all-or-nothing at the bounds ────────────────────
    let mv = sum_move(keys);
    let tentative = player.rect.moved(mv.0, mv.1);
    if check_bound(&tentative) == (true, true) {
        player.rect = tentative;
    }
    // Facing updates on any nonzero input, even when the move was reverted
    if mv != (0, 0) {
        player.dire = mv;
    }

    // ── 5. Move bombs, reflecting per axis ───────────────────────────────────
    let bombs: Vec<Bomb> = bombs
        .iter()
        .map(|bomb| {
            let (within_x, within_y) = check_bound(&bomb.rect);
            let vx = if within_x { bomb.vx } else { -bomb.vx };
            let vy = if within_y { bomb.vy } else { -bomb.vy };
            Bomb {
                rect: bomb.rect.moved(vx, vy),
                vx,
                vy,
                ..bomb.clone()
            }
        })
        .collect();

    // ── 6. Move the beam; cull it once fully off-screen ──────────────────────
    let beam = beam.and_then(|b| {
        let rect = b.rect.moved(b.vx, b.vy);
        let off_screen =
            rect.right() < 0 || rect.left() > WIDTH || rect.bottom() < 0 || rect.top() > HEIGHT;
        if off_screen {
            None
        } else {
            Some(Beam { rect, ..b })
        }
    });

    GameState {
        player,
        bombs,
        beam,
        explosions,
        score,
        status: GameStatus::Playing,
        frame,
    }
}
