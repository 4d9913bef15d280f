/// Rendering layer — all terminal I/O lives here.
///
/// Each function receives a mutable writer and an immutable view of the
/// game state.  No game logic is performed; this module only translates
/// the fixed 1600×900 logical viewport into terminal cells and state into
/// terminal commands.

use std::io::Write;

use crossterm::{
    cursor,
    style::{self, Color, Print},
    terminal,
    QueueableCommand,
};

use fight_kokaton::compute::{HEIGHT, STEP, WIDTH};
use fight_kokaton::entities::{
    Beam, Bomb, BombColor, Explosion, GameState, GameStatus, PlayerPose,
};

// ── Colour palette ────────────────────────────────────────────────────────────

const C_BORDER: Color = Color::DarkBlue;
const C_HUD_SCORE: Color = Color::Blue;
const C_TITLE: Color = Color::Yellow;
const C_PLAYER: Color = Color::White;
const C_PLAYER_HIT: Color = Color::Yellow;
const C_PLAYER_DEFEATED: Color = Color::Red;
const C_BEAM: Color = Color::Cyan;
const C_EXPLOSION: Color = Color::Yellow;
const C_HINT: Color = Color::DarkGrey;

// ── Sprite tables ─────────────────────────────────────────────────────────────

/// Direction-keyed player glyphs — one entry per discrete facing vector,
/// a pure lookup instead of a dispatch chain.
const PLAYER_GLYPHS: [((i32, i32), &str); 8] = [
    ((STEP, 0), "→"),
    ((STEP, -STEP), "↗"),
    ((STEP, STEP), "↘"),
    ((0, STEP), "↓"),
    ((-STEP, 0), "←"),
    ((-STEP, STEP), "↙"),
    ((-STEP, -STEP), "↖"),
    ((0, -STEP), "↑"),
];

/// Explosion flip-variants indexed by remaining life − 1; each variant is
/// shown exactly once over the 4-frame lifecycle.
const EXPLOSION_GLYPHS: [&str; 4] = ["✳", "✶", "✸", "✹"];

fn player_glyph(dire: (i32, i32)) -> &'static str {
    PLAYER_GLYPHS
        .iter()
        .find(|(d, _)| *d == dire)
        .map(|(_, g)| *g)
        .unwrap_or("→")
}

/// Beam glyph keyed by the direction's axis signature.
fn beam_glyph(vx: i32, vy: i32) -> &'static str {
    match (vx.signum(), vy.signum()) {
        (_, 0) => "━",
        (0, _) => "┃",
        (1, 1) | (-1, -1) => "╲",
        _ => "╱",
    }
}

fn bomb_glyph(radius: i32) -> &'static str {
    match radius {
        10 => "•",
        20 => "●",
        _ => "⬤",
    }
}

fn bomb_color(color: BombColor) -> Color {
    match color {
        BombColor::Red => Color::Red,
        BombColor::Green => Color::Green,
        BombColor::Blue => Color::Blue,
        BombColor::Cyan => Color::Cyan,
    }
}

// ── Logical → cell scaling ────────────────────────────────────────────────────

/// Map logical viewport coordinates into the bordered play area
/// (columns 1..w-2, rows 2..h-3).
fn to_cell(x: i32, y: i32, term_w: u16, term_h: u16) -> (u16, u16) {
    let cols = i64::from(term_w.saturating_sub(3).max(1));
    let rows = i64::from(term_h.saturating_sub(5).max(1));
    let cx = 1 + i64::from(x.clamp(0, WIDTH)) * cols / i64::from(WIDTH);
    let cy = 2 + i64::from(y.clamp(0, HEIGHT)) * rows / i64::from(HEIGHT);
    (cx as u16, cy as u16)
}

// ── Public entry point ────────────────────────────────────────────────────────

/// Render one complete frame.
pub fn render<W: Write>(out: &mut W, state: &GameState) -> std::io::Result<()> {
    let (term_w, term_h) = terminal::size()?;

    out.queue(terminal::Clear(terminal::ClearType::All))?;

    draw_border(out, term_w, term_h)?;
    draw_hud(out, state, term_w)?;

    for exp in &state.explosions {
        draw_explosion(out, exp, term_w, term_h)?;
    }
    for bomb in &state.bombs {
        draw_bomb(out, bomb, term_w, term_h)?;
    }
    if let Some(beam) = &state.beam {
        draw_beam(out, beam, term_w, term_h)?;
    }
    draw_player(out, state, term_w, term_h)?;
    draw_controls_hint(out, term_h)?;

    if state.status == GameStatus::GameOver {
        draw_game_over(out, state, term_w, term_h)?;
    }

    // Park cursor in a harmless spot and flush
    out.queue(style::ResetColor)?;
    out.queue(cursor::MoveTo(0, term_h.saturating_sub(1)))?;
    out.flush()?;
    Ok(())
}

// ── Border ────────────────────────────────────────────────────────────────────

fn draw_border<W: Write>(out: &mut W, term_w: u16, term_h: u16) -> std::io::Result<()> {
    let w = term_w as usize;

    out.queue(style::SetForegroundColor(C_BORDER))?;

    // Row 1 — top bar
    out.queue(cursor::MoveTo(0, 1))?;
    out.queue(Print(format!("┌{}┐", "─".repeat(w.saturating_sub(2)))))?;

    // Row h-2 — bottom bar
    out.queue(cursor::MoveTo(0, term_h.saturating_sub(2)))?;
    out.queue(Print(format!("└{}┘", "─".repeat(w.saturating_sub(2)))))?;

    // Side walls
    for row in 2..term_h.saturating_sub(2) {
        out.queue(cursor::MoveTo(0, row))?;
        out.queue(Print("│"))?;
        out.queue(cursor::MoveTo(term_w.saturating_sub(1), row))?;
        out.queue(Print("│"))?;
    }

    Ok(())
}

// ── HUD (row 0) ───────────────────────────────────────────────────────────────

fn draw_hud<W: Write>(out: &mut W, state: &GameState, term_w: u16) -> std::io::Result<()> {
    // Score — left
    out.queue(cursor::MoveTo(1, 0))?;
    out.queue(style::SetForegroundColor(C_HUD_SCORE))?;
    out.queue(Print(format!("Score: {:>6}", state.score)))?;

    // Title — centre
    let title = "★ FIGHT! KOKATON ★";
    let tx = (term_w / 2).saturating_sub(title.chars().count() as u16 / 2);
    out.queue(cursor::MoveTo(tx, 0))?;
    out.queue(style::SetForegroundColor(C_TITLE))?;
    out.queue(Print(title))?;

    Ok(())
}

// ── Entities ──────────────────────────────────────────────────────────────────

fn draw_player<W: Write>(
    out: &mut W,
    state: &GameState,
    term_w: u16,
    term_h: u16,
) -> std::io::Result<()> {
    let p = &state.player;
    let (col, row) = to_cell(p.rect.center_x(), p.rect.center_y(), term_w, term_h);

    let (glyph, color) = match p.pose {
        PlayerPose::Normal => (player_glyph(p.dire), C_PLAYER),
        PlayerPose::Hit => ("✪", C_PLAYER_HIT),
        PlayerPose::Defeated => ("✗", C_PLAYER_DEFEATED),
    };

    out.queue(cursor::MoveTo(col, row))?;
    out.queue(style::SetForegroundColor(color))?;
    out.queue(Print(glyph))?;
    Ok(())
}

fn draw_bomb<W: Write>(
    out: &mut W,
    bomb: &Bomb,
    term_w: u16,
    term_h: u16,
) -> std::io::Result<()> {
    let (col, row) = to_cell(bomb.rect.center_x(), bomb.rect.center_y(), term_w, term_h);
    out.queue(cursor::MoveTo(col, row))?;
    out.queue(style::SetForegroundColor(bomb_color(bomb.color)))?;
    out.queue(Print(bomb_glyph(bomb.radius)))?;
    Ok(())
}

fn draw_beam<W: Write>(
    out: &mut W,
    beam: &Beam,
    term_w: u16,
    term_h: u16,
) -> std::io::Result<()> {
    let (col, row) = to_cell(beam.rect.center_x(), beam.rect.center_y(), term_w, term_h);
    out.queue(cursor::MoveTo(col, row))?;
    out.queue(style::SetForegroundColor(C_BEAM))?;
    out.queue(Print(beam_glyph(beam.vx, beam.vy)))?;
    Ok(())
}

fn draw_explosion<W: Write>(
    out: &mut W,
    exp: &Explosion,
    term_w: u16,
    term_h: u16,
) -> std::io::Result<()> {
    let (col, row) = to_cell(exp.x, exp.y, term_w, term_h);
    let variant = (exp.life - 1).clamp(0, 3) as usize;
    out.queue(cursor::MoveTo(col, row))?;
    out.queue(style::SetForegroundColor(C_EXPLOSION))?;
    out.queue(Print(EXPLOSION_GLYPHS[variant]))?;
    Ok(())
}

// ── Controls hint (last row) ──────────────────────────────────────────────────

fn draw_controls_hint<W: Write>(out: &mut W, term_h: u16) -> std::io::Result<()> {
    out.queue(cursor::MoveTo(1, term_h.saturating_sub(1)))?;
    out.queue(style::SetForegroundColor(C_HINT))?;
    out.queue(Print("↑ ↓ ← → : Move   SPACE : Beam   Q : Quit"))?;
    Ok(())
}

// ── Game-over overlay ─────────────────────────────────────────────────────────

fn draw_game_over<W: Write>(
    out: &mut W,
    state: &GameState,
    term_w: u16,
    term_h: u16,
) -> std::io::Result<()> {
    let score_line = format!("Final Score: {}", state.score);
    let lines: &[(&str, Color)] = &[
        ("╔══════════════════╗", Color::Red),
        ("║    GAME  OVER    ║", Color::Red),
        ("╚══════════════════╝", Color::Red),
        (&score_line, Color::Yellow),
    ];

    let cx = term_w / 2;
    let start_row = (term_h / 2).saturating_sub(lines.len() as u16 / 2);

    for (i, (msg, color)) in lines.iter().enumerate() {
        let row = start_row + i as u16;
        let col = cx.saturating_sub(msg.chars().count() as u16 / 2);
        out.queue(cursor::MoveTo(col, row))?;
        out.queue(style::SetForegroundColor(*color))?;
        out.queue(Print(*msg))?;
    }

    Ok(())
}
