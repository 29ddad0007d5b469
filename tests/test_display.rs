use platformer::compute::{init_world, world_with};
use platformer::config::Config;
use platformer::display::*;
use platformer::entities::*;

/// 100×75 cells over 800×600 pixels: exactly 8 pixels per cell each way.
fn viewport() -> Viewport {
    Viewport::new(100, 75, &Config::default())
}

fn rendered(state: &World) -> String {
    rendered_in(state, &viewport())
}

fn rendered_in(state: &World, viewport: &Viewport) -> String {
    let mut out: Vec<u8> = Vec::new();
    render(&mut out, state, viewport).unwrap();
    String::from_utf8_lossy(&out).into_owned()
}

// ── Viewport ──────────────────────────────────────────────────────────────────

#[test]
fn ground_maps_to_bottom_rows() {
    let cells = viewport().cells(&Rect::new(0.0, 560.0, 800.0, 40.0));
    assert_eq!(
        cells,
        Some(CellRect {
            col: 0,
            row: 70,
            width: 100,
            height: 5
        })
    );
}

#[test]
fn partial_cells_are_covered() {
    // 375..425 × 275..325 px → cols 46..54, rows 34..41
    let cells = viewport().cells(&Rect::new(375.0, 275.0, 50.0, 50.0)).unwrap();
    assert_eq!(cells.col, 46);
    assert_eq!(cells.width, 8);
    assert_eq!(cells.row, 34);
    assert_eq!(cells.height, 7);
}

#[test]
fn off_screen_parts_are_clipped() {
    let cells = viewport().cells(&Rect::new(-80.0, -16.0, 160.0, 32.0)).unwrap();
    assert_eq!(
        cells,
        CellRect {
            col: 0,
            row: 0,
            width: 10,
            height: 2
        }
    );
    assert_eq!(viewport().cells(&Rect::new(900.0, 10.0, 40.0, 40.0)), None);
}

#[test]
fn empty_rect_has_no_cells() {
    assert_eq!(viewport().cells(&Rect::new(10.0, 10.0, 0.0, 40.0)), None);
    assert_eq!(viewport().cells(&Rect::new(10.0, 10.0, 40.0, 0.0)), None);
}

// ── render ────────────────────────────────────────────────────────────────────

#[test]
fn hud_shows_score_and_health() {
    let mut s = init_world(Config::default());
    s.player.score = 12;
    let out = rendered(&s);
    assert!(out.contains("Score: 12"));
    assert!(out.contains("Health: 3"));
    assert!(!out.contains("GAME OVER"));
    assert!(!out.contains("INVINCIBLE"));
}

#[test]
fn invincibility_tag_shows_seconds_left() {
    let mut s = world_with(Config::default(), Vec::new());
    s.player.invincibility_frames = 61;
    assert!(rendered(&s).contains("[INVINCIBLE  2s]"));
}

#[test]
fn game_over_overlay() {
    let mut s = world_with(Config::default(), Vec::new());
    s.player.health = 0;
    s.status = GameStatus::GameOver;
    let out = rendered(&s);
    assert!(out.contains("GAME OVER"));
    assert!(out.contains("Press R to restart"));
    assert!(out.contains("Health: 0"));
}

#[test]
fn entities_are_drawn_as_blocks() {
    let s = world_with(Config::default(), vec![Entity::coin(0.0, 300.0)]);
    let out = rendered(&s);
    // A 20 px coin covers three 8 px cells horizontally
    assert!(out.contains("███"));
}

#[test]
fn controls_hint_shown_on_wide_terminals() {
    let s = world_with(Config::default(), Vec::new());
    assert!(rendered(&s).contains("SPACE : Jump"));
}

#[test]
fn controls_hint_dropped_when_it_would_cover_the_score() {
    let mut s = world_with(Config::default(), Vec::new());
    s.player.score = 1234;
    let narrow = Viewport::new(40, 30, &s.config);
    let out = rendered_in(&s, &narrow);
    assert!(out.contains("Score: 1234"));
    assert!(!out.contains("SPACE : Jump"));
}

#[test]
fn tiny_terminal_does_not_fail() {
    let s = init_world(Config::default());
    let mut out: Vec<u8> = Vec::new();
    render(&mut out, &s, &Viewport::new(1, 1, &s.config)).unwrap();
    render(&mut out, &s, &Viewport::new(0, 0, &s.config)).unwrap();
}
