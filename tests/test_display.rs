mod common;

use alien_invasion::display::{render_frame, Canvas, TerminalCanvas};
use alien_invasion::entities::{Rect, Rgb};
use alien_invasion::stats::format_score;

use common::{active_game, new_game, Op, RecordingCanvas};

#[test]
fn score_formatting() {
    assert_eq!(format_score(0), "0");
    assert_eq!(format_score(44), "40");
    assert_eq!(format_score(12345), "12,350");
    assert_eq!(format_score(999_995), "1,000,000");
}

#[test]
fn scoreboard_lines() {
    let mut game = active_game();
    game.stats.score = 1234;
    game.stats.high_score = 5000;
    let mut canvas = RecordingCanvas::default();
    render_frame(&mut canvas, &game).unwrap();

    let texts: Vec<Op> = canvas
        .ops
        .into_iter()
        .filter(|op| matches!(op, Op::Text(_)))
        .collect();
    assert_eq!(
        texts,
        vec![
            Op::Text("Score 1,230".to_string()),
            Op::Text("High 5,000".to_string()),
            Op::Text("Level 1".to_string()),
            Op::Text("Ships 3".to_string()),
        ]
    );
}

#[test]
fn terminal_canvas_draws_menu() {
    let game = new_game();
    let mut canvas = TerminalCanvas::new(Vec::new(), 120, 40, 8, 16);
    assert_eq!(canvas.logical_size(), (960, 640));

    render_frame(&mut canvas, &game).unwrap();

    let out = String::from_utf8_lossy(&canvas.into_inner()).to_string();
    assert!(out.contains("Play"));
    assert!(out.contains("Easy"));
    assert!(out.contains("Hard"));
    assert!(out.contains("Score 0"));
    assert!(out.contains("«▼»"));
}

#[test]
fn terminal_canvas_skips_offscreen_shapes() {
    let mut canvas = TerminalCanvas::new(Vec::new(), 10, 5, 8, 16);
    canvas.draw_rect(Rect::new(-50, -50, 3, 15), Rgb(1, 2, 3)).unwrap();
    canvas.draw_rect(Rect::new(500, 10, 3, 15), Rgb(1, 2, 3)).unwrap();
    assert!(canvas.into_inner().is_empty());
}

#[test]
fn terminal_canvas_only_toggles_cursor_on_change() {
    let mut canvas = TerminalCanvas::new(Vec::new(), 10, 5, 8, 16);
    canvas.set_cursor_visible(false).unwrap();
    let first = canvas.into_inner();
    assert!(!first.is_empty());

    let mut canvas = TerminalCanvas::new(Vec::new(), 10, 5, 8, 16);
    canvas.set_cursor_visible(true).unwrap();
    let once = canvas.into_inner().len();

    let mut canvas = TerminalCanvas::new(Vec::new(), 10, 5, 8, 16);
    canvas.set_cursor_visible(true).unwrap();
    canvas.set_cursor_visible(true).unwrap();
    assert_eq!(canvas.into_inner().len(), once);
}
