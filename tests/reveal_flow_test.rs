//! Drives a session through the UI render model, including the staggered end-of-round reveal.

use std::time::{Duration, Instant};
use xtmines::xtm_game::{COLS, Input, MINE_COUNT, Mode, ROWS, Session, TileView};
use xtmines::xtm_ui::Screen;

const STEP: Duration = Duration::from_millis(50);

fn faces(screen: &Screen) -> Vec<(TileView, bool)> {
    (0..ROWS)
        .flat_map(|r| (0..COLS).map(move |c| (r, c)))
        .map(|(r, c)| {
            let t = screen.tile(r, c).unwrap();
            (t.view, t.interactive)
        })
        .collect()
}

#[test]
fn test_full_round_ends_with_every_tile_shown() {
    let mut session = Session::new(Some(17));
    let mut screen = Screen::new(session.can_start(), STEP);
    let t0 = Instant::now();

    for input in [
        Input::ClickLimitChanged(3),
        Input::ModeSelected(Mode::Lose),
        Input::RoundStartRequested,
    ] {
        screen.apply(session.handle(input), t0);
    }
    assert!(!screen.start_enabled());
    assert!(faces(&screen).iter().all(|f| *f == (TileView::Hidden, true)));

    for col in 0..3 {
        screen.apply(session.handle(Input::TileClicked { row: 1, col }), t0);
    }
    assert!(screen.start_enabled());
    assert!(screen.is_revealing());

    // only the first queued tile is due right away
    screen.tick(t0);
    let hidden = faces(&screen).iter().filter(|f| f.0 == TileView::Hidden).count();
    assert_eq!(hidden, ROWS * COLS - 4);

    screen.tick(t0 + STEP * 30);
    let all = faces(&screen);
    assert!(all.iter().all(|f| f.0 != TileView::Hidden && !f.1));
    assert_eq!(all.iter().filter(|f| f.0 == TileView::Mine).count(), MINE_COUNT);
    assert_eq!(screen.tile(1, 2).map(|t| t.view), Some(TileView::Mine));
}

#[test]
fn test_new_round_during_reveal_resets_board() {
    let mut session = Session::new(Some(3));
    let mut screen = Screen::new(false, STEP);
    let t0 = Instant::now();

    screen.apply(session.handle(Input::ModeSelected(Mode::Win)), t0);
    assert!(screen.start_enabled());
    screen.apply(session.handle(Input::RoundStartRequested), t0);
    screen.apply(session.handle(Input::TileClicked { row: 0, col: 0 }), t0);
    assert!(screen.is_revealing());

    screen.apply(session.handle(Input::RoundStartRequested), t0);
    screen.tick(t0 + STEP * 30);
    assert!(faces(&screen).iter().all(|f| *f == (TileView::Hidden, true)));
}
