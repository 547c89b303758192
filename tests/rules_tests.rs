//! Rules tests - crash, rainbow and power gem behaviour on hand-built fields

use puzzle_fighter::core::Game;
use puzzle_fighter::types::{GemColor, GemKind};

const R: GemKind = GemKind::Simple(GemColor::Red);
const G: GemKind = GemKind::Simple(GemColor::Green);
const B: GemKind = GemKind::Simple(GemColor::Blue);
const CRASH_R: GemKind = GemKind::Crash(GemColor::Red);
const CRASH_B: GemKind = GemKind::Crash(GemColor::Blue);
const RAINBOW: GemKind = GemKind::Rainbow;

fn field(gems: &[(GemKind, usize)]) -> Game {
    let mut game = Game::default();
    for &(kind, pos) in gems {
        assert!(game.place(kind, pos).is_some(), "cell {} taken", pos);
    }
    game
}

fn bottom_row(game: &Game) -> String {
    game.snapshot().rows_text().pop().unwrap_or_default()
}

#[test]
fn test_crash_removes_exactly_its_component() {
    // Row 11: R R B R R, red crash on top of column 1
    let mut game = field(&[
        (R, 66),
        (R, 67),
        (B, 68),
        (R, 69),
        (R, 70),
        (CRASH_R, 61),
    ]);
    game.settle();

    assert_eq!(bottom_row(&game), "  BRR ");
    assert_eq!(game.gem_count(), 3);
}

#[test]
fn test_isolated_crash_gem_waits() {
    let mut game = field(&[(B, 66), (CRASH_R, 60), (G, 67)]);
    let history = game.settle();

    assert!(history.is_empty());
    assert_eq!(game.gem_count(), 3);
}

#[test]
fn test_crash_on_power_gem_cascades() {
    let mut game = field(&[
        (R, 60),
        (R, 61),
        (R, 66),
        (R, 67),
        (CRASH_B, 68),
        (B, 55),
    ]);
    game.settle();
    assert_eq!(game.power_gem_report().len(), 1);

    // Red crash on the blue crash gem, touching the block
    assert!(game.place(CRASH_R, 62).is_some());
    let history = game.settle();

    // Block and red crash go, the blue gem drops two rows onto the blue crash
    // gem, and that pair goes too
    assert_eq!(history.len(), 4);
    assert!(game.field().is_blank());
    assert!(game.power_gems().is_empty());
    assert_eq!(game.gem_count(), 0);
}

#[test]
fn test_rainbow_destroys_color_below_and_itself() {
    let mut game = field(&[
        (R, 66),
        (G, 67),
        (R, 68),
        (B, 69),
        (CRASH_R, 71),
        (R, 60),
        (RAINBOW, 62),
    ]);
    game.settle();

    assert_eq!(bottom_row(&game), " G B  ");
    assert_eq!(game.gem_count(), 2);
}

#[test]
fn test_rainbow_on_floor_takes_no_colored_gem() {
    let mut game = field(&[(R, 66), (RAINBOW, 67), (R, 68)]);
    game.settle();

    assert_eq!(bottom_row(&game), "R R   ");
}

#[test]
fn test_falling_rainbow_waits_until_it_lands() {
    let mut game = field(&[(B, 67), (RAINBOW, 1)]);
    let history = game.settle();

    // Ten rows of falling, then the blue gem and the rainbow go together
    assert_eq!(history.len(), 11);
    assert!(game.field().is_blank());
}

#[test]
fn test_rainbow_on_power_gem_takes_whole_block() {
    let mut game = field(&[(R, 60), (R, 61), (R, 66), (R, 67), (B, 68)]);
    game.settle();
    assert!(game.place(RAINBOW, 55).is_some());
    game.settle();

    assert!(game.power_gem_report().is_empty());
    assert_eq!(bottom_row(&game), "  B   ");
    assert_eq!(game.gem_count(), 1);
}

#[test]
fn test_stacked_blocks_merge_vertically() {
    let mut game = field(&[(R, 60), (R, 61), (R, 66), (R, 67)]);
    game.settle();
    for pos in [48, 49, 54, 55] {
        assert!(game.place(R, pos).is_some());
    }
    game.settle();

    let report: Vec<String> = game
        .power_gem_report()
        .iter()
        .map(ToString::to_string)
        .collect();
    assert_eq!(report, ["48 2x4"]);
    assert_eq!(game.power_gems()[0].len(), 8);
}

#[test]
fn test_blocks_of_different_colors_stay_apart() {
    let mut game = field(&[
        (R, 60),
        (R, 61),
        (R, 66),
        (R, 67),
        (G, 62),
        (G, 63),
        (G, 68),
        (G, 69),
    ]);
    game.settle();

    let colors: Vec<GemColor> = game.power_gems().iter().map(|pg| pg.color()).collect();
    assert_eq!(colors, vec![GemColor::Red, GemColor::Green]);
}

#[test]
fn test_block_absorbs_matching_column_later() {
    let mut game = field(&[(R, 60), (R, 61), (R, 66), (R, 67)]);
    game.settle();

    // A loose red column lands beside the block
    for pos in [50, 56] {
        assert!(game.place(R, pos).is_some());
    }
    game.settle();

    let pg = game.power_gems()[0];
    assert_eq!((pg.pos(), pg.width(), pg.height()), (60, 3, 2));
}
