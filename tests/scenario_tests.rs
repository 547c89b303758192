use puzzle_fighter::core::{Game, Instruction};

const COLS: usize = 6;
const ROWS: usize = 12;

fn run_instructions(instructions: &[(&str, &str)]) -> Game {
    let mut game = Game::default();
    for (pair, moves) in instructions {
        game.exec(&Instruction::new(pair, *moves).unwrap());
    }
    game
}

/// Expected dump from the bottom rows only: blank rows on top, each row
/// right-padded to the field width
fn state_string(bottom_rows: &[&str]) -> String {
    let mut rows = vec![" ".repeat(COLS); ROWS - bottom_rows.len()];
    rows.extend(bottom_rows.iter().map(|row| format!("{row:<width$}", width = COLS)));
    rows.join("\n")
}

fn report(game: &Game) -> Vec<String> {
    game.power_gem_report().iter().map(ToString::to_string).collect()
}

#[test]
fn simple_gems_settle_into_place() {
    let game = run_instructions(&[
        ("BR", "ABBABAAB"),
        ("RR", "LLL"),
        ("RR", "LL"),
        ("RB", "A"),
        ("BG", "LB"),
        ("GG", "RR"),
        ("BB", "BLLRRR"),
    ]);

    assert_eq!(
        game.state_string(),
        state_string(&[
            "   B",
            " G R",
            "RR BBG",
            "RRBRBG",
        ])
    );
}

#[test]
fn crash_gem_clears_group_then_block_forms() {
    let game = run_instructions(&[
        ("BB", "BLL"),
        ("RR", "B"),
        ("GG", "BLL"),
        ("RG", "B"),
        ("RG", "BLL"),
        ("GG", "LLL"),
        ("RR", "L"),
        ("Rg", "LL"),
    ]);

    assert_eq!(
        game.state_string(),
        state_string(&[
            " RR",
            " RRR",
            "BBRR",
        ])
    );
    assert_eq!(report(&game), ["55 2x2"]);
}

#[test]
fn crash_gem_clears_group_then_block_absorbs_column() {
    let game = run_instructions(&[
        ("BR", "ALLL"),
        ("RR", "AL"),
        ("GG", "ALLL"),
        ("GR", "AL"),
        ("GR", "ALLL"),
        ("GG", "LLL"),
        ("RR", "L"),
        ("Rg", "LL"),
    ]);

    assert_eq!(
        game.state_string(),
        state_string(&[
            " RR",
            " RRR",
            "BRRR",
        ])
    );
    assert_eq!(report(&game), ["55 2x3"]);
}

#[test]
fn crash_gem_next_to_power_gem_member() {
    let game = run_instructions(&[
        ("RG", "ALLL"),
        ("GB", "ALLL"),
        ("GG", "ALLL"),
        ("RG", "LLL"),
        ("BB", "AL"),
        ("Gb", "ALL"),
    ]);

    assert_eq!(
        game.state_string(),
        state_string(&[
            "R",
            "GG",
            "GG",
            "G",
            "RG",
        ])
    );
    assert_eq!(report(&game), ["48 2x2"]);
}

#[test]
fn power_gem_expands_right() {
    let game = run_instructions(&[
        ("RR", "ALLL"),
        ("RG", "AL"),
        ("RR", "ALLL"),
        ("GG", "AL"),
        ("GG", "ALLL"),
        ("RR", "ALLL"),
        ("RG", "L"),
        ("Bg", "LR"),
    ]);

    assert_eq!(
        game.state_string(),
        state_string(&[
            "RR",
            "RRR",
            "RRRB",
        ])
    );
    assert_eq!(report(&game), ["60 3x2"]);
}

#[test]
fn power_gem_grows_to_two_by_three() {
    let game = run_instructions(&[
        ("BR", "ALLL"),
        ("RR", "AL"),
        ("GG", "ALLL"),
        ("GR", "AL"),
        ("GR", "ALLL"),
        ("GG", "LLL"),
        ("RR", "L"),
        ("Rg", "LL"),
    ]);

    assert_eq!(
        game.state_string(),
        state_string(&[
            " RR",
            " RRR",
            "BRRR",
        ])
    );
    assert_eq!(report(&game), ["55 2x3"]);
}

#[test]
fn power_gems_merge_when_spans_match() {
    let game = run_instructions(&[
        ("RR", "ALLL"),
        ("RR", "AL"),
        ("RR", "ALLL"),
        ("GG", "AL"),
        ("RR", "AR"),
        ("RR", "AR"),
        ("RR", "AR"),
        ("GG", "ALLL"),
        ("GG", "AL"),
        ("RR", "AL"),
        ("GG", "AL"),
        ("RR", "AL"),
        ("GG", "ALLL"),
        ("GG", "ALLL"),
        ("Bg", "LLL"),
    ]);

    assert_eq!(
        game.state_string(),
        state_string(&[
            "B RRRR",
            "RRRRRR",
            "RRRRRR",
        ])
    );
    assert_eq!(report(&game), ["56 4x3", "60 2x2"]);
}

#[test]
fn rainbow_destroys_color_it_lands_on() {
    let game = run_instructions(&[
        ("BB", "ALLL"),
        ("BR", "AL"),
        ("GR", "R"),
        ("RR", "LL"),
        ("GR", "L"),
        ("RR", "LR"),
        ("RR", "R"),
        ("RR", "R"),
        ("RR", "L"),
        ("0G", "LL"),
    ]);

    assert_eq!(
        game.state_string(),
        state_string(&[
            "    R",
            "  R R",
            " RRRR",
            " RRRR",
            "BBBRR",
        ])
    );
    assert_eq!(report(&game), ["55 4x2"]);
}

#[test]
fn rainbow_chain_on_rainbow_clears_remaining_color() {
    let game = run_instructions(&[
        ("BB", "ALLL"),
        ("BR", "AL"),
        ("GR", "R"),
        ("RR", "LL"),
        ("GR", "L"),
        ("RR", "LR"),
        ("RR", "R"),
        ("RR", "R"),
        ("RR", "L"),
        ("0G", "LL"),
        ("00", "RR"),
        ("R0", "LL"),
    ]);

    assert_eq!(
        game.state_string(),
        state_string(&[
            "BBB",
        ])
    );
    assert!(report(&game).is_empty());
}

#[test]
fn adjacency_does_not_wrap_rows() {
    let game = run_instructions(&[
        ("BB", "AR"),
        ("GG", "LLL"),
        ("GG", "RR"),
    ]);

    assert_eq!(
        game.state_string(),
        state_string(&[
            "     G",
            "G    G",
            "G   BB",
        ])
    );
}

#[test]
fn block_forms_at_right_edge_only_within_row() {
    let game = run_instructions(&[
        ("BB", "AR"),
        ("GG", "LLL"),
        ("GG", "RR"),
        ("GG", "R"),
    ]);

    assert_eq!(
        game.state_string(),
        state_string(&[
            "    GG",
            "G   GG",
            "G   BB",
        ])
    );
    assert_eq!(report(&game), ["58 2x2"]);
}

#[test]
fn block_forms_at_left_edge_only_within_row() {
    let game = run_instructions(&[
        ("BB", "AR"),
        ("GG", "LLL"),
        ("GG", "RR"),
        ("GG", "LL"),
    ]);

    assert_eq!(
        game.state_string(),
        state_string(&[
            "     G",
            "GG   G",
            "GG  BB",
        ])
    );
    assert_eq!(report(&game), ["60 2x2"]);
}

#[test]
fn crash_gem_ignores_neighbour_across_row_edge() {
    let game = run_instructions(&[
        ("BB", "AR"),
        ("Rg", "AR"),
        ("GG", "ALLL"),
    ]);

    assert_eq!(
        game.state_string(),
        state_string(&[
            "    Rg",
            "GG  BB",
        ])
    );
}

#[test]
fn crash_gem_at_left_edge_ignores_previous_row() {
    let game = run_instructions(&[
        ("BB", "ALLL"),
        ("Rg", "BLL"),
        ("GG", "AR"),
        ("GG", "RR"),
    ]);

    assert_eq!(
        game.state_string(),
        state_string(&[
            "     G",
            "gR   G",
            "BB  GG",
        ])
    );
}

#[test]
fn power_gems_fall_as_one_unit() {
    let game = run_instructions(&[
        ("BB", "ALL"),
        ("BB", "ALL"),
        ("GG", "RL"),
        ("RR", "AL"),
        ("RR", "AL"),
        ("YY", "AL"),
        ("YY", "AL"),
        ("BB", "RL"),
        ("0G", "R"),
        ("0R", "R"),
    ]);

    assert_eq!(
        game.state_string(),
        state_string(&[
            "   B",
            "   B",
            "  YY",
            "  YY",
            " BB",
            " BB",
        ])
    );
    assert_eq!(report(&game), ["50 2x2", "61 2x2"]);
}

#[test]
fn horizontal_moves_stop_at_walls() {
    let game = run_instructions(&[
        ("BB", "RRRR"),
        ("BB", "LLLLLL"),
    ]);

    assert_eq!(
        game.state_string(),
        state_string(&[
            "B    B",
            "B    B",
        ])
    );
}

#[test]
fn blocked_spawn_ends_the_game() {
    let game = run_instructions(&[
        ("BB", "RL"),
        ("BB", "RL"),
        ("BB", "RL"),
        ("BB", "RL"),
        ("BB", "RL"),
        ("BB", "RL"),
        ("GG", "RL"),
        ("RR", "RL"),
        ("YY", "RL"),
    ]);

    assert_eq!(
        game.state_string(),
        state_string(&[
            "   B",
            "   B",
            "   B",
            "   B",
            "   B",
            "   B",
            "   B",
            "   B",
            "   B",
            "   B",
            "   B",
            "   B",
        ])
    );
}

#[test]
fn rotation_kicks_off_walls_and_gems() {
    let game = run_instructions(&[
        ("RG", "RRAAAAAA"),
        ("BG", "LLLAAAAAA"),
        ("YG", "LLLBBBBR"),
        ("YG", "RRBBBBRABBR"),
        ("RR", "L"),
        ("RR", "L"),
        ("RR", "L"),
        ("RR", "L"),
        ("RR", "L"),
        ("BY", "BBAAA"),
        ("BB", "R"),
        ("BB", "R"),
        ("BB", "R"),
        ("BB", "R"),
        ("BY", "BBAAA"),
    ]);

    assert_eq!(
        game.state_string(),
        state_string(&[
            "  R B ",
            "  R B ",
            "  R B ",
            "  R B ",
            "  R B ",
            "  R B ",
            "  R B ",
            "  R B ",
            "  R B ",
            "  R G ",
            " GYBGY",
            " BGYRY",
        ])
    );
}

#[test]
fn complex_cascade_with_large_power_gems() {
    let game = run_instructions(&[
        ("BB", "ALLL"),
        ("BB", "AL"),
        ("RR", "AR"),
        ("BB", "ALLL"),
        ("BB", "AL"),
        ("RR", "AR"),
        ("BB", "ALLL"),
        ("BB", "AL"),
        ("BB", "ALLL"),
        ("BB", "AL"),
        ("RY", "AR"),
        ("YY", "AR"),
        ("YY", "AR"),
        ("GG", "ALLL"),
        ("GG", "ALLL"),
        ("GG", "ALLL"),
        ("YY", "AL"),
        ("RR", "AR"),
        ("RR", "AR"),
        ("GG", "LLL"),
        ("Yb", "AR"),
        ("GB", "ALL"),
        ("Ry", "RL"),
    ]);

    assert_eq!(
        game.state_string(),
        state_string(&[
            "G     ",
            "GG    ",
            "GG    ",
            "GG  Yb",
            "GGBRRR",
            "BBBBRR",
            "BBBBR ",
            "BBBBRR",
            "BBBBRR",
        ])
    );
    assert_eq!(report(&game), ["24 2x4", "46 2x2", "48 4x4", "64 2x2"]);
}

#[test]
fn complex_crash_chain() {
    let game = run_instructions(&[
        ("BR", "LLL"),
        ("BY", "LL"),
        ("BG", "ALL"),
        ("BY", "BRR"),
        ("RR", "AR"),
        ("GY", "A"),
        ("BB", "AALLL"),
        ("GR", "A"),
        ("RY", "LL"),
        ("GG", "L"),
        ("GY", "BB"),
        ("bR", "ALLL"),
        ("gy", "AAL"),
    ]);

    assert_eq!(
        game.state_string(),
        state_string(&[
            "    R",
            " R  YR",
            "RR  RB",
        ])
    );
}

#[test]
fn complex_crash_chain_with_power_gems() {
    let game = run_instructions(&[
        ("GR", "ALLL"),
        ("GG", "ALLL"),
        ("RG", "AAL"),
        ("RB", "BLL"),
        ("RG", "ALL"),
        ("BB", "RR"),
        ("BR", "BB"),
        ("BR", "ALLL"),
        ("YB", "R"),
        ("BG", "BBRR"),
        ("YR", "AAR"),
        ("RR", "L"),
        ("RR", "ABLL"),
        ("GY", "BRR"),
        ("BB", "R"),
        ("gB", "RR"),
        ("BR", "ALL"),
        ("Gr", "BB"),
        ("Rb", "R"),
        ("GG", "B"),
        ("bB", "LL"),
    ]);

    assert_eq!(
        game.state_string(),
        state_string(&[
            "    R",
            "  GGY",
            "  GGYB",
            "GGGRYB",
            "GRRBBB",
        ])
    );
}

#[test]
fn complex_mixed_field() {
    let game = run_instructions(&[
        ("RR", "LLL"),
        ("GG", "LL"),
        ("RG", "BBL"),
        ("GY", "AR"),
        ("RR", "BBLLL"),
        ("RB", "AALL"),
        ("GR", "B"),
        ("GB", "AR"),
        ("RR", ""),
        ("GG", "R"),
        ("YR", "BR"),
        ("RR", "LLL"),
        ("BR", "AALL"),
        ("Bg", ""),
        ("RR", "BBBBLLL"),
        ("GR", "ALLL"),
        ("bR", "L"),
        ("YG", "BBBALL"),
        ("RR", "L"),
        ("YB", "AL"),
    ]);

    assert_eq!(
        game.state_string(),
        state_string(&[
            "GG",
            "RY",
            "RRYB",
            "RRRB",
            "R RgY",
            "R RRG",
            "RRRRG",
            "RGGRGB",
            "RGRGGY",
        ])
    );
}

#[test]
fn complex_expansion_and_merges() {
    let game = run_instructions(&[
        ("BB", "LLLL"),
        ("BB", "LL"),
        ("BB", "L"),
        ("BB", "LLL"),
        ("BB", "LL"),
        ("BG", "L"),
        ("BB", ""),
        ("BB", "R"),
        ("RB", "BBRRR"),
        ("RR", "LLL"),
        ("RR", "BALL"),
        ("RR", ""),
        ("RR", "R"),
        ("RR", "L"),
        ("RR", "B"),
        ("RR", "LLL"),
        ("RR", "LL"),
        ("RR", "BLLL"),
        ("RR", "B"),
        ("YR", "ALL"),
        ("GR", "AL"),
        ("Rb", "RRRR"),
    ]);

    assert_eq!(
        game.state_string(),
        state_string(&[
            " YG",
            "RRR",
            "RRR",
            "RRRR",
            "RRRR",
            "RRRR",
            "   RRR",
            "  GRRR",
        ])
    );
    assert_eq!(report(&game), ["30 3x3", "48 4x2", "63 3x2"]);
}
