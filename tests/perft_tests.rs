//! Perft counts against published reference numbers

mod common;

use common::{board, board_without_castling, generator};
use pack_chess::types::WHITE_KNIGHT;
use pack_chess::{divide, perft, Action, Position, BLACK, WHITE};

fn kiwipete() -> Position {
    board([
        "r...k..r",
        "p.ppqpb.",
        "bn..pnp.",
        "...PN...",
        ".p..P...",
        "..N..Q.p",
        "PPPBBPPP",
        "R...K..R",
    ])
}

fn endgame_position_3() -> Position {
    board_without_castling([
        "........",
        "..p.....",
        "...p....",
        "KP.....r",
        ".R...p.k",
        "........",
        "....P.P.",
        "........",
    ])
}

#[test]
fn perft_start_position() {
    let gen = generator();
    let pos = Position::initial();
    let expected = [1, 20, 400, 8_902, 197_281];

    for (depth, &nodes) in expected.iter().enumerate() {
        assert_eq!(perft(&gen, &pos, WHITE, depth as u32), nodes, "depth {depth}");
    }
}

#[test]
fn perft_black_to_move() {
    let gen = generator();
    let pos = Position::initial().apply(Action::quiet(WHITE_KNIGHT, 6, 21));
    assert_eq!(perft(&gen, &pos, BLACK, 1), 20);
    assert_eq!(perft(&gen, &pos, BLACK, 2), 440);
}

#[test]
fn perft_kiwipete() {
    let gen = generator();
    let pos = kiwipete();

    assert_eq!(perft(&gen, &pos, WHITE, 1), 48);
    assert_eq!(perft(&gen, &pos, WHITE, 2), 2_039);
    assert_eq!(perft(&gen, &pos, WHITE, 3), 97_862);
}

#[test]
fn perft_endgame_position_3() {
    let gen = generator();
    let pos = endgame_position_3();

    assert_eq!(perft(&gen, &pos, WHITE, 1), 14);
    assert_eq!(perft(&gen, &pos, WHITE, 2), 191);
    assert_eq!(perft(&gen, &pos, WHITE, 3), 2_812);
    assert_eq!(perft(&gen, &pos, WHITE, 4), 43_238);
}

#[test]
fn divide_sums_to_perft() {
    let gen = generator();
    let pos = kiwipete();

    let split = divide(&gen, &pos, WHITE, 2);
    assert_eq!(split.len(), 48);
    assert_eq!(split.iter().map(|(_, nodes)| nodes).sum::<u64>(), 2_039);

    // Castling is among the root moves of Kiwipete
    assert_eq!(split.iter().filter(|(mv, _)| mv.is_castle()).count(), 2);
}
