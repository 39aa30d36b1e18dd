use super::*;
use crate::bitboard::{bishop_attacks_slow, rook_attacks_slow};

fn tables() -> AttackTables {
    AttackTables::new().expect("shipped magics are collision free")
}

#[test]
fn test_knight_attacks() {
    let t = tables();
    // Knight on e4 (square 28) should attack 8 squares
    assert_eq!(t.knight_attacks(28).count_ones(), 8);

    // Knight on a1 attacks b3 and c2 only
    assert_eq!(t.knight_attacks(0), (1 << 10) | (1 << 17));

    // Knight on h1 (square 7) should attack 2 squares
    assert_eq!(t.knight_attacks(7).count_ones(), 2);
}

#[test]
fn test_king_attacks() {
    let t = tables();
    assert_eq!(t.king_attacks(28).count_ones(), 8);
    assert_eq!(t.king_attacks(0).count_ones(), 3);
    assert_eq!(t.king_attacks(63).count_ones(), 3);
}

#[test]
fn test_pawn_attacks() {
    let t = tables();
    // White pawn on e4 attacks d5 and f5
    assert_eq!(t.pawn_attacks(28, WHITE), (1 << 35) | (1 << 37));
    // White pawn on a2 attacks only b3
    assert_eq!(t.pawn_attacks(8, WHITE), 1 << 17);
    // Black pawn on h7 attacks only g6
    assert_eq!(t.pawn_attacks(55, crate::types::BLACK), 1 << 46);
}

#[test]
fn test_relevant_masks_exclude_edges() {
    let t = tables();
    // Rook on a1: a2..a7 and b1..g1
    assert_eq!(t.rook_table().mask(0).count_ones(), 12);
    // Rook on e4: 10 relevant squares
    assert_eq!(t.rook_table().mask(28).count_ones(), 10);
    // Bishop on d4: 9 relevant squares
    assert_eq!(t.bishop_table().mask(27).count_ones(), 9);
    // Bishop in the corner: b2..g7
    assert_eq!(t.bishop_table().mask(0).count_ones(), 6);
}

#[test]
fn test_table_sizes() {
    let t = tables();
    assert_eq!(t.rook_table().len(), 102_400);
    assert_eq!(t.bishop_table().len(), 5_248);
}

#[test]
fn test_magic_lookup_matches_ray_walk_for_every_blocker_subset() {
    let t = tables();
    for sq in 0..64 {
        let mask = t.rook_table().mask(sq);
        for_each_subset(mask, |blockers| {
            assert_eq!(
                t.rook_attacks(sq, blockers),
                rook_attacks_slow(sq, blockers),
                "rook on {sq}, blockers {blockers:#x}"
            );
        });

        let mask = t.bishop_table().mask(sq);
        for_each_subset(mask, |blockers| {
            assert_eq!(
                t.bishop_attacks(sq, blockers),
                bishop_attacks_slow(sq, blockers),
                "bishop on {sq}, blockers {blockers:#x}"
            );
        });
    }
}

#[test]
fn test_lookup_ignores_irrelevant_occupancy() {
    let t = tables();
    // Pieces on the board edge behind the ray end, and off-ray pieces, change nothing
    let noise = 0xFF818181818181FFu64 | (1 << 19) | (1 << 45);
    for sq in [0usize, 27, 36, 63] {
        let occ = noise & !square_bb(sq);
        assert_eq!(t.rook_attacks(sq, occ), rook_attacks_slow(sq, occ));
        assert_eq!(t.bishop_attacks(sq, occ), bishop_attacks_slow(sq, occ));
        assert_eq!(
            t.queen_attacks(sq, occ),
            rook_attacks_slow(sq, occ) | bishop_attacks_slow(sq, occ)
        );
    }
}

#[test]
fn test_rook_attacks_with_blockers() {
    let t = tables();
    // Rook on a1, blocker on a4
    let attacks = t.rook_attacks(0, 1 << 24);
    assert!(attacks & (1 << 8) != 0); // a2
    assert!(attacks & (1 << 24) != 0); // a4 (can capture)
    assert!(attacks & (1 << 32) == 0); // a5 (blocked)
    assert!(attacks & (1 << 7) != 0); // h1
    assert_eq!(attacks.count_ones(), 10);
}
