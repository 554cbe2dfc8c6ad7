//! Perft (performance test) through the apply/undo path.

use crate::board::Position;

struct TestPosition {
    name: &'static str,
    fen: &'static str,
    depths: &'static [(usize, u64)],
}

const TEST_POSITIONS: &[TestPosition] = &[
    TestPosition {
        name: "Initial Position",
        fen: "rnbqkbnr/pppppppp/8/8/8/8/PPPPPPPP/RNBQKBNR w KQkq - 0 1",
        depths: &[(1, 20), (2, 400), (3, 8902)],
    },
    TestPosition {
        name: "Kiwipete",
        fen: "r3k2r/p1ppqpb1/bn2pnp1/3PN3/1p2P3/2N2Q1p/PPPBBPPP/R3K2R w KQkq - 0 1",
        depths: &[(1, 48), (2, 2039)],
    },
    TestPosition {
        name: "Position 3",
        fen: "8/2p5/3p4/KP5r/1R3p1k/8/4P1P1/8 w - - 0 1",
        depths: &[(1, 14), (2, 191), (3, 2812)],
    },
    TestPosition {
        name: "Position 4",
        fen: "r3k2r/Pppp1ppp/1b3nbN/nP6/BBP1P3/q4N2/Pp1P2PP/R2Q1RK1 w kq - 0 1",
        depths: &[(1, 6), (2, 264)],
    },
];

fn perft(pos: &mut Position, depth: usize) -> u64 {
    if depth == 0 {
        return 1;
    }
    let moves = pos.legal_moves();
    if depth == 1 {
        return moves.len() as u64;
    }
    let mut nodes = 0;
    for mv in moves {
        pos.apply_unchecked(mv);
        nodes += perft(pos, depth - 1);
        assert!(pos.undo());
    }
    nodes
}

#[test]
fn test_perft_positions() {
    for tp in TEST_POSITIONS {
        let mut pos = Position::from_fen(tp.fen).unwrap();
        let before = pos.to_fen();
        for &(depth, expected) in tp.depths {
            let nodes = perft(&mut pos, depth);
            assert_eq!(
                nodes, expected,
                "perft({depth}) mismatch for {}",
                tp.name
            );
        }
        assert_eq!(pos.to_fen(), before, "perft left {} modified", tp.name);
        assert_eq!(pos.ply_count(), 0);
    }
}
