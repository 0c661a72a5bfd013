//! Property-based tests for the quarter-turn transforms.
//!
//! Each property starts from the solved cube, walks a random sequence of
//! moves to reach an arbitrary reachable state, and then checks an invariant
//! that must hold for every move from every reachable state.

use bitcube::{CubeState, Face, FaceId, Move, CENTER, FACE_COUNT};
use proptest::prelude::*;

fn any_move() -> impl Strategy<Value = Move> {
    (0usize..6).prop_map(|i| Move::ALL[i])
}

fn any_sequence() -> impl Strategy<Value = Vec<Move>> {
    prop::collection::vec(any_move(), 0..64)
}

fn reach(moves: &[Move]) -> CubeState {
    let mut cube = CubeState::new();
    cube.apply_all(moves.iter().copied());
    cube
}

// =============================================================================
// Cyclic order
// =============================================================================

proptest! {
    /// Four turns of the same face restore the state bit for bit.
    #[test]
    fn prop_order_four(path in any_sequence(), m in any_move()) {
        let start = reach(&path);
        let mut cube = start;
        for _ in 0..4 {
            cube.apply(m);
        }
        prop_assert!(cube.same_as(&start));
    }

    /// One, two or three turns never restore a state.
    #[test]
    fn prop_no_shorter_cycle(path in any_sequence(), m in any_move(), k in 1usize..4) {
        let start = reach(&path);
        let mut cube = start;
        for _ in 0..k {
            cube.apply(m);
        }
        prop_assert_ne!(cube, start);
    }

    /// Undoing a sequence with three turns per move, in reverse, returns to solved.
    #[test]
    fn prop_inverse_sequence_solves(path in any_sequence()) {
        let mut cube = reach(&path);
        for &m in path.iter().rev() {
            cube.apply_all([m; 3]);
        }
        prop_assert!(cube.is_solved());
    }
}

// =============================================================================
// Conservation
// =============================================================================

proptest! {
    /// Centers never move.
    #[test]
    fn prop_centers_fixed(path in any_sequence()) {
        let cube = reach(&path);
        for face in 0..FACE_COUNT {
            let center = cube.color_at(face, CENTER).map(|c| c.index());
            prop_assert_eq!(center, Ok(face));
        }
        prop_assert!(cube.centers_intact());
    }

    /// Exactly nine facelets of each color.
    #[test]
    fn prop_color_multiset_conserved(path in any_sequence()) {
        prop_assert_eq!(reach(&path).color_counts(), [9u8; 6]);
    }

    /// Every face word stays valid: no cell above 5, padding zero.
    #[test]
    fn prop_faces_stay_valid(path in any_sequence()) {
        let cube = reach(&path);
        for face in cube.faces() {
            prop_assert_eq!(Face::from_bits(face.bits()), Ok(face));
        }
    }

    /// A move only rewrites the turned face and its four neighbours.
    #[test]
    fn prop_opposite_face_untouched(path in any_sequence(), m in any_move()) {
        let before = reach(&path);
        let after = before.turned(m);
        let opposite = match m.face() {
            FaceId::Up => FaceId::Down,
            FaceId::Down => FaceId::Up,
            FaceId::Left => FaceId::Right,
            FaceId::Right => FaceId::Left,
            FaceId::Front => FaceId::Back,
            FaceId::Back => FaceId::Front,
        };
        prop_assert_eq!(after.face(opposite), before.face(opposite));
    }
}

// =============================================================================
// Determinism
// =============================================================================

proptest! {
    /// Two independent runs of the same sequence agree bit for bit.
    #[test]
    fn prop_sequence_is_deterministic(path in any_sequence()) {
        let a = reach(&path);
        let b = reach(&path);
        prop_assert!(a.same_as(&b));
        prop_assert_eq!(a.faces().map(|f| f.bits()), b.faces().map(|f| f.bits()));
    }

    /// `turned` and `apply` agree.
    #[test]
    fn prop_turned_matches_apply(path in any_sequence(), m in any_move()) {
        let start = reach(&path);
        let mut applied = start;
        applied.apply(m);
        prop_assert_eq!(start.turned(m), applied);
    }

    /// Face rotation is the identity after four quarter turns for any valid face.
    #[test]
    fn prop_rotation_order_four(path in any_sequence(), id in 0usize..6) {
        let face = reach(&path).faces()[id];
        let back = face
            .rotate_clockwise()
            .rotate_clockwise()
            .rotate_clockwise()
            .rotate_clockwise();
        prop_assert_eq!(back, face);
        prop_assert_eq!(face.rotate_clockwise().center(), face.center());
    }
}
