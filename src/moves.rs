use std::fmt::Display;

use rand::Rng;
use tracing::trace;

use crate::{Axis, Block, BlockPath, Colour, Rotation};

#[derive(Clone, Copy, PartialEq, Eq, Hash, Debug)]
pub enum Action {
    Rotate(Rotation),
    Swap(Axis),
    Smash,
    Paint,
    Combine,
    Pass,
}
impl Action {
    pub fn name(self) -> &'static str {
        match self {
            Action::Rotate(Rotation::Clockwise) => "rotate_clockwise",
            Action::Rotate(Rotation::CounterClockwise) => "rotate_counter_clockwise",
            Action::Swap(Axis::Horizontal) => "swap_horizontal",
            Action::Swap(Axis::Vertical) => "swap_vertical",
            Action::Smash => "smash",
            Action::Paint => "paint",
            Action::Combine => "combine",
            Action::Pass => "pass",
        }
    }
}

/// An action aimed at one block of a board.
#[derive(Clone, PartialEq, Eq, Hash, Debug)]
pub struct Move {
    pub action: Action,
    pub target: BlockPath,
}
impl Move {
    pub fn new(action: Action, target: BlockPath) -> Self {
        Self { action, target }
    }

    /// Performs this move on `board` for a player whose goal colour is `colour`.
    ///
    /// Returns false, leaving the board as it was, if the target doesn't exist on this
    /// board or the action can't be applied to it. Passing always succeeds.
    pub fn apply(&self, board: &mut Block, colour: Colour, rng: &mut impl Rng) -> bool {
        let Some(block) = board.get_mut(&self.target) else {
            return false;
        };
        let applied = match self.action {
            Action::Rotate(rotation) => block.rotate(rotation),
            Action::Swap(axis) => block.swap(axis),
            Action::Smash => block.subdivide(rng),
            Action::Paint => block.paint(colour),
            Action::Combine => block.combine(),
            Action::Pass => true,
        };
        trace!(action = self.action.name(), target = ?self.target, applied, "apply");
        applied
    }
}
impl Display for Move {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{} @ {:?}", self.action.name(), self.target)
    }
}

/// Every move other than passing that would succeed on `board` for a player painting with `colour`.
///
/// Blocks are visited root first, then each child subtree in quadrant order. The board is
/// never modified, combining is tried out on a copy.
pub fn valid_moves(colour: Colour, board: &Block) -> Vec<Move> {
    let mut moves = Vec::new();
    for (path, block) in board.iter_paths() {
        if block.children().is_some() {
            for action in [
                Action::Rotate(Rotation::CounterClockwise),
                Action::Rotate(Rotation::Clockwise),
                Action::Swap(Axis::Vertical),
                Action::Swap(Axis::Horizontal),
            ] {
                moves.push(Move::new(action, path.clone()));
            }
        }
        if block.is_unit() && block.colour() != Some(colour) {
            moves.push(Move::new(Action::Paint, path.clone()));
        }
        if block.is_divisible() {
            moves.push(Move::new(Action::Smash, path.clone()));
        }
        if block.children().is_some() && block.clone().combine() {
            moves.push(Move::new(Action::Combine, path));
        }
    }
    moves
}

#[cfg(test)]
mod test {
    use proptest::prelude::*;
    use rand::rngs::StdRng;
    use rand::SeedableRng;

    use crate::{generate_board, test_board, valid_moves, Action, Axis, Block, Colour, Move, Quadrant, Rotation};

    #[test]
    fn single_leaf() {
        let board = Block::new_root(8, Colour::RealRed, 0);
        assert!(valid_moves(Colour::RealRed, &board).is_empty());
        assert_eq!(
            vec![Move::new(Action::Paint, vec![])],
            valid_moves(Colour::OldOlive, &board)
        );

        let shallow = Block::new_root(8, Colour::RealRed, 2);
        assert_eq!(
            vec![Move::new(Action::Smash, vec![])],
            valid_moves(Colour::RealRed, &shallow)
        );
    }

    #[test]
    fn catalog_order() {
        let board = test_board! {"
            r r
            r b
        "};
        let moves = valid_moves(Colour::RealRed, &board);
        assert_eq!(
            vec![
                Move::new(Action::Rotate(Rotation::CounterClockwise), vec![]),
                Move::new(Action::Rotate(Rotation::Clockwise), vec![]),
                Move::new(Action::Swap(Axis::Vertical), vec![]),
                Move::new(Action::Swap(Axis::Horizontal), vec![]),
                Move::new(Action::Combine, vec![]),
                Move::new(Action::Paint, vec![Quadrant::Se]),
            ],
            moves
        );
    }

    #[test]
    fn tied_children_cannot_combine() {
        let board = test_board! {"
            r b
            b r
        "};
        let moves = valid_moves(Colour::OldOlive, &board);
        assert!(moves.iter().all(|m| m.action != Action::Combine));
        assert_eq!(4 + 4, moves.len(), "four shuffles and four paints");
    }

    #[test]
    fn apply_rejects_bad_targets() {
        let mut rng = StdRng::seed_from_u64(3);
        let mut board = test_board! {"
            r b
            o y
        "};
        let before = board.clone();
        let missing = Move::new(Action::Paint, vec![Quadrant::Ne, Quadrant::Ne]);
        assert!(!missing.apply(&mut board, Colour::RealRed, &mut rng));
        let same = Move::new(Action::Paint, vec![Quadrant::Nw]);
        assert!(!same.apply(&mut board, Colour::RealRed, &mut rng));
        let leaf_rotate = Move::new(Action::Rotate(Rotation::Clockwise), vec![Quadrant::Se]);
        assert!(!leaf_rotate.apply(&mut board, Colour::RealRed, &mut rng));
        assert_eq!(before, board);

        assert!(Move::new(Action::Pass, vec![]).apply(&mut board, Colour::RealRed, &mut rng));
        assert_eq!(before, board);

        let paint = Move::new(Action::Paint, vec![Quadrant::Se]);
        assert!(paint.apply(&mut board, Colour::RealRed, &mut rng));
        assert_eq!(Some(Colour::RealRed), board.colour_at(1, 1));
    }

    #[test]
    fn display() {
        let m = Move::new(Action::Swap(Axis::Horizontal), vec![Quadrant::Sw]);
        assert_eq!("swap_horizontal @ [Sw]", m.to_string());
    }

    proptest! {
        #[test]
        fn every_listed_move_applies(seed: u64, depth_limit in 0u8..5, colour in proptest::sample::select(Colour::ALL.to_vec())) {
            let mut rng = StdRng::seed_from_u64(seed);
            let board = generate_board(depth_limit, 1 << depth_limit, &mut rng);
            let before = board.clone();
            let moves = valid_moves(colour, &board);
            prop_assert_eq!(&before, &board);
            for m in moves {
                prop_assert!(m.action != Action::Pass);
                let target = board.get(&m.target).unwrap();
                if m.action == Action::Combine {
                    prop_assert_eq!(target.depth() + 1, target.depth_limit());
                }
                let mut copy = board.clone();
                prop_assert!(m.apply(&mut copy, colour, &mut rng), "{}", m);
            }
        }

        #[test]
        fn blocks_visited_once(seed: u64, depth_limit in 1u8..5) {
            let board = generate_board(depth_limit, 1 << depth_limit, &mut StdRng::seed_from_u64(seed));
            let moves = valid_moves(Colour::RealRed, &board);
            let rotations = moves
                .iter()
                .filter(|m| m.action == Action::Rotate(Rotation::Clockwise))
                .count();
            let parents = board.iter().filter(|b| !b.is_leaf()).count();
            prop_assert_eq!(parents, rotations);
        }
    }
}
