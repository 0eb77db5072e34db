use crate::{Block, Pos, Quadrant};

/// Quadrants to follow from the root of a board to reach one of its blocks.
///
/// A path only makes sense against the board it was taken from, or a copy of it.
pub type BlockPath = Vec<Quadrant>;

impl Block {
    pub fn get(&self, path: &[Quadrant]) -> Option<&Block> {
        path.iter()
            .try_fold(self, |block, &q| block.children().map(|children| &children[q]))
    }
    pub fn get_mut(&mut self, path: &[Quadrant]) -> Option<&mut Block> {
        path.iter().try_fold(self, |block, &q| {
            block.children_mut().map(|children| &mut children[q])
        })
    }

    /// Like `iter`, but also yields the path from `self` to each block.
    pub fn iter_paths(&self) -> impl Iterator<Item = (BlockPath, &Block)> {
        let mut stack = vec![(BlockPath::new(), self)];
        std::iter::from_fn(move || {
            let (path, block) = stack.pop()?;
            if let Some(children) = block.children() {
                for q in [Quadrant::Se, Quadrant::Sw, Quadrant::Nw, Quadrant::Ne] {
                    let mut child_path = path.clone();
                    child_path.push(q);
                    stack.push((child_path, &children[q]));
                }
            }
            Some((path, block))
        })
    }

    /// Finds the block at `depth` that covers the pixel `location`.
    ///
    /// If the covering leaf is shallower than `depth`, that leaf is returned instead.
    /// `None` if `location` is off this block.
    pub fn locate(&self, location: Pos, depth: u8) -> Option<BlockPath> {
        if !location.within(self.position(), self.size()) {
            return None;
        }
        let mut path = BlockPath::new();
        let mut block = self;
        while block.depth() < depth {
            let Some(children) = block.children() else {
                break;
            };
            // with odd sizes the children don't tile the parent exactly, so a location can fall in a gap
            let (q, child) = Quadrant::iter_all()
                .map(move |q| (q, &children[q]))
                .find(|(_, child)| location.within(child.position(), child.size()))?;
            path.push(q);
            block = child;
        }
        Some(path)
    }
}

#[cfg(test)]
mod test {
    use crate::{test_board, Colour, Pos, Quadrant};

    #[test]
    fn get_follows_paths() {
        let board = test_board! {"
            r r b b
            r y b b
            o o y y
            o o y r
        "};
        assert_eq!(Some(&board), board.get(&[]));
        assert_eq!(
            Some(Colour::DaffodilDelight),
            board.get(&[Quadrant::Nw, Quadrant::Se]).and_then(|b| b.colour())
        );
        assert_eq!(
            Some(Colour::RealRed),
            board.get(&[Quadrant::Se, Quadrant::Se]).and_then(|b| b.colour())
        );
        assert!(board.get(&[Quadrant::Se, Quadrant::Se, Quadrant::Ne]).is_none());
    }

    #[test]
    fn iter_paths_resolve() {
        let board = test_board! {"
            r r b b
            r y b b
            o o y y
            o o y r
        "};
        assert_eq!(21, board.iter_paths().count());
        for ((path, block), plain) in board.iter_paths().zip(board.iter()) {
            assert_eq!(Some(block), board.get(&path));
            assert_eq!(block.depth() as usize, path.len());
            assert!(std::ptr::eq(block, plain));
        }
    }

    #[test]
    fn locate_edges() {
        let board = test_board! {"
            r r b b
            r y b b
            o o y y
            o o y r
        "};
        assert_eq!(Some(vec![]), board.locate(Pos::new(3, 3), 0));
        assert_eq!(Some(vec![Quadrant::Ne]), board.locate(Pos::new(2, 0), 1));
        assert_eq!(Some(vec![Quadrant::Nw]), board.locate(Pos::new(1, 1), 1));
        assert_eq!(
            Some(vec![Quadrant::Se, Quadrant::Nw]),
            board.locate(Pos::new(2, 2), 2)
        );
        // deeper than the tree goes
        assert_eq!(
            Some(vec![Quadrant::Sw, Quadrant::Ne]),
            board.locate(Pos::new(1, 2), 9)
        );
        // bottom and right edges belong to the neighbour, or to nothing
        assert_eq!(None, board.locate(Pos::new(4, 0), 0));
        assert_eq!(None, board.locate(Pos::new(0, 4), 2));
    }

    #[test]
    fn locate_stops_at_shallow_leaf() {
        let mut board = test_board! {"
            r r
            r b
        "};
        assert!(board.combine());
        assert_eq!(Some(vec![]), board.locate(Pos::new(1, 1), 1));
    }
}
