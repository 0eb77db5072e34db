use crate::{Colour, Pos, Quad, Quadrant};

/// What a block holds: its own colour, or exactly four children.
#[derive(Clone, Debug)]
pub enum Contents {
    Leaf(Colour),
    Inner(Box<Quad<Block>>),
}

/// A square region of the board, and the root of the subtree covering it.
///
/// Blocks exclusively own their children, so `clone` is a full deep copy that shares
/// nothing with the source.
///
/// # invariants
/// * children are one depth deeper, `child_size()` wide, and positioned by their quadrant
/// * every block in a tree shares the same `depth_limit`
/// * `depth <= depth_limit`
#[derive(Clone, Debug)]
pub struct Block {
    position: Pos,
    size: u32,
    depth: u8,
    depth_limit: u8,
    contents: Contents,
}

impl Block {
    /// a single-coloured board at depth 0
    pub fn new_root(size: u32, colour: Colour, depth_limit: u8) -> Self {
        assert!(
            u32::from(depth_limit) < u32::BITS && size >> depth_limit > 0,
            "size {size} can't be halved {depth_limit} times"
        );
        Self::new_leaf(Pos::ORIGIN, size, colour, 0, depth_limit)
    }
    pub(crate) fn new_leaf(
        position: Pos,
        size: u32,
        colour: Colour,
        depth: u8,
        depth_limit: u8,
    ) -> Self {
        assert!(size > 0, "block size must be positive");
        assert!(
            depth <= depth_limit,
            "depth {depth} exceeds depth limit {depth_limit}"
        );
        Self {
            position,
            size,
            depth,
            depth_limit,
            contents: Contents::Leaf(colour),
        }
    }

    pub fn position(&self) -> Pos {
        self.position
    }
    pub fn size(&self) -> u32 {
        self.size
    }
    pub fn depth(&self) -> u8 {
        self.depth
    }
    pub fn depth_limit(&self) -> u8 {
        self.depth_limit
    }
    pub fn contents(&self) -> &Contents {
        &self.contents
    }
    /// `None` exactly when the block has children
    pub fn colour(&self) -> Option<Colour> {
        match &self.contents {
            Contents::Leaf(colour) => Some(*colour),
            Contents::Inner(_) => None,
        }
    }
    pub fn children(&self) -> Option<&Quad<Block>> {
        match &self.contents {
            Contents::Leaf(_) => None,
            Contents::Inner(children) => Some(&**children),
        }
    }
    pub(crate) fn children_mut(&mut self) -> Option<&mut Quad<Block>> {
        match &mut self.contents {
            Contents::Leaf(_) => None,
            Contents::Inner(children) => Some(&mut **children),
        }
    }
    pub fn is_leaf(&self) -> bool {
        matches!(self.contents, Contents::Leaf(_))
    }
    /// true for leaves at the finest granularity, the only blocks that can be painted
    pub fn is_unit(&self) -> bool {
        self.depth == self.depth_limit
    }
    /// side length of this block's children, should it have any
    pub fn child_size(&self) -> u32 {
        self.size / 2
    }
    /// side length of this block measured in unit cells
    pub fn cells_per_side(&self) -> u64 {
        1 << (self.depth_limit - self.depth)
    }

    pub(crate) fn set_contents(&mut self, contents: Contents) {
        self.contents = contents;
    }
    /// Rearranges this block's children with `f`. Returns false for leaves.
    ///
    /// Positions are stale afterwards until the caller runs `reposition`.
    pub(crate) fn map_children(&mut self, f: impl FnOnce(Quad<Block>) -> Quad<Block>) -> bool {
        // any colour will do, it is overwritten on both paths
        match std::mem::replace(&mut self.contents, Contents::Leaf(Colour::PacificPoint)) {
            Contents::Inner(children) => {
                self.contents = Contents::Inner(Box::new(f(*children)));
                true
            }
            leaf @ Contents::Leaf(_) => {
                self.contents = leaf;
                false
            }
        }
    }

    /// Moves this block to `position` and re-derives every descendant position from it.
    pub(crate) fn reposition(&mut self, position: Pos) {
        self.position = position;
        let half = self.child_size();
        if let Some(children) = self.children_mut() {
            for q in Quadrant::iter_all() {
                children[q].reposition(position.child(q, half));
            }
        }
    }

    /// Visits this block and then each child subtree in quadrant order.
    pub fn iter(&self) -> impl Iterator<Item = &Block> {
        let mut stack = vec![self];
        std::iter::from_fn(move || {
            let block = stack.pop()?;
            if let Some(children) = block.children() {
                // reversed so `ne` comes off the stack first
                stack.extend([&children.se, &children.sw, &children.nw, &children.ne]);
            }
            Some(block)
        })
    }

    /// Deep comparison of two trees.
    ///
    /// Leaves match on position, size, colour, depth and depth limit. A leaf never
    /// matches a subdivided block, and subdivided blocks match when every pair of
    /// corresponding children does.
    pub fn structural_eq(&self, other: &Block) -> bool {
        match (&self.contents, &other.contents) {
            (Contents::Leaf(a), Contents::Leaf(b)) => {
                self.position == other.position
                    && self.size == other.size
                    && a == b
                    && self.depth == other.depth
                    && self.depth_limit == other.depth_limit
            }
            (Contents::Inner(a), Contents::Inner(b)) => {
                Quadrant::iter_all().all(|q| a[q].structural_eq(&b[q]))
            }
            _ => false,
        }
    }
}
impl PartialEq for Block {
    fn eq(&self, other: &Self) -> bool {
        self.structural_eq(other)
    }
}
impl Eq for Block {}

#[cfg(test)]
mod test {
    use crate::{test_board, Block, Colour, Pos, Quad};

    #[test]
    fn iter_is_preorder() {
        let mut board = Block::new_root(8, Colour::RealRed, 2);
        assert!(board.split(Quad {
            ne: Colour::RealRed,
            nw: Colour::OldOlive,
            sw: Colour::PacificPoint,
            se: Colour::DaffodilDelight,
        }));
        let nw = &mut board.children_mut().unwrap().nw;
        assert!(nw.split(Quad {
            ne: Colour::RealRed,
            nw: Colour::RealRed,
            sw: Colour::RealRed,
            se: Colour::RealRed,
        }));

        let visited: Vec<(Pos, u8)> = board.iter().map(|b| (b.position(), b.depth())).collect();
        assert_eq!(
            vec![
                (Pos::new(0, 0), 0),
                (Pos::new(4, 0), 1),
                (Pos::new(0, 0), 1),
                (Pos::new(2, 0), 2),
                (Pos::new(0, 0), 2),
                (Pos::new(0, 2), 2),
                (Pos::new(2, 2), 2),
                (Pos::new(0, 4), 1),
                (Pos::new(4, 4), 1),
            ],
            visited
        );
    }

    #[test]
    fn leaf_never_equals_parent() {
        let leaf = Block::new_root(4, Colour::OldOlive, 1);
        let mut parent = leaf.clone();
        assert!(parent.split(Quad {
            ne: Colour::OldOlive,
            nw: Colour::OldOlive,
            sw: Colour::OldOlive,
            se: Colour::OldOlive,
        }));
        assert_ne!(leaf, parent);
        assert_ne!(parent, leaf);
    }

    #[test]
    fn leaf_equality_checks_every_field() {
        let base = Block::new_leaf(Pos::new(2, 2), 2, Colour::RealRed, 1, 2);
        assert_eq!(base, base.clone());
        assert_ne!(base, Block::new_leaf(Pos::new(0, 2), 2, Colour::RealRed, 1, 2));
        assert_ne!(base, Block::new_leaf(Pos::new(2, 2), 3, Colour::RealRed, 1, 2));
        assert_ne!(base, Block::new_leaf(Pos::new(2, 2), 2, Colour::OldOlive, 1, 2));
        assert_ne!(base, Block::new_leaf(Pos::new(2, 2), 2, Colour::RealRed, 2, 2));
        assert_ne!(base, Block::new_leaf(Pos::new(2, 2), 2, Colour::RealRed, 1, 3));
    }

    #[test]
    fn clone_is_independent() {
        let board = test_board! {"
            r r b b
            r y b b
            o o y y
            o o y r
        "};
        let mut copy = board.clone();
        assert_eq!(board, copy);
        let unit = copy.get_mut(&[crate::Quadrant::Nw, crate::Quadrant::Se]).unwrap();
        assert!(unit.paint(Colour::RealRed));
        assert_ne!(board, copy);
        assert_eq!(
            Some(Colour::DaffodilDelight),
            board.colour_at(1, 1),
            "source must keep its colour"
        );
    }

    #[test]
    #[should_panic(expected = "can't be halved")]
    fn root_too_small() {
        Block::new_root(3, Colour::RealRed, 2);
    }

    #[test]
    #[should_panic(expected = "exceeds depth limit")]
    fn depth_past_limit() {
        Block::new_leaf(Pos::ORIGIN, 4, Colour::RealRed, 3, 2);
    }
}
