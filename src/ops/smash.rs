use rand::Rng;
use tracing::trace;

use crate::{Block, Colour, Contents, Quad};

/// each child of a block at depth `d` is smashed again with probability `exp(SMASH_DECAY * d)`
const SMASH_DECAY: f64 = -0.25;

/// Returns a randomly smashed board `size` pixels wide whose units sit at `depth_limit`.
pub fn generate_board(depth_limit: u8, size: u32, rng: &mut impl Rng) -> Block {
    let mut board = Block::new_root(size, random_colour(rng), depth_limit);
    board.subdivide(rng);
    trace!(
        depth_limit,
        size,
        blocks = board.iter().count(),
        "generated board"
    );
    board
}

pub(crate) fn random_colour(rng: &mut impl Rng) -> Colour {
    Colour::ALL[rng.gen_range(0..Colour::ALL.len())]
}

impl Block {
    /// true for leaves that are not yet at the finest granularity
    pub fn is_divisible(&self) -> bool {
        self.is_leaf() && !self.is_unit()
    }

    /// Splits this block into four leaves of the given colours, without recursing.
    ///
    /// Returns false, leaving the block alone, if it isn't divisible.
    pub fn split(&mut self, colours: Quad<Colour>) -> bool {
        if !self.is_divisible() {
            return false;
        }
        let position = self.position();
        let half = self.child_size();
        let depth = self.depth() + 1;
        let depth_limit = self.depth_limit();
        let children = colours.index_map(|q, colour| {
            Block::new_leaf(position.child(q, half), half, colour, depth, depth_limit)
        });
        self.set_contents(Contents::Inner(Box::new(children)));
        true
    }

    /// Smashes this block into four randomly coloured children.
    ///
    /// Each new child is then smashed in turn with a probability that decays with this
    /// block's depth. Returns false, leaving the block alone, if it isn't divisible.
    pub fn subdivide(&mut self, rng: &mut impl Rng) -> bool {
        if !self.is_divisible() {
            return false;
        }
        self.split(Quad::from_fn(|_| random_colour(rng)));
        let chance = (SMASH_DECAY * f64::from(self.depth())).exp();
        if let Some(children) = self.children_mut() {
            for child in children.iter_mut() {
                if rng.gen::<f64>() < chance {
                    child.subdivide(rng);
                }
            }
        }
        true
    }
}
