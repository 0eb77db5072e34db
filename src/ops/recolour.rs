use itertools::Itertools;

use crate::{Block, Colour, Contents};

impl Block {
    /// Recolours a unit block.
    ///
    /// Returns false, leaving the block alone, unless this block sits at the depth limit
    /// and currently has a different colour.
    pub fn paint(&mut self, colour: Colour) -> bool {
        if !self.is_unit() || self.colour() == Some(colour) {
            return false;
        }
        self.set_contents(Contents::Leaf(colour));
        true
    }

    /// Collapses the four units under this block into one leaf of their majority colour.
    ///
    /// Only applies one level above the depth limit. Any tie for the most common colour
    /// (2-2 or 1-1-1-1) means there is no majority and nothing happens.
    pub fn combine(&mut self) -> bool {
        if u16::from(self.depth()) + 1 != u16::from(self.depth_limit()) {
            return false;
        }
        let Some(colour) = self
            .children()
            .and_then(|children| plurality(children.iter().filter_map(Block::colour)))
        else {
            return false;
        };
        self.set_contents(Contents::Leaf(colour));
        true
    }
}

/// the colour held strictly more often than any other, if there is one
fn plurality(colours: impl Iterator<Item = Colour>) -> Option<Colour> {
    let counts = colours.counts();
    let (&colour, &most) = counts.iter().max_by_key(|&(_, count)| *count)?;
    let tied = counts.values().filter(|&&count| count == most).count();
    (tied == 1).then_some(colour)
}
