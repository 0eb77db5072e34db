use std::fmt::{Display, Write};

use crate::{Block, Contents};

/// one line per block, indented a tab per depth, children in quadrant order
impl Display for Block {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        for block in self.iter() {
            for _ in 0..block.depth() {
                f.write_char('\t')?;
            }
            match block.contents() {
                Contents::Leaf(colour) => writeln!(
                    f,
                    "Leaf: colour={colour}, pos={}, size={}, depth={}",
                    block.position(),
                    block.size(),
                    block.depth()
                )?,
                Contents::Inner(_) => writeln!(
                    f,
                    "Parent: pos={}, size={}, depth={}",
                    block.position(),
                    block.size(),
                    block.depth()
                )?,
            }
        }
        Ok(())
    }
}
