//! resolves a tree down to a square grid of unit cells

use std::fmt::{Debug, Display};

use itertools::Itertools;
use tracing::trace_span;

use crate::{Block, Colour, Contents, Quadrant};

/// The colours of a board at unit granularity, stored row-major.
#[derive(Clone, PartialEq, Eq, Hash)]
pub struct Grid {
    side: usize,
    cells: Vec<Colour>,
}
impl Grid {
    pub fn side(&self) -> usize {
        self.side
    }
    /// `None` outside the grid
    pub fn get(&self, row: usize, col: usize) -> Option<Colour> {
        if row < self.side && col < self.side {
            Some(self.cells[row * self.side + col])
        } else {
            None
        }
    }
    pub fn rows(&self) -> impl Iterator<Item = &[Colour]> {
        self.cells.chunks(self.side)
    }
    pub fn cells(&self) -> impl Iterator<Item = Colour> + '_ {
        self.cells.iter().copied()
    }
}
impl Debug for Grid {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        writeln!(f, "Grid {}x{}", self.side, self.side)?;
        Display::fmt(self, f)
    }
}
/// one letter per cell, matching the `test_board!` format
impl Display for Grid {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        for row in self.rows() {
            writeln!(f, "{}", row.iter().map(|&c| colour_letter(c)).join(" "))?;
        }
        Ok(())
    }
}

fn colour_letter(colour: Colour) -> char {
    match colour {
        Colour::PacificPoint => 'b',
        Colour::RealRed => 'r',
        Colour::OldOlive => 'o',
        Colour::DaffodilDelight => 'y',
    }
}

impl Block {
    /// Colour of the unit cell `(row, col)`, counted in cells from this block's corner.
    ///
    /// `None` when the cell is outside this block.
    pub fn colour_at(&self, row: u64, col: u64) -> Option<Colour> {
        let side = self.cells_per_side();
        if row >= side || col >= side {
            return None;
        }
        let mut block = self;
        let (mut row, mut col) = (row, col);
        loop {
            match block.contents() {
                Contents::Leaf(colour) => return Some(*colour),
                Contents::Inner(children) => {
                    let half = block.cells_per_side() / 2;
                    let q = Quadrant::from_cell(row, col, half);
                    if !q.is_north() {
                        row -= half;
                    }
                    if !q.is_west() {
                        col -= half;
                    }
                    block = &children[q];
                }
            }
        }
    }

    /// Every unit cell of this block, `cells_per_side()` on each side.
    pub fn flatten(&self) -> Grid {
        let _span = trace_span!("flatten", depth = self.depth(), limit = self.depth_limit()).entered();
        let side = usize::try_from(self.cells_per_side()).expect("grid fits in memory");
        let mut grid = Grid {
            side,
            cells: vec![Colour::PacificPoint; side * side],
        };
        fill(self, 0, 0, &mut grid);
        grid
    }
}

/// paints `block`'s span into `grid`, with its corner at cell `(row, col)`
fn fill(block: &Block, row: usize, col: usize, grid: &mut Grid) {
    match block.contents() {
        Contents::Leaf(colour) => {
            // block.cells_per_side() <= grid.side, which already fit in a usize
            #[allow(clippy::cast_possible_truncation)]
            let span = block.cells_per_side() as usize;
            for r in row..row + span {
                grid.cells[r * grid.side + col..][..span].fill(*colour);
            }
        }
        Contents::Inner(children) => {
            #[allow(clippy::cast_possible_truncation)]
            let half = (block.cells_per_side() / 2) as usize;
            for q in Quadrant::iter_all() {
                let r = if q.is_north() { row } else { row + half };
                let c = if q.is_west() { col } else { col + half };
                fill(&children[q], r, c, grid);
            }
        }
    }
}
