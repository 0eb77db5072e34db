use std::fmt::Display;

use rand::seq::SliceRandom;
use rand::Rng;
use tracing::trace_span;

use crate::{Block, Colour, Grid};

#[derive(Clone, Copy, PartialEq, Eq, Hash, Debug)]
pub enum GoalKind {
    /// unit cells along the outer edge, corners counting twice
    Perimeter,
    /// unit cells in the largest 4-connected region
    Blob,
}

/// What a player is trying to achieve, independent of any particular board.
#[derive(Clone, Copy, PartialEq, Eq, Hash, Debug)]
pub struct Goal {
    pub colour: Colour,
    pub kind: GoalKind,
}
impl Goal {
    pub fn new(colour: Colour, kind: GoalKind) -> Self {
        Self { colour, kind }
    }

    pub fn score(&self, board: &Block) -> u32 {
        let _span = trace_span!("score", kind = ?self.kind).entered();
        let grid = board.flatten();
        match self.kind {
            GoalKind::Perimeter => perimeter_score(&grid, self.colour),
            GoalKind::Blob => blob_score(&grid, self.colour),
        }
    }

    pub fn description(&self) -> &'static str {
        match self.kind {
            GoalKind::Perimeter => "PerimeterGoal: Perimeter Cell: 1 pt, Corner Cell: 2 pts",
            GoalKind::Blob => "BlobGoal: Connected Cell: 1 pt (corners excluded)",
        }
    }
}
impl Display for Goal {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{} [{}]", self.description(), self.colour)
    }
}

/// Returns `count` goals sharing one randomly chosen kind, each with a different colour.
pub fn generate_goals(count: usize, rng: &mut impl Rng) -> Vec<Goal> {
    assert!(
        count <= Colour::ALL.len(),
        "only {} colours for {count} goals",
        Colour::ALL.len()
    );
    let kind = if rng.gen_bool(0.5) {
        GoalKind::Perimeter
    } else {
        GoalKind::Blob
    };
    Colour::ALL
        .choose_multiple(rng, count)
        .map(|&colour| Goal::new(colour, kind))
        .collect()
}

fn perimeter_score(grid: &Grid, colour: Colour) -> u32 {
    let last = grid.side().saturating_sub(1);
    let mut score = 0;
    // rows then columns, corners lie on both so they get counted twice
    for i in 0..grid.side() {
        for cell in [
            grid.get(0, i),
            grid.get(last, i),
            grid.get(i, 0),
            grid.get(i, last),
        ] {
            if cell == Some(colour) {
                score += 1;
            }
        }
    }
    score
}

#[derive(Clone, Copy, PartialEq, Eq, Debug)]
enum Visit {
    Unvisited,
    Miss,
    Hit,
}

/// size of the largest 4-connected group of `colour`, each cell is visited at most once
fn blob_score(grid: &Grid, colour: Colour) -> u32 {
    let side = grid.side();
    let mut visited = vec![Visit::Unvisited; side * side];
    let mut stack = Vec::new();
    let mut best = 0;
    for start in 0..side * side {
        if visited[start] != Visit::Unvisited {
            continue;
        }
        let mut size = 0;
        stack.push((start / side, start % side));
        while let Some((row, col)) = stack.pop() {
            let index = row * side + col;
            if visited[index] != Visit::Unvisited {
                continue;
            }
            if grid.get(row, col) != Some(colour) {
                visited[index] = Visit::Miss;
                continue;
            }
            visited[index] = Visit::Hit;
            size += 1;
            if row > 0 {
                stack.push((row - 1, col));
            }
            if row + 1 < side {
                stack.push((row + 1, col));
            }
            if col > 0 {
                stack.push((row, col - 1));
            }
            if col + 1 < side {
                stack.push((row, col + 1));
            }
        }
        best = best.max(size);
    }
    best
}
