//! Computer players
//!
//! An agent looks at the board and proposes a [`Move`]. The caller decides whether to
//! apply it, see [`Move::apply`].

use rand::rngs::StdRng;
use rand::seq::SliceRandom;
use rand::{Rng, SeedableRng};
use rayon::prelude::*;
use tracing::{debug, trace_span};

use crate::{generate_goals, valid_moves, Action, Block, Goal, Move};

pub trait Agent {
    fn goal(&self) -> &Goal;
    /// `None` if the agent has nothing to propose
    fn generate_move(&mut self, board: &Block) -> Option<Move>;
}

/// Picks uniformly among every valid move.
#[derive(Debug)]
pub struct RandomAgent<R> {
    goal: Goal,
    rng: R,
}
impl<R: Rng> RandomAgent<R> {
    pub fn new(goal: Goal, rng: R) -> Self {
        Self { goal, rng }
    }
}
impl<R: Rng> Agent for RandomAgent<R> {
    fn goal(&self) -> &Goal {
        &self.goal
    }
    fn generate_move(&mut self, board: &Block) -> Option<Move> {
        let moves = valid_moves(self.goal.colour, board);
        let chosen = moves.choose(&mut self.rng).cloned();
        debug!(options = moves.len(), chosen = ?chosen.as_ref().map(ToString::to_string), "random move");
        chosen
    }
}

/// Tries the first `difficulty` valid moves on copies of the board and keeps the best.
#[derive(Debug)]
pub struct SmartAgent<R> {
    goal: Goal,
    difficulty: usize,
    rng: R,
}
impl<R: Rng> SmartAgent<R> {
    pub fn new(goal: Goal, difficulty: usize, rng: R) -> Self {
        Self {
            goal,
            difficulty,
            rng,
        }
    }
    pub fn difficulty(&self) -> usize {
        self.difficulty
    }
}
impl<R: Rng> Agent for SmartAgent<R> {
    fn goal(&self) -> &Goal {
        &self.goal
    }

    /// Returns the candidate scoring strictly best, the earliest one on ties.
    ///
    /// If no candidate scores above 0 the agent passes on the last candidate's block
    /// instead. `None` only when there are no candidates at all.
    fn generate_move(&mut self, board: &Block) -> Option<Move> {
        let _span = trace_span!("smart_move", difficulty = self.difficulty).entered();
        let mut candidates = valid_moves(self.goal.colour, board);
        candidates.truncate(self.difficulty);
        // smashing is random, give every candidate its own seed so results don't depend on scheduling
        let seeds: Vec<u64> = candidates.iter().map(|_| self.rng.gen()).collect();

        let goal = self.goal;
        let scores: Vec<u32> = candidates
            .par_iter()
            .zip(seeds)
            .map(|(candidate, seed)| {
                let mut copy = board.clone();
                candidate.apply(&mut copy, goal.colour, &mut StdRng::seed_from_u64(seed));
                goal.score(&copy)
            })
            .collect();

        let mut best: Option<(usize, u32)> = None;
        for (i, &score) in scores.iter().enumerate() {
            if best.map_or(true, |(_, top)| score > top) {
                best = Some((i, score));
            }
        }
        let (index, score) = best?;
        debug!(candidates = candidates.len(), best = score, "smart move");
        if score == 0 {
            let last = candidates.pop()?;
            return Some(Move::new(Action::Pass, last.target));
        }
        Some(candidates.swap_remove(index))
    }
}

/// Builds the computer players for one game, each with a goal from a single batch.
///
/// Random agents come first, then smart agents in increasing difficulty.
pub fn create_agents(
    num_random: usize,
    smart_difficulties: &[usize],
    rng: &mut impl Rng,
) -> Vec<Box<dyn Agent + Send>> {
    let goals = generate_goals(num_random + smart_difficulties.len(), rng);
    let mut difficulties = smart_difficulties.to_vec();
    difficulties.sort_unstable();

    let mut goals = goals.into_iter();
    let mut agents: Vec<Box<dyn Agent + Send>> = Vec::new();
    for goal in goals.by_ref().take(num_random) {
        agents.push(Box::new(RandomAgent::new(
            goal,
            StdRng::seed_from_u64(rng.gen()),
        )));
    }
    for (goal, difficulty) in goals.zip(difficulties) {
        agents.push(Box::new(SmartAgent::new(
            goal,
            difficulty,
            StdRng::seed_from_u64(rng.gen()),
        )));
    }
    agents
}
