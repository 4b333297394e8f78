use std::fmt::{self, Display};

use itertools::Itertools;

use crate::state::PuzzleState;

/// Frontier-ordering strategies, all evaluated over the same
/// (state, goal, width, height) signature so the engine stays
/// heuristic-agnostic.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum Heuristic {
    /// Always zero; with FIFO tie-breaking the search degenerates to
    /// breadth-first order.
    Zero,
    /// Number of positions whose label differs from the goal, the blank
    /// included.
    Misplaced,
    /// Sum over all labels (blank included) of the Manhattan distance
    /// between each label's cell and its goal cell.
    Manhattan,
}

impl Heuristic {
    pub fn name(self) -> &'static str {
        match self {
            Heuristic::Zero => "zero",
            Heuristic::Misplaced => "misplaced",
            Heuristic::Manhattan => "manhattan",
        }
    }

    pub fn evaluate(self, state: &PuzzleState, goal: &[u8], width: usize, height: usize) -> u32 {
        debug_assert_eq!(state.tiles().len(), width * height);
        debug_assert_eq!(goal.len(), width * height);

        match self {
            Heuristic::Zero => 0,
            Heuristic::Misplaced => misplaced(state.tiles(), goal),
            Heuristic::Manhattan => manhattan(state.tiles(), goal, width),
        }
    }
}

impl Display for Heuristic {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}

fn misplaced(tiles: &[u8], goal: &[u8]) -> u32 {
    tiles.iter().zip_eq(goal).filter(|(t, g)| t != g).count() as u32
}

fn manhattan(tiles: &[u8], goal: &[u8], width: usize) -> u32 {
    let mut h = 0;
    for (i1, &label) in tiles.iter().enumerate() {
        let i2 = goal
            .iter()
            .position(|&g| g == label)
            .expect("start and goal arrangements share one tile set");
        let dx = (i1 % width).abs_diff(i2 % width);
        let dy = (i1 / width).abs_diff(i2 / width);
        h += (dx + dy) as u32;
    }
    h
}
