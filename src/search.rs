use std::collections::HashSet;
use std::time::{Duration, Instant};

use itertools::Itertools;
use thiserror::Error;
use tracing::debug;

use crate::frontier::PriorityFrontier;
use crate::heuristic::Heuristic;
use crate::state::{Move, PuzzleState, StateId, BLANK};

/// Outcome of one search run.
#[derive(Clone, Debug)]
pub struct SearchResult {
    /// Moves leading from the start arrangement to the goal. Empty either
    /// when the start already matches the goal or when `found` is false.
    pub moves: Vec<Move>,
    /// False when the reachable state space was exhausted without meeting
    /// the goal; a normal outcome for goals of the opposite parity class.
    pub found: bool,
    /// States generated but never expanded (live frontier size at the end).
    pub unexpanded: usize,
    /// States fully expanded (closed-set size).
    pub expanded: usize,
    pub elapsed: Duration,
}

#[derive(Clone, Debug, Error, PartialEq, Eq)]
pub enum SolveError {
    #[error("arrangement of {len} tiles does not fill a {width}x{height} grid")]
    DimensionMismatch {
        len: usize,
        width: usize,
        height: usize,
    },
    #[error("start and goal arrangements use different tile sets")]
    TileSetMismatch,
    #[error("expected exactly one blank tile, found {0}")]
    BlankCount(usize),
}

/// Best-first search from `start` to `goal` over a `width` x `height` grid.
///
/// Frontier priority is the heuristic value alone, with no accumulated
/// path-cost term, so the search is greedy rather than textbook A* and the
/// returned path is shortest only when `Heuristic::Zero` reduces it to
/// breadth-first order. An unreachable goal exhausts the reachable state
/// space before reporting `found: false`.
pub fn solve(
    start: &[u8],
    goal: &[u8],
    width: usize,
    height: usize,
    heuristic: Heuristic,
) -> Result<SearchResult, SolveError> {
    validate(start, goal, width, height)?;

    debug!(width, height, heuristic = heuristic.name(), "starting search");
    let started = Instant::now();

    // All states live in the arena; parent links are indices into it.
    let mut arena = vec![PuzzleState::root(start.to_vec())];
    let mut frontier = PriorityFrontier::new();
    let mut closed: HashSet<Vec<u8>> = HashSet::new();

    let h = heuristic.evaluate(&arena[0], goal, width, height);
    frontier.insert(0, start.to_vec(), h);

    let mut found = None;

    while let Some(id) = frontier.pop() {
        if arena[id].is_goal(goal) {
            found = Some(id);
            break;
        }

        for child in arena[id].expand(id, width, height) {
            if !frontier.contains(child.tiles()) && !closed.contains(child.tiles()) {
                let h = heuristic.evaluate(&child, goal, width, height);
                let key = child.tiles().to_vec();
                let child_id = arena.len();
                arena.push(child);
                frontier.insert(child_id, key, h);
            }
        }

        closed.insert(arena[id].tiles().to_vec());
    }

    let elapsed = started.elapsed();
    let moves = found.map_or_else(Vec::new, |id| path_to(&arena, id));

    debug!(
        found = found.is_some(),
        expanded = closed.len(),
        unexpanded = frontier.len(),
        "search finished"
    );

    Ok(SearchResult {
        moves,
        found: found.is_some(),
        unexpanded: frontier.len(),
        expanded: closed.len(),
        elapsed,
    })
}

/// Walks parent handles from `id` back to the root, collecting the move
/// that produced each state, then reverses into start-to-goal order.
fn path_to(arena: &[PuzzleState], id: StateId) -> Vec<Move> {
    let mut moves = Vec::new();
    let mut current = id;

    while let Some(mv) = arena[current].applied_move() {
        moves.push(mv);
        current = arena[current]
            .parent()
            .expect("a state with a move has a parent");
    }

    moves.reverse();
    moves
}

fn validate(start: &[u8], goal: &[u8], width: usize, height: usize) -> Result<(), SolveError> {
    let cells = width * height;
    for arrangement in [start, goal] {
        if arrangement.len() != cells {
            return Err(SolveError::DimensionMismatch {
                len: arrangement.len(),
                width,
                height,
            });
        }
    }

    if !start.iter().sorted().eq(goal.iter().sorted()) {
        return Err(SolveError::TileSetMismatch);
    }

    let blanks = start.iter().filter(|&&t| t == BLANK).count();
    if blanks != 1 {
        return Err(SolveError::BlankCount(blanks));
    }

    Ok(())
}
