use std::fmt::{self, Display};
use std::hash::{Hash, Hasher};

use smallvec::SmallVec;

/// Label of the blank cell that tiles slide into.
pub const BLANK: u8 = 0;

/// Handle into the arena of states owned by one search run.
pub type StateId = usize;

/// Direction a tile slides into the blank cell.
///
/// Labels name the tile's motion, not the blank's: `Up` slides the tile
/// below the blank up into it, so the blank itself moves down a row.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum Move {
    Up,
    Down,
    Left,
    Right,
}

impl Move {
    /// The move that undoes this one.
    pub fn inverse(self) -> Move {
        match self {
            Move::Up => Move::Down,
            Move::Down => Move::Up,
            Move::Left => Move::Right,
            Move::Right => Move::Left,
        }
    }

    /// Applies this move to an arrangement, returning the new arrangement,
    /// or `None` when the move is illegal for the current blank position.
    pub fn apply(self, tiles: &[u8], width: usize, height: usize) -> Option<Vec<u8>> {
        let blank = tiles.iter().position(|&t| t == BLANK)?;
        let col = blank % width;
        let row = blank / width;

        let from = match self {
            Move::Up if row < height - 1 => blank + width,
            Move::Down if row > 0 => blank - width,
            Move::Left if col < width - 1 => blank + 1,
            Move::Right if col > 0 => blank - 1,
            _ => return None,
        };

        let mut next = tiles.to_vec();
        next.swap(blank, from);
        Some(next)
    }
}

impl Display for Move {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(match self {
            Move::Up => "Up",
            Move::Down => "Down",
            Move::Left => "Left",
            Move::Right => "Right",
        })
    }
}

/// One tile configuration plus the link back to the state it was
/// expanded from.
///
/// Equality and hashing consider the arrangement only, so the frontier and
/// closed set collapse different move sequences onto the same node.
#[derive(Clone, Debug)]
pub struct PuzzleState {
    tiles: Vec<u8>,
    parent: Option<StateId>,
    mv: Option<Move>,
}

impl PuzzleState {
    /// Creates a search root with no parent.
    pub fn root(tiles: Vec<u8>) -> PuzzleState {
        PuzzleState {
            tiles,
            parent: None,
            mv: None,
        }
    }

    pub fn tiles(&self) -> &[u8] {
        &self.tiles
    }

    pub fn parent(&self) -> Option<StateId> {
        self.parent
    }

    /// The move that produced this state, or `None` for the root.
    pub fn applied_move(&self) -> Option<Move> {
        self.mv
    }

    pub fn is_goal(&self, goal: &[u8]) -> bool {
        self.tiles == goal
    }

    /// Generates every state one legal slide away, tagged with the move
    /// that produced it and `id` (this state's arena handle) as parent.
    ///
    /// Child order is fixed: Up, Down, Left, Right, each skipped when the
    /// blank sits on the corresponding edge.
    pub fn expand(&self, id: StateId, width: usize, height: usize) -> SmallVec<[PuzzleState; 4]> {
        let blank = self
            .tiles
            .iter()
            .position(|&t| t == BLANK)
            .expect("a puzzle state always contains the blank tile");
        let col = blank % width;
        let row = blank / width;

        let mut children = SmallVec::new();

        if row < height - 1 {
            children.push(self.child(id, blank, blank + width, Move::Up));
        }
        if row > 0 {
            children.push(self.child(id, blank, blank - width, Move::Down));
        }
        if col < width - 1 {
            children.push(self.child(id, blank, blank + 1, Move::Left));
        }
        if col > 0 {
            children.push(self.child(id, blank, blank - 1, Move::Right));
        }

        children
    }

    fn child(&self, parent: StateId, blank: usize, from: usize, mv: Move) -> PuzzleState {
        let mut tiles = self.tiles.clone();
        tiles.swap(blank, from);
        PuzzleState {
            tiles,
            parent: Some(parent),
            mv: Some(mv),
        }
    }
}

impl PartialEq for PuzzleState {
    fn eq(&self, other: &Self) -> bool {
        self.tiles == other.tiles
    }
}

impl Eq for PuzzleState {}

impl Hash for PuzzleState {
    fn hash<H: Hasher>(&self, state: &mut H) {
        self.tiles.hash(state);
    }
}

#[cfg(test)]
mod test {
    use std::collections::HashSet;

    use super::*;

    #[test]
    fn corner_blank_has_two_children() {
        let state = PuzzleState::root(vec![0, 1, 2, 3, 4, 5, 6, 7, 8]);
        let children = state.expand(0, 3, 3);

        assert_eq!(children.len(), 2);
        assert_eq!(children[0].applied_move(), Some(Move::Up));
        assert_eq!(children[1].applied_move(), Some(Move::Left));
    }

    #[test]
    fn centre_blank_has_four_children() {
        let state = PuzzleState::root(vec![1, 2, 3, 4, 0, 5, 6, 7, 8]);
        let children = state.expand(0, 3, 3);

        assert_eq!(children.len(), 4);
        let moves: Vec<_> = children.iter().map(|c| c.applied_move()).collect();
        assert_eq!(
            moves,
            [
                Some(Move::Up),
                Some(Move::Down),
                Some(Move::Left),
                Some(Move::Right)
            ]
        );
    }

    #[test]
    fn move_then_inverse_restores_arrangement() {
        let state = PuzzleState::root(vec![1, 2, 3, 4, 0, 5, 6, 7, 8]);

        for child in state.expand(0, 3, 3) {
            let mv = child.applied_move().unwrap();
            let restored = mv.inverse().apply(child.tiles(), 3, 3).unwrap();
            assert_eq!(restored, state.tiles());
        }
    }

    #[test]
    fn expand_matches_apply() {
        let state = PuzzleState::root(vec![1, 5, 2, 4, 0, 3]);

        for child in state.expand(0, 3, 2) {
            let mv = child.applied_move().unwrap();
            let replayed = mv.apply(state.tiles(), 3, 2).unwrap();
            assert_eq!(replayed, child.tiles());
        }
    }

    #[test]
    fn illegal_move_is_rejected() {
        // Blank in the bottom-right corner: nothing below or to its right.
        let tiles = vec![1, 2, 3, 0];
        assert_eq!(Move::Up.apply(&tiles, 2, 2), None);
        assert_eq!(Move::Left.apply(&tiles, 2, 2), None);
        assert!(Move::Down.apply(&tiles, 2, 2).is_some());
        assert!(Move::Right.apply(&tiles, 2, 2).is_some());
    }

    #[test]
    fn identity_ignores_parent_and_move() {
        let root = PuzzleState::root(vec![1, 0, 2, 3]);
        let via_expansion = PuzzleState::root(vec![0, 1, 2, 3])
            .expand(0, 2, 2)
            .into_iter()
            .find(|c| c.tiles() == [1, 0, 2, 3])
            .unwrap();

        assert_ne!(via_expansion.parent(), root.parent());
        assert_eq!(via_expansion, root);

        let mut set = HashSet::new();
        set.insert(root);
        set.insert(via_expansion);
        assert_eq!(set.len(), 1);
    }
}
