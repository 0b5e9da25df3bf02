use super::Choose;
use crate::checkers::{Board, Diagonal, Move, Square};
use derive_more::Constructor;
use rand::{rngs::StdRng, seq::SliceRandom, SeedableRng};
use tracing::{debug, instrument};

/// Ranks the legal moves by a fixed list of priorities and picks one of the best at random.
///
/// When capturing, the longest chains are preferred, and among those the ones that
/// promote. Otherwise, promoting steps are preferred, then steps that do not expose
/// the piece to capture, then steps that close in on the other pieces, and finally
/// steps that keep the back row guarded.
#[derive(Debug, Clone, Constructor)]
pub struct Heuristic {
    rng: StdRng,
}

impl Heuristic {
    /// A reproducible [`Heuristic`] bot.
    pub fn seeded(seed: u64) -> Self {
        Heuristic::new(StdRng::seed_from_u64(seed))
    }
}

/// Initializes a [`Heuristic`] bot seeded by [system entropy].
///
/// [system entropy]: rand::rngs::StdRng::from_entropy
impl Default for Heuristic {
    fn default() -> Self {
        Heuristic::new(StdRng::from_entropy())
    }
}

impl Choose for Heuristic {
    #[instrument(level = "trace", skip(self, board, moves), fields(candidates = moves.len()))]
    fn choose(&mut self, board: &Board, moves: &[Move]) -> Option<Move> {
        shortlist(board, moves).choose(&mut self.rng).cloned()
    }
}

/// The moves the [`Heuristic`] bot considers equally good.
pub fn shortlist(board: &Board, moves: &[Move]) -> Vec<Move> {
    let jumps: Vec<_> = moves.iter().filter(|m| m.is_jump()).cloned().collect();

    if !jumps.is_empty() {
        let longest = best_jump(&jumps);
        debug!(longest = longest.len(), "keeping the longest chains");
        return or_else(promoting(board, &longest), longest);
    }

    let promotions = promoting(board, moves);
    if !promotions.is_empty() {
        debug!(promotions = promotions.len(), "keeping promoting steps");
        return promotions;
    }

    let safe = or_else(safe(board, moves), moves.to_vec());
    let closest = aggressive(board, &safe);
    debug!(safe = safe.len(), closest = closest.len());

    or_else(non_defensive(board, &closest), closest)
}

/// The jump chains of maximal length, ties kept.
pub fn best_jump(moves: &[Move]) -> Vec<Move> {
    let longest = moves.iter().map(|m| m.path().len()).max().unwrap_or(0);
    moves
        .iter()
        .filter(|m| m.path().len() == longest)
        .cloned()
        .collect()
}

/// The moves that end with a man on its far edge.
pub fn promoting(board: &Board, moves: &[Move]) -> Vec<Move> {
    moves
        .iter()
        .filter(|m| !m.piece().is_king())
        .filter(|m| m.whither().row == board.far_edge(m.piece().owner()))
        .cloned()
        .collect()
}

/// The moves whose destination cannot be jumped over right away.
///
/// Destinations on the edge of the board are always safe.
pub fn safe(board: &Board, moves: &[Move]) -> Vec<Move> {
    moves
        .iter()
        .filter(|m| board.is_edge(m.whither()) || !is_exposed(board, m))
        .cloned()
        .collect()
}

/// Whether an opponent could jump over the destination of a move.
fn is_exposed(board: &Board, m: &Move) -> bool {
    let to = m.whither();
    let mover = m.piece().owner();

    let is_vacant = |s: Square| s == m.whence() || board.is_empty_cell(s);
    let is_opponent = |s: Square| board.get(s).map_or(false, |p| p.owner() != mover);

    [Diagonal::NorthWest, Diagonal::NorthEast]
        .into_iter()
        .map(|d| (to.step(d), to.step(d.reverse())))
        .any(|(a, b)| (is_vacant(a) && is_opponent(b)) || (is_opponent(a) && is_vacant(b)))
}

/// The moves whose destination is the closest to every piece on the board, ties kept.
pub fn aggressive(board: &Board, moves: &[Move]) -> Vec<Move> {
    let spread = |m: &Move| -> i32 {
        board
            .iter()
            .map(|p| m.whither().distance_squared(p.position()))
            .sum()
    };

    let closest = moves.iter().map(spread).min().unwrap_or(0);
    moves
        .iter()
        .filter(|&m| spread(m) == closest)
        .cloned()
        .collect()
}

/// The moves that do not take a man off one of the defensive squares.
///
/// Kings are exempt, they may always leave a defensive square.
pub fn non_defensive(board: &Board, moves: &[Move]) -> Vec<Move> {
    let defensive: Vec<_> = board.defensive_squares().collect();
    moves
        .iter()
        .filter(|m| m.piece().is_king() || !defensive.contains(&m.whence()))
        .cloned()
        .collect()
}

fn or_else(filtered: Vec<Move>, fallback: Vec<Move>) -> Vec<Move> {
    if filtered.is_empty() {
        fallback
    } else {
        filtered
    }
}
