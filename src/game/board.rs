use std::fmt;

use log::{debug, trace};

use super::Player;
use crate::error::BoardError;

/// Number of physical pits on the board. Always even; each player owns half.
pub const PITS: usize = 12;
/// Pits belonging to a single player.
pub const PITS_PER_PLAYER: usize = PITS / 2;
/// Pebbles placed in every pit by a default reset.
pub const INITIAL_PEBBLES_PER_PIT: u32 = 4;
/// Score recorded for a player who chose an empty pit.
pub const FORFEIT_SCORE: i32 = -1;

/// Pebble and score state of a game.
///
/// Pits `0..6` belong to player one and `6..12` to player two, in clockwise
/// order. Player one's store sits between pit 5 and pit 6, player two's
/// between pit 11 and pit 0.
///
/// A `Board` is a plain value with no interior synchronization; it must not be
/// shared across threads without external locking.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Board {
    scores: [i32; 2],
    pits: [u32; PITS],
    forced_end: bool,
}

impl Board {
    /// Create a board with the default seeding.
    pub fn new() -> Self {
        Board {
            scores: [0, 0],
            pits: [INITIAL_PEBBLES_PER_PIT; PITS],
            forced_end: false,
        }
    }

    /// Create a board from explicit scores and pit contents. Mostly used to
    /// construct scenarios.
    pub fn with_state(score_one: i32, score_two: i32, pits: &[i32]) -> Result<Self, BoardError> {
        let mut board = Board::new();
        board.reset_to(score_one, score_two, pits)?;
        Ok(board)
    }

    /// Restore the default seeding: 0/0 scores, 4 pebbles per pit.
    pub fn reset(&mut self) {
        *self = Board::new();
    }

    /// Replace the whole state. The board is left untouched if the input is
    /// rejected.
    pub fn reset_to(&mut self, score_one: i32, score_two: i32, pits: &[i32]) -> Result<(), BoardError> {
        if score_one < 0 {
            return Err(BoardError::InvalidState(format!(
                "player one score must be >= 0, got {score_one}"
            )));
        }
        if score_two < 0 {
            return Err(BoardError::InvalidState(format!(
                "player two score must be >= 0, got {score_two}"
            )));
        }
        if pits.len() != PITS {
            return Err(BoardError::InvalidState(format!(
                "expected {PITS} pits, got {}",
                pits.len()
            )));
        }

        let mut new_pits = [0u32; PITS];
        for (slot, &pebbles) in new_pits.iter_mut().zip(pits) {
            *slot = u32::try_from(pebbles).map_err(|_| {
                BoardError::InvalidState(format!("pit values must be >= 0, got {pebbles}"))
            })?;
        }

        self.scores = [score_one, score_two];
        self.pits = new_pits;
        self.forced_end = false;
        Ok(())
    }

    /// The player's score, `-1` if they forfeited.
    pub fn points(&self, player: Player) -> Result<i32, BoardError> {
        let seat = player.seat().ok_or(BoardError::InvalidPlayer(player))?;
        Ok(self.scores[seat])
    }

    /// The player's six pits, clockwise from their first pit.
    pub fn pits_of(&self, player: Player) -> Result<[u32; PITS_PER_PLAYER], BoardError> {
        let seat = player.seat().ok_or(BoardError::InvalidPlayer(player))?;
        Ok(self.side(seat))
    }

    /// All twelve pits reindexed so the player's first pit is at index 0.
    /// Clockwise order is preserved.
    pub fn perspective(&self, player: Player) -> Result<[u32; PITS], BoardError> {
        let seat = player.seat().ok_or(BoardError::InvalidPlayer(player))?;
        let offset = seat * PITS_PER_PLAYER;
        let mut view = [0u32; PITS];
        for (i, slot) in view.iter_mut().enumerate() {
            *slot = self.pits[(i + offset) % PITS];
        }
        Ok(view)
    }

    /// 1-based locations of the player's non-empty pits, ascending. Empty for
    /// `Nobody`.
    pub fn valid_moves(&self, player: Player) -> Vec<usize> {
        let Some(seat) = player.seat() else {
            return Vec::new();
        };
        self.side(seat)
            .iter()
            .enumerate()
            .filter(|&(_, &pebbles)| pebbles > 0)
            .map(|(i, _)| i + 1)
            .collect()
    }

    /// True once a forfeit happened or the named player's own pits are empty.
    /// Only the named side is inspected.
    pub fn is_over(&self, player: Player) -> bool {
        if self.forced_end {
            return true;
        }
        match player.seat() {
            Some(seat) => self.side(seat).iter().all(|&pebbles| pebbles == 0),
            None => false,
        }
    }

    /// Whether an illegal move ended the game.
    pub fn is_forced_end(&self) -> bool {
        self.forced_end
    }

    /// Player with the strictly higher score, `Nobody` on a tie.
    pub fn leader(&self) -> Player {
        match self.scores[0].cmp(&self.scores[1]) {
            std::cmp::Ordering::Greater => Player::One,
            std::cmp::Ordering::Less => Player::Two,
            std::cmp::Ordering::Equal => Player::Nobody,
        }
    }

    /// Pebbles still sitting in pits.
    pub fn pebbles_in_play(&self) -> u32 {
        self.pits.iter().sum()
    }

    /// Play `location` (1..=6, relative to the player's own pits).
    ///
    /// Returns `Ok(true)` when the last pebble landed in the mover's store and
    /// they move again. Choosing an empty pit is not an error: the mover's
    /// score becomes `-1`, the game is force-ended and `Ok(false)` is returned.
    pub fn execute_move(&mut self, player: Player, location: usize) -> Result<bool, BoardError> {
        let seat = match player.seat() {
            Some(seat) if (1..=PITS_PER_PLAYER).contains(&location) => seat,
            _ => return Err(BoardError::InvalidMove { player, location }),
        };
        debug!("executing move: {player} on location {location}");

        let start = seat * PITS_PER_PLAYER + location - 1;
        Ok(self.sow(seat, start))
    }

    /// Sow from `start`, picking the last pit back up while it was non-empty
    /// before the final drop.
    fn sow(&mut self, seat: usize, start: usize) -> bool {
        // The mover's store is entered right before this pit.
        let store_entry = (seat * PITS_PER_PLAYER + PITS_PER_PLAYER) % PITS;
        let mut location = start;

        loop {
            if self.pits[location] == 0 {
                self.scores[seat] = FORFEIT_SCORE;
                self.forced_end = true;
                debug!("illegal move from empty pit {location}, game forfeited");
                return false;
            }

            let mut hand = std::mem::take(&mut self.pits[location]);
            trace!("pebbles in hand: {hand}");

            let mut next = location;
            while hand > 0 {
                next = (next + 1) % PITS;
                if next == store_entry {
                    self.scores[seat] += 1;
                    hand -= 1;
                    if hand == 0 {
                        debug!("    {self} POINT");
                        return true;
                    }
                }
                self.pits[next] += 1;
                hand -= 1;
                trace!("pebbles now in pit {next}: {}", self.pits[next]);
            }
            debug!("    {self}");

            if self.pits[next] > 1 {
                location = next;
            } else {
                return false;
            }
        }
    }

    fn side(&self, seat: usize) -> [u32; PITS_PER_PLAYER] {
        let mut side = [0u32; PITS_PER_PLAYER];
        side.copy_from_slice(&self.pits[seat * PITS_PER_PLAYER..(seat + 1) * PITS_PER_PLAYER]);
        side
    }
}

impl Default for Board {
    fn default() -> Self {
        Self::new()
    }
}

impl fmt::Display for Board {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(
            f,
            "{} ({}): {:?}, {} ({}): {:?}",
            Player::One,
            self.scores[0],
            self.side(0),
            Player::Two,
            self.scores[1],
            self.side(1)
        )
    }
}
