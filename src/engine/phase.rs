//! The per-player turn phase state machine.
//!
//! Each player's turn runs `Place -> Grow -> [Pest] -> End`, looping back to
//! `Place` until the player's done predicate holds (full garden, or the
//! infestation cap reached), at which point the player enters `Done`.
//! `Done` is absorbing: no operation may move a done player's phase, board,
//! or score again.

use serde::{Deserialize, Serialize};

/// A player's current turn phase.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum TurnPhase {
    /// Must place or play a card from the draft zone.
    Place,
    /// May grow one plant, or skip.
    Grow,
    /// Must place owed pests until none remain.
    Pest,
    /// Turn complete; waiting for `next_turn`.
    End,
    /// Finished playing for the rest of the game.
    Done,
}

impl TurnPhase {
    /// The phase that follows a successful action in this phase.
    ///
    /// - `Place -> Grow`
    /// - `Grow -> Pest` while pests are owed, else `Grow -> End`
    /// - `Pest -> End` once no pests are owed, else stays `Pest`
    /// - `End -> Done` when the done predicate holds, else `End -> Place`
    /// - `Done` is absorbing
    #[must_use]
    pub fn advance(self, pests_owed: u32, done: bool) -> TurnPhase {
        match self {
            TurnPhase::Place => TurnPhase::Grow,
            TurnPhase::Grow | TurnPhase::Pest => {
                if pests_owed > 0 {
                    TurnPhase::Pest
                } else {
                    TurnPhase::End
                }
            }
            TurnPhase::End => {
                if done {
                    TurnPhase::Done
                } else {
                    TurnPhase::Place
                }
            }
            TurnPhase::Done => TurnPhase::Done,
        }
    }

    /// True once the player has finished playing.
    #[must_use]
    pub fn is_done(self) -> bool {
        matches!(self, TurnPhase::Done)
    }
}

impl std::fmt::Display for TurnPhase {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        let name = match self {
            TurnPhase::Place => "PLACE",
            TurnPhase::Grow => "GROW",
            TurnPhase::Pest => "PEST",
            TurnPhase::End => "END",
            TurnPhase::Done => "DONE",
        };
        write!(f, "{name}")
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_place_always_advances_to_grow() {
        assert_eq!(TurnPhase::Place.advance(0, false), TurnPhase::Grow);
        assert_eq!(TurnPhase::Place.advance(3, false), TurnPhase::Grow);
    }

    #[test]
    fn test_grow_branches_on_owed_pests() {
        assert_eq!(TurnPhase::Grow.advance(0, false), TurnPhase::End);
        assert_eq!(TurnPhase::Grow.advance(2, false), TurnPhase::Pest);
    }

    #[test]
    fn test_pest_repeats_until_no_pests_owed() {
        assert_eq!(TurnPhase::Pest.advance(1, false), TurnPhase::Pest);
        assert_eq!(TurnPhase::Pest.advance(0, false), TurnPhase::End);
    }

    #[test]
    fn test_end_branches_on_done_predicate() {
        assert_eq!(TurnPhase::End.advance(0, false), TurnPhase::Place);
        assert_eq!(TurnPhase::End.advance(0, true), TurnPhase::Done);
    }

    #[test]
    fn test_done_is_absorbing() {
        assert_eq!(TurnPhase::Done.advance(0, false), TurnPhase::Done);
        assert_eq!(TurnPhase::Done.advance(5, true), TurnPhase::Done);
    }

    #[test]
    fn test_display() {
        assert_eq!(TurnPhase::Place.to_string(), "PLACE");
        assert_eq!(TurnPhase::Done.to_string(), "DONE");
    }
}
