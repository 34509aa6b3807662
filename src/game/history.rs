//! Paired move stacks backing round undo

use crate::board::Pos;

/// Moves of both sides, newest last.
///
/// A human move is pushed right after it lands and the machine's reply is
/// pushed right after that, so the stacks advance in lockstep and
/// `human.len() - machine.len()` is always 0 or 1.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct RoundHistory {
    human: Vec<Pos>,
    machine: Vec<Pos>,
}

impl RoundHistory {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn record_human(&mut self, pos: Pos) {
        debug_assert_eq!(self.human.len(), self.machine.len(), "human moved twice in a round");
        self.human.push(pos);
    }

    pub fn record_machine(&mut self, pos: Pos) {
        debug_assert_eq!(self.human.len(), self.machine.len() + 1, "machine reply without a human move");
        self.machine.push(pos);
    }

    /// Pop the latest human move and the latest machine move together.
    ///
    /// Returns `None` and leaves both stacks alone if either is empty.
    pub fn undo_last_round(&mut self) -> Option<(Pos, Pos)> {
        if self.human.is_empty() || self.machine.is_empty() {
            return None;
        }
        let human = self.human.pop()?;
        let machine = self.machine.pop()?;
        Some((human, machine))
    }

    #[inline]
    pub fn last_human(&self) -> Option<Pos> {
        self.human.last().copied()
    }

    #[inline]
    pub fn last_machine(&self) -> Option<Pos> {
        self.machine.last().copied()
    }

    #[inline]
    pub fn human_moves(&self) -> &[Pos] {
        &self.human
    }

    #[inline]
    pub fn machine_moves(&self) -> &[Pos] {
        &self.machine
    }

    /// Completed rounds (human move plus machine reply)
    #[inline]
    pub fn rounds(&self) -> usize {
        self.machine.len()
    }

    #[inline]
    pub fn is_empty(&self) -> bool {
        self.human.is_empty() && self.machine.is_empty()
    }
}
