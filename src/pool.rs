//! The shrinking operand pool.
//!
//! Both the enumerator and the fingerprinter build a tree one operator at a
//! time, drawing two operands from the slots not yet consumed. The pool keeps
//! those candidates packed at the front of a permutation of all slots, so a
//! choice is a small position rather than an absolute slot index:
//!
//! - taking a left operand swaps it to the end of the candidate range, which
//!   then shrinks by one;
//! - taking a right operand swaps the operator being built into its position,
//!   so later operators can consume the result.
//!
//! Operator `k` (counting from zero) therefore picks its left operand from
//! `NUMBER_COUNT - k` candidates and its right operand from one fewer.

use crate::tree::{Slot, NUMBER_COUNT, SLOT_COUNT};

#[derive(Clone, Debug)]
pub(crate) struct OperandPool {
    table: [Slot; SLOT_COUNT],
    available: usize,
    next: usize,
}

impl OperandPool {
    pub fn new() -> Self {
        let mut table = [Slot::new(0); SLOT_COUNT];
        for (entry, slot) in table.iter_mut().zip(Slot::all()) {
            *entry = slot;
        }
        Self {
            table,
            available: NUMBER_COUNT,
            next: NUMBER_COUNT,
        }
    }

    /// Number of candidates the next left operand is chosen from.
    pub fn len(&self) -> usize {
        self.available
    }

    /// Slot of the operator the next `take_rhs` completes.
    pub fn building(&self) -> Slot {
        Slot::new(self.next)
    }

    pub fn take_lhs(&mut self, position: usize) -> Slot {
        assert!(position < self.available, "left operand {position} outside the pool");
        let slot = self.table[position];
        self.available -= 1;
        self.table.swap(position, self.available);
        slot
    }

    pub fn take_rhs(&mut self, position: usize) -> Slot {
        assert!(position < self.available, "right operand {position} outside the pool");
        let slot = self.table[position];
        self.table.swap(position, self.next);
        self.next += 1;
        slot
    }

    /// Position of `slot` among the current candidates.
    pub fn position(&self, slot: Slot) -> Option<usize> {
        self.table[..self.available].iter().position(|&s| s == slot)
    }
}
