//! Compact keys for canonical trees.
//!
//! A fingerprint replays the construction of a tree through the same
//! [`OperandPool`] the enumerator uses and records, per operator, its kind
//! and the pool positions of its two operands. Pool positions shrink with
//! every step, so the whole record fits in 15 bits:
//!
//! | operator | kind     | lhs       | rhs       |
//! |----------|----------|-----------|-----------|
//! | slot 4   | bits 0-1 | bits 6-7  | bits 8-9  |
//! | slot 5   | bits 2-3 | bits 10-11| bit 12    |
//! | slot 6   | bits 4-5 | bit 13    | bit 14    |
//!
//! The replay is only defined for trees whose operators reference lower
//! slots, which every [`canonicalize`](crate::canon::canonicalize) output
//! does. On such trees the encoding is injective.

use std::fmt;

use crate::{
    pool::OperandPool,
    tree::{Node, Slot, SyntaxTree, NUMBER_COUNT, OP_COUNT},
};

/// `(offset, width)` of the kind, lhs and rhs fields of each operator.
const FIELDS: [[(u8, u8); 3]; OP_COUNT] = [
    [(0, 2), (6, 2), (8, 2)],
    [(2, 2), (10, 2), (12, 1)],
    [(4, 2), (13, 1), (14, 1)],
];

#[derive(Clone, Copy, Debug, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub struct Fingerprint(u16);

impl Fingerprint {
    pub const fn bits(self) -> u16 {
        self.0
    }
}

impl fmt::Display for Fingerprint {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{:#06x}", self.0)
    }
}

/// Packs `value` into the `(offset, width)` field.
fn place(bits: &mut u16, (offset, width): (u8, u8), value: usize) {
    assert!(
        value < 1 << width,
        "value {value} does not fit a {width}-bit fingerprint field"
    );
    *bits |= (value as u16) << offset;
}

fn pool_position(pool: &OperandPool, slot: Slot, tree: &SyntaxTree) -> usize {
    pool.position(slot)
        .unwrap_or_else(|| panic!("slot {slot} is not available in {}", tree.layout()))
}

/// Fingerprints a canonical tree.
///
/// # Panics
///
/// If an operator references a slot that was already consumed, which only
/// happens when `tree` is not a tree in canonical layout.
pub fn fingerprint(tree: &SyntaxTree) -> Fingerprint {
    let mut bits = 0;
    let mut pool = OperandPool::new();
    for (i, [kind, lhs_field, rhs_field]) in FIELDS.into_iter().enumerate() {
        let Node::Operator { op, lhs, rhs } = tree.nodes()[NUMBER_COUNT + i] else {
            panic!("slot {} is not an operator in {}", NUMBER_COUNT + i, tree.layout());
        };
        place(&mut bits, kind, usize::from(op.code()));

        let position = pool_position(&pool, lhs, tree);
        place(&mut bits, lhs_field, position);
        pool.take_lhs(position);

        let position = pool_position(&pool, rhs, tree);
        place(&mut bits, rhs_field, position);
        pool.take_rhs(position);
    }
    Fingerprint(bits)
}
