//! The fixed-size expression arena.
//!
//! A [`SyntaxTree`] holds exactly [`SLOT_COUNT`] nodes: the input numbers in
//! slots `[0, NUMBER_COUNT)` and the operators in the remaining slots, with
//! the root in the last one. Children are referenced by [`Slot`] rather than
//! by pointer, so a tree is a plain `Copy` value.

use std::{fmt, fmt::Display, ops::Index};

pub const NUMBER_COUNT: usize = 4;
pub const OP_COUNT: usize = NUMBER_COUNT - 1;
pub const SLOT_COUNT: usize = NUMBER_COUNT + OP_COUNT;

/// Slot of the root operator. Fixed by construction.
pub const ROOT: Slot = Slot::new(SLOT_COUNT - 1);

/// An index into a [`SyntaxTree`], always below [`SLOT_COUNT`].
#[derive(Clone, Copy, Debug, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub struct Slot(u8);

impl Slot {
    pub const fn new(index: usize) -> Self {
        assert!(index < SLOT_COUNT, "slot index out of range");
        Self(index as u8)
    }

    pub const fn index(self) -> usize {
        self.0 as usize
    }

    pub fn is_leaf(self) -> bool {
        self.index() < NUMBER_COUNT
    }

    pub fn all() -> impl Iterator<Item = Slot> {
        (0..SLOT_COUNT).map(Slot::new)
    }
}

impl Display for Slot {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.0)
    }
}

#[derive(Clone, Copy, Debug, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub enum Op {
    Add,
    Sub,
    Mul,
    Div,
}

impl Op {
    pub const ALL: [Op; 4] = [Op::Add, Op::Sub, Op::Mul, Op::Div];

    /// The two-bit code used by the enumeration counter and the fingerprint.
    pub const fn code(self) -> u8 {
        self as u8
    }

    pub const fn from_code(code: u8) -> Self {
        Self::ALL[(code & 0b11) as usize]
    }

    pub const fn is_commutative(self) -> bool {
        matches!(self, Op::Add | Op::Mul)
    }
}

impl Display for Op {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(
            f,
            "{}",
            match self {
                Op::Add => '+',
                Op::Sub => '-',
                Op::Mul => '*',
                Op::Div => '/',
            }
        )
    }
}

#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub enum Node {
    Number(i64),
    Operator { op: Op, lhs: Slot, rhs: Slot },
}

impl Node {
    pub fn children(self) -> Option<(Slot, Slot)> {
        match self {
            Node::Number(_) => None,
            Node::Operator { lhs, rhs, .. } => Some((lhs, rhs)),
        }
    }
}

#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub struct SyntaxTree {
    nodes: [Node; SLOT_COUNT],
}

impl SyntaxTree {
    /// Wraps a raw slot array.
    ///
    /// # Panics
    ///
    /// If a leaf slot does not hold a number, an operator slot does not hold
    /// an operator, or an operator references a slot at or above its own.
    /// Every tree built by this crate satisfies these, so a panic here is a
    /// logic error in the caller.
    pub fn from_nodes(nodes: [Node; SLOT_COUNT]) -> Self {
        for (index, node) in nodes.iter().enumerate() {
            match (node, index < NUMBER_COUNT) {
                (Node::Number(_), true) => {}
                (Node::Operator { lhs, rhs, .. }, false) => assert!(
                    lhs.index() < index && rhs.index() < index && lhs != rhs,
                    "operator in slot {index} has invalid children <{lhs}, {rhs}>"
                ),
                _ => panic!("slot {index} holds the wrong kind of node: {node:?}"),
            }
        }
        Self { nodes }
    }

    pub fn nodes(&self) -> &[Node; SLOT_COUNT] {
        &self.nodes
    }

    pub fn numbers(&self) -> [i64; NUMBER_COUNT] {
        let mut numbers = [0; NUMBER_COUNT];
        for (number, node) in numbers.iter_mut().zip(&self.nodes) {
            if let Node::Number(n) = node {
                *number = *n;
            }
        }
        numbers
    }

    /// Renders the subtree rooted at `slot` as a fully parenthesized
    /// expression.
    pub fn expr(&self, slot: Slot) -> Expr<'_> {
        Expr { tree: self, slot }
    }

    /// Renders the raw slot array, one cell per slot.
    pub fn layout(&self) -> Layout<'_> {
        Layout(self)
    }
}

impl Index<Slot> for SyntaxTree {
    type Output = Node;

    fn index(&self, slot: Slot) -> &Node {
        &self.nodes[slot.index()]
    }
}

/// Prints the whole tree from [`ROOT`].
impl Display for SyntaxTree {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        self.expr(ROOT).fmt(f)
    }
}

pub struct Expr<'a> {
    tree: &'a SyntaxTree,
    slot: Slot,
}

impl<'a> Display for Expr<'a> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self.tree[self.slot] {
            Node::Number(n) => write!(f, "{n}"),
            Node::Operator { op, lhs, rhs } => write!(
                f,
                "({} {op} {})",
                self.tree.expr(lhs),
                self.tree.expr(rhs)
            ),
        }
    }
}

pub struct Layout<'a>(&'a SyntaxTree);

impl<'a> Display for Layout<'a> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "|")?;
        for node in &self.0.nodes {
            match node {
                Node::Number(n) => write!(f, " {n} |")?,
                Node::Operator { op, lhs, rhs } => write!(f, " {op} <{lhs}, {rhs}> |")?,
            }
        }
        Ok(())
    }
}
