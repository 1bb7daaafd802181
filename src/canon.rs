//! Normal forms modulo commutativity.
//!
//! [`canonicalize`] maps every tree to the single representative of its
//! class under reordering and regrouping of `+` and `*`. It runs in two
//! passes over an owned copy of the slot array:
//!
//! 1. **Normalize** the logical tree bottom-up. A maximal run of nested
//!    operators of the same commutative kind is flattened into one operand
//!    list, sorted, and threaded back into a left-to-right chain that reuses
//!    the run's operator slots in ascending order. `-` and `/` keep their
//!    operand roles; only their subtrees are normalized.
//! 2. **Relayout** the result so the physical arrangement is a function of
//!    the logical tree alone: leaves take slots `[0, 4)` in ascending value
//!    order, operators are numbered in pre-order downwards from [`ROOT`].
//!
//! Sorting uses [`ordering_key`] and breaks ties structurally, so operands
//! that compare equal print identically.

use std::cmp::Ordering;

use smallvec::SmallVec;

use crate::tree::{Node, Op, Slot, SyntaxTree, NUMBER_COUNT, OP_COUNT, ROOT, SLOT_COUNT};

/// Returns the canonical representative of `tree`.
///
/// The result evaluates to the same value, prints the same modulo
/// commutativity, and is a fixed point: canonicalizing it again returns it
/// unchanged.
pub fn canonicalize(tree: SyntaxTree) -> SyntaxTree {
    let mut canon = Canonicalizer::new(&tree);
    let root = canon.normalize(ROOT);
    assert_eq!(root, ROOT, "canonicalization moved the root");
    canon.relayout(root)
}

pub fn is_canonical(tree: &SyntaxTree) -> bool {
    canonicalize(*tree) == *tree
}

/// The sort key of the subtree at `slot`.
///
/// A leaf's key is the rank of its value among the tree's numbers, so equal
/// values share a key. An operator's key is `4 * kind` plus the larger of
/// its children's keys.
pub fn ordering_key(tree: &SyntaxTree, slot: Slot) -> u32 {
    key(tree.nodes(), &sorted_numbers(tree), slot)
}

fn sorted_numbers(tree: &SyntaxTree) -> [i64; NUMBER_COUNT] {
    let mut numbers = tree.numbers();
    numbers.sort_unstable();
    numbers
}

fn key(nodes: &[Node; SLOT_COUNT], sorted: &[i64; NUMBER_COUNT], slot: Slot) -> u32 {
    match nodes[slot.index()] {
        Node::Number(n) => sorted.partition_point(|&m| m < n) as u32,
        Node::Operator { op, lhs, rhs } => {
            4 * u32::from(op.code()) + key(nodes, sorted, lhs).max(key(nodes, sorted, rhs))
        }
    }
}

fn compare_structure(nodes: &[Node; SLOT_COUNT], a: Slot, b: Slot) -> Ordering {
    match (nodes[a.index()], nodes[b.index()]) {
        (Node::Number(x), Node::Number(y)) => x.cmp(&y),
        (Node::Number(_), Node::Operator { .. }) => Ordering::Less,
        (Node::Operator { .. }, Node::Number(_)) => Ordering::Greater,
        (
            Node::Operator { op: a_op, lhs: a_lhs, rhs: a_rhs },
            Node::Operator { op: b_op, lhs: b_lhs, rhs: b_rhs },
        ) => a_op
            .cmp(&b_op)
            .then_with(|| compare_structure(nodes, a_lhs, b_lhs))
            .then_with(|| compare_structure(nodes, a_rhs, b_rhs)),
    }
}

/// Operands and operator slots of one commutative run.
#[derive(Debug)]
struct Chain {
    op: Op,
    operands: SmallVec<[Slot; NUMBER_COUNT]>,
    operators: SmallVec<[Slot; OP_COUNT]>,
}

impl Chain {
    fn new(op: Op) -> Self {
        Self {
            op,
            operands: SmallVec::new(),
            operators: SmallVec::new(),
        }
    }

    fn push_operand(&mut self, slot: Slot) {
        assert!(
            self.operands.len() < NUMBER_COUNT,
            "commutative chain has more than {NUMBER_COUNT} operands"
        );
        self.operands.push(slot);
    }

    fn push_operator(&mut self, slot: Slot) {
        assert!(
            self.operators.len() < OP_COUNT,
            "commutative chain has more than {OP_COUNT} operators"
        );
        self.operators.push(slot);
    }
}

struct Canonicalizer {
    nodes: [Node; SLOT_COUNT],
    sorted: [i64; NUMBER_COUNT],
}

impl Canonicalizer {
    fn new(tree: &SyntaxTree) -> Self {
        Self {
            nodes: *tree.nodes(),
            sorted: sorted_numbers(tree),
        }
    }

    fn compare(&self, a: Slot, b: Slot) -> Ordering {
        key(&self.nodes, &self.sorted, a)
            .cmp(&key(&self.nodes, &self.sorted, b))
            .then_with(|| compare_structure(&self.nodes, a, b))
    }

    /// Normalizes the subtree at `slot` and returns the slot now holding its
    /// root. That differs from `slot` when a commutative run is rethreaded.
    fn normalize(&mut self, slot: Slot) -> Slot {
        let Node::Operator { op, lhs, rhs } = self.nodes[slot.index()] else {
            return slot;
        };
        if op.is_commutative() {
            let chain = self.collect(slot, Chain::new(op));
            self.rethread(chain)
        } else {
            let lhs = self.normalize(lhs);
            let rhs = self.normalize(rhs);
            self.nodes[slot.index()] = Node::Operator { op, lhs, rhs };
            slot
        }
    }

    /// Walks the run of `chain.op` operators starting at `slot`, normalizing
    /// every operand that is not part of the run.
    fn collect(&mut self, slot: Slot, mut chain: Chain) -> Chain {
        chain.push_operator(slot);
        let Some((lhs, rhs)) = self.nodes[slot.index()].children() else {
            unreachable!("slot {slot} in a commutative run is a number");
        };
        for child in [lhs, rhs] {
            match self.nodes[child.index()] {
                Node::Operator { op, .. } if op == chain.op => chain = self.collect(child, chain),
                _ => {
                    let operand = self.normalize(child);
                    chain.push_operand(operand);
                }
            }
        }
        chain
    }

    fn rethread(&mut self, chain: Chain) -> Slot {
        let Chain {
            op,
            mut operands,
            mut operators,
        } = chain;
        assert_eq!(
            operands.len(),
            operators.len() + 1,
            "commutative run is not a binary tree"
        );
        operands.sort_by(|&a, &b| self.compare(a, b));
        operators.sort_unstable();

        let mut result = operands[0];
        for (i, &slot) in operators.iter().enumerate() {
            let (lhs, rhs) = match i {
                0 => (operands[0], operands[1]),
                _ => (operands[i + 1], result),
            };
            let (lhs, rhs) = match self.compare(lhs, rhs) {
                Ordering::Greater => (rhs, lhs),
                _ => (lhs, rhs),
            };
            self.nodes[slot.index()] = Node::Operator { op, lhs, rhs };
            result = slot;
        }
        result
    }

    fn relayout(&self, root: Slot) -> SyntaxTree {
        let mut layout = Relayout {
            from: &self.nodes,
            sorted: self.sorted,
            used: [false; NUMBER_COUNT],
            next_operator: SLOT_COUNT,
            nodes: [Node::Number(0); SLOT_COUNT],
        };
        for (node, &n) in layout.nodes.iter_mut().zip(&self.sorted) {
            *node = Node::Number(n);
        }
        let placed = layout.place(root);
        assert_eq!(placed, ROOT, "relayout did not put the root last");
        assert!(
            layout.used.iter().all(|&used| used),
            "relayout left a number unused"
        );
        SyntaxTree::from_nodes(layout.nodes)
    }
}

struct Relayout<'a> {
    from: &'a [Node; SLOT_COUNT],
    sorted: [i64; NUMBER_COUNT],
    used: [bool; NUMBER_COUNT],
    next_operator: usize,
    nodes: [Node; SLOT_COUNT],
}

impl Relayout<'_> {
    fn place(&mut self, slot: Slot) -> Slot {
        match self.from[slot.index()] {
            Node::Number(n) => {
                let Some(index) =
                    (0..NUMBER_COUNT).find(|&i| !self.used[i] && self.sorted[i] == n)
                else {
                    panic!("no free leaf slot left for {n}");
                };
                self.used[index] = true;
                Slot::new(index)
            }
            Node::Operator { op, lhs, rhs } => {
                assert!(
                    self.next_operator > NUMBER_COUNT,
                    "tree has more than {OP_COUNT} operators"
                );
                self.next_operator -= 1;
                let placed = Slot::new(self.next_operator);
                let lhs = self.place(lhs);
                let rhs = self.place(rhs);
                self.nodes[placed.index()] = Node::Operator { op, lhs, rhs };
                placed
            }
        }
    }
}
