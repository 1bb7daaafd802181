//! Exhaustive generation of candidate trees.
//!
//! Every tree is the product of three independent choices:
//!
//! - one of the 64 operator assignments, counted in mixed radix with the
//!   first operator as the lowest digit (outermost loop);
//! - for each operator in build order, a left and a right operand drawn from
//!   the [`OperandPool`], which gives `4·3 · 3·2 · 2·1 = 144` placements;
//! - the input numbers in their given order fill the leaf slots.
//!
//! Shapes that differ only by commutation are generated more than once on
//! purpose. The canonicalizer and the seen cache remove those later.

use crate::{
    pool::OperandPool,
    tree::{Node, Op, Slot, SyntaxTree, NUMBER_COUNT, OP_COUNT, ROOT, SLOT_COUNT},
};

pub const OPERATOR_COMBINATIONS: usize = 64;
pub const PLACEMENTS: usize = 144;
pub const TREE_COUNT: usize = OPERATOR_COMBINATIONS * PLACEMENTS;

/// Operand positions `(lhs, rhs)` for each operator, relative to the pool.
type Placement = [(usize, usize); OP_COUNT];

fn operators(combination: usize) -> [Op; OP_COUNT] {
    let mut ops = [Op::Add; OP_COUNT];
    for (i, op) in ops.iter_mut().enumerate() {
        *op = Op::from_code((combination >> (2 * i)) as u8);
    }
    ops
}

/// All `(lhs, rhs)` choices when `candidates` operands are available.
fn choices(candidates: usize) -> impl Iterator<Item = (usize, usize)> {
    (0..candidates).flat_map(move |lhs| (0..candidates - 1).map(move |rhs| (lhs, rhs)))
}

fn placements() -> impl Iterator<Item = Placement> {
    choices(NUMBER_COUNT).flat_map(|first| {
        choices(NUMBER_COUNT - 1).flat_map(move |second| {
            choices(NUMBER_COUNT - 2).map(move |third| [first, second, third])
        })
    })
}

fn build(numbers: [i64; NUMBER_COUNT], ops: [Op; OP_COUNT], placement: Placement) -> SyntaxTree {
    let mut nodes = [Node::Number(0); SLOT_COUNT];
    for (node, &n) in nodes.iter_mut().zip(&numbers) {
        *node = Node::Number(n);
    }
    let mut pool = OperandPool::new();
    for (op, (lhs, rhs)) in ops.into_iter().zip(placement) {
        let slot = pool.building();
        let lhs = pool.take_lhs(lhs);
        let rhs = pool.take_rhs(rhs);
        nodes[slot.index()] = Node::Operator { op, lhs, rhs };
    }
    SyntaxTree::from_nodes(nodes)
}

/// Yields every candidate tree in a fixed order. The root of each is [`ROOT`].
pub fn trees(numbers: [i64; NUMBER_COUNT]) -> impl Iterator<Item = SyntaxTree> {
    (0..OPERATOR_COMBINATIONS).flat_map(move |combination| {
        let ops = operators(combination);
        placements().map(move |placement| build(numbers, ops, placement))
    })
}

/// Calls `visit` with every candidate tree and its root slot.
pub fn for_each_tree(numbers: [i64; NUMBER_COUNT], mut visit: impl FnMut(&SyntaxTree, Slot)) {
    for tree in trees(numbers) {
        visit(&tree, ROOT);
    }
}

#[cfg(test)]
mod tests {
    use std::collections::HashSet;

    use super::*;
    use pretty_assertions::assert_eq;

    #[test]
    fn generates_every_combination_once() {
        let all: Vec<_> = trees([1, 2, 3, 4]).collect();
        assert_eq!(all.len(), TREE_COUNT);
        assert_eq!(TREE_COUNT, 9216);
        let distinct: HashSet<_> = all.iter().collect();
        assert_eq!(distinct.len(), TREE_COUNT);
    }

    #[test]
    fn first_tree_chains_additions() {
        let first = trees([1, 2, 3, 4]).next();
        assert_eq!(
            first.map(|tree| tree.to_string()),
            Some("(((1 + 4) + 3) + 2)".to_owned())
        );
    }

    #[test]
    fn operator_counter_covers_all_kinds() {
        assert_eq!(operators(0), [Op::Add; 3]);
        assert_eq!(operators(1), [Op::Sub, Op::Add, Op::Add]);
        assert_eq!(operators(4), [Op::Add, Op::Sub, Op::Add]);
        assert_eq!(operators(OPERATOR_COMBINATIONS - 1), [Op::Div; 3]);
        let seen: HashSet<_> = (0..OPERATOR_COMBINATIONS).map(operators).collect();
        assert_eq!(seen.len(), OPERATOR_COMBINATIONS);
    }

    #[test]
    fn every_tree_uses_each_slot_once() {
        for_each_tree([5, 6, 7, 8], |tree, root| {
            assert_eq!(root, ROOT);
            let mut parents = [0; SLOT_COUNT];
            for node in tree.nodes() {
                if let Some((lhs, rhs)) = node.children() {
                    parents[lhs.index()] += 1;
                    parents[rhs.index()] += 1;
                }
            }
            assert_eq!(parents, [1, 1, 1, 1, 1, 1, 0], "{}", tree.layout());
            assert_eq!(tree.numbers(), [5, 6, 7, 8]);
        });
    }

    #[test]
    fn placements_per_operator_set() {
        assert_eq!(placements().count(), PLACEMENTS);
        assert_eq!(choices(2).collect::<Vec<_>>(), vec![(0, 0), (1, 0)]);
    }
}
