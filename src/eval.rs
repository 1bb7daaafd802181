use crate::tree::{Node, Op, Slot, SyntaxTree};

impl Op {
    /// Applies the operator, or returns `None` when the result is not an
    /// exact integer: division by zero, a non-zero remainder, or overflow.
    pub fn apply(self, lhs: i64, rhs: i64) -> Option<i64> {
        match self {
            Op::Add => lhs.checked_add(rhs),
            Op::Sub => lhs.checked_sub(rhs),
            Op::Mul => lhs.checked_mul(rhs),
            Op::Div => match lhs.checked_rem(rhs)? {
                0 => lhs.checked_div(rhs),
                _ => None,
            },
        }
    }
}

/// Evaluates the subtree rooted at `slot`. `None` marks an invalid branch,
/// which propagates to every ancestor.
pub fn evaluate(tree: &SyntaxTree, slot: Slot) -> Option<i64> {
    match tree[slot] {
        Node::Number(n) => Some(n),
        Node::Operator { op, lhs, rhs } => {
            let lhs = evaluate(tree, lhs);
            let rhs = evaluate(tree, rhs);
            op.apply(lhs?, rhs?)
        }
    }
}
