//! The search driver.
//!
//! For every enumerated tree that evaluates to the target, the canonical
//! form is fingerprinted and checked against the [`SeenCache`]. Only the
//! first tree of each class is reported, in discovery order.

use std::fmt;

use crate::{
    cache::SeenCache,
    canon::canonicalize,
    enumerate::for_each_tree,
    eval::evaluate,
    fingerprint::{fingerprint, Fingerprint},
    tree::{Slot, SyntaxTree, NUMBER_COUNT},
};

pub const DEFAULT_TARGET: i64 = 24;

/// A reported expression in canonical form.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct Solution {
    pub tree: SyntaxTree,
    pub fingerprint: Fingerprint,
}

impl fmt::Display for Solution {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.tree)
    }
}

/// Counters for one search.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub struct Stats {
    pub visited: usize,
    pub matched: usize,
    pub reported: usize,
}

#[derive(Debug)]
pub struct Solver {
    target: i64,
    seen: SeenCache,
    stats: Stats,
}

impl Solver {
    pub fn new(target: i64) -> Self {
        Self {
            target,
            seen: SeenCache::new(),
            stats: Stats::default(),
        }
    }

    pub fn target(&self) -> i64 {
        self.target
    }

    pub fn stats(&self) -> Stats {
        self.stats
    }

    /// Checks one candidate. Returns the canonical solution if `tree`
    /// reaches the target and no equivalent tree was reported before.
    ///
    /// Canonicalizing, fingerprinting and recording the fingerprint happen
    /// together here, so the check is a single report-if-new step.
    pub fn check(&mut self, tree: &SyntaxTree, root: Slot) -> Option<Solution> {
        self.stats.visited += 1;
        if evaluate(tree, root)? != self.target {
            return None;
        }
        self.stats.matched += 1;

        let canonical = canonicalize(*tree);
        let key = fingerprint(&canonical);
        if !self.seen.insert(key) {
            return None;
        }
        self.stats.reported += 1;
        tracing::trace!(
            found = %tree.layout(),
            canonical = %canonical.layout(),
            fingerprint = %key,
            "new solution"
        );
        Some(Solution {
            tree: canonical,
            fingerprint: key,
        })
    }

    /// Scans every candidate for `numbers`, calling `report` with each new
    /// solution as it is found.
    pub fn search(&mut self, numbers: [i64; NUMBER_COUNT], mut report: impl FnMut(Solution)) {
        for_each_tree(numbers, |tree, root| {
            if let Some(solution) = self.check(tree, root) {
                report(solution);
            }
        });
        tracing::debug!(
            ?numbers,
            target = self.target,
            visited = self.stats.visited,
            matched = self.stats.matched,
            reported = self.stats.reported,
            "search finished"
        );
    }
}

impl Default for Solver {
    fn default() -> Self {
        Self::new(DEFAULT_TARGET)
    }
}

/// Every distinct solution for `numbers`, in discovery order.
pub fn solve(numbers: [i64; NUMBER_COUNT], target: i64) -> Vec<Solution> {
    let mut solutions = Vec::new();
    Solver::new(target).search(numbers, |solution| solutions.push(solution));
    solutions
}
