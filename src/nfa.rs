//! The compiled automaton and its epsilon-closure.

use crate::graph::Digraph;
use crate::{matcher::Matcher, MatchResult};
use std::collections::HashSet;

/// A position in the automaton: an index into the pattern, or the accept
/// sentinel one past its end.
pub type StateId = usize;

/// The set of positions the automaton could be in at some point of a match.
pub type PositionSet = HashSet<StateId>;

/// A compiled pattern: the pattern characters plus the graph of epsilon
/// transitions between their positions.
///
/// Position `v < m` holds the pattern character `pattern[v]`. Position `m`
/// is the accept sentinel. The automaton is never mutated after compilation,
/// so one value can be shared by any number of threads that match against it.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct NFA {
    pattern: String,
    symbols: Vec<char>,
    graph: Digraph,
}

impl NFA {
    pub(crate) fn new(symbols: Vec<char>, graph: Digraph) -> Self {
        debug_assert_eq!(graph.vertex_count(), symbols.len() + 1);
        Self { pattern: symbols.iter().collect(), symbols, graph }
    }

    /// The pattern this automaton was compiled from.
    pub fn pattern(&self) -> &str {
        &self.pattern
    }

    /// The number of characters in the pattern. This is also the position of
    /// the accept sentinel.
    pub fn len(&self) -> usize {
        self.symbols.len()
    }

    /// Returns true if the pattern is empty, in which case the automaton
    /// accepts only the empty text.
    pub fn is_empty(&self) -> bool {
        self.symbols.is_empty()
    }

    /// The accept sentinel.
    pub fn accept(&self) -> StateId {
        self.symbols.len()
    }

    /// The pattern character at `v`, or `None` for the accept sentinel.
    pub fn symbol(&self, v: StateId) -> Option<char> {
        self.symbols.get(v).copied()
    }

    /// The epsilon transitions.
    pub fn graph(&self) -> &Digraph {
        &self.graph
    }

    /// Returns true if the automaton can leave position `v` by consuming
    /// `ch`, which takes it to `v + 1`.
    pub fn consumes(&self, v: StateId, ch: char) -> bool {
        match self.symbol(v) {
            Some('.') => true,
            Some(symbol) => symbol == ch,
            None => false,
        }
    }

    /// All positions reachable from `sources` through zero or more epsilon
    /// transitions. The sources themselves are always part of the result.
    ///
    /// Sources that are not positions of this automaton are ignored.
    pub fn epsilon_closure<I>(&self, sources: I) -> PositionSet
    where
        I: IntoIterator<Item = StateId>,
    {
        let mut closure = PositionSet::new();
        let mut stack: Vec<StateId> = Vec::new();
        for source in sources {
            if source > self.accept() {
                continue;
            }
            if closure.insert(source) {
                stack.push(source);
            }
        }

        while let Some(v) = stack.pop() {
            for &next in self.graph.adj(v) {
                if closure.insert(next) {
                    stack.push(next);
                }
            }
        }

        closure
    }

    /// Check if the accept sentinel is in the set.
    pub fn is_accepting(&self, positions: &PositionSet) -> bool {
        positions.contains(&self.accept())
    }

    /// Report whether this automaton accepts the whole of `text`.
    pub fn recognizes(&self, text: &str) -> MatchResult<bool> {
        Matcher::new(self).is_match(text)
    }
}

impl std::fmt::Display for NFA {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        writeln!(f, "pattern: {:?}", self.pattern)?;
        for v in 0..self.graph.vertex_count() {
            match self.symbol(v) {
                Some(symbol) => write!(f, "{:>4}: {:?}", v, symbol)?,
                None => write!(f, "{:>4}: MATCH", v)?,
            }
            let targets = self.graph.adj(v);
            if !targets.is_empty() {
                write!(f, " ε -> {:?}", targets)?;
            }
            writeln!(f)?;
        }
        Ok(())
    }
}
