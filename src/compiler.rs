/*!
Compilation of a pattern into an [`NFA`].
*/

use crate::{
    graph::Digraph,
    nfa::{StateId, NFA},
    CompileError, CompileErrorKind, CompileResult,
};

/// An operator waiting on the stack for the `)` that closes it.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
enum Marker {
    /// The position of a `(`.
    GroupStart(StateId),
    /// The position of a `|` inside the innermost open group.
    Alternative(StateId),
}

impl Marker {
    fn position(&self) -> StateId {
        match *self {
            Marker::GroupStart(i) | Marker::Alternative(i) => i,
        }
    }
}

/// Compiler that turns a pattern into an epsilon-NFA over its positions.
///
/// The pattern is read once, left to right. Group and alternation markers
/// are kept on a stack until the matching `)` is seen, at which point the
/// alternation edges are wired. A `*` loops back to the start of the symbol
/// or group right before it.
#[derive(Debug)]
pub struct Compiler {
    symbols: Vec<char>,
    graph: Digraph,
    stack: Vec<Marker>,
}

impl Compiler {
    /// Create a new compiler
    pub fn new() -> Self {
        Self { symbols: Vec::new(), graph: Digraph::new(0), stack: Vec::new() }
    }

    /// Compile `pattern` into an automaton.
    ///
    /// Only the nesting of `(`, `|` and `)` is checked. Anything else,
    /// including a `*` with nothing to repeat, compiles as written.
    pub fn compile(mut self, pattern: &str) -> CompileResult<NFA> {
        self.symbols = pattern.chars().collect();
        let m = self.symbols.len();
        self.graph = Digraph::new(m + 1);
        debug!("compiling {:?} into {} positions", pattern, m + 1);

        for i in 0..m {
            let left = match self.symbols[i] {
                '(' => {
                    self.stack.push(Marker::GroupStart(i));
                    i
                }
                '|' => {
                    self.push_alternative(i)?;
                    i
                }
                ')' => self.close_group(i)?,
                _ => i,
            };

            // The symbol or group ending at i repeats.
            if self.symbols.get(i + 1) == Some(&'*') {
                self.epsilon(left, i + 1);
                self.epsilon(i + 1, left);
            }
            // These positions never consume input.
            if matches!(self.symbols[i], '(' | '*' | ')') {
                self.epsilon(i, i + 1);
            }
        }

        if let Some(&first) = self.stack.first() {
            return Err(self.unbalanced(first));
        }

        debug!(
            "compiled {:?} with {} epsilon transitions",
            pattern,
            self.graph.edge_count()
        );
        Ok(NFA::new(self.symbols, self.graph))
    }

    fn push_alternative(&mut self, i: StateId) -> CompileResult<()> {
        if let Some(Marker::Alternative(_)) = self.stack.last() {
            return Err(self.error(CompileErrorKind::MultiwayAlternation, i));
        }
        self.stack.push(Marker::Alternative(i));
        Ok(())
    }

    /// Pop the group closed by the `)` at `i`, returning the position of its
    /// `(`.
    fn close_group(&mut self, i: StateId) -> CompileResult<StateId> {
        match self.stack.pop() {
            Some(Marker::GroupStart(lp)) => Ok(lp),
            Some(Marker::Alternative(or)) => match self.stack.pop() {
                Some(Marker::GroupStart(lp)) => {
                    // Skip the first alternative, or finish the group after it.
                    self.epsilon(lp, or + 1);
                    self.epsilon(or, i);
                    Ok(lp)
                }
                Some(Marker::Alternative(_)) => {
                    Err(self.error(CompileErrorKind::MultiwayAlternation, or))
                }
                None => {
                    Err(self.error(CompileErrorKind::UnscopedAlternation, or))
                }
            },
            None => Err(self.error(CompileErrorKind::UnmatchedClose, i)),
        }
    }

    /// The error for markers left on the stack once the whole pattern has
    /// been read. The innermost unclosed group is the one reported.
    fn unbalanced(&self, first: Marker) -> CompileError {
        let group = self.stack.iter().rev().find_map(|marker| match *marker {
            Marker::GroupStart(lp) => Some(lp),
            Marker::Alternative(_) => None,
        });
        match group {
            Some(lp) => self.error(CompileErrorKind::UnclosedGroup, lp),
            None => self.error(
                CompileErrorKind::UnscopedAlternation,
                first.position(),
            ),
        }
    }

    fn epsilon(&mut self, from: StateId, to: StateId) {
        trace!("ε {} -> {}", from, to);
        self.graph.add_edge(from, to);
    }

    fn error(&self, kind: CompileErrorKind, position: usize) -> CompileError {
        CompileError::new(kind, &self.symbols, position)
    }
}

impl Default for Compiler {
    fn default() -> Self {
        Self::new()
    }
}
