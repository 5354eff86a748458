/*!
A regular expression engine built on an epsilon-NFA over pattern positions.

The supported grammar is deliberately tiny:

* concatenation, `ab`
* binary alternation inside a group, `(a|b)`
* Kleene closure of a symbol or a group, `a*` and `(ab)*`
* grouping, `(...)`
* the wildcard `.`, which matches any one character

Compilation is a single left-to-right pass that turns the pattern into a
directed graph with one vertex per pattern character plus an accepting
sentinel. Edges in that graph are epsilon transitions. Consuming a character
is implicit: position `v` may advance to `v + 1` when the text character is
equal to the pattern character at `v`, or when that pattern character is `.`.

Matching simulates every path through the automaton at once, so a match call
over a text of length `n` costs `O(m * n)` for a pattern of length `m`.

# Example

```
let nfa = epsilon_regex::compile("(A*B|AC)D")?;
assert!(epsilon_regex::recognizes(&nfa, "AAAABD")?);
assert!(!epsilon_regex::recognizes(&nfa, "AAAAC")?);
# Ok::<(), Box<dyn std::error::Error>>(())
```

Matches are always whole-string matches. To search for a pattern anywhere in
a text, wrap it: `(.*PATTERN.*)`.

# Crate features

* **logging** - Emits `debug` and `trace` messages through the `log` crate
  while compiling and matching.
*/

#![deny(missing_docs)]

#[macro_use]
mod macros;

pub mod compiler;
pub mod graph;
pub mod matcher;
pub mod nfa;

pub use compiler::Compiler;
pub use graph::Digraph;
pub use matcher::Matcher;
pub use nfa::{PositionSet, StateId, NFA};

/// The characters with a special meaning in a pattern. None of them may
/// appear in a text given to the matcher.
pub const METACHARACTERS: [char; 4] = ['*', '|', '(', ')'];

/// Returns true if `ch` is one of the [`METACHARACTERS`].
pub fn is_meta_character(ch: char) -> bool {
    METACHARACTERS.contains(&ch)
}

/// Compile `pattern` into an automaton.
///
/// This is a shorthand for `Compiler::new().compile(pattern)`.
pub fn compile(pattern: &str) -> CompileResult<NFA> {
    Compiler::new().compile(pattern)
}

/// Report whether `nfa` accepts the whole of `text`.
///
/// This is a shorthand for `Matcher::new(nfa).is_match(text)`.
pub fn recognizes(nfa: &NFA, text: &str) -> MatchResult<bool> {
    Matcher::new(nfa).is_match(text)
}

/// The result of compiling a pattern.
pub type CompileResult<T> = Result<T, CompileError>;

/// The result of running an automaton over a text.
pub type MatchResult<T> = Result<T, MatchError>;

/// An error that occurred while compiling a pattern.
///
/// Only the nesting of groups and alternations is validated. Other odd
/// constructs, like a `*` with nothing before it, compile mechanically.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct CompileError {
    kind: CompileErrorKind,
    pattern: String,
    position: usize,
}

/// The kind of a [`CompileError`].
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[non_exhaustive]
pub enum CompileErrorKind {
    /// A `(` that is never closed.
    UnclosedGroup,
    /// A `)` with no open group.
    UnmatchedClose,
    /// A `|` that is not enclosed by a group.
    UnscopedAlternation,
    /// A second `|` inside one group. Only binary alternation is supported.
    MultiwayAlternation,
}

impl CompileError {
    pub(crate) fn new(
        kind: CompileErrorKind,
        pattern: &[char],
        position: usize,
    ) -> CompileError {
        CompileError { kind, pattern: pattern.iter().collect(), position }
    }

    /// The kind of this error.
    pub fn kind(&self) -> CompileErrorKind {
        self.kind
    }

    /// The pattern that failed to compile.
    pub fn pattern(&self) -> &str {
        &self.pattern
    }

    /// The character position (not byte offset) of the offending token.
    pub fn position(&self) -> usize {
        self.position
    }
}

impl std::fmt::Display for CompileErrorKind {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            CompileErrorKind::UnclosedGroup => write!(f, "unclosed group"),
            CompileErrorKind::UnmatchedClose => {
                write!(f, "unopened group")
            }
            CompileErrorKind::UnscopedAlternation => {
                write!(f, "alternation must be enclosed in a group")
            }
            CompileErrorKind::MultiwayAlternation => {
                write!(f, "only two alternatives are allowed per group")
            }
        }
    }
}

impl std::fmt::Display for CompileError {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(
            f,
            "invalid pattern {:?}: {} at position {}",
            self.pattern, self.kind, self.position
        )
    }
}

impl std::error::Error for CompileError {}

/// An error that occurred because a text contains a metacharacter.
///
/// The engine cannot match a literal `*`, `|`, `(` or `)`, so texts holding
/// any of them are rejected outright.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct MatchError {
    text: String,
    character: char,
    position: usize,
}

impl MatchError {
    pub(crate) fn new(text: &str, character: char, position: usize) -> MatchError {
        MatchError { text: text.to_string(), character, position }
    }

    /// The rejected text.
    pub fn text(&self) -> &str {
        &self.text
    }

    /// The first metacharacter found in the text.
    pub fn character(&self) -> char {
        self.character
    }

    /// The character position (not byte offset) of [`MatchError::character`].
    pub fn position(&self) -> usize {
        self.position
    }
}

impl std::fmt::Display for MatchError {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(
            f,
            "invalid text {:?}: metacharacter {:?} at position {}",
            self.text, self.character, self.position
        )
    }
}

impl std::error::Error for MatchError {}
