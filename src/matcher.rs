//! Simulation of an [`NFA`] over a text.

use crate::{
    is_meta_character,
    nfa::{PositionSet, StateId, NFA},
    MatchError, MatchResult,
};

/// A matcher that simulates an [`NFA`] against a text.
///
/// All paths through the automaton are followed at once: after each
/// character the matcher holds the set of every position the automaton could
/// be in. Matching never mutates the automaton, so any number of matchers may
/// share one.
#[derive(Debug, Clone)]
pub struct Matcher<'a> {
    nfa: &'a NFA,
    early_exit: bool,
}

impl<'a> Matcher<'a> {
    /// Create a new matcher for the given NFA
    pub fn new(nfa: &'a NFA) -> Self {
        Self { nfa, early_exit: true }
    }

    /// Whether to stop as soon as no position survives a character.
    ///
    /// This is enabled by default. Turning it off never changes the result
    /// of a match, only how much of the text is scanned.
    pub fn early_exit(mut self, yes: bool) -> Self {
        self.early_exit = yes;
        self
    }

    /// Check if the entire input matches.
    ///
    /// # Errors
    ///
    /// When `text` contains a metacharacter. The whole text is validated
    /// before matching starts, so this does not depend on the pattern.
    #[cfg_attr(not(feature = "logging"), allow(unused_variables))]
    pub fn is_match(&self, text: &str) -> MatchResult<bool> {
        validate(text)?;

        let mut current = self.nfa.epsilon_closure([0]);
        for (position, ch) in text.chars().enumerate() {
            current = self.nfa.epsilon_closure(self.step(&current, ch));
            trace!("after {:?} at {}: {} positions", ch, position, current.len());
            if self.early_exit && current.is_empty() {
                debug!(
                    "{:?} dead at position {} of {:?}",
                    self.nfa.pattern(),
                    position,
                    text
                );
                return Ok(false);
            }
        }
        Ok(self.nfa.is_accepting(&current))
    }

    /// The positions reached by consuming `ch` from any of `current`, before
    /// following epsilon transitions.
    fn step(&self, current: &PositionSet, ch: char) -> Vec<StateId> {
        current
            .iter()
            .filter(|&&v| self.nfa.consumes(v, ch))
            .map(|&v| v + 1)
            .collect()
    }
}

fn validate(text: &str) -> MatchResult<()> {
    match text.chars().enumerate().find(|&(_, ch)| is_meta_character(ch)) {
        Some((position, ch)) => Err(MatchError::new(text, ch, position)),
        None => Ok(()),
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::Compiler;

    fn is_match(pattern: &str, text: &str) -> bool {
        let nfa = Compiler::new().compile(pattern).unwrap();
        Matcher::new(&nfa).is_match(text).unwrap()
    }

    #[test]
    fn test_simple_char_match() {
        assert!(is_match("a", "a"));
        assert!(!is_match("a", "b"));
        assert!(!is_match("a", ""));
        assert!(!is_match("a", "aa"));
    }

    #[test]
    fn test_dot_match() {
        assert!(is_match(".", "a"));
        assert!(is_match(".", "x"));
        assert!(!is_match(".", ""));
        assert!(!is_match(".", "ab"));
        assert!(is_match("a.c", "abc"));
    }

    #[test]
    fn test_whole_string_only() {
        assert!(is_match("ab", "ab"));
        assert!(!is_match("ab", "abc"));
        assert!(!is_match("ab", "xab"));
        assert!(is_match("(.*ab.*)", "xxabyy"));
    }

    #[test]
    fn test_star() {
        assert!(is_match("a*", ""));
        assert!(is_match("a*", "aaaa"));
        assert!(!is_match("a*", "aab"));
        assert!(is_match("a*b", "b"));
        assert!(is_match("(ab)*", "ababab"));
        assert!(!is_match("(ab)*", "aba"));
    }

    #[test]
    fn test_alternation() {
        assert!(is_match("(a|b)", "a"));
        assert!(is_match("(a|b)", "b"));
        assert!(!is_match("(a|b)", "ab"));
        assert!(is_match("(A*B|AC)D", "AAAABD"));
        assert!(is_match("(A*B|AC)D", "ACD"));
        assert!(!is_match("(A*B|AC)D", "AAAAC"));
        assert!(is_match("x(a|)y", "xy"));
    }

    #[test]
    fn test_nested() {
        assert!(is_match("(a|(bc)*d)*", "abcbcd"));
        assert!(is_match("(a|(bc)*d)*", "abcbcbcdaaaabcbcdaaaddd"));
        assert!(!is_match("(a|(bc)*d)*", "abcb"));
    }

    #[test]
    fn test_empty_pattern() {
        assert!(is_match("", ""));
        assert!(!is_match("", "x"));
    }

    #[test]
    fn test_unicode() {
        assert!(is_match("é(ü|ß)*", "éüßü"));
        assert!(is_match("..", "日本"));
        assert!(!is_match("...", "日本"));
    }

    #[test]
    fn test_metacharacter_in_text() {
        let nfa = Compiler::new().compile("a").unwrap();
        let err = Matcher::new(&nfa).is_match("zz*").unwrap_err();
        assert_eq!(err.character(), '*');
        assert_eq!(err.position(), 2);
        assert_eq!(err.text(), "zz*");
        assert_eq!(
            err.to_string(),
            "invalid text \"zz*\": metacharacter '*' at position 2"
        );
        for text in ["(", ")", "|", "ab(c", "日)"] {
            assert!(Matcher::new(&nfa).is_match(text).is_err(), "{:?}", text);
        }
    }

    #[test]
    fn test_early_exit_agrees() {
        let nfa = Compiler::new().compile("(A*B|AC)D").unwrap();
        for text in ["AAAABD", "AAAAC", "XD", "", "ACD"] {
            let fast = Matcher::new(&nfa).is_match(text).unwrap();
            let slow = Matcher::new(&nfa).early_exit(false).is_match(text).unwrap();
            assert_eq!(fast, slow, "{:?}", text);
        }
    }
}
