use epsilon_regex::{compile, is_meta_character, recognizes, Matcher, METACHARACTERS};
use quickcheck::{quickcheck, Arbitrary, Gen, TestResult};

/// A pattern that only uses the supported grammar and is always balanced.
#[derive(Clone, Debug)]
struct Pattern(String);

/// A text over a small alphabet, so that it often matches.
#[derive(Clone, Debug)]
struct Text(String);

const ALPHABET: &[char] = &['a', 'b', 'c'];

impl Arbitrary for Pattern {
    fn arbitrary(g: &mut Gen) -> Pattern {
        let mut pattern = String::new();
        concat(g, &mut pattern, 3);
        Pattern(pattern)
    }
}

fn concat(g: &mut Gen, out: &mut String, depth: usize) {
    for _ in 0..usize::arbitrary(g) % 4 {
        match u8::arbitrary(g) % 5 {
            0 | 1 if depth > 0 => {
                out.push('(');
                concat(g, out, depth - 1);
                if bool::arbitrary(g) {
                    out.push('|');
                    concat(g, out, depth - 1);
                }
                out.push(')');
            }
            2 => out.push('.'),
            _ => out.push(*g.choose(ALPHABET).unwrap()),
        }
        if u8::arbitrary(g) % 3 == 0 {
            out.push('*');
        }
    }
}

impl Arbitrary for Text {
    fn arbitrary(g: &mut Gen) -> Text {
        let len = usize::arbitrary(g) % 10;
        Text((0..len).map(|_| *g.choose(ALPHABET).unwrap()).collect())
    }
}

quickcheck! {
    fn balanced_patterns_compile_and_match(pattern: Pattern, text: Text) -> bool {
        crate::init_logging();
        match compile(&pattern.0) {
            Ok(nfa) => recognizes(&nfa, &text.0).is_ok(),
            Err(_) => false,
        }
    }

    fn early_exit_never_changes_the_result(pattern: Pattern, text: Text) -> bool {
        let nfa = compile(&pattern.0).unwrap();
        let fast = Matcher::new(&nfa).is_match(&text.0).unwrap();
        let slow = Matcher::new(&nfa).early_exit(false).is_match(&text.0).unwrap();
        fast == slow
    }

    fn compilation_is_deterministic(pattern: Pattern, text: Text) -> bool {
        let first = compile(&pattern.0).unwrap();
        let second = compile(&pattern.0).unwrap();
        first == second
            && recognizes(&first, &text.0).unwrap()
                == recognizes(&second, &text.0).unwrap()
    }

    fn wildcard_matches_any_character(ch: char) -> TestResult {
        if is_meta_character(ch) {
            return TestResult::discard();
        }
        let nfa = compile(".").unwrap();
        TestResult::from_bool(recognizes(&nfa, &ch.to_string()).unwrap())
    }

    fn dot_star_wrapping_finds_substrings(text: Text, start: usize, len: usize) -> TestResult {
        let chars: Vec<char> = text.0.chars().collect();
        if chars.is_empty() {
            return TestResult::discard();
        }
        let start = start % chars.len();
        let end = start + len % (chars.len() - start + 1);
        let needle: String = chars[start..end].iter().collect();
        let nfa = compile(&format!("(.*{}.*)", needle)).unwrap();
        TestResult::from_bool(recognizes(&nfa, &text.0).unwrap())
    }

    fn metacharacters_in_text_are_rejected(
        pattern: Pattern,
        text: Text,
        at: usize,
        which: usize
    ) -> bool {
        let nfa = compile(&pattern.0).unwrap();
        let mut chars: Vec<char> = text.0.chars().collect();
        let meta = METACHARACTERS[which % METACHARACTERS.len()];
        chars.insert(at % (chars.len() + 1), meta);
        let text: String = chars.into_iter().collect();
        match recognizes(&nfa, &text) {
            Ok(_) => false,
            Err(err) => err.character() == meta,
        }
    }
}
