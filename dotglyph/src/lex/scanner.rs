// Copyright 2026 the Dotglyph Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! The finite-state scanner behind [`Tokenizer`](super::Tokenizer).

use super::{Token, TokenClass};

/// Characters that separate words and never belong to a token.
pub const DELIMITERS: &[char] = &[' ', ',', '(', ')', '{', '}', ';', '\t', '\n'];

/// Characters that always form a one-character operator token.
pub const OPERATORS: &[char] = &['/', '+', '-', '*', '<', '>', '=', '&', '|'];

/// Whether `ch` is a delimiter.
pub fn is_delimiter(ch: char) -> bool {
    DELIMITERS.contains(&ch)
}

/// Whether `ch` is a single-character operator.
pub fn is_operator(ch: char) -> bool {
    OPERATORS.contains(&ch)
}

/// Scanner state. Each variant other than `Normal` remembers where its token started.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum ScanState {
    /// Between tokens.
    Normal,
    /// Inside a `//` comment.
    InLineComment {
        /// Index of the first `/`.
        start: usize,
    },
    /// Inside a `/* */` comment.
    InBlockComment {
        /// Index of the opening `/`.
        start: usize,
    },
    /// Inside a word.
    InWord {
        /// Index of the first character of the word.
        start: usize,
    },
}

/// Outcome of a single [`Scanner::step`].
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum Step {
    /// The scanner moved or changed state without finishing a token.
    Continue,
    /// A token was finished.
    Emit(Token),
    /// The end of the buffer was reached in the `Normal` state.
    Done,
}

/// Splits a character buffer into raw tokens, one transition per [`step`](Self::step).
///
/// Words are emitted as [`TokenClass::Unset`]; resolving them is left to the caller.
#[derive(Clone, Debug)]
pub struct Scanner<'a> {
    chars: &'a [char],
    pos: usize,
    state: ScanState,
}

impl<'a> Scanner<'a> {
    /// Starts scanning `chars` from the beginning.
    pub fn new(chars: &'a [char]) -> Self {
        Self {
            chars,
            pos: 0,
            state: ScanState::Normal,
        }
    }

    /// The current state.
    pub fn state(&self) -> ScanState {
        self.state
    }

    /// Index of the next character to examine.
    pub fn position(&self) -> usize {
        self.pos
    }

    /// Performs one transition.
    pub fn step(&mut self) -> Step {
        let len = self.chars.len();
        let current = self.chars.get(self.pos).copied();
        let next = self.chars.get(self.pos + 1).copied();
        match (self.state, current) {
            (ScanState::Normal, None) => Step::Done,
            (ScanState::Normal, Some(ch)) => {
                let start = self.pos;
                if is_delimiter(ch) {
                    self.pos += 1;
                } else if ch == '/' && next == Some('/') {
                    self.state = ScanState::InLineComment { start };
                    self.pos += 2;
                } else if ch == '/' && next == Some('*') {
                    self.state = ScanState::InBlockComment { start };
                    self.pos += 2;
                } else if is_operator(ch) {
                    self.pos += 1;
                    return self.emit(start, self.pos, TokenClass::Operator);
                } else {
                    self.state = ScanState::InWord { start };
                    self.pos += 1;
                }
                Step::Continue
            }
            // The newline is left for `Normal` to skip.
            (ScanState::InLineComment { start }, None | Some('\n')) => {
                self.emit(start, self.pos, TokenClass::Comment)
            }
            (ScanState::InBlockComment { start }, None) => {
                self.emit(start, len, TokenClass::Comment)
            }
            (ScanState::InBlockComment { start }, Some('*')) if next == Some('/') => {
                self.pos += 2;
                self.emit(start, self.pos, TokenClass::Comment)
            }
            (ScanState::InWord { start }, None) => self.emit(start, len, TokenClass::Unset),
            // Operators are rescanned from `Normal` so `a//b` still starts a comment.
            (ScanState::InWord { start }, Some(ch)) if is_delimiter(ch) || is_operator(ch) => {
                self.emit(start, self.pos, TokenClass::Unset)
            }
            (
                ScanState::InLineComment { .. }
                | ScanState::InBlockComment { .. }
                | ScanState::InWord { .. },
                Some(_),
            ) => {
                self.pos += 1;
                Step::Continue
            }
        }
    }

    fn emit(&mut self, start: usize, stop: usize, class: TokenClass) -> Step {
        self.state = ScanState::Normal;
        Step::Emit(Token { start, stop, class })
    }
}

impl Iterator for Scanner<'_> {
    type Item = Token;

    fn next(&mut self) -> Option<Token> {
        loop {
            match self.step() {
                Step::Continue => {}
                Step::Emit(token) => return Some(token),
                Step::Done => return None,
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use alloc::vec::Vec;

    use super::{ScanState, Scanner, Step};
    use crate::lex::{Token, TokenClass};

    fn chars(text: &str) -> Vec<char> {
        text.chars().collect()
    }

    fn scan(text: &str) -> Vec<(usize, usize, TokenClass)> {
        Scanner::new(&chars(text))
            .map(|t| (t.start, t.stop, t.class))
            .collect()
    }

    #[test]
    fn normal_skips_delimiters() {
        let text = chars(" ,(){};\t\n");
        let mut scanner = Scanner::new(&text);
        for pos in 1..=text.len() {
            assert_eq!(scanner.step(), Step::Continue);
            assert_eq!(scanner.position(), pos);
            assert_eq!(scanner.state(), ScanState::Normal);
        }
        assert_eq!(scanner.step(), Step::Done);
    }

    #[test]
    fn normal_enters_comment_states() {
        let text = chars("//");
        let mut scanner = Scanner::new(&text);
        assert_eq!(scanner.step(), Step::Continue);
        assert_eq!(scanner.state(), ScanState::InLineComment { start: 0 });
        assert_eq!(scanner.position(), 2);

        let text = chars("/*");
        let mut scanner = Scanner::new(&text);
        assert_eq!(scanner.step(), Step::Continue);
        assert_eq!(scanner.state(), ScanState::InBlockComment { start: 0 });
    }

    #[test]
    fn normal_emits_operators_immediately() {
        let text = chars("/x");
        let mut scanner = Scanner::new(&text);
        assert_eq!(
            scanner.step(),
            Step::Emit(Token {
                start: 0,
                stop: 1,
                class: TokenClass::Operator
            })
        );
        assert_eq!(scanner.state(), ScanState::Normal);
        assert_eq!(scanner.step(), Step::Continue);
        assert_eq!(scanner.state(), ScanState::InWord { start: 1 });
    }

    #[test]
    fn line_comment_stops_before_newline() {
        let text = chars("// c\nx");
        let mut scanner = Scanner::new(&text);
        scanner.step();
        assert_eq!(scanner.step(), Step::Continue);
        assert_eq!(scanner.step(), Step::Continue);
        assert_eq!(
            scanner.step(),
            Step::Emit(Token {
                start: 0,
                stop: 4,
                class: TokenClass::Comment
            })
        );
        assert_eq!(scanner.position(), 4, "newline is not consumed");
        assert_eq!(scanner.state(), ScanState::Normal);
    }

    #[test]
    fn block_comment_runs_through_terminator() {
        assert_eq!(
            scan("/* a */b"),
            [(0, 7, TokenClass::Comment), (7, 8, TokenClass::Unset)]
        );
        // The opener's `*` cannot double as the terminator's.
        assert_eq!(scan("/*/ x"), [(0, 5, TokenClass::Comment)]);
        assert_eq!(scan("/**/"), [(0, 4, TokenClass::Comment)]);
        // A lone `*` inside the comment does not end it.
        assert_eq!(
            scan("/* a * b */x"),
            [(0, 11, TokenClass::Comment), (11, 12, TokenClass::Unset)]
        );
    }

    #[test]
    fn unterminated_comments_extend_to_end_of_buffer() {
        assert_eq!(scan("x /* open"), [
            (0, 1, TokenClass::Unset),
            (2, 9, TokenClass::Comment)
        ]);
        assert_eq!(scan("// open"), [(0, 7, TokenClass::Comment)]);
    }

    #[test]
    fn word_stops_before_operator_and_rescans_it() {
        assert_eq!(scan("a+b"), [
            (0, 1, TokenClass::Unset),
            (1, 2, TokenClass::Operator),
            (2, 3, TokenClass::Unset)
        ]);
        assert_eq!(scan("a//b"), [
            (0, 1, TokenClass::Unset),
            (1, 4, TokenClass::Comment)
        ]);
        assert_eq!(scan("a/*b*/c"), [
            (0, 1, TokenClass::Unset),
            (1, 6, TokenClass::Comment),
            (6, 7, TokenClass::Unset)
        ]);
    }

    #[test]
    fn word_ends_at_delimiter_or_end_of_buffer() {
        let text = chars("ab c");
        let mut scanner = Scanner::new(&text);
        assert_eq!(scanner.step(), Step::Continue);
        assert_eq!(scanner.step(), Step::Continue);
        assert_eq!(
            scanner.step(),
            Step::Emit(Token {
                start: 0,
                stop: 2,
                class: TokenClass::Unset
            })
        );
        assert_eq!(scan("ab c"), [
            (0, 2, TokenClass::Unset),
            (3, 4, TokenClass::Unset)
        ]);
        assert_eq!(scan("word"), [(0, 4, TokenClass::Unset)]);
    }

    #[test]
    fn words_keep_other_punctuation() {
        assert_eq!(scan("a.b[0]!"), [(0, 7, TokenClass::Unset)]);
    }

    #[test]
    fn empty_buffer_is_done_immediately() {
        let mut scanner = Scanner::new(&[]);
        assert_eq!(scanner.step(), Step::Done);
        assert_eq!(scanner.next(), None);
    }
}
