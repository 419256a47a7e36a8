//! Left-to-right classification of pattern source into tokens.
//!
//! Tokens are produced on demand and dropped as soon as the narrator has
//! read them.

use super::delimiter::find_matching_close;
use super::lexicon::{CharClassSpec, escape_phrase};

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum TokenKind {
    Anchor,
    Literal,
    Escape,
    CharClass,
    Quantifier,
    GroupOpen,
    GroupClose,
    Alternation,
}

/// One classified span of pattern source.
///
/// `start..end` are character (not byte) offsets.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Token {
    pub kind: TokenKind,
    pub start: usize,
    pub end: usize,
    pub phrase: String,
}

pub const START_ANCHOR: &str = "start of string/line";
pub const END_ANCHOR: &str = "end of string/line";
pub const GROUP_OPEN: &str = "group: (";
pub const GROUP_CLOSE: &str = ")";
pub const ALTERNATION: &str = "OR";

/// Iterator over the tokens of a pattern source.
///
/// The cursor only moves forward. Bracket and brace spans are consumed
/// whole; a group's contents are tokenized in the same pass as the rest.
pub struct Tokens {
    chars: Vec<char>,
    pos: usize,
    open_groups: usize,
    last_kind: Option<TokenKind>,
}

impl Tokens {
    pub fn new(source: &str) -> Self {
        Self {
            chars: source.chars().collect(),
            pos: 0,
            open_groups: 0,
            last_kind: None,
        }
    }

    /// The character the next token will start with.
    pub fn peek(&self) -> Option<char> {
        self.chars.get(self.pos).copied()
    }

    /// True if the next token is a `)` that closes an open group.
    pub fn at_group_close(&self) -> bool {
        self.peek() == Some(')') && self.open_groups > 0
    }

    /// True if the next token is a quantifier that modifies what came before.
    pub fn at_quantifier(&self) -> bool {
        match self.peek() {
            Some('*' | '+' | '?') => true,
            Some('{') => brace_quantifier(&self.chars, self.pos).is_some(),
            _ => false,
        }
    }

    fn token(&mut self, kind: TokenKind, len: usize, phrase: String) -> Token {
        let start = self.pos;
        self.pos += len;
        self.last_kind = Some(kind);
        Token {
            kind,
            start,
            end: self.pos,
            phrase,
        }
    }

    fn literal(&mut self, ch: char) -> Token {
        self.token(TokenKind::Literal, 1, format!("literal {ch}"))
    }

    fn escape(&mut self) -> Token {
        match self.chars.get(self.pos + 1).copied() {
            None => self.literal('\\'),
            Some(letter) => {
                let phrase = match escape_phrase(letter) {
                    Some(phrase) => phrase.to_string(),
                    None => format!("literal {letter}"),
                };
                self.token(TokenKind::Escape, 2, phrase)
            }
        }
    }

    fn char_class(&mut self) -> Token {
        // `]` never nests inside a class, so only its closing role applies.
        match find_matching_close(&self.chars, self.pos, ']', ']') {
            None => self.literal('['),
            Some(close) => {
                let inner: String = self.chars[self.pos + 1..close].iter().collect();
                let class = CharClassSpec::new(&inner);
                let phrase = if class.raw.is_empty() {
                    "empty character set".to_string()
                } else {
                    format!("character from set: {}", class.phrase)
                };
                self.token(TokenKind::CharClass, close + 1 - self.pos, phrase)
            }
        }
    }

    fn group_open(&mut self) -> Token {
        match find_matching_close(&self.chars, self.pos, '(', ')') {
            None => self.literal('('),
            Some(_) => {
                self.open_groups += 1;
                self.token(TokenKind::GroupOpen, 1, GROUP_OPEN.to_string())
            }
        }
    }

    fn group_close(&mut self) -> Token {
        if self.open_groups == 0 {
            return self.literal(')');
        }
        self.open_groups -= 1;
        self.token(TokenKind::GroupClose, 1, GROUP_CLOSE.to_string())
    }

    fn quantifier(&mut self, symbol: char) -> Token {
        let phrase = match symbol {
            '*' => "zero or more times",
            '+' => "one or more times",
            _ if self.last_kind == Some(TokenKind::Quantifier) => "as few as possible",
            _ => "optional",
        };
        self.token(TokenKind::Quantifier, 1, phrase.to_string())
    }

    fn brace(&mut self) -> Token {
        match brace_quantifier(&self.chars, self.pos) {
            None => self.literal('{'),
            Some((close, phrase)) => {
                self.token(TokenKind::Quantifier, close + 1 - self.pos, phrase)
            }
        }
    }
}

impl Iterator for Tokens {
    type Item = Token;

    fn next(&mut self) -> Option<Token> {
        let ch = self.peek()?;
        let token = match ch {
            '^' => self.token(TokenKind::Anchor, 1, START_ANCHOR.to_string()),
            '$' => self.token(TokenKind::Anchor, 1, END_ANCHOR.to_string()),
            '.' => self.token(TokenKind::CharClass, 1, "any character".to_string()),
            '*' | '+' | '?' => self.quantifier(ch),
            '\\' => self.escape(),
            '[' => self.char_class(),
            '{' => self.brace(),
            '(' => self.group_open(),
            ')' => self.group_close(),
            '|' => self.token(TokenKind::Alternation, 1, ALTERNATION.to_string()),
            other => self.literal(other),
        };
        Some(token)
    }
}

/// Parse a `{…}` count starting at `open`.
///
/// Returns the index of the closing `}` and the count phrase, or `None`
/// if there is no close or the body is not `n`, `n,`, `n,m` or `,m`.
fn brace_quantifier(chars: &[char], open: usize) -> Option<(usize, String)> {
    let close = find_matching_close(chars, open, '{', '}')?;
    let body: String = chars[open + 1..close].iter().collect();
    let count = |s: &str| -> Option<usize> {
        if s.is_empty() || !s.chars().all(|c| c.is_ascii_digit()) {
            return None;
        }
        s.parse().ok()
    };
    let phrase = match body.split_once(',') {
        None => format!("exactly {} times", count(&body)?),
        Some((min, "")) => format!("{} or more times", count(min)?),
        Some(("", max)) => format!("up to {} times", count(max)?),
        Some((min, max)) => format!("{} to {} times", count(min)?, count(max)?),
    };
    Some((close, phrase))
}
