//! Single-pass narration of pattern source into English.

use super::finalize::finalize;
use super::token::{Token, TokenKind, Tokens};

/// Glue placed after a fragment, chosen from what follows it.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub(super) enum Connector {
    /// `", then "`, the default between steps.
    Then,
    /// `", "` before the end anchor, matching the `…, end of string/line`
    /// wording the finalizer collapses to.
    Pause,
    /// `" "` around alternation.
    Space,
    /// Nothing: the next token attaches to this one.
    None,
}

impl Connector {
    fn as_str(self) -> &'static str {
        match self {
            Connector::Then => ", then ",
            Connector::Pause => ", ",
            Connector::Space => " ",
            Connector::None => "",
        }
    }
}

/// Phrase fragments in order, each followed by its connector.
#[derive(Debug, Default)]
pub(super) struct Narration {
    fragments: Vec<String>,
    connectors: Vec<Connector>,
}

impl Narration {
    pub(super) fn push(&mut self, phrase: String, connector: Connector) {
        self.fragments.push(phrase);
        self.connectors.push(connector);
    }

    /// Attach a parenthetical modifier to the last fragment and replace
    /// its connector.
    fn attach(&mut self, modifier: &str, connector: Connector) {
        match (self.fragments.last_mut(), self.connectors.last_mut()) {
            (Some(fragment), Some(last)) => {
                fragment.push_str(" (");
                fragment.push_str(modifier);
                fragment.push(')');
                *last = connector;
            }
            _ => self.push(format!("({modifier})"), connector),
        }
    }

    /// Drop the connector after the last fragment, if there is one.
    pub(super) fn drop_dangling_connector(&mut self) {
        if let Some(last) = self.connectors.last_mut() {
            *last = Connector::None;
        }
    }

    pub(super) fn into_text(self) -> String {
        self.fragments
            .iter()
            .zip(&self.connectors)
            .map(|(fragment, connector)| format!("{fragment}{}", connector.as_str()))
            .collect()
    }
}

/// Pick the connector after `token`, looking at what the scanner sees next.
fn connector_after(token: &Token, rest: &Tokens) -> Connector {
    match token.kind {
        TokenKind::GroupOpen => return Connector::None,
        TokenKind::Alternation => return Connector::Space,
        _ => {}
    }
    match rest.peek() {
        None => Connector::None,
        Some('|') => Connector::Space,
        Some('$') => Connector::Pause,
        Some(_) if rest.at_group_close() || rest.at_quantifier() => Connector::None,
        Some(_) => Connector::Then,
    }
}

/// Narrate `source` token by token, without the curated overrides.
///
/// Group contents are narrated in line with the rest of the pattern, so
/// the output does not mirror the nesting of the expression.
pub fn narrate(source: &str) -> String {
    let mut tokens = Tokens::new(source);
    let mut narration = Narration::default();
    while let Some(token) = tokens.next() {
        let connector = connector_after(&token, &tokens);
        if token.kind == TokenKind::Quantifier {
            narration.attach(&token.phrase, connector);
        } else {
            narration.push(token.phrase, connector);
        }
    }
    finalize(narration)
}
