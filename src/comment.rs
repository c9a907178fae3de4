// src/comment.rs
//
// Comment removal.
//
// - Conditional comments, both downlevel-hidden `<!--[if IE]>...<![endif]-->`
//   and downlevel-revealed `<![if IE]>...<![endif]>`, always survive.
// - Comments matching any exclude pattern survive verbatim.
// - Everything else goes when comment stripping is on.
// - The token right after a <script>/<style> start tag is the raw-text body
//   and is passed through without a look.
// - Text split by a removed comment is joined back into one Character token,
//   unless the join would open markup (`<` + `div`); then the comment stays.

use crate::options::Options;
use crate::token::{is_script_or_style, Token};
use regex::Regex;
use std::sync::OnceLock;

fn conditional_patterns() -> &'static (Regex, Regex) {
    static PATTERNS: OnceLock<(Regex, Regex)> = OnceLock::new();
    PATTERNS.get_or_init(|| {
        (
            Regex::new(r"(?s)\A<!(?:--)?\[if [^\]]+\]>").expect("valid conditional-open pattern"),
            Regex::new(r"(?s)<!\[endif\](?:--)?>\z").expect("valid conditional-close pattern"),
        )
    })
}

/// True for the opening or closing half of a conditional comment, given the
/// comment's literal text.
pub fn is_conditional_comment(literal: &str) -> bool {
    let (open, close) = conditional_patterns();
    open.is_match(literal) || close.is_match(literal)
}

fn is_excluded(literal: &str, patterns: &[Regex]) -> bool {
    patterns.iter().any(|re| re.is_match(literal))
}

/// Drop removable comments and merge the text they separated.
#[tracing::instrument(level = "debug", skip_all, fields(count = tokens.len()))]
pub fn filter_comments(tokens: Vec<Token>, options: &Options) -> Vec<Token> {
    let mut out: Vec<Token> = Vec::with_capacity(tokens.len());
    let mut removed = 0usize;
    let mut skip_raw_body = false;
    // most recent comment dropped since the last kept token
    let mut held: Option<Token> = None;

    for token in tokens {
        if std::mem::take(&mut skip_raw_body) {
            tracing::trace!(token = %token, "passing raw-text body through");
            push_merged(&mut out, token, &mut held, &mut removed);
            continue;
        }
        match &token {
            Token::StartTag(tag) if is_script_or_style(&tag.name) => skip_raw_body = true,
            Token::Comment(literal) if options.comment => {
                if !is_conditional_comment(literal)
                    && !is_excluded(literal, &options.exclude_comment)
                {
                    tracing::trace!(comment = %literal, "removing comment");
                    removed += 1;
                    held = Some(token);
                    continue;
                }
            }
            _ => {}
        }
        push_merged(&mut out, token, &mut held, &mut removed);
    }

    tracing::debug!(removed, "comments filtered");
    out
}

/// Push `token`, appending its text to the previous token instead when both are
/// text. When the join would turn a stray `<` into markup, the comment that
/// separated them is put back instead.
fn push_merged(out: &mut Vec<Token>, token: Token, held: &mut Option<Token>, removed: &mut usize) {
    let separator = held.take();
    if let (Some(Token::Character(before)), Token::Character(text)) = (out.last_mut(), &token) {
        match separator {
            Some(comment) if joins_into_markup(before, text) => {
                tracing::trace!(comment = %comment, "keeping comment between `<` and markup-like text");
                *removed -= 1;
                out.push(comment);
            }
            _ => {
                before.push_str(text);
                return;
            }
        }
    }
    out.push(token);
}

/// True when `before` + `after` would read as a tag, comment or declaration.
fn joins_into_markup(before: &str, after: &str) -> bool {
    if !before.ends_with('<') {
        return false;
    }
    match after.as_bytes() {
        [b'!' | b'?', ..] => true,
        [b'/', next, ..] => next.is_ascii_alphabetic(),
        [first, ..] => first.is_ascii_alphabetic(),
        [] => false,
    }
}
