// src/whitespace.rs
//
// Text rewriting.
//
// - Editable text: runs of space/tab/form-feed become one space; a run holding a
//   newline becomes exactly one newline.
// - UNEDITABLE regions (script, style, textarea, pre) are copied verbatim, except
//   that ADVANCED trims the outer padding of script/style bodies.
// - ADVANCED also trims text standing between two tags unless both sides are
//   inline, and text following a non-inline tag when nothing inline follows.
//   Unknown tags count as inline, so custom elements keep their spacing.
// - The document head and tail never keep leading/trailing whitespace.

use crate::display::is_inline;
use crate::options::Options;
use crate::token::{is_script_or_style, Token};

/* =============================== Core sets =============================== */

fn is_uneditable(name: &str) -> bool {
    ["script", "style", "textarea", "pre"]
        .iter()
        .any(|tag| name.eq_ignore_ascii_case(tag))
}

/// Characters dropped by edge trimming.
const TRIM: &[char] = &[' ', '\t', '\n', '\r', '\0', '\x0B'];

/* ============================= Collapsing ================================ */

/// Collapse whitespace runs in `text`. A newline replaces the space its run
/// already produced, so a run never yields both.
pub fn collapse(text: &str) -> String {
    let mut out = String::with_capacity(text.len());
    let mut pending = false;
    for c in text.chars() {
        match c {
            '\n' => {
                if pending {
                    out.pop();
                }
                out.push('\n');
                pending = true;
            }
            ' ' | '\t' | '\x0C' => {
                if !pending {
                    out.push(' ');
                    pending = true;
                }
            }
            _ => {
                pending = false;
                out.push(c);
            }
        }
    }
    out
}

/* =============================== Pass ==================================== */

/// Rewrite every Character token in place according to its surrounding tags.
#[tracing::instrument(level = "debug", skip_all, fields(count = tokens.len(), advanced = options.is_advanced()))]
pub fn collapse_whitespace(tokens: &mut [Token], options: &Options) {
    let advanced = options.is_advanced();
    let len = tokens.len();
    let mut uneditable: Option<String> = None;
    // display of the most recent tag, start or end
    let mut before_inline = false;

    for i in 0..len {
        let text = match &tokens[i] {
            Token::StartTag(tag) => {
                before_inline = is_inline(&tag.name);
                if uneditable.is_none() && is_uneditable(&tag.name) {
                    uneditable = Some(tag.name.clone());
                }
                continue;
            }
            Token::EndTag(name) => {
                before_inline = is_inline(name);
                if uneditable.as_deref().is_some_and(|open| open.eq_ignore_ascii_case(name)) {
                    uneditable = None;
                }
                continue;
            }
            Token::Character(text) => text,
            Token::Doctype(_) | Token::Comment(_) => continue,
        };

        let rewritten = match uneditable.as_deref() {
            None => {
                let (mut trim_start, mut trim_end) = if advanced && i + 1 < len {
                    advanced_edges(tokens, i, before_inline)
                } else {
                    (false, false)
                };
                trim_start |= i == 0;
                trim_end |= i + 1 == len;

                let mut out = collapse(text);
                if trim_end {
                    out.truncate(out.trim_end_matches(TRIM).len());
                }
                if trim_start {
                    out = out.trim_start_matches(TRIM).to_owned();
                }
                out
            }
            Some(raw) if advanced && is_script_or_style(raw) => text.trim_matches(TRIM).to_owned(),
            Some(_) => continue,
        };

        if let Token::Character(text) = &mut tokens[i] {
            if *text != rewritten {
                tracing::trace!(index = i, "rewrote text");
                *text = rewritten;
            }
        }
    }
}

/// ADVANCED edge rule for the text token at `i`, which is not the last token.
/// Returns whether to trim its (start, end).
fn advanced_edges(tokens: &[Token], i: usize, before_inline: bool) -> (bool, bool) {
    let after = &tokens[i + 1];
    let after_inline = after.tag_name().is_some_and(is_inline);

    // the document head has no tag on its left
    if i == 0 {
        return (false, after.is_tag() && !after_inline);
    }

    let trim = if tokens[i - 1].is_tag() && after.is_tag() {
        !before_inline || !after_inline
    } else {
        !before_inline && !after_inline
    };
    (trim, trim)
}
