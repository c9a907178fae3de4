// src/render.rs
//
// Token list → markup. Stateless; literals and attribute values are written
// exactly as stored, nothing is re-escaped.

use crate::options::{Options, SlashSpacing};
use crate::token::{Attribute, StartTag, Token};

#[tracing::instrument(level = "debug", skip_all, fields(count = tokens.len()))]
pub fn render(tokens: &[Token], options: &Options) -> String {
    let capacity = tokens.iter().map(estimated_len).sum();
    let mut out = String::with_capacity(capacity);
    for token in tokens {
        write_token(token, options, &mut out);
    }
    out
}

pub fn write_token(token: &Token, options: &Options, out: &mut String) {
    match token {
        Token::StartTag(tag) => write_start_tag(tag, options, out),
        Token::EndTag(name) => {
            out.push_str("</");
            out.push_str(name);
            out.push('>');
        }
        Token::Doctype(text) | Token::Comment(text) | Token::Character(text) => out.push_str(text),
    }
}

/// Under `RemoveWhiteSpace` the slash is written straight after the last
/// attribute. When that attribute is unquoted this changes its meaning:
/// `<img src=x.png />` becomes `<img src=x.png/>` and a browser reads the value
/// as `x.png/`. Values are kept as written, so callers who need unquoted values
/// before a slash should pick `RemoveSpaceOnly`.
fn write_start_tag(tag: &StartTag, options: &Options, out: &mut String) {
    out.push('<');
    out.push_str(&tag.name);
    for attr in &tag.attributes {
        out.push(' ');
        write_attribute(attr, out);
    }
    if tag.self_closing {
        if options.start_tag_before_slash == SlashSpacing::RemoveSpaceOnly {
            out.push(' ');
        }
        out.push('/');
    }
    out.push('>');
}

fn write_attribute(attr: &Attribute, out: &mut String) {
    out.push_str(&attr.name);
    let quote = attr.quote.as_str();
    if quote.is_empty() && attr.value.is_empty() {
        return;
    }
    out.push('=');
    out.push_str(quote);
    out.push_str(&attr.value);
    out.push_str(quote);
}

fn estimated_len(token: &Token) -> usize {
    match token {
        Token::StartTag(tag) => {
            tag.name.len()
                + 3
                + tag
                    .attributes
                    .iter()
                    .map(|a| a.name.len() + a.value.len() + 4)
                    .sum::<usize>()
        }
        Token::EndTag(name) => name.len() + 3,
        Token::Doctype(text) | Token::Comment(text) | Token::Character(text) => text.len(),
    }
}
