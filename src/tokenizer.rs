// src/tokenizer.rs
//
// Markup → token stream.
//
// - Text runs between markup become one Character token each; a `<` that does
//   not open markup stays part of the surrounding text.
// - Comments (`<!--...-->`) and bogus comments (`<!...>`, `<?...>`, which covers
//   downlevel-revealed `<![if IE]>` / `<![endif]>`) keep their full literal.
// - Tag and attribute names are ASCII-lowercased; attribute values and their
//   quoting are kept as written.
// - RAW-TEXT bodies (script, style, textarea, title) are handed over as exactly
//   one Character token, whatever they contain. The comment pass relies on it.
// - Input ending inside a tag, comment or doctype is rejected.

use crate::error::{Error, Result};
use crate::token::{Attribute, Quote, StartTag, Token};
use memchr::{memchr, memmem};

/* =============================== Core sets =============================== */

fn is_raw_text(name: &str) -> bool {
    ["script", "style", "textarea", "title"]
        .iter()
        .any(|raw| name.eq_ignore_ascii_case(raw))
}

/* ============================ Utility predicates ========================= */

#[inline]
fn is_ws(b: u8) -> bool {
    b == b' ' || b == b'\t' || b == b'\n' || b == b'\r' || b == b'\x0C'
}

#[inline]
fn ends_name(b: u8) -> bool {
    is_ws(b) || b == b'/' || b == b'>'
}

fn starts_with_ignore_ascii_case(s: &[u8], prefix: &[u8]) -> bool {
    s.len() >= prefix.len() && s[..prefix.len()].eq_ignore_ascii_case(prefix)
}

/// Find the '>' closing a tag that starts at `i` (s[i] == '<'), being quote-aware.
fn find_tag_end(s: &[u8], mut i: usize) -> Option<usize> {
    let n = s.len();
    i += 1;
    let mut quote: u8 = 0;
    while i < n {
        let b = s[i];
        if quote != 0 {
            if b == quote {
                quote = 0;
            }
        } else if b == b'"' || b == b'\'' {
            quote = b;
        } else if b == b'>' {
            return Some(i);
        }
        i += 1;
    }
    None
}

fn unterminated(construct: &'static str, offset: usize) -> Error {
    Error::Unterminated { construct, offset }
}

/* ================================ Driver ================================= */

/// Split `src` into tokens.
#[tracing::instrument(level = "debug", skip_all, fields(len = src.len()))]
pub fn tokenize(src: &str) -> Result<Vec<Token>> {
    let tokens = Tokenizer {
        src,
        bytes: src.as_bytes(),
        tokens: Vec::new(),
    }
    .run()?;
    tracing::debug!(count = tokens.len(), "tokenized");
    Ok(tokens)
}

struct Tokenizer<'a> {
    src: &'a str,
    bytes: &'a [u8],
    tokens: Vec<Token>,
}

impl Tokenizer<'_> {
    fn run(mut self) -> Result<Vec<Token>> {
        let n = self.bytes.len();
        let mut text_start = 0usize;
        let mut i = 0usize;

        while i < n {
            let Some(lt) = memchr(b'<', &self.bytes[i..]).map(|off| i + off) else {
                break;
            };
            let Some((token, end)) = self.markup_at(lt)? else {
                // literal '<'
                i = lt + 1;
                continue;
            };

            self.push_text(text_start, lt);
            let raw = match &token {
                Token::StartTag(tag) if is_raw_text(&tag.name) => Some(tag.name.clone()),
                _ => None,
            };
            self.tokens.push(token);
            i = end;

            if let Some(name) = raw {
                let body_end = self.find_raw_text_end(i, &name);
                self.push_text(i, body_end);
                i = body_end;
            }
            text_start = i;
        }

        self.push_text(text_start, n);
        Ok(self.tokens)
    }

    fn push_text(&mut self, start: usize, end: usize) {
        if start < end {
            self.tokens.push(Token::Character(self.src[start..end].to_owned()));
        }
    }

    /// Recognize markup at `lt` (s[lt] == '<'). Returns the token and the index
    /// just past it, or `None` when the '<' is plain text.
    fn markup_at(&self, lt: usize) -> Result<Option<(Token, usize)>> {
        let s = self.bytes;
        match s.get(lt + 1).copied() {
            Some(b'!') => self.declaration(lt).map(Some),
            Some(b'?') => self.bogus_comment(lt).map(Some),
            Some(b'/') if s.get(lt + 2).is_some_and(u8::is_ascii_alphabetic) => {
                self.end_tag(lt).map(Some)
            }
            Some(c) if c.is_ascii_alphabetic() => self.start_tag(lt).map(Some),
            _ => Ok(None),
        }
    }

    /* ============================ Declarations =========================== */

    fn declaration(&self, lt: usize) -> Result<(Token, usize)> {
        let s = self.bytes;
        if s[lt..].starts_with(b"<!--") {
            // searching from the first dash also accepts `<!-->` and `<!--->`
            let Some(off) = memmem::find(&s[lt + 2..], b"-->") else {
                return Err(unterminated("comment", lt));
            };
            let end = lt + 2 + off + 3;
            return Ok((Token::Comment(self.src[lt..end].to_owned()), end));
        }
        if starts_with_ignore_ascii_case(&s[lt + 2..], b"doctype") {
            let Some(gt) = memchr(b'>', &s[lt..]).map(|off| lt + off) else {
                return Err(unterminated("doctype", lt));
            };
            return Ok((Token::Doctype(self.src[lt..=gt].to_owned()), gt + 1));
        }
        self.bogus_comment(lt)
    }

    fn bogus_comment(&self, lt: usize) -> Result<(Token, usize)> {
        let Some(gt) = memchr(b'>', &self.bytes[lt..]).map(|off| lt + off) else {
            return Err(unterminated("comment", lt));
        };
        Ok((Token::Comment(self.src[lt..=gt].to_owned()), gt + 1))
    }

    /* ================================ Tags =============================== */

    fn end_tag(&self, lt: usize) -> Result<(Token, usize)> {
        let s = self.bytes;
        let name_start = lt + 2;
        let mut i = name_start;
        while i < s.len() && !ends_name(s[i]) {
            i += 1;
        }
        let Some(gt) = find_tag_end(s, lt) else {
            return Err(unterminated("end tag", lt));
        };
        let name = self.src[name_start..i].to_ascii_lowercase();
        Ok((Token::EndTag(name), gt + 1))
    }

    fn start_tag(&self, lt: usize) -> Result<(Token, usize)> {
        let s = self.bytes;
        let n = s.len();
        let mut i = lt + 1;
        while i < n && !ends_name(s[i]) {
            i += 1;
        }
        let mut tag = StartTag::new(self.src[lt + 1..i].to_ascii_lowercase());

        loop {
            while i < n && is_ws(s[i]) {
                i += 1;
            }
            if i >= n {
                return Err(unterminated("start tag", lt));
            }
            match s[i] {
                b'>' => return Ok((Token::StartTag(tag), i + 1)),
                b'/' => {
                    if s.get(i + 1) == Some(&b'>') {
                        tag.self_closing = true;
                        return Ok((Token::StartTag(tag), i + 2));
                    }
                    // stray slash between attributes
                    i += 1;
                    continue;
                }
                _ => {}
            }

            // attribute name; a leading '=' belongs to the name
            let name_start = i;
            i += 1;
            while i < n && !ends_name(s[i]) && s[i] != b'=' {
                i += 1;
            }
            let name = self.src[name_start..i].to_ascii_lowercase();

            let mut j = i;
            while j < n && is_ws(s[j]) {
                j += 1;
            }
            if j >= n || s[j] != b'=' {
                tag.attributes.push(Attribute::bare(name));
                continue;
            }

            j += 1;
            while j < n && is_ws(s[j]) {
                j += 1;
            }
            if j >= n {
                return Err(unterminated("start tag", lt));
            }
            let attribute = match s[j] {
                q @ (b'"' | b'\'') => {
                    let Some(off) = memchr(q, &s[j + 1..]) else {
                        return Err(unterminated("attribute value", j));
                    };
                    let close = j + 1 + off;
                    i = close + 1;
                    let quote = if q == b'"' { Quote::Double } else { Quote::Single };
                    Attribute::new(name, &self.src[j + 1..close], quote)
                }
                b'>' => {
                    // `name=>`: empty unquoted value
                    i = j;
                    Attribute::bare(name)
                }
                _ => {
                    let mut k = j;
                    while k < n && !is_ws(s[k]) && s[k] != b'>' {
                        k += 1;
                    }
                    i = k;
                    Attribute::new(name, &self.src[j..k], Quote::None)
                }
            };
            tag.attributes.push(attribute);
        }
    }

    /* ============================== Raw text ============================= */

    /// Index of the `</name` closing a raw-text body that starts at `i`, or the
    /// end of input when the element is never closed.
    fn find_raw_text_end(&self, i: usize, name: &str) -> usize {
        let s = self.bytes;
        let finder = memmem::Finder::new(b"</");
        let mut j = i;
        while let Some(off) = finder.find(&s[j..]) {
            let pos = j + off;
            let after = pos + 2 + name.len();
            if starts_with_ignore_ascii_case(&s[pos + 2..], name.as_bytes())
                && s.get(after).is_some_and(|&b| ends_name(b))
            {
                return pos;
            }
            j = pos + 2;
        }
        s.len()
    }
}
