// src/token.rs
//
// Token model shared by every pass:
// - Doctype / Comment hold their full source literal and render unchanged.
// - StartTag keeps attributes in source order; duplicates survive until the
//   attribute pass drops them.
// - Character payloads are rewritten in place by the whitespace pass.

use std::fmt;

/// How an attribute value was quoted in the source.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum Quote {
    Double,
    Single,
    None,
}

impl Quote {
    /// The delimiter written around the value, empty for unquoted values.
    pub fn as_str(self) -> &'static str {
        match self {
            Quote::Double => "\"",
            Quote::Single => "'",
            Quote::None => "",
        }
    }
}

#[derive(Clone, Debug, PartialEq, Eq)]
pub struct Attribute {
    pub name: String,
    pub value: String,
    pub quote: Quote,
}

impl Attribute {
    pub fn new(name: impl Into<String>, value: impl Into<String>, quote: Quote) -> Self {
        Self {
            name: name.into(),
            value: value.into(),
            quote,
        }
    }

    /// A valueless attribute such as `disabled`.
    pub fn bare(name: impl Into<String>) -> Self {
        Self::new(name, String::new(), Quote::None)
    }
}

#[derive(Clone, Debug, PartialEq, Eq)]
pub struct StartTag {
    pub name: String,
    pub attributes: Vec<Attribute>,
    pub self_closing: bool,
}

impl StartTag {
    pub fn new(name: impl Into<String>) -> Self {
        Self {
            name: name.into(),
            attributes: Vec::new(),
            self_closing: false,
        }
    }

    pub fn with_attribute(mut self, attribute: Attribute) -> Self {
        self.attributes.push(attribute);
        self
    }

    pub fn self_closing(mut self) -> Self {
        self.self_closing = true;
        self
    }
}

#[derive(Clone, Debug, PartialEq, Eq)]
pub enum Token {
    /// `<!DOCTYPE ...>`, verbatim.
    Doctype(String),
    StartTag(StartTag),
    EndTag(String),
    /// Full comment literal including its delimiters, e.g. `<!--x-->` or `<![endif]>`.
    Comment(String),
    Character(String),
}

impl Token {
    /// Tag name for start and end tags.
    pub fn tag_name(&self) -> Option<&str> {
        match self {
            Token::StartTag(tag) => Some(&tag.name),
            Token::EndTag(name) => Some(name),
            _ => None,
        }
    }

    #[inline]
    pub fn is_tag(&self) -> bool {
        matches!(self, Token::StartTag(_) | Token::EndTag(_))
    }

    pub fn kind(&self) -> &'static str {
        match self {
            Token::Doctype(_) => "doctype",
            Token::StartTag(_) => "start-tag",
            Token::EndTag(_) => "end-tag",
            Token::Comment(_) => "comment",
            Token::Character(_) => "character",
        }
    }
}

impl fmt::Display for Token {
    /// Debug-friendly one-line summary; the renderer owns real serialization.
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Token::Doctype(text) | Token::Comment(text) => write!(f, "{}({text:?})", self.kind()),
            Token::StartTag(tag) => write!(f, "start-tag({})", tag.name),
            Token::EndTag(name) => write!(f, "end-tag({name})"),
            Token::Character(text) => write!(f, "character({text:?})"),
        }
    }
}

/// Raw-text elements whose body the tokenizer hands over as one `Character` token
/// and whose comment-like contents the comment pass must never inspect.
#[inline]
pub fn is_script_or_style(name: &str) -> bool {
    name.eq_ignore_ascii_case("script") || name.eq_ignore_ascii_case("style")
}
