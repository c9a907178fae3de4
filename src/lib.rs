// src/lib.rs
//
// htmlminify — token-stream HTML minifier
//
// Pipeline, always in this order:
//   tokenize → drop comments → collapse whitespace → dedupe attributes → render
//
// - Comments go unless they are conditional comments or match an exclude pattern.
// - Whitespace runs collapse everywhere except inside script, style, textarea, pre.
// - ADVANCED additionally trims text next to block-level tags.
// - Repeated attributes on a start tag keep their first occurrence.
// - Untouched regions (doctype, kept comments, raw-text bodies, attribute values)
//   come out byte-for-byte as they went in.

pub mod attributes;
pub mod comment;
pub mod display;
pub mod error;
pub mod options;
pub mod render;
pub mod token;
pub mod tokenizer;
pub mod whitespace;

pub use display::Display;
pub use error::{Error, Result};
pub use options::{OptimizationLevel, Options, SlashSpacing};
pub use token::{Attribute, Quote, StartTag, Token};

/// Leading characters dropped from the input before tokenizing.
const LEADING_TRIM: &[char] = &[' ', '\t', '\n', '\r', '\0', '\x0B'];

/// Minify `html` in one call.
pub fn minify(html: &str, options: Options) -> Result<String> {
    Ok(Minifier::new(html, options)?.process())
}

/// A document tokenized once and minified in place.
///
/// ```
/// use htmlminify::{Minifier, Options};
///
/// let mut m = Minifier::new("<p>a   b</p>  ", Options::default()).unwrap();
/// assert_eq!(m.process(), "<p>a b</p>");
/// ```
#[derive(Debug)]
pub struct Minifier {
    tokens: Vec<Token>,
    options: Options,
    processed: bool,
}

impl Minifier {
    /// Left-trim and tokenize `html`. Tokenizer rejections surface unchanged.
    pub fn new(html: &str, options: Options) -> Result<Self> {
        let tokens = tokenizer::tokenize(html.trim_start_matches(LEADING_TRIM))?;
        Ok(Self::from_tokens(tokens, options))
    }

    /// Start from an already tokenized document.
    pub fn from_tokens(tokens: Vec<Token>, options: Options) -> Self {
        Self {
            tokens,
            options,
            processed: false,
        }
    }

    /// Run the pipeline and render. The passes run on the first call only;
    /// later calls render the already minified tokens again.
    pub fn process(&mut self) -> String {
        if !self.processed {
            self.run_passes();
            self.processed = true;
        }
        render::render(&self.tokens, &self.options)
    }

    #[tracing::instrument(level = "debug", skip_all, fields(count = self.tokens.len()))]
    fn run_passes(&mut self) {
        let tokens = std::mem::take(&mut self.tokens);
        self.tokens = comment::filter_comments(tokens, &self.options);
        whitespace::collapse_whitespace(&mut self.tokens, &self.options);
        if self.options.delete_duplicate_attribute {
            attributes::dedupe_attributes(&mut self.tokens);
        }
    }

    pub fn tokens(&self) -> &[Token] {
        &self.tokens
    }

    pub fn options(&self) -> &Options {
        &self.options
    }

    pub fn into_tokens(self) -> Vec<Token> {
        self.tokens
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn process_twice_renders_the_same_result() {
        let mut m = Minifier::new("<p> a  <!--x--> b </p>", Options::default()).unwrap();
        let first = m.process();
        assert_eq!(first, "<p> a b </p>");
        assert_eq!(m.process(), first);
    }

    #[test]
    fn tokens_reflect_the_transform() {
        let mut m = Minifier::new("a <!--x--> b", Options::default()).unwrap();
        assert_eq!(m.tokens().len(), 3);
        m.process();
        assert_eq!(m.tokens(), [Token::Character("a b".to_owned())]);
    }

    #[test]
    fn into_tokens_hands_over_the_processed_stream() {
        let options = Options::new().comment(false);
        let mut m = Minifier::new("<p>a<!--x--></p>", options).unwrap();
        assert!(!m.options().comment);
        m.process();
        let tokens = m.into_tokens();
        assert_eq!(tokens[2], Token::Comment("<!--x-->".to_owned()));
    }

    #[test]
    fn input_is_left_trimmed_before_tokenizing() {
        let m = Minifier::new(" \n\t<p>x</p>", Options::default()).unwrap();
        assert_eq!(m.tokens()[0], Token::StartTag(StartTag::new("p")));
    }

    #[test]
    fn tokenizer_errors_surface() {
        let err = minify("<p class=\"x", Options::default()).unwrap_err();
        assert!(matches!(err, Error::Unterminated { .. }));
    }
}
