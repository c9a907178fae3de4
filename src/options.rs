// src/options.rs
//
// Resolved configuration. Every field has a default; callers override
// fields either through the typed builder methods or through the string-keyed
// overlay (`set` / `from_pairs`), which silently skips keys it does not know.

use crate::error::{Error, Result};
use regex::Regex;

/// Spacing written before the `/` of a self-closing start tag.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub enum SlashSpacing {
    /// `<br/>`
    #[default]
    RemoveWhiteSpace,
    /// `<br />`
    RemoveSpaceOnly,
}

#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub enum OptimizationLevel {
    /// Collapse whitespace runs only; a run containing a newline keeps one newline.
    #[default]
    Simple,
    /// Also trim text next to block-level tags and around script/style bodies.
    Advanced,
}

#[derive(Clone, Debug)]
pub struct Options {
    pub start_tag_before_slash: SlashSpacing,
    /// Strip comments. Conditional comments survive either way.
    pub comment: bool,
    pub delete_duplicate_attribute: bool,
    /// Comments matching any of these are kept verbatim.
    pub exclude_comment: Vec<Regex>,
    pub optimization_level: OptimizationLevel,
}

impl Default for Options {
    fn default() -> Self {
        Self {
            start_tag_before_slash: SlashSpacing::RemoveWhiteSpace,
            comment: true,
            delete_duplicate_attribute: true,
            exclude_comment: Vec::new(),
            optimization_level: OptimizationLevel::Simple,
        }
    }
}

impl Options {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn start_tag_before_slash(mut self, spacing: SlashSpacing) -> Self {
        self.start_tag_before_slash = spacing;
        self
    }

    pub fn comment(mut self, strip: bool) -> Self {
        self.comment = strip;
        self
    }

    pub fn delete_duplicate_attribute(mut self, enabled: bool) -> Self {
        self.delete_duplicate_attribute = enabled;
        self
    }

    pub fn optimization_level(mut self, level: OptimizationLevel) -> Self {
        self.optimization_level = level;
        self
    }

    /// Append an already compiled exclude pattern.
    pub fn exclude(mut self, pattern: Regex) -> Self {
        self.exclude_comment.push(pattern);
        self
    }

    /// Compile and append an exclude pattern.
    pub fn exclude_pattern(mut self, pattern: &str) -> Result<Self> {
        self.exclude_comment.push(compile(pattern)?);
        Ok(self)
    }

    #[inline]
    pub fn is_advanced(&self) -> bool {
        self.optimization_level == OptimizationLevel::Advanced
    }

    /// Apply one string-keyed option. Unknown keys are ignored; known keys with
    /// values outside their vocabulary are rejected.
    pub fn set(&mut self, key: &str, value: &str) -> Result<()> {
        match key {
            "startTagBeforeSlash" => {
                self.start_tag_before_slash = match value {
                    "REMOVE_WHITE_SPACE" => SlashSpacing::RemoveWhiteSpace,
                    "REMOVE_SPACE_ONLY" => SlashSpacing::RemoveSpaceOnly,
                    _ => return Err(invalid(key, value)),
                };
            }
            "comment" => self.comment = parse_bool(key, value)?,
            "deleteDuplicateAttribute" => self.delete_duplicate_attribute = parse_bool(key, value)?,
            "excludeComment" => self.exclude_comment.push(compile(value)?),
            "optimizationLevel" => {
                self.optimization_level = match value {
                    "SIMPLE" => OptimizationLevel::Simple,
                    "ADVANCED" => OptimizationLevel::Advanced,
                    _ => return Err(invalid(key, value)),
                };
            }
            _ => tracing::debug!(key, "ignoring unrecognized option"),
        }
        Ok(())
    }

    /// Overlay key/value pairs onto the defaults, in order.
    pub fn from_pairs<I, K, V>(pairs: I) -> Result<Self>
    where
        I: IntoIterator<Item = (K, V)>,
        K: AsRef<str>,
        V: AsRef<str>,
    {
        let mut options = Self::default();
        for (key, value) in pairs {
            options.set(key.as_ref(), value.as_ref())?;
        }
        Ok(options)
    }
}

fn compile(pattern: &str) -> Result<Regex> {
    Regex::new(pattern).map_err(|source| Error::Pattern {
        pattern: pattern.to_owned(),
        source,
    })
}

fn parse_bool(key: &str, value: &str) -> Result<bool> {
    match value {
        "true" | "1" => Ok(true),
        "false" | "0" => Ok(false),
        _ => Err(invalid(key, value)),
    }
}

fn invalid(key: &str, value: &str) -> Error {
    Error::InvalidOption {
        key: key.to_owned(),
        value: value.to_owned(),
    }
}
