// src/attributes.rs

use crate::token::{Attribute, Token};
use std::collections::HashSet;

/// Keep the first occurrence of each attribute name on every start tag.
#[tracing::instrument(level = "debug", skip_all, fields(count = tokens.len()))]
pub fn dedupe_attributes(tokens: &mut [Token]) {
    for token in tokens.iter_mut() {
        let Token::StartTag(tag) = token else {
            continue;
        };
        if !has_duplicates(&tag.attributes) {
            continue;
        }

        let mut seen = HashSet::with_capacity(tag.attributes.len());
        let before = tag.attributes.len();
        tag.attributes.retain(|attr| seen.insert(attr.name.clone()));
        tracing::trace!(tag = %tag.name, dropped = before - tag.attributes.len(), "dropped duplicate attributes");
    }
}

fn has_duplicates(attributes: &[Attribute]) -> bool {
    attributes
        .iter()
        .enumerate()
        .any(|(i, a)| attributes[..i].iter().any(|b| b.name == a.name))
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::token::{Quote, StartTag};
    use pretty_assertions::assert_eq;

    #[test]
    fn first_occurrence_wins() {
        let mut tokens = vec![Token::StartTag(
            StartTag::new("img")
                .with_attribute(Attribute::new("src", "first.png", Quote::Double))
                .with_attribute(Attribute::new("alt", "", Quote::Double))
                .with_attribute(Attribute::new("src", "second.png", Quote::Double))
                .with_attribute(Attribute::bare("alt")),
        )];
        dedupe_attributes(&mut tokens);
        assert_eq!(
            tokens,
            vec![Token::StartTag(
                StartTag::new("img")
                    .with_attribute(Attribute::new("src", "first.png", Quote::Double))
                    .with_attribute(Attribute::new("alt", "", Quote::Double)),
            )]
        );
    }

    #[test]
    fn unique_attributes_untouched() {
        let tag = StartTag::new("a")
            .with_attribute(Attribute::new("href", "/", Quote::Single))
            .with_attribute(Attribute::bare("download"));
        let mut tokens = vec![Token::StartTag(tag.clone()), Token::EndTag("a".to_owned())];
        dedupe_attributes(&mut tokens);
        assert_eq!(tokens, vec![Token::StartTag(tag), Token::EndTag("a".to_owned())]);
    }
}
