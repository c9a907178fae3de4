// src/display.rs
//
// Default CSS display category per element, as browsers ship it. Only the
// inline/non-inline split matters to the whitespace pass, but the full
// category is kept so callers can inspect it.

use std::fmt;

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum Display {
    Block,
    Inline,
    InlineBlock,
    None,
    Table,
    TableRow,
    TableCell,
    TableCaption,
    TableColumn,
    TableColumnGroup,
    TableRowGroup,
    TableHeaderGroup,
    TableFooterGroup,
    ListItem,
}

impl Display {
    pub fn as_str(self) -> &'static str {
        match self {
            Display::Block => "block",
            Display::Inline => "inline",
            Display::InlineBlock => "inline-block",
            Display::None => "none",
            Display::Table => "table",
            Display::TableRow => "table-row",
            Display::TableCell => "table-cell",
            Display::TableCaption => "table-caption",
            Display::TableColumn => "table-column",
            Display::TableColumnGroup => "table-column-group",
            Display::TableRowGroup => "table-row-group",
            Display::TableHeaderGroup => "table-header-group",
            Display::TableFooterGroup => "table-footer-group",
            Display::ListItem => "list-item",
        }
    }
}

impl fmt::Display for Display {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/* ================================ Table ================================== */

use Display as D;

// Sorted by name; looked up with a binary search.
static TAG_DISPLAY: &[(&str, Display)] = &[
    ("a", D::Inline),
    ("abbr", D::Inline),
    ("acronym", D::Inline),
    ("address", D::Block),
    ("applet", D::Inline),
    ("area", D::None),
    ("article", D::Block),
    ("aside", D::Block),
    ("audio", D::Inline),
    ("b", D::Inline),
    ("base", D::Inline),
    ("basefont", D::Inline),
    ("bdo", D::Inline),
    ("bgsound", D::Inline),
    ("big", D::Inline),
    ("blockquote", D::Block),
    ("body", D::Block),
    ("br", D::Inline),
    ("button", D::InlineBlock),
    ("canvas", D::Inline),
    ("caption", D::TableCaption),
    ("center", D::Block),
    ("cite", D::Inline),
    ("code", D::Inline),
    ("col", D::TableColumn),
    ("colgroup", D::TableColumnGroup),
    ("command", D::Inline),
    ("datalist", D::None),
    ("dd", D::Block),
    ("del", D::Inline),
    ("details", D::Block),
    ("dfn", D::Inline),
    ("dir", D::Block),
    ("div", D::Block),
    ("dl", D::Block),
    ("dt", D::Block),
    ("em", D::Inline),
    ("embed", D::Inline),
    ("fieldset", D::Block),
    ("figcaption", D::Block),
    ("figure", D::Block),
    ("font", D::Inline),
    ("footer", D::Block),
    ("form", D::Block),
    ("frame", D::Block),
    ("frameset", D::Block),
    ("h1", D::Block),
    ("h2", D::Block),
    ("h3", D::Block),
    ("h4", D::Block),
    ("h5", D::Block),
    ("h6", D::Block),
    ("head", D::None),
    ("header", D::Block),
    ("hgroup", D::Block),
    ("hr", D::Block),
    ("html", D::Block),
    ("i", D::Inline),
    ("iframe", D::Inline),
    ("image", D::Inline),
    ("img", D::Inline),
    ("input", D::InlineBlock),
    ("ins", D::Inline),
    ("isindex", D::InlineBlock),
    ("kbd", D::Inline),
    ("keygen", D::InlineBlock),
    ("label", D::Inline),
    ("layer", D::Block),
    ("legend", D::Block),
    ("li", D::ListItem),
    ("link", D::None),
    ("listing", D::Block),
    ("map", D::Inline),
    ("mark", D::Inline),
    ("marquee", D::InlineBlock),
    ("menu", D::Block),
    ("meta", D::None),
    ("meter", D::InlineBlock),
    ("nav", D::Block),
    ("nobr", D::Inline),
    ("noembed", D::Inline),
    ("noframes", D::None),
    ("nolayer", D::Inline),
    ("noscript", D::Inline),
    ("object", D::Inline),
    ("ol", D::Block),
    ("optgroup", D::Inline),
    ("option", D::Inline),
    ("output", D::Inline),
    ("p", D::Block),
    ("param", D::None),
    ("plaintext", D::Block),
    ("pre", D::Block),
    ("progress", D::InlineBlock),
    ("q", D::Inline),
    ("rp", D::Inline),
    ("rt", D::Inline),
    ("ruby", D::Inline),
    ("s", D::Inline),
    ("samp", D::Inline),
    ("script", D::None),
    ("section", D::Block),
    ("select", D::InlineBlock),
    ("small", D::Inline),
    ("source", D::Inline),
    ("span", D::Inline),
    ("strike", D::Inline),
    ("strong", D::Inline),
    ("style", D::None),
    ("sub", D::Inline),
    ("summary", D::Block),
    ("sup", D::Inline),
    ("table", D::Table),
    ("tbody", D::TableRowGroup),
    ("td", D::TableCell),
    ("textarea", D::InlineBlock),
    ("tfoot", D::TableFooterGroup),
    ("th", D::TableCell),
    ("thead", D::TableHeaderGroup),
    ("title", D::None),
    ("tr", D::TableRow),
    ("track", D::Inline),
    ("tt", D::Inline),
    ("u", D::Inline),
    ("ul", D::InlineBlock),
    ("var", D::Inline),
    ("video", D::Inline),
    ("wbr", D::Inline),
    ("xmp", D::Block),
];

/// Display category of a known element, `None` for names the table lacks.
pub fn lookup(name: &str) -> Option<Display> {
    let lower = name.to_ascii_lowercase();
    TAG_DISPLAY
        .binary_search_by(|(tag, _)| (*tag).cmp(lower.as_str()))
        .ok()
        .map(|idx| TAG_DISPLAY[idx].1)
}

/// Display category with unknown elements treated as inline, so whitespace
/// around custom elements is never dropped.
pub fn display_of(name: &str) -> Display {
    lookup(name).unwrap_or(D::Inline)
}

#[inline]
pub fn is_inline(name: &str) -> bool {
    display_of(name) == D::Inline
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn table_is_sorted_for_binary_search() {
        for pair in TAG_DISPLAY.windows(2) {
            assert!(pair[0].0 < pair[1].0, "{} >= {}", pair[0].0, pair[1].0);
        }
    }

    #[test]
    fn known_tags() {
        assert_eq!(display_of("div"), D::Block);
        assert_eq!(display_of("td"), D::TableCell);
        assert_eq!(display_of("li"), D::ListItem);
        assert_eq!(display_of("ul"), D::InlineBlock);
        assert_eq!(display_of("span"), D::Inline);
    }

    #[test]
    fn lookup_ignores_ascii_case() {
        assert_eq!(lookup("DIV"), Some(D::Block));
        assert_eq!(lookup("Table"), Some(D::Table));
    }

    #[test]
    fn unknown_tags_are_inline() {
        assert_eq!(lookup("my-widget"), None);
        assert!(is_inline("my-widget"));
        assert!(is_inline("x"));
        assert!(!is_inline("p"));
    }

    #[test]
    fn display_names() {
        assert_eq!(D::TableHeaderGroup.to_string(), "table-header-group");
        assert_eq!(D::InlineBlock.as_str(), "inline-block");
    }
}
