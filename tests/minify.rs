use htmlminify::{minify, Error, Minifier, OptimizationLevel, Options, SlashSpacing, Token};
use pretty_assertions::assert_eq;

const PAGE: &str = concat!(
    "<!DOCTYPE html>\n",
    "<html>\n",
    "  <head>\n",
    "    <title> Page  title </title>\n",
    "    <style>\n",
    "      body { color: red; }\n",
    "    </style>\n",
    "  </head>\n",
    "  <body>\n",
    "    <!-- nav -->\n",
    "    <div class=\"a\" class=\"b\">\n",
    "      Hello   <b>bold</b>   world\n",
    "    </div>\n",
    "  </body>\n",
    "</html>\n",
);

fn simple() -> Options {
    Options::default()
}

fn advanced() -> Options {
    Options::new().optimization_level(OptimizationLevel::Advanced)
}

#[test]
fn page_simple() {
    assert_eq!(
        minify(PAGE, simple()).unwrap(),
        concat!(
            "<!DOCTYPE html>\n<html>\n<head>\n<title> Page title </title>\n",
            "<style>\n      body { color: red; }\n    </style>\n</head>\n<body>\n",
            "<div class=\"a\">\nHello <b>bold</b> world\n</div>\n</body>\n</html>",
        )
    );
}

#[test]
fn page_advanced() {
    assert_eq!(
        minify(PAGE, advanced()).unwrap(),
        concat!(
            "<!DOCTYPE html><html><head><title>Page title</title>",
            "<style>body { color: red; }</style></head><body>",
            "<div class=\"a\">Hello<b>bold</b>world</div></body></html>",
        )
    );
}

#[test]
fn whitespace_runs_collapse() {
    assert_eq!(minify("a   b\n\nc", simple()).unwrap(), "a b\nc");
    assert_eq!(minify("<p>a \t b \n\n c</p>", simple()).unwrap(), "<p>a b\nc</p>");
}

#[test]
fn document_edges_trimmed() {
    assert_eq!(minify("\n\n  <p>x</p>\n\n", simple()).unwrap(), "<p>x</p>");
    assert_eq!(minify("<!-- lead -->  text  ", simple()).unwrap(), "text");
}

#[test]
fn duplicate_attributes() {
    let src = r#"<img src="first.png" src="second.png">"#;
    assert_eq!(minify(src, simple()).unwrap(), r#"<img src="first.png">"#);
    let keep = Options::new().delete_duplicate_attribute(false);
    assert_eq!(minify(src, keep).unwrap(), src);
}

#[test]
fn attribute_values_verbatim() {
    let src = r#"<a href='/q?a=1&amp;b="2"' data-x=y hidden title="">t</a>"#;
    assert_eq!(minify(src, simple()).unwrap(), src);
}

#[test]
fn plain_comments_stripped() {
    assert_eq!(minify("a<!--hello-->b", simple()).unwrap(), "ab");
    assert_eq!(minify("<p>a <!--x--> b</p>", simple()).unwrap(), "<p>a b</p>");
}

#[test]
fn comment_stripping_can_be_disabled() {
    let src = "<p>a<!--hello-->b</p>";
    assert_eq!(minify(src, Options::new().comment(false)).unwrap(), src);
}

#[test]
fn conditional_comments_always_kept() {
    let hidden = "<p><!--[if IE]>x<![endif]--></p>";
    let revealed = "<![if !IE]><p>x</p><![endif]>";
    for options in [simple(), advanced()] {
        assert_eq!(minify(hidden, options.clone()).unwrap(), hidden);
        assert_eq!(minify(revealed, options).unwrap(), revealed);
    }
}

#[test]
fn excluded_comments_kept_verbatim() {
    let src = "<div><!--nocache-->y<!--/nocache--></div>";
    let options = Options::from_pairs([("excludeComment", "<!--/?nocache-->")]).unwrap();
    assert_eq!(minify(src, options).unwrap(), src);
    assert_eq!(minify(src, simple()).unwrap(), "<div>y</div>");
}

#[test]
fn raw_text_bodies_survive() {
    for options in [simple(), advanced()] {
        let pre = "<pre>  a\n  b  </pre>";
        assert_eq!(minify(pre, options.clone()).unwrap(), pre);
        let textarea = "<textarea>\n  keep   this\n</textarea>";
        assert_eq!(minify(textarea, options.clone()).unwrap(), textarea);
        let script = "<script>var s = '<!-- not a comment -->';</script>";
        assert_eq!(minify(script, options).unwrap(), script);
    }
}

#[test]
fn self_closing_rendering() {
    assert_eq!(minify("<br/>", simple()).unwrap(), "<br/>");
    assert_eq!(minify("<br />", simple()).unwrap(), "<br/>");
    let spaced = Options::new().start_tag_before_slash(SlashSpacing::RemoveSpaceOnly);
    assert_eq!(minify("<br/>", spaced.clone()).unwrap(), "<br />");
    assert_eq!(minify("<img src=x.png/>", spaced).unwrap(), "<img src=x.png/>");
}

#[test]
fn unknown_elements_keep_surrounding_space() {
    let src = "<p><my-el> a </my-el> b <x-y></x-y></p>";
    assert_eq!(minify(src, advanced()).unwrap(), src);
}

#[test]
fn leading_text_keeps_space_before_unknown_element() {
    assert_eq!(minify("x <my-el>y</my-el>", advanced()).unwrap(), "x <my-el>y</my-el>");
    assert_eq!(minify("x <my-el>y</my-el>", simple()).unwrap(), "x <my-el>y</my-el>");
    assert_eq!(minify("x <div>y</div>", advanced()).unwrap(), "x<div>y</div>");
}

#[test]
fn stray_angle_bracket_before_removed_comment_stays_text() {
    let src = "<<!--c-->w</pre><div>";
    for options in [simple(), advanced()] {
        let once = minify(src, options.clone()).unwrap();
        assert_eq!(once, src);
        assert_eq!(minify(&once, options).unwrap(), once);
    }
    assert_eq!(minify("1 <<!--c--> 2", simple()).unwrap(), "1 < 2");
}

#[test]
fn inline_neighbours_keep_space_in_advanced() {
    let src = "<p>\n  <span>Hello</span> <b>bold</b>\n</p>";
    assert_eq!(minify(src, advanced()).unwrap(), "<p><span>Hello</span> <b>bold</b></p>");
}

#[test]
fn option_pairs_ignore_unknown_keys() {
    let options = Options::from_pairs([
        ("doctype", "html5"),
        ("optimizationLevel", "ADVANCED"),
        ("startTagBeforeSlash", "REMOVE_SPACE_ONLY"),
    ])
    .unwrap();
    assert_eq!(minify("<div> <br/> </div>", options).unwrap(), "<div><br /></div>");
}

#[test]
fn stateful_form_exposes_tokens() {
    let mut m = Minifier::new("<p>a<!--x-->b</p>", simple()).unwrap();
    assert_eq!(m.tokens().len(), 5);
    assert_eq!(m.process(), "<p>ab</p>");
    assert_eq!(m.tokens()[1], Token::Character("ab".to_owned()));
    assert_eq!(m.process(), "<p>ab</p>");
}

#[test]
fn malformed_markup_is_rejected() {
    match minify("<p>ok</p><div", simple()) {
        Err(Error::Unterminated { construct, offset }) => {
            assert_eq!(construct, "start tag");
            assert_eq!(offset, 9);
        }
        other => panic!("expected rejection, got {other:?}"),
    }
}
