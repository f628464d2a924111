//! Structural truncation: the source ends inside a token. Events still
//! fire with their best-known extent and the final report keeps the stack
//! as it stands.

use crate::harness::assert_events;
use landmarks::{HtmlPolicy, XmlPolicy};

#[test]
fn source_ends_inside_a_tag_name() {
    assert_events(
        "<foo",
        XmlPolicy,
        &["start_prefix(foo)", "start_tag(foo, incomplete)", "eof()"],
    );
}

#[test]
fn source_ends_inside_a_quoted_value() {
    assert_events(
        "<a b='1",
        XmlPolicy,
        &[
            "start_prefix(a)",
            "attr(b=1, incomplete)",
            "start_tag(a, incomplete)",
            "eof()",
        ],
    );
}

#[test]
fn source_ends_after_equals_sign() {
    assert_events(
        "<a b=",
        XmlPolicy,
        &[
            "start_prefix(a)",
            "attr(b=, incomplete)",
            "start_tag(a, incomplete)",
            "eof()",
        ],
    );
}

#[test]
fn source_ends_after_attribute_name() {
    assert_events(
        "<a b",
        XmlPolicy,
        &[
            "start_prefix(a)",
            "attr(b)",
            "start_tag(a, incomplete)",
            "eof()",
        ],
    );
}

#[test]
fn no_autoclose_tail_on_the_truncation_path() {
    // `p` would autoclose at a clean end of input; a truncated tag reports
    // the stack as-is instead.
    assert_events(
        "<p><q",
        HtmlPolicy,
        &[
            "start_prefix(p)",
            "start_tag(p)",
            "start_prefix(q)",
            "start_tag(q, incomplete)",
            "eof(p)",
        ],
    );
}

#[test]
fn source_ends_inside_an_end_tag_name() {
    assert_events(
        "</fo",
        XmlPolicy,
        &[
            "end_prefix(fo)",
            "end_tag(fo, Unmatched, incomplete)",
            "eof()",
        ],
    );
}

#[test]
fn trailing_open_bracket_is_text() {
    assert_events("x<", XmlPolicy, &["text(x<)", "eof()"]);
}
