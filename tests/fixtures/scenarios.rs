//! End-to-end event streams for the canonical parsing scenarios.

use crate::harness::{assert_events, LandmarkPolicy};
use landmarks::{HtmlPolicy, XmlPolicy};

#[test]
fn attributes_text_and_matched_end_tag() {
    assert_events(
        "<a b='1' c=\"2\" d e>x</a>",
        XmlPolicy,
        &[
            "start_prefix(a)",
            "attr(b=1)",
            "attr(c=2)",
            "attr(d)",
            "attr(e)",
            "start_tag(a)",
            "text(x)",
            "end_prefix(a)",
            "end_tag(a, Matched)",
            "eof()",
        ],
    );
}

#[test]
fn paragraph_autocloses_at_end_of_input() {
    assert_events(
        "<p>hi",
        HtmlPolicy,
        &[
            "start_prefix(p)",
            "start_tag(p)",
            "text(hi)",
            "end_prefix(p)",
            "end_tag(p, AutoclosedByParent)",
            "eof()",
        ],
    );
}

#[test]
fn script_body_is_not_markup() {
    assert_events(
        "<script>if (a<b) { }</script>",
        HtmlPolicy,
        &[
            "start_prefix(script)",
            "start_tag(script)",
            "text(if (a<b) { })",
            "end_prefix(script)",
            "end_tag(script, Matched)",
            "eof()",
        ],
    );
}

#[test]
fn void_element_never_opens() {
    assert_events(
        "<br/>",
        HtmlPolicy,
        &["start_prefix(br)", "start_tag(br/)", "eof()"],
    );
}

#[test]
fn end_tag_without_autoclose_rules_stays_unmatched() {
    assert_events(
        "<a><b></a>",
        XmlPolicy,
        &[
            "start_prefix(a)",
            "start_tag(a)",
            "start_prefix(b)",
            "start_tag(b)",
            "end_prefix(a)",
            "end_tag(a, Unmatched)",
            "eof(a, b)",
        ],
    );
}

#[test]
fn landmark_end_tag_closes_descendants() {
    assert_events(
        "<a><b></a>",
        LandmarkPolicy("a"),
        &[
            "start_prefix(a)",
            "start_tag(a)",
            "start_prefix(b)",
            "start_tag(b)",
            "end_prefix(b)",
            "end_tag(b, AutoclosedByAncestor)",
            "end_prefix(a)",
            "end_tag(a, Matched)",
            "eof()",
        ],
    );
}

#[test]
fn list_item_autocloses_its_sibling() {
    assert_events(
        "<li>x<li>y",
        HtmlPolicy,
        &[
            "start_prefix(li)",
            "start_tag(li)",
            "text(x)",
            "end_prefix(li)",
            "end_tag(li, AutoclosedBySibling)",
            "start_prefix(li)",
            "start_tag(li)",
            "text(y)",
            "end_prefix(li)",
            "end_tag(li, AutoclosedByParent)",
            "eof()",
        ],
    );
}

#[test]
fn angle_brackets_as_plain_text() {
    assert_events(
        "5 < 10 and 10 > 5",
        XmlPolicy,
        &["text(5 < 10 and 10 > 5)", "eof()"],
    );
}

#[test]
fn empty_input() {
    assert_events("", XmlPolicy, &["eof()"]);
}
