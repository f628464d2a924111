//! Attribute parsing as observed through the event stream.

use crate::harness::assert_events;
use landmarks::XmlPolicy;

#[test]
fn duplicate_attributes_are_preserved() {
    assert_events(
        "<a x='1' x='2'>",
        XmlPolicy,
        &[
            "start_prefix(a)",
            "attr(x=1)",
            "attr(x=2)",
            "start_tag(a)",
            "eof(a)",
        ],
    );
}

#[test]
fn attributes_on_end_tags_are_reported() {
    assert_events(
        "<a>x</a b='2'>",
        XmlPolicy,
        &[
            "start_prefix(a)",
            "start_tag(a)",
            "text(x)",
            "end_prefix(a)",
            "end_attr(b=2)",
            "end_tag(a, Matched)",
            "eof()",
        ],
    );
}

#[test]
fn slash_inside_unquoted_value_belongs_to_the_value() {
    // The byte before `>` is `/`, so the tag also carries the marker.
    assert_events(
        "<a href=a/>",
        XmlPolicy,
        &["start_prefix(a)", "attr(href=a/)", "start_tag(a/)", "eof()"],
    );
}

#[test]
fn valueless_attribute_against_the_marker() {
    assert_events(
        "<a b/>",
        XmlPolicy,
        &["start_prefix(a)", "attr(b)", "start_tag(a/)", "eof()"],
    );
}

#[test]
fn detached_slash_is_not_a_marker() {
    assert_events(
        "<a / >",
        XmlPolicy,
        &["start_prefix(a)", "start_tag(a)", "eof(a)"],
    );
}

#[test]
fn spaces_around_equals_sign() {
    assert_events(
        "<a b = '1' c= 2 d =e>",
        XmlPolicy,
        &[
            "start_prefix(a)",
            "attr(b=1)",
            "attr(c=2)",
            "attr(d=e)",
            "start_tag(a)",
            "eof(a)",
        ],
    );
}

#[test]
fn empty_quoted_value_is_not_valueless() {
    assert_events(
        "<a b=''>",
        XmlPolicy,
        &["start_prefix(a)", "attr(b=)", "start_tag(a)", "eof(a)"],
    );
}

#[test]
fn qualified_names_pass_through() {
    assert_events(
        "<tt:span x:y='1'></tt:span>",
        XmlPolicy,
        &[
            "start_prefix(tt:span)",
            "attr(x:y=1)",
            "start_tag(tt:span)",
            "end_prefix(tt:span)",
            "end_tag(tt:span, Matched)",
            "eof()",
        ],
    );
}
