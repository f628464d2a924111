//! Opaque elements: raw body scanning for the matching end tag.

use crate::harness::assert_events;
use landmarks::HtmlPolicy;

#[test]
fn decoy_end_tags_stay_in_the_body() {
    assert_events(
        "<style>a</styl></style>",
        HtmlPolicy,
        &[
            "start_prefix(style)",
            "start_tag(style)",
            "text(a</styl>)",
            "end_prefix(style)",
            "end_tag(style, Matched)",
            "eof()",
        ],
    );
}

#[test]
fn end_tag_match_is_case_insensitive() {
    assert_events(
        "<SCRIPT>x</script>",
        HtmlPolicy,
        &[
            "start_prefix(SCRIPT)",
            "start_tag(SCRIPT)",
            "text(x)",
            "end_prefix(script)",
            "end_tag(script, Matched)",
            "eof()",
        ],
    );
}

#[test]
fn unterminated_body_runs_to_end_of_input() {
    assert_events(
        "<script>if (a<b)",
        HtmlPolicy,
        &[
            "start_prefix(script)",
            "start_tag(script)",
            "text(if (a<b))",
            "eof(script)",
        ],
    );
}

#[test]
fn empty_body() {
    assert_events(
        "<script></script>",
        HtmlPolicy,
        &[
            "start_prefix(script)",
            "start_tag(script)",
            "end_prefix(script)",
            "end_tag(script, Matched)",
            "eof()",
        ],
    );
}

#[test]
fn attributes_then_raw_body() {
    assert_events(
        "<script src='a.js'>x<y</script>",
        HtmlPolicy,
        &[
            "start_prefix(script)",
            "attr(src=a.js)",
            "start_tag(script)",
            "text(x<y)",
            "end_prefix(script)",
            "end_tag(script, Matched)",
            "eof()",
        ],
    );
}
