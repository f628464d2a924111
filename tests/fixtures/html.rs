//! Behavior specific to the built-in HTML policy, plus the permissive
//! name-start variant.

use crate::harness::{assert_events, SpaceTolerantPolicy};
use landmarks::{
    parse, Document, Handler, HandlerResult, HtmlPolicy, SelfClosingPolicy, StartTag, XmlPolicy,
    CONTINUE,
};
use pretty_assertions::assert_eq;

#[test]
fn void_element_without_marker() {
    assert_events(
        "<br>",
        HtmlPolicy,
        &["start_prefix(br)", "start_tag(br/)", "eof()"],
    );
}

#[test]
fn marker_on_content_element_is_ignored() {
    assert_events(
        "<div/>",
        HtmlPolicy,
        &["start_prefix(div)", "start_tag(div)", "eof(div)"],
    );
}

#[test]
fn tag_names_match_case_insensitively() {
    assert_events(
        "<DIV>x</div>",
        HtmlPolicy,
        &[
            "start_prefix(DIV)",
            "start_tag(DIV)",
            "text(x)",
            "end_prefix(div)",
            "end_tag(div, Matched)",
            "eof()",
        ],
    );
}

#[test]
fn long_custom_names_fold_to_lowercase() {
    assert_events(
        "<x-widget>x</X-WIDGET>",
        HtmlPolicy,
        &[
            "start_prefix(x-widget)",
            "start_tag(x-widget)",
            "text(x)",
            "end_prefix(X-WIDGET)",
            "end_tag(X-WIDGET, Matched)",
            "eof()",
        ],
    );
}

#[test]
fn digit_led_names_stay_text() {
    assert_events("<11>x", HtmlPolicy, &["text(<11>x)", "eof()"]);
}

#[test]
fn digits_after_the_first_letter_are_fine() {
    assert_events(
        "<h1>x</h1>",
        HtmlPolicy,
        &[
            "start_prefix(h1)",
            "start_tag(h1)",
            "text(x)",
            "end_prefix(h1)",
            "end_tag(h1, Matched)",
            "eof()",
        ],
    );
}

#[test]
fn space_tolerant_name_start() {
    assert_events(
        "< foo>x",
        SpaceTolerantPolicy,
        &["start_prefix(foo)", "start_tag(foo)", "text(x)", "eof(foo)"],
    );
}

#[derive(Default)]
struct PolicyProbe(Vec<SelfClosingPolicy>);

impl Handler for PolicyProbe {
    fn start_tag(&mut self, _doc: &Document<'_>, tag: &StartTag) -> HandlerResult {
        self.0.push(tag.self_closing_policy);
        CONTINUE
    }
}

#[test]
fn self_closing_policies_per_element_class() {
    let mut probe = PolicyProbe::default();

    parse("<br><div>", HtmlPolicy, &mut probe).unwrap();
    parse("<a>", XmlPolicy, &mut probe).unwrap();

    assert_eq!(
        probe.0,
        vec![
            SelfClosingPolicy::Required,
            SelfClosingPolicy::Prohibited,
            SelfClosingPolicy::Allowed,
        ]
    );
}
