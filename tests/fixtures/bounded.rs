//! Comments, CDATA sections, processing instructions and declarations.

use crate::harness::assert_events;
use landmarks::XmlPolicy;

#[test]
fn comment_between_text_runs() {
    assert_events(
        "a<!--b-->c",
        XmlPolicy,
        &["text(a)", "comment(<!--b-->)", "text(c)", "eof()"],
    );
}

#[test]
fn degenerate_comment_closes_on_its_own_opener() {
    // The closer search starts at the opener, so `<!-->` is one complete
    // comment rather than an unterminated one.
    assert_events("<!-->", XmlPolicy, &["comment(<!-->)", "eof()"]);
    assert_events("<!--->", XmlPolicy, &["comment(<!--->)", "eof()"]);
}

#[test]
fn cdata_hides_markup() {
    assert_events(
        "<![CDATA[x<y]]>",
        XmlPolicy,
        &["cdata(<![CDATA[x<y]]>)", "eof()"],
    );
}

#[test]
fn cdata_opener_is_case_sensitive() {
    // Not a CDATA opener, so `<!` wins and the token is a declaration.
    assert_events(
        "<![cdata[x]]>",
        XmlPolicy,
        &["decl(<![cdata[x]]>)", "eof()"],
    );
}

#[test]
fn processing_instruction() {
    assert_events(
        "<?xml version=\"1.0\"?>",
        XmlPolicy,
        &["pi(<?xml version=\"1.0\"?>)", "eof()"],
    );
}

#[test]
fn degenerate_processing_instruction() {
    assert_events("<?>", XmlPolicy, &["pi(<?>)", "eof()"]);
}

#[test]
fn doctype_declaration() {
    assert_events(
        "<!DOCTYPE html><x/>",
        XmlPolicy,
        &[
            "decl(<!DOCTYPE html>)",
            "start_prefix(x)",
            "start_tag(x/)",
            "eof()",
        ],
    );
}

#[test]
fn unterminated_comment() {
    assert_events(
        "a<!--b",
        XmlPolicy,
        &["text(a)", "comment(<!--b, incomplete)", "eof()"],
    );
}

#[test]
fn unterminated_cdata_and_declaration() {
    assert_events(
        "<![CDATA[x",
        XmlPolicy,
        &["cdata(<![CDATA[x, incomplete)", "eof()"],
    );
    assert_events("<!DOCTYPE", XmlPolicy, &["decl(<!DOCTYPE, incomplete)", "eof()"]);
    assert_events("<?pi", XmlPolicy, &["pi(<?pi, incomplete)", "eof()"]);
}
