use crate::base::{Document, Range};
use crate::errors::HandlerError;
use crate::events::{Attribute, EndTag, StartTag, TagPrefix};
use crate::policy::TagId;

/// What the tokenizer should do after an event has been handled.
#[must_use]
#[derive(Copy, Clone, Eq, PartialEq, Debug)]
pub enum Directive {
    Continue,
    /// Stop parsing; no further events are delivered.
    Stop,
}

/// Returned by every [`Handler`] method. `Ok(Directive::Stop)` ends the
/// parse cleanly; an error propagates out of
/// [`Tokenizer::parse`](crate::Tokenizer::parse).
pub type HandlerResult = Result<Directive, HandlerError>;

pub const CONTINUE: HandlerResult = Ok(Directive::Continue);

/// The event sink the tokenizer drives.
///
/// Every method has a no-op default that continues, so an implementation
/// only overrides the events it cares about. Events are delivered
/// synchronously, in source order; for one tag that order is prefix, each
/// attribute, then the full tag.
#[allow(unused_variables)]
pub trait Handler {
    /// A run of character data between syntactic landmarks.
    fn text(&mut self, doc: &Document<'_>, text: Range) -> HandlerResult {
        CONTINUE
    }

    /// A `<!-- -->` comment, fences included.
    fn comment(&mut self, doc: &Document<'_>, comment: Range) -> HandlerResult {
        CONTINUE
    }

    /// A `<![CDATA[ ]]>` section, fences included.
    fn cdata(&mut self, doc: &Document<'_>, cdata: Range) -> HandlerResult {
        CONTINUE
    }

    /// A `<? ?>` processing instruction.
    fn processing_instruction(&mut self, doc: &Document<'_>, pi: Range) -> HandlerResult {
        CONTINUE
    }

    /// A `<! >` declaration (doctype and friends).
    fn declaration(&mut self, doc: &Document<'_>, declaration: Range) -> HandlerResult {
        CONTINUE
    }

    fn start_tag_prefix(&mut self, doc: &Document<'_>, prefix: &TagPrefix) -> HandlerResult {
        CONTINUE
    }

    fn start_tag_attribute(&mut self, doc: &Document<'_>, attribute: &Attribute) -> HandlerResult {
        CONTINUE
    }

    fn start_tag(&mut self, doc: &Document<'_>, tag: &StartTag) -> HandlerResult {
        CONTINUE
    }

    fn end_tag_prefix(&mut self, doc: &Document<'_>, prefix: &TagPrefix) -> HandlerResult {
        CONTINUE
    }

    /// Attributes on end tags are permitted and reported; what they mean is
    /// application-defined.
    fn end_tag_attribute(&mut self, doc: &Document<'_>, attribute: &Attribute) -> HandlerResult {
        CONTINUE
    }

    fn end_tag(&mut self, doc: &Document<'_>, tag: &EndTag) -> HandlerResult {
        CONTINUE
    }

    /// End of input. `open_elements` holds the ids still on the
    /// open-element stack, outermost first; an empty slice means a clean
    /// parse.
    fn end_of_input(&mut self, doc: &Document<'_>, open_elements: &[TagId]) -> HandlerResult {
        CONTINUE
    }
}

impl<H: Handler + ?Sized> Handler for &mut H {
    #[inline]
    fn text(&mut self, doc: &Document<'_>, text: Range) -> HandlerResult {
        (**self).text(doc, text)
    }

    #[inline]
    fn comment(&mut self, doc: &Document<'_>, comment: Range) -> HandlerResult {
        (**self).comment(doc, comment)
    }

    #[inline]
    fn cdata(&mut self, doc: &Document<'_>, cdata: Range) -> HandlerResult {
        (**self).cdata(doc, cdata)
    }

    #[inline]
    fn processing_instruction(&mut self, doc: &Document<'_>, pi: Range) -> HandlerResult {
        (**self).processing_instruction(doc, pi)
    }

    #[inline]
    fn declaration(&mut self, doc: &Document<'_>, declaration: Range) -> HandlerResult {
        (**self).declaration(doc, declaration)
    }

    #[inline]
    fn start_tag_prefix(&mut self, doc: &Document<'_>, prefix: &TagPrefix) -> HandlerResult {
        (**self).start_tag_prefix(doc, prefix)
    }

    #[inline]
    fn start_tag_attribute(&mut self, doc: &Document<'_>, attribute: &Attribute) -> HandlerResult {
        (**self).start_tag_attribute(doc, attribute)
    }

    #[inline]
    fn start_tag(&mut self, doc: &Document<'_>, tag: &StartTag) -> HandlerResult {
        (**self).start_tag(doc, tag)
    }

    #[inline]
    fn end_tag_prefix(&mut self, doc: &Document<'_>, prefix: &TagPrefix) -> HandlerResult {
        (**self).end_tag_prefix(doc, prefix)
    }

    #[inline]
    fn end_tag_attribute(&mut self, doc: &Document<'_>, attribute: &Attribute) -> HandlerResult {
        (**self).end_tag_attribute(doc, attribute)
    }

    #[inline]
    fn end_tag(&mut self, doc: &Document<'_>, tag: &EndTag) -> HandlerResult {
        (**self).end_tag(doc, tag)
    }

    #[inline]
    fn end_of_input(&mut self, doc: &Document<'_>, open_elements: &[TagId]) -> HandlerResult {
        (**self).end_of_input(doc, open_elements)
    }
}
