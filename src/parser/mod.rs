mod attributes;

use self::attributes::scan_attributes;
use crate::base::{Document, Position, Range, NPOS};
use crate::errors::{HandlerError, ParsingError};
use crate::events::{
    EndTag, EndTagState, SelfClosingMarker, SelfClosingPolicy, StartTag, TagPrefix,
};
use crate::handler::{Directive, Handler, HandlerResult};
use crate::policy::{Policy, TagId};

/// Why event delivery ended before the input did.
pub(crate) enum Interrupt {
    /// Stop delivering events: the handler asked to, or a structural
    /// truncation already produced the final `end_of_input`.
    Stop,
    Fail(HandlerError),
}

#[inline]
pub(crate) fn checked(result: HandlerResult) -> Result<(), Interrupt> {
    match result {
        Ok(Directive::Continue) => Ok(()),
        Ok(Directive::Stop) => Err(Interrupt::Stop),
        Err(error) => Err(Interrupt::Fail(error)),
    }
}

// Longest-prefix classification of the token starting at a `<`.
#[derive(Copy, Clone, Debug)]
enum Opener {
    EndTag,
    Comment,
    CData,
    Declaration,
    Processing,
    StartTag,
}

fn classify_opener(doc: &Document<'_>, pos: Position) -> Opener {
    if doc.starts_with(pos, b"</") {
        Opener::EndTag
    } else if doc.starts_with(pos, b"<!--") {
        Opener::Comment
    } else if doc.starts_with(pos, b"<![CDATA[") {
        Opener::CData
    } else if doc.starts_with(pos, b"<!") {
        Opener::Declaration
    } else if doc.starts_with(pos, b"<?") {
        Opener::Processing
    } else {
        Opener::StartTag
    }
}

/// The tokenizer driver: walks the source left to right, classifies each
/// `<` into one of six opener shapes, dispatches to the matching
/// sub-parser and keeps the open-element stack.
///
/// One `Tokenizer` owns one source view, one policy value and one handler;
/// the open-element stack lives for the duration of a single [`parse`]
/// call.
///
/// [`parse`]: Tokenizer::parse
pub struct Tokenizer<'i, P: Policy, H: Handler> {
    doc: Document<'i>,
    policy: P,
    handler: H,
    stack: Vec<TagId>,
    anchor: Position,
    pos: Position,
}

impl<'i, P: Policy, H: Handler> Tokenizer<'i, P, H> {
    pub fn new(source: &'i str, policy: P, handler: H) -> Self {
        Tokenizer {
            doc: Document::new(source),
            policy,
            handler,
            stack: Vec::new(),
            anchor: 0,
            pos: 0,
        }
    }

    #[inline]
    pub fn document(&self) -> &Document<'i> {
        &self.doc
    }

    #[inline]
    pub fn handler(&self) -> &H {
        &self.handler
    }

    #[inline]
    pub fn handler_mut(&mut self) -> &mut H {
        &mut self.handler
    }

    #[inline]
    pub fn into_handler(self) -> H {
        self.handler
    }

    /// Tokenizes the whole source, delivering events to the handler as
    /// they are found.
    ///
    /// Malformed document content never fails the parse; the only error is
    /// one returned by the handler itself. A handler returning
    /// [`Directive::Stop`] ends the parse cleanly.
    pub fn parse(&mut self) -> Result<(), ParsingError> {
        self.stack.clear();
        self.anchor = 0;
        self.pos = 0;

        match self.run() {
            Ok(()) | Err(Interrupt::Stop) => Ok(()),
            Err(Interrupt::Fail(error)) => Err(ParsingError::HandlerError(error)),
        }
    }

    fn run(&mut self) -> Result<(), Interrupt> {
        loop {
            let lt = self.doc.find_byte(b'<', self.pos);

            if lt == NPOS {
                let len = self.doc.len();

                if len > self.anchor {
                    self.emit_text(Range::new(self.anchor, len))?;
                }

                return self.finish();
            }

            trace!(@scan "opener", lt);

            match classify_opener(&self.doc, lt) {
                Opener::StartTag => {
                    let name_start = self.policy.element_name_start(&self.doc, lt + 1);

                    if name_start == NPOS {
                        // Not a tag after all; the `<` folds into the
                        // surrounding text run.
                        self.pos = lt + 1;
                        continue;
                    }

                    self.flush_text(lt)?;
                    self.start_tag(lt, name_start)?;
                }
                Opener::EndTag => {
                    self.flush_text(lt)?;
                    self.end_tag(lt)?;
                }
                opener => {
                    self.flush_text(lt)?;
                    self.bounded_token(lt, opener)?;
                }
            }
        }
    }

    /// Comments, CDATA sections, processing instructions and declarations:
    /// one opener, one closer, no inner structure.
    fn bounded_token(&mut self, open: Position, opener: Opener) -> Result<(), Interrupt> {
        let closer: &[u8] = match opener {
            Opener::Comment => b"-->",
            Opener::CData => b"]]>",
            Opener::Processing => b"?>",
            Opener::Declaration => b">",
            _ => unreachable!("bounded token expected"),
        };

        // NOTE: search from the opener start, not past it, so degenerate
        // inputs like `<!-->` terminate as one complete comment.
        let close = self.doc.find_seq(closer, open);

        let range = if close == NPOS {
            Range::incomplete_from(open)
        } else {
            Range::new(open, close + closer.len())
        };

        let doc = self.doc;

        checked(match opener {
            Opener::Comment => self.handler.comment(&doc, range),
            Opener::CData => self.handler.cdata(&doc, range),
            Opener::Processing => self.handler.processing_instruction(&doc, range),
            Opener::Declaration => self.handler.declaration(&doc, range),
            _ => unreachable!("bounded token expected"),
        })?;

        let next = if close == NPOS {
            self.doc.len()
        } else {
            close + closer.len()
        };

        self.anchor = next;
        self.pos = next;

        Ok(())
    }

    fn start_tag(&mut self, tag_start: Position, name_start: Position) -> Result<(), Interrupt> {
        let len = self.doc.len();
        let name_end = self.element_name_end(name_start);

        if name_end >= len {
            // Truncated inside the name: report what is known, then end
            // with the stack as it stands.
            let tag_id = self.policy.tag_id(self.doc.text(Range::incomplete_from(name_start)));

            let prefix = TagPrefix {
                tag_id,
                name: Range::incomplete_from(name_start),
                all: Range::incomplete_from(tag_start),
            };

            self.emit_start_tag_prefix(&prefix)?;

            let self_closing_policy = self.self_closing_policy_for(&prefix.tag_id);

            let tag = StartTag::from_prefix(
                prefix,
                Range::incomplete_from(tag_start),
                self_closing_policy,
                SelfClosingMarker::Absent,
            );

            self.emit_start_tag(&tag)?;

            return self.truncate();
        }

        let name = Range::new(name_start, name_end);
        let tag_id = self.policy.tag_id(self.doc.text(name));

        self.autoclose_siblings(&tag_id, tag_start)?;

        let prefix = TagPrefix {
            tag_id,
            name,
            all: Range::new(tag_start, name_end),
        };

        self.emit_start_tag_prefix(&prefix)?;

        let close = self.scan_start_tag_attributes(name_end)?;
        let self_closing_policy = self.self_closing_policy_for(&prefix.tag_id);

        if close == NPOS {
            let tag = StartTag::from_prefix(
                prefix,
                Range::incomplete_from(tag_start),
                self_closing_policy,
                SelfClosingMarker::Absent,
            );

            self.emit_start_tag(&tag)?;

            return self.truncate();
        }

        let gt = if self.doc.byte(close) == Some(b'/') {
            close + 1
        } else {
            close
        };

        let marker = if gt > 0 && self.doc.byte(gt - 1) == Some(b'/') {
            SelfClosingMarker::Present
        } else {
            SelfClosingMarker::Absent
        };

        let tag_end = gt + 1;

        let tag = StartTag::from_prefix(
            prefix,
            Range::new(tag_start, tag_end),
            self_closing_policy,
            marker,
        );

        self.emit_start_tag(&tag)?;

        self.anchor = tag_end;
        self.pos = tag_end;

        if !tag.is_self_closing() {
            self.stack.push(tag.tag_id.clone());

            if self.policy.is_opaque_element(&tag.tag_id) {
                self.scan_opaque_body(&tag.tag_id, tag_end);
            }
        }

        Ok(())
    }

    fn end_tag(&mut self, tag_start: Position) -> Result<(), Interrupt> {
        let len = self.doc.len();
        let after_opener = tag_start + 2;
        let name_start = self.policy.element_name_start(&self.doc, after_opener);

        // Unlike a lone `<`, an end tag is never reinterpreted as text; a
        // missing or invalid name degrades to the unknown id.
        let (name, tag_id) = if name_start == NPOS {
            (Range::empty_at(after_opener.min(len)), TagId::Unknown)
        } else {
            let name_end = self.element_name_end(name_start);

            if name_end >= len {
                // Truncated inside the name.
                let prefix = TagPrefix {
                    tag_id: TagId::Unknown,
                    name: Range::incomplete_from(name_start),
                    all: Range::incomplete_from(tag_start),
                };

                self.emit_end_tag_prefix(&prefix)?;

                let tag = EndTag::from_prefix(
                    prefix,
                    Range::incomplete_from(tag_start),
                    EndTagState::Unmatched,
                );

                self.emit_end_tag(&tag)?;

                return self.truncate();
            }

            let name = Range::new(name_start, name_end);

            (name, self.policy.tag_id(self.doc.text(name)))
        };

        let (tag_id, state) = self.match_end_tag(tag_id, tag_start)?;

        let prefix = TagPrefix {
            tag_id,
            name,
            all: Range::new(tag_start, name.end),
        };

        self.emit_end_tag_prefix(&prefix)?;

        let close = self.scan_end_tag_attributes(name.end)?;

        if close == NPOS {
            let tag = EndTag::from_prefix(prefix, Range::incomplete_from(tag_start), state);

            self.emit_end_tag(&tag)?;

            return self.truncate();
        }

        let gt = if self.doc.byte(close) == Some(b'/') {
            close + 1
        } else {
            close
        };

        let tag_end = gt + 1;
        let tag = EndTag::from_prefix(prefix, Range::new(tag_start, tag_end), state);

        self.emit_end_tag(&tag)?;

        self.anchor = tag_end;
        self.pos = tag_end;

        Ok(())
    }

    /// Resolves an end tag against the open-element stack, synthesizing
    /// autoclose end tags for the frames a match closes over.
    fn match_end_tag(
        &mut self,
        mut tag_id: TagId,
        at: Position,
    ) -> Result<(TagId, EndTagState), Interrupt> {
        let Some(top) = self.stack.last() else {
            return Ok((tag_id, EndTagState::Unmatched));
        };

        if self.policy.is_wildcard_end_tag(&tag_id) {
            tag_id = top.clone();
        }

        let landmark = self.policy.is_autoclosing_end_tag(&tag_id);

        let pop_state = if landmark {
            EndTagState::AutoclosedByAncestor
        } else {
            EndTagState::AutoclosedByParent
        };

        let mut target = None;

        for (depth, frame) in self.stack.iter().rev().enumerate() {
            if self.policy.is_same_element(frame, &tag_id) {
                target = Some(depth);
                break;
            }

            if landmark || self.policy.is_autoclosed_by_parent(frame) {
                continue;
            }

            // Neither the target nor closable over: the end tag stays
            // unmatched and nothing closes.
            break;
        }

        let Some(depth) = target else {
            return Ok((tag_id, EndTagState::Unmatched));
        };

        for _ in 0..depth {
            let id = self.stack.pop().unwrap_or_else(|| unreachable!());

            self.synthesize_end_tag(id, at, pop_state)?;
        }

        self.stack.pop();

        Ok((tag_id, EndTagState::Matched))
    }

    /// A new start tag may close currently open elements before it opens.
    fn autoclose_siblings(&mut self, new_id: &TagId, at: Position) -> Result<(), Interrupt> {
        let found = self
            .stack
            .iter()
            .rev()
            .position(|open| self.policy.is_autoclosing_sibling(open, new_id));

        if let Some(depth) = found {
            for _ in 0..=depth {
                let id = self.stack.pop().unwrap_or_else(|| unreachable!());

                self.synthesize_end_tag(id, at, EndTagState::AutoclosedBySibling)?;
            }
        }

        Ok(())
    }

    /// Skips the raw body of an opaque element, leaving `pos` just before
    /// the matching end tag (or at the end of input) so the body becomes a
    /// single text run.
    fn scan_opaque_body(&mut self, id: &TagId, from: Position) {
        let len = self.doc.len();
        let mut search = from;

        loop {
            let lt = self.doc.find_seq(b"</", search);

            if lt == NPOS {
                self.pos = len;
                return;
            }

            // Clamped; out of range only if the contract is already broken.
            let candidate = (lt + 2).min(len);
            let name_start = self.policy.element_name_start(&self.doc, candidate);

            if name_start == NPOS {
                search = lt + 1;
                continue;
            }

            let name_end = self.element_name_end(name_start);

            if name_end >= len {
                self.pos = len;
                return;
            }

            let candidate_id = self
                .policy
                .tag_id(self.doc.text(Range::new(name_start, name_end)));

            if self.policy.is_same_element(&candidate_id, id) {
                self.pos = lt;
                return;
            }

            search = lt + 1;
        }
    }

    /// Structural truncation: the final `end_of_input` has already been
    /// owed; deliver it with the stack as it stands and stop.
    fn truncate(&mut self) -> Result<(), Interrupt> {
        let len = self.doc.len();

        self.anchor = len;
        self.pos = len;
        self.emit_end_of_input()?;

        Err(Interrupt::Stop)
    }

    /// Clean end of input: autoclose the by-parent tail, then report the
    /// elements still open.
    fn finish(&mut self) -> Result<(), Interrupt> {
        let at = self.doc.len();

        while let Some(top) = self.stack.last() {
            if !self.policy.is_autoclosed_by_parent(top) {
                break;
            }

            let id = self.stack.pop().unwrap_or_else(|| unreachable!());

            self.synthesize_end_tag(id, at, EndTagState::AutoclosedByParent)?;
        }

        self.emit_end_of_input()
    }

    fn synthesize_end_tag(
        &mut self,
        tag_id: TagId,
        at: Position,
        state: EndTagState,
    ) -> Result<(), Interrupt> {
        let prefix = TagPrefix {
            tag_id,
            name: Range::empty_at(at),
            all: Range::empty_at(at),
        };

        self.emit_end_tag_prefix(&prefix)?;

        let tag = EndTag::from_prefix(prefix, Range::empty_at(at), state);

        self.emit_end_tag(&tag)
    }

    fn scan_start_tag_attributes(&mut self, from: Position) -> Result<Position, Interrupt> {
        let doc = self.doc;
        let policy = &self.policy;
        let handler = &mut self.handler;

        scan_attributes(&doc, policy, from, &mut |attribute| {
            trace!(@event attribute);
            checked(handler.start_tag_attribute(&doc, &attribute))
        })
    }

    fn scan_end_tag_attributes(&mut self, from: Position) -> Result<Position, Interrupt> {
        let doc = self.doc;
        let policy = &self.policy;
        let handler = &mut self.handler;

        scan_attributes(&doc, policy, from, &mut |attribute| {
            trace!(@event attribute);
            checked(handler.end_tag_attribute(&doc, &attribute))
        })
    }

    #[inline]
    fn self_closing_policy_for(&self, id: &TagId) -> SelfClosingPolicy {
        if self.policy.is_void_element(id) {
            SelfClosingPolicy::Required
        } else if self.policy.is_content_element(id) {
            SelfClosingPolicy::Prohibited
        } else {
            SelfClosingPolicy::Allowed
        }
    }

    /// First position at or after `from` holding a space, `/` or `>`;
    /// the document length when the name runs off the end.
    fn element_name_end(&self, from: Position) -> Position {
        let bytes = self.doc.as_str().as_bytes();
        let mut pos = from;

        while pos < bytes.len() {
            let ch = bytes[pos];

            if ch == b'>' || ch == b'/' || self.policy.is_space(ch) {
                return pos;
            }

            pos += 1;
        }

        pos
    }

    fn flush_text(&mut self, until: Position) -> Result<(), Interrupt> {
        if until > self.anchor {
            self.emit_text(Range::new(self.anchor, until))?;
        }

        Ok(())
    }

    fn emit_text(&mut self, range: Range) -> Result<(), Interrupt> {
        trace!(@event range);

        let doc = self.doc;

        checked(self.handler.text(&doc, range))
    }

    fn emit_start_tag_prefix(&mut self, prefix: &TagPrefix) -> Result<(), Interrupt> {
        trace!(@event prefix);

        let doc = self.doc;

        checked(self.handler.start_tag_prefix(&doc, prefix))
    }

    fn emit_start_tag(&mut self, tag: &StartTag) -> Result<(), Interrupt> {
        trace!(@event tag);

        let doc = self.doc;

        checked(self.handler.start_tag(&doc, tag))
    }

    fn emit_end_tag_prefix(&mut self, prefix: &TagPrefix) -> Result<(), Interrupt> {
        trace!(@event prefix);

        let doc = self.doc;

        checked(self.handler.end_tag_prefix(&doc, prefix))
    }

    fn emit_end_tag(&mut self, tag: &EndTag) -> Result<(), Interrupt> {
        trace!(@event tag);

        let doc = self.doc;

        checked(self.handler.end_tag(&doc, tag))
    }

    fn emit_end_of_input(&mut self) -> Result<(), Interrupt> {
        let doc = self.doc;

        checked(self.handler.end_of_input(&doc, &self.stack))
    }
}

/// Tokenizes `source` in one call, driving `handler` with every event.
///
/// Equivalent to constructing a [`Tokenizer`] and calling
/// [`parse`](Tokenizer::parse) once.
pub fn parse<P: Policy, H: Handler>(
    source: &str,
    policy: P,
    handler: H,
) -> Result<(), ParsingError> {
    Tokenizer::new(source, policy, handler).parse()
}
