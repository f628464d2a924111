use super::{Position, Range, NPOS};
use crate::entities;
use memchr::{memchr, memmem};
use std::borrow::Cow;
use std::fmt::{self, Debug};

/// A borrowed view of the source document with byte-offset accessors.
///
/// All scanning is byte-wise; multi-byte UTF-8 sequences pass through
/// untouched because every delimiter class is pure ASCII, so range
/// boundaries always land on character boundaries.
#[derive(Copy, Clone)]
pub struct Document<'i> {
    text: &'i str,
}

impl<'i> Document<'i> {
    #[inline]
    pub fn new(text: &'i str) -> Self {
        Document { text }
    }

    #[inline]
    pub fn len(&self) -> usize {
        self.text.len()
    }

    #[inline]
    pub fn is_empty(&self) -> bool {
        self.text.is_empty()
    }

    #[inline]
    pub fn as_str(&self) -> &'i str {
        self.text
    }

    #[inline]
    pub fn byte(&self, pos: Position) -> Option<u8> {
        self.text.as_bytes().get(pos).copied()
    }

    #[inline]
    pub fn starts_with(&self, pos: Position, prefix: &[u8]) -> bool {
        pos <= self.len() && self.text.as_bytes()[pos..].starts_with(prefix)
    }

    /// Position of the first occurrence of `byte` at or after `from`,
    /// `NPOS` if there is none.
    #[inline]
    pub fn find_byte(&self, byte: u8, from: Position) -> Position {
        if from >= self.len() {
            return NPOS;
        }

        match memchr(byte, &self.text.as_bytes()[from..]) {
            Some(offset) => from + offset,
            None => NPOS,
        }
    }

    /// Position of the first occurrence of `seq` at or after `from`,
    /// `NPOS` if there is none.
    #[inline]
    pub fn find_seq(&self, seq: &[u8], from: Position) -> Position {
        if from >= self.len() {
            return NPOS;
        }

        match memmem::find(&self.text.as_bytes()[from..], seq) {
            Some(offset) => from + offset,
            None => NPOS,
        }
    }

    /// The source text delimited by `range`.
    ///
    /// An incomplete range yields everything from its start to the end of
    /// the document (the best-known extent); an empty range yields `""`.
    pub fn text(&self, range: Range) -> &'i str {
        if range.start == NPOS {
            return "";
        }

        let start = range.start.min(self.len());
        let end = if range.is_complete() {
            range.end.min(self.len())
        } else {
            self.len()
        };

        &self.text[start..end]
    }

    /// Entity-decoded source text delimited by `range`.
    ///
    /// For a CDATA range the `<![CDATA[` / `]]>` fences are stripped first
    /// (no entity decoding happens inside CDATA).
    pub fn decoded_text(&self, range: Range) -> Cow<'i, str> {
        let raw = self.text(range);

        if let Some(fenced) = raw.strip_prefix("<![CDATA[") {
            return Cow::Borrowed(fenced.strip_suffix("]]>").unwrap_or(fenced));
        }

        entities::decode(raw)
    }

    /// Splits the name delimited by `range` on its first `:` into
    /// `(prefix, local_name)`; the prefix is `""` when there is no colon.
    pub fn qualified_name(&self, range: Range) -> (&'i str, &'i str) {
        let name = self.text(range);

        match name.split_once(':') {
            Some((prefix, local)) => (prefix, local),
            None => ("", name),
        }
    }
}

impl Debug for Document<'_> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "`{}`", self.text)
    }
}
