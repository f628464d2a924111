use crate::base::{Document, Range};
use std::fmt::{self, Debug};

/// A single attribute discovered inside a start or end tag.
///
/// `value` is empty (anchored at the name end) for value-less attributes and
/// incomplete for values whose closing quote or terminator was never found.
/// `all` spans from the first name byte through the byte after the value.
#[derive(Copy, Clone, Eq, PartialEq)]
pub struct Attribute {
    pub name: Range,
    pub value: Range,
    pub all: Range,
}

impl Attribute {
    #[inline]
    pub fn name_text<'i>(&self, doc: &Document<'i>) -> &'i str {
        doc.text(self.name)
    }

    #[inline]
    pub fn value_text<'i>(&self, doc: &Document<'i>) -> &'i str {
        doc.text(self.value)
    }
}

impl Debug for Attribute {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("Attribute")
            .field("name", &self.name)
            .field("value", &self.value)
            .field("all", &self.all)
            .finish()
    }
}
