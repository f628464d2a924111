use crate::base::{Document, Range};
use crate::policy::TagId;
use std::fmt::{self, Debug};

/// The leading part of a tag, reported as soon as the name is known and
/// before any attributes are scanned.
///
/// `all` spans from the `<` (or `</`) through the end of the name, the
/// extent known at the time the event fires.
#[derive(Clone)]
pub struct TagPrefix {
    pub tag_id: TagId,
    pub name: Range,
    pub all: Range,
}

impl TagPrefix {
    #[inline]
    pub fn name_text<'i>(&self, doc: &Document<'i>) -> &'i str {
        doc.text(self.name)
    }
}

impl Debug for TagPrefix {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("TagPrefix")
            .field("tag_id", &self.tag_id)
            .field("name", &self.name)
            .field("all", &self.all)
            .finish()
    }
}
