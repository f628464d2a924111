use super::TagPrefix;
use crate::base::{Document, Range};
use crate::policy::TagId;
use std::fmt::{self, Debug};

/// How an end tag (source-present or synthesized) relates to the
/// open-element stack.
#[derive(Copy, Clone, Eq, PartialEq, Debug)]
pub enum EndTagState {
    /// No open element matched; nothing was popped.
    Unmatched,
    /// Matched the element it closes.
    Matched,
    /// Synthesized because the parent closed or the input ended.
    AutoclosedByParent,
    /// Synthesized because a sibling start tag forced the close.
    AutoclosedBySibling,
    /// Synthesized because a landmark end tag closed an ancestor.
    AutoclosedByAncestor,
}

/// An end tag. Synthesized autoclose end tags carry empty ranges anchored at
/// the position that caused them.
#[derive(Clone)]
pub struct EndTag {
    pub tag_id: TagId,
    pub name: Range,
    pub all: Range,
    pub state: EndTagState,
}

impl EndTag {
    pub(crate) fn from_prefix(prefix: TagPrefix, all: Range, state: EndTagState) -> Self {
        EndTag {
            tag_id: prefix.tag_id,
            name: prefix.name,
            all,
            state,
        }
    }

    #[inline]
    pub fn is_autoclosed(&self) -> bool {
        matches!(
            self.state,
            EndTagState::AutoclosedByParent
                | EndTagState::AutoclosedBySibling
                | EndTagState::AutoclosedByAncestor
        )
    }

    #[inline]
    pub fn name_text<'i>(&self, doc: &Document<'i>) -> &'i str {
        doc.text(self.name)
    }
}

impl Debug for EndTag {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("EndTag")
            .field("tag_id", &self.tag_id)
            .field("name", &self.name)
            .field("all", &self.all)
            .field("state", &self.state)
            .finish()
    }
}
