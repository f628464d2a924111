use super::TagPrefix;
use crate::base::{Document, Range};
use crate::policy::TagId;
use std::fmt::{self, Debug};

/// What the policy allows a start tag's self-closing marker to mean.
#[derive(Copy, Clone, Eq, PartialEq, Debug)]
pub enum SelfClosingPolicy {
    /// The marker decides (XML-style elements).
    Allowed,
    /// The marker is ignored; the tag always opens (HTML content elements).
    Prohibited,
    /// The tag never opens, marker or not (HTML void elements).
    Required,
}

/// Whether the literal `/` appeared immediately before `>`.
#[derive(Copy, Clone, Eq, PartialEq, Debug)]
pub enum SelfClosingMarker {
    Absent,
    Present,
}

/// A complete start tag, reported after all of its attributes.
#[derive(Clone)]
pub struct StartTag {
    pub tag_id: TagId,
    pub name: Range,
    pub all: Range,
    pub self_closing_policy: SelfClosingPolicy,
    pub self_closing_marker: SelfClosingMarker,
}

impl StartTag {
    pub(crate) fn from_prefix(
        prefix: TagPrefix,
        all: Range,
        self_closing_policy: SelfClosingPolicy,
        self_closing_marker: SelfClosingMarker,
    ) -> Self {
        StartTag {
            tag_id: prefix.tag_id,
            name: prefix.name,
            all,
            self_closing_policy,
            self_closing_marker,
        }
    }

    /// Whether this tag opens no element.
    #[inline]
    pub fn is_self_closing(&self) -> bool {
        match self.self_closing_policy {
            SelfClosingPolicy::Required => true,
            SelfClosingPolicy::Prohibited => false,
            SelfClosingPolicy::Allowed => self.self_closing_marker == SelfClosingMarker::Present,
        }
    }

    #[inline]
    pub fn name_text<'i>(&self, doc: &Document<'i>) -> &'i str {
        doc.text(self.name)
    }
}

impl Debug for StartTag {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("StartTag")
            .field("tag_id", &self.tag_id)
            .field("name", &self.name)
            .field("all", &self.all)
            .field("self_closing", &self.is_self_closing())
            .finish()
    }
}
