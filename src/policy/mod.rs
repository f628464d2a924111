#[macro_use]
mod tag;

mod html;
mod name_hash;
mod xml;

use crate::base::{Document, Position, NPOS};
use std::fmt::{self, Debug};

pub use self::html::HtmlPolicy;
pub use self::name_hash::NameHash;
pub use self::tag::Tag;
pub use self::xml::XmlPolicy;

/// An element identifier produced by a policy from a source name.
///
/// Short packable names intern as a [`NameHash`]; everything else is carried
/// as the (policy-normalized) text. `Unknown` is the canonical value for a
/// missing or invalid name and never compares equal to anything under the
/// default [`Policy::is_same_element`].
#[derive(Clone, Eq, PartialEq, Hash)]
pub enum TagId {
    Hash(NameHash),
    Name(Box<str>),
    Unknown,
}

impl TagId {
    #[inline]
    pub fn is_unknown(&self) -> bool {
        matches!(self, TagId::Unknown)
    }
}

impl Debug for TagId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            TagId::Hash(hash) => write!(f, "TagId::Hash({hash:?})"),
            TagId::Name(name) => write!(f, "TagId::Name(`{name}`)"),
            TagId::Unknown => write!(f, "TagId::Unknown"),
        }
    }
}

/// Per-element variability decisions consumed by the tokenizer.
///
/// Implementations must be pure: repeated calls on the same input return the
/// same answer, and no method observes parser state. A single policy value is
/// read-only and may be shared across concurrent parser invocations.
pub trait Policy {
    /// The character set treated as ASCII whitespace.
    #[inline]
    fn is_space(&self, ch: u8) -> bool {
        matches!(ch, b' ' | b'\t' | b'\n' | b'\r' | b'\x0c')
    }

    /// Returns `pos` if the character there is a legal element-name start,
    /// `NPOS` otherwise. A policy may instead skip leading whitespace here,
    /// which turns `< foo>` into a start tag.
    #[inline]
    fn element_name_start(&self, doc: &Document<'_>, pos: Position) -> Position {
        match doc.byte(pos) {
            Some(ch) if ch.is_ascii_alphanumeric() => pos,
            _ => NPOS,
        }
    }

    /// Maps a source name to an element id. This is the only case-folding
    /// point in the tokenizer.
    fn tag_id(&self, name: &str) -> TagId;

    /// Element-id equality. May be looser than [`TagId`] equality, but the
    /// default never matches `Unknown`, not even against itself.
    #[inline]
    fn is_same_element(&self, a: &TagId, b: &TagId) -> bool {
        !a.is_unknown() && a == b
    }

    /// The start tag is implicitly self-closing.
    #[inline]
    fn is_void_element(&self, _id: &TagId) -> bool {
        false
    }

    /// The self-closing marker is ignored; the tag always opens.
    #[inline]
    fn is_content_element(&self, _id: &TagId) -> bool {
        false
    }

    /// After the start tag, bytes are scanned raw for the matching end tag
    /// without further markup parsing.
    #[inline]
    fn is_opaque_element(&self, _id: &TagId) -> bool {
        false
    }

    /// Seeing `<new>` while `open` is on the stack closes `open`.
    #[inline]
    fn is_autoclosing_sibling(&self, _open: &TagId, _new: &TagId) -> bool {
        false
    }

    /// When the parent closes (or at end of input), this element auto-closes
    /// if still open.
    #[inline]
    fn is_autoclosed_by_parent(&self, _id: &TagId) -> bool {
        false
    }

    /// This end tag adopts the top-of-stack id.
    #[inline]
    fn is_wildcard_end_tag(&self, _id: &TagId) -> bool {
        false
    }

    /// Matching this end tag closes every contained open element, not just
    /// the immediate child.
    #[inline]
    fn is_autoclosing_end_tag(&self, _id: &TagId) -> bool {
        false
    }
}

impl<P: Policy + ?Sized> Policy for &P {
    #[inline]
    fn is_space(&self, ch: u8) -> bool {
        (**self).is_space(ch)
    }

    #[inline]
    fn element_name_start(&self, doc: &Document<'_>, pos: Position) -> Position {
        (**self).element_name_start(doc, pos)
    }

    #[inline]
    fn tag_id(&self, name: &str) -> TagId {
        (**self).tag_id(name)
    }

    #[inline]
    fn is_same_element(&self, a: &TagId, b: &TagId) -> bool {
        (**self).is_same_element(a, b)
    }

    #[inline]
    fn is_void_element(&self, id: &TagId) -> bool {
        (**self).is_void_element(id)
    }

    #[inline]
    fn is_content_element(&self, id: &TagId) -> bool {
        (**self).is_content_element(id)
    }

    #[inline]
    fn is_opaque_element(&self, id: &TagId) -> bool {
        (**self).is_opaque_element(id)
    }

    #[inline]
    fn is_autoclosing_sibling(&self, open: &TagId, new: &TagId) -> bool {
        (**self).is_autoclosing_sibling(open, new)
    }

    #[inline]
    fn is_autoclosed_by_parent(&self, id: &TagId) -> bool {
        (**self).is_autoclosed_by_parent(id)
    }

    #[inline]
    fn is_wildcard_end_tag(&self, id: &TagId) -> bool {
        (**self).is_wildcard_end_tag(id)
    }

    #[inline]
    fn is_autoclosing_end_tag(&self, id: &TagId) -> bool {
        (**self).is_autoclosing_end_tag(id)
    }
}
