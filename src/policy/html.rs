use super::{NameHash, Policy, Tag, TagId};
use crate::base::{Document, Position, NPOS};

/// HTML5-style policy: case-insensitive names (normalized by lowercasing),
/// void and raw-text elements per the HTML element tables, and the
/// optional-tags autoclose rules.
#[derive(Copy, Clone, Default, Debug)]
pub struct HtmlPolicy;

#[inline]
fn hash_of(id: &TagId) -> Option<NameHash> {
    match id {
        TagId::Hash(hash) => Some(*hash),
        _ => None,
    }
}

#[inline]
fn is_void(hash: NameHash) -> bool {
    tag_is_one_of!(
        hash,
        [Area, Base, Br, Col, Embed, Hr, Img, Input, Link, Meta, Source, Track, Wbr]
    )
}

// script/style plus the elements whose bodies the HTML tokenizer reads as
// RAWTEXT or RCDATA; none of them parse markup inside.
#[inline]
fn is_opaque(hash: NameHash) -> bool {
    tag_is_one_of!(
        hash,
        [Script, Style, Textarea, Title, Xmp, Iframe, Noembed, Noframes, Plaintext]
    )
}

#[inline]
fn is_autoclosed_by_parent(hash: NameHash) -> bool {
    tag_is_one_of!(
        hash,
        [
            Body, Caption, Colgroup, Dd, Dt, Head, Html, Li, Optgroup, Option, P, Rb, Rp, Rt,
            Rtc, Tbody, Td, Tfoot, Th, Thead, Tr
        ]
    )
}

// The block-level set whose start tags implicitly close an open `p`.
#[inline]
fn closes_p(hash: NameHash) -> bool {
    tag_is_one_of!(
        hash,
        [
            Address, Article, Aside, Blockquote, Details, Dialog, Div, Dl, Fieldset, Figcaption,
            Figure, Footer, Form, H1, H2, H3, H4, H5, H6, Header, Hgroup, Hr, Main, Menu, Nav,
            Ol, P, Pre, Section, Table, Ul
        ]
    )
}

impl Policy for HtmlPolicy {
    // An HTML tag name opens with an ASCII letter; `<1>` stays text. This
    // also keeps digit-only names out of NameHash, where a run of `1`s
    // would pack to the same value as an empty name.
    #[inline]
    fn element_name_start(&self, doc: &Document<'_>, pos: Position) -> Position {
        match doc.byte(pos) {
            Some(ch) if ch.is_ascii_alphabetic() => pos,
            _ => NPOS,
        }
    }

    fn tag_id(&self, name: &str) -> TagId {
        if name.is_empty() {
            return TagId::Unknown;
        }

        let hash = NameHash::from(name);

        if hash.is_empty() {
            TagId::Name(name.to_ascii_lowercase().into_boxed_str())
        } else {
            TagId::Hash(hash)
        }
    }

    #[inline]
    fn is_void_element(&self, id: &TagId) -> bool {
        hash_of(id).is_some_and(is_void)
    }

    // HTML ignores the self-closing marker on everything that isn't void,
    // including unrecognized elements.
    #[inline]
    fn is_content_element(&self, id: &TagId) -> bool {
        !id.is_unknown() && !self.is_void_element(id)
    }

    #[inline]
    fn is_opaque_element(&self, id: &TagId) -> bool {
        hash_of(id).is_some_and(is_opaque)
    }

    fn is_autoclosing_sibling(&self, open: &TagId, new: &TagId) -> bool {
        let (Some(open), Some(new)) = (hash_of(open), hash_of(new)) else {
            return false;
        };

        if open == Tag::Li {
            new == Tag::Li
        } else if tag_is_one_of!(open, [Dd, Dt]) {
            tag_is_one_of!(new, [Dd, Dt])
        } else if open == Tag::P {
            closes_p(new)
        } else if open == Tag::Option {
            tag_is_one_of!(new, [Option, Optgroup])
        } else if open == Tag::Optgroup {
            new == Tag::Optgroup
        } else if open == Tag::Tr {
            new == Tag::Tr
        } else if tag_is_one_of!(open, [Td, Th]) {
            tag_is_one_of!(new, [Td, Th])
        } else if tag_is_one_of!(open, [Thead, Tbody, Tfoot]) {
            tag_is_one_of!(new, [Thead, Tbody, Tfoot])
        } else if tag_is_one_of!(open, [Rb, Rp, Rt, Rtc]) {
            tag_is_one_of!(new, [Rb, Rp, Rt, Rtc])
        } else if tag_is_one_of!(open, [Caption, Colgroup]) {
            tag_is_one_of!(new, [Caption, Colgroup])
        } else {
            false
        }
    }

    #[inline]
    fn is_autoclosed_by_parent(&self, id: &TagId) -> bool {
        hash_of(id).is_some_and(is_autoclosed_by_parent)
    }

    // End tags that delimit whole regions: matching one closes everything
    // still open inside it.
    #[inline]
    fn is_autoclosing_end_tag(&self, id: &TagId) -> bool {
        hash_of(id).is_some_and(|hash| tag_is_one_of!(hash, [Table, Select, Body, Html]))
    }
}
