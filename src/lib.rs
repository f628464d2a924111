//! Customizable single-pass tokenizer for angle-bracket markup: HTML, XML
//! and the dialects in between.
//!
//! The tokenizer walks a complete in-memory document and drives an
//! application [`Handler`] with typed events (text runs, comments, CDATA,
//! processing instructions, declarations, tag prefixes, attributes, tags,
//! end of input) that delimit regions of the original source by byte
//! offset. A [`Policy`] value decides everything dialect-specific: name
//! normalization, void/content/opaque element classes and the autoclose
//! rules, so the same driver tokenizes strict XML and tag-soup HTML.
//!
//! This is deliberately not a conformant HTML5 parser: there is no tree
//! construction and no error recovery beyond what the policy encodes, and
//! input quirks (duplicate attributes, attributes on end tags, angle
//! brackets as text) are preserved rather than smoothed over.
//!
//! # Example
//!
//! ```
//! use landmarks::{parse, Document, Handler, HandlerResult, HtmlPolicy, Range, CONTINUE};
//!
//! #[derive(Default)]
//! struct TextDumper(String);
//!
//! impl Handler for TextDumper {
//!     fn text(&mut self, doc: &Document<'_>, text: Range) -> HandlerResult {
//!         self.0.push_str(doc.text(text));
//!         CONTINUE
//!     }
//! }
//!
//! let mut dumper = TextDumper::default();
//!
//! parse("<p>Hello, <b>markup</b>!", HtmlPolicy, &mut dumper).unwrap();
//!
//! assert_eq!(dumper.0, "Hello, markup!");
//! ```

#[macro_use]
mod debug_trace;

pub mod base;
pub mod entities;
pub mod errors;
pub mod events;
pub mod handler;
pub mod parser;
pub mod policy;

pub use self::base::{Document, Position, Range, NPOS};
pub use self::errors::{HandlerError, ParsingError};
pub use self::events::{
    Attribute, EndTag, EndTagState, SelfClosingMarker, SelfClosingPolicy, StartTag, TagPrefix,
};
pub use self::handler::{Directive, Handler, HandlerResult, CONTINUE};
pub use self::parser::{parse, Tokenizer};
pub use self::policy::{HtmlPolicy, NameHash, Policy, TagId, XmlPolicy};
