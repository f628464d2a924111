mod document;
mod range;

pub use self::document::Document;
pub use self::range::{Position, Range, NPOS};
