mod attribute;
mod end_tag;
mod start_tag;
mod tag_prefix;

pub use self::attribute::Attribute;
pub use self::end_tag::{EndTag, EndTagState};
pub use self::start_tag::{SelfClosingMarker, SelfClosingPolicy, StartTag};
pub use self::tag_prefix::TagPrefix;
