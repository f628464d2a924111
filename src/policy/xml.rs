use super::{Policy, TagId};

/// XML-style policy: case-sensitive names kept verbatim, no void, opaque or
/// autoclose rules of any kind.
#[derive(Copy, Clone, Default, Debug)]
pub struct XmlPolicy;

impl Policy for XmlPolicy {
    fn tag_id(&self, name: &str) -> TagId {
        if name.is_empty() {
            TagId::Unknown
        } else {
            TagId::Name(name.into())
        }
    }
}
