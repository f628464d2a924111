//! Standard element names contain only ASCII alpha characters and the
//! digits 1 to 6 (numbered headers), and name comparison is case-insensitive.
//! That is 32 distinct characters, so each one fits in 5 bits and up to
//! 64 / 5 ≈ 12 characters pack into a single u64. Comparing interned names
//! is then an integer comparison instead of a string one.
//!
//! Digits occupy codes 0 to 5 and alphas 6 to 31. Putting alphas first
//! would make repeated `a` characters ambiguous (`a`, `aaa` and `aaaaa`
//! would all hash to 0); a name can't start with a digit, so leading-zero
//! codes are safe in this arrangement.

use super::Tag;

/// Packed representation of a short ASCII element name.
///
/// `None` means the name was too long or contained a character outside the
/// packable set, and the textual form must be used instead.
#[derive(Copy, Clone, Eq, PartialEq, Hash, Debug, Default)]
pub struct NameHash(Option<u64>);

impl NameHash {
    #[inline]
    pub fn new() -> Self {
        NameHash(Some(0))
    }

    #[inline]
    pub fn empty() -> Self {
        NameHash::default()
    }

    #[inline]
    pub fn is_empty(&self) -> bool {
        self.0.is_none()
    }

    #[inline]
    pub fn update(&mut self, ch: u8) {
        if let Some(h) = self.0 {
            // Check that there is room for another 5-bit code; the first
            // character of a name can't encode to 0b00000, so a non-zero
            // high group always means the hash is full.
            self.0 = if h >> (64 - 5) == 0 {
                match ch {
                    // The 0x1F mask folds character case and yields 1..=26;
                    // shifting by the 6 reserved digit codes gives 6..=31.
                    b'a'..=b'z' | b'A'..=b'Z' => Some((h << 5) | ((u64::from(ch) & 0x1F) + 5)),

                    // Digits 1..=6 map to codes 0..=5.
                    b'1'..=b'6' => Some((h << 5) | ((u64::from(ch) & 0x0F) - 1)),

                    _ => None,
                }
            } else {
                None
            };
        }
    }
}

impl From<&str> for NameHash {
    #[inline]
    fn from(name: &str) -> Self {
        let mut hash = NameHash::new();

        for ch in name.bytes() {
            hash.update(ch);
        }

        hash
    }
}

impl PartialEq<Tag> for NameHash {
    #[inline]
    fn eq(&self, tag: &Tag) -> bool {
        match self.0 {
            Some(h) => *tag as u64 == h,
            None => false,
        }
    }
}
