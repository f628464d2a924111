use super::Interrupt;
use crate::base::{Document, Position, Range, NPOS};
use crate::events::Attribute;
use crate::policy::Policy;

#[inline]
fn is_attribute_space<P: Policy>(policy: &P, ch: u8) -> bool {
    // A stray `/` between attributes is whitespace; inside an unquoted
    // value it's part of the value.
    policy.is_space(ch) || ch == b'/'
}

#[inline]
fn is_attribute_name_end<P: Policy>(policy: &P, ch: u8) -> bool {
    is_attribute_space(policy, ch) || ch == b'>' || ch == b'='
}

#[inline]
fn is_attribute_value_end<P: Policy>(policy: &P, ch: u8) -> bool {
    policy.is_space(ch) || ch == b'>'
}

/// Scans the attribute region of a tag, starting just past the tag name.
///
/// Each attribute is reported through `emit` in source order. Returns the
/// position where the tag body ends: the closing `>`, or the `/` of `/>`
/// (the caller consumes the close), or `NPOS` when the source runs out
/// first.
pub(super) fn scan_attributes<P, F>(
    doc: &Document<'_>,
    policy: &P,
    from: Position,
    emit: &mut F,
) -> Result<Position, Interrupt>
where
    P: Policy,
    F: FnMut(Attribute) -> Result<(), Interrupt>,
{
    let bytes = doc.as_str().as_bytes();
    let len = bytes.len();
    let mut pos = from;

    loop {
        while pos < len && is_attribute_space(policy, bytes[pos]) {
            pos += 1;
        }

        if pos >= len {
            return Ok(NPOS);
        }

        if bytes[pos] == b'>' {
            // NOTE: a `/` glued to the `>` is the self-closing marker; back
            // up so the caller sees it.
            if pos > from && bytes[pos - 1] == b'/' {
                pos -= 1;
            }

            return Ok(pos);
        }

        let name_start = pos;

        while pos < len && !is_attribute_name_end(policy, bytes[pos]) {
            pos += 1;
        }

        let name = Range::new(name_start, pos);

        if pos >= len {
            emit(Attribute {
                name,
                value: Range::empty_at(name.end),
                all: name,
            })?;

            return Ok(NPOS);
        }

        if bytes[pos] == b'>' {
            // Value-less attribute at the tag close.
            emit(Attribute {
                name,
                value: Range::empty_at(name.end),
                all: name,
            })?;

            return Ok(pos);
        }

        // Peek past ordinary spaces for a `=`; `/` does not count here.
        let mut probe = pos;

        while probe < len && policy.is_space(bytes[probe]) {
            probe += 1;
        }

        if probe >= len {
            emit(Attribute {
                name,
                value: Range::empty_at(name.end),
                all: name,
            })?;

            return Ok(NPOS);
        }

        if bytes[probe] != b'=' {
            // Value-less attribute; rescan from the probe point.
            emit(Attribute {
                name,
                value: Range::empty_at(name.end),
                all: name,
            })?;

            pos = probe;
            continue;
        }

        probe += 1;

        while probe < len && policy.is_space(bytes[probe]) {
            probe += 1;
        }

        if probe >= len {
            // `name=` and then nothing.
            emit(Attribute {
                name,
                value: Range::incomplete_from(probe),
                all: Range::incomplete_from(name_start),
            })?;

            return Ok(NPOS);
        }

        let value = match bytes[probe] {
            quote @ (b'"' | b'\'') => {
                let value_start = probe + 1;
                let closing = doc.find_byte(quote, value_start);

                if closing == NPOS {
                    emit(Attribute {
                        name,
                        value: Range::incomplete_from(value_start),
                        all: Range::incomplete_from(name_start),
                    })?;

                    return Ok(NPOS);
                }

                pos = closing + 1;

                Range::new(value_start, closing)
            }
            _ => {
                let value_start = probe;
                let mut value_end = probe;

                while value_end < len && !is_attribute_value_end(policy, bytes[value_end]) {
                    value_end += 1;
                }

                pos = value_end;

                Range::new(value_start, value_end)
            }
        };

        emit(Attribute {
            name,
            value,
            all: Range::new(name_start, pos),
        })?;

        if pos >= len {
            return Ok(NPOS);
        }

        if bytes[pos] == b'>' {
            // Unquoted value terminated by the tag close itself.
            return Ok(pos);
        }
    }
}
