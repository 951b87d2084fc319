const LEFT_DELIMITER: &str = "\\u{";
const RIGHT_DELIMITER: &str = "}";

/// Result of splitting a string around one delimited region.
enum Partition<'a> {
    /// The string contains a complete `left .. right` delimited region.
    Split {
        before: &'a str,
        inner: &'a str,
        after: &'a str,
    },
    /// No complete delimited region remains.
    Unsplittable { original: &'a str },
}

/// Unescape unicode escapes of the form `\u{XXXX}` where `XXXX` is a
/// codepoint in hexadecimal form.
///
/// Any portion that cannot be converted is left untouched, including the
/// delimiters around it.
pub fn unescape_unicode(escaped: &str) -> String {
    let mut out = String::with_capacity(escaped.len());
    let mut input = escaped;
    loop {
        match partition(input, LEFT_DELIMITER, RIGHT_DELIMITER) {
            Partition::Split {
                before,
                inner,
                after,
            } => {
                out.push_str(before);
                match codepoint_from_hex(inner) {
                    Some(c) => out.push(c),
                    None => {
                        out.push_str(LEFT_DELIMITER);
                        out.push_str(inner);
                        out.push_str(RIGHT_DELIMITER);
                    }
                }
                input = after;
            }
            Partition::Unsplittable { original } => {
                out.push_str(original);
                break;
            }
        }
    }
    out
}

/// Parse `input` as a hexadecimal codepoint and convert it to a character.
fn codepoint_from_hex(input: &str) -> Option<char> {
    let code = u32::from_str_radix(input, 16).ok()?;
    let c = char::from_u32(code);
    if c.is_none() {
        tracing::warn!(code, "invalid string code point");
    }
    c
}

fn partition<'a>(input: &'a str, left: &str, right: &str) -> Partition<'a> {
    let Some(index_left) = input.find(left) else {
        return Partition::Unsplittable { original: input };
    };
    let rest = &input[index_left + left.len()..];
    let Some(index_right) = rest.find(right) else {
        return Partition::Unsplittable { original: input };
    };
    Partition::Split {
        before: &input[..index_left],
        inner: &rest[..index_right],
        after: &rest[index_right + right.len()..],
    }
}

#[cfg(test)]
#[path = "../../tests/unit/text/escape.rs"]
mod tests;
