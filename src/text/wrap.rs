#[derive(Clone, Debug, PartialEq, Eq)]
/// Wrapped text block: the line set plus the widest line's pixel width.
pub struct WrapResult {
    /// Wrapped lines in order; always contains at least one line.
    pub lines: Vec<String>,
    /// Measured width of the widest line in pixels.
    ///
    /// Falls back to the configured width limit when no line ever reached
    /// nonzero width, so downstream canvas allocation never sees zero.
    pub max_line_width: i32,
}

/// Greedily pack `words` into lines under `width_limit`.
///
/// A word is appended to the current line while the candidate line measures
/// strictly under the limit; otherwise it starts a brand-new line. A single
/// word wider than the limit is kept whole and allowed to overflow. Words are
/// never moved once placed and lines are never rebalanced.
pub fn wrap<F>(words: &[String], mut measure: F, width_limit: i32) -> WrapResult
where
    F: FnMut(&str) -> i32,
{
    let mut lines = vec![String::new()];
    let mut longest = 0;
    for word in words {
        let candidate = match lines.last() {
            Some(last) => format!("{last}{word}"),
            None => word.clone(),
        };
        let w = measure(&candidate);
        if w < width_limit {
            longest = longest.max(w);
            if let Some(last) = lines.last_mut() {
                *last = candidate;
            }
        } else {
            lines.push(word.clone());
        }
    }
    if longest == 0 {
        tracing::warn!("got no maximum line length");
        longest = width_limit;
    }
    WrapResult {
        lines,
        max_line_width: longest,
    }
}

#[cfg(test)]
#[path = "../../tests/unit/text/wrap.rs"]
mod tests;
