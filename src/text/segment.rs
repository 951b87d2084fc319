use icu_properties::{
    CodePointMapData, CodePointMapDataBorrowed, CodePointSetData, CodePointSetDataBorrowed,
    props::{GeneralCategory, Ideographic},
};

/// Split `text` into words, where a run of non-separator codepoints is one
/// word and every separator codepoint is its own single-codepoint word.
///
/// Concatenating the returned segments reproduces the input exactly.
/// Consecutive separators are not merged.
pub fn segment(text: &str, is_separator: impl Fn(char) -> bool) -> Vec<String> {
    let mut segments = Vec::<String>::new();
    let mut last_sep = false;
    for c in text.chars() {
        if is_separator(c) {
            segments.push(c.to_string());
            last_sep = true;
            continue;
        }
        match segments.last_mut() {
            Some(last) if !last_sep => last.push(c),
            _ => segments.push(c.to_string()),
        }
        last_sep = false;
    }
    segments
}

/// Codepoint classification backing the production separator predicate.
///
/// A separator is an ideographic codepoint or a space-category codepoint
/// (Zs, Zl, Zp).
pub struct SeparatorClasses {
    ideographic: CodePointSetDataBorrowed<'static>,
    categories: CodePointMapDataBorrowed<'static, GeneralCategory>,
}

impl Default for SeparatorClasses {
    fn default() -> Self {
        Self::new()
    }
}

impl SeparatorClasses {
    /// Construct classification tables with ICU data baked in.
    pub fn new() -> Self {
        Self {
            ideographic: CodePointSetData::new::<Ideographic>(),
            categories: CodePointMapData::<GeneralCategory>::new(),
        }
    }

    /// Whether `c` is a word-break codepoint.
    pub fn is_separator(&self, c: char) -> bool {
        if self.ideographic.contains(c) {
            return true;
        }
        matches!(
            self.categories.get(c),
            GeneralCategory::SpaceSeparator
                | GeneralCategory::LineSeparator
                | GeneralCategory::ParagraphSeparator
        )
    }
}

/// Split `text` at spaces and ideographic characters.
pub fn split_words(text: &str) -> Vec<String> {
    let classes = SeparatorClasses::new();
    segment(text, |c| classes.is_separator(c))
}

#[cfg(test)]
#[path = "../../tests/unit/text/segment.rs"]
mod tests;
