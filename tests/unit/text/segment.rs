use super::*;

fn is_ascii_space(c: char) -> bool {
    c == ' '
}

#[test]
fn empty_input_yields_no_segments() {
    assert!(segment("", is_ascii_space).is_empty());
    assert!(split_words("").is_empty());
}

#[test]
fn runs_and_separators_split_as_words() {
    assert_eq!(
        segment("ab cd", is_ascii_space),
        vec!["ab".to_string(), " ".to_string(), "cd".to_string()]
    );
}

#[test]
fn consecutive_separators_stay_separate() {
    assert_eq!(
        segment("a  b", is_ascii_space),
        vec!["a".to_string(), " ".to_string(), " ".to_string(), "b".to_string()]
    );
    assert_eq!(
        segment("  ", is_ascii_space),
        vec![" ".to_string(), " ".to_string()]
    );
}

#[test]
fn concatenation_round_trips() {
    for input in [
        "",
        "hello world",
        "  leading and  double",
        "汉字とかな mixed with latin",
        "emoji \u{2764}\u{263a} tail",
        "no separators at all",
    ] {
        assert_eq!(split_words(input).concat(), input);
    }
}

#[test]
fn every_segment_is_one_separator_or_separator_free() {
    let classes = SeparatorClasses::new();
    for word in split_words("汉字 abc  def\u{3000}ghi") {
        let seps = word.chars().filter(|&c| classes.is_separator(c)).count();
        if seps > 0 {
            assert_eq!(word.chars().count(), 1, "separator word {word:?} not single");
            assert_eq!(seps, 1);
        }
    }
}

#[test]
fn ideographic_codepoints_are_their_own_words() {
    assert_eq!(
        split_words("汉字"),
        vec!["汉".to_string(), "字".to_string()]
    );
}

// Space category means Zs/Zl/Zp; control whitespace is not a break point.
#[test]
fn control_whitespace_is_not_a_separator() {
    assert_eq!(split_words("a\nb"), vec!["a\nb".to_string()]);
    assert_eq!(split_words("a\tb"), vec!["a\tb".to_string()]);
}

#[test]
fn nbsp_and_ideographic_space_are_separators() {
    assert_eq!(
        split_words("a\u{a0}b"),
        vec!["a".to_string(), "\u{a0}".to_string(), "b".to_string()]
    );
    assert_eq!(
        split_words("a\u{3000}b"),
        vec!["a".to_string(), "\u{3000}".to_string(), "b".to_string()]
    );
}
