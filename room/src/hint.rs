use crate::consts::{HINT_DELIMITER, HINT_PLACEHOLDER};

/// Reveals one leading letter per `reveal_secs` whole seconds elapsed.
/// `reveal_secs` is non-zero, see `Config::validate`.
pub fn hint(word: &str, elapsed: u32, reveal_secs: u32) -> String {
    let revealed = (elapsed / reveal_secs) as usize;
    word.chars()
        .enumerate()
        .map(|(idx, ch)| if idx < revealed { ch } else { HINT_PLACEHOLDER })
        .map(String::from)
        .collect::<Vec<_>>()
        .join(HINT_DELIMITER)
}

/// What the drawer sees: the whole word, letter-spaced.
pub fn spaced(word: &str) -> String {
    word.chars()
        .map(String::from)
        .collect::<Vec<_>>()
        .join(HINT_DELIMITER)
}

pub fn normalize(text: &str) -> String {
    text.trim().to_lowercase()
}

#[cfg(test)]
mod tests {
    use super::*;

    fn revealed_count(hint: &str) -> usize {
        hint.split(HINT_DELIMITER)
            .filter(|tok| *tok != HINT_PLACEHOLDER.to_string())
            .count()
    }

    #[test]
    fn nothing_at_zero() {
        assert_eq!(hint("apple", 0, 10), "_ _ _ _ _");
        assert_eq!(hint("apple", 9, 10), "_ _ _ _ _");
    }

    #[test]
    fn one_letter_per_interval() {
        assert_eq!(hint("apple", 10, 10), "a _ _ _ _");
        assert_eq!(hint("apple", 25, 10), "a p _ _ _");
        assert_eq!(hint("apple", 50, 10), "a p p l e");
        assert_eq!(hint("apple", 500, 10), "a p p l e");
    }

    #[test]
    fn reveals_min_of_len_and_intervals() {
        for word in ["a", "sun", "giraffe", "xylophones"] {
            let len = word.chars().count();
            for elapsed in 0..=120 {
                let h = hint(word, elapsed, 10);
                assert_eq!(revealed_count(&h), len.min((elapsed / 10) as usize));
                assert_eq!(h.split(HINT_DELIMITER).count(), len);
            }
            assert_eq!(hint(word, 10 * len as u32, 10), spaced(word));
        }
    }

    #[test]
    fn empty_word_is_empty() {
        assert_eq!(hint("", 0, 10), "");
        assert_eq!(hint("", 60, 10), "");
        assert_eq!(spaced(""), "");
    }

    #[test]
    fn normalizes_case_and_padding() {
        assert_eq!(normalize("  CAT "), "cat");
        assert_eq!(normalize("Apple "), "apple");
        assert_eq!(normalize(" \t "), "");
    }
}
