use std::collections::HashSet;

use crate::dictionary::Lexicon;

/// Words accepted so far this game, in the order they were found
#[derive(Debug, Clone, Default)]
pub struct FoundWords {
    ordered: Vec<String>,
    seen: HashSet<String>,
}

impl FoundWords {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn contains(&self, word: &str) -> bool {
        self.seen.contains(&word.to_uppercase())
    }

    /// Insert a word; false if it was already present
    fn insert(&mut self, word: &str) -> bool {
        let word = word.to_uppercase();
        if !self.seen.insert(word.clone()) {
            return false;
        }
        self.ordered.push(word);
        true
    }

    pub fn clear(&mut self) {
        self.ordered.clear();
        self.seen.clear();
    }

    pub fn len(&self) -> usize {
        self.ordered.len()
    }

    pub fn is_empty(&self) -> bool {
        self.ordered.is_empty()
    }

    pub fn iter(&self) -> impl Iterator<Item = &str> {
        self.ordered.iter().map(String::as_str)
    }

    /// One word per line, for the found-words panel
    pub fn display_text(&self) -> String {
        self.ordered.join("\n")
    }
}

/// Result of submitting a spelled word
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Acceptance {
    Accepted,
    NotInLexicon,
    AlreadyFound,
}

impl Acceptance {
    pub fn is_accepted(&self) -> bool {
        matches!(self, Acceptance::Accepted)
    }
}

pub struct LexiconValidator {
    lexicon: Lexicon,
}

impl LexiconValidator {
    pub fn new(lexicon: Lexicon) -> Self {
        Self { lexicon }
    }

    pub fn lexicon(&self) -> &Lexicon {
        &self.lexicon
    }

    /// Check if word exists in the lexicon
    pub fn is_valid(&self, word: &str) -> bool {
        self.lexicon.contains(word)
    }

    /// Check that the word has not been found already
    pub fn is_new(&self, word: &str, found: &FoundWords) -> bool {
        !found.contains(word)
    }

    /// Record the word if it is valid and new. `found` is only touched on acceptance.
    pub fn accept(&self, word: &str, found: &mut FoundWords) -> Acceptance {
        if !self.is_valid(word) {
            return Acceptance::NotInLexicon;
        }
        if !self.is_new(word, found) {
            return Acceptance::AlreadyFound;
        }
        found.insert(word);
        Acceptance::Accepted
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn validator() -> LexiconValidator {
        LexiconValidator::new(Lexicon::from_words(["cat", "DOG", "Tab"]))
    }

    #[test]
    fn test_is_valid_ignores_case() {
        let validator = validator();
        assert!(validator.is_valid("CAT"));
        assert!(validator.is_valid("cat"));
        assert!(validator.is_valid("tAb"));
        assert!(!validator.is_valid("CA"));
    }

    #[test]
    fn test_accept_valid_new_word() {
        let validator = validator();
        let mut found = FoundWords::new();
        assert_eq!(validator.accept("CAT", &mut found), Acceptance::Accepted);
        assert_eq!(found.iter().collect::<Vec<_>>(), vec!["CAT"]);
    }

    #[test]
    fn test_accepting_twice_inserts_once() {
        // The same valid word found twice in a session is only recorded once
        let validator = validator();
        let mut found = FoundWords::new();
        assert!(validator.accept("CAT", &mut found).is_accepted());
        assert_eq!(validator.accept("CAT", &mut found), Acceptance::AlreadyFound);
        assert_eq!(validator.accept("cat", &mut found), Acceptance::AlreadyFound);
        assert_eq!(found.len(), 1, "CAT should appear exactly once");
    }

    #[test]
    fn test_rejected_word_leaves_found_words_unchanged() {
        let validator = validator();
        let mut found = FoundWords::new();
        validator.accept("DOG", &mut found);
        assert_eq!(validator.accept("CA", &mut found), Acceptance::NotInLexicon);
        assert_eq!(found.display_text(), "DOG");
    }

    #[test]
    fn test_found_words_keep_insertion_order() {
        let validator = validator();
        let mut found = FoundWords::new();
        validator.accept("TAB", &mut found);
        validator.accept("CAT", &mut found);
        validator.accept("DOG", &mut found);
        assert_eq!(found.display_text(), "TAB\nCAT\nDOG");

        found.clear();
        assert!(found.is_empty());
        assert!(validator.is_new("TAB", &found));
    }
}
