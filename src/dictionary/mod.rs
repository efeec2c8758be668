use std::collections::HashSet;
use std::path::Path;
use tokio::fs;
use anyhow::{Context, Result};

/// The fixed set of acceptable words, stored uppercase
#[derive(Debug, Clone, Default)]
pub struct Lexicon {
    words: HashSet<String>,
}

impl Lexicon {
    /// Load a lexicon from a file with one word per line
    pub async fn load<P: AsRef<Path>>(path: P) -> Result<Self> {
        let path = path.as_ref();
        let content = fs::read_to_string(path)
            .await
            .with_context(|| format!("Failed to read lexicon {}", path.display()))?;
        let lexicon = Self::parse(&content);

        tracing::info!("Loaded {} words into lexicon", lexicon.len());

        Ok(lexicon)
    }

    /// Parse line-oriented text: each line trimmed and uppercased, blanks skipped
    pub fn parse(content: &str) -> Self {
        Self::from_words(content.lines())
    }

    pub fn from_words<I, S>(words: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: AsRef<str>,
    {
        let words = words
            .into_iter()
            .map(|word| word.as_ref().trim().to_uppercase())
            .filter(|word| !word.is_empty())
            .collect();
        Self { words }
    }

    /// Create an empty lexicon, which rejects every word
    pub fn empty() -> Self {
        Self::default()
    }

    /// Check if a word exists in the lexicon
    pub fn contains(&self, word: &str) -> bool {
        self.words.contains(&word.to_uppercase())
    }

    /// Get the number of words in the lexicon
    pub fn len(&self) -> usize {
        self.words.len()
    }

    /// Check if lexicon is empty
    pub fn is_empty(&self) -> bool {
        self.words.is_empty()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_empty_lexicon() {
        let lexicon = Lexicon::empty();
        assert!(lexicon.is_empty());
        assert!(!lexicon.contains("TEST"));
    }

    #[test]
    fn test_parse_normalizes_lines() {
        let lexicon = Lexicon::parse("cat\n  Dog \r\n\n\nqueen\n");
        assert_eq!(lexicon.len(), 3);
        assert!(lexicon.contains("CAT"));
        assert!(lexicon.contains("dog"));
        assert!(lexicon.contains("QUEEN"));
        assert!(!lexicon.contains(""));
    }

    #[tokio::test]
    async fn test_load_reads_file() {
        let path = std::env::temp_dir().join(format!("boggle-lexicon-{}.txt", std::process::id()));
        fs::write(&path, "cat\ntab\n").await.unwrap();

        let lexicon = Lexicon::load(&path).await.unwrap();
        fs::remove_file(&path).await.unwrap();

        assert_eq!(lexicon.len(), 2);
        assert!(lexicon.contains("TAB"));
    }

    #[test]
    fn test_load_missing_file_fails() {
        let result = tokio_test::block_on(Lexicon::load("/nonexistent/bogwords.txt"));
        let err = result.expect_err("Loading a missing lexicon should fail");
        assert!(
            err.to_string().contains("/nonexistent/bogwords.txt"),
            "Error '{}' should name the missing file",
            err
        );
    }
}
