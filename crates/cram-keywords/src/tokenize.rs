//! Tokenization and n-gram generation.
//!
//! The tokenizer produces the ordered token stream used by the tagger, the
//! n-gram candidate generator, and the bigram PMI table. Tokens keep their
//! original casing (the tagger needs it for proper-noun detection) plus the
//! byte offset of their first character.

/// A single token with position metadata.
#[derive(Debug, Clone, PartialEq, Eq)]
pub(crate) struct Token {
    /// Token text in original casing.
    pub text: String,
    /// Byte offset of the token's first character in the source text.
    pub start: usize,
    /// True for the first token of the document or of a sentence.
    pub sentence_start: bool,
}

/// Characters that end a sentence for the purposes of tagging.
const SENTENCE_TERMINATORS: &[char] = &['.', '!', '?'];

/// Splits text into alphanumeric tokens with offsets and sentence flags.
///
/// Everything that is not alphanumeric separates tokens; sentence boundaries
/// are detected from terminator punctuation in the gaps between tokens.
pub(crate) fn tokenize(text: &str) -> Vec<Token> {
    let mut tokens = Vec::new();
    let mut current = String::new();
    let mut current_start = 0;
    let mut sentence_start = true;

    for (idx, ch) in text.char_indices() {
        if ch.is_alphanumeric() {
            if current.is_empty() {
                current_start = idx;
            }
            current.push(ch);
        } else {
            if !current.is_empty() {
                tokens.push(Token {
                    text: std::mem::take(&mut current),
                    start: current_start,
                    sentence_start,
                });
                sentence_start = false;
            }
            if SENTENCE_TERMINATORS.contains(&ch) {
                sentence_start = true;
            }
        }
    }

    if !current.is_empty() {
        tokens.push(Token {
            text: current,
            start: current_start,
            sentence_start,
        });
    }

    tokens
}

/// Generates all contiguous n-grams over the token stream.
///
/// Grams are lowercased and joined with single spaces, matching the normalized
/// form of candidate terms.
pub(crate) fn ngrams(tokens: &[Token], n: usize) -> Vec<String> {
    if n == 0 || tokens.len() < n {
        return Vec::new();
    }

    tokens
        .windows(n)
        .map(|window| {
            window
                .iter()
                .map(|t| t.text.to_lowercase())
                .collect::<Vec<_>>()
                .join(" ")
        })
        .collect()
}

#[cfg(test)]
mod test {
    use super::*;

    #[test]
    fn splits_on_punctuation_and_whitespace() {
        let tokens = tokenize("Cells divide; organisms grow.");
        let texts: Vec<_> = tokens.iter().map(|t| t.text.as_str()).collect();
        assert_eq!(texts, vec!["Cells", "divide", "organisms", "grow"]);
    }

    #[test]
    fn records_byte_offsets() {
        let tokens = tokenize("one two  three");
        assert_eq!(tokens[0].start, 0);
        assert_eq!(tokens[1].start, 4);
        assert_eq!(tokens[2].start, 9);
    }

    #[test]
    fn flags_sentence_starts() {
        let tokens = tokenize("First sentence ends. Second starts here! Third?");
        let starts: Vec<_> = tokens
            .iter()
            .filter(|t| t.sentence_start)
            .map(|t| t.text.as_str())
            .collect();
        assert_eq!(starts, vec!["First", "Second", "Third"]);
    }

    #[test]
    fn handles_unicode_text() {
        let tokens = tokenize("Übung macht den Meister.");
        assert_eq!(tokens.len(), 4);
        assert_eq!(tokens[0].text, "Übung");
        assert_eq!(tokens[0].start, 0);
    }

    #[test]
    fn empty_text_yields_no_tokens() {
        assert!(tokenize("").is_empty());
        assert!(tokenize("  ...  ").is_empty());
    }

    #[test]
    fn bigrams_cover_whole_stream() {
        let tokens = tokenize("Natural language processing enables computers");
        let grams = ngrams(&tokens, 2);
        assert_eq!(
            grams,
            vec![
                "natural language",
                "language processing",
                "processing enables",
                "enables computers"
            ]
        );
    }

    #[test]
    fn trigrams_are_lowercased() {
        let tokens = tokenize("Natural Language Processing");
        let grams = ngrams(&tokens, 3);
        assert_eq!(grams, vec!["natural language processing"]);
    }

    #[test]
    fn ngrams_on_short_input() {
        let tokens = tokenize("single");
        assert!(ngrams(&tokens, 2).is_empty());
        assert!(ngrams(&tokens, 3).is_empty());
    }
}
