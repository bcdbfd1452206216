use serde::{Deserialize, Serialize};

use super::phrase::{Phrase, PhraseExtractor};
use super::token::Token;
use super::tree::TreeIndex;
use crate::config::{ErrorPolicy, ExtractionConfig};
use crate::error::Result;

/// A phrase resolved to references into its sentence's tokens.
pub type TokenSpan<'a> = Vec<&'a Token>;

/// Noun and verb phrases of one sentence, extracted from a shared index.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct SentencePhrases<'a> {
    pub noun_phrases: Vec<TokenSpan<'a>>,
    pub verb_phrases: Vec<TokenSpan<'a>>,
}

#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct Sentence {
    tokens: Vec<Token>,
}

impl Sentence {
    #[must_use]
    pub fn new(tokens: Vec<Token>) -> Self {
        Self { tokens }
    }

    pub fn tokens(&self) -> &[Token] {
        &self.tokens
    }

    #[must_use]
    pub fn into_tokens(self) -> Vec<Token> {
        self.tokens
    }

    /// Number of tokens.
    pub fn len(&self) -> usize {
        self.tokens.len()
    }

    pub fn is_empty(&self) -> bool {
        self.tokens.is_empty()
    }

    pub fn text(&self) -> String {
        self.tokens
            .iter()
            .map(|t| t.text.as_str())
            .collect::<Vec<_>>()
            .join(" ")
    }

    pub fn entities(&self) -> Vec<&Token> {
        self.tokens.iter().filter(|t| t.is_entity()).collect()
    }

    pub fn hashtags(&self) -> Vec<&Token> {
        self.tokens.iter().filter(|t| t.is_hashtag()).collect()
    }

    pub fn mentions(&self) -> Vec<&Token> {
        self.tokens.iter().filter(|t| t.is_mention()).collect()
    }

    pub fn urls(&self) -> Vec<&Token> {
        self.tokens.iter().filter(|t| t.is_url()).collect()
    }

    /// Builds a fresh dependency index; nothing is cached on the sentence.
    pub fn tree_index(&self) -> Result<TreeIndex> {
        TreeIndex::build(&self.tokens)
    }

    pub fn noun_phrases(&self, config: &ExtractionConfig) -> Result<Vec<TokenSpan<'_>>> {
        let tree = self.tree_index()?;
        let phrases = PhraseExtractor::new(&self.tokens, &tree, config)?.noun_phrases()?;
        tracing::debug!(
            "Extracted {} noun phrases from {} tokens",
            phrases.len(),
            self.tokens.len()
        );
        Ok(self.resolve(&phrases))
    }

    pub fn verb_phrases(&self, config: &ExtractionConfig) -> Result<Vec<TokenSpan<'_>>> {
        let tree = self.tree_index()?;
        let phrases = PhraseExtractor::new(&self.tokens, &tree, config)?.verb_phrases()?;
        tracing::debug!(
            "Extracted {} verb phrases from {} tokens",
            phrases.len(),
            self.tokens.len()
        );
        Ok(self.resolve(&phrases))
    }

    /// Both phrase kinds from a single index build.
    pub fn phrases(&self, config: &ExtractionConfig) -> Result<SentencePhrases<'_>> {
        let tree = self.tree_index()?;
        let extractor = PhraseExtractor::new(&self.tokens, &tree, config)?;
        Ok(SentencePhrases {
            noun_phrases: self.resolve(&extractor.noun_phrases()?),
            verb_phrases: self.resolve(&extractor.verb_phrases()?),
        })
    }

    fn resolve(&self, phrases: &[Phrase]) -> Vec<TokenSpan<'_>> {
        phrases.iter().map(|p| p.tokens(&self.tokens)).collect()
    }
}

impl std::fmt::Display for Sentence {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(&self.text())
    }
}

#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct Paragraph {
    sentences: Vec<Sentence>,
}

impl Paragraph {
    #[must_use]
    pub fn new(sentences: Vec<Sentence>) -> Self {
        Self { sentences }
    }

    pub fn sentences(&self) -> &[Sentence] {
        &self.sentences
    }

    /// Total number of tokens across sentences.
    pub fn len(&self) -> usize {
        self.sentences.iter().map(Sentence::len).sum()
    }

    pub fn is_empty(&self) -> bool {
        self.len() == 0
    }

    pub fn text(&self) -> String {
        self.sentences
            .iter()
            .map(Sentence::text)
            .collect::<Vec<_>>()
            .join(" ")
    }

    pub fn tokens(&self) -> Vec<&Token> {
        self.sentences.iter().flat_map(|s| s.tokens.iter()).collect()
    }

    pub fn entities(&self) -> Vec<&Token> {
        self.sentences.iter().flat_map(Sentence::entities).collect()
    }

    pub fn hashtags(&self) -> Vec<&Token> {
        self.sentences.iter().flat_map(Sentence::hashtags).collect()
    }

    pub fn mentions(&self) -> Vec<&Token> {
        self.sentences.iter().flat_map(Sentence::mentions).collect()
    }

    pub fn urls(&self) -> Vec<&Token> {
        self.sentences.iter().flat_map(Sentence::urls).collect()
    }

    pub fn noun_phrases(&self, config: &ExtractionConfig) -> Result<Vec<TokenSpan<'_>>> {
        collect_phrases(self.sentences.iter(), config, Sentence::noun_phrases)
    }

    pub fn verb_phrases(&self, config: &ExtractionConfig) -> Result<Vec<TokenSpan<'_>>> {
        collect_phrases(self.sentences.iter(), config, Sentence::verb_phrases)
    }
}

impl std::fmt::Display for Paragraph {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(&self.text())
    }
}

#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct Document {
    paragraphs: Vec<Paragraph>,
}

impl Document {
    #[must_use]
    pub fn new(paragraphs: Vec<Paragraph>) -> Self {
        Self { paragraphs }
    }

    pub fn paragraphs(&self) -> &[Paragraph] {
        &self.paragraphs
    }

    pub fn sentences(&self) -> impl Iterator<Item = &Sentence> {
        self.paragraphs.iter().flat_map(|p| p.sentences.iter())
    }

    /// Total number of tokens across paragraphs.
    pub fn len(&self) -> usize {
        self.paragraphs.iter().map(Paragraph::len).sum()
    }

    pub fn is_empty(&self) -> bool {
        self.len() == 0
    }

    pub fn text(&self) -> String {
        self.paragraphs
            .iter()
            .map(Paragraph::text)
            .collect::<Vec<_>>()
            .join("\n\n")
    }

    pub fn tokens(&self) -> Vec<&Token> {
        self.paragraphs.iter().flat_map(Paragraph::tokens).collect()
    }

    pub fn entities(&self) -> Vec<&Token> {
        self.paragraphs.iter().flat_map(Paragraph::entities).collect()
    }

    pub fn hashtags(&self) -> Vec<&Token> {
        self.paragraphs.iter().flat_map(Paragraph::hashtags).collect()
    }

    pub fn mentions(&self) -> Vec<&Token> {
        self.paragraphs.iter().flat_map(Paragraph::mentions).collect()
    }

    pub fn urls(&self) -> Vec<&Token> {
        self.paragraphs.iter().flat_map(Paragraph::urls).collect()
    }

    pub fn noun_phrases(&self, config: &ExtractionConfig) -> Result<Vec<TokenSpan<'_>>> {
        collect_phrases(self.sentences(), config, Sentence::noun_phrases)
    }

    pub fn verb_phrases(&self, config: &ExtractionConfig) -> Result<Vec<TokenSpan<'_>>> {
        collect_phrases(self.sentences(), config, Sentence::verb_phrases)
    }
}

impl std::fmt::Display for Document {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(&self.text())
    }
}

fn collect_phrases<'a, F>(
    sentences: impl Iterator<Item = &'a Sentence>,
    config: &ExtractionConfig,
    extract: F,
) -> Result<Vec<TokenSpan<'a>>>
where
    F: Fn(&'a Sentence, &ExtractionConfig) -> Result<Vec<TokenSpan<'a>>>,
{
    let mut phrases = Vec::new();

    for (n, sentence) in sentences.enumerate() {
        match extract(sentence, config) {
            Ok(found) => phrases.extend(found),
            Err(e) if config.error_policy == ErrorPolicy::SkipSentence => {
                tracing::warn!("Skipping sentence {}: {}", n, e);
            }
            Err(e) => return Err(e),
        }
    }

    Ok(phrases)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::error::Error;
    use crate::nlp::fixtures::cat_in_a_hat;
    use crate::nlp::PosTag;

    fn texts(spans: &[TokenSpan<'_>]) -> Vec<Vec<String>> {
        spans
            .iter()
            .map(|span| span.iter().map(|t| t.text.clone()).collect())
            .collect()
    }

    fn rootless() -> Sentence {
        Sentence::new(vec![
            Token::new("a").with_index(0).with_dependency(Some(1), "dep"),
            Token::new("b").with_index(1).with_dependency(Some(0), "dep"),
        ])
    }

    fn document() -> Document {
        Document::new(vec![
            Paragraph::new(vec![
                Sentence::new(cat_in_a_hat()),
                Sentence::new(vec![
                    Token::new("Hi").with_index(0).with_dependency(None, "root"),
                    Token::new("@bob")
                        .with_index(1)
                        .with_dependency(Some(0), "npadvmod")
                        .with_social_flags(false, true, false)
                        .with_entity(true, "PERSON"),
                ]),
            ]),
            Paragraph::new(vec![Sentence::new(cat_in_a_hat())]),
        ])
    }

    #[test]
    fn test_sentence_noun_phrases_with_determiner() {
        let sentence = Sentence::new(cat_in_a_hat());
        let config = ExtractionConfig::default().with_determiner(true);

        let phrases = sentence.noun_phrases(&config).unwrap();

        assert_eq!(texts(&phrases), vec![vec!["a", "cat", "in", "a", "hat"]]);
    }

    #[test]
    fn test_sentence_noun_phrases_without_determiner() {
        let sentence = Sentence::new(cat_in_a_hat());

        let phrases = sentence.noun_phrases(&ExtractionConfig::default()).unwrap();

        assert_eq!(texts(&phrases), vec![vec!["cat", "in", "a", "hat"]]);
        assert_eq!(phrases[0][0], &sentence.tokens()[3]);
    }

    #[test]
    fn test_phrases_share_one_index() {
        let sentence = Sentence::new(cat_in_a_hat());
        let config = ExtractionConfig::default();

        let both = sentence.phrases(&config).unwrap();

        assert_eq!(both.noun_phrases, sentence.noun_phrases(&config).unwrap());
        assert_eq!(both.verb_phrases, sentence.verb_phrases(&config).unwrap());
    }

    #[test]
    fn test_text_rendering() {
        let doc = document();

        assert_eq!(doc.paragraphs()[0].sentences()[1].text(), "Hi @bob");
        assert_eq!(
            doc.text(),
            "I saw a cat in a hat Hi @bob\n\nI saw a cat in a hat"
        );
        assert_eq!(doc.len(), 16);
        assert_eq!(doc.tokens().len(), 16);
    }

    #[test]
    fn test_aggregates_concatenate_in_order() {
        let doc = document();
        let config = ExtractionConfig::default();

        let phrases = doc.noun_phrases(&config).unwrap();
        assert_eq!(phrases.len(), 2);
        assert_eq!(texts(&phrases)[1], vec!["cat", "in", "a", "hat"]);

        assert_eq!(doc.entities().len(), 1);
        assert_eq!(doc.mentions()[0].text, "@bob");
        assert!(doc.hashtags().is_empty());
        assert!(doc.urls().is_empty());
        assert_eq!(doc.paragraphs()[0].noun_phrases(&config).unwrap().len(), 1);
    }

    /// "Loving #rust at https://x.io #today"
    fn social() -> Sentence {
        Sentence::new(vec![
            Token::new("Loving")
                .with_index(0)
                .with_dependency(None, "root")
                .with_pos(PosTag::Verb),
            Token::new("#rust")
                .with_index(1)
                .with_dependency(Some(0), "dobj")
                .with_pos(PosTag::Noun)
                .with_social_flags(true, false, false),
            Token::new("at").with_index(2).with_dependency(Some(0), "prep"),
            Token::new("https://x.io")
                .with_index(3)
                .with_dependency(Some(2), "pobj")
                .with_social_flags(false, false, true),
            Token::new("#today")
                .with_index(4)
                .with_dependency(Some(0), "npadvmod")
                .with_social_flags(true, false, false),
        ])
    }

    #[test]
    fn test_verb_phrases_and_social_tokens_concatenate_in_order() {
        let mut saw = cat_in_a_hat();
        saw[1].pos = Some(PosTag::Verb);
        let doc = Document::new(vec![
            Paragraph::new(vec![Sentence::new(saw), social()]),
            Paragraph::new(vec![social()]),
        ]);
        let config = ExtractionConfig::default();

        let phrases = doc.verb_phrases(&config).unwrap();
        assert_eq!(
            texts(&phrases),
            vec![
                vec!["I", "saw", "a", "cat", "in", "a", "hat"],
                vec!["#rust", "at", "https://x.io", "#today"],
                vec!["#rust", "at", "https://x.io", "#today"],
            ]
        );
        assert_eq!(doc.paragraphs()[0].verb_phrases(&config).unwrap().len(), 2);
        assert_eq!(doc.paragraphs()[1].verb_phrases(&config).unwrap().len(), 1);

        let hashtags: Vec<&str> = doc.hashtags().iter().map(|t| t.text.as_str()).collect();
        assert_eq!(hashtags, vec!["#rust", "#today", "#rust", "#today"]);

        let urls: Vec<&str> = doc.urls().iter().map(|t| t.text.as_str()).collect();
        assert_eq!(urls, vec!["https://x.io", "https://x.io"]);

        let first: Vec<&str> = doc.paragraphs()[0]
            .hashtags()
            .iter()
            .map(|t| t.text.as_str())
            .collect();
        assert_eq!(first, vec!["#rust", "#today"]);
        assert!(doc.paragraphs()[0].urls()[0].is_url());
    }

    #[test]
    fn test_fail_fast_propagates_sentence_error() {
        let doc = Document::new(vec![Paragraph::new(vec![
            Sentence::new(cat_in_a_hat()),
            rootless(),
        ])]);

        let result = doc.noun_phrases(&ExtractionConfig::default());

        assert!(matches!(result, Err(Error::MissingOrMultipleRoots { .. })));
    }

    #[test]
    fn test_skip_sentence_policy_continues() {
        let doc = Document::new(vec![Paragraph::new(vec![
            rootless(),
            Sentence::new(cat_in_a_hat()),
        ])]);
        let config = ExtractionConfig::default().with_error_policy(ErrorPolicy::SkipSentence);

        let phrases = doc.noun_phrases(&config).unwrap();

        assert_eq!(texts(&phrases), vec![vec!["cat", "in", "a", "hat"]]);
    }

    #[test]
    fn test_empty_sentence_has_no_phrases() {
        let sentence = Sentence::default();
        assert!(sentence
            .noun_phrases(&ExtractionConfig::default())
            .unwrap()
            .is_empty());
    }

    #[test]
    fn test_document_json_round_trip() {
        let doc = document();
        let json = serde_json::to_string(&doc).unwrap();
        let restored: Document = serde_json::from_str(&json).unwrap();

        assert_eq!(restored, doc);
    }
}
