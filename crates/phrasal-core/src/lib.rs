pub mod config;
pub mod error;
pub mod nlp;
pub mod records;

pub use config::{ErrorPolicy, ExtractionConfig, NounPhrasePolicy};
pub use error::{Error, Result};
pub use nlp::{
    merge_tokens, Document, Paragraph, Phrase, PhraseExtractor, PosTag, Sentence, Token,
    TokenSpan, TreeIndex,
};
pub use records::{
    Record, Timestamp, Tweet, TwitterUser, YouTubeChannel, YouTubeComment, YouTubeCommentStats,
    YouTubeVideo, YouTubeVideoStats,
};
