//! Annotated tokens, their sentence/paragraph/document aggregates, and
//! dependency-tree phrase extraction.

mod document;
mod merge;
mod phrase;
mod span;
mod token;
mod tree;

pub use document::{Document, Paragraph, Sentence, SentencePhrases, TokenSpan};
pub use merge::{detach_determiner, find_subtree_root, merge_tokens};
pub use phrase::{
    Phrase, PhraseExtractor, NOUN_HEAD_LABELS, NOUN_PHRASE_LABELS, VERB_HEAD_LABELS,
    VERB_PHRASE_LABELS,
};
pub use span::{subtree_positions, subtree_positions_within, subtree_span};
pub use token::{PosTag, Token};
pub use tree::TreeIndex;
