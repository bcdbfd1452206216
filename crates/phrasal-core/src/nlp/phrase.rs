//! Noun- and verb-phrase extraction over a dependency parse.
//!
//! Candidates are tokens whose relation label marks them as a likely phrase
//! head. Each candidate's subtree is turned into a phrase and then filtered by
//! part of speech and length.

use serde::{Deserialize, Serialize};

use super::span::{subtree_positions, subtree_positions_within, subtree_span};
use super::token::{PosTag, Token};
use super::tree::TreeIndex;
use crate::config::{ExtractionConfig, NounPhrasePolicy};
use crate::error::{Error, Result};

/// Relation labels whose dependents head noun phrases, in emission order.
pub const NOUN_PHRASE_LABELS: &[&str] = &[
    "nsubj",
    "dobj",
    "pobj",
    "appos",
    "attr",
    "cop",
    "nsubjpass",
    "obj",
];

/// Labels that only yield a noun phrase when the head is tagged NOUN.
pub const NOUN_HEAD_LABELS: &[&str] = &["cop", "attr", "dobj"];

/// Relation labels whose dependents head verb phrases, in emission order.
pub const VERB_PHRASE_LABELS: &[&str] = &[
    "advcl",
    "ccomp",
    "csubj",
    "csubjpass",
    "dobj",
    "parataxis",
    "pcomp",
    "relcl",
    "rcmod",
    "root",
    "ROOT",
    "xcomp",
];

/// Labels that only yield a verb phrase when the head is a VERB or AUX.
pub const VERB_HEAD_LABELS: &[&str] = &["dobj", "root", "ROOT"];

/// Ordered token positions making up one phrase.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct Phrase {
    positions: Vec<usize>,
}

impl Phrase {
    /// The closed range `[left, right]`.
    #[must_use]
    pub fn contiguous(left: usize, right: usize) -> Self {
        Self {
            positions: (left..=right).collect(),
        }
    }

    #[must_use]
    pub fn from_positions(mut positions: Vec<usize>) -> Self {
        positions.sort_unstable();
        positions.dedup();
        Self { positions }
    }

    pub fn positions(&self) -> &[usize] {
        &self.positions
    }

    pub fn len(&self) -> usize {
        self.positions.len()
    }

    pub fn is_empty(&self) -> bool {
        self.positions.is_empty()
    }

    /// First and last position covered.
    pub fn span(&self) -> Option<(usize, usize)> {
        Some((*self.positions.first()?, *self.positions.last()?))
    }

    pub fn is_contiguous(&self) -> bool {
        self.positions.windows(2).all(|w| w[1] == w[0] + 1)
    }

    /// Resolves positions against the sentence the phrase was extracted from.
    pub fn tokens<'a>(&self, tokens: &'a [Token]) -> Vec<&'a Token> {
        self.positions
            .iter()
            .filter_map(|&position| tokens.get(position))
            .collect()
    }
}

/// Runs phrase extraction over one sentence using a prebuilt [`TreeIndex`].
#[derive(Debug, Clone, Copy)]
pub struct PhraseExtractor<'a> {
    tokens: &'a [Token],
    tree: &'a TreeIndex,
    config: &'a ExtractionConfig,
}

/// A pruned subtree and the position it hangs from.
struct Candidate {
    root: usize,
    positions: Vec<usize>,
}

impl<'a> PhraseExtractor<'a> {
    /// Fails when `tree` was built from a sentence of a different length.
    pub fn new(
        tokens: &'a [Token],
        tree: &'a TreeIndex,
        config: &'a ExtractionConfig,
    ) -> Result<Self> {
        if tree.len() != tokens.len() {
            return Err(Error::IndexMismatch {
                tokens: tokens.len(),
                tree: tree.len(),
            });
        }
        Ok(Self {
            tokens,
            tree,
            config,
        })
    }

    pub fn noun_phrases(&self) -> Result<Vec<Phrase>> {
        self.check_root()?;
        match self.config.noun_phrase_policy {
            NounPhrasePolicy::SpanHeuristic => self.span_noun_phrases(),
            NounPhrasePolicy::SubtreePruning => Ok(self.pruned_noun_phrases()),
        }
    }

    pub fn verb_phrases(&self) -> Result<Vec<Phrase>> {
        self.check_root()?;

        let mut phrases = Vec::new();
        for &label in VERB_PHRASE_LABELS {
            for &ix in self.tree.positions_for(label) {
                let token = &self.tokens[ix];
                if VERB_HEAD_LABELS.contains(&label) && !token.pos.is_some_and(|p| p.is_verbal()) {
                    continue;
                }
                if self.tree.children_of(ix).is_empty() {
                    continue;
                }
                let (left, right) = subtree_span(self.tree.children(), ix)?;
                if right - left > self.config.max_span_length || right - left < 2 {
                    continue;
                }
                phrases.push(Phrase::contiguous(left, right));
            }
        }

        Ok(phrases)
    }

    fn check_root(&self) -> Result<()> {
        if self.config.require_single_root && !self.tree.is_empty() {
            self.tree.root()?;
        }
        Ok(())
    }

    fn span_noun_phrases(&self) -> Result<Vec<Phrase>> {
        let mut phrases = Vec::new();

        for &label in NOUN_PHRASE_LABELS {
            for &ix in self.tree.positions_for(label) {
                let token = &self.tokens[ix];
                if NOUN_HEAD_LABELS.contains(&label) && !token.has_pos(PosTag::Noun) {
                    continue;
                }
                if self.tree.children_of(ix).is_empty() {
                    continue;
                }
                // pronouns do not head phrases
                if token.has_pos(PosTag::Pron) {
                    continue;
                }

                let (mut left, right) = subtree_span(self.tree.children(), ix)?;
                if right - left > self.config.max_span_length {
                    continue;
                }
                if self.tokens[left].has_dependency_type("prep") {
                    left += 1;
                }
                if left <= right
                    && self.tokens[left].has_dependency_type("det")
                    && !self.config.include_determiner
                {
                    left += 1;
                }
                if left > right || right - left < 2 {
                    continue;
                }

                phrases.push(Phrase::contiguous(left, right));
            }
        }

        Ok(phrases)
    }

    fn pruned_noun_phrases(&self) -> Vec<Phrase> {
        let children = self.tree.children();
        let mut candidates = Vec::new();

        for &label in NOUN_PHRASE_LABELS {
            for &ix in self.tree.positions_for(label) {
                let subtree = subtree_positions(children, ix);
                if subtree.len() > self.config.max_span_length {
                    continue;
                }
                let candidate = self.prune(ix, subtree);
                if self.is_valid(&candidate) {
                    candidates.push(candidate);
                }
            }
        }

        let splits: Vec<Candidate> = candidates
            .iter()
            .flat_map(|candidate| self.split_prepositions(candidate))
            .filter(|candidate| self.is_valid(candidate))
            .collect();

        candidates
            .into_iter()
            .chain(splits)
            .map(|candidate| Phrase::from_positions(candidate.positions))
            .collect()
    }

    /// Drops non-root appositions with their subtrees and, unless configured
    /// otherwise, a leading determiner.
    fn prune(&self, root: usize, mut positions: Vec<usize>) -> Candidate {
        let children = self.tree.children();

        let appositions: Vec<usize> = positions
            .iter()
            .copied()
            .filter(|&p| p != root && self.tokens[p].has_dependency_type("appos"))
            .collect();
        for apposition in appositions {
            let removed = subtree_positions(children, apposition);
            positions.retain(|p| removed.binary_search(p).is_err());
        }

        if !self.config.include_determiner
            && positions
                .first()
                .is_some_and(|&p| self.tokens[p].has_dependency_type("det"))
        {
            positions.remove(0);
        }

        Candidate { root, positions }
    }

    fn is_valid(&self, candidate: &Candidate) -> bool {
        let root = &self.tokens[candidate.root];
        let needs_noun = root
            .dependency_type
            .as_deref()
            .is_some_and(|label| NOUN_HEAD_LABELS.contains(&label));

        if needs_noun && !root.has_pos(PosTag::Noun) {
            return false;
        }
        candidate.positions.len() > 1
    }

    /// For each prepositional attachment inside a phrase, the governing head's
    /// part of the phrase with the attachment removed.
    fn split_prepositions(&self, candidate: &Candidate) -> Vec<Candidate> {
        let children = self.tree.children();

        candidate
            .positions
            .iter()
            .copied()
            .filter(|&p| p != candidate.root && self.tokens[p].has_dependency_type("prep"))
            .filter_map(|prep| {
                let head = self.tree.parent_of(prep)?;
                candidate.positions.binary_search(&head).ok()?;

                let attachment = subtree_positions_within(children, prep, &candidate.positions);
                let mut governed = subtree_positions_within(children, head, &candidate.positions);
                governed.retain(|p| attachment.binary_search(p).is_err());

                Some(self.prune(head, governed))
            })
            .collect()
    }
}
