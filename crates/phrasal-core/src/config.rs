use serde::{Deserialize, Serialize};

use crate::error::{Error, Result};

pub const DEFAULT_MAX_SPAN_LENGTH: usize = 20;

/// How noun-phrase boundaries are derived from a candidate's subtree.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum NounPhrasePolicy {
    /// Contiguous descendant span, trimmed of a leading preposition and
    /// (optionally) a leading determiner.
    #[default]
    SpanHeuristic,
    /// Full subtree with non-root appositions pruned, plus an extra phrase for
    /// each head that governs a prepositional attachment.
    SubtreePruning,
}

impl NounPhrasePolicy {
    #[must_use]
    pub fn as_str(&self) -> &'static str {
        match self {
            Self::SpanHeuristic => "span",
            Self::SubtreePruning => "prune",
        }
    }
}

impl std::fmt::Display for NounPhrasePolicy {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.as_str())
    }
}

impl std::str::FromStr for NounPhrasePolicy {
    type Err = Error;

    fn from_str(s: &str) -> Result<Self> {
        match s {
            "span" | "span_heuristic" => Ok(Self::SpanHeuristic),
            "prune" | "subtree_pruning" => Ok(Self::SubtreePruning),
            _ => Err(Error::Config {
                key: "noun_phrase_policy".into(),
                value: s.to_string(),
            }),
        }
    }
}

/// What aggregates do when one sentence fails extraction.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum ErrorPolicy {
    #[default]
    FailFast,
    SkipSentence,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ExtractionConfig {
    /// Keep a leading determiner in noun phrases
    #[serde(default)]
    pub include_determiner: bool,
    /// Spans wider than this (`right - left`) are discarded
    #[serde(default = "default_max_span_length")]
    pub max_span_length: usize,
    #[serde(default)]
    pub noun_phrase_policy: NounPhrasePolicy,
    /// Reject sentences that do not have exactly one root
    #[serde(default = "default_require_single_root")]
    pub require_single_root: bool,
    #[serde(default)]
    pub error_policy: ErrorPolicy,
}

const fn default_max_span_length() -> usize {
    DEFAULT_MAX_SPAN_LENGTH
}

const fn default_require_single_root() -> bool {
    true
}

impl Default for ExtractionConfig {
    fn default() -> Self {
        Self {
            include_determiner: false,
            max_span_length: DEFAULT_MAX_SPAN_LENGTH,
            noun_phrase_policy: NounPhrasePolicy::default(),
            require_single_root: true,
            error_policy: ErrorPolicy::default(),
        }
    }
}

impl ExtractionConfig {
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Defaults overridden by `PHRASAL_*` environment variables.
    pub fn from_env() -> Result<Self> {
        Self::from_lookup(|key| std::env::var(key).ok())
    }

    fn from_lookup(lookup: impl Fn(&str) -> Option<String>) -> Result<Self> {
        let mut config = Self::default();

        if let Some(value) = lookup("PHRASAL_INCLUDE_DETERMINER") {
            config.include_determiner = parse_flag("PHRASAL_INCLUDE_DETERMINER", &value)?;
        }
        if let Some(value) = lookup("PHRASAL_MAX_SPAN_LENGTH") {
            config.max_span_length = value.trim().parse().map_err(|_| Error::Config {
                key: "PHRASAL_MAX_SPAN_LENGTH".into(),
                value: value.clone(),
            })?;
        }
        if let Some(value) = lookup("PHRASAL_NOUN_PHRASE_POLICY") {
            config.noun_phrase_policy = value.trim().parse()?;
        }
        if let Some(value) = lookup("PHRASAL_REQUIRE_SINGLE_ROOT") {
            config.require_single_root = parse_flag("PHRASAL_REQUIRE_SINGLE_ROOT", &value)?;
        }
        if let Some(value) = lookup("PHRASAL_SKIP_ERRORS") {
            if parse_flag("PHRASAL_SKIP_ERRORS", &value)? {
                config.error_policy = ErrorPolicy::SkipSentence;
            }
        }

        Ok(config)
    }

    #[must_use]
    pub fn with_determiner(mut self, include_determiner: bool) -> Self {
        self.include_determiner = include_determiner;
        self
    }

    #[must_use]
    pub fn with_max_span_length(mut self, max_span_length: usize) -> Self {
        self.max_span_length = max_span_length;
        self
    }

    #[must_use]
    pub fn with_noun_phrase_policy(mut self, policy: NounPhrasePolicy) -> Self {
        self.noun_phrase_policy = policy;
        self
    }

    #[must_use]
    pub fn with_require_single_root(mut self, require: bool) -> Self {
        self.require_single_root = require;
        self
    }

    #[must_use]
    pub fn with_error_policy(mut self, policy: ErrorPolicy) -> Self {
        self.error_policy = policy;
        self
    }
}

fn parse_flag(key: &str, value: &str) -> Result<bool> {
    match value.trim() {
        "1" => Ok(true),
        "0" | "" => Ok(false),
        v if v.eq_ignore_ascii_case("true") => Ok(true),
        v if v.eq_ignore_ascii_case("false") => Ok(false),
        _ => Err(Error::Config {
            key: key.to_string(),
            value: value.to_string(),
        }),
    }
}
