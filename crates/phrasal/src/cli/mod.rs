pub mod entities;
pub mod input;
pub mod merge;
pub mod phrases;

use clap::{Args, Parser, Subcommand};
use phrasal_core::{ErrorPolicy, ExtractionConfig, NounPhrasePolicy};

#[derive(Parser)]
#[command(
    name = "phrasal",
    about = "Noun and verb phrase extraction over dependency-parsed documents",
    version
)]
pub struct Cli {
    #[command(subcommand)]
    pub command: Commands,
}

#[derive(Subcommand)]
pub enum Commands {
    /// Print noun phrases, one per line
    NounPhrases {
        /// Annotated document as JSON ("-" for stdin)
        file: String,
        #[command(flatten)]
        extract: ExtractArgs,
        #[command(flatten)]
        output: OutputArgs,
    },
    /// Print verb phrases, one per line
    VerbPhrases {
        /// Annotated document as JSON ("-" for stdin)
        file: String,
        #[command(flatten)]
        extract: ExtractArgs,
        #[command(flatten)]
        output: OutputArgs,
    },
    /// Print tokens marked as named entities
    Entities {
        /// Annotated document as JSON ("-" for stdin)
        file: String,
        #[command(flatten)]
        output: OutputArgs,
    },
    /// Collapse each noun phrase into a single token
    Merge {
        /// Annotated document as JSON ("-" for stdin)
        file: String,
        #[command(flatten)]
        extract: ExtractArgs,
        /// Keep a leading determiner inside the merged token
        #[arg(long = "merge-det")]
        merge_det: bool,
        /// Separator placed between merged words ("" for unspaced scripts)
        #[arg(long, default_value = " ")]
        join: String,
        #[command(flatten)]
        output: OutputArgs,
    },
}

/// Extraction settings; unset flags fall back to `PHRASAL_*` variables.
///
/// Each switch has an opposite so an environment default can be undone from
/// the command line. When both are given the last one wins.
#[derive(Args, Debug, Clone, Default)]
pub struct ExtractArgs {
    /// Include leading determiners in noun phrases
    #[arg(long, overrides_with = "no_det")]
    pub det: bool,
    /// Drop leading determiners from noun phrases
    #[arg(long = "no-det", overrides_with = "det")]
    pub no_det: bool,
    /// Discard spans wider than this many tokens
    #[arg(long = "max-len")]
    pub max_len: Option<usize>,
    /// Noun phrase policy: span or prune
    #[arg(long)]
    pub policy: Option<NounPhrasePolicy>,
    /// Skip sentences that fail extraction instead of aborting
    #[arg(long = "skip-errors", overrides_with = "fail_fast")]
    pub skip_errors: bool,
    /// Abort on the first sentence that fails extraction
    #[arg(long = "fail-fast", overrides_with = "skip_errors")]
    pub fail_fast: bool,
    /// Accept sentences with zero or several roots
    #[arg(long = "allow-multiple-roots", overrides_with = "single_root")]
    pub allow_multiple_roots: bool,
    /// Reject sentences without exactly one root
    #[arg(long = "single-root", overrides_with = "allow_multiple_roots")]
    pub single_root: bool,
}

impl ExtractArgs {
    pub fn to_config(&self) -> anyhow::Result<ExtractionConfig> {
        let mut config = ExtractionConfig::from_env()?;

        if let Some(det) = switch(self.det, self.no_det) {
            config = config.with_determiner(det);
        }
        if let Some(max_len) = self.max_len {
            config = config.with_max_span_length(max_len);
        }
        if let Some(policy) = self.policy {
            config = config.with_noun_phrase_policy(policy);
        }
        if let Some(skip) = switch(self.skip_errors, self.fail_fast) {
            config = config.with_error_policy(if skip {
                ErrorPolicy::SkipSentence
            } else {
                ErrorPolicy::FailFast
            });
        }
        if let Some(lenient) = switch(self.allow_multiple_roots, self.single_root) {
            config = config.with_require_single_root(!lenient);
        }

        tracing::debug!("Extraction config: {:?}", config);
        Ok(config)
    }
}

/// Resolves an on/off flag pair; `None` leaves the configured value alone.
const fn switch(on: bool, off: bool) -> Option<bool> {
    match (on, off) {
        (true, _) => Some(true),
        (_, true) => Some(false),
        _ => None,
    }
}

#[derive(Args, Debug, Clone, Copy, Default)]
pub struct OutputArgs {
    /// Emit JSON instead of plain lines
    #[arg(long)]
    pub json: bool,
}
