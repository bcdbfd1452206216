use anyhow::Result;
use clap::Parser;

use phrasal::cli::{self, Cli, Commands};

fn main() -> Result<()> {
    tracing_subscriber::fmt()
        .with_env_filter(tracing_subscriber::EnvFilter::from_default_env())
        .with_writer(std::io::stderr)
        .init();

    let cli = Cli::parse();
    dispatch(cli.command)
}

fn dispatch(command: Commands) -> Result<()> {
    match command {
        Commands::NounPhrases {
            file,
            extract,
            output,
        } => cli::phrases::run_noun_phrases(&file, &extract, &output),
        Commands::VerbPhrases {
            file,
            extract,
            output,
        } => cli::phrases::run_verb_phrases(&file, &extract, &output),
        Commands::Entities { file, output } => cli::entities::run(&file, &output),
        Commands::Merge {
            file,
            extract,
            merge_det,
            join,
            output,
        } => cli::merge::run(&file, &extract, merge_det, &join, &output),
    }
}
