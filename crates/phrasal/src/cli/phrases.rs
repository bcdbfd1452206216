use anyhow::{Context, Result};
use phrasal_core::TokenSpan;

use super::input::read_document;
use super::{ExtractArgs, OutputArgs};

pub fn run_noun_phrases(file: &str, extract: &ExtractArgs, output: &OutputArgs) -> Result<()> {
    let config = extract.to_config()?;
    let document = read_document(file)?;
    let phrases = document
        .noun_phrases(&config)
        .context("noun phrase extraction failed")?;
    print_spans(&phrases, output)
}

pub fn run_verb_phrases(file: &str, extract: &ExtractArgs, output: &OutputArgs) -> Result<()> {
    let config = extract.to_config()?;
    let document = read_document(file)?;
    let phrases = document
        .verb_phrases(&config)
        .context("verb phrase extraction failed")?;
    print_spans(&phrases, output)
}

pub fn print_spans(spans: &[TokenSpan<'_>], output: &OutputArgs) -> Result<()> {
    let words: Vec<Vec<&str>> = spans
        .iter()
        .map(|span| span.iter().map(|t| t.text.as_str()).collect())
        .collect();

    if output.json {
        println!("{}", serde_json::to_string_pretty(&words)?);
    } else {
        for phrase in words {
            println!("{}", phrase.join(" "));
        }
    }

    Ok(())
}
