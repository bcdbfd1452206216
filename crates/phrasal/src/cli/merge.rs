use anyhow::{Context, Result};
use phrasal_core::{merge_tokens, Token};

use super::input::read_document;
use super::{ExtractArgs, OutputArgs};

/// Prints one line per noun phrase: the detached determiner (if any) and the
/// merged token, separated by a tab.
pub fn run(
    file: &str,
    extract: &ExtractArgs,
    merge_det: bool,
    join: &str,
    output: &OutputArgs,
) -> Result<()> {
    let config = extract.to_config()?;
    let document = read_document(file)?;
    let phrases = document
        .noun_phrases(&config)
        .context("noun phrase extraction failed")?;

    let mut merged: Vec<Vec<Token>> = Vec::with_capacity(phrases.len());
    for phrase in phrases {
        let owned: Vec<Token> = phrase.into_iter().cloned().collect();
        merged.push(merge_tokens(&owned, merge_det, join)?);
    }

    if output.json {
        println!("{}", serde_json::to_string_pretty(&merged)?);
        return Ok(());
    }

    for tokens in merged {
        let line: Vec<String> = tokens
            .iter()
            .map(|t| match t.pos {
                Some(pos) => format!("{t}/{pos}"),
                None => t.to_string(),
            })
            .collect();
        println!("{}", line.join("\t"));
    }

    Ok(())
}
