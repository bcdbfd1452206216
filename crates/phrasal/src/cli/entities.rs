use anyhow::Result;

use super::input::read_document;
use super::OutputArgs;

pub fn run(file: &str, output: &OutputArgs) -> Result<()> {
    let document = read_document(file)?;
    let entities = document.entities();

    if output.json {
        println!("{}", serde_json::to_string_pretty(&entities)?);
        return Ok(());
    }

    for token in entities {
        match token.entity_type.as_deref() {
            Some(kind) if !kind.is_empty() => println!("{}\t{kind}", token.text),
            _ => println!("{}", token.text),
        }
    }

    Ok(())
}
