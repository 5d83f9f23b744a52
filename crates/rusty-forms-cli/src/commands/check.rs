use crate::Inputs;
use anyhow::{bail, Result};
use colored::Colorize;
use rusty_forms_rules::{RulesError, RulesRenderer};

pub fn execute(inputs: &Inputs) -> Result<()> {
    let loaded = super::load(inputs)?;
    let renderer = RulesRenderer::new(&loaded.messages, loaded.config.render.clone());
    let missing = renderer.missing_messages(&loaded.form);

    if missing.is_empty() {
        println!("{}", "✓ Every constraint has a message".green().bold());
        return Ok(());
    }

    println!("{}", "Missing messages:".red().bold());
    for err in &missing {
        if let RulesError::MissingMessage {
            field,
            constraint,
            tried,
        } = err
        {
            println!(
                "  {} {} (tried {})",
                field.cyan(),
                constraint.yellow(),
                tried.join(", ")
            );
        }
    }

    bail!("{} constraint(s) without a message", missing.len())
}
