use crate::Inputs;
use anyhow::{anyhow, Result};
use rusty_forms_rules::RulesRenderer;

pub fn execute(inputs: &Inputs, field: Option<&str>) -> Result<()> {
    let loaded = super::load(inputs)?;
    let renderer = RulesRenderer::new(&loaded.messages, loaded.config.render.clone());

    let script = match field {
        Some(name) => {
            let field = loaded
                .form
                .get(name)
                .ok_or_else(|| anyhow!("Field '{}' not found in {:?}", name, inputs.form))?;
            renderer.render_field(field)?
        }
        None => renderer.render_form(&loaded.form)?,
    };

    println!("{}", script);
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::commands::fixtures;

    const MESSAGES: &str = "error.required=Required\nerror.email=Invalid email\nerror.min=At least {0}";

    #[test]
    fn test_render_whole_form() {
        let dir = tempfile::tempdir().unwrap();
        let inputs = fixtures::write(dir.path(), MESSAGES);

        assert!(execute(&inputs, None).is_ok());
    }

    #[test]
    fn test_render_known_field() {
        let dir = tempfile::tempdir().unwrap();
        let inputs = fixtures::write(dir.path(), MESSAGES);

        assert!(execute(&inputs, Some("age")).is_ok());
    }

    #[test]
    fn test_render_unknown_field_fails() {
        let dir = tempfile::tempdir().unwrap();
        let inputs = fixtures::write(dir.path(), MESSAGES);

        let err = execute(&inputs, Some("nickname")).unwrap_err();
        assert!(err.to_string().contains("Field 'nickname' not found"));
    }

    #[test]
    fn test_render_missing_message_fails() {
        let dir = tempfile::tempdir().unwrap();
        let inputs = fixtures::write(dir.path(), "error.required=Required");

        assert!(execute(&inputs, None).is_err());
    }
}
