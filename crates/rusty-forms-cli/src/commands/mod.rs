pub mod check;
pub mod render;

use crate::Inputs;
use anyhow::{Context, Result};
use rusty_forms_rules::{Form, MessageBundle, RulesConfig};
use std::path::PathBuf;
use tracing::info;

/// Everything a command needs, loaded from the command-line inputs
pub struct Loaded {
    pub config: RulesConfig,
    pub form: Form,
    pub messages: MessageBundle,
}

/// Load config, form and messages; command-line flags win over the config file
pub fn load(inputs: &Inputs) -> Result<Loaded> {
    let config = match &inputs.config {
        Some(path) => RulesConfig::load(path)?,
        None => RulesConfig::load_default()?,
    };

    let form = Form::load(&inputs.form)
        .with_context(|| format!("Failed to load form: {:?}", inputs.form))?;

    let dir = inputs
        .messages
        .clone()
        .unwrap_or_else(|| PathBuf::from(&config.messages.dir));
    let lang = inputs.lang.as_deref().or(config.messages.lang.as_deref());

    let messages = MessageBundle::load(&dir, lang)
        .with_context(|| format!("Failed to load messages from {:?}", dir))?;

    info!(
        "Loaded {} fields from {:?} and {} message tables from {:?}",
        form.fields().len(),
        inputs.form,
        messages.tables().len(),
        dir
    );

    Ok(Loaded {
        config,
        form,
        messages,
    })
}


#[cfg(test)]
mod tests {
    use super::*;
    use rusty_forms_rules::MessageSource;
    use std::fs;

    fn inputs(dir: &std::path::Path, lang: Option<&str>) -> Inputs {
        Inputs {
            form: dir.join("form.toml"),
            messages: None,
            lang: lang.map(str::to_string),
            config: Some(dir.join("rules.toml")),
        }
    }

    #[test]
    fn test_load_uses_config_messages_dir() {
        let dir = tempfile::tempdir().unwrap();
        let conf = dir.path().join("i18n");
        fs::create_dir(&conf).unwrap();
        fs::write(conf.join("messages"), "error.required=Required").unwrap();
        fs::write(conf.join("messages.fr"), "error.required=Obligatoire").unwrap();
        fs::write(
            dir.path().join("form.toml"),
            "[[fields]]\nname = \"age\"\nconstraints = [{ name = \"constraint.required\" }]\n",
        )
        .unwrap();
        fs::write(
            dir.path().join("rules.toml"),
            format!("[messages]\ndir = {:?}\nlang = \"fr\"\n", conf.display().to_string()),
        )
        .unwrap();

        let loaded = load(&inputs(dir.path(), None)).unwrap();
        assert_eq!(loaded.form.fields().len(), 1);
        assert_eq!(loaded.messages.apply("error.required"), Some("Obligatoire"));
    }

    #[test]
    fn test_load_missing_form_fails() {
        let dir = tempfile::tempdir().unwrap();
        assert!(load(&inputs(dir.path(), None)).is_err());
    }

    #[test]
    fn test_load_without_config_flag_uses_defaults() {
        let dir = tempfile::tempdir().unwrap();
        let mut inputs = fixtures::write(dir.path(), "error.required=Required");
        inputs.config = None;

        let loaded = load(&inputs).unwrap();
        assert_eq!(loaded.config.render.indent, 4);
        assert_eq!(loaded.form.fields().len(), 2);
    }
}
