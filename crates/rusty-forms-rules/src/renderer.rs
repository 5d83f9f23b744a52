// File: src/renderer.rs
// Purpose: Render jQuery-Validation `rules("add", ...)` calls for form fields

use crate::config::{MissingMessage, RenderConfig};
use crate::constraint::Constraint;
use crate::error::{Result, RulesError};
use crate::field::{Field, Form};
use crate::messages::MessageSource;
use tracing::{debug, warn};

/// A message template resolved for one constraint
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ResolvedMessage {
    /// Key the template was found under
    pub key: String,
    pub template: String,
    /// Whether the field-qualified key matched
    pub field_specific: bool,
}

/// Resolve the message for `constraint` on `field_name`
///
/// Tries `<field>.error.<name>` first, then `error.<name>`. When neither
/// is defined, returns [`RulesError::MissingMessage`] with both keys.
pub fn resolve_message<M>(messages: &M, field_name: &str, constraint: &Constraint) -> Result<ResolvedMessage>
where
    M: MessageSource + ?Sized,
{
    let field_key = constraint.field_message_key(field_name);
    if let Some(template) = messages.apply(&field_key) {
        return Ok(ResolvedMessage {
            key: field_key,
            template: template.to_string(),
            field_specific: true,
        });
    }

    let generic_key = constraint.message_key();
    match messages.apply(&generic_key) {
        Some(template) => Ok(ResolvedMessage {
            key: generic_key,
            template: template.to_string(),
            field_specific: false,
        }),
        None => Err(RulesError::MissingMessage {
            field: field_name.to_string(),
            constraint: constraint.keyword().to_string(),
            tried: vec![field_key, generic_key],
        }),
    }
}

/// Quote `value` as a JavaScript string literal safe inside `<script>`
pub fn js_string(value: &str) -> String {
    serde_json::Value::String(value.to_string())
        .to_string()
        .replace("</", "<\\/")
}

/// Renders validation rules against a message table
pub struct RulesRenderer<'a, M: MessageSource + ?Sized> {
    messages: &'a M,
    config: RenderConfig,
}

impl<'a, M: MessageSource + ?Sized> RulesRenderer<'a, M> {
    pub fn new(messages: &'a M, config: RenderConfig) -> Self {
        Self { messages, config }
    }

    /// Renderer with default settings
    pub fn with_defaults(messages: &'a M) -> Self {
        Self::new(messages, RenderConfig::default())
    }

    pub fn config(&self) -> &RenderConfig {
        &self.config
    }

    /// Render the `rules("add", ...)` call for one field
    pub fn render_field(&self, field: &Field) -> Result<String> {
        debug!(
            "Rendering rules for field '{}' ({} constraints)",
            field.name,
            field.constraints.len()
        );

        let pad = " ".repeat(self.config.indent);
        let mut lines = Vec::with_capacity(field.constraints.len() * 2 + 4);

        lines.push(format!(
            "$({}).rules(\"add\", {{",
            js_string(&format!("#{}", field.dom_id()))
        ));

        for constraint in &field.constraints {
            if constraint.lacks_args() {
                warn!(
                    "Rule '{}' on field '{}' has no arguments, its value will be empty",
                    constraint.keyword(),
                    field.name
                );
            }
            lines.push(format!(
                "{}{}: {},",
                pad,
                constraint.keyword(),
                constraint.rule_value()
            ));
        }

        let entries = self.message_entries(field)?;
        if entries.is_empty() {
            lines.push(format!("{}messages: {{}}", pad));
        } else {
            lines.push(format!("{}messages: {{", pad));
            let last = entries.len() - 1;
            for (i, entry) in entries.iter().enumerate() {
                let sep = if i == last { "" } else { "," };
                lines.push(format!("{}{}{}{}", pad, pad, entry, sep));
            }
            lines.push(format!("{}}}", pad));
        }

        lines.push("});".to_string());
        Ok(lines.join("\n"))
    }

    /// Render every field of the form in declaration order
    pub fn render_form(&self, form: &Form) -> Result<String> {
        let blocks = form
            .fields()
            .iter()
            .filter(|f| f.is_constrained() || !self.config.skip_unconstrained)
            .map(|f| self.render_field(f))
            .collect::<Result<Vec<_>>>()?;

        let body = blocks.join("\n\n");
        if !self.config.document_ready {
            return Ok(body);
        }

        let pad = " ".repeat(self.config.indent);
        let indented = body
            .lines()
            .map(|line| {
                if line.is_empty() {
                    String::new()
                } else {
                    format!("{}{}", pad, line)
                }
            })
            .collect::<Vec<_>>()
            .join("\n");

        Ok(format!("$(function() {{\n{}\n}});", indented))
    }

    /// Every message that cannot be resolved, regardless of policy
    pub fn missing_messages(&self, form: &Form) -> Vec<RulesError> {
        form.fields()
            .iter()
            .flat_map(|field| {
                field
                    .constraints
                    .iter()
                    .filter_map(move |c| resolve_message(self.messages, &field.name, c).err())
            })
            .collect()
    }

    fn message_entries(&self, field: &Field) -> Result<Vec<String>> {
        let mut entries = Vec::with_capacity(field.constraints.len());

        for constraint in &field.constraints {
            let template = match resolve_message(self.messages, &field.name, constraint) {
                Ok(resolved) => {
                    if !resolved.field_specific {
                        debug!("Field '{}' uses generic message '{}'", field.name, resolved.key);
                    }
                    resolved.template
                }
                Err(err @ RulesError::MissingMessage { .. }) => match self.config.missing_message {
                    MissingMessage::Error => return Err(err),
                    MissingMessage::Key => {
                        warn!("{}, emitting the key instead", err);
                        constraint.message_key()
                    }
                    MissingMessage::Omit => {
                        warn!("{}, omitting it", err);
                        continue;
                    }
                },
                Err(err) => return Err(err),
            };

            entries.push(format!(
                "{}: {}({})",
                constraint.keyword(),
                self.config.format_helper,
                js_string(&template)
            ));
        }

        Ok(entries)
    }
}
