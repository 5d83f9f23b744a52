// File: src/field.rs
// Purpose: Form and field model that rule rendering reads from

use crate::constraint::{Constraint, ConstraintArg};
use crate::error::{Result, RulesError};
use serde::Deserialize;
use std::fs;
use std::path::Path;

/// A single form input and the constraints attached to it
#[derive(Debug, Clone, PartialEq)]
pub struct Field {
    /// Field name, also used for field-qualified message keys
    pub name: String,
    /// Explicit DOM id; derived from the name when absent
    pub id: Option<String>,
    /// Constraints in declaration order
    pub constraints: Vec<Constraint>,
}

impl Field {
    pub fn new(name: impl Into<String>) -> Self {
        Self {
            name: name.into(),
            id: None,
            constraints: Vec::new(),
        }
    }

    /// Override the DOM id used in the jQuery selector
    pub fn with_id(mut self, id: impl Into<String>) -> Self {
        self.id = Some(id.into());
        self
    }

    /// Append a constraint by its full name (`constraint.required`)
    pub fn constraint<A>(mut self, name: &str, args: impl IntoIterator<Item = A>) -> Result<Self>
    where
        A: Into<ConstraintArg>,
    {
        let args = args.into_iter().map(Into::into).collect();
        self.constraints.push(Constraint::new(name, args)?);
        Ok(self)
    }

    /// DOM id of the input
    ///
    /// `address.street` becomes `address_street`, `tags[0]` becomes `tags_0`.
    pub fn dom_id(&self) -> String {
        match &self.id {
            Some(id) => id.clone(),
            None => self
                .name
                .replace(['.', '['], "_")
                .replace(']', ""),
        }
    }

    pub fn is_constrained(&self) -> bool {
        !self.constraints.is_empty()
    }
}

/// An ordered collection of fields
#[derive(Debug, Clone, Default, PartialEq)]
pub struct Form {
    fields: Vec<Field>,
}

impl Form {
    pub fn new() -> Self {
        Self::default()
    }

    /// Append a field, keeping declaration order
    pub fn field(mut self, field: Field) -> Self {
        self.fields.push(field);
        self
    }

    pub fn fields(&self) -> &[Field] {
        &self.fields
    }

    /// Look up a field by name
    pub fn get(&self, name: &str) -> Option<&Field> {
        self.fields.iter().find(|f| f.name == name)
    }

    pub fn is_empty(&self) -> bool {
        self.fields.is_empty()
    }

    /// Parse a form definition from TOML
    pub fn from_toml(content: &str) -> Result<Self> {
        let def: FormDef = toml::from_str(content)?;
        def.into_form()
    }

    /// Load a form definition file
    pub fn load(path: impl AsRef<Path>) -> Result<Self> {
        let path = path.as_ref();
        let content = fs::read_to_string(path).map_err(|source| RulesError::Io {
            path: path.to_path_buf(),
            source,
        })?;
        Self::from_toml(&content)
    }
}

#[derive(Debug, Deserialize)]
struct FormDef {
    #[serde(default)]
    fields: Vec<FieldDef>,
}

#[derive(Debug, Deserialize)]
struct FieldDef {
    name: String,
    #[serde(default)]
    id: Option<String>,
    #[serde(default)]
    constraints: Vec<ConstraintDef>,
}

#[derive(Debug, Deserialize)]
struct ConstraintDef {
    name: String,
    #[serde(default)]
    args: Vec<ConstraintArg>,
}

impl FormDef {
    fn into_form(self) -> Result<Form> {
        let mut form = Form::new();
        for def in self.fields {
            let mut field = Field::new(def.name);
            field.id = def.id;
            for c in def.constraints {
                field.constraints.push(Constraint::new(&c.name, c.args)?);
            }
            form = form.field(field);
        }
        Ok(form)
    }
}
