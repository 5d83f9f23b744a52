// File: src/constraint.rs
// Purpose: Constraint names mapped to jQuery-Validation rule keywords

use crate::error::{Result, RulesError};
use serde::{Deserialize, Serialize};
use std::fmt;

/// Prefix every constraint name carries in the form model
pub const CONSTRAINT_PREFIX: &str = "constraint.";

/// Prefix of generic error message keys (`error.required`, `error.minlength`, ...)
pub const ERROR_PREFIX: &str = "error.";

/// Known constraint kinds, with a fallback for anything else
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub enum ConstraintKind {
    Required,
    Email,
    Min,
    Max,
    MinLength,
    MaxLength,
    Pattern,
    /// Unrecognized constraint, holding its lowercased keyword
    Other(String),
}

impl ConstraintKind {
    /// Parse a `constraint.X` name. X is matched case-insensitively.
    pub fn parse(name: &str) -> Result<Self> {
        let suffix = strip_prefix(name)?;
        Ok(Self::from_suffix(suffix))
    }

    fn from_suffix(suffix: &str) -> Self {
        let keyword = suffix.to_lowercase();
        match keyword.as_str() {
            "required" => Self::Required,
            "email" => Self::Email,
            "min" => Self::Min,
            "max" => Self::Max,
            "minlength" => Self::MinLength,
            "maxlength" => Self::MaxLength,
            "pattern" => Self::Pattern,
            _ => Self::Other(keyword),
        }
    }

    /// Rule keyword as emitted in the rules object and the messages block
    pub fn keyword(&self) -> &str {
        match self {
            Self::Required => "required",
            Self::Email => "email",
            Self::Min => "min",
            Self::Max => "max",
            Self::MinLength => "minlength",
            Self::MaxLength => "maxlength",
            Self::Pattern => "pattern",
            Self::Other(keyword) => keyword,
        }
    }

    /// Flag rules render as `true` and ignore their arguments
    pub fn is_flag(&self) -> bool {
        matches!(self, Self::Required | Self::Email)
    }
}

impl fmt::Display for ConstraintKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.keyword())
    }
}

fn strip_prefix(name: &str) -> Result<&str> {
    let suffix = name
        .strip_prefix(CONSTRAINT_PREFIX)
        .ok_or_else(|| RulesError::MissingPrefix {
            name: name.to_string(),
        })?;

    if suffix.is_empty() {
        return Err(RulesError::EmptyConstraint {
            name: name.to_string(),
        });
    }

    Ok(suffix)
}

/// A single constraint argument
///
/// Arguments come from the form definition and are written into the
/// generated script with their plain `Display` form.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(untagged)]
pub enum ConstraintArg {
    Int(i64),
    Float(f64),
    Bool(bool),
    Text(String),
}

impl fmt::Display for ConstraintArg {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Int(v) => write!(f, "{}", v),
            Self::Float(v) => write!(f, "{}", v),
            Self::Bool(v) => write!(f, "{}", v),
            Self::Text(v) => f.write_str(v),
        }
    }
}

impl From<i64> for ConstraintArg {
    fn from(value: i64) -> Self {
        Self::Int(value)
    }
}

impl From<i32> for ConstraintArg {
    fn from(value: i32) -> Self {
        Self::Int(value.into())
    }
}

impl From<f64> for ConstraintArg {
    fn from(value: f64) -> Self {
        Self::Float(value)
    }
}

impl From<bool> for ConstraintArg {
    fn from(value: bool) -> Self {
        Self::Bool(value)
    }
}

impl From<&str> for ConstraintArg {
    fn from(value: &str) -> Self {
        Self::Text(value.to_string())
    }
}

impl From<String> for ConstraintArg {
    fn from(value: String) -> Self {
        Self::Text(value)
    }
}

/// A constraint attached to a field
#[derive(Debug, Clone, PartialEq)]
pub struct Constraint {
    pub kind: ConstraintKind,
    /// Name after the prefix, spelled as declared (`minLength`)
    pub suffix: String,
    pub args: Vec<ConstraintArg>,
}

impl Constraint {
    /// Build a constraint from its full name and arguments
    pub fn new(name: &str, args: Vec<ConstraintArg>) -> Result<Self> {
        let suffix = strip_prefix(name)?;
        Ok(Self {
            kind: ConstraintKind::from_suffix(suffix),
            suffix: suffix.to_string(),
            args,
        })
    }

    /// Rule keyword (`required`, `minlength`, ...)
    pub fn keyword(&self) -> &str {
        self.kind.keyword()
    }

    /// JavaScript value of the rule
    ///
    /// Flags render as `true`; everything else is the argument list
    /// concatenated without a separator.
    pub fn rule_value(&self) -> String {
        if self.kind.is_flag() {
            return "true".to_string();
        }

        self.args.iter().map(ToString::to_string).collect()
    }

    /// Non-flag rule declared without arguments; renders an empty value
    pub fn lacks_args(&self) -> bool {
        !self.kind.is_flag() && self.args.is_empty()
    }

    /// Generic message key: `error.<keyword>`
    pub fn message_key(&self) -> String {
        format!("{}{}", ERROR_PREFIX, self.keyword())
    }

    /// Field-qualified message key: `<field>.error.<keyword>`
    pub fn field_message_key(&self, field_name: &str) -> String {
        format!("{}.{}", field_name, self.message_key())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use rstest::rstest;

    #[rstest]
    #[case("constraint.required", ConstraintKind::Required)]
    #[case("constraint.Required", ConstraintKind::Required)]
    #[case("constraint.email", ConstraintKind::Email)]
    #[case("constraint.Email", ConstraintKind::Email)]
    #[case("constraint.minLength", ConstraintKind::MinLength)]
    #[case("constraint.maxlength", ConstraintKind::MaxLength)]
    #[case("constraint.min", ConstraintKind::Min)]
    #[case("constraint.MAX", ConstraintKind::Max)]
    #[case("constraint.pattern", ConstraintKind::Pattern)]
    #[case("constraint.equalTo", ConstraintKind::Other("equalto".to_string()))]
    fn test_parse_kind(#[case] name: &str, #[case] expected: ConstraintKind) {
        assert_eq!(ConstraintKind::parse(name).unwrap(), expected);
    }

    #[test]
    fn test_keyword_is_lowercase() {
        let kind = ConstraintKind::parse("constraint.CreditCard").unwrap();
        assert_eq!(kind.keyword(), "creditcard");
    }

    #[test]
    fn test_prefix_stripped_once() {
        let c = Constraint::new("constraint.constraint.x", vec![]).unwrap();
        assert_eq!(c.suffix, "constraint.x");
    }

    #[test]
    fn test_missing_prefix_rejected() {
        let err = ConstraintKind::parse("required").unwrap_err();
        assert!(matches!(err, RulesError::MissingPrefix { .. }));
    }

    #[test]
    fn test_empty_suffix_rejected() {
        let err = Constraint::new("constraint.", vec![]).unwrap_err();
        assert!(matches!(err, RulesError::EmptyConstraint { .. }));
    }

    #[test]
    fn test_flag_rules_ignore_args() {
        let c = Constraint::new("constraint.required", vec!["ignored".into()]).unwrap();
        assert_eq!(c.rule_value(), "true");
    }

    #[test]
    fn test_args_joined_as_is() {
        let c = Constraint::new("constraint.minlength", vec![2.into()]).unwrap();
        assert_eq!(c.rule_value(), "2");

        let c = Constraint::new("constraint.range", vec![1.into(), 5.into()]).unwrap();
        assert_eq!(c.rule_value(), "15");
    }

    #[test]
    fn test_message_keys_use_lowercased_keyword() {
        let c = Constraint::new("constraint.minLength", vec![3.into()]).unwrap();
        assert_eq!(c.suffix, "minLength");
        assert_eq!(c.keyword(), "minlength");
        assert_eq!(c.message_key(), "error.minlength");
        assert_eq!(c.field_message_key("name"), "name.error.minlength");
    }

    #[test]
    fn test_message_keys_ignore_declared_case() {
        for name in ["constraint.Email", "constraint.email", "constraint.EMAIL"] {
            let c = Constraint::new(name, vec![]).unwrap();
            assert_eq!(c.message_key(), "error.email");
            assert_eq!(c.field_message_key("contact"), "contact.error.email");
        }
    }

    #[test]
    fn test_lacks_args() {
        assert!(Constraint::new("constraint.digits", vec![]).unwrap().lacks_args());
        assert!(!Constraint::new("constraint.required", vec![]).unwrap().lacks_args());
        assert!(!Constraint::new("constraint.min", vec![1.into()]).unwrap().lacks_args());
    }
}
