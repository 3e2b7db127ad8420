//! Field Validation
//!
//! Checks a [`FoodForm`] against a [`ValidationSchema`] before anything is
//! sent to the remote collection. Every field is checked, so all violations
//! are reported together.

use std::collections::BTreeMap;

use serde::Serialize;

use crate::domain::{FoodField, FoodForm, NewFood};

pub const REQUIRED_MESSAGE: &str = "Campo obrigatório.";
pub const POSITIVE_PRICE_MESSAGE: &str = "O valor do prato deve ser maior que zero.";

/// A single field rule
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Rule {
    /// Fails on an empty or whitespace-only value
    Required(&'static str),
    /// Fails unless the value parses to a finite number greater than zero
    PositiveNumber(&'static str),
}

impl Rule {
    fn check(&self, value: &str) -> Result<(), &'static str> {
        let value = value.trim();
        match self {
            Rule::Required(message) if value.is_empty() => Err(*message),
            Rule::PositiveNumber(message) => match value.parse::<f64>() {
                Ok(number) if number.is_finite() && number > 0.0 => Ok(()),
                _ => Err(*message),
            },
            Rule::Required(_) => Ok(()),
        }
    }
}

/// Ordered field → rules mapping
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ValidationSchema {
    fields: Vec<(FoodField, Vec<Rule>)>,
}

impl ValidationSchema {
    pub fn new() -> Self {
        Self { fields: Vec::new() }
    }

    pub fn field(mut self, field: FoodField, rules: Vec<Rule>) -> Self {
        self.fields.push((field, rules));
        self
    }

    /// Rules for the add and edit modals
    pub fn food() -> Self {
        Self::new()
            .field(FoodField::Name, vec![Rule::Required(REQUIRED_MESSAGE)])
            .field(FoodField::Image, vec![Rule::Required(REQUIRED_MESSAGE)])
            .field(
                FoodField::Price,
                vec![
                    Rule::Required(REQUIRED_MESSAGE),
                    Rule::PositiveNumber(POSITIVE_PRICE_MESSAGE),
                ],
            )
            .field(FoodField::Description, vec![Rule::Required(REQUIRED_MESSAGE)])
    }
}

impl Default for ValidationSchema {
    fn default() -> Self {
        Self::food()
    }
}

/// Field name → message, one entry per failing field
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize)]
#[serde(transparent)]
pub struct FieldErrors(BTreeMap<FoodField, String>);

impl FieldErrors {
    pub fn get(&self, field: FoodField) -> Option<&str> {
        self.0.get(&field).map(String::as_str)
    }

    pub fn is_empty(&self) -> bool {
        self.0.is_empty()
    }

    pub fn len(&self) -> usize {
        self.0.len()
    }

    pub fn iter(&self) -> impl Iterator<Item = (FoodField, &str)> {
        self.0.iter().map(|(field, message)| (*field, message.as_str()))
    }

    fn insert(&mut self, field: FoodField, message: &str) {
        self.0.insert(field, message.to_string());
    }
}

impl std::fmt::Display for FieldErrors {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        let parts: Vec<String> = self
            .iter()
            .map(|(field, message)| format!("{}: {}", field, message))
            .collect();
        write!(f, "{}", parts.join(", "))
    }
}

/// Validate a form. Within one field the first failing rule wins.
pub fn validate(record: &FoodForm, schema: &ValidationSchema) -> Result<NewFood, FieldErrors> {
    let mut errors = FieldErrors::default();

    for (field, rules) in &schema.fields {
        let value = record.get(*field);
        if let Some(message) = rules.iter().find_map(|rule| rule.check(value).err()) {
            errors.insert(*field, message);
        }
    }

    if !errors.is_empty() {
        return Err(errors);
    }

    Ok(NewFood {
        name: record.name.trim().to_string(),
        image: record.image.trim().to_string(),
        price: record.price.trim().to_string(),
        description: record.description.trim().to_string(),
    })
}
