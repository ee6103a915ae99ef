use serde::Serialize;
use validator::{ValidationError, ValidationErrors, ValidationErrorsKind};

#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct ValidationErrorContent {
    pub field: String,
    pub messages: Vec<String>,
}

impl ValidationErrorContent {
    /// One entry per invalid field, ordered by its dotted path.
    pub fn from_errors(errors: &ValidationErrors) -> Vec<Self> {
        let mut contents = flatten(errors, None);
        contents.sort_by(|a, b| a.field.cmp(&b.field));
        contents
    }
}

pub(super) fn describe(errors: &ValidationErrors) -> String {
    ValidationErrorContent::from_errors(errors)
        .into_iter()
        .map(|content| format!("`{}` {}", content.field, content.messages.join(", ")))
        .collect::<Vec<String>>()
        .join("; ")
}

fn flatten(errors: &ValidationErrors, parent: Option<&str>) -> Vec<ValidationErrorContent> {
    errors
        .errors()
        .iter()
        .flat_map(|(name, kind)| {
            let path = match parent {
                Some(parent) => format!("{parent}.{name}"),
                None => name.to_string(),
            };
            match kind {
                ValidationErrorsKind::Field(errs) => vec![ValidationErrorContent {
                    field: path,
                    messages: errs.iter().map(message).collect(),
                }],
                ValidationErrorsKind::Struct(nested) => flatten(nested, Some(&path)),
                ValidationErrorsKind::List(items) => items
                    .iter()
                    .flat_map(|(index, nested)| flatten(nested, Some(&format!("{path}[{index}]"))))
                    .collect(),
            }
        })
        .collect()
}

fn message(error: &ValidationError) -> String {
    match (error.code.as_ref(), &error.message) {
        ("required", _) => "required".into(),
        (_, Some(message)) => message.to_string(),
        (code, None) => format!("invalid {code}"),
    }
}
