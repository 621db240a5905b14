// File: src/form_field.rs
// Purpose: HTML5 and client-side validation attributes derived from field specs

use std::collections::BTreeMap;

use restro_forms_validation::{lookup, FieldKind, Rule};

use crate::form::{FieldSpec, FormSpec};

/// Attributes for a form field (HTML5 + data-validate JSON)
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct FieldAttrs {
    /// HTML5 native attributes (e.g., "required", "minlength", "type")
    pub html5_attrs: BTreeMap<String, String>,
    /// JSON of the field's rule descriptors for client-side validation
    pub data_validate: String,
}

impl FieldAttrs {
    pub fn from_spec(spec: &FieldSpec) -> Self {
        let mut html5_attrs = BTreeMap::new();
        let kind = spec.kind();

        html5_attrs.insert("type".to_string(), input_type(kind).to_string());

        for rule in spec.validator.rules() {
            match rule {
                Rule::Required => {
                    html5_attrs.insert("required".to_string(), String::new());
                }
                Rule::Length { min, max } => {
                    if let Some(min) = min {
                        html5_attrs.insert("minlength".to_string(), min.to_string());
                    }
                    if let Some(max) = max {
                        html5_attrs.insert("maxlength".to_string(), max.to_string());
                    }
                }
                Rule::Pattern => {
                    if let Some(pattern) = kind.and_then(lookup) {
                        html5_attrs.insert("pattern".to_string(), pattern.source().to_string());
                    }
                }
                Rule::NoSpaces | Rule::DateOfBirth(_) => {}
            }
        }

        let data_validate =
            serde_json::to_string(spec.validator.rules()).unwrap_or_else(|_| "[]".to_string());

        Self {
            html5_attrs,
            data_validate,
        }
    }

    /// Render HTML5 attributes as a string
    pub fn render_html5_attrs(&self) -> String {
        self.html5_attrs
            .iter()
            .map(|(k, v)| {
                if v.is_empty() {
                    k.clone()
                } else {
                    format!("{}=\"{}\"", k, escape_attr(v))
                }
            })
            .collect::<Vec<_>>()
            .join(" ")
    }

    /// Render data-validate attribute
    pub fn render_data_validate(&self) -> String {
        format!("data-validate='{}'", self.data_validate.replace('\'', "&#39;"))
    }

    /// Render all attributes (HTML5 + data-validate)
    pub fn render_all(&self) -> String {
        let html5 = self.render_html5_attrs();
        let validate = self.render_data_validate();

        if html5.is_empty() {
            validate
        } else {
            format!("{} {}", html5, validate)
        }
    }
}

fn input_type(kind: Option<FieldKind>) -> &'static str {
    match kind {
        Some(FieldKind::Email) => "email",
        Some(FieldKind::Mobile) => "tel",
        Some(FieldKind::Password | FieldKind::ConfirmPassword) => "password",
        Some(FieldKind::DateOfBirth) => "date",
        Some(FieldKind::Name) | None => "text",
    }
}

fn escape_attr(value: &str) -> String {
    value
        .replace('&', "&amp;")
        .replace('"', "&quot;")
        .replace('<', "&lt;")
        .replace('>', "&gt;")
}

/// Forms that can describe their fields to a template
pub trait FormField {
    /// Get field attributes for the specified field name
    fn field_attrs(&self, field_name: &str) -> Option<FieldAttrs>;

    /// Get all field names, in declaration order
    fn field_names(&self) -> Vec<&str>;
}

impl FormField for FormSpec {
    fn field_attrs(&self, field_name: &str) -> Option<FieldAttrs> {
        self.get(field_name).map(FieldAttrs::from_spec)
    }

    fn field_names(&self) -> Vec<&str> {
        self.fields().iter().map(|field| field.name.as_str()).collect()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::config::FormsConfig;
    use crate::forms::{contact, registration};

    #[test]
    fn test_mobile_attrs() {
        let form = registration(&FormsConfig::default());
        let attrs = form.field_attrs("mobile").unwrap();

        assert_eq!(attrs.html5_attrs.get("type").map(String::as_str), Some("tel"));
        assert_eq!(attrs.html5_attrs.get("required").map(String::as_str), Some(""));
        assert_eq!(
            attrs.html5_attrs.get("pattern").map(String::as_str),
            Some("^[0-9]{10}$")
        );
        assert_eq!(
            attrs.render_all(),
            r#"pattern="^[0-9]{10}$" required type="tel" data-validate='[{"rule":"required"},{"rule":"pattern"}]'"#
        );
    }

    #[test]
    fn test_length_attrs() {
        let form = contact(&FormsConfig::default());
        let attrs = form.field_attrs("message").unwrap();
        assert_eq!(attrs.html5_attrs.get("minlength").map(String::as_str), Some("10"));
        assert_eq!(attrs.html5_attrs.get("maxlength").map(String::as_str), Some("1000"));
        assert!(!attrs.html5_attrs.contains_key("pattern"));
    }

    #[test]
    fn test_password_pattern_is_escaped() {
        let form = registration(&FormsConfig::default());
        let attrs = form.field_attrs("password").unwrap();
        assert!(attrs.render_html5_attrs().contains("&amp;"));
        assert_eq!(attrs.html5_attrs.get("type").map(String::as_str), Some("password"));
    }

    #[test]
    fn test_field_names() {
        let form = contact(&FormsConfig::default());
        assert_eq!(
            form.field_names(),
            [
                "firstName",
                "lastName",
                "email",
                "phone",
                "subject",
                "message",
                "subscribe",
                "reservationDate",
                "reservationTime",
                "partySize"
            ]
        );
        assert!(form.field_attrs("nickname").is_none());
    }
}
