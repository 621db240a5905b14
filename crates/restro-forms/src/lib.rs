// Restro Forms - form layer for the restaurant site
// Field specs, the built-in forms, display precedence and interaction state
// on top of the restro-forms-validation core.

pub mod config;
pub mod form;
pub mod form_field;
pub mod forms;
pub mod state;
pub mod submission;

// Re-export the validation core
pub use restro_forms_validation as validation;

pub use config::FormsConfig;
pub use form::{CrossFieldRule, FieldReport, FieldSpec, FormLevelError, FormReport, FormSpec, FormValues};
pub use form_field::{FieldAttrs, FormField};
pub use forms::{contact, login, registration, FormName, UnknownForm};
pub use state::{FieldState, FormState};
pub use submission::{parse_submission, values_from_json};
