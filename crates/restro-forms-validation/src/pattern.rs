//! Pattern registry
//!
//! Fixed mapping from simple field kinds to the regular expression their
//! values must fully match. Composite kinds (date of birth, password
//! confirmation) have no entry and are handled by dedicated validators.

use once_cell::sync::Lazy;
use regex::Regex;

use crate::kind::FieldKind;

/// A compiled full-match pattern plus any sub-patterns the value must also contain
#[derive(Debug)]
pub struct Pattern {
    kind: FieldKind,
    source: &'static str,
    full: Regex,
    requires: Vec<Regex>,
}

impl Pattern {
    fn compile(kind: FieldKind, source: &'static str, requires: &[&'static str]) -> Self {
        Self {
            kind,
            source,
            full: Regex::new(source).expect("registry pattern must compile"),
            requires: requires
                .iter()
                .map(|part| Regex::new(part).expect("registry pattern must compile"))
                .collect(),
        }
    }

    pub fn kind(&self) -> FieldKind {
        self.kind
    }

    /// Anchored source of the full-match expression
    pub fn source(&self) -> &'static str {
        self.source
    }

    /// Sources of the sub-patterns that must each appear somewhere in the value
    pub fn required_parts(&self) -> impl Iterator<Item = &str> {
        self.requires.iter().map(Regex::as_str)
    }

    /// True when the whole value matches and every required part is present
    pub fn matches(&self, value: &str) -> bool {
        self.full.is_match(value) && self.requires.iter().all(|part| part.is_match(value))
    }
}

const EMAIL: &str = r"^[a-z0-9._%+-]+@[a-z0-9.-]+\.[a-z]{2,4}$";
const NAME: &str = r"^[a-zA-Z ]*$";
const MOBILE: &str = r"^[0-9]{10}$";

// At least 8 characters from the allowed set, with one of each class below.
const PASSWORD: &str = r"^[A-Za-z0-9@$!%*?&]{8,}$";
const PASSWORD_PARTS: &[&str] = &[r"[a-z]", r"[A-Z]", r"[0-9]", r"[@$!%*?&]"];

static REGISTRY: Lazy<Vec<Pattern>> = Lazy::new(|| {
    vec![
        Pattern::compile(FieldKind::Email, EMAIL, &[]),
        Pattern::compile(FieldKind::Password, PASSWORD, PASSWORD_PARTS),
        Pattern::compile(FieldKind::Name, NAME, &[]),
        Pattern::compile(FieldKind::Mobile, MOBILE, &[]),
    ]
});

/// Returns the pattern for `kind`, or `None` for composite kinds
pub fn lookup(kind: FieldKind) -> Option<&'static Pattern> {
    REGISTRY.iter().find(|pattern| pattern.kind == kind)
}

/// Every registered pattern, in registry order
pub fn patterns() -> &'static [Pattern] {
    &REGISTRY
}
