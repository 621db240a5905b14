use colored::Colorize;
use restro_forms::validation::{patterns, FieldKind};

pub fn execute() {
    for pattern in patterns() {
        println!("{:<18} {}", pattern.kind().to_string().cyan(), pattern.source());
        for part in pattern.required_parts() {
            println!("{:<18} {} {}", "", "must contain".dimmed(), part);
        }
    }

    for kind in FieldKind::ALL.iter().filter(|kind| kind.is_composite()) {
        println!("{:<18} {}", kind.to_string().cyan(), "(validated by dedicated rule)".dimmed());
    }
}
