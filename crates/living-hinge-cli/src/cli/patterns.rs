//! Patterns command - list the available hinge patterns.

use living_hinge::PatternKind;

/// One line per pattern: name, then description.
pub fn pattern_listing() -> String {
    let mut out = String::from("Available patterns:\n");
    for pattern in PatternKind::all() {
        out.push_str(&format!("  {:<10} {}\n", pattern.name(), pattern.description()));
    }
    out
}

pub fn cmd_patterns() {
    print!("{}", pattern_listing());
}
