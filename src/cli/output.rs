//! Terminal output formatting with colors
//!
//! Respects NO_COLOR, CLICOLOR, CLICOLOR_FORCE automatically.

use colored::Colorize;

/// Print error (red bold "error:" prefix) to stderr
pub fn error(msg: &(impl std::fmt::Display + ?Sized)) {
    eprintln!("{}: {}", "error".red().bold(), msg);
}

/// Print notice (yellow plus) to stdout
pub fn notice(msg: &(impl std::fmt::Display + ?Sized)) {
    println!(" {} {}", "+".yellow(), msg);
}

/// Print success status (green plus)
pub fn success(msg: &(impl std::fmt::Display + ?Sized)) {
    println!(" {} {}", "+".green(), msg);
}

/// Print indented detail (no color)
pub fn detail(msg: &(impl std::fmt::Display + ?Sized)) {
    println!(" + {}", msg);
}

/// Print section header (cyan bold)
pub fn header(msg: &(impl std::fmt::Display + ?Sized)) {
    println!("{}", msg.to_string().cyan().bold());
}

/// Print raw text to stderr (usage banner)
pub fn usage(msg: &(impl std::fmt::Display + ?Sized)) {
    eprintln!("{}", msg);
}
