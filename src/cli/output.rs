//! Terminal output formatting with colors
//!
//! Respects NO_COLOR, CLICOLOR, CLICOLOR_FORCE automatically.

use colored::Colorize;

use crate::domain::Menu;

/// Print error (red bold "error:" prefix) to stderr
pub fn error(msg: &(impl std::fmt::Display + ?Sized)) {
    eprintln!("{}: {}", "error".red().bold(), msg);
}

/// Print warning (yellow "Warning:" prefix) to stderr
pub fn warning(msg: &(impl std::fmt::Display + ?Sized)) {
    eprintln!("{}: {}", "Warning".yellow(), msg);
}

/// Print section header (cyan bold)
pub fn header(msg: &(impl std::fmt::Display + ?Sized)) {
    println!("{}", msg.to_string().cyan().bold());
}

/// Print plain output (no color, for data)
pub fn info(msg: &(impl std::fmt::Display + ?Sized)) {
    println!("{}", msg);
}

/// One table row per stored menu; removed menus are dimmed
pub fn menu_row(menu: &Menu) -> String {
    let parent = menu
        .parent
        .map_or_else(|| "-".to_string(), |p| p.to_string());
    let row = format!("{:<12} {:<12} {}", menu.id, parent, menu.name);
    if menu.active {
        row
    } else {
        format!("{} {}", row.dimmed(), "(removed)".red())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn given_active_top_level_menu_when_formatting_then_parent_is_dash() {
        colored::control::set_override(false);
        let menu = Menu {
            id: 10,
            name: "A".into(),
            parent: None,
            children: None,
            active: true,
        };
        let row = menu_row(&menu);
        assert!(row.starts_with("10 "));
        assert!(row.contains(" - "));
        assert!(row.ends_with('A'));
    }

    #[test]
    fn given_removed_menu_when_formatting_then_marks_removed() {
        colored::control::set_override(false);
        let menu = Menu {
            id: 1010,
            name: "D".into(),
            parent: Some(10),
            children: None,
            active: false,
        };
        assert!(menu_row(&menu).ends_with("(removed)"));
    }
}
