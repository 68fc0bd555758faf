//! Main menu: six numbered actions.

use core::fmt::Write as _;

#[derive(Debug, Copy, Clone, PartialEq, Eq, Hash)]
pub enum MenuChoice {
    Add,
    Update,
    Delete,
    Search,
    ViewAll,
    Exit,
}

impl MenuChoice {
    pub const ALL: [MenuChoice; 6] = [
        MenuChoice::Add,
        MenuChoice::Update,
        MenuChoice::Delete,
        MenuChoice::Search,
        MenuChoice::ViewAll,
        MenuChoice::Exit,
    ];

    pub fn code(self) -> &'static str {
        match self {
            MenuChoice::Add => "1",
            MenuChoice::Update => "2",
            MenuChoice::Delete => "3",
            MenuChoice::Search => "4",
            MenuChoice::ViewAll => "5",
            MenuChoice::Exit => "6",
        }
    }

    pub fn label(self) -> &'static str {
        match self {
            MenuChoice::Add => "Add Product (Sack of Rice)",
            MenuChoice::Update => "Update Product",
            MenuChoice::Delete => "Delete Product",
            MenuChoice::Search => "Search Product",
            MenuChoice::ViewAll => "View All Products",
            MenuChoice::Exit => "Exit",
        }
    }

    /// Exact match on the trimmed input; `"01"` or `"1."` are not choices.
    pub fn parse(input: &str) -> Option<Self> {
        let input = input.trim();
        Self::ALL.into_iter().find(|c| c.code() == input)
    }
}

const MENU_BORDER: &str = "+----+------------------------------------+";

/// The boxed menu, starting with a blank line.
pub fn render_menu() -> String {
    let mut out = String::new();
    let _ = writeln!(out, "\nInventory Management System");
    let _ = writeln!(out, "{MENU_BORDER}");
    let _ = writeln!(out, "| No |              Action                |");
    let _ = writeln!(out, "{MENU_BORDER}");
    for choice in MenuChoice::ALL {
        let _ = writeln!(out, "| {:<2} | {:<34} |", choice.code(), choice.label());
    }
    let _ = writeln!(out, "{MENU_BORDER}");
    out
}
