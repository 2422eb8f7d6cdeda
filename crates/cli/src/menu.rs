//! Numbered menu options.

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum MenuOption {
    ViewAll,
    AddShoe,
    Restock,
    ValuePerItem,
    Search,
    HighestQuantity,
    Exit,
}

impl MenuOption {
    /// Display order; position + 1 is the option number.
    pub const ALL: [MenuOption; 7] = [
        MenuOption::ViewAll,
        MenuOption::AddShoe,
        MenuOption::Restock,
        MenuOption::ValuePerItem,
        MenuOption::Search,
        MenuOption::HighestQuantity,
        MenuOption::Exit,
    ];

    pub fn number(self) -> usize {
        Self::ALL
            .iter()
            .position(|o| *o == self)
            .map_or(0, |idx| idx + 1)
    }

    pub fn label(self) -> &'static str {
        match self {
            MenuOption::ViewAll => "View all shoes",
            MenuOption::AddShoe => "Add a new shoe",
            MenuOption::Restock => "Check shoe with lowest quantity and re-stock",
            MenuOption::ValuePerItem => "View total value for each item",
            MenuOption::Search => "Search for a shoe using the shoe code",
            MenuOption::HighestQuantity => "Find shoe with highest quantity",
            MenuOption::Exit => "Exit",
        }
    }

    /// Parse a selection such as `"3"`. Anything outside 1..=7 is `None`.
    pub fn from_selection(raw: &str) -> Option<Self> {
        let n: usize = raw.trim().parse().ok()?;
        n.checked_sub(1).and_then(|idx| Self::ALL.get(idx).copied())
    }
}

/// The menu as printed before each selection.
pub fn render_menu() -> String {
    let mut out = String::from("\nHere are the options:");
    for option in MenuOption::ALL {
        out.push_str(&format!("\n{}: {}", option.number(), option.label()));
    }
    out
}
