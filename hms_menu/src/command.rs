use std::fmt::Write as _;

pub const DEFAULT_TITLE: &str = "Hospital Management System";

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum MenuChoice {
    Add,
    List,
    Search,
    Modify,
    Exit,
}

impl MenuChoice {
    const LABELS: [&'static str; 5] = [
        "Add Patient",
        "Display Patients",
        "Search Patient",
        "Modify Patient Details",
        "Exit",
    ];

    /// Parse a menu selection. Only `1` to `5` are recognised.
    #[must_use]
    pub fn parse_from_text(text: &str) -> Option<Self> {
        match text.trim().parse::<u8>().ok()? {
            1 => Some(Self::Add),
            2 => Some(Self::List),
            3 => Some(Self::Search),
            4 => Some(Self::Modify),
            5 => Some(Self::Exit),
            _ => None,
        }
    }

    /// The menu block printed before each choice, without the prompt.
    #[must_use]
    pub fn menu_text(title: &str) -> String {
        let mut text = format!("\n{title}\n");
        for (number, label) in (1..).zip(Self::LABELS) {
            let _ = writeln!(text, "{number}. {label}");
        }
        text
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn parses_all_five_choices() {
        assert_eq!(MenuChoice::parse_from_text("1"), Some(MenuChoice::Add));
        assert_eq!(MenuChoice::parse_from_text("2"), Some(MenuChoice::List));
        assert_eq!(MenuChoice::parse_from_text("3"), Some(MenuChoice::Search));
        assert_eq!(MenuChoice::parse_from_text(" 4\n"), Some(MenuChoice::Modify));
        assert_eq!(MenuChoice::parse_from_text("5"), Some(MenuChoice::Exit));
    }

    #[test]
    fn rejects_out_of_range_and_text() {
        for text in ["0", "6", "-1", "", "add", "1.5", "999"] {
            assert_eq!(MenuChoice::parse_from_text(text), None, "input {text:?}");
        }
    }

    #[test]
    fn menu_lists_choices_in_order() {
        let text = MenuChoice::menu_text(DEFAULT_TITLE);
        assert_eq!(
            text,
            "\nHospital Management System\n\
             1. Add Patient\n\
             2. Display Patients\n\
             3. Search Patient\n\
             4. Modify Patient Details\n\
             5. Exit\n"
        );
    }
}
