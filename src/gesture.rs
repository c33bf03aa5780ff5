//! Turns raw input lines into discrete deck commands.

use std::fmt;

/// Which way the front card was swiped. Only renderers care about this.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum SwipeDirection {
    Left,
    Right,
}

impl SwipeDirection {
    #[must_use]
    pub const fn as_str(&self) -> &'static str {
        match self {
            Self::Left => "left",
            Self::Right => "right",
        }
    }
}

impl fmt::Display for SwipeDirection {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Gesture {
    /// Dismiss the front card.
    Dismiss(SwipeDirection),
    /// Jump to the first profile whose location contains the text.
    Find(String),
    /// Redraw the current window.
    Show,
    Quit,
}

/// Result of parsing one input line.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Parsed {
    Gesture(Gesture),
    Blank,
    Unknown(String),
}

const ARROW_RIGHT: &str = "\u{1b}[C";
const ARROW_LEFT: &str = "\u{1b}[D";

/// Parse a single line of user input.
#[must_use]
pub fn parse_line(line: &str) -> Parsed {
    let line = line.trim();
    if line.is_empty() {
        return Parsed::Blank;
    }
    if let Some(query) = line.strip_prefix('/') {
        return find(query);
    }
    let (word, rest) = match line.split_once(char::is_whitespace) {
        Some((word, rest)) => (word, rest.trim()),
        None => (line, ""),
    };
    // Escape sequences are case-sensitive; words are not.
    match word {
        ARROW_RIGHT => return Parsed::Gesture(Gesture::Dismiss(SwipeDirection::Right)),
        ARROW_LEFT => return Parsed::Gesture(Gesture::Dismiss(SwipeDirection::Left)),
        _ => {}
    }
    let gesture = match word.to_ascii_lowercase().as_str() {
        "right" | "r" => Gesture::Dismiss(SwipeDirection::Right),
        "left" | "l" => Gesture::Dismiss(SwipeDirection::Left),
        "find" => return find(rest),
        "show" => Gesture::Show,
        "quit" | "q" | "exit" => Gesture::Quit,
        _ => return Parsed::Unknown(line.to_string()),
    };
    Parsed::Gesture(gesture)
}

fn find(query: &str) -> Parsed {
    let query = query.trim();
    if query.is_empty() {
        Parsed::Unknown("find needs a location".to_string())
    } else {
        Parsed::Gesture(Gesture::Find(query.to_string()))
    }
}
