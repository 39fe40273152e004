//! Character -> key-action lookup for the keystroke synthesizer.
//!
//! xte's `str` instruction can only carry characters that need no special key
//! handling; everything else (whitespace, shifted punctuation, characters
//! significant to shell or script syntax) must be typed as a named keysym or
//! as a shift chord. This module is the single table deciding which path each
//! character takes.

/// How a single special character is injected on the target.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum KeyAction {
    /// A single named keysym press (`key <name>`).
    Named(&'static str),
    /// A base key pressed while a modifier is held down
    /// (`keydown <modifier>` / `key <key>` / `keyup <modifier>`).
    Chord {
        modifier: &'static str,
        key: &'static str,
    },
}

const SHIFT: &str = "Shift_L";

/// Looks up the key action for a character the injector cannot type inside a
/// literal run.
///
/// Returns `None` for every character that is safe to batch into a `str`
/// instruction verbatim; such characters (letters, digits, and anything else
/// absent from the table, printable or not) are accumulated into literal runs
/// by the synthesizer and passed through unmodified.
pub fn special_key(c: char) -> Option<KeyAction> {
    use KeyAction::{Chord, Named};

    let action = match c {
        '\t' => Named("Tab"),
        ' ' => Named("space"),
        '/' => Named("slash"),
        '\\' => Named("backslash"),
        '.' => Named("period"),
        ',' => Named("comma"),
        ';' => Named("semicolon"),
        ':' => Named("colon"),
        '\'' => Named("apostrophe"),
        '"' => Named("quotedbl"),
        '[' => Named("bracketleft"),
        ']' => Named("bracketright"),
        '=' => Named("equal"),
        '-' => Named("minus"),
        '`' => Named("grave"),
        '{' => Chord {
            modifier: SHIFT,
            key: "bracketleft",
        },
        '}' => Chord {
            modifier: SHIFT,
            key: "bracketright",
        },
        '(' => Chord {
            modifier: SHIFT,
            key: "9",
        },
        ')' => Chord {
            modifier: SHIFT,
            key: "0",
        },
        '!' => Chord {
            modifier: SHIFT,
            key: "1",
        },
        '@' => Chord {
            modifier: SHIFT,
            key: "2",
        },
        '#' => Chord {
            modifier: SHIFT,
            key: "3",
        },
        '$' => Chord {
            modifier: SHIFT,
            key: "4",
        },
        '%' => Chord {
            modifier: SHIFT,
            key: "5",
        },
        '^' => Chord {
            modifier: SHIFT,
            key: "6",
        },
        '&' => Chord {
            modifier: SHIFT,
            key: "7",
        },
        '*' => Chord {
            modifier: SHIFT,
            key: "8",
        },
        '+' => Chord {
            modifier: SHIFT,
            key: "equal",
        },
        '_' => Chord {
            modifier: SHIFT,
            key: "minus",
        },
        '?' => Chord {
            modifier: SHIFT,
            key: "slash",
        },
        '<' => Chord {
            modifier: SHIFT,
            key: "comma",
        },
        '>' => Chord {
            modifier: SHIFT,
            key: "period",
        },
        '|' => Chord {
            modifier: SHIFT,
            key: "backslash",
        },
        '~' => Chord {
            modifier: SHIFT,
            key: "grave",
        },
        _ => return None,
    };

    Some(action)
}
