//! C identifier handling for output prefixes.
//!
//! The output prefix names the generated header and the wavetable symbols
//! inside it, so it has to be a valid C identifier:
//! `[A-Za-z_][A-Za-z0-9_]*`.

/// Derive a C identifier from a file name.
///
/// Strips the extension (everything after the last `.`), replaces each
/// character outside `[A-Za-z0-9_]` with `_` and prefixes `_` when the result
/// would start with a digit. An empty stem becomes `"_"`, so the result is
/// always a valid identifier.
pub fn sanitize(raw_name: &str) -> String {
    let stem = match raw_name.rfind('.') {
        Some(dot) => &raw_name[..dot],
        None => raw_name,
    };

    let mut ident: String = stem
        .chars()
        .map(|c| if c.is_ascii_alphanumeric() || c == '_' { c } else { '_' })
        .collect();

    if ident.is_empty() || ident.starts_with(|c: char| c.is_ascii_digit()) {
        ident.insert(0, '_');
    }

    ident
}

/// Check `text` against the identifier grammar.
pub fn is_valid_identifier(text: &str) -> bool {
    let mut chars = text.chars();
    match chars.next() {
        Some(first) if first.is_ascii_alphabetic() || first == '_' => {
            chars.all(|c| c.is_ascii_alphanumeric() || c == '_')
        }
        _ => false,
    }
}

/// Validation state of the prefix field.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum PrefixStatus {
    /// Nothing typed yet. Not an error, but not usable either.
    Empty,
    Valid,
    Invalid,
}

impl PrefixStatus {
    pub fn of(text: &str) -> Self {
        if text.is_empty() {
            Self::Empty
        } else if is_valid_identifier(text) {
            Self::Valid
        } else {
            Self::Invalid
        }
    }

    /// Whether the prefix can be sent to the server.
    pub fn is_usable(self) -> bool {
        self == Self::Valid
    }

    /// Whether the inline error should be shown.
    pub fn shows_error(self) -> bool {
        self == Self::Invalid
    }
}
