//! Error codes for Monkey diagnostics.

/// Error codes for categorizing diagnostics.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ErrorCode {
    // Lexical errors (E0001 - E0099)
    IllegalCharacter,
}

impl ErrorCode {
    pub fn as_str(&self) -> &'static str {
        match self {
            ErrorCode::IllegalCharacter => "E0001",
        }
    }

    /// A short description of the error code.
    pub fn description(&self) -> &'static str {
        match self {
            ErrorCode::IllegalCharacter => "character is not part of the Monkey language",
        }
    }
}

impl std::fmt::Display for ErrorCode {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.as_str())
    }
}
