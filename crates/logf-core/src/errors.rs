use logf_core_types::ParseLevelError;
use thiserror::Error;

/// Failures while parsing a typed value from the override source.
///
/// These never reach the wrapped callable's caller: the resolver swallows
/// them and falls back to the explicit option or the built-in default.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum ParseError {
    /// Value is not a case-insensitive "true"/"false"
    #[error("invalid boolean: {value}")]
    Bool { value: String },

    /// Value is neither an integer nor the literal "none"
    #[error("invalid integer-or-none: {value}")]
    Int { value: String },

    /// Value is not a recognized level name or numeric severity
    #[error(transparent)]
    Level(#[from] ParseLevelError),
}

impl ParseError {
    /// Get the stable error code for this parse failure
    pub fn code(&self) -> &'static str {
        match self {
            ParseError::Bool { .. } => "ERR_PARSE_BOOL",
            ParseError::Int { .. } => "ERR_PARSE_INT",
            ParseError::Level(_) => "ERR_PARSE_LEVEL",
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_parse_error_codes() {
        let cases: [(ParseError, &str); 3] = [
            (
                ParseError::Bool {
                    value: "yes".into(),
                },
                "ERR_PARSE_BOOL",
            ),
            (ParseError::Int { value: "x".into() }, "ERR_PARSE_INT"),
            (
                ParseError::Level(ParseLevelError {
                    value: "loud".into(),
                }),
                "ERR_PARSE_LEVEL",
            ),
        ];
        for (err, expected_code) in cases {
            assert_eq!(err.code(), expected_code, "Wrong code for {:?}", err);
        }
    }

    #[test]
    fn test_level_error_message_passes_through() {
        let err = ParseError::from(ParseLevelError {
            value: "loud".into(),
        });
        assert!(err.to_string().contains("loud"));
    }
}
