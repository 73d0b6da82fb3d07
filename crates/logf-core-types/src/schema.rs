//! Canonical schema constants for the message wire format and override keys
//!
//! These constants ensure the formatter, resolver, and tests agree on the
//! exact textual format and the exact override-source key names.

// Message prefixes
pub const ENTER_PREFIX: &str = "->|";
pub const EXIT_PREFIX: &str = "<-|";
pub const SINGLE_PREFIX: &str = "<>|";
pub const ERROR_PREFIX: &str = "ERROR";

// Truncation marker appended to over-length renderings
pub const ELLIPSIS: &str = "...";

// Identifier alphabet and length (64^6 combinations)
pub const ID_ALPHABET: &str = "ABCDEFGHIJKLMNOPQRSTUVWXYZabcdefghijklmnopqrstuvwxyz0123456789_-";
pub const ID_LEN: usize = 6;

// Defaults
pub const DEFAULT_MAX_STR_LEN: usize = 1000;
pub const TIME_PRECISION: usize = 5;

// Override-source keys, one per configuration option
pub const KEY_LEVEL: &str = "LOGF_LEVEL";
pub const KEY_MIN_LEVEL: &str = "LOGF_MIN_LEVEL";
pub const KEY_LOG_ARGS: &str = "LOGF_LOG_ARGS";
pub const KEY_LOG_RETURN: &str = "LOGF_LOG_RETURN";
pub const KEY_MAX_STR_LEN: &str = "LOGF_MAX_STR_LEN";
pub const KEY_LOG_EXEC_TIME: &str = "LOGF_LOG_EXEC_TIME";
pub const KEY_SINGLE_MSG: &str = "LOGF_SINGLE_MSG";
pub const KEY_USE_PRINT: &str = "LOGF_USE_PRINT";
pub const KEY_USE_LOGGER: &str = "LOGF_USE_LOGGER";
pub const KEY_STACK_INFO: &str = "LOGF_STACK_INFO";
pub const KEY_LOG_EXCEPTION: &str = "LOGF_LOG_EXCEPTION";
pub const KEY_SINGLE_EXCEPTION: &str = "LOGF_SINGLE_EXCEPTION";
pub const KEY_IDENTIFIER: &str = "LOGF_IDENTIFIER";
pub const KEY_REFRESH: &str = "LOGF_REFRESH";

/// All override keys, in resolution order
pub const OVERRIDE_KEYS: &[&str] = &[
    KEY_LEVEL,
    KEY_MIN_LEVEL,
    KEY_LOG_ARGS,
    KEY_LOG_RETURN,
    KEY_MAX_STR_LEN,
    KEY_LOG_EXEC_TIME,
    KEY_SINGLE_MSG,
    KEY_USE_PRINT,
    KEY_USE_LOGGER,
    KEY_STACK_INFO,
    KEY_LOG_EXCEPTION,
    KEY_SINGLE_EXCEPTION,
    KEY_IDENTIFIER,
    KEY_REFRESH,
];

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_prefixes_are_distinct() {
        assert_ne!(ENTER_PREFIX, EXIT_PREFIX);
        assert_ne!(ENTER_PREFIX, SINGLE_PREFIX);
        assert_ne!(EXIT_PREFIX, SINGLE_PREFIX);
    }

    #[test]
    fn test_override_keys_unique_and_prefixed() {
        let distinct: std::collections::HashSet<_> = OVERRIDE_KEYS.iter().collect();
        assert_eq!(distinct.len(), OVERRIDE_KEYS.len());
        for key in OVERRIDE_KEYS {
            assert!(key.starts_with("LOGF_"), "bad key: {}", key);
        }
    }

    #[test]
    fn test_alphabet_covers_word_chars() {
        assert_eq!(ID_ALPHABET.len(), 64);
        assert!(ID_ALPHABET.contains('_'));
        assert!(ID_ALPHABET.contains('-'));
    }
}
