//! Environment variable overrides with warn-level logging for bad values.

/// Parse an environment variable, falling back to `default`.
///
/// An unset variable is the expected case and stays silent. A set but
/// unparseable value is logged at warn level before the default is used.
pub(crate) fn env_parse_with_default<T: std::str::FromStr + std::fmt::Display>(
    var: &str,
    default: T,
) -> T {
    match std::env::var(var) {
        Ok(v) => match v.trim().parse() {
            Ok(n) => n,
            Err(_) => {
                tracing::warn!(
                    var,
                    value = %v,
                    default = %default,
                    "invalid env var value, using default"
                );
                default
            },
        },
        Err(_) => default,
    }
}

/// Read a string variable; blank values count as unset.
pub(crate) fn env_string_with_default(var: &str, default: &str) -> String {
    match std::env::var(var) {
        Ok(v) if !v.trim().is_empty() => v.trim().to_owned(),
        _ => default.to_owned(),
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn set(var: &str, value: &str) {
        // SAFETY: each test uses a unique variable name.
        unsafe { std::env::set_var(var, value) };
    }

    fn unset(var: &str) {
        // SAFETY: each test uses a unique variable name.
        unsafe { std::env::remove_var(var) };
    }

    #[test]
    fn parses_valid_value() {
        let var = "APPSTORE_RANK_TEST_PARSE_VALID_5521";
        set(var, " 150 ");
        let result: u32 = env_parse_with_default(var, 200);
        assert_eq!(result, 150);
        unset(var);
    }

    #[test]
    fn invalid_value_falls_back() {
        let var = "APPSTORE_RANK_TEST_PARSE_INVALID_5522";
        set(var, "lots");
        let result: u32 = env_parse_with_default(var, 200);
        assert_eq!(result, 200);
        unset(var);
    }

    #[test]
    fn missing_var_falls_back() {
        let var = "APPSTORE_RANK_TEST_PARSE_MISSING_5523";
        unset(var);
        let result: u64 = env_parse_with_default(var, 30);
        assert_eq!(result, 30);
    }

    #[test]
    fn blank_string_counts_as_unset() {
        let var = "APPSTORE_RANK_TEST_STRING_BLANK_5524";
        set(var, "   ");
        assert_eq!(env_string_with_default(var, "RU"), "RU");
        set(var, " US ");
        assert_eq!(env_string_with_default(var, "RU"), "US");
        unset(var);
    }
}
