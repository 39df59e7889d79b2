//! Relay utility functions.

/// Expand `${VAR}` patterns in a string with environment variable values.
///
/// Unknown variables are replaced with an empty string. A `${` without a
/// closing brace is kept verbatim.
pub fn expand_env_vars(input: &str) -> String {
    let mut result = String::with_capacity(input.len());
    let mut rest = input;

    while let Some(start) = rest.find("${") {
        result.push_str(&rest[..start]);
        let after = &rest[start + 2..];
        let Some(end) = after.find('}') else {
            result.push_str(&rest[start..]);
            return result;
        };
        if let Ok(val) = std::env::var(&after[..end]) {
            result.push_str(&val);
        }
        rest = &after[end + 1..];
    }

    result.push_str(rest);
    result
}
