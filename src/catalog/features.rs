//! Codec for the string-encoded `features` column.
//!
//! Upstream stores feature lists in a flat CSV cell as a bracketed list
//! literal of quoted strings, e.g. `['8GB VRAM', 'PCIe 4.0']`. Both quote
//! styles and backslash escapes are accepted. Decode failures are typed and
//! recoverable: the loader logs them and carries on with an empty list.

use thiserror::Error;

/// Reasons a features cell failed to decode.
#[derive(Debug, Error, PartialEq, Eq)]
pub enum FeaturesError {
    /// The cell is non-empty but not a `[...]` literal.
    #[error("not a bracketed list literal")]
    NotAList,

    /// A string element was opened but never closed.
    #[error("unterminated string literal")]
    UnterminatedString,

    /// Something other than a quoted string appeared inside the brackets.
    #[error("unexpected character {0:?} in list literal")]
    Unexpected(char),
}

/// Decodes a features cell into a list of feature strings.
///
/// An empty cell or an empty list literal decodes to an empty vec. Anything
/// that is not a list of quoted strings is an error; callers treat that as
/// "no features" after logging.
pub fn parse_features(value: &str) -> Result<Vec<String>, FeaturesError> {
    let trimmed = value.trim();
    if trimmed.is_empty() {
        return Ok(Vec::new());
    }

    let inner = trimmed
        .strip_prefix('[')
        .and_then(|rest| rest.strip_suffix(']'))
        .ok_or(FeaturesError::NotAList)?;

    let mut features = Vec::new();
    let mut chars = inner.chars().peekable();

    loop {
        // Skip whitespace between elements.
        while matches!(chars.peek(), Some(c) if c.is_whitespace()) {
            chars.next();
        }

        let quote = match chars.next() {
            None => break,
            Some(c @ ('\'' | '"')) => c,
            Some(c) => return Err(FeaturesError::Unexpected(c)),
        };

        let mut element = String::new();
        loop {
            match chars.next() {
                None => return Err(FeaturesError::UnterminatedString),
                Some('\\') => match chars.next() {
                    None => return Err(FeaturesError::UnterminatedString),
                    Some(escaped) => element.push(escaped),
                },
                Some(c) if c == quote => break,
                Some(c) => element.push(c),
            }
        }
        features.push(element);

        while matches!(chars.peek(), Some(c) if c.is_whitespace()) {
            chars.next();
        }

        match chars.next() {
            None => break,
            // Trailing commas are fine; the loop exit handles the end.
            Some(',') => continue,
            Some(c) => return Err(FeaturesError::Unexpected(c)),
        }
    }

    Ok(features)
}

/// Encodes features back into the upstream cell format.
pub fn encode_features(features: &[String]) -> String {
    let elements: Vec<String> = features
        .iter()
        .map(|f| format!("'{}'", f.replace('\\', "\\\\").replace('\'', "\\'")))
        .collect();
    format!("[{}]", elements.join(", "))
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_parse_single_quoted() {
        let features = parse_features("['8GB VRAM', 'PCIe 4.0']").unwrap();
        assert_eq!(features, vec!["8GB VRAM", "PCIe 4.0"]);
    }

    #[test]
    fn test_parse_double_quoted() {
        let features = parse_features(r#"["DLSS 3", "Ray Tracing"]"#).unwrap();
        assert_eq!(features, vec!["DLSS 3", "Ray Tracing"]);
    }

    #[test]
    fn test_parse_single_element() {
        let features = parse_features("['Triple Fan']").unwrap();
        assert_eq!(features, vec!["Triple Fan"]);
    }

    #[test]
    fn test_parse_empty_cell() {
        assert_eq!(parse_features("").unwrap(), Vec::<String>::new());
        assert_eq!(parse_features("   ").unwrap(), Vec::<String>::new());
    }

    #[test]
    fn test_parse_empty_list() {
        assert_eq!(parse_features("[]").unwrap(), Vec::<String>::new());
        assert_eq!(parse_features("[ ]").unwrap(), Vec::<String>::new());
    }

    #[test]
    fn test_parse_trailing_comma() {
        let features = parse_features("['a', 'b',]").unwrap();
        assert_eq!(features, vec!["a", "b"]);
    }

    #[test]
    fn test_parse_escapes() {
        let features = parse_features(r"['8\' cable', 'back\\slash']").unwrap();
        assert_eq!(features, vec!["8' cable", "back\\slash"]);
    }

    #[test]
    fn test_parse_not_a_list() {
        assert_eq!(parse_features("not a list"), Err(FeaturesError::NotAList));
        assert_eq!(parse_features("{'a': 1}"), Err(FeaturesError::NotAList));
    }

    #[test]
    fn test_parse_unterminated() {
        assert_eq!(parse_features("['oops"), Err(FeaturesError::NotAList));
        assert_eq!(parse_features("['oops]"), Err(FeaturesError::UnterminatedString));
    }

    #[test]
    fn test_parse_non_string_element() {
        assert_eq!(parse_features("[1, 2]"), Err(FeaturesError::Unexpected('1')));
    }

    #[test]
    fn test_encode() {
        let features = vec!["8GB VRAM".to_string(), "PCIe 4.0".to_string()];
        assert_eq!(encode_features(&features), "['8GB VRAM', 'PCIe 4.0']");
    }

    #[test]
    fn test_encode_empty() {
        assert_eq!(encode_features(&[]), "[]");
    }

    #[test]
    fn test_encode_decode_roundtrip_with_escapes() {
        let features = vec!["8' cable".to_string(), "back\\slash".to_string()];
        let encoded = encode_features(&features);
        assert_eq!(parse_features(&encoded).unwrap(), features);
    }
}
