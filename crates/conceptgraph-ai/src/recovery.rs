use serde::de::DeserializeOwned;
use serde_json::Map;

/// Outcome of lenient response parsing. Callers can tell "the model returned
/// clean JSON" apart from "the response was malformed but a JSON span inside
/// it parsed" and "nothing usable came back".
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Recovery<T> {
    /// The whole response parsed directly.
    Parsed(T),
    /// A bounded span inside the response parsed.
    Recovered(T),
    /// No parseable payload found.
    Empty,
}

impl<T> Recovery<T> {
    pub fn into_option(self) -> Option<T> {
        match self {
            Recovery::Parsed(value) | Recovery::Recovered(value) => Some(value),
            Recovery::Empty => None,
        }
    }

    pub fn unwrap_or_default(self) -> T
    where
        T: Default,
    {
        self.into_option().unwrap_or_default()
    }
}

/// Remove code-fence wrappers the model may emit around JSON payloads
/// (```json ... ``` or bare ``` ... ```).
pub fn strip_code_fences(raw: &str) -> &str {
    let trimmed = raw.trim();
    let Some(rest) = trimmed.strip_prefix("```") else {
        return trimmed;
    };
    // Drop an optional language tag on the fence line.
    let rest = rest
        .split_once('\n')
        .map(|(_, body)| body)
        .unwrap_or(rest.trim_start_matches("json"));
    rest.trim().trim_end_matches("```").trim()
}

/// Parse a JSON array response: direct parse first, then the first
/// `[...]` span, then give up.
pub fn recover_array<T: DeserializeOwned>(raw: &str) -> Recovery<Vec<T>> {
    let cleaned = strip_code_fences(raw);

    if let Ok(values) = serde_json::from_str::<Vec<T>>(cleaned) {
        return Recovery::Parsed(values);
    }

    if let Some(span) = bounded_span(cleaned, '[', ']') {
        if let Ok(values) = serde_json::from_str::<Vec<T>>(span) {
            return Recovery::Recovered(values);
        }
    }

    Recovery::Empty
}

/// Parse a JSON object response mapping strings to strings. Non-string values
/// inside an otherwise valid object are skipped rather than failing the whole
/// recovery.
pub fn recover_object(raw: &str) -> Recovery<Vec<(String, String)>> {
    let cleaned = strip_code_fences(raw);

    if let Ok(map) = serde_json::from_str::<Map<String, serde_json::Value>>(cleaned) {
        return Recovery::Parsed(string_pairs(map));
    }

    if let Some(span) = bounded_span(cleaned, '{', '}') {
        if let Ok(map) = serde_json::from_str::<Map<String, serde_json::Value>>(span) {
            return Recovery::Recovered(string_pairs(map));
        }
    }

    Recovery::Empty
}

fn string_pairs(map: Map<String, serde_json::Value>) -> Vec<(String, String)> {
    map.into_iter()
        .filter_map(|(key, value)| match value {
            serde_json::Value::String(s) => Some((key, s)),
            _ => None,
        })
        .collect()
}

fn bounded_span(text: &str, open: char, close: char) -> Option<&str> {
    let start = text.find(open)?;
    let end = text.rfind(close)?;
    if end <= start {
        return None;
    }
    Some(&text[start..=end])
}

#[cfg(test)]
mod tests {
    use super::*;
    use pretty_assertions::assert_eq;

    #[test]
    fn direct_parse_is_parsed() {
        let result = recover_array::<String>(r#"["cell", "nucleus"]"#);
        assert_eq!(
            result,
            Recovery::Parsed(vec!["cell".to_string(), "nucleus".to_string()])
        );
    }

    #[test]
    fn fenced_json_is_parsed() {
        let raw = "```json\n[\"mitochondria\"]\n```";
        let result = recover_array::<String>(raw);
        assert_eq!(result, Recovery::Parsed(vec!["mitochondria".to_string()]));
    }

    #[test]
    fn prose_wrapped_array_is_recovered() {
        let raw = "Here are the concepts you asked for:\n[\"dna\", \"rna\"]\nHope that helps!";
        let result = recover_array::<String>(raw);
        assert_eq!(
            result,
            Recovery::Recovered(vec!["dna".to_string(), "rna".to_string()])
        );
    }

    #[test]
    fn garbage_is_empty() {
        assert_eq!(recover_array::<String>("no json here"), Recovery::Empty);
        assert_eq!(recover_array::<String>(""), Recovery::Empty);
    }

    #[test]
    fn truncated_json_is_empty() {
        assert_eq!(
            recover_array::<String>(r#"["cell", "nucl"#),
            Recovery::Empty
        );
    }

    #[test]
    fn object_recovery_skips_non_strings() {
        let raw = r#"The mapping: {"long phrase": "short", "count": 3}"#;
        let result = recover_object(raw);
        assert_eq!(
            result,
            Recovery::Recovered(vec![("long phrase".to_string(), "short".to_string())])
        );
    }

    #[test]
    fn strip_fences_handles_bare_fence() {
        assert_eq!(strip_code_fences("```\n[1]\n```"), "[1]");
        assert_eq!(strip_code_fences("[1]"), "[1]");
    }
}
