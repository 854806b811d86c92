//! Pulls a JSON value out of free-form model output.
//!
//! Models are told to answer with bare JSON but regularly wrap it in a code
//! fence, prefix it with a sentence, or both. `parse_json` tries the cheap
//! path first (strip fences, parse) and falls back to scanning the balanced
//! objects and arrays in the text, left to right, for the first one that
//! deserializes into the wanted type.

use serde::de::{DeserializeOwned, IgnoredAny};

const FENCE: &str = "```";

/// Strips a leading ```` ``` ```` / ```` ```json ```` line and a trailing ```` ``` ````.
///
/// The text after the opening fence is only dropped when it is a bare
/// language tag, so one-line fences like ```` ```{"a":1}``` ```` keep their body.
pub fn strip_json_fences(text: &str) -> &str {
    let mut text = text.trim();

    if let Some(rest) = text.strip_prefix(FENCE) {
        text = match rest.split_once('\n') {
            Some((tag, body)) if is_language_tag(tag) => body,
            None if is_language_tag(rest) => "",
            _ => rest,
        };
    }

    let text = text.trim();
    text.strip_suffix(FENCE).unwrap_or(text).trim()
}

fn is_language_tag(s: &str) -> bool {
    s.trim().chars().all(|c| c.is_ascii_alphanumeric())
}

/// Returns the first balanced `{...}` or `[...]` slice that parses as JSON.
pub fn extract_json(text: &str) -> Option<&str> {
    candidates(text).find(|candidate| serde_json::from_str::<IgnoredAny>(candidate).is_ok())
}

/// Every balanced `{...}` or `[...]` slice, ordered by start offset.
/// Slices may nest or overlap.
fn candidates(text: &str) -> impl Iterator<Item = &str> {
    text.char_indices()
        .filter(|&(_, c)| c == '{' || c == '[')
        .filter_map(move |(start, _)| {
            balanced_end(&text[start..]).map(|len| &text[start..start + len])
        })
}

/// Byte length of the balanced value at the start of `text`, if it closes.
fn balanced_end(text: &str) -> Option<usize> {
    let mut closers: Vec<char> = Vec::new();
    let mut in_string = false;
    let mut escaped = false;

    for (i, c) in text.char_indices() {
        if in_string {
            match c {
                _ if escaped => escaped = false,
                '\\' => escaped = true,
                '"' => in_string = false,
                _ => {}
            }
            continue;
        }

        match c {
            '"' => in_string = true,
            '{' => closers.push('}'),
            '[' => closers.push(']'),
            '}' | ']' => {
                if closers.pop() != Some(c) {
                    return None;
                }
                if closers.is_empty() {
                    return Some(i + c.len_utf8());
                }
            }
            _ => {}
        }
    }

    None
}

/// Deserializes model output into `T`, tolerating fences and surrounding prose.
///
/// Bracketed prose such as `[1]` ahead of the answer is skipped: the first
/// embedded value that fits `T` wins. On failure the error from the direct
/// parse attempt is returned.
pub fn parse_json<T: DeserializeOwned>(text: &str) -> Result<T, serde_json::Error> {
    let cleaned = strip_json_fences(text);
    serde_json::from_str(cleaned).or_else(|direct| {
        candidates(cleaned)
            .find_map(|candidate| serde_json::from_str(candidate).ok())
            .ok_or(direct)
    })
}

#[cfg(test)]
mod tests {
    use super::*;
    use rand::rngs::StdRng;
    use rand::{Rng, SeedableRng};
    use serde::Deserialize;
    use serde_json::{json, Value};

    #[derive(Debug, Deserialize, PartialEq)]
    struct Sample {
        key: String,
    }

    #[test]
    fn test_strip_json_fences_with_json_tag() {
        let input = "```json\n{\"key\": \"value\"}\n```";
        assert_eq!(strip_json_fences(input), "{\"key\": \"value\"}");
    }

    #[test]
    fn test_strip_json_fences_without_tag() {
        let input = "```\n{\"key\": \"value\"}\n```";
        assert_eq!(strip_json_fences(input), "{\"key\": \"value\"}");
    }

    #[test]
    fn test_strip_json_fences_no_fences() {
        let input = "{\"key\": \"value\"}";
        assert_eq!(strip_json_fences(input), "{\"key\": \"value\"}");
    }

    #[test]
    fn test_strip_json_fences_single_line_fence_keeps_body() {
        let input = "```{\"key\": \"value\"}```";
        assert_eq!(strip_json_fences(input), "{\"key\": \"value\"}");
    }

    #[test]
    fn test_strip_json_fences_unterminated_fence() {
        let input = "```json\n{\"key\": \"value\"}";
        assert_eq!(strip_json_fences(input), "{\"key\": \"value\"}");
    }

    #[test]
    fn test_extract_json_skips_prose() {
        let input = "Sure! Here is the result:\n{\"key\": \"value\"}\nLet me know.";
        assert_eq!(extract_json(input), Some("{\"key\": \"value\"}"));
    }

    #[test]
    fn test_extract_json_ignores_braces_inside_strings() {
        let input = r#"prefix {"key": "a } tricky { value"} suffix"#;
        assert_eq!(extract_json(input), Some(r#"{"key": "a } tricky { value"}"#));
    }

    #[test]
    fn test_extract_json_handles_escaped_quotes() {
        let input = r#"{"key": "say \"hi\" {"} trailing"#;
        assert_eq!(extract_json(input), Some(r#"{"key": "say \"hi\" {"}"#));
    }

    #[test]
    fn test_extract_json_skips_non_json_braces() {
        let input = "Use {placeholders} like this: {\"key\": \"value\"}";
        assert_eq!(extract_json(input), Some("{\"key\": \"value\"}"));
    }

    #[test]
    fn test_extract_json_rejects_mismatched_brackets() {
        assert_eq!(extract_json("{\"a\": [1, 2}"), None);
    }

    #[test]
    fn test_extract_json_none_for_plain_text() {
        assert_eq!(extract_json("no structure here at all"), None);
    }

    #[test]
    fn test_parse_json_fenced_inside_prose() {
        let input = "Here you go:\n```json\n{\"key\": \"value\"}\n```\nThanks!";
        let parsed: Sample = parse_json(input).unwrap();
        assert_eq!(parsed.key, "value");
    }

    #[test]
    fn test_parse_json_skips_bracketed_prose_before_answer() {
        let input = "Ranked by weight [1]:\n{\"key\": \"value\"}";
        assert_eq!(extract_json(input), Some("[1]"));
        let parsed: Sample = parse_json(input).unwrap();
        assert_eq!(parsed.key, "value");
    }

    #[test]
    fn test_parse_json_skips_empty_object_in_prose() {
        let input = "An empty {} would be wrong, so: {\"other\": 1} then {\"key\": \"last\"}";
        let parsed: Sample = parse_json(input).unwrap();
        assert_eq!(parsed.key, "last");
    }

    #[test]
    fn test_parse_json_reports_error_for_garbage() {
        assert!(parse_json::<Sample>("definitely not json").is_err());
    }

    #[test]
    fn test_parse_json_wrong_shape_is_error() {
        assert!(parse_json::<Sample>("{\"other\": 1}").is_err());
    }

    const NOISE: &[char] = &[
        '{', '}', '[', ']', '"', '\\', '`', 'j', 's', 'o', 'n', '\n', ' ', 'a', '1', ':', ',',
    ];
    const PROSE: &[char] = &['`', 'j', 's', 'o', 'n', '\n', ' ', 'a', '.', ':', '"', '!'];

    fn random_string(rng: &mut StdRng, alphabet: &[char], max_len: usize) -> String {
        let len = rng.gen_range(0..=max_len);
        (0..len)
            .map(|_| alphabet[rng.gen_range(0..alphabet.len())])
            .collect()
    }

    #[test]
    fn test_fuzz_extract_json_never_returns_invalid_json() {
        let mut rng = StdRng::seed_from_u64(0x5eed);
        for _ in 0..5_000 {
            let input = random_string(&mut rng, NOISE, 48);
            if let Some(found) = extract_json(&input) {
                assert!(input.contains(found));
                assert!(serde_json::from_str::<Value>(found).is_ok(), "{found:?}");
            }
            let _ = parse_json::<Value>(&input);
        }
    }

    #[test]
    fn test_fuzz_parse_json_recovers_wrapped_object() {
        let mut rng = StdRng::seed_from_u64(42);
        let payload = json!({"key": "value with } and ``` inside", "n": [1, 2, {"x": null}]});
        let encoded = payload.to_string();

        for _ in 0..2_000 {
            let prefix = random_string(&mut rng, PROSE, 24);
            let suffix = random_string(&mut rng, NOISE, 24);
            let fenced = rng.gen_bool(0.5);
            let input = if fenced {
                format!("{prefix}```json\n{encoded}\n```{suffix}")
            } else {
                format!("{prefix}{encoded}{suffix}")
            };

            let parsed: Value = parse_json(&input)
                .unwrap_or_else(|e| panic!("failed on {input:?}: {e}"));
            assert_eq!(parsed, payload, "input: {input:?}");
        }
    }
}
