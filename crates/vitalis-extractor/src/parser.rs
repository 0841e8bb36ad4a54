//! Parse raw survey text into an answer set

use regex::{Captures, Regex};
use serde_json::{Map, Value};
use std::sync::LazyLock;
use tracing::debug;
use vitalis_domain::{AnswerSet, Field};

static AGE: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"(?i)\bage\b[ \t]*:?[ \t]*(\d+)").expect("valid age pattern"));

static SMOKER: LazyLock<Regex> = LazyLock::new(|| {
    Regex::new(r"(?i)\bsmok(?:er|ing)\b[ \t]*:?[ \t]*(yes|no|true|false)\b")
        .expect("valid smoker pattern")
});

static EXERCISE: LazyLock<Regex> = LazyLock::new(|| {
    Regex::new(
        r"(?i)\bexercise\b[ \t]*:?[ \t]*((?:never|rarely|sometimes|often|daily)\b|[a-z]+(?:[ \t]+[a-z]+)*)",
    )
    .expect("valid exercise pattern")
});

// The run never starts on the separator and ends at a newline, end of text,
// or the next capitalized "Label:"
static DIET: LazyLock<Regex> = LazyLock::new(|| {
    Regex::new(
        r"(?i)\bdiet\b[ \t]*:?[ \t]*([^:\s][^\n]*?)[ \t]*(?:\r?\n|$|[ \t](?-i:[A-Z][A-Za-z]*)[ \t]*:)",
    )
    .expect("valid diet pattern")
});

static LEADING_LABEL: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"^[A-Z][A-Za-z]*[ \t]*:").expect("valid label pattern"));

static BMI: LazyLock<Regex> = LazyLock::new(|| {
    Regex::new(r"(?i)\bbmi\b[ \t]*:?[ \t]*(\d+(?:\.\d+)?)").expect("valid bmi pattern")
});

static SLEEP: LazyLock<Regex> = LazyLock::new(|| {
    Regex::new(r"(?i)\bsleep\b[ \t]*:?[ \t]*(\d+(?:\.\d+)?)").expect("valid sleep pattern")
});

static ALCOHOL: LazyLock<Regex> = LazyLock::new(|| {
    Regex::new(r"(?i)\balcohol\b[ \t]*:?[ \t]*(yes|no|true|false|never|rarely|sometimes|often)\b")
        .expect("valid alcohol pattern")
});

/// Structured fast path
///
/// Returns `Some` only when the trimmed input starts with `{` and parses as a
/// JSON object. Anything else yields `None` so the caller can fall back to
/// pattern extraction; a parse failure is noted at debug level, never raised.
pub fn parse_structured(text: &str) -> Option<AnswerSet> {
    let trimmed = text.trim();
    if !trimmed.starts_with('{') {
        return None;
    }

    match serde_json::from_str::<Value>(trimmed) {
        Ok(Value::Object(object)) => Some(answers_from_object(&object)),
        Ok(_) => {
            debug!("Input starts with '{{' but is not a JSON object, using pattern extraction");
            None
        }
        Err(e) => {
            debug!("Structured parse failed ({}), using pattern extraction", e);
            None
        }
    }
}

/// Convert a JSON object to an answer set, noting keys outside the vocabulary
pub(crate) fn answers_from_object(object: &Map<String, Value>) -> AnswerSet {
    let unknown = AnswerSet::unknown_keys(object);
    if !unknown.is_empty() {
        debug!("Ignoring unknown survey keys: {}", unknown.join(", "));
    }
    AnswerSet::from_json_object(object)
}

/// Run every field detector over free text
///
/// Detectors are independent and case-insensitive. A field that no detector
/// finds is left out of the answer set entirely.
pub fn extract_fields(text: &str) -> AnswerSet {
    let mut answers = AnswerSet::new();

    if let Some(age) = capture(&AGE, text).and_then(|raw| parse_age(&raw)) {
        answers.insert(Field::Age, age);
    }

    if let Some(smoker) = capture(&SMOKER, text) {
        answers.insert(Field::Smoker, matches!(smoker.to_lowercase().as_str(), "yes" | "true"));
    }

    if let Some(exercise) = EXERCISE.captures(text).and_then(|caps| exercise_value(text, &caps)) {
        answers.insert(Field::Exercise, exercise);
    }

    if let Some(diet) = capture(&DIET, text) {
        let diet = diet.trim();
        // "Diet: Age: 42" leaves the diet blank
        if !diet.is_empty() && !LEADING_LABEL.is_match(diet) {
            answers.insert(Field::Diet, diet);
        }
    }

    for (field, pattern) in [(Field::Bmi, &BMI), (Field::Sleep, &SLEEP)] {
        if let Some(value) = capture(pattern, text).and_then(|raw| raw.parse::<f64>().ok()) {
            answers.insert(field, value);
        }
    }

    if let Some(alcohol) = capture(&ALCOHOL, text) {
        answers.insert(Field::Alcohol, normalize_alcohol(&alcohol));
    }

    debug!("Pattern extraction found {} field(s)", answers.len());
    answers
}

fn capture(pattern: &Regex, text: &str) -> Option<String> {
    pattern
        .captures(text)
        .and_then(|caps| caps.get(1))
        .map(|m| m.as_str().to_string())
}

fn parse_age(raw: &str) -> Option<i64> {
    match raw.parse::<i64>() {
        Ok(age) => Some(age),
        Err(e) => {
            debug!("Age '{}' is not representable: {}", raw, e);
            None
        }
    }
}

/// Lower-cased exercise value
///
/// A free-form run that swallowed the next label ("walking Diet:") drops
/// that trailing word.
fn exercise_value(text: &str, caps: &Captures<'_>) -> Option<String> {
    let matched = caps.get(1)?;
    let mut value = matched.as_str().trim().to_string();

    let followed_by_colon = text[matched.end()..].trim_start_matches([' ', '\t']).starts_with(':');
    if followed_by_colon {
        value = match value.rsplit_once([' ', '\t']) {
            Some((head, _label)) => head.trim_end().to_string(),
            None => return None,
        };
    }

    let value = value.to_lowercase();
    (!value.is_empty()).then_some(value)
}

/// `yes`/`true`/`often`/`sometimes` are kept; every other answer becomes `"no"`
fn normalize_alcohol(raw: &str) -> String {
    let lowered = raw.to_lowercase();
    match lowered.as_str() {
        "yes" | "true" | "often" | "sometimes" => lowered,
        _ => "no".to_string(),
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    #[test]
    fn test_labelled_lines() {
        let answers = extract_fields("Age: 42\nSmoker: yes\nExercise: rarely\nDiet: high sugar");
        assert_eq!(answers.integer(Field::Age), Some(42));
        assert_eq!(answers.boolean(Field::Smoker), Some(true));
        assert_eq!(answers.text(Field::Exercise), Some("rarely"));
        assert_eq!(answers.text(Field::Diet), Some("high sugar"));
        assert_eq!(answers.len(), 4);
    }

    #[test]
    fn test_case_insensitive_and_whitespace_separator() {
        let answers = extract_fields("AGE 57 SMOKING false exercise DAILY");
        assert_eq!(answers.integer(Field::Age), Some(57));
        assert_eq!(answers.boolean(Field::Smoker), Some(false));
        assert_eq!(answers.text(Field::Exercise), Some("daily"));
    }

    #[test]
    fn test_age_requires_word_boundary() {
        let answers = extract_fields("Average: 12\nPage 3");
        assert_eq!(answers.get(Field::Age), None);
    }

    #[test]
    fn test_diet_stops_at_next_label() {
        let answers = extract_fields("Diet: fried chicken and soda Sleep: 5.5 Alcohol: often");
        assert_eq!(answers.text(Field::Diet), Some("fried chicken and soda"));
        assert_eq!(answers.number(Field::Sleep), Some(5.5));
        assert_eq!(answers.text(Field::Alcohol), Some("often"));
    }

    #[test]
    fn test_diet_runs_to_end_of_text() {
        let answers = extract_fields("diet: mostly processed food, some Fruit");
        assert_eq!(answers.text(Field::Diet), Some("mostly processed food, some Fruit"));
    }

    #[test]
    fn test_bare_diet_label_is_missing() {
        let answers = extract_fields("Age: 42\nSmoker: no\nExercise: daily\nDiet:");
        assert!(!answers.is_present(Field::Diet));
        assert_eq!(answers.missing_required(), vec![Field::Diet]);

        let answers = extract_fields("Diet:\nAge: 42");
        assert!(!answers.is_present(Field::Diet));
        assert_eq!(answers.integer(Field::Age), Some(42));

        let answers = extract_fields("Diet:   \nAge: 42");
        assert!(!answers.is_present(Field::Diet));
    }

    #[test]
    fn test_diet_followed_by_label_is_missing() {
        let answers = extract_fields("Diet: Age: 42");
        assert!(!answers.is_present(Field::Diet));
        assert!(answers.missing_required().contains(&Field::Diet));
    }

    #[test]
    fn test_free_form_exercise_drops_trailing_label() {
        let answers = extract_fields("Exercise: light walking Diet: balanced");
        assert_eq!(answers.text(Field::Exercise), Some("light walking"));
        assert_eq!(answers.text(Field::Diet), Some("balanced"));
    }

    #[test]
    fn test_decimal_fields() {
        let answers = extract_fields("BMI: 31.4\nSleep: 8");
        assert_eq!(answers.number(Field::Bmi), Some(31.4));
        assert_eq!(answers.number(Field::Sleep), Some(8.0));
    }

    #[test]
    fn test_alcohol_normalization() {
        let cases = [
            ("Alcohol: Yes", "yes"),
            ("Alcohol: true", "true"),
            ("Alcohol: sometimes", "sometimes"),
            ("Alcohol: OFTEN", "often"),
            ("Alcohol: never", "no"),
            ("Alcohol: rarely", "no"),
            ("Alcohol: false", "no"),
        ];
        for (input, expected) in cases {
            let answers = extract_fields(input);
            assert_eq!(answers.text(Field::Alcohol), Some(expected), "input: {}", input);
        }
    }

    #[test]
    fn test_absent_fields_are_not_inserted() {
        let answers = extract_fields("I like long walks.");
        assert!(answers.is_empty());
    }

    #[test]
    fn test_smoker_needs_known_answer() {
        let answers = extract_fields("Smoker: occasionally");
        assert_eq!(answers.get(Field::Smoker), None);
    }

    #[test]
    fn test_structured_fast_path_is_verbatim() {
        let answers = parse_structured(r#"  {"age": "forty", "smoker": true, "notes": "x"}"#).unwrap();
        assert_eq!(answers.get(Field::Age), Some(&json!("forty")));
        assert_eq!(answers.boolean(Field::Smoker), Some(true));
        assert_eq!(answers.len(), 2);
    }

    #[test]
    fn test_structured_fast_path_falls_through() {
        assert!(parse_structured("{ age: 42, smoker: yes").is_none());
        assert!(parse_structured("[1, 2]").is_none());
        assert!(parse_structured("Age: 42").is_none());
    }
}
