//! Answer set module - the normalized survey record

use serde::{Deserialize, Serialize};
use serde_json::{Map, Value};
use std::collections::BTreeMap;
use std::fmt;

/// A survey field in the closed answer vocabulary
///
/// Declaration order is the canonical order: answer sets serialize in it and
/// missing fields are reported in it.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Field {
    /// Age in whole years
    Age,
    /// Whether the respondent smokes
    Smoker,
    /// Exercise frequency
    Exercise,
    /// Free-text diet description
    Diet,
    /// Body mass index
    Bmi,
    /// Hours of sleep per night
    Sleep,
    /// Alcohol consumption frequency
    Alcohol,
}

impl Field {
    /// Fields that must be present for a profile to be complete, in report order
    pub const REQUIRED: [Field; 4] = [Field::Age, Field::Smoker, Field::Exercise, Field::Diet];

    /// Fields that may be omitted without counting as missing
    pub const OPTIONAL: [Field; 3] = [Field::Bmi, Field::Sleep, Field::Alcohol];

    /// Every field in canonical order
    pub const ALL: [Field; 7] = [
        Field::Age,
        Field::Smoker,
        Field::Exercise,
        Field::Diet,
        Field::Bmi,
        Field::Sleep,
        Field::Alcohol,
    ];

    /// Get the field name as used on the wire
    pub fn as_str(&self) -> &'static str {
        match self {
            Field::Age => "age",
            Field::Smoker => "smoker",
            Field::Exercise => "exercise",
            Field::Diet => "diet",
            Field::Bmi => "bmi",
            Field::Sleep => "sleep",
            Field::Alcohol => "alcohol",
        }
    }

    /// Parse a field from its wire name
    pub fn parse(s: &str) -> Option<Self> {
        match s.trim().to_lowercase().as_str() {
            "age" => Some(Field::Age),
            "smoker" => Some(Field::Smoker),
            "exercise" => Some(Field::Exercise),
            "diet" => Some(Field::Diet),
            "bmi" => Some(Field::Bmi),
            "sleep" => Some(Field::Sleep),
            "alcohol" => Some(Field::Alcohol),
            _ => None,
        }
    }

    /// Whether the field counts toward completeness
    pub fn is_required(&self) -> bool {
        Self::REQUIRED.contains(self)
    }
}

impl fmt::Display for Field {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl std::str::FromStr for Field {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Self::parse(s).ok_or_else(|| format!("Unknown field: {}", s))
    }
}

/// Normalized field → value record for one request
///
/// Values are stored exactly as supplied. A structured record may carry a
/// value of the wrong type (e.g. `"age": "forty"`); typing is enforced by the
/// guardrail schema gate, not here.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(transparent)]
pub struct AnswerSet {
    values: BTreeMap<Field, Value>,
}

impl AnswerSet {
    /// Create an empty answer set
    pub fn new() -> Self {
        Self::default()
    }

    /// Build an answer set from a JSON object, keeping values verbatim
    ///
    /// Keys outside the field vocabulary are skipped; use
    /// [`AnswerSet::unknown_keys`] to report them.
    ///
    /// # Examples
    ///
    /// ```
    /// use vitalis_domain::{AnswerSet, Field};
    ///
    /// let record = serde_json::json!({"age": 42, "smoker": false, "pet": "cat"});
    /// let answers = AnswerSet::from_json_object(record.as_object().unwrap());
    /// assert_eq!(answers.len(), 2);
    /// assert_eq!(answers.integer(Field::Age), Some(42));
    /// ```
    pub fn from_json_object(object: &Map<String, Value>) -> Self {
        let values = object
            .iter()
            .filter_map(|(key, value)| Field::parse(key).map(|field| (field, value.clone())))
            .collect();
        Self { values }
    }

    /// Keys of a JSON object that are not survey fields
    pub fn unknown_keys(object: &Map<String, Value>) -> Vec<String> {
        object
            .keys()
            .filter(|key| Field::parse(key).is_none())
            .cloned()
            .collect()
    }

    /// Builder-style insert
    pub fn with(mut self, field: Field, value: impl Into<Value>) -> Self {
        self.values.insert(field, value.into());
        self
    }

    /// Set a field, replacing any previous value
    pub fn insert(&mut self, field: Field, value: impl Into<Value>) {
        self.values.insert(field, value.into());
    }

    /// Raw value for a field
    pub fn get(&self, field: Field) -> Option<&Value> {
        self.values.get(&field)
    }

    /// Whether a field holds a usable value
    ///
    /// `null` and blank strings count as absent.
    pub fn is_present(&self, field: Field) -> bool {
        match self.values.get(&field) {
            None | Some(Value::Null) => false,
            Some(Value::String(s)) => !s.trim().is_empty(),
            Some(_) => true,
        }
    }

    /// Required fields that are absent or empty, in canonical order
    pub fn missing_required(&self) -> Vec<Field> {
        Field::REQUIRED
            .iter()
            .copied()
            .filter(|field| !self.is_present(*field))
            .collect()
    }

    /// Number of keys in the set
    pub fn len(&self) -> usize {
        self.values.len()
    }

    /// Whether the set has no keys
    pub fn is_empty(&self) -> bool {
        self.values.is_empty()
    }

    /// Iterate over fields and values in canonical order
    pub fn iter(&self) -> impl Iterator<Item = (Field, &Value)> {
        self.values.iter().map(|(field, value)| (*field, value))
    }

    /// Integer value; floats with no fractional part are accepted
    pub fn integer(&self, field: Field) -> Option<i64> {
        match self.values.get(&field)? {
            Value::Number(n) => n.as_i64().or_else(|| {
                n.as_f64()
                    .filter(|f| f.is_finite() && f.fract() == 0.0)
                    .map(|f| f as i64)
            }),
            _ => None,
        }
    }

    /// Numeric value as a float
    pub fn number(&self, field: Field) -> Option<f64> {
        self.values.get(&field)?.as_f64()
    }

    /// Boolean value
    pub fn boolean(&self, field: Field) -> Option<bool> {
        self.values.get(&field)?.as_bool()
    }

    /// String value
    pub fn text(&self, field: Field) -> Option<&str> {
        self.values.get(&field)?.as_str()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    #[test]
    fn test_field_round_trip_names() {
        for field in Field::ALL {
            assert_eq!(Field::parse(field.as_str()), Some(field));
        }
        assert_eq!(Field::parse(" BMI "), Some(Field::Bmi));
        assert_eq!(Field::parse("weight"), None);
    }

    #[test]
    fn test_required_and_optional_partition_all_fields() {
        let joined: Vec<Field> = Field::REQUIRED
            .iter()
            .chain(Field::OPTIONAL.iter())
            .copied()
            .collect();
        assert_eq!(joined, Field::ALL.to_vec());
        assert!(Field::OPTIONAL.iter().all(|field| !field.is_required()));
    }

    #[test]
    fn test_missing_required_in_order() {
        let answers = AnswerSet::new()
            .with(Field::Smoker, true)
            .with(Field::Bmi, 22.0);
        assert_eq!(
            answers.missing_required(),
            vec![Field::Age, Field::Exercise, Field::Diet]
        );
    }

    #[test]
    fn test_null_and_blank_count_as_missing() {
        let answers = AnswerSet::new()
            .with(Field::Age, Value::Null)
            .with(Field::Smoker, false)
            .with(Field::Exercise, "daily")
            .with(Field::Diet, "   ");
        assert_eq!(answers.missing_required(), vec![Field::Age, Field::Diet]);
        // Keys are still counted even when their value is empty
        assert_eq!(answers.len(), 4);
    }

    #[test]
    fn test_from_json_object_skips_unknown_keys() {
        let record = json!({"age": 30, "diet": "vegan", "favourite_color": "blue"});
        let object = record.as_object().unwrap();
        let answers = AnswerSet::from_json_object(object);
        assert_eq!(answers.len(), 2);
        assert_eq!(AnswerSet::unknown_keys(object), vec!["favourite_color".to_string()]);
    }

    #[test]
    fn test_integer_accepts_whole_floats() {
        let answers = AnswerSet::new()
            .with(Field::Age, 42.0)
            .with(Field::Sleep, 7.5);
        assert_eq!(answers.integer(Field::Age), Some(42));
        assert_eq!(answers.integer(Field::Sleep), None);
        assert_eq!(answers.number(Field::Sleep), Some(7.5));
    }

    #[test]
    fn test_serializes_in_canonical_order() {
        let answers = AnswerSet::new()
            .with(Field::Alcohol, "no")
            .with(Field::Age, 35);
        let json = serde_json::to_string(&answers).unwrap();
        assert_eq!(json, r#"{"age":35,"alcohol":"no"}"#);
    }
}
