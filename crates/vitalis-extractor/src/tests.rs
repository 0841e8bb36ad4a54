//! Integration tests for the Extractor

#[cfg(test)]
mod tests {
    use crate::{ExtractorConfig, FieldExtractor};
    use serde_json::json;
    use vitalis_domain::{Field, InputKind};

    #[test]
    fn test_full_text_extraction_flow() {
        let extractor = FieldExtractor::new(ExtractorConfig::default());

        let extraction = extractor
            .extract("Age: 42\nSmoker: yes\nExercise: rarely\nDiet: high sugar")
            .unwrap();

        assert!(extraction.missing_fields.is_empty());
        assert_eq!(extraction.answers.integer(Field::Age), Some(42));
        assert_eq!(extraction.answers.boolean(Field::Smoker), Some(true));
        assert_eq!(extraction.answers.text(Field::Exercise), Some("rarely"));
        assert_eq!(extraction.answers.text(Field::Diet), Some("high sugar"));

        let report = extractor.estimate_confidence(&extraction, InputKind::Text, None);
        assert_eq!(report.confidence, 0.8);
    }

    #[test]
    fn test_json_text_takes_fast_path() {
        let extractor = FieldExtractor::default();
        let text = r#"{"age": 35, "smoker": false, "exercise": "daily", "diet": "balanced", "bmi": 24.2}"#;

        let extraction = extractor.extract(text).unwrap();

        assert_eq!(extraction.answers.len(), 5);
        assert_eq!(extraction.answers.number(Field::Bmi), Some(24.2));
        assert!(extraction.missing_fields.is_empty());
    }

    #[test]
    fn test_broken_json_falls_back_to_patterns() {
        let extractor = FieldExtractor::default();
        // Not valid JSON, but the labels are still readable
        let text = "{ Age: 61, Smoker: no, Exercise: often, Diet: fried food }";

        let extraction = extractor.extract(text).unwrap();

        assert_eq!(extraction.answers.integer(Field::Age), Some(61));
        assert_eq!(extraction.answers.boolean(Field::Smoker), Some(false));
        assert_eq!(extraction.answers.text(Field::Exercise), Some("often"));
        assert!(extraction.answers.text(Field::Diet).unwrap().starts_with("fried food"));
    }

    #[test]
    fn test_structured_and_text_paths_agree() {
        let extractor = FieldExtractor::default();
        let record = json!({"age": 42, "smoker": true, "exercise": "rarely", "diet": "high sugar"});

        let from_record = extractor.extract_structured(&record).unwrap();
        let from_text = extractor
            .extract("Age: 42\nSmoker: yes\nExercise: rarely\nDiet: high sugar")
            .unwrap();

        assert_eq!(from_record, from_text);
    }

    #[test]
    fn test_sparse_ocr_text() {
        let extractor = FieldExtractor::default();
        let extraction = extractor.extract("AGE 70\nsm0ker: y3s\nDiet").unwrap();

        assert_eq!(extraction.answers.integer(Field::Age), Some(70));
        assert_eq!(
            extraction.missing_fields,
            vec![Field::Smoker, Field::Exercise, Field::Diet]
        );

        let report = extractor.estimate_confidence(&extraction, InputKind::Image, Some(0.42));
        assert_eq!(report.ocr_confidence, Some(0.42));
        assert!(report.confidence < 0.3);
    }
}
