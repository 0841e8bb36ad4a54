//! Static recommendation rules

use vitalis_domain::{FactorTag, RiskLevel};

/// Upper bound on any recommendation list
pub const MAX_RECOMMENDATIONS: usize = 5;

/// Lower bound on a static recommendation list
pub const MIN_STATIC_RECOMMENDATIONS: usize = 3;

/// Appended for high risk unless an item already mentions healthcare
pub const HEALTHCARE_ITEM: &str = "Schedule a check-up with your healthcare provider to review these risks";

/// Appended for medium and high risk unless an item already mentions stress
pub const STRESS_ITEM: &str = "Practice daily stress management, such as a short walk or breathing exercises";

/// Generic items used to pad short lists, hydration first
pub const FILLER_ITEMS: [&str; 3] = [
    "Drink at least 8 glasses of water a day",
    "Eat a variety of fruits and vegetables every day",
    "Keep up with routine health screenings",
];

/// Advice for a single factor tag
pub fn advice_for(tag: FactorTag) -> Option<&'static str> {
    match tag {
        FactorTag::Smoking => Some("Quit smoking; ask your doctor about cessation programs or nicotine replacement"),
        FactorTag::PoorDiet => Some("Replace sugary and processed foods with whole foods"),
        FactorTag::HighFatIntake => Some("Cut back on fried and high-fat foods in favor of lean proteins"),
        FactorTag::LowExercise => Some("Aim for at least 150 minutes of moderate exercise per week"),
        FactorTag::Obesity => Some("Work with a professional on a sustainable weight-loss plan"),
        FactorTag::Overweight => Some("Combine portion control with regular activity to reach a healthy weight"),
        FactorTag::Underweight => Some("Add nutrient-dense meals and snacks to reach a healthy weight"),
        FactorTag::PoorSleep => Some("Keep a consistent sleep schedule and aim for 7-9 hours per night"),
        FactorTag::AlcoholConsumption => Some("Limit alcohol to one or two drinks on any day, with alcohol-free days each week"),
        FactorTag::AdvancedAge => None,
    }
}

/// Build the rule-based recommendation list
///
/// Factor advice comes first in factor order, then the risk-level items,
/// then filler. The result always holds between 3 and 5 items.
pub fn static_recommendations(level: RiskLevel, factors: &[FactorTag]) -> Vec<String> {
    let mut items: Vec<String> = factors
        .iter()
        .filter_map(|tag| advice_for(*tag))
        .map(str::to_string)
        .collect();

    if level == RiskLevel::High && !mentions(&items, "healthcare") {
        items.push(HEALTHCARE_ITEM.to_string());
    }

    if matches!(level, RiskLevel::Medium | RiskLevel::High) && !mentions(&items, "stress") {
        items.push(STRESS_ITEM.to_string());
    }

    for filler in FILLER_ITEMS {
        if items.len() >= MIN_STATIC_RECOMMENDATIONS {
            break;
        }
        if !items.iter().any(|item| item == filler) {
            items.push(filler.to_string());
        }
    }

    items.truncate(MAX_RECOMMENDATIONS);
    items
}

fn mentions(items: &[String], needle: &str) -> bool {
    items
        .iter()
        .any(|item| item.to_lowercase().contains(needle))
}
