//! Vitalis Assessor
//!
//! Rule-based risk assessment of a validated answer set.
//!
//! # Stages
//!
//! - [`extract_factors`]: one independent boolean rule per risk dimension,
//!   applied in a fixed order, plus a factor-stage confidence that reflects
//!   how sparse the answer set is
//! - [`score_risk`]: weighted sum of the detected factors plus an age
//!   escalator, clamped to 0-100 and mapped to a [`RiskLevel`]
//!
//! Detection order is part of the contract: the rationale reported with a
//! score is the first three tags in that order, not the three heaviest.
//!
//! # Examples
//!
//! ```
//! use vitalis_assessor::{extract_factors, score_risk};
//! use vitalis_domain::{AnswerSet, Field, FactorTag, RiskLevel};
//!
//! let answers = AnswerSet::new()
//!     .with(Field::Age, 44)
//!     .with(Field::Smoker, true)
//!     .with(Field::Exercise, "rarely")
//!     .with(Field::Diet, "fast food");
//!
//! let analysis = extract_factors(&answers);
//! assert_eq!(
//!     analysis.factors,
//!     vec![FactorTag::Smoking, FactorTag::LowExercise, FactorTag::PoorDiet]
//! );
//!
//! let assessment = score_risk(&analysis.factors, &answers);
//! assert_eq!(assessment.score, 55);
//! assert_eq!(assessment.level, RiskLevel::Medium);
//! ```
//!
//! [`RiskLevel`]: vitalis_domain::RiskLevel

#![warn(missing_docs)]

mod factors;
mod scorer;

pub use factors::{extract_factors, FactorAnalysis};
pub use scorer::{
    age_adjustment, score_labels, score_risk, weight, weight_for_label, LabelScore,
    RiskAssessment, RATIONALE_LEN, UNRECOGNIZED_FACTOR_WEIGHT,
};
