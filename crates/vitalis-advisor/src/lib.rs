//! Vitalis Advisor
//!
//! Turns a risk level and its factor tags into 1-5 recommendations tagged
//! with the strategy that produced them.
//!
//! # Strategies
//!
//! - **AI-generated**: one call to a [`RecommendationProvider`] under a timeout
//! - **Static**: a fixed factor-to-advice table plus risk-level items and
//!   generic filler, always 3-5 items
//!
//! Any provider failure is absorbed here and only shows up as
//! `source: "static"`.
//!
//! # Examples
//!
//! ```
//! use vitalis_advisor::static_recommendations;
//! use vitalis_domain::{FactorTag, RiskLevel};
//!
//! let items = static_recommendations(RiskLevel::High, &[FactorTag::Smoking]);
//! assert_eq!(items.len(), 3);
//! assert!(items[1].contains("healthcare"));
//! ```
//!
//! [`RecommendationProvider`]: vitalis_domain::traits::RecommendationProvider

#![warn(missing_docs)]

mod advisor;
mod config;
mod rules;

pub use advisor::{normalize, Advisor, Recommendations};
pub use config::AdvisorConfig;
pub use rules::{
    advice_for, static_recommendations, FILLER_ITEMS, HEALTHCARE_ITEM, MAX_RECOMMENDATIONS,
    MIN_STATIC_RECOMMENDATIONS, STRESS_ITEM,
};
