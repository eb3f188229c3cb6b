//! Register records and the persisted document
//!
//! The document is stored as a single JSON object:
//! ```json
//! {
//!     "risks": [ { "name": "...", "impact": "...", "probability": "..." } ],
//!     "plans": [ { "risk": "...", "steps": "...", "responsible": "..." } ]
//! }
//! ```
//!
//! Ratings are plain strings on disk. [`Rating`] is the label set the shell
//! offers, but any string round-trips unchanged.

use serde::{Deserialize, Serialize};

use crate::constants::labels;

/// Qualitative rating used for impact and probability
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Rating {
    Low,
    Medium,
    High,
}

impl Rating {
    /// Canonical label written to the data file
    pub fn label(&self) -> &'static str {
        match self {
            Rating::Low => "Low",
            Rating::Medium => "Medium",
            Rating::High => "High",
        }
    }
}

impl std::fmt::Display for Rating {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.label())
    }
}

impl std::str::FromStr for Rating {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let s = s.trim();
        match s.to_lowercase().as_str() {
            "low" => return Ok(Rating::Low),
            "medium" | "med" => return Ok(Rating::Medium),
            "high" => return Ok(Rating::High),
            _ => {}
        }
        if labels::AR_LOW.contains(&s) {
            Ok(Rating::Low)
        } else if s == labels::AR_MEDIUM {
            Ok(Rating::Medium)
        } else if s == labels::AR_HIGH {
            Ok(Rating::High)
        } else {
            Err(format!("Unknown rating: {}", s))
        }
    }
}

/// A named hazard with impact and probability ratings
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Risk {
    /// Unique by convention only
    pub name: String,
    pub impact: String,
    pub probability: String,
}

impl Risk {
    pub fn new(
        name: impl Into<String>,
        impact: impl Into<String>,
        probability: impl Into<String>,
    ) -> Self {
        Self {
            name: name.into(),
            impact: impact.into(),
            probability: probability.into(),
        }
    }

    /// Impact as a known rating, if the stored label is recognised
    pub fn impact_rating(&self) -> Option<Rating> {
        self.impact.parse().ok()
    }

    /// Probability as a known rating, if the stored label is recognised
    pub fn probability_rating(&self) -> Option<Rating> {
        self.probability.parse().ok()
    }
}

/// Contingency plan for a risk, linked by name
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Plan {
    /// Free-text reference to a [`Risk::name`]; may point at nothing
    pub risk: String,
    pub steps: String,
    pub responsible: String,
}

impl Plan {
    pub fn new(
        risk: impl Into<String>,
        steps: impl Into<String>,
        responsible: impl Into<String>,
    ) -> Self {
        Self {
            risk: risk.into(),
            steps: steps.into(),
            responsible: responsible.into(),
        }
    }
}

/// The whole register, persisted as one file
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct Document {
    #[serde(default)]
    pub risks: Vec<Risk>,
    #[serde(default)]
    pub plans: Vec<Plan>,
}

impl Document {
    /// Whether any risk is registered under exactly this name
    pub fn has_risk(&self, name: &str) -> bool {
        self.risks.iter().any(|r| r.name == name)
    }

    /// Risk names in insertion order, duplicates included
    pub fn risk_names(&self) -> Vec<&str> {
        self.risks.iter().map(|r| r.name.as_str()).collect()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_rating_parse_english() {
        assert_eq!("low".parse::<Rating>().unwrap(), Rating::Low);
        assert_eq!("MEDIUM".parse::<Rating>().unwrap(), Rating::Medium);
        assert_eq!(" High ".parse::<Rating>().unwrap(), Rating::High);
        assert!("severe".parse::<Rating>().is_err());
    }

    #[test]
    fn test_rating_parse_arabic_labels() {
        assert_eq!("منخفض".parse::<Rating>().unwrap(), Rating::Low);
        assert_eq!("ضعيف".parse::<Rating>().unwrap(), Rating::Low);
        assert_eq!("متوسط".parse::<Rating>().unwrap(), Rating::Medium);
        assert_eq!("عالي".parse::<Rating>().unwrap(), Rating::High);
    }

    #[test]
    fn test_rating_label_roundtrip() {
        for rating in [Rating::Low, Rating::Medium, Rating::High] {
            assert_eq!(rating.label().parse::<Rating>().unwrap(), rating);
        }
    }

    #[test]
    fn test_risk_keeps_unknown_labels() {
        let risk = Risk::new("Flood", "catastrophic", "High");
        assert_eq!(risk.impact, "catastrophic");
        assert_eq!(risk.impact_rating(), None);
        assert_eq!(risk.probability_rating(), Some(Rating::High));
    }

    #[test]
    fn test_document_wire_shape() {
        let doc = Document {
            risks: vec![Risk::new("Server Outage", "High", "Low")],
            plans: vec![Plan::new("Server Outage", "Fail over", "Ops")],
        };
        let value = serde_json::to_value(&doc).unwrap();
        assert_eq!(
            value,
            serde_json::json!({
                "risks": [{"name": "Server Outage", "impact": "High", "probability": "Low"}],
                "plans": [{"risk": "Server Outage", "steps": "Fail over", "responsible": "Ops"}]
            })
        );
    }

    #[test]
    fn test_document_missing_collections_default() {
        let doc: Document = serde_json::from_str("{}").unwrap();
        assert_eq!(doc, Document::default());

        let doc: Document =
            serde_json::from_str(r#"{"risks": [{"name": "A", "impact": "Low", "probability": "Low"}]}"#)
                .unwrap();
        assert_eq!(doc.risks.len(), 1);
        assert!(doc.plans.is_empty());
    }

    #[test]
    fn test_has_risk_is_exact() {
        let doc = Document {
            risks: vec![Risk::new("Fire", "High", "Low")],
            plans: vec![],
        };
        assert!(doc.has_risk("Fire"));
        assert!(!doc.has_risk("fire"));
        assert_eq!(doc.risk_names(), vec!["Fire"]);
    }
}
