//! Readiness review
//!
//! Readiness compares raw counts, not per-risk coverage: two plans for one
//! risk and none for another still count as ready.

use serde::Serialize;

use crate::model::Document;

/// Coarse readiness verdict
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "snake_case")]
pub enum Readiness {
    /// No risks registered
    NotReady,
    /// Fewer plans than risks
    Incomplete,
    Ready,
}

impl std::fmt::Display for Readiness {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Readiness::NotReady => write!(f, "not ready"),
            Readiness::Incomplete => write!(f, "incomplete"),
            Readiness::Ready => write!(f, "ready"),
        }
    }
}

/// Classify readiness from risk and plan counts
pub fn review_readiness(risk_count: usize, plan_count: usize) -> Readiness {
    if risk_count == 0 {
        Readiness::NotReady
    } else if plan_count < risk_count {
        Readiness::Incomplete
    } else {
        Readiness::Ready
    }
}

/// Counts and verdict for one document
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub struct ReadinessReport {
    pub risk_count: usize,
    pub plan_count: usize,
    pub readiness: Readiness,
}

impl ReadinessReport {
    pub fn for_document(doc: &Document) -> Self {
        let risk_count = doc.risks.len();
        let plan_count = doc.plans.len();
        Self {
            risk_count,
            plan_count,
            readiness: review_readiness(risk_count, plan_count),
        }
    }
}
