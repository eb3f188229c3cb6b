//! Keyword search over risks and plans

use serde::Serialize;

use crate::model::{Document, Plan, Risk};

/// Records matching a keyword, in document order
#[derive(Debug, Default, Serialize)]
pub struct SearchResults<'a> {
    pub risks: Vec<&'a Risk>,
    pub plans: Vec<&'a Plan>,
}

impl SearchResults<'_> {
    pub fn is_empty(&self) -> bool {
        self.risks.is_empty() && self.plans.is_empty()
    }
}

/// Case-insensitive substring search
///
/// Risks match on `name`, plans on the `risk` they reference. A blank
/// keyword matches nothing.
pub fn search<'a>(doc: &'a Document, keyword: &str) -> SearchResults<'a> {
    if keyword.trim().is_empty() {
        return SearchResults::default();
    }

    let needle = keyword.to_lowercase();
    SearchResults {
        risks: doc
            .risks
            .iter()
            .filter(|r| r.name.to_lowercase().contains(&needle))
            .collect(),
        plans: doc
            .plans
            .iter()
            .filter(|p| p.risk.to_lowercase().contains(&needle))
            .collect(),
    }
}
