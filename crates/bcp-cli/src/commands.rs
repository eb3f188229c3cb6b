//! Command handlers
//!
//! Input validation lives here; the store persists whatever it is given.

use std::io::Write;

use anyhow::{bail, Context, Result};

use bcp_core::{Document, Rating, Readiness, ReadinessReport, Store};

/// Load the document, warning on stderr when existing data was discarded
pub fn load_document(store: &Store) -> Document {
    let outcome = store.load();
    if let Some(reason) = outcome.recovery() {
        if reason.discards_data() {
            eprintln!(
                "Warning: {} ({}). Starting with an empty register; the next change will overwrite it.",
                reason,
                store.path().display()
            );
        }
    }
    outcome.into_document()
}

pub fn add_risk(
    store: &Store,
    doc: &mut Document,
    name: &str,
    impact: Rating,
    probability: Rating,
    out: &mut impl Write,
) -> Result<()> {
    if name.trim().is_empty() {
        bail!("Please enter a risk name.");
    }

    store
        .add_risk(doc, name, impact.label(), probability.label())
        .context("Risk was not saved")?;
    writeln!(out, "✓ Risk added: {}", name)?;
    Ok(())
}

pub fn list_risks(doc: &Document, json: bool, out: &mut impl Write) -> Result<()> {
    if json {
        writeln!(out, "{}", serde_json::to_string_pretty(&doc.risks)?)?;
        return Ok(());
    }

    if doc.risks.is_empty() {
        writeln!(out, "No risks registered yet.")?;
        return Ok(());
    }

    writeln!(out, "Registered risks ({}):", doc.risks.len())?;
    for risk in &doc.risks {
        writeln!(out)?;
        writeln!(out, "  {}", risk.name)?;
        writeln!(
            out,
            "    - Impact: {}",
            rating_label(&risk.impact, risk.impact_rating())
        )?;
        writeln!(
            out,
            "    - Probability: {}",
            rating_label(&risk.probability, risk.probability_rating())
        )?;
    }
    Ok(())
}

/// Stored label, with the canonical one appended when they differ
fn rating_label(raw: &str, rating: Option<Rating>) -> String {
    match rating {
        Some(r) if r.label() != raw => format!("{} ({})", raw, r),
        _ => raw.to_string(),
    }
}

pub fn add_plan(
    store: &Store,
    doc: &mut Document,
    risk: &str,
    steps: &str,
    responsible: &str,
    out: &mut impl Write,
) -> Result<()> {
    if doc.risks.is_empty() {
        bail!("Cannot add a plan because no risks are registered.");
    }
    if !doc.has_risk(risk) {
        bail!(
            "Unknown risk '{}'. Registered risks: {}",
            risk,
            doc.risk_names().join(", ")
        );
    }
    if steps.trim().is_empty() || responsible.trim().is_empty() {
        bail!("All fields are required.");
    }

    store
        .add_plan(doc, risk, steps, responsible)
        .context("Plan was not saved")?;
    writeln!(out, "✓ Plan added for: {}", risk)?;
    Ok(())
}

pub fn list_plans(doc: &Document, json: bool, out: &mut impl Write) -> Result<()> {
    if json {
        writeln!(out, "{}", serde_json::to_string_pretty(&doc.plans)?)?;
        return Ok(());
    }

    if doc.plans.is_empty() {
        writeln!(out, "No plans yet.")?;
        return Ok(());
    }

    writeln!(out, "Contingency plans ({}):", doc.plans.len())?;
    for plan in &doc.plans {
        writeln!(out)?;
        writeln!(out, "  For risk: {}", plan.risk)?;
        writeln!(out, "    - Steps: {}", plan.steps)?;
        writeln!(out, "    - Responsible: {}", plan.responsible)?;
    }
    Ok(())
}

pub fn search(doc: &Document, keyword: &str, json: bool, out: &mut impl Write) -> Result<()> {
    // Blank keywords are not searched at all
    if keyword.trim().is_empty() {
        return Ok(());
    }

    let results = bcp_core::search(doc, keyword);
    if json {
        writeln!(out, "{}", serde_json::to_string_pretty(&results)?)?;
        return Ok(());
    }

    writeln!(out, "Results:")?;
    if results.is_empty() {
        writeln!(out, "No matching results.")?;
        return Ok(());
    }

    if !results.risks.is_empty() {
        writeln!(out, "Risks:")?;
        for risk in &results.risks {
            writeln!(out, "  - {}", risk.name)?;
        }
    }
    if !results.plans.is_empty() {
        writeln!(out, "Plans:")?;
        for plan in &results.plans {
            writeln!(out, "  - Plan for: {}", plan.risk)?;
        }
    }
    Ok(())
}

pub fn review(doc: &Document, json: bool, out: &mut impl Write) -> Result<()> {
    let report = ReadinessReport::for_document(doc);
    if json {
        writeln!(out, "{}", serde_json::to_string_pretty(&report)?)?;
        return Ok(());
    }

    writeln!(out, "Risks: {}", report.risk_count)?;
    writeln!(out, "Plans: {}", report.plan_count)?;
    writeln!(out, "{}", readiness_message(report.readiness))?;
    Ok(())
}

fn readiness_message(readiness: Readiness) -> &'static str {
    match readiness {
        Readiness::NotReady => "⚠ No risks registered. The system is not ready.",
        Readiness::Incomplete => "⚠ Some risks have no plans. Please complete the plans.",
        Readiness::Ready => "✓ The system is 100% ready for business continuity.",
    }
}
