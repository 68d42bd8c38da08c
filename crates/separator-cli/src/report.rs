//! Plain-text rendering of labeled results.

use std::fmt::Write;

use separator_core::{AnalysisResult, Language, category_counts, map_category, map_results};

/// Render results as numbered steps followed by per-category counts.
pub fn render(results: &[AnalysisResult], language: Language) -> String {
    let mut out = String::new();
    let (reason, prescription, total) = match language {
        Language::Japanese => ("理由", "改善案", "合計"),
        Language::English => ("Reason", "Prescription", "Total"),
    };

    for item in map_results(results, language) {
        let _ = writeln!(out, "Step {:02}  [{}]  {}", item.step, item.label, item.result.task);
        let _ = writeln!(out, "    {reason}: {}", item.result.reason);
        let _ = writeln!(out, "    {prescription}: {}", item.result.prescription);
        out.push('\n');
    }

    let summary: Vec<String> = category_counts(results)
        .iter()
        .map(|(category, count)| format!("{} {count}", map_category(*category, language).label))
        .collect();
    let _ = writeln!(out, "{total} {}: {}", results.len(), summary.join(" / "));
    out
}
