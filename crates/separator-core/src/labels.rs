//! Category → localized label resolution.
//!
//! Colors and icons belong to the rendering layer.  This module only resolves
//! labels and badge order, which the report output depends on.

use serde::Serialize;

use crate::types::{AnalysisResult, Category, Language};

/// Display metadata for one category.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub struct CategoryLabel {
    pub label: &'static str,
    /// Position of the category's badge in legends and summaries.
    pub badge_order: u8,
}

/// Resolve the label and badge order for `category` in `language`.
pub fn map_category(category: Category, language: Language) -> CategoryLabel {
    let (label, badge_order) = match (category, language) {
        (Category::AiOptimal, Language::Japanese) => ("AI最適 (AI_OPTIMAL)", 0),
        (Category::AiOptimal, Language::English) => ("AI Optimal", 0),
        (Category::Hybrid, Language::Japanese) => ("協働 (HYBRID)", 1),
        (Category::Hybrid, Language::English) => ("Hybrid", 1),
        (Category::HumanEssential, Language::Japanese) => ("人間必須 (HUMAN)", 2),
        (Category::HumanEssential, Language::English) => ("Human Essential", 2),
    };
    CategoryLabel { label, badge_order }
}

/// A result paired with its 1-based step number and resolved label.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct LabeledResult {
    pub step: usize,
    #[serde(flatten)]
    pub result: AnalysisResult,
    pub label: &'static str,
}

/// Label every result, keeping the order in which they were returned.
pub fn map_results(results: &[AnalysisResult], language: Language) -> Vec<LabeledResult> {
    results
        .iter()
        .enumerate()
        .map(|(i, r)| LabeledResult {
            step: i + 1,
            result: r.clone(),
            label: map_category(r.category, language).label,
        })
        .collect()
}

/// Count results per category, in badge order.
pub fn category_counts(results: &[AnalysisResult]) -> [(Category, usize); 3] {
    Category::ALL.map(|c| (c, results.iter().filter(|r| r.category == c).count()))
}
