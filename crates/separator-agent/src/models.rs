//! Catalog of the Gemini models offered for analysis.
//!
//! The catalog is advisory: ids outside it are still sent to the provider,
//! which answers with a not-found error when it does not serve them.

use separator_core::Language;

/// Model used when nothing else is configured.
pub const DEFAULT_MODEL: &str = "gemini-2.5-flash";

/// A selectable model.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct ModelInfo {
    pub id: &'static str,
    name_ja: &'static str,
    name_en: &'static str,
    description_ja: &'static str,
    description_en: &'static str,
}

impl ModelInfo {
    pub fn name(&self, language: Language) -> &'static str {
        match language {
            Language::Japanese => self.name_ja,
            Language::English => self.name_en,
        }
    }

    pub fn description(&self, language: Language) -> &'static str {
        match language {
            Language::Japanese => self.description_ja,
            Language::English => self.description_en,
        }
    }
}

/// All catalogued models, most capable first.
pub static MODELS: [ModelInfo; 3] = [
    ModelInfo {
        id: "gemini-2.5-pro",
        name_ja: "賢いLLM (Gemini 2.5 Pro)",
        name_en: "Smart LLM (Gemini 2.5 Pro)",
        description_ja: "最高精度。複雑な文脈理解に最適です。",
        description_en: "Highest accuracy. Best for understanding complex context.",
    },
    ModelInfo {
        id: "gemini-2.5-flash",
        name_ja: "普通のLLM (Gemini 2.5 Flash)",
        name_en: "Standard LLM (Gemini 2.5 Flash)",
        description_ja: "速度と精度のバランスに優れた標準モデルです。",
        description_en: "The standard model, balancing speed and accuracy.",
    },
    ModelInfo {
        id: "gemini-2.5-flash-lite",
        name_ja: "コスパ良いLLM (Gemini 2.5 Flash Lite)",
        name_en: "Cost-efficient LLM (Gemini 2.5 Flash Lite)",
        description_ja: "コストパフォーマンスと応答速度に優れたモデルです。",
        description_en: "Excellent cost efficiency and response speed.",
    },
];

/// Look up a catalogued model by id.
pub fn find_model(id: &str) -> Option<&'static ModelInfo> {
    MODELS.iter().find(|m| m.id == id)
}
