//! Instruction templates for the classification call.
//!
//! The taxonomy is fixed.  Only the natural language of the template and the
//! requested output language of `reason`/`prescription` vary with
//! [`Language`]; the category literals are spliced in from [`Category`] so
//! they are identical in every template.

use crate::types::{Category, Language};

// ═══════════════════════════════════════════════════════════════════════
//  Templates
// ═══════════════════════════════════════════════════════════════════════

const JA_ROLE: &str = "あなたは冷徹かつ論理的なBPRコンサルタントです。\n\
ユーザーが入力した「業務概要」と「タスクリスト」を分析し、各タスクを以下の3つに分類してください。";

const JA_CRITERIA: [&str; 3] = [
    "ルールベース、計算、データ処理、下書き作成などAIが高速に完遂できるもの。",
    "人間の判断が必要だが、AIによる支援（分析、要約、翻訳、検知）が有効なもの。",
    "最終責任、物理的な作業、高度な対人折衝、感情的ケアが必要なもの。",
];

const JA_CONTEXT_RULE: &str = "【重要：文脈補完】\n\
タスクが単語のみ（例：「印刷」「配布」）であっても、「業務概要」の文脈から具体的な作業内容を推測して分析してください。\n\
reasonフィールドには、分類理由と文脈の解釈（50文字以内）を記述してください。\n\
prescriptionフィールドには、具体的な改善アクション（RPA導入、Gemini活用など）を記述してください。";

const JA_OUTPUT_RULE: &str = "reasonとprescriptionは必ず日本語で記述してください。\
categoryには上記の3つの値のいずれかをそのまま出力してください。";

const EN_ROLE: &str = "You are a dispassionate, strictly logical BPR consultant.\n\
Analyse the user's \"business overview\" and \"task list\" and classify every task into exactly one of the three categories below.";

const EN_CRITERIA: [&str; 3] = [
    "Rule-based work, calculation, data processing, drafting: anything AI can finish quickly on its own.",
    "Work that needs human judgment but where AI assistance (analysis, summarisation, translation, detection) is effective.",
    "Work that carries final responsibility, is physical, requires high-stakes interpersonal negotiation, or needs emotional care.",
];

const EN_CONTEXT_RULE: &str = "IMPORTANT: CONTEXT COMPLETION\n\
Even when a task is a single word (e.g. \"printing\", \"distribution\"), infer the concrete work from the business overview and analyse that.\n\
In the reason field, state the classification rationale and your reading of the context (at most 50 characters).\n\
In the prescription field, state a concrete improvement action (RPA adoption, applying Gemini, and so on).";

const EN_OUTPUT_RULE: &str = "Write reason and prescription in English. \
Output the category value exactly as one of the three literals above.";

// ═══════════════════════════════════════════════════════════════════════
//  Rendering
// ═══════════════════════════════════════════════════════════════════════

/// Render the instruction (system) text for `language`.
pub fn instruction_text(language: Language) -> String {
    let (role, criteria, heading, context_rule, output_rule) = match language {
        Language::Japanese => (JA_ROLE, JA_CRITERIA, "【分類基準】", JA_CONTEXT_RULE, JA_OUTPUT_RULE),
        Language::English => (
            EN_ROLE,
            EN_CRITERIA,
            "CLASSIFICATION CRITERIA",
            EN_CONTEXT_RULE,
            EN_OUTPUT_RULE,
        ),
    };

    let mut out = String::with_capacity(1024);
    out.push_str(role);
    out.push_str("\n\n");
    out.push_str(heading);
    out.push('\n');
    for (n, (category, rule)) in Category::ALL.iter().zip(criteria).enumerate() {
        out.push_str(&format!("{}. {}: {}\n", n + 1, category.as_str(), rule));
    }
    out.push('\n');
    out.push_str(context_rule);
    out.push('\n');
    out.push_str(output_rule);
    out.push('\n');
    out
}

/// Render the user prompt: context section followed by the numbered tasks.
pub fn user_prompt(context: Option<&str>, tasks: &[String], language: Language) -> String {
    let (context_heading, fallback, tasks_heading) = match language {
        Language::Japanese => (
            "【業務概要】",
            "指定なし（一般的な業務として解釈）",
            "【タスクリスト（順序通り）】",
        ),
        Language::English => (
            "[Business overview]",
            "Not specified (interpret as a general business process)",
            "[Task list (in order)]",
        ),
    };

    let enumerated = tasks
        .iter()
        .enumerate()
        .map(|(i, t)| format!("{}. {}", i + 1, t))
        .collect::<Vec<_>>()
        .join("\n");

    format!(
        "{context_heading}\n{}\n\n{tasks_heading}\n{enumerated}\n",
        context.unwrap_or(fallback)
    )
}

// ═══════════════════════════════════════════════════════════════════════
//  Tests
// ═══════════════════════════════════════════════════════════════════════

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn every_template_names_all_literals() {
        for language in [Language::Japanese, Language::English] {
            let text = instruction_text(language);
            for literal in Category::literals() {
                assert!(text.contains(literal), "{language}: missing {literal}");
            }
        }
    }

    #[test]
    fn templates_differ_by_language() {
        let ja = instruction_text(Language::Japanese);
        let en = instruction_text(Language::English);
        assert_ne!(ja, en);
        assert!(ja.contains("日本語"));
        assert!(en.contains("in English"));
    }

    #[test]
    fn user_prompt_enumerates_from_one() {
        let prompt = user_prompt(
            Some("survey"),
            &["design".into(), "print".into()],
            Language::English,
        );
        assert!(prompt.contains("survey"));
        assert!(prompt.contains("1. design\n2. print"));
    }

    #[test]
    fn user_prompt_uses_placeholder_without_context() {
        let prompt = user_prompt(None, &["x".into()], Language::Japanese);
        assert!(prompt.contains("指定なし"));
    }
}
