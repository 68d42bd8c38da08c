//! Bundled sample workload: a citizen survey run by a municipal office.

use crate::store::TaskListStore;
use crate::types::Language;

const JA_CONTEXT: &str = "市民意識調査アンケートの実施業務";

const JA_TASKS: [&str; 9] = [
    "調査項目の検討と決定",
    "アンケート用紙のデザイン作成",
    "印刷業者への発注",
    "配布対象者のリスト抽出",
    "封入と発送作業",
    "回答の回収とデータ入力",
    "集計結果のグラフ化",
    "報告書の執筆",
    "関係部署への報告会実施",
];

const EN_CONTEXT: &str = "Running a citizen opinion survey";

const EN_TASKS: [&str; 9] = [
    "Decide on survey questions",
    "Design the questionnaire form",
    "Place the order with the printer",
    "Extract the recipient list",
    "Stuff envelopes and mail them",
    "Collect responses and enter the data",
    "Chart the tabulated results",
    "Write the report",
    "Hold a briefing for related departments",
];

/// The sample context and task list for `language`.
pub fn sample_workload(language: Language) -> (&'static str, TaskListStore) {
    match language {
        Language::Japanese => (JA_CONTEXT, TaskListStore::from_contents(JA_TASKS)),
        Language::English => (EN_CONTEXT, TaskListStore::from_contents(EN_TASKS)),
    }
}
