//! Integration tests for the separator-core crate.
//!
//! These exercise the task list, request building, and label resolution
//! together, the way a submit handler uses them.

use separator_core::{
    AnalysisRequest, AnalysisResult, Category, Credential, Language, TaskListStore,
    ValidationKind, map_results, sample_workload,
};

// ═══════════════════════════════════════════════════════════════════════
//  Editing then building
// ═══════════════════════════════════════════════════════════════════════

#[test]
fn edited_list_builds_in_displayed_order() {
    let mut store = TaskListStore::new();
    let first = store.ids()[0];
    store.update_content(first, "collect forms");

    let second = store.insert_after(0).id;
    store.update_content(second, "enter data");
    let _blank = store.insert_after(1);

    store.move_item(1, 0).unwrap();

    let req = AnalysisRequest::build(
        "survey",
        &store.items(),
        Language::English,
        &Credential::new("k"),
    )
    .unwrap();

    assert_eq!(req.ordered_task_texts(), ["enter data", "collect forms"]);
    assert_eq!(req.context(), Some("survey"));
}

#[test]
fn cleared_sole_row_cannot_be_submitted() {
    let mut store = TaskListStore::from_contents(["only task"]);
    store.delete(store.ids()[0]);
    assert_eq!(store.len(), 1);

    let err = AnalysisRequest::build("", &store.items(), Language::Japanese, &Credential::new("k"))
        .unwrap_err();
    assert_eq!(err.kind, ValidationKind::NoTasks);
}

#[test]
fn sample_workload_builds_nine_tasks() {
    let (context, store) = sample_workload(Language::Japanese);
    let req =
        AnalysisRequest::build(context, &store.items(), Language::Japanese, &Credential::new("k"))
            .unwrap();
    assert_eq!(req.ordered_task_texts().len(), 9);
    assert!(req.user_prompt().contains("9. 関係部署への報告会実施"));
}

// ═══════════════════════════════════════════════════════════════════════
//  Results and labels
// ═══════════════════════════════════════════════════════════════════════

#[test]
fn three_categories_map_to_three_labels_in_order() {
    let raw = r#"[
        {"task":"print","category":"AI_OPTIMAL","reason":"r1","prescription":"p1"},
        {"task":"review","category":"HYBRID","reason":"r2","prescription":"p2"},
        {"task":"brief","category":"HUMAN_ESSENTIAL","reason":"r3","prescription":"p3"}
    ]"#;
    let results: Vec<AnalysisResult> = serde_json::from_str(raw).unwrap();

    let mapped = map_results(&results, Language::English);
    assert_eq!(mapped.len(), 3);
    assert_eq!(
        mapped.iter().map(|m| m.result.task.as_str()).collect::<Vec<_>>(),
        ["print", "review", "brief"]
    );
    assert_eq!(
        mapped.iter().map(|m| m.result.category).collect::<Vec<_>>(),
        Category::ALL
    );
    let labels: std::collections::HashSet<_> = mapped.iter().map(|m| m.label).collect();
    assert_eq!(labels.len(), 3);
}
