//! Integration tests for the separator-agent crate.
//!
//! These drive the client and the workbench through scripted backends, so
//! no live provider is needed.

use std::sync::Arc;
use std::sync::atomic::{AtomicUsize, Ordering};
use std::time::Duration;

use async_trait::async_trait;
use tokio::sync::Notify;

use separator_agent::{
    AnalysisClient, AnalysisError, BackendError, ClientOptions, GenerationCall,
    GenerativeBackend, Outcome, SessionConfig, SubmitStatus, Workbench,
};
use separator_core::{
    AnalysisRequest, Category, Credential, Language, TaskListStore, ValidationKind,
};

// ═══════════════════════════════════════════════════════════════════════
//  Scripted backends
// ═══════════════════════════════════════════════════════════════════════

const ONE_OF_EACH: &str = r#"[
    {"task":"print","category":"AI_OPTIMAL","reason":"r1","prescription":"p1"},
    {"task":"review","category":"HYBRID","reason":"r2","prescription":"p2"},
    {"task":"brief","category":"HUMAN_ESSENTIAL","reason":"r3","prescription":"p3"}
]"#;

/// Replies with a fixed body, optionally waiting for a release signal first.
struct Gated {
    body: String,
    entered: Notify,
    release: Notify,
    gated: bool,
    calls: AtomicUsize,
    last_call: std::sync::Mutex<Option<GenerationCall>>,
}

impl Gated {
    fn new(body: &str, gated: bool) -> Arc<Self> {
        Arc::new(Self {
            body: body.to_owned(),
            entered: Notify::new(),
            release: Notify::new(),
            gated,
            calls: AtomicUsize::new(0),
            last_call: std::sync::Mutex::new(None),
        })
    }

    fn calls(&self) -> usize {
        self.calls.load(Ordering::SeqCst)
    }
}

#[async_trait]
impl GenerativeBackend for Gated {
    fn name(&self) -> &str {
        "gated"
    }

    async fn generate(
        &self,
        call: &GenerationCall,
        _credential: &Credential,
    ) -> Result<String, BackendError> {
        self.calls.fetch_add(1, Ordering::SeqCst);
        *self.last_call.lock().unwrap() = Some(call.clone());
        if self.gated {
            self.entered.notify_one();
            self.release.notified().await;
        }
        Ok(self.body.clone())
    }
}

/// Never answers.
struct Hung;

#[async_trait]
impl GenerativeBackend for Hung {
    fn name(&self) -> &str {
        "hung"
    }

    async fn generate(
        &self,
        _call: &GenerationCall,
        _credential: &Credential,
    ) -> Result<String, BackendError> {
        std::future::pending().await
    }
}

fn request(tasks: &[&str], language: Language) -> AnalysisRequest {
    let store = TaskListStore::from_contents(tasks.iter().copied());
    AnalysisRequest::build("survey", &store.items(), language, &Credential::new("k")).unwrap()
}

fn session(language: Language) -> SessionConfig {
    SessionConfig {
        credential: Credential::new("k"),
        language,
        ..SessionConfig::default()
    }
}

// ═══════════════════════════════════════════════════════════════════════
//  Client
// ═══════════════════════════════════════════════════════════════════════

#[tokio::test]
async fn second_call_while_outstanding_is_rejected() {
    let backend = Gated::new(ONE_OF_EACH, true);
    let client = Arc::new(AnalysisClient::new(backend.clone(), ClientOptions::default()));

    let first = {
        let client = client.clone();
        tokio::spawn(async move {
            let req = request(&["print", "review", "brief"], Language::English);
            client.analyze(&req, &Credential::new("k"), "m").await
        })
    };

    backend.entered.notified().await;
    assert!(client.is_busy());

    let second = client
        .analyze(
            &request(&["print"], Language::English),
            &Credential::new("k"),
            "m",
        )
        .await;
    assert_eq!(second.unwrap_err(), AnalysisError::Busy);

    backend.release.notify_one();
    let results = first.await.unwrap().unwrap();
    assert_eq!(results.len(), 3);
    assert_eq!(backend.calls(), 1);
    assert!(!client.is_busy());
}

#[tokio::test]
async fn hung_provider_times_out_and_releases_flag() {
    let options = ClientOptions {
        timeout: Duration::from_millis(50),
        ..ClientOptions::default()
    };
    let client = AnalysisClient::new(Arc::new(Hung), options);

    let err = client
        .analyze(
            &request(&["a"], Language::English),
            &Credential::new("k"),
            "m",
        )
        .await
        .unwrap_err();

    match err {
        AnalysisError::Unknown { detail } => assert!(detail.contains("timed out")),
        other => panic!("expected Unknown, got {other:?}"),
    }
    assert!(!client.is_busy());
}

#[tokio::test]
async fn outbound_call_carries_schema_and_localized_instruction() {
    let backend = Gated::new(ONE_OF_EACH, false);
    let client = AnalysisClient::new(backend.clone(), ClientOptions::default());

    for language in [Language::Japanese, Language::English] {
        client
            .analyze(
                &request(&["print", "", "review"], language),
                &Credential::new("k"),
                "gemini-2.5-pro",
            )
            .await
            .unwrap();

        let call = backend.last_call.lock().unwrap().clone().unwrap();
        assert_eq!(call.model, "gemini-2.5-pro");
        assert!(call.prompt.contains("1. print\n2. review"));
        assert_eq!(
            call.response_schema["items"]["properties"]["category"]["enum"],
            serde_json::json!(Category::literals())
        );
        match language {
            Language::Japanese => assert!(call.system_instruction.contains("日本語")),
            Language::English => assert!(call.system_instruction.contains("in English")),
        }
    }
}

#[tokio::test]
async fn zero_tasks_is_no_tasks() {
    let backend = Gated::new(ONE_OF_EACH, false);
    let wb = Workbench::new(session(Language::English), backend.clone());
    wb.edit_tasks(|t| t.update_content(t.ids()[0], "   "));

    assert_eq!(wb.submit().await, SubmitStatus::Failed);
    assert_eq!(
        wb.outcome(),
        Outcome::Failed(
            AnalysisError::from(separator_core::ValidationError {
                kind: ValidationKind::NoTasks
            })
            .user_message(Language::English)
        )
    );
    assert_eq!(backend.calls(), 0);
}

// ═══════════════════════════════════════════════════════════════════════
//  Workbench
// ═══════════════════════════════════════════════════════════════════════

#[tokio::test]
async fn one_of_each_category_maps_to_distinct_labels() {
    let wb = Workbench::new(
        session(Language::English),
        Gated::new(ONE_OF_EACH, false),
    );
    wb.edit_tasks(|t| {
        let first = t.ids()[0];
        t.update_content(first, "print");
        let id = t.insert_after(0).id;
        t.update_content(id, "review");
        let id = t.insert_after(1).id;
        t.update_content(id, "brief");
    });

    assert_eq!(wb.submit().await, SubmitStatus::Completed(3));

    let labeled = wb.labeled_results().unwrap();
    let labels: Vec<_> = labeled.iter().map(|r| r.label).collect();
    assert_eq!(labels, ["AI Optimal", "Hybrid", "Human Essential"]);
    assert_eq!(labeled[2].result.task, "brief");
}

#[tokio::test]
async fn invalid_json_leaves_list_editable_without_results() {
    let wb = Workbench::new(
        session(Language::Japanese),
        Gated::new("```json\n[oops", false),
    );
    wb.load_sample();

    assert_eq!(wb.submit().await, SubmitStatus::Failed);
    match wb.outcome() {
        Outcome::Failed(message) => assert!(message.contains("invalid JSON")),
        other => panic!("expected Failed, got {other:?}"),
    }
    assert!(wb.labeled_results().is_none());
    assert!(!wb.is_busy());

    let before = wb.tasks().len();
    wb.edit_tasks(|t| t.insert_after(0));
    assert_eq!(wb.tasks().len(), before + 1);
}

#[tokio::test]
async fn failure_after_success_discards_previous_results() {
    let backend = Gated::new(ONE_OF_EACH, false);
    let wb = Workbench::new(session(Language::English), backend);
    wb.load_sample();
    assert!(matches!(wb.submit().await, SubmitStatus::Completed(_)));

    wb.clear_credential();
    assert_eq!(wb.submit().await, SubmitStatus::Failed);
    assert!(wb.labeled_results().is_none());
}

#[tokio::test]
async fn workbench_rejects_submit_while_busy() {
    let backend = Gated::new(ONE_OF_EACH, true);
    let wb = Arc::new(Workbench::new(session(Language::English), backend.clone()));
    wb.load_sample();

    let first = {
        let wb = wb.clone();
        tokio::spawn(async move { wb.submit().await })
    };
    backend.entered.notified().await;

    assert_eq!(wb.submit().await, SubmitStatus::Rejected);
    assert_eq!(wb.outcome(), Outcome::Editing);

    backend.release.notify_one();
    assert_eq!(first.await.unwrap(), SubmitStatus::Completed(3));
    assert_eq!(backend.calls(), 1);
}
