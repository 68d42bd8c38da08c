//! The analysis client.
//!
//! Runs one schema-constrained generation call per submission under a
//! single-flight guard: while a call is outstanding every further call is
//! rejected with [`AnalysisError::Busy`] without reaching the backend.

use std::sync::Arc;
use std::sync::atomic::{AtomicBool, Ordering};
use std::time::Duration;

use tracing::{debug, info, warn};

use separator_core::{AnalysisRequest, AnalysisResult, Credential, ValidationError};

use crate::backend::{GenerationCall, GenerativeBackend};
use crate::error::{AnalysisError, Result, classify_failure};
use crate::schema::{parse_results, response_schema};

// ---------------------------------------------------------------------------
// Options
// ---------------------------------------------------------------------------

/// Tunables for [`AnalysisClient`].
#[derive(Debug, Clone)]
pub struct ClientOptions {
    /// Upper bound on one call, independent of provider-side limits.
    pub timeout: Duration,
    /// Reject responses whose record count differs from the task count.
    pub strict_count: bool,
}

impl Default for ClientOptions {
    fn default() -> Self {
        Self {
            timeout: Duration::from_secs(120),
            strict_count: false,
        }
    }
}

// ---------------------------------------------------------------------------
// In-flight guard
// ---------------------------------------------------------------------------

/// Holds the busy flag for the lifetime of one call.  Dropping releases it,
/// including when the call future is cancelled.
struct InFlightGuard<'a> {
    flag: &'a AtomicBool,
}

impl<'a> InFlightGuard<'a> {
    fn acquire(flag: &'a AtomicBool) -> Option<Self> {
        flag.compare_exchange(false, true, Ordering::AcqRel, Ordering::Acquire)
            .ok()
            .map(|_| Self { flag })
    }
}

impl Drop for InFlightGuard<'_> {
    fn drop(&mut self) {
        self.flag.store(false, Ordering::Release);
    }
}

// ---------------------------------------------------------------------------
// Client
// ---------------------------------------------------------------------------

/// Executes analysis requests against a [`GenerativeBackend`].
pub struct AnalysisClient {
    backend: Arc<dyn GenerativeBackend>,
    options: ClientOptions,
    in_flight: AtomicBool,
}

impl AnalysisClient {
    pub fn new(backend: Arc<dyn GenerativeBackend>, options: ClientOptions) -> Self {
        Self {
            backend,
            options,
            in_flight: AtomicBool::new(false),
        }
    }

    /// Whether a call is currently outstanding.
    pub fn is_busy(&self) -> bool {
        self.in_flight.load(Ordering::Acquire)
    }

    pub fn options(&self) -> &ClientOptions {
        &self.options
    }

    /// Classify the tasks in `request` with `model_id`.
    ///
    /// Validation runs before the busy check and neither touches the
    /// network.  The returned records keep the provider's order.
    pub async fn analyze(
        &self,
        request: &AnalysisRequest,
        credential: &Credential,
        model_id: &str,
    ) -> Result<Vec<AnalysisResult>> {
        if credential.is_blank() {
            return Err(ValidationError::missing_credential().into());
        }
        if request.ordered_task_texts().is_empty() {
            return Err(ValidationError::no_tasks().into());
        }

        let Some(_guard) = InFlightGuard::acquire(&self.in_flight) else {
            debug!("analysis rejected: another call is outstanding");
            return Err(AnalysisError::Busy);
        };

        let call = GenerationCall {
            model: model_id.to_owned(),
            system_instruction: request.instruction_text(),
            prompt: request.user_prompt(),
            response_schema: response_schema(),
        };

        let submitted = request.ordered_task_texts().len();
        info!(
            provider = self.backend.name(),
            model = model_id,
            tasks = submitted,
            language = %request.language(),
            "starting analysis"
        );

        let raw = match tokio::time::timeout(
            self.options.timeout,
            self.backend.generate(&call, credential),
        )
        .await
        {
            Ok(Ok(raw)) => raw,
            Ok(Err(e)) => {
                let err = classify_failure(&e, model_id);
                warn!(status = ?e.status, error = %err, "analysis call failed");
                return Err(err);
            }
            Err(_) => {
                warn!(timeout_secs = self.options.timeout.as_secs(), "analysis call timed out");
                return Err(AnalysisError::Unknown {
                    detail: format!(
                        "request timed out after {}s",
                        self.options.timeout.as_secs_f32()
                    ),
                });
            }
        };

        let results = parse_results(&raw).inspect_err(|e| {
            warn!(error = %e, bytes = raw.len(), "analysis response failed validation");
        })?;

        if results.len() != submitted {
            if self.options.strict_count {
                return Err(AnalysisError::Parse {
                    detail: format!(
                        "expected {submitted} results, got {}",
                        results.len()
                    ),
                });
            }
            warn!(
                submitted,
                returned = results.len(),
                "result count differs from task count"
            );
        }

        info!(results = results.len(), "analysis complete");
        Ok(results)
    }
}

// ---------------------------------------------------------------------------
// Tests
// ---------------------------------------------------------------------------
