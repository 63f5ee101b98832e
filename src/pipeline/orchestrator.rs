//! Batch Orchestrator
//!
//! Turns N marked elements into N explanation results with bounded,
//! predictable degradation. Three tiers, attempted in order, short-
//! circuiting on first success:
//!
//! 1. One batch call covering all requests
//! 2. Per-element remote fallback, issued sequentially in element order,
//!    only when the batch call itself failed
//! 3. Stub placeholder text for any element still unresolved
//!
//! Each tier's failure is explicitly checked and the next tier explicitly
//! invoked; results always come out in input order, exactly one per
//! element, regardless of backend behavior.

use tracing::{debug, warn};

use super::assembler;
use crate::backend::{SharedBackend, shortfall_placeholder, stub_explanation};
use crate::types::{ExplanationRequest, ExplanationResult, MarkedElement};

pub struct BatchOrchestrator {
    backend: SharedBackend,
}

impl BatchOrchestrator {
    pub fn new(backend: SharedBackend) -> Self {
        Self { backend }
    }

    /// Explain every element, in input order.
    ///
    /// Infallible by design: backend failures degrade individual
    /// explanations to placeholder text, they never abort the pipeline.
    pub async fn explain_all(&self, elements: &[MarkedElement]) -> Vec<ExplanationResult> {
        let requests: Vec<ExplanationRequest> =
            elements.iter().map(MarkedElement::to_request).collect();

        let texts = self.explain_requests(&requests).await;
        assembler::assemble(elements, texts)
    }

    async fn explain_requests(&self, requests: &[ExplanationRequest]) -> Vec<String> {
        if requests.is_empty() {
            return Vec::new();
        }

        debug!(
            "Requesting batch explanations for {} elements from {}",
            requests.len(),
            self.backend.name()
        );

        // Tier 1: one batch call for all requests. A malformed response is
        // already reconciled inside the backend's parse step; only a failed
        // call reaches tier 2.
        match self.backend.explain_batch(requests).await {
            Ok(texts) => reconcile(texts, requests.len()),
            Err(e) => {
                warn!(
                    "Batch explanation failed, falling back to individual requests: {}",
                    e
                );
                self.explain_individually(requests).await
            }
        }
    }

    // Tier 2: one call per element, in element order. A per-element failure
    // degrades that position to stub text (tier 3) while the rest proceed.
    async fn explain_individually(&self, requests: &[ExplanationRequest]) -> Vec<String> {
        let mut texts = Vec::with_capacity(requests.len());

        for (i, request) in requests.iter().enumerate() {
            match self.backend.explain_one(request).await {
                Ok(text) => texts.push(text),
                Err(e) => {
                    warn!(
                        "Explanation failed for element {} ({}), using stub: {}",
                        i + 1,
                        request.signature,
                        e
                    );
                    texts.push(stub_explanation(request));
                }
            }
        }

        texts
    }
}

/// Guard the length invariant against a misbehaving backend: pad missing
/// positions with shortfall placeholders, drop extras.
fn reconcile(mut texts: Vec<String>, expected: usize) -> Vec<String> {
    if texts.len() > expected {
        texts.truncate(expected);
    }
    while texts.len() < expected {
        texts.push(shortfall_placeholder(texts.len() + 1));
    }
    texts
}

#[cfg(test)]
mod tests {
    use super::*;
    use async_trait::async_trait;
    use std::sync::Arc;
    use std::sync::atomic::{AtomicUsize, Ordering};

    use crate::backend::{ExplanationBackend, StubBackend, parse_batch_response};
    use crate::types::{BackendError, Eli5Error, ElementKind, Result};

    fn elements(n: usize) -> Vec<MarkedElement> {
        (0..n)
            .map(|i| MarkedElement {
                name: format!("element{}", i),
                kind: ElementKind::Method,
                signature: format!("void element{}()", i),
                body: None,
                custom_prompt: None,
                source_file: "Sample.java".into(),
                source_line: i + 1,
            })
            .collect()
    }

    /// Backend scripted per test: optional raw batch body, per-call
    /// individual failures.
    struct ScriptedBackend {
        batch_body: Option<String>,
        fail_one_on: Vec<usize>,
        one_calls: AtomicUsize,
    }

    impl ScriptedBackend {
        fn batch_failing(fail_one_on: Vec<usize>) -> Self {
            Self {
                batch_body: None,
                fail_one_on,
                one_calls: AtomicUsize::new(0),
            }
        }

        fn with_batch_body(body: &str) -> Self {
            Self {
                batch_body: Some(body.to_string()),
                fail_one_on: Vec::new(),
                one_calls: AtomicUsize::new(0),
            }
        }
    }

    #[async_trait]
    impl ExplanationBackend for ScriptedBackend {
        async fn explain_one(&self, request: &ExplanationRequest) -> Result<String> {
            let call = self.one_calls.fetch_add(1, Ordering::SeqCst);
            if self.fail_one_on.contains(&call) {
                Err(Eli5Error::Backend(BackendError::network(
                    "connection reset",
                    "scripted",
                )))
            } else {
                Ok(format!("Individual explanation for {}", request.signature))
            }
        }

        async fn explain_batch(&self, requests: &[ExplanationRequest]) -> Result<Vec<String>> {
            match &self.batch_body {
                Some(body) => Ok(parse_batch_response(body, requests.len())),
                None => Err(Eli5Error::Backend(BackendError::network(
                    "timeout",
                    "scripted",
                ))),
            }
        }

        fn is_available(&self) -> bool {
            true
        }

        fn name(&self) -> &str {
            "scripted"
        }
    }

    #[tokio::test]
    async fn test_empty_input_yields_empty_output() {
        let orchestrator = BatchOrchestrator::new(Arc::new(StubBackend::new()));
        let results = orchestrator.explain_all(&[]).await;
        assert!(results.is_empty());
    }

    #[tokio::test]
    async fn test_batch_success_preserves_order() {
        let backend = ScriptedBackend::with_batch_body(
            "First---EXPLANATION---Second---EXPLANATION---Third",
        );
        let orchestrator = BatchOrchestrator::new(Arc::new(backend));
        let results = orchestrator.explain_all(&elements(3)).await;

        assert_eq!(results.len(), 3);
        assert_eq!(results[0].explanation, "First");
        assert_eq!(results[1].explanation, "Second");
        assert_eq!(results[2].explanation, "Third");
        assert_eq!(results[0].element_name, "element0");
    }

    #[tokio::test]
    async fn test_short_batch_response_is_padded() {
        // Only two segments for three elements; the trailing delimiter
        // leaves the second segment's successor empty
        let backend =
            ScriptedBackend::with_batch_body("Exp1---EXPLANATION---Exp2---EXPLANATION---");
        let orchestrator = BatchOrchestrator::new(Arc::new(backend));
        let results = orchestrator.explain_all(&elements(3)).await;

        assert_eq!(results.len(), 3);
        assert_eq!(results[0].explanation, "Exp1");
        assert_eq!(results[1].explanation, "Exp2");
        assert_eq!(
            results[2].explanation,
            "Explanation not generated for element 3"
        );
    }

    #[tokio::test]
    async fn test_transport_failure_falls_back_to_individual_calls() {
        let backend = ScriptedBackend::batch_failing(vec![]);
        let orchestrator = BatchOrchestrator::new(Arc::new(backend));
        let results = orchestrator.explain_all(&elements(2)).await;

        assert_eq!(results.len(), 2);
        assert_eq!(
            results[0].explanation,
            "Individual explanation for void element0()"
        );
        assert_eq!(
            results[1].explanation,
            "Individual explanation for void element1()"
        );
    }

    #[tokio::test]
    async fn test_individual_failure_degrades_to_stub_text() {
        // Batch fails; element 1 succeeds individually, element 2 fails
        let backend = ScriptedBackend::batch_failing(vec![1]);
        let orchestrator = BatchOrchestrator::new(Arc::new(backend));
        let results = orchestrator.explain_all(&elements(2)).await;

        assert_eq!(results.len(), 2);
        assert_eq!(
            results[0].explanation,
            "Individual explanation for void element0()"
        );
        assert!(
            results[1]
                .explanation
                .contains("This is a placeholder explanation for: void element1()")
        );
        assert!(results[1].explanation.contains("stub explanation"));
    }

    #[tokio::test]
    async fn test_stub_backend_end_to_end() {
        // No credential configured: the caller selects the stub outright
        let orchestrator = BatchOrchestrator::new(Arc::new(StubBackend::new()));
        let mut element = elements(1);
        element[0].signature = "int add(int a, int b)".to_string();
        element[0].body = Some("return a + b;".to_string());

        let results = orchestrator.explain_all(&element).await;
        assert_eq!(results.len(), 1);
        assert!(results[0].explanation.contains("placeholder"));
        assert!(results[0].explanation.contains("int add(int a, int b)"));
    }

    #[test]
    fn test_reconcile_pads_and_truncates() {
        let padded = reconcile(vec!["a".to_string()], 3);
        assert_eq!(padded.len(), 3);
        assert_eq!(padded[1], "Explanation not generated for element 2");
        assert_eq!(padded[2], "Explanation not generated for element 3");

        let truncated = reconcile(
            vec!["a".to_string(), "b".to_string(), "c".to_string()],
            2,
        );
        assert_eq!(truncated, vec!["a", "b"]);
    }
}
