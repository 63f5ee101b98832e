//! Batch Framing Protocol
//!
//! Text-level, backend-agnostic protocol for amortizing one network call
//! across many elements. Request side: numbered per-element blocks plus an
//! instruction naming the response delimiter. Response side: a single blob
//! split on that delimiter, trusting segment order to match request order.
//!
//! Parsing is pure and total: it never fails, it only produces fewer genuine
//! explanations and more placeholders.

use crate::constants::batch::EXPLANATION_DELIMITER;
use crate::types::ExplanationRequest;

/// Build the prompt for a single-element explanation request
pub fn build_single_prompt(request: &ExplanationRequest) -> String {
    let mut prompt = format!(
        "Explain this Java code like I'm 5 years old:\n\nCode: {}",
        request.signature
    );

    if let Some(body) = non_empty(request.body.as_deref()) {
        prompt.push_str("\n\nImplementation:\n");
        prompt.push_str(body);
    }

    if let Some(context) = non_empty(request.custom_prompt.as_deref()) {
        prompt.push_str("\n\nAdditional context: ");
        prompt.push_str(context);
    }

    prompt.push_str(
        "\n\nPlease provide a simple, easy-to-understand explanation that a 5-year-old could grasp.",
    );
    prompt
}

/// Build one prompt enumerating all requests, with a numbered header per
/// element and an explicit instruction naming the response delimiter
pub fn build_batch_prompt(requests: &[ExplanationRequest]) -> String {
    let mut prompt = String::from(
        "Explain these Java code elements like I'm 5 years old. \
         For each element, provide a simple, easy-to-understand explanation:\n\n",
    );

    for (i, request) in requests.iter().enumerate() {
        prompt.push_str(&format!("--- Element {} ---\nCode: {}", i + 1, request.signature));

        if let Some(body) = non_empty(request.body.as_deref()) {
            prompt.push_str("\n\nImplementation:\n");
            prompt.push_str(body);
        }

        if let Some(context) = non_empty(request.custom_prompt.as_deref()) {
            prompt.push_str("\n\nAdditional context: ");
            prompt.push_str(context);
        }

        prompt.push_str("\n\n");
    }

    prompt.push_str(&format!(
        "Please provide explanations for each element, separated by '{}' markers.",
        EXPLANATION_DELIMITER
    ));
    prompt
}

/// Deterministic placeholder for a position the response did not cover
pub fn shortfall_placeholder(position: usize) -> String {
    format!("Explanation not generated for element {}", position)
}

/// Split a batch response into exactly `expected` explanations.
///
/// Segments are taken positionally up to `expected`; a position beyond the
/// parsed segment count, or whose segment is empty after trimming, is filled
/// with the shortfall placeholder. Extra segments are truncated.
pub fn parse_batch_response(response: &str, expected: usize) -> Vec<String> {
    let mut explanations = Vec::with_capacity(expected);

    for (i, part) in response
        .split(EXPLANATION_DELIMITER)
        .take(expected)
        .enumerate()
    {
        let trimmed = part.trim();
        if trimmed.is_empty() {
            explanations.push(shortfall_placeholder(i + 1));
        } else {
            explanations.push(trimmed.to_string());
        }
    }

    while explanations.len() < expected {
        explanations.push(shortfall_placeholder(explanations.len() + 1));
    }

    explanations
}

fn non_empty(value: Option<&str>) -> Option<&str> {
    value.filter(|v| !v.trim().is_empty())
}
