//! Result Assembler
//!
//! Pure positional zip of marked elements with their resolved explanation
//! texts. Assumes the orchestrator's length invariant already holds; has no
//! failure modes of its own.

use crate::types::{ExplanationResult, MarkedElement};

/// Pair each element with its explanation text, by position
pub fn assemble(elements: &[MarkedElement], explanations: Vec<String>) -> Vec<ExplanationResult> {
    elements
        .iter()
        .zip(explanations)
        .map(|(element, explanation)| ExplanationResult {
            element_name: element.name.clone(),
            element_kind: element.kind,
            signature: element.signature.clone(),
            body: element.body.clone(),
            explanation,
            custom_prompt: element.custom_prompt.clone(),
        })
        .collect()
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::types::ElementKind;

    fn element(name: &str) -> MarkedElement {
        MarkedElement {
            name: name.to_string(),
            kind: ElementKind::Method,
            signature: format!("void {}()", name),
            body: None,
            custom_prompt: Some("context".to_string()),
            source_file: "A.java".into(),
            source_line: 1,
        }
    }

    #[test]
    fn test_assemble_zips_by_position() {
        let elements = vec![element("first"), element("second")];
        let results = assemble(
            &elements,
            vec!["one".to_string(), "two".to_string()],
        );

        assert_eq!(results.len(), 2);
        assert_eq!(results[0].element_name, "first");
        assert_eq!(results[0].explanation, "one");
        assert_eq!(results[1].element_name, "second");
        assert_eq!(results[1].explanation, "two");
        assert_eq!(results[0].custom_prompt.as_deref(), Some("context"));
    }

    #[test]
    fn test_assemble_empty() {
        assert!(assemble(&[], Vec::new()).is_empty());
    }
}
