//! Template expansion engine.
//!
//! Turns one `PromptTemplate` into the complete set of concrete examples:
//!
//! 1. **Pattern scanning** - Splitting the pattern into literal spans and
//!    atomic `{name}` placeholder tokens
//! 2. **Placeholder resolution** - Binding each token to its variable's
//!    position, rejecting tokens with no matching variable
//! 3. **Cartesian enumeration** - Walking every value combination with an
//!    odometer (first-declared variable varies slowest)
//!
//! Expansion is exhaustive and deterministic: no sampling, no deduplication.
//! Textually identical prompts arising from different bindings are kept as
//! distinct examples.

use std::collections::BTreeMap;

use serde::{Deserialize, Serialize};

use crate::catalog::{BiasType, EvalType, PromptTemplate};
use crate::error::ExpansionError;

/// Result type alias for expansion operations.
pub type Result<T> = std::result::Result<T, ExpansionError>;

/// One fully-instantiated prompt produced from a template and one concrete
/// variable binding. Immutable once produced.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct GeneratedExample {
    /// The pattern with every placeholder replaced by its bound value.
    pub prompt: String,
    /// The binding from variable name to the value chosen for this example.
    pub variables: BTreeMap<String, String>,
    /// The bias dimension, copied from the source template.
    pub bias_type: BiasType,
    /// The evaluation modality this example targets.
    pub evaluation_type: EvalType,
    /// The finer-grained label, copied from the source template.
    pub test_type: String,
}

/// A span of a template pattern.
#[derive(Debug)]
enum Segment<'a> {
    /// Literal text copied through verbatim.
    Literal(&'a str),
    /// A `{name}` token; carries the name between the braces.
    Placeholder(&'a str),
}

/// A pattern span with placeholders resolved to variable positions.
#[derive(Debug)]
enum ResolvedSegment<'a> {
    Literal(&'a str),
    Variable(usize),
}

/// Splits a pattern into literal spans and placeholder tokens.
///
/// A `{name}` span is treated as a single atomic token, so substitution can
/// never partially match inside another placeholder's brace-delimited text.
/// A `{` with no closing `}` is literal text.
fn scan_pattern(pattern: &str) -> Vec<Segment<'_>> {
    let mut segments = Vec::new();
    let mut rest = pattern;

    while let Some(open) = rest.find('{') {
        let close = match rest[open..].find('}') {
            Some(offset) => open + offset,
            None => break,
        };
        if open > 0 {
            segments.push(Segment::Literal(&rest[..open]));
        }
        segments.push(Segment::Placeholder(&rest[open + 1..close]));
        rest = &rest[close + 1..];
    }
    if !rest.is_empty() {
        segments.push(Segment::Literal(rest));
    }

    segments
}

/// Resolves every placeholder in the pattern to its variable's position.
///
/// Resolution happens before enumeration, so an unbound placeholder is
/// reported even when an empty candidate list makes the product empty.
fn resolve_segments(template: &PromptTemplate) -> Result<Vec<ResolvedSegment<'_>>> {
    scan_pattern(&template.pattern)
        .into_iter()
        .map(|segment| match segment {
            Segment::Literal(text) => Ok(ResolvedSegment::Literal(text)),
            Segment::Placeholder(name) => template
                .variables
                .iter()
                .position(|(key, _)| key == name)
                .map(ResolvedSegment::Variable)
                .ok_or_else(|| ExpansionError::UnboundPlaceholder {
                    bias_type: template.bias_type.as_str().to_string(),
                    test_type: template.test_type.clone(),
                    placeholder: name.to_string(),
                }),
        })
        .collect()
}

/// Renders one prompt by concatenating literal spans and the values selected
/// by the current odometer position.
fn render(segments: &[ResolvedSegment<'_>], values: &[&[String]], indices: &[usize]) -> String {
    let mut prompt = String::new();
    for segment in segments {
        match segment {
            ResolvedSegment::Literal(text) => prompt.push_str(text),
            ResolvedSegment::Variable(slot) => prompt.push_str(&values[*slot][indices[*slot]]),
        }
    }
    prompt
}

/// Expands a template into every example its variables admit.
///
/// The output length is exactly the product of all candidate-list lengths,
/// including variables the pattern never references. A variable with zero
/// candidates yields an empty result, not an error. A placeholder with no
/// matching variable fails with [`ExpansionError::UnboundPlaceholder`].
pub fn expand(template: &PromptTemplate) -> Result<Vec<GeneratedExample>> {
    let segments = resolve_segments(template)?;

    let values: Vec<&[String]> = template
        .variables
        .iter()
        .map(|(_, candidates)| candidates.as_slice())
        .collect();

    // Empty cartesian product: any variable without candidates yields nothing.
    if values.iter().any(|candidates| candidates.is_empty()) {
        return Ok(Vec::new());
    }

    let mut examples = Vec::with_capacity(template.combination_count());
    let mut indices = vec![0usize; values.len()];

    loop {
        let bindings: BTreeMap<String, String> = template
            .variables
            .iter()
            .zip(&indices)
            .map(|((name, candidates), &chosen)| (name.clone(), candidates[chosen].clone()))
            .collect();

        examples.push(GeneratedExample {
            prompt: render(&segments, &values, &indices),
            variables: bindings,
            bias_type: template.bias_type,
            evaluation_type: EvalType::Generation,
            test_type: template.test_type.clone(),
        });

        // Advance the odometer; the last-declared variable varies fastest.
        let mut slot = indices.len();
        loop {
            if slot == 0 {
                return Ok(examples);
            }
            slot -= 1;
            indices[slot] += 1;
            if indices[slot] < values[slot].len() {
                break;
            }
            indices[slot] = 0;
        }
    }
}
