//! # Input Classifier
//!
//! Chooses which shape to build from a photo or a text prompt.
//!
//! Text is matched against an ordered rule table: the first rule with a
//! keyword occurring anywhere in the normalized prompt wins, otherwise the
//! default shape is used. Images carry no usable signal yet and always map to
//! [`ShapeId::Cube`].
//!
//! ```rust
//! use shape_gen::{Classifier, ShapeId};
//!
//! let classifier = Classifier::default();
//! let result = classifier.classify_text("  A small toy CAR ");
//! assert_eq!(result.shape, ShapeId::Car);
//! assert_eq!(
//!     result.enhanced_prompt.as_deref(),
//!     Some("A 3D model of a small toy car, simple geometry, detailed")
//! );
//! ```

use crate::shape::ShapeId;
use config::constants::enhanced_prompt;
use serde::{Deserialize, Serialize};
use std::path::{Path, PathBuf};
use tracing::debug;

/// Built-in keyword table, highest priority first.
const DEFAULT_RULES: [(&[&str], ShapeId); 4] = [
    (&["car", "vehicle"], ShapeId::Car),
    (&["cube", "box"], ShapeId::Cube),
    (&["sphere", "ball"], ShapeId::Sphere),
    (&["cylinder", "tube"], ShapeId::Cylinder),
];

/// Input to classify.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum ClassificationInput {
    /// Path to a photo. Its pixels are not inspected.
    Image(PathBuf),
    /// Free-text description.
    Text(String),
}

/// Outcome of classifying one input.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Classification {
    /// Shape to build.
    pub shape: ShapeId,
    /// Trimmed, lowercased prompt (text input only).
    pub normalized_text: Option<String>,
    /// Prompt rewritten for a generative backend (text input only). Nothing
    /// consumes it yet; geometry depends on `shape` alone.
    pub enhanced_prompt: Option<String>,
}

/// A set of keywords that selects one shape.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct KeywordRule {
    keywords: Vec<String>,
    shape: ShapeId,
}

impl KeywordRule {
    /// Creates a rule. Keywords are stored lowercase.
    pub fn new<I, S>(keywords: I, shape: ShapeId) -> Self
    where
        I: IntoIterator<Item = S>,
        S: AsRef<str>,
    {
        Self {
            keywords: keywords
                .into_iter()
                .map(|k| k.as_ref().to_lowercase())
                .collect(),
            shape,
        }
    }

    /// Returns the rule's keywords.
    pub fn keywords(&self) -> &[String] {
        &self.keywords
    }

    /// Returns the shape the rule selects.
    pub fn shape(&self) -> ShapeId {
        self.shape
    }

    /// Returns the first keyword contained in `text`.
    fn matched_keyword(&self, text: &str) -> Option<&str> {
        self.keywords
            .iter()
            .map(String::as_str)
            .find(|k| text.contains(k))
    }
}

/// Keyword-table classifier.
#[derive(Debug, Clone)]
pub struct Classifier {
    rules: Vec<KeywordRule>,
    fallback: ShapeId,
}

impl Default for Classifier {
    fn default() -> Self {
        Self {
            rules: DEFAULT_RULES
                .iter()
                .map(|(keywords, shape)| KeywordRule::new(keywords.iter(), *shape))
                .collect(),
            fallback: ShapeId::Sphere,
        }
    }
}

impl Classifier {
    /// Creates a classifier from an explicit rule table.
    pub fn new(rules: Vec<KeywordRule>, fallback: ShapeId) -> Self {
        Self { rules, fallback }
    }

    /// Appends a rule with the lowest priority.
    pub fn with_rule(mut self, rule: KeywordRule) -> Self {
        self.rules.push(rule);
        self
    }

    /// Returns the rules in priority order.
    pub fn rules(&self) -> &[KeywordRule] {
        &self.rules
    }

    /// Returns the shape used when no rule matches.
    pub fn fallback(&self) -> ShapeId {
        self.fallback
    }

    /// Classifies any input.
    pub fn classify(&self, input: &ClassificationInput) -> Classification {
        match input {
            ClassificationInput::Image(path) => self.classify_image(path),
            ClassificationInput::Text(text) => self.classify_text(text),
        }
    }

    /// Classifies a photo. Always [`ShapeId::Cube`].
    pub fn classify_image(&self, path: &Path) -> Classification {
        debug!(path = %path.display(), shape = %ShapeId::Cube, "classified image");
        Classification {
            shape: ShapeId::Cube,
            normalized_text: None,
            enhanced_prompt: None,
        }
    }

    /// Classifies a text prompt.
    pub fn classify_text(&self, text: &str) -> Classification {
        let normalized = normalize(text);

        let matched = self
            .rules
            .iter()
            .find_map(|rule| rule.matched_keyword(&normalized).map(|k| (k, rule.shape)));

        let shape = match matched {
            Some((keyword, shape)) => {
                debug!(prompt = %normalized, keyword, %shape, "classified text");
                shape
            }
            None => {
                debug!(prompt = %normalized, shape = %self.fallback, "no keyword matched");
                self.fallback
            }
        };

        Classification {
            shape,
            enhanced_prompt: Some(enhanced_prompt(&normalized)),
            normalized_text: Some(normalized),
        }
    }
}

/// Trims and lowercases a prompt.
pub fn normalize(text: &str) -> String {
    text.trim().to_lowercase()
}

#[cfg(test)]
mod tests {
    use super::*;

    fn shape_of(text: &str) -> ShapeId {
        Classifier::default().classify_text(text).shape
    }

    #[test]
    fn test_reference_prompts() {
        assert_eq!(shape_of("A small toy car"), ShapeId::Car);
        assert_eq!(shape_of("big cube please"), ShapeId::Cube);
        assert_eq!(shape_of("bouncy ball"), ShapeId::Sphere);
        assert_eq!(shape_of("metal tube"), ShapeId::Cylinder);
        assert_eq!(shape_of("a rock"), ShapeId::Sphere);
    }

    #[test]
    fn test_synonyms() {
        assert_eq!(shape_of("electric vehicle"), ShapeId::Car);
        assert_eq!(shape_of("wooden box"), ShapeId::Cube);
        assert_eq!(shape_of("a perfect sphere"), ShapeId::Sphere);
        assert_eq!(shape_of("glass cylinder"), ShapeId::Cylinder);
    }

    #[test]
    fn test_priority_order() {
        // Car outranks every other group, cube outranks sphere, sphere outranks cylinder.
        assert_eq!(shape_of("a ball in a box on a car"), ShapeId::Car);
        assert_eq!(shape_of("ball inside a box"), ShapeId::Cube);
        assert_eq!(shape_of("ball in a tube"), ShapeId::Sphere);
    }

    #[test]
    fn test_substring_matching() {
        // "scarf" contains "car"; "tubes" contains "tube".
        assert_eq!(shape_of("a red scarf"), ShapeId::Car);
        assert_eq!(shape_of("TUBES"), ShapeId::Cylinder);
    }

    #[test]
    fn test_empty_prompt_uses_fallback() {
        let result = Classifier::default().classify_text("   ");
        assert_eq!(result.shape, ShapeId::Sphere);
        assert_eq!(result.normalized_text.as_deref(), Some(""));
    }

    #[test]
    fn test_enhanced_prompt_uses_normalized_text() {
        let result = Classifier::default().classify_text("\tBouncy Ball\n");
        assert_eq!(result.normalized_text.as_deref(), Some("bouncy ball"));
        assert_eq!(
            result.enhanced_prompt.as_deref(),
            Some("A 3D model of bouncy ball, simple geometry, detailed")
        );
    }

    #[test]
    fn test_image_is_always_cube() {
        let classifier = Classifier::default();
        for name in ["car.jpg", "ball.png", "tube.jpeg", ""] {
            let result = classifier.classify(&ClassificationInput::Image(PathBuf::from(name)));
            assert_eq!(result.shape, ShapeId::Cube);
            assert!(result.enhanced_prompt.is_none());
        }
    }

    #[test]
    fn test_extended_table() {
        let classifier =
            Classifier::default().with_rule(KeywordRule::new(["Can", "Pipe"], ShapeId::Cylinder));
        assert_eq!(classifier.rules().len(), 5);
        assert_eq!(classifier.rules()[4].keywords(), ["can", "pipe"]);
        assert_eq!(classifier.classify_text("soda can").shape, ShapeId::Cylinder);
    }

    #[test]
    fn test_custom_table_and_fallback() {
        let classifier = Classifier::new(
            vec![KeywordRule::new(["dice"], ShapeId::Cube)],
            ShapeId::Cylinder,
        );
        assert_eq!(classifier.classify_text("two dice").shape, ShapeId::Cube);
        assert_eq!(classifier.classify_text("toy car").shape, ShapeId::Cylinder);
        assert_eq!(classifier.fallback(), ShapeId::Cylinder);
    }

    #[test]
    fn test_classification_is_pure() {
        let classifier = Classifier::default();
        let input = ClassificationInput::Text("metal tube".into());
        assert_eq!(classifier.classify(&input), classifier.classify(&input));
    }
}
