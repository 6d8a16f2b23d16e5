//! Template catalog for bias probe prompts.
//!
//! This module provides the taxonomy for bias probes (bias dimension,
//! evaluation modality, corpus category), the `PromptTemplate` definition,
//! and the immutable `TemplateCatalog` holding the fixed set of templates
//! partitioned by category.

mod templates;

use serde::{Deserialize, Serialize};

/// The bias dimension a template probes.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum BiasType {
    Misgendering,
    Toxicity,
    Stereotype,
    Sentiment,
    Coreference,
}

impl BiasType {
    /// Returns the wire-format name for this bias dimension.
    pub fn as_str(&self) -> &'static str {
        match self {
            BiasType::Misgendering => "misgendering",
            BiasType::Toxicity => "toxicity",
            BiasType::Stereotype => "stereotype",
            BiasType::Sentiment => "sentiment",
            BiasType::Coreference => "coreference",
        }
    }
}

/// The evaluation modality generated examples target.
///
/// Only open-ended generation is produced today; the variant carries through
/// to the serialized corpus for downstream consumers.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum EvalType {
    Generation,
}

/// The corpus categories templates are partitioned into.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum TemplateCategory {
    Pronoun,
    Disclosure,
    Stereotype,
    Sentiment,
}

impl TemplateCategory {
    /// Returns all categories in their fixed aggregation order.
    pub fn all() -> [TemplateCategory; 4] {
        [
            TemplateCategory::Pronoun,
            TemplateCategory::Disclosure,
            TemplateCategory::Stereotype,
            TemplateCategory::Sentiment,
        ]
    }

    /// Returns the lowercase name used in corpus metadata.
    pub fn name(&self) -> &'static str {
        match self {
            TemplateCategory::Pronoun => "pronoun",
            TemplateCategory::Disclosure => "disclosure",
            TemplateCategory::Stereotype => "stereotype",
            TemplateCategory::Sentiment => "sentiment",
        }
    }

    /// Returns the human-readable display name for this category.
    pub fn display_name(&self) -> &'static str {
        match self {
            TemplateCategory::Pronoun => "Pronoun",
            TemplateCategory::Disclosure => "Disclosure",
            TemplateCategory::Stereotype => "Stereotype",
            TemplateCategory::Sentiment => "Sentiment",
        }
    }
}

/// A parameterized bias probe: a text pattern with named variable domains
/// and category tags.
///
/// Placeholders in `pattern` use `{name}` syntax and are filled from the
/// candidate values declared for `name`. Variable declaration order is
/// significant: it fixes the enumeration order of the cartesian product
/// during expansion (first-declared variable varies slowest).
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct PromptTemplate {
    /// Text pattern containing zero or more `{name}` placeholder tokens.
    pub pattern: String,
    /// Ordered mapping from placeholder name to candidate values.
    pub variables: Vec<(String, Vec<String>)>,
    /// The bias dimension this template probes.
    pub bias_type: BiasType,
    /// Finer-grained label distinguishing templates within a category.
    pub test_type: String,
}

impl PromptTemplate {
    /// Creates a new template with no variables.
    pub fn new(
        pattern: impl Into<String>,
        bias_type: BiasType,
        test_type: impl Into<String>,
    ) -> Self {
        Self {
            pattern: pattern.into(),
            variables: Vec::new(),
            bias_type,
            test_type: test_type.into(),
        }
    }

    /// Declares a variable and its candidate values.
    ///
    /// Keys are expected to be unique; declaration order is preserved.
    pub fn with_variable(
        mut self,
        name: impl Into<String>,
        values: impl IntoIterator<Item = impl Into<String>>,
    ) -> Self {
        self.variables
            .push((name.into(), values.into_iter().map(|v| v.into()).collect()));
        self
    }

    /// Returns the candidate values declared for a variable, if any.
    pub fn variable(&self, name: &str) -> Option<&[String]> {
        self.variables
            .iter()
            .find(|(key, _)| key == name)
            .map(|(_, values)| values.as_slice())
    }

    /// Returns the number of examples expansion will produce: the product of
    /// all candidate-list lengths, including variables unused by `pattern`.
    pub fn combination_count(&self) -> usize {
        self.variables
            .iter()
            .map(|(_, values)| values.len())
            .product()
    }
}

/// Immutable collection of templates partitioned into categories.
///
/// The catalog is read-only configuration data established at process start;
/// no mutation operations are exposed after construction.
#[derive(Debug, Clone, Default)]
pub struct TemplateCatalog {
    pronoun: Vec<PromptTemplate>,
    disclosure: Vec<PromptTemplate>,
    stereotype: Vec<PromptTemplate>,
    sentiment: Vec<PromptTemplate>,
}

impl TemplateCatalog {
    /// Creates an empty catalog.
    pub fn new() -> Self {
        Self::default()
    }

    /// Adds templates to a category during construction.
    pub fn with_templates(
        mut self,
        category: TemplateCategory,
        templates: impl IntoIterator<Item = PromptTemplate>,
    ) -> Self {
        self.slot_mut(category).extend(templates);
        self
    }

    /// Returns the process-wide builtin catalog.
    pub fn builtin() -> &'static TemplateCatalog {
        templates::builtin()
    }

    /// Returns the templates for a category, in declaration order.
    pub fn templates_for_category(&self, category: TemplateCategory) -> &[PromptTemplate] {
        match category {
            TemplateCategory::Pronoun => &self.pronoun,
            TemplateCategory::Disclosure => &self.disclosure,
            TemplateCategory::Stereotype => &self.stereotype,
            TemplateCategory::Sentiment => &self.sentiment,
        }
    }

    /// Iterates categories and their templates in the fixed catalog order.
    pub fn iter(&self) -> impl Iterator<Item = (TemplateCategory, &[PromptTemplate])> {
        TemplateCategory::all()
            .into_iter()
            .map(move |category| (category, self.templates_for_category(category)))
    }

    /// Returns the total number of templates across all categories.
    pub fn template_count(&self) -> usize {
        TemplateCategory::all()
            .into_iter()
            .map(|c| self.templates_for_category(c).len())
            .sum()
    }

    /// Returns true if the catalog holds no templates.
    pub fn is_empty(&self) -> bool {
        self.template_count() == 0
    }

    fn slot_mut(&mut self, category: TemplateCategory) -> &mut Vec<PromptTemplate> {
        match category {
            TemplateCategory::Pronoun => &mut self.pronoun,
            TemplateCategory::Disclosure => &mut self.disclosure,
            TemplateCategory::Stereotype => &mut self.stereotype,
            TemplateCategory::Sentiment => &mut self.sentiment,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_category_all_order() {
        let all = TemplateCategory::all();
        assert_eq!(all.len(), 4);
        assert_eq!(all[0], TemplateCategory::Pronoun);
        assert_eq!(all[3], TemplateCategory::Sentiment);
    }

    #[test]
    fn test_category_names() {
        assert_eq!(TemplateCategory::Pronoun.name(), "pronoun");
        assert_eq!(TemplateCategory::Disclosure.name(), "disclosure");
        assert_eq!(TemplateCategory::Stereotype.display_name(), "Stereotype");
    }

    #[test]
    fn test_bias_type_serialization() {
        let json = serde_json::to_string(&BiasType::Misgendering).expect("should serialize");
        assert_eq!(json, "\"misgendering\"");
        let json = serde_json::to_string(&EvalType::Generation).expect("should serialize");
        assert_eq!(json, "\"generation\"");
    }

    #[test]
    fn test_template_builder() {
        let template = PromptTemplate::new("The {identity} person", BiasType::Stereotype, "trait")
            .with_variable("identity", ["trans", "cis"]);

        assert_eq!(template.pattern, "The {identity} person");
        assert_eq!(
            template.variable("identity"),
            Some(&["trans".to_string(), "cis".to_string()][..])
        );
        assert!(template.variable("missing").is_none());
        assert_eq!(template.combination_count(), 2);
    }

    #[test]
    fn test_combination_count_includes_unused_variables() {
        let template = PromptTemplate::new("Hello", BiasType::Sentiment, "greeting")
            .with_variable("x", ["a", "b"])
            .with_variable("y", ["1", "2", "3"]);
        assert_eq!(template.combination_count(), 6);
    }

    #[test]
    fn test_combination_count_no_variables() {
        let template = PromptTemplate::new("Hello", BiasType::Sentiment, "greeting");
        assert_eq!(template.combination_count(), 1);
    }

    #[test]
    fn test_combination_count_empty_values() {
        let template = PromptTemplate::new("{x}", BiasType::Sentiment, "empty")
            .with_variable("x", Vec::<String>::new());
        assert_eq!(template.combination_count(), 0);
    }

    #[test]
    fn test_catalog_construction() {
        let catalog = TemplateCatalog::new().with_templates(
            TemplateCategory::Stereotype,
            [PromptTemplate::new("{x}", BiasType::Stereotype, "t").with_variable("x", ["a"])],
        );

        assert_eq!(catalog.template_count(), 1);
        assert_eq!(
            catalog
                .templates_for_category(TemplateCategory::Stereotype)
                .len(),
            1
        );
        assert!(catalog
            .templates_for_category(TemplateCategory::Pronoun)
            .is_empty());
    }

    #[test]
    fn test_builtin_catalog_shape() {
        let catalog = TemplateCatalog::builtin();
        assert_eq!(catalog.template_count(), 10);
        assert_eq!(
            catalog
                .templates_for_category(TemplateCategory::Pronoun)
                .len(),
            3
        );
        assert_eq!(
            catalog
                .templates_for_category(TemplateCategory::Disclosure)
                .len(),
            2
        );
        assert_eq!(
            catalog
                .templates_for_category(TemplateCategory::Stereotype)
                .len(),
            3
        );
        assert_eq!(
            catalog
                .templates_for_category(TemplateCategory::Sentiment)
                .len(),
            2
        );
    }

    #[test]
    fn test_builtin_catalog_bias_tags() {
        let catalog = TemplateCatalog::builtin();
        for template in catalog.templates_for_category(TemplateCategory::Pronoun) {
            assert_eq!(template.bias_type, BiasType::Misgendering);
        }
        for template in catalog.templates_for_category(TemplateCategory::Disclosure) {
            assert_eq!(template.bias_type, BiasType::Toxicity);
        }
    }

    #[test]
    fn test_builtin_variables_are_nonempty() {
        for (_, templates) in TemplateCatalog::builtin().iter() {
            for template in templates {
                for (name, values) in &template.variables {
                    assert!(
                        !values.is_empty(),
                        "builtin variable '{}' should have candidate values",
                        name
                    );
                }
            }
        }
    }
}
