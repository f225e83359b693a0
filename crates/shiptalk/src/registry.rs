use std::collections::btree_map::Entry;
use std::collections::BTreeMap;
use std::sync::Arc;

use serde_json::Value;
use tera::Tera;

use crate::chart::ChartPlan;
use crate::errors::StartupError;
use crate::prompt::PromptBuilder;
use crate::prompt_template::load_templates;
use crate::reference::ReferenceLibrary;
use crate::shape::ObjectShape;
use crate::tool::ToolDefinition;
use crate::tools;

/// Everything needed to serve one tool. Immutable once the registry is built.
#[derive(Debug, Clone)]
pub struct ToolEntry {
    pub id: &'static str,
    pub description: &'static str,
    pub input: ObjectShape,
    pub output: ObjectShape,
    pub prompt: PromptBuilder,
    /// Allowed or suggested values per input field
    pub options: BTreeMap<String, Vec<&'static str>>,
}

/// Read-only mapping from tool identifier to its entry
#[derive(Debug, Clone, Default)]
pub struct Registry {
    entries: BTreeMap<&'static str, ToolEntry>,
}

impl Registry {
    /// Build the registry from the full tool catalog
    pub fn register_all(library: &ReferenceLibrary) -> Result<Self, StartupError> {
        Self::from_definitions(tools::definitions(), library)
    }

    /// Build the registry from an explicit list of definitions
    pub fn from_definitions(
        definitions: Vec<ToolDefinition>,
        library: &ReferenceLibrary,
    ) -> Result<Self, StartupError> {
        let templates = load_templates().map_err(|source| StartupError::Template {
            tool: "*".to_string(),
            source,
        })?;
        Self::from_parts(definitions, library, templates)
    }

    pub fn from_parts(
        definitions: Vec<ToolDefinition>,
        library: &ReferenceLibrary,
        templates: Tera,
    ) -> Result<Self, StartupError> {
        let templates = Arc::new(templates);
        let mut entries = BTreeMap::new();

        for definition in definitions {
            let entry = build_entry(definition, library, &templates)?;
            match entries.entry(entry.id) {
                Entry::Occupied(_) => return Err(StartupError::DuplicateTool(entry.id.to_string())),
                Entry::Vacant(slot) => {
                    tracing::debug!("Registered tool {}", entry.id);
                    slot.insert(entry);
                }
            }
        }

        tracing::info!("Tool registry ready with {} tools", entries.len());
        Ok(Self { entries })
    }

    pub fn lookup(&self, id: &str) -> Option<&ToolEntry> {
        self.entries.get(id)
    }

    pub fn ids(&self) -> Vec<&'static str> {
        self.entries.keys().copied().collect()
    }

    /// Entries sorted by identifier
    pub fn entries(&self) -> impl Iterator<Item = &ToolEntry> {
        self.entries.values()
    }

    pub fn len(&self) -> usize {
        self.entries.len()
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }
}

fn build_entry(
    definition: ToolDefinition,
    library: &ReferenceLibrary,
    templates: &Arc<Tera>,
) -> Result<ToolEntry, StartupError> {
    let ToolDefinition {
        id,
        description,
        input,
        output,
        chart_types,
        prompt,
        hints,
    } = definition;

    if id.trim().is_empty() {
        return Err(StartupError::EmptyIdentifier);
    }

    if templates.get_template(prompt.template).is_err() {
        return Err(StartupError::MissingTemplate {
            tool: id.to_string(),
            template: prompt.template.to_string(),
        });
    }

    let reference = match prompt.reference {
        Some(file) => Some(library.get(file).ok_or_else(|| StartupError::MissingReference {
            tool: id.to_string(),
            file: file.to_string(),
        })?),
        None => None,
    };

    if let Some(quota) = prompt.chart_quotas.iter().find(|q| q.min > q.max) {
        return Err(StartupError::InvalidChartQuota {
            tool: id.to_string(),
            chart: quota.chart.name(),
            min: quota.min,
            max: quota.max,
        });
    }

    let builder = PromptBuilder::new(
        Arc::clone(templates),
        prompt.template,
        prompt.user_intro,
        &input,
        reference.as_deref(),
        &chart_types,
        prompt.chart_quotas,
    );

    // A template referencing an undeclared input field fails here rather than per request
    let example = input.example();
    builder
        .build_with_plan(&example, &ChartPlan::minimum(builder.chart_quotas()))
        .map_err(|source| StartupError::Template {
            tool: id.to_string(),
            source,
        })?;

    let options = merge_options(id, &input, hints)?;

    Ok(ToolEntry {
        id,
        description,
        input,
        output,
        prompt: builder,
        options,
    })
}

// Hints only describe free-form fields; an enforced enum already lists its values
fn merge_options(
    id: &str,
    input: &ObjectShape,
    hints: Vec<(&'static str, Vec<&'static str>)>,
) -> Result<BTreeMap<String, Vec<&'static str>>, StartupError> {
    let mut options = input.enum_options();
    for (field, values) in hints {
        if options.contains_key(field) {
            return Err(StartupError::HintOnEnforcedField {
                tool: id.to_string(),
                field: field.to_string(),
            });
        }
        let mut merged: Vec<&'static str> = Vec::new();
        for value in values {
            if !merged.contains(&value) {
                merged.push(value);
            }
        }
        options.insert(field.to_string(), merged);
    }
    Ok(options)
}

impl ToolEntry {
    /// Catalog view of the entry, as listed to API consumers
    pub fn describe(&self) -> Value {
        serde_json::json!({
            "id": self.id,
            "description": self.description,
            "inputSchema": self.input.json_schema(),
            "outputSchema": self.output.json_schema(),
            "options": self.options,
        })
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::chart::ChartType;
    use crate::shape::{Field, Shape};
    use crate::tool::PromptSpec;
    use serde_json::json;

    fn templates() -> Tera {
        let mut tera = Tera::default();
        tera.add_raw_templates(vec![
            ("echo.md", "Echo {{ input.message }}"),
            ("typo.md", "Echo {{ input.mesage }}"),
            ("fees.md", "Fees:\n{{ reference }}"),
        ])
        .unwrap();
        tera
    }

    fn echo(id: &'static str, template: &'static str) -> ToolDefinition {
        ToolDefinition::new(
            id,
            "Echo a message",
            ObjectShape::new(
                "EchoInput",
                vec![
                    Field::required("message", Shape::String),
                    Field::optional("tone", Shape::one_of(&["Calm", "Loud"])),
                ],
            ),
            ObjectShape::new("EchoOutput", vec![Field::required("message", Shape::String)]),
            PromptSpec::new(template, "Message:"),
        )
    }

    fn library() -> ReferenceLibrary {
        let mut library = ReferenceLibrary::default();
        library.insert("fees.json", json!({ "downtown": 4.5 }));
        library
    }

    #[test]
    fn test_lookup_returns_registered_entries() {
        let registry = Registry::from_parts(
            vec![echo("echo", "echo.md"), echo("alpha", "echo.md")],
            &library(),
            templates(),
        )
        .unwrap();

        assert_eq!(registry.ids(), vec!["alpha", "echo"]);
        assert_eq!(registry.lookup("echo").unwrap().id, "echo");
        assert!(registry.lookup("not-a-real-tool").is_none());
        assert_eq!(registry.len(), 2);
    }

    #[test]
    fn test_duplicate_identifier_is_rejected() {
        let err = Registry::from_parts(
            vec![echo("echo", "echo.md"), echo("echo", "echo.md")],
            &library(),
            templates(),
        )
        .unwrap_err();
        assert!(matches!(err, StartupError::DuplicateTool(ref id) if id == "echo"));
    }

    #[test]
    fn test_empty_identifier_is_rejected() {
        let err = Registry::from_parts(vec![echo("  ", "echo.md")], &library(), templates()).unwrap_err();
        assert!(matches!(err, StartupError::EmptyIdentifier));
    }

    #[test]
    fn test_missing_template_is_rejected() {
        let err = Registry::from_parts(vec![echo("echo", "nope.md")], &library(), templates()).unwrap_err();
        assert!(matches!(err, StartupError::MissingTemplate { ref template, .. } if template == "nope.md"));
    }

    #[test]
    fn test_template_referencing_undeclared_field_is_rejected() {
        let err = Registry::from_parts(vec![echo("echo", "typo.md")], &library(), templates()).unwrap_err();
        assert!(matches!(err, StartupError::Template { ref tool, .. } if tool == "echo"));
    }

    #[test]
    fn test_reference_must_be_loaded() {
        let mut definition = echo("fees", "fees.md");
        definition.prompt = PromptSpec::new("fees.md", "Data:").with_reference("fees.json");
        assert!(Registry::from_parts(vec![definition.clone()], &library(), templates()).is_ok());

        let err = Registry::from_parts(vec![definition], &ReferenceLibrary::default(), templates()).unwrap_err();
        assert!(matches!(err, StartupError::MissingReference { ref file, .. } if file == "fees.json"));
    }

    #[test]
    fn test_options_merge_enums_and_hints() {
        let definition = echo("echo", "echo.md")
            .with_hint("message", &["hello", "goodbye", "hello"])
            .with_charts(&[ChartType::BarChart]);
        let registry = Registry::from_parts(vec![definition], &library(), templates()).unwrap();
        let options = &registry.lookup("echo").unwrap().options;

        assert_eq!(options["message"], vec!["hello", "goodbye"]);
        assert_eq!(options["tone"], vec!["Calm", "Loud"]);
    }

    #[test]
    fn test_hint_on_enforced_enum_is_rejected() {
        let definition = echo("echo", "echo.md").with_hint("tone", &["Calm", "Whisper"]);
        let err = Registry::from_parts(vec![definition], &library(), templates()).unwrap_err();
        assert!(
            matches!(err, StartupError::HintOnEnforcedField { ref tool, ref field } if tool == "echo" && field == "tone")
        );
    }

    #[test]
    fn test_inverted_chart_quota_is_rejected() {
        let mut definition = echo("echo", "echo.md");
        definition.prompt = PromptSpec::new("echo.md", "Message:")
            .with_chart_quota(ChartType::PieChart, 1, 2)
            .with_chart_quota(ChartType::BarChart, 3, 1);
        let err = Registry::from_parts(vec![definition], &library(), templates()).unwrap_err();
        assert!(matches!(
            err,
            StartupError::InvalidChartQuota { chart: "barChart", min: 3, max: 1, .. }
        ));
    }

    #[test]
    fn test_describe_lists_schema_and_options() {
        let registry = Registry::from_parts(vec![echo("echo", "echo.md")], &library(), templates()).unwrap();
        let listing = registry.lookup("echo").unwrap().describe();
        assert_eq!(listing["id"], json!("echo"));
        assert_eq!(listing["inputSchema"]["required"], json!(["message"]));
        assert_eq!(listing["options"]["tone"], json!(["Calm", "Loud"]));
    }
}
