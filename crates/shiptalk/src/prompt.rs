use rand::Rng;
use serde::Serialize;
use serde_json::ser::PrettyFormatter;
use serde_json::Value;
use std::sync::Arc;
use tera::{Context, Tera};

use crate::chart::{ChartPlan, ChartQuota, ChartType};
use crate::models::message::Conversation;
use crate::shape::ObjectShape;

/// Turns a validated input into the two-message conversation for one tool.
///
/// Everything except the chart plan is fixed when the registry is built, so
/// a build is deterministic for tools without chart quotas.
#[derive(Debug, Clone)]
pub struct PromptBuilder {
    templates: Arc<Tera>,
    template: String,
    user_intro: &'static str,
    input_schema: String,
    reference: Option<String>,
    chart_types: Vec<&'static str>,
    chart_quotas: Vec<ChartQuota>,
}

impl PromptBuilder {
    pub fn new(
        templates: Arc<Tera>,
        template: &str,
        user_intro: &'static str,
        input: &ObjectShape,
        reference: Option<&Value>,
        chart_types: &[ChartType],
        chart_quotas: Vec<ChartQuota>,
    ) -> Self {
        Self {
            templates,
            template: template.to_string(),
            user_intro,
            input_schema: to_pretty_json(&input.json_schema()),
            reference: reference.map(to_pretty_json),
            chart_types: ChartType::names(chart_types),
            chart_quotas,
        }
    }

    pub fn chart_quotas(&self) -> &[ChartQuota] {
        &self.chart_quotas
    }

    /// Build the conversation, picking chart counts from `rng` when the tool
    /// declares chart quotas.
    pub fn build<R: Rng + ?Sized>(&self, input: &Value, rng: &mut R) -> Result<Conversation, tera::Error> {
        let plan = ChartPlan::choose(&self.chart_quotas, rng);
        self.build_with_plan(input, &plan)
    }

    pub fn build_with_plan(&self, input: &Value, plan: &ChartPlan) -> Result<Conversation, tera::Error> {
        let mut context = Context::new();
        context.insert("input", input);
        context.insert("input_schema", &self.input_schema);
        context.insert("chart_types", &self.chart_types);
        if let Some(reference) = &self.reference {
            context.insert("reference", reference);
        }
        if !plan.is_empty() {
            context.insert("charts", &plan.by_name());
            context.insert("total_charts", &plan.total());
        }

        let system = self.templates.render(&self.template, &context)?;
        let user = format!("{}\n{}", self.user_intro, to_pretty_json(input));
        Ok(Conversation::new(system.trim(), user))
    }
}

/// Pretty-print JSON with four-space indentation
pub fn to_pretty_json<T: Serialize + ?Sized>(value: &T) -> String {
    let mut buffer = Vec::new();
    let mut serializer =
        serde_json::Serializer::with_formatter(&mut buffer, PrettyFormatter::with_indent(b"    "));
    match value.serialize(&mut serializer) {
        Ok(()) => String::from_utf8(buffer).unwrap_or_default(),
        Err(e) => {
            tracing::warn!("Failed to serialize prompt payload: {}", e);
            String::new()
        }
    }
}
