use crate::chart::{ChartQuota, ChartType};
use crate::shape::ObjectShape;

/// How a tool's conversation is put together
#[derive(Debug, Clone)]
pub struct PromptSpec {
    /// File name of the system prompt template under `src/prompts`
    pub template: &'static str,
    /// Leading line of the user message, followed by the serialized input
    pub user_intro: &'static str,
    /// Reference document embedded in the system prompt
    pub reference: Option<&'static str>,
    /// Randomized chart counts baked into the instructions
    pub chart_quotas: Vec<ChartQuota>,
}

impl PromptSpec {
    pub fn new(template: &'static str, user_intro: &'static str) -> Self {
        Self {
            template,
            user_intro,
            reference: None,
            chart_quotas: Vec::new(),
        }
    }

    pub fn with_reference(mut self, file: &'static str) -> Self {
        self.reference = Some(file);
        self
    }

    pub fn with_chart_quota(mut self, chart: ChartType, min: u8, max: u8) -> Self {
        self.chart_quotas.push(ChartQuota::new(chart, min, max));
        self
    }
}

/// Declaration of one analysis tool, as contributed by a module in `tools/`
#[derive(Debug, Clone)]
pub struct ToolDefinition {
    pub id: &'static str,
    pub description: &'static str,
    pub input: ObjectShape,
    pub output: ObjectShape,
    /// Chart kinds the tool's plots may use
    pub chart_types: Vec<ChartType>,
    pub prompt: PromptSpec,
    /// Suggested values for free-form input fields; not enforced
    pub hints: Vec<(&'static str, Vec<&'static str>)>,
}

impl ToolDefinition {
    pub fn new(
        id: &'static str,
        description: &'static str,
        input: ObjectShape,
        output: ObjectShape,
        prompt: PromptSpec,
    ) -> Self {
        Self {
            id,
            description,
            input,
            output,
            chart_types: Vec::new(),
            prompt,
            hints: Vec::new(),
        }
    }

    pub fn with_charts(mut self, charts: &[ChartType]) -> Self {
        self.chart_types = charts.to_vec();
        self
    }

    pub fn with_hint(mut self, field: &'static str, values: &[&'static str]) -> Self {
        self.hints.push((field, values.to_vec()));
        self
    }
}
