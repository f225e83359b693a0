use rand::Rng;
use serde::Serialize;
use serde_json::{Map, Value};
use strum_macros::{Display, EnumIter, IntoStaticStr};

/// Chart kinds understood by the front-end renderer
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, EnumIter, IntoStaticStr, Display)]
#[serde(rename_all = "camelCase")]
#[strum(serialize_all = "camelCase")]
pub enum ChartType {
    BarChart,
    LineChart,
    PieChart,
    AreaChart,
    ScatterPlot,
    RadarChart,
    HeatMap,
}

impl ChartType {
    pub fn name(self) -> &'static str {
        self.into()
    }

    pub fn names(charts: &[ChartType]) -> Vec<&'static str> {
        charts.iter().map(|c| c.name()).collect()
    }
}

/// How many charts of one kind a prompt may ask for
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct ChartQuota {
    pub chart: ChartType,
    pub min: u8,
    pub max: u8,
}

impl ChartQuota {
    pub const fn new(chart: ChartType, min: u8, max: u8) -> Self {
        Self { chart, min, max }
    }

    pub fn contains(&self, count: u8) -> bool {
        (self.min..=self.max).contains(&count)
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Serialize)]
pub struct ChartCount {
    pub chart: ChartType,
    pub count: u8,
}

/// The chart counts picked for one request
#[derive(Debug, Clone, Default, PartialEq, Serialize)]
pub struct ChartPlan {
    pub counts: Vec<ChartCount>,
}

impl ChartPlan {
    pub fn choose<R: Rng + ?Sized>(quotas: &[ChartQuota], rng: &mut R) -> Self {
        let counts = quotas
            .iter()
            .map(|quota| ChartCount {
                chart: quota.chart,
                count: rng.gen_range(quota.min..=quota.max),
            })
            .collect();
        Self { counts }
    }

    /// The smallest plan the quotas allow
    pub fn minimum(quotas: &[ChartQuota]) -> Self {
        let counts = quotas
            .iter()
            .map(|quota| ChartCount {
                chart: quota.chart,
                count: quota.min,
            })
            .collect();
        Self { counts }
    }

    pub fn is_empty(&self) -> bool {
        self.counts.is_empty()
    }

    pub fn count(&self, chart: ChartType) -> Option<u8> {
        self.counts.iter().find(|c| c.chart == chart).map(|c| c.count)
    }

    pub fn total(&self) -> u32 {
        self.counts.iter().map(|c| u32::from(c.count)).sum()
    }

    /// Counts keyed by chart name, for template rendering
    pub fn by_name(&self) -> Value {
        let counts: Map<String, Value> = self
            .counts
            .iter()
            .map(|c| (c.chart.name().to_string(), Value::from(c.count)))
            .collect();
        Value::Object(counts)
    }
}
