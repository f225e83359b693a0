use crate::chart::ChartType;
use crate::shape::{Field, ObjectShape, Shape};
use crate::tool::{PromptSpec, ToolDefinition};

use super::common::{plot, text_list};

const CHARTS: &[ChartType] = &[ChartType::BarChart, ChartType::PieChart, ChartType::LineChart];

pub fn definition() -> ToolDefinition {
    ToolDefinition::new(
        "interstate-compliance-checker",
        "Check whether an item can ship between two states and what it requires",
        input(),
        output(),
        PromptSpec::new(
            "interstate_compliance.md",
            "Please analyze the shipping compliance requirements for:",
        )
        .with_reference("compliance.json"),
    )
    .with_charts(CHARTS)
    .with_hint("originState", &["California", "Texas", "Florida"])
    .with_hint("destinationState", &["California", "Texas", "Florida"])
}

fn input() -> ObjectShape {
    ObjectShape::new(
        "ComplianceInput",
        vec![
            Field::required("originState", Shape::String),
            Field::required("destinationState", Shape::String),
            Field::required("itemType", Shape::String),
            Field::optional("carrierName", Shape::String),
        ],
    )
}

fn output() -> ObjectShape {
    ObjectShape::new(
        "ComplianceResults",
        vec![
            Field::required(
                "prohibitionStatus",
                Shape::one_of(&["Allowed", "Restricted", "Prohibited"]),
            ),
            Field::required("requiredDocuments", text_list()),
            Field::required("packagingRequirements", text_list()),
            Field::required("applicableFees", text_list()),
            Field::required(
                "carrierRestrictions",
                Shape::list(Shape::object(
                    "CarrierRestriction",
                    vec![
                        Field::required("carrier", Shape::String),
                        Field::required("restriction", Shape::String),
                        Field::required("reason", Shape::String),
                    ],
                )),
            ),
            Field::required("warnings", text_list()),
            Field::required("complianceScore", plot(CHARTS)),
            Field::required("restrictionComparison", plot(CHARTS)),
            Field::required("taxesAndFees", plot(CHARTS)),
        ],
    )
}
