use crate::chart::ChartType;
use crate::shape::{Field, ObjectShape, Shape};
use crate::tool::{PromptSpec, ToolDefinition};

use super::common::{plot, text_list};

const CHARTS: &[ChartType] = &[ChartType::BarChart];

pub fn definition() -> ToolDefinition {
    ToolDefinition::new(
        "bulk-shipment-labeling-optimizer",
        "Pick label materials and placement for bulk shipments and estimate label cost",
        input(),
        output(),
        PromptSpec::new(
            "bulk_shipment_labeling.md",
            "Analyze the labeling optimization requirements based on the following input:",
        )
        .with_reference("labeling.json"),
    )
    .with_charts(CHARTS)
    .with_hint("carrier", &["FedEx", "UPS", "DHL", "USPS"])
    .with_hint("packageSize", &["Small", "Medium", "Large"])
    .with_hint("shippingType", &["Domestic Shipping", "International Shipping"])
}

fn input() -> ObjectShape {
    ObjectShape::new(
        "BulkShipmentLabelingInput",
        vec![
            Field::required("packageSize", Shape::String),
            Field::required("carrier", Shape::String),
            Field::required("numberOfLabels", Shape::Integer),
            Field::required("shippingType", Shape::String),
        ],
    )
}

fn output() -> ObjectShape {
    ObjectShape::new(
        "BulkShipmentLabelingResults",
        vec![
            Field::required(
                "carrierLabelRequirements",
                Shape::object(
                    "CarrierLabelRequirements",
                    vec![
                        Field::required("mandatoryFields", text_list()),
                        Field::required("labelSize", Shape::String),
                        Field::required("placementNote", Shape::String),
                    ],
                ),
            ),
            Field::required(
                "packagingRecommendations",
                Shape::list(Shape::object(
                    "PackagingRecommendation",
                    vec![
                        Field::required("material", Shape::String),
                        Field::required("adhesionLevel", Shape::String),
                        Field::required("recommendedLabelType", Shape::String),
                    ],
                )),
            ),
            Field::required(
                "labelCostEstimate",
                Shape::object(
                    "LabelCostEstimate",
                    vec![
                        Field::required("materialType", Shape::String),
                        Field::required("costPerLabel", Shape::Float),
                        Field::required("discountApplied", Shape::Float).describe("Percent"),
                        Field::required("totalCost", Shape::Float),
                    ],
                ),
            ),
            Field::required(
                "complianceWarnings",
                Shape::object(
                    "ComplianceWarnings",
                    vec![
                        Field::required("shippingType", Shape::String),
                        Field::required("warnings", text_list()),
                    ],
                ),
            ),
            Field::required("bulkLabelCostComparison", plot(CHARTS)),
            Field::required("durabilityImpactAnalysis", plot(CHARTS)),
            Field::required("labelingEfficiencyTips", text_list()),
            Field::required("seasonalAdjustmentRecommendations", Shape::String),
            Field::required("operationalEfficiencyScore", Shape::Float).describe("0 to 100"),
        ],
    )
}
