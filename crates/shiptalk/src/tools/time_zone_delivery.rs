use crate::chart::ChartType;
use crate::shape::{Field, ObjectShape, Shape};
use crate::tool::{PromptSpec, ToolDefinition};

use super::common::{plot, text_list};

const CHARTS: &[ChartType] = &[ChartType::LineChart, ChartType::BarChart];
const TIME_ZONES: &[&str] = &["Eastern", "Central", "Mountain", "Pacific"];

pub fn definition() -> ToolDefinition {
    ToolDefinition::new(
        "time-zone-delivery-scheduler",
        "Schedule cross-time-zone deliveries around business hours, peaks and holidays",
        input(),
        output(),
        PromptSpec::new(
            "time_zone_delivery.md",
            "Analyze the delivery schedule requirements based on the following input:",
        )
        .with_reference("timezone_schedule.json"),
    )
    .with_charts(CHARTS)
    .with_hint("originZone", TIME_ZONES)
    .with_hint("destinationZone", TIME_ZONES)
    .with_hint("priorityLevel", &["Standard", "Express", "Overnight"])
}

fn input() -> ObjectShape {
    ObjectShape::new(
        "TimeZoneDeliveryInput",
        vec![
            Field::required("originZone", Shape::String),
            Field::required("destinationZone", Shape::String),
            Field::required("priorityLevel", Shape::String),
            Field::required("productType", Shape::String),
            Field::required("estimatedDeliveryDate", Shape::String),
        ],
    )
}

fn output() -> ObjectShape {
    let window = Shape::object(
        "DeliveryWindow",
        vec![
            Field::required("timeWindow", Shape::String).describe("e.g. 10:00 AM - 12:00 PM"),
            Field::required("peakTime", Shape::Boolean),
            Field::required("businessHours", Shape::String),
        ],
    );
    let carrier = Shape::object(
        "CarrierOption",
        vec![
            Field::required("name", Shape::String),
            Field::required("deliveryTimeEstimate", Shape::String),
        ],
    );

    ObjectShape::new(
        "TimeZoneDeliveryResults",
        vec![
            Field::required("optimalDeliveryWindows", Shape::list(window)),
            Field::required("carrierOptions", Shape::list(carrier)),
            Field::required("transitImpactSummary", Shape::String),
            Field::required("peakTimeAnalysis", plot(CHARTS)),
            Field::required("carrierEfficiencyComparison", plot(CHARTS)),
            Field::required("seasonalImpactPrediction", Shape::String),
            Field::required("peakSeasonDelayEstimate", Shape::String),
            Field::required("timeZoneSpecificRegulations", text_list()),
            Field::required("recommendedDeliveryDateAdjustment", Shape::String),
            Field::required("trafficImpactAnalysis", Shape::String),
            Field::required("holidaySeasonAlerts", text_list()),
            Field::required("deliverySuccessProbability", Shape::Float).describe("Percent"),
        ],
    )
}
