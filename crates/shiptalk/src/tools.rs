//! The tool catalog. Every tool the service exposes is listed in
//! [`definitions`]; nothing is discovered at runtime.

mod common;

pub mod bulk_shipment_labeling;
pub mod cold_chain_delivery;
pub mod cost_to_serve;
pub mod cross_docking;
pub mod cycle_counting;
pub mod delivery_frequency;
pub mod distributed_inventory;
pub mod dynamic_routing;
pub mod freight_consolidation;
pub mod health_check;
pub mod interstate_compliance;
pub mod just_in_time_inventory;
pub mod last_mile_delivery;
pub mod multi_stop_route;
pub mod parcel_climate_protection;
pub mod parcel_flow;
pub mod renewable_transport_cost;
pub mod sales_and_operations_planning;
pub mod seasonal_planning;
pub mod third_party_logistics;
pub mod time_zone_delivery;
pub mod urban_parking_fee;

use crate::tool::ToolDefinition;

pub fn definitions() -> Vec<ToolDefinition> {
    vec![
        health_check::definition(),
        just_in_time_inventory::definition(),
        cycle_counting::definition(),
        dynamic_routing::definition(),
        cross_docking::definition(),
        distributed_inventory::definition(),
        freight_consolidation::definition(),
        third_party_logistics::definition(),
        last_mile_delivery::definition(),
        sales_and_operations_planning::definition(),
        seasonal_planning::definition(),
        cost_to_serve::definition(),
        bulk_shipment_labeling::definition(),
        cold_chain_delivery::definition(),
        delivery_frequency::definition(),
        interstate_compliance::definition(),
        multi_stop_route::definition(),
        parcel_climate_protection::definition(),
        parcel_flow::definition(),
        renewable_transport_cost::definition(),
        time_zone_delivery::definition(),
        urban_parking_fee::definition(),
    ]
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::collections::HashSet;

    #[test]
    fn test_identifiers_are_unique() {
        let definitions = definitions();
        let ids: HashSet<&str> = definitions.iter().map(|d| d.id).collect();
        assert_eq!(ids.len(), definitions.len());
        assert_eq!(definitions.len(), 22);
    }

    #[test]
    fn test_plots_only_use_declared_chart_types() {
        for definition in definitions() {
            let allowed = crate::chart::ChartType::names(&definition.chart_types);
            let mut used = Vec::new();
            collect_chart_kinds(&definition.output, &mut used);
            for kind in used {
                assert!(allowed.contains(&kind), "{} plots allow {}", definition.id, kind);
            }
        }
    }

    #[test]
    fn test_hints_name_input_fields() {
        for definition in definitions() {
            let fields = collect_field_names(&definition.input);
            for (field, _) in &definition.hints {
                assert!(fields.contains(field), "{} hints unknown field {}", definition.id, field);
            }
        }
    }

    #[test]
    fn test_catalog_inputs_are_not_closed_enums() {
        for definition in definitions() {
            let closed = definition.input.enum_options();
            assert!(closed.is_empty(), "{} enforces {:?}", definition.id, closed.keys());
        }
    }

    fn collect_chart_kinds(shape: &crate::shape::ObjectShape, used: &mut Vec<&'static str>) {
        use crate::shape::Shape;
        for field in &shape.fields {
            let mut inner = &field.shape;
            while let Shape::List(item) | Shape::Map(item) = inner {
                inner = item;
            }
            match inner {
                Shape::Enum(values) if field.name == "chartType" => used.extend(values.iter().copied()),
                Shape::Object(object) => collect_chart_kinds(object, used),
                _ => {}
            }
        }
    }

    fn collect_field_names(shape: &crate::shape::ObjectShape) -> Vec<&'static str> {
        use crate::shape::Shape;
        let mut names = Vec::new();
        for field in &shape.fields {
            names.push(field.name);
            let mut inner = &field.shape;
            while let Shape::List(item) | Shape::Map(item) = inner {
                inner = item;
            }
            if let Shape::Object(object) = inner {
                names.extend(collect_field_names(object));
            }
        }
        names
    }
}
