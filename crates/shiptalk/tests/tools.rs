use std::sync::Arc;

use rand::rngs::StdRng;
use rand::SeedableRng;
use serde_json::json;

use shiptalk::chart::{ChartPlan, ChartType};
use shiptalk::handler::RequestHandler;
use shiptalk::providers::mock::MockProvider;
use shiptalk::reference::ReferenceLibrary;
use shiptalk::registry::Registry;

fn registry() -> Registry {
    let library = ReferenceLibrary::bundled().unwrap();
    Registry::register_all(&library).unwrap()
}

#[test]
fn test_full_catalog_registers() {
    let registry = registry();
    assert_eq!(registry.len(), 22);
    for id in ["health-check", "parcel-flow", "urban-parking-fee-minimizer", "third-party-logistics"] {
        assert!(registry.lookup(id).is_some(), "missing {}", id);
    }
}

#[test]
fn test_example_inputs_validate() {
    for entry in registry().entries() {
        let example = entry.input.example();
        let normalized = entry
            .input
            .validate(&example)
            .unwrap_or_else(|v| panic!("{} rejected its own example: {:?}", entry.id, v));
        assert_eq!(entry.input.validate(&normalized).unwrap(), normalized);

        let output = entry.output.example();
        assert!(entry.output.validate(&output).is_ok(), "{} output example", entry.id);
    }
}

#[test]
fn test_prompts_without_quotas_are_deterministic() {
    let registry = registry();
    for entry in registry.entries().filter(|e| e.prompt.chart_quotas().is_empty()) {
        let input = entry.input.validate(&entry.input.example()).unwrap();
        let first = entry.prompt.build(&input, &mut StdRng::seed_from_u64(1)).unwrap();
        let second = entry.prompt.build(&input, &mut StdRng::seed_from_u64(99)).unwrap();
        assert_eq!(first, second, "{} prompt changed between builds", entry.id);
        assert!(!first.system.content.is_empty());
        assert!(first.user.content.contains('{'));
    }
}

#[test]
fn test_reference_data_reaches_the_prompt() {
    let registry = registry();
    let entry = registry.lookup("interstate-compliance-checker").unwrap();
    let input = entry.input.validate(&entry.input.example()).unwrap();
    let conversation = entry.prompt.build_with_plan(&input, &ChartPlan::default()).unwrap();
    assert!(conversation.system.content.contains("documentationRequirements"));
    assert!(conversation.system.content.contains("California"));
}

#[test]
fn test_chart_counts_stay_within_quotas() {
    let registry = registry();
    let entry = registry.lookup("third-party-logistics").unwrap();
    let input = entry.input.validate(&entry.input.example()).unwrap();
    let mut rng = StdRng::seed_from_u64(42);

    for _ in 0..50 {
        let plan = ChartPlan::choose(entry.prompt.chart_quotas(), &mut rng);
        for quota in entry.prompt.chart_quotas() {
            assert!(quota.contains(plan.count(quota.chart).unwrap()));
        }
        let conversation = entry.prompt.build_with_plan(&input, &plan).unwrap();
        let expected = format!(
            "Include exactly {} charts in `charts`: {} pieChart",
            plan.total(),
            plan.count(ChartType::PieChart).unwrap()
        );
        assert!(conversation.system.content.contains(&expected));
    }
}

#[tokio::test]
async fn test_handler_end_to_end() {
    let registry = Arc::new(registry());
    let entry = registry.lookup("urban-parking-fee-minimizer").unwrap();
    let response = entry.output.example();
    let provider = MockProvider::new(vec![response.clone()]);
    let handler = RequestHandler::new(Arc::clone(&registry), Arc::new(provider.clone()));

    let input = json!({
        "deliveryLocations": [
            { "location": "5th Ave & Main", "deliveryTime": "10:30 AM" },
            { "location": "Harbor District", "deliveryTime": "2:00 PM" }
        ],
        "urgencyLevel": "Express"
    });
    let output = handler.handle("urban-parking-fee-minimizer", &input).await.unwrap();

    assert_eq!(output, response);
    assert_eq!(provider.calls(), 1);
    let conversation = &provider.conversations()[0];
    assert!(conversation.system.content.contains("**Express** urgency"));
    assert!(conversation.user.content.contains("Harbor District"));
}
