use alp_common::complexity::ComplexityLevel;
use alp_common::types::*;

#[test]
fn test_model_tier_wire_names() {
    assert_eq!(ModelTier::Full.as_str(), "full");
    assert_eq!(ModelTier::EightBit.as_str(), "8bit");
    assert_eq!(ModelTier::FourBit.as_str(), "4bit");

    assert_eq!(serde_json::to_string(&ModelTier::EightBit).unwrap(), "\"8bit\"");
    let tier: ModelTier = serde_json::from_str("\"4bit\"").unwrap();
    assert_eq!(tier, ModelTier::FourBit);
}

#[test]
fn test_tier_for_level_mapping() {
    assert_eq!(ModelTier::for_level(ComplexityLevel::Low), ModelTier::FourBit);
    assert_eq!(ModelTier::for_level(ComplexityLevel::Medium), ModelTier::EightBit);
    assert_eq!(ModelTier::for_level(ComplexityLevel::High), ModelTier::Full);
}

#[test]
fn test_generate_request_defaults_to_full() {
    let req: GenerateRequest = serde_json::from_str(r#"{"prompt": "hello"}"#).unwrap();
    assert_eq!(req.model, ModelTier::Full);
}

#[test]
fn test_generate_response_wire_format() {
    let json = r#"{
        "response": "Quantum computers use qubits.",
        "model": "4bit",
        "metrics": {
            "latency": 412.5,
            "memoryUsage": 61.2,
            "taskComplexity": "Low",
            "modelUsage": {"full": 1, "8bit": 2, "4bit": 7},
            "memorySavings": 84.0
        }
    }"#;

    let response: GenerateResponse = serde_json::from_str(json).unwrap();
    assert_eq!(response.model, "4bit");
    assert_eq!(response.metrics.latency, 412.5);
    assert_eq!(response.metrics.task_complexity, "Low");
    assert_eq!(response.metrics.model_usage.four_bit, 7);
    assert_eq!(response.metrics.model_usage.total(), 10);

    // Round-trip preserves the camelCase and tier key names.
    let serialized = serde_json::to_value(&response).unwrap();
    assert!(serialized["metrics"]["memoryUsage"].is_number());
    assert!(serialized["metrics"]["modelUsage"]["8bit"].is_number());
}

#[test]
fn test_model_usage_for_tier() {
    let usage = ModelUsage {
        full: 3,
        eight_bit: 5,
        four_bit: 9,
    };
    for tier in ModelTier::all() {
        assert!(usage.for_tier(tier) > 0);
    }
    assert_eq!(usage.for_tier(ModelTier::EightBit), 5);
}

#[test]
fn test_stats_response_wire_format() {
    let json = r#"{
        "loaded_models": ["full", "4bit"],
        "memory_usage": 72.4,
        "total_requests": 41,
        "total_memory_saved": 132.8,
        "model_usage": {"full": 10, "8bit": 11, "4bit": 20}
    }"#;

    let stats: StatsResponse = serde_json::from_str(json).unwrap();
    assert_eq!(stats.loaded_models, vec!["full", "4bit"]);
    assert_eq!(stats.total_requests, 41);
    assert_eq!(stats.model_usage.total(), 41);
}
