//! Canned planning scenarios exposed by the API.

use serde::Serialize;

use dmis_core::models::{Prediction, PredictionRequest};

/// One named scenario with its input metrics.
#[derive(Debug, Clone)]
pub struct Scenario {
    pub name: String,
    pub description: String,
    pub request: PredictionRequest,
}

/// A scenario with its predicted cost band.
#[derive(Debug, Serialize)]
pub struct ScenarioPrediction {
    pub name: String,
    pub description: String,
    pub input: PredictionRequest,
    pub estimated_cost_maloti: f64,
    pub confidence_low: f64,
    pub confidence_high: f64,
}

impl ScenarioPrediction {
    pub fn new(scenario: Scenario, prediction: &Prediction) -> Self {
        Self {
            name: scenario.name,
            description: scenario.description,
            input: scenario.request,
            estimated_cost_maloti: prediction.estimated_cost_maloti,
            confidence_low: prediction.confidence_low,
            confidence_high: prediction.confidence_high,
        }
    }
}

/// The three reference scenarios, one per disaster type.
pub fn canned() -> Vec<Scenario> {
    vec![
        Scenario {
            name: "Strong Winds in Maseru".to_string(),
            description: "Localized windstorm with light structural damage".to_string(),
            request: PredictionRequest {
                affected_population: 2_000,
                affected_households: 400,
                houses_damaged: 30,
                duration_days: 5,
                disaster_type: "Strong Winds".to_string(),
                district: "Maseru".to_string(),
                severity: "Low".to_string(),
                immediate_needs: "Shelter".to_string(),
                model: None,
            },
        },
        Scenario {
            name: "Heavy Rainfall in Leribe".to_string(),
            description: "Sustained flooding with moderate infrastructure damage".to_string(),
            request: PredictionRequest {
                affected_population: 8_000,
                affected_households: 1_600,
                houses_damaged: 120,
                duration_days: 10,
                disaster_type: "Heavy Rainfall".to_string(),
                district: "Leribe".to_string(),
                severity: "Moderate".to_string(),
                immediate_needs: "Infrastructure & Relief".to_string(),
                model: None,
            },
        },
        Scenario {
            name: "Drought in Mafeteng".to_string(),
            description: "Extended dry spell across farming communities".to_string(),
            request: PredictionRequest {
                affected_population: 30_000,
                affected_households: 6_000,
                houses_damaged: 0,
                duration_days: 240,
                disaster_type: "Drought".to_string(),
                district: "Mafeteng".to_string(),
                severity: "Low".to_string(),
                immediate_needs: "Food & Water Relief".to_string(),
                model: None,
            },
        },
    ]
}
