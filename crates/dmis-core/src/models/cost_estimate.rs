use std::collections::BTreeMap;

use serde::{Deserialize, Serialize};

use crate::disaster::Severity;

/// One cost estimate for one event. Immutable once produced.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct CostEstimate {
    /// Total estimated cost in Maloti.
    pub total: f64,
    /// Severity tier realized while costing the event.
    pub severity: Severity,
    /// Named sub-costs (repair, relief, infrastructure, food, water,
    /// agriculture) summing to `total`.
    pub breakdown: BTreeMap<String, f64>,
}

impl CostEstimate {
    /// Build an estimate from named components; the total is their sum.
    pub fn from_components<I>(severity: Severity, components: I) -> Self
    where
        I: IntoIterator<Item = (&'static str, f64)>,
    {
        let breakdown: BTreeMap<String, f64> = components
            .into_iter()
            .map(|(name, amount)| (name.to_string(), amount))
            .collect();
        let total = breakdown.values().sum();
        Self {
            total,
            severity,
            breakdown,
        }
    }

    /// Look up one named component.
    pub fn component(&self, name: &str) -> Option<f64> {
        self.breakdown.get(name).copied()
    }
}
