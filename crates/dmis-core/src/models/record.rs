use serde::{Deserialize, Serialize};

use crate::disaster::{DisasterType, District, Severity};

/// One labeled dataset row: event metrics plus the realized severity and
/// estimated cost. Field names follow the dataset exchange format exactly.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct DisasterRecord {
    #[serde(rename = "Disaster_Type")]
    pub disaster_type: DisasterType,
    #[serde(rename = "District")]
    pub district: District,
    #[serde(rename = "Severity")]
    pub severity: Severity,
    #[serde(rename = "Affected_Population")]
    pub affected_population: u32,
    #[serde(rename = "Affected_Households")]
    pub affected_households: u32,
    #[serde(rename = "Houses_Damaged")]
    pub houses_damaged: u32,
    #[serde(rename = "Immediate_Needs")]
    pub immediate_needs: String,
    #[serde(rename = "Duration_Days")]
    pub duration_days: u32,
    #[serde(rename = "Estimated_Cost_Maloti")]
    pub estimated_cost_maloti: f64,
}
