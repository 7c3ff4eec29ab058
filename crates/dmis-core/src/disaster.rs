//! Closed categorical domains: disaster types, districts, severity tiers.

use std::fmt;

use serde::{Deserialize, Serialize};

/// The three forecastable disaster types.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum DisasterType {
    #[serde(rename = "Strong Winds")]
    StrongWinds,
    #[serde(rename = "Heavy Rainfall")]
    HeavyRainfall,
    #[serde(rename = "Drought")]
    Drought,
}

impl DisasterType {
    pub const ALL: [DisasterType; 3] = [
        DisasterType::StrongWinds,
        DisasterType::HeavyRainfall,
        DisasterType::Drought,
    ];

    pub fn as_str(&self) -> &'static str {
        match self {
            DisasterType::StrongWinds => "Strong Winds",
            DisasterType::HeavyRainfall => "Heavy Rainfall",
            DisasterType::Drought => "Drought",
        }
    }
}

impl fmt::Display for DisasterType {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// The ten administrative districts of Lesotho.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum District {
    Berea,
    #[serde(rename = "Butha-Buthe")]
    ButhaButhe,
    Leribe,
    Mafeteng,
    Maseru,
    #[serde(rename = "Mohale's Hoek")]
    MohalesHoek,
    Mokhotlong,
    #[serde(rename = "Qacha's Nek")]
    QachasNek,
    Quthing,
    #[serde(rename = "Thaba-Tseka")]
    ThabaTseka,
}

impl District {
    pub const ALL: [District; 10] = [
        District::Berea,
        District::ButhaButhe,
        District::Leribe,
        District::Mafeteng,
        District::Maseru,
        District::MohalesHoek,
        District::Mokhotlong,
        District::QachasNek,
        District::Quthing,
        District::ThabaTseka,
    ];

    pub fn as_str(&self) -> &'static str {
        match self {
            District::Berea => "Berea",
            District::ButhaButhe => "Butha-Buthe",
            District::Leribe => "Leribe",
            District::Mafeteng => "Mafeteng",
            District::Maseru => "Maseru",
            District::MohalesHoek => "Mohale's Hoek",
            District::Mokhotlong => "Mokhotlong",
            District::QachasNek => "Qacha's Nek",
            District::Quthing => "Quthing",
            District::ThabaTseka => "Thaba-Tseka",
        }
    }
}

impl fmt::Display for District {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Severity tier derived from event metrics.
///
/// Never persisted independently of the event it was computed for.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
pub enum Severity {
    Low,
    Moderate,
    Severe,
}

impl Severity {
    pub const ALL: [Severity; 3] = [Severity::Low, Severity::Moderate, Severity::Severe];

    pub fn as_str(&self) -> &'static str {
        match self {
            Severity::Low => "Low",
            Severity::Moderate => "Moderate",
            Severity::Severe => "Severe",
        }
    }
}

impl fmt::Display for Severity {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}
