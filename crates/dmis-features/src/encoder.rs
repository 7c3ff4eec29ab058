//! Categorical label encoders with closed, sorted vocabularies.
//!
//! Codes are assigned by sorted label order, so refitting on identical data
//! always reproduces the same mapping. Vocabularies are fixed at fit time
//! and never extended; encoding an unseen value is a typed error.

use std::collections::BTreeSet;

use serde::{Deserialize, Serialize};

use dmis_core::errors::EncodingError;
use dmis_core::models::DisasterRecord;

/// Bidirectional label ↔ dense-code mapping for one categorical column.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct CategoryEncoder {
    column: String,
    /// Sorted vocabulary; a label's code is its index.
    vocab: Vec<String>,
}

impl CategoryEncoder {
    /// Fit an encoder over the observed values of one column.
    pub fn fit<'a, I>(column: &str, values: I) -> Self
    where
        I: IntoIterator<Item = &'a str>,
    {
        let vocab: BTreeSet<&str> = values.into_iter().collect();
        Self {
            column: column.to_string(),
            vocab: vocab.into_iter().map(String::from).collect(),
        }
    }

    /// Dense code for a label. Unknown labels fail with the column name and
    /// the full known vocabulary.
    pub fn code_of(&self, value: &str) -> Result<usize, EncodingError> {
        self.vocab
            .binary_search_by(|known| known.as_str().cmp(value))
            .map_err(|_| EncodingError::UnknownCategory {
                column: self.column.clone(),
                value: value.to_string(),
                known: self.vocab.clone(),
            })
    }

    /// Inverse mapping: the label for a code.
    pub fn label_of(&self, code: usize) -> Option<&str> {
        self.vocab.get(code).map(String::as_str)
    }

    /// The fixed vocabulary, in code order.
    pub fn vocab(&self) -> &[String] {
        &self.vocab
    }

    pub fn column(&self) -> &str {
        &self.column
    }
}

/// One encoder per categorical feature column. Owned by the pipeline and
/// read-only after fitting.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct EncoderSet {
    pub disaster_type: CategoryEncoder,
    pub district: CategoryEncoder,
    pub severity: CategoryEncoder,
    pub immediate_needs: CategoryEncoder,
}

impl EncoderSet {
    /// Build the four encoders from a dataset's observed vocabularies.
    pub fn fit(records: &[DisasterRecord]) -> Self {
        Self {
            disaster_type: CategoryEncoder::fit(
                "Disaster_Type",
                records.iter().map(|r| r.disaster_type.as_str()),
            ),
            district: CategoryEncoder::fit(
                "District",
                records.iter().map(|r| r.district.as_str()),
            ),
            severity: CategoryEncoder::fit(
                "Severity",
                records.iter().map(|r| r.severity.as_str()),
            ),
            immediate_needs: CategoryEncoder::fit(
                "Immediate_Needs",
                records.iter().map(|r| r.immediate_needs.as_str()),
            ),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn codes_follow_sorted_order() {
        let encoder = CategoryEncoder::fit("Severity", ["Severe", "Low", "Moderate", "Low"]);
        assert_eq!(encoder.vocab(), &["Low", "Moderate", "Severe"]);
        assert_eq!(encoder.code_of("Low").unwrap(), 0);
        assert_eq!(encoder.code_of("Severe").unwrap(), 2);
    }

    #[test]
    fn round_trips_every_vocabulary_member() {
        let encoder = CategoryEncoder::fit(
            "District",
            ["Maseru", "Leribe", "Thaba-Tseka", "Qacha's Nek"],
        );
        for label in encoder.vocab().to_vec() {
            let code = encoder.code_of(&label).unwrap();
            assert_eq!(encoder.label_of(code), Some(label.as_str()));
        }
    }

    #[test]
    fn unknown_label_reports_column_and_vocabulary() {
        let encoder = CategoryEncoder::fit("Disaster_Type", ["Drought", "Strong Winds"]);
        let err = encoder.code_of("Earthquake").unwrap_err();
        match err {
            EncodingError::UnknownCategory { column, value, known } => {
                assert_eq!(column, "Disaster_Type");
                assert_eq!(value, "Earthquake");
                assert_eq!(known, vec!["Drought".to_string(), "Strong Winds".to_string()]);
            }
            other => panic!("unexpected error: {other}"),
        }
    }

    #[test]
    fn refit_on_identical_data_is_idempotent() {
        let values = ["Shelter", "Medical Aid", "Relief Supplies", "Shelter"];
        let a = CategoryEncoder::fit("Immediate_Needs", values);
        let b = CategoryEncoder::fit("Immediate_Needs", values);
        assert_eq!(a, b);
    }
}
