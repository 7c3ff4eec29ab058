//! Summary statistics over a labeled dataset, reported by the serving
//! façade's statistics endpoint.

use std::collections::BTreeMap;

use serde::{Deserialize, Serialize};

use dmis_core::models::DisasterRecord;

/// Cost distribution over the whole dataset.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct CostStats {
    pub mean: f64,
    pub median: f64,
    pub min: f64,
    pub max: f64,
    pub std_dev: f64,
}

/// Per-group cost aggregates.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct GroupStats {
    pub count: usize,
    pub mean: f64,
    pub min: f64,
    pub max: f64,
}

/// Dataset-level statistics.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct DatasetStats {
    pub total_records: usize,
    pub cost_statistics: CostStats,
    pub by_disaster_type: BTreeMap<String, GroupStats>,
    pub by_severity: BTreeMap<String, GroupStats>,
}

impl DatasetStats {
    /// Compute statistics over a dataset. An empty dataset yields zeroed
    /// cost statistics and empty groupings.
    pub fn compute(records: &[DisasterRecord]) -> Self {
        let costs: Vec<f64> = records.iter().map(|r| r.estimated_cost_maloti).collect();

        let by_disaster_type = group_stats(records, |r| r.disaster_type.as_str().to_string());
        let by_severity = group_stats(records, |r| r.severity.as_str().to_string());

        Self {
            total_records: records.len(),
            cost_statistics: cost_stats(&costs),
            by_disaster_type,
            by_severity,
        }
    }
}

fn cost_stats(costs: &[f64]) -> CostStats {
    if costs.is_empty() {
        return CostStats {
            mean: 0.0,
            median: 0.0,
            min: 0.0,
            max: 0.0,
            std_dev: 0.0,
        };
    }

    let n = costs.len() as f64;
    let mean = costs.iter().sum::<f64>() / n;
    let variance = costs.iter().map(|c| (c - mean).powi(2)).sum::<f64>() / n;

    let mut sorted = costs.to_vec();
    sorted.sort_by(|a, b| a.total_cmp(b));
    let median = if sorted.len() % 2 == 1 {
        sorted[sorted.len() / 2]
    } else {
        (sorted[sorted.len() / 2 - 1] + sorted[sorted.len() / 2]) / 2.0
    };

    CostStats {
        mean,
        median,
        min: sorted[0],
        max: sorted[sorted.len() - 1],
        std_dev: variance.sqrt(),
    }
}

fn group_stats<F>(records: &[DisasterRecord], key: F) -> BTreeMap<String, GroupStats>
where
    F: Fn(&DisasterRecord) -> String,
{
    let mut groups: BTreeMap<String, Vec<f64>> = BTreeMap::new();
    for record in records {
        groups
            .entry(key(record))
            .or_default()
            .push(record.estimated_cost_maloti);
    }

    groups
        .into_iter()
        .map(|(name, costs)| {
            let count = costs.len();
            let mean = costs.iter().sum::<f64>() / count as f64;
            let min = costs.iter().fold(f64::INFINITY, |a, &b| a.min(b));
            let max = costs.iter().fold(f64::NEG_INFINITY, |a, &b| a.max(b));
            (name, GroupStats { count, mean, min, max })
        })
        .collect()
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::SyntheticGenerator;

    #[test]
    fn empty_dataset_yields_zeroes() {
        let stats = DatasetStats::compute(&[]);
        assert_eq!(stats.total_records, 0);
        assert_eq!(stats.cost_statistics.mean, 0.0);
        assert!(stats.by_disaster_type.is_empty());
    }

    #[test]
    fn group_counts_sum_to_total() {
        let records = SyntheticGenerator::new(42).generate(300);
        let stats = DatasetStats::compute(&records);
        assert_eq!(stats.total_records, 300);
        let type_total: usize = stats.by_disaster_type.values().map(|g| g.count).sum();
        let severity_total: usize = stats.by_severity.values().map(|g| g.count).sum();
        assert_eq!(type_total, 300);
        assert_eq!(severity_total, 300);
    }

    #[test]
    fn median_of_even_count_is_midpoint() {
        let stats = cost_stats(&[1.0, 3.0, 5.0, 7.0]);
        assert_eq!(stats.median, 4.0);
        assert_eq!(stats.min, 1.0);
        assert_eq!(stats.max, 7.0);
    }
}
