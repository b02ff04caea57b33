//! Fits the logistic over/under classifier on the training table.

use anyhow::{anyhow, Context, Result};
use chrono::Utc;
use nalgebra::{DMatrix, DVector};
use rand::{rngs::StdRng, seq::SliceRandom, SeedableRng};
use std::path::Path;

use crate::models::{FeatureVector, FEATURE_COLUMNS};
use crate::services::predictor::{sigmoid, LogisticModel, PredictionError};

const LABEL_COLUMN: &str = "OU_Result";

#[derive(Debug, Clone, PartialEq)]
pub struct TrainingExample {
    pub features: [f64; FeatureVector::LEN],
    pub over: bool,
}

#[derive(Debug, Clone)]
pub struct TrainingOptions {
    pub learning_rate: f64,
    pub epochs: usize,
    pub l2: f64,
    pub test_fraction: f64,
    pub seed: u64,
}

impl Default for TrainingOptions {
    fn default() -> Self {
        Self {
            learning_rate: 0.1,
            epochs: 2000,
            l2: 0.01,
            test_fraction: 0.2,
            seed: 42,
        }
    }
}

#[derive(Debug, Clone)]
pub struct TrainingReport {
    pub train_rows: usize,
    pub test_rows: usize,
    pub accuracy: f64,
    /// Undefined when the held-out set has only one class.
    pub roc_auc: Option<f64>,
}

/// Read examples back from a training table, locating columns by header name.
pub fn read_training_table(path: impl AsRef<Path>) -> Result<Vec<TrainingExample>> {
    let path = path.as_ref();
    let mut reader = csv::ReaderBuilder::new()
        .trim(csv::Trim::All)
        .from_path(path)
        .with_context(|| format!("opening feature table {}", path.display()))?;

    let headers = reader.headers()?.clone();
    let index_of = |name: &str| {
        headers
            .iter()
            .position(|h| h == name)
            .ok_or_else(|| anyhow!("feature table is missing column '{}'", name))
    };
    let label_idx = index_of(LABEL_COLUMN)?;
    let feature_idx = FEATURE_COLUMNS
        .iter()
        .map(|c| index_of(c))
        .collect::<Result<Vec<_>>>()?;

    let mut examples = Vec::new();
    let mut skipped = 0usize;
    for record in reader.records() {
        let record = record?;
        let over = match record.get(label_idx) {
            Some("1") => true,
            Some("0") => false,
            _ => {
                skipped += 1;
                continue;
            }
        };
        let mut features = [0.0; FeatureVector::LEN];
        let mut valid = true;
        for (slot, &idx) in features.iter_mut().zip(&feature_idx) {
            match record.get(idx).and_then(|v| v.parse::<f64>().ok()) {
                Some(v) if v.is_finite() => *slot = v,
                _ => valid = false,
            }
        }
        if valid {
            examples.push(TrainingExample { features, over });
        } else {
            skipped += 1;
        }
    }

    if skipped > 0 {
        tracing::warn!("Skipped {} unreadable rows in {}", skipped, path.display());
    }
    Ok(examples)
}

/// Shuffle, hold out a test split, and fit by batch gradient descent.
pub fn train_model(
    mut examples: Vec<TrainingExample>,
    options: &TrainingOptions,
    rolling_window: usize,
) -> Result<(LogisticModel, TrainingReport), PredictionError> {
    if examples.len() < 2 {
        return Err(PredictionError::Config(format!(
            "need at least 2 training rows, got {}",
            examples.len()
        )));
    }

    let mut rng = StdRng::seed_from_u64(options.seed);
    examples.shuffle(&mut rng);

    let n = examples.len();
    let n_test = ((n as f64 * options.test_fraction).round() as usize).clamp(1, n - 1);
    let (train, test) = examples.split_at(n - n_test);

    if train.iter().all(|e| e.over) || train.iter().all(|e| !e.over) {
        return Err(PredictionError::Config(
            "training split contains a single class".to_string(),
        ));
    }

    tracing::info!("Split {} rows: train={}, test={}", n, train.len(), test.len());

    let (means, stds) = column_stats(train);
    let mut model = LogisticModel {
        model_version: format!("ou-logistic-{}", Utc::now().format("%Y%m%d")),
        feature_columns: FEATURE_COLUMNS.iter().map(|c| c.to_string()).collect(),
        means,
        stds,
        weights: vec![0.0; FeatureVector::LEN],
        bias: 0.0,
        rolling_window,
        trained_at: Utc::now(),
    };

    let x = design_matrix(&model, train);
    let y = DVector::from_iterator(train.len(), train.iter().map(|e| if e.over { 1.0 } else { 0.0 }));
    let m = train.len() as f64;

    let mut w = DVector::<f64>::zeros(FeatureVector::LEN);
    let mut b = 0.0;
    for _ in 0..options.epochs {
        let p = (&x * &w).map(|z| sigmoid(z + b));
        let err = p - &y;
        let grad_w = x.tr_mul(&err) / m + &w * options.l2;
        let grad_b = err.sum() / m;
        w -= grad_w * options.learning_rate;
        b -= grad_b * options.learning_rate;
    }

    model.weights = w.iter().copied().collect();
    model.bias = b;

    let scored: Vec<(f64, bool)> = test
        .iter()
        .map(|e| (model.prob_over_raw(&e.features), e.over))
        .collect();
    let correct = scored.iter().filter(|(p, over)| (*p > 0.5) == *over).count();

    let report = TrainingReport {
        train_rows: train.len(),
        test_rows: test.len(),
        accuracy: correct as f64 / scored.len() as f64,
        roc_auc: roc_auc(&scored),
    };

    tracing::info!(
        "Test accuracy {:.3}, ROC AUC {}",
        report.accuracy,
        report
            .roc_auc
            .map(|a| format!("{:.3}", a))
            .unwrap_or_else(|| "n/a".to_string())
    );

    Ok((model, report))
}

/// Load the training table, fit, and write the model artifact.
pub fn train_from_table(
    features_path: &Path,
    model_path: &Path,
    options: &TrainingOptions,
    rolling_window: usize,
) -> Result<TrainingReport> {
    if !features_path.exists() {
        return Err(PredictionError::MissingArtifact {
            what: "feature table",
            path: features_path.to_path_buf(),
        }
        .into());
    }
    let examples = read_training_table(features_path)?;
    let (model, report) = train_model(examples, options, rolling_window)?;
    model.save(model_path)?;
    tracing::info!("Model saved to {}", model_path.display());
    Ok(report)
}

fn column_stats(rows: &[TrainingExample]) -> (Vec<f64>, Vec<f64>) {
    let n = rows.len() as f64;
    (0..FeatureVector::LEN)
        .map(|j| {
            let mean = rows.iter().map(|r| r.features[j]).sum::<f64>() / n;
            let var = rows.iter().map(|r| (r.features[j] - mean).powi(2)).sum::<f64>() / n;
            (mean, var.sqrt())
        })
        .unzip()
}

fn design_matrix(model: &LogisticModel, rows: &[TrainingExample]) -> DMatrix<f64> {
    let scaled: Vec<DVector<f64>> = rows.iter().map(|r| model.standardize(&r.features)).collect();
    DMatrix::from_fn(rows.len(), FeatureVector::LEN, |i, j| scaled[i][j])
}

/// Rank-based area under the ROC curve; tied scores share their mean rank.
pub fn roc_auc(scored: &[(f64, bool)]) -> Option<f64> {
    let positives = scored.iter().filter(|(_, y)| *y).count();
    let negatives = scored.len() - positives;
    if positives == 0 || negatives == 0 {
        return None;
    }

    let mut sorted: Vec<(f64, bool)> = scored.to_vec();
    sorted.sort_by(|a, b| a.0.partial_cmp(&b.0).unwrap_or(std::cmp::Ordering::Equal));

    let mut rank_sum = 0.0;
    let mut i = 0;
    while i < sorted.len() {
        let mut j = i;
        while j + 1 < sorted.len() && sorted[j + 1].0 == sorted[i].0 {
            j += 1;
        }
        // ranks are 1-based; i..=j share the average
        let avg_rank = (i + j) as f64 / 2.0 + 1.0;
        rank_sum += avg_rank * sorted[i..=j].iter().filter(|(_, y)| *y).count() as f64;
        i = j + 1;
    }

    let p = positives as f64;
    Some((rank_sum - p * (p + 1.0) / 2.0) / (p * negatives as f64))
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::models::RawGameRow;
    use crate::services::predictor::OverUnderClassifier;
    use crate::services::{build_training_table, write_training_table, Ledger, RollingFormCalculator};

    /// Over exactly when the second column (home points for) is positive.
    fn separable(n: i32) -> Vec<TrainingExample> {
        (0..n)
            .map(|i| {
                let x = f64::from(i - n / 2);
                let mut features = [0.0; FeatureVector::LEN];
                features[1] = x;
                features[9] = x;
                TrainingExample { features, over: x > 0.0 }
            })
            .collect()
    }

    #[test]
    fn test_learns_separable_signal() {
        let (model, report) = train_model(separable(100), &TrainingOptions::default(), 10).unwrap();
        assert_eq!(report.train_rows, 80);
        assert_eq!(report.test_rows, 20);
        assert!(report.accuracy >= 0.85, "accuracy {}", report.accuracy);
        assert!(report.roc_auc.unwrap() >= 0.9);
        assert!(model.weights[1] > 0.0);

        let mut home = crate::models::TeamFormWindow::default();
        home.points_for = 40.0;
        let fv = FeatureVector::from_windows(&home, &Default::default());
        assert!(model.prob_over(&fv) > 0.5);
    }

    #[test]
    fn test_same_seed_same_model() {
        let options = TrainingOptions { epochs: 200, ..TrainingOptions::default() };
        let (a, _) = train_model(separable(50), &options, 10).unwrap();
        let (b, _) = train_model(separable(50), &options, 10).unwrap();
        assert_eq!(a.weights, b.weights);
        assert_eq!(a.bias, b.bias);
    }

    #[test]
    fn test_rejects_degenerate_input() {
        assert!(train_model(vec![], &TrainingOptions::default(), 10).is_err());
        let all_over: Vec<TrainingExample> = separable(20).into_iter().filter(|e| e.over).collect();
        assert!(train_model(all_over, &TrainingOptions::default(), 10).is_err());
    }

    #[test]
    fn test_roc_auc() {
        let scored = [(0.9, true), (0.8, false), (0.7, true), (0.1, false)];
        assert_eq!(roc_auc(&scored), Some(0.75));
        assert_eq!(roc_auc(&[(0.5, true), (0.5, false)]), Some(0.5));
        assert_eq!(roc_auc(&[(0.2, true), (0.9, true)]), None);
    }

    #[test]
    fn test_reads_table_written_by_feature_builder() {
        let raw: Vec<RawGameRow> = (0..12)
            .map(|i| RawGameRow {
                date: format!("2024-02-{:02}", i + 1),
                league: Some("NBA".to_string()),
                home_team: if i % 2 == 0 { "Boston" } else { "Miami" }.to_string(),
                away_team: if i % 2 == 0 { "Miami" } else { "Boston" }.to_string(),
                home_score: Some((100 + i * 3).to_string()),
                away_score: Some("100".to_string()),
                ou_line: Some("205.5".to_string()),
            })
            .collect();
        let rows = build_training_table(&Ledger::load(raw), &RollingFormCalculator::new(2));

        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("features.csv");
        write_training_table(&rows, &path).unwrap();

        let examples = read_training_table(&path).unwrap();
        assert_eq!(examples.len(), rows.len());
        assert_eq!(examples[0].features, rows[0].features.to_array());
        assert_eq!(examples[0].over, rows[0].result == crate::models::OverUnder::Over);
    }

    #[test]
    fn test_missing_label_column_is_an_error() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("bad.csv");
        std::fs::write(&path, "Home_Avg_MOV,Away_Avg_MOV\n1,2\n").unwrap();
        assert!(read_training_table(&path).is_err());
    }
}
