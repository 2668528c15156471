//! HIDS driver: trains on synthetic normal processes, then scores a mixed test set
//! and reports one ndjson line per process on stdout.

use rand::rngs::StdRng;
use rand::{RngCore, SeedableRng};
use std::io::Write;
use syscall_hids::{
    config::HidsConfig,
    dataset,
    detection::{Detector, ScoreClassifier},
    logging::{DetectionLine, StructuredLogger},
    model::IsolationForest,
};
use tracing::info;

fn pct(v: f64) -> String {
    format!("{:.2}%", v * 100.0)
}

fn main() -> Result<(), Box<dyn std::error::Error + Send + Sync>> {
    let config_path = std::env::var("HIDS_CONFIG_PATH")
        .map(std::path::PathBuf::from)
        .unwrap_or_else(|_| std::path::PathBuf::from("config.json"));
    let config = HidsConfig::load(&config_path);

    StructuredLogger::init(config.log.json, &config.log.level);
    config.validate()?;

    let seed = config
        .forest
        .seed
        .unwrap_or_else(|| StdRng::from_entropy().next_u64());
    info!(seed, config = %config_path.display(), "syscall HIDS starting");
    let mut rng = StdRng::seed_from_u64(seed);

    let width = config.forest.max_syscalls;
    let training = dataset::training_set(config.dataset.train_size, width, &mut rng);
    info!(count = training.len(), "generated normal training processes");

    let mut forest = IsolationForest::new(config.forest.clone())?;
    forest.train(&dataset::feature_vectors(&training), &mut rng)?;

    let test = dataset::test_set(
        config.dataset.test_normal,
        config.dataset.test_anomalous,
        width,
        &mut rng,
    );
    info!(count = test.len(), "generated test processes");

    let detector = Detector::new(forest, ScoreClassifier::from_config(&config.detection));
    let run = detector.evaluate(&test);

    let stdout = std::io::stdout();
    let mut out = stdout.lock();
    for d in &run.detections {
        StructuredLogger::emit_json(&DetectionLine::from_detection(d), &mut out)?;
    }
    out.flush()?;

    let m = &run.metrics;
    info!(
        true_positive = m.true_positive,
        true_negative = m.true_negative,
        false_positive = m.false_positive,
        false_negative = m.false_negative,
        accuracy = %pct(m.accuracy()),
        precision = %m.precision().map(pct).unwrap_or_else(|| "n/a".into()),
        recall = %m.recall().map(pct).unwrap_or_else(|| "n/a".into()),
        "detection complete"
    );

    Ok(())
}
