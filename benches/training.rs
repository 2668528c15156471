//! Training benchmark: synthetic normal profiles → isolation forest.

use criterion::{black_box, criterion_group, criterion_main, Criterion};
use rand::rngs::StdRng;
use rand::SeedableRng;
use syscall_hids::config::ForestConfig;
use syscall_hids::dataset;
use syscall_hids::model::IsolationForest;

fn bench_train_default(c: &mut Criterion) {
    let mut rng = StdRng::seed_from_u64(1);
    let data = dataset::feature_vectors(&dataset::training_set(20, 20, &mut rng));

    c.bench_function("train_10_trees_8_samples", |b| {
        b.iter(|| {
            let mut forest = IsolationForest::new(ForestConfig::default()).unwrap();
            forest.train(black_box(&data), &mut rng).unwrap();
            black_box(forest)
        })
    });
}

fn bench_train_by_subsample(c: &mut Criterion) {
    let mut rng = StdRng::seed_from_u64(2);
    let data = dataset::feature_vectors(&dataset::training_set(1024, 20, &mut rng));

    let mut g = c.benchmark_group("train_by_subsample");
    for s in [8, 64, 256] {
        let config = ForestConfig {
            num_trees: 100,
            subsample_size: s,
            ..ForestConfig::default()
        };
        g.bench_function(format!("subsample_{}", s).as_str(), |b| {
            b.iter(|| {
                let mut forest = IsolationForest::new(config.clone()).unwrap();
                forest.train(black_box(&data), &mut rng).unwrap();
                black_box(forest)
            })
        });
    }
    g.finish();
}

criterion_group!(benches, bench_train_default, bench_train_by_subsample);
criterion_main!(benches);
