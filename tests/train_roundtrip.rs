//! Trainer round-trip: fit, persist, reload, score.

use classr::artifact::Artifact;
use classr::dataset;
use classr::model::{Pipeline, ProbabilisticClassifier};

#[test]
fn trained_artifact_round_trips() {
    let data = dataset::builtin();
    let (train, test) = data.stratified_split(0.2, 42).unwrap();
    let pipeline = Pipeline::fit(&train.samples, &train.labels, 500, 0.1).unwrap();

    // The generated classes are well separated; the fit should not be junk.
    let correct = test
        .samples
        .iter()
        .zip(&test.labels)
        .filter(|(sample, &label)| {
            let p = pipeline.predict_probability(sample).unwrap();
            u8::from(p >= 0.5) == label
        })
        .count();
    assert!(correct as f64 / test.len() as f64 > 0.8);

    let dir = tempfile::tempdir().unwrap();
    let path = dir.path().join("models").join("model.bin");
    let artifact = Artifact::new(pipeline, data.feature_names.clone()).unwrap();
    artifact.save(&path).unwrap();
    assert!(path.exists());

    let loaded = Artifact::load(&path).unwrap();
    assert!(!loaded.feature_names.is_empty());
    assert_eq!(loaded.feature_names, data.feature_names);

    // The reloaded classifier scores a vector of exactly schema length.
    let probe = vec![0.0; loaded.n_features()];
    let p = loaded.pipeline.predict_probability(&probe).unwrap();
    assert!((0.0..=1.0).contains(&p));

    // And rejects everything else.
    assert!(loaded.pipeline.predict_probability(&[0.0]).is_err());
}
