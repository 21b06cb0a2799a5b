
use super::*;

fn params(respondents: u32, sets: u32, per_set: usize, seed: u64) -> SimulationParams {
    SimulationParams {
        respondents,
        sets_per_respondent: sets,
        items_per_set: per_set,
        seed,
    }
}

#[test]
fn test_record_count_and_layout() {
    let catalog = Catalog::retail_v1();
    let out = run_stage1(&params(3, 4, 4, 1), &catalog).unwrap();
    assert_eq!(out.records.len(), 12);
    assert_eq!(out.records[0].respondent, 0);
    assert_eq!(out.records[3].set_id, 3);
    assert_eq!(out.records[4].respondent, 1);
    assert_eq!(out.records[4].set_id, 0);
    for rec in &out.records {
        assert_eq!(rec.choice_set.len(), 4);
        assert_eq!(rec.check(), None);
        for label in rec.choice_set.items() {
            assert!(catalog.index_of(label).is_some());
        }
    }
}

#[test]
fn test_same_seed_same_records() {
    let catalog = Catalog::retail_latent_v1();
    let a = run_stage1(&params(10, 5, 3, 99), &catalog).unwrap();
    let b = run_stage1(&params(10, 5, 3, 99), &catalog).unwrap();
    assert_eq!(a.records, b.records);
    let c = run_stage1(&params(10, 5, 3, 100), &catalog).unwrap();
    assert_ne!(a.records, c.records);
}

#[test]
fn test_full_catalog_sets() {
    let catalog = Catalog::from_labels(&["A", "B"]).unwrap();
    let out = run_stage1(&params(2, 2, 2, 7), &catalog).unwrap();
    for rec in &out.records {
        assert_ne!(rec.best, rec.worst);
    }
}

#[test]
fn test_configuration_errors() {
    let catalog = Catalog::retail_v1();
    let cases = [
        params(0, 5, 4, 1),
        params(5, 0, 4, 1),
        params(5, 5, 1, 1),
        params(5, 5, 7, 1),
    ];
    for p in cases {
        let err = run_stage1(&p, &catalog).unwrap_err();
        assert!(
            matches!(err, MaxDiffError::Configuration(_)),
            "expected configuration error for {p:?}, got {err}"
        );
    }
}

#[test]
fn test_latent_weights_shift_choices() {
    let catalog = Catalog::retail_latent_v1();
    let out = run_stage1(&params(400, 5, 4, 3), &catalog).unwrap();
    let best_top = out
        .records
        .iter()
        .filter(|r| r.best == "Free Shipping")
        .count();
    let best_low = out
        .records
        .iter()
        .filter(|r| r.best == "Extended Warranty")
        .count();
    let worst_low = out
        .records
        .iter()
        .filter(|r| r.worst == "Extended Warranty")
        .count();
    assert!(best_top > best_low);
    assert!(worst_low > best_low);
}

#[test]
fn test_draw_weighted_respects_zero_weight() {
    let mut rng = StdRng::seed_from_u64(5);
    let weights = [0.0, 2.0, 0.0];
    for _ in 0..50 {
        assert_eq!(draw_weighted(&weights, |w| *w, &mut rng).unwrap(), 1);
    }
}

#[test]
fn test_draw_weighted_rejects_empty() {
    let mut rng = StdRng::seed_from_u64(5);
    let empty: [f64; 0] = [];
    assert!(draw_weighted(&empty, |w| *w, &mut rng).is_err());
    assert!(draw_weighted(&[0.0, 0.0], |w| *w, &mut rng).is_err());
}

#[test]
fn test_oversized_run_rejected() {
    let catalog = Catalog::retail_v1();
    let err = run_stage1(&params(u32::MAX, u32::MAX, 4, 1), &catalog).unwrap_err();
    assert!(matches!(err, MaxDiffError::Configuration(_)));
    assert!(err.to_string().contains("record limit"));

    let at_limit = params(10_000, 1_000, 4, 1);
    assert!(at_limit.validate(&catalog).is_ok());
    let over_limit = params(10_000, 1_001, 4, 1);
    assert!(over_limit.validate(&catalog).is_err());
}
