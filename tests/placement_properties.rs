use cgmath::{InnerSpace, Vector3};
use scatterpick::placement::{
    CandidateSource, PlacementBounds, PlacementSampler, PlacementSettings, RandomCandidates,
    ScriptedCandidates,
};
use scatterpick::Error;

#[test]
fn accepted_placements_keep_min_distance() {
    let sampler = PlacementSampler::new(PlacementSettings::default()).unwrap();

    for seed in 0..25 {
        let mut source = RandomCandidates::from_seed(seed);
        let layout = sampler.scatter(20, &mut source);
        assert_eq!(layout.len(), 20);

        for (i, placement) in layout.iter().enumerate() {
            assert!(PlacementBounds::default().contains(placement.position));
            if placement.fell_back {
                continue;
            }
            for earlier in &layout[..i] {
                let distance = (placement.position - earlier.position).magnitude();
                assert!(distance >= 4.0, "seed {}: {} too close ({})", seed, i, distance);
            }
        }
    }
}

#[test]
fn rejects_overlap_then_accepts_far_candidate() {
    let settings = PlacementSettings::default()
        .with_min_distance(4.0)
        .with_bounds(PlacementBounds::centered(15.0, 0.0, 8.0));
    let sampler = PlacementSampler::new(settings).unwrap();
    let mut source = ScriptedCandidates::new(vec![
        Vector3::new(0.0, 0.0, 0.0),
        Vector3::new(10.0, 2.0, 5.0),
    ]);

    let position = sampler
        .place(&[Vector3::new(0.0, 0.0, 0.0)], &mut source)
        .unwrap();

    assert_eq!(position, Vector3::new(10.0, 2.0, 5.0));
    assert!((position.magnitude() - 11.357).abs() < 1e-3);
}

#[test]
fn crowded_volume_falls_back_to_last_candidate() {
    // A 1x1x1 box cannot hold two centers more than 4 apart
    let settings = PlacementSettings::default()
        .with_bounds(PlacementBounds::centered(0.5, 0.0, 1.0))
        .with_max_attempts(10);
    let sampler = PlacementSampler::new(settings).unwrap();
    let mut source = RandomCandidates::from_seed(3);

    let layout = sampler.scatter(3, &mut source);
    assert!(!layout[0].fell_back);
    assert!(layout[1].fell_back);
    assert!(layout[2].fell_back);

    let existing: Vec<Vector3<f32>> = layout.iter().map(|p| p.position).collect();
    match sampler.place(&existing, &mut source) {
        Err(Error::PlacementExhausted { attempts, last_candidate }) => {
            assert_eq!(attempts, 10);
            assert!(settings.bounds.contains(last_candidate));
        }
        other => panic!("expected exhaustion, got {:?}", other),
    }
}

#[test]
fn place_does_not_consume_more_than_needed() {
    struct Counting {
        calls: usize,
    }

    impl CandidateSource for Counting {
        fn next_candidate(&mut self, _bounds: &PlacementBounds) -> Vector3<f32> {
            self.calls += 1;
            Vector3::new(self.calls as f32 * 10.0, 0.0, 0.0)
        }
    }

    let sampler = PlacementSampler::new(PlacementSettings::default()).unwrap();
    let mut source = Counting { calls: 0 };
    let existing = [Vector3::new(10.0, 0.0, 0.0)];

    let position = sampler.place(&existing, &mut source).unwrap();
    assert_eq!(position, Vector3::new(20.0, 0.0, 0.0));
    assert_eq!(source.calls, 2);
}
