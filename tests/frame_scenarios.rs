/// Scenario tests for the animation driver.
///
/// Each scenario scripts pointer moves and commands frame by frame, runs them through a
/// fresh driver and validates the recorded frames against per-frame expectations.
///
/// Run with:   cargo test --test frame_scenarios
use unit_circle::{
    AnimationDriver, Command, CoordinateFace, ElementKey, LabelSet, LayoutConfig, Variant,
};
use unit_circle_scenes::{
    blend_flip, check_frames, pointer_at, pointer_sweep, ring_round_trip, FrameRecord, Scenario,
    FRAME_MS,
};

fn run_and_check(scenario: Scenario) -> Vec<FrameRecord> {
    let mut driver = AnimationDriver::new(LayoutConfig::default()).unwrap();
    let records = scenario.run(&mut driver);

    let failures = check_frames(&records, &scenario.expectations);
    if !failures.is_empty() {
        panic!(
            "{}: {} frame expectation(s) failed:\n{}",
            scenario.name,
            failures.len(),
            failures.join("\n"),
        );
    }
    records
}

#[test]
fn pointer_sweep_expectations() {
    let records = run_and_check(pointer_sweep());
    // Each canonical angle is highlighted in turn.
    for step in 0..16 {
        assert_eq!(records[step * 10 + 5].nearest_index, step);
    }
}

#[test]
fn ring_round_trip_expectations() {
    let records = run_and_check(ring_round_trip());

    // Depth only moves while a transition is running, and then strictly monotonically.
    let outward = &records[1..=101];
    assert!(outward.windows(2).all(|pair| pair[1].depth > pair[0].depth));
    let rested = &records[102..110];
    assert!(rested.iter().all(|record| record.depth == rested[0].depth));
}

#[test]
fn blend_flip_expectations() {
    let records = run_and_check(blend_flip());

    // Content switches in a single frame, with no frame showing both sets.
    let cutover = records
        .iter()
        .position(|record| record.face == CoordinateFace::Tangents)
        .unwrap();
    let before = &records[cutover - 1];
    let after = &records[cutover];
    assert!(before.blend < 0.5 && after.blend >= 0.5);
    assert_eq!((before.visible_coordinates, before.visible_tangents), (16, 0));
    assert_eq!((after.visible_coordinates, after.visible_tangents), (0, 16));

    for record in &records {
        assert_eq!(record.visible_coordinates + record.visible_tangents, 16);
    }
}

#[test]
fn blend_crossing_half_switches_visible_sets() {
    let mut driver = AnimationDriver::new(LayoutConfig::default()).unwrap();
    driver.push_event(Command::ToggleBlend);

    let mut previous: Option<(f32, Vec<ElementKey>)> = None;
    for frame in 0..60u64 {
        let computed = driver.frame(frame as f64 * FRAME_MS);
        let visible: Vec<ElementKey> = computed
            .layout
            .elements
            .iter()
            .filter(|element| element.visible)
            .map(|element| element.key)
            .collect();

        if let Some((blend, keys)) = &previous {
            if *blend < 0.5 && computed.blend >= 0.5 {
                let outer = |keys: &[ElementKey], set: LabelSet| {
                    keys.iter()
                        .filter(|key| matches!(key, ElementKey::Label { set: s, .. } if *s == set))
                        .count()
                };
                assert_eq!(outer(keys, LabelSet::Coordinates), 16);
                assert_eq!(outer(keys, LabelSet::Tangents), 0);
                assert_eq!(outer(&visible, LabelSet::Coordinates), 0);
                assert_eq!(outer(&visible, LabelSet::Tangents), 16);
            }
        }
        previous = Some((computed.blend, visible));
    }
}

#[test]
fn highlight_follows_pointer_and_tints_background() {
    let mut driver = AnimationDriver::new(LayoutConfig::default()).unwrap();
    driver.push_event(unit_circle::InputEvent::Resized {
        width: 800.0,
        height: 600.0,
    });
    driver.push_event(pointer_at(std::f32::consts::FRAC_PI_4));

    let frame = driver.frame(0.0);
    assert_eq!(frame.nearest_index, 2);
    assert_eq!(frame.background.wave_color, frame.highlight.rgb_array());
    assert_eq!(frame.backdrop.color, frame.highlight);
    assert_eq!(frame.dividers[2].color, frame.highlight);

    let label = frame.layout.get(2, LabelSet::Radians).unwrap();
    assert!(label.visible);
    assert!((label.scale - 2.0 * 22.0).abs() < 1e-3);
}

#[test]
fn classic_variant_lays_out_three_sets() {
    let config = LayoutConfig::default().with_variant(Variant::Classic);
    let mut driver = AnimationDriver::new(config).unwrap();
    driver.push_event(Command::ToggleBlend);
    for frame in 0..30u64 {
        driver.frame(frame as f64 * FRAME_MS);
    }
    let frame = driver.last_frame();
    assert_eq!(frame.layout.elements.len(), 48);
    assert!(frame.layout.names.is_empty());
    assert_eq!(frame.layout.face, CoordinateFace::Coordinates);
    assert!(frame.layout.elements.iter().all(|element| element.visible));
}

#[test]
fn orbit_names_track_the_active_ring() {
    let mut driver = AnimationDriver::new(LayoutConfig::default()).unwrap();
    let names: Vec<bool> = driver
        .frame(0.0)
        .layout
        .names
        .iter()
        .map(|name| name.visible)
        .collect();
    assert_eq!(names, vec![true, false, false]);

    driver.push_event(Command::RingOut);
    for frame in 1..=110u64 {
        driver.frame(frame as f64 * FRAME_MS);
    }
    let names: Vec<bool> = driver
        .last_frame()
        .layout
        .names
        .iter()
        .map(|name| name.visible)
        .collect();
    // Resting just past 1.0 shows ring 1 alone.
    assert_eq!(names, vec![false, true, false]);
}

fn visible_names(driver: &AnimationDriver) -> Vec<bool> {
    driver
        .last_frame()
        .layout
        .names
        .iter()
        .map(|name| name.visible)
        .collect()
}

#[test]
fn orbit_names_at_rest_ignore_the_path_taken() {
    let mut driver = AnimationDriver::new(LayoutConfig::default()).unwrap();
    driver.frame(0.0);
    let start = visible_names(&driver);

    driver.push_event(Command::RingOut);
    let mut frame = 1u64;
    while frame < 150 {
        driver.frame(frame as f64 * FRAME_MS);
        frame += 1;
    }
    let on_ring_one = visible_names(&driver);

    driver.push_event(Command::RingIn);
    while frame < 300 {
        driver.frame(frame as f64 * FRAME_MS);
        frame += 1;
    }
    assert!(driver.animator().is_idle());
    assert!(driver.last_frame().depth < 0.01);
    assert_eq!(visible_names(&driver), start);
    assert_eq!(start, vec![true, false, false]);
    assert_eq!(on_ring_one, vec![false, true, false]);

    // Travelling outward, the ring being approached is named too.
    driver.push_event(Command::RingOut);
    for _ in 0..50 {
        driver.frame(frame as f64 * FRAME_MS);
        frame += 1;
    }
    assert_eq!(visible_names(&driver), vec![true, true, false]);
}
