use touch_fusion::{LedPattern, SliderPosition, decide};

const POSITIONS: [SliderPosition; 3] = [
    SliderPosition::Left,
    SliderPosition::Right,
    SliderPosition::Inactive,
];

fn all_inputs() -> impl Iterator<Item = (bool, bool, SliderPosition)> {
    [false, true].into_iter().flat_map(|pb0| {
        [false, true]
            .into_iter()
            .flat_map(move |pb1| POSITIONS.into_iter().map(move |slider| (pb0, pb1, slider)))
    })
}

fn mirror_slider(slider: SliderPosition) -> SliderPosition {
    match slider {
        SliderPosition::Left => SliderPosition::Right,
        SliderPosition::Right => SliderPosition::Left,
        SliderPosition::Inactive => SliderPosition::Inactive,
    }
}

fn mirror_leds(pattern: LedPattern) -> LedPattern {
    LedPattern::new(pattern.led1, pattern.led0)
}

#[test]
fn test_table_covers_every_input() {
    let expected = [
        // (pb0, pb1, slider) -> (led0, led1)
        ((false, false, SliderPosition::Left), (true, false)),
        ((false, false, SliderPosition::Right), (false, true)),
        ((false, false, SliderPosition::Inactive), (false, false)),
        ((false, true, SliderPosition::Left), (true, true)),
        ((false, true, SliderPosition::Right), (false, true)),
        ((false, true, SliderPosition::Inactive), (false, true)),
        ((true, false, SliderPosition::Left), (true, false)),
        ((true, false, SliderPosition::Right), (true, true)),
        ((true, false, SliderPosition::Inactive), (true, false)),
        ((true, true, SliderPosition::Left), (true, false)),
        ((true, true, SliderPosition::Right), (false, true)),
        ((true, true, SliderPosition::Inactive), (false, false)),
    ];

    assert_eq!(all_inputs().count(), expected.len());
    for ((pb0, pb1, slider), (led0, led1)) in expected {
        assert_eq!(
            decide(pb0, pb1, slider),
            LedPattern::new(led0, led1),
            "pb0={pb0} pb1={pb1} slider={slider:?}"
        );
    }
}

#[test]
fn test_idle_is_dark() {
    assert_eq!(decide(false, false, SliderPosition::Inactive), LedPattern::OFF);
}

#[test]
fn test_listed_scenarios() {
    assert_eq!(decide(true, false, SliderPosition::Left), LedPattern::new(true, false));
    assert_eq!(decide(false, true, SliderPosition::Left), LedPattern::new(true, true));
    assert_eq!(decide(true, false, SliderPosition::Right), LedPattern::new(true, true));
    assert_eq!(decide(false, false, SliderPosition::Right), LedPattern::new(false, true));
    assert_eq!(decide(true, true, SliderPosition::Inactive), LedPattern::new(false, false));
}

#[test]
fn test_mirroring_inputs_mirrors_outputs() {
    for (pb0, pb1, slider) in all_inputs() {
        let mirrored = decide(pb1, pb0, mirror_slider(slider));
        assert_eq!(
            mirrored,
            mirror_leds(decide(pb0, pb1, slider)),
            "pb0={pb0} pb1={pb1} slider={slider:?}"
        );
    }
}

#[test]
fn test_decide_is_repeatable() {
    for (pb0, pb1, slider) in all_inputs() {
        let first = decide(pb0, pb1, slider);
        for _ in 0..3 {
            assert_eq!(decide(pb0, pb1, slider), first);
        }
    }
}
