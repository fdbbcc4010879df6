use super::*;

// =============================================================
// Pool membership and ordering
// =============================================================

#[test]
fn pick_output_is_always_from_the_pool() {
    for i in 0..1000 {
        let greeting = pick(f64::from(i) / 1000.0);
        assert!(GREETINGS.contains(&greeting));
    }
}

#[test]
fn pick_maps_thirds_to_entries_in_order() {
    assert_eq!(pick(0.0), "Español");
    assert_eq!(pick(0.4), "English");
    assert_eq!(pick(0.9), "Deutsch");
}

// =============================================================
// Uniformity
// =============================================================

#[test]
fn evenly_spread_rolls_cover_every_entry_roughly_equally() {
    let mut counts = [0usize; 3];
    for i in 0..300 {
        let greeting = pick(f64::from(i) / 300.0);
        let index = GREETINGS
            .iter()
            .position(|&entry| entry == greeting)
            .expect("pool entry");
        counts[index] += 1;
    }
    for count in counts {
        assert!((90..=110).contains(&count), "skewed counts: {counts:?}");
    }
}

// =============================================================
// Hostile rolls
// =============================================================

#[test]
fn pick_clamps_out_of_range_rolls() {
    assert_eq!(pick(-1.0), GREETINGS[0]);
    assert_eq!(pick(1.0), GREETINGS[2]);
    assert_eq!(pick(f64::INFINITY), GREETINGS[2]);
    assert_eq!(pick(f64::NAN), GREETINGS[0]);
}
