use super::*;

#[test]
fn starts_hidden() {
    assert!(!HintGate::new().is_visible());
}

#[test]
fn discloses_on_third_attempt() {
    let mut gate = HintGate::new();
    assert!(!gate.observe(1));
    assert!(!gate.observe(2));
    assert!(gate.observe(3));
}

#[test]
fn visibility_is_a_function_of_the_latest_value() {
    let mut gate = HintGate::new();
    for attempt in [1, 2, 3] {
        gate.observe(attempt);
    }
    assert!(gate.is_visible());

    // Dropping below the threshold hides the hint again.
    assert!(!gate.observe(2));
    assert!(!gate.is_visible());
}

#[test]
fn repeated_values_are_idempotent() {
    let mut gate = HintGate::new();
    assert!(gate.observe(3));
    assert!(gate.observe(3));
    assert!(gate.observe(7));
}
