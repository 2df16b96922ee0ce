use super::*;

#[test]
fn pulse_starts_inactive() {
    let pulse = Pulse::new();
    assert!(!pulse.active.get_untracked());
}

#[test]
fn trigger_switches_on_until_settled() {
    let pulse = Pulse::new();
    pulse.trigger(150);
    assert!(pulse.active.get_untracked());
    pulse.trigger(150);
    assert!(pulse.active.get_untracked());
}

#[test]
fn retrigger_supersedes_pending_settle() {
    let pulse = Pulse::new();
    let slot = pulse.slot.get_value();
    pulse.trigger(150);
    let first = slot.arm();
    pulse.trigger(150);
    assert!(!first.is_current());
}
