use super::*;

#[test]
fn fresh_ticket_is_current() {
    let slot = TaskSlot::new();
    let ticket = slot.arm();
    assert!(ticket.is_current());
}

#[test]
fn rearming_supersedes_previous_ticket() {
    let slot = TaskSlot::new();
    let first = slot.arm();
    let second = slot.arm();
    assert!(!first.is_current());
    assert!(second.is_current());
}

#[test]
fn cancel_invalidates_outstanding_ticket() {
    let slot = TaskSlot::new();
    let ticket = slot.arm();
    slot.cancel();
    assert!(!ticket.is_current());
}

#[test]
fn clones_share_generation() {
    let slot = TaskSlot::new();
    let ticket = slot.arm();
    let other = slot.clone();
    other.cancel();
    assert!(!ticket.is_current());
}

#[test]
fn independent_slots_do_not_interfere() {
    let a = TaskSlot::new();
    let b = TaskSlot::new();
    let ticket = a.arm();
    b.arm();
    b.cancel();
    assert!(ticket.is_current());
}

#[test]
fn schedule_rearms_without_firing_outside_browser() {
    let slot = TaskSlot::new();
    let earlier = slot.arm();
    slot.schedule(10, || panic!("timers must not fire without hydrate"));
    assert!(!earlier.is_current());
}
