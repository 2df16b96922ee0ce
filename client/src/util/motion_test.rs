use super::*;

// =============================================================
// Press feedback
// =============================================================

#[test]
fn press_transform_scales_only_while_pressed() {
    assert_eq!(press_transform(true, 0.95), "transform: scale(0.95);");
    assert_eq!(press_transform(true, 1.2), "transform: scale(1.2);");
    assert_eq!(press_transform(false, 1.2), "transform: scale(1);");
}

// =============================================================
// Toggle slider
// =============================================================

#[test]
fn slider_enlarges_while_settling() {
    assert_eq!(slider_transform(true, true), "transform: translateX(24px) scale(1.1);");
    assert_eq!(slider_transform(false, true), "transform: translateX(0) scale(1.1);");
}

#[test]
fn slider_rests_at_side_for_state() {
    assert_eq!(slider_transform(true, false), "transform: translateX(24px);");
    assert_eq!(slider_transform(false, false), "transform: translateX(0);");
}

// =============================================================
// Reveal and rows
// =============================================================

#[test]
fn reveal_moves_card_from_offset_to_rest() {
    assert!(reveal_style(false).starts_with("opacity: 0; transform: translateY(30px);"));
    assert!(reveal_style(true).starts_with("opacity: 1; transform: translateY(0);"));
}

#[test]
fn row_entrance_offsets_differ_by_kind() {
    assert!(row_style(RowEntrance::Staggered, false).contains("translateX(-20px)"));
    assert!(row_style(RowEntrance::Inserted, false).contains("translateY(-20px)"));
    assert_eq!(row_style(RowEntrance::Staggered, true), row_style(RowEntrance::Inserted, true));
}

#[test]
fn stagger_is_one_hundred_ms_per_row() {
    assert_eq!(stagger_delay_ms(0), 0);
    assert_eq!(stagger_delay_ms(1), 100);
    assert_eq!(stagger_delay_ms(4), 400);
}

#[test]
fn stagger_saturates_instead_of_overflowing() {
    assert_eq!(stagger_delay_ms(usize::MAX), u32::MAX);
}

#[test]
fn panel_slides_down_on_entry() {
    assert_eq!(panel_style(false), "opacity: 0; transform: translateY(-20px);");
    assert_eq!(panel_style(true), "opacity: 1; transform: translateY(0);");
}
