//! End-to-end scenarios for the price button engine.

mod common;

use rust_decimal::Decimal;
use rust_decimal_macros::dec;

use common::{RecordingTarget, board, price};
use limitpad::PriceError;
use limitpad::engine::format::{decimal_places, format_for_display};
use limitpad::engine::offset::{calculate, calculate_text};
use limitpad::engine::{
    ControllerConfig, FixState, OffsetConfig, OffsetSet, PriceButtonController, RenderOrder,
};
use limitpad::models::{OffsetMode, PriceType, QuoteBoard};

fn controller(
    source: QuoteBoard,
    mode: OffsetMode,
    explicit: Vec<Decimal>,
    step: Decimal,
    count: u32,
) -> PriceButtonController<QuoteBoard, RecordingTarget> {
    let config = ControllerConfig {
        offsets: OffsetConfig {
            mode,
            explicit,
            step,
            count,
        },
        auto_confirm: true,
        min_decimals: 2,
        main_label_suffix: " als Limit".to_string(),
    };
    PriceButtonController::new(source, RecordingTarget::default(), config)
}

#[test]
fn test_percentage_grid_around_ask() {
    let source = board("17,540 € / 17,550 €");
    let ctl = controller(
        source,
        OffsetMode::Percentage,
        vec![dec!(0.5), dec!(1), dec!(2)],
        dec!(0.05),
        0,
    );

    let label = |offset| ctl.display_info(PriceType::Ask, offset).price.unwrap().to_display();
    assert_eq!(label(dec!(0.5)), "17,638");
    assert_eq!(label(dec!(1)), "17,726");
    assert_eq!(label(dec!(2)), "17,901");
    assert_eq!(label(dec!(-0.5)), "17,462");
    assert_eq!(label(dec!(-1)), "17,375");
    assert_eq!(label(dec!(-2)), "17,199");
}

#[test]
fn test_fixed_grid_keeps_two_decimals() {
    let ctl = controller(board("24.110,50 €"), OffsetMode::Fixed, vec![], dec!(10.00), 1);

    let up = ctl.resolve_price(PriceType::Single, dec!(10.00)).unwrap();
    let down = ctl.resolve_price(PriceType::Single, dec!(-10.00)).unwrap();
    assert_eq!(up.to_string(), "24120.50");
    assert_eq!(down.to_string(), "24100.50");
    assert_eq!(ctl.display_info(PriceType::Single, dec!(10.00)).label, "+10,00");
}

#[test]
fn test_negative_prices_are_disabled() {
    let mut ctl = controller(board("2,00 €"), OffsetMode::Fixed, vec![], dec!(5), 1);

    let info = ctl.display_info(PriceType::Single, dec!(-5));
    assert!(info.disabled);
    assert!(info.price.is_none());
    assert_eq!(info.label, "\u{200B}");

    assert_eq!(ctl.click(PriceType::Single, dec!(-5)), None);
    assert!(ctl.target().calls.is_empty());
}

#[test]
fn test_fix_mode_freezes_clicked_price() {
    let mut ctl = controller(
        board("99,00 € / 100,00 €"),
        OffsetMode::Percentage,
        vec![dec!(1), dec!(2), dec!(5)],
        dec!(0.05),
        0,
    );

    assert_eq!(ctl.toggle_fix_mode(), FixState::Frozen);
    ctl.source_mut().apply_text("150,00 € / 151,00 €");

    assert_eq!(ctl.display_info(PriceType::Ask, dec!(5)).label, "105,00");
    assert_eq!(ctl.main_display(PriceType::Ask).label, "100,00 als Limit");
    ctl.click(PriceType::Ask, dec!(2));
    assert_eq!(ctl.target().calls, vec![(price("102,00"), true)]);

    assert_eq!(ctl.toggle_fix_mode(), FixState::Live);
    assert_eq!(ctl.main_display(PriceType::Ask).label, "151,00 als Limit");
    ctl.click(PriceType::Ask, dec!(2));
    assert_eq!(ctl.target().calls[1].0, price("154,02"));
}

#[test]
fn test_missing_side_gives_blank_button() {
    let ctl = controller(board("17,550 €"), OffsetMode::Fixed, vec![], dec!(0.01), 2);

    assert_eq!(
        ctl.resolve_price(PriceType::Bid, dec!(0.01)),
        Err(PriceError::NoActivePrice(PriceType::Bid))
    );
    let info = ctl.display_info(PriceType::Bid, dec!(0.01));
    assert!(info.disabled);
    assert_eq!(info.label, "");
}

#[test]
fn test_generator_layouts_differ_by_mode() {
    let fixed = OffsetSet::generate(&OffsetConfig {
        mode: OffsetMode::Fixed,
        explicit: vec![],
        step: dec!(0.05),
        count: 3,
    });
    assert_eq!(
        fixed.offsets(),
        &[dec!(0.05), dec!(0.10), dec!(0.15), dec!(-0.05), dec!(-0.10), dec!(-0.15)]
    );
    assert_eq!(fixed.render_order(), RenderOrder::SmallestFirst);
    assert_eq!(fixed.above_main(), vec![dec!(0.05), dec!(0.10), dec!(0.15)]);

    let percent = OffsetSet::generate(&OffsetConfig {
        mode: OffsetMode::Percentage,
        explicit: vec![dec!(2), dec!(-1), dec!(1), dec!(0.5)],
        step: dec!(0.05),
        count: 10,
    });
    assert_eq!(percent.len(), 6);
    assert_eq!(percent.above_main(), vec![dec!(2), dec!(1), dec!(0.5)]);
    assert_eq!(percent.below_main(), vec![dec!(-0.5), dec!(-1), dec!(-2)]);
}

#[test]
fn test_symmetric_offsets_around_base() {
    let base = price("17,550");
    for offset in [dec!(0.5), dec!(1), dec!(2), dec!(5)] {
        let up = calculate(&base, offset, OffsetMode::Percentage, 3).value();
        let down = calculate(&base, -offset, OffsetMode::Percentage, 3).value();
        let drift = (up - base.value()) - (base.value() - down);
        assert!(drift.abs() <= dec!(0.001), "offset {offset} drift {drift}");
    }
}

#[test]
fn test_display_round_trip_preserves_decimals() {
    for text in ["17", "17,5", "17,55", "17,551", "17,5505", "17,55055"] {
        let shown = format_for_display(text);
        let expected = decimal_places(text).max(2);
        assert_eq!(decimal_places(&shown), expected, "{text} -> {shown}");
    }
}

#[test]
fn test_unparsable_text_is_returned_unchanged() {
    assert_eq!(calculate_text("n/a", dec!(1), OffsetMode::Fixed, 2), "n/a");
    assert_eq!(format_for_display("--"), "--");
}
