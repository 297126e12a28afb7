//! Property-based tests for window zoom.
//!
//! For any sequence of zoom commands the factor stays inside the configured
//! bounds, and a reset always lands on exactly 1.0.

#[path = "../support/mod.rs"]
mod support;

use proptest::prelude::*;
use support::{controller, ScriptedDialogs};
use tmeon::surface::RenderSurface;
use tmeon::types::config::ZoomConfig;

#[derive(Debug, Clone)]
enum ZoomOp {
    In,
    Out,
    Reset,
}

fn arb_zoom_ops() -> impl Strategy<Value = Vec<ZoomOp>> {
    prop::collection::vec(
        prop_oneof![
            3 => Just(ZoomOp::In),
            3 => Just(ZoomOp::Out),
            1 => Just(ZoomOp::Reset),
        ],
        1..80,
    )
}

proptest! {
    #![proptest_config(ProptestConfig::with_cases(50))]

    #[test]
    fn zoom_stays_within_bounds(ops in arb_zoom_ops()) {
        let bounds = ZoomConfig::default();
        let dialogs = ScriptedDialogs::default();
        let mut ctl = controller(&dialogs);

        for op in &ops {
            let factor = match op {
                ZoomOp::In => ctl.zoom_in().unwrap(),
                ZoomOp::Out => ctl.zoom_out().unwrap(),
                ZoomOp::Reset => ctl.zoom_reset().unwrap(),
            };
            prop_assert!(factor >= bounds.min && factor <= bounds.max, "{:?} -> {}", op, factor);
            prop_assert_eq!(ctl.active_tab().unwrap().surface.zoom_factor(), factor);
        }
    }

    #[test]
    fn reset_is_exactly_one_after_any_history(ops in arb_zoom_ops()) {
        let dialogs = ScriptedDialogs::default();
        let mut ctl = controller(&dialogs);
        for op in &ops {
            match op {
                ZoomOp::In => { ctl.zoom_in().unwrap(); }
                ZoomOp::Out => { ctl.zoom_out().unwrap(); }
                ZoomOp::Reset => { ctl.zoom_reset().unwrap(); }
            }
        }
        prop_assert_eq!(ctl.zoom_reset().unwrap(), 1.0);
    }

    #[test]
    fn single_step_changes_by_step_inside_bounds(ins in 0usize..10) {
        let step = ZoomConfig::default().step;
        let dialogs = ScriptedDialogs::default();
        let mut ctl = controller(&dialogs);
        for _ in 0..ins {
            ctl.zoom_in().unwrap();
        }
        let before = ctl.chrome_state().zoom;
        let after = ctl.zoom_out().unwrap();
        prop_assert!((before - after - step).abs() < 1e-9);
    }

    #[test]
    fn zoom_in_then_out_restores_factor(outs in 0usize..7, ins in 0usize..30) {
        let dialogs = ScriptedDialogs::default();
        let mut ctl = controller(&dialogs);
        for _ in 0..outs {
            ctl.zoom_out().unwrap();
        }
        for _ in 0..ins {
            ctl.zoom_in().unwrap();
        }
        let before = ctl.chrome_state().zoom;
        ctl.zoom_in().unwrap();
        let after = ctl.zoom_out().unwrap();
        prop_assert!((after - before).abs() < 1e-6, "{} -> {}", before, after);
    }
}
