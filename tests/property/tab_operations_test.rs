//! Property-based tests for tab operations in a window.
//!
//! For any sequence of tab creations, closures and switches, the window keeps
//! at least one tab, exactly one tab is active, and only the active tab's
//! surface is visible.

#[path = "../support/mod.rs"]
mod support;

use proptest::prelude::*;
use support::{controller, ScriptedDialogs};
use tmeon::managers::tab_manager::TabManagerTrait;

/// Operations that can be performed on a window's tabs.
#[derive(Debug, Clone)]
enum TabOp {
    Create,
    Close(usize), // index into the current tab strip
    Switch(usize),
    Navigate(usize),
}

/// Biased toward more creates than closes to keep interesting state.
fn arb_tab_ops() -> impl Strategy<Value = Vec<TabOp>> {
    prop::collection::vec(
        prop_oneof![
            3 => Just(TabOp::Create),
            2 => (0..20usize).prop_map(TabOp::Close),
            2 => (0..20usize).prop_map(TabOp::Switch),
            1 => (0..100usize).prop_map(TabOp::Navigate),
        ],
        1..60,
    )
}

proptest! {
    #![proptest_config(ProptestConfig::with_cases(30))]

    #[test]
    fn tab_create_close_invariant(ops in arb_tab_ops()) {
        let dialogs = ScriptedDialogs::default();
        let mut ctl = controller(&dialogs);
        let mut expected_count: usize = 1;

        for op in &ops {
            let order: Vec<String> = ctl.tabs().summaries().into_iter().map(|s| s.id).collect();
            match op {
                TabOp::Create => {
                    ctl.new_tab().unwrap();
                    expected_count += 1;
                }
                TabOp::Close(idx) => {
                    let tab_id = &order[idx % order.len()];
                    ctl.close_tab(tab_id).unwrap();
                    // Closing the last tab opens a fresh one.
                    if order.len() > 1 {
                        expected_count -= 1;
                    }
                }
                TabOp::Switch(idx) => {
                    let tab_id = order[idx % order.len()].clone();
                    ctl.switch_tab(&tab_id).unwrap();
                    prop_assert_eq!(ctl.tabs().active_tab_id(), Some(tab_id.as_str()));
                }
                TabOp::Navigate(n) => {
                    let address = ctl.navigate_to(&format!("site{}.test", n)).unwrap();
                    prop_assert_eq!(ctl.address_field(), address.as_str());
                }
            }

            prop_assert_eq!(
                ctl.tabs().tab_count(),
                expected_count,
                "After {:?}, expected {} tabs",
                op,
                expected_count
            );

            let active = ctl.active_tab().unwrap();
            prop_assert_eq!(ctl.address_field(), active.address.as_str());
            for tab in ctl.tabs().get_all_tabs() {
                prop_assert_eq!(tab.surface.is_active(), tab.id == active.id);
            }
        }
    }
}
