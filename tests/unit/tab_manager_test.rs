use tmeon::managers::tab_manager::{TabManager, TabManagerTrait};
use tmeon::types::errors::TabError;

fn manager_with(n: usize) -> (TabManager<u32>, Vec<String>) {
    let mut mgr = TabManager::new();
    let ids = (0..n)
        .map(|i| mgr.create_tab(format!("tab-{i}"), i as u32, "https://a.test", false))
        .collect();
    (mgr, ids)
}

#[test]
fn test_create_tab_returns_given_id() {
    let mut mgr: TabManager<()> = TabManager::new();
    let id = mgr.create_tab("abc".to_string(), (), "https://a.test", true);
    assert_eq!(id, "abc");
    assert_eq!(mgr.tab_count(), 1);
}

#[test]
fn test_new_tab_ids_are_unique() {
    let a = TabManager::<()>::new_tab_id();
    let b = TabManager::<()>::new_tab_id();
    assert_ne!(a, b);
}

#[test]
fn test_create_tab_sets_active_when_first() {
    let mut mgr = TabManager::new();
    let id = mgr.create_tab("first".to_string(), 0u8, "https://example.com", false);
    // First tab becomes active even if active=false
    assert_eq!(mgr.active_tab_id(), Some(id.as_str()));
}

#[test]
fn test_create_tab_defaults() {
    let (mgr, ids) = manager_with(1);
    let tab = mgr.get_tab(&ids[0]).unwrap();
    assert_eq!(tab.title, "New Tab");
    assert_eq!(tab.address, "https://a.test");
    assert_eq!(tab.surface, 0);
}

#[test]
fn test_create_inactive_tab_keeps_focus() {
    let (mgr, ids) = manager_with(3);
    assert_eq!(mgr.active_tab_id(), Some(ids[0].as_str()));
}

#[test]
fn test_close_active_tab_focuses_right_neighbour() {
    let (mut mgr, ids) = manager_with(3);
    mgr.switch_tab(&ids[1]).unwrap();

    let closed = mgr.close_tab(&ids[1]).unwrap();
    assert_eq!(closed.id, ids[1]);
    assert_eq!(mgr.active_tab_id(), Some(ids[2].as_str()));
    assert_eq!(mgr.tab_count(), 2);
}

#[test]
fn test_close_rightmost_active_tab_focuses_left_neighbour() {
    let (mut mgr, ids) = manager_with(3);
    mgr.switch_tab(&ids[2]).unwrap();
    mgr.close_tab(&ids[2]).unwrap();
    assert_eq!(mgr.active_tab_id(), Some(ids[1].as_str()));
}

#[test]
fn test_close_inactive_tab_keeps_focus() {
    let (mut mgr, ids) = manager_with(3);
    mgr.close_tab(&ids[2]).unwrap();
    assert_eq!(mgr.active_tab_id(), Some(ids[0].as_str()));
}

#[test]
fn test_close_last_tab_leaves_no_active_tab() {
    let (mut mgr, ids) = manager_with(1);
    mgr.close_tab(&ids[0]).unwrap();
    assert_eq!(mgr.tab_count(), 0);
    assert!(mgr.active_tab_id().is_none());
    assert!(mgr.get_active_tab().is_none());
}

#[test]
fn test_close_nonexistent_tab_returns_error() {
    let (mut mgr, _) = manager_with(1);
    let result = mgr.close_tab("nonexistent");
    assert!(matches!(result, Err(TabError::NotFound(id)) if id == "nonexistent"));
}

#[test]
fn test_switch_tab() {
    let (mut mgr, ids) = manager_with(2);
    mgr.switch_tab(&ids[1]).unwrap();
    assert_eq!(mgr.get_active_tab().unwrap().id, ids[1]);
}

#[test]
fn test_switch_to_unknown_tab_keeps_focus() {
    let (mut mgr, ids) = manager_with(2);
    assert!(mgr.switch_tab("missing").is_err());
    assert_eq!(mgr.active_tab_id(), Some(ids[0].as_str()));
}

#[test]
fn test_update_address_and_title() {
    let (mut mgr, ids) = manager_with(2);
    mgr.update_tab_address(&ids[1], "https://b.test/page").unwrap();
    mgr.update_tab_title(&ids[1], "Page B").unwrap();

    let tab = mgr.get_tab(&ids[1]).unwrap();
    assert_eq!(tab.address, "https://b.test/page");
    assert_eq!(tab.title, "Page B");
    assert!(mgr.update_tab_title("missing", "x").is_err());
}

#[test]
fn test_summaries_follow_strip_order() {
    let (mgr, ids) = manager_with(3);
    let summary_ids: Vec<String> = mgr.summaries().into_iter().map(|s| s.id).collect();
    assert_eq!(summary_ids, ids);
}
