//! Integration tests for binding, resolution and help bookkeeping through the
//! public `KeyBindingManager` API.

use gitview_keys::{
    ActionType, Binding, BindingOrigin, KeyBindingManager, KeySequence, KeymapError, Resolution,
    ViewId, help_sections,
};

fn keys(raw: &str) -> KeySequence {
    KeySequence::parse(raw)
}

fn bind(manager: &mut KeyBindingManager, view: ViewId, raw: &str, action: ActionType) {
    manager
        .set_action_binding(view, &keys(raw), action, BindingOrigin::User)
        .unwrap();
}

#[test]
fn test_never_bound_sequence_resolves_to_none() {
    let manager = KeyBindingManager::new();
    for view in ViewId::ALL {
        assert_eq!(
            manager.resolve(&[*view], &keys("Q")),
            Resolution::unmatched(false)
        );
    }
}

#[test]
fn test_bound_sequence_resolves_to_action() {
    let mut manager = KeyBindingManager::new();
    bind(&mut manager, ViewId::History, "<C-x>", ActionType::Select);
    assert_eq!(
        manager.resolve(&[ViewId::History], &keys("<C-x>")),
        Resolution::matched(Binding::Action(ActionType::Select))
    );
}

#[test]
fn test_specific_view_beats_catch_all() {
    let mut manager = KeyBindingManager::new();
    bind(&mut manager, ViewId::Commit, "ab", ActionType::NextTab);
    bind(&mut manager, ViewId::All, "ab", ActionType::PrevTab);

    assert_eq!(
        manager.resolve(&[ViewId::Commit], &keys("ab")),
        Resolution::matched(Binding::Action(ActionType::NextTab))
    );
    assert_eq!(
        manager.resolve(&[ViewId::Ref], &keys("ab")),
        Resolution::matched(Binding::Action(ActionType::PrevTab))
    );
}

#[test]
fn test_exact_match_in_catch_all_overrides_pending_in_view() {
    let mut manager = KeyBindingManager::new();
    bind(&mut manager, ViewId::Commit, "gg", ActionType::FirstLine);
    bind(&mut manager, ViewId::All, "g", ActionType::LastLine);

    assert_eq!(
        manager.resolve(&[ViewId::Commit], &keys("g")),
        Resolution::matched(Binding::Action(ActionType::LastLine))
    );
}

#[test]
fn test_pure_pending() {
    let mut manager = KeyBindingManager::new();
    bind(&mut manager, ViewId::Commit, "gg", ActionType::FirstLine);

    assert_eq!(
        manager.resolve(&[ViewId::Commit], &keys("g")),
        Resolution::unmatched(true)
    );
    // Pending is scoped: other views see nothing
    assert_eq!(
        manager.resolve(&[ViewId::Ref], &keys("g")),
        Resolution::unmatched(false)
    );
}

#[test]
fn test_last_write_wins() {
    let mut manager = KeyBindingManager::new();
    bind(&mut manager, ViewId::All, "x", ActionType::NextTab);
    bind(&mut manager, ViewId::All, "x", ActionType::Exit);
    assert_eq!(
        manager.resolve(&[], &keys("x")).binding,
        Binding::Action(ActionType::Exit)
    );
}

#[test]
fn test_remap_resolves_to_remap_binding() {
    let mut manager = KeyBindingManager::new();
    manager
        .set_remap_binding(ViewId::Diff, &keys("x"), &keys("y"), BindingOrigin::User)
        .unwrap();
    assert_eq!(
        manager.resolve(&[ViewId::Diff], &keys("x")),
        Resolution::matched(Binding::Remap(keys("y")))
    );
}

#[test]
fn test_unbind_cleans_help_state() {
    let mut manager = KeyBindingManager::with_defaults();
    manager
        .set_remap_binding(ViewId::All, &keys("e"), &keys("<gv-next-line>"), BindingOrigin::User)
        .unwrap();
    assert!(manager.remove_binding(ViewId::All, &keys("e")));

    let listed: Vec<String> = manager
        .key_sequences(ActionType::NextLine, ViewId::All)
        .iter()
        .map(|b| b.keys().to_string())
        .collect();
    assert_eq!(listed, vec!["<Down>", "j"]);
}

#[test]
fn test_unbinding_unbound_pair_returns_false() {
    let mut manager = KeyBindingManager::with_defaults();
    let before = manager.index().len(ViewId::All);

    // "g" is only a prefix of the default "gg"
    assert!(!manager.remove_binding(ViewId::All, &keys("g")));
    assert!(!manager.remove_binding(ViewId::Main, &keys("zz")));

    assert_eq!(manager.index().len(ViewId::All), before);
    assert_eq!(
        manager.resolve(&[ViewId::Diff], &keys("gg")),
        Resolution::matched(Binding::Action(ActionType::FirstLine))
    );
    assert_eq!(
        manager.resolve(&[ViewId::Diff], &keys("g")),
        Resolution::unmatched(true)
    );
}

#[test]
fn test_remap_following_reaches_action_and_detects_cycles() {
    let mut manager = KeyBindingManager::with_defaults();
    manager
        .set_remap_binding(ViewId::All, &keys("e"), &keys("<gv-next-line>"), BindingOrigin::User)
        .unwrap();
    manager
        .set_remap_binding(ViewId::All, &keys("a"), &keys("b"), BindingOrigin::User)
        .unwrap();
    manager
        .set_remap_binding(ViewId::All, &keys("b"), &keys("a"), BindingOrigin::User)
        .unwrap();

    let followed = manager
        .resolve_remaps(&[ViewId::Diff], &keys("e"), gitview_keys::DEFAULT_MAX_REMAP_DEPTH)
        .unwrap();
    assert_eq!(followed.binding, Binding::Action(ActionType::NextLine));

    let err = manager
        .resolve_remaps(&[], &keys("a"), gitview_keys::DEFAULT_MAX_REMAP_DEPTH)
        .unwrap_err();
    assert!(matches!(err, KeymapError::RemapDepthExceeded { .. }));
}

#[test]
fn test_whitespace_keys_are_ordinary_tokens() {
    let mut manager = KeyBindingManager::new();
    bind(&mut manager, ViewId::All, " ", ActionType::NextPage);
    assert_eq!(
        manager.resolve(&[], &keys(" ")).binding,
        Binding::Action(ActionType::NextPage)
    );
}

#[test]
fn test_help_reflects_user_rebinding() {
    let mut manager = KeyBindingManager::with_defaults();
    manager
        .set_remap_binding(ViewId::All, &keys("<C-n>"), &keys("<gv-next-tab>"), BindingOrigin::User)
        .unwrap();

    let sections = help_sections(&manager);
    let row = sections
        .iter()
        .flat_map(|s| &s.rows)
        .find(|r| r.action_key == "<gv-next-tab>")
        .unwrap();
    assert_eq!(row.keys_text(), "gt, <C-n>*");
}
