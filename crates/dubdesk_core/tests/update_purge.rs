use dubdesk_core::{
    update, AppState, CallResult, Effect, Msg, PageChrome, ToastTone, TOAST_HIDE_DELAY,
};

fn click_purge(state: AppState) -> (AppState, Vec<Effect>) {
    update(state, Msg::PurgeClicked)
}

#[test]
fn purge_click_disables_control_and_sends_request() {
    let (mut state, effects) = click_purge(AppState::new());

    assert_eq!(effects, vec![Effect::SendPurge]);
    let view = state.view();
    assert!(!view.purge_button.expect("button present").enabled);
    assert!(state.consume_dirty());
}

#[test]
fn purge_click_while_busy_is_ignored() {
    let (state, _) = click_purge(AppState::new());

    let (next, effects) = update(state.clone(), Msg::PurgeClicked);
    assert_eq!(state, next);
    assert!(effects.is_empty());
}

#[test]
fn purge_success_shows_response_text_and_reenables_control() {
    let (state, _) = click_purge(AppState::new());

    let (mut state, effects) = update(
        state,
        Msg::PurgeSettled {
            result: CallResult::Completed("12 files removed".to_string()),
        },
    );
    assert_eq!(
        effects,
        vec![Effect::ScheduleToastHide {
            generation: 1,
            after: TOAST_HIDE_DELAY,
        }]
    );

    let view = state.view();
    let toast = view.toast.expect("toast shown");
    assert_eq!(toast.message, "12 files removed");
    assert_eq!(toast.tone, ToastTone::Success);
    assert!(view.purge_button.expect("button present").enabled);
    assert!(state.consume_dirty());
}

#[test]
fn purge_transport_failure_shows_prefixed_error_toast() {
    let (state, _) = click_purge(AppState::new());

    let (mut state, _effects) = update(
        state,
        Msg::PurgeSettled {
            result: CallResult::TransportFailed("timeout".to_string()),
        },
    );

    let view = state.view();
    let toast = view.toast.expect("toast shown");
    assert_eq!(toast.message, "Erreur purge: timeout");
    assert_eq!(toast.tone, ToastTone::Error);
    assert!(view.purge_button.expect("button present").enabled);
    assert!(state.consume_dirty());
}

#[test]
fn missing_purge_button_means_no_wiring() {
    let state = AppState::with_chrome(PageChrome {
        purge_button: false,
        toast: false,
    });

    let (next, effects) = update(state.clone(), Msg::PurgeClicked);
    assert_eq!(state, next);
    assert!(effects.is_empty());
    assert!(next.view().purge_button.is_none());
}

#[test]
fn purge_without_toast_region_still_reenables_control() {
    let chrome = PageChrome {
        purge_button: true,
        toast: false,
    };
    let (state, _) = click_purge(AppState::with_chrome(chrome));

    let (mut state, effects) = update(
        state,
        Msg::PurgeSettled {
            result: CallResult::Completed("ok".to_string()),
        },
    );

    assert!(effects.is_empty());
    let view = state.view();
    assert!(view.toast.is_none());
    assert!(view.purge_button.expect("button present").enabled);
    assert!(state.consume_dirty());
}

#[test]
fn settle_without_pending_purge_is_ignored() {
    let state = AppState::new();

    let (next, effects) = update(
        state.clone(),
        Msg::PurgeSettled {
            result: CallResult::Completed("late".to_string()),
        },
    );
    assert_eq!(state, next);
    assert!(effects.is_empty());
}
