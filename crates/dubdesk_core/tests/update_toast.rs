use dubdesk_core::{update, AppState, CallResult, Effect, Msg, TOAST_HIDE_DELAY};

fn settled_purge(state: AppState, body: &str) -> (AppState, Vec<Effect>) {
    let (state, _) = update(state, Msg::PurgeClicked);
    update(
        state,
        Msg::PurgeSettled {
            result: CallResult::Completed(body.to_string()),
        },
    )
}

fn hide_generation(effects: &[Effect]) -> u64 {
    effects
        .iter()
        .find_map(|effect| match effect {
            Effect::ScheduleToastHide { generation, .. } => Some(*generation),
            _ => None,
        })
        .expect("hide effect")
}

#[test]
fn toast_hides_when_its_deadline_fires() {
    let (state, effects) = settled_purge(AppState::new(), "done");
    let generation = hide_generation(&effects);
    assert_eq!(
        effects,
        vec![Effect::ScheduleToastHide {
            generation,
            after: TOAST_HIDE_DELAY,
        }]
    );

    // Visible until the deadline message actually arrives.
    assert!(state.view().toast.is_some());

    let (mut state, effects) = update(state, Msg::ToastDeadline { generation });
    assert!(effects.is_empty());
    assert!(state.view().toast.is_none());
    assert!(state.consume_dirty());
}

#[test]
fn stale_deadline_cannot_hide_a_newer_toast() {
    let (state, first_effects) = settled_purge(AppState::new(), "first");
    let first = hide_generation(&first_effects);

    let (state, second_effects) = settled_purge(state, "second");
    let second = hide_generation(&second_effects);
    assert!(second > first);
    assert_eq!(state.view().toast.as_ref().expect("toast").message, "second");

    // The older timer fires after the overwrite; the newer toast survives it.
    let (state, _) = update(state, Msg::ToastDeadline { generation: first });
    assert_eq!(state.view().toast.as_ref().expect("toast").message, "second");

    let (state, _) = update(state, Msg::ToastDeadline { generation: second });
    assert!(state.view().toast.is_none());
}

#[test]
fn deadline_for_an_already_hidden_toast_is_ignored() {
    let (state, effects) = settled_purge(AppState::new(), "done");
    let generation = hide_generation(&effects);

    let (mut state, _) = update(state, Msg::ToastDeadline { generation });
    state.consume_dirty();

    let (mut next, effects) = update(state.clone(), Msg::ToastDeadline { generation });
    assert_eq!(state, next);
    assert!(effects.is_empty());
    assert!(!next.consume_dirty());
}
