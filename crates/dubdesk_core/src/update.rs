use crate::{
    AppState, CallResult, Effect, Msg, ToastTone, PURGE_ERROR_PREFIX, TICK_INTERVAL,
    TOAST_HIDE_DELAY,
};

/// Pure update function: applies a message to state and returns any effects.
pub fn update(mut state: AppState, msg: Msg) -> (AppState, Vec<Effect>) {
    // A replaced document has no listeners left; every message is stale.
    if state.page_replaced() {
        return (state, Vec::new());
    }

    let effects = match msg {
        Msg::PurgeClicked => {
            // Without a purge button nothing was wired; while busy the
            // control is disabled, so a click cannot re-enter.
            if !state.chrome().purge_button || state.purge_busy() {
                return (state, Vec::new());
            }
            state.begin_purge();
            vec![Effect::SendPurge]
        }
        Msg::PurgeSettled { result } => {
            if !state.purge_busy() {
                return (state, Vec::new());
            }
            // Re-enabling the control is unconditional; the toast display
            // may still be a no-op on a page without a toast region.
            state.settle_purge();
            let (message, tone) = match result {
                CallResult::Completed(body) => (body, ToastTone::Success),
                CallResult::TransportFailed(describe) => {
                    (format!("{PURGE_ERROR_PREFIX}{describe}"), ToastTone::Error)
                }
            };
            show_toast(&mut state, message, tone)
        }
        Msg::FormSubmitted { fields } => {
            if state.submitting() {
                return (state, Vec::new());
            }
            // Panel and log mutations happen before the call is issued.
            state.begin_submission();
            vec![
                Effect::StartTicker {
                    every: TICK_INTERVAL,
                },
                Effect::SubmitForm { fields },
            ]
        }
        Msg::ProgressTick => {
            if !state.ticker_running() {
                return (state, Vec::new());
            }
            if state.advance_step() {
                vec![Effect::StopTicker]
            } else {
                Vec::new()
            }
        }
        Msg::SubmitSettled { result } => {
            if !state.submitting() {
                return (state, Vec::new());
            }
            // Cancel the animation first; a no-op if it already ran out.
            let mut effects = Vec::new();
            if state.halt_ticker() {
                effects.push(Effect::StopTicker);
            }
            match result {
                CallResult::Completed(page) => state.finish_submission(page),
                CallResult::TransportFailed(describe) => state.fail_submission(&describe),
            }
            effects
        }
        Msg::ToastDeadline { generation } => {
            state.hide_toast(generation);
            Vec::new()
        }
        Msg::NoOp => Vec::new(),
    };

    (state, effects)
}

fn show_toast(state: &mut AppState, message: String, tone: ToastTone) -> Vec<Effect> {
    match state.show_toast(message, tone) {
        Some(generation) => vec![Effect::ScheduleToastHide {
            generation,
            after: TOAST_HIDE_DELAY,
        }],
        None => Vec::new(),
    }
}
