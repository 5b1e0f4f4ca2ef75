//! Executes the effects requested by the controller.
//!
//! Network calls go through the client handle, timers run on plain threads
//! that feed messages back into the shell channel. Timer threads never try
//! to be clever about cancellation of the toast deadline; the controller
//! filters stale generations itself.

use std::sync::atomic::{AtomicBool, Ordering};
use std::sync::{mpsc, Arc};
use std::thread;
use std::time::Duration;

use desk_logging::{desk_info, desk_warn};
use dubdesk_client::{CallError, ClientEvent, ClientHandle, ClientSettings};
use dubdesk_core::{CallResult, Effect, Msg};

use super::app::Input;

pub(crate) struct EffectRunner {
    client: ClientHandle,
    ticker: Ticker,
    input_tx: mpsc::Sender<Input>,
}

impl EffectRunner {
    pub(crate) fn new(input_tx: mpsc::Sender<Input>, settings: ClientSettings) -> Self {
        let (client, events) = ClientHandle::new(settings);
        spawn_event_bridge(events, input_tx.clone());
        Self {
            client,
            ticker: Ticker::default(),
            input_tx,
        }
    }

    pub(crate) fn enqueue(&mut self, effects: Vec<Effect>) {
        for effect in effects {
            match effect {
                Effect::SendPurge => {
                    desk_info!("purge requested");
                    self.client.purge();
                }
                Effect::SubmitForm { fields } => {
                    desk_info!("submission requested field_count={}", fields.len());
                    let fields = fields
                        .into_iter()
                        .map(|field| (field.name, field.value))
                        .collect();
                    self.client.submit(fields);
                }
                Effect::StartTicker { every } => {
                    self.ticker.start(every, self.input_tx.clone());
                }
                Effect::StopTicker => self.ticker.stop(),
                Effect::ScheduleToastHide { generation, after } => {
                    schedule_toast_hide(self.input_tx.clone(), generation, after);
                }
            }
        }
    }
}

/// Forwards settled network calls from the client back into the shell loop.
fn spawn_event_bridge(events: mpsc::Receiver<ClientEvent>, input_tx: mpsc::Sender<Input>) {
    thread::spawn(move || {
        for event in events.iter() {
            let msg = match event {
                ClientEvent::PurgeSettled(result) => Msg::PurgeSettled {
                    result: into_call_result(result),
                },
                ClientEvent::SubmitSettled(result) => Msg::SubmitSettled {
                    result: into_call_result(result),
                },
            };
            if input_tx.send(Input::Core(msg)).is_err() {
                break;
            }
        }
    });
}

fn into_call_result(result: Result<String, CallError>) -> CallResult {
    match result {
        Ok(body) => CallResult::Completed(body),
        Err(err) => {
            desk_warn!("call failed: {}", err);
            CallResult::TransportFailed(err.to_string())
        }
    }
}

fn schedule_toast_hide(input_tx: mpsc::Sender<Input>, generation: u64, after: Duration) {
    thread::spawn(move || {
        thread::sleep(after);
        let _ = input_tx.send(Input::Core(Msg::ToastDeadline { generation }));
    });
}

/// Repeating tick source backed by a thread and a stop flag.
///
/// Starting replaces any earlier ticker, stopping twice is harmless.
#[derive(Default)]
pub(crate) struct Ticker {
    stop: Option<Arc<AtomicBool>>,
}

impl Ticker {
    pub(crate) fn start(&mut self, every: Duration, input_tx: mpsc::Sender<Input>) {
        self.stop();
        let flag = Arc::new(AtomicBool::new(false));
        let stop = flag.clone();
        thread::spawn(move || loop {
            thread::sleep(every);
            if stop.load(Ordering::Relaxed) {
                break;
            }
            if input_tx.send(Input::Core(Msg::ProgressTick)).is_err() {
                break;
            }
        });
        self.stop = Some(flag);
    }

    pub(crate) fn stop(&mut self) {
        if let Some(flag) = self.stop.take() {
            flag.store(true, Ordering::Relaxed);
        }
    }
}
