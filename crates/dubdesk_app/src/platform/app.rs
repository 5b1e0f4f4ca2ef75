//! Shell event loop: reads console commands, feeds messages through the pure
//! controller, executes the requested effects and prints dirty frames.

use std::io::{self, BufRead};
use std::path::Path;
use std::sync::mpsc;
use std::thread;

use desk_logging::{desk_error, desk_info};
use dubdesk_client::ClientSettings;
use dubdesk_core::{update, AppState, FormField, Msg};

use super::effects::EffectRunner;
use super::ui;
use super::{config, logging};

/// One unit of work for the shell loop: either a controller message or a
/// request to leave the console.
#[derive(Debug)]
pub(crate) enum Input {
    Core(Msg),
    Quit,
}

pub fn run_app() -> anyhow::Result<()> {
    logging::initialize(logging::LogDestination::File);

    let config = config::load(Path::new(config::CONFIG_FILENAME));
    desk_info!("dubdesk console starting base_url={}", config.base_url);

    let settings = ClientSettings {
        base_url: config.base_url,
        purge_path: config.purge_path,
        submit_path: config.submit_path,
        ..ClientSettings::default()
    };

    let (input_tx, input_rx) = mpsc::channel::<Input>();
    let mut runner = EffectRunner::new(input_tx.clone(), settings);
    spawn_stdin_reader(input_tx);

    println!("{}", ui::constants::HELP);

    let mut state = AppState::new();
    while let Ok(input) = input_rx.recv() {
        let msg = match input {
            Input::Quit => break,
            Input::Core(msg) => msg,
        };

        let (next, effects) = update(std::mem::take(&mut state), msg);
        state = next;
        runner.enqueue(effects);

        if state.consume_dirty() {
            for line in ui::render::render(&state.view()) {
                println!("{line}");
            }
        }

        if state.page_replaced() {
            // The document is gone; the console session ends with it.
            break;
        }
    }

    desk_info!("dubdesk console exiting");
    Ok(())
}

/// Feeds console lines into the shell loop; EOF quits like a window close.
fn spawn_stdin_reader(input_tx: mpsc::Sender<Input>) {
    thread::spawn(move || {
        let stdin = io::stdin();
        for line in stdin.lock().lines() {
            let line = match line {
                Ok(line) => line,
                Err(err) => {
                    desk_error!("stdin read failed: {}", err);
                    break;
                }
            };
            match parse_command(line.trim()) {
                Some(input) => {
                    if input_tx.send(input).is_err() {
                        return;
                    }
                }
                None => println!("{}", ui::constants::HELP),
            }
        }
        let _ = input_tx.send(Input::Quit);
    });
}

/// Maps one console line to shell input; `None` means "show usage".
fn parse_command(line: &str) -> Option<Input> {
    let (command, rest) = match line.split_once(char::is_whitespace) {
        Some((command, rest)) => (command, rest.trim()),
        None => (line, ""),
    };
    match command {
        "purge" => Some(Input::Core(Msg::PurgeClicked)),
        "submit" => Some(Input::Core(Msg::FormSubmitted {
            fields: vec![FormField {
                name: ui::constants::FIELD_YOUTUBE_URL.to_string(),
                value: rest.to_string(),
            }],
        })),
        "quit" | "exit" => Some(Input::Quit),
        _ => None,
    }
}
