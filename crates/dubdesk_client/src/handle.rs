use std::sync::{mpsc, Arc};
use std::thread;

use crate::gateway::{ClientSettings, Gateway, ReqwestGateway};
use crate::ClientEvent;

enum ClientCommand {
    Purge,
    Submit { fields: Vec<(String, String)> },
}

/// Channel front for the gateway: commands go to a dedicated runtime thread,
/// completion events come back on the receiver returned by [`ClientHandle::new`].
pub struct ClientHandle {
    cmd_tx: mpsc::Sender<ClientCommand>,
}

impl ClientHandle {
    pub fn new(settings: ClientSettings) -> (Self, mpsc::Receiver<ClientEvent>) {
        let (cmd_tx, cmd_rx) = mpsc::channel();
        let (event_tx, event_rx) = mpsc::channel();
        let gateway = Arc::new(ReqwestGateway::new(settings));

        thread::spawn(move || {
            let runtime = tokio::runtime::Runtime::new().expect("tokio runtime");
            while let Ok(command) = cmd_rx.recv() {
                let gateway = gateway.clone();
                let event_tx = event_tx.clone();
                runtime.spawn(async move {
                    handle_command(gateway.as_ref(), command, event_tx).await;
                });
            }
        });

        (Self { cmd_tx }, event_rx)
    }

    pub fn purge(&self) {
        let _ = self.cmd_tx.send(ClientCommand::Purge);
    }

    pub fn submit(&self, fields: Vec<(String, String)>) {
        let _ = self.cmd_tx.send(ClientCommand::Submit { fields });
    }
}

async fn handle_command(
    gateway: &dyn Gateway,
    command: ClientCommand,
    event_tx: mpsc::Sender<ClientEvent>,
) {
    match command {
        ClientCommand::Purge => {
            let result = gateway.purge().await;
            let _ = event_tx.send(ClientEvent::PurgeSettled(result));
        }
        ClientCommand::Submit { fields } => {
            let result = gateway.submit(&fields).await;
            let _ = event_tx.send(ClientEvent::SubmitSettled(result));
        }
    }
}
