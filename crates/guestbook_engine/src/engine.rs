use std::sync::{mpsc, Arc};
use std::thread;
use std::time::Duration;

use alloy_primitives::Address;
use engine_logging::engine_debug;

use crate::{
    AccountSlot, BatchCaller, ChainWriter, ChannelEventSink, Dispatcher, EngineEvent, EventSink,
    ProviderError, RpcBatchCaller, RpcChainWriter, RpcClient, RpcSettings, RpcWalletSession,
    SubmitRequest, WalletSession, GUESTBOOK_ADDRESS,
};

#[derive(Debug, Clone)]
pub struct EngineConfig {
    pub rpc: RpcSettings,
    pub contract: Address,
    pub receipt_poll_interval: Duration,
}

impl Default for EngineConfig {
    fn default() -> Self {
        Self {
            rpc: RpcSettings::default(),
            contract: GUESTBOOK_ADDRESS,
            receipt_poll_interval: Duration::from_secs(2),
        }
    }
}

/// The three wallet-side collaborators the engine drives.
#[derive(Clone)]
pub struct Providers {
    pub session: Arc<dyn WalletSession>,
    pub writer: Arc<dyn ChainWriter>,
    pub batcher: Arc<dyn BatchCaller>,
}

impl Providers {
    /// All three providers over one JSON-RPC endpoint, sharing the connected account.
    pub fn over_rpc(config: &EngineConfig) -> Result<Self, ProviderError> {
        let client = Arc::new(RpcClient::new(&config.rpc)?);
        let account = AccountSlot::default();
        Ok(Self {
            session: Arc::new(RpcWalletSession::new(client.clone(), account.clone())),
            writer: Arc::new(RpcChainWriter::new(
                client.clone(),
                account.clone(),
                config.receipt_poll_interval,
            )),
            batcher: Arc::new(RpcBatchCaller::new(client, account)),
        })
    }
}

enum EngineCommand {
    Connect,
    Disconnect,
    WriteContract(SubmitRequest),
    SendCalls(SubmitRequest),
}

pub struct EngineHandle {
    cmd_tx: mpsc::Sender<EngineCommand>,
    event_rx: mpsc::Receiver<EngineEvent>,
}

impl EngineHandle {
    pub fn new(config: EngineConfig) -> Result<Self, ProviderError> {
        let providers = Providers::over_rpc(&config)?;
        Ok(Self::with_providers(config.contract, providers))
    }

    pub fn with_providers(contract: Address, providers: Providers) -> Self {
        let (cmd_tx, cmd_rx) = mpsc::channel();
        let (event_tx, event_rx) = mpsc::channel();
        let dispatcher = Arc::new(Dispatcher::new(
            contract,
            providers.writer,
            providers.batcher,
        ));
        let session = providers.session;

        thread::spawn(move || {
            let runtime = tokio::runtime::Runtime::new().expect("tokio runtime");
            while let Ok(command) = cmd_rx.recv() {
                let dispatcher = dispatcher.clone();
                let session = session.clone();
                let sink = ChannelEventSink::new(event_tx.clone());
                runtime.spawn(async move {
                    handle_command(dispatcher.as_ref(), session.as_ref(), command, &sink).await;
                });
            }
            engine_debug!("engine command channel closed");
        });

        Self { cmd_tx, event_rx }
    }

    pub fn connect(&self) {
        let _ = self.cmd_tx.send(EngineCommand::Connect);
    }

    pub fn disconnect(&self) {
        let _ = self.cmd_tx.send(EngineCommand::Disconnect);
    }

    pub fn write_contract(&self, request: SubmitRequest) {
        let _ = self.cmd_tx.send(EngineCommand::WriteContract(request));
    }

    pub fn send_calls(&self, request: SubmitRequest) {
        let _ = self.cmd_tx.send(EngineCommand::SendCalls(request));
    }

    pub fn try_recv(&self) -> Option<EngineEvent> {
        self.event_rx.try_recv().ok()
    }

    pub fn recv_timeout(&self, timeout: Duration) -> Option<EngineEvent> {
        self.event_rx.recv_timeout(timeout).ok()
    }
}

async fn handle_command(
    dispatcher: &Dispatcher,
    session: &dyn WalletSession,
    command: EngineCommand,
    sink: &ChannelEventSink,
) {
    match command {
        EngineCommand::Connect => {
            let event = match session.connect().await {
                Ok(info) => EngineEvent::SessionConnected(info),
                Err(error) => EngineEvent::SessionFailed(error),
            };
            sink.emit(event);
        }
        EngineCommand::Disconnect => session.disconnect(),
        EngineCommand::WriteContract(request) => dispatcher.submit_direct(request, sink).await,
        EngineCommand::SendCalls(request) => dispatcher.submit_batched(request, sink).await,
    }
}
