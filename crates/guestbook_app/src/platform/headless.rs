//! One-shot commands that run without the terminal UI.

use std::time::Duration;

use alloy_primitives::hex;
use anyhow::{bail, Context};
use engine_logging::engine_debug;
use guestbook_core::{BatchStatus, DirectStatus, Msg, SessionState, SubmitPath};
use guestbook_engine::{data_suffix, Attribution, EngineHandle, ATTRIBUTION_CODES};

use super::controller::Controller;
use super::effects::EffectRunner;
use crate::config::AppConfig;

const POLL: Duration = Duration::from_millis(100);

/// Connects, submits `message` on `path` and waits for that path to finish.
///
/// The direct path finishes on confirmation, the batched path on acknowledgment.
pub fn run_sign(
    config: &AppConfig,
    path: SubmitPath,
    with_attribution: bool,
    message: String,
) -> anyhow::Result<()> {
    let engine = EngineHandle::new(config.engine_config()?).context("failed to set up RPC client")?;
    let mut controller = Controller::new(EffectRunner::new(engine));

    controller.dispatch(Msg::ConnectClicked);
    while matches!(controller.state().session(), SessionState::Connecting) {
        controller.wait_engine(POLL);
    }
    match controller.state().session() {
        SessionState::Connected(session) => {
            println!("Connected {} (chain {})", session.account, session.chain_id);
        }
        SessionState::Failed { message } => bail!("{message}"),
        SessionState::Disconnected | SessionState::Connecting => bail!("wallet not connected"),
    }

    controller.dispatch(Msg::MessageChanged(message));
    if controller.dispatch(Msg::SubmitClicked {
        path,
        with_attribution,
    }) == 0
    {
        bail!("message is empty; nothing submitted");
    }
    let method = controller
        .state()
        .last_action()
        .map(|action| action.label())
        .unwrap_or_default();

    let mut announced = false;
    loop {
        if !controller.wait_engine(POLL) {
            continue;
        }
        match path {
            SubmitPath::DirectTransaction => match controller.state().direct_status() {
                DirectStatus::Confirming { hash } if !announced => {
                    println!("Transaction sent: {hash}, waiting for confirmation");
                    announced = true;
                }
                DirectStatus::Confirmed { hash } => {
                    println!("Transaction successful!");
                    println!("Method: {method}");
                    println!("{}", config.transaction_url(hash));
                    return Ok(());
                }
                DirectStatus::Failed { message } => bail!("{message}"),
                other => engine_debug!("direct path status {:?}", other),
            },
            SubmitPath::BatchedCall => match controller.state().batch_status() {
                BatchStatus::Accepted { batch_id } => {
                    println!("Batch call submitted!");
                    println!("Method: {method}");
                    println!("Call ID: {batch_id}");
                    return Ok(());
                }
                BatchStatus::Failed { message } => bail!("{message}"),
                other => engine_debug!("batch path status {:?}", other),
            },
        }
    }
}

pub fn print_attribution() {
    println!("Codes: {}", ATTRIBUTION_CODES.join(","));
    println!("Data suffix: 0x{}", hex::encode(data_suffix()));
    if let Some(parsed) = Attribution::from_data(data_suffix()) {
        println!("Decoded codes: {:?}", parsed.codes());
    }
}
