use std::{io, path::Path, sync::Arc};

use crate::prelude::*;

/// The saved progress for `mode` at `path`, if there is work left in it.
fn resumable_state(path: Option<&Path>, mode: DispatchMode) -> Option<RunState> {
    let path = path?;
    match Checkpoint::load(path) {
        Ok(Some(checkpoint)) if checkpoint.is_resumable_for(mode) => {
            info!(
                "Resuming {mode} run from {}: {} of {} transfers remaining",
                path.display(),
                checkpoint.remaining(),
                checkpoint.total_count()
            );
            Some(RunState::resumed(&checkpoint))
        }
        Ok(Some(checkpoint)) => {
            debug!(
                "Checkpoint at {} is not resumable for {mode} ({} mode, {} remaining)",
                path.display(),
                checkpoint.mode(),
                checkpoint.remaining()
            );
            None
        }
        Ok(None) => None,
        Err(e) => {
            warn!("Ignoring checkpoint: {e}");
            None
        }
    }
}

fn announce_wallet(wallet: &DerivedWallet, reveal_seed: bool) {
    if *wallet.generated() {
        info!("Generated a new wallet");
    }
    info!("Wallet address: {}", wallet.signer().address());
    if reveal_seed {
        info!("Seed phrase: {}", wallet.phrase().expose());
    } else {
        warn!("Seed phrase withheld, pass --reveal-seed to display it");
    }
}

fn log_summary(state: &RunState) {
    info!(
        "{} submissions, {} transfers sent, {} failed units, {} remaining",
        state.submissions(),
        state.transfers_sent(),
        state.failed_units(),
        state.remaining()
    );
    if state.is_exhausted() {
        info!("All {} requested transfers sent", state.total_count());
    }
}

async fn run_minter(cli_args: CliArgs) -> Result<(), CliError> {
    let settings = RunSettings::try_from(cli_args)?;
    let mode = *settings.parameters.mode();
    let api = create_api(settings.node_url.clone()).await?;

    let phrase = prompt_seed_phrase(&mut io::stdin().lock(), &mut io::stdout())?;
    let wallet = derive_wallet(phrase.as_deref(), settings.scheme)?;
    announce_wallet(&wallet, settings.reveal_seed);
    let ledger = Arc::new(SubstrateLedger::new(api, wallet.signer().clone()));

    let state = match resumable_state(settings.parameters.checkpoint_path().as_deref(), mode) {
        Some(state) => state,
        None => {
            let count = match settings.count {
                Some(count) => count,
                None => prompt_count(&mut io::stdin().lock(), &mut io::stdout())?,
            };
            RunState::new(mode, count)
        }
    };

    let payload = settings.inscription.to_comment_payload()?;
    debug!("Comment payload: {payload}");

    let mut dispatcher = Dispatcher::builder()
        .ledger(Arc::clone(&ledger))
        .wallet(ledger)
        .parameters(settings.parameters)
        .payload(payload)
        .state(state)
        .build();
    let outcome = dispatcher.run().await;
    log_summary(dispatcher.state());
    outcome.map_err(CliError::from)
}

/// Runs the minter. Failing to connect or to derive the wallet ends the
/// process with status 1; any other error is logged and the process ends
/// normally.
pub async fn run(cli_args: CliArgs) {
    match run_minter(cli_args).await {
        Ok(_) => info!("{} ran successfully", BINARY_NAME),
        Err(e) if e.is_fatal() => {
            error!("Error running {}: {}", BINARY_NAME, e);
            std::process::exit(1);
        }
        Err(e) => error!("Error running {}: {}", BINARY_NAME, e),
    }
}
