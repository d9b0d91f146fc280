use crate::commands::Commands;

use cs_client::{IdentityCore, ImportError, ReconcileOutcome, StoreError, SyncError};

use serde_json::{Value, json};
use thiserror::Error;

#[derive(Debug, Error)]
pub(crate) enum CommandError {
    #[error(transparent)]
    Sync(#[from] SyncError),

    #[error(transparent)]
    Import(#[from] ImportError),

    #[error(transparent)]
    Store(#[from] StoreError),

    #[error(transparent)]
    Json(#[from] serde_json::Error),
}

pub(crate) type CommandResult = Result<Value, CommandError>;

pub(crate) async fn execute(core: &IdentityCore, command: Commands) -> CommandResult {
    match command {
        Commands::Whoami => {
            core.provisioner().get_or_create();
            Ok(serde_json::to_value(core.status())?)
        }

        Commands::CheckName { name } => {
            let availability = core.sync_client().check_name(&name).await?;
            Ok(serde_json::to_value(availability)?)
        }

        Commands::Sync { name, class } => {
            let identity = core.provisioner().get_or_create();
            let profile = core.sync_client().sync(&identity, &name, &class).await?;
            Ok(serde_json::to_value(profile)?)
        }

        Commands::Refresh => {
            let identity = core.provisioner().get_or_create();
            let profile = core.sync_client().fetch_remote_profile(&identity).await?;
            Ok(serde_json::to_value(profile)?)
        }

        Commands::Reconcile => {
            let outcome = core.sync_client().reconcile().await;
            Ok(reconcile_json(&outcome))
        }

        Commands::Export => Ok(json!({ "identity": core.bridge().export_current() })),

        Commands::Import { token } => {
            let profile = core.bridge().import(&token).await?;
            Ok(serde_json::to_value(profile)?)
        }

        Commands::Reset => {
            let identity = core.reset()?;
            Ok(json!({ "identity": identity }))
        }

        Commands::Clear => {
            core.clear()?;
            Ok(json!({ "cleared": true }))
        }
    }
}

fn reconcile_json(outcome: &ReconcileOutcome) -> Value {
    let mut value = json!({ "outcome": outcome.as_str() });

    if let Some(profile) = outcome.profile() {
        value["profile"] = json!(profile);
    }
    if let ReconcileOutcome::Unreachable(e) = outcome {
        value["error"] = json!({ "kind": e.kind(), "message": e.to_string() });
    }

    value
}
