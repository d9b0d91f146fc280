use clap::Subcommand;

#[derive(Subcommand)]
pub(crate) enum Commands {
    /// Show this device's identity and cached profile
    Whoami,

    /// Check whether a name is free for this device
    CheckName {
        /// Display name to check
        name: String,
    },

    /// Bind a name and class to this device's identity (one time only)
    Sync {
        #[arg(long)]
        name: String,

        #[arg(long)]
        class: String,
    },

    /// Fetch the registry's profile for this identity
    Refresh,

    /// Bring the cached profile in line with the registry
    Reconcile,

    /// Print this device's identity token for transcription
    Export,

    /// Adopt an identity token exported from another device
    Import {
        /// Token as printed by `campus export`
        token: String,
    },

    /// Discard this identity and start over with a new one
    Reset,

    /// Remove the identity and cached profile from this device
    Clear,
}
