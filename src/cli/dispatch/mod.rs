use crate::{
    auth::Provider,
    cli::{actions::Action, globals::GlobalArgs},
};
use anyhow::{anyhow, Context, Result};
use secrecy::SecretString;

/// Turns parsed arguments into the action to run and its global settings.
/// # Errors
/// Returns an error if required arguments are missing.
pub fn handler(matches: &clap::ArgMatches) -> Result<(Action, GlobalArgs)> {
    let auth_url = matches
        .get_one::<String>("auth-url")
        .cloned()
        .context("missing required argument: --auth-url")?;

    let mut globals = GlobalArgs::new(auth_url);
    globals.timeout_secs = matches.get_one::<u64>("timeout").copied().unwrap_or(0);
    if let Some(name) = matches.get_one::<String>("cookie-name") {
        globals.cookie_name.clone_from(name);
    }
    if let Some(token) = matches.get_one::<String>("session-cookie") {
        globals.set_session_cookie(SecretString::from(token.clone()));
    }
    globals.location = matches.get_one::<String>("location").cloned();

    let action = match matches.subcommand() {
        Some(("sign-in", sub_m)) => Action::SignIn {
            provider: sub_m
                .get_one::<Provider>("provider")
                .copied()
                .unwrap_or_default(),
            callback_url: sub_m.get_one::<String>("callback-url").cloned(),
        },
        Some(("session", _)) => Action::Session,
        Some(("status", _)) => Action::Status,
        Some(("sign-out", sub_m)) => Action::SignOut {
            redirect_to: sub_m.get_one::<String>("redirect-to").cloned(),
        },
        Some((other, _)) => return Err(anyhow!("unknown command: {other}")),
        None => return Err(anyhow!("missing command")),
    };

    Ok((action, globals))
}
