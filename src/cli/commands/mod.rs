use crate::{
    auth::Provider,
    config::{
        DEFAULT_AUTH_BASE_URL, DEFAULT_SESSION_COOKIE_NAME, ENV_AUTH_BASE_URL,
        ENV_AUTH_TIMEOUT_SECS, ENV_SESSION_COOKIE_NAME,
    },
};
use clap::{
    builder::{
        styling::{AnsiColor, Effects, Styles},
        ValueParser,
    },
    Arg, ArgAction, ColorChoice, Command,
};

pub fn validator_log_level() -> ValueParser {
    ValueParser::from(move |level: &str| -> std::result::Result<u8, String> {
        if let Ok(parsed) = level.parse::<u8>() {
            // Successfully parsed as a number
            if parsed <= 5 {
                return Ok(parsed);
            }
        }

        match level.to_lowercase().as_str() {
            "error" => Ok(0),
            "warn" => Ok(1),
            "info" => Ok(2),
            "debug" => Ok(3),
            "trace" => Ok(4),
            _ => Err("invalid log level".to_string()),
        }
    })
}

pub fn validator_provider() -> ValueParser {
    ValueParser::from(move |provider: &str| -> std::result::Result<Provider, String> {
        provider.parse::<Provider>()
    })
}

#[must_use]
pub fn new() -> Command {
    let styles = Styles::styled()
        .header(AnsiColor::Yellow.on_default() | Effects::BOLD)
        .usage(AnsiColor::Green.on_default() | Effects::BOLD)
        .literal(AnsiColor::Blue.on_default() | Effects::BOLD)
        .placeholder(AnsiColor::Green.on_default());

    let long_version: &'static str = Box::leak(
        format!("{} - {}", env!("CARGO_PKG_VERSION"), crate::GIT_COMMIT_HASH).into_boxed_str(),
    );

    Command::new("vineyard")
        .about("Grove session client")
        .version(env!("CARGO_PKG_VERSION"))
        .long_version(long_version)
        .color(ColorChoice::Auto)
        .styles(styles)
        .subcommand_required(true)
        .arg_required_else_help(true)
        .arg(
            Arg::new("auth-url")
                .long("auth-url")
                .help("Auth service origin")
                .default_value(DEFAULT_AUTH_BASE_URL)
                .env(ENV_AUTH_BASE_URL)
                .global(true),
        )
        .arg(
            Arg::new("timeout")
                .long("timeout")
                .help("Request timeout in seconds, 0 waits indefinitely")
                .default_value("0")
                .env(ENV_AUTH_TIMEOUT_SECS)
                .global(true)
                .value_parser(clap::value_parser!(u64)),
        )
        .arg(
            Arg::new("cookie-name")
                .long("cookie-name")
                .help("Name of the session cookie")
                .default_value(DEFAULT_SESSION_COOKIE_NAME)
                .env(ENV_SESSION_COOKIE_NAME)
                .global(true),
        )
        .arg(
            Arg::new("session-cookie")
                .long("session-cookie")
                .help("Session token sent with credentialed requests")
                .env("VINEYARD_SESSION_COOKIE")
                .hide_env_values(true)
                .global(true),
        )
        .arg(
            Arg::new("location")
                .long("location")
                .help("Current page URL, used as the default sign-in callback")
                .env("VINEYARD_LOCATION")
                .global(true),
        )
        .arg(
            Arg::new("log-json")
                .long("log-json")
                .help("Emit logs as JSON")
                .env("VINEYARD_LOG_JSON")
                .global(true)
                .action(ArgAction::SetTrue),
        )
        .arg(
            Arg::new("verbosity")
                .short('v')
                .long("verbose")
                .help("Verbosity level: ERROR, WARN, INFO, DEBUG, TRACE (default: ERROR)")
                .env("VINEYARD_LOG_LEVEL")
                .global(true)
                .action(ArgAction::Count)
                .value_parser(validator_log_level()),
        )
        .subcommand(
            Command::new("sign-in")
                .about("Navigate to the provider sign-in page")
                .arg(
                    Arg::new("provider")
                        .help("OAuth provider: google or github")
                        .default_value("google")
                        .value_parser(validator_provider()),
                )
                .arg(
                    Arg::new("callback-url")
                        .long("callback-url")
                        .help("Where to return after sign-in (default: --location)"),
                ),
        )
        .subcommand(Command::new("session").about("Print the current session as JSON"))
        .subcommand(Command::new("status").about("Report whether a user is signed in"))
        .subcommand(
            Command::new("sign-out")
                .about("End the session and navigate away")
                .arg(
                    Arg::new("redirect-to")
                        .long("redirect-to")
                        .help("Where to navigate after sign-out")
                        .default_value("/"),
                ),
        )
}
