use crate::strategy::{StrategyOptions, DEFAULT_PASSWORD_FIELD, DEFAULT_USERNAME_FIELD};
use clap::{Arg, ArgAction, ArgMatches, Command};

pub const ARG_USERNAME_FIELD: &str = "username-field";
pub const ARG_PASSWORD_FIELD: &str = "password-field";
pub const ARG_MASK_FAILURES: &str = "mask-failures";

#[must_use]
pub fn with_args(command: Command) -> Command {
    command
        .arg(
            Arg::new(ARG_USERNAME_FIELD)
                .long(ARG_USERNAME_FIELD)
                .help("Request field holding the username, bracket notation allowed")
                .env("PYTHIA_USERNAME_FIELD")
                .default_value(DEFAULT_USERNAME_FIELD),
        )
        .arg(
            Arg::new(ARG_PASSWORD_FIELD)
                .long(ARG_PASSWORD_FIELD)
                .help("Request field holding the password, bracket notation allowed")
                .env("PYTHIA_PASSWORD_FIELD")
                .default_value(DEFAULT_PASSWORD_FIELD),
        )
        .arg(
            Arg::new(ARG_MASK_FAILURES)
                .long(ARG_MASK_FAILURES)
                .help("Report unknown usernames and wrong passwords with the same message")
                .env("PYTHIA_MASK_FAILURES")
                .action(ArgAction::SetTrue),
        )
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Options {
    pub fields: StrategyOptions,
    pub mask_failures: bool,
}

impl Options {
    #[must_use]
    pub fn parse(matches: &ArgMatches) -> Self {
        let username_field = matches
            .get_one::<String>(ARG_USERNAME_FIELD)
            .cloned()
            .unwrap_or_default();
        let password_field = matches
            .get_one::<String>(ARG_PASSWORD_FIELD)
            .cloned()
            .unwrap_or_default();

        Self {
            fields: StrategyOptions::new(username_field, password_field),
            mask_failures: matches.get_flag(ARG_MASK_FAILURES),
        }
    }
}
