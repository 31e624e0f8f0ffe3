//! Map parsed CLI arguments to an [`Action`].

use crate::cli::actions::{server::Args, Action};
use crate::cli::commands::{strategy, ARG_PORT, ARG_USERS, CMD_HASH};
use anyhow::{Context, Result};

/// Map validated CLI matches to an action.
///
/// # Errors
/// Returns an error if required arguments are missing.
pub fn handler(matches: &clap::ArgMatches) -> Result<Action> {
    if matches.subcommand_name() == Some(CMD_HASH) {
        return Ok(Action::Hash);
    }

    let port = matches.get_one::<u16>(ARG_PORT).copied().unwrap_or(8080);
    let users = matches
        .get_one::<String>(ARG_USERS)
        .cloned()
        .context("missing required argument: --users")?;

    let strategy_opts = strategy::Options::parse(matches);

    Ok(Action::Server(Args {
        port,
        users,
        fields: strategy_opts.fields,
        mask_failures: strategy_opts.mask_failures,
    }))
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::cli::commands;

    #[test]
    fn server_action_from_args() {
        temp_env::with_vars(
            [
                ("PYTHIA_PORT", None::<&str>),
                ("PYTHIA_USERNAME_FIELD", None),
                ("PYTHIA_PASSWORD_FIELD", None),
                ("PYTHIA_MASK_FAILURES", None),
            ],
            || {
                let matches = commands::new().get_matches_from(vec![
                    "pythia",
                    "--users",
                    "/tmp/users.json",
                    "--username-field",
                    "email",
                    "--mask-failures",
                ]);

                match handler(&matches) {
                    Ok(Action::Server(args)) => {
                        assert_eq!(args.port, 8080);
                        assert_eq!(args.users, "/tmp/users.json");
                        assert_eq!(args.fields.username_field(), "email");
                        assert_eq!(args.fields.password_field(), "password");
                        assert!(args.mask_failures);
                    }
                    other => panic!("expected server action, got {other:?}"),
                }
            },
        );
    }

    #[test]
    fn hash_action_from_subcommand() {
        let matches = commands::new().get_matches_from(vec!["pythia", "hash"]);
        assert!(matches!(handler(&matches), Ok(Action::Hash)));
    }
}
