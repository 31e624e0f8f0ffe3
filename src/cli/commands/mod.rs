pub mod logging;
pub mod strategy;

use clap::{
    builder::styling::{AnsiColor, Effects, Styles},
    Arg, ColorChoice, Command,
};

pub const ARG_PORT: &str = "port";
pub const ARG_USERS: &str = "users";
pub const CMD_HASH: &str = "hash";

#[must_use]
pub fn new() -> Command {
    let styles = Styles::styled()
        .header(AnsiColor::Yellow.on_default() | Effects::BOLD)
        .usage(AnsiColor::Green.on_default() | Effects::BOLD)
        .literal(AnsiColor::Blue.on_default() | Effects::BOLD)
        .placeholder(AnsiColor::Green.on_default());

    let command = Command::new("pythia")
        .about("Username and password verification")
        .version(env!("CARGO_PKG_VERSION"))
        .color(ColorChoice::Auto)
        .styles(styles)
        .subcommand_negates_reqs(true)
        .arg(
            Arg::new(ARG_PORT)
                .short('p')
                .long(ARG_PORT)
                .help("Port to listen on")
                .default_value("8080")
                .env("PYTHIA_PORT")
                .value_parser(clap::value_parser!(u16)),
        )
        .arg(
            Arg::new(ARG_USERS)
                .short('u')
                .long(ARG_USERS)
                .help("JSON file with usernames and Argon2 password hashes")
                .env("PYTHIA_USERS")
                .required(true),
        )
        .subcommand(
            Command::new(CMD_HASH)
                .about("Read a password from stdin and print its Argon2id hash"),
        );

    let command = strategy::with_args(command);
    logging::with_args(command)
}
