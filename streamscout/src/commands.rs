use crate::CLAP_STYLING;
use clap::{arg, command};

pub(crate) fn command_argument_builder() -> clap::Command {
    clap::Command::new("streamscout")
        .version(env!("CARGO_PKG_VERSION"))
        .bin_name("streamscout")
        .styles(CLAP_STYLING)
        .arg(arg!(-q --"quiet" "Suppress banner and non-essential output").required(false))
        .subcommand_required(false)
        .subcommand(
            command!("discord")
                .about(
                    "Find the Discord community invite for a channel. Scans the channel's \
                landing page for an invite link and falls back to probing the conventional \
                invite URL.",
                )
                .arg(
                    arg!(-c --"channel" <CHANNEL>)
                        .required(true)
                        .help("The channel to scan: a name, an @handle, or a full channel URL"),
                )
                .arg(
                    arg!(--"timeout" <SECONDS>)
                        .required(false)
                        .help("Request timeout in seconds")
                        .value_parser(clap::value_parser!(u64))
                        .default_value("10"),
                )
                .arg(
                    arg!(-f --"format" <FORMAT>)
                        .required(false)
                        .help("Report format: text, json")
                        .value_parser(["text", "json"])
                        .default_value("text"),
                )
                .arg(
                    arg!(--"log-file" <PATH>)
                        .required(false)
                        .help("Where to write the diagnostics log")
                        .value_parser(clap::value_parser!(std::path::PathBuf))
                        .default_value("report.log"),
                ),
        )
}
