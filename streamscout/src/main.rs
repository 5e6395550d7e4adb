use colored::Colorize;
use commands::command_argument_builder;

mod commands;
mod handlers;
mod logging;

#[tokio::main]
async fn main() {
    let cmd = command_argument_builder();
    let chosen_command = cmd.get_matches();
    let quiet = chosen_command.get_flag("quiet");

    // Show banner unless --quiet flag is set
    if !quiet {
        print_banner();
    }

    match chosen_command.subcommand() {
        Some(("discord", primary_command)) => {
            if let Err(e) = handlers::handle_discord(primary_command).await {
                eprintln!("{} {}", "✗".red().bold(), e);
                std::process::exit(1);
            }
        }
        None => {
            // No subcommand provided, just show the banner
        }
        _ => unreachable!("clap should ensure we don't get here"),
    }
}

fn print_banner() {
    println!();
    println!("{}", "  ⟫ streamscout".bright_cyan().bold());
    println!(
        "  {}\n",
        format!(
            "v{} - community invite discovery",
            env!("CARGO_PKG_VERSION")
        )
        .dimmed()
    );
}

pub const CLAP_STYLING: clap::builder::styling::Styles = clap::builder::styling::Styles::styled()
    .header(clap_cargo::style::HEADER)
    .usage(clap_cargo::style::USAGE)
    .literal(clap_cargo::style::LITERAL)
    .placeholder(clap_cargo::style::PLACEHOLDER)
    .error(clap_cargo::style::ERROR)
    .valid(clap_cargo::style::VALID)
    .invalid(clap_cargo::style::INVALID);
