use anyhow::{bail, Result};
use clap::ArgMatches;
use colored::Colorize;
use indicatif::{ProgressBar, ProgressStyle};
use serde_json::json;
use std::path::PathBuf;
use std::time::Duration;
use streamscout_scanner::{InviteResolver, InviteSource, PageFetcher, ResolvedInvite};
use tracing::info;
use url::Url;

/// Report rendering for resolved invites.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ReportFormat {
    Text,
    Json,
}

impl ReportFormat {
    pub fn from_str(s: &str) -> Option<Self> {
        match s.to_lowercase().as_str() {
            "text" => Some(ReportFormat::Text),
            "json" => Some(ReportFormat::Json),
            _ => None,
        }
    }
}

/// Extract the channel name from user input: a plain name, an `@handle`,
/// or a full channel URL.
pub fn channel_from_input(input: &str) -> Result<String, String> {
    let trimmed = input.trim().trim_start_matches('@');
    if trimmed.is_empty() {
        return Err("channel name must not be empty".to_string());
    }

    if let Ok(url) = Url::parse(trimmed)
        && url.has_host()
    {
        return match url
            .path_segments()
            .and_then(|mut segments| segments.find(|s| !s.is_empty()))
        {
            Some(segment) => Ok(segment.to_string()),
            None => Err(format!("no channel name in URL '{}'", trimmed)),
        };
    }

    Ok(trimmed.to_string())
}

/// Render the resolution outcome for the terminal or for machine consumers.
pub fn format_invite_report(
    channel: &str,
    invite: Option<&ResolvedInvite>,
    format: ReportFormat,
) -> String {
    match format {
        ReportFormat::Json => {
            let report = json!({
                "channel": channel,
                "invite": invite,
            });
            serde_json::to_string_pretty(&report).unwrap()
        }
        ReportFormat::Text => match invite {
            Some(invite) => {
                let via = match invite.source {
                    InviteSource::ChannelPage => "found on the channel page",
                    InviteSource::FallbackProbe => "confirmed by the fallback probe",
                };
                format!("Invite link for {}: {} ({})", channel, invite.url, via)
            }
            None => format!("No community invite could be found for '{}'", channel),
        },
    }
}

pub async fn handle_discord(args: &ArgMatches) -> Result<()> {
    let channel_input = args.get_one::<String>("channel").unwrap();
    let timeout = *args.get_one::<u64>("timeout").unwrap_or(&10);
    let format = args
        .get_one::<String>("format")
        .and_then(|s| ReportFormat::from_str(s))
        .unwrap_or(ReportFormat::Text);
    let log_path = args.get_one::<PathBuf>("log-file").unwrap();

    crate::logging::init(log_path);

    let channel = match channel_from_input(channel_input) {
        Ok(channel) => channel,
        Err(e) => bail!(e),
    };

    info!("resolving community invite for channel '{}'", channel);

    let spinner = ProgressBar::new_spinner();
    spinner.set_style(
        ProgressStyle::default_spinner()
            .template("{spinner:.cyan} {msg}")
            .unwrap(),
    );
    spinner.enable_steady_tick(Duration::from_millis(100));
    spinner.set_message(format!("Fetching channel page for {}...", channel));

    let fetcher = PageFetcher::with_timeout(timeout);
    let page = match fetcher.fetch(&channel).await {
        Ok(page) => page,
        Err(e) => {
            spinner.finish_and_clear();
            return Err(e.into());
        }
    };

    spinner.set_message("Searching for a community invite...");

    let resolver = InviteResolver::with_timeout(timeout);
    let invite = resolver.resolve(&page, &channel).await;

    spinner.finish_and_clear();

    let report = format_invite_report(&channel, invite.as_ref(), format);
    match format {
        ReportFormat::Json => println!("{}", report),
        ReportFormat::Text => {
            let glyph = if invite.is_some() {
                "✓".green().bold()
            } else {
                "✗".red().bold()
            };
            println!("{} {}", glyph, report);
        }
    }

    Ok(())
}
