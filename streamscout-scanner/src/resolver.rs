use crate::fetcher::{http_client, DEFAULT_TIMEOUT_SECS};
use crate::page::ChannelPage;
use reqwest::Client;
use serde::{Deserialize, Serialize};
use tracing::{debug, info, warn};

/// Conventional invite origin used for the fallback guess.
pub const INVITE_URL_BASE: &str = "https://discord.gg";

/// Substring that marks a hyperlink target as a community invite.
const INVITE_MARKER: &str = "discord";

/// How a resolved invite was determined.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum InviteSource {
    /// The link was present on the channel page itself.
    ChannelPage,
    /// Nothing on the page matched; the conventional invite URL answered
    /// the existence probe.
    FallbackProbe,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ResolvedInvite {
    pub url: String,
    pub source: InviteSource,
}

pub struct InviteResolver {
    client: Client,
    invite_base: String,
}

impl InviteResolver {
    pub fn new() -> Self {
        Self::with_timeout(DEFAULT_TIMEOUT_SECS)
    }

    pub fn with_timeout(timeout_secs: u64) -> Self {
        Self {
            client: http_client(timeout_secs),
            invite_base: INVITE_URL_BASE.to_string(),
        }
    }

    pub fn with_invite_base(mut self, invite_base: String) -> Self {
        self.invite_base = invite_base;
        self
    }

    /// Locates a community invite for `channel` on the fetched page.
    ///
    /// Hyperlinks are scanned in document order and the first target URL
    /// containing the invite marker wins. Anchors without a target are
    /// skipped. When no link matches, the conventional invite URL for the
    /// channel is probed; a failed probe folds into `None` rather than an
    /// error, so this always returns.
    pub async fn resolve(&self, page: &ChannelPage, channel: &str) -> Option<ResolvedInvite> {
        for link in page.hyperlinks() {
            let Some(href) = link.href else { continue };
            if href.contains(INVITE_MARKER) {
                info!("invite link found on channel page: {}", href);
                return Some(ResolvedInvite {
                    url: href,
                    source: InviteSource::ChannelPage,
                });
            }
        }

        let guess = format!("{}/{}", self.invite_base, channel);
        debug!("no invite link on the page, probing {}", guess);

        if self.probe(&guess).await {
            info!("fallback invite {} answered the probe", guess);
            Some(ResolvedInvite {
                url: guess,
                source: InviteSource::FallbackProbe,
            })
        } else {
            warn!("no community invite could be confirmed for '{}'", channel);
            None
        }
    }

    async fn probe(&self, url: &str) -> bool {
        match self.client.get(url).send().await {
            Ok(response) if response.status().is_success() => true,
            Ok(response) => {
                debug!("invite probe returned {}", response.status());
                false
            }
            Err(e) => {
                debug!("invite probe failed: {}", e);
                false
            }
        }
    }
}

impl Default for InviteResolver {
    fn default() -> Self {
        Self::new()
    }
}
