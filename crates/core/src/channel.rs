//! The interactive-response channel seam.
//!
//! A [`ResponseHandle`] is the bot's grip on one live platform message: the
//! navigation layer pushes page updates through it and receives discrete
//! [`NavigationInput`] values from it. The core never sees platform
//! message/embed formatting — only this narrow interface.
//!
//! Button presses arrive as platform custom-id strings; they are parsed
//! into [`NavigationCommand`] once at the boundary so everything inward
//! switches on a closed enum rather than strings.

use async_trait::async_trait;
use serde::{Deserialize, Serialize};

use crate::error::ChannelError;

/// Opaque platform identity of a user.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct UserId(pub String);

impl std::fmt::Display for UserId {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(&self.0)
    }
}

impl From<&str> for UserId {
    fn from(s: &str) -> Self {
        UserId(s.to_string())
    }
}

/// A parsed navigation button press.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum NavigationCommand {
    Next,
    Previous,
    Dismiss,
}

impl NavigationCommand {
    /// Parse a platform button custom-id. Unknown ids are `None`; the
    /// dispatch layer routes those elsewhere (non-navigation buttons share
    /// the same message row).
    pub fn from_custom_id(custom_id: &str) -> Option<Self> {
        match custom_id {
            "page_next" => Some(NavigationCommand::Next),
            "page_back" => Some(NavigationCommand::Previous),
            "dismiss" => Some(NavigationCommand::Dismiss),
            _ => None,
        }
    }

    /// The custom-id this command is wired to on the platform message.
    pub fn custom_id(self) -> &'static str {
        match self {
            NavigationCommand::Next => "page_next",
            NavigationCommand::Previous => "page_back",
            NavigationCommand::Dismiss => "dismiss",
        }
    }
}

/// One navigation event delivered by the hosting channel.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct NavigationInput {
    pub requester: UserId,
    pub command: NavigationCommand,
}

/// A page plus its position indicator, pushed as one atomic update.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct RenderedPage {
    /// The page body text.
    pub body: String,

    /// Position indicator, e.g. "Page 2/5".
    pub indicator: String,
}

impl RenderedPage {
    pub fn new(body: impl Into<String>, index: usize, total: usize) -> Self {
        Self {
            body: body.into(),
            indicator: format!("Page {}/{}", index + 1, total),
        }
    }
}

/// The bot's handle on one live interactive message.
///
/// Implementations wrap a platform message and its button row. All methods
/// are best-effort from the navigation layer's point of view: a failed
/// update leaves the viewer with stale but valid content.
#[async_trait]
pub trait ResponseHandle: Send + Sync {
    /// Replace the message content with a new page render.
    async fn push_update(&self, page: RenderedPage) -> std::result::Result<(), ChannelError>;

    /// Send a short private message to one requester only, never visible to
    /// other viewers. Used to reject non-owner button presses.
    async fn notify_requester(
        &self,
        requester: &UserId,
        message: &str,
    ) -> std::result::Result<(), ChannelError>;

    /// Tear down the interactive controls (disable buttons). Called once on
    /// session expiry.
    async fn close(&self) -> std::result::Result<(), ChannelError>;
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn custom_ids_round_trip() {
        for cmd in [
            NavigationCommand::Next,
            NavigationCommand::Previous,
            NavigationCommand::Dismiss,
        ] {
            assert_eq!(NavigationCommand::from_custom_id(cmd.custom_id()), Some(cmd));
        }
    }

    #[test]
    fn unknown_custom_id_is_none() {
        assert_eq!(NavigationCommand::from_custom_id("bias_alert"), None);
        assert_eq!(NavigationCommand::from_custom_id(""), None);
    }

    #[test]
    fn rendered_page_indicator() {
        let page = RenderedPage::new("In the beginning", 1, 4);
        assert_eq!(page.indicator, "Page 2/4");
    }
}
