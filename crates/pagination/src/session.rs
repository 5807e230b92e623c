//! The interactive navigation session state machine.
//!
//! One session wraps the page sequence of one command invocation and
//! drives the Previous/Next buttons on the hosting message. Sessions are
//! owner-scoped and time-bounded: input from anyone but the invoking user
//! is rejected privately, and after the timeout (or a Dismiss) the session
//! is Expired and inert.
//!
//! The session holds no callback machinery. The hosting channel delivers
//! discrete [`NavigationInput`] values — either directly into
//! [`NavigationSession::handle_input`] or over an mpsc channel via
//! [`NavigationSession::run`] — which keeps the state machine testable
//! without a live platform connection.
//!
//! Pushing a page update is best-effort UI, not a durable transaction:
//! delivery failures are logged and swallowed, since the viewer still has
//! stale but valid content.

use std::sync::Arc;
use std::time::Duration;

use tokio::sync::mpsc;
use tokio::time::Instant;
use tracing::{debug, warn};

use berean_core::{
    ChannelError, NavigationCommand, NavigationInput, PaginationError, RenderedPage,
    ResponseHandle, UserId,
};

/// Message sent privately to a non-owner who presses a navigation button.
const NOT_YOUR_SESSION: &str = "You cannot use these buttons!";

/// Render a page into the body text pushed to the channel.
pub trait PageRender: Send + Sync {
    fn render(&self) -> String;
}

impl PageRender for String {
    fn render(&self) -> String {
        self.clone()
    }
}

impl PageRender for Vec<String> {
    fn render(&self) -> String {
        self.join("\n\n")
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
enum SessionState {
    Active,
    Expired,
}

/// A live, owner-scoped, time-bounded paging controller.
///
/// Callers should skip session construction entirely for single-page
/// results and render the page with no controls; a one-page session is
/// legal but presents dead buttons.
pub struct NavigationSession<P: PageRender> {
    pages: Vec<P>,
    current: usize,
    owner: UserId,
    deadline: Instant,
    state: SessionState,
    handle: Arc<dyn ResponseHandle>,
}

impl<P: PageRender> NavigationSession<P> {
    /// Create an active session over a non-empty page sequence.
    pub fn new(
        pages: Vec<P>,
        owner: UserId,
        timeout: Duration,
        handle: Arc<dyn ResponseHandle>,
    ) -> Result<Self, PaginationError> {
        if pages.is_empty() {
            return Err(PaginationError::EmptyPages);
        }

        Ok(Self {
            pages,
            current: 0,
            owner,
            deadline: Instant::now() + timeout,
            state: SessionState::Active,
            handle,
        })
    }

    pub fn page_count(&self) -> usize {
        self.pages.len()
    }

    pub fn current_index(&self) -> usize {
        self.current
    }

    pub fn is_expired(&self) -> bool {
        self.state == SessionState::Expired
    }

    /// The render of the current page, for the initial message.
    pub fn current_page(&self) -> RenderedPage {
        RenderedPage::new(self.pages[self.current].render(), self.current, self.pages.len())
    }

    /// Apply one navigation input.
    ///
    /// Inputs after expiry are no-ops, never errors. Non-owner inputs get a
    /// private rejection and leave all state untouched.
    pub async fn handle_input(&mut self, input: NavigationInput) {
        if self.state == SessionState::Expired {
            return;
        }

        if Instant::now() >= self.deadline {
            self.expire().await;
            return;
        }

        if let Err(rejection) = self.authorize(&input.requester) {
            debug!("rejecting navigation input: {rejection}");
            if let Err(e) = self
                .handle
                .notify_requester(&input.requester, NOT_YOUR_SESSION)
                .await
            {
                warn!("failed to deliver rejection notice: {e}");
            }
            return;
        }

        match input.command {
            NavigationCommand::Next => {
                self.current = (self.current + 1) % self.pages.len();
            }
            NavigationCommand::Previous => {
                self.current = (self.current + self.pages.len() - 1) % self.pages.len();
            }
            NavigationCommand::Dismiss => {
                self.expire().await;
                return;
            }
        }

        // Page and position indicator go out as one atomic update.
        if let Err(e) = self.handle.push_update(self.current_page()).await {
            warn!("page update delivery failed, viewer keeps previous page: {e}");
        }
    }

    /// Only the invoking user may drive the session.
    fn authorize(&self, requester: &UserId) -> Result<(), ChannelError> {
        if *requester == self.owner {
            Ok(())
        } else {
            Err(ChannelError::Unauthorized {
                requester_id: requester.to_string(),
            })
        }
    }

    /// Force the transition to Expired. Idempotent. Control teardown on the
    /// remote message is attempted once and failures are swallowed.
    pub async fn expire(&mut self) {
        if self.state == SessionState::Expired {
            return;
        }
        self.state = SessionState::Expired;

        if let Err(e) = self.handle.close().await {
            warn!("failed to tear down navigation controls: {e}");
        }
    }

    /// Drive the session from a stream of inputs until the timeout fires,
    /// the stream closes (channel teardown), or the session expires.
    pub async fn run(mut self, mut inputs: mpsc::Receiver<NavigationInput>) {
        loop {
            tokio::select! {
                _ = tokio::time::sleep_until(self.deadline) => {
                    self.expire().await;
                    return;
                }
                input = inputs.recv() => match input {
                    Some(input) => {
                        self.handle_input(input).await;
                        if self.is_expired() {
                            return;
                        }
                    }
                    None => {
                        self.expire().await;
                        return;
                    }
                },
            }
        }
    }
}
