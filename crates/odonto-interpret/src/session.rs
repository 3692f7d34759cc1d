//! Chart and listening-session state shared between the voice pipeline and
//! the chart renderer.

use std::fmt;
use std::sync::Arc;

use odonto_core::models::chart::ChartState;
use odonto_core::models::command::ChartCommand;
use odonto_core::reconcile;
use tokio::sync::watch;
use tracing::info;
use uuid::Uuid;

/// The authoritative chart of one editing session.
///
/// Applies run one at a time inside the channel's write lock, so a command
/// is always reconciled against the state the previous command produced.
/// Readers get whole `Arc<ChartState>` versions, never a half-updated tooth.
pub struct ChartSession {
    state: watch::Sender<Arc<ChartState>>,
}

impl ChartSession {
    pub fn new(initial: ChartState) -> Self {
        let (state, _) = watch::channel(Arc::new(initial));
        Self { state }
    }

    /// The current version.
    pub fn snapshot(&self) -> Arc<ChartState> {
        Arc::clone(&self.state.borrow())
    }

    /// Receive every new version, e.g. to re-render or persist.
    pub fn subscribe(&self) -> watch::Receiver<Arc<ChartState>> {
        self.state.subscribe()
    }

    /// Reconcile `command` into the chart and return the version it produced.
    pub fn apply(&self, command: &ChartCommand) -> Arc<ChartState> {
        let now = jiff::Timestamp::now();
        let mut produced = self.snapshot();
        self.state.send_modify(|current| {
            produced = Arc::new(reconcile::apply_command(&**current, command, now));
            *current = Arc::clone(&produced);
        });
        info!(tooth = %command.tooth, treatment = %command.treatment, "chart updated");
        produced
    }

    /// Swap in a chart loaded from elsewhere (patient switch, reload).
    pub fn replace(&self, chart: ChartState) {
        self.state.send_replace(Arc::new(chart));
    }
}

impl Default for ChartSession {
    fn default() -> Self {
        Self::new(ChartState::new())
    }
}

/// Identifies one listening session so late results can be recognised.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct SessionId(Uuid);

impl SessionId {
    fn new() -> Self {
        Self(Uuid::new_v4())
    }
}

impl fmt::Display for SessionId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        self.0.fmt(f)
    }
}

#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct ListeningState {
    pub current: Option<SessionId>,
    pub listening: bool,
}

/// Tracks the single active listening session.
///
/// Starting a session ends the previous one; results tagged with an ended
/// session are stale. Stopping only halts transcript delivery: the session
/// stays current so an interpretation already in flight still lands.
pub struct ListeningSessions {
    state: watch::Sender<ListeningState>,
}

impl ListeningSessions {
    pub fn new() -> Self {
        let (state, _) = watch::channel(ListeningState::default());
        Self { state }
    }

    pub fn begin(&self) -> SessionId {
        let id = SessionId::new();
        let previous = self.state.send_replace(ListeningState {
            current: Some(id),
            listening: true,
        });
        if let Some(previous) = previous.current {
            info!(previous = %previous, session = %id, "replacing listening session");
        } else {
            info!(session = %id, "listening session started");
        }
        id
    }

    /// Stop delivering transcripts for `id`. No-op for a stale id.
    pub fn stop(&self, id: SessionId) {
        self.state.send_if_modified(|state| {
            if state.current == Some(id) && state.listening {
                state.listening = false;
                true
            } else {
                false
            }
        });
    }

    /// Forget the current session, e.g. when the chart is closed. Any result
    /// still in flight becomes stale.
    pub fn end(&self) {
        self.state.send_replace(ListeningState::default());
    }

    pub fn is_current(&self, id: SessionId) -> bool {
        self.state.borrow().current == Some(id)
    }

    pub fn is_listening(&self, id: SessionId) -> bool {
        let state = self.state.borrow();
        state.current == Some(id) && state.listening
    }

    pub fn subscribe(&self) -> watch::Receiver<ListeningState> {
        self.state.subscribe()
    }
}

impl Default for ListeningSessions {
    fn default() -> Self {
        Self::new()
    }
}
