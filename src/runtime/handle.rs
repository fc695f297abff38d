//! Clonable handle driving the single-writer checker task.

use tokio::sync::{broadcast, mpsc, oneshot};

use crate::adif;
use crate::engine::calc::AwardEngine;
use crate::persist::{PersistError, RosterSource};
use crate::qso::QsoRecord;
use crate::report::AwardCheckResult;
use crate::roster::{Member, RosterIndex};

use super::events::CheckerEvent;

/// Errors surfaced by the service handle.
#[derive(Debug)]
pub enum RuntimeError {
    /// A roster source failed.
    Persist(PersistError),
    /// The service task is gone.
    ChannelClosed,
}

impl From<PersistError> for RuntimeError {
    fn from(value: PersistError) -> Self {
        Self::Persist(value)
    }
}

/// Service tuning knobs.
#[derive(Debug, Clone)]
pub struct RuntimeConfig {
    /// Bound of the command queue.
    pub cmd_queue_bound: usize,
    /// Capacity of the broadcast event channel.
    pub event_capacity: usize,
}

impl Default for RuntimeConfig {
    fn default() -> Self {
        Self {
            cmd_queue_bound: 256,
            event_capacity: 1024,
        }
    }
}

/// Counts of what the service currently holds.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct CheckerStats {
    /// Parsed log records held.
    pub qso_count: usize,
    /// Roster members indexed.
    pub member_count: usize,
}

/// Clonable handle to the checker service.
pub struct CheckerHandle {
    cmd_tx: mpsc::Sender<Command>,
    events_tx: broadcast::Sender<CheckerEvent>,
}

impl Clone for CheckerHandle {
    fn clone(&self) -> Self {
        Self {
            cmd_tx: self.cmd_tx.clone(),
            events_tx: self.events_tx.clone(),
        }
    }
}

enum Command {
    LoadLog {
        text: String,
        resp: oneshot::Sender<usize>,
    },
    SetRoster {
        members: Vec<Member>,
        resp: oneshot::Sender<usize>,
    },
    LoadRosterFrom {
        source: Box<dyn RosterSource>,
        resp: oneshot::Sender<Result<usize, RuntimeError>>,
    },
    Calculate {
        resp: oneshot::Sender<AwardCheckResult>,
    },
    Stats {
        resp: oneshot::Sender<CheckerStats>,
    },
    Shutdown {
        resp: oneshot::Sender<()>,
    },
}

/// Spawns the single-writer service task and returns its handle.
///
/// The task owns the parsed log and roster index; the engine itself stays a
/// pure batch transform, so every `calculate` runs against whatever the task
/// holds at that moment.
pub fn spawn_checker(engine: AwardEngine, config: RuntimeConfig) -> CheckerHandle {
    let (cmd_tx, mut cmd_rx) = mpsc::channel::<Command>(config.cmd_queue_bound);
    let (events_tx, _) = broadcast::channel::<CheckerEvent>(config.event_capacity);

    let events_tx_loop = events_tx.clone();

    tokio::spawn(async move {
        let mut qsos: Vec<QsoRecord> = Vec::new();
        let mut roster = RosterIndex::default();

        while let Some(cmd) = cmd_rx.recv().await {
            match cmd {
                Command::LoadLog { text, resp } => {
                    qsos = adif::parse_records(&text);
                    let _ = events_tx_loop.send(CheckerEvent::LogParsed {
                        records: qsos.len(),
                    });
                    let _ = resp.send(qsos.len());
                }
                Command::SetRoster { members, resp } => {
                    roster = RosterIndex::build(members);
                    let _ = events_tx_loop.send(CheckerEvent::RosterUpdated {
                        members: roster.len(),
                    });
                    let _ = resp.send(roster.len());
                }
                Command::LoadRosterFrom { source, resp } => {
                    let fetched = fetch_blocking(source).await;
                    match fetched {
                        Ok(members) => {
                            roster = RosterIndex::build(members);
                            let _ = events_tx_loop.send(CheckerEvent::RosterUpdated {
                                members: roster.len(),
                            });
                            let _ = resp.send(Ok(roster.len()));
                        }
                        Err(err) => {
                            let _ = resp.send(Err(err));
                        }
                    }
                }
                Command::Calculate { resp } => {
                    let result = engine.calculate(&qsos, &roster);
                    let _ = events_tx_loop.send(CheckerEvent::Calculated {
                        unique_members: result.unique_members,
                    });
                    let _ = resp.send(result);
                }
                Command::Stats { resp } => {
                    let _ = resp.send(CheckerStats {
                        qso_count: qsos.len(),
                        member_count: roster.len(),
                    });
                }
                Command::Shutdown { resp } => {
                    let _ = resp.send(());
                    break;
                }
            }
        }
    });

    CheckerHandle { cmd_tx, events_tx }
}

async fn fetch_blocking(mut source: Box<dyn RosterSource>) -> Result<Vec<Member>, RuntimeError> {
    tokio::task::spawn_blocking(move || source.fetch())
        .await
        .map_err(|e| RuntimeError::Persist(PersistError::Message(format!("join error: {e}"))))?
        .map_err(RuntimeError::from)
}

impl CheckerHandle {
    /// Subscribes to the service event stream.
    pub fn subscribe(&self) -> broadcast::Receiver<CheckerEvent> {
        self.events_tx.subscribe()
    }

    /// Parses `text` and installs it as the current log; returns the record count.
    pub async fn load_log(&self, text: impl Into<String>) -> Result<usize, RuntimeError> {
        let (tx, rx) = oneshot::channel();
        self.cmd_tx
            .send(Command::LoadLog {
                text: text.into(),
                resp: tx,
            })
            .await
            .map_err(|_| RuntimeError::ChannelClosed)?;
        rx.await.map_err(|_| RuntimeError::ChannelClosed)
    }

    /// Installs a materialized member list; returns the indexed count.
    pub async fn set_roster(&self, members: Vec<Member>) -> Result<usize, RuntimeError> {
        let (tx, rx) = oneshot::channel();
        self.cmd_tx
            .send(Command::SetRoster { members, resp: tx })
            .await
            .map_err(|_| RuntimeError::ChannelClosed)?;
        rx.await.map_err(|_| RuntimeError::ChannelClosed)
    }

    /// Fetches members from `source` off the service thread and installs them.
    pub async fn load_roster_from(
        &self,
        source: Box<dyn RosterSource>,
    ) -> Result<usize, RuntimeError> {
        let (tx, rx) = oneshot::channel();
        self.cmd_tx
            .send(Command::LoadRosterFrom { source, resp: tx })
            .await
            .map_err(|_| RuntimeError::ChannelClosed)?;
        rx.await.map_err(|_| RuntimeError::ChannelClosed)?
    }

    /// Runs one award computation over the held log and roster.
    pub async fn calculate(&self) -> Result<AwardCheckResult, RuntimeError> {
        let (tx, rx) = oneshot::channel();
        self.cmd_tx
            .send(Command::Calculate { resp: tx })
            .await
            .map_err(|_| RuntimeError::ChannelClosed)?;
        rx.await.map_err(|_| RuntimeError::ChannelClosed)
    }

    /// Current held-state counts.
    pub async fn stats(&self) -> Result<CheckerStats, RuntimeError> {
        let (tx, rx) = oneshot::channel();
        self.cmd_tx
            .send(Command::Stats { resp: tx })
            .await
            .map_err(|_| RuntimeError::ChannelClosed)?;
        rx.await.map_err(|_| RuntimeError::ChannelClosed)
    }

    /// Stops the service task after in-flight commands drain.
    pub async fn shutdown(&self) -> Result<(), RuntimeError> {
        let (tx, rx) = oneshot::channel();
        self.cmd_tx
            .send(Command::Shutdown { resp: tx })
            .await
            .map_err(|_| RuntimeError::ChannelClosed)?;
        rx.await.map_err(|_| RuntimeError::ChannelClosed)
    }
}
