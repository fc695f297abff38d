//! SKCC award eligibility checking over parsed contact logs.
//!
//! # Examples
//!
//! Pure batch evaluation with [`engine::calc::AwardEngine`]:
//! ```
//! use skcclog::{
//!     adif,
//!     engine::{calc::AwardEngine, config::EngineConfig},
//!     roster::{Member, RosterIndex},
//! };
//!
//! let log = "<CALL:5>K1ABC<BAND:3>40M<MODE:2>CW<QSO_DATE:8>20240101<EOR>";
//! let qsos = adif::parse_records(log);
//! let roster = RosterIndex::build(vec![Member {
//!     call: "K1ABC".to_string(),
//!     number: 1,
//!     join_date: None,
//!     rank: None,
//! }]);
//!
//! let engine = AwardEngine::new(EngineConfig::default());
//! let result = engine.calculate(&qsos, &roster);
//! assert_eq!(result.unique_members, 1);
//! ```
//!
//! Service usage with the async handle:
//! ```
//! use skcclog::{
//!     engine::calc::AwardEngine,
//!     roster::Member,
//!     runtime::handle::{spawn_checker, RuntimeConfig},
//! };
//!
//! # #[tokio::main]
//! # async fn main() {
//! let handle = spawn_checker(AwardEngine::default(), RuntimeConfig::default());
//! handle
//!     .load_log("<CALL:5>K1ABC<MODE:2>CW<EOR>")
//!     .await
//!     .expect("load log");
//! handle
//!     .set_roster(vec![Member {
//!         call: "K1ABC".to_string(),
//!         number: 1,
//!         join_date: None,
//!         rank: None,
//!     }])
//!     .await
//!     .expect("set roster");
//! let result = handle.calculate().await.expect("calculate");
//! assert_eq!(result.unique_members, 1);
//! handle.shutdown().await.expect("shutdown");
//! # }
//! ```
#![deny(missing_docs)]

/// Tag/length/value log record decoding.
pub mod adif;
/// Call sign canonicalization and alias expansion.
pub mod call;
/// Award rule engine: filtering, matching, tier accumulation.
pub mod engine;
/// Roster source abstraction and SQLite snapshot cache.
pub mod persist;
/// Parsed log record type.
pub mod qso;
/// Progress, endorsement, and result types.
pub mod report;
/// Roster entries and lookup index.
pub mod roster;
/// Single-writer async service handle and events.
pub mod runtime;
/// Shared primitive types and enums.
pub mod types;
