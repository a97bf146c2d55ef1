//! Runtime orchestration for the team-analysis service.
//!
//! This crate wires the pure analysis components from `team-core` to the
//! outside world: repository contracts for reference data and stored teams,
//! the advice-generation call boundary with its fallback semantics, the
//! boundary response cache and rate limiter, and the [`TeamAnalyzer`] that
//! drives a request through Load → Dispatch → Collect → Aggregate → Respond.
//!
//! Modules are organized by responsibility:
//! - [`analyzer`] hosts the orchestrator
//! - [`advisor`] owns the external advice-call boundary (and its mock)
//! - [`repository`] provides data contracts and in-memory stores
//! - [`cache`] and [`limiter`] are boundary capabilities, injected rather
//!   than ambient
//! - [`config`] reads service tunables from the environment
pub mod advisor;
pub mod analyzer;
pub mod cache;
pub mod config;
pub mod error;
pub mod limiter;
pub mod repository;

pub use advisor::{
    AdviceClient, AdviceError, AdviceGenerator, TeamSynergyPayload, TraitSynergyPayload,
};
pub use analyzer::{AnalyzeRequest, TeamAnalyzer};
pub use cache::{TimedCache, team_fingerprint};
pub use config::ServiceConfig;
pub use error::{MissingReferences, Result, ServiceError};
pub use limiter::{RateLimiter, rate_limit_message};
pub use repository::{
    InMemoryReferenceRepo, InMemoryTeamRepo, ReferenceRepository, RepositoryError, StoredTeam,
    TeamRepository,
};
