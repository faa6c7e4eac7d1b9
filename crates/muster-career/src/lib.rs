//! Career engine for the Muster character generator.
//!
//! Provides career tables and the standard catalog, the [`Career`] state
//! machine (qualification, terms, ranks, commissions, muster-out), the
//! [`CareerPath`] that sequences careers over a lifetime, and the choice
//! providers that answer its questions.

pub mod career;
pub mod choice;
pub mod config;
pub mod context;
pub mod error;
pub mod path;
pub mod table;

pub use career::{Career, CareerState, Mandate, MusterReport, RankTrack, Status, TermOutcome};
pub use choice::{ChoiceProvider, FirstChoice, RandomChoice, ScriptedChoices};
pub use config::PathConfig;
pub use context::Context;
pub use error::{CareerError, CareerResult};
pub use path::{CareerPath, PathRecord};
pub use table::{CareerTable, Catalog};
