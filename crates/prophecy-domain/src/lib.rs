//! Prophecy Vision Domain Layer
//!
//! This crate contains the core calculations and value types shared by the
//! rest of the workspace. It has ZERO external dependencies and defines the
//! fundamental concepts that all other layers depend upon.
//!
//! ## Key Concepts
//!
//! - **CivilDate / JulianDay**: proleptic-Gregorian calendar conversion with
//!   astronomical year numbering (year 0 = 1 BC)
//! - **Keyword relevance**: substring-overlap scoring of short text records
//! - **Equatorial math**: angular separation between sky coordinates
//! - **Trait seams**: `LlmProvider` implemented by infrastructure crates
//!
//! ## Architecture
//!
//! - No external crate dependencies
//! - All functions are total, pure, and allocation-local
//! - Infrastructure implementations live in other crates

#![warn(missing_docs)]
#![warn(clippy::all)]

pub mod calendar;
pub mod relevance;
pub mod sky;
pub mod traits;

// Re-exports for convenience
pub use calendar::{CivilDate, JulianDay};
pub use relevance::{keyword_search, ScoredRecord, SearchRecord};
pub use sky::{angular_separation, EquatorialCoord, SeparationClass};
pub use traits::LlmProvider;
