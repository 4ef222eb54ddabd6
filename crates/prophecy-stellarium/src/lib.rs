//! Stellarium RemoteControl client
//!
//! Drives a running Stellarium instance over its RemoteControl HTTP
//! API to visualize celestial events behind prophetic scripture. The
//! client wraps the raw endpoints with typed operations and ships
//! tables of biblical observer locations and pre-dated prophetic
//! events.
//!
//! # Examples
//!
//! ```no_run
//! use prophecy_stellarium::{StellariumClient, events};
//!
//! # async fn demo() -> Result<(), prophecy_stellarium::StellariumError> {
//! let client = StellariumClient::default();
//! let event = events::find_event("revelation_12_sign")
//!     .ok_or(prophecy_stellarium::StellariumError::UnknownEvent("?".into()))?;
//! let report = client.show_event(event).await?;
//! println!("{report}");
//! # Ok(())
//! # }
//! ```

#![warn(missing_docs)]

pub mod client;
pub mod error;
pub mod events;
pub mod locations;

pub use client::{
    BodyStatus, ConjunctionHit, DisplayOption, FocusMode, HorizonDirection, SeparationReport,
    StellariumClient, TimeInfo,
};
pub use error::StellariumError;
pub use events::{find_event, PropheticEvent, PROPHETIC_EVENTS};
pub use locations::{find_location, Location, BIBLICAL_LOCATIONS};
