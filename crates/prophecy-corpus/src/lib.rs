//! Prophecy Vision Scripture Corpus
//!
//! Static scripture data about celestial phenomena: the cosmic-prophecy
//! verse collection, celestial search themes, prophetic book lists, and the
//! layered categorization schema (scholarly baseline, category, confidence,
//! reasoning) for analyzed passages.
//!
//! Everything in this crate is immutable compiled-in data plus lookup
//! helpers; search and ranking over the data live in `prophecy-domain` and
//! `prophecy-search`.

#![warn(missing_docs)]

pub mod analysis;
pub mod books;
pub mod category;
pub mod themes;
pub mod verses;

pub use analysis::{format_verse_analysis, CategorizedVerse, ScholarlySource};
pub use category::{CategoryInfo, CelestialCategory};
pub use themes::CelestialTheme;
pub use verses::{cosmic_corpus, CosmicVerse, COSMIC_VERSES};
