//! Scoring engines for relationship self-assessment quizzes.
//!
//! - [`profile`]: 36 answers over five sections, reverse-coded items, 0-100
//!   section scores, an overall score and a composite tier label.
//! - [`lat`]: 16 answers over four traits, classified into one of eight type
//!   codes using a dominance margin and an adjacency ring.
//! - [`quick`]: a five-item 0-10 self-rating.
//!
//! All engines are pure and synchronous. Loading answers, configuration and
//! rendering live in [`input`], [`config`] and [`output`].

pub mod config;
pub mod error;
pub mod input;
pub mod lat;
pub mod likert;
pub mod locale;
pub mod output;
pub mod profile;
pub mod quick;

pub use error::ScoringError;
pub use locale::Locale;
