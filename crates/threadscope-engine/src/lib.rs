//! Relevance scoring and trend synthesis for health-tech community posts.
//!
//! Posts are matched against weighted theme vocabularies, boosted by how well
//! they align with a company description, scaled by engagement and turned into
//! takeaways, a suggested reply and targeting notes. Batches of analyses roll
//! up into a [`TrendReport`](threadscope_core::TrendReport).
//!
//! Everything here is deterministic and does no I/O beyond optionally loading
//! a vocabulary file.

pub mod error;
pub mod narrative;
pub mod normalize;
pub mod profile;
pub mod scorer;
pub mod themes;
pub mod trends;
pub mod vocabulary;

mod engine;

pub use engine::Engine;
pub use error::EngineError;
pub use profile::{extract_profile, CompanyProfile};
pub use themes::{match_themes, ThemeMatch};
pub use trends::synthesize_trends;
pub use vocabulary::{load_vocabulary, Vocabulary};
