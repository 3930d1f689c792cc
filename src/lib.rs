//! Fixed-depth chess move picker.
//!
//! Static evaluation (material plus piece-square tables) driving a negamax
//! alpha-beta search, with an optional quiescence extension, served over a
//! single HTTP endpoint. Chess rules come from the `chess` crate.

pub mod error;
pub mod eval;
pub mod position;
pub mod search;
pub mod server;
pub mod types;

pub use error::{EngineError, EngineResult};
pub use eval::{evaluate, EvalKind};
pub use position::{Outcome, Position};
pub use search::{SearchOptions, SearchResult, Searcher, DEFAULT_SEARCH_DEPTH};
