//! tui-pairs (workspace facade crate).
//!
//! This package keeps the public `tui_pairs::{core,engine,input,store,term,types}`
//! API stable while the implementation lives in dedicated crates under `crates/`.

pub use tui_pairs_core as core;
pub use tui_pairs_engine as engine;
pub use tui_pairs_input as input;
pub use tui_pairs_store as store;
pub use tui_pairs_term as term;
pub use tui_pairs_types as types;
