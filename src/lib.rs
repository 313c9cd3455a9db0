//! TUI Blockfall (workspace facade crate).
//!
//! Re-exports `tui_blockfall::{core,engine,input,term,types}` so integration
//! tests and the binary see one public API while the implementation lives in
//! dedicated crates under `crates/`.

pub use tui_blockfall_core as core;
pub use tui_blockfall_engine as engine;
pub use tui_blockfall_input as input;
pub use tui_blockfall_term as term;
pub use tui_blockfall_types as types;
