//! Quadris (workspace facade crate).
//!
//! This package keeps a single `quadris::{core,session,types}` public API
//! while the implementation lives in dedicated crates under `crates/`.

pub use quadris_core as core;
pub use quadris_session as session;
pub use quadris_types as types;
