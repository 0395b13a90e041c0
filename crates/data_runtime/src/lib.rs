//! data_runtime: data schemas and loaders for the combat engine.
//!
//! Weapon specs and tuning live in TOML under the workspace `data/` directory
//! so the engine, tools, and tests share one data API. Every loader falls
//! back to built-in defaults when its file is absent.

#![forbid(unsafe_code)]

pub mod configs {
    pub mod combat;
    pub mod effects;
}
pub mod specs {
    pub mod weapons;
}
