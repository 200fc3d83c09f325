#![no_std]

extern crate alloc;

pub use cell::*;
pub use command::*;
pub use config::*;
pub use error::*;
pub use field::*;
pub use generator::*;
pub use session::*;
pub use types::*;

mod cell;
mod command;
mod config;
mod error;
mod field;
mod generator;
mod render;
mod session;
mod types;

#[derive(Copy, Clone, Debug, PartialEq, Eq)]
pub enum InitOutcome {
    Generated,
    AlreadyInitialized,
}

#[derive(Copy, Clone, Debug, PartialEq, Eq)]
pub enum FlagOutcome {
    Flagged,
    Unflagged,
}

#[derive(Copy, Clone, Debug, PartialEq, Eq)]
pub enum RevealOutcome {
    NoChange,
    Revealed,
    Expanded(CellCount),
    HitMine,
}

