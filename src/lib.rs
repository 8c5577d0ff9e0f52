#![cfg_attr(not(feature = "std"), no_std)]

extern crate alloc;
#[cfg(feature = "std")]
extern crate std;

mod battlefield;
pub mod bot;
mod cell;
mod common;
mod config;
mod game;
#[cfg(feature = "std")]
mod logging;
mod player;
mod ship;
mod snapshot;
#[cfg(feature = "std")]
mod store;
mod targeting;
#[cfg(feature = "std")]
pub mod ui;

pub use battlefield::*;
pub use cell::*;
pub use common::*;
pub use config::*;
pub use game::*;
#[cfg(feature = "std")]
pub use logging::{init_logging, level_from};
pub use player::*;
pub use ship::*;
pub use snapshot::*;
#[cfg(feature = "std")]
pub use store::*;
pub use targeting::*;
