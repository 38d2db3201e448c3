#![allow(clippy::bool_assert_comparison)]

mod evolve;
mod grid;
mod pattern;
mod read;
mod rule;
mod world;

pub use ca_formats;
pub use pattern::{glider, gun, OutOfBoundsError};
pub use read::ReadError;
pub use rule::Rule;
pub use world::{Bounds, Cell, World};
