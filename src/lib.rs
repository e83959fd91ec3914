//! Pick a connected display and a resolution in the terminal, then apply it with `xrandr` and
//! `bspc`.
//!
//! The library splits into the `xrandr -q` parser ([`DisplaySet::parse`]), the two-level
//! selection state machine ([`Selection`]) and the commands that apply a choice
//! ([`apply_mode`]). Rendering and the terminal loop live in [`view`] and [`app`].

pub mod app;
mod apply;
mod command;
mod commands;
mod display;
mod selection;
pub mod theme;
mod types;
pub mod view;

pub use apply::*;
pub use command::*;
pub use commands::*;
pub use display::*;
pub use selection::*;
pub use types::*;
