//! TUI module for the interactive roster.
//!
//! Organized along FP/Unix boundaries:
//! - `state`: pure data types (Screen, Action, Transition)
//! - `update`: pure transitions
//! - `view`: pure rendering
//! - `theme`: palettes for the light and dark schemes
//! - `run`: effects (terminal lifecycle, event loop)

pub mod run;
pub mod state;
pub mod theme;
pub mod update;
pub mod view;
