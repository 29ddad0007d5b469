//! A small terminal platformer.
//!
//! `entities` holds the plain data, `compute` the per-frame rules,
//! `display` turns a `World` into terminal commands and `input` turns
//! terminal key events back into per-frame controls.

pub mod collision;
pub mod compute;
pub mod config;
pub mod display;
pub mod entities;
pub mod error;
pub mod input;
pub mod logging;
