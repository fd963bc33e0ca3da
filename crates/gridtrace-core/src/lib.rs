//! **gridtrace-core** — Core grid types for the gridtrace engine.
//!
//! This crate provides the foundational types shared across the *gridtrace*
//! workspace: the [`Coord`] / [`GridDims`] geometry primitives and the
//! [`Key`] coordinate codec used by every set and map in the search engine.

pub mod geom;
pub mod key;

pub use geom::{Coord, GridDims};
pub use key::Key;
