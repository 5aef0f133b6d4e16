//! Pinion Core Types and Definitions
//!
//! This crate provides the foundational types for the Pinion pin-diagram
//! engine. It includes:
//!
//! - **Geometry**: Basic geometric types ([`geometry`] module)
//! - **Scene**: Renderer-agnostic scene description for a draw cycle
//!   ([`scene`] module)
//!
//! Nothing in this crate performs I/O or talks to a display surface; the
//! layout engine in the `pinion` crate produces [`scene::Scene`] values and
//! any 2D renderer may consume them.

pub mod geometry;
pub mod scene;
