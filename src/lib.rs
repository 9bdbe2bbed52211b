#![deny(clippy::all, clippy::pedantic, clippy::nursery, clippy::cargo)]

//! Two-dimensional incompressible, irrotational flow assembled by superposing
//! closed-form elementary solutions of the Laplace equation: uniform stream,
//! source/sink, vortex, doublet. A [`field::FlowField`] sums any number of
//! [`primitives::Primitive`] instances over a caller-supplied sampling grid
//! and derives velocity, stream-function, speed, and Bernoulli pressure
//! fields, all freshly allocated arrays the same shape as the grid.

pub mod examples;
pub mod field;
pub mod grid;
pub mod primitives;
#[cfg(test)]
mod test_util;

pub type Float = f64;
pub use std::f64::consts as float_consts;

pub use field::{Ambient, FieldError, FieldResult, FlowField};
pub use primitives::{Doublet, Primitive, SourceSink, Uniform, Vortex};
