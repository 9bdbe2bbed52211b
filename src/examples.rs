//! Ready-made classical flow configurations.
//!
//! Each function assembles the primitive list for a textbook scenario; the
//! caller picks the grid and renders the derived fields however it likes.

use crate::{
    field::FlowField,
    primitives::{Doublet, SourceSink, Uniform, Vortex},
    Float,
};

/// Flow past a circular cylinder of the given radius: a uniform stream of
/// speed `u` opposed by a doublet of strength `u * radius²`. The dividing
/// streamline ψ = 0 is the cylinder surface.
pub fn cylinder(u: Float, radius: Float) -> FlowField {
    FlowField::with_primitives(vec![
        Uniform::new(u).into(),
        Doublet::new(u * radius * radius).into(),
    ])
}

/// Flow past a rotating cylinder (the Magnus configuration): the cylinder
/// flow plus a vortex of the given circulation at the cylinder center.
pub fn rotating_cylinder(u: Float, radius: Float, circulation: Float) -> FlowField {
    let mut field = cylinder(u, radius);
    field.add(Vortex::new(circulation));
    field
}

/// A source and an equal-strength sink facing each other across the origin
/// on the x axis, `separation` apart.
pub fn source_sink_pair(rate: Float, separation: Float) -> FlowField {
    FlowField::with_primitives(vec![
        SourceSink::new(rate).with_offset([separation / 2., 0.]).into(),
        SourceSink::new(-rate)
            .with_offset([-separation / 2., 0.])
            .into(),
    ])
}

/// A uniform stream with a vortex embedded in it.
pub fn uniform_vortex(u: Float, circulation: Float) -> FlowField {
    FlowField::with_primitives(vec![
        Uniform::new(u).into(),
        Vortex::new(circulation).into(),
    ])
}
