//! Elementary solutions of the 2-D Laplace equation for the stream function.
//!
//! Each primitive is a closed-form solution, optionally translated away from
//! the grid origin, exposing its velocity components and stream function both
//! per point and mapped over a whole sampling grid. Superposition of
//! primitives is handled by [`crate::field::FlowField`].

use ndarray as nd;

use crate::{float_consts::TAU, Float};

/// Floor applied to r² before any division or logarithm.
///
/// Every primitive except the uniform stream is singular at its own offset
/// point. Rather than returning ±∞/NaN there, r² is clamped to this constant,
/// which makes all operations total at the price of a bounded inaccuracy
/// within ~√`R_SQ_FLOOR` of the singular point. A known approximation, not an
/// error condition.
pub const R_SQ_FLOOR: Float = 1e-10;

fn clamped_r_sq(x: Float, y: Float) -> Float {
    x.mul_add(x, y * y).max(R_SQ_FLOOR)
}

/// Uniform stream of speed `strength` at `angle` radians from the +x axis.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct Uniform {
    pub strength: Float,
    pub angle: Float,
    pub offset: [Float; 2],
}

impl Uniform {
    pub fn new(strength: Float) -> Self {
        Self {
            strength,
            angle: 0.,
            offset: [0., 0.],
        }
    }

    pub fn with_angle(self, angle: Float) -> Self {
        Self { angle, ..self }
    }

    pub fn with_offset(self, offset: [Float; 2]) -> Self {
        Self { offset, ..self }
    }

    fn velocity(self) -> [Float; 2] {
        [
            self.strength * self.angle.cos(),
            self.strength * self.angle.sin(),
        ]
    }
}

/// Point source (`strength` > 0) or sink (`strength` < 0) of volumetric rate
/// `strength`, singular at `offset`.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct SourceSink {
    pub strength: Float,
    pub offset: [Float; 2],
}

impl SourceSink {
    pub fn new(strength: Float) -> Self {
        Self {
            strength,
            offset: [0., 0.],
        }
    }

    pub fn with_offset(self, offset: [Float; 2]) -> Self {
        Self { offset, ..self }
    }
}

/// Point vortex of circulation `strength`, singular at `offset`.
///
/// Positive `strength` turns clockwise: the tangential line integral of the
/// velocity taken in the clockwise sense around any circle centered on
/// `offset` equals `strength`.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct Vortex {
    pub strength: Float,
    pub offset: [Float; 2],
}

impl Vortex {
    pub fn new(strength: Float) -> Self {
        Self {
            strength,
            offset: [0., 0.],
        }
    }

    pub fn with_offset(self, offset: [Float; 2]) -> Self {
        Self { offset, ..self }
    }
}

/// Doublet of moment `strength` aligned with the x axis, singular at
/// `offset`.
///
/// Velocity is the gradient of the potential φ = κx′/r², so there is no 2π
/// normalization anywhere in this variant; a doublet of strength κ = U·R²
/// opposing a uniform stream U produces the cylinder of radius R.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct Doublet {
    pub strength: Float,
    pub offset: [Float; 2],
}

impl Doublet {
    pub fn new(strength: Float) -> Self {
        Self {
            strength,
            offset: [0., 0.],
        }
    }

    pub fn with_offset(self, offset: [Float; 2]) -> Self {
        Self { offset, ..self }
    }
}

/// One elementary flow, dispatched over the four variants.
#[derive(Clone, Copy, Debug, PartialEq)]
pub enum Primitive {
    Uniform(Uniform),
    SourceSink(SourceSink),
    Vortex(Vortex),
    Doublet(Doublet),
}

impl From<Uniform> for Primitive {
    fn from(uniform: Uniform) -> Self {
        Self::Uniform(uniform)
    }
}
impl From<SourceSink> for Primitive {
    fn from(source_sink: SourceSink) -> Self {
        Self::SourceSink(source_sink)
    }
}
impl From<Vortex> for Primitive {
    fn from(vortex: Vortex) -> Self {
        Self::Vortex(vortex)
    }
}
impl From<Doublet> for Primitive {
    fn from(doublet: Doublet) -> Self {
        Self::Doublet(doublet)
    }
}

impl Primitive {
    pub fn strength(&self) -> Float {
        match self {
            Self::Uniform(uniform) => uniform.strength,
            Self::SourceSink(source_sink) => source_sink.strength,
            Self::Vortex(vortex) => vortex.strength,
            Self::Doublet(doublet) => doublet.strength,
        }
    }

    pub fn offset(&self) -> [Float; 2] {
        match self {
            Self::Uniform(uniform) => uniform.offset,
            Self::SourceSink(source_sink) => source_sink.offset,
            Self::Vortex(vortex) => vortex.offset,
            Self::Doublet(doublet) => doublet.offset,
        }
    }

    /// Translates grid coordinates into the primitive's own frame, so every
    /// formula below is expressed relative to its singular/reference point.
    fn shift(&self, x: Float, y: Float) -> (Float, Float) {
        let [dx, dy] = self.offset();
        (x - dx, y - dy)
    }

    /// Velocity components `[u, v]` at a single point.
    pub fn velocity_at(&self, x: Float, y: Float) -> [Float; 2] {
        let (x, y) = self.shift(x, y);
        match self {
            Self::Uniform(uniform) => uniform.velocity(),
            Self::SourceSink(source_sink) => {
                let factor = source_sink.strength / (TAU * clamped_r_sq(x, y));
                [factor * x, factor * y]
            }
            Self::Vortex(vortex) => {
                let factor = vortex.strength / (TAU * clamped_r_sq(x, y));
                [factor * y, -factor * x]
            }
            Self::Doublet(doublet) => {
                let r_sq = clamped_r_sq(x, y);
                let factor = doublet.strength / (r_sq * r_sq);
                [factor * y.mul_add(y, -(x * x)), -factor * 2. * x * y]
            }
        }
    }

    /// Stream function ψ at a single point.
    pub fn stream_function_at(&self, x: Float, y: Float) -> Float {
        let (x, y) = self.shift(x, y);
        match self {
            Self::Uniform(uniform) => {
                uniform.strength * (y * uniform.angle.cos() - x * uniform.angle.sin())
            }
            Self::SourceSink(source_sink) => source_sink.strength / TAU * y.atan2(x),
            // ln r = ln(r²) / 2, so the clamp protects the log as well.
            Self::Vortex(vortex) => vortex.strength / TAU * clamped_r_sq(x, y).ln() / 2.,
            Self::Doublet(doublet) => -doublet.strength * y / clamped_r_sq(x, y),
        }
    }

    /// This primitive's contribution to the velocity far from every
    /// singularity. Only the uniform stream survives at infinity.
    pub fn freestream_velocity(&self) -> [Float; 2] {
        match self {
            Self::Uniform(uniform) => uniform.velocity(),
            Self::SourceSink(_) | Self::Vortex(_) | Self::Doublet(_) => [0., 0.],
        }
    }

    /// Velocity components over a grid, as two arrays the shape of the grid.
    ///
    /// `x` and `y` must have equal shapes; [`crate::field::FlowField`]
    /// validates this before any primitive is queried.
    pub fn velocity(&self, x: &nd::Array2<Float>, y: &nd::Array2<Float>) -> [nd::Array2<Float>; 2] {
        let mut u = nd::Array2::zeros(x.raw_dim());
        let mut v = nd::Array2::zeros(x.raw_dim());
        nd::Zip::from(&mut u)
            .and(&mut v)
            .and(x)
            .and(y)
            .for_each(|u, v, &x, &y| {
                [*u, *v] = self.velocity_at(x, y);
            });
        [u, v]
    }

    /// Stream function over a grid. Same shape contract as [`Self::velocity`].
    pub fn stream_function(
        &self,
        x: &nd::Array2<Float>,
        y: &nd::Array2<Float>,
    ) -> nd::Array2<Float> {
        nd::Zip::from(x)
            .and(y)
            .map_collect(|&x, &y| self.stream_function_at(x, y))
    }
}
