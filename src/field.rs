//! Superposition of elementary flows and the derived-field pipeline.

use ndarray as nd;

use crate::{primitives::Primitive, Float};

#[derive(Debug, thiserror::Error, Clone, Copy, PartialEq, Eq)]
pub enum FieldError {
    #[error("mismatched grid shapes: x is {x:?}, y is {y:?}")]
    ShapeMismatch {
        x: (usize, usize),
        y: (usize, usize),
    },
}

pub type FieldResult<T> = Result<T, FieldError>;

/// Reference conditions for the Bernoulli pressure derivation.
///
/// Defaults to standard atmosphere: static pressure 101325 Pa and air density
/// 1.225 kg/m³.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct Ambient {
    pub p0: Float,
    pub rho: Float,
}

impl Default for Ambient {
    fn default() -> Self {
        Self {
            p0: 101_325.,
            rho: 1.225,
        }
    }
}

/// An ordered collection of flow primitives queried as one flow.
///
/// Potential flow is linear, so the aggregate velocity and stream function
/// are the elementwise sums over the primitives. Every query is a pure
/// function of the current primitive list and the input grid; nothing is
/// cached. The empty field is valid and yields all-zero fields.
#[derive(Clone, Debug, Default)]
pub struct FlowField {
    primitives: Vec<Primitive>,
}

impl FlowField {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn with_primitives(primitives: Vec<Primitive>) -> Self {
        Self { primitives }
    }

    /// Appends a primitive. No physical-sanity validation is performed;
    /// any combination, meaningful or not, remains queryable.
    pub fn add(&mut self, primitive: impl Into<Primitive>) {
        self.primitives.push(primitive.into());
    }

    /// The primitives in insertion order.
    pub fn primitives(&self) -> &[Primitive] {
        &self.primitives
    }

    fn check_shapes(x: &nd::Array2<Float>, y: &nd::Array2<Float>) -> FieldResult<()> {
        if x.dim() == y.dim() {
            Ok(())
        } else {
            Err(FieldError::ShapeMismatch {
                x: x.dim(),
                y: y.dim(),
            })
        }
    }

    /// Aggregate velocity components `[u, v]` over the grid.
    pub fn velocity(
        &self,
        x: &nd::Array2<Float>,
        y: &nd::Array2<Float>,
    ) -> FieldResult<[nd::Array2<Float>; 2]> {
        Self::check_shapes(x, y)?;
        log::trace!(
            "velocity query: {} primitives over {:?} grid",
            self.primitives.len(),
            x.dim()
        );
        let mut u = nd::Array2::zeros(x.raw_dim());
        let mut v = nd::Array2::zeros(x.raw_dim());
        for primitive in &self.primitives {
            let [primitive_u, primitive_v] = primitive.velocity(x, y);
            u += &primitive_u;
            v += &primitive_v;
        }
        Ok([u, v])
    }

    /// Aggregate stream function ψ over the grid.
    pub fn stream_function(
        &self,
        x: &nd::Array2<Float>,
        y: &nd::Array2<Float>,
    ) -> FieldResult<nd::Array2<Float>> {
        Self::check_shapes(x, y)?;
        log::trace!(
            "stream function query: {} primitives over {:?} grid",
            self.primitives.len(),
            x.dim()
        );
        let mut psi = nd::Array2::zeros(x.raw_dim());
        for primitive in &self.primitives {
            psi += &primitive.stream_function(x, y);
        }
        Ok(psi)
    }

    /// Flow speed |v| over the grid.
    pub fn speed(
        &self,
        x: &nd::Array2<Float>,
        y: &nd::Array2<Float>,
    ) -> FieldResult<nd::Array2<Float>> {
        let [u, v] = self.velocity(x, y)?;
        Ok(nd::Zip::from(&u).and(&v).map_collect(|&u, &v| u.hypot(v)))
    }

    /// The velocity far from every singularity: the vector sum of the
    /// uniform-stream primitives. All other variants decay to zero at
    /// infinity and contribute nothing by construction.
    pub fn freestream_velocity(&self) -> [Float; 2] {
        self.primitives
            .iter()
            .fold([0., 0.], |[u, v], primitive| {
                let [primitive_u, primitive_v] = primitive.freestream_velocity();
                [u + primitive_u, v + primitive_v]
            })
    }

    pub fn freestream_speed(&self) -> Float {
        let [u, v] = self.freestream_velocity();
        u.hypot(v)
    }

    /// Static pressure over the grid from the incompressible Bernoulli
    /// equation referenced to freestream conditions:
    /// p = p0 + ρ/2 (V∞² − speed²).
    ///
    /// `speed` is the aggregate speed array as produced by [`Self::speed`];
    /// wherever it equals the freestream speed the result is exactly
    /// `ambient.p0`.
    pub fn pressure(&self, speed: &nd::Array2<Float>, ambient: Ambient) -> nd::Array2<Float> {
        let freestream_speed = self.freestream_speed();
        let freestream_speed_sq = freestream_speed * freestream_speed;
        speed.mapv(|speed| ambient.p0 + 0.5 * ambient.rho * (freestream_speed_sq - speed * speed))
    }
}
