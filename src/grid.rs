//! Axis-aligned rectangular sampling grids.
//!
//! The core treats the grid as caller-owned input; these helpers exist so
//! consumers and tests share one generator with the usual row-major meshgrid
//! orientation: `x[[i, j]] = xs[j]`, `y[[i, j]] = ys[i]`.

use ndarray as nd;

use crate::Float;

/// Expands two coordinate axes into a pair of same-shape coordinate arrays of
/// shape `(ys.len(), xs.len())`.
pub fn meshgrid(
    xs: &nd::Array1<Float>,
    ys: &nd::Array1<Float>,
) -> (nd::Array2<Float>, nd::Array2<Float>) {
    let shape = (ys.len(), xs.len());
    let x = nd::Array2::build_uninit(shape, |mut x| {
        for i in 0..ys.len() {
            for (j, &x_value) in xs.iter().enumerate() {
                x[[i, j]].write(x_value);
            }
        }
    });
    let y = nd::Array2::build_uninit(shape, |mut y| {
        for (i, &y_value) in ys.iter().enumerate() {
            for j in 0..xs.len() {
                y[[i, j]].write(y_value);
            }
        }
    });
    unsafe { (x.assume_init(), y.assume_init()) }
}

/// Meshgrid over `[xlim[0], xlim[1]] × [ylim[0], ylim[1]]` with
/// `resolution[0]` samples in x and `resolution[1]` samples in y.
pub fn rectangle(
    xlim: [Float; 2],
    ylim: [Float; 2],
    resolution: [usize; 2],
) -> (nd::Array2<Float>, nd::Array2<Float>) {
    let xs = nd::Array1::linspace(xlim[0], xlim[1], resolution[0]);
    let ys = nd::Array1::linspace(ylim[0], ylim[1], resolution[1]);
    meshgrid(&xs, &ys)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_meshgrid_orientation() {
        let xs = nd::array![0., 1., 2.];
        let ys = nd::array![10., 20.];
        let (x, y) = meshgrid(&xs, &ys);

        assert_eq!(x.dim(), (2, 3));
        assert_eq!(y.dim(), (2, 3));
        assert_eq!(x, nd::array![[0., 1., 2.], [0., 1., 2.]]);
        assert_eq!(y, nd::array![[10., 10., 10.], [20., 20., 20.]]);
    }

    #[test]
    fn test_rectangle_spans_limits() {
        let (x, y) = rectangle([-5., 5.], [-1., 1.], [200, 100]);
        assert_eq!(x.dim(), (100, 200));
        assert_eq!(x[[0, 0]], -5.);
        assert_eq!(x[[99, 199]], 5.);
        assert_eq!(y[[0, 0]], -1.);
        assert_eq!(y[[99, 199]], 1.);
    }
}
