use ndarray as nd;

use crate::Float;

pub struct AllCloseAssertion<'a, 'b, D: nd::Dimension> {
    left: &'a nd::Array<Float, D>,
    right: &'b nd::Array<Float, D>,

    rel_tol: Option<Float>,
    abs_tol: Option<Float>,
}

impl<D: nd::Dimension> AllCloseAssertion<'_, '_, D> {
    pub fn with_rel_tol(mut self, rel_tol: Float) -> Self {
        self.rel_tol = Some(rel_tol);
        self
    }

    pub fn with_abs_tol(mut self, abs_tol: Float) -> Self {
        self.abs_tol = Some(abs_tol);
        self
    }
}

impl<D: nd::Dimension> Drop for AllCloseAssertion<'_, '_, D> {
    #[track_caller]
    fn drop(&mut self) {
        assert!(
            self.rel_tol.is_some() || self.abs_tol.is_some(),
            "At least one tolerance must be specified"
        );
        let mut num_failures = 0;
        self.left
            .indexed_iter()
            .zip(self.right.iter())
            .for_each(|((index, left), right)| {
                let mut checker = approx::Relative::default();
                if let Some(rel_tol) = self.rel_tol {
                    checker = checker.max_relative(rel_tol);
                }
                if let Some(abs_tol) = self.abs_tol {
                    checker = checker.epsilon(abs_tol);
                }

                if !checker.eq(left, right) {
                    if num_failures < 20 {
                        eprintln!("At {index:?}, left = {left}, right = {right}");
                    }
                    num_failures += 1;
                }
            });
        assert!(
            num_failures == 0,
            "Didn't match at {num_failures}/{} elements",
            self.left.len()
        );
    }
}

#[track_caller]
pub fn assert_all_close<'a, 'b, D: nd::Dimension>(
    left: &'a nd::Array<Float, D>,
    right: &'b nd::Array<Float, D>,
) -> AllCloseAssertion<'a, 'b, D> {
    AllCloseAssertion {
        left,
        right,
        rel_tol: Some(1e-9),
        abs_tol: None,
    }
}
