//! Shared test suite for Tessera
//!
//! Behavioural tests that drive the public API end to end: construction,
//! coordinate access, and reshape.

pub mod creation;
pub mod indexing;
pub mod reshape;

/// Test utilities
pub mod utils {
    use tessera_core::Array;

    /// Install a test logger; safe to call from every test
    pub fn init_logging() {
        let _ = env_logger::builder().is_test(true).try_init();
    }

    /// Check if two f64 values are approximately equal
    pub fn approx_eq(a: f64, b: f64, tol: f64) -> bool {
        if a.is_nan() && b.is_nan() {
            return true;
        }
        if a.is_infinite() && b.is_infinite() {
            return a.signum() == b.signum();
        }
        (a - b).abs() < tol
    }

    /// Check if two arrays are approximately equal
    pub fn arrays_approx_eq<A: Array>(a: &A, b: &A, tol: f64) -> bool {
        if a.shape() != b.shape() {
            return false;
        }
        a.as_slice()
            .iter()
            .zip(b.as_slice())
            .all(|(&x, &y)| approx_eq(x, y, tol))
    }

    /// Every in-bounds coordinate of `shape`, in row-major order
    pub fn coordinates(shape: &[usize]) -> Vec<Vec<isize>> {
        let mut out = vec![Vec::with_capacity(shape.len())];
        for &extent in shape {
            out = out
                .into_iter()
                .flat_map(|prefix| {
                    (0..extent as isize).map(move |i| {
                        let mut coord = prefix.clone();
                        coord.push(i);
                        coord
                    })
                })
                .collect();
        }
        out
    }

    /// Default tolerance for floating point comparisons
    pub const DEFAULT_TOL: f64 = 1e-10;
}
