//! Order zero and order one Bessel kernels
//!
//! The integer-order evaluators only ever need J_0, J_1, Y_0 and Y_1. They
//! seed the recurrences and anchor the normalization of the backward
//! recurrence, so the accuracy of every J_n and Y_n is bounded by theirs.

/// Source of J_0, J_1, Y_0 and Y_1
///
/// # Example
///
/// ```
/// use intbessel::kernels::{Kernels, Libm};
///
/// let k = Libm;
/// assert!((k.j0(0.0) - 1.0).abs() < 1e-16);
/// assert_eq!(k.j1(0.0), 0.0);
/// assert_eq!(k.y0(0.0), f64::NEG_INFINITY);
/// ```
pub trait Kernels {
    /// Bessel function of the first kind, order zero
    fn j0(&self, x: f64) -> f64;
    /// Bessel function of the first kind, order one
    fn j1(&self, x: f64) -> f64;
    /// Bessel function of the second kind, order zero
    fn y0(&self, x: f64) -> f64;
    /// Bessel function of the second kind, order one
    fn y1(&self, x: f64) -> f64;
}

impl<K: Kernels + ?Sized> Kernels for &K {
    #[inline]
    fn j0(&self, x: f64) -> f64 {
        (**self).j0(x)
    }

    #[inline]
    fn j1(&self, x: f64) -> f64 {
        (**self).j1(x)
    }

    #[inline]
    fn y0(&self, x: f64) -> f64 {
        (**self).y0(x)
    }

    #[inline]
    fn y1(&self, x: f64) -> f64 {
        (**self).y1(x)
    }
}

/// Kernels from the `libm` crate
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct Libm;

impl Kernels for Libm {
    #[inline]
    fn j0(&self, x: f64) -> f64 {
        libm::j0(x)
    }

    #[inline]
    fn j1(&self, x: f64) -> f64 {
        libm::j1(x)
    }

    #[inline]
    fn y0(&self, x: f64) -> f64 {
        libm::y0(x)
    }

    #[inline]
    fn y1(&self, x: f64) -> f64 {
        libm::y1(x)
    }
}

/// Kernels given as four plain functions
///
/// # Example
///
/// ```
/// use intbessel::kernels::FnKernels;
/// use intbessel::Bessel;
///
/// let kernels = FnKernels {
///     j0: libm::j0,
///     j1: libm::j1,
///     y0: libm::y0,
///     y1: libm::y1,
/// };
/// let bessel = Bessel::new(kernels);
/// assert_eq!(bessel.jn(3, 2.5), intbessel::jn(3, 2.5));
/// ```
#[derive(Debug, Clone, Copy)]
pub struct FnKernels {
    pub j0: fn(f64) -> f64,
    pub j1: fn(f64) -> f64,
    pub y0: fn(f64) -> f64,
    pub y1: fn(f64) -> f64,
}

impl Default for FnKernels {
    fn default() -> Self {
        FnKernels {
            j0: libm::j0,
            j1: libm::j1,
            y0: libm::y0,
            y1: libm::y1,
        }
    }
}

impl Kernels for FnKernels {
    #[inline]
    fn j0(&self, x: f64) -> f64 {
        (self.j0)(x)
    }

    #[inline]
    fn j1(&self, x: f64) -> f64 {
        (self.j1)(x)
    }

    #[inline]
    fn y0(&self, x: f64) -> f64 {
        (self.y0)(x)
    }

    #[inline]
    fn y1(&self, x: f64) -> f64 {
        (self.y1)(x)
    }
}
