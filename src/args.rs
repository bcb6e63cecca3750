//! Positional arguments for primitive constructors.
//!
//! Sketch code calls primitives either with flattened scalars
//! (`rect(x, y, w, h)`) or with grouped points (`rect((x, y), w, h)`).
//! [`Args`] keeps that flexibility at the API boundary; each primitive
//! resolves it exactly once into a typed request.

use std::fmt;

use crate::types::Point;

/// One positional argument
#[derive(Clone, Copy, Debug, PartialEq)]
pub enum Arg {
    Scalar(f64),
    Point(Point),
}

impl From<f64> for Arg {
    fn from(v: f64) -> Self {
        Arg::Scalar(v)
    }
}

impl From<f32> for Arg {
    fn from(v: f32) -> Self {
        Arg::Scalar(v as f64)
    }
}

impl From<i32> for Arg {
    fn from(v: i32) -> Self {
        Arg::Scalar(v as f64)
    }
}

impl From<Point> for Arg {
    fn from(p: Point) -> Self {
        Arg::Point(p)
    }
}

impl From<(f64, f64)> for Arg {
    fn from(t: (f64, f64)) -> Self {
        Arg::Point(t.into())
    }
}

impl From<(f64, f64, f64)> for Arg {
    fn from(t: (f64, f64, f64)) -> Self {
        Arg::Point(t.into())
    }
}

impl From<glam::DVec3> for Arg {
    fn from(v: glam::DVec3) -> Self {
        Arg::Point(v.into())
    }
}

/// Ordered positional arguments
#[derive(Clone, Debug, Default, PartialEq)]
pub struct Args(Vec<Arg>);

/// Build [`Args`] from a mix of scalars and point-likes.
///
/// ```
/// use sketchgeom::args;
///
/// let a = args![(0.0, 0.0), 10.0, 10.0];
/// assert_eq!(a.len(), 3);
/// ```
#[macro_export]
macro_rules! args {
    () => { $crate::args::Args::default() };
    ($($arg:expr),+ $(,)?) => {
        $crate::args::Args::from(vec![$($crate::args::Arg::from($arg)),+])
    };
}

impl Args {
    pub fn len(&self) -> usize {
        self.0.len()
    }

    pub fn is_empty(&self) -> bool {
        self.0.is_empty()
    }

    pub fn as_slice(&self) -> &[Arg] {
        &self.0
    }

    /// All arguments as scalars, if there are exactly `N` of them
    pub fn scalars<const N: usize>(&self) -> Option<[f64; N]> {
        if self.0.len() != N {
            return None;
        }
        let mut out = [0.0; N];
        for (slot, arg) in out.iter_mut().zip(&self.0) {
            match arg {
                Arg::Scalar(v) => *slot = *v,
                Arg::Point(_) => return None,
            }
        }
        Some(out)
    }

    /// All arguments as points, if there are exactly `N` of them
    pub fn points<const N: usize>(&self) -> Option<[Point; N]> {
        if self.0.len() != N {
            return None;
        }
        let mut out = [Point::ORIGIN; N];
        for (slot, arg) in out.iter_mut().zip(&self.0) {
            match arg {
                Arg::Point(p) => *slot = *p,
                Arg::Scalar(_) => return None,
            }
        }
        Some(out)
    }

    /// A leading point followed by exactly `N` scalars
    pub fn point_then_scalars<const N: usize>(&self) -> Option<(Point, [f64; N])> {
        let (first, rest) = self.0.split_first()?;
        let Arg::Point(p) = first else {
            return None;
        };
        Args(rest.to_vec()).scalars::<N>().map(|s| (*p, s))
    }

    /// Group a flat run of `N * DIM` scalars into `N` points of dimension
    /// `DIM` (2 or 3).
    pub fn flat_points<const N: usize>(&self, dim: usize) -> Option<[Point; N]> {
        if !(dim == 2 || dim == 3) || self.0.len() != N * dim {
            return None;
        }
        let mut out = [Point::ORIGIN; N];
        for (slot, chunk) in out.iter_mut().zip(self.0.chunks(dim)) {
            let mut c = [0.0; 3];
            for (v, arg) in c.iter_mut().zip(chunk) {
                match arg {
                    Arg::Scalar(s) => *v = *s,
                    Arg::Point(_) => return None,
                }
            }
            *slot = Point::new(c[0], c[1], c[2]);
        }
        Some(out)
    }

    /// Human readable description of the argument shape, for arity errors
    pub fn describe(&self) -> String {
        self.to_string()
    }
}

impl From<Vec<Arg>> for Args {
    fn from(v: Vec<Arg>) -> Self {
        Args(v)
    }
}

impl<const N: usize> From<[f64; N]> for Args {
    fn from(v: [f64; N]) -> Self {
        Args(v.into_iter().map(Arg::Scalar).collect())
    }
}

impl<const N: usize> From<[Point; N]> for Args {
    fn from(v: [Point; N]) -> Self {
        Args(v.into_iter().map(Arg::Point).collect())
    }
}

impl FromIterator<Arg> for Args {
    fn from_iter<I: IntoIterator<Item = Arg>>(iter: I) -> Self {
        Args(iter.into_iter().collect())
    }
}

impl fmt::Display for Args {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        if self.0.is_empty() {
            return write!(f, "no arguments");
        }
        let parts: Vec<&str> = self
            .0
            .iter()
            .map(|a| match a {
                Arg::Scalar(_) => "scalar",
                Arg::Point(_) => "point",
            })
            .collect();
        write!(f, "({})", parts.join(", "))
    }
}
