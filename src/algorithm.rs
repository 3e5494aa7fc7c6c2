//! Algorithm selectors.
//!
//! Each primitive kind has a closed set of scan-conversion or clipping
//! variants. The textual names match the command-script vocabulary, so
//! `"Bresenham".parse::<LineAlgorithm>()` round-trips through [`Display`].
//!
//! [`Display`]: std::fmt::Display

use crate::error::Error;
use std::fmt;
use std::str::FromStr;

/// Line scan-conversion variants.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum LineAlgorithm {
    /// Digital differential analyzer: floating-point stepping, rounded per step.
    Dda,
    /// Integer midpoint algorithm.
    Bresenham,
    /// Unit stepping along x with direct slope evaluation.
    Naive,
}

/// Polygon outline variants, one per line algorithm used for the edges.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum PolygonAlgorithm {
    /// Edges drawn with [`LineAlgorithm::Dda`].
    Dda,
    /// Edges drawn with [`LineAlgorithm::Bresenham`].
    Bresenham,
}

/// Curve variants.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum CurveAlgorithm {
    /// Single Bézier curve through all control points.
    Bezier,
    /// Uniform cubic B-spline. Accepted but renders nothing.
    BSpline,
}

/// Line clipping variants.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum ClipAlgorithm {
    /// Outcode-based iterative clipping.
    CohenSutherland,
    /// Parametric clipping.
    LiangBarsky,
}

impl From<PolygonAlgorithm> for LineAlgorithm {
    fn from(algorithm: PolygonAlgorithm) -> Self {
        match algorithm {
            PolygonAlgorithm::Dda => Self::Dda,
            PolygonAlgorithm::Bresenham => Self::Bresenham,
        }
    }
}

macro_rules! named_selector {
    ($ty:ident { $($variant:ident => $name:literal),+ $(,)? }) => {
        impl $ty {
            /// Name used in command scripts.
            #[must_use]
            pub const fn name(self) -> &'static str {
                match self {
                    $(Self::$variant => $name,)+
                }
            }
        }

        impl fmt::Display for $ty {
            fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
                f.write_str(self.name())
            }
        }

        impl FromStr for $ty {
            type Err = Error;

            fn from_str(s: &str) -> Result<Self, Self::Err> {
                match s {
                    $($name => Ok(Self::$variant),)+
                    _ => Err(Error::UnknownAlgorithm(s.to_string())),
                }
            }
        }
    };
}

named_selector!(LineAlgorithm {
    Dda => "DDA",
    Bresenham => "Bresenham",
    Naive => "Naive",
});

named_selector!(PolygonAlgorithm {
    Dda => "DDA",
    Bresenham => "Bresenham",
});

named_selector!(CurveAlgorithm {
    Bezier => "Bezier",
    BSpline => "B-spline",
});

named_selector!(ClipAlgorithm {
    CohenSutherland => "Cohen-Sutherland",
    LiangBarsky => "Liang-Barsky",
});
