//! Named constants and trigonometric functions that can appear in an expression.

use crate::consts::{E, PI};
use rug::Float;
#[cfg(feature = "serde")]
use serde::{Deserialize, Serialize};

/// A transcendental constant.
///
/// These are kept symbolic by the simplifier, so `π + π` simplifies to `2π` rather than a float.
/// They only take on a value during numeric evaluation.
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub enum Transcendental {
    /// Euler's number, `e`.
    E,

    /// The ratio of a circle's circumference to its diameter, `π`.
    Pi,
}

impl Transcendental {
    /// The symbol used to render the constant.
    pub fn symbol(self) -> &'static str {
        match self {
            Self::E => "e",
            Self::Pi => "π",
        }
    }

    /// The value of the constant.
    pub fn value(self) -> Float {
        match self {
            Self::E => E.clone(),
            Self::Pi => PI.clone(),
        }
    }
}

/// A trigonometric function applied to a single argument.
///
/// The functions come in reciprocal pairs: `sin` and `csc`, `cos` and `sec`, `tan` and `cot`.
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub enum Trig {
    Sin,
    Cos,
    Tan,
    Cot,
    Sec,
    Csc,
}

impl Trig {
    /// The name of the function.
    pub fn name(self) -> &'static str {
        match self {
            Self::Sin => "sin",
            Self::Cos => "cos",
            Self::Tan => "tan",
            Self::Cot => "cot",
            Self::Sec => "sec",
            Self::Csc => "csc",
        }
    }

    /// Returns the reciprocal function, such that `f(x) * f.reciprocal()(x) = 1`.
    pub fn reciprocal(self) -> Self {
        match self {
            Self::Sin => Self::Csc,
            Self::Cos => Self::Sec,
            Self::Tan => Self::Cot,
            Self::Cot => Self::Tan,
            Self::Sec => Self::Cos,
            Self::Csc => Self::Sin,
        }
    }

    /// Applies the function to the given value (in radians).
    pub fn eval(self, x: Float) -> Float {
        match self {
            Self::Sin => x.sin(),
            Self::Cos => x.cos(),
            Self::Tan => x.tan(),
            Self::Cot => x.cot(),
            Self::Sec => x.sec(),
            Self::Csc => x.csc(),
        }
    }
}
