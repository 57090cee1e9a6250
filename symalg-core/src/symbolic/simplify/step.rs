//! The steps taken by the simplifier, and a way to collect them.

/// A type that collects the steps of an algorithm.
///
/// [`StepCollector`] is implemented for the unit type `()`, which discards every step, and for
/// [`Vec`], which keeps them in the order they were taken.
pub trait StepCollector<S> {
    /// Adds a step to the collector.
    fn push(&mut self, step: S);
}

impl<S> StepCollector<S> for () {
    #[inline]
    fn push(&mut self, _: S) {}
}

impl<S> StepCollector<S> for Vec<S> {
    #[inline]
    fn push(&mut self, step: S) {
        Vec::push(self, step);
    }
}

/// Possible simplification steps.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Step {
    /// `2+3 = 5`
    /// `2*1.5 = 3.0`
    FoldNumbers,

    /// `a+0 = a`
    DropZero,

    /// `2a+3a = 5a`
    CombineLikeTerms,

    /// `0*a = 0`
    MultiplyZero,

    /// `1*a = a`
    MultiplyOne,

    /// `a^2*a^3 = a^5`
    CombineLikeFactors,

    /// `(a/b)*(c/d) = (ac)/(bd)`
    MultiplyRationals,

    /// `(a/b)*c = (ac)/b`
    AbsorbIntoNumerator,

    /// `a*(b+c) = ab + ac`
    Distribute,

    /// `a^1 = a`
    PowerOne,

    /// `a^0 = 1`
    PowerZero,

    /// `0^a = 0`
    ZeroBase,

    /// `2^3 = 8`
    /// `2^-2 = 1/4`
    FoldPower,

    /// `a/1 = a`
    DivideByOne,

    /// `0/a = 0`
    ZeroNumerator,

    /// `(a/b)/(c/d) = (ad)/(bc)`
    RationalOverRational,

    /// `a/(b/c) = (ac)/b`
    InvertDenominator,

    /// `a/sin(x) = a*csc(x)`
    ReciprocalTrig,
}
