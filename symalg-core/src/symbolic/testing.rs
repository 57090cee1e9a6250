//! Random expressions for property tests.

use rand::{rngs::StdRng, Rng, SeedableRng};
use super::expr::Expr;

const VARIABLES: [&str; 3] = ["x", "y", "z"];
const FLOATS: [f64; 4] = [0.5, 1.5, -2.0, 0.25];

/// Generates `n` random expressions, reproducibly from the given seed.
pub fn random_exprs(seed: u64, n: usize) -> Vec<Expr> {
    let mut rng = StdRng::seed_from_u64(seed);
    (0..n).map(|_| random_expr(&mut rng, 3)).collect()
}

/// Generates a leaf: a small number, a variable, or `π`.
fn random_leaf(rng: &mut StdRng) -> Expr {
    match rng.gen_range(0..10) {
        0..=2 => Expr::int(rng.gen_range(-3..=4)),
        3 => Expr::float(FLOATS[rng.gen_range(0..FLOATS.len())]),
        4 => Expr::pi(),
        _ => Expr::var(VARIABLES[rng.gen_range(0..VARIABLES.len())]),
    }
}

/// Generates an expression at most `depth` levels deep, built with the smart constructors.
fn random_expr(rng: &mut StdRng, depth: u32) -> Expr {
    if depth == 0 || rng.gen_bool(0.3) {
        return random_leaf(rng);
    }

    let lhs = random_expr(rng, depth - 1);
    match rng.gen_range(0..8) {
        0 | 1 => lhs.plus(random_expr(rng, depth - 1)),
        2 | 3 => lhs.times(random_expr(rng, depth - 1)),
        4 => {
            let power = Expr::int(rng.gen_range(-2..=3));
            lhs.clone().pow(power).unwrap_or(lhs)
        },
        5 => {
            let power = Expr::var(VARIABLES[rng.gen_range(0..VARIABLES.len())]);
            lhs.clone().pow(power).unwrap_or(lhs)
        },
        6 => {
            let denominator = random_expr(rng, depth - 1);
            lhs.clone().divide_by(denominator).unwrap_or(lhs)
        },
        _ => Expr::sin(lhs),
    }
}
