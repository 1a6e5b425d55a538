//! Arithmetic problem generation.
//!
//! Problems are spoken as a chain of operations whose textual order is the
//! evaluation order: divide, add, multiply, subtract. The division always
//! comes out even because the dividend is built as a product.

use super::level::Level;
use rand::Rng;
use serde::{Deserialize, Serialize};

/// A posed problem together with its answer.
///
/// The expected answer is what makes a problem active. The text is what was
/// spoken and may be empty when a session carried only the answer.
#[derive(Clone, PartialEq, Eq, Debug, Serialize, Deserialize)]
pub struct Problem {
    pub text: String,
    pub expected_answer: i64,
}

/// The sampled operands behind a problem.
///
/// `c` is derived as `a * b`, so `c / b == a` exactly.
#[derive(Clone, Copy, PartialEq, Eq, Debug)]
pub struct Operands {
    pub a: i64,
    pub b: i64,
    pub d: i64,
    pub e: i64,
    pub f: i64,
}

impl Operands {
    /// Draw operands for a level from the given random source.
    ///
    /// `a`, `b`, `d`, `e` come from `[1, 9^level)`. The subtracted term `f`
    /// comes from `[0, floor(0.3 * e * (a + d)))`, or is 0 when that range
    /// is empty.
    pub fn sample<R: Rng + ?Sized>(level: Level, rng: &mut R) -> Self {
        let bound = level.bound();
        let a = rng.gen_range(1..bound);
        let b = rng.gen_range(1..bound);
        let d = rng.gen_range(1..bound);
        let e = rng.gen_range(1..bound);
        let f_bound = subtraction_bound(a, d, e);
        let f = if f_bound > 0 {
            rng.gen_range(0..f_bound)
        } else {
            0
        };
        Self { a, b, d, e, f }
    }

    pub fn dividend(&self) -> i64 {
        self.a * self.b
    }

    /// Closed-form answer: `(a + d) * e - f`.
    pub fn answer(&self) -> i64 {
        (self.a + self.d) * self.e - self.f
    }
}

/// `floor(0.3 * e * (a + d))` in integer arithmetic.
fn subtraction_bound(a: i64, d: i64, e: i64) -> i64 {
    3 * e * (a + d) / 10
}

impl Problem {
    pub fn from_operands(operands: &Operands) -> Self {
        let Operands { b, d, e, f, .. } = *operands;
        let c = operands.dividend();
        Self {
            text: format!("what is {c} divided by {b}, plus {d}, times {e}, minus {f}?"),
            expected_answer: operands.answer(),
        }
    }

    /// A problem known only by its answer.
    pub fn answer_only(expected_answer: i64) -> Self {
        Self {
            text: String::new(),
            expected_answer,
        }
    }

    pub fn has_text(&self) -> bool {
        !self.text.is_empty()
    }

    pub fn is_answered_by(&self, answer: i64) -> bool {
        self.expected_answer == answer
    }
}

/// Generate a fresh problem for the given level.
///
/// # Example
///
/// ```rust
/// use mental_math::core::{generate_problem, Level};
/// use rand::rngs::StdRng;
/// use rand::SeedableRng;
///
/// let mut rng = StdRng::seed_from_u64(7);
/// let problem = generate_problem(Level::One, &mut rng);
/// assert!(problem.text.starts_with("what is "));
/// assert!(problem.expected_answer > 0);
/// ```
pub fn generate_problem<R: Rng + ?Sized>(level: Level, rng: &mut R) -> Problem {
    Problem::from_operands(&Operands::sample(level, rng))
}
