//! Randomized search for an interval that brackets a root.

use rand::{Rng, SeedableRng};
use rand_chacha::ChaCha8Rng;
use tracing::{debug, trace};

use crate::compile::{compile, RealFunction};
use crate::error::{NumError, Result};

pub const DEFAULT_SEARCH_RANGE: f64 = 1000.0;
pub const DEFAULT_MAX_ATTEMPTS: usize = 10_000;

/// A closed interval `[low, high]` with `low <= high`.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Interval {
    low: f64,
    high: f64,
}

impl Interval {
    /// Build an interval from two endpoints in either order.
    pub fn new(a: f64, b: f64) -> Self {
        if a <= b {
            Interval { low: a, high: b }
        } else {
            Interval { low: b, high: a }
        }
    }

    pub fn low(&self) -> f64 {
        self.low
    }

    pub fn high(&self) -> f64 {
        self.high
    }

    pub fn width(&self) -> f64 {
        self.high - self.low
    }

    pub fn midpoint(&self) -> f64 {
        self.low + self.width() / 2.0
    }

    pub fn contains(&self, x: f64) -> bool {
        self.low <= x && x <= self.high
    }
}

impl From<Interval> for (f64, f64) {
    fn from(interval: Interval) -> Self {
        (interval.low, interval.high)
    }
}

/// Settings for the bracket search: endpoints are drawn uniformly from
/// `[-search_range, search_range]`, at most `max_attempts` pairs are tried.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct BracketSearch {
    pub search_range: f64,
    pub max_attempts: usize,
}

impl Default for BracketSearch {
    fn default() -> Self {
        Self {
            search_range: DEFAULT_SEARCH_RANGE,
            max_attempts: DEFAULT_MAX_ATTEMPTS,
        }
    }
}

enum Attempt {
    Found(Interval),
    NoSignChange,
    Discarded(NumError),
}

impl BracketSearch {
    pub fn new(search_range: f64, max_attempts: usize) -> Self {
        Self {
            search_range,
            max_attempts,
        }
    }

    /// Search for a bracket of the expression `input`, drawing from `rng`.
    ///
    /// An expression that does not compile, or that does not depend on `x`,
    /// ends with [`NumError::BracketNotFound`] reporting zero attempts, since
    /// nothing is sampled.
    pub fn find<R: Rng + ?Sized>(&self, input: &str, rng: &mut R) -> Result<Interval> {
        self.check_range()?;
        match compile(input) {
            Ok(function) if function.expr().depends_on_x() => self.search(&function, rng),
            Ok(_) => {
                debug!(expression = input, "constant expression never changes sign");
                Err(self.not_found(0))
            }
            Err(err) => {
                debug!(expression = input, error = %err, "expression does not compile");
                Err(self.not_found(0))
            }
        }
    }

    /// Like [`BracketSearch::find`] with a `ChaCha8Rng` seeded from `seed`.
    pub fn find_seeded(&self, input: &str, seed: u64) -> Result<Interval> {
        let mut rng = ChaCha8Rng::seed_from_u64(seed);
        self.find(input, &mut rng)
    }

    /// Search for a bracket of an already compiled function.
    pub fn search<F, R>(&self, f: &F, rng: &mut R) -> Result<Interval>
    where
        F: RealFunction + ?Sized,
        R: Rng + ?Sized,
    {
        self.check_range()?;
        debug!(
            search_range = self.search_range,
            max_attempts = self.max_attempts,
            "starting bracket search"
        );

        for attempt in 1..=self.max_attempts {
            let xa = self.draw(rng);
            let xb = self.draw(rng);
            let candidate = Interval::new(xa, xb);

            match self.try_candidate(f, candidate) {
                Attempt::Found(interval) => {
                    debug!(attempt, low = interval.low, high = interval.high, "bracket found");
                    return Ok(interval);
                }
                Attempt::NoSignChange => {}
                // A sampled point outside the function's domain is an expected
                // outcome of blind sampling: drop the pair and draw again.
                Attempt::Discarded(err) => {
                    trace!(attempt, error = %err, "discarding attempt");
                }
            }
        }

        debug!(max_attempts = self.max_attempts, "bracket search exhausted");
        Err(self.not_found(self.max_attempts))
    }

    fn try_candidate<F: RealFunction + ?Sized>(&self, f: &F, candidate: Interval) -> Attempt {
        let values = f
            .evaluate(candidate.low)
            .and_then(|fa| f.evaluate(candidate.high).map(|fb| (fa, fb)));
        match values {
            Ok((fa, fb)) if opposite_signs(fa, fb) => Attempt::Found(candidate),
            Ok(_) => Attempt::NoSignChange,
            Err(err) => Attempt::Discarded(err),
        }
    }

    fn draw<R: Rng + ?Sized>(&self, rng: &mut R) -> f64 {
        (rng.gen::<f64>() - 0.5) * 2.0 * self.search_range
    }

    // A negative range draws from the same symmetric interval as its
    // magnitude.
    fn check_range(&self) -> Result<()> {
        if self.search_range.is_finite() {
            Ok(())
        } else {
            Err(NumError::InvalidArgument(format!(
                "search range must be finite, got {}",
                self.search_range
            )))
        }
    }

    fn not_found(&self, attempts: usize) -> NumError {
        NumError::BracketNotFound {
            attempts,
            search_range: self.search_range.abs(),
        }
    }
}

/// Strictly opposite signs; an exact zero at either end does not count.
fn opposite_signs(fa: f64, fb: f64) -> bool {
    (fa < 0.0 && fb > 0.0) || (fa > 0.0 && fb < 0.0)
}

/// Search `[-search_range, search_range]` for a bracket of `input` using the
/// thread-local generator.
pub fn find_interval(input: &str, search_range: f64, max_attempts: usize) -> Result<Interval> {
    BracketSearch::new(search_range, max_attempts).find(input, &mut rand::thread_rng())
}
