use std::collections::HashSet;

use chrono::{Duration, NaiveDate};
use fake::faker::address::en::{CityPrefix, CitySuffix};
use fake::faker::internet::en::FreeEmail;
use fake::faker::name::en::{FirstName, LastName};
use fake::Fake;
use rand::rngs::StdRng;
use rand::seq::SliceRandom;
use rand::{Rng, SeedableRng};

use crate::error::GenError;

/// Number of consecutive collisions tolerated before giving up on a unique value
pub const MAX_UNIQUE_ATTEMPTS: usize = 1000;

/// The random state threaded through every synthesizer.
///
/// Issued emails are remembered for the lifetime of the context, so one
/// context should cover exactly one generation run.
#[derive(Debug)]
pub struct GenContext {
    rng: StdRng,
    issued_emails: HashSet<String>,
}

impl GenContext {
    #[must_use]
    pub fn seeded(seed: u64) -> Self {
        GenContext::with_rng(StdRng::seed_from_u64(seed))
    }

    #[must_use]
    pub fn from_entropy() -> Self {
        GenContext::with_rng(StdRng::from_entropy())
    }

    /// Seeded when `seed` is given, otherwise drawn from OS entropy
    #[must_use]
    pub fn new(seed: Option<u64>) -> Self {
        seed.map_or_else(GenContext::from_entropy, GenContext::seeded)
    }

    fn with_rng(rng: StdRng) -> Self {
        GenContext {
            rng,
            issued_emails: HashSet::new(),
        }
    }

    pub fn rng(&mut self) -> &mut StdRng {
        &mut self.rng
    }

    /// Picks one of `choices` uniformly.
    ///
    /// # Panics
    /// If `choices` is empty. Callers only pass non-empty literal sets.
    pub fn choose<'a, T: ?Sized>(&mut self, choices: &'a [&'a T]) -> &'a T {
        choices
            .choose(&mut self.rng)
            .copied()
            .expect("choices must not be empty")
    }

    /// A uniformly random day in `[start, end]`
    pub fn date_between(&mut self, start: NaiveDate, end: NaiveDate) -> NaiveDate {
        let span = end.signed_duration_since(start).num_days();
        if span <= 0 {
            return start;
        }
        start + Duration::days(self.rng.gen_range(0..=span))
    }

    /// North-American number: `+1`, area code, exchange and subscriber number
    pub fn phone_number(&mut self) -> String {
        let area_code: u16 = self.rng.gen_range(200..=999);
        let exchange: u16 = self.rng.gen_range(200..=999);
        let subscriber: u16 = self.rng.gen_range(1000..=9999);
        format!("+1{area_code}{exchange}{subscriber}")
    }

    /// A single-word-per-part city name such as `Lake Hannahton` or `Schimmelburgh`
    pub fn city(&mut self) -> String {
        let prefix: String = CityPrefix().fake_with_rng(&mut self.rng);
        let first: String = FirstName().fake_with_rng(&mut self.rng);
        let last: String = LastName().fake_with_rng(&mut self.rng);
        let suffix: String = CitySuffix().fake_with_rng(&mut self.rng);
        match self.rng.gen_range(0..4) {
            0 => format!("{prefix} {first}{suffix}"),
            1 => format!("{prefix} {first}"),
            2 => format!("{first}{suffix}"),
            _ => format!("{last}{suffix}"),
        }
    }

    /// # Errors
    /// Errors when no unseen email turns up within [`MAX_UNIQUE_ATTEMPTS`] draws
    pub fn unique_email(&mut self) -> Result<String, GenError> {
        let rng = &mut self.rng;
        draw_unique(&mut self.issued_emails, "email", || {
            FreeEmail().fake_with_rng(rng)
        })
    }
}

fn draw_unique(
    issued: &mut HashSet<String>,
    kind: &'static str,
    mut draw: impl FnMut() -> String,
) -> Result<String, GenError> {
    for _ in 0..MAX_UNIQUE_ATTEMPTS {
        let value = draw();
        if issued.insert(value.clone()) {
            return Ok(value);
        }
    }
    Err(GenError::UniqueExhausted(kind, MAX_UNIQUE_ATTEMPTS))
}
