//! Synthetic lead generation for demos and fixtures.
//!
//! Every generator takes the randomness source and the reference time explicitly, so a
//! seeded [`StdRng`] and a fixed `now` reproduce the same collection.

mod crm;
mod roofing;
mod vocabulary;

pub use crm::generate_crm_leads;
pub use roofing::generate_roofing_leads;

use rand::rngs::StdRng;
use rand::{Rng, SeedableRng};
use serde::{Deserialize, Serialize};

/// Distribution targets for a generated collection.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct GeneratorConfig {
    pub lead_count: usize,
    /// Probability that a roofing lead is an emergency.
    pub emergency_rate: f64,
    /// Probability that a lead is captured outside business hours.
    pub after_hours_rate: f64,
    /// Probability that a lead arrives through the chatbot rather than by phone.
    pub chatbot_share: f64,
    /// Leads are spread uniformly over this many days before `now`.
    pub lookback_days: u32,
}

impl GeneratorConfig {
    pub fn roofing() -> Self {
        Self {
            lead_count: 32,
            emergency_rate: 0.30,
            after_hours_rate: 0.62,
            chatbot_share: 0.45,
            lookback_days: 30,
        }
    }

    pub fn sales_crm() -> Self {
        Self {
            lead_count: 50,
            emergency_rate: 0.0,
            after_hours_rate: 0.0,
            chatbot_share: 0.5,
            lookback_days: 30,
        }
    }
}

/// Builds the generator RNG; `None` seeds from the operating system.
pub fn seeded_rng(seed: Option<u64>) -> StdRng {
    match seed {
        Some(seed) => StdRng::seed_from_u64(seed),
        None => StdRng::from_os_rng(),
    }
}

fn pick<'a, R: Rng + ?Sized>(rng: &mut R, options: &[&'a str]) -> &'a str {
    if options.is_empty() {
        return "";
    }
    options[rng.random_range(0..options.len())]
}

fn chance<R: Rng + ?Sized>(rng: &mut R, probability: f64) -> bool {
    let probability = if probability.is_nan() {
        0.0
    } else {
        probability.clamp(0.0, 1.0)
    };
    rng.random_bool(probability)
}

fn email_for(name: &str, domain: &str) -> String {
    format!("{}@{domain}", name.to_lowercase().replacen(' ', ".", 1))
}
