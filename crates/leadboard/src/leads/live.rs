use super::domain::{LeadId, Rating, RoofingLead};
use rand::Rng;
use serde::Serialize;
use std::collections::HashMap;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub struct DisplayedScores {
    pub emergency: Rating,
    pub quality: Rating,
}

/// Presentation-only wobble applied to the ratings shown on lead cards.
///
/// The canonical lead values are never touched; callers keep sorting and aggregating
/// on the originals.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct LiveScoreJitter {
    pub change_probability: f64,
}

impl Default for LiveScoreJitter {
    fn default() -> Self {
        Self {
            change_probability: 0.3,
        }
    }
}

impl LiveScoreJitter {
    pub fn displayed<R: Rng + ?Sized>(
        &self,
        leads: &[RoofingLead],
        rng: &mut R,
    ) -> HashMap<LeadId, DisplayedScores> {
        leads
            .iter()
            .map(|lead| {
                let scores = DisplayedScores {
                    emergency: self.nudge(lead.emergency_level, rng),
                    quality: self.nudge(lead.quality_score, rng),
                };
                (lead.id.clone(), scores)
            })
            .collect()
    }

    fn nudge<R: Rng + ?Sized>(&self, rating: Rating, rng: &mut R) -> Rating {
        let probability = if self.change_probability.is_nan() {
            0.0
        } else {
            self.change_probability.clamp(0.0, 1.0)
        };
        if !rng.random_bool(probability) {
            return rating;
        }
        let step = if rng.random_bool(0.5) { 1 } else { -1 };
        Rating::saturating(i32::from(rating.get()) + step)
    }
}
