use crate::core::survey::SurveyResponse;
use crate::core::tables::{CATEGORY_SIGNALS, CATEGORY_SIGNAL_THRESHOLD, QUESTIONS};
use crate::models::{HobbyCategory, Trait, TraitVector, UserProfile};

/// Score a trait takes when no question feeds it
const NEUTRAL_TRAIT_SCORE: f64 = 0.5;

/// Accumulated contribution alongside its achievable bounds
#[derive(Debug, Default, Clone, Copy)]
struct TraitAccumulator {
    value: f64,
    min: f64,
    max: f64,
}

impl TraitAccumulator {
    fn add(&mut self, answer: u8, max_answer: u8, weight: f64) {
        let at_max = weight * f64::from(max_answer);
        self.value += weight * f64::from(answer);
        self.min += at_max.min(0.0);
        self.max += at_max.max(0.0);
    }

    fn normalized(&self) -> f64 {
        let span = self.max - self.min;
        if span <= 0.0 {
            return NEUTRAL_TRAIT_SCORE;
        }
        ((self.value - self.min) / span).clamp(0.0, 1.0)
    }
}

/// Build a normalized user profile from a validated survey
///
/// Each answer is spread over its traits through the question table, then
/// every trait is rescaled against the smallest and largest sum any answer
/// set could produce, so profiles are comparable across users.
pub fn build_profile(survey: &SurveyResponse) -> UserProfile {
    let mut accumulators = [TraitAccumulator::default(); Trait::COUNT];

    for (question, answer) in QUESTIONS.iter().zip(survey.answers().iter()) {
        for (t, weight) in question.contributions {
            accumulators[*t as usize].add(*answer, question.max_answer, *weight);
        }
    }

    let traits: TraitVector = Trait::ALL
        .iter()
        .zip(accumulators.iter())
        .map(|(t, acc)| (*t, acc.normalized()))
        .collect();

    let preferred_category = infer_preferred_category(survey);

    tracing::debug!(?preferred_category, "Built user profile");

    UserProfile::new(traits, preferred_category)
}

/// Pick the category whose signal question scored highest
///
/// Only answers at or above the signal threshold count. Ties keep the
/// earlier entry of the signal table.
pub fn infer_preferred_category(survey: &SurveyResponse) -> Option<HobbyCategory> {
    let mut best: Option<(u8, HobbyCategory)> = None;

    for (question, category) in CATEGORY_SIGNALS {
        let Some(answer) = survey.answer(question) else {
            continue;
        };
        if answer < CATEGORY_SIGNAL_THRESHOLD {
            continue;
        }
        if best.map_or(true, |(top, _)| answer > top) {
            best = Some((answer, category));
        }
    }

    best.map(|(_, category)| category)
}
