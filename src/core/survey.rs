use serde::{Serialize, Serializer};
use serde_json::Value;
use std::collections::BTreeMap;
use thiserror::Error;

use crate::core::tables::{QUESTIONS, QUESTION_COUNT};

/// Errors raised while validating raw survey answers
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum ValidationError {
    #[error("unknown question identifier \"{id}\"")]
    UnknownQuestion { id: String },

    #[error("missing answer for question {question}")]
    MissingAnswer { question: u8 },

    #[error("answer for question {question} must be an integer")]
    InvalidType { question: u8 },

    #[error("answer {value} for question {question} is outside 0..={max}")]
    OutOfDomain { question: u8, value: i64, max: u8 },
}

impl ValidationError {
    /// Identifier of the question that failed validation
    pub fn question(&self) -> String {
        match self {
            ValidationError::UnknownQuestion { id } => id.clone(),
            ValidationError::MissingAnswer { question }
            | ValidationError::InvalidType { question }
            | ValidationError::OutOfDomain { question, .. } => question.to_string(),
        }
    }
}

/// A complete, validated set of survey answers
///
/// Can only be built through `TryFrom`, so every instance holds exactly one
/// in-domain answer per question.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct SurveyResponse {
    answers: [u8; QUESTION_COUNT],
}

impl SurveyResponse {
    /// Answer for a question id in 1..=8
    pub fn answer(&self, question: u8) -> Option<u8> {
        let index = usize::from(question).checked_sub(1)?;
        self.answers.get(index).copied()
    }

    /// Answers in question order
    pub fn answers(&self) -> &[u8; QUESTION_COUNT] {
        &self.answers
    }

    /// Back to the wire representation, keyed by question id
    pub fn to_raw(&self) -> BTreeMap<String, i64> {
        QUESTIONS
            .iter()
            .zip(self.answers.iter())
            .map(|(q, a)| (q.id.to_string(), i64::from(*a)))
            .collect()
    }
}

impl SurveyResponse {
    /// Validate answers in a fixed order: unknown ids first, then each
    /// question from 1 to 8. `read` yields `None` when a value is not an
    /// integer.
    fn check_answers<V>(
        raw: &BTreeMap<String, V>,
        read: impl Fn(&V) -> Option<i64>,
    ) -> Result<Self, ValidationError> {
        if let Some(id) = raw
            .keys()
            .find(|id| !QUESTIONS.iter().any(|q| q.id.to_string() == **id))
        {
            return Err(ValidationError::UnknownQuestion { id: id.clone() });
        }

        let mut answers = [0u8; QUESTION_COUNT];
        for (slot, q) in answers.iter_mut().zip(QUESTIONS.iter()) {
            let raw_value = raw
                .get(&q.id.to_string())
                .ok_or(ValidationError::MissingAnswer { question: q.id })?;
            let value = read(raw_value).ok_or(ValidationError::InvalidType { question: q.id })?;

            *slot = u8::try_from(value)
                .ok()
                .filter(|v| *v <= q.max_answer)
                .ok_or(ValidationError::OutOfDomain {
                    question: q.id,
                    value,
                    max: q.max_answer,
                })?;
        }

        Ok(Self { answers })
    }
}

impl TryFrom<&BTreeMap<String, i64>> for SurveyResponse {
    type Error = ValidationError;

    fn try_from(raw: &BTreeMap<String, i64>) -> Result<Self, Self::Error> {
        Self::check_answers(raw, |v| Some(*v))
    }
}

/// Loosely typed answers straight from a JSON body
impl TryFrom<&BTreeMap<String, Value>> for SurveyResponse {
    type Error = ValidationError;

    fn try_from(raw: &BTreeMap<String, Value>) -> Result<Self, Self::Error> {
        Self::check_answers(raw, Value::as_i64)
    }
}

impl TryFrom<BTreeMap<String, i64>> for SurveyResponse {
    type Error = ValidationError;

    fn try_from(raw: BTreeMap<String, i64>) -> Result<Self, Self::Error> {
        Self::try_from(&raw)
    }
}

impl Serialize for SurveyResponse {
    fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        self.to_raw().serialize(serializer)
    }
}
