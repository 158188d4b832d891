//! Probabilities used by the randomized transforms.

pub const FILLER_PASS_PROBABILITY: f64 = 0.4;
pub const FILLER_SENTENCE_PROBABILITY: f64 = 0.2;
pub const IMPERFECTION_PASS_PROBABILITY: f64 = 0.4;
pub const TYPO_PROBABILITY: f64 = 0.3;

/// Tunable probabilities for [`crate::add_texture`] and [`crate::add_imperfections`].
///
/// Every value must lie in `[0, 1]`.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct TransformSettings {
    /// Chance that the filler pass runs at all.
    pub filler_pass_probability: f64,
    /// Chance, per sentence, that a filler is prepended once the filler pass runs.
    pub filler_sentence_probability: f64,
    /// Chance that the typo pass runs at all.
    pub imperfection_pass_probability: f64,
    /// Chance, per typo table entry, that it is applied once the typo pass runs.
    pub typo_probability: f64,
}

impl Default for TransformSettings {
    fn default() -> Self {
        Self {
            filler_pass_probability: FILLER_PASS_PROBABILITY,
            filler_sentence_probability: FILLER_SENTENCE_PROBABILITY,
            imperfection_pass_probability: IMPERFECTION_PASS_PROBABILITY,
            typo_probability: TYPO_PROBABILITY,
        }
    }
}

impl TransformSettings {
    /// Settings where no random decoration is ever applied.
    pub fn disabled() -> Self {
        Self {
            filler_pass_probability: 0.0,
            filler_sentence_probability: 0.0,
            imperfection_pass_probability: 0.0,
            typo_probability: 0.0,
        }
    }

    /// Settings where every random decoration is always applied.
    pub fn always() -> Self {
        Self {
            filler_pass_probability: 1.0,
            filler_sentence_probability: 1.0,
            imperfection_pass_probability: 1.0,
            typo_probability: 1.0,
        }
    }

    /// Returns the name of the first probability outside `[0, 1]`, if any.
    pub fn invalid_field(&self) -> Option<&'static str> {
        let fields = [
            ("filler_pass_probability", self.filler_pass_probability),
            ("filler_sentence_probability", self.filler_sentence_probability),
            ("imperfection_pass_probability", self.imperfection_pass_probability),
            ("typo_probability", self.typo_probability),
        ];
        fields
            .into_iter()
            .find(|(_, p)| !(0.0..=1.0).contains(p))
            .map(|(name, _)| name)
    }
}
