//! Form state for the event-creation wizard.

use std::sync::Arc;

use crate::EventCategory;

/// The three wizard stages. Transitions are strictly linear: `next` and
/// `back` move one step and saturate at the ends, so no ordering can skip
/// a stage in either direction.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum WizardStep {
    Basics,
    DetailsAi,
    MediaReview,
}

impl WizardStep {
    pub const COUNT: usize = 3;

    pub fn next(self) -> Self {
        match self {
            WizardStep::Basics => WizardStep::DetailsAi,
            WizardStep::DetailsAi => WizardStep::MediaReview,
            WizardStep::MediaReview => WizardStep::MediaReview,
        }
    }

    pub fn back(self) -> Self {
        match self {
            WizardStep::Basics => WizardStep::Basics,
            WizardStep::DetailsAi => WizardStep::Basics,
            WizardStep::MediaReview => WizardStep::DetailsAi,
        }
    }

    pub fn position(self) -> usize {
        match self {
            WizardStep::Basics => 0,
            WizardStep::DetailsAi => 1,
            WizardStep::MediaReview => 2,
        }
    }

    pub fn title(self) -> &'static str {
        match self {
            WizardStep::Basics => "Informações Básicas",
            WizardStep::DetailsAi => "Detalhes & Magia IA",
            WizardStep::MediaReview => "Mídia & Revisão",
        }
    }
}

/// Cover image picked in the review step. Bytes live only in memory; nothing
/// is ever written out.
#[derive(Debug, Clone, PartialEq)]
pub struct CoverImage {
    pub file_name: String,
    pub bytes: Arc<[u8]>,
}

/// The draft being assembled across the wizard steps. All fields hold raw
/// form text; parsing (price, date) happens at presentation time so a
/// half-typed value never blocks navigation.
#[derive(Debug, Clone, PartialEq)]
pub struct EventDraft {
    pub title: String,
    pub category: EventCategory,
    pub date: String,
    pub time: String,
    pub location: String,
    pub price: String,
    pub key_details: String,
    pub description: String,
    pub cover: Option<CoverImage>,
}

impl Default for EventDraft {
    fn default() -> Self {
        Self {
            title: String::new(),
            category: EventCategory::Technology,
            date: String::new(),
            time: String::new(),
            location: String::new(),
            price: String::new(),
            key_details: String::new(),
            description: String::new(),
            cover: None,
        }
    }
}

/// Input handed to the description copywriter.
#[derive(Debug, Clone, PartialEq)]
pub struct DescriptionRequest {
    pub title: String,
    pub category: EventCategory,
    pub key_details: String,
}

impl DescriptionRequest {
    pub fn from_draft(draft: &EventDraft) -> Self {
        Self {
            title: draft.title.clone(),
            category: draft.category,
            key_details: draft.key_details.clone(),
        }
    }

    /// Precondition for invoking the copywriter. A failed validation must
    /// short-circuit before any request is issued.
    pub fn validate(&self) -> Result<(), &'static str> {
        if self.title.trim().is_empty() || self.key_details.trim().is_empty() {
            Err("Por favor, forneça um título e alguns detalhes primeiro.")
        } else {
            Ok(())
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn steps_advance_one_at_a_time_and_saturate() {
        assert_eq!(WizardStep::Basics.next(), WizardStep::DetailsAi);
        assert_eq!(WizardStep::DetailsAi.next(), WizardStep::MediaReview);
        assert_eq!(WizardStep::MediaReview.next(), WizardStep::MediaReview);

        assert_eq!(WizardStep::MediaReview.back(), WizardStep::DetailsAi);
        assert_eq!(WizardStep::DetailsAi.back(), WizardStep::Basics);
        assert_eq!(WizardStep::Basics.back(), WizardStep::Basics);
    }

    #[test]
    fn forward_then_back_returns_to_the_same_step() {
        for step in [WizardStep::Basics, WizardStep::DetailsAi] {
            assert_eq!(step.next().back(), step);
        }
    }

    #[test]
    fn validation_requires_title_and_key_details() {
        let mut req = DescriptionRequest {
            title: "Demo Launch".into(),
            category: EventCategory::Technology,
            key_details: "speaker: Ana; free snacks".into(),
        };
        assert!(req.validate().is_ok());

        req.title = "   ".into();
        assert!(req.validate().is_err());

        req.title = "Demo Launch".into();
        req.key_details = String::new();
        assert!(req.validate().is_err());
    }
}
