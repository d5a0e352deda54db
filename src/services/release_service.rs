use chrono::{DateTime, Utc};

use crate::models::question_result::QuestionResult;
use crate::models::section::Section;

/// Disclosure decision for one attempt. Never cached: the assembler
/// re-derives it on every read so an embargoed attempt flips to released
/// the moment the scheduled time passes, without any background job.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ReleaseState {
    /// Per-question outcomes and totals may be shown.
    Released,
    /// Every question is graded, but results are embargoed until the
    /// given time.
    ScheduledFrom(DateTime<Utc>),
    /// At least one question is still awaiting grading.
    PendingReview,
}

impl ReleaseState {
    pub fn is_released(&self) -> bool {
        matches!(self, ReleaseState::Released)
    }
}

pub struct ReleaseService;

impl ReleaseService {
    /// Attempt-level policy. Non-exam sections disclose immediately.
    /// Exam sections disclose only once every question result is graded
    /// and any scheduled release time has passed; incomplete grading wins
    /// over the schedule.
    pub fn evaluate(
        section: &Section,
        results: &[QuestionResult],
        now: DateTime<Utc>,
    ) -> ReleaseState {
        if !section.is_exam {
            return ReleaseState::Released;
        }
        if !results.iter().all(QuestionResult::is_graded) {
            return ReleaseState::PendingReview;
        }
        match section.results_available_from {
            Some(from) if now < from => ReleaseState::ScheduledFrom(from),
            _ => ReleaseState::Released,
        }
    }

    pub fn answer_available(
        section: &Section,
        results: &[QuestionResult],
        now: DateTime<Utc>,
    ) -> bool {
        Self::evaluate(section, results, now).is_released()
    }

    /// Section-level availability for catalog listings, where no
    /// per-question state exists yet: gated only on the scheduled time.
    pub fn section_answer_available(
        results_available_from: Option<DateTime<Utc>>,
        now: DateTime<Utc>,
    ) -> bool {
        match results_available_from {
            Some(from) => from <= now,
            None => true,
        }
    }
}
