use crate::models::question_result::{QuestionKind, QuestionResult};

/// Aggregate totals for one attempt. Theory questions count 1/1 or 0/1;
/// practice questions carry their score/max pair.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub struct ScoreSummary {
    pub theory_correct: i32,
    pub theory_count: i32,
    pub total_score: i32,
    pub total_max: i32,
}

pub struct ScoringService;

impl ScoringService {
    /// Folds an attempt's ordered results into one summary. Pending rows
    /// stay out of both numerator and denominator until grading lands.
    /// Malformed rows (negative values, score above max) are logged and
    /// skipped, never folded in.
    pub fn aggregate(results: &[QuestionResult]) -> ScoreSummary {
        let mut summary = ScoreSummary::default();

        for result in results {
            if !result.is_well_formed() {
                tracing::warn!(
                    question_result_id = %result.id,
                    score = result.score,
                    max_score = result.max_score,
                    "skipping malformed question result in aggregation"
                );
                continue;
            }
            if !result.is_graded() {
                continue;
            }
            match result.kind {
                QuestionKind::Theory => {
                    summary.theory_count += 1;
                    if result.is_correct.unwrap_or(false) {
                        summary.theory_correct += 1;
                    }
                }
                QuestionKind::Practice | QuestionKind::ExamPractice => {
                    summary.total_score += result.score;
                    summary.total_max += result.max_score;
                }
            }
        }

        summary.total_score += summary.theory_correct;
        summary.total_max += summary.theory_count;
        summary
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::models::question_result::GradingStatus;
    use uuid::Uuid;

    fn theory(is_correct: bool) -> QuestionResult {
        QuestionResult {
            id: Uuid::new_v4(),
            attempt_id: Uuid::new_v4(),
            position: 0,
            question_text: "What does ARP resolve?".to_string(),
            kind: QuestionKind::Theory,
            grading_status: GradingStatus::Graded,
            is_correct: Some(is_correct),
            score: if is_correct { 1 } else { 0 },
            max_score: 1,
            network_guid: None,
            graded_at: None,
        }
    }

    fn practice(score: i32, max_score: i32, status: GradingStatus) -> QuestionResult {
        QuestionResult {
            id: Uuid::new_v4(),
            attempt_id: Uuid::new_v4(),
            position: 0,
            question_text: "Build the topology".to_string(),
            kind: QuestionKind::Practice,
            grading_status: status,
            is_correct: None,
            score,
            max_score,
            network_guid: Some("net-guid".to_string()),
            graded_at: None,
        }
    }

    #[test]
    fn merges_theory_counters_and_practice_sums() {
        let results = vec![theory(true), theory(false), practice(3, 5, GradingStatus::Graded)];
        let summary = ScoringService::aggregate(&results);
        assert_eq!(summary.theory_correct, 1);
        assert_eq!(summary.theory_count, 2);
        assert_eq!(summary.total_score, 4);
        assert_eq!(summary.total_max, 7);
    }

    #[test]
    fn pending_rows_are_excluded_from_both_sides() {
        let results = vec![theory(true), practice(0, 0, GradingStatus::Pending)];
        let summary = ScoringService::aggregate(&results);
        assert_eq!(summary.total_score, 1);
        assert_eq!(summary.total_max, 1);
    }

    #[test]
    fn malformed_rows_are_skipped() {
        let results = vec![
            practice(7, 5, GradingStatus::Graded),
            practice(-1, 5, GradingStatus::Graded),
            practice(2, 4, GradingStatus::Graded),
        ];
        let summary = ScoringService::aggregate(&results);
        assert_eq!(summary.total_score, 2);
        assert_eq!(summary.total_max, 4);
    }

    #[test]
    fn aggregation_is_idempotent() {
        let results = vec![theory(true), practice(3, 5, GradingStatus::Graded)];
        assert_eq!(
            ScoringService::aggregate(&results),
            ScoringService::aggregate(&results)
        );
    }

    #[test]
    fn totals_never_exceed_max() {
        let results = vec![theory(true), theory(true), practice(5, 5, GradingStatus::Graded)];
        let summary = ScoringService::aggregate(&results);
        assert!(summary.total_score >= 0);
        assert!(summary.total_score <= summary.total_max);
    }
}
