use crate::models::quiz::QuizQuestion;

/// Outcome of auto-scoring one quiz attempt.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct QuizScore {
    pub marks: i32,
    pub correct_count: i32,
    pub total_questions: i32,
}

pub struct GradingService;

impl GradingService {
    /// Scores a submitted answer sheet against the stored questions.
    ///
    /// The answers vector may be shorter or longer than the question list;
    /// missing or out-of-range entries simply score zero for that question.
    /// Marks are `correct / total * max_marks` truncated toward zero, so the
    /// result is always within `[0, max_marks]`.
    pub fn score_quiz(questions: &[QuizQuestion], answers: &[i32], max_marks: i32) -> QuizScore {
        let total_questions = questions.len() as i32;
        let mut correct_count = 0;

        for (i, question) in questions.iter().enumerate() {
            if answers.get(i).copied() == Some(question.correct_answer) {
                correct_count += 1;
            }
        }

        let marks = if total_questions == 0 {
            0
        } else {
            correct_count * max_marks / total_questions
        };

        QuizScore {
            marks,
            correct_count,
            total_questions,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn question(correct: i32) -> QuizQuestion {
        QuizQuestion {
            question: "q".to_string(),
            options: vec!["a".to_string(), "b".to_string(), "c".to_string(), "d".to_string()],
            correct_answer: correct,
        }
    }

    #[test]
    fn full_correct_sheet_earns_max_marks() {
        let questions = vec![question(1), question(2), question(0)];
        let score = GradingService::score_quiz(&questions, &[1, 2, 0], 30);
        assert_eq!(score.marks, 30);
        assert_eq!(score.correct_count, 3);
        assert_eq!(score.total_questions, 3);
    }

    #[test]
    fn half_correct_truncates_toward_zero() {
        // 2 questions, 1 correct, max 10 => floor(1/2 * 10) = 5
        let questions = vec![question(1), question(2)];
        let score = GradingService::score_quiz(&questions, &[1, 0], 10);
        assert_eq!(score.marks, 5);
        assert_eq!(score.correct_count, 1);
        assert_eq!(score.total_questions, 2);
    }

    #[test]
    fn empty_answers_score_zero() {
        let questions = vec![question(0), question(1)];
        let score = GradingService::score_quiz(&questions, &[], 10);
        assert_eq!(score.marks, 0);
        assert_eq!(score.correct_count, 0);
    }

    #[test]
    fn short_answer_sheet_only_grades_provided_entries() {
        let questions = vec![question(0), question(1), question(2)];
        let score = GradingService::score_quiz(&questions, &[0], 9);
        assert_eq!(score.correct_count, 1);
        assert_eq!(score.marks, 3);
    }

    #[test]
    fn extra_answers_are_ignored() {
        let questions = vec![question(3)];
        let score = GradingService::score_quiz(&questions, &[3, 0, 1, 2], 10);
        assert_eq!(score.marks, 10);
        assert_eq!(score.correct_count, 1);
        assert_eq!(score.total_questions, 1);
    }

    #[test]
    fn out_of_range_answers_never_match() {
        let questions = vec![question(0), question(1)];
        let score = GradingService::score_quiz(&questions, &[7, -1], 10);
        assert_eq!(score.marks, 0);
        assert_eq!(score.correct_count, 0);
    }

    #[test]
    fn marks_stay_within_bounds_for_arbitrary_sheets() {
        let questions = vec![question(0), question(1), question(2)];
        for answers in [
            vec![],
            vec![0],
            vec![0, 1, 2],
            vec![2, 2, 2, 2, 2, 2],
            vec![-5, 100, 3],
        ] {
            let score = GradingService::score_quiz(&questions, &answers, 17);
            assert!(score.marks >= 0 && score.marks <= 17, "answers {:?}", answers);
        }
    }
}
