use chrono::{Duration, TimeZone, Utc};
use student_portal_backend::models::assignment::SubmissionStatus;
use student_portal_backend::models::fee::{Fee, FeeStatus};
use student_portal_backend::models::quiz::QuizQuestion;
use student_portal_backend::services::assignment_service::classify_submission;
use student_portal_backend::services::fee_service::apply_payment;
use student_portal_backend::services::grading_service::GradingService;
use student_portal_backend::services::result_service::{letter_grade, semester_sgpa, Grade};
use uuid::Uuid;

fn quiz_questions(correct: &[i32]) -> Vec<QuizQuestion> {
    correct
        .iter()
        .map(|&c| QuizQuestion {
            question: format!("question with correct option {}", c),
            options: vec![
                "option 0".to_string(),
                "option 1".to_string(),
                "option 2".to_string(),
                "option 3".to_string(),
            ],
            correct_answer: c,
        })
        .collect()
}

#[test]
fn two_question_quiz_scenario() {
    // correct indices [1, 2], answers [1, 0], max 10 => one correct, 5 marks
    let questions = quiz_questions(&[1, 2]);
    let score = GradingService::score_quiz(&questions, &[1, 0], 10);
    assert_eq!(score.correct_count, 1);
    assert_eq!(score.total_questions, 2);
    assert_eq!(score.marks, 5);
}

#[test]
fn marks_are_bounded_for_any_answer_sheet() {
    let questions = quiz_questions(&[0, 1, 2, 3, 0]);
    let sheets: Vec<Vec<i32>> = vec![
        vec![],
        vec![0],
        vec![0, 1, 2, 3, 0],
        vec![3, 3, 3, 3, 3, 3, 3, 3],
        vec![-1, 42, 0, 1, 2],
    ];
    for answers in sheets {
        let score = GradingService::score_quiz(&questions, &answers, 25);
        assert!(
            score.marks >= 0 && score.marks <= 25,
            "marks out of range for {:?}",
            answers
        );
    }
}

#[test]
fn fully_correct_sheet_earns_max_marks() {
    let correct = [2, 0, 3, 1];
    let questions = quiz_questions(&correct);
    let score = GradingService::score_quiz(&questions, &correct, 40);
    assert_eq!(score.marks, 40);
    assert_eq!(score.correct_count, 4);
}

#[test]
fn grade_breakpoints_are_exact() {
    assert_eq!(letter_grade(90), Grade::O);
    assert_eq!(letter_grade(90).points(), 10);
    assert_eq!(letter_grade(89), Grade::APlus);
    assert_eq!(letter_grade(89).points(), 9);
    assert_eq!(letter_grade(0), Grade::C);
    assert_eq!(letter_grade(0).points(), 5);
}

#[test]
fn sgpa_aggregates_credit_weighted_points() {
    assert_eq!(semester_sgpa(&[]), 0.0);
    // O (10) over 4 credits and B (6) over 3 credits: 58/7 rounded to 8.29
    assert_eq!(semester_sgpa(&[(4, 90), (3, 50)]), 8.29);
}

#[test]
fn deadline_instant_is_on_time_and_one_second_later_is_late() {
    let deadline = Utc.with_ymd_and_hms(2025, 3, 15, 18, 0, 0).unwrap();
    assert_eq!(
        classify_submission(deadline, deadline),
        SubmissionStatus::Submitted
    );
    assert_eq!(
        classify_submission(deadline + Duration::seconds(1), deadline),
        SubmissionStatus::Late
    );
}

#[test]
fn any_payment_settles_the_ledger() {
    let fee = Fee {
        id: Uuid::new_v4(),
        student_id: Uuid::new_v4(),
        semester: 6,
        year: 3,
        tuition_fee: 50000,
        hostel_fee: 20000,
        other_fees: 5000,
        total_amount: 75000,
        paid_amount: 0,
        due_amount: 75000,
        due_date: Utc::now() + Duration::days(30),
        status: FeeStatus::Pending,
    };

    let updated = apply_payment(&fee, 500);
    assert_eq!(updated.paid_amount, 500);
    assert_eq!(updated.due_amount, 0);
    assert_eq!(updated.status, FeeStatus::Paid);
}
