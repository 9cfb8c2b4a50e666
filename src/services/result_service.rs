use crate::dto::result_dto::{ResultWithSubject, SemesterResultsResponse};
use crate::error::Result;
use crate::models::result::SubjectResult;
use crate::models::subject::Subject;
use serde::Serialize;
use sqlx::PgPool;
use uuid::Uuid;

/// Letter grades with their grade points, highest first.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub enum Grade {
    O,
    #[serde(rename = "A+")]
    APlus,
    A,
    #[serde(rename = "B+")]
    BPlus,
    B,
    C,
}

impl Grade {
    pub fn as_str(&self) -> &'static str {
        match self {
            Grade::O => "O",
            Grade::APlus => "A+",
            Grade::A => "A",
            Grade::BPlus => "B+",
            Grade::B => "B",
            Grade::C => "C",
        }
    }

    pub fn points(&self) -> i32 {
        match self {
            Grade::O => 10,
            Grade::APlus => 9,
            Grade::A => 8,
            Grade::BPlus => 7,
            Grade::B => 6,
            Grade::C => 5,
        }
    }
}

/// Maps a raw mark total to its letter grade. Breakpoints are inclusive
/// lower bounds checked top-down; anything below 50 is a C.
pub fn letter_grade(total: i32) -> Grade {
    if total >= 90 {
        Grade::O
    } else if total >= 80 {
        Grade::APlus
    } else if total >= 70 {
        Grade::A
    } else if total >= 60 {
        Grade::BPlus
    } else if total >= 50 {
        Grade::B
    } else {
        Grade::C
    }
}

/// Credit-weighted mean of grade points for one semester, rounded to two
/// decimal places. Zero total credits yields 0.0 rather than dividing.
pub fn semester_sgpa(entries: &[(i32, i32)]) -> f64 {
    let mut total_credits = 0;
    let mut total_points = 0;

    for (credits, total) in entries {
        total_credits += credits;
        total_points += letter_grade(*total).points() * credits;
    }

    if total_credits == 0 {
        return 0.0;
    }
    let sgpa = total_points as f64 / total_credits as f64;
    (sgpa * 100.0).round() / 100.0
}

#[derive(Clone)]
pub struct ResultService {
    pool: PgPool,
}

impl ResultService {
    pub fn new(pool: PgPool) -> Self {
        Self { pool }
    }

    pub async fn list_for_student(&self, student_id: Uuid) -> Result<Vec<ResultWithSubject>> {
        let results = sqlx::query_as::<_, SubjectResult>(
            r#"SELECT * FROM results WHERE student_id = $1"#,
        )
        .bind(student_id)
        .fetch_all(&self.pool)
        .await?;

        let mut out = Vec::with_capacity(results.len());
        for mut result in results {
            let subject = sqlx::query_as::<_, Subject>(r#"SELECT * FROM subjects WHERE id = $1"#)
                .bind(result.subject_id)
                .fetch_optional(&self.pool)
                .await?;
            let total = result.internal_total + result.end_sem;
            result.grade = Some(letter_grade(total).as_str().to_string());
            out.push(ResultWithSubject { result, subject });
        }
        Ok(out)
    }

    /// Recomputes per-subject grades and the SGPA for one semester. Results
    /// without a resolvable subject carry no credit weight, matching the
    /// stored-marks-only contract.
    pub async fn semester_results(
        &self,
        student_id: Uuid,
        semester: i32,
    ) -> Result<SemesterResultsResponse> {
        let results = sqlx::query_as::<_, SubjectResult>(
            r#"SELECT * FROM results WHERE student_id = $1 AND semester = $2"#,
        )
        .bind(student_id)
        .bind(semester)
        .fetch_all(&self.pool)
        .await?;

        let mut entries: Vec<(i32, i32)> = Vec::new();
        let mut total_credits = 0;
        let mut out = Vec::with_capacity(results.len());

        for mut result in results {
            let subject = sqlx::query_as::<_, Subject>(r#"SELECT * FROM subjects WHERE id = $1"#)
                .bind(result.subject_id)
                .fetch_optional(&self.pool)
                .await?;

            let total = result.internal_total + result.end_sem;
            result.grade = Some(letter_grade(total).as_str().to_string());

            if let Some(ref subject) = subject {
                entries.push((subject.credits, total));
                total_credits += subject.credits;
            }
            out.push(ResultWithSubject { result, subject });
        }

        Ok(SemesterResultsResponse {
            results: out,
            sgpa: semester_sgpa(&entries),
            total_credits,
        })
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn breakpoints_are_inclusive_lower_bounds() {
        assert_eq!(letter_grade(90), Grade::O);
        assert_eq!(letter_grade(89), Grade::APlus);
        assert_eq!(letter_grade(80), Grade::APlus);
        assert_eq!(letter_grade(79), Grade::A);
        assert_eq!(letter_grade(70), Grade::A);
        assert_eq!(letter_grade(60), Grade::BPlus);
        assert_eq!(letter_grade(59), Grade::B);
        assert_eq!(letter_grade(50), Grade::B);
        assert_eq!(letter_grade(49), Grade::C);
        assert_eq!(letter_grade(0), Grade::C);
    }

    #[test]
    fn grade_points_match_letters() {
        assert_eq!(letter_grade(90).points(), 10);
        assert_eq!(letter_grade(89).points(), 9);
        assert_eq!(letter_grade(0).points(), 5);
        assert_eq!(letter_grade(100).as_str(), "O");
        assert_eq!(letter_grade(85).as_str(), "A+");
    }

    #[test]
    fn sgpa_is_credit_weighted_and_rounded() {
        // grade(90) = O = 10, grade(50) = B = 6: (10*4 + 6*3) / 7 = 8.2857...
        let sgpa = semester_sgpa(&[(4, 90), (3, 50)]);
        assert_eq!(sgpa, 8.29);
    }

    #[test]
    fn sgpa_of_empty_semester_is_zero() {
        assert_eq!(semester_sgpa(&[]), 0.0);
        assert_eq!(semester_sgpa(&[(0, 90)]), 0.0);
    }

    #[test]
    fn sgpa_is_order_independent() {
        let a = semester_sgpa(&[(4, 90), (3, 50), (2, 72)]);
        let b = semester_sgpa(&[(2, 72), (4, 90), (3, 50)]);
        assert_eq!(a, b);
    }
}
