use crate::models::result::SubjectResult;
use crate::models::subject::Subject;
use serde::Serialize;

#[derive(Debug, Clone, Serialize)]
pub struct ResultWithSubject {
    #[serde(flatten)]
    pub result: SubjectResult,
    pub subject: Option<Subject>,
}

#[derive(Debug, Clone, Serialize)]
pub struct SemesterResultsResponse {
    pub results: Vec<ResultWithSubject>,
    pub sgpa: f64,
    pub total_credits: i32,
}
