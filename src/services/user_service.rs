use crate::dto::auth_dto::{LoginRequest, RegisterRequest};
use crate::error::{Error, Result};
use crate::models::user::User;
use crate::utils::crypto::{hash_password, verify_password};
use sqlx::PgPool;
use uuid::Uuid;

/// Year of study from the institutional email pattern
/// `cb.sc.u4cse{YY}XXX@...`: the two digits after `u4cse` are the intake
/// year code. Unknown codes default to first year.
pub fn extract_year_from_email(email: &str) -> i32 {
    let code = email
        .split('@')
        .next()
        .unwrap_or("")
        .rsplit('.')
        .next()
        .unwrap_or("");
    match code.get(5..7) {
        Some("25") => 1,
        Some("24") => 2,
        Some("23") => 3,
        Some("22") => 4,
        _ => 1,
    }
}

#[derive(Clone)]
pub struct UserService {
    pool: PgPool,
}

impl UserService {
    pub fn new(pool: PgPool) -> Self {
        Self { pool }
    }

    pub async fn register(&self, req: RegisterRequest) -> Result<User> {
        let existing: Option<Uuid> =
            sqlx::query_scalar(r#"SELECT id FROM users WHERE email = $1"#)
                .bind(&req.email)
                .fetch_optional(&self.pool)
                .await?;
        if existing.is_some() {
            return Err(Error::BadRequest("User already exists".to_string()));
        }

        let password_hash = hash_password(&req.password)
            .map_err(|e| Error::Internal(format!("Failed to hash password: {}", e)))?;

        let year = extract_year_from_email(&req.email);
        let semester = year * 2;

        let user = sqlx::query_as::<_, User>(
            r#"
            INSERT INTO users (name, email, password_hash, roll_no, year, semester, section)
            VALUES ($1, $2, $3, $4, $5, $6, $7)
            RETURNING *
            "#,
        )
        .bind(&req.name)
        .bind(&req.email)
        .bind(password_hash)
        .bind(&req.roll_no)
        .bind(year)
        .bind(semester)
        .bind(req.section.unwrap_or_else(|| "A".to_string()))
        .fetch_one(&self.pool)
        .await?;

        Ok(user)
    }

    pub async fn login(&self, req: LoginRequest) -> Result<User> {
        let user = sqlx::query_as::<_, User>(r#"SELECT * FROM users WHERE email = $1"#)
            .bind(&req.email)
            .fetch_optional(&self.pool)
            .await?
            .ok_or_else(|| Error::Unauthorized("Invalid credentials".to_string()))?;

        let ok = verify_password(&req.password, &user.password_hash)
            .map_err(|e| Error::Internal(format!("Failed to verify password: {}", e)))?;
        if !ok {
            return Err(Error::Unauthorized("Invalid credentials".to_string()));
        }

        Ok(user)
    }

    pub async fn get_by_id(&self, user_id: Uuid) -> Result<User> {
        sqlx::query_as::<_, User>(r#"SELECT * FROM users WHERE id = $1"#)
            .bind(user_id)
            .fetch_optional(&self.pool)
            .await?
            .ok_or_else(|| Error::Unauthorized("User not found".to_string()))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn year_codes_map_to_years_of_study() {
        assert_eq!(extract_year_from_email("cb.sc.u4cse25001@cb.students.amrita.edu"), 1);
        assert_eq!(extract_year_from_email("cb.sc.u4cse24042@cb.students.amrita.edu"), 2);
        assert_eq!(extract_year_from_email("cb.sc.u4cse23117@cb.students.amrita.edu"), 3);
        assert_eq!(extract_year_from_email("cb.sc.u4cse22999@cb.students.amrita.edu"), 4);
    }

    #[test]
    fn unknown_patterns_default_to_first_year() {
        assert_eq!(extract_year_from_email("someone@example.com"), 1);
        assert_eq!(extract_year_from_email("u4@x.edu"), 1);
        assert_eq!(extract_year_from_email(""), 1);
    }
}
