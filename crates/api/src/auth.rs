use crate::{
    connection::Connection,
    error::{format_retry_countdown, ApiError},
};
use model::admin_user::AdminUser;
use serde::{Deserialize, Serialize};
use session::Session;

#[derive(Serialize)]
struct LoginRequest<'a> {
    email: &'a str,
    password: &'a str,
}

#[derive(Deserialize)]
#[serde(rename_all = "camelCase")]
struct LoginResponse {
    token: String,
    refresh_token: String,
    user: AdminUser,
}

#[derive(Serialize)]
#[serde(rename_all = "camelCase")]
struct RefreshRequest<'a> {
    refresh_token: &'a str,
}

#[derive(Deserialize)]
#[serde(rename_all = "camelCase")]
struct RefreshResponse {
    token: String,
    refresh_token: String,
}

#[derive(Clone)]
pub struct Auth {
    conn: Connection,
    session: Session,
}

impl Auth {
    pub(crate) fn new(conn: Connection, session: Session) -> Self {
        Auth { conn, session }
    }

    /// Signs the session in on success. Failures map to user-facing text via
    /// [`login_error_message`].
    pub async fn login(&self, email: &str, password: &str) -> Result<AdminUser, ApiError> {
        let response: LoginResponse = self
            .conn
            .post("/api/auth/login", &LoginRequest { email, password })
            .await?;
        self.session.sign_in(
            response.token,
            response.refresh_token,
            response.user.clone(),
        );
        Ok(response.user)
    }

    /// Rotates the token pair using the stored refresh token. An expired
    /// refresh token signs the session out.
    pub async fn refresh(&self) -> Result<(), ApiError> {
        let refresh_token = self.session.refresh_token().ok_or(ApiError::Unauthorized)?;
        let result: Result<RefreshResponse, ApiError> = self
            .conn
            .post(
                "/api/auth/refresh",
                &RefreshRequest {
                    refresh_token: &refresh_token,
                },
            )
            .await;
        match result {
            Ok(response) => {
                self.session
                    .update_tokens(response.token, response.refresh_token);
                Ok(())
            }
            Err(ApiError::Unauthorized) => {
                self.session.sign_out();
                Err(ApiError::Unauthorized)
            }
            Err(err) => Err(err),
        }
    }

    pub fn logout(&self) {
        self.session.sign_out();
    }
}

/// Text shown under the login form for a failed attempt.
pub fn login_error_message(err: &ApiError) -> String {
    match err {
        ApiError::Unauthorized => "อีเมลหรือรหัสผ่านไม่ถูกต้อง".to_owned(),
        ApiError::RateLimited {
            retry_after: Some(seconds),
        } => format!(
            "พยายามเข้าสู่ระบบบ่อยเกินไป ลองใหม่ใน {}",
            format_retry_countdown(*seconds)
        ),
        ApiError::RateLimited { retry_after: None } => {
            "พยายามเข้าสู่ระบบบ่อยเกินไป กรุณาลองใหม่ภายหลัง".to_owned()
        }
        other => other.to_string(),
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_login_error_messages() {
        assert_eq!(
            login_error_message(&ApiError::Unauthorized),
            "อีเมลหรือรหัสผ่านไม่ถูกต้อง"
        );
        let msg = login_error_message(&ApiError::RateLimited {
            retry_after: Some(90),
        });
        assert!(msg.ends_with("1:30"));
        assert_eq!(
            login_error_message(&ApiError::Backend("boom".to_owned())),
            "boom"
        );
    }
}
