use contracts::auth::{ForgotPasswordRequest, LoginRequest, LoginResponse, UserInfo};

use crate::shared::api_client::{self, ApiError};

/// Login with username and password
pub async fn login(username: String, password: String) -> Result<LoginResponse, ApiError> {
    let request = LoginRequest { username, password };
    api_client::post_json("/api/auth/login", &request).await
}

/// Get current user info (validates the stored token)
pub async fn get_current_user() -> Result<UserInfo, String> {
    api_client::get_json("/api/auth/me").await
}

/// Request a password reset link
pub async fn forgot_password(email: String) -> Result<(), ApiError> {
    let request = ForgotPasswordRequest { email };
    api_client::post_no_content("/api/auth/forgot-password", &request).await
}
