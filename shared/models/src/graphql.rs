use serde::{Deserialize, Serialize};
use async_graphql::{InputObject, SimpleObject};
use validator::Validate;

use crate::auth::SignedToken;

pub const REGISTRATION_SUCCESSFUL: &str = "Registration successful";
pub const LOGIN_SUCCESSFUL: &str = "Login successful";

// Inputs for the auth mutations. Each is passed as the `data` argument.

#[derive(Debug, Clone, Serialize, Deserialize, InputObject, Validate)]
#[serde(rename_all = "camelCase")]
pub struct RegisterInput {
    #[validate(email(message = "email must be an email"))]
    pub email: String,
    #[validate(length(min = 6, message = "password must be longer than or equal to 6 characters"))]
    pub password: String,
    pub biometric_key: Option<String>,
}

#[derive(Debug, Clone, Serialize, Deserialize, InputObject, Validate)]
#[serde(rename_all = "camelCase")]
pub struct LoginInput {
    #[validate(email(message = "email must be an email"))]
    pub email: String,
    #[validate(length(min = 6, message = "password must be longer than or equal to 6 characters"))]
    pub password: String,
}

#[derive(Debug, Clone, Serialize, Deserialize, InputObject, Validate)]
#[serde(rename_all = "camelCase")]
pub struct BiometricLoginInput {
    pub biometric_key: String,
}

#[derive(Debug, Clone, Serialize, Deserialize, SimpleObject, PartialEq)]
#[serde(rename_all = "camelCase")]
pub struct AuthResponse {
    pub message: String,
    pub access_token: String,
}

impl AuthResponse {
    pub fn registered(token: SignedToken) -> Self {
        Self {
            message: REGISTRATION_SUCCESSFUL.to_string(),
            access_token: token.access_token,
        }
    }

    pub fn logged_in(token: SignedToken) -> Self {
        Self {
            message: LOGIN_SUCCESSFUL.to_string(),
            access_token: token.access_token,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_register_input_rules() {
        let valid = RegisterInput {
            email: "john@test.com".to_string(),
            password: "password123".to_string(),
            biometric_key: None,
        };
        assert!(valid.validate().is_ok());

        let bad_email = RegisterInput { email: "john".to_string(), ..valid.clone() };
        let errors = bad_email.validate().unwrap_err();
        assert!(errors.field_errors().contains_key("email"));

        let short_password = RegisterInput { password: "12345".to_string(), ..valid.clone() };
        let errors = short_password.validate().unwrap_err();
        assert!(errors.field_errors().contains_key("password"));

        let empty_key = RegisterInput { biometric_key: Some(String::new()), ..valid };
        assert!(empty_key.validate().is_ok());
    }

    #[test]
    fn test_biometric_key_is_not_validated() {
        let input = BiometricLoginInput { biometric_key: String::new() };
        assert!(input.validate().is_ok());
    }

    #[test]
    fn test_password_of_exactly_six_chars_is_accepted() {
        let input = LoginInput {
            email: "john@test.com".to_string(),
            password: "123456".to_string(),
        };
        assert!(input.validate().is_ok());
    }

    #[test]
    fn test_auth_response_messages() {
        let token = SignedToken { access_token: "abc".to_string() };
        assert_eq!(AuthResponse::registered(token.clone()).message, "Registration successful");

        let response = AuthResponse::logged_in(token);
        assert_eq!(response.message, "Login successful");
        assert_eq!(response.access_token, "abc");
    }
}
