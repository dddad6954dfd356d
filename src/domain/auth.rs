use crate::payload::{Fields, FromPayload, ValidationError, deserialize_from_payload};
use serde::Serialize;
use serde_json::Value;

#[derive(Clone, Debug, PartialEq, Eq, Serialize)]
pub struct UserToken {
    access_token: String,
    refresh_token: Option<String>,
}

impl UserToken {
    pub fn access_token(&self) -> &str {
        &self.access_token
    }

    pub fn refresh_token(&self) -> Option<&str> {
        self.refresh_token.as_deref()
    }
}

impl FromPayload for UserToken {
    const ENTITY: &'static str = "UserToken";

    fn from_payload(value: &Value) -> Result<Self, ValidationError> {
        let fields = Fields::of(Self::ENTITY, value)?;
        Ok(UserToken {
            access_token: fields.required("access_token")?,
            refresh_token: fields.optional("refresh_token")?,
        })
    }
}

/// Answer to a submitted SMS verification code.
#[derive(Clone, Debug, PartialEq, Eq, Serialize)]
pub struct PhoneVerificationResponse {
    user_token: UserToken,
}

impl PhoneVerificationResponse {
    pub fn user_token(&self) -> &UserToken {
        &self.user_token
    }
}

impl FromPayload for PhoneVerificationResponse {
    const ENTITY: &'static str = "PhoneVerificationResponse";

    fn from_payload(value: &Value) -> Result<Self, ValidationError> {
        let fields = Fields::of(Self::ENTITY, value)?;
        Ok(PhoneVerificationResponse {
            user_token: fields.nested("user_token")?,
        })
    }
}

/// Answer to an SMS code request; `id` identifies the request when the code is verified.
#[derive(Clone, Debug, PartialEq, Eq, Serialize)]
pub struct SmsCodeResponse {
    id: i64,
}

impl SmsCodeResponse {
    pub fn id(&self) -> i64 {
        self.id
    }
}

impl FromPayload for SmsCodeResponse {
    const ENTITY: &'static str = "SmsCodeResponse";

    fn from_payload(value: &Value) -> Result<Self, ValidationError> {
        let fields = Fields::of(Self::ENTITY, value)?;
        Ok(SmsCodeResponse { id: fields.required("id")? })
    }
}

deserialize_from_payload! { UserToken PhoneVerificationResponse SmsCodeResponse }
