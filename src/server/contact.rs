//! Contact-form submissions. They are validated and logged, nothing else.

use serde::{Deserialize, Serialize};

use super::error::ApiError;

/// Body of `POST /api/contact` as sent by the site.
#[derive(Debug, Clone, Default, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ContactRequest {
    pub name: Option<String>,
    pub email: Option<String>,
    pub project_type: Option<String>,
    pub message: Option<String>,
}

/// A submission with every required field present.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct ContactSubmission {
    pub name: String,
    pub email: String,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub project_type: Option<String>,
    pub message: String,
}

impl ContactRequest {
    /// Trim fields and require name, email and message.
    pub fn validate(self) -> Result<ContactSubmission, ApiError> {
        let name = required(self.name)?;
        let email = required(self.email)?;
        let message = required(self.message)?;
        let project_type = self
            .project_type
            .map(|t| t.trim().to_string())
            .filter(|t| !t.is_empty());

        Ok(ContactSubmission {
            name,
            email,
            project_type,
            message,
        })
    }
}

fn required(field: Option<String>) -> Result<String, ApiError> {
    field
        .map(|value| value.trim().to_string())
        .filter(|value| !value.is_empty())
        .ok_or(ApiError::MissingContactFields)
}
