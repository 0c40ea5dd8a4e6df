use async_trait::async_trait;

use super::text_field::{self, TextFieldError, EMAIL_MAX_LEN, NAME_MAX_LEN};
use crate::modules::cv::application::ports::outgoing::PatchCvData;
use crate::modules::cv::domain::entities::{Cv, CvId};

//
// ──────────────────────────────────────────────────────────
// Patch CV Command
// ──────────────────────────────────────────────────────────
//

/// Absent fields are left unchanged. A present field must still satisfy
/// the same presence rule as on creation.
#[derive(Debug, Clone, Default)]
pub struct PatchCvCommand {
    data: PatchCvData,
}

#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum PatchCvCommandError {
    #[error("Name cannot be empty")]
    EmptyName,

    #[error("Email cannot be empty")]
    EmptyEmail,

    #[error("{field} must not exceed {max} characters")]
    FieldTooLong { field: String, max: usize },
}

impl PatchCvCommand {
    pub fn new(name: Option<String>, email: Option<String>) -> Result<Self, PatchCvCommandError> {
        let name = name
            .map(|n| {
                text_field::required(&n, NAME_MAX_LEN).map_err(|e| match e {
                    TextFieldError::Empty => PatchCvCommandError::EmptyName,
                    TextFieldError::TooLong(max) => PatchCvCommandError::FieldTooLong {
                        field: "name".to_string(),
                        max,
                    },
                })
            })
            .transpose()?;

        let email = email
            .map(|e| {
                text_field::required(&e, EMAIL_MAX_LEN).map_err(|e| match e {
                    TextFieldError::Empty => PatchCvCommandError::EmptyEmail,
                    TextFieldError::TooLong(max) => PatchCvCommandError::FieldTooLong {
                        field: "email".to_string(),
                        max,
                    },
                })
            })
            .transpose()?;

        Ok(Self {
            data: PatchCvData { name, email },
        })
    }

    pub fn is_empty(&self) -> bool {
        self.data.is_empty()
    }

    pub fn into_data(self) -> PatchCvData {
        self.data
    }
}

//
// ──────────────────────────────────────────────────────────
// Errors
// ──────────────────────────────────────────────────────────
//

#[derive(Debug, Clone, thiserror::Error)]
pub enum PatchCvError {
    #[error("CV not found")]
    NotFound,

    #[error("Email already exists")]
    EmailAlreadyExists,

    #[error("Repository error: {0}")]
    RepositoryError(String),
}

//
// ──────────────────────────────────────────────────────────
// Use case trait
// ──────────────────────────────────────────────────────────
//

#[async_trait]
pub trait PatchCvUseCase: Send + Sync {
    async fn execute(&self, cv_id: CvId, command: PatchCvCommand) -> Result<Cv, PatchCvError>;
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn empty_patch_is_allowed() {
        let cmd = PatchCvCommand::new(None, None).unwrap();

        assert!(cmd.is_empty());
        assert_eq!(cmd.into_data(), PatchCvData::default());
    }

    #[test]
    fn present_fields_are_trimmed() {
        let data = PatchCvCommand::new(Some(" Ada King ".to_string()), None)
            .unwrap()
            .into_data();

        assert_eq!(data.name.as_deref(), Some("Ada King"));
        assert_eq!(data.email, None);
    }

    #[test]
    fn blank_present_name_is_rejected() {
        let err = PatchCvCommand::new(Some("  ".to_string()), None).unwrap_err();
        assert_eq!(err, PatchCvCommandError::EmptyName);
    }

    #[test]
    fn blank_present_email_is_rejected() {
        let err = PatchCvCommand::new(None, Some(String::new())).unwrap_err();
        assert_eq!(err, PatchCvCommandError::EmptyEmail);
    }

    #[test]
    fn too_long_email_is_rejected() {
        let err = PatchCvCommand::new(None, Some("e".repeat(EMAIL_MAX_LEN + 1))).unwrap_err();
        assert_eq!(
            err,
            PatchCvCommandError::FieldTooLong {
                field: "email".to_string(),
                max: EMAIL_MAX_LEN
            }
        );
    }
}
