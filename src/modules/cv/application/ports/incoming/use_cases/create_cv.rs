use async_trait::async_trait;

use super::text_field::{
    self, TextFieldError, EMAIL_MAX_LEN, NAME_MAX_LEN, SKILL_LEVEL_MAX_LEN, SKILL_NAME_MAX_LEN,
    TITLE_MAX_LEN,
};
use crate::modules::cv::application::ports::outgoing::{
    CreateCvData, NewEducation, NewExperience, NewSkill,
};
use crate::modules::cv::domain::entities::Cv;

//
// ──────────────────────────────────────────────────────────
// Create CV Command
// ──────────────────────────────────────────────────────────
//

#[derive(Debug, Clone)]
pub struct CreateCvCommand {
    data: CreateCvData,
}

#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum CreateCvCommandError {
    #[error("Name cannot be empty")]
    EmptyName,

    #[error("Email cannot be empty")]
    EmptyEmail,

    #[error("{field} cannot be empty")]
    EmptyField { field: String },

    #[error("{field} must not exceed {max} characters")]
    FieldTooLong { field: String, max: usize },
}

impl CreateCvCommand {
    pub fn new(
        name: String,
        email: String,
        experiences: Vec<NewExperience>,
        educations: Vec<NewEducation>,
        skills: Vec<NewSkill>,
    ) -> Result<Self, CreateCvCommandError> {
        let name = text_field::required(&name, NAME_MAX_LEN).map_err(|e| match e {
            TextFieldError::Empty => CreateCvCommandError::EmptyName,
            TextFieldError::TooLong(max) => too_long("name", max),
        })?;

        let email = text_field::required(&email, EMAIL_MAX_LEN).map_err(|e| match e {
            TextFieldError::Empty => CreateCvCommandError::EmptyEmail,
            TextFieldError::TooLong(max) => too_long("email", max),
        })?;

        let experiences = experiences
            .into_iter()
            .enumerate()
            .map(|(i, exp)| -> Result<NewExperience, CreateCvCommandError> {
                Ok(NewExperience {
                    company: field(&exp.company, TITLE_MAX_LEN, "experiences", i, "company")?,
                    position: field(&exp.position, TITLE_MAX_LEN, "experiences", i, "position")?,
                    from_date: exp.from_date,
                    to_date: exp.to_date,
                    description: text_field::optional(exp.description),
                })
            })
            .collect::<Result<Vec<_>, _>>()?;

        let educations = educations
            .into_iter()
            .enumerate()
            .map(|(i, edu)| -> Result<NewEducation, CreateCvCommandError> {
                Ok(NewEducation {
                    institution: field(
                        &edu.institution,
                        TITLE_MAX_LEN,
                        "educations",
                        i,
                        "institution",
                    )?,
                    degree: field(&edu.degree, TITLE_MAX_LEN, "educations", i, "degree")?,
                    from_date: edu.from_date,
                    to_date: edu.to_date,
                })
            })
            .collect::<Result<Vec<_>, _>>()?;

        let skills = skills
            .into_iter()
            .enumerate()
            .map(|(i, skill)| -> Result<NewSkill, CreateCvCommandError> {
                Ok(NewSkill {
                    name: field(&skill.name, SKILL_NAME_MAX_LEN, "skills", i, "name")?,
                    level: field(&skill.level, SKILL_LEVEL_MAX_LEN, "skills", i, "level")?,
                })
            })
            .collect::<Result<Vec<_>, _>>()?;

        Ok(Self {
            data: CreateCvData {
                name,
                email,
                experiences,
                educations,
                skills,
            },
        })
    }

    pub fn name(&self) -> &str {
        &self.data.name
    }

    pub fn email(&self) -> &str {
        &self.data.email
    }

    pub fn into_data(self) -> CreateCvData {
        self.data
    }
}

fn field(
    value: &str,
    max_len: usize,
    section: &str,
    index: usize,
    name: &str,
) -> Result<String, CreateCvCommandError> {
    let path = format!("{section}[{index}].{name}");

    text_field::required(value, max_len).map_err(|e| match e {
        TextFieldError::Empty => CreateCvCommandError::EmptyField { field: path },
        TextFieldError::TooLong(max) => CreateCvCommandError::FieldTooLong { field: path, max },
    })
}

fn too_long(field: &str, max: usize) -> CreateCvCommandError {
    CreateCvCommandError::FieldTooLong {
        field: field.to_string(),
        max,
    }
}

//
// ──────────────────────────────────────────────────────────
// Use Case Error
// ──────────────────────────────────────────────────────────
//

#[derive(Debug, Clone, thiserror::Error)]
pub enum CreateCvError {
    #[error("Email already exists")]
    EmailAlreadyExists,

    #[error("Integrity violation: {0}")]
    IntegrityViolation(String),

    #[error("Repository error: {0}")]
    RepositoryError(String),
}

//
// ──────────────────────────────────────────────────────────
// Incoming Port (Use Case)
// ──────────────────────────────────────────────────────────
//

#[async_trait]
pub trait CreateCvUseCase: Send + Sync {
    async fn execute(&self, command: CreateCvCommand) -> Result<Cv, CreateCvError>;
}
