use chrono::{NaiveDate, TimeZone, Utc};
use uuid::Uuid;

use crate::cv::application::ports::incoming::use_cases::CreateCvCommand;
use crate::cv::application::ports::outgoing::{NewEducation, NewExperience, NewSkill};
use crate::cv::domain::entities::{Cv, CvId, Education, Experience, Skill};

pub fn date(y: i32, m: u32, d: u32) -> NaiveDate {
    NaiveDate::from_ymd_opt(y, m, d).unwrap()
}

/// A fully populated CV, as the read side would return it.
pub fn sample_cv() -> Cv {
    let cv_id = CvId::new();
    let stamp = Utc.with_ymd_and_hms(2024, 1, 1, 12, 0, 0).unwrap();

    Cv {
        id: cv_id,
        name: "Ada Lovelace".to_string(),
        email: "ada@example.com".to_string(),
        experiences: vec![Experience {
            id: Uuid::new_v4(),
            cv_id,
            company: "Analytical Engines Ltd".to_string(),
            position: "Engineer".to_string(),
            from_date: date(1840, 1, 1),
            to_date: None,
            description: None,
        }],
        educations: vec![Education {
            id: Uuid::new_v4(),
            cv_id,
            institution: "Home Tutoring".to_string(),
            degree: "Mathematics".to_string(),
            from_date: date(1828, 1, 1),
            to_date: Some(date(1835, 1, 1)),
        }],
        skills: vec![Skill {
            id: Uuid::new_v4(),
            cv_id,
            name: "Mathematics".to_string(),
            level: "advanced".to_string(),
        }],
        created_at: stamp,
        updated_at: stamp,
    }
}

pub fn ada_experience() -> NewExperience {
    NewExperience {
        company: "Analytical Engines Ltd".to_string(),
        position: "Engineer".to_string(),
        from_date: date(1840, 1, 1),
        to_date: None,
        description: None,
    }
}

pub fn ada_education() -> NewEducation {
    NewEducation {
        institution: "Home Tutoring".to_string(),
        degree: "Mathematics".to_string(),
        from_date: date(1828, 1, 1),
        to_date: Some(date(1835, 1, 1)),
    }
}

pub fn ada_skill() -> NewSkill {
    NewSkill {
        name: "Mathematics".to_string(),
        level: "advanced".to_string(),
    }
}

/// Create command for a CV with one entry of each kind.
pub fn ada_command(email: &str) -> CreateCvCommand {
    CreateCvCommand::new(
        "Ada Lovelace".to_string(),
        email.to_string(),
        vec![ada_experience()],
        vec![ada_education()],
        vec![ada_skill()],
    )
    .unwrap()
}
