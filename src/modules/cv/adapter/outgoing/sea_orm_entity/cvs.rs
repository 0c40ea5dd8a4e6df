use sea_orm::entity::prelude::*;
use sea_orm::{ActiveModelBehavior, ActiveValue, Set};
use serde::{Deserialize, Serialize};

use crate::modules::cv::domain::entities::{Cv, CvId, Education, Experience, Skill};

#[derive(Clone, Debug, PartialEq, Eq, DeriveEntityModel, Serialize, Deserialize)]
#[sea_orm(table_name = "cvs")]
pub struct Model {
    #[sea_orm(primary_key, auto_increment = false, column_type = "Uuid")]
    pub id: Uuid,

    pub name: String,
    pub email: String,

    pub created_at: DateTimeUtc,
    pub updated_at: DateTimeUtc,
}

#[derive(Copy, Clone, Debug, EnumIter, DeriveRelation)]
pub enum Relation {
    #[sea_orm(has_many = "super::experiences::Entity")]
    Experiences,

    #[sea_orm(has_many = "super::educations::Entity")]
    Educations,

    #[sea_orm(has_many = "super::skills::Entity")]
    Skills,
}

impl Related<super::experiences::Entity> for Entity {
    fn to() -> RelationDef {
        Relation::Experiences.def()
    }
}

impl Related<super::educations::Entity> for Entity {
    fn to() -> RelationDef {
        Relation::Educations.def()
    }
}

impl Related<super::skills::Entity> for Entity {
    fn to() -> RelationDef {
        Relation::Skills.def()
    }
}

#[async_trait::async_trait]
impl ActiveModelBehavior for ActiveModel {
    async fn before_save<C>(mut self, _db: &C, _insert: bool) -> Result<Self, DbErr>
    where
        C: ConnectionTrait,
    {
        if let ActiveValue::Set(name) = &self.name {
            self.name = Set(name.trim().to_string());
        }

        if let ActiveValue::Set(email) = &self.email {
            self.email = Set(email.trim().to_string());
        }

        Ok(self)
    }
}

impl Model {
    pub fn to_domain(
        self,
        experiences: Vec<Experience>,
        educations: Vec<Education>,
        skills: Vec<Skill>,
    ) -> Cv {
        Cv {
            id: CvId::from(self.id),
            name: self.name,
            email: self.email,
            experiences,
            educations,
            skills,
            created_at: self.created_at,
            updated_at: self.updated_at,
        }
    }
}
