use sea_orm::entity::prelude::*;
use sea_orm::Set;
use serde::{Deserialize, Serialize};

use crate::modules::cv::application::ports::outgoing::NewSkill;
use crate::modules::cv::domain::entities::{CvId, Skill};

#[derive(Clone, Debug, PartialEq, Eq, DeriveEntityModel, Serialize, Deserialize)]
#[sea_orm(table_name = "skills")]
pub struct Model {
    #[sea_orm(primary_key, auto_increment = false, column_type = "Uuid")]
    pub id: Uuid,

    #[sea_orm(column_name = "cv_id", column_type = "Uuid")]
    pub cv_id: Uuid,

    pub name: String,

    pub level: String,
}

#[derive(Copy, Clone, Debug, EnumIter, DeriveRelation)]
pub enum Relation {
    #[sea_orm(
        belongs_to = "super::cvs::Entity",
        from = "Column::CvId",
        to = "super::cvs::Column::Id",
        on_update = "Cascade",
        on_delete = "Cascade"
    )]
    Cvs,
}

impl Related<super::cvs::Entity> for Entity {
    fn to() -> RelationDef {
        Relation::Cvs.def()
    }
}

impl ActiveModelBehavior for ActiveModel {}

impl Model {
    pub fn to_domain(self) -> Skill {
        Skill {
            id: self.id,
            cv_id: CvId::from(self.cv_id),
            name: self.name,
            level: self.level,
        }
    }
}

impl ActiveModel {
    pub fn from_new(cv_id: Uuid, data: NewSkill) -> Self {
        Self {
            id: Set(Uuid::new_v4()),
            cv_id: Set(cv_id),
            name: Set(data.name),
            level: Set(data.level),
        }
    }
}
