use sea_orm::entity::prelude::*;
use sea_orm::Set;
use serde::{Deserialize, Serialize};

use crate::modules::cv::application::ports::outgoing::NewExperience;
use crate::modules::cv::domain::entities::{CvId, Experience};

#[derive(Clone, Debug, PartialEq, Eq, DeriveEntityModel, Serialize, Deserialize)]
#[sea_orm(table_name = "experiences")]
pub struct Model {
    #[sea_orm(primary_key, auto_increment = false, column_type = "Uuid")]
    pub id: Uuid,

    #[sea_orm(column_name = "cv_id", column_type = "Uuid")]
    pub cv_id: Uuid,

    pub company: String,

    pub position: String,

    pub from_date: Date,

    #[sea_orm(nullable)]
    pub to_date: Option<Date>,

    #[sea_orm(column_type = "Text", nullable)]
    pub description: Option<String>,
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
    pub fn to_domain(self) -> Experience {
        Experience {
            id: self.id,
            cv_id: CvId::from(self.cv_id),
            company: self.company,
            position: self.position,
            from_date: self.from_date,
            to_date: self.to_date,
            description: self.description,
        }
    }
}

impl ActiveModel {
    pub fn from_new(cv_id: Uuid, data: NewExperience) -> Self {
        Self {
            id: Set(Uuid::new_v4()),
            cv_id: Set(cv_id),
            company: Set(data.company),
            position: Set(data.position),
            from_date: Set(data.from_date),
            to_date: Set(data.to_date),
            description: Set(data.description),
        }
    }
}
