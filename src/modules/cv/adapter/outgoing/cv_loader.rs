use sea_orm::{ColumnTrait, ConnectionTrait, DbErr, EntityTrait, QueryFilter, QueryOrder};
use uuid::Uuid;

use super::sea_orm_entity::{cvs, educations, experiences, skills};
use crate::modules::cv::domain::entities::Cv;

/// Reads a CV root and its three child collections through `conn`.
///
/// Children come back in a stable order: dated entries by `from_date`,
/// skills by `name`, ties broken by id.
pub(super) async fn load_cv<C>(conn: &C, cv_id: Uuid) -> Result<Option<Cv>, DbErr>
where
    C: ConnectionTrait,
{
    match cvs::Entity::find_by_id(cv_id).one(conn).await? {
        Some(root) => Ok(Some(attach_children(conn, root).await?)),
        None => Ok(None),
    }
}

pub(super) async fn attach_children<C>(conn: &C, root: cvs::Model) -> Result<Cv, DbErr>
where
    C: ConnectionTrait,
{
    let experiences = experiences::Entity::find()
        .filter(experiences::Column::CvId.eq(root.id))
        .order_by_asc(experiences::Column::FromDate)
        .order_by_asc(experiences::Column::Id)
        .all(conn)
        .await?;

    let educations = educations::Entity::find()
        .filter(educations::Column::CvId.eq(root.id))
        .order_by_asc(educations::Column::FromDate)
        .order_by_asc(educations::Column::Id)
        .all(conn)
        .await?;

    let skills = skills::Entity::find()
        .filter(skills::Column::CvId.eq(root.id))
        .order_by_asc(skills::Column::Name)
        .order_by_asc(skills::Column::Id)
        .all(conn)
        .await?;

    Ok(root.to_domain(
        experiences.into_iter().map(|m| m.to_domain()).collect(),
        educations.into_iter().map(|m| m.to_domain()).collect(),
        skills.into_iter().map(|m| m.to_domain()).collect(),
    ))
}

/// Applies the read-side ordering to an aggregate assembled in memory.
pub(super) fn sort_children(cv: &mut Cv) {
    cv.experiences
        .sort_by(|a, b| (a.from_date, a.id).cmp(&(b.from_date, b.id)));
    cv.educations
        .sort_by(|a, b| (a.from_date, a.id).cmp(&(b.from_date, b.id)));
    cv.skills
        .sort_by(|a, b| (&a.name, a.id).cmp(&(&b.name, b.id)));
}
