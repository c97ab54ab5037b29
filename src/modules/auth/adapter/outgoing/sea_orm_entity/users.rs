use sea_orm::entity::prelude::*;
use uuid::Uuid;

#[derive(Clone, Debug, PartialEq, DeriveEntityModel)]
#[sea_orm(table_name = "users")]
pub struct Model {
    #[sea_orm(primary_key, auto_increment = false)]
    pub id: Uuid,
    #[sea_orm(unique)]
    pub username: String,
    #[sea_orm(unique)]
    pub email: String,
    pub password_hash: String,
    pub created_at: DateTimeWithTimeZone,
}

#[derive(Copy, Clone, Debug, EnumIter, DeriveRelation)]
pub enum Relation {
    #[sea_orm(
        has_many = "crate::modules::calculation::adapter::outgoing::sea_orm_entity::calculations::Entity"
    )]
    Calculations,
}

impl Related<crate::modules::calculation::adapter::outgoing::sea_orm_entity::calculations::Entity>
    for Entity
{
    fn to() -> RelationDef {
        Relation::Calculations.def()
    }
}

impl ActiveModelBehavior for ActiveModel {}
