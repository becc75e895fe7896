//! Campaign registration database entity for SeaORM.

use sea_orm::entity::prelude::*;

use crate::domain::Registration;

#[derive(Clone, Debug, PartialEq, Eq, DeriveEntityModel)]
#[sea_orm(table_name = "campaign_registrations")]
pub struct Model {
    #[sea_orm(primary_key, auto_increment = false)]
    pub id: Uuid,
    pub full_name: String,
    pub id_card_number: String,
    pub target_province: String,
    pub owner_id: Uuid,
    pub created_at: DateTimeUtc,
}

#[derive(Copy, Clone, Debug, EnumIter, DeriveRelation)]
pub enum Relation {
    #[sea_orm(
        belongs_to = "super::user::Entity",
        from = "Column::OwnerId",
        to = "super::user::Column::Id"
    )]
    Owner,
}

impl Related<super::user::Entity> for Entity {
    fn to() -> RelationDef {
        Relation::Owner.def()
    }
}

impl ActiveModelBehavior for ActiveModel {}

/// Convert database model to domain entity
impl From<Model> for Registration {
    fn from(model: Model) -> Self {
        Registration {
            id: model.id,
            full_name: model.full_name,
            id_card_number: model.id_card_number,
            target_province: model.target_province,
            owner_id: model.owner_id,
            created_at: model.created_at,
        }
    }
}
