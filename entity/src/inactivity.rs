use sea_orm::entity::prelude::*;

/// One row per tracked member, keyed by the Discord user ID.
#[derive(Clone, Debug, PartialEq, Eq, DeriveEntityModel)]
#[sea_orm(table_name = "inactivity")]
pub struct Model {
    #[sea_orm(primary_key, auto_increment = false)]
    pub member_id: String,
    pub guild_id: String,
    pub last_seen: Option<DateTimeUtc>,
    #[sea_orm(default_value = false)]
    pub role_added: bool,
}

#[derive(Copy, Clone, Debug, EnumIter, DeriveRelation)]
pub enum Relation {}

impl ActiveModelBehavior for ActiveModel {}
