//! User entity for SeaORM.

use sea_orm::Set;
use sea_orm::entity::prelude::*;

use reel_core::domain::{Email, PasswordHash, User};
use reel_core::error::RepoError;

#[derive(Clone, Debug, PartialEq, Eq, DeriveEntityModel)]
#[sea_orm(table_name = "users")]
pub struct Model {
    #[sea_orm(primary_key, auto_increment = false)]
    pub id: Uuid,
    #[sea_orm(unique)]
    pub email: String,
    #[sea_orm(column_type = "Text")]
    pub password_hash: String,
    #[sea_orm(column_type = "Text")]
    pub role: String,
    pub created_at: DateTimeWithTimeZone,
    pub updated_at: DateTimeWithTimeZone,
}

#[derive(Copy, Clone, Debug, EnumIter, DeriveRelation)]
pub enum Relation {}

impl ActiveModelBehavior for ActiveModel {}

/// Conversion from SeaORM Model to Domain User. Rows written outside this
/// service may carry values the domain rejects.
impl TryFrom<Model> for User {
    type Error = RepoError;

    fn try_from(model: Model) -> Result<Self, Self::Error> {
        let corrupt = |field: &str, e: reel_core::DomainError| {
            RepoError::Query(format!("invalid {field} in users row {}: {e}", model.id))
        };

        Ok(Self {
            id: model.id,
            email: Email::parse(&model.email).map_err(|e| corrupt("email", e))?,
            password_hash: PasswordHash::from_hash(model.password_hash.clone())
                .map_err(|e| corrupt("password_hash", e))?,
            role: model.role.parse().map_err(|e| corrupt("role", e))?,
            created_at: model.created_at.into(),
            updated_at: model.updated_at.into(),
        })
    }
}

/// Conversion from Domain User to SeaORM ActiveModel.
impl From<User> for ActiveModel {
    fn from(user: User) -> Self {
        Self {
            id: Set(user.id),
            email: Set(user.email.into()),
            password_hash: Set(user.password_hash.as_str().to_string()),
            role: Set(user.role.as_str().to_string()),
            created_at: Set(user.created_at.into()),
            updated_at: Set(user.updated_at.into()),
        }
    }
}
