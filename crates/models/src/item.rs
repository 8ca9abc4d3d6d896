use sea_orm::{entity::prelude::*, ActiveModelTrait, DatabaseConnection, EntityTrait, Set};
use serde::{Deserialize, Serialize};

use crate::errors;

#[derive(Clone, Debug, PartialEq, Eq, DeriveEntityModel, Serialize, Deserialize)]
#[sea_orm(table_name = "item")]
#[serde(rename_all = "camelCase")]
pub struct Model {
    #[sea_orm(primary_key)]
    pub id: i32,
    pub name: String,
    pub is_complete: bool,
}

#[derive(Copy, Clone, Debug, EnumIter, DeriveRelation)]
pub enum Relation {}

impl ActiveModelBehavior for ActiveModel {}

pub fn validate_name(name: &str) -> Result<(), errors::ModelError> {
    if name.trim().is_empty() {
        return Err(errors::ModelError::Validation("item name must not be empty".into()));
    }
    // Character count, matching the column length in the migration
    if name.chars().count() > 256 {
        return Err(errors::ModelError::Validation("item name too long (max 256)".into()));
    }
    Ok(())
}

/// Insert a new item; new items always start incomplete.
pub async fn create(db: &DatabaseConnection, name: &str) -> Result<Model, errors::ModelError> {
    validate_name(name)?;
    let am = ActiveModel {
        name: Set(name.to_string()),
        is_complete: Set(false),
        ..Default::default()
    };
    am.insert(db).await.map_err(|e| errors::ModelError::Db(e.to_string()))
}

pub async fn list(db: &DatabaseConnection) -> Result<Vec<Model>, errors::ModelError> {
    Entity::find()
        .all(db)
        .await
        .map_err(|e| errors::ModelError::Db(e.to_string()))
}

pub async fn find(db: &DatabaseConnection, id: i32) -> Result<Option<Model>, errors::ModelError> {
    Entity::find_by_id(id)
        .one(db)
        .await
        .map_err(|e| errors::ModelError::Db(e.to_string()))
}

/// Flip the completion flag of an item. Returns `None` when the id is
/// unknown.
pub async fn toggle_complete(
    db: &DatabaseConnection,
    id: i32,
) -> Result<Option<Model>, errors::ModelError> {
    let Some(found) = find(db, id).await? else {
        return Ok(None);
    };
    let was_complete = found.is_complete;
    let mut am: ActiveModel = found.into();
    am.is_complete = Set(!was_complete);
    let updated = am.update(db).await.map_err(|e| errors::ModelError::Db(e.to_string()))?;
    Ok(Some(updated))
}

/// Delete an item; returns true if a row was removed.
pub async fn delete(db: &DatabaseConnection, id: i32) -> Result<bool, errors::ModelError> {
    let res = Entity::delete_by_id(id)
        .exec(db)
        .await
        .map_err(|e| errors::ModelError::Db(e.to_string()))?;
    Ok(res.rows_affected > 0)
}

#[cfg(test)]
mod tests {
    use super::validate_name;

    #[test]
    fn name_validation() {
        assert!(validate_name("buy milk").is_ok());
        assert!(validate_name("").is_err());
        assert!(validate_name("   ").is_err());
        assert!(validate_name(&"x".repeat(257)).is_err());
        assert!(validate_name(&"x".repeat(256)).is_ok());
    }

    #[test]
    fn name_limit_counts_characters_not_bytes() {
        // 256 three-byte characters; fits the column even though it is
        // well over 256 bytes
        let name = "あ".repeat(256);
        assert!(name.len() > 256);
        assert!(validate_name(&name).is_ok());
        assert!(validate_name(&"あ".repeat(257)).is_err());
    }
}
