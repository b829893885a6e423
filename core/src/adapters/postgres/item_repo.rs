//! PostgreSQL adapter for ItemCatalog

use async_trait::async_trait;
use sea_orm::{DatabaseConnection, EntityTrait};

use crate::domain::entities::{Item, ItemId};
use crate::domain::ports::ItemCatalog;
use crate::entity::items;
use crate::error::DomainError;

/// PostgreSQL implementation of ItemCatalog
pub struct PostgresItemCatalog {
    db: DatabaseConnection,
}

impl PostgresItemCatalog {
    pub fn new(db: DatabaseConnection) -> Self {
        Self { db }
    }
}

#[async_trait]
impl ItemCatalog for PostgresItemCatalog {
    async fn find_by_id(&self, id: ItemId) -> Result<Option<Item>, DomainError> {
        let result = items::Entity::find_by_id(id.0).one(&self.db).await?;

        Ok(result.map(|m| m.into()))
    }
}

/// Convert SeaORM model to domain entity
impl From<items::Model> for Item {
    fn from(model: items::Model) -> Self {
        Item {
            id: ItemId(model.id),
            name: model.name,
            price: model.price,
            stock: model.stock,
        }
    }
}
