//! PostgreSQL adapter for CartLedger

use async_trait::async_trait;
use sea_orm::{
    ColumnTrait, ConnectionTrait, DatabaseBackend, DatabaseConnection, DbErr, EntityTrait,
    QueryFilter, SqlErr, Statement,
};

use crate::domain::entities::{validate_quantity, CartSnapshot, ItemId, UserId};
use crate::domain::ports::CartLedger;
use crate::entity::carts;
use crate::error::DomainError;

const UPSERT_CART_ENTRY: &str = "INSERT INTO carts (user_id, item_id, quantity) \
     VALUES ($1, $2, $3) \
     ON CONFLICT (user_id, item_id) \
     DO UPDATE SET quantity = carts.quantity + EXCLUDED.quantity";

/// PostgreSQL implementation of CartLedger
pub struct PostgresCartLedger {
    db: DatabaseConnection,
}

impl PostgresCartLedger {
    pub fn new(db: DatabaseConnection) -> Self {
        Self { db }
    }
}

#[async_trait]
impl CartLedger for PostgresCartLedger {
    #[tracing::instrument(skip(self, user_id, item_id), fields(user_id = %user_id, item_id = %item_id))]
    async fn add_item(
        &self,
        user_id: &UserId,
        item_id: ItemId,
        quantity: i32,
    ) -> Result<(), DomainError> {
        user_id.validate()?;
        validate_quantity(item_id, quantity)?;

        // Single statement so two concurrent adds for the same pair both land
        let stmt = Statement::from_sql_and_values(
            DatabaseBackend::Postgres,
            UPSERT_CART_ENTRY,
            [user_id.as_str().into(), item_id.0.into(), quantity.into()],
        );

        self.db
            .execute(stmt)
            .await
            .map_err(|e| unknown_item_or_database(e, item_id))?;

        tracing::debug!(quantity, "Cart entry merged");
        Ok(())
    }

    #[tracing::instrument(skip(self, user_id), fields(user_id = %user_id))]
    async fn get_cart(&self, user_id: &UserId) -> Result<CartSnapshot, DomainError> {
        user_id.validate()?;

        let rows = carts::Entity::find()
            .filter(carts::Column::UserId.eq(user_id.as_str()))
            .all(&self.db)
            .await?;

        CartSnapshot::from_lines(rows.into_iter().map(|m| (ItemId(m.item_id), m.quantity)))
    }

    #[tracing::instrument(skip(self, user_id), fields(user_id = %user_id))]
    async fn clear_cart(&self, user_id: &UserId) -> Result<(), DomainError> {
        user_id.validate()?;

        let result = carts::Entity::delete_many()
            .filter(carts::Column::UserId.eq(user_id.as_str()))
            .exec(&self.db)
            .await?;

        tracing::debug!(removed = result.rows_affected, "Cart cleared");
        Ok(())
    }
}

/// The carts -> items foreign key is the only check that an item exists
fn unknown_item_or_database(err: DbErr, item_id: ItemId) -> DomainError {
    match err.sql_err() {
        Some(SqlErr::ForeignKeyConstraintViolation(_)) => DomainError::UnknownItem(item_id),
        _ => DomainError::Database(err),
    }
}
