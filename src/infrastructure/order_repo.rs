use diesel::prelude::*;

use crate::db::DbPool;
use crate::domain::errors::DomainError;
use crate::domain::order::Order;
use crate::domain::ports::OrderRepository;
use crate::schema::orders;

use super::models::{OrderChanges, OrderRow};

// ── Error conversions (infrastructure concern only) ──────────────────────────

impl From<diesel::result::Error> for DomainError {
    fn from(e: diesel::result::Error) -> Self {
        DomainError::Internal(e.to_string())
    }
}

impl From<r2d2::Error> for DomainError {
    fn from(e: r2d2::Error) -> Self {
        DomainError::Internal(e.to_string())
    }
}

// ── Repository ────────────────────────────────────────────────────────────────

pub struct DieselOrderRepository {
    pool: DbPool,
}

impl DieselOrderRepository {
    pub fn new(pool: DbPool) -> Self {
        Self { pool }
    }
}

impl OrderRepository for DieselOrderRepository {
    fn list_all(&self) -> Result<Vec<Order>, DomainError> {
        let mut conn = self.pool.get()?;

        let rows = orders::table
            .select(OrderRow::as_select())
            .order(orders::id.asc())
            .load(&mut conn)?;

        log::debug!("loaded {} orders", rows.len());
        Ok(rows.into_iter().map(Order::from).collect())
    }

    fn save(&self, order: Order) -> Result<Order, DomainError> {
        let Order {
            id,
            product,
            quantity,
        } = order;
        let changes = OrderChanges { product, quantity };
        let mut conn = self.pool.get()?;

        let row = conn.transaction::<_, DomainError, _>(|conn| {
            // An id that names no stored row falls through to a plain insert,
            // so the BIGSERIAL sequence stays the only source of keys.
            if let Some(id) = id {
                let updated = diesel::update(orders::table.find(id))
                    .set(&changes)
                    .get_result::<OrderRow>(conn)
                    .optional()?;
                if let Some(row) = updated {
                    log::info!("updated order {}", row.id);
                    return Ok(row);
                }
            }

            let row = diesel::insert_into(orders::table)
                .values(&changes)
                .get_result::<OrderRow>(conn)?;
            log::info!("inserted order {}", row.id);
            Ok(row)
        })?;

        Ok(row.into())
    }

    fn find_by_id(&self, id: i64) -> Result<Option<Order>, DomainError> {
        let mut conn = self.pool.get()?;

        let row = orders::table
            .find(id)
            .select(OrderRow::as_select())
            .first(&mut conn)
            .optional()?;

        Ok(row.map(Order::from))
    }

    fn delete_by_id(&self, id: i64) -> Result<bool, DomainError> {
        let mut conn = self.pool.get()?;

        let deleted = diesel::delete(orders::table.find(id)).execute(&mut conn)?;
        if deleted > 0 {
            log::info!("deleted order {}", id);
        }
        Ok(deleted > 0)
    }

    fn count(&self) -> Result<i64, DomainError> {
        let mut conn = self.pool.get()?;
        Ok(orders::table.count().get_result(&mut conn)?)
    }
}
