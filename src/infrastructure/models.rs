use diesel::prelude::*;

use crate::domain::order::Order;
use crate::schema::orders;

#[derive(Debug, Clone, Queryable, Selectable, Identifiable)]
#[diesel(table_name = orders)]
#[diesel(check_for_backend(diesel::pg::Pg))]
pub struct OrderRow {
    pub id: i64,
    pub product: String,
    pub quantity: i32,
}

/// Column values written on insert and on update-by-id.
#[derive(Debug, Insertable, AsChangeset)]
#[diesel(table_name = orders)]
pub struct OrderChanges {
    pub product: String,
    pub quantity: i32,
}

impl From<OrderRow> for Order {
    fn from(row: OrderRow) -> Self {
        Order::with_id(row.id, row.product, row.quantity)
    }
}
