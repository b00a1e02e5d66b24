use super::errors::DomainError;
use super::order::Order;

pub trait OrderRepository: Send + Sync + 'static {
    /// Every stored order. No ordering is promised to callers.
    fn list_all(&self) -> Result<Vec<Order>, DomainError>;

    /// Insert when `order.id` is `None` or names no stored row, otherwise
    /// overwrite `product` and `quantity` of the row with that id.
    fn save(&self, order: Order) -> Result<Order, DomainError>;

    fn find_by_id(&self, id: i64) -> Result<Option<Order>, DomainError>;

    /// Returns `true` when a row was removed.
    fn delete_by_id(&self, id: i64) -> Result<bool, DomainError>;

    fn count(&self) -> Result<i64, DomainError>;
}
