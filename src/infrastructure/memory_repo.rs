use std::collections::BTreeMap;
use std::sync::{Mutex, MutexGuard};

use crate::domain::errors::DomainError;
use crate::domain::order::Order;
use crate::domain::ports::OrderRepository;

struct Store {
    next_id: i64,
    orders: BTreeMap<i64, Order>,
}

/// Process-local repository with the same save semantics as the Postgres one.
pub struct InMemoryOrderRepository {
    store: Mutex<Store>,
}

impl InMemoryOrderRepository {
    pub fn new() -> Self {
        Self {
            store: Mutex::new(Store {
                next_id: 1,
                orders: BTreeMap::new(),
            }),
        }
    }

    fn lock(&self) -> Result<MutexGuard<'_, Store>, DomainError> {
        self.store
            .lock()
            .map_err(|_| DomainError::Internal("order store lock poisoned".to_string()))
    }
}

impl Default for InMemoryOrderRepository {
    fn default() -> Self {
        Self::new()
    }
}

impl OrderRepository for InMemoryOrderRepository {
    fn list_all(&self) -> Result<Vec<Order>, DomainError> {
        Ok(self.lock()?.orders.values().cloned().collect())
    }

    fn save(&self, order: Order) -> Result<Order, DomainError> {
        let mut store = self.lock()?;

        if let Some(id) = order.id {
            if let Some(existing) = store.orders.get_mut(&id) {
                existing.product = order.product;
                existing.quantity = order.quantity;
                log::info!("updated order {}", id);
                return Ok(existing.clone());
            }
        }

        let id = store.next_id;
        store.next_id += 1;
        let saved = Order::with_id(id, order.product, order.quantity);
        store.orders.insert(id, saved.clone());
        log::info!("inserted order {}", id);
        Ok(saved)
    }

    fn find_by_id(&self, id: i64) -> Result<Option<Order>, DomainError> {
        Ok(self.lock()?.orders.get(&id).cloned())
    }

    fn delete_by_id(&self, id: i64) -> Result<bool, DomainError> {
        Ok(self.lock()?.orders.remove(&id).is_some())
    }

    fn count(&self) -> Result<i64, DomainError> {
        Ok(self.lock()?.orders.len() as i64)
    }
}
