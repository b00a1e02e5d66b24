use std::sync::Arc;

use crate::config::ClientIdPolicy;
use crate::domain::errors::DomainError;
use crate::domain::order::Order;
use crate::domain::ports::OrderRepository;

pub struct OrderService {
    repo: Arc<dyn OrderRepository>,
    client_id_policy: ClientIdPolicy,
}

impl OrderService {
    pub fn new<R: OrderRepository>(repo: R, client_id_policy: ClientIdPolicy) -> Self {
        Self {
            repo: Arc::new(repo),
            client_id_policy,
        }
    }

    pub fn list_orders(&self) -> Result<Vec<Order>, DomainError> {
        log::debug!("listing orders");
        self.repo.list_all()
    }

    pub fn create_order(&self, mut order: Order) -> Result<Order, DomainError> {
        if self.client_id_policy == ClientIdPolicy::Ignore {
            if let Some(id) = order.id.take() {
                log::debug!("dropping client-supplied id {}", id);
            }
        }
        log::debug!("saving {}", order);
        self.repo.save(order)
    }
}
