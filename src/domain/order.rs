use std::fmt;

/// An order as it moves between the HTTP layer and the repository.
///
/// `id` is `None` until the repository has persisted the order.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Order {
    pub id: Option<i64>,
    pub product: String,
    pub quantity: i32,
}

impl Order {
    pub fn new(product: impl Into<String>, quantity: i32) -> Self {
        Self {
            id: None,
            product: product.into(),
            quantity,
        }
    }

    pub fn with_id(id: i64, product: impl Into<String>, quantity: i32) -> Self {
        Self {
            id: Some(id),
            product: product.into(),
            quantity,
        }
    }
}

impl fmt::Display for Order {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self.id {
            Some(id) => write!(f, "Order [id={}, ", id)?,
            None => write!(f, "Order [id=unassigned, ")?,
        }
        write!(f, "product={}, quantity={}]", self.product, self.quantity)
    }
}
