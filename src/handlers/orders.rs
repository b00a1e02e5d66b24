use actix_web::{web, HttpResponse};
use serde::{Deserialize, Serialize};
use utoipa::ToSchema;

use crate::application::OrderService;
use crate::domain::order::Order;
use crate::errors::AppError;

// ── Request / response DTOs ──────────────────────────────────────────────────

/// Body of `POST /orders`. Every field is optional and may be `null`;
/// nothing is validated.
#[derive(Debug, Deserialize, ToSchema)]
pub struct OrderRequest {
    /// When it names a stored order, that order is overwritten (unless the
    /// service runs with `CLIENT_ID_POLICY=ignore`).
    #[serde(default)]
    pub id: Option<i64>,
    /// Missing or `null` is stored as `""`.
    #[serde(default)]
    pub product: Option<String>,
    /// Missing or `null` is stored as `0`.
    #[serde(default)]
    pub quantity: Option<i32>,
}

impl From<OrderRequest> for Order {
    fn from(req: OrderRequest) -> Self {
        Order {
            id: req.id,
            product: req.product.unwrap_or_default(),
            quantity: req.quantity.unwrap_or_default(),
        }
    }
}

#[derive(Debug, PartialEq, Eq, Serialize, Deserialize, ToSchema)]
pub struct OrderResponse {
    pub id: i64,
    pub product: String,
    pub quantity: i32,
}

impl TryFrom<Order> for OrderResponse {
    type Error = AppError;

    fn try_from(order: Order) -> Result<Self, Self::Error> {
        let id = order
            .id
            .ok_or_else(|| AppError::Internal(format!("persisted order has no id: {}", order)))?;
        Ok(OrderResponse {
            id,
            product: order.product,
            quantity: order.quantity,
        })
    }
}

// ── Handlers ─────────────────────────────────────────────────────────────────

/// GET /orders
///
/// Returns every stored order. No pagination, no filtering.
#[utoipa::path(
    get,
    path = "/orders",
    responses(
        (status = 200, description = "All orders", body = Vec<OrderResponse>),
        (status = 500, description = "Internal server error"),
    ),
    tag = "orders"
)]
pub async fn list_orders(service: web::Data<OrderService>) -> Result<HttpResponse, AppError> {
    let orders = web::block(move || service.list_orders())
        .await
        .map_err(|e| AppError::Internal(e.to_string()))??;

    let body = orders
        .into_iter()
        .map(OrderResponse::try_from)
        .collect::<Result<Vec<_>, _>>()?;

    Ok(HttpResponse::Ok().json(body))
}

/// POST /orders
///
/// Persists the order and returns it with its assigned id.
#[utoipa::path(
    post,
    path = "/orders",
    request_body = OrderRequest,
    responses(
        (status = 201, description = "Order saved", body = OrderResponse),
        (status = 400, description = "Malformed JSON body"),
        (status = 500, description = "Internal server error"),
    ),
    tag = "orders"
)]
pub async fn create_order(
    service: web::Data<OrderService>,
    body: web::Json<OrderRequest>,
) -> Result<HttpResponse, AppError> {
    let order = Order::from(body.into_inner());

    let saved = web::block(move || service.create_order(order))
        .await
        .map_err(|e| AppError::Internal(e.to_string()))??;

    Ok(HttpResponse::Created().json(OrderResponse::try_from(saved)?))
}
