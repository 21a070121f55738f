//! gRPC service implementation

use std::sync::Arc;

use shop_bootstrap::metrics::RequestTimer;
use tonic::{Request, Response, Status};

use crate::application::OrderHandler;
use crate::application::commands::*;
use crate::application::queries::*;
use crate::proto::order_service_server::OrderService;
use crate::proto::*;

use super::conversions::*;

const SERVICE_NAME: &str = "order.v1.OrderService";

pub struct OrderServiceImpl {
    handler: Arc<OrderHandler>,
}

impl OrderServiceImpl {
    pub fn new(handler: Arc<OrderHandler>) -> Self {
        Self { handler }
    }
}

#[tonic::async_trait]
impl OrderService for OrderServiceImpl {
    async fn create_order(
        &self,
        request: Request<CreateOrderRequest>,
    ) -> Result<Response<OrderResponse>, Status> {
        let timer = RequestTimer::new(SERVICE_NAME, "CreateOrder");
        let req = request.into_inner();

        let cmd = CreateOrderCommand {
            user_id: req.user_id,
            items: req.items.into_iter().map(item_from_proto).collect(),
        };

        let result = self.handler.create_order(cmd).await;
        timer.observe(&result);

        result
            .map(|order| {
                Response::new(OrderResponse {
                    order: Some(order_to_proto(&order)),
                })
            })
            .map_err(Status::from)
    }

    async fn get_order(
        &self,
        request: Request<GetOrderRequest>,
    ) -> Result<Response<OrderResponse>, Status> {
        let timer = RequestTimer::new(SERVICE_NAME, "GetOrder");
        let query = GetOrderQuery {
            order_id: request.into_inner().id,
        };

        let result = self.handler.get_order(query).await;
        timer.observe(&result);

        result
            .map(|order| {
                Response::new(OrderResponse {
                    order: Some(order_to_proto(&order)),
                })
            })
            .map_err(Status::from)
    }

    async fn update_order(
        &self,
        request: Request<UpdateOrderRequest>,
    ) -> Result<Response<OrderResponse>, Status> {
        let timer = RequestTimer::new(SERVICE_NAME, "UpdateOrder");
        let req = request.into_inner();

        let cmd = UpdateOrderStatusCommand {
            order_id: req.id,
            status: req.status,
        };

        let result = self.handler.update_order_status(cmd).await;
        timer.observe(&result);

        result
            .map(|order| {
                Response::new(OrderResponse {
                    order: Some(order_to_proto(&order)),
                })
            })
            .map_err(Status::from)
    }

    async fn delete_order(
        &self,
        request: Request<DeleteOrderRequest>,
    ) -> Result<Response<DeleteOrderResponse>, Status> {
        let timer = RequestTimer::new(SERVICE_NAME, "DeleteOrder");
        let cmd = DeleteOrderCommand {
            order_id: request.into_inner().id,
        };

        let result = self.handler.delete_order(cmd).await;
        timer.observe(&result);

        result
            .map(|outcome| {
                Response::new(DeleteOrderResponse {
                    success: outcome.success,
                    message: outcome.message,
                })
            })
            .map_err(Status::from)
    }

    async fn get_orders(
        &self,
        request: Request<GetOrdersRequest>,
    ) -> Result<Response<GetOrdersResponse>, Status> {
        let timer = RequestTimer::new(SERVICE_NAME, "GetOrders");
        let req = request.into_inner();

        let query = ListOrdersQuery::new(req.user_id, req.page, req.limit);

        let result = self.handler.list_orders(query).await;
        timer.observe(&result);

        result
            .map(|page| Response::new(page_to_proto(&page)))
            .map_err(Status::from)
    }
}
