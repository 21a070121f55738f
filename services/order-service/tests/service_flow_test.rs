//! 订单服务 gRPC 流程测试

use std::sync::Arc;

use order_service::api::OrderServiceImpl;
use order_service::api::conversions::parse_timestamp;
use order_service::application::OrderHandler;
use order_service::domain::repositories::OrderRepository;
use order_service::infrastructure::persistence::InMemoryOrderRepository;
use order_service::infrastructure::seed::seed_demo_orders;
use order_service::proto::order_service_server::OrderService;
use order_service::proto::{
    CreateOrderRequest, DeleteOrderRequest, GetOrderRequest, GetOrdersRequest, Order, OrderItem,
    UpdateOrderRequest,
};
use tonic::{Code, Request};

fn empty_service() -> OrderServiceImpl {
    let repo: Arc<dyn OrderRepository> = Arc::new(InMemoryOrderRepository::new());
    OrderServiceImpl::new(Arc::new(OrderHandler::new(repo)))
}

async fn seeded_service() -> OrderServiceImpl {
    let repo: Arc<dyn OrderRepository> = Arc::new(InMemoryOrderRepository::new());
    seed_demo_orders(repo.as_ref()).await.unwrap();
    OrderServiceImpl::new(Arc::new(OrderHandler::new(repo)))
}

fn item(product_id: &str, name: &str, quantity: i32, price: f64) -> OrderItem {
    OrderItem {
        product_id: product_id.to_string(),
        product_name: name.to_string(),
        quantity,
        price,
    }
}

async fn create(service: &OrderServiceImpl, user_id: &str, items: Vec<OrderItem>) -> Order {
    service
        .create_order(Request::new(CreateOrderRequest {
            user_id: user_id.to_string(),
            items,
        }))
        .await
        .unwrap()
        .into_inner()
        .order
        .unwrap()
}

async fn get(service: &OrderServiceImpl, id: &str) -> Result<Order, tonic::Status> {
    service
        .get_order(Request::new(GetOrderRequest { id: id.to_string() }))
        .await
        .map(|resp| resp.into_inner().order.unwrap())
}

fn list_request(user_id: &str, page: i32, limit: i32) -> Request<GetOrdersRequest> {
    Request::new(GetOrdersRequest {
        page,
        limit,
        user_id: user_id.to_string(),
    })
}

#[tokio::test]
async fn test_create_order_computes_total_and_is_pending() {
    let service = empty_service();

    let order = create(
        &service,
        "42",
        vec![item("1", "Laptop", 1, 999.99), item("3", "Coffee Mug", 2, 12.99)],
    )
    .await;

    assert!((order.total_amount - (999.99 + 2.0 * 12.99)).abs() < 1e-9);
    assert_eq!(order.status, "pending");
    assert_eq!(order.user_id, "42");
    assert_eq!(order.items.len(), 2);
    assert_eq!(order.created_at, order.updated_at);
    assert!(parse_timestamp(&order.created_at).is_ok());
}

#[tokio::test]
async fn test_create_twice_yields_distinct_ids() {
    let service = empty_service();

    let a = create(&service, "1", vec![item("1", "Laptop", 1, 10.0)]).await;
    let b = create(&service, "1", vec![item("1", "Laptop", 1, 10.0)]).await;

    assert_ne!(a.id, b.id);
}

#[tokio::test]
async fn test_get_returns_created_order() {
    let service = empty_service();
    let created = create(&service, "7", vec![item("2", "Smartphone", 1, 699.99)]).await;

    let fetched = get(&service, &created.id).await.unwrap();

    assert_eq!(fetched, created);
}

#[tokio::test]
async fn test_delete_then_get_is_not_found() {
    let service = empty_service();
    let created = create(&service, "7", vec![item("2", "Smartphone", 1, 699.99)]).await;

    let resp = service
        .delete_order(Request::new(DeleteOrderRequest {
            id: created.id.clone(),
        }))
        .await
        .unwrap()
        .into_inner();
    assert!(resp.success);
    assert_eq!(resp.message, "Order deleted successfully");

    let err = get(&service, &created.id).await.unwrap_err();
    assert_eq!(err.code(), Code::NotFound);
    assert_eq!(err.message(), "order not found");
}

#[tokio::test]
async fn test_update_status_then_get_shows_new_status() {
    let service = empty_service();
    let created = create(&service, "7", vec![item("2", "Smartphone", 1, 699.99)]).await;

    let updated = service
        .update_order(Request::new(UpdateOrderRequest {
            id: created.id.clone(),
            status: "shipped".to_string(),
        }))
        .await
        .unwrap()
        .into_inner()
        .order
        .unwrap();
    assert_eq!(updated.status, "shipped");

    let fetched = get(&service, &created.id).await.unwrap();
    assert_eq!(fetched.status, "shipped");
    assert!(
        parse_timestamp(&fetched.updated_at).unwrap()
            >= parse_timestamp(&created.updated_at).unwrap()
    );
    assert_eq!(fetched.total_amount, created.total_amount);
    assert_eq!(fetched.created_at, created.created_at);
}

#[tokio::test]
async fn test_update_with_empty_status_returns_unchanged_order() {
    let service = seeded_service().await;
    let before = get(&service, "2").await.unwrap();

    let after = service
        .update_order(Request::new(UpdateOrderRequest {
            id: "2".to_string(),
            status: String::new(),
        }))
        .await
        .unwrap()
        .into_inner()
        .order
        .unwrap();

    assert_eq!(after, before);
}

#[tokio::test]
async fn test_update_with_unknown_status_is_invalid_argument() {
    let service = seeded_service().await;

    let err = service
        .update_order(Request::new(UpdateOrderRequest {
            id: "1".to_string(),
            status: "teleported".to_string(),
        }))
        .await
        .unwrap_err();

    assert_eq!(err.code(), Code::InvalidArgument);
    assert_eq!(get(&service, "1").await.unwrap().status, "confirmed");
}

#[tokio::test]
async fn test_update_rejects_bad_status_before_looking_up_order() {
    let service = seeded_service().await;

    let err = service
        .update_order(Request::new(UpdateOrderRequest {
            id: "does-not-exist".to_string(),
            status: "teleported".to_string(),
        }))
        .await
        .unwrap_err();

    assert_eq!(err.code(), Code::InvalidArgument);

    let err = service
        .update_order(Request::new(UpdateOrderRequest {
            id: "does-not-exist".to_string(),
            status: "shipped".to_string(),
        }))
        .await
        .unwrap_err();

    assert_eq!(err.code(), Code::NotFound);
}

#[tokio::test]
async fn test_list_first_page_returns_all_seeded_orders() {
    let service = seeded_service().await;

    let resp = service
        .get_orders(list_request("", 1, 10))
        .await
        .unwrap()
        .into_inner();

    assert_eq!(resp.total, 3);
    assert_eq!(resp.page, 1);
    assert_eq!(resp.limit, 10);
    let ids: Vec<&str> = resp.orders.iter().map(|o| o.id.as_str()).collect();
    assert_eq!(ids, vec!["1", "2", "3"]);
}

#[tokio::test]
async fn test_list_second_page_is_empty_but_reports_total() {
    let service = seeded_service().await;

    let resp = service
        .get_orders(list_request("", 2, 10))
        .await
        .unwrap()
        .into_inner();

    assert!(resp.orders.is_empty());
    assert_eq!(resp.total, 3);
    assert_eq!(resp.page, 2);
}

#[tokio::test]
async fn test_list_filtered_by_user() {
    let service = seeded_service().await;

    let resp = service
        .get_orders(list_request("1", 1, 10))
        .await
        .unwrap()
        .into_inner();

    assert_eq!(resp.total, 2);
    assert_eq!(resp.orders.len(), 2);
    assert!(resp.orders.iter().all(|o| o.user_id == "1"));
}

#[tokio::test]
async fn test_list_normalizes_non_positive_paging() {
    let service = seeded_service().await;

    let resp = service
        .get_orders(list_request("", 0, -5))
        .await
        .unwrap()
        .into_inner();

    assert_eq!(resp.page, 1);
    assert_eq!(resp.limit, 10);
    assert_eq!(resp.orders.len(), 3);
}

#[tokio::test]
async fn test_list_small_pages_walk_the_candidate_set() {
    let service = seeded_service().await;

    let first = service.get_orders(list_request("", 1, 2)).await.unwrap().into_inner();
    let second = service.get_orders(list_request("", 2, 2)).await.unwrap().into_inner();

    assert_eq!(first.orders.len(), 2);
    assert_eq!(second.orders.len(), 1);
    assert_eq!(second.orders[0].id, "3");
    assert_eq!(first.total, 3);
    assert_eq!(second.total, 3);
}

#[tokio::test]
async fn test_create_requires_user_and_items() {
    let service = empty_service();

    let err = service
        .create_order(Request::new(CreateOrderRequest {
            user_id: String::new(),
            items: vec![item("1", "Laptop", 1, 10.0)],
        }))
        .await
        .unwrap_err();
    assert_eq!(err.code(), Code::InvalidArgument);
    assert_eq!(err.message(), "user_id is required");

    let err = service
        .create_order(Request::new(CreateOrderRequest {
            user_id: "1".to_string(),
            items: vec![],
        }))
        .await
        .unwrap_err();
    assert_eq!(err.code(), Code::InvalidArgument);
    assert_eq!(err.message(), "at least one item is required");
}

#[tokio::test]
async fn test_create_rejects_non_positive_quantity() {
    let service = empty_service();

    let err = service
        .create_order(Request::new(CreateOrderRequest {
            user_id: "1".to_string(),
            items: vec![item("1", "Laptop", 0, 10.0)],
        }))
        .await
        .unwrap_err();

    assert_eq!(err.code(), Code::InvalidArgument);
}

#[tokio::test]
async fn test_missing_id_is_invalid_argument() {
    let service = seeded_service().await;

    let err = get(&service, "").await.unwrap_err();
    assert_eq!(err.code(), Code::InvalidArgument);
    assert_eq!(err.message(), "id is required");

    let err = service
        .update_order(Request::new(UpdateOrderRequest {
            id: String::new(),
            status: "shipped".to_string(),
        }))
        .await
        .unwrap_err();
    assert_eq!(err.code(), Code::InvalidArgument);

    let err = service
        .delete_order(Request::new(DeleteOrderRequest { id: String::new() }))
        .await
        .unwrap_err();
    assert_eq!(err.code(), Code::InvalidArgument);
}

#[tokio::test]
async fn test_unknown_id_is_not_found() {
    let service = seeded_service().await;

    assert_eq!(get(&service, "999").await.unwrap_err().code(), Code::NotFound);

    let err = service
        .update_order(Request::new(UpdateOrderRequest {
            id: "999".to_string(),
            status: "shipped".to_string(),
        }))
        .await
        .unwrap_err();
    assert_eq!(err.code(), Code::NotFound);

    let err = service
        .delete_order(Request::new(DeleteOrderRequest {
            id: "999".to_string(),
        }))
        .await
        .unwrap_err();
    assert_eq!(err.code(), Code::NotFound);
}
