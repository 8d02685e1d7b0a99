use std::sync::Arc;

use actix_web::{App, http::StatusCode, test, web};
use serde_json::{Value, json};

use rust_helpdesk::cache::ObjectCache;
use rust_helpdesk::cache::object_cache::MokaCacheWrapper;
use rust_helpdesk::config::AppConfig;
use rust_helpdesk::models::AppStartTime;
use rust_helpdesk::models::common::pagination::MAX_PAGE;
use rust_helpdesk::models::departments::requests::CreateDepartmentRequest;
use rust_helpdesk::models::notifications::entities::NotificationType;
use rust_helpdesk::models::notifications::requests::CreateNotificationRequest;
use rust_helpdesk::models::tickets::entities::TicketPriority;
use rust_helpdesk::models::tickets::requests::CreateTicketRequest;
use rust_helpdesk::models::users::entities::{User, UserRole};
use rust_helpdesk::models::users::requests::CreateUserRequest;
use rust_helpdesk::routes;
use rust_helpdesk::storage::Storage;
use rust_helpdesk::storage::sea_orm_storage::SeaOrmStorage;
use rust_helpdesk::utils::jwt::JwtUtils;
use rust_helpdesk::utils::{json_error_handler, query_error_handler};

struct TestContext {
    storage: Arc<dyn Storage>,
    cache: Arc<dyn ObjectCache>,
    admin: User,
    agent: User,
    employee: User,
}

impl TestContext {
    async fn new() -> Self {
        let storage = SeaOrmStorage::from_url("sqlite::memory:", &AppConfig::get().database)
            .await
            .expect("in-memory storage");
        let storage: Arc<dyn Storage> = Arc::new(storage);
        let cache: Arc<dyn ObjectCache> = Arc::new(MokaCacheWrapper::with_settings(1_000, 60));

        let admin = create_user(&storage, "Alice Admin", "admin@example.com", UserRole::Admin).await;
        let agent = create_user(&storage, "Andy Agent", "agent@example.com", UserRole::Agent).await;
        let employee =
            create_user(&storage, "Erin Employee", "erin@example.com", UserRole::Employee).await;

        Self {
            storage,
            cache,
            admin,
            agent,
            employee,
        }
    }

    fn bearer(user: &User) -> (String, String) {
        let token = JwtUtils::generate_access_token(user.id, user.role.as_str()).unwrap();
        ("Authorization".to_string(), format!("Bearer {token}"))
    }

    async fn department(&self, name: &str) -> i64 {
        self.storage
            .create_department(CreateDepartmentRequest {
                name: name.to_string(),
                description: None,
                email: None,
                is_active: None,
            })
            .await
            .unwrap()
            .id
    }

    async fn notification(&self, owner: &User, title: &str) -> i64 {
        self.storage
            .create_notification(CreateNotificationRequest {
                user_id: owner.id,
                notification_type: NotificationType::TicketCreated,
                title: title.to_string(),
                message: "A ticket was created".to_string(),
                ticket_id: None,
            })
            .await
            .unwrap()
            .id
    }
}

async fn create_user(storage: &Arc<dyn Storage>, name: &str, email: &str, role: UserRole) -> User {
    storage
        .create_user(CreateUserRequest {
            name: name.to_string(),
            email: email.to_string(),
            role,
            department_id: None,
        })
        .await
        .unwrap()
}

macro_rules! init_app {
    ($ctx:expr) => {
        test::init_service(
            App::new()
                .app_data(web::QueryConfig::default().error_handler(query_error_handler))
                .app_data(web::JsonConfig::default().error_handler(json_error_handler))
                .app_data(web::Data::new($ctx.storage.clone()))
                .app_data(web::Data::new($ctx.cache.clone()))
                .app_data(web::Data::new(AppStartTime {
                    start_datetime: chrono::Utc::now(),
                }))
                .configure(routes::configure_api)
                .default_service(web::to(routes::route_not_found)),
        )
        .await
    };
}

#[actix_web::test]
async fn test_unknown_path_returns_not_found_envelope() {
    let ctx = TestContext::new().await;
    let app = init_app!(ctx);

    let req = test::TestRequest::get().uri("/unknown-path").to_request();
    let resp = test::call_service(&app, req).await;
    assert_eq!(resp.status(), StatusCode::NOT_FOUND);

    let body: Value = test::read_body_json(resp).await;
    assert_eq!(body["success"], false);
    assert_eq!(body["message"], "Route /unknown-path not found");
    assert_eq!(body["data"]["path"], "/unknown-path");
    assert_eq!(body["data"]["method"], "GET");
}

#[actix_web::test]
async fn test_unmatched_method_on_known_path_is_not_found() {
    let ctx = TestContext::new().await;
    let app = init_app!(ctx);

    let req = test::TestRequest::patch()
        .uri("/api/v1/departments")
        .to_request();
    let resp = test::call_service(&app, req).await;
    assert_eq!(resp.status(), StatusCode::NOT_FOUND);

    let body: Value = test::read_body_json(resp).await;
    assert_eq!(body["data"]["path"], "/api/v1/departments");
    assert_eq!(body["data"]["method"], "PATCH");
}

#[actix_web::test]
async fn test_health_is_public() {
    let ctx = TestContext::new().await;
    let app = init_app!(ctx);

    let req = test::TestRequest::get().uri("/api/v1/health").to_request();
    let body: Value = test::call_and_read_body_json(&app, req).await;
    assert_eq!(body["success"], true);
    assert_eq!(body["data"]["status"], "ok");
}

#[actix_web::test]
async fn test_department_list_is_public() {
    let ctx = TestContext::new().await;
    ctx.department("Support").await;
    ctx.department("Billing").await;
    let app = init_app!(ctx);

    let req = test::TestRequest::get()
        .uri("/api/v1/departments?page=1&size=10")
        .to_request();
    let resp = test::call_service(&app, req).await;
    assert_eq!(resp.status(), StatusCode::OK);

    let body: Value = test::read_body_json(resp).await;
    assert_eq!(body["data"]["pagination"]["total"], 2);
    // 按名称排序
    assert_eq!(body["data"]["items"][0]["name"], "Billing");
    assert_eq!(body["data"]["items"][1]["name"], "Support");
}

#[actix_web::test]
async fn test_department_search_treats_wildcards_literally() {
    let ctx = TestContext::new().await;
    ctx.department("IT_Support").await;
    ctx.department("ITxSupport").await;
    ctx.department("Promo 50% Off").await;
    let app = init_app!(ctx);

    let cases = [
        ("IT_Support", vec!["IT_Support"]),
        ("%25", vec!["Promo 50% Off"]),
        ("support", vec!["IT_Support", "ITxSupport"]),
        ("nothing", vec![]),
    ];

    for (search, expected) in cases {
        let req = test::TestRequest::get()
            .uri(&format!("/api/v1/departments?search={search}"))
            .to_request();
        let body: Value = test::call_and_read_body_json(&app, req).await;
        let names: Vec<&str> = body["data"]["items"]
            .as_array()
            .unwrap()
            .iter()
            .map(|d| d["name"].as_str().unwrap())
            .collect();
        assert_eq!(names, expected, "search={search}");
        assert_eq!(body["data"]["pagination"]["total"], expected.len());
    }
}

#[actix_web::test]
async fn test_department_list_filters_by_active_flag() {
    let ctx = TestContext::new().await;
    ctx.department("Support").await;
    ctx.storage
        .create_department(CreateDepartmentRequest {
            name: "Archive".to_string(),
            description: None,
            email: None,
            is_active: Some(false),
        })
        .await
        .unwrap();
    let app = init_app!(ctx);

    let req = test::TestRequest::get()
        .uri("/api/v1/departments?is_active=false")
        .to_request();
    let body: Value = test::call_and_read_body_json(&app, req).await;
    assert_eq!(body["data"]["pagination"]["total"], 1);
    assert_eq!(body["data"]["items"][0]["name"], "Archive");

    let req = test::TestRequest::get()
        .uri("/api/v1/departments?is_active=true")
        .to_request();
    let body: Value = test::call_and_read_body_json(&app, req).await;
    assert_eq!(body["data"]["pagination"]["total"], 1);
    assert_eq!(body["data"]["items"][0]["name"], "Support");
}

#[actix_web::test]
async fn test_department_list_pagination_bounds() {
    let ctx = TestContext::new().await;
    ctx.department("Support").await;
    let app = init_app!(ctx);

    let req = test::TestRequest::get()
        .uri("/api/v1/departments?page=0&size=1000")
        .to_request();
    let body: Value = test::call_and_read_body_json(&app, req).await;
    assert_eq!(body["data"]["pagination"]["page"], 1);
    assert_eq!(body["data"]["pagination"]["page_size"], 100);
    assert_eq!(body["data"]["items"].as_array().unwrap().len(), 1);

    // 超大页码不会溢出，只返回空页
    let req = test::TestRequest::get()
        .uri(&format!("/api/v1/departments?page={}", i64::MAX))
        .to_request();
    let resp = test::call_service(&app, req).await;
    assert_eq!(resp.status(), StatusCode::OK);
    let body: Value = test::read_body_json(resp).await;
    assert_eq!(body["data"]["pagination"]["page"], MAX_PAGE);
    assert_eq!(body["data"]["pagination"]["total"], 1);
    assert!(body["data"]["items"].as_array().unwrap().is_empty());
}

#[actix_web::test]
async fn test_protected_endpoints_require_authentication() {
    let ctx = TestContext::new().await;
    let department_id = ctx.department("Support").await;
    let app = init_app!(ctx);

    let requests = vec![
        test::TestRequest::post()
            .uri("/api/v1/departments")
            .set_json(json!({ "name": "Sales" })),
        test::TestRequest::get().uri(&format!("/api/v1/departments/{department_id}")),
        test::TestRequest::put()
            .uri(&format!("/api/v1/departments/{department_id}"))
            .set_json(json!({ "name": "Sales" })),
        test::TestRequest::delete().uri(&format!("/api/v1/departments/{department_id}")),
        test::TestRequest::get().uri(&format!("/api/v1/departments/{department_id}/agents")),
        test::TestRequest::get().uri(&format!("/api/v1/departments/{department_id}/tickets")),
        test::TestRequest::get().uri(&format!("/api/v1/departments/{department_id}/stats")),
        test::TestRequest::get().uri("/api/v1/notifications"),
        test::TestRequest::get().uri("/api/v1/notifications/stats"),
        test::TestRequest::patch().uri("/api/v1/notifications/1/read"),
        test::TestRequest::patch().uri("/api/v1/notifications/read-all"),
        test::TestRequest::delete().uri("/api/v1/notifications/1"),
        test::TestRequest::post()
            .uri("/api/v1/notifications/test")
            .set_json(json!({})),
        test::TestRequest::get().uri("/api/v1/navigation"),
    ];

    for req in requests {
        let req = req.to_request();
        let path = req.path().to_string();
        let resp = test::call_service(&app, req).await;
        assert_eq!(resp.status(), StatusCode::UNAUTHORIZED, "{path}");
    }
}

#[actix_web::test]
async fn test_invalid_token_is_rejected() {
    let ctx = TestContext::new().await;
    let app = init_app!(ctx);

    let req = test::TestRequest::get()
        .uri("/api/v1/notifications")
        .insert_header(("Authorization", "Bearer not-a-jwt"))
        .to_request();
    let resp = test::call_service(&app, req).await;
    assert_eq!(resp.status(), StatusCode::UNAUTHORIZED);
}

#[actix_web::test]
async fn test_admin_endpoints_reject_other_roles() {
    let ctx = TestContext::new().await;
    let department_id = ctx.department("Support").await;
    let app = init_app!(ctx);

    for user in [&ctx.agent, &ctx.employee] {
        let requests = vec![
            test::TestRequest::post()
                .uri("/api/v1/departments")
                .set_json(json!({ "name": "Sales" })),
            test::TestRequest::put()
                .uri(&format!("/api/v1/departments/{department_id}"))
                .set_json(json!({ "name": "Sales" })),
            test::TestRequest::delete().uri(&format!("/api/v1/departments/{department_id}")),
            test::TestRequest::post()
                .uri("/api/v1/notifications/test")
                .set_json(json!({})),
        ];

        for req in requests {
            let req = req.insert_header(TestContext::bearer(user)).to_request();
            let resp = test::call_service(&app, req).await;
            assert_eq!(resp.status(), StatusCode::FORBIDDEN);
        }
    }
}

#[actix_web::test]
async fn test_agent_endpoints_reject_employees() {
    let ctx = TestContext::new().await;
    let department_id = ctx.department("Support").await;
    let app = init_app!(ctx);

    for suffix in ["agents", "tickets", "stats"] {
        let uri = format!("/api/v1/departments/{department_id}/{suffix}");

        let req = test::TestRequest::get()
            .uri(&uri)
            .insert_header(TestContext::bearer(&ctx.employee))
            .to_request();
        let resp = test::call_service(&app, req).await;
        assert_eq!(resp.status(), StatusCode::FORBIDDEN, "{uri}");

        let req = test::TestRequest::get()
            .uri(&uri)
            .insert_header(TestContext::bearer(&ctx.agent))
            .to_request();
        let resp = test::call_service(&app, req).await;
        assert_eq!(resp.status(), StatusCode::OK, "{uri}");
    }
}

#[actix_web::test]
async fn test_department_lifecycle() {
    let ctx = TestContext::new().await;
    let app = init_app!(ctx);

    let req = test::TestRequest::post()
        .uri("/api/v1/departments")
        .insert_header(TestContext::bearer(&ctx.admin))
        .set_json(json!({ "name": "Support", "email": "support@example.com" }))
        .to_request();
    let resp = test::call_service(&app, req).await;
    assert_eq!(resp.status(), StatusCode::CREATED);
    let body: Value = test::read_body_json(resp).await;
    let id = body["data"]["department"]["id"].as_i64().unwrap();
    assert_eq!(body["data"]["department"]["is_active"], true);

    // 名称重复
    let req = test::TestRequest::post()
        .uri("/api/v1/departments")
        .insert_header(TestContext::bearer(&ctx.admin))
        .set_json(json!({ "name": "Support" }))
        .to_request();
    let resp = test::call_service(&app, req).await;
    assert_eq!(resp.status(), StatusCode::CONFLICT);

    let req = test::TestRequest::put()
        .uri(&format!("/api/v1/departments/{id}"))
        .insert_header(TestContext::bearer(&ctx.admin))
        .set_json(json!({ "description": "First line support", "is_active": false }))
        .to_request();
    let resp = test::call_service(&app, req).await;
    assert_eq!(resp.status(), StatusCode::OK);
    let body: Value = test::read_body_json(resp).await;
    assert_eq!(body["data"]["department"]["name"], "Support");
    assert_eq!(body["data"]["department"]["description"], "First line support");
    assert_eq!(body["data"]["department"]["is_active"], false);

    let req = test::TestRequest::get()
        .uri(&format!("/api/v1/departments/{id}"))
        .insert_header(TestContext::bearer(&ctx.employee))
        .to_request();
    let resp = test::call_service(&app, req).await;
    assert_eq!(resp.status(), StatusCode::OK);

    let req = test::TestRequest::delete()
        .uri(&format!("/api/v1/departments/{id}"))
        .insert_header(TestContext::bearer(&ctx.admin))
        .to_request();
    let resp = test::call_service(&app, req).await;
    assert_eq!(resp.status(), StatusCode::OK);

    let req = test::TestRequest::get()
        .uri(&format!("/api/v1/departments/{id}"))
        .insert_header(TestContext::bearer(&ctx.admin))
        .to_request();
    let resp = test::call_service(&app, req).await;
    assert_eq!(resp.status(), StatusCode::NOT_FOUND);
}

#[actix_web::test]
async fn test_department_validation_errors() {
    let ctx = TestContext::new().await;
    let app = init_app!(ctx);

    // 非数字 ID
    let req = test::TestRequest::get()
        .uri("/api/v1/departments/abc")
        .insert_header(TestContext::bearer(&ctx.admin))
        .to_request();
    let resp = test::call_service(&app, req).await;
    assert_eq!(resp.status(), StatusCode::BAD_REQUEST);
    let body: Value = test::read_body_json(resp).await;
    assert_eq!(body["success"], false);

    // 名称过短
    let req = test::TestRequest::post()
        .uri("/api/v1/departments")
        .insert_header(TestContext::bearer(&ctx.admin))
        .set_json(json!({ "name": "X" }))
        .to_request();
    let resp = test::call_service(&app, req).await;
    assert_eq!(resp.status(), StatusCode::BAD_REQUEST);

    // 缺少必填字段
    let req = test::TestRequest::post()
        .uri("/api/v1/departments")
        .insert_header(TestContext::bearer(&ctx.admin))
        .set_json(json!({ "description": "no name" }))
        .to_request();
    let resp = test::call_service(&app, req).await;
    assert_eq!(resp.status(), StatusCode::BAD_REQUEST);

    // 查询参数类型错误
    let req = test::TestRequest::get()
        .uri("/api/v1/departments?page=first")
        .to_request();
    let resp = test::call_service(&app, req).await;
    assert_eq!(resp.status(), StatusCode::BAD_REQUEST);
}

#[actix_web::test]
async fn test_department_with_tickets_cannot_be_deleted() {
    let ctx = TestContext::new().await;
    let department_id = ctx.department("Support").await;
    ctx.storage
        .create_ticket(CreateTicketRequest {
            title: "Printer is on fire".to_string(),
            description: "Please help".to_string(),
            priority: TicketPriority::Urgent,
            department_id,
            created_by: ctx.employee.id,
            assigned_to: None,
        })
        .await
        .unwrap();
    let app = init_app!(ctx);

    let req = test::TestRequest::delete()
        .uri(&format!("/api/v1/departments/{department_id}"))
        .insert_header(TestContext::bearer(&ctx.admin))
        .to_request();
    let resp = test::call_service(&app, req).await;
    assert_eq!(resp.status(), StatusCode::CONFLICT);

    let req = test::TestRequest::get()
        .uri(&format!("/api/v1/departments/{department_id}/stats"))
        .insert_header(TestContext::bearer(&ctx.agent))
        .to_request();
    let body: Value = test::call_and_read_body_json(&app, req).await;
    assert_eq!(body["data"]["total_tickets"], 1);
    assert_eq!(body["data"]["open_tickets"], 1);
    assert_eq!(body["data"]["unassigned_tickets"], 1);

    let req = test::TestRequest::get()
        .uri(&format!(
            "/api/v1/departments/{department_id}/tickets?status=CLOSED"
        ))
        .insert_header(TestContext::bearer(&ctx.agent))
        .to_request();
    let body: Value = test::call_and_read_body_json(&app, req).await;
    assert_eq!(body["data"]["pagination"]["total"], 0);
}

#[actix_web::test]
async fn test_department_tickets_filter_by_priority() {
    let ctx = TestContext::new().await;
    let department_id = ctx.department("Support").await;
    for (title, priority) in [
        ("Server down", TicketPriority::Urgent),
        ("Mouse squeaks", TicketPriority::Low),
        ("VPN flaky", TicketPriority::Low),
    ] {
        ctx.storage
            .create_ticket(CreateTicketRequest {
                title: title.to_string(),
                description: "details".to_string(),
                priority,
                department_id,
                created_by: ctx.employee.id,
                assigned_to: None,
            })
            .await
            .unwrap();
    }
    let app = init_app!(ctx);

    let req = test::TestRequest::get()
        .uri(&format!(
            "/api/v1/departments/{department_id}/tickets?priority=URGENT"
        ))
        .insert_header(TestContext::bearer(&ctx.agent))
        .to_request();
    let body: Value = test::call_and_read_body_json(&app, req).await;
    assert_eq!(body["data"]["pagination"]["total"], 1);
    assert_eq!(body["data"]["items"][0]["title"], "Server down");

    let req = test::TestRequest::get()
        .uri(&format!(
            "/api/v1/departments/{department_id}/tickets?priority=LOW&status=OPEN&size=1"
        ))
        .insert_header(TestContext::bearer(&ctx.agent))
        .to_request();
    let body: Value = test::call_and_read_body_json(&app, req).await;
    assert_eq!(body["data"]["pagination"]["total"], 2);
    assert_eq!(body["data"]["pagination"]["total_pages"], 2);
    assert_eq!(body["data"]["items"].as_array().unwrap().len(), 1);
}

#[actix_web::test]
async fn test_deleting_department_detaches_agents() {
    let ctx = TestContext::new().await;
    let department_id = ctx.department("Support").await;
    let agent = ctx
        .storage
        .create_user(CreateUserRequest {
            name: "Dana Desk".to_string(),
            email: "dana@example.com".to_string(),
            role: UserRole::Agent,
            department_id: Some(department_id),
        })
        .await
        .unwrap();
    let app = init_app!(ctx);

    let req = test::TestRequest::get()
        .uri(&format!("/api/v1/departments/{department_id}/agents"))
        .insert_header(TestContext::bearer(&ctx.admin))
        .to_request();
    let body: Value = test::call_and_read_body_json(&app, req).await;
    assert_eq!(body["data"]["pagination"]["total"], 1);
    assert_eq!(body["data"]["items"][0]["name"], "Dana Desk");

    let req = test::TestRequest::delete()
        .uri(&format!("/api/v1/departments/{department_id}"))
        .insert_header(TestContext::bearer(&ctx.admin))
        .to_request();
    let resp = test::call_service(&app, req).await;
    assert_eq!(resp.status(), StatusCode::OK);

    let agent = ctx.storage.get_user_by_id(agent.id).await.unwrap().unwrap();
    assert_eq!(agent.department_id, None);
}

#[actix_web::test]
async fn test_notifications_are_owner_scoped() {
    let ctx = TestContext::new().await;
    let own = ctx.notification(&ctx.employee, "Mine").await;
    let foreign = ctx.notification(&ctx.agent, "Not mine").await;
    let app = init_app!(ctx);

    let req = test::TestRequest::get()
        .uri("/api/v1/notifications")
        .insert_header(TestContext::bearer(&ctx.employee))
        .to_request();
    let body: Value = test::call_and_read_body_json(&app, req).await;
    assert_eq!(body["data"]["pagination"]["total"], 1);
    assert_eq!(body["data"]["items"][0]["title"], "Mine");

    // 其他用户的通知一律 404
    let req = test::TestRequest::patch()
        .uri(&format!("/api/v1/notifications/{foreign}/read"))
        .insert_header(TestContext::bearer(&ctx.employee))
        .to_request();
    let resp = test::call_service(&app, req).await;
    assert_eq!(resp.status(), StatusCode::NOT_FOUND);

    let req = test::TestRequest::delete()
        .uri(&format!("/api/v1/notifications/{foreign}"))
        .insert_header(TestContext::bearer(&ctx.employee))
        .to_request();
    let resp = test::call_service(&app, req).await;
    assert_eq!(resp.status(), StatusCode::NOT_FOUND);

    let req = test::TestRequest::patch()
        .uri(&format!("/api/v1/notifications/{own}/read"))
        .insert_header(TestContext::bearer(&ctx.employee))
        .to_request();
    let resp = test::call_service(&app, req).await;
    assert_eq!(resp.status(), StatusCode::OK);
    let body: Value = test::read_body_json(resp).await;
    assert_eq!(body["data"]["notification"]["is_read"], true);
    assert!(body["data"]["notification"]["read_at"].is_string());

    let req = test::TestRequest::delete()
        .uri(&format!("/api/v1/notifications/{own}"))
        .insert_header(TestContext::bearer(&ctx.employee))
        .to_request();
    let resp = test::call_service(&app, req).await;
    assert_eq!(resp.status(), StatusCode::OK);

    // 对方的通知仍然存在
    assert!(
        ctx.storage
            .get_notification_by_id(foreign)
            .await
            .unwrap()
            .is_some()
    );
}

#[actix_web::test]
async fn test_notification_filters_stats_and_read_all() {
    let ctx = TestContext::new().await;
    let first = ctx.notification(&ctx.employee, "First").await;
    ctx.notification(&ctx.employee, "Second").await;
    ctx.notification(&ctx.employee, "Third").await;
    ctx.storage.mark_notification_as_read(first).await.unwrap();
    let app = init_app!(ctx);

    let req = test::TestRequest::get()
        .uri("/api/v1/notifications?is_read=false&type=TICKET_CREATED")
        .insert_header(TestContext::bearer(&ctx.employee))
        .to_request();
    let body: Value = test::call_and_read_body_json(&app, req).await;
    assert_eq!(body["data"]["pagination"]["total"], 2);

    let req = test::TestRequest::get()
        .uri("/api/v1/notifications/stats")
        .insert_header(TestContext::bearer(&ctx.employee))
        .to_request();
    let body: Value = test::call_and_read_body_json(&app, req).await;
    assert_eq!(body["data"]["total"], 3);
    assert_eq!(body["data"]["unread"], 2);
    assert_eq!(body["data"]["read"], 1);
    assert_eq!(body["data"]["by_type"]["TICKET_CREATED"], 3);
    assert_eq!(body["data"]["by_type"]["SYSTEM"], 0);

    let req = test::TestRequest::patch()
        .uri("/api/v1/notifications/read-all")
        .insert_header(TestContext::bearer(&ctx.employee))
        .to_request();
    let body: Value = test::call_and_read_body_json(&app, req).await;
    assert_eq!(body["data"]["marked_count"], 2);

    assert_eq!(
        ctx.storage
            .get_unread_notification_count(ctx.employee.id)
            .await
            .unwrap(),
        0
    );
}

#[actix_web::test]
async fn test_send_test_notification() {
    let ctx = TestContext::new().await;
    let app = init_app!(ctx);

    let req = test::TestRequest::post()
        .uri("/api/v1/notifications/test")
        .insert_header(TestContext::bearer(&ctx.admin))
        .set_json(json!({ "user_id": ctx.employee.id, "title": "Hello" }))
        .to_request();
    let resp = test::call_service(&app, req).await;
    assert_eq!(resp.status(), StatusCode::CREATED);
    let body: Value = test::read_body_json(resp).await;
    assert_eq!(body["data"]["notification"]["user_id"], ctx.employee.id);
    assert_eq!(body["data"]["notification"]["title"], "Hello");
    assert_eq!(body["data"]["notification"]["type"], "SYSTEM");

    // 未指定接收者时发给管理员自己
    let req = test::TestRequest::post()
        .uri("/api/v1/notifications/test")
        .insert_header(TestContext::bearer(&ctx.admin))
        .set_json(json!({}))
        .to_request();
    let body: Value = test::call_and_read_body_json(&app, req).await;
    assert_eq!(body["data"]["notification"]["user_id"], ctx.admin.id);
    assert_eq!(body["data"]["notification"]["title"], "Test notification");

    let req = test::TestRequest::post()
        .uri("/api/v1/notifications/test")
        .insert_header(TestContext::bearer(&ctx.admin))
        .set_json(json!({ "user_id": 9999 }))
        .to_request();
    let resp = test::call_service(&app, req).await;
    assert_eq!(resp.status(), StatusCode::NOT_FOUND);

    let req = test::TestRequest::post()
        .uri("/api/v1/notifications/test")
        .insert_header(TestContext::bearer(&ctx.admin))
        .set_json(json!({ "title": "t".repeat(201) }))
        .to_request();
    let resp = test::call_service(&app, req).await;
    assert_eq!(resp.status(), StatusCode::BAD_REQUEST);
}

#[actix_web::test]
async fn test_navigation_is_filtered_by_role() {
    let ctx = TestContext::new().await;
    ctx.notification(&ctx.employee, "Unread one").await;
    ctx.notification(&ctx.employee, "Unread two").await;
    let app = init_app!(ctx);

    let req = test::TestRequest::get()
        .uri("/api/v1/navigation?path=/tickets/42")
        .insert_header(TestContext::bearer(&ctx.employee))
        .to_request();
    let body: Value = test::call_and_read_body_json(&app, req).await;
    let items = body["data"]["items"].as_array().unwrap();
    let hrefs: Vec<&str> = items.iter().map(|i| i["href"].as_str().unwrap()).collect();
    assert!(!hrefs.contains(&"/departments"));
    assert!(!hrefs.contains(&"/settings"));
    assert_eq!(body["data"]["user"]["role"], "EMPLOYEE");

    let tickets = items.iter().find(|i| i["href"] == "/tickets").unwrap();
    assert_eq!(tickets["active"], true);
    let dashboard = items.iter().find(|i| i["href"] == "/").unwrap();
    assert_eq!(dashboard["active"], false);
    let notifications = items.iter().find(|i| i["href"] == "/notifications").unwrap();
    assert_eq!(notifications["badge"], "2");

    let req = test::TestRequest::get()
        .uri("/api/v1/navigation")
        .insert_header(TestContext::bearer(&ctx.admin))
        .to_request();
    let body: Value = test::call_and_read_body_json(&app, req).await;
    let items = body["data"]["items"].as_array().unwrap();
    assert_eq!(items.len(), 9);
    assert!(items.iter().all(|i| i.get("badge").is_none()));
}
