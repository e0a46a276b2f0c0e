//! API Router with Swagger UI

use std::sync::Arc;

use axum::{
    middleware,
    routing::{delete, get, patch, post, put},
    Router,
};
use metrics_exporter_prometheus::PrometheusHandle;
use tower_http::cors::{Any, CorsLayer};
use tower_http::trace::TraceLayer;
use utoipa::openapi::security::{HttpAuthScheme, HttpBuilder, SecurityScheme};
use utoipa::{Modify, OpenApi};
use utoipa_swagger_ui::SwaggerUi;

use crate::api::dto::*;
use crate::api::handlers::{auth, health, metrics, timeclock, timesheets, users, workdays};
use crate::api::handlers::{IdentityState, LedgerState, MetricsState, TimeSheetState};
use crate::application::{IdentityService, LedgerService, TimeSheetService};
use crate::auth::jwt::JwtConfig;
use crate::auth::middleware::{auth_middleware, AuthState};
use crate::domain::RepositoryProvider;

/// Security scheme modifier for OpenAPI
struct SecurityAddon;

impl Modify for SecurityAddon {
    fn modify(&self, openapi: &mut utoipa::openapi::OpenApi) {
        if let Some(components) = openapi.components.as_mut() {
            components.add_security_scheme(
                "bearer_auth",
                SecurityScheme::Http(
                    HttpBuilder::new()
                        .scheme(HttpAuthScheme::Bearer)
                        .bearer_format("JWT")
                        .description(Some("JWT Bearer token"))
                        .build(),
                ),
            );
        }
    }
}

/// OpenAPI documentation
#[derive(OpenApi)]
#[openapi(
    paths(
        // Health
        health::health_check,
        // Auth
        auth::login,
        auth::get_current_user,
        // Users
        users::register_user,
        users::get_user,
        users::delete_user,
        // Time clock
        timeclock::clock_in,
        timeclock::clock_out,
        timeclock::status,
        // Workdays
        workdays::edit_workday,
        workdays::set_notes,
        workdays::attach_photo,
        workdays::remove_photo,
        // Timesheets
        timesheets::current_timesheet,
        timesheets::save_timesheet,
        timesheets::get_timesheet,
        timesheets::past_timesheets,
        timesheets::overview,
    ),
    components(
        schemas(
            // Common
            ApiResponse<String>,
            health::HealthResponse,
            // Auth / users
            LoginRequest,
            LoginResponse,
            RegisterRequest,
            UserDto,
            // Workdays
            PhotoDto,
            WorkDayDto,
            StatusResponse,
            EditWorkDayRequest,
            SetNotesRequest,
            AttachPhotoRequest,
            // Timesheets
            TimeSheetDto,
            TimeSheetDraftDto,
            SaveTimeSheetRequest,
            OverviewEntryDto,
        )
    ),
    modifiers(&SecurityAddon),
    tags(
        (name = "Health", description = "Service liveness. Use for uptime and readiness monitoring."),
        (name = "Authentication", description = "Login and the current session. The token comes back in the `token` field and goes into the `Authorization: Bearer <token>` header on every other call."),
        (name = "Users", description = "User administration, admin only. Roles: `ADMIN` (full access), `OWNER` (reviews hours, saves timesheets), `EMPLOYEE` (punches the clock, annotates own workdays)."),
        (name = "Time clock", description = "The punch clock. `clock-in` opens a workday, `clock-out` closes it. A user holds at most one open workday; double punches answer 409."),
        (name = "Workdays", description = "Recorded workdays. Employees may annotate and photograph their own days; editing punch times needs the owner or admin role. Hours are rounded to the quarter hour. Workdays already on a timesheet refuse edits."),
        (name = "Timesheets", description = "Immutable records of paid hours. Saving a sheet archives its workdays; there is no unsave. `current` shows what the next sheet would contain."),
    ),
    info(
        title = "Timeclock Service API",
        version = "1.0.0",
        description = "REST API for employee time tracking: punch clock, workday records and immutable timesheets.

## Authentication

Obtain a JWT via `POST /api/v1/auth/login` and send it as `Authorization: Bearer <token>`.
Everything except `/health`, `/metrics` and the login itself requires it.

## Workday lifecycle

1. An employee clocks in (`POST /api/v1/timeclock/clock-in`), later clocks out.
2. The closed workday collects notes and photo references.
3. An owner saves a timesheet over a selection of closed workdays, which archives them.
   Archived workdays reject further edits; the sheet itself never changes.

## Response format

Every REST response is wrapped in a standard envelope:
```json
{\"success\": true, \"data\": {...}, \"error\": null}
```

On failure:
```json
{\"success\": false, \"data\": null, \"error\": \"what went wrong\"}
```

Conflicting state (double punch, duplicates) answers 409, policy denials 403,
rejected input 400.",
        license(
            name = "MIT"
        )
    )
)]
pub struct ApiDoc;

/// Create the API router with all routes
pub fn create_api_router(
    repos: Arc<dyn RepositoryProvider>,
    jwt_config: JwtConfig,
    metrics_handle: PrometheusHandle,
) -> Router {
    health::mark_started();

    let middleware_state = AuthState {
        jwt_config: jwt_config.clone(),
        repos: Arc::clone(&repos),
    };

    // ── Handler states ──────────────────────────────────────────────
    let identity_state = IdentityState {
        identity: Arc::new(IdentityService::new(Arc::clone(&repos), jwt_config)),
    };
    let ledger_state = LedgerState {
        ledger: Arc::new(LedgerService::new(Arc::clone(&repos))),
    };
    let timesheet_state = TimeSheetState {
        timesheets: Arc::new(TimeSheetService::new(repos)),
    };
    let metrics_state = MetricsState {
        handle: metrics_handle,
    };

    // CORS configuration
    let cors = CorsLayer::new()
        .allow_origin(Any)
        .allow_methods(Any)
        .allow_headers(Any);

    // Auth routes (public)
    let auth_routes = Router::new()
        .route("/login", post(auth::login))
        .with_state(identity_state.clone());

    // Auth routes (protected)
    let auth_protected_routes = Router::new()
        .route("/me", get(auth::get_current_user))
        .layer(middleware::from_fn_with_state(
            middleware_state.clone(),
            auth_middleware,
        ))
        .with_state(identity_state.clone());

    // User administration (protected, role-checked in the service)
    let user_routes = Router::new()
        .route("/", post(users::register_user))
        .route("/{id}", get(users::get_user).delete(users::delete_user))
        .layer(middleware::from_fn_with_state(
            middleware_state.clone(),
            auth_middleware,
        ))
        .with_state(identity_state);

    // Punch clock (protected)
    let timeclock_routes = Router::new()
        .route("/clock-in", post(timeclock::clock_in))
        .route("/clock-out", post(timeclock::clock_out))
        .route("/status", get(timeclock::status))
        .layer(middleware::from_fn_with_state(
            middleware_state.clone(),
            auth_middleware,
        ))
        .with_state(ledger_state.clone());

    // Workday editing (protected)
    let workday_routes = Router::new()
        .route("/{id}", put(workdays::edit_workday))
        .route("/{id}/notes", patch(workdays::set_notes))
        .route("/{id}/photos", post(workdays::attach_photo))
        .layer(middleware::from_fn_with_state(
            middleware_state.clone(),
            auth_middleware,
        ))
        .with_state(ledger_state.clone());

    // Photos are deleted by their own id, not through the workday
    let photo_routes = Router::new()
        .route("/{id}", delete(workdays::remove_photo))
        .layer(middleware::from_fn_with_state(
            middleware_state.clone(),
            auth_middleware,
        ))
        .with_state(ledger_state);

    // A SINGLE router for every /api/v1/timesheets/* route, so the
    // static `/current` segment and the parametric `/{id}` live in one
    // matchit tree and route correctly.
    let timesheet_routes = Router::new()
        .route(
            "/",
            get(timesheets::past_timesheets).post(timesheets::save_timesheet),
        )
        .route("/current", get(timesheets::current_timesheet))
        .route("/{id}", get(timesheets::get_timesheet))
        .layer(middleware::from_fn_with_state(
            middleware_state.clone(),
            auth_middleware,
        ))
        .with_state(timesheet_state.clone());

    // Hours overview (protected)
    let overview_routes = Router::new()
        .route("/", get(timesheets::overview))
        .layer(middleware::from_fn_with_state(
            middleware_state,
            auth_middleware,
        ))
        .with_state(timesheet_state);

    // Prometheus scrape endpoint (public)
    let metrics_routes = Router::new()
        .route("/", get(metrics::prometheus_metrics))
        .with_state(metrics_state);

    let swagger_routes = SwaggerUi::new("/docs").url("/api-doc/openapi.json", ApiDoc::openapi());

    // Build router
    Router::new()
        // Swagger UI
        .merge(swagger_routes)
        // Health
        .route("/health", get(health::health_check))
        // Metrics
        .nest("/metrics", metrics_routes)
        // Auth
        .nest("/api/v1/auth", auth_routes)
        .nest("/api/v1/auth", auth_protected_routes)
        // Users
        .nest("/api/v1/users", user_routes)
        // Time clock
        .nest("/api/v1/timeclock", timeclock_routes)
        // Workdays
        .nest("/api/v1/workdays", workday_routes)
        .nest("/api/v1/photos", photo_routes)
        // Timesheets
        .nest("/api/v1/timesheets", timesheet_routes)
        .nest("/api/v1/overview", overview_routes)
        // Middleware
        .layer(cors)
        .layer(TraceLayer::new_for_http())
        .layer(middleware::from_fn(metrics::http_metrics_middleware))
}

// ── Tests ──────────────────────────────────────────────────────────

#[cfg(test)]
mod tests {
    use super::*;
    use axum::body::{to_bytes, Body};
    use axum::http::{header, Request, StatusCode};
    use metrics_exporter_prometheus::PrometheusBuilder;
    use serde_json::{json, Value};

    use crate::application::test_support::{seed_user, setup_repos, TEST_PASSWORD};
    use crate::domain::Role;

    async fn test_app() -> (Router, Arc<dyn RepositoryProvider>) {
        let repos = setup_repos().await;
        let handle = PrometheusBuilder::new().build_recorder().handle();
        let app = create_api_router(Arc::clone(&repos), JwtConfig::default(), handle);
        (app, repos)
    }

    async fn send(app: &Router, req: Request<Body>) -> axum::http::Response<Body> {
        use tower::Service;
        let mut svc = app.clone().into_service();
        svc.call(req).await.unwrap()
    }

    async fn body_json(resp: axum::http::Response<Body>) -> Value {
        let bytes = to_bytes(resp.into_body(), usize::MAX).await.unwrap();
        serde_json::from_slice(&bytes).unwrap()
    }

    fn get_req(uri: &str, token: Option<&str>) -> Request<Body> {
        let mut builder = Request::builder().method("GET").uri(uri);
        if let Some(token) = token {
            builder = builder.header(header::AUTHORIZATION, format!("Bearer {}", token));
        }
        builder.body(Body::empty()).unwrap()
    }

    fn post_req(uri: &str, token: Option<&str>, body: Value) -> Request<Body> {
        let mut builder = Request::builder()
            .method("POST")
            .uri(uri)
            .header(header::CONTENT_TYPE, "application/json");
        if let Some(token) = token {
            builder = builder.header(header::AUTHORIZATION, format!("Bearer {}", token));
        }
        builder
            .body(Body::from(serde_json::to_vec(&body).unwrap()))
            .unwrap()
    }

    async fn login(app: &Router, email: &str) -> String {
        let resp = send(
            app,
            post_req(
                "/api/v1/auth/login",
                None,
                json!({"email": email, "password": TEST_PASSWORD}),
            ),
        )
        .await;
        assert_eq!(resp.status(), StatusCode::OK);
        let body = body_json(resp).await;
        body["data"]["token"].as_str().unwrap().to_string()
    }

    #[tokio::test]
    async fn health_and_metrics_are_public() {
        let (app, _repos) = test_app().await;

        let resp = send(&app, get_req("/health", None)).await;
        assert_eq!(resp.status(), StatusCode::OK);
        let body = body_json(resp).await;
        assert_eq!(body["status"], "ok");

        let resp = send(&app, get_req("/metrics", None)).await;
        assert_eq!(resp.status(), StatusCode::OK);
    }

    #[tokio::test]
    async fn protected_routes_reject_missing_and_bad_tokens() {
        let (app, _repos) = test_app().await;

        let resp = send(&app, get_req("/api/v1/timeclock/status", None)).await;
        assert_eq!(resp.status(), StatusCode::UNAUTHORIZED);

        let resp = send(&app, get_req("/api/v1/auth/me", Some("not-a-jwt"))).await;
        assert_eq!(resp.status(), StatusCode::UNAUTHORIZED);
    }

    #[tokio::test]
    async fn login_then_me_roundtrip() {
        let (app, repos) = test_app().await;
        seed_user(repos.as_ref(), Role::Admin, "boss@example.com").await;

        let token = login(&app, "boss@example.com").await;

        let resp = send(&app, get_req("/api/v1/auth/me", Some(&token))).await;
        assert_eq!(resp.status(), StatusCode::OK);
        let body = body_json(resp).await;
        assert_eq!(body["success"], true);
        assert_eq!(body["data"]["email"], "boss@example.com");
        assert_eq!(body["data"]["role"], "ADMIN");
    }

    #[tokio::test]
    async fn login_failures_keep_their_distinct_statuses() {
        let (app, repos) = test_app().await;
        seed_user(repos.as_ref(), Role::Employee, "worker@example.com").await;

        // Known account, wrong password.
        let resp = send(
            &app,
            post_req(
                "/api/v1/auth/login",
                None,
                json!({"email": "worker@example.com", "password": "wrong password"}),
            ),
        )
        .await;
        assert_eq!(resp.status(), StatusCode::UNAUTHORIZED);

        // Unknown account.
        let resp = send(
            &app,
            post_req(
                "/api/v1/auth/login",
                None,
                json!({"email": "ghost@example.com", "password": "irrelevant1"}),
            ),
        )
        .await;
        assert_eq!(resp.status(), StatusCode::NOT_FOUND);
    }

    #[tokio::test]
    async fn punch_flow_over_http() {
        let (app, repos) = test_app().await;
        seed_user(repos.as_ref(), Role::Employee, "worker@example.com").await;
        let token = login(&app, "worker@example.com").await;

        // Nothing recorded yet.
        let resp = send(&app, get_req("/api/v1/timeclock/status", Some(&token))).await;
        let body = body_json(resp).await;
        assert_eq!(body["data"]["clocked_in"], false);

        // Clock in.
        let resp = send(
            &app,
            post_req("/api/v1/timeclock/clock-in", Some(&token), json!({})),
        )
        .await;
        assert_eq!(resp.status(), StatusCode::OK);

        // Now on the clock.
        let resp = send(&app, get_req("/api/v1/timeclock/status", Some(&token))).await;
        let body = body_json(resp).await;
        assert_eq!(body["data"]["clocked_in"], true);

        // A second clock-in conflicts.
        let resp = send(
            &app,
            post_req("/api/v1/timeclock/clock-in", Some(&token), json!({})),
        )
        .await;
        assert_eq!(resp.status(), StatusCode::CONFLICT);

        // Clock out and verify the day closed.
        let resp = send(
            &app,
            post_req("/api/v1/timeclock/clock-out", Some(&token), json!({})),
        )
        .await;
        assert_eq!(resp.status(), StatusCode::OK);
        let body = body_json(resp).await;
        assert!(body["data"]["clock_out"].is_string());
    }

    #[tokio::test]
    async fn employee_cannot_reach_admin_routes() {
        let (app, repos) = test_app().await;
        seed_user(repos.as_ref(), Role::Employee, "worker@example.com").await;
        let token = login(&app, "worker@example.com").await;

        let resp = send(
            &app,
            post_req(
                "/api/v1/users",
                Some(&token),
                json!({
                    "email": "new@example.com",
                    "password": "long enough",
                    "role": "EMPLOYEE"
                }),
            ),
        )
        .await;
        assert_eq!(resp.status(), StatusCode::FORBIDDEN);

        let resp = send(&app, get_req("/api/v1/overview", Some(&token))).await;
        assert_eq!(resp.status(), StatusCode::FORBIDDEN);
    }

    #[tokio::test]
    async fn admin_registers_a_user_who_can_then_login() {
        let (app, repos) = test_app().await;
        seed_user(repos.as_ref(), Role::Admin, "boss@example.com").await;
        let token = login(&app, "boss@example.com").await;

        let resp = send(
            &app,
            post_req(
                "/api/v1/users",
                Some(&token),
                json!({
                    "email": "hire@example.com",
                    "password": "initial-password",
                    "role": "EMPLOYEE",
                    "username": "New Hire"
                }),
            ),
        )
        .await;
        assert_eq!(resp.status(), StatusCode::CREATED);
        let body = body_json(resp).await;
        assert_eq!(body["data"]["email"], "hire@example.com");

        let resp = send(
            &app,
            post_req(
                "/api/v1/auth/login",
                None,
                json!({"email": "hire@example.com", "password": "initial-password"}),
            ),
        )
        .await;
        assert_eq!(resp.status(), StatusCode::OK);
    }

    #[tokio::test]
    async fn openapi_document_is_served() {
        let (app, _repos) = test_app().await;

        let resp = send(&app, get_req("/api-doc/openapi.json", None)).await;
        assert_eq!(resp.status(), StatusCode::OK);
        let body = body_json(resp).await;
        assert!(body["paths"]["/api/v1/timeclock/clock-in"].is_object());
        assert!(body["paths"]["/api/v1/timesheets/current"].is_object());
    }
}
