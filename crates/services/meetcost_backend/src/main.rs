// File: services/meetcost_backend/src/main.rs
use axum::{routing::get, Json, Router};
use meetcost_common::{config_error, log_result, logging, MeetcostError, SharedEventSource};
use meetcost_config::{load_config, AppConfig};
use meetcost_stats::routes as stats_routes;
use meetcost_stats::source::source_from_config;
use serde::Serialize;
use std::sync::Arc;
use tokio::net::TcpListener;
use tower_http::trace::TraceLayer;
use tracing::{error, info};

#[derive(Debug, Serialize)]
struct Health {
    status: &'static str,
    version: &'static str,
}

#[axum::debug_handler]
async fn health() -> Json<Health> {
    Json(Health {
        status: "ok",
        version: env!("CARGO_PKG_VERSION"),
    })
}

fn app(config: Arc<AppConfig>, source: Option<SharedEventSource>) -> Router {
    let api_router = Router::new()
        .route("/", get(|| async { "Welcome to the meeting cost API!" }))
        .route("/health", get(health))
        .merge(stats_routes::routes(config, source));

    #[allow(unused_mut)] // for the openapi feature it needs to be mutable
    let mut app = Router::new().nest("/api", api_router);

    // Conditionally add Swagger UI and JSON endpoint if openapi feature enabled
    #[cfg(feature = "openapi")]
    {
        use meetcost_stats::doc::StatsApiDoc;
        use utoipa::OpenApi;
        use utoipa_swagger_ui::SwaggerUi;

        #[derive(OpenApi)]
        #[openapi(
            info(
                title = "Meeting Cost API",
                version = "0.1.0",
                description = "Meeting statistics and cost estimates",
                license(name = "MIT", url = "https://opensource.org/licenses/MIT")
            ),
            servers( (url = "/api", description = "Main API Prefix")),
        )]
        struct ApiDoc;

        let mut openapi_doc = ApiDoc::openapi();
        openapi_doc.merge(StatsApiDoc::openapi());
        info!("Adding Swagger UI at /api/docs");

        let swagger_ui = SwaggerUi::new("/api/docs").url("/api/docs/openapi.json", openapi_doc);
        app = app.merge(swagger_ui);
    }

    app.layer(TraceLayer::new_for_http())
}

async fn run() -> Result<(), MeetcostError> {
    let config = log_result(
        load_config().map_err(config_error),
        "Configuration loaded",
        "Failed to load configuration",
    )?;
    let config = Arc::new(config);
    let source = source_from_config(&config);
    if source.is_none() {
        info!("No calendar source configured; GET /api/stats is disabled");
    }

    let addr = format!("{}:{}", config.server.host, config.server.port);
    let listener = TcpListener::bind(&addr).await?;
    info!("Starting server at http://{}", addr);
    info!("API endpoints available at http://{}/api", addr);

    axum::serve(listener, app(config, source).into_make_service()).await?;
    Ok(())
}

#[tokio::main]
async fn main() {
    logging::init();

    if let Err(e) = run().await {
        error!("Server terminated: {}", e);
        std::process::exit(1);
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use axum::body::{to_bytes, Body};
    use axum::http::{Request, StatusCode};
    use tower::ServiceExt;

    #[tokio::test]
    async fn test_health_endpoint() {
        let app = app(Arc::new(AppConfig::default()), None);
        let response = app
            .oneshot(Request::builder().uri("/api/health").body(Body::empty()).unwrap())
            .await
            .unwrap();

        assert_eq!(response.status(), StatusCode::OK);
        let body = to_bytes(response.into_body(), usize::MAX).await.unwrap();
        let value: serde_json::Value = serde_json::from_slice(&body).unwrap();
        assert_eq!(value["status"], "ok");
    }

    #[tokio::test]
    async fn test_stats_routes_are_mounted_under_api() {
        let app = app(Arc::new(AppConfig::default()), None);
        let response = app
            .oneshot(
                Request::builder()
                    .method("POST")
                    .uri("/api/stats")
                    .header("content-type", "application/json")
                    .body(Body::from(r#"{"events": []}"#))
                    .unwrap(),
            )
            .await
            .unwrap();

        assert_eq!(response.status(), StatusCode::OK);
    }
}
