//! HTTP layer for the onboarding service
//!
//! Thin plumbing around the judgment/command pair: deserialize and validate
//! the request, judge, render, return both. All decision logic lives in the
//! library modules.

use axum::{
    extract::State,
    http::StatusCode,
    response::Json,
    routing::{get, post},
    Router,
};
use serde::Serialize;
use tower::ServiceBuilder;
use tower_http::{
    services::{ServeDir, ServeFile},
    trace::TraceLayer,
};
use tracing::{info, warn};

use onboarding_poc::{
    command, judgment,
    models::{OnboardingRequest, OnboardingResponse},
    settings::Settings,
    OnboardingError,
};

// Application state
#[derive(Clone)]
pub struct AppState {
    pub settings: Settings,
}

// API envelope shared by every endpoint
#[derive(Serialize)]
pub struct ApiResponse<T> {
    pub success: bool,
    pub data: Option<T>,
    pub error: Option<String>,
}

impl<T> ApiResponse<T> {
    fn ok(data: T) -> Self {
        Self {
            success: true,
            data: Some(data),
            error: None,
        }
    }

    fn err(message: impl Into<String>) -> Self {
        Self {
            success: false,
            data: None,
            error: Some(message.into()),
        }
    }
}

#[derive(Serialize)]
pub struct HealthInfo {
    pub app_name: String,
    pub version: &'static str,
}

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    // Load environment variables
    dotenvy::dotenv().ok();
    let settings = Settings::from_env();

    // Initialize tracing
    tracing_subscriber::fmt()
        .with_env_filter(format!(
            "onboarding_poc={level},onboarding_server={level},tower_http=info",
            level = settings.log_level
        ))
        .init();

    info!(
        "{} v{} starting",
        settings.app_name,
        env!("CARGO_PKG_VERSION")
    );

    let addr = format!("{}:{}", settings.host, settings.port);
    let app = create_router(AppState { settings });

    info!("Listening on {}", addr);
    let listener = tokio::net::TcpListener::bind(&addr).await?;
    axum::serve(listener, app).await?;

    Ok(())
}

fn create_router(state: AppState) -> Router {
    Router::new()
        // Input form and assets
        .nest_service("/static", ServeDir::new("static"))
        .route_service("/", ServeFile::new("static/index.html"))
        // API routes
        .route("/api/health", get(health_check))
        .route("/api/onboarding", post(create_onboarding))
        // Request logging
        .layer(ServiceBuilder::new().layer(TraceLayer::new_for_http()))
        .with_state(state)
}

// Health check endpoint
async fn health_check(State(state): State<AppState>) -> Json<ApiResponse<HealthInfo>> {
    Json(ApiResponse::ok(HealthInfo {
        app_name: state.settings.app_name.clone(),
        version: env!("CARGO_PKG_VERSION"),
    }))
}

async fn create_onboarding(
    Json(request): Json<OnboardingRequest>,
) -> Result<Json<ApiResponse<OnboardingResponse>>, (StatusCode, Json<ApiResponse<OnboardingResponse>>)> {
    info!(
        "Onboarding request: employment_type={:?}, department='{}'",
        request.employment_type, request.department
    );

    match process_onboarding(&request) {
        Ok(response) => {
            info!(
                "Judgment: {:?} -> {:?} + {}",
                request.employment_type, response.judgment.user_tier, response.judgment.license_plan_name
            );
            Ok(Json(ApiResponse::ok(response)))
        }
        Err(err) => {
            warn!("Request rejected: {err}");
            Err((StatusCode::BAD_REQUEST, Json(ApiResponse::err(err.to_string()))))
        }
    }
}

/// Run the full pipeline for one validated request.
///
/// Both errors the core can produce are client-input problems, so the caller
/// maps any [`OnboardingError`] to 400.
fn process_onboarding(request: &OnboardingRequest) -> Result<OnboardingResponse, OnboardingError> {
    request.validate()?;

    let now = chrono::Utc::now();
    let judgment = judgment::judge(request.employment_type, now);
    let command = command::render(request, &judgment, now);

    Ok(OnboardingResponse { judgment, command })
}
