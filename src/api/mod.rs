use axum::{
    extract::{Path, Query, State},
    http::StatusCode,
    response::Json,
    routing::get,
    Router,
};
use chrono::Local;
use serde::Deserialize;
use std::sync::Arc;
use tower::ServiceBuilder;
use tower_http::{cors::CorsLayer, trace::TraceLayer};

use crate::config::AppConfig;
use crate::models::{ApiResponse, PredictionRecord, TeamFormReport};
use crate::services::{filter_and_sort, Ledger, PredictionEngine, ProbabilitySort};
use crate::utils::validate_team_name;

pub struct AppState {
    pub config: AppConfig,
    pub engine: PredictionEngine,
    /// Absent when the ledger file did not exist at startup
    pub ledger: Option<Ledger>,
}

type SharedState = Arc<AppState>;

pub async fn serve(config: AppConfig, port: u16) -> anyhow::Result<()> {
    let ledger = if config.ledger_path.exists() {
        Some(Ledger::from_csv_path(&config.ledger_path)?)
    } else {
        tracing::warn!(
            "Ledger not found at {}; team form endpoint disabled",
            config.ledger_path.display()
        );
        None
    };

    let state = Arc::new(AppState {
        engine: PredictionEngine::from_config(&config),
        config,
        ledger,
    });

    let app = create_router().with_state(state);

    let listener = tokio::net::TcpListener::bind(format!("0.0.0.0:{}", port)).await?;
    tracing::info!("OUForge API server listening on port {}", port);

    axum::serve(listener, app).await?;
    Ok(())
}

fn create_router() -> Router<SharedState> {
    Router::new()
        .route("/health", get(health_check))
        .route("/predictions", get(get_predictions_handler))
        .route("/teams/{name}/form", get(get_team_form_handler))
        .layer(
            ServiceBuilder::new()
                .layer(TraceLayer::new_for_http())
                .layer(CorsLayer::permissive()),
        )
}

async fn health_check() -> Json<ApiResponse<&'static str>> {
    Json(ApiResponse::success("OUForge API is running"))
}

// GET /predictions?league=NBA&sort=lowest_first
#[derive(Deserialize)]
struct PredictionsQuery {
    league: Option<String>,
    #[serde(default)]
    sort: ProbabilitySort,
}

async fn get_predictions_handler(
    State(state): State<SharedState>,
    Query(params): Query<PredictionsQuery>,
) -> Json<ApiResponse<Vec<PredictionRecord>>> {
    let predictions = state.engine.predict_all_leagues(&state.config).await;
    Json(ApiResponse::success(filter_and_sort(
        predictions,
        params.league.as_deref(),
        params.sort,
    )))
}

// GET /teams/{name}/form
async fn get_team_form_handler(
    State(state): State<SharedState>,
    Path(name): Path<String>,
) -> Result<Json<ApiResponse<TeamFormReport>>, (StatusCode, Json<ApiResponse<TeamFormReport>>)> {
    let fail = |status: StatusCode, message: String| (status, Json(ApiResponse::error(message)));

    if !validate_team_name(&name) {
        return Err(fail(StatusCode::BAD_REQUEST, "Invalid team name".to_string()));
    }
    let Some(ledger) = state.ledger.as_ref() else {
        return Err(fail(
            StatusCode::SERVICE_UNAVAILABLE,
            "Historical ledger not loaded".to_string(),
        ));
    };

    let report = state.engine.team_form(ledger, &name, Local::now().date_naive(), 10);
    if report.window.games == 0 {
        let suggestions = ledger.suggest_teams(&name, 5);
        let message = if suggestions.is_empty() {
            format!("No games found for '{}'", name)
        } else {
            format!("No games found for '{}'. Did you mean: {}", name, suggestions.join(", "))
        };
        return Err(fail(StatusCode::NOT_FOUND, message));
    }
    Ok(Json(ApiResponse::success(report)))
}
