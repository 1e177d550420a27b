use axum::{
    Router,
    extract::{
        Json, Query,
        rejection::{JsonRejection, QueryRejection},
    },
    http::{StatusCode, header},
    response::{Html, IntoResponse, Response},
    routing::get,
};
use clap::Args;
use serde::{Deserialize, Serialize};
use std::net::SocketAddr;
use thiserror::Error;
use tokio::net::TcpListener;

use crate::core::config::{
    AGE_MAX, AGE_MIN, DEFAULT_AGE, DEFAULT_MONTHLY_PENSION, DEFAULT_PENSION_AGE,
    DEFAULT_WITHDRAWAL_YEARLY, GROWTH_RATE, INFLATION, INPUT_BOUNDS, InputBounds,
    MONTHLY_PENSION_MAX, MONTHLY_PENSION_MIN, NEST_EGG_MULTIPLE, PENSION_AGE_MAX,
    PENSION_AGE_MIN, WITHDRAWAL_MAX, WITHDRAWAL_MIN,
};
use crate::core::{
    Inputs, Projection, ProjectionError, ProjectionPoint, RetirementSummary, SummaryLabels,
    point_tooltip_title, run_projection, summary_labels,
};

pub mod report;

const INDEX_HTML: &str = include_str!("../../web/index.html");
const STYLES_CSS: &str = include_str!("../../web/styles.css");
const APP_JS: &str = include_str!("../../web/app.js");

#[derive(Debug, Error)]
pub enum ApiError {
    #[error("{field} must be a finite number")]
    NonFinite { field: &'static str },

    #[error(transparent)]
    Projection(#[from] ProjectionError),

    #[error("Invalid API JSON payload: {0}")]
    Json(#[from] serde_json::Error),
}

impl ApiError {
    fn status(&self) -> StatusCode {
        match self {
            Self::NonFinite { .. } | Self::Json(_) => StatusCode::BAD_REQUEST,
            Self::Projection(_) => StatusCode::UNPROCESSABLE_ENTITY,
        }
    }
}

/// Raw calculator inputs, clamped into [`Inputs`] by [`build_inputs`].
#[derive(Args, Debug, Clone, PartialEq)]
pub struct ProjectArgs {
    #[arg(
        long,
        default_value_t = DEFAULT_AGE as f64,
        allow_negative_numbers = true,
        help = "Current age in years; fractions are truncated"
    )]
    pub age: f64,
    #[arg(
        long,
        default_value_t = DEFAULT_PENSION_AGE as f64,
        allow_negative_numbers = true,
        help = "Age at which the pension starts; fractions are truncated"
    )]
    pub pension_age: f64,
    #[arg(
        long,
        default_value_t = DEFAULT_WITHDRAWAL_YEARLY,
        help = "Desired annual spending in today's money"
    )]
    pub withdrawal_yearly: f64,
    #[arg(
        long,
        default_value_t = DEFAULT_MONTHLY_PENSION,
        help = "Expected monthly state/employer pension in today's money"
    )]
    pub monthly_pension: f64,
    #[arg(long, help = "Print the JSON response instead of the text report")]
    pub json: bool,
}

impl Default for ProjectArgs {
    fn default() -> Self {
        Self {
            age: DEFAULT_AGE as f64,
            pension_age: DEFAULT_PENSION_AGE as f64,
            withdrawal_yearly: DEFAULT_WITHDRAWAL_YEARLY,
            monthly_pension: DEFAULT_MONTHLY_PENSION,
            json: false,
        }
    }
}

#[derive(Debug, Default, Deserialize)]
#[serde(default, rename_all = "camelCase")]
struct ProjectPayload {
    age: Option<f64>,
    pension_age: Option<f64>,
    withdrawal_yearly: Option<f64>,
    monthly_pension: Option<f64>,
}

#[derive(Debug, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct ProjectResponse {
    pub inputs: Inputs,
    pub pension_yearly: f64,
    pub years_to_pension: i32,
    pub years_to_pension_display: u32,
    pub points: Vec<ProjectionPoint>,
    pub point_titles: Vec<String>,
    pub summary: RetirementSummary,
    pub labels: SummaryLabels,
    pub warnings: Vec<String>,
}

#[derive(Debug, Serialize)]
#[serde(rename_all = "camelCase")]
struct ConfigResponse {
    bounds: InputBounds,
    inflation_rate: f64,
    growth_rate: f64,
    nest_egg_multiple: f64,
}

#[derive(Debug, Serialize)]
struct ErrorResponse {
    error: String,
}

/// Clamps every value to its slider bounds, truncating ages to whole years
/// first. Non-finite numbers cannot be clamped and are rejected.
pub fn build_inputs(args: &ProjectArgs) -> Result<Inputs, ApiError> {
    for (field, value) in [
        ("age", args.age),
        ("pension-age", args.pension_age),
        ("withdrawal-yearly", args.withdrawal_yearly),
        ("monthly-pension", args.monthly_pension),
    ] {
        if !value.is_finite() {
            return Err(ApiError::NonFinite { field });
        }
    }

    Ok(Inputs::new(
        clamp_age(args.age, AGE_MIN, AGE_MAX),
        clamp_age(args.pension_age, PENSION_AGE_MIN, PENSION_AGE_MAX),
        args.withdrawal_yearly.clamp(WITHDRAWAL_MIN, WITHDRAWAL_MAX),
        args.monthly_pension.clamp(MONTHLY_PENSION_MIN, MONTHLY_PENSION_MAX),
    ))
}

fn clamp_age(age: f64, min: u32, max: u32) -> u32 {
    age.trunc().clamp(min as f64, max as f64) as u32
}

/// An inverted horizon is still rendered (empty series, warning); undefined
/// coverage figures are not.
pub fn build_project_response(
    inputs: &Inputs,
    projection: Projection,
) -> Result<ProjectResponse, ApiError> {
    let mut warnings = Vec::new();
    match projection.check() {
        Ok(()) => {}
        Err(err) if err.is_displayable() => {
            tracing::warn!(age = inputs.age, pension_age = inputs.pension_age, "{err}");
            warnings.push(err.to_string());
        }
        Err(err) => return Err(err.into()),
    }

    let summary = projection.summary;
    Ok(ProjectResponse {
        inputs: *inputs,
        pension_yearly: inputs.pension_yearly(),
        years_to_pension: summary.years_to_pension,
        years_to_pension_display: summary.years_to_pension.max(0) as u32,
        labels: summary_labels(&summary, inputs.pension_age),
        point_titles: projection.points.iter().map(point_tooltip_title).collect(),
        points: projection.points,
        summary,
        warnings,
    })
}

pub fn project(args: &ProjectArgs) -> Result<ProjectResponse, ApiError> {
    let inputs = build_inputs(args)?;
    tracing::debug!(?inputs, "recomputing projection");

    let projection = run_projection(&inputs);
    tracing::debug!(
        years_to_pension = projection.summary.years_to_pension,
        points = projection.points.len(),
        "projection built"
    );
    build_project_response(&inputs, projection)
}

/// Output of the `project` subcommand.
pub fn run_cli_projection(args: &ProjectArgs) -> Result<String, ApiError> {
    let response = project(args)?;
    if args.json {
        Ok(serde_json::to_string_pretty(&response)?)
    } else {
        Ok(report::render_report(&response))
    }
}

pub fn router() -> Router {
    Router::new()
        .route("/", get(index_handler))
        .route("/index.html", get(index_handler))
        .route("/styles.css", get(styles_handler))
        .route("/app.js", get(app_js_handler))
        .route("/api/config", get(config_handler))
        .route(
            "/api/project",
            get(project_get_handler).post(project_post_handler),
        )
        .fallback(not_found_handler)
}

pub async fn run_http_server(port: u16) -> std::io::Result<()> {
    let addr = SocketAddr::from(([0, 0, 0, 0], port));
    let listener = TcpListener::bind(addr).await?;
    tracing::info!("pension calculator listening on http://{addr}");
    tracing::info!("local access: http://127.0.0.1:{port}/");

    axum::serve(listener, router()).await
}

async fn index_handler() -> impl IntoResponse {
    with_cache_control(Html(INDEX_HTML))
}

async fn styles_handler() -> impl IntoResponse {
    with_cache_control((
        [(header::CONTENT_TYPE, "text/css; charset=utf-8")],
        STYLES_CSS,
    ))
}

async fn app_js_handler() -> impl IntoResponse {
    with_cache_control((
        [(
            header::CONTENT_TYPE,
            "application/javascript; charset=utf-8",
        )],
        APP_JS,
    ))
}

async fn not_found_handler() -> Response {
    error_response(StatusCode::NOT_FOUND, "Not found")
}

async fn config_handler() -> Response {
    json_response(StatusCode::OK, config_response())
}

async fn project_get_handler(payload: Result<Query<ProjectPayload>, QueryRejection>) -> Response {
    match payload {
        Ok(Query(payload)) => project_handler_impl(payload).await,
        Err(rejection) => error_response(StatusCode::BAD_REQUEST, &rejection.body_text()),
    }
}

async fn project_post_handler(payload: Result<Json<ProjectPayload>, JsonRejection>) -> Response {
    match payload {
        Ok(Json(payload)) => project_handler_impl(payload).await,
        Err(rejection) => error_response(StatusCode::BAD_REQUEST, &rejection.body_text()),
    }
}

async fn project_handler_impl(payload: ProjectPayload) -> Response {
    let args = args_from_payload(payload);
    match project(&args) {
        Ok(response) => json_response(StatusCode::OK, response),
        Err(err) => error_response(err.status(), &err.to_string()),
    }
}

fn config_response() -> ConfigResponse {
    ConfigResponse {
        bounds: INPUT_BOUNDS,
        inflation_rate: INFLATION,
        growth_rate: GROWTH_RATE,
        nest_egg_multiple: NEST_EGG_MULTIPLE,
    }
}

fn with_cache_control<R: IntoResponse>(response: R) -> Response {
    let mut response = response.into_response();
    response.headers_mut().insert(
        header::CACHE_CONTROL,
        header::HeaderValue::from_static("no-store"),
    );
    response
}

fn json_response<T: Serialize>(status: StatusCode, body: T) -> Response {
    with_cache_control((status, Json(body)))
}

fn error_response(status: StatusCode, msg: &str) -> Response {
    json_response(
        status,
        ErrorResponse {
            error: msg.to_string(),
        },
    )
}

#[cfg(test)]
fn args_from_json(json: &str) -> Result<ProjectArgs, ApiError> {
    let payload = serde_json::from_str::<ProjectPayload>(json)?;
    Ok(args_from_payload(payload))
}

fn args_from_payload(payload: ProjectPayload) -> ProjectArgs {
    let mut args = ProjectArgs::default();

    if let Some(v) = payload.age {
        args.age = v;
    }
    if let Some(v) = payload.pension_age {
        args.pension_age = v;
    }
    if let Some(v) = payload.withdrawal_yearly {
        args.withdrawal_yearly = v;
    }
    if let Some(v) = payload.monthly_pension {
        args.monthly_pension = v;
    }

    args
}
