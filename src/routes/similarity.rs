use actix_web::{web, HttpResponse, Responder};
use validator::Validate;
use crate::core::SimilarityEngine;
use crate::models::{
    ClassifyRequest, ClassifyResponse, ErrorResponse, HealthResponse, SchemeKind,
    SimilarityRequest, SimilarityResponse,
};

/// Application state shared across all handlers
#[derive(Clone)]
pub struct AppState {
    pub engine: SimilarityEngine,
}

/// Configure all similarity routes
pub fn configure(cfg: &mut web::ServiceConfig) {
    cfg
        .route("/health", web::get().to(health_check))
        .route("/similarity", web::post().to(similarity))
        .route("/classify", web::post().to(classify));
}

/// Health check endpoint
async fn health_check() -> impl Responder {
    HttpResponse::Ok().json(HealthResponse {
        status: "healthy".to_string(),
        version: env!("CARGO_PKG_VERSION").to_string(),
        timestamp: chrono::Utc::now(),
    })
}

fn bad_request(error: &str, message: String) -> HttpResponse {
    HttpResponse::BadRequest().json(ErrorResponse {
        error: error.to_string(),
        message,
        status_code: 400,
    })
}

fn internal_error(message: String) -> HttpResponse {
    HttpResponse::InternalServerError().json(ErrorResponse {
        error: "Comparison failed".to_string(),
        message,
        status_code: 500,
    })
}

/// Similarity endpoint
///
/// POST /api/v1/similarity
///
/// Request body:
/// ```json
/// {
///   "a": "Apt 411 Washington DC 20001",
///   "b": "1730 7th St NW Apt 411, Washington, DC 20001"
/// }
/// ```
async fn similarity(
    state: web::Data<AppState>,
    req: web::Json<SimilarityRequest>,
) -> impl Responder {
    if let Err(errors) = req.validate() {
        tracing::info!("Validation failed for similarity request: {:?}", errors);
        return bad_request("Validation failed", errors.to_string());
    }

    let SimilarityRequest { a, b } = req.into_inner();
    let engine = state.engine.clone();

    // Edit distance is quadratic; keep it off the async workers
    let scores = match tokio::task::spawn_blocking(move || engine.similarity(&a, &b)).await {
        Ok(scores) => scores,
        Err(e) => {
            tracing::error!("Similarity computation failed: {}", e);
            return internal_error(e.to_string());
        }
    };

    HttpResponse::Ok().json(SimilarityResponse::from(scores))
}

/// Classify endpoint
///
/// POST /api/v1/classify
///
/// Request body:
/// ```json
/// {
///   "a": "1730 7th st nw washington dc 20001",
///   "b": "1730 7th St NW Apt 411, Washington, DC 20001",
///   "scheme": "two-metric"
/// }
/// ```
async fn classify(
    state: web::Data<AppState>,
    req: web::Json<ClassifyRequest>,
) -> impl Responder {
    if let Err(errors) = req.validate() {
        tracing::info!("Validation failed for classify request: {:?}", errors);
        return bad_request("Validation failed", errors.to_string());
    }

    let ClassifyRequest { a, b, scheme } = req.into_inner();

    let scheme = match scheme {
        Some(name) => match name.parse::<SchemeKind>() {
            Ok(kind) => kind,
            Err(e) => return bad_request("Invalid scheme", e.to_string()),
        },
        None => state.engine.default_scheme(),
    };

    let engine = state.engine.clone();
    let result = match tokio::task::spawn_blocking(move || engine.classify_with(&a, &b, scheme)).await {
        Ok(result) => result,
        Err(e) => {
            tracing::error!("Classification failed: {}", e);
            return internal_error(e.to_string());
        }
    };

    tracing::info!(
        "Classified pair as {} ({:.2}, {})",
        result.tier,
        result.weighted_score,
        result.scheme
    );

    HttpResponse::Ok().json(ClassifyResponse::from(result))
}
