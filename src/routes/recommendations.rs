use actix_web::{web, HttpResponse, Responder};
use std::sync::Arc;
use validator::Validate;

use crate::config::RecommendationSettings;
use crate::core::{
    build_profile, log_catalog_warnings, log_warnings, parse_catalog, Recommender, SurveyResponse,
    ValidationError,
};
use crate::models::{
    ErrorResponse, HealthResponse, LimitQuery, ProfileResponse, RawAnswers, RecommendRequest,
    RecommendationResponse, SurveyRequest, SurveyStoredResponse, UserPath,
};
use crate::services::{CatalogStore, SurveyStore};

/// Application state shared across all handlers
#[derive(Clone)]
pub struct AppState {
    pub catalog: Arc<CatalogStore>,
    pub surveys: Arc<SurveyStore>,
    pub recommender: Recommender,
    pub limits: RecommendationSettings,
}

/// Configure all recommendation-related routes
pub fn configure(cfg: &mut web::ServiceConfig) {
    cfg
        .route("/health", web::get().to(health_check))
        .route("/profile", web::post().to(build_user_profile))
        .route("/recommendations", web::post().to(recommend))
        .route("/recommendations/{userId}", web::get().to(recommend_for_user))
        .route("/surveys/{userId}", web::put().to(store_survey))
        .route("/surveys/{userId}", web::delete().to(delete_survey));
}

/// Health check endpoint
async fn health_check(state: web::Data<AppState>) -> impl Responder {
    HttpResponse::Ok().json(HealthResponse {
        status: "healthy".to_string(),
        version: env!("CARGO_PKG_VERSION").to_string(),
        timestamp: chrono::Utc::now(),
        catalog_size: state.catalog.len(),
        stored_surveys: state.surveys.len(),
    })
}

/// Validate raw answers or build the 422 response naming the question
fn validate_answers(answers: &RawAnswers) -> Result<SurveyResponse, HttpResponse> {
    SurveyResponse::try_from(answers).map_err(|e| {
        tracing::info!("Rejected survey: {}", e);
        invalid_survey(&e)
    })
}

fn invalid_survey(err: &ValidationError) -> HttpResponse {
    HttpResponse::UnprocessableEntity().json(ErrorResponse {
        error: "invalid_survey".to_string(),
        message: err.to_string(),
        status_code: 422,
        question: Some(err.question()),
    })
}

fn bad_request(error: &str, message: String) -> HttpResponse {
    HttpResponse::BadRequest().json(ErrorResponse {
        error: error.to_string(),
        message,
        status_code: 400,
        question: None,
    })
}

/// Build a profile from survey answers
///
/// POST /api/v1/profile
///
/// Request body:
/// ```json
/// { "answers": {"1": 2, "2": 3, "3": 1, "4": 4, "5": 0, "6": 2, "7": 3, "8": 1} }
/// ```
async fn build_user_profile(req: web::Json<SurveyRequest>) -> impl Responder {
    let survey = match validate_answers(&req.answers) {
        Ok(survey) => survey,
        Err(response) => return response,
    };

    HttpResponse::Ok().json(ProfileResponse {
        profile: build_profile(&survey),
    })
}

/// Rank hobbies for survey answers
///
/// POST /api/v1/recommendations
///
/// Request body:
/// ```json
/// {
///   "answers": {"1": 2, "2": 3, "3": 1, "4": 4, "5": 0, "6": 2, "7": 3, "8": 1},
///   "catalog": [ ... ],
///   "limit": 10
/// }
/// ```
/// `catalog` is optional; the loaded snapshot is used when it is absent.
/// Catalog entries that cannot be read are skipped and logged.
async fn recommend(state: web::Data<AppState>, req: web::Json<RecommendRequest>) -> impl Responder {
    let RecommendRequest { answers, catalog, limit } = req.into_inner();

    let survey = match validate_answers(&answers) {
        Ok(survey) => survey,
        Err(response) => return response,
    };

    let limit = state.limits.resolve(limit);

    let result = match catalog {
        Some(entries) => {
            let (catalog, skipped) = parse_catalog(entries);
            log_warnings(&skipped);
            log_catalog_warnings(&catalog);
            state.recommender.recommend(&survey, &catalog, limit)
        }
        None => {
            let snapshot = state.catalog.snapshot();
            state.recommender.recommend(&survey, &snapshot, limit)
        }
    };

    tracing::info!(
        "Returning {} recommendations (from {} hobbies, limit {})",
        result.len(),
        result.total_candidates,
        limit
    );

    HttpResponse::Ok().json(RecommendationResponse {
        request_id: uuid::Uuid::new_v4().to_string(),
        result,
    })
}

/// Store a user's latest survey
///
/// PUT /api/v1/surveys/{userId}
async fn store_survey(
    state: web::Data<AppState>,
    path: web::Path<UserPath>,
    req: web::Json<SurveyRequest>,
) -> impl Responder {
    if let Err(errors) = path.validate() {
        return bad_request("invalid_user_id", errors.to_string());
    }

    let survey = match validate_answers(&req.answers) {
        Ok(survey) => survey,
        Err(response) => return response,
    };

    state.surveys.put(&path.user_id, survey).await;
    tracing::info!("Stored survey for user {}", path.user_id);

    HttpResponse::Ok().json(SurveyStoredResponse {
        user_id: path.user_id.clone(),
        profile: build_profile(&survey),
    })
}

/// Forget a user's stored survey
///
/// DELETE /api/v1/surveys/{userId}
async fn delete_survey(state: web::Data<AppState>, path: web::Path<UserPath>) -> impl Responder {
    if let Err(errors) = path.validate() {
        return bad_request("invalid_user_id", errors.to_string());
    }

    state.surveys.remove(&path.user_id).await;
    tracing::info!("Removed survey for user {}", path.user_id);

    HttpResponse::NoContent().finish()
}

/// Recommend from a user's stored survey
///
/// GET /api/v1/recommendations/{userId}?limit=10
async fn recommend_for_user(
    state: web::Data<AppState>,
    path: web::Path<UserPath>,
    query: web::Query<LimitQuery>,
) -> impl Responder {
    if let Err(errors) = path.validate() {
        return bad_request("invalid_user_id", errors.to_string());
    }

    let Some(survey) = state.surveys.get(&path.user_id).await else {
        return HttpResponse::NotFound().json(ErrorResponse {
            error: "survey_not_found".to_string(),
            message: format!("No survey stored for user {}", path.user_id),
            status_code: 404,
            question: None,
        });
    };

    let limit = state.limits.resolve(query.limit);
    let snapshot = state.catalog.snapshot();
    let result = state.recommender.recommend(&survey, &snapshot, limit);

    tracing::info!(
        "Returning {} recommendations for user {} (from {} hobbies)",
        result.len(),
        path.user_id,
        result.total_candidates
    );

    HttpResponse::Ok().json(RecommendationResponse {
        request_id: uuid::Uuid::new_v4().to_string(),
        result,
    })
}
