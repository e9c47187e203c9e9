use actix_web::{web, HttpResponse, Responder};
use crate::models::{Categorical, ErrorResponse, HealthResponse, InputRecord, PredictRequest, PredictResponse, SchemaResponse};
use crate::routes::AppState;

/// Configure the JSON prediction API
pub fn configure(cfg: &mut web::ServiceConfig) {
    cfg
        .route("/health", web::get().to(health_check))
        .route("/schema", web::get().to(schema))
        .route("/predict", web::post().to(predict));
}

/// Health check endpoint
async fn health_check() -> impl Responder {
    HttpResponse::Ok().json(HealthResponse {
        status: "healthy".to_string(),
        version: env!("CARGO_PKG_VERSION").to_string(),
        timestamp: chrono::Utc::now(),
    })
}

/// Loaded schema endpoint
///
/// GET /api/v1/schema
async fn schema(state: web::Data<AppState>) -> impl Responder {
    let schema = state.predictor.schema();

    HttpResponse::Ok().json(SchemaResponse {
        columns: schema.columns().to_vec(),
        width: schema.len(),
        model_kind: state.predictor.model_kind().to_string(),
    })
}

/// Predict price endpoint
///
/// POST /api/v1/predict
///
/// Request body:
/// ```json
/// {
///   "city": "Lahore",
///   "province": "Punjab",
///   "propertyType": "House",
///   "purpose": "For Sale",
///   "locationId": 1482,
///   "latitude": 31.52,
///   "longitude": 74.35,
///   "baths": 3,
///   "bedrooms": 4,
///   "areaSize": 10
/// }
/// ```
async fn predict(
    state: web::Data<AppState>,
    req: web::Json<PredictRequest>,
) -> impl Responder {
    let record = match InputRecord::try_from(req.into_inner()) {
        Ok(record) => record,
        Err(e) => {
            tracing::info!("Rejected prediction request: {}", e);
            return HttpResponse::BadRequest().json(ErrorResponse {
                error: "Invalid input".to_string(),
                message: e.to_string(),
                status_code: 400,
            });
        }
    };
    tracing::debug!("Prediction requested: {:?}", record);

    let result = match state.predictor.predict(&record) {
        Ok(result) => result,
        Err(e) => {
            tracing::error!("Prediction failed: {}", e);
            return HttpResponse::InternalServerError().json(ErrorResponse {
                error: "Prediction failed".to_string(),
                message: e.to_string(),
                status_code: 500,
            });
        }
    };

    let response = PredictResponse {
        prediction_id: uuid::Uuid::new_v4().to_string(),
        predicted_price: result.value,
        display_price: state.formatter.display_price(result.value),
        currency: state.formatter.currency().to_string(),
        html: state.formatter.format(&result),
        warnings: result.warnings,
    };

    tracing::info!(
        "Predicted {} for {} {} in {} ({} warnings)",
        response.display_price,
        record.property_type.label(),
        record.purpose.label(),
        record.city.label(),
        response.warnings.len()
    );

    HttpResponse::Ok().json(response)
}
