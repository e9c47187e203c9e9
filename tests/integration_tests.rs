// Integration tests for Zameen Price

use std::sync::Arc;
use actix_web::{http::StatusCode, test, web, App};
use zameen_price::config::ArtifactSettings;
use zameen_price::core::{Formatter, Predictor, RangeAdvisor};
use zameen_price::models::{City, FeatureSchema, InputRecord, PredictRequest, PredictResponse, PropertyType, Province, Purpose, SchemaResponse};
use zameen_price::routes::{self, AppState};
use zameen_price::services::{Artifacts, LinearModel};

fn bundled_artifacts() -> ArtifactSettings {
    ArtifactSettings {
        model_path: format!("{}/artifacts/model.json", env!("CARGO_MANIFEST_DIR")),
        schema_path: format!("{}/artifacts/features.json", env!("CARGO_MANIFEST_DIR")),
    }
}

async fn create_state() -> AppState {
    let artifacts = Artifacts::load(&bundled_artifacts()).await.unwrap();
    AppState {
        predictor: Predictor::new(artifacts.schema, artifacts.model, RangeAdvisor::default()),
        formatter: Formatter::default(),
    }
}

/// State over a hand-built linear model instead of the bundled artifacts
fn linear_state(columns: &[&str], intercept: f64, coefficients: Vec<f64>) -> AppState {
    let schema = FeatureSchema::new(columns.iter().map(|c| c.to_string()).collect());
    let model = LinearModel {
        intercept,
        coefficients,
    };
    AppState {
        predictor: Predictor::new(Arc::new(schema), Arc::new(model), RangeAdvisor::default()),
        formatter: Formatter::default(),
    }
}

fn lahore_house_request() -> PredictRequest {
    PredictRequest {
        city: City::Lahore,
        province: Province::Punjab,
        property_type: PropertyType::House,
        purpose: Purpose::ForSale,
        location_id: 1482.0,
        latitude: 31.5204,
        longitude: 74.3587,
        baths: 3.0,
        bedrooms: 4.0,
        area_size: 10.0,
    }
}

macro_rules! init_app {
    () => {
        test::init_service(
            App::new()
                .app_data(web::Data::new(create_state().await))
                .configure(routes::configure_routes),
        )
        .await
    };
}

#[actix_web::test]
async fn test_integration_bundled_model_prediction() {
    let state = create_state().await;
    let record = InputRecord::try_from(lahore_house_request()).unwrap();

    let result = state.predictor.predict(&record).unwrap();

    // Sale, > 8 marla (24M) + Lahore (3M) + 4 bedrooms (2.8M), not a flat
    assert_eq!(result.value, 29_800_000.0);
    assert!(result.warnings.is_empty());
    assert_eq!(state.predictor.schema().len(), 23);
    assert_eq!(state.predictor.model_kind(), "gradient_boosting");
}

#[actix_web::test]
async fn test_integration_rental_flat() {
    let state = create_state().await;
    let record = InputRecord {
        city: City::Islamabad,
        province: Province::IslamabadCapital,
        property_type: PropertyType::Flat,
        purpose: Purpose::ForRent,
        location_id: 3,
        latitude: 33.6844,
        longitude: 73.0479,
        baths: 2,
        bedrooms: 2,
        area_size: 5.0,
    };

    let result = state.predictor.predict(&record).unwrap();
    assert_eq!(result.value, 45_000.0 + 15_000.0 - 8_000.0 - 10_000.0);
}

#[actix_web::test]
async fn test_integration_json_predict() {
    let app = init_app!();
    let req = test::TestRequest::post()
        .uri("/api/v1/predict")
        .set_json(lahore_house_request())
        .to_request();

    let response: PredictResponse = test::call_and_read_body_json(&app, req).await;

    assert_eq!(response.predicted_price, 29_800_000.0);
    assert_eq!(response.display_price, "PKR 29,800,000");
    assert_eq!(response.currency, "PKR");
    assert!(response.warnings.is_empty());
    assert!(response.html.contains("PKR 29,800,000"));
    assert!(!response.html.contains("<li>"));
    assert!(!response.prediction_id.is_empty());
}

#[actix_web::test]
async fn test_integration_json_predict_with_warnings() {
    let app = init_app!();
    let mut request = lahore_house_request();
    request.area_size = 30.0;
    request.bedrooms = 8.0;

    let req = test::TestRequest::post()
        .uri("/api/v1/predict")
        .set_json(request)
        .to_request();
    let response: PredictResponse = test::call_and_read_body_json(&app, req).await;

    assert_eq!(response.warnings.len(), 2);
    assert!(response.warnings[0].contains("Area size"));
    assert!(response.warnings[1].contains("Bedroom"));
    assert_eq!(response.html.matches("<li>").count(), 2);
}

#[actix_web::test]
async fn test_integration_unknown_city_rejected() {
    let app = init_app!();
    let req = test::TestRequest::post()
        .uri("/api/v1/predict")
        .set_json(serde_json::json!({
            "city": "Multan",
            "province": "Punjab",
            "propertyType": "House",
            "purpose": "For Sale",
            "locationId": 1,
            "latitude": 30.2,
            "longitude": 71.5,
            "baths": 2,
            "bedrooms": 3,
            "areaSize": 5
        }))
        .to_request();

    let resp = test::call_service(&app, req).await;
    assert_eq!(resp.status(), StatusCode::BAD_REQUEST);

    let body: serde_json::Value = test::read_body_json(resp).await;
    assert_eq!(body["error"], "invalid_json");
}

#[actix_web::test]
async fn test_integration_schema_endpoint() {
    let app = init_app!();
    let req = test::TestRequest::get().uri("/api/v1/schema").to_request();

    let response: SchemaResponse = test::call_and_read_body_json(&app, req).await;

    assert_eq!(response.width, 23);
    assert_eq!(response.columns[5], "Area Size");
    assert_eq!(response.model_kind, "gradient_boosting");
}

#[actix_web::test]
async fn test_integration_form_page() {
    let app = init_app!();
    let req = test::TestRequest::get().uri("/").to_request();

    let resp = test::call_service(&app, req).await;
    assert!(resp.status().is_success());

    let body = test::read_body(resp).await;
    let page = String::from_utf8_lossy(&body);
    assert!(page.contains("House Price Predictor"));
    assert!(page.contains("action='/predict'"));
}

#[actix_web::test]
async fn test_integration_form_submission() {
    let app = init_app!();
    let req = test::TestRequest::post()
        .uri("/predict")
        .set_form(lahore_house_request())
        .to_request();

    let resp = test::call_service(&app, req).await;
    assert!(resp.status().is_success());

    let body = test::read_body(resp).await;
    let page = String::from_utf8_lossy(&body);
    assert!(page.contains("Predicted Price: PKR 29,800,000"));
    assert!(page.contains("<option value='Lahore' selected>"));
}

#[actix_web::test]
async fn test_integration_form_bad_choice() {
    let app = init_app!();
    let req = test::TestRequest::post()
        .uri("/predict")
        .insert_header(("content-type", "application/x-www-form-urlencoded"))
        .set_payload("city=Lahore&province=Punjab&propertyType=Castle&purpose=For+Sale")
        .to_request();

    let resp = test::call_service(&app, req).await;
    assert_eq!(resp.status(), StatusCode::BAD_REQUEST);
}

#[actix_web::test]
async fn test_integration_form_nan_location_rejected() {
    let app = init_app!();
    let req = test::TestRequest::post()
        .uri("/predict")
        .insert_header(("content-type", "application/x-www-form-urlencoded"))
        .set_payload(
            "city=Lahore&province=Punjab&propertyType=House&purpose=For+Sale\
             &locationId=NaN&latitude=31.5&longitude=74.3&baths=2&bedrooms=3&areaSize=10",
        )
        .to_request();

    let resp = test::call_service(&app, req).await;
    assert_eq!(resp.status(), StatusCode::BAD_REQUEST);

    let body: serde_json::Value = test::read_body_json(resp).await;
    assert_eq!(body["statusCode"], 400);
    assert!(body["message"].as_str().unwrap().contains("locationId"));
}

#[actix_web::test]
async fn test_integration_form_nan_prediction_is_server_error() {
    let app = test::init_service(
        App::new()
            .app_data(web::Data::new(linear_state(&["Area Size"], 0.0, vec![1.0])))
            .configure(routes::configure_routes),
    )
    .await;
    let req = test::TestRequest::post()
        .uri("/predict")
        .insert_header(("content-type", "application/x-www-form-urlencoded"))
        .set_payload(
            "city=Lahore&province=Punjab&propertyType=House&purpose=For+Sale\
             &locationId=1&latitude=31.5&longitude=74.3&baths=2&bedrooms=3&areaSize=NaN",
        )
        .to_request();

    let resp = test::call_service(&app, req).await;
    assert_eq!(resp.status(), StatusCode::INTERNAL_SERVER_ERROR);

    let body: serde_json::Value = test::read_body_json(resp).await;
    assert_eq!(body["error"], "Prediction failed");
    assert_eq!(body["statusCode"], 500);
    assert!(!body["message"].as_str().unwrap().contains("PKR"));
}

#[actix_web::test]
async fn test_integration_model_width_mismatch() {
    let app = test::init_service(
        App::new()
            .app_data(web::Data::new(linear_state(&["baths"], 0.0, vec![1.0, 2.0])))
            .configure(routes::configure_routes),
    )
    .await;

    let json_req = test::TestRequest::post()
        .uri("/api/v1/predict")
        .set_json(lahore_house_request())
        .to_request();
    let form_req = test::TestRequest::post()
        .uri("/predict")
        .set_form(lahore_house_request())
        .to_request();

    for req in [json_req, form_req] {
        let resp = test::call_service(&app, req).await;
        assert_eq!(resp.status(), StatusCode::INTERNAL_SERVER_ERROR);

        let body: serde_json::Value = test::read_body_json(resp).await;
        assert_eq!(body["error"], "Prediction failed");
        assert_eq!(body["statusCode"], 500);
        assert!(body["message"].as_str().unwrap().contains("schema mismatch"));
    }
}
