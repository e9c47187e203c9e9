use actix_web::{web, HttpResponse, Responder};
use crate::core::formatter::escape_html;
use crate::models::{Categorical, ErrorResponse, InputRecord, PredictRequest};
use crate::routes::AppState;

const STYLE: &str = r#"
body {
    background: linear-gradient(135deg, #0f2027, #203a43, #2c5364);
    color: white;
    font-family: sans-serif;
}
h1 {
    font-size: 2.5em;
    color: #00e676;
    text-align: center;
    animation: glow 2s infinite;
}
@keyframes glow {
    0% { text-shadow: 0 0 5px #00e676; }
    50% { text-shadow: 0 0 20px #00e676; }
    100% { text-shadow: 0 0 5px #00e676; }
}
.row { display: flex; gap: 2em; justify-content: center; }
.column { display: flex; flex-direction: column; gap: 0.8em; min-width: 320px; }
label { display: flex; flex-direction: column; gap: 0.3em; }
select, input {
    background-color: #1c1c1c;
    color: white;
    border: 1px solid #444;
    padding: 0.4em;
}
button {
    display: block;
    margin: 1.5em auto;
    padding: 0.8em 2em;
    background-color: #00e676;
    color: black;
    font-weight: bold;
    border: none;
    cursor: pointer;
}
#result { text-align: center; }
"#;

/// Slider widget bounds: (name, label, min, max, step)
const SLIDERS: [(&str, &str, f64, f64, f64); 5] = [
    ("latitude", "Latitude", 30.0, 35.0, 0.0001),
    ("longitude", "Longitude", 60.0, 75.0, 0.0001),
    ("baths", "Baths", 1.0, 10.0, 1.0),
    ("bedrooms", "Bedrooms", 1.0, 10.0, 1.0),
    ("areaSize", "Area Size (Marla/Kanal)", 1.0, 40.0, 0.1),
];

/// Configure the interactive form pages
pub fn configure(cfg: &mut web::ServiceConfig) {
    cfg
        .route("/", web::get().to(index))
        .route("/predict", web::post().to(submit));
}

/// Empty form
async fn index() -> impl Responder {
    HttpResponse::Ok()
        .content_type("text/html; charset=utf-8")
        .body(render_page(None, None))
}

/// Form submission: one prediction cycle, then the page re-rendered with the result
async fn submit(
    state: web::Data<AppState>,
    form: web::Form<PredictRequest>,
) -> impl Responder {
    let req = form.into_inner();
    let record = match InputRecord::try_from(req.clone()) {
        Ok(record) => record,
        Err(e) => {
            tracing::info!("Rejected form submission: {}", e);
            return HttpResponse::BadRequest().json(ErrorResponse {
                error: "Invalid input".to_string(),
                message: e.to_string(),
                status_code: 400,
            });
        }
    };
    tracing::debug!("Prediction requested: {:?}", record);

    match state.predictor.predict(&record) {
        Ok(result) => {
            tracing::info!(
                "Form prediction {} ({} warnings)",
                state.formatter.display_price(result.value),
                result.warnings.len()
            );
            let html = state.formatter.format(&result);
            HttpResponse::Ok()
                .content_type("text/html; charset=utf-8")
                .body(render_page(Some(&req), Some(&html)))
        }
        Err(e) => {
            tracing::error!("Form prediction failed: {}", e);
            HttpResponse::InternalServerError().json(ErrorResponse {
                error: "Prediction failed".to_string(),
                message: e.to_string(),
                status_code: 500,
            })
        }
    }
}

/// Full form page, with previous inputs kept selected
pub fn render_page(previous: Option<&PredictRequest>, result_html: Option<&str>) -> String {
    let mut left = String::new();
    left.push_str(&select("city", "City", previous.map(|p| p.city)));
    left.push_str(&select("province", "Province", previous.map(|p| p.province)));
    left.push_str(&select("propertyType", "Property Type", previous.map(|p| p.property_type)));
    left.push_str(&select("purpose", "Purpose", previous.map(|p| p.purpose)));
    left.push_str(&format!(
        "<label>Location ID<input type='number' name='locationId' value='{}' required></label>",
        previous.map(|p| p.location_id).unwrap_or(0.0)
    ));

    let mut right = String::new();
    for (name, label, min, max, step) in SLIDERS {
        let value = previous.map(|p| slider_value(p, name)).unwrap_or(min);
        right.push_str(&format!(
            "<label>{label} <output>{value}</output>\
             <input type='range' name='{name}' min='{min}' max='{max}' step='{step}' value='{value}' \
             oninput='this.previousElementSibling.value = this.value'></label>"
        ));
    }

    format!(
        "<!DOCTYPE html>\
         <html><head><meta charset='utf-8'><title>House Price Predictor</title><style>{STYLE}</style></head>\
         <body><h1>🏠 House Price Predictor</h1>\
         <form method='post' action='/predict'>\
         <div class='row'><div class='column'>{left}</div><div class='column'>{right}</div></div>\
         <button type='submit'>💡 Predict Price</button>\
         </form>\
         <div id='result'>{result}</div>\
         </body></html>",
        result = result_html.unwrap_or("")
    )
}

fn select<T: Categorical + PartialEq>(name: &str, label: &str, selected: Option<T>) -> String {
    let options: String = T::variants()
        .iter()
        .map(|variant| {
            let marker = if selected == Some(*variant) { " selected" } else { "" };
            let value = escape_html(variant.label());
            format!("<option value='{value}'{marker}>{value}</option>")
        })
        .collect();

    format!("<label>{label}<select name='{name}' required>{options}</select></label>")
}

fn slider_value(req: &PredictRequest, name: &str) -> f64 {
    match name {
        "latitude" => req.latitude,
        "longitude" => req.longitude,
        "baths" => req.baths,
        "bedrooms" => req.bedrooms,
        _ => req.area_size,
    }
}
