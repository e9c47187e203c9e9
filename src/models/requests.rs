use serde::{Deserialize, Serialize};
use crate::error::{checked_trunc, PredictError};
use crate::models::domain::{City, InputRecord, PropertyType, Province, Purpose};

/// Prediction request, shared by the JSON API and the HTML form
///
/// Numeric widgets submit decimals (sliders, free number box), so integer
/// fields arrive as floats and are truncated when the record is built.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct PredictRequest {
    pub city: City,
    #[serde(alias = "province_name")]
    pub province: Province,
    #[serde(alias = "property_type", rename = "propertyType")]
    pub property_type: PropertyType,
    pub purpose: Purpose,
    #[serde(alias = "location_id", rename = "locationId")]
    pub location_id: f64,
    pub latitude: f64,
    pub longitude: f64,
    pub baths: f64,
    pub bedrooms: f64,
    #[serde(alias = "area_size", rename = "areaSize")]
    pub area_size: f64,
}

fn whole_number(field: &str, value: f64) -> Result<i64, PredictError> {
    checked_trunc(value).ok_or_else(|| {
        PredictError::InvalidInput(format!("{} must be a finite whole number, got {}", field, value))
    })
}

impl TryFrom<PredictRequest> for InputRecord {
    type Error = PredictError;

    fn try_from(req: PredictRequest) -> Result<Self, Self::Error> {
        Ok(InputRecord {
            city: req.city,
            province: req.province,
            property_type: req.property_type,
            purpose: req.purpose,
            location_id: whole_number("locationId", req.location_id)?,
            latitude: req.latitude,
            longitude: req.longitude,
            baths: whole_number("baths", req.baths)?,
            bedrooms: whole_number("bedrooms", req.bedrooms)?,
            area_size: req.area_size,
        })
    }
}
