use std::collections::HashMap;
use crate::error::PredictError;
use crate::models::{Categorical, FeatureSchema, FeatureVector, InputRecord};

pub const LOCATION_ID: &str = "location_id";
pub const LATITUDE: &str = "latitude";
pub const LONGITUDE: &str = "longitude";
pub const BATHS: &str = "baths";
pub const BEDROOMS: &str = "bedrooms";
pub const AREA_SIZE: &str = "Area Size";

/// Continuous columns in the order the training pipeline emits them
pub const CONTINUOUS_COLUMNS: [&str; 6] = [LOCATION_ID, LATITUDE, LONGITUDE, BATHS, BEDROOMS, AREA_SIZE];

/// Expand a record into its sparse named-column form
///
/// Each categorical field contributes exactly one indicator column set to 1;
/// indicators for the other variants are left out and later zero-filled
/// against the schema.
pub fn expand(record: &InputRecord) -> Vec<(String, f64)> {
    vec![
        (record.city.column(), 1.0),
        (record.province.column(), 1.0),
        (record.property_type.column(), 1.0),
        (record.purpose.column(), 1.0),
        (LOCATION_ID.to_string(), record.location_id as f64),
        (LATITUDE.to_string(), record.latitude),
        (LONGITUDE.to_string(), record.longitude),
        (BATHS.to_string(), record.baths as f64),
        (BEDROOMS.to_string(), record.bedrooms as f64),
        (AREA_SIZE.to_string(), record.area_size),
    ]
}

/// Build the model input vector for a record
///
/// Projects the expanded record onto the schema: columns missing from the
/// expansion become 0, columns the schema does not know are dropped, and the
/// output follows schema order exactly.
///
/// # Errors
/// `SchemaMismatch` if the schema has no columns.
pub fn encode(record: &InputRecord, schema: &FeatureSchema) -> Result<FeatureVector, PredictError> {
    if schema.is_empty() {
        return Err(PredictError::SchemaMismatch("feature schema is empty".to_string()));
    }

    let expanded: HashMap<String, f64> = expand(record).into_iter().collect();

    let dropped: Vec<&str> = expanded
        .keys()
        .map(String::as_str)
        .filter(|column| !schema.contains(column))
        .collect();
    if !dropped.is_empty() {
        tracing::debug!("Dropping columns not in schema: {:?}", dropped);
    }

    let values = schema
        .iter()
        .map(|column| expanded.get(column).copied().unwrap_or(0.0))
        .collect();

    Ok(FeatureVector::new(schema.columns().to_vec(), values))
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::models::{City, PropertyType, Province, Purpose};

    fn lahore_house() -> InputRecord {
        InputRecord {
            city: City::Lahore,
            province: Province::Punjab,
            property_type: PropertyType::House,
            purpose: Purpose::ForSale,
            location_id: 1482,
            latitude: 31.52,
            longitude: 74.35,
            baths: 3,
            bedrooms: 4,
            area_size: 10.0,
        }
    }

    fn schema(columns: &[&str]) -> FeatureSchema {
        FeatureSchema::new(columns.iter().map(|c| c.to_string()).collect())
    }

    #[test]
    fn test_encode_follows_schema_order() {
        let schema = schema(&["Area Size", "city_Lahore", "baths", "purpose_For Rent", "latitude"]);
        let vector = encode(&lahore_house(), &schema).unwrap();

        assert_eq!(vector.columns(), schema.columns());
        assert_eq!(vector.values(), &[10.0, 1.0, 3.0, 0.0, 31.52]);
    }

    #[test]
    fn test_missing_columns_zero_filled() {
        let schema = schema(&["city_Islamabad", "city_Karachi", "city_Lahore"]);
        let vector = encode(&lahore_house(), &schema).unwrap();

        assert_eq!(vector.values(), &[0.0, 0.0, 1.0]);
    }

    #[test]
    fn test_extra_columns_dropped() {
        let schema = schema(&["bedrooms"]);
        let vector = encode(&lahore_house(), &schema).unwrap();

        assert_eq!(vector.len(), 1);
        assert_eq!(vector.get("bedrooms"), Some(4.0));
        assert_eq!(vector.get("city_Lahore"), None);
    }

    #[test]
    fn test_empty_schema_rejected() {
        let err = encode(&lahore_house(), &FeatureSchema::new(vec![])).unwrap_err();
        assert!(matches!(err, PredictError::SchemaMismatch(_)));
    }

    #[test]
    fn test_expand_contains_every_field() {
        let expanded = expand(&lahore_house());
        assert_eq!(expanded.len(), 4 + CONTINUOUS_COLUMNS.len());
        assert!(expanded.iter().any(|(c, v)| c == "province_name_Punjab" && *v == 1.0));
        assert!(expanded.iter().any(|(c, v)| c == "location_id" && *v == 1482.0));
    }
}
