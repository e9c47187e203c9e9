use serde::{Deserialize, Serialize};
use std::collections::HashSet;

/// A closed categorical field that expands into one-hot indicator columns
///
/// Column names follow the `<field>_<label>` convention used by the training
/// pipeline, e.g. `city_Lahore` or `property_type_Upper Portion`.
pub trait Categorical: Copy + 'static {
    /// Column prefix for this field
    const FIELD: &'static str;

    /// Every variant, in display order
    fn variants() -> &'static [Self];

    /// Human-readable label, also used as the wire value
    fn label(&self) -> &'static str;

    /// Indicator column this value switches on
    fn column(&self) -> String {
        format!("{}_{}", Self::FIELD, self.label())
    }

    /// All indicator columns this field can produce
    fn columns() -> Vec<String> {
        Self::variants().iter().map(|v| v.column()).collect()
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum City {
    Islamabad,
    Lahore,
    Karachi,
}

impl Categorical for City {
    const FIELD: &'static str = "city";

    fn variants() -> &'static [Self] {
        &[City::Islamabad, City::Lahore, City::Karachi]
    }

    fn label(&self) -> &'static str {
        match self {
            City::Islamabad => "Islamabad",
            City::Lahore => "Lahore",
            City::Karachi => "Karachi",
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum Province {
    #[serde(rename = "Islamabad Capital")]
    IslamabadCapital,
    Punjab,
    Sindh,
}

impl Categorical for Province {
    const FIELD: &'static str = "province_name";

    fn variants() -> &'static [Self] {
        &[Province::IslamabadCapital, Province::Punjab, Province::Sindh]
    }

    fn label(&self) -> &'static str {
        match self {
            Province::IslamabadCapital => "Islamabad Capital",
            Province::Punjab => "Punjab",
            Province::Sindh => "Sindh",
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum PropertyType {
    House,
    Flat,
    #[serde(rename = "Upper Portion")]
    UpperPortion,
}

impl Categorical for PropertyType {
    const FIELD: &'static str = "property_type";

    fn variants() -> &'static [Self] {
        &[PropertyType::House, PropertyType::Flat, PropertyType::UpperPortion]
    }

    fn label(&self) -> &'static str {
        match self {
            PropertyType::House => "House",
            PropertyType::Flat => "Flat",
            PropertyType::UpperPortion => "Upper Portion",
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum Purpose {
    #[serde(rename = "For Sale")]
    ForSale,
    #[serde(rename = "For Rent")]
    ForRent,
}

impl Categorical for Purpose {
    const FIELD: &'static str = "purpose";

    fn variants() -> &'static [Self] {
        &[Purpose::ForSale, Purpose::ForRent]
    }

    fn label(&self) -> &'static str {
        match self {
            Purpose::ForSale => "For Sale",
            Purpose::ForRent => "For Rent",
        }
    }
}

/// Property attributes collected from one form submission
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct InputRecord {
    pub city: City,
    pub province: Province,
    #[serde(rename = "propertyType")]
    pub property_type: PropertyType,
    pub purpose: Purpose,
    #[serde(rename = "locationId")]
    pub location_id: i64,
    pub latitude: f64,
    pub longitude: f64,
    pub baths: i64,
    pub bedrooms: i64,
    #[serde(rename = "areaSize")]
    pub area_size: f64,
}

/// Ordered column names the trained model expects
///
/// Fixed at training time and loaded once at startup.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(from = "Vec<String>", into = "Vec<String>")]
pub struct FeatureSchema {
    columns: Vec<String>,
    index: HashSet<String>,
}

impl FeatureSchema {
    pub fn new(columns: Vec<String>) -> Self {
        let index = columns.iter().cloned().collect();
        Self { columns, index }
    }

    pub fn columns(&self) -> &[String] {
        &self.columns
    }

    pub fn len(&self) -> usize {
        self.columns.len()
    }

    pub fn is_empty(&self) -> bool {
        self.columns.is_empty()
    }

    pub fn contains(&self, column: &str) -> bool {
        self.index.contains(column)
    }

    pub fn iter(&self) -> impl Iterator<Item = &str> {
        self.columns.iter().map(String::as_str)
    }
}

impl From<Vec<String>> for FeatureSchema {
    fn from(columns: Vec<String>) -> Self {
        Self::new(columns)
    }
}

impl From<FeatureSchema> for Vec<String> {
    fn from(schema: FeatureSchema) -> Self {
        schema.columns
    }
}

/// Numeric model input aligned column-for-column with a [`FeatureSchema`]
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct FeatureVector {
    columns: Vec<String>,
    values: Vec<f64>,
}

impl FeatureVector {
    /// Pair up columns with values; both must have the same length
    pub(crate) fn new(columns: Vec<String>, values: Vec<f64>) -> Self {
        debug_assert_eq!(columns.len(), values.len());
        Self { columns, values }
    }

    pub fn len(&self) -> usize {
        self.values.len()
    }

    pub fn is_empty(&self) -> bool {
        self.values.is_empty()
    }

    pub fn columns(&self) -> &[String] {
        &self.columns
    }

    /// Values in schema order, as consumed by positional models
    pub fn values(&self) -> &[f64] {
        &self.values
    }

    pub fn get(&self, column: &str) -> Option<f64> {
        self.columns
            .iter()
            .position(|c| c == column)
            .map(|i| self.values[i])
    }

    pub fn iter(&self) -> impl Iterator<Item = (&str, f64)> {
        self.columns
            .iter()
            .map(String::as_str)
            .zip(self.values.iter().copied())
    }
}

/// Model estimate plus the soft range warnings raised for the input
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct PredictionResult {
    pub value: f64,
    pub warnings: Vec<String>,
}
