use crate::error::checked_trunc;
use crate::models::PredictionResult;

pub const DEFAULT_CURRENCY: &str = "PKR";

const HEADER: &str = "<div style='font-size: 50px; text-align: center;'>🎉</div>";

/// Renders prediction results as an HTML fragment for the result panel
#[derive(Debug, Clone)]
pub struct Formatter {
    currency: String,
}

impl Formatter {
    pub fn new(currency: impl Into<String>) -> Self {
        Self {
            currency: currency.into(),
        }
    }

    pub fn currency(&self) -> &str {
        &self.currency
    }

    /// Price truncated to whole units with the currency label, e.g. `PKR 12,345,678`
    ///
    /// Values with no whole-unit equivalent (NaN, infinite, beyond `i64`) render
    /// as `n/a`; the predictor rejects them before they reach a response.
    pub fn display_price(&self, value: f64) -> String {
        match checked_trunc(value) {
            Some(units) => format!("{} {}", self.currency, group_thousands(units)),
            None => format!("{} n/a", self.currency),
        }
    }

    pub fn format(&self, result: &PredictionResult) -> String {
        let mut html = String::from(HEADER);
        html.push_str(&format!(
            "<h3 style='color:#00e676;'>🏠 Predicted Price: {}</h3>",
            escape_html(&self.display_price(result.value))
        ));

        if !result.warnings.is_empty() {
            html.push_str("<ul>");
            for warning in &result.warnings {
                html.push_str(&format!(
                    "<li><span style='color:red;'>⚠️ {}</span></li>",
                    escape_html(warning)
                ));
            }
            html.push_str("</ul>");
        }

        html
    }
}

impl Default for Formatter {
    fn default() -> Self {
        Self::new(DEFAULT_CURRENCY)
    }
}

/// Insert a comma every three digits
pub fn group_thousands(value: i64) -> String {
    let digits = value.unsigned_abs().to_string();
    let mut grouped = String::with_capacity(digits.len() + digits.len() / 3 + 1);

    if value < 0 {
        grouped.push('-');
    }
    for (i, ch) in digits.chars().enumerate() {
        if i > 0 && (digits.len() - i) % 3 == 0 {
            grouped.push(',');
        }
        grouped.push(ch);
    }

    grouped
}

pub fn escape_html(text: &str) -> String {
    let mut escaped = String::with_capacity(text.len());
    for ch in text.chars() {
        match ch {
            '&' => escaped.push_str("&amp;"),
            '<' => escaped.push_str("&lt;"),
            '>' => escaped.push_str("&gt;"),
            '"' => escaped.push_str("&quot;"),
            '\'' => escaped.push_str("&#39;"),
            _ => escaped.push(ch),
        }
    }
    escaped
}
