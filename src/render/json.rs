//! JSON export of analysis results.

use crate::error::{Error, Result};
use crate::model::AnalysisResult;

/// JSON output format.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum JsonFormat {
    /// Pretty-printed JSON with indentation
    #[default]
    Pretty,
    /// Compact JSON without extra whitespace
    Compact,
}

/// Convert an analysis result to JSON in the service's camelCase shape.
pub fn to_json(result: &AnalysisResult, format: JsonFormat) -> Result<String> {
    let json = match format {
        JsonFormat::Pretty => serde_json::to_string_pretty(result),
        JsonFormat::Compact => serde_json::to_string(result),
    };

    json.map_err(|e| Error::Render(format!("JSON serialization error: {}", e)))
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::model::{Page, Style};

    #[test]
    fn test_to_json_pretty() {
        let mut result = AnalysisResult::new();
        result.model_id = Some("prebuilt-read".to_string());
        result.add_page(Page::letter(1));

        let json = to_json(&result, JsonFormat::Pretty).unwrap();
        assert!(json.contains("\"modelId\""));
        assert!(json.contains("\"pageNumber\": 1"));
        assert!(json.contains('\n'));
    }

    #[test]
    fn test_to_json_compact() {
        let mut result = AnalysisResult::new();
        result.add_style(Style::handwritten());

        let json = to_json(&result, JsonFormat::Compact).unwrap();
        assert!(!json.contains('\n'));
        assert!(json.contains("\"isHandwritten\":true"));
        assert!(!json.contains("apiVersion"));
    }
}
