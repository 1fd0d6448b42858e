//! JSON renderer: the dashboard model as canonical JSON (sorted keys, compact).

use pf_io::canonical_json::to_canonical_bytes;

use crate::{DashboardModel, ReportError};

pub fn render_json(model: &DashboardModel) -> Result<String, ReportError> {
    let value = serde_json::to_value(model).map_err(|e| ReportError::Serialize(e.to_string()))?;
    let bytes = to_canonical_bytes(&value).map_err(|e| ReportError::Serialize(e.to_string()))?;
    String::from_utf8(bytes).map_err(|e| ReportError::Serialize(e.to_string()))
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::build_model;
    use assert_json_diff::assert_json_include;
    use serde_json::{json, Value};

    #[test]
    fn no_data_renders_fixed_state() {
        let s = render_json(&build_model(None)).unwrap();
        let v: Value = serde_json::from_str(&s).unwrap();
        assert_json_include!(
            actual: v,
            expected: json!({
                "headline": "No data",
                "has_data": false,
                "actors": {"rows": [], "placeholder": "No data"},
                "gauge": {"risk": 0.0, "remaining": 100.0}
            })
        );
    }

    #[test]
    fn output_is_canonical() {
        let s = render_json(&build_model(None)).unwrap();
        assert!(s.starts_with(r#"{"actors":"#));
        assert!(!s.contains('\n'));
    }
}
