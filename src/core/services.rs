use crate::domain::model::ServiceCatalog;
use crate::utils::error::{PortalError, Result};
use serde_json::Value;

pub const DEFAULT_SERVICES_FIELD: &str = "services";

/// Pulls the named array of strings out of a JSON response body.
pub fn extract_services(body: &Value, field: &str) -> Result<ServiceCatalog> {
    let value = body.get(field).ok_or_else(|| PortalError::MissingField {
        field: field.to_string(),
    })?;

    let items = value.as_array().ok_or_else(|| PortalError::InvalidFieldType {
        field: field.to_string(),
        index: None,
        expected: "array of strings",
    })?;

    let services = items
        .iter()
        .enumerate()
        .map(|(i, item)| {
            item.as_str()
                .map(str::to_string)
                .ok_or_else(|| PortalError::InvalidFieldType {
                    field: field.to_string(),
                    index: Some(i),
                    expected: "string",
                })
        })
        .collect::<Result<Vec<_>>>()?;

    Ok(ServiceCatalog::new(services))
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    #[test]
    fn test_extract_preserves_order() {
        let body = json!({"services": ["b", "a", "c"]});
        let catalog = extract_services(&body, DEFAULT_SERVICES_FIELD).unwrap();
        assert_eq!(catalog.services, vec!["b", "a", "c"]);
    }

    #[test]
    fn test_extract_empty_array() {
        let body = json!({"services": []});
        let catalog = extract_services(&body, DEFAULT_SERVICES_FIELD).unwrap();
        assert!(catalog.is_empty());
    }

    #[test]
    fn test_missing_field() {
        let body = json!({"items": ["a"]});
        let err = extract_services(&body, DEFAULT_SERVICES_FIELD).unwrap_err();
        assert!(matches!(err, PortalError::MissingField { field } if field == "services"));
    }

    #[test]
    fn test_non_array_and_non_string_element() {
        let err = extract_services(&json!({"services": "a"}), "services").unwrap_err();
        assert!(matches!(err, PortalError::InvalidFieldType { index: None, .. }));

        let err = extract_services(&json!({"services": ["a", 7]}), "services").unwrap_err();
        assert!(matches!(err, PortalError::InvalidFieldType { index: Some(1), .. }));
    }

    #[test]
    fn test_custom_field_name() {
        let body = json!({"offerings": ["x"]});
        let catalog = extract_services(&body, "offerings").unwrap();
        assert_eq!(catalog.len(), 1);
    }
}
