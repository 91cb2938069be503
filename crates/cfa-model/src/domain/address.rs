use serde::{Deserialize, Serialize};

/// Service location supplied by the guest.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct GuestAddress {
    #[serde(default, alias = "streetAddress", skip_serializing_if = "Option::is_none")]
    pub street_address: Option<String>,
    #[serde(default, alias = "unitApt", skip_serializing_if = "Option::is_none")]
    pub unit_apt: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub city: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub country: Option<String>,
    #[serde(default, alias = "zipCode", skip_serializing_if = "Option::is_none")]
    pub zip_code: Option<String>,
}

impl GuestAddress {
    /// Street, unit, city and zip joined with `", "`, skipping empty parts.
    ///
    /// Country is left out; this is the line handed to map lookups.
    pub fn one_line(&self) -> String {
        [&self.street_address, &self.unit_apt, &self.city, &self.zip_code]
            .into_iter()
            .filter_map(|part| part.as_deref())
            .filter(|part| !part.is_empty())
            .collect::<Vec<_>>()
            .join(", ")
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn one_line_skips_missing_and_empty_parts() {
        let addr = GuestAddress {
            street_address: Some("12 Harbor Rd".to_string()),
            unit_apt: Some(String::new()),
            city: Some("Miami".to_string()),
            country: Some("US".to_string()),
            zip_code: None,
        };
        assert_eq!(addr.one_line(), "12 Harbor Rd, Miami");
    }

    #[test]
    fn accepts_snake_and_camel_keys() {
        let snake: GuestAddress =
            serde_json::from_str(r#"{"street_address":"1 Main","zip_code":"33101"}"#).unwrap();
        let camel: GuestAddress =
            serde_json::from_str(r#"{"streetAddress":"1 Main","zipCode":"33101"}"#).unwrap();
        assert_eq!(snake, camel);
        assert_eq!(snake.one_line(), "1 Main, 33101");
    }
}
