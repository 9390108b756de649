//! API models for the Iconify REST API
//!
//! Only the fields the CLI reads are modelled; unknown fields are ignored.

use indexmap::IndexMap;
use serde::{Deserialize, Serialize};

/// Author of an icon collection
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Author {
    pub name: String,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub url: Option<String>,
}

/// License of an icon collection
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct License {
    pub title: String,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub spdx: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub url: Option<String>,
}

/// Metadata of an icon collection, as returned by `/collections`
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct CollectionInfo {
    /// Human readable collection name
    pub name: String,
    /// Number of icons in the collection
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub total: Option<u32>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub version: Option<String>,
    pub author: Author,
    pub license: License,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub category: Option<String>,
    /// Whether icons carry their own colors
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub palette: Option<bool>,
}

/// Response of `/collections`: prefix to collection info, in API order
pub type CollectionsResponse = IndexMap<String, CollectionInfo>;

/// Response of `/search`
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct SearchResult {
    /// Matching icons as `prefix:name`
    pub icons: Vec<String>,
    pub total: u32,
    pub limit: u32,
    pub start: u32,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_collections_response_keeps_order() {
        let json = r#"{
            "mdi": {
                "name": "Material Design Icons",
                "total": 7447,
                "version": "7.4.47",
                "author": { "name": "Pictogrammers", "url": "https://github.com/Templarian/MaterialDesign" },
                "license": { "title": "Apache 2.0", "spdx": "Apache-2.0" },
                "samples": ["account-check", "bell-alert-outline"],
                "palette": false
            },
            "bi": {
                "name": "Bootstrap Icons",
                "author": { "name": "The Bootstrap Authors" },
                "license": { "title": "MIT" }
            }
        }"#;

        let response: CollectionsResponse = serde_json::from_str(json).unwrap();
        let prefixes: Vec<&String> = response.keys().collect();
        assert_eq!(prefixes, ["mdi", "bi"]);

        let mdi = &response["mdi"];
        assert_eq!(mdi.total, Some(7447));
        assert_eq!(mdi.license.spdx.as_deref(), Some("Apache-2.0"));
        assert_eq!(mdi.palette, Some(false));

        let bi = &response["bi"];
        assert_eq!(bi.version, None);
        assert_eq!(bi.author.url, None);
        assert_eq!(bi.license.spdx, None);
    }

    #[test]
    fn test_search_result_deserialization() {
        let json = r#"{"icons":["mdi:home","mdi:home-outline"],"total":2,"limit":64,"start":0,"collections":{}}"#;
        let result: SearchResult = serde_json::from_str(json).unwrap();

        assert_eq!(result.icons, ["mdi:home", "mdi:home-outline"]);
        assert_eq!(result.total, 2);
        assert_eq!(result.limit, 64);
    }
}
