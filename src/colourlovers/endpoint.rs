// SPDX-License-Identifier: MIT

//! COLOURlovers endpoint declarations
//!
//! One entry per upstream resource. Query parameters are emitted in the
//! order they are declared here.

use super::params::{ParamSpec, ParamType, Placement};
use once_cell::sync::Lazy;
use serde_json::{json, Map, Value};

pub const DEFAULT_BASE_URL: &str = "http://www.colourlovers.com/api/";

const FORMATS: &[&str] = &["json", "xml"];
const SORT_ORDERS: &[&str] = &["ASC", "DESC"];
const HEX_LOGIC: &[&str] = &["AND", "OR"];

/// A single upstream resource and the parameters it accepts
#[derive(Debug, Clone)]
pub struct Endpoint {
    /// Tool name exposed to the invoking layer
    pub name: &'static str,
    pub description: &'static str,
    /// Path relative to the base URL, `{param}` marks a path parameter
    pub path: &'static str,
    /// Used in error messages: "An error occurred while {action}: ..."
    pub action: &'static str,
    pub params: Vec<ParamSpec>,
}

impl Endpoint {
    pub fn param(&self, name: &str) -> Option<&ParamSpec> {
        self.params.iter().find(|p| p.name == name)
    }

    pub fn query_params(&self) -> impl Iterator<Item = &ParamSpec> {
        self.params
            .iter()
            .filter(|p| p.placement == Placement::Query)
    }

    /// JSON schema describing the accepted arguments
    pub fn schema(&self) -> Value {
        let properties: Map<String, Value> = self
            .params
            .iter()
            .map(|p| (p.name.to_string(), p.schema()))
            .collect();
        let required: Vec<&str> = self
            .params
            .iter()
            .filter(|p| p.required)
            .map(|p| p.name)
            .collect();

        json!({
            "type": "object",
            "properties": properties,
            "required": required
        })
    }
}

fn format_param() -> ParamSpec {
    ParamSpec::query(
        "format",
        ParamType::Enum(FORMATS),
        "The format of the response (json or xml).",
    )
    .with_default(json!("json"))
}

fn palette_widths_param() -> ParamSpec {
    ParamSpec::query(
        "showPaletteWidths",
        ParamType::Boolean,
        "Whether to include the relative widths of the palette's colors.",
    )
}

pub static ENDPOINTS: Lazy<Vec<Endpoint>> = Lazy::new(|| {
    vec![
        Endpoint {
            name: "get_color_info",
            description: "Fetch color information from COLOURlovers API.",
            path: "color/{hex}",
            action: "fetching color information",
            params: vec![
                ParamSpec::path(
                    "hex",
                    ParamType::String,
                    "The 6-character hex value of the color.",
                ),
                ParamSpec::query(
                    "comments",
                    ParamType::Boolean,
                    "Whether to include the last 10 comments for the color.",
                )
                .with_default(json!(true)),
                format_param(),
            ],
        },
        Endpoint {
            name: "get_colors",
            description: "Retrieve colors from the COLOURlovers API.",
            path: "colors",
            action: "retrieving colors",
            params: vec![
                ParamSpec::query("lover", ParamType::String, "The COLOURlover username.")
                    .required(),
                ParamSpec::query(
                    "hueRange",
                    ParamType::String,
                    "The hue range for filtering colors, e.g. 12,65.",
                ),
                ParamSpec::query(
                    "briRange",
                    ParamType::String,
                    "The brightness range for filtering colors, e.g. 12,65.",
                ),
                ParamSpec::query("keywords", ParamType::String, "Keywords for searching colors."),
                ParamSpec::query(
                    "keywordsExact",
                    ParamType::Integer,
                    "Whether to match keywords exactly (0 or 1).",
                )
                .with_default(json!(0)),
                ParamSpec::query(
                    "orderCol",
                    ParamType::String,
                    "The column to order results by.",
                )
                .with_default(json!("name")),
                ParamSpec::query("SortBy", ParamType::Enum(SORT_ORDERS), "The sort order.")
                    .with_default(json!("ASC")),
                ParamSpec::query(
                    "numResults",
                    ParamType::Integer,
                    "The number of results to return (max 100).",
                )
                .with_default(json!(20)),
                ParamSpec::query(
                    "ResultOffset",
                    ParamType::Integer,
                    "The offset for paging results.",
                )
                .with_default(json!(0)),
                format_param(),
            ],
        },
        Endpoint {
            name: "get_top_colors",
            description: "Retrieve the top colors from COLOURlovers API.",
            path: "colors/top",
            action: "retrieving top colors",
            params: vec![
                ParamSpec::query("lover", ParamType::String, "The user who loves the colors."),
                format_param(),
                ParamSpec::query(
                    "numResults",
                    ParamType::Integer,
                    "The maximum number of results to return (max 100).",
                )
                .with_default(json!(20)),
                ParamSpec::query(
                    "ResultOffset",
                    ParamType::Integer,
                    "The result offset for paging.",
                )
                .with_default(json!(0)),
            ],
        },
        Endpoint {
            name: "get_palette",
            description: "Retrieve a palette from the COLOURlovers API.",
            path: "palette/{paletteId}",
            action: "retrieving the palette",
            params: vec![
                ParamSpec::path(
                    "paletteId",
                    ParamType::Integer,
                    "The ID of the palette to retrieve.",
                ),
                format_param(),
                palette_widths_param(),
            ],
        },
        Endpoint {
            name: "fetch_random_palette",
            description: "Fetch a random color palette from COLOURlovers API.",
            path: "palettes/random",
            action: "fetching the random palette",
            params: vec![format_param(), palette_widths_param()],
        },
        Endpoint {
            name: "get_top_palettes",
            description: "Retrieve the top palettes from COLOURlovers.",
            path: "palettes/top",
            action: "retrieving top palettes",
            params: vec![
                ParamSpec::query("lover", ParamType::String, "The username of the COLOURlover."),
                format_param(),
                ParamSpec::query(
                    "numResults",
                    ParamType::Integer,
                    "The maximum number of results to return (max 100).",
                )
                .with_default(json!(20)),
                ParamSpec::query(
                    "resultOffset",
                    ParamType::Integer,
                    "The offset for paging results.",
                )
                .with_default(json!(0)),
                palette_widths_param(),
            ],
        },
        Endpoint {
            name: "fetch_palettes",
            description: "Fetch palettes from the COLOURlovers API.",
            path: "palettes",
            action: "fetching palettes",
            params: vec![
                ParamSpec::query("lover", ParamType::String, "The user whose palettes to fetch.")
                    .required(),
                format_param(),
                ParamSpec::query(
                    "hueOption",
                    ParamType::String,
                    "The hue option for filtering palettes, e.g. yellow,orange.",
                ),
                ParamSpec::query(
                    "hex",
                    ParamType::String,
                    "A valid hex value or comma-separated list of hex values for filtering.",
                ),
                ParamSpec::query(
                    "hex_logic",
                    ParamType::Enum(HEX_LOGIC),
                    "Logic for hex comparison.",
                ),
                ParamSpec::query("keywords", ParamType::String, "Keywords for searching palettes."),
                ParamSpec::query("keywordExact", ParamType::Integer, "Exact match flag (0 or 1)."),
                ParamSpec::query("orderCol", ParamType::String, "Column to order results by."),
                ParamSpec::query("sortBy", ParamType::Enum(SORT_ORDERS), "Sort order."),
                ParamSpec::query(
                    "numResults",
                    ParamType::Integer,
                    "Maximum number of results to return (max 100).",
                ),
                ParamSpec::query(
                    "resultOffset",
                    ParamType::Integer,
                    "Offset for paging results.",
                ),
                palette_widths_param(),
            ],
        },
    ]
});

/// Look up an endpoint by tool name
pub fn find(name: &str) -> Option<&'static Endpoint> {
    ENDPOINTS.iter().find(|e| e.name == name)
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::collections::HashSet;

    #[test]
    fn test_endpoint_names_are_unique() {
        let names: HashSet<&str> = ENDPOINTS.iter().map(|e| e.name).collect();
        assert_eq!(names.len(), ENDPOINTS.len());
        assert_eq!(ENDPOINTS.len(), 7);
    }

    #[test]
    fn test_path_templates_match_path_params() {
        for endpoint in ENDPOINTS.iter() {
            for param in &endpoint.params {
                let placeholder = format!("{{{}}}", param.name);
                assert_eq!(
                    endpoint.path.contains(&placeholder),
                    param.placement == Placement::Path,
                    "{}: {}",
                    endpoint.name,
                    param.name
                );
            }
        }
    }

    #[test]
    fn test_every_endpoint_defaults_to_json() {
        for endpoint in ENDPOINTS.iter() {
            let format = endpoint.param("format").expect(endpoint.name);
            assert_eq!(format.default, Some(json!("json")), "{}", endpoint.name);
        }
    }

    #[test]
    fn test_color_info_schema() {
        let schema = find("get_color_info").unwrap().schema();
        assert_eq!(schema["type"], "object");
        assert_eq!(schema["required"], json!(["hex"]));
        assert_eq!(schema["properties"]["hex"]["type"], "string");
        assert_eq!(schema["properties"]["comments"]["type"], "boolean");
        assert_eq!(schema["properties"]["format"]["enum"], json!(["json", "xml"]));
    }

    #[test]
    fn test_required_fields() {
        let required = |name: &str| find(name).unwrap().schema()["required"].clone();
        assert_eq!(required("get_colors"), json!(["lover"]));
        assert_eq!(required("fetch_palettes"), json!(["lover"]));
        assert_eq!(required("get_palette"), json!(["paletteId"]));
        assert_eq!(required("get_top_colors"), json!([]));
        assert_eq!(required("fetch_random_palette"), json!([]));
        assert_eq!(required("get_top_palettes"), json!([]));
    }

    #[test]
    fn test_query_params_exclude_path_params() {
        let endpoint = find("get_palette").unwrap();
        let names: Vec<&str> = endpoint.query_params().map(|p| p.name).collect();
        assert_eq!(names, vec!["format", "showPaletteWidths"]);
    }

    #[test]
    fn test_find_unknown() {
        assert!(find("get_weather").is_none());
    }
}
