use serde::{Deserialize, Serialize};

// ──────────────────── Tool Descriptors ────────────────────

/// Declaration record for a single exposed tool, as advertised to clients.
///
/// The policy layer only ever reads `name`; description and parameter
/// schema ride along untouched for whoever builds the tool listing.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ToolSpec {
    /// Operation name (e.g. "transportInfo").
    pub name: String,
    /// Human-readable description shown to clients.
    pub description: String,
    /// JSON schema describing the tool's input parameters.
    pub parameters: serde_json::Value,
}

/// Anything that carries a gated operation name.
///
/// The filtering facade is generic over this trait, so callers can pass
/// their own descriptor types without converting to [`ToolSpec`] first.
pub trait ToolName {
    fn name(&self) -> &str;
}

impl ToolName for ToolSpec {
    fn name(&self) -> &str {
        &self.name
    }
}

// ──────────────────── Policy Source ────────────────────

/// Which policy the process activates at startup.
///
/// Selected once from configuration; the live disabled-set is replaced
/// wholesale with whatever this resolves to.
#[derive(Debug, Clone, Default, Serialize, Deserialize, PartialEq, Eq)]
#[serde(tag = "source", rename_all = "lowercase")]
pub enum PolicySource {
    /// The built-in default denylist.
    #[default]
    Default,
    /// A named preset bundle (e.g. "read-only").
    Preset { name: String },
    /// An explicit list of disabled operation names.
    /// Entries may use `group:<area>` shorthand for a whole functional area.
    Explicit { disabled: Vec<String> },
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    #[test]
    fn test_tool_spec_serde() {
        let spec = ToolSpec {
            name: "transportInfo".into(),
            description: "Transport information for an object".into(),
            parameters: json!({
                "type": "object",
                "properties": {
                    "objectUrl": { "type": "string" }
                },
                "required": ["objectUrl"]
            }),
        };
        let encoded = serde_json::to_string(&spec).unwrap();
        let parsed: ToolSpec = serde_json::from_str(&encoded).unwrap();
        assert_eq!(parsed, spec);
        assert_eq!(parsed.name(), "transportInfo");
    }

    #[test]
    fn test_policy_source_default() {
        assert_eq!(PolicySource::default(), PolicySource::Default);
        let json = r#"{"source":"default"}"#;
        let parsed: PolicySource = serde_json::from_str(json).unwrap();
        assert_eq!(parsed, PolicySource::Default);
    }

    #[test]
    fn test_policy_source_preset_serde() {
        let source = PolicySource::Preset {
            name: "read-only".into(),
        };
        let encoded = serde_json::to_string(&source).unwrap();
        assert!(encoded.contains("\"source\":\"preset\""));
        let parsed: PolicySource = serde_json::from_str(&encoded).unwrap();
        assert_eq!(parsed, source);
    }

    #[test]
    fn test_policy_source_explicit_serde() {
        let json = r#"{"source":"explicit","disabled":["deleteObject","group:debugger"]}"#;
        let parsed: PolicySource = serde_json::from_str(json).unwrap();
        match parsed {
            PolicySource::Explicit { disabled } => {
                assert_eq!(disabled, vec!["deleteObject", "group:debugger"]);
            }
            _ => panic!("Expected Explicit variant"),
        }
    }
}
