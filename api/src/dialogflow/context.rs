//! Typed "last discussed component" context and its wire form.

use parts_catalog::Category;
use serde::{Deserialize, Serialize};
use serde_json::{Map, Value};

use super::{InboundContext, Parameters, bindings::binding};

/// Context object as sent back to the platform.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct OutboundContext {
    pub name: String,
    pub lifespan_count: u32,
    pub parameters: Map<String, Value>,
}

/// Session path of a request plus the ids extracted for logging.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SessionPath {
    pub path: String,
    pub project: Option<String>,
    pub session: Option<String>,
}

impl SessionPath {
    /// Accepts `projects/{p}/agent/sessions/{s}` and the environment/user variants.
    pub fn parse(raw: &str) -> Option<Self> {
        let path = raw.trim().trim_end_matches('/');
        if path.is_empty() {
            return None;
        }
        let segments: Vec<&str> = path.split('/').collect();
        let after = |label: &str| {
            segments
                .iter()
                .position(|s| *s == label)
                .and_then(|i| segments.get(i + 1))
                .map(|s| s.to_string())
        };
        Some(Self {
            path: path.to_string(),
            project: after("projects"),
            session: after("sessions"),
        })
    }
}

/// The component last discussed in one category of one session.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct DetailsContext {
    pub category: Category,
    /// Full session path the context is scoped to.
    pub session: String,
    /// Model exactly as the user typed it.
    pub raw_model: String,
    pub detail: Option<String>,
    /// Remaining turns.
    pub lifespan: u32,
}

impl DetailsContext {
    pub fn name(&self) -> String {
        format!(
            "{}/contexts/{}",
            self.session,
            binding(self.category).context_suffix
        )
    }

    pub fn to_wire(&self) -> OutboundContext {
        let b = binding(self.category);
        let mut parameters = Map::new();
        parameters.insert(b.model_param.into(), Value::String(self.raw_model.clone()));
        parameters.insert(
            b.primary_detail_param().into(),
            self.detail.clone().map_or(Value::Null, Value::String),
        );
        OutboundContext {
            name: self.name(),
            lifespan_count: self.lifespan,
            parameters,
        }
    }

    /// Raw model remembered by a prior context of `category`, if any.
    pub fn recall(contexts: &[InboundContext], category: Category) -> Option<String> {
        let b = binding(category);
        contexts
            .iter()
            .filter(|ctx| ctx.has_suffix(b.context_suffix))
            .find_map(|ctx| {
                let params = ctx.parameters.as_ref().map(Parameters::from_map)?;
                params.get(b.model_param).map(str::to_string)
            })
    }
}

#[cfg(test)]
mod tests {
    use serde_json::json;

    use super::*;

    const SESSION: &str = "projects/pc-bot/agent/sessions/abc";

    #[test]
    fn session_ids_are_extracted() {
        let s = SessionPath::parse(SESSION).unwrap();
        assert_eq!(s.project.as_deref(), Some("pc-bot"));
        assert_eq!(s.session.as_deref(), Some("abc"));

        let env = SessionPath::parse(
            "projects/pc-bot/agent/environments/draft/users/u1/sessions/xyz/",
        )
        .unwrap();
        assert_eq!(env.path, "projects/pc-bot/agent/environments/draft/users/u1/sessions/xyz");
        assert_eq!(env.session.as_deref(), Some("xyz"));

        assert!(SessionPath::parse("  ").is_none());
    }

    #[test]
    fn wire_form_uses_category_names() {
        let ctx = DetailsContext {
            category: Category::Cpu,
            session: SESSION.into(),
            raw_model: "i5-14500".into(),
            detail: None,
            lifespan: 5,
        };
        let wire = serde_json::to_value(ctx.to_wire()).unwrap();
        assert_eq!(
            wire,
            json!({
                "name": "projects/pc-bot/agent/sessions/abc/contexts/cpu_details_context",
                "lifespanCount": 5,
                "parameters": { "cpu-model": "i5-14500", "cpu_detail_type": null }
            })
        );
    }

    #[test]
    fn recall_reads_matching_context_only() {
        let contexts: Vec<InboundContext> = serde_json::from_value(json!([
            { "name": format!("{SESSION}/contexts/gpu_details_context"),
              "parameters": { "gpu-model": "rtx 3050" } },
            { "name": format!("{SESSION}/contexts/ram_details_context"),
              "lifespanCount": 3,
              "parameters": { "Ram-model": ["Fury Beast DDR4"] } }
        ]))
        .unwrap();

        assert_eq!(
            DetailsContext::recall(&contexts, Category::Ram).as_deref(),
            Some("Fury Beast DDR4")
        );
        assert_eq!(DetailsContext::recall(&contexts, Category::Cpu), None);
    }
}
