use serde::{Deserialize, Serialize};

/// HTTP method of a hypermedia action.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "UPPERCASE")]
pub enum Method {
    Get,
    Post,
    Delete,
}

/// Declared type of an action parameter.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum ParamKind {
    String,
    Number,
}

/// A named parameter a client must supply when invoking an action.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Parameter {
    pub name: String,
    #[serde(rename = "type")]
    pub kind: ParamKind,
}

/// One operation currently legal against a resource: method, URL, and the
/// parameters the client must provide.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Action {
    pub method: Method,
    pub url: String,
    #[serde(default, skip_serializing_if = "Vec::is_empty")]
    pub parameters: Vec<Parameter>,
}

impl Action {
    pub fn get(url: impl Into<String>) -> Self {
        Self::new(Method::Get, url)
    }

    pub fn post(url: impl Into<String>) -> Self {
        Self::new(Method::Post, url)
    }

    pub fn delete(url: impl Into<String>) -> Self {
        Self::new(Method::Delete, url)
    }

    fn new(method: Method, url: impl Into<String>) -> Self {
        Self {
            method,
            url: url.into(),
            parameters: Vec::new(),
        }
    }

    /// Declare a parameter on this action.
    pub fn with_param(mut self, name: &str, kind: ParamKind) -> Self {
        self.parameters.push(Parameter {
            name: name.to_string(),
            kind,
        });
        self
    }
}

/// The named-action map attached to every returned resource.
///
/// Presence of an entry is the sole signal that the operation is currently
/// permitted; an absent entry is contract, not an omission.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Actions {
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub registration: Option<Action>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub information: Option<Action>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub defuse: Option<Action>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub leave_game: Option<Action>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub current_game: Option<Action>,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn action_serializes_method_uppercase() {
        let action = Action::post("/games/1");
        let json = serde_json::to_value(&action).unwrap();
        assert_eq!(json["method"], "POST");
        assert_eq!(json["url"], "/games/1");
    }

    #[test]
    fn empty_parameters_omitted_from_json() {
        let json = serde_json::to_string(&Action::get("/games/1")).unwrap();
        assert!(!json.contains("parameters"));
    }

    #[test]
    fn declared_parameters_carry_name_and_type() {
        let action = Action::post("/games/1/defuse").with_param("playerId", ParamKind::Number);
        let json = serde_json::to_value(&action).unwrap();
        assert_eq!(json["parameters"][0]["name"], "playerId");
        assert_eq!(json["parameters"][0]["type"], "number");
    }

    #[test]
    fn absent_actions_omitted_from_json() {
        let actions = Actions {
            information: Some(Action::get("/games/2")),
            ..Actions::default()
        };
        let json = serde_json::to_string(&actions).unwrap();
        assert!(json.contains("information"));
        assert!(!json.contains("leaveGame"));
        assert!(!json.contains("registration"));
    }

    #[test]
    fn leave_game_serializes_camel_case() {
        let actions = Actions {
            leave_game: Some(Action::delete("/games/2/7")),
            current_game: Some(Action::get("/games/2")),
            ..Actions::default()
        };
        let json = serde_json::to_value(&actions).unwrap();
        assert_eq!(json["leaveGame"]["method"], "DELETE");
        assert_eq!(json["currentGame"]["url"], "/games/2");
    }

    #[test]
    fn actions_roundtrip_through_json() {
        let actions = Actions {
            defuse: Some(Action::post("/games/3/defuse").with_param("playerId", ParamKind::Number)),
            ..Actions::default()
        };
        let json = serde_json::to_string(&actions).unwrap();
        let back: Actions = serde_json::from_str(&json).unwrap();
        assert_eq!(back, actions);
    }
}
