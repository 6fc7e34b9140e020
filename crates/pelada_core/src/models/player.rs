use schemars::JsonSchema;
use serde::{Deserialize, Serialize};

/// A rostered player as handed over by the caller.
///
/// Only `rating` takes part in balancing. `email` and `position` are carried
/// through untouched so the caller can render the teams.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize, JsonSchema)]
#[serde(rename_all = "camelCase")]
pub struct Player {
    pub id: String,
    pub name: String,
    #[serde(default)]
    pub email: String,
    /// Skill score, higher is stronger.
    #[serde(alias = "elo")]
    pub rating: f64,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub position: Option<String>,
}

impl Player {
    pub fn new(id: impl Into<String>, name: impl Into<String>, rating: f64) -> Self {
        Self { id: id.into(), name: name.into(), email: String::new(), rating, position: None }
    }

    pub fn with_email(mut self, email: impl Into<String>) -> Self {
        self.email = email.into();
        self
    }

    pub fn with_position(mut self, position: impl Into<String>) -> Self {
        self.position = Some(position.into());
        self
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_elo_alias_is_accepted() {
        let player: Player =
            serde_json::from_str(r#"{"id":"7","name":"Rafa","email":"r@x.io","elo":1234.5}"#)
                .unwrap();
        assert_eq!(player.rating, 1234.5);
        assert_eq!(player.position, None);
    }

    #[test]
    fn test_position_is_omitted_when_absent() {
        let json = serde_json::to_value(Player::new("1", "Lia", 900.0)).unwrap();
        assert!(json.get("position").is_none());

        let json = serde_json::to_value(Player::new("1", "Lia", 900.0).with_position("GK")).unwrap();
        assert_eq!(json["position"], "GK");
    }
}
