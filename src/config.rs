use serde::{Deserialize, Serialize};

/// What the output stage sees when the address it is fetching is written
/// on the same clock edge.
#[derive(Default, Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum CollisionPolicy {
  /// Old contents, as a registered synchronous RAM returns them.
  #[default]
  ReadFirst,
  /// The value being written is forwarded.
  WriteFirst,
}

#[derive(Default, Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct ControllerConfig {
  pub collision: CollisionPolicy,
}

impl ControllerConfig {
  pub fn from_json(json: &str) -> Result<Self, serde_json::Error> {
    serde_json::from_str(json)
  }
}
