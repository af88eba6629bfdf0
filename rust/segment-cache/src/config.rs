use serde::{Deserialize, Serialize};

/// What happens to the cached siblings of a segment a navigation targets.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum SiblingPolicy {
    /// Carry the siblings over into the target tree, sharing their subtrees
    /// with the existing tree.
    #[default]
    Retain,
    /// Leave only an empty segment map in the target tree.
    Drop,
}

/// Configuration for an [`crate::InvalidationWalker`].
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct InvalidationConfig {
    /// How untargeted segments in a navigated slot are treated
    pub siblings: SiblingPolicy,

    /// Normalize page segment keys without their search parameters before
    /// comparing them against cached keys
    pub key_without_search_parameters: bool,
}

#[cfg(test)]
mod tests {
    use super::*;
    use anyhow::Result;

    #[test]
    fn it_defaults_to_retaining_siblings() {
        let config = InvalidationConfig::default();

        assert_eq!(config.siblings, SiblingPolicy::Retain);
        assert!(!config.key_without_search_parameters);
    }

    #[test]
    fn it_loads_a_partial_configuration() -> Result<()> {
        let config: InvalidationConfig = serde_json::from_str(r#"{ "siblings": "drop" }"#)?;

        assert_eq!(
            config,
            InvalidationConfig {
                siblings: SiblingPolicy::Drop,
                key_without_search_parameters: false,
            }
        );

        let config: InvalidationConfig = serde_json::from_str("{}")?;
        assert_eq!(config, InvalidationConfig::default());

        Ok(())
    }
}
