use crate::DEFAULT_REFETCH_AFTER_MUTATION;

use serde::Deserialize;

#[derive(Debug, Clone, Deserialize)]
#[serde(default)]
pub struct TodosConfig {
    /// Reload the whole list after add/delete instead of patching it locally
    pub refetch_after_mutation: bool,
}

impl Default for TodosConfig {
    fn default() -> Self {
        Self {
            refetch_after_mutation: DEFAULT_REFETCH_AFTER_MUTATION,
        }
    }
}
