//! Gate facade: the single yes/no surface a dispatcher consults before
//! listing or invoking an operation.

use adtgate_types::{PolicySource, ToolName};
use tracing::info;

use crate::catalog;
use crate::error::PolicyError;
use crate::presets;
use crate::store::PolicyStore;

/// Decides which operations are exposed, backed by a [`PolicyStore`].
///
/// A fresh gate disables nothing. Loading a preset or an explicit list
/// replaces the whole policy; queries between loads observe either the
/// old set or the new one, never a mixture.
pub struct ToolGate {
    store: PolicyStore,
}

impl ToolGate {
    /// Gate with an empty policy: every operation enabled.
    pub fn new() -> Self {
        ToolGate {
            store: PolicyStore::new(),
        }
    }

    /// Build a gate from a configured policy source.
    pub fn from_source(source: &PolicySource) -> Result<Self, PolicyError> {
        let gate = ToolGate::new();
        match source {
            PolicySource::Default => gate.activate_preset("default")?,
            PolicySource::Preset { name } => gate.activate_preset(name)?,
            PolicySource::Explicit { disabled } => gate.load(catalog::expand_names(disabled)),
        }
        Ok(gate)
    }

    /// Replace the policy with a named preset.
    ///
    /// On an unknown preset the error is returned and the current policy
    /// stays in force.
    pub fn activate_preset(&self, name: &str) -> Result<(), PolicyError> {
        let names = presets::preset(name)?;
        self.store.load(names.iter().copied());
        info!(preset = %name, disabled = names.len(), "Preset activated");
        Ok(())
    }

    /// Replace the policy with an explicit disabled list.
    pub fn load<I, S>(&self, names: I)
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        self.store.load(names);
    }

    /// Whether an operation is exposed. Never fails; unknown names are enabled.
    pub fn is_enabled(&self, name: &str) -> bool {
        !self.store.contains(name)
    }

    /// Keep only the enabled tools, preserving the input order.
    pub fn filter_enabled<T: ToolName>(&self, tools: Vec<T>) -> Vec<T> {
        self.store.with_set(|disabled| {
            tools
                .into_iter()
                .filter(|tool| !disabled.contains(tool.name()))
                .collect()
        })
    }

    /// Currently disabled names, sorted.
    pub fn disabled(&self) -> Vec<String> {
        self.store.snapshot()
    }

    /// Number of disabled operations.
    pub fn disabled_count(&self) -> usize {
        self.store.len()
    }
}

impl Default for ToolGate {
    fn default() -> Self {
        ToolGate::new()
    }
}
