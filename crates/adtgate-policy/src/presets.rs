//! Named policy bundles.
//!
//! Presets are immutable templates: activating one copies its names into
//! the live store, so nothing that happens to the store afterwards can
//! touch the bundle. Lookup is exact-key only.

use std::collections::HashMap;

use once_cell::sync::Lazy;

use crate::error::PolicyError;

/// The out-of-the-box denylist: every operation that writes to the target
/// system. Reads, analysis, debugging and session management stay open.
pub const DEFAULT_DISABLED: &[&str] = &[
    // transport requests
    "createTransport",
    "setTransportsConfig",
    "createTransportsConfig",
    "transportRelease",
    "transportSetOwner",
    "transportAddUser",
    // object edits
    "createTestInclude",
    "lock",
    "unLock",
    "setObjectSource",
    "deleteObject",
    "activateObjects",
    "activateByName",
    "createObject",
    // user settings
    "setPrettyPrinterSetting",
    // git
    "gitCreateRepo",
    "gitPullRepo",
    "gitUnlinkRepo",
    "pushRepo",
    "switchRepoBranch",
    // service bindings
    "publishServiceBinding",
    "unPublishServiceBinding",
    "debuggerSaveSettings",
    // refactorings that apply changes
    "renameExecute",
    "extractMethodExecute",
    // trace configuration
    "tracesSetParameters",
    "tracesCreateConfiguration",
];

/// Blocks every state-mutating operation, including the lock/unlock pair
/// that editing requires. Reads and analysis remain available.
pub const READ_ONLY: &[&str] = &[
    // transport
    "createTransport",
    "setTransportsConfig",
    "createTransportsConfig",
    "transportDelete",
    "transportRelease",
    "transportSetOwner",
    "transportAddUser",
    // object edits
    "setObjectSource",
    "deleteObject",
    "createObject",
    "activateObjects",
    "activateByName",
    "createTestInclude",
    // locking
    "lock",
    "unLock",
    // refactorings that apply changes
    "renameExecute",
    "extractMethodExecute",
    // git
    "gitCreateRepo",
    "gitPullRepo",
    "gitUnlinkRepo",
    "pushRepo",
    "switchRepoBranch",
    // service bindings
    "publishServiceBinding",
    "unPublishServiceBinding",
    // user settings
    "setPrettyPrinterSetting",
    "debuggerSaveSettings",
    // atc
    "atcRequestExemption",
    "atcChangeContact",
    // traces
    "tracesSetParameters",
    "tracesCreateConfiguration",
    "tracesDeleteConfiguration",
    "tracesDelete",
];

/// Blocks destructive and code-executing operations plus the entire
/// debugger surface; ordinary edits stay possible.
pub const SAFE: &[&str] = &[
    // deletes
    "deleteObject",
    "transportDelete",
    "tracesDelete",
    "tracesDeleteConfiguration",
    // code execution
    "runClass",
    "debuggerStep",
    "debuggerSetVariableValue",
    // debugger
    "debuggerListeners",
    "debuggerListen",
    "debuggerDeleteListener",
    "debuggerSetBreakpoints",
    "debuggerDeleteBreakpoints",
    "debuggerAttach",
    "debuggerSaveSettings",
    "debuggerStackTrace",
    "debuggerVariables",
    "debuggerChildVariables",
    "debuggerGoToStack",
];

/// Execute-class operations layered on top of [`READ_ONLY`].
const ANALYSIS_EXTRA: &[&str] = &["runClass", "unitTestRun", "createAtcRun"];

/// Read-only plus everything that executes code — a superset of
/// [`READ_ONLY`] by construction.
pub static ANALYSIS_ONLY: Lazy<Vec<&'static str>> =
    Lazy::new(|| READ_ONLY.iter().chain(ANALYSIS_EXTRA.iter()).copied().collect());

/// All built-in presets, keyed by their exact configuration name.
static PRESETS: Lazy<HashMap<&'static str, &'static [&'static str]>> = Lazy::new(|| {
    let mut m = HashMap::new();
    m.insert("default", DEFAULT_DISABLED);
    m.insert("read-only", READ_ONLY);
    m.insert("safe", SAFE);
    m.insert("analysis-only", ANALYSIS_ONLY.as_slice());
    m
});

/// Look up a preset by its exact name.
///
/// No partial matches, no case folding: `"READ-ONLY"` is a miss.
pub fn preset(name: &str) -> Result<&'static [&'static str], PolicyError> {
    PRESETS
        .get(name)
        .copied()
        .ok_or_else(|| PolicyError::UnknownPreset(name.to_string()))
}

/// Names of all built-in presets, sorted.
pub fn preset_names() -> Vec<&'static str> {
    let mut names: Vec<&'static str> = PRESETS.keys().copied().collect();
    names.sort_unstable();
    names
}
