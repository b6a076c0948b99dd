//! The gated-operation universe: every operation the server can expose,
//! with its access class and functional area.
//!
//! Area names double as `group:<area>` shorthand in explicit policy lists.
//! The catalog is advisory — the store accepts names it has never heard of —
//! but presets and configuration are expected to reference entries here.

use std::collections::HashMap;

use adtgate_types::ToolName;
use once_cell::sync::Lazy;

/// How an operation touches the target system.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum AccessClass {
    /// Only reads data.
    Read,
    /// Modifies objects or settings.
    Write,
    /// Session management; no repository objects touched.
    Session,
    /// Executes code on the backend.
    Execute,
    /// Deletes objects or data.
    Delete,
}

impl AccessClass {
    /// Short display tag, e.g. `[WRITE]`.
    pub fn tag(self) -> &'static str {
        match self {
            AccessClass::Read => "[READ]",
            AccessClass::Write => "[WRITE]",
            AccessClass::Session => "[SESSION]",
            AccessClass::Execute => "[EXECUTE]",
            AccessClass::Delete => "[DELETE]",
        }
    }
}

/// One gated operation.
#[derive(Debug, Clone, Copy)]
pub struct ToolEntry {
    /// Operation name, exactly as dispatched.
    pub name: &'static str,
    /// Access class.
    pub access: AccessClass,
    /// One-line summary for listings.
    pub summary: &'static str,
}

impl ToolName for ToolEntry {
    fn name(&self) -> &str {
        self.name
    }
}

const fn entry(name: &'static str, access: AccessClass, summary: &'static str) -> ToolEntry {
    ToolEntry {
        name,
        access,
        summary,
    }
}

use AccessClass::{Delete, Execute, Read, Session, Write};

const SESSION: &[ToolEntry] = &[
    entry("login", Session, "Authenticate against the backend system"),
    entry("logout", Session, "Terminate the backend session"),
    entry("dropSession", Session, "Discard the cached local session"),
];

const TRANSPORT: &[ToolEntry] = &[
    entry("transportInfo", Read, "Transport information for an object"),
    entry("createTransport", Write, "Create a transport request"),
    entry("hasTransportConfig", Read, "Whether a transport configuration exists"),
    entry("transportConfigurations", Read, "List transport configurations"),
    entry("getTransportConfiguration", Read, "Fetch one transport configuration"),
    entry("setTransportsConfig", Write, "Update transport configurations"),
    entry("createTransportsConfig", Write, "Create a transport configuration"),
    entry("userTransports", Read, "Transports owned by a user"),
    entry("transportsByConfig", Read, "Transports matching a configuration"),
    entry("transportDelete", Delete, "Delete a transport request"),
    entry("transportRelease", Write, "Release a transport to the next system"),
    entry("transportSetOwner", Write, "Reassign a transport's owner"),
    entry("transportAddUser", Write, "Add a user to a transport"),
    entry("systemUsers", Read, "List users known to the system"),
    entry("transportReference", Read, "Resolve a transport reference"),
];

const OBJECT: &[ToolEntry] = &[
    entry("objectStructure", Read, "Structure of a repository object"),
    entry("searchObject", Read, "Search repository objects"),
    entry("findObjectPath", Read, "Path of an object in the repository tree"),
    entry("objectTypes", Read, "Available object types"),
    entry("reentranceTicket", Read, "Issue a reentrance ticket"),
];

const CLASS: &[ToolEntry] = &[
    entry("classIncludes", Read, "Include structure of a class"),
    entry("classComponents", Read, "Components of a class"),
    entry("createTestInclude", Write, "Create a test include for a class"),
];

const ANALYSIS: &[ToolEntry] = &[
    entry("syntaxCheckCode", Read, "Syntax-check submitted source"),
    entry("syntaxCheckCdsUrl", Read, "Syntax-check a CDS artifact by URL"),
    entry("codeCompletion", Read, "Completion proposals at a position"),
    entry("findDefinition", Read, "Definition site of a symbol"),
    entry("usageReferences", Read, "Where-used references for a symbol"),
    entry("syntaxCheckTypes", Read, "Supported syntax-check types"),
    entry("codeCompletionFull", Read, "Full completion with element info"),
    entry("runClass", Execute, "Run a class's console entry point"),
    entry("codeCompletionElement", Read, "Element information for a completion"),
    entry("usageReferenceSnippets", Read, "Source snippets for usage references"),
    entry("fixProposals", Read, "Quick-fix proposals for a finding"),
    entry("fixEdits", Read, "Edits for a proposal, without applying them"),
    entry("fragmentMappings", Read, "Source fragment mappings"),
    entry("abapDocumentation", Read, "Language documentation for a symbol"),
];

const LOCKING: &[ToolEntry] = &[
    entry("lock", Write, "Lock an object for editing"),
    entry("unLock", Write, "Release an object lock"),
];

const SOURCE: &[ToolEntry] = &[
    entry("getObjectSource", Read, "Source of a repository object"),
    entry("setObjectSource", Write, "Overwrite the source of a repository object"),
];

const DELETION: &[ToolEntry] = &[
    entry("deleteObject", Delete, "Delete a repository object"),
];

const ACTIVATION: &[ToolEntry] = &[
    entry("activateObjects", Write, "Activate a set of objects"),
    entry("activateByName", Write, "Activate one object by name and URL"),
    entry("inactiveObjects", Read, "List inactive objects"),
];

const REGISTRATION: &[ToolEntry] = &[
    entry("objectRegistrationInfo", Read, "Registration info for an object"),
    entry("validateNewObject", Read, "Validate parameters for a new object"),
    entry("createObject", Write, "Create a repository object"),
];

const NAVIGATION: &[ToolEntry] = &[
    entry("nodeContents", Read, "Contents of a repository tree node"),
    entry("mainPrograms", Read, "Main programs for an include"),
];

const DISCOVERY: &[ToolEntry] = &[
    entry("featureDetails", Read, "Details for a discovery feature"),
    entry("collectionFeatureDetails", Read, "Details for a collection feature"),
    entry("findCollectionByUrl", Read, "Locate a collection by URL"),
    entry("loadTypes", Read, "Load object type descriptors"),
    entry("adtDiscovery", Read, "Service discovery"),
    entry("adtCoreDiscovery", Read, "Core service discovery"),
    entry("adtCompatibiliyGraph", Read, "Service compatibility graph"),
];

const UNITTEST: &[ToolEntry] = &[
    entry("unitTestRun", Execute, "Run unit tests"),
    entry("unitTestEvaluation", Read, "Evaluate a unit test run"),
    entry("unitTestOccurrenceMarkers", Read, "Occurrence markers for a test run"),
];

const PRETTYPRINTER: &[ToolEntry] = &[
    entry("prettyPrinterSetting", Read, "Current pretty-printer settings"),
    entry("setPrettyPrinterSetting", Write, "Update pretty-printer settings"),
    entry("prettyPrinter", Read, "Format source without saving it"),
];

const GIT: &[ToolEntry] = &[
    entry("gitRepos", Read, "Linked git repositories"),
    entry("gitExternalRepoInfo", Read, "Metadata for an external repository"),
    entry("gitCreateRepo", Write, "Link a repository"),
    entry("gitPullRepo", Write, "Pull into the linked repository"),
    entry("gitUnlinkRepo", Write, "Unlink a repository"),
    entry("stageRepo", Read, "Stage changes for a push"),
    entry("pushRepo", Write, "Push staged changes"),
    entry("checkRepo", Read, "Repository consistency check"),
    entry("remoteRepoInfo", Read, "Metadata for a remote repository"),
    entry("switchRepoBranch", Write, "Switch the checked-out branch"),
];

const DDIC: &[ToolEntry] = &[
    entry("annotationDefinitions", Read, "Annotation definitions"),
    entry("ddicElement", Read, "Dictionary element information"),
    entry("ddicRepositoryAccess", Read, "Query the dictionary repository"),
    entry("packageSearchHelp", Read, "Search help for packages"),
];

const SERVICEBINDING: &[ToolEntry] = &[
    entry("publishServiceBinding", Write, "Publish a service binding"),
    entry("unPublishServiceBinding", Write, "Unpublish a service binding"),
    entry("bindingDetails", Read, "Details of a service binding"),
];

const QUERY: &[ToolEntry] = &[
    entry("tableContents", Read, "Rows from a database table"),
    entry("runQuery", Read, "Run a free-form SQL query"),
];

const FEEDS: &[ToolEntry] = &[
    entry("feeds", Read, "Available feeds"),
    entry("dumps", Read, "Recorded short dumps"),
];

const DEBUGGER: &[ToolEntry] = &[
    entry("debuggerListeners", Read, "Active debug listeners"),
    entry("debuggerListen", Session, "Wait for a debuggee to attach"),
    entry("debuggerDeleteListener", Session, "Stop a debug listener"),
    entry("debuggerSetBreakpoints", Session, "Set breakpoints for the session"),
    entry("debuggerDeleteBreakpoints", Session, "Remove session breakpoints"),
    entry("debuggerAttach", Session, "Attach to a stopped debuggee"),
    entry("debuggerSaveSettings", Write, "Persist debugger settings"),
    entry("debuggerStackTrace", Read, "Stack of the stopped debuggee"),
    entry("debuggerVariables", Read, "Variables in the current frame"),
    entry("debuggerChildVariables", Read, "Child variables of a structure"),
    entry("debuggerStep", Execute, "Single-step the debuggee"),
    entry("debuggerGoToStack", Read, "Move the debugger to a stack frame"),
    entry("debuggerSetVariableValue", Execute, "Overwrite a variable in the debuggee"),
];

const RENAME: &[ToolEntry] = &[
    entry("renameEvaluate", Read, "Evaluate a rename"),
    entry("renamePreview", Read, "Preview a rename's changes"),
    entry("renameExecute", Write, "Apply a rename"),
];

const EXTRACTMETHOD: &[ToolEntry] = &[
    entry("extractMethodEvaluate", Read, "Evaluate an extract-method"),
    entry("extractMethodPreview", Read, "Preview an extract-method's changes"),
    entry("extractMethodExecute", Write, "Apply an extract-method"),
];

const ATC: &[ToolEntry] = &[
    entry("atcCustomizing", Read, "Check-tool customizing"),
    entry("atcCheckVariant", Read, "A check variant"),
    entry("createAtcRun", Execute, "Start a check run"),
    entry("atcWorklists", Read, "Check worklists"),
    entry("atcUsers", Read, "Check-tool users"),
    entry("atcExemptProposal", Read, "An exemption proposal"),
    entry("atcRequestExemption", Write, "Request a finding exemption"),
    entry("isProposalMessage", Read, "Whether a message is an exemption proposal"),
    entry("atcContactUri", Read, "Contact URI for a finding"),
    entry("atcChangeContact", Write, "Reassign a finding's contact"),
];

const TRACES: &[ToolEntry] = &[
    entry("tracesList", Read, "Recorded traces"),
    entry("tracesListRequests", Read, "Trace requests"),
    entry("tracesHitList", Read, "Hit list of a trace"),
    entry("tracesDbAccess", Read, "Database accesses of a trace"),
    entry("tracesStatements", Read, "Statements of a trace"),
    entry("tracesSetParameters", Write, "Update trace parameters"),
    entry("tracesCreateConfiguration", Write, "Create a trace configuration"),
    entry("tracesDeleteConfiguration", Delete, "Delete a trace configuration"),
    entry("tracesDelete", Delete, "Delete a trace"),
];

const REVISIONS: &[ToolEntry] = &[
    entry("revisions", Read, "Revision history of an object"),
];

const SYSTEM: &[ToolEntry] = &[
    entry("healthcheck", Read, "Server liveness probe"),
];

/// Every functional area with its operations, in catalog order.
pub const AREAS: &[(&str, &[ToolEntry])] = &[
    ("session", SESSION),
    ("transport", TRANSPORT),
    ("object", OBJECT),
    ("class", CLASS),
    ("analysis", ANALYSIS),
    ("locking", LOCKING),
    ("source", SOURCE),
    ("deletion", DELETION),
    ("activation", ACTIVATION),
    ("registration", REGISTRATION),
    ("navigation", NAVIGATION),
    ("discovery", DISCOVERY),
    ("unittest", UNITTEST),
    ("prettyprinter", PRETTYPRINTER),
    ("git", GIT),
    ("ddic", DDIC),
    ("servicebinding", SERVICEBINDING),
    ("query", QUERY),
    ("feeds", FEEDS),
    ("debugger", DEBUGGER),
    ("rename", RENAME),
    ("extractmethod", EXTRACTMETHOD),
    ("atc", ATC),
    ("traces", TRACES),
    ("revisions", REVISIONS),
    ("system", SYSTEM),
];

/// Index from operation name to its catalog entry.
static INDEX: Lazy<HashMap<&'static str, &'static ToolEntry>> = Lazy::new(|| {
    let mut m = HashMap::new();
    for (_, tools) in AREAS {
        for entry in *tools {
            m.insert(entry.name, entry);
        }
    }
    m
});

/// Look up an operation by exact name.
pub fn find(name: &str) -> Option<&'static ToolEntry> {
    INDEX.get(name).copied()
}

/// Operations of a single area, or None for an unknown area name.
pub fn area_tools(area: &str) -> Option<&'static [ToolEntry]> {
    AREAS
        .iter()
        .find(|(name, _)| *name == area)
        .map(|(_, tools)| *tools)
}

/// Iterate over every operation name, in catalog order.
pub fn all_names() -> impl Iterator<Item = &'static str> {
    AREAS.iter().flat_map(|(_, tools)| tools.iter().map(|t| t.name))
}

/// Expand a single name that may be a `group:<area>` reference.
///
/// If the name starts with `group:` and the area exists, returns that
/// area's operation names. Otherwise returns the name as-is — under
/// denylist semantics a stray entry disables nothing real.
pub fn expand_name(name: &str) -> Vec<String> {
    if let Some(area) = name.strip_prefix("group:") {
        if let Some(tools) = area_tools(area) {
            return tools.iter().map(|t| t.name.to_string()).collect();
        }
    }
    vec![name.to_string()]
}

/// Expand a list of names, resolving any `group:<area>` references.
pub fn expand_names(names: &[String]) -> Vec<String> {
    let mut result = Vec::new();
    for name in names {
        result.extend(expand_name(name));
    }
    result
}
