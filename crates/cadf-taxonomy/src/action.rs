// action.rs — The closed CADF action taxonomy.
//
// The action vocabulary is FINAL. Do not add top-level actions; only
// children of existing families may be added, and every addition must go
// through the tree below so encode and decode stay in lockstep.
//
// Two families serialize a different root word than the one callers use:
// `monitor()` serializes as `capture` and `terminated()` as `terminate`.
// Decode accepts both spellings; encode always emits the serialized form.

use std::collections::HashMap;
use std::fmt;
use std::sync::OnceLock;

use serde::{Deserialize, Serialize};

use crate::error::TaxonomyError;
use crate::path::{self, Node, TaxonomyPath};

static ACTION_TREE: &[Node] = &[
    // General resource management.
    Node::leaf("create"),
    Node::leaf("read"),
    Node::leaf("renew"),
    Node::leaf("enable"),
    Node::leaf("send"),
    Node::leaf("delete"),
    Node::leaf("error"),
    Node::leaf("lose"),
    Node::leaf("discover"),
    Node::leaf("attach"),
    Node::leaf("detach"),
    Node::leaf("tag"),
    Node::leaf("untag"),
    Node::leaf("lock"),
    Node::leaf("unlock"),
    Node::leaf("prolongLock"),
    Node::leaf("installCW"),
    Node::leaf("uninstallCW"),
    // Workload and data management.
    Node::leaf("start"),
    Node::leaf("stop"),
    Node::leaf("plan"),
    Node::leaf("suspend"),
    Node::leaf("paused"),
    Node::leaf("rescue"),
    Node::leaf("configure"),
    Node::leaf("allow"),
    Node::leaf("deny"),
    Node::leaf("restore"),
    Node::leaf("deploy"),
    Node::leaf("undeploy"),
    Node::leaf("disable"),
    Node::leaf("notify"),
    Node::leaf("scan"),
    // Nested families.
    Node::internal("onboard", &[Node::leaf("azure")]),
    Node::internal(
        "security",
        &[Node::internal(
            "unauthorized",
            &[Node::leaf("permissionChange"), Node::leaf("networkChange")],
        )],
    ),
    Node::internal("update", &[Node::leaf("size")]),
    Node::aliased(
        "terminate",
        "terminated",
        &[Node::leaf("instance"), Node::leaf("hardware")],
    ),
    Node::internal("move", &[Node::leaf("to"), Node::leaf("from")]),
    Node::aliased(
        "capture",
        "monitor",
        &[
            Node::leaf("start"),
            Node::leaf("stop"),
            Node::leaf("update"),
            Node::leaf("instance"),
            Node::leaf("hardware"),
            Node::leaf("volume"),
            Node::leaf("checkpoint"),
        ],
    ),
    Node::internal(
        "command",
        &[
            Node::leaf("start"),
            Node::leaf("create"),
            Node::leaf("stop"),
            Node::leaf("reboot"),
            Node::leaf("delete"),
        ],
    ),
];

/// Decode table derived from the action tree, built once. Maps every
/// accepted spelling (canonical and alias) to its canonical path.
fn decode_table() -> &'static HashMap<String, TaxonomyPath> {
    static TABLE: OnceLock<HashMap<String, TaxonomyPath>> = OnceLock::new();
    TABLE.get_or_init(|| path::enumerate(ACTION_TREE).into_iter().collect())
}

/// A CADF action — one member of the closed action taxonomy.
///
/// Values are obtained through the associated constructors (possibly via a
/// family builder such as [`MonitorAction`]) or by decoding a path string
/// with [`Action::from_path`]. Equality and hashing are by path value.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize)]
#[serde(transparent)]
pub struct Action {
    path: TaxonomyPath,
}

impl Action {
    fn flat(segment: &'static str) -> Self {
        Self {
            path: TaxonomyPath::root(segment),
        }
    }

    fn nested(segments: &[&str]) -> Self {
        Self {
            path: TaxonomyPath::from_segments(segments),
        }
    }

    /// The canonical taxonomy path of this action.
    pub fn path(&self) -> &TaxonomyPath {
        &self.path
    }

    /// The canonical path as a string slice.
    pub fn as_str(&self) -> &str {
        self.path.as_str()
    }

    /// Decode a path string into the action it names.
    ///
    /// Accepts every canonical path plus the external-facing alias
    /// spellings (`monitor/...` for `capture/...`, `terminated/...` for
    /// `terminate/...`). Anything else — including plausible but unlisted
    /// children such as `monitor/delete` — is rejected.
    pub fn from_path(input: &str) -> Result<Self, TaxonomyError> {
        match decode_table().get(input) {
            Some(path) => Ok(Self { path: path.clone() }),
            None => {
                tracing::debug!(path = input, "unsupported action path");
                Err(TaxonomyError::UnsupportedAction(input.to_string()))
            }
        }
    }

    // ----- general resource management -----

    pub fn create() -> Self {
        Self::flat("create")
    }

    pub fn read() -> Self {
        Self::flat("read")
    }

    pub fn renew() -> Self {
        Self::flat("renew")
    }

    pub fn enable() -> Self {
        Self::flat("enable")
    }

    pub fn send() -> Self {
        Self::flat("send")
    }

    pub fn delete() -> Self {
        Self::flat("delete")
    }

    pub fn error() -> Self {
        Self::flat("error")
    }

    pub fn lose() -> Self {
        Self::flat("lose")
    }

    pub fn discover() -> Self {
        Self::flat("discover")
    }

    pub fn attach() -> Self {
        Self::flat("attach")
    }

    pub fn detach() -> Self {
        Self::flat("detach")
    }

    pub fn tag() -> Self {
        Self::flat("tag")
    }

    pub fn untag() -> Self {
        Self::flat("untag")
    }

    pub fn lock() -> Self {
        Self::flat("lock")
    }

    pub fn unlock() -> Self {
        Self::flat("unlock")
    }

    pub fn prolong_lock() -> Self {
        Self::flat("prolongLock")
    }

    pub fn install_cw() -> Self {
        Self::flat("installCW")
    }

    pub fn uninstall_cw() -> Self {
        Self::flat("uninstallCW")
    }

    // ----- workload and data management -----

    pub fn start() -> Self {
        Self::flat("start")
    }

    pub fn stop() -> Self {
        Self::flat("stop")
    }

    pub fn plan() -> Self {
        Self::flat("plan")
    }

    pub fn suspend() -> Self {
        Self::flat("suspend")
    }

    pub fn paused() -> Self {
        Self::flat("paused")
    }

    pub fn rescue() -> Self {
        Self::flat("rescue")
    }

    pub fn configure() -> Self {
        Self::flat("configure")
    }

    pub fn allow() -> Self {
        Self::flat("allow")
    }

    pub fn deny() -> Self {
        Self::flat("deny")
    }

    pub fn restore() -> Self {
        Self::flat("restore")
    }

    pub fn deploy() -> Self {
        Self::flat("deploy")
    }

    pub fn undeploy() -> Self {
        Self::flat("undeploy")
    }

    pub fn disable() -> Self {
        Self::flat("disable")
    }

    pub fn notify() -> Self {
        Self::flat("notify")
    }

    pub fn scan() -> Self {
        Self::flat("scan")
    }

    // ----- nested families -----

    pub fn onboard() -> OnboardAction {
        OnboardAction
    }

    pub fn security() -> SecurityAction {
        SecurityAction
    }

    pub fn update() -> UpdateAction {
        UpdateAction
    }

    pub fn terminated() -> TerminatedAction {
        TerminatedAction
    }

    /// The `move` family (`move/to`, `move/from`). Named with a trailing
    /// underscore because `move` is a Rust keyword.
    pub fn move_() -> MoveAction {
        MoveAction
    }

    /// The monitoring family. Serializes its root segment as `capture`;
    /// decode additionally accepts the `monitor/...` spelling.
    pub fn monitor() -> MonitorAction {
        MonitorAction
    }

    pub fn command() -> CommandAction {
        CommandAction
    }
}

impl fmt::Display for Action {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        self.path.fmt(f)
    }
}

impl<'de> Deserialize<'de> for Action {
    fn deserialize<D>(deserializer: D) -> Result<Self, D::Error>
    where
        D: serde::Deserializer<'de>,
    {
        let input = String::deserialize(deserializer)?;
        Action::from_path(&input).map_err(serde::de::Error::custom)
    }
}

/// Builder for the `onboard` action family.
#[derive(Debug, Clone, Copy)]
pub struct OnboardAction;

impl OnboardAction {
    pub fn azure(self) -> Action {
        Action::nested(&["onboard", "azure"])
    }
}

impl From<OnboardAction> for Action {
    fn from(_: OnboardAction) -> Self {
        Action::flat("onboard")
    }
}

/// Builder for the `security` action family.
#[derive(Debug, Clone, Copy)]
pub struct SecurityAction;

impl SecurityAction {
    pub fn unauthorized(self) -> UnauthorizedAction {
        UnauthorizedAction
    }
}

impl From<SecurityAction> for Action {
    fn from(_: SecurityAction) -> Self {
        Action::flat("security")
    }
}

/// Builder for the `security/unauthorized` action family.
#[derive(Debug, Clone, Copy)]
pub struct UnauthorizedAction;

impl UnauthorizedAction {
    pub fn permission_change(self) -> Action {
        Action::nested(&["security", "unauthorized", "permissionChange"])
    }

    pub fn network_change(self) -> Action {
        Action::nested(&["security", "unauthorized", "networkChange"])
    }
}

impl From<UnauthorizedAction> for Action {
    fn from(_: UnauthorizedAction) -> Self {
        Action::nested(&["security", "unauthorized"])
    }
}

/// Builder for the `update` action family.
#[derive(Debug, Clone, Copy)]
pub struct UpdateAction;

impl UpdateAction {
    pub fn size(self) -> Action {
        Action::nested(&["update", "size"])
    }
}

impl From<UpdateAction> for Action {
    fn from(_: UpdateAction) -> Self {
        Action::flat("update")
    }
}

/// Builder for the terminated family. The serialized root segment is
/// `terminate`; decode also accepts `terminated/...`.
#[derive(Debug, Clone, Copy)]
pub struct TerminatedAction;

impl TerminatedAction {
    pub fn instance(self) -> Action {
        Action::nested(&["terminate", "instance"])
    }

    pub fn hardware(self) -> Action {
        Action::nested(&["terminate", "hardware"])
    }
}

impl From<TerminatedAction> for Action {
    fn from(_: TerminatedAction) -> Self {
        Action::flat("terminate")
    }
}

/// Builder for the `move` action family.
#[derive(Debug, Clone, Copy)]
pub struct MoveAction;

impl MoveAction {
    pub fn to(self) -> Action {
        Action::nested(&["move", "to"])
    }

    pub fn from(self) -> Action {
        Action::nested(&["move", "from"])
    }
}

impl From<MoveAction> for Action {
    fn from(_: MoveAction) -> Self {
        Action::flat("move")
    }
}

/// Builder for the monitoring family. The serialized root segment is
/// `capture`; decode also accepts `monitor/...`.
#[derive(Debug, Clone, Copy)]
pub struct MonitorAction;

impl MonitorAction {
    pub fn start(self) -> Action {
        Action::nested(&["capture", "start"])
    }

    pub fn stop(self) -> Action {
        Action::nested(&["capture", "stop"])
    }

    pub fn update(self) -> Action {
        Action::nested(&["capture", "update"])
    }

    pub fn instance(self) -> Action {
        Action::nested(&["capture", "instance"])
    }

    pub fn hardware(self) -> Action {
        Action::nested(&["capture", "hardware"])
    }

    pub fn volume(self) -> Action {
        Action::nested(&["capture", "volume"])
    }

    pub fn checkpoint(self) -> Action {
        Action::nested(&["capture", "checkpoint"])
    }
}

impl From<MonitorAction> for Action {
    fn from(_: MonitorAction) -> Self {
        Action::flat("capture")
    }
}

/// Builder for the `command` action family.
#[derive(Debug, Clone, Copy)]
pub struct CommandAction;

impl CommandAction {
    pub fn start(self) -> Action {
        Action::nested(&["command", "start"])
    }

    pub fn create(self) -> Action {
        Action::nested(&["command", "create"])
    }

    pub fn stop(self) -> Action {
        Action::nested(&["command", "stop"])
    }

    pub fn reboot(self) -> Action {
        Action::nested(&["command", "reboot"])
    }

    pub fn delete(self) -> Action {
        Action::nested(&["command", "delete"])
    }
}

impl From<CommandAction> for Action {
    fn from(_: CommandAction) -> Self {
        Action::flat("command")
    }
}

/// Every accepted decode spelling paired with its canonical path.
/// Exposed for exhaustive round-trip testing.
#[doc(hidden)]
pub fn decode_vocabulary() -> Vec<(String, TaxonomyPath)> {
    path::enumerate(ACTION_TREE)
}
