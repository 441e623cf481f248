// resource_type.rs — The closed CADF resource type taxonomy.
//
// Deepest tree in the system. The vocabulary is FINAL at the top level;
// additions go through the tree below. `data/template` is special: its
// `stack` child may descend into itself, so `data/template/stack/stack/...`
// is valid at any depth. That one family rules out a finite decode table,
// so resource decoding walks the tree instead (same static tree the
// builders encode from, so the vocabularies still cannot drift).

use std::fmt;

use serde::{Deserialize, Serialize};

use crate::error::TaxonomyError;
use crate::path::{self, Node, TaxonomyPath};

static RESOURCE_TYPE_TREE: &[Node] = &[
    Node::leaf("unknown"),
    Node::leaf("system"),
    Node::leaf("private_agent"),
    Node::internal(
        "compute",
        &[Node::internal(
            "machine",
            &[Node::leaf("vm"), Node::leaf("hw")],
        )],
    ),
    Node::internal(
        "storage",
        &[
            Node::leaf("checkpoint"),
            Node::leaf("volume"),
            Node::leaf("database"),
        ],
    ),
    Node::internal(
        "data",
        &[
            Node::leaf("zone"),
            Node::leaf("image"),
            Node::internal("template", &[Node::re_entrant("stack")]),
            Node::internal(
                "security",
                &[
                    Node::internal(
                        "account",
                        &[Node::leaf("user"), Node::leaf("admin"), Node::leaf("access")],
                    ),
                    Node::internal(
                        "iam",
                        &[
                            Node::leaf("user"),
                            Node::leaf("group"),
                            Node::leaf("role"),
                            Node::leaf("policy"),
                        ],
                    ),
                    Node::internal(
                        "network",
                        &[Node::leaf("securityGroup"), Node::leaf("prefixList")],
                    ),
                ],
            ),
        ],
    ),
    Node::internal(
        "service",
        &[
            Node::leaf("platform"),
            Node::internal("oss", &[Node::leaf("stack")]),
            Node::internal(
                "composition",
                &[Node::internal("orchestration", &[Node::leaf("schedule")])],
            ),
            Node::internal(
                "bss",
                &[
                    Node::leaf("location"),
                    Node::internal("scope", &[Node::leaf("project")]),
                ],
            ),
        ],
    ),
];

/// A CADF resource type classification — one member of the closed
/// resource taxonomy.
///
/// Obtained through the typed builder chain
/// (`ResourceType::compute().machine().vm()`) or by decoding a path string
/// with [`ResourceType::from_path`]. Equality and hashing are by path
/// value.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize)]
#[serde(transparent)]
pub struct ResourceType {
    path: TaxonomyPath,
}

impl ResourceType {
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

    /// The canonical taxonomy path of this resource type.
    pub fn path(&self) -> &TaxonomyPath {
        &self.path
    }

    /// The canonical path as a string slice.
    pub fn as_str(&self) -> &str {
        self.path.as_str()
    }

    /// Decode a path string into the resource type it names.
    ///
    /// Walks the taxonomy tree; either the whole input resolves to one
    /// node or decoding fails with the input attached.
    pub fn from_path(input: &str) -> Result<Self, TaxonomyError> {
        match path::resolve(RESOURCE_TYPE_TREE, input) {
            Some(path) => Ok(Self { path }),
            None => {
                tracing::debug!(path = input, "unsupported resource type path");
                Err(TaxonomyError::UnsupportedResourceType(input.to_string()))
            }
        }
    }

    pub fn unknown() -> Self {
        Self::flat("unknown")
    }

    pub fn system() -> Self {
        Self::flat("system")
    }

    pub fn private_agent() -> Self {
        Self::flat("private_agent")
    }

    pub fn compute() -> ComputeType {
        ComputeType
    }

    pub fn storage() -> StorageType {
        StorageType
    }

    pub fn data() -> DataType {
        DataType
    }

    pub fn service() -> ServiceType {
        ServiceType
    }
}

impl fmt::Display for ResourceType {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        self.path.fmt(f)
    }
}

impl<'de> Deserialize<'de> for ResourceType {
    fn deserialize<D>(deserializer: D) -> Result<Self, D::Error>
    where
        D: serde::Deserializer<'de>,
    {
        let input = String::deserialize(deserializer)?;
        ResourceType::from_path(&input).map_err(serde::de::Error::custom)
    }
}

/// Builder for the `compute` subtree.
#[derive(Debug, Clone, Copy)]
pub struct ComputeType;

impl ComputeType {
    pub fn machine(self) -> MachineType {
        MachineType
    }
}

impl From<ComputeType> for ResourceType {
    fn from(_: ComputeType) -> Self {
        ResourceType::flat("compute")
    }
}

/// Builder for the `compute/machine` subtree.
#[derive(Debug, Clone, Copy)]
pub struct MachineType;

impl MachineType {
    pub fn vm(self) -> ResourceType {
        ResourceType::nested(&["compute", "machine", "vm"])
    }

    pub fn hw(self) -> ResourceType {
        ResourceType::nested(&["compute", "machine", "hw"])
    }
}

impl From<MachineType> for ResourceType {
    fn from(_: MachineType) -> Self {
        ResourceType::nested(&["compute", "machine"])
    }
}

/// Builder for the `storage` subtree.
#[derive(Debug, Clone, Copy)]
pub struct StorageType;

impl StorageType {
    pub fn checkpoint(self) -> ResourceType {
        ResourceType::nested(&["storage", "checkpoint"])
    }

    pub fn volume(self) -> ResourceType {
        ResourceType::nested(&["storage", "volume"])
    }

    pub fn database(self) -> ResourceType {
        ResourceType::nested(&["storage", "database"])
    }
}

impl From<StorageType> for ResourceType {
    fn from(_: StorageType) -> Self {
        ResourceType::flat("storage")
    }
}

/// Builder for the `data` subtree.
#[derive(Debug, Clone, Copy)]
pub struct DataType;

impl DataType {
    pub fn zone(self) -> ResourceType {
        ResourceType::nested(&["data", "zone"])
    }

    pub fn image(self) -> ResourceType {
        ResourceType::nested(&["data", "image"])
    }

    pub fn template(self) -> TemplateType {
        TemplateType {
            path: TaxonomyPath::from_segments(&["data", "template"]),
        }
    }

    pub fn security(self) -> DataSecurityType {
        DataSecurityType
    }
}

impl From<DataType> for ResourceType {
    fn from(_: DataType) -> Self {
        ResourceType::flat("data")
    }
}

/// Builder for `data/template`, the one re-entrant node in the taxonomy.
///
/// Each `stack()` call appends another `stack` segment, so this builder
/// carries its accumulated path instead of being zero-sized like the rest.
#[derive(Debug, Clone)]
pub struct TemplateType {
    path: TaxonomyPath,
}

impl TemplateType {
    pub fn stack(self) -> TemplateType {
        TemplateType {
            path: self.path.child("stack"),
        }
    }
}

impl From<TemplateType> for ResourceType {
    fn from(template: TemplateType) -> Self {
        ResourceType {
            path: template.path,
        }
    }
}

/// Builder for the `data/security` subtree.
#[derive(Debug, Clone, Copy)]
pub struct DataSecurityType;

impl DataSecurityType {
    pub fn account(self) -> AccountType {
        AccountType
    }

    pub fn iam(self) -> IamType {
        IamType
    }

    pub fn network(self) -> NetworkType {
        NetworkType
    }
}

impl From<DataSecurityType> for ResourceType {
    fn from(_: DataSecurityType) -> Self {
        ResourceType::nested(&["data", "security"])
    }
}

/// Builder for the `data/security/account` subtree.
#[derive(Debug, Clone, Copy)]
pub struct AccountType;

impl AccountType {
    pub fn user(self) -> ResourceType {
        ResourceType::nested(&["data", "security", "account", "user"])
    }

    pub fn admin(self) -> ResourceType {
        ResourceType::nested(&["data", "security", "account", "admin"])
    }

    pub fn access(self) -> ResourceType {
        ResourceType::nested(&["data", "security", "account", "access"])
    }
}

impl From<AccountType> for ResourceType {
    fn from(_: AccountType) -> Self {
        ResourceType::nested(&["data", "security", "account"])
    }
}

/// Builder for the `data/security/iam` subtree.
#[derive(Debug, Clone, Copy)]
pub struct IamType;

impl IamType {
    pub fn user(self) -> ResourceType {
        ResourceType::nested(&["data", "security", "iam", "user"])
    }

    pub fn group(self) -> ResourceType {
        ResourceType::nested(&["data", "security", "iam", "group"])
    }

    pub fn role(self) -> ResourceType {
        ResourceType::nested(&["data", "security", "iam", "role"])
    }

    pub fn policy(self) -> ResourceType {
        ResourceType::nested(&["data", "security", "iam", "policy"])
    }
}

impl From<IamType> for ResourceType {
    fn from(_: IamType) -> Self {
        ResourceType::nested(&["data", "security", "iam"])
    }
}

/// Builder for the `data/security/network` subtree.
#[derive(Debug, Clone, Copy)]
pub struct NetworkType;

impl NetworkType {
    pub fn security_group(self) -> ResourceType {
        ResourceType::nested(&["data", "security", "network", "securityGroup"])
    }

    pub fn prefix_list(self) -> ResourceType {
        ResourceType::nested(&["data", "security", "network", "prefixList"])
    }
}

impl From<NetworkType> for ResourceType {
    fn from(_: NetworkType) -> Self {
        ResourceType::nested(&["data", "security", "network"])
    }
}

/// Builder for the `service` subtree.
#[derive(Debug, Clone, Copy)]
pub struct ServiceType;

impl ServiceType {
    pub fn platform(self) -> ResourceType {
        ResourceType::nested(&["service", "platform"])
    }

    pub fn oss(self) -> OssType {
        OssType
    }

    pub fn composition(self) -> CompositionType {
        CompositionType
    }

    /// Business Support Services.
    pub fn bss(self) -> BssType {
        BssType
    }
}

impl From<ServiceType> for ResourceType {
    fn from(_: ServiceType) -> Self {
        ResourceType::flat("service")
    }
}

/// Builder for the `service/oss` subtree.
#[derive(Debug, Clone, Copy)]
pub struct OssType;

impl OssType {
    pub fn stack(self) -> ResourceType {
        ResourceType::nested(&["service", "oss", "stack"])
    }
}

impl From<OssType> for ResourceType {
    fn from(_: OssType) -> Self {
        ResourceType::nested(&["service", "oss"])
    }
}

/// Builder for the `service/composition` subtree.
#[derive(Debug, Clone, Copy)]
pub struct CompositionType;

impl CompositionType {
    pub fn orchestration(self) -> OrchestrationType {
        OrchestrationType
    }
}

impl From<CompositionType> for ResourceType {
    fn from(_: CompositionType) -> Self {
        ResourceType::nested(&["service", "composition"])
    }
}

/// Builder for the `service/composition/orchestration` subtree.
#[derive(Debug, Clone, Copy)]
pub struct OrchestrationType;

impl OrchestrationType {
    pub fn schedule(self) -> ResourceType {
        ResourceType::nested(&["service", "composition", "orchestration", "schedule"])
    }
}

impl From<OrchestrationType> for ResourceType {
    fn from(_: OrchestrationType) -> Self {
        ResourceType::nested(&["service", "composition", "orchestration"])
    }
}

/// Builder for the `service/bss` subtree.
///
/// Business services that manage the location, scoping, and similar
/// bookkeeping of cloud resources.
#[derive(Debug, Clone, Copy)]
pub struct BssType;

impl BssType {
    pub fn location(self) -> ResourceType {
        ResourceType::nested(&["service", "bss", "location"])
    }

    pub fn scope(self) -> ScopeType {
        ScopeType
    }
}

impl From<BssType> for ResourceType {
    fn from(_: BssType) -> Self {
        ResourceType::nested(&["service", "bss"])
    }
}

/// Builder for the `service/bss/scope` subtree.
#[derive(Debug, Clone, Copy)]
pub struct ScopeType;

impl ScopeType {
    pub fn project(self) -> ResourceType {
        ResourceType::nested(&["service", "bss", "scope", "project"])
    }
}

impl From<ScopeType> for ResourceType {
    fn from(_: ScopeType) -> Self {
        ResourceType::nested(&["service", "bss", "scope"])
    }
}

/// Every decode spelling paired with its canonical path (re-entrant nodes
/// listed once). Exposed for exhaustive round-trip testing.
#[doc(hidden)]
pub fn decode_vocabulary() -> Vec<(String, TaxonomyPath)> {
    path::enumerate(RESOURCE_TYPE_TREE)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn builder_chain_encodes_nested_paths() {
        assert_eq!(ResourceType::compute().machine().vm().as_str(), "compute/machine/vm");
        assert_eq!(ResourceType::compute().machine().hw().as_str(), "compute/machine/hw");
        assert_eq!(ResourceType::storage().volume().as_str(), "storage/volume");
        assert_eq!(
            ResourceType::data().security().iam().role().as_str(),
            "data/security/iam/role"
        );
        assert_eq!(
            ResourceType::data().security().network().security_group().as_str(),
            "data/security/network/securityGroup"
        );
        assert_eq!(
            ResourceType::service().composition().orchestration().schedule().as_str(),
            "service/composition/orchestration/schedule"
        );
        assert_eq!(
            ResourceType::service().bss().scope().project().as_str(),
            "service/bss/scope/project"
        );
        assert_eq!(ResourceType::private_agent().as_str(), "private_agent");
    }

    #[test]
    fn internal_nodes_convert_into_resource_types() {
        assert_eq!(ResourceType::from(ResourceType::compute()).as_str(), "compute");
        assert_eq!(
            ResourceType::from(ResourceType::compute().machine()).as_str(),
            "compute/machine"
        );
        assert_eq!(
            ResourceType::from(ResourceType::data().security()).as_str(),
            "data/security"
        );
    }

    #[test]
    fn template_stack_is_re_entrant() {
        let once: ResourceType = ResourceType::data().template().stack().into();
        assert_eq!(once.as_str(), "data/template/stack");

        let thrice: ResourceType =
            ResourceType::data().template().stack().stack().stack().into();
        assert_eq!(thrice.as_str(), "data/template/stack/stack/stack");
    }

    #[test]
    fn decode_round_trips_builder_values() {
        let values: Vec<ResourceType> = vec![
            ResourceType::unknown(),
            ResourceType::system(),
            ResourceType::compute().machine().vm(),
            ResourceType::data().security().account().access(),
            ResourceType::data().template().stack().stack().into(),
            ResourceType::service().oss().stack(),
            ResourceType::service().bss().location(),
        ];
        for value in values {
            assert_eq!(ResourceType::from_path(value.as_str()).unwrap(), value);
        }
    }

    #[test]
    fn decode_follows_arbitrary_stack_depth() {
        let decoded = ResourceType::from_path("data/template/stack/stack").unwrap();
        assert_eq!(decoded.as_str(), "data/template/stack/stack");
        // `stack` only transitions to itself or terminates.
        assert!(ResourceType::from_path("data/template/stack/vm").is_err());
    }

    #[test]
    fn decode_rejects_unlisted_paths() {
        for input in [
            "compute/machine/container",
            "storage/bucket",
            "data/security/iam/bucket",
            "service/oss/stack/stack",
            "privateAgent",
            "",
        ] {
            let err = ResourceType::from_path(input).unwrap_err();
            assert_eq!(
                err,
                TaxonomyError::UnsupportedResourceType(input.to_string())
            );
        }
    }

    #[test]
    fn every_enumerated_spelling_round_trips() {
        for (spelling, canonical) in decode_vocabulary() {
            let decoded = ResourceType::from_path(&spelling).expect("spelling decodes");
            assert_eq!(decoded.as_str(), canonical.as_str());
        }
    }

    #[test]
    fn serde_round_trip_validates_on_deserialize() {
        let vm = ResourceType::compute().machine().vm();
        let json = serde_json::to_string(&vm).unwrap();
        assert_eq!(json, "\"compute/machine/vm\"");
        let back: ResourceType = serde_json::from_str(&json).unwrap();
        assert_eq!(back, vm);
        assert!(serde_json::from_str::<ResourceType>("\"compute/rack\"").is_err());
    }
}
