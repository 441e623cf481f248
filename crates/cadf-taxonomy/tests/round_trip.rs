// round_trip.rs — Exhaustive encode/decode agreement across all taxonomies.

use cadf_taxonomy::{action, resource_type, Action, Outcome, ResourceType, TaxonomyError};

#[test]
fn every_action_spelling_decodes_to_its_canonical_value() {
    for (spelling, canonical) in action::decode_vocabulary() {
        let decoded = Action::from_path(&spelling)
            .unwrap_or_else(|e| panic!("'{spelling}' should decode: {e}"));
        assert_eq!(decoded.as_str(), canonical.as_str());
        // And the canonical form round-trips to the same value.
        assert_eq!(Action::from_path(decoded.as_str()).unwrap(), decoded);
    }
}

#[test]
fn every_resource_type_spelling_decodes_to_its_canonical_value() {
    for (spelling, canonical) in resource_type::decode_vocabulary() {
        let decoded = ResourceType::from_path(&spelling)
            .unwrap_or_else(|e| panic!("'{spelling}' should decode: {e}"));
        assert_eq!(decoded.as_str(), canonical.as_str());
        assert_eq!(ResourceType::from_path(decoded.as_str()).unwrap(), decoded);
    }
}

/// The full external-facing action vocabulary, human-readable spellings
/// included.
#[test]
fn external_action_vocabulary_is_fully_supported() {
    let external = [
        "configure",
        "suspend",
        "stop",
        "plan",
        "start",
        "monitor",
        "monitor/start",
        "monitor/stop",
        "monitor/update",
        "monitor/instance",
        "monitor/hardware",
        "monitor/volume",
        "monitor/checkpoint",
        "command",
        "command/create",
        "command/start",
        "command/stop",
        "command/reboot",
        "command/delete",
        "move",
        "move/to",
        "move/from",
        "detach",
        "attach",
        "discover",
        "lose",
        "delete",
        "update",
        "update/size",
        "read",
        "create",
        "renew",
        "enable",
        "send",
        "terminated",
        "terminated/instance",
        "terminated/hardware",
        "tag",
        "untag",
        "allow",
        "deny",
        "restore",
        "deploy",
        "undeploy",
        "disable",
        "notify",
        "lock",
        "unlock",
        "prolongLock",
        "installCW",
        "scan",
        "uninstallCW",
        "onboard/azure",
        "security/unauthorized/permissionChange",
        "security/unauthorized/networkChange",
    ];
    for input in external {
        assert!(
            Action::from_path(input).is_ok(),
            "external vocabulary entry '{input}' must decode"
        );
    }
}

#[test]
fn divergent_literals_meet_in_the_same_value() {
    assert_eq!(
        Action::from_path("monitor/start").unwrap(),
        Action::from_path("capture/start").unwrap()
    );
    assert_eq!(
        Action::from_path("terminated/hardware").unwrap(),
        Action::from_path("terminate/hardware").unwrap()
    );
}

#[test]
fn plausible_but_unlisted_paths_are_rejected() {
    for input in ["monitor/delete", "command/size", "move/between", "terminated/vm"] {
        assert_eq!(
            Action::from_path(input).unwrap_err(),
            TaxonomyError::UnsupportedAction(input.to_string())
        );
    }
    assert_eq!(
        ResourceType::from_path("data/template/stack/vm").unwrap_err(),
        TaxonomyError::UnsupportedResourceType("data/template/stack/vm".to_string())
    );
}

#[test]
fn outcome_decode_never_fails() {
    assert_eq!(Outcome::from_path("success"), Outcome::Success);
    assert_eq!(Outcome::from_path("failure"), Outcome::Failure);
    assert_eq!(Outcome::from_path("pending"), Outcome::Pending);
    assert_eq!(Outcome::from_path("unknown"), Outcome::Unknown);
    assert_eq!(Outcome::from_path("monitor/start"), Outcome::Unknown);
}
