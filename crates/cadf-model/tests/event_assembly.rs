// event_assembly.rs — End-to-end assembly of audit events from taxonomy
// values and value objects.

use cadf_model::{
    identifier, time, Attachment, AuditEvent, Credential, EventType, Measurement, Metric,
    Resource, Tag, ValidationError, EVENT_TYPE_URI,
};
use cadf_taxonomy::{Action, Outcome, ResourceType};
use chrono::{TimeZone, Utc};

fn observer() -> Resource {
    Resource::builder()
        .id("audit-service")
        .unwrap()
        .of_type(ResourceType::service().platform())
        .name("audit collector")
        .unwrap()
        .build()
        .unwrap()
}

#[test]
fn activity_event_with_credential_and_tags() {
    let initiator = Resource::builder()
        .id(identifier::generate("maestro2"))
        .unwrap()
        .of_type(ResourceType::data().security().account().user())
        .name("jdoe")
        .unwrap()
        .credential(
            Credential::from_text("session-token-1")
                .unwrap()
                .with_authority("http://example.com/sts")
                .into_any()
                .unwrap(),
        )
        .build()
        .unwrap();

    let target = Resource::builder()
        .id("vm-42")
        .unwrap()
        .of_type(ResourceType::compute().machine().vm())
        .build()
        .unwrap();

    let event_time = time::format_event_time(&Utc.with_ymd_and_hms(2024, 3, 5, 9, 30, 0).unwrap());
    let event = AuditEvent::builder()
        .id("evt-100")
        .unwrap()
        .event_type(EventType::Activity)
        .event_time(&event_time)
        .unwrap()
        .action(Action::command().reboot())
        .outcome(Outcome::Success)
        .initiator(initiator)
        .target(target)
        .observer(observer())
        .tags(vec![Tag::builder().name("plan").value("10").build().unwrap()])
        .build()
        .unwrap();

    assert_eq!(event.action().as_str(), "command/reboot");
    assert_eq!(event.event_time(), "2024-03-05T09:30:00.000+00:00");
    assert_eq!(event.tags().unwrap()[0].canonical(), "plan?value=10");
    assert!(event.initiator().credential().is_some());
}

#[test]
fn monitor_event_carries_measurements() {
    let vm = Resource::builder()
        .id("vm-42")
        .unwrap()
        .of_type(ResourceType::compute().machine().vm())
        .build()
        .unwrap();

    let metric = Metric::builder()
        .metric_id("cpu-util")
        .unwrap()
        .unit("%")
        .unwrap()
        .name("CPU utilization")
        .build()
        .unwrap();

    let measurement = Measurement::<f64>::builder()
        .result(87.5)
        .metric(metric)
        .unwrap()
        .build()
        .unwrap()
        .into_any()
        .unwrap();

    let event = AuditEvent::builder()
        .id("evt-101")
        .unwrap()
        .event_type(EventType::Monitor)
        .event_time("2024-03-05T09:31:00.000+00:00")
        .unwrap()
        .action(Action::monitor().instance())
        .outcome(Outcome::Success)
        .initiator(vm.clone())
        .target(vm.clone())
        .observer(vm)
        .measurements(vec![measurement])
        .build()
        .unwrap();

    assert_eq!(event.action().as_str(), "capture/instance");
    let measurements = event.measurements().unwrap();
    assert_eq!(measurements.len(), 1);
    assert_eq!(
        measurements[0].metric().unwrap().metric_id(),
        "cpu-util"
    );
    // Decoding the serialized action resolves back to the built value.
    assert_eq!(
        Action::from_path(event.action().as_str()).unwrap(),
        Action::monitor().instance()
    );
}

#[test]
fn resource_attachments_qualify_their_type_uri() {
    let volume = Resource::builder()
        .id("vol-7")
        .unwrap()
        .of_type(ResourceType::storage().volume())
        .name("scratch")
        .unwrap()
        .build()
        .unwrap();

    let attachment = Attachment::of_resource(&volume).into_any().unwrap();
    assert_eq!(
        attachment.content_type(),
        "http://schemas.dmtf.org/cloud/audit/1.0/resource/storage/volume"
    );

    let vm = Resource::builder()
        .id("vm-42")
        .unwrap()
        .of_type(ResourceType::compute().machine().vm())
        .attachments(vec![attachment])
        .build()
        .unwrap();
    assert_eq!(vm.attachments().unwrap().len(), 1);
}

#[test]
fn wire_shape_matches_the_cadf_schema() {
    let vm = Resource::builder()
        .id("vm-42")
        .unwrap()
        .of_type(ResourceType::compute().machine().vm())
        .build()
        .unwrap();

    let event = AuditEvent::builder()
        .id("evt-102")
        .unwrap()
        .event_type(EventType::Control)
        .event_time("2024-03-05T09:32:00.000+00:00")
        .unwrap()
        .action(Action::security().unauthorized().permission_change())
        .outcome(Outcome::Failure)
        .initiator(vm.clone())
        .target(vm.clone())
        .observer(observer())
        .severity("CRITICAL")
        .build()
        .unwrap();

    let json = serde_json::to_value(&event).unwrap();
    assert_eq!(json["typeURI"], EVENT_TYPE_URI);
    assert_eq!(json["eventType"], "control");
    assert_eq!(json["action"], "security/unauthorized/permissionChange");
    assert_eq!(json["outcome"], "failure");
    assert_eq!(json["target"]["typeURI"], "compute/machine/vm");
    assert_eq!(json["severity"], "CRITICAL");

    let back: AuditEvent = serde_json::from_value(json).unwrap();
    assert_eq!(back, event);
}

#[test]
fn partial_builders_never_produce_an_event() {
    let result = AuditEvent::builder()
        .id("evt-103")
        .unwrap()
        .event_type(EventType::Activity)
        .event_time("2024-03-05T09:33:00.000+00:00")
        .unwrap()
        .action(Action::create())
        .outcome(Outcome::Pending)
        .build();
    assert!(matches!(
        result,
        Err(ValidationError::Missing {
            field: "event initiator"
        })
    ));
}
