use rmm_report_core::contract::{Device, Organization};

/// The directory API speaks camelCase JSON and returns far more attributes
/// than the report consumes; the model must tolerate both.
#[test]
fn test_device_deserialises_from_camel_case_payload() {
    let payload = serde_json::json!({
        "id": "d1",
        "dnsName": "host1",
        "nodeClass": "SERVER",
        "os": { "name": "Linux", "needsReboot": false, "manufacturer": "canonical" },
        "lastLoggedInUser": "alice",
        "organizationId": "org1",
        "approvalStatus": "APPROVED",
        "offline": false
    });

    let device: Device = serde_json::from_value(payload).expect("Device payload should decode");
    assert_eq!(device.id.as_deref(), Some("d1"));
    assert_eq!(device.dns_name, "host1");
    assert_eq!(device.node_class, "SERVER");
    assert_eq!(device.organization_id, "org1");
    assert_eq!(device.last_logged_in_user.as_deref(), Some("alice"));
    let os = device.os.expect("OS sub-structure should be present");
    assert_eq!(os.name.as_deref(), Some("Linux"));
    assert_eq!(os.needs_reboot, Some(false));
}

#[test]
fn test_device_decodes_with_absent_optional_attributes() {
    let payload = serde_json::json!({
        "dnsName": "host2",
        "nodeClass": "WORKSTATION",
        "organizationId": "org2"
    });

    let device: Device = serde_json::from_value(payload).expect("Sparse payload should decode");
    assert_eq!(device.id, None);
    assert_eq!(device.os, None);
    assert_eq!(device.last_logged_in_user, None);
}

#[test]
fn test_device_without_required_attributes_fails_to_decode() {
    // dnsName missing: the fetch itself should fail, not produce a half row.
    let payload = serde_json::json!({
        "id": "d3",
        "nodeClass": "SERVER",
        "organizationId": "org3"
    });

    assert!(
        serde_json::from_value::<Device>(payload).is_err(),
        "A device without dnsName must be a decode failure"
    );
}

#[test]
fn test_organization_decodes_name_and_ignores_extras() {
    let payload = serde_json::json!({
        "id": 7,
        "name": "Acme",
        "nodeApprovalMode": "AUTOMATIC"
    });

    let organization: Organization =
        serde_json::from_value(payload).expect("Organization payload should decode");
    assert_eq!(organization.name, "Acme");
}
