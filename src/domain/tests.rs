use super::*;

#[test]
fn domain_decoding() {
    // Domain.List sends ids and ttls as numbers, Record.List as strings.
    let listed: Domain = serde_json::from_str(
        r#"{"id": 2238269, "name": "example.com", "ttl": 600, "min_ttl": "1", "dnspod_ns": ["f1g1ns1.dnspod.net", "f1g1ns2.dnspod.net"]}"#,
    )
    .unwrap();
    assert_eq!(listed.id.as_deref(), Some("2238269"));
    assert_eq!(listed.ttl, Some(600));
    assert_eq!(listed.min_ttl, Some(1));
    assert_eq!(listed.dnspod_ns.len(), 2);

    let embedded: Domain =
        serde_json::from_str(r#"{"id": "2238269", "ttl": "", "grade": "DP_Free"}"#).unwrap();
    assert_eq!(embedded.id.as_deref(), Some("2238269"));
    assert_eq!(embedded.ttl, None);
    assert_eq!(embedded.grade.as_deref(), Some("DP_Free"));
    assert!(embedded.dnspod_ns.is_empty());
}

#[test]
fn bad_numeric_string_fails() {
    assert!(serde_json::from_str::<Domain>(r#"{"ttl": "ten"}"#).is_err());
}

#[test]
fn domain_list_decoding() {
    let resp: DomainListResponse = serde_json::from_str(
        r#"{
            "status": {"code": "1", "message": "Action completed successful"},
            "info": {"domain_total": 2, "all_total": "2", "mine_total": 2},
            "domains": [{"id": 1, "name": "example.com"}, {"id": 2, "name": "example.org"}]
        }"#,
    )
    .unwrap();

    assert!(resp.status.unwrap().is_ok());
    let info = resp.info.unwrap();
    assert_eq!(info.domain_total, Some(2));
    assert_eq!(info.all_total, Some(2));
    assert_eq!(info.lock_total, None);
    assert_eq!(resp.domains[1].name.as_deref(), Some("example.org"));
}

#[test]
fn list_options_wire_names() {
    let opt = serde_json::to_value(ListDomainsOptions {
        type_: Some("mine".to_string()),
        length: Some(10),
        ..Default::default()
    })
    .unwrap();

    assert_eq!(opt["type"], "mine");
    assert_eq!(opt["length"], 10);
    assert!(opt["offset"].is_null());
}
