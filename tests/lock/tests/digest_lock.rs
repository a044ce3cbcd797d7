//! Digest governance lock tests.
//!
//! Proves:
//! 1. Hash domains are unique, null-terminated and follow `WAYPOINT::*::V1\0`
//! 2. The diamond route report serializes to a pinned canonical form
//! 3. The pinned report digest does not drift

use std::collections::BTreeSet;

use waypoint_harness::fixtures;
use waypoint_harness::runner::run_route;
use waypoint_kernel::proof::hash::{DOMAIN_ROUTE_REPORT, DOMAIN_SEARCH_TRACE};
use waypoint_search::AStarSearcher;

const ALL_DOMAINS: &[&[u8]] = &[DOMAIN_SEARCH_TRACE, DOMAIN_ROUTE_REPORT];

const DIAMOND_REPORT_JSON: &str = concat!(
    r#"{"cost":5.0,"path":["A","C","D","E"],"start":"A","#,
    r#""stats":{"expansions":5,"frontier_high_water":2,"refused":0,"relaxations":5},"#,
    r#""target":"E","termination_reason":"target_reached","trace_digest":null}"#,
);

const DIAMOND_REPORT_DIGEST: &str =
    "sha256:70eb543d70490132614909ac5fbcda5563a9eb9a06536f29e7858a91fa9ab686";

// ---------------------------------------------------------------------------
// 1. Domains
// ---------------------------------------------------------------------------

#[test]
fn hash_domains_unique_and_well_formed() {
    let mut seen = BTreeSet::new();
    for &domain in ALL_DOMAINS {
        let printable = String::from_utf8_lossy(domain);
        assert!(seen.insert(domain), "duplicate domain bytes: {printable}");
        assert!(domain.ends_with(&[0]), "{printable} is not null-terminated");
        assert!(
            domain.starts_with(b"WAYPOINT::"),
            "{printable} does not start with WAYPOINT::"
        );
        assert!(domain.ends_with(b"::V1\0"), "{printable} does not end with ::V1\\0");
    }
}

// ---------------------------------------------------------------------------
// 2-3. Pinned diamond report
// ---------------------------------------------------------------------------

#[test]
fn diamond_report_bytes_pinned() {
    let mut graph = fixtures::diamond();
    let mut searcher = AStarSearcher::default();
    let report = run_route(&mut graph, &mut searcher, "A", "E").unwrap();

    assert_eq!(
        String::from_utf8(report.to_canonical_json_bytes()).unwrap(),
        DIAMOND_REPORT_JSON
    );
}

#[test]
fn diamond_report_digest_pinned() {
    let mut graph = fixtures::diamond();
    let mut searcher = AStarSearcher::default();
    let report = run_route(&mut graph, &mut searcher, "A", "E").unwrap();

    assert_eq!(
        report.digest().as_str(),
        DIAMOND_REPORT_DIGEST,
        "route report digest drifted; if the report format changed on purpose, re-pin it"
    );
}
