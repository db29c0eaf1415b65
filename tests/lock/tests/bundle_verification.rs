//! Bundle integrity: clean runs verify, tampered artifacts are caught.

use forage_harness::bundle::{
    verify_bundle, verify_plan_actions, BundleError, PLAN, REPLAY_REPORT, SEARCH_GRAPH,
};
use forage_harness::runner::{run_plan, PlanRun};
use forage_harness::worlds::layouts;
use forage_harness::worlds::maze::MazeWorld;
use forage_search::policy::SearchPolicy;
use lock_tests::bundle_test_helpers::{
    rebuild_with_artifact, rebuild_with_modified_json, rebuild_without_artifact,
};

fn small_room_run() -> PlanRun {
    let maze = MazeWorld::parse("small_room", layouts::SMALL_ROOM).unwrap();
    run_plan(&maze, maze.start(), &SearchPolicy::default()).unwrap()
}

#[test]
fn every_layout_bundle_verifies() {
    for (id, text) in layouts::ALL {
        let maze = MazeWorld::parse(id, text).unwrap();
        let run = run_plan(&maze, maze.start(), &SearchPolicy::default()).unwrap();
        verify_bundle(&run.bundle).unwrap_or_else(|e| panic!("{id}: {e}"));
        assert_eq!(run.bundle.artifacts.len(), 3);
        assert!(run.bundle.artifacts.values().all(|a| a.normative));
    }
}

#[test]
fn graph_artifact_matches_search_graph_digest_input() {
    let run = small_room_run();
    let graph: serde_json::Value =
        serde_json::from_slice(&run.bundle.artifact(SEARCH_GRAPH).unwrap().content).unwrap();
    assert_eq!(graph["metadata"]["world_id"], "small_room");
    assert_eq!(graph["metadata"]["termination_reason"]["type"], "goal_reached");
}

#[test]
fn replay_report_records_goal() {
    let run = small_room_run();
    let report: serde_json::Value =
        serde_json::from_slice(&run.bundle.artifact(REPLAY_REPORT).unwrap().content).unwrap();
    assert_eq!(report["replay"]["verdict"], "goal_reached");
}

#[test]
fn policy_digest_tamper_detected() {
    let run = small_room_run();
    let tampered = rebuild_with_modified_json(&run.bundle, PLAN, |plan| {
        plan["policy_digest"] = serde_json::json!("sha256:00");
    });
    assert_ne!(tampered.digest, run.bundle.digest);
    assert_eq!(
        verify_bundle(&tampered),
        Err(BundleError::BindingMismatch {
            field: "policy_digest",
            left: PLAN,
            right: SEARCH_GRAPH,
        })
    );
}

#[test]
fn world_id_tamper_detected() {
    let run = small_room_run();
    let tampered = rebuild_with_modified_json(&run.bundle, SEARCH_GRAPH, |graph| {
        graph["metadata"]["world_id"] = serde_json::json!("elsewhere");
    });
    assert!(matches!(
        verify_bundle(&tampered),
        Err(BundleError::BindingMismatch {
            field: "world_id",
            ..
        })
    ));
}

#[test]
fn missing_plan_field_detected() {
    let run = small_room_run();
    let tampered = rebuild_with_modified_json(&run.bundle, PLAN, |plan| {
        plan.as_object_mut().unwrap().remove("world_id");
    });
    assert_eq!(
        verify_bundle(&tampered),
        Err(BundleError::MissingField {
            artifact: PLAN,
            field: "world_id",
        })
    );
}

#[test]
fn plan_actions_match_search_outcome() {
    let run = small_room_run();
    let decoded = verify_plan_actions(&run.bundle).unwrap().unwrap();
    assert_eq!(decoded.as_slice(), run.outcome.actions());
}

#[test]
fn unknown_plan_action_detected() {
    let run = small_room_run();
    let tampered = rebuild_with_modified_json(&run.bundle, PLAN, |plan| {
        plan["actions"][0] = serde_json::json!("up");
    });
    assert_eq!(
        verify_bundle(&tampered),
        Err(BundleError::UnknownAction {
            artifact: PLAN,
            name: "up".into(),
        })
    );
}

#[test]
fn plan_len_tamper_detected() {
    let run = small_room_run();
    let tampered = rebuild_with_modified_json(&run.bundle, PLAN, |plan| {
        plan["plan_len"] = serde_json::json!(0);
    });
    assert!(matches!(
        verify_bundle(&tampered),
        Err(BundleError::PlanLengthMismatch { declared: 0, .. })
    ));
}

#[test]
fn dropping_graph_changes_digest_but_still_verifies() {
    let run = small_room_run();
    let without = rebuild_without_artifact(&run.bundle, SEARCH_GRAPH);
    verify_bundle(&without).unwrap();
    assert_ne!(without.digest, run.bundle.digest);
}

#[test]
fn observational_notes_leave_digest_alone() {
    let run = small_room_run();
    let with_notes = rebuild_with_artifact(&run.bundle, "notes.txt", b"hello".to_vec(), false);
    verify_bundle(&with_notes).unwrap();
    assert_eq!(with_notes.digest, run.bundle.digest);
    assert_ne!(with_notes.manifest, run.bundle.manifest);
}

#[test]
fn swapped_content_without_rehash_detected() {
    let mut bundle = small_room_run().bundle;
    let replay = bundle.artifacts.get(REPLAY_REPORT).unwrap().content.clone();
    bundle.artifacts.get_mut(PLAN).unwrap().content = replay;
    assert!(matches!(
        verify_bundle(&bundle),
        Err(BundleError::ContentHashMismatch { .. })
    ));
}
