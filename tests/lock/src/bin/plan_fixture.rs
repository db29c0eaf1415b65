//! Runs every named maze layout through the planning pipeline and prints
//! deterministic `key=value` lines for cross-process comparison.
//!
//! Usage: `plan_fixture`
//!
//! Logs go to stderr (filter with `RUST_LOG`); stdout carries only the
//! fixture lines.

use forage_harness::bundle::{PLAN, SEARCH_GRAPH};
use forage_harness::runner::run_plan;
use forage_harness::worlds::layouts;
use forage_harness::worlds::maze::MazeWorld;
use forage_search::policy::SearchPolicy;

fn main() {
    tracing_subscriber::fmt()
        .with_env_filter(
            tracing_subscriber::EnvFilter::from_default_env()
                .add_directive(tracing::Level::WARN.into()),
        )
        .with_writer(std::io::stderr)
        .init();

    let policy = SearchPolicy::default();
    for (id, text) in layouts::ALL {
        let maze = MazeWorld::parse(id, text).expect("layout parses");
        let run = run_plan(&maze, maze.start(), &policy).expect("planning run failed");

        let graph = run.bundle.artifact(SEARCH_GRAPH).expect("missing search graph");
        let graph_json: serde_json::Value =
            serde_json::from_slice(&graph.content).expect("invalid graph JSON");
        let plan = run.bundle.artifact(PLAN).expect("missing plan");
        let plan_json: serde_json::Value =
            serde_json::from_slice(&plan.content).expect("invalid plan JSON");

        let actions: Vec<&str> = plan_json["actions"]
            .as_array()
            .expect("actions array")
            .iter()
            .map(|a| a.as_str().expect("action name"))
            .collect();

        println!("[{id}]");
        println!("layout_digest={}", maze.layout_digest());
        println!("outcome={}", run.outcome.as_str());
        println!("actions={}", actions.join(","));
        println!("replay={}", run.replay.as_str());
        println!(
            "termination_reason={}",
            graph_json["metadata"]["termination_reason"]["type"]
                .as_str()
                .expect("termination reason")
        );
        println!(
            "total_expansions={}",
            graph_json["metadata"]["total_expansions"]
                .as_u64()
                .expect("total_expansions")
        );
        println!("search_graph_hash={}", graph.content_hash);
        println!("bundle_digest={}", run.bundle.digest);
    }
}
