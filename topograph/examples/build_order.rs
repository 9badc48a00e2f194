//! Orders the steps of a small build, then shows what a cycle looks like.
//!
//! Run with:
//! ```bash
//! RUST_LOG=topograph=trace cargo run --example build_order
//! cargo run --example build_order -- --dot > build.dot
//! ```

use topograph::prelude::*;
use tracing::{error, info};
use tracing_subscriber::EnvFilter;

fn init_tracing() {
    tracing_subscriber::fmt()
        .with_env_filter(
            EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("info")),
        )
        .with_target(true)
        .with_writer(std::io::stderr)
        .init();
}

fn build_steps() -> Graph<&'static str> {
    let mut graph = Graph::new();

    graph.add_children("package", ["link", "docs"]);
    graph.add_children("link", ["compile_core", "compile_cli"]);
    graph.add_children("compile_cli", ["compile_core", "codegen"]);
    graph.add_children("compile_core", ["codegen"]);
    graph.add_children("docs", ["codegen"]);
    graph.add_child("codegen", None);
    // registered but not needed for packaging
    graph.add_child("bench", Some("compile_core"));

    graph
}

fn main() -> Result<(), Box<dyn std::error::Error>> {
    init_tracing();

    let mut graph = build_steps();

    if std::env::args().any(|arg| arg == "--dot") {
        println!("{}", graph.to_dot());
        return Ok(());
    }

    let order = graph.topological_sort(&"package")?;
    info!(steps = order.len(), "build order resolved");
    for (position, step) in order.iter().enumerate() {
        println!("{:>2}. {}", position + 1, step);
    }

    // codegen now waits on package, which transitively waits on codegen
    graph.add_child("codegen", Some("package"));
    match graph.topological_sort(&"package") {
        Ok(order) => println!("unexpected order: {:?}", order),
        Err(e) => error!("{}", e),
    }

    Ok(())
}
