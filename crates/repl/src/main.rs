//! Interactive shell to query routes on a map
use std::{path::PathBuf, time::Duration};

use astar_core::{
    graph::{node_index, Graph},
    search::{astar::AStar, edge_distance, find_route, route::route_legs},
    util::{
        math::{straight_line, DistanceUnit},
        test_graphs::romania_geo,
    },
};
use log::info;
use reedline_repl_rs::clap::{value_parser, Arg, ArgMatches, Command};
use reedline_repl_rs::{Repl, Result};

struct Context {
    graph: Graph,
    unit: DistanceUnit,
}

impl Context {
    fn new(graph: Graph, unit: DistanceUnit) -> Self {
        Self { graph, unit }
    }
}

fn key_arg<'a>(args: &'a ArgMatches, name: &str) -> &'a str {
    args.get_one::<String>(name)
        .map(String::as_str)
        .unwrap_or_default()
}

/// Print graph info
fn info(_args: ArgMatches, context: &mut Context) -> Result<Option<String>> {
    Ok(Some(format!(
        "Graph has {} nodes and {} edges",
        context.graph.count(),
        context.graph.edge_count()
    )))
}

fn cities(_args: ArgMatches, context: &mut Context) -> Result<Option<String>> {
    Ok(Some(context.graph.sorted_keys().join("\n")))
}

fn route(args: ArgMatches, context: &mut Context) -> Result<Option<String>> {
    let start = key_arg(&args, "start");
    let destination = key_arg(&args, "destination");

    let path = match find_route(&context.graph, start, destination, context.unit) {
        Ok(Some(path)) => path,
        Ok(None) => return Ok(Some(format!("No path found from {} to {}", start, destination))),
        Err(e) => return Ok(Some(format!("Error: {}", e))),
    };

    let mut out = String::new();
    for leg in route_legs(&context.graph, &path) {
        out.push_str(&format!("{} {}\n", leg, context.unit));
    }
    out.push_str(&format!("Total: {:.3} {}", path.total_cost(), context.unit));
    Ok(Some(out))
}

fn measure(args: ArgMatches, context: &mut Context) -> Result<Option<String>> {
    use rand::Rng;

    let n = *args.get_one::<usize>("n").unwrap_or(&10);
    let g = &context.graph;
    if g.count() == 0 {
        return Ok(Some("Graph is empty".to_string()));
    }

    // Select n random pairs of start and destination
    let mut rng = rand::thread_rng();
    let pairs: Vec<_> = (0..n)
        .map(|_| {
            (
                node_index(rng.gen_range(0..g.count())),
                node_index(rng.gen_range(0..g.count())),
            )
        })
        .collect();

    let mut res = String::new();
    let mut total = Duration::ZERO;
    let mut found = 0;

    let mut astar = AStar::new(g);
    for (src, dst) in pairs {
        let (Some(src_node), Some(dst_node)) = (g.node(src), g.node(dst)) else {
            continue;
        };
        let path = astar.search(src, dst, edge_distance, |node| {
            straight_line(node, dst_node, context.unit)
        });
        let duration = astar.stats.duration.unwrap_or_default();
        total += duration;

        match path {
            Some(path) => {
                found += 1;
                res.push_str(&format!(
                    "{} -> {}: {:.3} {} in {:?} ({} nodes settled)\n",
                    src_node.key,
                    dst_node.key,
                    path.total_cost(),
                    context.unit,
                    duration,
                    astar.stats.nodes_settled
                ));
            }
            None => res.push_str(&format!(
                "{} -> {}: no path in {:?}\n",
                src_node.key, dst_node.key, duration
            )),
        }
    }
    res.push_str(&format!("{}/{} routes found, took {:?}", found, n, total));

    Ok(Some(res))
}

fn load_graph() -> anyhow::Result<Graph> {
    let mut args = std::env::args().skip(1);
    match (args.next(), args.next()) {
        (Some(nodes), Some(edges)) => {
            Graph::from_csv(&PathBuf::from(nodes), &PathBuf::from(edges))
        }
        (Some(_), None) => anyhow::bail!("Usage: repl [<nodes.csv> <edges.csv>]"),
        _ => Ok(romania_geo(DistanceUnit::Kilometers)?),
    }
}

fn main() -> Result<()> {
    env_logger::init();

    let graph = match load_graph() {
        Ok(graph) => graph,
        Err(e) => {
            eprintln!("Failed to load graph: {:#}", e);
            std::process::exit(1);
        }
    };
    info!("Loaded graph with {} nodes", graph.count());
    let context = Context::new(graph, DistanceUnit::Kilometers);

    let mut repl = Repl::new(context)
        .with_name("Pathfinder")
        .with_version("v0.1.0")
        .with_description("Simple REPL to search routes with A*")
        .with_banner("Welcome to Pathfinder")
        .with_history(PathBuf::from("history"), 100)
        .with_command(Command::new("info").about("Print graph info"), info)
        .with_command(
            Command::new("cities").about("List all places in alphabetical order"),
            cities,
        )
        .with_command(
            Command::new("route")
                .arg(
                    Arg::new("start")
                        .required(true)
                        .help("Key of the start, quote keys containing spaces"),
                )
                .arg(
                    Arg::new("destination")
                        .required(true)
                        .help("Key of the destination"),
                )
                .about("Find the cheapest route using A*"),
            route,
        )
        .with_command(
            Command::new("measure")
                .arg(
                    Arg::new("n")
                        .value_parser(value_parser!(usize))
                        .required(false)
                        .help("Number of random routes to search"),
                )
                .about("Measure `n` random route searches"),
            measure,
        );

    repl.run()
}
