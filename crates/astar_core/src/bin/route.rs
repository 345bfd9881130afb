use astar_core::{
    graph::{Graph, Node},
    path::Path,
    priority_queue::PriorityQueue,
    search::{astar::AStar, edge_distance, route::route_legs},
    util::cli,
};

fn print_open_set(g: &Graph, queue: &PriorityQueue<Path>) {
    let entries: Vec<String> = queue
        .iter()
        .map(|(priority, path)| {
            let key = g
                .node(path.last_step())
                .map(|node| node.key.as_str())
                .unwrap_or("?");
            format!("{}({:.1})", key, priority)
        })
        .collect();
    println!("Open set [{}]: {}", queue.len(), entries.join(", "));
}

fn main() -> anyhow::Result<()> {
    env_logger::init();

    let cfg = cli::parse();
    let g = cfg.load_graph()?;
    g.print_info();

    let source = g.try_index_of(&cfg.start)?;
    let target = g.try_index_of(&cfg.destination)?;
    let dst = g.try_node(&cfg.destination)?;

    let heuristic = |node: &Node| cfg.heuristic.estimate(node, dst, cfg.unit);

    let mut astar = AStar::new(&g);
    let path = if cfg.trace {
        astar.search_traced(source, target, edge_distance, heuristic, |queue| {
            print_open_set(&g, queue)
        })
    } else {
        astar.search(source, target, edge_distance, heuristic)
    };

    match path {
        Some(path) => {
            println!("Route from {} to {}", cfg.start, cfg.destination);
            for leg in route_legs(&g, &path) {
                match cfg.cost_unit() {
                    Some(unit) => println!("{} {}", leg, unit),
                    None => println!("{}", leg),
                }
            }
        }
        None => println!("No path found from {} to {}", cfg.start, cfg.destination),
    }
    println!("{}", astar.stats);

    Ok(())
}
