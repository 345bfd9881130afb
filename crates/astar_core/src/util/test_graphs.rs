use crate::{
    constants::Weight,
    error::GraphError,
    graph::Graph,
    util::math::{straight_line, DistanceUnit},
};

/// Cities of Romania with their location on earth
const CITIES_GEO: [(&str, f64, f64); 20] = [
    ("Arad", 46.1792414, 21.3150154),
    ("Bucharest", 44.4479237, 26.097879),
    ("Craiova", 44.3182085, 23.8016427),
    ("Dobreta", 44.6302374, 22.6519904),
    ("Eforie", 44.049114, 28.652727),
    ("Fagaras", 45.843342, 24.977871),
    ("Giurgiu", 43.8959986, 25.9550199),
    ("Hirsova", 44.691842, 27.951481),
    ("Iasi", 47.1569514, 27.5898533),
    ("Lugoj", 45.688011, 21.9161),
    ("Mehadia", 44.906575, 22.360437),
    ("Neamt", 47.0355965, 26.4680355),
    ("Oradea", 47.06094, 21.9276655),
    ("Pitesti", 44.858801, 24.8666793),
    ("Rimnicu Vilcea", 45.110039, 24.382641),
    ("Sibiu", 45.7931069, 24.1505932),
    ("Timisoara", 45.7479372, 21.2251759),
    ("Urziceni", 47.71996, 22.406675),
    ("Vaslui", 46.6403758, 27.7295175),
    ("Zerind", 46.6247847, 21.5170587),
];

/// Roads between the cities, weighted by great-circle distance
const ROADS_GEO: [(&str, &str); 41] = [
    ("Arad", "Sibiu"),
    ("Arad", "Timisoara"),
    ("Arad", "Zerind"),
    ("Bucharest", "Craiova"),
    ("Bucharest", "Eforie"),
    ("Bucharest", "Fagaras"),
    ("Bucharest", "Giurgiu"),
    ("Bucharest", "Hirsova"),
    ("Bucharest", "Neamt"),
    ("Bucharest", "Pitesti"),
    ("Bucharest", "Vaslui"),
    ("Craiova", "Dobreta"),
    ("Craiova", "Giurgiu"),
    ("Craiova", "Pitesti"),
    ("Craiova", "Rimnicu Vilcea"),
    ("Dobreta", "Mehadia"),
    ("Eforie", "Hirsova"),
    ("Eforie", "Giurgiu"),
    ("Fagaras", "Hirsova"),
    ("Fagaras", "Neamt"),
    ("Fagaras", "Pitesti"),
    ("Fagaras", "Sibiu"),
    ("Fagaras", "Urziceni"),
    ("Fagaras", "Vaslui"),
    ("Hirsova", "Vaslui"),
    ("Iasi", "Neamt"),
    ("Iasi", "Vaslui"),
    ("Lugoj", "Mehadia"),
    ("Lugoj", "Rimnicu Vilcea"),
    ("Lugoj", "Sibiu"),
    ("Lugoj", "Timisoara"),
    ("Lugoj", "Zerind"),
    ("Mehadia", "Rimnicu Vilcea"),
    ("Mehadia", "Timisoara"),
    ("Neamt", "Vaslui"),
    ("Neamt", "Urziceni"),
    ("Oradea", "Sibiu"),
    ("Oradea", "Urziceni"),
    ("Oradea", "Zerind"),
    ("Pitesti", "Rimnicu Vilcea"),
    ("Rimnicu Vilcea", "Sibiu"),
];

/// Cities of Romania placed on a grid map
const CITIES_GRID: [(&str, i32, i32); 20] = [
    ("Arad", 46, -114),
    ("Bucharest", 452, -329),
    ("Craiova", 257, -382),
    ("Dobreta", 143, -367),
    ("Eforie", 664, -374),
    ("Fagaras", 329, -169),
    ("Giurgiu", 418, -404),
    ("Hirsova", 627, -300),
    ("Iasi", 548, -95),
    ("Lugoj", 142, -263),
    ("Mehadia", 146, -314),
    ("Neamt", 459, -55),
    ("Oradea", 98, -9),
    ("Pitesti", 347, -278),
    ("Rimnicu Vilcea", 232, -221),
    ("Sibiu", 198, -158),
    ("Timisoara", 49, -221),
    ("Urziceni", 526, -300),
    ("Vaslui", 596, -176),
    ("Zerind", 68, -61),
];

/// Road lengths on the grid map
const ROADS_GRID: [(&str, &str, Weight); 23] = [
    ("Arad", "Zerind", 53.0),
    ("Arad", "Timisoara", 107.0),
    ("Arad", "Sibiu", 153.0),
    ("Bucharest", "Urziceni", 75.0),
    ("Bucharest", "Giurgiu", 75.0),
    ("Bucharest", "Pitesti", 105.0),
    ("Bucharest", "Fagaras", 160.0),
    ("Craiova", "Dobreta", 115.0),
    ("Craiova", "Pitesti", 106.0),
    ("Craiova", "Rimnicu Vilcea", 161.0),
    ("Dobreta", "Mehadia", 52.0),
    ("Eforie", "Hirsova", 74.0),
    ("Fagaras", "Sibiu", 132.0),
    ("Hirsova", "Urziceni", 101.0),
    ("Iasi", "Neamt", 89.0),
    ("Iasi", "Vaslui", 83.0),
    ("Lugoj", "Mehadia", 52.0),
    ("Lugoj", "Timisoara", 94.0),
    ("Oradea", "Zerind", 52.0),
    ("Oradea", "Sibiu", 150.0),
    ("Pitesti", "Rimnicu Vilcea", 114.0),
    ("Rimnicu Vilcea", "Sibiu", 63.0),
    ("Urziceni", "Vaslui", 124.0),
];

/// Romania with geographic coordinates. Every road costs the great-circle
/// distance between its cities in `unit`, so [`straight_line`] is an
/// admissible and consistent heuristic on this map.
pub fn romania_geo(unit: DistanceUnit) -> Result<Graph, GraphError> {
    let mut g = Graph::with_capacity(CITIES_GEO.len());

    for (key, lat, lon) in CITIES_GEO {
        g.add_geo_node(key, lat, lon)?;
    }

    for (a, b) in ROADS_GEO {
        let cost = straight_line(g.try_node(a)?, g.try_node(b)?, unit);
        g.add_undirected_edge(a, b, cost)?;
    }

    Ok(g)
}

/// Romania on a grid map with integer road lengths.
///
/// Road lengths are shorter than the Manhattan distance between several
/// cities, so [`manhattan`](crate::util::math::manhattan) may overestimate here.
pub fn romania_grid() -> Result<Graph, GraphError> {
    let mut g = Graph::with_capacity(CITIES_GRID.len());

    for (key, x, y) in CITIES_GRID {
        g.add_grid_node(key, x, y)?;
    }

    for (a, b, cost) in ROADS_GRID {
        g.add_undirected_edge(a, b, cost)?;
    }

    Ok(g)
}

pub fn generate_complex_graph() -> Result<Graph, GraphError> {
    let mut graph = Graph::with_capacity(11);

    let nodes = [
        ("A", 6, 2),
        ("B", 3, 3),
        ("C", 4, 6),
        ("D", 2, 7),
        ("E", 3, 10),
        ("F", 2, 13),
        ("G", 7, 15),
        ("H", 5, 12),
        ("I", 7, 11),
        ("J", 5, 9),
        ("K", 7, 7),
    ];
    for (key, x, y) in nodes {
        graph.add_grid_node(key, x, y)?;
    }

    graph.add_undirected_edge("A", "B", 3.0)?;
    graph.add_undirected_edge("A", "C", 5.0)?;
    graph.add_undirected_edge("A", "K", 3.0)?;

    graph.add_undirected_edge("B", "D", 5.0)?;
    graph.add_undirected_edge("B", "C", 3.0)?;

    graph.add_undirected_edge("C", "D", 2.0)?;
    graph.add_undirected_edge("C", "J", 2.0)?;

    graph.add_undirected_edge("D", "J", 4.0)?;
    graph.add_undirected_edge("D", "E", 7.0)?;

    graph.add_undirected_edge("E", "J", 3.0)?;
    graph.add_undirected_edge("E", "F", 6.0)?;

    graph.add_undirected_edge("F", "H", 2.0)?;
    graph.add_undirected_edge("F", "G", 4.0)?;

    graph.add_undirected_edge("G", "H", 3.0)?;
    graph.add_undirected_edge("G", "I", 5.0)?;

    graph.add_undirected_edge("H", "I", 3.0)?;
    graph.add_undirected_edge("H", "J", 2.0)?;

    graph.add_undirected_edge("I", "J", 4.0)?;
    graph.add_undirected_edge("I", "K", 6.0)?;

    graph.add_undirected_edge("J", "K", 3.0)?;

    Ok(graph)
}

pub fn generate_simple_graph() -> Result<Graph, GraphError> {
    //      B
    //    /   \
    //   A     D
    //    \   /
    //      C
    let mut g = Graph::with_capacity(4);

    for key in ["A", "B", "C", "D"] {
        g.add_plain_node(key)?;
    }

    g.add_undirected_edge("A", "B", 1.0)?;
    g.add_undirected_edge("B", "D", 5.0)?;
    g.add_undirected_edge("A", "C", 2.0)?;
    g.add_undirected_edge("C", "D", 2.0)?;

    Ok(g)
}
