use std::path::PathBuf;

use anyhow::Context;
use clap::{Parser, ValueEnum};

use crate::{
    constants::Weight,
    graph::{Graph, Node},
    util::{
        math::{manhattan, straight_line, DistanceUnit},
        test_graphs::{romania_geo, romania_grid},
    },
};

#[derive(Debug, Clone, Copy, PartialEq, Eq, ValueEnum)]
enum MapKind {
    Geo,
    Grid,
}

/// Estimate of the remaining cost used to guide the search
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, ValueEnum)]
pub enum HeuristicKind {
    #[default]
    Haversine,
    Manhattan,
    /// Plain uniform cost search
    None,
}

impl HeuristicKind {
    pub fn estimate<D>(self, node: &Node<D>, destination: &Node<D>, unit: DistanceUnit) -> Weight {
        match self {
            HeuristicKind::Haversine => straight_line(node, destination, unit),
            HeuristicKind::Manhattan => manhattan(node, destination),
            HeuristicKind::None => 0.0,
        }
    }
}

#[derive(Parser)]
#[command(version, about = "Find the cheapest route between two places", long_about = None)]
struct Cli {
    /// Key of the start node
    start: String,

    /// Key of the destination node
    destination: String,

    /// Built-in map of Romania to search on
    #[arg(long, value_enum, default_value_t = MapKind::Geo)]
    map: MapKind,

    /// Unit of great-circle distances. Possible values are "km" and "mi"
    #[arg(short, long, default_value = "km")]
    unit: DistanceUnit,

    /// Read nodes from a csv file (key,lat,lon) instead of a built-in map
    #[arg(long, value_name = "file", requires = "edges")]
    nodes: Option<PathBuf>,

    /// Read edges from a csv file (source,target,weight,bidir)
    #[arg(long, value_name = "file", requires = "nodes")]
    edges: Option<PathBuf>,

    #[arg(long, value_enum, default_value_t = HeuristicKind::Haversine)]
    heuristic: HeuristicKind,

    /// Print the open set before every iteration
    #[arg(short, long)]
    trace: bool,
}

#[derive(Debug, Clone, PartialEq)]
pub enum MapSource {
    RomaniaGeo,
    RomaniaGrid,
    Csv { nodes: PathBuf, edges: PathBuf },
}

#[derive(Debug, Clone, PartialEq)]
pub struct Cfg {
    pub map: MapSource,
    pub unit: DistanceUnit,
    pub heuristic: HeuristicKind,
    pub start: String,
    pub destination: String,
    pub trace: bool,
}

impl Cfg {
    pub fn load_graph(&self) -> anyhow::Result<Graph> {
        match &self.map {
            MapSource::RomaniaGeo => {
                romania_geo(self.unit).context("Failed to build geographic map of Romania")
            }
            MapSource::RomaniaGrid => {
                romania_grid().context("Failed to build grid map of Romania")
            }
            MapSource::Csv { nodes, edges } => Graph::from_csv(nodes, edges),
        }
    }

    /// Unit label for printed costs, `None` if costs carry no unit.
    pub fn cost_unit(&self) -> Option<DistanceUnit> {
        match self.map {
            MapSource::RomaniaGeo => Some(self.unit),
            _ => None,
        }
    }
}

impl Cli {
    fn into_cfg(self) -> Cfg {
        let map = match (self.nodes, self.edges) {
            (Some(nodes), Some(edges)) => MapSource::Csv { nodes, edges },
            _ => match self.map {
                MapKind::Geo => MapSource::RomaniaGeo,
                MapKind::Grid => MapSource::RomaniaGrid,
            },
        };

        Cfg {
            map,
            unit: self.unit,
            heuristic: self.heuristic,
            start: self.start,
            destination: self.destination,
            trace: self.trace,
        }
    }
}

/// Parses the process arguments, exiting with a usage message on error.
pub fn parse() -> Cfg {
    Cli::parse().into_cfg()
}

pub fn try_parse_from<I, T>(args: I) -> anyhow::Result<Cfg>
where
    I: IntoIterator<Item = T>,
    T: Into<std::ffi::OsString> + Clone,
{
    let cli = Cli::try_parse_from(args)?;
    Ok(cli.into_cfg())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn defaults() {
        let cfg = try_parse_from(["route", "Arad", "Bucharest"]).unwrap();

        assert_eq!(cfg.map, MapSource::RomaniaGeo);
        assert_eq!(cfg.unit, DistanceUnit::Kilometers);
        assert_eq!(cfg.heuristic, HeuristicKind::Haversine);
        assert_eq!(cfg.start, "Arad");
        assert_eq!(cfg.destination, "Bucharest");
        assert!(!cfg.trace);
        assert_eq!(cfg.cost_unit(), Some(DistanceUnit::Kilometers));
    }

    #[test]
    fn grid_map_without_heuristic() {
        let cfg = try_parse_from([
            "route",
            "--map",
            "grid",
            "--heuristic",
            "none",
            "--unit",
            "mi",
            "--trace",
            "Arad",
            "Bucharest",
        ])
        .unwrap();

        assert_eq!(cfg.map, MapSource::RomaniaGrid);
        assert_eq!(cfg.heuristic, HeuristicKind::None);
        assert_eq!(cfg.unit, DistanceUnit::Miles);
        assert!(cfg.trace);
        assert_eq!(cfg.cost_unit(), None);
        assert_eq!(cfg.load_graph().unwrap().count(), 20);
    }

    #[test]
    fn csv_files_override_map() {
        let dir = PathBuf::from(env!("CARGO_MANIFEST_DIR")).join("test_data");
        let nodes = dir.join("nodes.csv");
        let edges = dir.join("edges.csv");

        let args: Vec<std::ffi::OsString> = vec![
            "route".into(),
            "--map".into(),
            "grid".into(),
            "--nodes".into(),
            nodes.clone().into_os_string(),
            "--edges".into(),
            edges.clone().into_os_string(),
            "Arad".into(),
            "Depot".into(),
        ];
        let cfg = try_parse_from(args).unwrap();

        assert_eq!(cfg.map, MapSource::Csv { nodes, edges });
        assert_eq!(cfg.load_graph().unwrap().count(), 3);
    }

    #[test]
    fn reject_invalid_arguments() {
        assert!(try_parse_from(["route", "Arad"]).is_err());
        assert!(try_parse_from(["route", "--unit", "parsec", "Arad", "Sibiu"]).is_err());
        assert!(try_parse_from(["route", "--nodes", "n.csv", "Arad", "Sibiu"]).is_err());
    }

    #[test]
    fn estimates() {
        let g = romania_grid().unwrap();
        let arad = g.node_by_key("Arad").unwrap();
        let bucharest = g.node_by_key("Bucharest").unwrap();

        assert_eq!(
            HeuristicKind::Manhattan.estimate(arad, bucharest, DistanceUnit::Kilometers),
            621.0
        );
        assert_eq!(
            HeuristicKind::None.estimate(arad, bucharest, DistanceUnit::Kilometers),
            0.0
        );
        // Grid nodes have no location on earth
        assert_eq!(
            HeuristicKind::Haversine.estimate(arad, bucharest, DistanceUnit::Kilometers),
            0.0
        );
    }
}
