use anyhow::{Context, Result};
use clap::{ArgGroup, Parser, ValueEnum};
use csv::Writer;
use std::path::{Path, PathBuf};
use tracing_subscriber::{EnvFilter, FmtSubscriber};

use streetmap::{load_map, DistanceUnit, Graph};

#[derive(Parser, Debug)]
#[command(name = "streetmap")]
#[command(about = "Load a tab-separated road map, find directions between intersections and build its minimum spanning tree.", long_about = None)]
#[command(group(
    ArgGroup::new("action")
        .required(true)
        .multiple(true)
        .args(["show", "directions", "meridianmap"])
))]
struct Cli {
    /// Path to the map file (i/r records, tab separated)
    mapfile: PathBuf,

    /// Print a summary of the map: counts and coordinate bounds
    #[arg(long)]
    show: bool,

    /// Shortest route between two intersection ids
    #[arg(long, num_args = 2, value_names = ["START", "END"])]
    directions: Option<Vec<String>>,

    /// Minimum spanning tree (forest, if the map is disconnected) of all roads
    #[arg(long)]
    meridianmap: bool,

    /// Unit used for road lengths
    #[arg(short, long, value_enum, default_value_t = Unit::Miles)]
    unit: Unit,

    /// Write the route as CSV (step, intersection_id, latitude, longitude, distance)
    #[arg(long, requires = "directions")]
    route_csv: Option<PathBuf>,

    /// Write the spanning tree roads as CSV (road_id, start_id, end_id, weight)
    #[arg(long, requires = "meridianmap")]
    tree_csv: Option<PathBuf>,
}

#[derive(Copy, Clone, Debug, ValueEnum)]
enum Unit {
    Miles,
    Kilometers,
    Meters,
}

impl From<Unit> for DistanceUnit {
    fn from(unit: Unit) -> Self {
        match unit {
            Unit::Miles => DistanceUnit::Miles,
            Unit::Kilometers => DistanceUnit::Kilometers,
            Unit::Meters => DistanceUnit::Meters,
        }
    }
}

fn main() -> Result<()> {
    init_tracing();
    let cli = Cli::parse();

    if !cli.mapfile.exists() {
        anyhow::bail!("'{}' does not exist!", cli.mapfile.display());
    }
    let graph = load_map(&cli.mapfile, cli.unit.into())
        .with_context(|| format!("loading map {}", cli.mapfile.display()))?;

    if cli.show {
        show_summary(&graph);
    }

    if let Some(ids) = &cli.directions {
        // clap enforces exactly two values.
        directions(&graph, &ids[0], &ids[1], cli.route_csv.as_deref())?;
    }

    if cli.meridianmap {
        meridian_map(&graph, cli.tree_csv.as_deref())?;
    }

    Ok(())
}

fn show_summary(graph: &Graph) {
    println!(
        "Map: {} intersections, {} roads",
        graph.vertex_count(),
        graph.road_count()
    );
    if let Some(bounds) = graph.bounds() {
        println!(
            "Latitude: {:.6} to {:.6}",
            bounds.min_latitude, bounds.max_latitude
        );
        println!(
            "Longitude: {:.6} to {:.6}",
            bounds.min_longitude, bounds.max_longitude
        );
    }
}

fn directions(graph: &Graph, start: &str, end: &str, out: Option<&Path>) -> Result<()> {
    let unit = graph.unit().label();
    let search = graph
        .shortest_path(start, end)
        .with_context(|| format!("finding directions from {start} to {end}"))?;
    if !search.found() {
        println!("No route from {} to {}", start, end);
        return Ok(());
    }
    let route = search.path_to(graph, search.target())?;

    println!("{}", route.ids(graph).join(" -> "));
    println!("Distance: {:.2} {}", route.distance(), unit);

    if let Some(out_path) = out {
        let mut wtr = Writer::from_path(out_path)
            .with_context(|| format!("creating CSV {}", out_path.display()))?;
        wtr.write_record(["step", "intersection_id", "latitude", "longitude", "distance"])?;
        for (step, idx) in route.travel_order().enumerate() {
            let vertex = graph.vertex(idx);
            let distance = search.distance_to(idx).unwrap_or(f64::INFINITY);
            wtr.write_record(&[
                step.to_string(),
                vertex.id().to_string(),
                vertex.latitude().to_string(),
                vertex.longitude().to_string(),
                format!("{:.6}", distance),
            ])?;
        }
        wtr.flush()?;
        println!("Wrote {} route steps to {}", route.len(), out_path.display());
    }

    Ok(())
}

fn meridian_map(graph: &Graph, out: Option<&Path>) -> Result<()> {
    let unit = graph.unit().label();
    let forest = graph.minimum_spanning_forest();

    for &road_idx in forest.roads() {
        let road = graph.road(road_idx);
        let (start, end) = road.endpoints();
        println!(
            "{}: {} - {} ({:.2} {})",
            road.id(),
            graph.vertex(start).id(),
            graph.vertex(end).id(),
            road.weight(),
            unit
        );
    }
    println!(
        "Spanning {}: {} roads, total {:.2} {}",
        if forest.is_spanning_tree() { "tree" } else { "forest" },
        forest.len(),
        forest.total_weight(),
        unit
    );
    if !forest.is_spanning_tree() {
        println!("Map has {} disconnected components", forest.components());
    }

    if let Some(out_path) = out {
        let mut wtr = Writer::from_path(out_path)
            .with_context(|| format!("creating CSV {}", out_path.display()))?;
        wtr.write_record(["road_id", "start_id", "end_id", "weight"])?;
        for &road_idx in forest.roads() {
            let road = graph.road(road_idx);
            let (start, end) = road.endpoints();
            wtr.write_record(&[
                road.id().to_string(),
                graph.vertex(start).id().to_string(),
                graph.vertex(end).id().to_string(),
                format!("{:.6}", road.weight()),
            ])?;
        }
        wtr.flush()?;
        println!("Wrote {} roads to {}", forest.len(), out_path.display());
    }

    Ok(())
}

fn init_tracing() {
    let env_filter = EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("warn"));
    let subscriber = FmtSubscriber::builder()
        .with_env_filter(env_filter)
        .with_writer(std::io::stderr)
        .finish();

    let _ = tracing::subscriber::set_global_default(subscriber);
}
