//! Truckload CLI

use anyhow::{bail, Context};
use clap::{Args, Parser, Subcommand};
use std::path::PathBuf;
use truckload::core::Footprint;
use truckload::{
    Config, LayoutStats, MultiTruckSolution, Placement, SolutionRanker, Solver, TruckPacker,
};
use truckload_cli::{Catalog, CatalogParser, ExportDocument};

#[derive(Parser)]
#[command(name = "truckload")]
#[command(about = "Plan how boxes are laid out on truck floors")]
#[command(version)]
struct Cli {
    #[command(subcommand)]
    command: Commands,

    #[command(flatten)]
    packing: PackingArgs,

    /// Increase log verbosity (-v debug, -vv trace)
    #[arg(short, long, action = clap::ArgAction::Count, global = true)]
    verbose: u8,
}

#[derive(Subcommand)]
enum Commands {
    /// List the truck catalog
    Trucks {
        #[command(flatten)]
        input: InputArgs,
    },

    /// Lay out every box on one truck
    Single {
        #[command(flatten)]
        input: InputArgs,

        /// Truck id (defaults to the first truck in the catalog)
        #[arg(short, long)]
        truck: Option<String>,

        /// Output file or directory for the export document (JSON)
        #[arg(short, long)]
        output: Option<PathBuf>,
    },

    /// Split the boxes across trucks and rank the strategies
    Multi {
        #[command(flatten)]
        input: InputArgs,

        /// Rank of the solution to show in detail and export (0 = recommended)
        #[arg(short, long, default_value = "0")]
        select: usize,

        /// Output file or directory for the export document (JSON)
        #[arg(short, long)]
        output: Option<PathBuf>,
    },
}

#[derive(Args)]
struct InputArgs {
    /// Combined catalog file: {"trucks": [...], "boxes": [...]}
    #[arg(short, long)]
    catalog: Option<PathBuf>,

    /// Truck list file, replaces the catalog's trucks
    #[arg(long)]
    trucks: Option<PathBuf>,

    /// Box list file, replaces the catalog's boxes
    #[arg(long)]
    boxes: Option<PathBuf>,
}

impl InputArgs {
    fn load(&self) -> anyhow::Result<Catalog> {
        CatalogParser::new()
            .load(
                self.catalog.as_deref(),
                self.trucks.as_deref(),
                self.boxes.as_deref(),
            )
            .context("Failed to load catalog")
    }
}

#[derive(Args)]
struct PackingArgs {
    /// Minimum clearance between boxes (mm)
    #[arg(long, global = true, default_value = "50")]
    min_spacing: f64,

    /// Nominal maximum clearance between boxes (mm)
    #[arg(long, global = true, default_value = "100")]
    max_spacing: f64,

    /// How far a box may stick out past the truck edges (mm)
    #[arg(long, global = true, default_value = "100")]
    max_overhang: f64,

    /// Position grid step (mm)
    #[arg(long, global = true, default_value = "100")]
    grid_step: f64,

    /// Maximum trucks per plan
    #[arg(long, global = true, default_value = "15")]
    max_trucks: usize,

    /// Flat cost per truck
    #[arg(long, global = true, default_value = "1000")]
    truck_cost: f64,

    /// Time limit per strategy in milliseconds (0 = unlimited)
    #[arg(long, global = true, default_value = "0")]
    time_limit: u64,

    /// Evaluate trucks and strategies on one thread
    #[arg(long, global = true)]
    sequential: bool,
}

impl PackingArgs {
    fn config(&self) -> Config {
        Config::new()
            .with_min_spacing(self.min_spacing)
            .with_max_spacing(self.max_spacing)
            .with_max_overhang(self.max_overhang)
            .with_grid_step(self.grid_step)
            .with_max_trucks(self.max_trucks)
            .with_truck_unit_cost(self.truck_cost)
            .with_time_limit(self.time_limit)
            .with_parallel(!self.sequential)
    }
}

fn init_logging(verbose: u8) {
    let level = match verbose {
        0 => "warn",
        1 => "debug",
        _ => "trace",
    };
    env_logger::Builder::from_env(env_logger::Env::default().default_filter_or(level)).init();
}

fn print_stats(stats: &LayoutStats) {
    println!("  Boxes placed: {}/{}", stats.placed_boxes, stats.total_boxes);
    println!("  Unplaced:     {}", stats.unplaced_boxes);
    println!("  Utilization:  {:.1}%", stats.utilization);
    println!("  Efficiency:   {:.1}%", stats.efficiency);
    if let Some(trucks) = stats.total_trucks {
        println!("  Trucks:       {}", trucks);
    }
    if let (Some(truck), Some(used)) = (stats.truck_area_m2, stats.used_area_m2) {
        println!("  Floor used:   {:.2} of {:.2} m²", used, truck);
    }
}

fn print_placements(placements: &[Placement]) {
    for p in placements {
        println!(
            "    {:<24} at ({:>6.0}, {:>6.0})  {:>5.0} x {:<5.0}{}",
            p.instance_name,
            p.x,
            p.y,
            p.width,
            p.height,
            if p.rotated { "  rotated" } else { "" }
        );
    }
}

fn print_solution(solution: &MultiTruckSolution) {
    for truck in &solution.trucks {
        println!(
            "  {} ({} boxes, {:.1}% used, {:.2} m² free)",
            truck.truck_name, truck.box_count, truck.utilization, truck.wasted_space
        );
        print_placements(&truck.placements);
    }
    if !solution.unplaced_boxes.is_empty() {
        println!("  Unplaced:");
        for instance in &solution.unplaced_boxes {
            println!("    {}", instance.instance_name());
        }
    }
}

fn main() -> anyhow::Result<()> {
    let cli = Cli::parse();
    init_logging(cli.verbose);
    let config = cli.packing.config();

    match cli.command {
        Commands::Trucks { input } => {
            let catalog = input.load()?;

            println!("Truck Catalog:");
            println!("{:-<72}", "");
            for truck in &catalog.trucks {
                println!(
                    "  {:<4} {:<20} {:>6.0} x {:<6.0} {:>6.2} m²  {}",
                    truck.id(),
                    truck.name(),
                    truck.length(),
                    truck.width(),
                    truck.area_m2(),
                    truck.category().label()
                );
            }
        }

        Commands::Single {
            input,
            truck,
            output,
        } => {
            let catalog = input.load()?;
            let selected = match truck.as_deref() {
                Some(id) => catalog
                    .truck(id)
                    .with_context(|| format!("No truck with id '{}'", id))?,
                None => catalog
                    .trucks
                    .first()
                    .context("The truck catalog is empty")?,
            };

            let (placements, stats) = TruckPacker::new(config)
                .arrange(Some(selected), &catalog.boxes)
                .context("Single-truck layout failed")?;

            println!("{} ({:.0} x {:.0} mm):", selected.name(), selected.length(), selected.width());
            print_stats(&stats);
            print_placements(&placements);

            if let Some(path) = output {
                let doc = ExportDocument::single(
                    selected.clone(),
                    catalog.boxes.clone(),
                    placements,
                    stats,
                );
                let written = doc.save(&path)?;
                println!("Layout saved to: {}", written.display());
            }
        }

        Commands::Multi {
            input,
            select,
            output,
        } => {
            let catalog = input.load()?;
            if catalog.boxes.is_empty() {
                bail!("No boxes to load; pass --catalog or --boxes");
            }

            let ranked = SolutionRanker::new(config)
                .solve(&catalog.trucks, &catalog.boxes)
                .context("Multi-truck optimization failed")?;

            if ranked.is_empty() {
                println!("No truck in the catalog can take any of the boxes.");
                return Ok(());
            }

            println!("Strategy Ranking:");
            println!("{:-<72}", "");
            for (rank, solution) in ranked.iter().enumerate() {
                println!(
                    "  {}{} {:<16} trucks={:<3} placed={}/{:<4} util={:.1}% score={:.2} cost={:.0}",
                    rank,
                    if rank == 0 { "*" } else { " " },
                    solution.strategy_name(),
                    solution.total_trucks,
                    solution.total_boxes_placed,
                    solution.total_boxes,
                    solution.overall_utilization,
                    solution.overall_score,
                    solution.total_cost
                );
            }

            let Some(chosen) = ranked.get(select) else {
                bail!("Only {} solutions were ranked; --select {} is out of range", ranked.len(), select);
            };

            println!("\n{} plan:", chosen.strategy_name());
            print_stats(&LayoutStats::from_solution(chosen));
            print_solution(chosen);

            if let Some(path) = output {
                let doc = ExportDocument::multi(ranked, select, catalog.boxes)
                    .context("Selected solution is out of range")?;
                let written = doc.save(&path)?;
                println!("\nPlan saved to: {}", written.display());
            }
        }
    }

    Ok(())
}
