/// Galaxy point cloud generator entry point
use clap::{Args, Parser, Subcommand};
use galaxy_generator::export::{ExportOptions, PointSetExporter, check_capacity};
use galaxy_generator::manifest::PointSource;
use galaxy_generator::scatter::{ScatterConfig, scatter};
use galaxy_generator::{Colour, GenerationConfig, PointSet, generate_with_rng};
use rand::SeedableRng;
use rand::rngs::StdRng;
use std::path::PathBuf;
use tracing_subscriber::EnvFilter;

#[derive(Parser)]
#[command(name = "galaxy-generator", about = "Generate and export procedural point clouds")]
struct Cli {
    #[command(subcommand)]
    command: Command,
}

#[derive(Subcommand)]
enum Command {
    /// Spiral galaxy with radial colour gradient
    Galaxy(GalaxyArgs),
    /// Uniform particle column spanning page sections
    Scatter(ScatterArgs),
}

#[derive(Args)]
struct OutputArgs {
    /// Directory receiving textures and manifest.json
    #[arg(long, short)]
    output: PathBuf,
    /// Base name for generated files
    #[arg(long, default_value = "galaxy")]
    name: String,
    /// Seed for reproducible output
    #[arg(long)]
    seed: Option<u64>,
    /// Store positions as half floats
    #[arg(long)]
    half: bool,
}

#[derive(Args)]
struct GalaxyArgs {
    /// JSON config file; flags override its values
    #[arg(long)]
    config: Option<PathBuf>,
    #[arg(long, allow_negative_numbers = true)]
    count: Option<i64>,
    #[arg(long)]
    size: Option<f32>,
    #[arg(long, allow_negative_numbers = true)]
    radius: Option<f32>,
    #[arg(long, allow_negative_numbers = true)]
    branches: Option<i64>,
    #[arg(long, allow_negative_numbers = true)]
    spin: Option<f32>,
    #[arg(long)]
    randomness: Option<f32>,
    #[arg(long)]
    randomness_power: Option<f32>,
    /// Core colour, #rrggbb
    #[arg(long)]
    inside: Option<Colour>,
    /// Rim colour, #rrggbb
    #[arg(long)]
    outside: Option<Colour>,
    /// Skip the colour gradient
    #[arg(long)]
    no_colour: bool,
    #[command(flatten)]
    output: OutputArgs,
}

#[derive(Args)]
struct ScatterArgs {
    #[arg(long, allow_negative_numbers = true)]
    count: Option<i64>,
    #[arg(long)]
    spread: Option<f32>,
    #[arg(long)]
    section_distance: Option<f32>,
    #[arg(long, allow_negative_numbers = true)]
    section_count: Option<i64>,
    /// Particle colour, #rrggbb
    #[arg(long)]
    colour: Option<Colour>,
    #[command(flatten)]
    output: OutputArgs,
}

impl GalaxyArgs {
    fn resolve_config(&self) -> Result<GenerationConfig, Box<dyn std::error::Error>> {
        let mut config = match &self.config {
            Some(path) => GenerationConfig::from_json_file(path)?,
            None => GenerationConfig::default(),
        };

        if let Some(count) = self.count {
            config.count = count;
        }
        if let Some(size) = self.size {
            config.size = size;
        }
        if let Some(radius) = self.radius {
            config.radius = radius;
        }
        if let Some(branches) = self.branches {
            config.branches = branches;
        }
        if let Some(spin) = self.spin {
            config.spin = spin;
        }
        if let Some(randomness) = self.randomness {
            config.randomness = randomness;
        }
        if let Some(power) = self.randomness_power {
            config.randomness_power = power;
        }
        if self.inside.is_some() {
            config.inside_colour = self.inside;
        }
        if self.outside.is_some() {
            config.outside_colour = self.outside;
        }
        if self.no_colour {
            config = config.without_colours();
        }

        Ok(config)
    }
}

impl ScatterArgs {
    fn resolve_config(&self) -> ScatterConfig {
        let defaults = ScatterConfig::default();
        ScatterConfig {
            count: self.count.unwrap_or(defaults.count),
            spread: self.spread.unwrap_or(defaults.spread),
            section_distance: self.section_distance.unwrap_or(defaults.section_distance),
            section_count: self.section_count.unwrap_or(defaults.section_count),
            colour: self.colour.or(defaults.colour),
        }
    }
}

fn main() -> Result<(), Box<dyn std::error::Error>> {
    tracing_subscriber::fmt()
        .with_env_filter(
            EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("info")),
        )
        .with_writer(std::io::stderr)
        .init();

    let cli = Cli::parse();

    let (point_set, source, output) = match &cli.command {
        Command::Galaxy(args) => {
            let config = args.resolve_config()?;
            println!(
                "Generating galaxy: {} points, {} branches, radius {:.2}, spin {:.2}",
                config.count, config.branches, config.radius, config.spin
            );
            check_capacity(config.count)?;
            let mut rng = create_rng(args.output.seed);
            let point_set = generate_with_rng(&config, &mut rng)?;
            (point_set, PointSource::Galaxy(config), &args.output)
        }
        Command::Scatter(args) => {
            let config = args.resolve_config();
            println!(
                "Scattering {} particles over {} sections",
                config.count, config.section_count
            );
            check_capacity(config.count)?;
            let mut rng = create_rng(args.output.seed);
            let point_set = scatter(&config, &mut rng)?;
            (point_set, PointSource::Scatter(config), &args.output)
        }
    };

    export(&point_set, source, output)
}

fn export(
    point_set: &PointSet,
    source: PointSource,
    output: &OutputArgs,
) -> Result<(), Box<dyn std::error::Error>> {
    let exporter = PointSetExporter::new(&output.output, &output.name)?;
    let manifest = exporter.export(
        point_set,
        source,
        ExportOptions {
            half_precision: output.half,
            show_progress: true,
            seed: output.seed,
        },
    )?;

    println!("Export complete: {}", output.output.display());
    manifest.print_summary();
    Ok(())
}

fn create_rng(seed: Option<u64>) -> StdRng {
    match seed {
        Some(seed) => StdRng::seed_from_u64(seed),
        None => StdRng::from_os_rng(),
    }
}
