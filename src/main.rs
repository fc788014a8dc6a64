//! Emblem CLI - Generate geometric emblems from initials, birth date and colour.

use anyhow::{Context, Result};
use clap::{Parser, ValueEnum};
use emblem::config::EmblemConfig;
use emblem::export::{export_file_name, ExportFormat, Exporter, Renderer, SvgRenderer};
use emblem::hasher::HashBackend;
use emblem::motifs::{MotifKind, MotifParams};
use emblem::palette::{self, ColorName};
use emblem::{Compositor, CompositorSettings, DesignEngine, UserInput};
use rand::rngs::StdRng;
use rand::{Rng, SeedableRng};
use std::fs;
use std::path::{Path, PathBuf};

#[derive(Parser)]
#[command(name = "emblem")]
#[command(about = "Generate deterministic geometric emblems from personal inputs")]
#[command(version)]
struct Cli {
    /// Config file path
    #[arg(long, default_value = "emblem.toml")]
    config: PathBuf,

    #[command(subcommand)]
    command: Commands,
}

#[derive(clap::Subcommand)]
enum Commands {
    /// Generate one emblem
    Generate {
        /// Initials (up to 6 characters)
        #[arg(short, long)]
        initials: Option<String>,

        /// Birth date, YYYY-MM-DD
        #[arg(short, long)]
        birth_date: Option<String>,

        /// Favourite colour (red, blue, green, yellow, purple, orange, pink, cyan)
        #[arg(short, long)]
        color: Option<String>,

        /// Hobbies, shown with the design only
        #[arg(long)]
        hobbies: Option<String>,

        /// Explicit grid, e.g. "3x4"
        #[arg(short, long)]
        layout: Option<String>,

        /// Read the input record from a JSON file; flags override its fields
        #[arg(long)]
        input: Option<PathBuf>,

        /// Hash backend
        #[arg(long, value_enum)]
        hash: Option<HashArg>,

        /// Output formats (comma-separated)
        #[arg(short, long, value_enum, value_delimiter = ',')]
        format: Vec<FormatArg>,

        /// Output directory
        #[arg(short, long)]
        output_dir: Option<PathBuf>,

        /// Print the design configuration as JSON
        #[arg(long)]
        json: bool,
    },

    /// Generate emblems for random sample inputs
    Showcase {
        /// Number of emblems
        #[arg(short = 'n', long, default_value = "6")]
        count: usize,

        /// Seed for consistent results
        #[arg(short = 'S', long, default_value = "42")]
        seed: u64,

        /// Hash backend
        #[arg(long, value_enum)]
        hash: Option<HashArg>,

        /// Output directory
        #[arg(short, long)]
        output_dir: Option<PathBuf>,
    },

    /// Draw every motif once, untiled
    Catalog {
        /// Complexity for every motif (1-5)
        #[arg(long, default_value = "3")]
        complexity: u8,

        /// Value for all three features (0-9)
        #[arg(long, default_value = "0")]
        features: u8,

        /// Palette colour
        #[arg(short, long, default_value = "blue")]
        color: String,

        /// Output directory
        #[arg(short, long)]
        output_dir: Option<PathBuf>,
    },
}

#[derive(Clone, Copy, ValueEnum, Debug)]
enum HashArg {
    /// SHA-256
    Sha256,
    /// 32-bit rolling hash, chained to full length
    Rolling,
}

impl HashArg {
    fn to_backend(self) -> HashBackend {
        match self {
            HashArg::Sha256 => HashBackend::Sha256,
            HashArg::Rolling => HashBackend::Rolling,
        }
    }
}

#[derive(Clone, Copy, ValueEnum, Debug)]
enum FormatArg {
    Svg,
    Png,
}

impl FormatArg {
    fn to_format(self) -> ExportFormat {
        match self {
            FormatArg::Svg => ExportFormat::Svg,
            FormatArg::Png => ExportFormat::Png,
        }
    }
}

const SAMPLE_HOBBIES: &[&str] = &[
    "climbing",
    "chess",
    "pottery",
    "sailing",
    "astronomy",
    "cycling",
];

fn main() -> Result<()> {
    tracing_subscriber::fmt()
        .with_env_filter(
            tracing_subscriber::EnvFilter::from_default_env()
                .add_directive("emblem=info".parse()?),
        )
        .with_writer(std::io::stderr)
        .init();

    let cli = Cli::parse();
    let config = EmblemConfig::load(Path::new(&cli.config))?;
    let compositor = Compositor::new(CompositorSettings::from(&config.canvas));

    match cli.command {
        Commands::Generate {
            initials,
            birth_date,
            color,
            hobbies,
            layout,
            input,
            hash,
            format,
            output_dir,
            json,
        } => {
            let mut user = match input {
                Some(path) => {
                    let raw = fs::read_to_string(&path)
                        .with_context(|| format!("reading {}", path.display()))?;
                    UserInput::from_json(&raw)
                        .with_context(|| format!("parsing {}", path.display()))?
                }
                None => UserInput::new(),
            };
            if let Some(initials) = initials {
                user = user.with_initials(&initials);
            }
            if let Some(date) = birth_date {
                user = user.with_birth_date_str(&date);
            }
            if let Some(color) = color {
                user = user.with_favorite_color(color);
            }
            if let Some(hobbies) = hobbies {
                user = user.with_hobbies(hobbies);
            }

            let backend = hash.map_or(config.hashing.backend, HashArg::to_backend);
            let engine = DesignEngine::new(backend, config.canvas.footer_text.clone())
                .with_layout(layout);
            let design = engine.design(&user);

            if json {
                println!("{}", serde_json::to_string_pretty(&design)?);
            } else {
                println!(
                    "Designing {} with {}...",
                    if user.initials().is_empty() { "emblem" } else { user.initials() },
                    backend.name()
                );
                println!("  Motif: {} (#{})", design.motif.name(), design.motif_index);
                println!(
                    "  Complexity {}, features {}/{}/{}, rotation {}°, scale {}%",
                    design.complexity,
                    design.feature1,
                    design.feature2,
                    design.feature3,
                    design.rotation,
                    design.scale_percent
                );
                println!("  Layout: {}", design.layout);
            }

            let emblem = engine.render(&design, &compositor);

            let mut output = config.output.clone();
            if let Some(dir) = output_dir {
                output.directory = dir.display().to_string();
            }
            let exporter = if format.is_empty() {
                Exporter::from_config(&output)
            } else {
                let formats: Vec<ExportFormat> = format.iter().map(|f| f.to_format()).collect();
                Exporter::new(&output.directory).with_formats(&formats, output.pixel_ratio)
            };

            for report in exporter.export_all(&emblem, user.initials()) {
                match report.result {
                    Ok(path) => eprintln!("Saved to {}", path.display()),
                    Err(err) => eprintln!("Could not export {}: {}", report.format, err),
                }
            }
        }

        Commands::Showcase {
            count,
            seed,
            hash,
            output_dir,
        } => {
            let output_dir = output_dir
                .unwrap_or_else(|| PathBuf::from(&config.output.directory).join("showcase"));
            fs::create_dir_all(&output_dir)?;

            let backend = hash.map_or(config.hashing.backend, HashArg::to_backend);
            let engine = DesignEngine::new(backend, config.canvas.footer_text.clone());
            let mut rng = StdRng::seed_from_u64(seed);
            println!("Generating {} emblems with seed {}...", count, seed);

            for i in 0..count {
                let user = sample_input(&mut rng);
                let design = engine.design(&user);
                let emblem = engine.render(&design, &compositor);

                let filename = format!("{:02}_{}", i, export_file_name(user.initials(), "svg"));
                let path = output_dir.join(&filename);
                fs::write(&path, SvgRenderer.render(&emblem)?)?;
                println!(
                    "  Created {} ({}, {}, {})",
                    filename,
                    design.motif.name(),
                    design.layout,
                    user.favorite_color().unwrap_or("blue")
                );
            }

            println!("Done! Showcase saved to {}", output_dir.display());
        }

        Commands::Catalog {
            complexity,
            features,
            color,
            output_dir,
        } => {
            let output_dir = output_dir
                .unwrap_or_else(|| PathBuf::from(&config.output.directory).join("catalog"));
            fs::create_dir_all(&output_dir)?;

            let params = MotifParams::new(complexity, features, features, features);
            let palette = palette::lookup(&color);

            for &kind in MotifKind::all() {
                let drawing = kind.draw(&params, &palette);
                let filename = format!("{:02}_{}.svg", kind.index(), kind.name());
                fs::write(output_dir.join(&filename), drawing.to_svg())?;
                println!("  Created {} ({} shapes)", filename, drawing.len());
            }

            println!("Done! Catalog saved to {}", output_dir.display());
        }
    }

    Ok(())
}

/// A random but plausible submission.
fn sample_input(rng: &mut StdRng) -> UserInput {
    let len = rng.gen_range(0..=6);
    let initials: String = (0..len)
        .map(|_| char::from(b'A' + rng.gen_range(0..26u8)))
        .collect();

    let date = format!(
        "{:04}-{:02}-{:02}",
        rng.gen_range(1950..=2010),
        rng.gen_range(1..=12),
        rng.gen_range(1..=28)
    );

    let colors = ColorName::all();
    let color = colors[rng.gen_range(0..colors.len())];
    let hobby = SAMPLE_HOBBIES[rng.gen_range(0..SAMPLE_HOBBIES.len())];

    UserInput::new()
        .with_initials(&initials)
        .with_birth_date_str(&date)
        .with_favorite_color(color.name())
        .with_hobbies(hobby)
}
