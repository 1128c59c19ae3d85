#![deny(unsafe_code)]
//! CLI binary for swatch.
//!
//! Subcommands:
//! - `generate` — print random colors for the chosen moods
//! - `derive <color>` — print the light/dark palette for one color
//! - `export <color>...` — render saved colors in an export format
//! - `list` — print moods, export formats, and palette roles

mod error;

use std::path::{Path, PathBuf};
use std::process;
use std::time::{SystemTime, UNIX_EPOCH};

use clap::{Parser, Subcommand};
use error::CliError;
use swatch_core::color::normalize_hex;
use swatch_core::{
    derive, export_localized, generate_from_moods, ExportFormat, Language, Mode, Mood,
    PaletteBundle, Rgb, Role, Xorshift64,
};
use tracing_subscriber::EnvFilter;

/// Environment variable holding the log filter (e.g. `debug`, `swatch_core=debug`).
const LOG_ENV: &str = "SWATCH_LOG";

#[derive(Parser)]
#[command(name = "swatch", about = "Random colors and light/dark UI palettes")]
struct Cli {
    /// Output as JSON instead of human-readable text.
    #[arg(long, global = true)]
    json: bool,

    /// Log degraded-input decisions to stderr (overrides SWATCH_LOG).
    #[arg(short, long, global = true)]
    verbose: bool,

    #[command(subcommand)]
    command: Command,
}

#[derive(Subcommand)]
enum Command {
    /// Generate random colors.
    Generate {
        /// Mood to draw from; repeat to pick among several. Defaults to all moods.
        #[arg(short, long = "mood")]
        moods: Vec<String>,

        /// Number of colors to generate.
        #[arg(short = 'n', long, default_value_t = 1)]
        count: usize,

        /// PRNG seed for reproducible output. Defaults to the system clock.
        #[arg(long)]
        seed: Option<u64>,
    },
    /// Derive the light and dark palettes for a primary color.
    Derive {
        /// Primary color, `#RRGGBB` or `RRGGBB`.
        color: String,

        /// Fail on an unparseable color instead of printing the default palette.
        #[arg(long)]
        strict: bool,

        /// Label language for the table output (en, de). Ignored with --json.
        #[arg(short, long, default_value = "en")]
        lang: String,
    },
    /// Export palettes for saved colors.
    Export {
        /// Saved colors, in order. Each becomes `palette-N`.
        colors: Vec<String>,

        /// Output format (tailwind, css, scss, json, android, swiftui, figma).
        #[arg(short, long, default_value = "tailwind")]
        format: String,

        /// Message language (en, de).
        #[arg(short, long, default_value = "en")]
        lang: String,

        /// Fail on an unparseable color instead of exporting the default palette.
        #[arg(long)]
        strict: bool,

        /// Write to this file instead of stdout.
        #[arg(short, long)]
        output: Option<PathBuf>,
    },
    /// List moods, export formats, and palette roles.
    List {
        /// Label language (en, de).
        #[arg(short, long, default_value = "en")]
        lang: String,
    },
}

fn init_tracing(verbose: bool) {
    let filter = if verbose {
        EnvFilter::new("debug")
    } else {
        EnvFilter::try_from_env(LOG_ENV).unwrap_or_else(|_| EnvFilter::new("warn"))
    };
    tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_writer(std::io::stderr)
        .with_target(false)
        .init();
}

fn clock_seed() -> u64 {
    SystemTime::now()
        .duration_since(UNIX_EPOCH)
        .map(|d| d.as_nanos() as u64)
        .unwrap_or(0)
}

/// Warns about (or, with `strict`, rejects) colors that will degrade.
fn check_color(color: &str, strict: bool) -> Result<(), CliError> {
    match Rgb::from_hex(&normalize_hex(color)) {
        Ok(_) => Ok(()),
        Err(e) if strict => Err(e.into()),
        Err(_) => {
            tracing::warn!(color, "not a hex color, using the default palette");
            Ok(())
        }
    }
}

fn parse_moods(tags: &[String]) -> Result<Vec<Mood>, CliError> {
    tags.iter()
        .map(|t| t.parse::<Mood>().map_err(CliError::from))
        .collect()
}

fn write_output(path: &Path, text: &str) -> Result<(), CliError> {
    std::fs::write(path, text)
        .map_err(|e| CliError::Io(format!("failed to write {}: {e}", path.display())))
}

fn render_palette_table(color: &str, lang: Language) -> String {
    let dual = derive(color);
    let mut lines = vec![
        normalize_hex(color),
        format!(
            "{:<14}{:<16}{}",
            "",
            lang.mode_label(Mode::Light),
            lang.mode_label(Mode::Dark)
        ),
    ];
    lines.extend(Role::ALL.into_iter().map(|role| {
        format!(
            "{:<14}{:<16}{}",
            lang.role_label(role),
            dual.light.get(role).to_hex(),
            dual.dark.get(role).to_hex()
        )
    }));
    lines.join("\n")
}

fn run(cli: Cli) -> Result<(), CliError> {
    match cli.command {
        Command::Generate { moods, count, seed } => {
            let moods = parse_moods(&moods)?;
            let seed = seed.unwrap_or_else(clock_seed);
            let mut rng = Xorshift64::new(seed);
            let colors: Vec<Rgb> = (0..count)
                .map(|_| generate_from_moods(&moods, &mut rng))
                .collect();
            tracing::debug!(seed, count, "generated colors");
            if cli.json {
                let info = serde_json::json!({
                    "seed": seed,
                    "moods": moods,
                    "colors": colors,
                });
                println!("{}", serde_json::to_string_pretty(&info)?);
            } else {
                for color in colors {
                    println!("{color}");
                }
            }
        }
        Command::Derive {
            color,
            strict,
            lang,
        } => {
            let lang: Language = lang.parse()?;
            check_color(&color, strict)?;
            if cli.json {
                let info = serde_json::json!({
                    "color": normalize_hex(&color),
                    "palettes": derive(&color),
                });
                println!("{}", serde_json::to_string_pretty(&info)?);
            } else {
                println!("{}", render_palette_table(&color, lang));
            }
        }
        Command::Export {
            colors,
            format,
            lang,
            strict,
            output,
        } => {
            let format: ExportFormat = format.parse()?;
            let lang: Language = lang.parse()?;
            for color in &colors {
                check_color(color, strict)?;
            }
            let bundles = PaletteBundle::from_colors(&colors);
            let text = export_localized(&bundles, format, lang);

            match (&output, cli.json) {
                (Some(path), _) => {
                    write_output(path, &text)?;
                    if cli.json {
                        let info = serde_json::json!({
                            "format": format,
                            "palettes": bundles.len(),
                            "output": path.display().to_string(),
                        });
                        println!("{}", serde_json::to_string_pretty(&info)?);
                    } else {
                        eprintln!(
                            "exported {} palette(s) as {format} -> {}",
                            bundles.len(),
                            path.display()
                        );
                    }
                }
                (None, true) => {
                    let info = serde_json::json!({
                        "format": format,
                        "palettes": bundles.len(),
                        "content": text,
                    });
                    println!("{}", serde_json::to_string_pretty(&info)?);
                }
                (None, false) => println!("{text}"),
            }
        }
        Command::List { lang } => {
            let lang: Language = lang.parse()?;
            if cli.json {
                let info = serde_json::json!({
                    "moods": Mood::ALL,
                    "formats": ExportFormat::ALL,
                    "roles": Role::ALL.map(Role::tag),
                    "languages": Language::ALL,
                });
                println!("{}", serde_json::to_string_pretty(&info)?);
            } else {
                println!("Moods:");
                for mood in Mood::ALL {
                    println!("  {:<12}{}", mood.tag(), lang.mood_label(mood));
                }
                println!("Formats:");
                for format in ExportFormat::ALL {
                    println!("  {:<12}{}", format.tag(), lang.format_label(format));
                }
                println!("Roles:");
                for role in Role::ALL {
                    println!("  {:<12}{}", role.tag(), lang.role_label(role));
                }
            }
        }
    }

    Ok(())
}

fn main() {
    let cli = Cli::parse();
    init_tracing(cli.verbose);
    let json_mode = cli.json;
    if let Err(e) = run(cli) {
        if json_mode {
            let j = serde_json::json!({"error": e.to_string(), "exit_code": e.exit_code()});
            eprintln!("{}", serde_json::to_string_pretty(&j).unwrap_or_default());
        } else {
            eprintln!("error: {e}");
        }
        process::exit(e.exit_code());
    }
}
