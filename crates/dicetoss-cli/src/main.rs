//! Dice Toss CLI
//!
//! Headless access to the roll tracker: resolve an orientation, replay a
//! recorded angular-speed trace, inspect the angle tables, or sample random
//! orientations.

use clap::{Parser, Subcommand};
use colored::Colorize;
use rand::rngs::StdRng;
use rand::{Rng, SeedableRng};
use serde::Serialize;
use std::collections::BTreeMap;
use std::path::PathBuf;

use dicetoss_core::{
    nearest_face, resolve, EulerAngles, MotionState, RollOutcome, RollSettings, RollableObject,
    RollableVariant, SampledBody, UNKNOWN_FACE,
};

/// Dice Toss - settle detection and face resolution
#[derive(Parser)]
#[command(name = "dicetoss-cli")]
#[command(author, version, about = "Dice Toss - read the face a thrown die landed on")]
struct Cli {
    #[command(subcommand)]
    command: Commands,

    /// RON settings file (defaults are used when omitted)
    #[arg(long, global = true)]
    settings: Option<PathBuf>,

    /// Print machine-readable JSON instead of text
    #[arg(long, global = true)]
    json: bool,
}

#[derive(Subcommand)]
enum Commands {
    /// Resolve the face shown at an orientation
    Resolve {
        /// d6, d20 or bottle
        #[arg(value_parser = parse_variant)]
        variant: RollableVariant,
        #[arg(long, allow_hyphen_values = true)]
        pitch: f32,
        #[arg(long, allow_hyphen_values = true)]
        yaw: f32,
        #[arg(long, default_value = "0", allow_hyphen_values = true)]
        roll: f32,
    },

    /// Replay an angular-speed trace and report when the object settles
    Replay {
        #[arg(value_parser = parse_variant)]
        variant: RollableVariant,
        /// Speeds per tick, e.g. "0.6,0.6,0.005*22"
        #[arg(long, value_parser = parse_speed_trace)]
        speeds: SpeedTrace,
        /// Resting pitch while replaying
        #[arg(long, default_value = "0", allow_hyphen_values = true)]
        pitch: f32,
        /// Resting yaw while replaying
        #[arg(long, default_value = "0", allow_hyphen_values = true)]
        yaw: f32,
    },

    /// Print a variant's angle table
    Table {
        #[arg(value_parser = parse_variant)]
        variant: RollableVariant,
    },

    /// Resolve uniformly random orientations and count the faces
    Sample {
        #[arg(value_parser = parse_variant)]
        variant: RollableVariant,
        #[arg(short, long, default_value = "1000")]
        count: usize,
        /// Seed for reproducible runs
        #[arg(long)]
        seed: Option<u64>,
    },
}

/// Longest trace `replay` accepts, in ticks.
const MAX_TRACE_TICKS: usize = 100_000;

/// Angular speeds, one per tick
#[derive(Debug, Clone, PartialEq)]
struct SpeedTrace(Vec<f32>);

fn parse_variant(s: &str) -> Result<RollableVariant, String> {
    RollableVariant::parse(s)
        .ok_or_else(|| format!("Unknown variant: {}. Valid: d6, d20, bottle", s))
}

/// Parse "a,b,c*n" where `c*n` (or `cxn`) repeats `c` n times.
fn parse_speed_trace(s: &str) -> Result<SpeedTrace, String> {
    let mut speeds = Vec::new();

    for item in s.split(',').map(str::trim).filter(|item| !item.is_empty()) {
        let (value_str, count_str) = match item.split_once(['*', 'x']) {
            Some((value, count)) => (value.trim(), count.trim()),
            None => (item, "1"),
        };

        let value: f32 = value_str
            .parse()
            .map_err(|_| format!("Invalid speed: {}", value_str))?;
        let count: usize = count_str
            .parse()
            .map_err(|_| format!("Invalid repeat count: {}", count_str))?;
        if count > MAX_TRACE_TICKS - speeds.len() {
            return Err(format!(
                "Speed trace is longer than {} ticks",
                MAX_TRACE_TICKS
            ));
        }

        speeds.extend(std::iter::repeat(value).take(count));
    }

    if speeds.is_empty() {
        return Err("Speed trace is empty".to_string());
    }

    Ok(SpeedTrace(speeds))
}

#[derive(Serialize)]
struct ResolveReport {
    variant: RollableVariant,
    orientation: EulerAngles,
    face: u32,
    nearest_distance: Option<f32>,
}

#[derive(Serialize)]
struct TickReport {
    tick: usize,
    speed: f32,
    state: MotionState,
}

#[derive(Serialize)]
struct ReplayReport {
    variant: RollableVariant,
    settled_at: Option<usize>,
    outcome: RollOutcome,
    ticks: Vec<TickReport>,
}

#[derive(Serialize)]
struct SampleReport {
    variant: RollableVariant,
    count: usize,
    faces: BTreeMap<u32, usize>,
}

/// Read command-line angles the way the physics adapter reads a body,
/// folding yaw into roll near the poles.
fn read_orientation(settings: &RollSettings, orientation: EulerAngles) -> EulerAngles {
    orientation.fold_polar_yaw(settings.resolver.polar_tolerance_degrees)
}

fn load_settings(path: Option<&PathBuf>) -> Result<RollSettings, String> {
    match path {
        Some(path) => RollSettings::load(path).map_err(|e| e.to_string()),
        None => Ok(RollSettings::default()),
    }
}

fn print_json<T: Serialize>(value: &T) -> Result<(), String> {
    let text = serde_json::to_string_pretty(value)
        .map_err(|e| format!("Failed to encode JSON: {e}"))?;
    println!("{}", text);
    Ok(())
}

fn format_face(face: u32) -> String {
    if face == UNKNOWN_FACE {
        "unknown".yellow().bold().to_string()
    } else {
        face.to_string().green().bold().to_string()
    }
}

fn run_resolve(
    settings: &RollSettings,
    json: bool,
    variant: RollableVariant,
    orientation: EulerAngles,
) -> Result<(), String> {
    let orientation = read_orientation(settings, orientation);
    let face = resolve(variant, &orientation, &settings.resolver);
    let nearest = nearest_face(variant.angle_table(), &orientation).map(|m| m.distance);

    if json {
        return print_json(&ResolveReport {
            variant,
            orientation,
            face,
            nearest_distance: nearest,
        });
    }

    println!(
        "{} at pitch {:.2}, yaw {:.2}: {}",
        variant.name().cyan().bold(),
        orientation.pitch,
        orientation.yaw,
        format_face(face)
    );
    if let Some(distance) = nearest {
        println!("  nearest table entry is {:.2} degrees away", distance);
    }
    Ok(())
}

fn replay(
    settings: &RollSettings,
    variant: RollableVariant,
    trace: &SpeedTrace,
    orientation: EulerAngles,
) -> ReplayReport {
    let mut object = RollableObject::new(variant);
    let mut ticks = Vec::with_capacity(trace.0.len());
    let mut settled_at = None;
    let mut outcome = RollOutcome::Pending;

    for (tick, speed) in trace.0.iter().copied().enumerate() {
        let body = SampledBody::new(orientation, speed);
        object.update_motion(Some(&body), settings);
        if object.is_settled() && settled_at.is_none() {
            settled_at = Some(tick + 1);
        }
        let read = object.read_value(Some(&body), settings);
        if !matches!(read, RollOutcome::AlreadyReported(_)) {
            outcome = read;
        }
        ticks.push(TickReport {
            tick: tick + 1,
            speed,
            state: object.motion_state(),
        });
    }

    ReplayReport {
        variant,
        settled_at,
        outcome,
        ticks,
    }
}

fn run_replay(
    settings: &RollSettings,
    json: bool,
    variant: RollableVariant,
    trace: &SpeedTrace,
    orientation: EulerAngles,
) -> Result<(), String> {
    let report = replay(settings, variant, trace, read_orientation(settings, orientation));
    if json {
        return print_json(&report);
    }

    let mut previous = MotionState::AtRest;
    for tick in &report.ticks {
        if tick.state != previous {
            println!(
                "  tick {:>4}  w = {:<8.4} {:?} -> {:?}",
                tick.tick, tick.speed, previous, tick.state
            );
            previous = tick.state;
        }
    }

    match report.settled_at {
        Some(tick) => println!(
            "{} settled at tick {}: {}",
            variant.name().cyan().bold(),
            tick,
            format_face(report.outcome.value())
        ),
        None => println!(
            "{} did not settle within {} ticks",
            variant.name().cyan().bold(),
            report.ticks.len()
        ),
    }
    Ok(())
}

fn run_table(json: bool, variant: RollableVariant) -> Result<(), String> {
    let table = variant.angle_table();
    if json {
        return print_json(&table);
    }

    println!("{} angle table", variant.name().cyan().bold());
    println!("  {:>5}  {:>8}  {:>8}", "face", "pitch", "yaw");
    for entry in table {
        println!(
            "  {:>5}  {:>8.2}  {:>8.2}",
            entry.face_value, entry.pitch, entry.yaw
        );
    }
    Ok(())
}

fn sample(
    settings: &RollSettings,
    variant: RollableVariant,
    count: usize,
    rng: &mut impl Rng,
) -> SampleReport {
    let mut faces = BTreeMap::new();
    for _ in 0..count {
        let orientation = EulerAngles::new(
            rng.gen_range(0.0..360.0),
            rng.gen_range(0.0..360.0),
            rng.gen_range(0.0..360.0),
        );
        *faces
            .entry(resolve(variant, &orientation, &settings.resolver))
            .or_insert(0) += 1;
    }

    SampleReport {
        variant,
        count,
        faces,
    }
}

fn run_sample(
    settings: &RollSettings,
    json: bool,
    variant: RollableVariant,
    count: usize,
    seed: Option<u64>,
) -> Result<(), String> {
    let mut rng = match seed {
        Some(seed) => StdRng::seed_from_u64(seed),
        None => StdRng::from_entropy(),
    };
    let report = sample(settings, variant, count, &mut rng);
    if json {
        return print_json(&report);
    }

    println!(
        "{} over {} random orientations",
        variant.name().cyan().bold(),
        count
    );
    for (face, hits) in &report.faces {
        let share = *hits as f32 / count.max(1) as f32 * 100.0;
        println!("  {:>8}  {:>6}  {:>5.1}%", format_face(*face), hits, share);
    }
    Ok(())
}

fn run(cli: &Cli) -> Result<(), String> {
    let settings = load_settings(cli.settings.as_ref())?;

    match &cli.command {
        Commands::Resolve {
            variant,
            pitch,
            yaw,
            roll,
        } => run_resolve(
            &settings,
            cli.json,
            *variant,
            EulerAngles::new(*pitch, *yaw, *roll),
        ),
        Commands::Replay {
            variant,
            speeds,
            pitch,
            yaw,
        } => run_replay(
            &settings,
            cli.json,
            *variant,
            speeds,
            EulerAngles::pitch_yaw(*pitch, *yaw),
        ),
        Commands::Table { variant } => run_table(cli.json, *variant),
        Commands::Sample {
            variant,
            count,
            seed,
        } => run_sample(&settings, cli.json, *variant, *count, *seed),
    }
}

fn main() {
    let cli = Cli::parse();

    if let Err(e) = run(&cli) {
        eprintln!("{} {}", "Error:".red().bold(), e);
        std::process::exit(1);
    }
}
