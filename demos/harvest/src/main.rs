//! harvest — headless run of the drone harvest simulation.
//!
//! Spawns two to four factions of drones around a central resource field,
//! runs for a fixed number of frames, writes CSV output, and prints the
//! final score lines.
//!
//! ```text
//! RUST_LOG=info cargo run -p harvest -- --ticks 7200 --drones-per-faction 8
//! ```

mod factions;

use std::path::PathBuf;
use std::time::Instant;

use anyhow::{Context, Result, bail};
use clap::Parser;
use tracing::{info, warn};

use dh_agent::DroneStore;
use dh_behavior::HarvestBehavior;
use dh_core::{SimConfig, Tick};
use dh_directory::{Directory, ScoreLine};
use dh_effects::{EffectKind, PopEffect};
use dh_output::{CsvWriter, OutputWriter, SimOutputObserver};
use dh_sim::{SimBuilder, SimObserver, TickSummary};

// ── Constants ─────────────────────────────────────────────────────────────────

/// Distance of each faction base from the centre of the resource field.
const BASE_RING_RADIUS: f32 = 20.0;

// ── CLI ───────────────────────────────────────────────────────────────────────

#[derive(Parser, Debug)]
#[command(name = "harvest")]
#[command(about = "Drones from competing factions harvest resources and race to deliver them")]
struct Args {
    /// JSON file with a full or partial `SimConfig`.  Flags below override it.
    #[arg(long)]
    config: Option<PathBuf>,

    /// Random seed for reproducibility
    #[arg(long)]
    seed: Option<u64>,

    /// Number of frames to simulate
    #[arg(long)]
    ticks: Option<u64>,

    /// Number of competing factions (2–4)
    #[arg(long, default_value_t = 2)]
    factions: usize,

    #[arg(long)]
    drones_per_faction: Option<usize>,

    /// Drone travel speed (units per second)
    #[arg(long)]
    speed: Option<f32>,

    /// Resources spawned per second.  Anything unparseable falls back to 1.
    #[arg(long)]
    spawn_rate: Option<String>,

    /// Record path lines for travelling drones
    #[arg(long)]
    show_path: bool,

    /// Directory for the CSV output
    #[arg(long, default_value = "output/harvest")]
    output: PathBuf,
}

impl Args {
    /// Merge the optional JSON file and the command-line overrides.
    fn sim_config(&self) -> Result<SimConfig> {
        let mut config = match &self.config {
            Some(path) => {
                let text = std::fs::read_to_string(path)
                    .with_context(|| format!("reading {}", path.display()))?;
                serde_json::from_str(&text)
                    .with_context(|| format!("parsing {}", path.display()))?
            }
            None => SimConfig::default(),
        };

        if let Some(seed) = self.seed {
            config.seed = seed;
        }
        if let Some(ticks) = self.ticks {
            config.total_ticks = ticks;
        }
        if let Some(n) = self.drones_per_faction {
            config.drones_per_faction = n;
        }
        if let Some(speed) = self.speed {
            config.move_speed = speed;
        }
        if let Some(rate) = &self.spawn_rate {
            config.spawn_rate = dh_core::parse_spawn_rate(rate);
        }
        if self.show_path {
            config.show_path = true;
        }
        Ok(config)
    }
}

// ── Observer wrapper ──────────────────────────────────────────────────────────

/// Forwards to the output observer and keeps a few counters for the summary.
struct ReportingObserver<W: OutputWriter> {
    inner:           SimOutputObserver<W>,
    scores:          Vec<ScoreLine>,
    deliveries:      usize,
    spawned:         usize,
    collection_pops: usize,
    delivery_pops:   usize,
    last:            Option<TickSummary>,
}

impl<W: OutputWriter> ReportingObserver<W> {
    fn new(inner: SimOutputObserver<W>) -> Self {
        Self {
            inner,
            scores:          Vec::new(),
            deliveries:      0,
            spawned:         0,
            collection_pops: 0,
            delivery_pops:   0,
            last:            None,
        }
    }
}

impl<W: OutputWriter> SimObserver for ReportingObserver<W> {
    fn on_tick_end(&mut self, summary: &TickSummary) {
        self.deliveries += summary.deliveries;
        self.spawned += summary.spawned;
        self.last = Some(summary.clone());
        self.inner.on_tick_end(summary);
    }

    fn on_scores(&mut self, tick: Tick, lines: &[ScoreLine]) {
        self.scores = lines.to_vec();
        self.inner.on_scores(tick, lines);
    }

    fn on_effect_spawned(&mut self, tick: Tick, effect: &PopEffect) {
        match effect.kind {
            EffectKind::Collection => self.collection_pops += 1,
            EffectKind::Delivery => self.delivery_pops += 1,
        }
        self.inner.on_effect_spawned(tick, effect);
    }

    fn on_effect_finished(&mut self, tick: Tick, effect: &PopEffect) {
        self.inner.on_effect_finished(tick, effect);
    }

    fn on_snapshot(&mut self, tick: Tick, drones: &DroneStore, directory: &Directory) {
        self.inner.on_snapshot(tick, drones, directory);
    }

    fn on_restart(&mut self, tick: Tick, drone_count: usize) {
        self.inner.on_restart(tick, drone_count);
    }

    fn on_sim_end(&mut self, final_tick: Tick) {
        self.inner.on_sim_end(final_tick);
    }
}

// ── main ──────────────────────────────────────────────────────────────────────

fn main() -> Result<()> {
    tracing_subscriber::fmt()
        .with_env_filter(tracing_subscriber::EnvFilter::from_default_env())
        .init();

    let args = Args::parse();
    if !(2..=factions::MAX_FACTIONS).contains(&args.factions) {
        bail!("--factions must be between 2 and {}", factions::MAX_FACTIONS);
    }
    let config = args.sim_config()?;

    println!("=== harvest — drone resource race ===");
    println!(
        "Factions: {}  |  Drones/faction: {}  |  Frames: {}  |  Seed: {}",
        args.factions, config.drones_per_faction, config.total_ticks, config.seed
    );
    println!();

    // 1. Build the sim (this also spawns the first population).
    let behavior = HarvestBehavior::from_config(&config);
    let mut sim = SimBuilder::new(config, factions::ring(args.factions, BASE_RING_RADIUS), behavior)
        .build()?;

    // 2. Set up output.
    let writer = CsvWriter::new(&args.output)
        .with_context(|| format!("opening output in {}", args.output.display()))?;
    let mut obs = ReportingObserver::new(SimOutputObserver::new(writer));

    // 3. Restart once under the observer so the zeroed scoreboard is recorded.
    sim.restart(&mut obs);

    // 4. Run.
    let t0 = Instant::now();
    sim.run(&mut obs);
    let elapsed = t0.elapsed();
    info!(ticks = sim.clock.current_tick.0, secs = elapsed.as_secs_f64(), "run finished");

    if let Some(e) = obs.inner.take_error() {
        warn!("output error: {e}");
    }

    // 5. Summary.
    println!("Simulated {} in {:.3} s", sim.clock, elapsed.as_secs_f64());
    println!("  resources spawned   : {}", obs.spawned);
    println!("  resources delivered : {}", obs.deliveries);
    if let Some(last) = &obs.last {
        println!("  left on the field   : {}", last.resources);
    }
    println!("  collection pops     : {}", obs.collection_pops);
    println!("  delivery pops       : {}", obs.delivery_pops);
    println!("  output              : {}", args.output.display());
    println!();

    if let Some(last) = &obs.last {
        println!("{:<20} {:>6}", "State", "Drones");
        println!("{}", "-".repeat(27));
        for (state, n) in last.state_counts() {
            println!("{:<20} {:>6}", state.as_str(), n);
        }
        println!();
    }

    for line in &obs.scores {
        println!("{line}  ({})", line.color.to_hex());
    }

    Ok(())
}
