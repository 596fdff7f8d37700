//! Dungeon balance simulator CLI.
//!
//! Generates dungeons from one seed signature and resolves each run headless.
//!
//! Usage:
//!   cargo run --bin simulate -- [OPTIONS]
//!
//! Examples:
//!   cargo run --bin simulate                         # 1000 explorer runs
//!   cargo run --bin simulate -- -n 200 --seed 42     # Reproducible run
//!   cargo run --bin simulate -- --strategy list      # List-based resolver

use rand::SeedableRng;
use rand_chacha::ChaCha8Rng;
use sigil_delve::core::BalanceConfig;
use sigil_delve::items::generate_random_item;
use sigil_delve::simulator::{run_batch, SimConfig, Strategy};
use sigil_delve::{Player, Signature};
use std::env;
use std::path::PathBuf;
use std::process;
use tracing_subscriber::EnvFilter;

struct CliOptions {
    sim: SimConfig,
    config_path: Option<PathBuf>,
    equip: usize,
    json: bool,
    show_map: bool,
}

fn main() {
    tracing_subscriber::fmt()
        .with_env_filter(
            EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| EnvFilter::new("sigil_delve=info,simulate=warn")),
        )
        .with_writer(std::io::stderr)
        .init();

    let args: Vec<String> = env::args().collect();
    let options = parse_args(&args);

    let balance = match &options.config_path {
        Some(path) => match BalanceConfig::load(path) {
            Ok(config) => config,
            Err(err) => {
                eprintln!("Error: {err}");
                process::exit(1);
            }
        },
        None => BalanceConfig::default(),
    };

    // Setup draws come from their own RNG so the batch seeds stay independent
    let mut setup_rng = match options.sim.seed {
        Some(seed) => ChaCha8Rng::seed_from_u64(seed ^ 0x5EED),
        None => ChaCha8Rng::from_entropy(),
    };
    let seed_signature = Signature::random(&mut setup_rng);
    let mut player = Player::new("Simulated Hero");
    for _ in 0..options.equip {
        player.equip(generate_random_item(&balance, &mut setup_rng));
    }
    let stats = player.stats(&balance);

    println!("╔═══════════════════════════════════════════════════════════════╗");
    println!("║              SIGIL DELVE BALANCE SIMULATOR                    ║");
    println!("╚═══════════════════════════════════════════════════════════════╝");
    println!();
    println!("Configuration:");
    println!("  Runs:           {}", options.sim.runs);
    println!("  Strategy:       {}", options.sim.strategy.name());
    if let Some(seed) = options.sim.seed {
        println!("  Seed:           {}", seed);
    }
    println!("  Seed Signature: {:?}", seed_signature.values());
    println!(
        "  Player:         {} items, HP {:.0} ATK {:.1} DEF {:.1} SPD {:.1}",
        player.equipment.equipped_count(),
        stats.max_health,
        stats.attack,
        stats.defense,
        stats.speed
    );
    println!();

    if options.show_map {
        let dungeon = sigil_delve::generate_dungeon(&seed_signature, &balance, &mut setup_rng);
        println!("Sample dungeon: {} (difficulty {})", dungeon.name, dungeon.difficulty);
        println!("{}", dungeon.render_ascii());
    }

    println!("Running simulation...");
    println!();

    let report = run_batch(&player, &seed_signature, &options.sim, &balance);
    println!("{}", report.to_text());

    if options.json {
        println!("{}", report.to_json());
    }
}

fn parse_args(args: &[String]) -> CliOptions {
    let mut options = CliOptions {
        sim: SimConfig::default(),
        config_path: None,
        equip: 2,
        json: false,
        show_map: false,
    };

    let mut i = 1;
    while i < args.len() {
        match args[i].as_str() {
            "-n" | "--runs" => {
                if i + 1 < args.len() {
                    options.sim.runs = args[i + 1].parse().unwrap_or(1000);
                    i += 1;
                }
            }
            "-s" | "--seed" => {
                if i + 1 < args.len() {
                    options.sim.seed = args[i + 1].parse().ok();
                    i += 1;
                }
            }
            "--strategy" => {
                if i + 1 < args.len() {
                    match Strategy::parse(&args[i + 1]) {
                        Some(strategy) => options.sim.strategy = strategy,
                        None => {
                            eprintln!("Unknown strategy: {}", args[i + 1]);
                            print_help();
                            process::exit(2);
                        }
                    }
                    i += 1;
                }
            }
            "-c" | "--config" => {
                if i + 1 < args.len() {
                    options.config_path = Some(PathBuf::from(&args[i + 1]));
                    i += 1;
                }
            }
            "--equip" => {
                if i + 1 < args.len() {
                    options.equip = args[i + 1].parse().unwrap_or(2);
                    i += 1;
                }
            }
            "--quick" => {
                options.sim = SimConfig::quick(options.sim.strategy);
            }
            "--map" => {
                options.show_map = true;
            }
            "--json" => {
                options.json = true;
            }
            "-h" | "--help" => {
                print_help();
                process::exit(0);
            }
            other => {
                tracing::warn!(argument = other, "ignoring unknown argument");
            }
        }
        i += 1;
    }

    options
}

fn print_help() {
    println!("Sigil Delve Balance Simulator");
    println!();
    println!("USAGE:");
    println!("    cargo run --bin simulate -- [OPTIONS]");
    println!();
    println!("OPTIONS:");
    println!("    -n, --runs <N>          Number of dungeons to resolve (default: 1000)");
    println!("    -s, --seed <S>          Random seed for reproducibility");
    println!("    --strategy <NAME>       list | explore (default: explore)");
    println!("    -c, --config <FILE>     JSON balance overrides");
    println!("    --equip <N>             Random items to equip before running (default: 2)");
    println!("    --quick                 100 seeded runs");
    println!("    --map                   Print one sample dungeon map");
    println!("    --json                  Print the report as JSON too");
    println!("    -h, --help              Show this help");
    println!();
    println!("ENVIRONMENT:");
    println!("    RUST_LOG                Log filter (default: sigil_delve=info)");
}
