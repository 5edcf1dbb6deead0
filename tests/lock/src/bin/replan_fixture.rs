//! Binary that runs a scenario through `run_scenario` and prints
//! deterministic output lines for cross-process verification.
//!
//! Usage: `replan_fixture [wall_5x5|enclosed_goal|random] [--size N] [--seed S] [--density D] [--radius R]`
//!
//! Output: key=value lines on stdout. Logs go to stderr (`RUST_LOG`, default `info`).

use fogwalk_harness::contract::Scenario;
use fogwalk_harness::policy::{RunConfig, SensingMode};
use fogwalk_harness::report::RunReport;
use fogwalk_harness::runner::{run_scenario, RunStatus};
use fogwalk_harness::worlds::enclosed_goal::EnclosedGoal;
use fogwalk_harness::worlds::random_field::RandomField;
use fogwalk_harness::worlds::wall_5x5::WallCorridor;
use fogwalk_kernel::grid::generate::GenerationConfig;
use fogwalk_search::path::Path;

struct Args {
    scenario: String,
    size: Option<usize>,
    seed: u64,
    density: Option<f64>,
    radius: Option<usize>,
}

fn parse_args() -> Args {
    let mut args = Args {
        scenario: "wall_5x5".to_string(),
        size: None,
        seed: 0,
        density: None,
        radius: None,
    };
    let mut it = std::env::args().skip(1);
    while let Some(arg) = it.next() {
        let mut value = |flag: &str| {
            it.next()
                .unwrap_or_else(|| panic!("{flag} requires a value"))
        };
        match arg.as_str() {
            "--size" => args.size = Some(value("--size").parse().expect("--size: integer")),
            "--seed" => args.seed = value("--seed").parse().expect("--seed: integer"),
            "--density" => {
                args.density = Some(value("--density").parse().expect("--density: float"));
            }
            "--radius" => args.radius = Some(value("--radius").parse().expect("--radius: integer")),
            other if other.starts_with("--") => panic!("unknown flag {other}"),
            other => args.scenario = other.to_string(),
        }
    }
    args
}

fn main() {
    env_logger::Builder::from_env(env_logger::Env::default().default_filter_or("info"))
        .target(env_logger::Target::Stderr)
        .init();

    let args = parse_args();
    let scenario: Box<dyn Scenario> = match args.scenario.as_str() {
        "wall_5x5" => Box::new(WallCorridor),
        "enclosed_goal" => Box::new(EnclosedGoal {
            size: args.size.unwrap_or(EnclosedGoal::default().size),
        }),
        "random" => {
            let defaults = GenerationConfig::default();
            Box::new(RandomField {
                config: GenerationConfig {
                    size: args.size.unwrap_or(defaults.size),
                    blocked_probability: args.density.unwrap_or(defaults.blocked_probability),
                    seed: args.seed,
                },
            })
        }
        other => panic!("unknown scenario {other}"),
    };

    let config = RunConfig {
        sensing: args.radius.map_or(SensingMode::Adjacent, SensingMode::Radius),
        ..RunConfig::default()
    };
    let result = run_scenario(scenario.as_ref(), &config).expect("run failed");
    let report = RunReport::from_run(
        scenario.scenario_id(),
        scenario.start(),
        scenario.goal(),
        &config,
        &result,
    );
    let digest = report.digest().expect("report serializes");
    log::info!(
        "{}: {:?} after {} planning rounds, report {}",
        scenario.scenario_id(),
        result.status,
        result.planning_rounds,
        digest
    );

    let status = match result.status {
        RunStatus::Success => "success",
        RunStatus::Stuck => "stuck",
    };
    println!("scenario={}", scenario.scenario_id());
    println!("status={status}");
    println!("steps_taken={}", result.steps_taken);
    println!("planning_rounds={}", result.planning_rounds);
    println!("replans={}", result.replans());
    println!(
        "first_plan_len={}",
        result.path_history.first().map_or(0, Path::len)
    );
    println!(
        "final_path_len={}",
        result.final_path.as_ref().map_or(0, Path::len)
    );
    println!(
        "known_obstacles={}",
        result.final_knowledge.known_blocked_count()
    );
    println!("knowledge_digest={}", report.knowledge_digest);
    println!("report_digest={}", digest.as_str());
}
