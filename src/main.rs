use anyhow::{bail, Context};
use collision_gym::{
    digesters, simulate, table_configs, ExecutionMode, RoundParams, SimulationReport,
};
use rand::{rngs::StdRng, Rng, SeedableRng};
use std::{convert::Infallible, io::Write, path::PathBuf};

const DEFAULT_TABLE_SIZES: [usize; 2] = [1000, 1009];
const DEFAULT_ROUNDS: usize = 10;
const DEFAULT_KEYS: usize = 1000;

const USAGE: &str = "\
usage: collision-gym [--table-size N]... [--digest NAME]... [--rounds N]
                     [--keys N] [--seed N] [--sequential] [--out PATH]
       collision-gym --digest print";

fn main() -> anyhow::Result<()> {
    env_logger::init();

    let digesters = digesters();

    let mut args = pico_args::Arguments::from_env();

    if args.contains(["-h", "--help"]) {
        println!("{USAGE}");
        return Ok(());
    }

    let mut digest_names: Vec<String> = args.values_from_str("--digest")?;
    if digest_names.iter().any(|name| name == "print") {
        for (name, detail) in &digesters {
            println!("{name:16}\t{}", detail.description);
        }
        return Ok(());
    }
    if digest_names.is_empty() {
        digest_names.push("fold".into());
    }

    let mut table_sizes: Vec<usize> = args.values_from_str("--table-size")?;
    if table_sizes.is_empty() {
        table_sizes.extend(DEFAULT_TABLE_SIZES);
    }

    let rounds: usize = args
        .opt_value_from_str("--rounds")?
        .unwrap_or(DEFAULT_ROUNDS);
    let keys_per_round: usize = args.opt_value_from_str("--keys")?.unwrap_or(DEFAULT_KEYS);
    let seed: u64 = match args.opt_value_from_str("--seed")? {
        Some(seed) => seed,
        None => {
            let seed = rand::thread_rng().gen();
            log::info!("No --seed given, drew {seed} from system entropy");
            seed
        }
    };
    let mode = if args.contains("--sequential") {
        ExecutionMode::Sequential
    } else {
        ExecutionMode::Parallel
    };
    let out_filename: PathBuf = args
        .opt_value_from_os_str("--out", |s| -> Result<PathBuf, Infallible> { Ok(s.into()) })?
        .unwrap_or_else(|| "out.json".into());

    let rest = args.finish();
    if !rest.is_empty() {
        bail!("Unknown arguments: {rest:?}\n{USAGE}");
    }

    // reject the whole configuration before the output file is touched
    let params = RoundParams::new(rounds, keys_per_round)?;
    let configs = table_configs(&digesters, &digest_names, &table_sizes)?;

    let mut out_file = std::fs::File::create(&out_filename)
        .with_context(|| format!("creating {}", out_filename.display()))?;

    println!("label, table size, digest, rounds, keys, average, min, max");
    let mut reports: Vec<SimulationReport> = vec![];
    for config in &configs {
        // every configuration replays the same key stream
        let mut rng = StdRng::seed_from_u64(seed);
        let report = simulate(config.table_size, params, config.digester, &mut rng, mode)?
            .with_label(config.label());

        let average = report.average().map(|a| a.into_inner());
        println!(
            "{label:24}\t {size:8}\t {digest:14}\t {rounds:6}\t {keys:8}\t {avg:10.3}\t {min:6}\t {max:6}",
            label = report.label(),
            size = config.table_size,
            digest = config.digest_name,
            keys = keys_per_round,
            avg = average.unwrap_or_default(),
            min = report.min().unwrap_or_default(),
            max = report.max().unwrap_or_default(),
        );

        let line = serde_json::json!({
            "label": report.label(),
            "table_size": config.table_size,
            "digest": config.digest_name,
            "rounds": rounds,
            "keys_per_round": keys_per_round,
            "seed": seed,
            "results": report.results(),
            "average": average,
        });
        writeln!(out_file, "{line}")
            .with_context(|| format!("writing {}", out_filename.display()))?;

        reports.push(report);
    }

    if let Some(best) = reports.iter().min_by_key(|r| r.average()) {
        log::info!(
            "Fewest collisions: {} (average {})",
            best.label(),
            best.average().map_or(0.0, |a| a.into_inner()),
        );
    }

    Ok(())
}
