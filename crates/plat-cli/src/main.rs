//! Command-line driver for the plat layout generator.
//!
//! Runs the raster path by default: scatter an occupancy map, dump it as
//! `0`/`1` rows, extract rectangles, and print them. `--buildings` switches
//! to the direct-sampling path. Every run prints its seed, so any layout can
//! be reproduced by passing the seed back with `--seed`.

use plat::prelude::*;
use rand::SeedableRng;
use rand_chacha::ChaCha8Rng;
use std::process::ExitCode;

const USAGE: &str = "\
Usage: plat [OPTIONS]

Options:
  --map-size W H   Map size in cells (default: 100 100)
  --density D      Density of the layout around the map center (default: 0.8)
  --seed N         RNG seed (default: random, echoed for reproducibility)
  --buildings      Sample building footprints directly instead of rasterizing
  --limit N        Cap on placed buildings with --buildings (default: 1000)
  --quiet          Suppress the occupancy map dump
  -h, --help       Print this help
";

#[derive(Debug, PartialEq)]
struct Args {
    size: Size,
    density: f64,
    seed: Option<u64>,
    buildings: bool,
    limit: usize,
    quiet: bool,
}

impl Default for Args {
    fn default() -> Self {
        Self {
            size: Size::new(100, 100),
            density: 0.8,
            seed: None,
            buildings: false,
            limit: DEFAULT_LIMIT,
            quiet: false,
        }
    }
}

/// Parse command-line tokens. `Ok(None)` means help was requested.
fn parse_args(argv: &[String]) -> Result<Option<Args>, String> {
    let mut args = Args::default();
    let mut it = argv.iter();

    fn value<'a>(
        it: &mut impl Iterator<Item = &'a String>,
        flag: &str,
    ) -> Result<&'a String, String> {
        it.next().ok_or_else(|| format!("{flag} expects a value"))
    }

    fn parse<T: std::str::FromStr>(raw: &str, flag: &str) -> Result<T, String> {
        raw.parse()
            .map_err(|_| format!("{flag}: cannot parse '{raw}'"))
    }

    while let Some(token) = it.next() {
        match token.as_str() {
            "--map-size" => {
                let w = parse(value(&mut it, "--map-size")?, "--map-size")?;
                let h = parse(value(&mut it, "--map-size")?, "--map-size")?;
                args.size = Size::new(w, h);
            }
            "--density" => args.density = parse(value(&mut it, "--density")?, "--density")?,
            "--seed" => args.seed = Some(parse(value(&mut it, "--seed")?, "--seed")?),
            "--limit" => args.limit = parse(value(&mut it, "--limit")?, "--limit")?,
            "--buildings" => args.buildings = true,
            "--quiet" => args.quiet = true,
            "-h" | "--help" => return Ok(None),
            other => return Err(format!("unknown option '{other}'")),
        }
    }
    Ok(Some(args))
}

fn run(args: &Args) -> Result<(), GenError> {
    let seed = args.seed.unwrap_or_else(rand::random);
    let mut rng = ChaCha8Rng::seed_from_u64(seed);
    println!("seed: {seed}");

    if args.buildings {
        let budget = BuildBudget::new(args.size, args.density)?;
        println!(
            "map {}, density {}: {} attempts, spread radius {}",
            args.size, args.density, budget.attempts, budget.radius
        );
        let placed = generate_buildings(args.size, args.density, args.limit, &mut rng)?;
        for rect in &placed {
            println!("  {rect}  [{}x{}]", rect.width(), rect.height());
        }
        println!("placed {} buildings (limit {})", placed.len(), args.limit);
    } else {
        let budget = ScatterBudget::new(args.size, args.density)?;
        println!(
            "map {}, density {}: {} samples, disk radius {}",
            args.size, args.density, budget.samples, budget.radius
        );
        let map = OccupancyMap::scatter(args.size, args.density, &mut rng)?;
        if !args.quiet {
            print!("{}", map.render());
        }
        let rects = extract_rectangles(&map);
        for rect in &rects {
            println!("  {rect}  [{}x{}]", rect.width(), rect.height());
        }
        println!(
            "{} filled cells -> {} rectangles",
            map.filled_count(),
            rects.len()
        );
    }
    Ok(())
}

fn main() -> ExitCode {
    let argv: Vec<String> = std::env::args().skip(1).collect();
    let args = match parse_args(&argv) {
        Ok(Some(args)) => args,
        Ok(None) => {
            print!("{USAGE}");
            return ExitCode::SUCCESS;
        }
        Err(msg) => {
            eprintln!("error: {msg}");
            eprint!("{USAGE}");
            return ExitCode::from(2);
        }
    };

    if let Err(err) = run(&args) {
        eprintln!("error: {err}");
        return ExitCode::FAILURE;
    }
    ExitCode::SUCCESS
}

#[cfg(test)]
mod tests {
    use super::*;

    fn argv(tokens: &[&str]) -> Vec<String> {
        tokens.iter().map(|s| s.to_string()).collect()
    }

    #[test]
    fn defaults_when_no_flags() {
        let args = parse_args(&[]).unwrap().unwrap();
        assert_eq!(args, Args::default());
    }

    #[test]
    fn parses_full_flag_set() {
        let args = parse_args(&argv(&[
            "--map-size", "64", "48", "--density", "0.5", "--seed", "7", "--buildings",
            "--limit", "20", "--quiet",
        ]))
        .unwrap()
        .unwrap();
        assert_eq!(args.size, Size::new(64, 48));
        assert_eq!(args.density, 0.5);
        assert_eq!(args.seed, Some(7));
        assert!(args.buildings);
        assert_eq!(args.limit, 20);
        assert!(args.quiet);
    }

    #[test]
    fn help_short_circuits() {
        assert_eq!(parse_args(&argv(&["--help"])).unwrap(), None);
        assert_eq!(parse_args(&argv(&["-h"])).unwrap(), None);
    }

    #[test]
    fn rejects_unknown_and_malformed_flags() {
        assert!(parse_args(&argv(&["--bogus"])).is_err());
        assert!(parse_args(&argv(&["--map-size", "64"])).is_err());
        assert!(parse_args(&argv(&["--density", "thick"])).is_err());
        assert!(parse_args(&argv(&["--seed"])).is_err());
    }
}
