use std::io::IsTerminal;

use color_mixer::color::{Rgb, parse_hex};
use color_mixer::levels::{self, LevelReport};
use color_mixer::logging::MixLogger;
use color_mixer::options::MAX_SLOTS_LIMIT;
use color_mixer::{SolverOptions, SolverResult, solve};
use crossterm::style::{Color, Stylize};

/// Targets solved by `--demo`, chosen to exercise each strategy.
const DEMO_TARGETS: [&str; 6] = [
    "#ff0000", "#808000", "#ff8000", "#ffaaaa", "#5555aa", "#8b4513",
];

/// Command-line front end for the solver.
///
/// Argument parsing is hand-rolled; every input error prints usage to stderr
/// and exits with status 2 before anything is solved.
fn main() {
    let args: Vec<String> = std::env::args().collect();
    let cfg = match parse_args(args) {
        Ok(cfg) => cfg,
        Err(message) => {
            eprintln!("{message}\n\n{USAGE}");
            std::process::exit(2);
        }
    };

    if cfg.help {
        print!("{HELP_TEXT}");
        return;
    }

    if cfg.log_level != LogLevel::Off {
        init_logger(cfg.log_level);
    }

    let swatches = std::io::stdout().is_terminal() && std::env::var_os("NO_COLOR").is_none();

    match cfg.mode {
        Mode::Levels => {
            let reports = levels::validate_all();
            for report in &reports {
                print_level(report, &cfg, swatches);
            }
            let infeasible = reports.iter().filter(|r| !r.feasible).count();
            if infeasible > 0 {
                eprintln!("{infeasible} level(s) cannot be solved with their own rules.");
                std::process::exit(1);
            }
        }
        Mode::Demo => {
            let options = cfg.solver_options();
            for (n, target) in DEMO_TARGETS.iter().enumerate() {
                if n > 0 && !cfg.json {
                    println!();
                }
                print_result(&solve(target, &options), &cfg, swatches);
            }
        }
        Mode::Solve(target) => {
            let result = solve(&target.hex(), &cfg.solver_options());
            print_result(&result, &cfg, swatches);
        }
        Mode::Unset => {
            eprintln!("Missing target color.\n\n{USAGE}");
            std::process::exit(2);
        }
    }
}

fn init_logger(level: LogLevel) {
    let logger = MixLogger::new().level(level.to_level_filter());
    if let Err(err) = logger.init() {
        eprintln!("Warning: Failed to initialize logger: {err}");
    }
}

#[cfg_attr(not(feature = "json"), allow(unused_variables))]
fn print_result(result: &SolverResult, cfg: &Config, swatches: bool) {
    #[cfg(feature = "json")]
    if cfg.json {
        println!("{}", result.to_json());
        return;
    }
    print!("{}", result.render_text());
    if swatches && let Some(target) = result.target {
        println!("{}", swatch_line(target, result.final_color));
    }
}

#[cfg_attr(not(feature = "json"), allow(unused_variables))]
fn print_level(report: &LevelReport, cfg: &Config, swatches: bool) {
    #[cfg(feature = "json")]
    if cfg.json {
        println!("{}", report.result.to_json());
        return;
    }
    println!("{}", report.summary());
    if swatches && let Some(target) = report.result.target {
        println!("  {}", swatch_line(target, report.result.final_color));
    }
}

fn swatch(color: Rgb) -> String {
    let [r, g, b] = color.channels();
    "      ".on(Color::Rgb { r, g, b }).to_string()
}

fn swatch_line(target: Rgb, mixed: Rgb) -> String {
    format!("Target {} Mix {}", swatch(target), swatch(mixed))
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
enum LogLevel {
    #[default]
    Off,
    Error,
    Warn,
    Info,
    Debug,
    Trace,
}

impl LogLevel {
    fn parse(value: &str) -> Result<Self, String> {
        match value.trim().to_ascii_lowercase().as_str() {
            "off" | "none" => Ok(Self::Off),
            "error" => Ok(Self::Error),
            "warn" | "warning" => Ok(Self::Warn),
            "info" => Ok(Self::Info),
            "debug" => Ok(Self::Debug),
            "trace" => Ok(Self::Trace),
            _ => Err(format!(
                "Invalid --log-level value `{value}` (expected: off|error|warn|info|debug|trace)."
            )),
        }
    }

    fn to_level_filter(self) -> log::LevelFilter {
        match self {
            Self::Off => log::LevelFilter::Off,
            Self::Error => log::LevelFilter::Error,
            Self::Warn => log::LevelFilter::Warn,
            Self::Info => log::LevelFilter::Info,
            Self::Debug => log::LevelFilter::Debug,
            Self::Trace => log::LevelFilter::Trace,
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Default)]
enum Mode {
    #[default]
    Unset,
    Solve(Rgb),
    Demo,
    Levels,
}

#[derive(Debug, Clone, Default)]
struct Config {
    help: bool,
    mode: Mode,
    tolerance: Option<u8>,
    seed: Option<u64>,
    max_slots: Option<usize>,
    palette: Option<Vec<String>>,
    log_level: LogLevel,
    json: bool,
}

impl Config {
    fn solver_options(&self) -> SolverOptions {
        let mut options = SolverOptions::new();
        if let Some(tolerance) = self.tolerance {
            options = options.tolerance(f64::from(tolerance));
        }
        if let Some(max_slots) = self.max_slots {
            options = options.max_slots(max_slots);
        }
        if let Some(palette) = &self.palette {
            options = options.available_colors(palette.iter().cloned());
        }
        if let Some(seed) = self.seed {
            options = options.seed(seed);
        }
        options
    }
}

fn parse_args(args: impl IntoIterator<Item = String>) -> Result<Config, String> {
    let mut iter = args.into_iter();
    // Drop binary name if present.
    let _ = iter.next();

    let mut cfg = Config::default();
    let mut positionals: Vec<String> = Vec::new();

    while let Some(arg) = iter.next() {
        match arg.as_str() {
            "-h" | "--help" => cfg.help = true,
            "--demo" => set_mode(&mut cfg, Mode::Demo)?,
            "--levels" => set_mode(&mut cfg, Mode::Levels)?,
            "--seed" => {
                let raw = next_value(&mut iter, "--seed")?;
                cfg.seed = Some(parse_u64_flag("--seed", &raw)?);
            }
            "--max-slots" => {
                let raw = next_value(&mut iter, "--max-slots")?;
                cfg.max_slots = Some(parse_max_slots(&raw)?);
            }
            "--palette" => {
                let raw = next_value(&mut iter, "--palette")?;
                cfg.palette = Some(parse_palette(&raw)?);
            }
            "--log-level" => {
                let raw = next_value(&mut iter, "--log-level")?;
                cfg.log_level = LogLevel::parse(&raw)?;
            }
            "--json" => {
                if !cfg!(feature = "json") {
                    return Err("`--json` requires building with the `json` feature.".to_string());
                }
                cfg.json = true;
            }
            flag if flag.starts_with("--") => {
                return Err(format!(
                    "Unknown flag: {arg}\n\nRun with `--help` to see valid options."
                ));
            }
            _ => positionals.push(arg),
        }
    }

    let mut positionals = positionals.into_iter();
    if let Some(raw) = positionals.next() {
        let target = parse_hex(&raw).map_err(|err| format!("Invalid target: {err}."))?;
        set_mode(&mut cfg, Mode::Solve(target))?;
    }
    if let Some(raw) = positionals.next() {
        cfg.tolerance = Some(parse_tolerance(&raw)?);
    }
    if let Some(extra) = positionals.next() {
        return Err(format!("Unexpected argument `{extra}`."));
    }

    Ok(cfg)
}

fn set_mode(cfg: &mut Config, mode: Mode) -> Result<(), String> {
    if cfg.mode != Mode::Unset {
        return Err("Give one of: a target color, `--demo`, or `--levels`.".to_string());
    }
    cfg.mode = mode;
    Ok(())
}

fn next_value(iter: &mut impl Iterator<Item = String>, flag: &str) -> Result<String, String> {
    iter.next()
        .ok_or_else(|| format!("Missing value for `{flag}`."))
}

fn parse_tolerance(raw: &str) -> Result<u8, String> {
    raw.parse::<u8>().map_err(|_| {
        format!("Invalid tolerance `{raw}` (expected an integer between 0 and 255).")
    })
}

fn parse_palette(raw: &str) -> Result<Vec<String>, String> {
    raw.split(',')
        .map(str::trim)
        .filter(|entry| !entry.is_empty())
        .map(|entry| {
            parse_hex(entry)
                .map(|color| color.hex())
                .map_err(|err| format!("Invalid --palette entry: {err}."))
        })
        .collect()
}

fn parse_usize_flag(flag: &str, raw: &str) -> Result<usize, String> {
    raw.parse::<usize>()
        .map_err(|_| format!("Invalid {flag} value `{raw}` (expected a non-negative integer)."))
}

fn parse_max_slots(raw: &str) -> Result<usize, String> {
    let value = parse_usize_flag("--max-slots", raw)?;
    if value > MAX_SLOTS_LIMIT {
        return Err(format!(
            "Invalid --max-slots value `{raw}` (expected at most {MAX_SLOTS_LIMIT})."
        ));
    }
    Ok(value)
}

fn parse_u64_flag(flag: &str, raw: &str) -> Result<u64, String> {
    raw.parse::<u64>()
        .map_err(|_| format!("Invalid {flag} value `{raw}` (expected a non-negative integer)."))
}

const USAGE: &str = "Usage: color-mixer <HEX> [TOLERANCE] | --demo | --levels  (see --help)";

const HELP_TEXT: &str = r#"color-mixer - find palette mixes that reproduce a target color

USAGE:
    color-mixer [OPTIONS] <HEX> [TOLERANCE]
    color-mixer [OPTIONS] --demo
    color-mixer [OPTIONS] --levels

ARGS:
    <HEX>                       Target color as #RRGGBB (the # is optional)
    [TOLERANCE]                 Allowed RGB distance, integer 0-255 (default: 25)

OPTIONS:
    --demo                      Solve a fixed set of demo targets
    --levels                    Validate every built-in level
    --seed <u64>                Seed the evolutionary search
    --max-slots <n>             Maximum colors in a mix, 0-8 (default: 6)
    --palette <hex,hex,...>     Colors to mix from (default: the eight primaries)
    --json                      Print results as JSON (requires the json feature)
    --log-level <level>         Enable logging (off|error|warn|info|debug|trace)

    -h, --help                  Print help and exit

EXAMPLES:
    color-mixer '#808000' 5
    color-mixer ff8000 --palette ff0000,ffff00,ffffff
    color-mixer --levels
"#;
