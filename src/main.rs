// Sortty: step-through sorting algorithm visualizer

use std::fs::File;
use std::io;
use std::path::{Path, PathBuf};
use std::sync::Mutex;

use clap::Parser;
use crossterm::{
    execute,
    terminal::{disable_raw_mode, enable_raw_mode, EnterAlternateScreen, LeaveAlternateScreen},
};
use ratatui::{backend::CrosstermBackend, Terminal};
use tracing_subscriber::EnvFilter;

use sortty::algorithms::{
    compare_all, AlgorithmKey, GapSequence, SortPolicy, DEFAULT_BOGO_MAX_SHUFFLES,
};
use sortty::config::{Settings, DEFAULT_DATA_SIZE, DEFAULT_INTERVAL_MS};
use sortty::input::{InputSource, Preset, RandomInput, ValueRange};
use sortty::playback::{Engine, IntervalScheduler};
use sortty::steps::{StepKind, Termination, Value};
use sortty::ui::App;

#[derive(Debug, Parser)]
#[command(
    name = "sortty",
    version,
    about = "Record sorting algorithms step by step and play them back in the terminal"
)]
struct Args {
    /// bubble, selection, insertion, quick, merge, heap, shell, counting, radix or bogo
    #[arg(short, long, default_value = "bubble")]
    algorithm: AlgorithmKey,

    /// Number of generated elements (5..=1000)
    #[arg(short = 'n', long, default_value_t = DEFAULT_DATA_SIZE)]
    size: usize,

    /// Delay between automatic steps in milliseconds (0..=500)
    #[arg(short, long = "interval-ms", default_value_t = DEFAULT_INTERVAL_MS)]
    interval_ms: u64,

    /// Smallest generated value
    #[arg(long, default_value_t = 1, allow_negative_numbers = true)]
    min: i64,

    /// Largest generated value
    #[arg(long, default_value_t = 100, allow_negative_numbers = true)]
    max: i64,

    /// random, sorted, reversed, few-unique or nearly-sorted
    #[arg(short, long, default_value = "random")]
    preset: Preset,

    /// Seed for input generation and bogo sort
    #[arg(long)]
    seed: Option<u64>,

    #[arg(long = "bogo-max-shuffles", default_value_t = DEFAULT_BOGO_MAX_SHUFFLES)]
    bogo_max_shuffles: usize,

    /// Shell sort gap sequence: sedgewick, shell or knuth
    #[arg(long, default_value = "sedgewick")]
    gaps: GapSequence,

    /// Sort these comma-separated numbers instead of generated data
    #[arg(long, value_delimiter = ',', allow_negative_numbers = true)]
    values: Option<Vec<Value>>,

    /// Write logs here (filtered by RUST_LOG, default info)
    #[arg(long = "log-file")]
    log_file: Option<PathBuf>,

    /// Print the run's statistics instead of starting the UI
    #[arg(long)]
    summary: bool,

    /// Print a comparison of every algorithm instead of starting the UI
    #[arg(long, conflicts_with = "summary")]
    compare: bool,
}

impl Args {
    fn settings(&self) -> Settings {
        Settings {
            algorithm: self.algorithm,
            data_size: self.size,
            interval_ms: self.interval_ms,
            range: ValueRange {
                min: self.min,
                max: self.max,
            },
            preset: self.preset,
            seed: self.seed,
            policy: SortPolicy {
                bogo_max_shuffles: self.bogo_max_shuffles,
                bogo_seed: self.seed,
                shell_gaps: self.gaps,
            },
        }
    }
}

fn main() -> Result<(), Box<dyn std::error::Error>> {
    let args = Args::parse();

    if let Some(path) = &args.log_file {
        init_logging(path)?;
    }

    let settings = args.settings();
    settings.validate()?;
    tracing::info!(
        algorithm = settings.algorithm.id(),
        size = settings.data_size,
        preset = %settings.preset,
        "starting"
    );

    let mut source = match settings.seed {
        Some(seed) => RandomInput::seeded(seed, settings.preset),
        None => RandomInput::new(settings.preset),
    };
    let input = match args.values.clone() {
        Some(values) => values,
        None => source.generate(settings.data_size, settings.range),
    };

    if args.summary {
        return print_summary(&settings, &input);
    }
    if args.compare {
        print_comparison(&settings, &input);
        return Ok(());
    }

    let engine = Engine::with_input(settings, IntervalScheduler::new(), source, input)?;

    // Set up terminal
    enable_raw_mode()?;
    let mut stdout = io::stdout();
    execute!(stdout, EnterAlternateScreen)?;
    let backend = CrosstermBackend::new(stdout);
    let mut terminal = Terminal::new(backend)?;

    let mut app = App::new(engine);
    let res = app.run(&mut terminal);

    // Restore terminal
    disable_raw_mode()?;
    execute!(terminal.backend_mut(), LeaveAlternateScreen)?;
    terminal.show_cursor()?;

    if let Err(err) = res {
        tracing::error!(error = %err, "event loop failed");
        eprintln!("Error: {}", err);
    }

    Ok(())
}

/// Send tracing output to `path`; the terminal belongs to the UI
fn init_logging(path: &Path) -> Result<(), Box<dyn std::error::Error>> {
    let file = File::create(path)?;
    let filter = EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("info"));
    tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_writer(Mutex::new(file))
        .with_ansi(false)
        .init();
    Ok(())
}

fn print_summary(settings: &Settings, input: &[Value]) -> Result<(), Box<dyn std::error::Error>> {
    let run = settings.algorithm.run(input, &settings.policy)?;

    println!("{}", settings.algorithm.display_name());
    println!("  elements     {}", input.len());
    println!("  steps        {}", run.steps.len());
    println!("  comparisons  {}", run.stats.comparisons);
    println!("  swaps        {}", run.stats.swaps);
    println!("  time         {:.3} ms", run.stats.time_millis);
    if run.termination() == Some(Termination::IterationCapExceeded) {
        println!("  result       gave up after {} shuffles", settings.policy.bogo_max_shuffles);
    }

    println!("  step kinds");
    let kinds = [
        StepKind::Compare,
        StepKind::Swap,
        StepKind::Shift,
        StepKind::Insert,
        StepKind::Merge,
        StepKind::Count,
        StepKind::Place,
        StepKind::Copy,
        StepKind::Shuffle,
    ];
    for kind in kinds {
        let count = run.steps.count_kind(kind);
        if count > 0 {
            println!("    {:<10} {}", kind.label(), count);
        }
    }

    if let Some(array) = run.final_array() {
        let shown: Vec<String> = array.iter().map(|v| v.to_string()).collect();
        println!("  output       [{}]", shown.join(", "));
    }
    Ok(())
}

fn print_comparison(settings: &Settings, input: &[Value]) {
    println!(
        "{:<16} {:>12} {:>12} {:>10}",
        "algorithm", "comparisons", "swaps", "ms"
    );
    for row in compare_all(input, &settings.policy) {
        let name = row.key.display_name();
        match row.result {
            Ok(stats) => println!(
                "{:<16} {:>12} {:>12} {:>10.3}",
                name, stats.comparisons, stats.swaps, stats.time_millis
            ),
            Err(e) => println!("{:<16} {}", name, e),
        }
    }
}
