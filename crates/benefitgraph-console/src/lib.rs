//! Colorful console output for eligibility evaluations.
//!
//! Provides a custom `tracing` layer that formats benefitgraph events with colors.
//!
//! ## Log Levels
//!
//! - **INFO**: Batch lifecycle (batch start/end)
//! - **WARN**: Predictions that disagree with a dataset label
//! - **DEBUG**: One line per program verdict
//! - **TRACE**: Individual edge colors


use benefitgraph_config::EvaluatorConfig;
use owo_colors::OwoColorize;
use std::io::{self, Write};
use std::sync::atomic::{AtomicU64, Ordering};
use std::sync::OnceLock;
use std::time::Instant;
use tracing::field::{Field, Visit};
use tracing::{Event, Level, Subscriber};
use tracing_subscriber::filter::ParseError;
use tracing_subscriber::layer::Context;
use tracing_subscriber::layer::SubscriberExt;
use tracing_subscriber::util::SubscriberInitExt;
use tracing_subscriber::{EnvFilter, Layer};

static INIT: OnceLock<()> = OnceLock::new();
static EPOCH: OnceLock<Instant> = OnceLock::new();
static BATCH_START_NANOS: AtomicU64 = AtomicU64::new(0);

/// Filter used when neither `RUST_LOG` nor an explicit directive is given.
pub const DEFAULT_FILTER: &str = "benefitgraph=info";

/// Initializes console output using `RUST_LOG`, falling back to [`DEFAULT_FILTER`].
///
/// Safe to call multiple times - only the first call has effect.
pub fn init() {
    let filter =
        EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new(DEFAULT_FILTER));
    install(filter);
}

/// Initializes console output with an explicit filter directive.
///
/// # Errors
///
/// Returns the parse error if `directive` is not a valid filter; nothing is
/// installed in that case.
pub fn init_with_filter(directive: &str) -> Result<(), ParseError> {
    let filter = EnvFilter::try_new(directive)?;
    install(filter);
    Ok(())
}

/// Initializes console output with the configured `log_filter`, or as [`init`]
/// does when none is set.
pub fn init_from_config(config: &EvaluatorConfig) -> Result<(), ParseError> {
    match config.log_filter.as_deref() {
        Some(directive) => init_with_filter(directive),
        None => {
            init();
            Ok(())
        }
    }
}

fn install(filter: EnvFilter) {
    INIT.get_or_init(|| {
        let _ = tracing_subscriber::registry()
            .with(filter)
            .with(VerdictConsoleLayer)
            .try_init();
    });
}

fn mark_batch_start() {
    let epoch = EPOCH.get_or_init(Instant::now);
    let nanos = epoch.elapsed().as_nanos() as u64;
    BATCH_START_NANOS.store(nanos, Ordering::Relaxed);
}

fn elapsed_secs() -> f64 {
    let Some(epoch) = EPOCH.get() else {
        return 0.0;
    };
    let start_nanos = BATCH_START_NANOS.load(Ordering::Relaxed);
    let now_nanos = epoch.elapsed().as_nanos() as u64;
    now_nanos.saturating_sub(start_nanos) as f64 / 1_000_000_000.0
}

/// A tracing layer that formats evaluation events with colors.
pub struct VerdictConsoleLayer;

impl<S: Subscriber> Layer<S> for VerdictConsoleLayer {
    fn on_event(&self, event: &Event<'_>, _ctx: Context<'_, S>) {
        let metadata = event.metadata();
        if !metadata.target().starts_with("benefitgraph") {
            return;
        }

        let mut visitor = EventVisitor::default();
        event.record(&mut visitor);

        let output = format_event(&visitor, *metadata.level());
        if !output.is_empty() {
            let _ = writeln!(io::stdout(), "{}", output);
        }
    }
}

#[derive(Default)]
struct EventVisitor {
    event: Option<String>,
    program: Option<String>,
    verdict: Option<String>,
    expected: Option<String>,
    condition: Option<String>,
    color: Option<String>,
    record: Option<u64>,
    records: Option<u64>,
    programs: Option<u64>,
    threads: Option<u64>,
    evaluations: Option<u64>,
    labeled: Option<u64>,
    agreed: Option<u64>,
    duration_ms: Option<u64>,
}

impl EventVisitor {
    fn set_text(&mut self, name: &str, value: String) {
        match name {
            "event" => self.event = Some(value),
            "program" => self.program = Some(value),
            "verdict" => self.verdict = Some(value),
            "expected" => self.expected = Some(value),
            "condition" => self.condition = Some(value),
            "color" => self.color = Some(value),
            _ => {}
        }
    }
}

impl Visit for EventVisitor {
    fn record_debug(&mut self, field: &Field, value: &dyn std::fmt::Debug) {
        let s = format!("{:?}", value);
        self.set_text(field.name(), s.trim_matches('"').to_string());
    }

    fn record_u64(&mut self, field: &Field, value: u64) {
        match field.name() {
            "record" => self.record = Some(value),
            "records" => self.records = Some(value),
            "programs" => self.programs = Some(value),
            "threads" => self.threads = Some(value),
            "evaluations" => self.evaluations = Some(value),
            "labeled" => self.labeled = Some(value),
            "agreed" => self.agreed = Some(value),
            "duration_ms" => self.duration_ms = Some(value),
            _ => {}
        }
    }

    fn record_i64(&mut self, field: &Field, value: i64) {
        self.record_u64(field, value.max(0) as u64);
    }

    fn record_str(&mut self, field: &Field, value: &str) {
        self.set_text(field.name(), value.to_string());
    }
}

fn format_event(v: &EventVisitor, level: Level) -> String {
    match v.event.as_deref().unwrap_or("") {
        "batch_start" => format_batch_start(v),
        "batch_end" => format_batch_end(v),
        "label_disagreement" => format_disagreement(v),
        "program_evaluated" => format_program(v),
        "edge_colored" if level == Level::TRACE => format_edge(v),
        _ => String::new(),
    }
}

fn format_elapsed() -> String {
    format!("{:>7.3}s", elapsed_secs())
        .bright_black()
        .to_string()
}

fn format_batch_start(v: &EventVisitor) -> String {
    mark_batch_start();
    let threads = match v.threads {
        Some(n) => n.to_string(),
        None => "auto".to_string(),
    };
    format!(
        "{} {} Evaluating │ {} records │ {} programs │ {} threads",
        format_elapsed(),
        "▶".bright_green().bold(),
        v.records.unwrap_or(0).bright_yellow(),
        v.programs.unwrap_or(0).bright_yellow(),
        threads.bright_yellow(),
    )
}

fn format_batch_end(v: &EventVisitor) -> String {
    let labeled = v.labeled.unwrap_or(0);
    let agreed = v.agreed.unwrap_or(0);
    let accuracy = format_accuracy(agreed, labeled);
    let accuracy = if agreed == labeled {
        accuracy.bright_green().bold().to_string()
    } else {
        accuracy.bright_yellow().bold().to_string()
    };
    format!(
        "{} {} Evaluation complete │ {} evaluations │ {}/{} labels agree ({}) │ {}",
        format_elapsed(),
        "■".bright_cyan().bold(),
        v.evaluations.unwrap_or(0).white(),
        agreed,
        labeled,
        accuracy,
        format_duration_ms(v.duration_ms.unwrap_or(0)).yellow(),
    )
}

fn format_disagreement(v: &EventVisitor) -> String {
    format!(
        "{} {} Record {:>5} │ {} │ predicted {} │ labeled {}",
        format_elapsed(),
        "!".bright_red().bold(),
        v.record.unwrap_or(0),
        v.program.as_deref().unwrap_or("?").white().bold(),
        format_verdict(v.verdict.as_deref().unwrap_or("?")),
        format_verdict(v.expected.as_deref().unwrap_or("?")),
    )
}

fn format_program(v: &EventVisitor) -> String {
    format!(
        "{} {} {}",
        format_elapsed(),
        format_verdict(v.verdict.as_deref().unwrap_or("?")),
        v.program.as_deref().unwrap_or("?").white(),
    )
}

fn format_edge(v: &EventVisitor) -> String {
    let color = v.color.as_deref().unwrap_or("?");
    let icon = match color {
        "pass" => "✓".bright_green().to_string(),
        "fail" => "✗".bright_red().to_string(),
        _ => "?".bright_blue().to_string(),
    };
    format!(
        "{} {} {}",
        format_elapsed(),
        icon,
        v.condition.as_deref().unwrap_or("").bright_black()
    )
}

/// Colors a verdict label: green pass, red fail, blue indeterminate.
fn format_verdict(verdict: &str) -> String {
    let padded = format!("{:<13}", verdict);
    match verdict {
        "pass" => padded.bright_green().bold().to_string(),
        "fail" => padded.bright_red().bold().to_string(),
        "indeterminate" => padded.bright_blue().bold().to_string(),
        _ => padded.white().to_string(),
    }
}

fn format_accuracy(agreed: u64, labeled: u64) -> String {
    if labeled == 0 {
        return "n/a".to_string();
    }
    format!("{:.1}%", agreed as f64 * 100.0 / labeled as f64)
}

fn format_duration_ms(ms: u64) -> String {
    if ms < 1000 {
        format!("{}ms", ms)
    } else if ms < 60_000 {
        format!("{:.2}s", ms as f64 / 1000.0)
    } else {
        let mins = ms / 60_000;
        let secs = (ms % 60_000) / 1000;
        format!("{}m {}s", mins, secs)
    }
}
