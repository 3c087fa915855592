//! Output styling
//!
//! Colors are only emitted when the target stream supports them;
//! `owo-colors` honours `NO_COLOR` and TTY detection.

use acmoj::config::Config;
use indicatif::ProgressStyle;
use owo_colors::{OwoColorize, Stream, Style};
use std::fmt::{self, Display};

/// A value painted for a particular output stream
pub struct Paint<T> {
    value: T,
    style: Style,
    stream: Stream,
}

impl<T: Display> Display for Paint<T> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let style = self.style;
        write!(
            f,
            "{}",
            self.value.if_supports_color(self.stream, |v| v.style(style))
        )
    }
}

const fn paint<T>(value: T, style: Style, stream: Stream) -> Paint<T> {
    Paint {
        value,
        style,
        stream,
    }
}

/// Semantic styles for anything printable
pub trait Stylize: Display {
    /// IDs, languages and other values the user acts on
    fn accent(&self) -> Paint<&Self> {
        paint(self, Style::new().cyan(), Stream::Stdout)
    }

    /// Headings
    fn emphasis(&self) -> Paint<&Self> {
        paint(self, Style::new().bold(), Stream::Stdout)
    }

    /// Secondary details on stdout
    fn muted(&self) -> Paint<&Self> {
        paint(self, Style::new().dimmed(), Stream::Stdout)
    }

    /// Follow-up hints printed next to warnings on stderr
    fn hint(&self) -> Paint<&Self> {
        paint(self, Style::new().dimmed(), Stream::Stderr)
    }

    /// Warning labels on stderr
    fn warn(&self) -> Paint<&Self> {
        paint(self, Style::new().yellow(), Stream::Stderr)
    }

    /// Error labels on stderr
    fn error(&self) -> Paint<&Self> {
        paint(self, Style::new().red(), Stream::Stderr)
    }
}

impl<T: Display + ?Sized> Stylize for T {}

/// Green check mark
pub const fn check() -> Paint<&'static str> {
    paint("✓", Style::new().green(), Stream::Stdout)
}

/// Red cross, for stderr
pub const fn cross() -> Paint<&'static str> {
    paint("✗", Style::new().red(), Stream::Stderr)
}

/// List bullet
pub const fn bullet() -> Paint<&'static str> {
    paint("○", Style::new().dimmed(), Stream::Stdout)
}

/// How a judge status reads at a glance
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
enum Tone {
    Passed,
    InProgress,
    Neutral,
    Failed,
}

fn tone(status: &str) -> Tone {
    match status {
        "accepted" => Tone::Passed,
        "pending" | "compiling" | "judging" => Tone::InProgress,
        "aborted" | "void" | "skipped" => Tone::Neutral,
        _ => Tone::Failed,
    }
}

/// Judge status colored by outcome, with underscores shown as spaces
pub fn verdict(status: &str) -> Paint<String> {
    let style = match tone(status) {
        Tone::Passed => Style::new().green(),
        Tone::InProgress => Style::new().yellow(),
        Tone::Neutral => Style::new().dimmed(),
        Tone::Failed => Style::new().red(),
    };
    paint(status.replace('_', " "), style, Stream::Stdout)
}

/// Web page of a submission, as an OSC 8 link where the terminal supports it
pub fn submission_link(config: &Config, submission_id: u64) -> String {
    let url = config.submission_page(submission_id);
    if supports_hyperlinks::on(supports_hyperlinks::Stream::Stdout) {
        terminal_link::Link::new(&url, &url).to_string()
    } else {
        url
    }
}

/// Spinner shown while a judge call is in flight
pub fn spinner_style() -> ProgressStyle {
    ProgressStyle::with_template("{spinner:.cyan} {msg}")
        .unwrap_or_else(|_| ProgressStyle::default_spinner())
        .tick_chars("⠋⠙⠹⠸⠼⠴⠦⠧⠇⠏")
}
