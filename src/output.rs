//! User-facing console messages, separate from tracing output.
//! Prefixes are colored only when stdout is a TTY.

use owo_colors::OwoColorize;

#[derive(Debug, Clone, Copy)]
enum Tone {
    Info,
    Warn,
    Error,
    Success,
}

impl Tone {
    fn label(self) -> &'static str {
        match self {
            Tone::Info => "info:",
            Tone::Warn => "warn:",
            Tone::Error => "error:",
            Tone::Success => "ok:",
        }
    }

    fn to_stderr(self) -> bool {
        matches!(self, Tone::Warn | Tone::Error)
    }
}

fn is_tty() -> bool {
    atty::is(atty::Stream::Stdout)
}

fn prefix(tone: Tone) -> String {
    let label = tone.label();
    if !is_tty() {
        return label.to_string();
    }
    match tone {
        Tone::Info => label.cyan().bold().to_string(),
        Tone::Warn => label.yellow().bold().to_string(),
        Tone::Error => label.red().bold().to_string(),
        Tone::Success => label.green().bold().to_string(),
    }
}

fn emit(tone: Tone, msg: &str) {
    if tone.to_stderr() {
        eprintln!("{} {}", prefix(tone), msg);
    } else {
        println!("{} {}", prefix(tone), msg);
    }
}

pub fn print_info(msg: &str) {
    emit(Tone::Info, msg);
}

pub fn print_warn(msg: &str) {
    emit(Tone::Warn, msg);
}

pub fn print_error(msg: &str) {
    emit(Tone::Error, msg);
}

pub fn print_success(msg: &str) {
    emit(Tone::Success, msg);
}
