use is_terminal::IsTerminal;
use once_cell::sync::Lazy;
use owo_colors::OwoColorize;

static COLOR_ENABLED: Lazy<bool> =
    Lazy::new(|| std::io::stdout().is_terminal() && std::env::var_os("NO_COLOR").is_none());

/// Colors only when stdout is a terminal and NO_COLOR is unset.
pub fn color_enabled() -> bool {
    *COLOR_ENABLED
}

pub fn bold(text: &str) -> String {
    if color_enabled() {
        text.bold().to_string()
    } else {
        text.to_string()
    }
}

pub fn dimmed(text: &str) -> String {
    if color_enabled() {
        text.dimmed().to_string()
    } else {
        text.to_string()
    }
}

pub fn tip_header(text: &str) -> String {
    if color_enabled() {
        text.yellow().bold().to_string()
    } else {
        text.to_string()
    }
}

pub fn command(text: &str) -> String {
    if color_enabled() {
        text.cyan().to_string()
    } else {
        text.to_string()
    }
}

/// Status text colored by what it means to a shopper. Pads before coloring
/// so table columns stay aligned.
pub fn status(text: &str, width: usize) -> String {
    let padded = format!("{:<width$}", text, width = width);
    if !color_enabled() {
        return padded;
    }
    match text {
        "AVAILABLE" => padded.green().to_string(),
        "HOLD" => padded.yellow().to_string(),
        "SOLD" => padded.red().to_string(),
        _ => padded,
    }
}
