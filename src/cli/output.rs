//! Colored, tagged terminal output.
//!
//! Every line starts with the `[tapp_pack]` tag. Progress and success go to
//! stdout, warnings to stderr. Color is used only on terminals and never when
//! `NO_COLOR` is set.

use std::io::{self, IsTerminal, Write};
use termcolor::{Color, ColorChoice, ColorSpec, StandardStream, WriteColor};

/// Tag printed in front of every message.
pub const TAG: &str = "[tapp_pack]";

#[derive(Debug, Clone, Copy)]
enum Target {
    Stdout,
    Stderr,
}

impl Target {
    fn is_terminal(self) -> bool {
        match self {
            Target::Stdout => io::stdout().is_terminal(),
            Target::Stderr => io::stderr().is_terminal(),
        }
    }
}

/// Terminal output honoring verbose/quiet settings.
#[derive(Debug, Clone)]
pub struct OutputManager {
    verbose: bool,
    quiet: bool,
    color: bool,
}

impl OutputManager {
    pub fn new(verbose: bool, quiet: bool) -> Self {
        let color = std::env::var_os("NO_COLOR").is_none();
        Self {
            verbose,
            quiet,
            color,
        }
    }

    /// Progress step, hidden in quiet mode.
    pub fn progress(&self, message: &str) -> io::Result<()> {
        if self.quiet {
            return Ok(());
        }
        self.tagged(Target::Stdout, Color::Cyan, None, message)
    }

    /// Detail line, shown only in verbose mode.
    pub fn verbose(&self, message: &str) -> io::Result<()> {
        if !self.verbose || self.quiet {
            return Ok(());
        }
        self.tagged(Target::Stdout, Color::White, None, message)
    }

    /// Final success line, hidden in quiet mode.
    pub fn success(&self, message: &str) -> io::Result<()> {
        if self.quiet {
            return Ok(());
        }
        self.tagged(Target::Stdout, Color::Green, Some("OK:"), message)
    }

    /// Non-fatal problem; always printed.
    pub fn warn(&self, message: &str) -> io::Result<()> {
        self.tagged(Target::Stderr, Color::Yellow, Some("WARNING:"), message)
    }

    /// Untagged, indented continuation line.
    pub fn indent(&self, message: &str) -> io::Result<()> {
        if self.quiet {
            return Ok(());
        }
        let mut out = self.stream(Target::Stdout);
        writeln!(out, "    {message}")
    }

    fn tagged(
        &self,
        target: Target,
        color: Color,
        label: Option<&str>,
        message: &str,
    ) -> io::Result<()> {
        let mut out = self.stream(target);

        let mut spec = ColorSpec::new();
        spec.set_fg(Some(color)).set_bold(true);
        out.set_color(&spec)?;
        write!(out, "{TAG}")?;
        if let Some(label) = label {
            write!(out, " {label}")?;
        }
        out.reset()?;
        writeln!(out, " {message}")
    }

    fn stream(&self, target: Target) -> StandardStream {
        let choice = if self.color && target.is_terminal() {
            ColorChoice::Auto
        } else {
            ColorChoice::Never
        };
        match target {
            Target::Stdout => StandardStream::stdout(choice),
            Target::Stderr => StandardStream::stderr(choice),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn quiet_suppresses_everything_but_warnings() {
        let output = OutputManager::new(false, true);
        output.progress("hidden").unwrap();
        output.success("hidden").unwrap();
        output.indent("hidden").unwrap();
        output.warn("shown").unwrap();
    }
}
