use is_terminal::IsTerminal;

/// Terminal facts detected once per invocation and injected into the engine.
///
/// Keeping the environment reads here leaves the reset decision itself pure.
#[derive(Debug, Clone, Copy)]
pub struct TerminalContext {
    /// Stdout is not attached to a terminal.
    pub redirected: bool,
    /// The environment reports 24-bit color support.
    pub truecolor: bool,
}

impl TerminalContext {
    pub fn detect() -> Self {
        Self {
            redirected: !std::io::stdout().is_terminal(),
            truecolor: truecolor_hint(std::env::var("COLORTERM").ok().as_deref()),
        }
    }

    /// Placeholder coloring follows the stream, not the reset mode.
    pub fn color_enabled(&self) -> bool {
        !self.redirected
    }
}

/// 24-bit support as reported by COLORTERM.
pub fn truecolor_hint(colorterm: Option<&str>) -> bool {
    matches!(
        colorterm.map(str::to_ascii_lowercase).as_deref(),
        Some("truecolor") | Some("24bit")
    )
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn truecolor_values_are_recognized() {
        assert!(truecolor_hint(Some("truecolor")));
        assert!(truecolor_hint(Some("24bit")));
        assert!(truecolor_hint(Some("TRUECOLOR")));
    }

    #[test]
    fn other_values_are_not() {
        assert!(!truecolor_hint(Some("256color")));
        assert!(!truecolor_hint(Some("")));
        assert!(!truecolor_hint(None));
    }
}
