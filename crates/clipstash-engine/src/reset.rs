use regex::Regex;
use std::sync::LazyLock;

/// SGR sequences (`ESC [ ... m`) that can leak formatting into later output.
static SGR_PATTERN: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"\x1b\[[0-9;]*m").unwrap());

/// When to append a terminal reset after an emitted value.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub enum ResetMode {
    /// Decide per value from the terminal facts below.
    #[default]
    Auto,
    On,
    Off,
}

/// Per-invocation reset decision inputs.
///
/// Everything here is plain data. The CLI layer detects the terminal facts
/// once; the decision itself never touches the process environment.
#[derive(Debug, Clone, Copy)]
pub struct ResetPolicy {
    pub mode: ResetMode,
    /// Escape-sequence emission was explicitly enabled for this invocation.
    pub ansi_enabled: bool,
    /// Stdout is not attached to a terminal.
    pub redirected: bool,
    /// The environment reports 24-bit color support.
    pub truecolor: bool,
}

impl ResetPolicy {
    /// Whether a reset must be appended after this value.
    ///
    /// Auto only ever resets values that already carry an SGR sequence, and
    /// never into a redirected stream unless emission was forced on.
    pub fn should_reset(&self, value: &str) -> bool {
        match self.mode {
            ResetMode::Off => false,
            ResetMode::On => true,
            ResetMode::Auto => {
                if !contains_sgr(value) {
                    return false;
                }
                if self.ansi_enabled {
                    return true;
                }
                if self.redirected {
                    return false;
                }
                self.truecolor
            }
        }
    }
}

/// True when the value contains an SGR control sequence.
pub fn contains_sgr(value: &str) -> bool {
    SGR_PATTERN.is_match(value)
}
