//! # View Port
//!
//! Everything the controller needs from the page, as a trait. A browser
//! binding implements it against the DOM; the terminal front-end prints.
//!
//! ```text
//! ┌─────────────────────────────────────────────────────────────────────────┐
//! │  Port                        Page element                               │
//! │  ────                        ────────────                               │
//! │  set_postal_code             CEP input value (masked)                   │
//! │  set_freight_panel_visible   CEP + button + results area                │
//! │  set_status                  status line under the button               │
//! │  set_results_visible         the PAC/SEDEX radio block                  │
//! │  set_option_label            text next to each radio                    │
//! │  clear_option_choice         unchecks both radios                       │
//! └─────────────────────────────────────────────────────────────────────────┘
//! ```

use std::io::Write;

use freight_core::ServiceLevel;

/// Rendering port for the freight widget.
///
/// Commands call these methods with no widget lock held, so a binding may
/// forward the events it raises (an input listener firing on
/// `set_postal_code`, say) straight back into the commands.
pub trait FreightView: Send + Sync {
    /// Writes the masked postal code back into the input.
    fn set_postal_code(&self, masked: &str);

    /// Shows or hides the whole ship-by-mail panel.
    fn set_freight_panel_visible(&self, visible: bool);

    /// Replaces the status line (`""` clears it).
    fn set_status(&self, text: &str);

    /// Shows or hides the option radios.
    fn set_results_visible(&self, visible: bool);

    /// Sets the label next to one option radio.
    fn set_option_label(&self, level: ServiceLevel, text: &str);

    /// Unchecks both option radios.
    fn clear_option_choice(&self);
}

/// No-op view for headless use.
pub struct NoOpView;

impl FreightView for NoOpView {
    fn set_postal_code(&self, _masked: &str) {}
    fn set_freight_panel_visible(&self, _visible: bool) {}
    fn set_status(&self, _text: &str) {}
    fn set_results_visible(&self, _visible: bool) {}
    fn set_option_label(&self, _level: ServiceLevel, _text: &str) {}
    fn clear_option_choice(&self) {}
}

/// Prints view updates to stdout, one line each.
pub struct TerminalView;

impl TerminalView {
    fn print(&self, line: std::fmt::Arguments<'_>) {
        let mut out = std::io::stdout().lock();
        // stdout closed means nobody is watching; nothing to report to
        let _ = writeln!(out, "{line}");
    }
}

impl FreightView for TerminalView {
    fn set_postal_code(&self, masked: &str) {
        self.print(format_args!("CEP: {masked}"));
    }

    fn set_freight_panel_visible(&self, visible: bool) {
        if visible {
            self.print(format_args!("[frete] informe o CEP e use `quote`"));
        } else {
            self.print(format_args!("[frete] oculto"));
        }
    }

    fn set_status(&self, text: &str) {
        if !text.is_empty() {
            self.print(format_args!("> {text}"));
        }
    }

    fn set_results_visible(&self, visible: bool) {
        if visible {
            self.print(format_args!("Opções de frete:"));
        }
    }

    fn set_option_label(&self, level: ServiceLevel, text: &str) {
        self.print(format_args!("  ( ) {:<6} {text}", level.name()));
    }

    fn clear_option_choice(&self) {}
}

// =============================================================================
// Recording View (tests)
// =============================================================================
