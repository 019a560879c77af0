//! Shared names and numbers for the page behavior layer.
//!
//! The document structure is fixed; every id, class, and CSS variable the
//! crate touches is listed here so the HTML and the Rust side can be checked
//! against one place.

// ── Storage keys ────────────────────────────────────────────────

pub const KEY_THEME: &str = "terminal-theme";
pub const KEY_NEON_INTENSITY: &str = "neon-intensity";
pub const KEY_TYPEWRITER_SPEED: &str = "typewriter-speed";
pub const KEY_PRIMARY_COLOR: &str = "terminal-primary-color";
pub const KEY_ACCENT_COLOR: &str = "terminal-accent-color";

// ── CSS variables (set on the document root) ────────────────────

pub const VAR_PRIMARY: &str = "--terminal-green";
pub const VAR_SECONDARY: &str = "--terminal-cyan";
pub const VAR_ACCENT: &str = "--terminal-amber";
pub const VAR_BACKGROUND: &str = "--bg-terminal";
pub const VAR_NEON_INTENSITY: &str = "--neon-intensity";

// ── Customization panel controls ────────────────────────────────

pub const ID_PANEL: &str = "customizationPanel";
pub const ID_PANEL_OPEN: &str = "panelOpenBtn";
pub const ID_PANEL_CLOSE: &str = "panelToggle";
pub const ID_THEME_SELECT: &str = "terminalTheme";
pub const ID_NEON_INTENSITY: &str = "neonIntensity";
pub const ID_TYPEWRITER_SPEED: &str = "typewriterSpeed";
pub const ID_PRIMARY_COLOR: &str = "primaryColor";
pub const ID_ACCENT_COLOR: &str = "accentColor";
pub const ID_RESET: &str = "resetTerminal";

/// Controls whose value mirrors a stored preference.
pub const PREFERENCE_CONTROL_IDS: [&str; 5] =
    [ID_THEME_SELECT, ID_NEON_INTENSITY, ID_TYPEWRITER_SPEED, ID_PRIMARY_COLOR, ID_ACCENT_COLOR];

// ── Display mode toggles ────────────────────────────────────────

pub const ID_TERMINAL_TOGGLE: &str = "terminalToggle";
pub const ID_NEON_TOGGLE: &str = "neonToggle";
pub const ID_MINIMAL_TOGGLE: &str = "minimalToggle";
pub const TOGGLE_IDS: [&str; 3] = [ID_TERMINAL_TOGGLE, ID_NEON_TOGGLE, ID_MINIMAL_TOGGLE];
pub const CLASS_TERMINAL_MODE: &str = "terminal-mode";
pub const CLASS_NEON_MODE: &str = "neon-mode";
pub const CLASS_MINIMAL_MODE: &str = "minimal-mode";
pub const SEL_INTRO: &str = ".terminal-intro";

// ── Generic classes ─────────────────────────────────────────────

pub const CLASS_ACTIVE: &str = "active";
pub const CLASS_OPEN: &str = "open";
pub const CLASS_HIDDEN: &str = "hidden";
pub const CLASS_VISIBLE: &str = "visible";

// ── Page chrome ─────────────────────────────────────────────────

pub const ID_CURRENT_YEAR: &str = "currentYear";
pub const ID_SCROLL_TO_TOP: &str = "scrollToTop";
pub const ID_SKILLS: &str = "skills";
pub const SEL_SECTION: &str = ".section";
pub const SEL_NAV_LINK: &str = ".nav-link";
pub const SEL_ANCHOR: &str = "a[href^=\"#\"]";
pub const SEL_SKILL_BAR: &str = ".skill-progress";
pub const SEL_COMMAND: &str = ".terminal-command";
pub const SEL_OUTPUT: &str = ".terminal-output";
pub const SEL_TAGLINE: &str = ".sidebar-tagline";
pub const ATTR_LEVEL: &str = "data-level";

// ── Scroll ──────────────────────────────────────────────────────

/// Scroll offset (px) past which the scroll-to-top button is shown.
pub const SCROLL_TOP_THRESHOLD_PX: f64 = 300.0;

/// A section becomes current this many pixels before its top reaches the viewport top.
pub const SECTION_LEAD_PX: f64 = 200.0;

// ── Reveal ──────────────────────────────────────────────────────

pub const SKILLS_THRESHOLD: f64 = 0.5;
pub const FADE_THRESHOLD: f64 = 0.1;
pub const SKILL_FILL_DELAY_MS: u32 = 100;

// ── Typewriter ──────────────────────────────────────────────────

/// Stagger between consecutive command/output lines.
pub const LINE_STAGGER_MS: u32 = 1000;

/// Outputs start this long after the command with the same index.
pub const OUTPUT_OFFSET_MS: u32 = 500;

pub const TAGLINE_DELAY_MS: u32 = 500;
pub const TAGLINE_TICK_MS: u32 = 50;
