// ANSI/VT100 control sequences used by the board screen.

/// Switch to the terminal's alternate screen buffer (smcup).
pub const ENTER_ALT_SCREEN: &str = crate::csi!("?1049h");
/// Return to the main screen buffer (rmcup).
pub const EXIT_ALT_SCREEN: &str = crate::csi!("?1049l");

/// Clear the entire screen.
pub const CLEAR_SCREEN: &str = crate::csi!("2J");
/// Move the cursor to the top-left corner.
pub const CURSOR_HOME: &str = crate::csi!("H");

pub const HIDE_CURSOR: &str = crate::csi!("?25l");
pub const SHOW_CURSOR: &str = crate::csi!("?25h");

/// Reset terminal styling to defaults.
pub const STYLE_RESET: &str = crate::csi!("0m");
pub const STYLE_BOLD: &str = crate::csi!("1m");
pub const STYLE_ITALIC: &str = crate::csi!("3m");
/// Dimmed text, used for disabled pan arrows.
pub const STYLE_DIM: &str = crate::csi!("2m");
pub const FG_LIGHT_GRAY: &str = crate::csi!("37m");
