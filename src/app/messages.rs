use super::links::ExternalLink;
use super::regions::RegionId;

/// All messages that can be sent through the FLTK channel.
/// Widget callbacks send one of these; the dispatch loop in main handles them.
#[derive(Debug, Clone, Copy)]
pub enum Message {
    /// Animated scroll to a section; always closes the compact-menu overlay.
    NavigateTo(RegionId),
    ToggleTheme,
    ToggleMenu,
    OpenExternal(ExternalLink),
    WindowResized(i32, i32),
    Quit,
}
