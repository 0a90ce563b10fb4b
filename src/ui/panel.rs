//! Information panel and status overlays
//!
//! The panel is the on-screen [`PresentationSink`]: selecting an object fills
//! it with the entry's title, description and link, clearing the selection
//! hides it.

use super::sink::PresentationSink;
use crate::{catalog::LinkAction, loading::LoadState};

/// Text shown while the scene is still being prepared
pub const LOADING_MESSAGE: &str = "Loading...";
/// Text shown when startup failed
pub const LOAD_ERROR_MESSAGE: &str = "Error loading assets. Please refresh.";

/// What the panel currently displays
#[derive(Debug, Clone, PartialEq)]
pub struct PanelContent {
    pub title: String,
    pub description: String,
    pub link: Option<LinkAction>,
}

/// Requests raised by the user through the panel
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum PanelAction {
    /// The close button was pressed
    Close,
    /// The link button was pressed
    FollowLink(String),
}

/// Side panel describing the selected entry
#[derive(Debug, Default)]
pub struct InfoPanel {
    content: Option<PanelContent>,
    visible: bool,
}

impl InfoPanel {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn is_visible(&self) -> bool {
        self.visible
    }

    pub fn content(&self) -> Option<&PanelContent> {
        self.content.as_ref()
    }

    /// Renders the panel and returns the action the user took this frame, if any
    pub fn draw(&self, ui: &imgui::Ui) -> Option<PanelAction> {
        let content = self.content.as_ref().filter(|_| self.visible)?;

        let display_size = ui.io().display_size;
        // Guard against invalid display size that could cause crashes
        if display_size[0] <= 0.0 || display_size[1] <= 0.0 {
            return None;
        }
        let panel_width = (display_size[0] * 0.3).clamp(280.0, 420.0);

        let mut action = None;
        let mut open = true;

        // The `###` suffix keeps one window identity while the title changes
        ui.window(format!("{}###info_panel", content.title))
            .opened(&mut open)
            .position(
                [display_size[0] - panel_width - 20.0, 20.0],
                imgui::Condition::Always,
            )
            .size([panel_width, 0.0], imgui::Condition::Always)
            .resizable(false)
            .collapsible(false)
            .movable(false)
            .build(|| {
                ui.text_wrapped(&content.description);
                ui.spacing();
                ui.separator();

                if let Some(link) = &content.link {
                    if ui.button(link.label()) {
                        action = Some(PanelAction::FollowLink(link.uri().to_string()));
                    }
                    ui.same_line();
                }
                if ui.button("Close") {
                    action = Some(PanelAction::Close);
                }
            });

        if !open {
            action = Some(PanelAction::Close);
        }
        action
    }
}

impl PresentationSink for InfoPanel {
    fn show(&mut self, title: &str, description: &str, link: Option<&str>) {
        self.content = Some(PanelContent {
            title: title.to_string(),
            description: description.to_string(),
            link: LinkAction::from_link(link),
        });
        self.visible = true;
    }

    fn hide(&mut self) {
        self.visible = false;
    }
}

/// Hands a link to the system's default handler (mail client or browser)
pub fn open_link(uri: &str) -> bool {
    open_link_with(uri, |uri| open::that(uri))
}

/// Opens `uri` through `launch`. A failed launch is logged and reported as `false`.
pub fn open_link_with<F>(uri: &str, launch: F) -> bool
where
    F: FnOnce(&str) -> std::io::Result<()>,
{
    match launch(uri) {
        Ok(()) => {
            log::info!("Opened link: {uri}");
            true
        }
        Err(err) => {
            log::warn!("Failed to open link {uri}: {err}");
            false
        }
    }
}

/// Message for the centered status overlay, `None` once the scene is ready
pub fn status_message(state: &LoadState) -> Option<&'static str> {
    match state {
        LoadState::Loading => Some(LOADING_MESSAGE),
        LoadState::Ready => None,
        LoadState::Failed(_) => Some(LOAD_ERROR_MESSAGE),
    }
}

/// Draws the loading or error message in the middle of the viewport
pub fn status_overlay(ui: &imgui::Ui, state: &LoadState) {
    let Some(message) = status_message(state) else {
        return;
    };

    let display_size = ui.io().display_size;
    if display_size[0] <= 0.0 || display_size[1] <= 0.0 {
        return;
    }

    ui.window("##status_overlay")
        .position(
            [display_size[0] * 0.5, display_size[1] * 0.5],
            imgui::Condition::Always,
        )
        .position_pivot([0.5, 0.5])
        .no_decoration()
        .always_auto_resize(true)
        .movable(false)
        .build(|| ui.text(message));
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_show_fills_and_reveals() {
        let mut panel = InfoPanel::new();
        assert!(!panel.is_visible());
        assert!(panel.content().is_none());

        panel.show("Contact", "Get in touch", Some("mailto:you@example.com"));
        assert!(panel.is_visible());
        let content = panel.content().unwrap();
        assert_eq!(content.title, "Contact");
        assert_eq!(content.description, "Get in touch");
        assert_eq!(content.link.as_ref().map(LinkAction::label), Some("Send Email"));
    }

    #[test]
    fn test_placeholder_link_has_no_button() {
        let mut panel = InfoPanel::new();
        panel.show("Project Alpha", "A project", Some("#"));
        assert_eq!(panel.content().unwrap().link, None);

        panel.show("Project Beta", "Another", Some("https://example.com"));
        assert_eq!(
            panel.content().unwrap().link,
            Some(LinkAction::LearnMore("https://example.com".to_string()))
        );
    }

    #[test]
    fn test_hide_keeps_last_content() {
        let mut panel = InfoPanel::new();
        panel.show("Skill", "Rust", None);
        panel.hide();
        assert!(!panel.is_visible());
        assert_eq!(panel.content().unwrap().title, "Skill");

        panel.hide();
        assert!(!panel.is_visible());
    }

    #[test]
    fn test_status_messages() {
        assert_eq!(status_message(&LoadState::Loading), Some(LOADING_MESSAGE));
        assert_eq!(status_message(&LoadState::Ready), None);
        assert_eq!(
            status_message(&LoadState::Failed("no adapter".to_string())),
            Some("Error loading assets. Please refresh.")
        );
    }

    #[test]
    fn test_follow_link_launches_uri() {
        let mut launched = None;
        let opened = open_link_with("mailto:hello@example.com", |uri| {
            launched = Some(uri.to_string());
            Ok(())
        });
        assert!(opened);
        assert_eq!(launched.as_deref(), Some("mailto:hello@example.com"));
    }

    #[test]
    fn test_failed_launch_is_reported() {
        let opened = open_link_with("https://example.com", |_| {
            Err(std::io::Error::new(std::io::ErrorKind::NotFound, "no handler"))
        });
        assert!(!opened);
    }
}
