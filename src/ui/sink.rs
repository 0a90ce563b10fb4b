/// Receiver for selection notifications
///
/// The selection state machine calls `show` when an object becomes selected
/// (including a switch from one object to another) and `hide` when the
/// selection is cleared. Implementations only display; they never call back
/// into the scene.
pub trait PresentationSink {
    fn show(&mut self, title: &str, description: &str, link: Option<&str>);
    fn hide(&mut self);
}
