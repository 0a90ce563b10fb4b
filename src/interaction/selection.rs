//! Selection state machine
//!
//! At most one object is selected at a time, and exactly the selected object
//! carries the highlight. Every change is reported to a [`PresentationSink`]:
//! one `show` per newly selected object and one `hide` when the selection is
//! cleared.

use crate::{
    gfx::scene::{ObjectId, Scene},
    ui::PresentationSink,
};

/// The current selection
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum Selection {
    #[default]
    Idle,
    Selected(ObjectId),
}

/// What a pick or dismissal did to the selection
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Transition {
    /// Nothing was selected before
    Selected(ObjectId),
    /// The highlight moved straight from one object to another
    Switched { from: ObjectId, to: ObjectId },
    /// The selection was cleared
    Cleared(ObjectId),
    Unchanged,
}

#[derive(Debug, Clone)]
pub struct SelectionState {
    current: Selection,
    highlight: [f32; 3],
}

impl SelectionState {
    /// Idle selection state that marks the selected object with `highlight`
    pub fn new(highlight: [f32; 3]) -> Self {
        Self {
            current: Selection::Idle,
            highlight,
        }
    }

    pub fn current(&self) -> Selection {
        self.current
    }

    pub fn selected(&self) -> Option<ObjectId> {
        match self.current {
            Selection::Idle => None,
            Selection::Selected(id) => Some(id),
        }
    }

    /// Feeds the result of a pick into the state machine.
    ///
    /// A hit on the already selected object changes nothing and notifies no
    /// one. A miss clears the selection.
    pub fn apply_pick(
        &mut self,
        pick: Option<ObjectId>,
        scene: &mut Scene,
        sink: &mut dyn PresentationSink,
    ) -> Transition {
        let transition = match (self.current, pick) {
            (Selection::Selected(current), Some(id)) if current == id => Transition::Unchanged,
            (_, Some(id)) if scene.entry_for(id).is_none() => {
                log::warn!("Pick reported unknown object {id}");
                Transition::Unchanged
            }
            (Selection::Idle, Some(id)) => {
                self.select(id, scene, sink);
                Transition::Selected(id)
            }
            (Selection::Selected(from), Some(to)) => {
                self.select(to, scene, sink);
                Transition::Switched { from, to }
            }
            (Selection::Selected(_), None) => self.clear(scene, sink),
            (Selection::Idle, None) => Transition::Unchanged,
        };

        log::debug!("Pick {pick:?}: {transition:?}");
        transition
    }

    /// Clears the selection on explicit request, wherever the pointer is
    pub fn dismiss(&mut self, scene: &mut Scene, sink: &mut dyn PresentationSink) -> Transition {
        let transition = self.clear(scene, sink);
        log::debug!("Dismiss: {transition:?}");
        transition
    }

    fn select(&mut self, id: ObjectId, scene: &mut Scene, sink: &mut dyn PresentationSink) {
        scene.highlight_only(id, self.highlight);
        self.current = Selection::Selected(id);

        if let Some(entry) = scene.entry_for(id) {
            sink.show(&entry.title, &entry.description, entry.link.as_deref());
        }
    }

    fn clear(&mut self, scene: &mut Scene, sink: &mut dyn PresentationSink) -> Transition {
        let Selection::Selected(previous) = self.current else {
            return Transition::Unchanged;
        };

        scene.clear_highlights();
        self.current = Selection::Idle;
        sink.hide();
        Transition::Cleared(previous)
    }
}

#[cfg(test)]
pub(crate) mod tests {
    use super::*;
    use crate::{
        catalog::{hex_rgb, Catalog},
        config::SceneConfig,
        gfx::camera::CameraManager,
    };
    use rand::{rngs::StdRng, Rng, SeedableRng};

    /// Sink that records every call for inspection
    #[derive(Debug, Default)]
    pub(crate) struct RecordingSink {
        pub calls: Vec<SinkCall>,
    }

    #[derive(Debug, Clone, PartialEq)]
    pub(crate) enum SinkCall {
        Show {
            title: String,
            description: String,
            link: Option<String>,
        },
        Hide,
    }

    impl PresentationSink for RecordingSink {
        fn show(&mut self, title: &str, description: &str, link: Option<&str>) {
            self.calls.push(SinkCall::Show {
                title: title.to_string(),
                description: description.to_string(),
                link: link.map(str::to_string),
            });
        }

        fn hide(&mut self) {
            self.calls.push(SinkCall::Hide);
        }
    }

    fn setup() -> (Scene, SelectionState, RecordingSink) {
        let config = SceneConfig::default();
        let scene = Scene::from_catalog(Catalog::builtin(), CameraManager::from_config(&config), &config);
        (scene, SelectionState::new(config.highlight_color), RecordingSink::default())
    }

    /// At most one highlighted object, and it is the selected one
    fn assert_invariant(scene: &Scene, selection: &SelectionState) {
        let highlighted = scene.highlighted();
        match selection.current() {
            Selection::Idle => assert!(highlighted.is_empty()),
            Selection::Selected(id) => assert_eq!(highlighted, vec![id]),
        }
    }

    #[test]
    fn test_select_from_idle() {
        let (mut scene, mut selection, mut sink) = setup();
        let skill = scene.find("skill1").unwrap();

        let transition = selection.apply_pick(Some(skill), &mut scene, &mut sink);
        assert_eq!(transition, Transition::Selected(skill));
        assert_eq!(selection.current(), Selection::Selected(skill));
        assert_eq!(
            scene.object(skill).unwrap().material.emissive,
            hex_rgb(0x555555)
        );
        assert!(matches!(
            &sink.calls[..],
            [SinkCall::Show { title, .. }] if title == "Three.js Expertise"
        ));
        assert_invariant(&scene, &selection);
    }

    #[test]
    fn test_repick_is_noop() {
        let (mut scene, mut selection, mut sink) = setup();
        let project = scene.find("project1").unwrap();

        selection.apply_pick(Some(project), &mut scene, &mut sink);
        let transition = selection.apply_pick(Some(project), &mut scene, &mut sink);

        assert_eq!(transition, Transition::Unchanged);
        assert_eq!(sink.calls.len(), 1);
        assert_invariant(&scene, &selection);
    }

    #[test]
    fn test_miss_clears() {
        let (mut scene, mut selection, mut sink) = setup();
        let skill = scene.find("skill1").unwrap();
        selection.apply_pick(Some(skill), &mut scene, &mut sink);

        let transition = selection.apply_pick(None, &mut scene, &mut sink);
        assert_eq!(transition, Transition::Cleared(skill));
        assert_eq!(selection.current(), Selection::Idle);
        assert_eq!(sink.calls.last(), Some(&SinkCall::Hide));
        assert_invariant(&scene, &selection);
    }

    #[test]
    fn test_miss_while_idle_is_silent() {
        let (mut scene, mut selection, mut sink) = setup();
        assert_eq!(selection.apply_pick(None, &mut scene, &mut sink), Transition::Unchanged);
        assert_eq!(selection.dismiss(&mut scene, &mut sink), Transition::Unchanged);
        assert!(sink.calls.is_empty());
    }

    #[test]
    fn test_switch_moves_highlight_directly() {
        let (mut scene, mut selection, mut sink) = setup();
        let project = scene.find("project1").unwrap();
        let contact = scene.find("contact").unwrap();
        selection.apply_pick(Some(project), &mut scene, &mut sink);
        sink.calls.clear();

        let transition = selection.apply_pick(Some(contact), &mut scene, &mut sink);
        assert_eq!(
            transition,
            Transition::Switched {
                from: project,
                to: contact
            }
        );
        assert_eq!(scene.highlighted(), vec![contact]);
        assert_eq!(
            sink.calls,
            vec![SinkCall::Show {
                title: "Get In Touch".to_string(),
                description:
                    "Interested in collaborating or learning more? Feel free to reach out!"
                        .to_string(),
                link: Some("mailto:your.email@example.com".to_string()),
            }]
        );
    }

    #[test]
    fn test_dismiss_clears() {
        let (mut scene, mut selection, mut sink) = setup();
        let project = scene.find("project2").unwrap();
        selection.apply_pick(Some(project), &mut scene, &mut sink);

        assert_eq!(
            selection.dismiss(&mut scene, &mut sink),
            Transition::Cleared(project)
        );
        assert_eq!(selection.selected(), None);
        assert!(scene.highlighted().is_empty());
        assert_eq!(sink.calls.last(), Some(&SinkCall::Hide));

        // A second dismissal has nothing to clear
        assert_eq!(selection.dismiss(&mut scene, &mut sink), Transition::Unchanged);
        assert_eq!(sink.calls.len(), 2);
    }

    #[test]
    fn test_unknown_object_is_ignored() {
        let (mut scene, mut selection, mut sink) = setup();
        let transition = selection.apply_pick(Some(ObjectId(99)), &mut scene, &mut sink);
        assert_eq!(transition, Transition::Unchanged);
        assert!(sink.calls.is_empty());
        assert_invariant(&scene, &selection);
    }

    #[test]
    fn test_random_sequences_keep_single_highlight() {
        let (mut scene, mut selection, mut sink) = setup();
        let mut rng = StdRng::seed_from_u64(0x5E1EC7);
        let count = scene.objects().len();

        for _ in 0..500 {
            match rng.random_range(0..4) {
                0 => {
                    selection.dismiss(&mut scene, &mut sink);
                }
                1 => {
                    selection.apply_pick(None, &mut scene, &mut sink);
                }
                _ => {
                    let id = ObjectId(rng.random_range(0..count));
                    selection.apply_pick(Some(id), &mut scene, &mut sink);
                }
            }
            assert_invariant(&scene, &selection);
        }

        // Notifications alternate with the state: never two hides in a row
        for pair in sink.calls.windows(2) {
            assert!(!(pair[0] == SinkCall::Hide && pair[1] == SinkCall::Hide));
        }
    }
}
