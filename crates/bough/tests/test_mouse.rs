//! Pointer dispatch: clicks, drags, hover, propagation and modal layers.

#[cfg(test)]
mod tests {
    use std::time::Duration;

    use bough::{
        Context, NodeId,
        error::Result,
        event::mouse::{Button, MouseEvent},
        geom::{Expanse, Point},
        testing::Harness,
        widget::{EventOutcome, Hoverable, NodeOptions, Pressable, Scrollable, Widget},
        widgets,
    };

    /// Records every pointer callback it receives.
    #[derive(Default)]
    struct Tracer {
        log: Vec<String>,
        claim_down: bool,
        always_active: bool,
    }

    impl Tracer {
        fn claiming() -> Self {
            Self {
                claim_down: true,
                ..Self::default()
            }
        }
    }

    impl Hoverable for Tracer {
        fn on_hover_changed(&mut self, hovered: bool, _ctx: &mut dyn Context) -> Result<()> {
            self.log.push(format!("hover {hovered}"));
            Ok(())
        }
    }

    impl Pressable for Tracer {
        fn on_mouse_down(
            &mut self,
            _event: &MouseEvent,
            button: Button,
            inside: bool,
            _ctx: &mut dyn Context,
        ) -> Result<EventOutcome> {
            self.log.push(format!("down {button:?} {inside}"));
            Ok(EventOutcome::Ignore)
        }

        fn on_mouse_down_inside(
            &mut self,
            _event: &MouseEvent,
            button: Button,
            _ctx: &mut dyn Context,
        ) -> Result<EventOutcome> {
            self.log.push(format!("down_inside {button:?}"));
            Ok(if self.claim_down {
                EventOutcome::Handle
            } else {
                EventOutcome::Ignore
            })
        }

        fn on_mouse_up(
            &mut self,
            _event: &MouseEvent,
            button: Button,
            inside: bool,
            _ctx: &mut dyn Context,
        ) -> Result<EventOutcome> {
            self.log.push(format!("up {button:?} {inside}"));
            Ok(EventOutcome::Ignore)
        }

        fn on_click(
            &mut self,
            _event: &MouseEvent,
            button: Button,
            _ctx: &mut dyn Context,
        ) -> Result<EventOutcome> {
            self.log.push(format!("click {button:?}"));
            Ok(EventOutcome::Ignore)
        }

        fn on_release_outside(
            &mut self,
            _event: &MouseEvent,
            button: Button,
            _ctx: &mut dyn Context,
        ) -> Result<EventOutcome> {
            self.log.push(format!("release_outside {button:?}"));
            Ok(EventOutcome::Ignore)
        }

        fn on_mouse_press(
            &mut self,
            _event: &MouseEvent,
            button: Button,
            started_inside: bool,
            _ctx: &mut dyn Context,
        ) -> Result<EventOutcome> {
            self.log.push(format!("press {button:?} {started_inside}"));
            Ok(EventOutcome::Ignore)
        }
    }

    impl Scrollable for Tracer {
        fn on_mouse_wheel(&mut self, _event: &MouseEvent, _ctx: &mut dyn Context) -> Result<EventOutcome> {
            self.log.push("wheel".into());
            Ok(EventOutcome::Ignore)
        }
    }

    impl Widget for Tracer {
        fn options(&self) -> NodeOptions {
            NodeOptions {
                always_active_mouse: self.always_active,
                ..NodeOptions::default()
            }
        }

        fn hoverable(&mut self) -> Option<&mut dyn Hoverable> {
            Some(self)
        }

        fn pressable(&mut self) -> Option<&mut dyn Pressable> {
            Some(self)
        }

        fn scrollable(&mut self) -> Option<&mut dyn Scrollable> {
            Some(self)
        }
    }

    /// Adds a child tracer covering itself when pressed.
    #[derive(Default)]
    struct Spawner {
        spawned: Option<NodeId>,
    }

    impl Pressable for Spawner {
        fn on_mouse_down_inside(
            &mut self,
            _event: &MouseEvent,
            _button: Button,
            ctx: &mut dyn Context,
        ) -> Result<EventOutcome> {
            let size = ctx.size()?;
            let me = ctx.node_id();
            let core = ctx.core_mut();
            let child = core.add(me, Tracer::default())?.id();
            core.set_size(child, size)?;
            self.spawned = Some(child);
            Ok(EventOutcome::Ignore)
        }
    }

    impl Widget for Spawner {
        fn pressable(&mut self) -> Option<&mut dyn Pressable> {
            Some(self)
        }
    }

    /// Disposes another node when pressed.
    #[derive(Default)]
    struct Killer {
        victim: Option<NodeId>,
    }

    impl Pressable for Killer {
        fn on_mouse_down_inside(
            &mut self,
            _event: &MouseEvent,
            _button: Button,
            ctx: &mut dyn Context,
        ) -> Result<EventOutcome> {
            if let Some(victim) = self.victim.take() {
                ctx.core_mut().dispose(victim)?;
            }
            Ok(EventOutcome::Ignore)
        }
    }

    impl Widget for Killer {
        fn pressable(&mut self) -> Option<&mut dyn Pressable> {
            Some(self)
        }
    }

    fn harness() -> Result<Harness> {
        Harness::new(Expanse::new(200, 100))
    }

    fn tracer(h: &mut Harness, parent: NodeId, widget: Tracer, pos: (i32, i32), size: (u32, u32)) -> Result<NodeId> {
        let core = h.core_mut();
        let id = core.add(parent, widget)?.id();
        core.set_position(id, pos.into())?;
        core.set_size(id, Expanse::new(size.0, size.1))?;
        Ok(id)
    }

    fn log(h: &Harness, id: NodeId) -> Result<Vec<String>> {
        Ok(h.core().widget::<Tracer>(id)?.log.clone())
    }

    #[test]
    fn click_inside() -> Result<()> {
        let mut h = harness()?;
        let root = h.root();
        let p = tracer(&mut h, root, Tracer::default(), (10, 10), (50, 50))?;
        h.click((20, 20))?;
        assert_eq!(
            log(&h, p)?,
            vec!["hover true", "down Left true", "down_inside Left", "up Left true", "click Left"]
        );
        assert!(h.core().node(p)?.is_hovered());
        Ok(())
    }

    #[test]
    fn drag_out_and_release_outside() -> Result<()> {
        let mut h = harness()?;
        let root = h.root();
        let p = tracer(&mut h, root, Tracer::default(), (10, 10), (50, 50))?;
        h.move_to((20, 20))?;
        h.press(Button::Left)?;
        h.move_to((150, 90))?;
        h.release(Button::Left)?;
        assert_eq!(
            log(&h, p)?,
            vec![
                "hover true",
                "down Left true",
                "down_inside Left",
                "hover false",
                "press Left true",
                "up Left false",
                "release_outside Left",
            ]
        );
        assert!(!h.core().node(p)?.mouse().started_inside(Button::Left));
        Ok(())
    }

    #[test]
    fn press_elsewhere_is_reported_outside() -> Result<()> {
        let mut h = harness()?;
        let root = h.root();
        let p = tracer(&mut h, root, Tracer::default(), (10, 10), (50, 50))?;
        h.click_button((150, 90), Button::Right)?;
        assert_eq!(log(&h, p)?, vec!["down Right false", "up Right false"]);
        Ok(())
    }

    #[test]
    fn handled_event_stops_propagation() -> Result<()> {
        let mut h = harness()?;
        let root = h.root();
        let first = tracer(&mut h, root, Tracer::claiming(), (0, 0), (100, 100))?;
        let second = tracer(&mut h, root, Tracer::default(), (0, 0), (100, 100))?;
        let inner = tracer(&mut h, first, Tracer::default(), (0, 0), (10, 10))?;
        h.move_to((5, 5))?;
        assert!(h.press(Button::Left)?);

        assert!(log(&h, first)?.contains(&"down_inside Left".to_string()));
        assert!(!log(&h, inner)?.iter().any(|e| e.starts_with("down")));
        assert!(!log(&h, second)?.iter().any(|e| e.starts_with("down")));
        Ok(())
    }

    #[test]
    fn hover_changes_only_on_transitions() -> Result<()> {
        let mut h = harness()?;
        let root = h.root();
        let p = tracer(&mut h, root, Tracer::default(), (10, 10), (50, 50))?;
        h.move_to((20, 20))?;
        h.move_to((25, 25))?;
        h.move_to((100, 20))?;
        h.move_to((101, 20))?;
        assert_eq!(log(&h, p)?, vec!["hover true", "hover false"]);
        Ok(())
    }

    #[test]
    fn wheel_goes_to_the_node_under_the_pointer() -> Result<()> {
        let mut h = harness()?;
        let root = h.root();
        let a = tracer(&mut h, root, Tracer::default(), (0, 0), (50, 50))?;
        let b = tracer(&mut h, root, Tracer::default(), (100, 0), (50, 50))?;
        h.move_to((120, 10))?;
        h.wheel(0, 1)?;
        assert!(!log(&h, a)?.contains(&"wheel".to_string()));
        assert!(log(&h, b)?.contains(&"wheel".to_string()));
        Ok(())
    }

    #[test]
    fn higher_active_layer_blocks_input_below() -> Result<()> {
        let mut h = harness()?;
        let root = h.root();
        let below = tracer(&mut h, root, Tracer::default(), (0, 0), (100, 100))?;
        let sticky = tracer(
            &mut h,
            root,
            Tracer {
                always_active: true,
                ..Tracer::default()
            },
            (0, 0),
            (100, 100),
        )?;
        let popup = tracer(&mut h, root, Tracer::default(), (10, 10), (20, 20))?;
        let core = h.core_mut();
        core.set_window_layer(popup, 1)?;
        core.push_active(popup)?;
        assert_eq!(core.active_layer(), 1);
        assert!(!core.is_accessible(below));
        assert!(core.is_accessible(sticky));
        assert!(core.is_accessible(root));

        h.click((15, 15))?;
        assert!(log(&h, below)?.is_empty());
        assert!(log(&h, sticky)?.contains(&"click Left".to_string()));
        assert!(log(&h, popup)?.contains(&"click Left".to_string()));

        h.core_mut().pop_active(popup)?;
        assert_eq!(h.core().active_layer(), 0);
        h.click((50, 50))?;
        assert!(log(&h, below)?.contains(&"click Left".to_string()));
        Ok(())
    }

    #[test]
    fn inaccessible_nodes_lose_hover_on_update() -> Result<()> {
        let mut h = harness()?;
        let root = h.root();
        let below = tracer(&mut h, root, Tracer::default(), (0, 0), (100, 100))?;
        let popup = tracer(&mut h, root, Tracer::default(), (150, 0), (20, 20))?;
        h.move_to((5, 5))?;
        assert!(h.core().node(below)?.is_hovered());

        let core = h.core_mut();
        core.set_window_layer(popup, 1)?;
        core.push_active(popup)?;
        h.tick()?;
        assert!(!h.core().node(below)?.is_hovered());
        assert_eq!(log(&h, below)?, vec!["hover true", "hover false"]);
        Ok(())
    }

    #[test]
    fn hidden_nodes_get_nothing() -> Result<()> {
        let mut h = harness()?;
        let root = h.root();
        let p = tracer(&mut h, root, Tracer::default(), (0, 0), (100, 100))?;
        h.core_mut().set_visible(p, false)?;
        h.click((5, 5))?;
        assert!(log(&h, p)?.is_empty());
        Ok(())
    }

    #[test]
    fn children_added_during_dispatch_see_the_event() -> Result<()> {
        let mut h = harness()?;
        let root = h.root();
        let core = h.core_mut();
        let spawner = core.add(root, Spawner::default())?;
        core.set_size(spawner, Expanse::new(50, 50))?;
        h.move_to((5, 5))?;
        h.press(Button::Left)?;

        let child = h
            .core()
            .widget::<Spawner>(spawner)?
            .spawned
            .ok_or(bough::Error::Internal("nothing spawned".into()))?;
        assert_eq!(log(&h, child)?, vec!["down Left true", "down_inside Left"]);
        Ok(())
    }

    #[test]
    fn siblings_removed_during_dispatch_are_skipped() -> Result<()> {
        let mut h = harness()?;
        let root = h.root();
        let core = h.core_mut();
        let killer = core.add(root, Killer::default())?;
        core.set_size(killer, Expanse::new(50, 50))?;
        let victim = tracer(&mut h, root, Tracer::default(), (0, 0), (50, 50))?;
        h.core_mut().with_widget(killer, |k: &mut Killer, _| {
            k.victim = Some(victim);
            Ok(())
        })?;

        h.move_to((5, 5))?;
        h.press(Button::Left)?;
        assert!(!h.core().contains(victim));
        assert_eq!(h.core().children(root)?, vec![killer.id()]);
        h.release(Button::Left)?;
        Ok(())
    }

    #[test]
    fn double_click_within_window() -> Result<()> {
        let mut h = harness()?;
        let root = h.root();
        let core = h.core_mut();
        let b = core.add(root, widgets::Button::new("ok"))?;
        core.set_size(b, Expanse::new(40, 20))?;
        h.tick()?;

        h.click((5, 5))?;
        h.click((5, 5))?;
        let button = h.core().widget::<widgets::Button>(b)?;
        assert_eq!((button.clicks(), button.double_clicks()), (2, 1));

        h.advance(Duration::from_millis(500))?;
        h.click((5, 5))?;
        h.advance(Duration::from_millis(500))?;
        h.click((5, 5))?;
        let button = h.core().widget::<widgets::Button>(b)?;
        assert_eq!((button.clicks(), button.double_clicks()), (4, 1));
        assert_eq!(h.pointer(), Point::new(5, 5));
        Ok(())
    }
}
