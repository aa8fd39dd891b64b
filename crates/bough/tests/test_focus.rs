//! Keyboard focus: click selection, re-entrant deselection, modal restore
//! and keyboard delivery.

#[cfg(test)]
mod tests {
    use bough::{
        Context, NodeId,
        error::Result,
        event::{
            TextEvent,
            key::Key,
            mouse::{Button as MouseButton, MouseEvent},
        },
        focus::FocusManager,
        geom::Expanse,
        testing::Harness,
        widget::{EventOutcome, Pressable, TextEditable, Widget},
        widgets::{Button, Panel},
    };

    /// Moves focus elsewhere when it loses focus.
    struct Redirect {
        to: Option<NodeId>,
        deselected: usize,
    }

    impl Widget for Redirect {
        fn selectable(&self) -> bool {
            true
        }

        fn on_deselected(&mut self, ctx: &mut dyn Context) -> Result<()> {
            self.deselected += 1;
            if let Some(to) = self.to {
                ctx.core_mut().set_selected(Some(to))?;
            }
            Ok(())
        }
    }

    /// Collects text and key presses.
    #[derive(Default)]
    struct Editor {
        text: String,
        keys: Vec<Key>,
        selected: usize,
        deselected: usize,
    }

    impl TextEditable for Editor {
        fn on_text_input(&mut self, text: &str, _ctx: &mut dyn Context) -> Result<EventOutcome> {
            self.text.push_str(text);
            Ok(EventOutcome::Handle)
        }

        fn on_key_down(&mut self, key: Key, _ctx: &mut dyn Context) -> Result<EventOutcome> {
            self.keys.push(key);
            Ok(EventOutcome::Consume)
        }
    }

    impl Widget for Editor {
        fn selectable(&self) -> bool {
            true
        }

        fn on_selected(&mut self, _ctx: &mut dyn Context) -> Result<()> {
            self.selected += 1;
            Ok(())
        }

        fn on_deselected(&mut self, _ctx: &mut dyn Context) -> Result<()> {
            self.deselected += 1;
            Ok(())
        }

        fn text_editable(&mut self) -> Option<&mut dyn TextEditable> {
            Some(self)
        }
    }

    /// Not selectable itself; pressing it focuses its buddy.
    struct Label {
        buddy: NodeId,
    }

    impl Pressable for Label {
        fn on_mouse_down_inside(
            &mut self,
            _event: &MouseEvent,
            button: MouseButton,
            ctx: &mut dyn Context,
        ) -> Result<EventOutcome> {
            if button == MouseButton::Left {
                ctx.core_mut().set_selected(Some(self.buddy))?;
            }
            Ok(EventOutcome::Consume)
        }
    }

    impl Widget for Label {
        fn pressable(&mut self) -> Option<&mut dyn Pressable> {
            Some(self)
        }
    }

    fn harness() -> Result<Harness> {
        Harness::new(Expanse::new(200, 100))
    }

    fn sized<W: Widget>(h: &mut Harness, widget: W, x: i32) -> Result<NodeId> {
        let root = h.root();
        let core = h.core_mut();
        let id = core.add(root, widget)?.id();
        core.set_position(id, (x, 0).into())?;
        core.set_size(id, Expanse::new(40, 40))?;
        Ok(id)
    }

    #[test]
    fn clicking_moves_and_clears_focus() -> Result<()> {
        let mut h = harness()?;
        let a = sized(&mut h, Button::new("a"), 0)?;
        let b = sized(&mut h, Button::new("b"), 50)?;
        let plain = sized(&mut h, Panel::new(), 100)?;

        h.click((5, 5))?;
        assert_eq!(h.core().selected(), Some(a));
        h.click((55, 5))?;
        assert_eq!(h.core().selected(), Some(b));
        h.click((105, 5))?;
        assert_eq!(h.core().selected(), None);
        assert!(h.core().contains(plain));

        let generation = h.core().focus_generation();
        h.click((150, 90))?;
        assert_eq!(h.core().focus_generation(), generation);
        Ok(())
    }

    #[test]
    fn focus_reassigned_inside_deselect_stands() -> Result<()> {
        let mut h = harness()?;
        let target = sized(&mut h, Editor::default(), 100)?;
        let sticky = sized(
            &mut h,
            Redirect {
                to: Some(target),
                deselected: 0,
            },
            0,
        )?;
        let other = sized(&mut h, Editor::default(), 50)?;

        h.core_mut().set_selected(Some(sticky))?;
        h.click((55, 5))?;

        let core = h.core();
        assert_eq!(core.selected(), Some(target));
        assert_eq!(core.widget::<Redirect>(sticky)?.deselected, 1);
        assert_eq!(core.widget::<Editor>(target)?.selected, 1);
        assert_eq!(core.widget::<Editor>(other)?.selected, 0);
        Ok(())
    }

    #[test]
    fn disposing_the_selection_clears_it() -> Result<()> {
        let mut h = harness()?;
        let e = sized(&mut h, Editor::default(), 0)?;
        h.core_mut().set_selected(Some(e))?;
        assert!(h.core().is_selected(e));
        h.core_mut().dispose(e)?;
        assert_eq!(h.core().selected(), None);
        Ok(())
    }

    #[test]
    fn popping_the_active_widget_restores_focus() -> Result<()> {
        let mut h = harness()?;
        let e = sized(&mut h, Editor::default(), 0)?;
        let popup = sized(&mut h, Editor::default(), 100)?;
        let core = h.core_mut();
        core.set_selected(Some(e))?;
        core.set_window_layer(popup, 1)?;
        core.push_active(popup)?;
        core.set_selected(Some(popup))?;
        assert_eq!(core.active(), Some(popup));

        core.pop_active(popup)?;
        assert_eq!(core.active(), None);
        assert_eq!(core.selected(), Some(e));
        assert_eq!(core.widget::<Editor>(popup)?.deselected, 1);
        Ok(())
    }

    #[test]
    fn keyboard_goes_to_the_selection() -> Result<()> {
        let mut h = harness()?;
        let a = sized(&mut h, Editor::default(), 0)?;
        let b = sized(&mut h, Editor::default(), 50)?;

        let mut ev = TextEvent::new("lost");
        h.ui.text_input(&mut ev)?;
        assert!(!ev.handled);

        h.click((5, 5))?;
        let mut ev = TextEvent::new("hi");
        h.ui.text_input(&mut ev)?;
        assert!(ev.handled);
        assert!(h.ui.key_down(Key::from('x'))?);
        h.ui.key_up(Key::from('x'))?;

        let core = h.core();
        assert_eq!(core.widget::<Editor>(a)?.text, "hi");
        assert_eq!(core.widget::<Editor>(a)?.keys, vec![Key::from('x')]);
        assert!(core.widget::<Editor>(b)?.text.is_empty());
        assert!(core.ui().keys().is_empty());
        Ok(())
    }

    #[test]
    fn inaccessible_selection_gets_no_keys() -> Result<()> {
        let mut h = harness()?;
        let a = sized(&mut h, Editor::default(), 0)?;
        h.core_mut().set_selected(Some(a))?;
        h.core_mut().set_visible(a, false)?;
        assert!(!h.ui.key_down(Key::from('x'))?);
        h.ui.key_up(Key::from('x'))?;
        assert!(h.core().widget::<Editor>(a)?.keys.is_empty());
        Ok(())
    }

    #[test]
    fn focus_moved_by_a_press_handler_stands() -> Result<()> {
        let mut h = harness()?;
        let buddy = sized(&mut h, Editor::default(), 50)?;
        let label = sized(&mut h, Label { buddy }, 0)?;

        h.click((5, 5))?;
        let core = h.core();
        assert_eq!(core.selected(), Some(buddy));
        assert_eq!(core.widget::<Editor>(buddy)?.selected, 1);
        assert!(!core.is_selected(label));

        // A plain press elsewhere still clears focus.
        h.click((150, 90))?;
        assert_eq!(h.core().selected(), None);
        Ok(())
    }
}
