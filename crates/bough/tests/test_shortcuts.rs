//! Keyboard shortcut scopes, repeat timing and lazy removal.

#[cfg(test)]
mod tests {
    use std::time::Duration;

    use bough::{
        Context, NodeId, ShortcutId,
        error::Result,
        event::key::{Key, KeyCode, Mods},
        focus::FocusManager,
        geom::Expanse,
        shortcut::{Chord, ShortcutScope},
        testing::Harness,
        widget::{EventOutcome, Widget},
    };

    /// Counts shortcut firings.
    #[derive(Default)]
    struct Owner {
        fired: Vec<ShortcutId>,
    }

    impl Widget for Owner {
        fn selectable(&self) -> bool {
            true
        }

        fn on_shortcut(&mut self, id: ShortcutId, _ctx: &mut dyn Context) -> Result<EventOutcome> {
            self.fired.push(id);
            Ok(EventOutcome::Handle)
        }
    }

    fn setup() -> Result<(Harness, NodeId)> {
        let mut h = Harness::new(Expanse::new(100, 100))?;
        let root = h.root();
        let core = h.core_mut();
        let owner = core.add(root, Owner::default())?.id();
        core.set_size(owner, Expanse::new(10, 10))?;
        h.tick()?;
        Ok((h, owner))
    }

    fn fired(h: &Harness, owner: NodeId) -> Result<usize> {
        Ok(h.core().widget::<Owner>(owner)?.fired.len())
    }

    #[test]
    fn global_shortcut_fires_on_the_chord_edge() -> Result<()> {
        let (mut h, owner) = setup()?;
        let id = h
            .core_mut()
            .add_shortcut(owner, Mods::CTRL + 's', ShortcutScope::Global, false)?;

        h.ui.key_down(Mods::CTRL + 's')?;
        h.tick()?;
        h.tick()?;
        assert_eq!(h.core().widget::<Owner>(owner)?.fired, vec![id]);

        h.ui.key_up(Mods::CTRL + 's')?;
        h.tick()?;
        h.ui.key_down(Mods::CTRL + 's')?;
        h.tick()?;
        assert_eq!(fired(&h, owner)?, 2);

        // Wrong modifiers do not match.
        h.ui.key_up(Mods::CTRL + 's')?;
        h.tick()?;
        h.ui.key_down(Key::from('s'))?;
        h.tick()?;
        assert_eq!(fired(&h, owner)?, 2);
        Ok(())
    }

    #[test]
    fn chords_need_every_key() -> Result<()> {
        let (mut h, owner) = setup()?;
        h.core_mut().add_shortcut(
            owner,
            Chord::new(Mods::NONE, [KeyCode::Char('g'), KeyCode::Char('h')]),
            ShortcutScope::Global,
            false,
        )?;
        h.ui.key_down(Key::from('g'))?;
        h.tick()?;
        assert_eq!(fired(&h, owner)?, 0);
        h.ui.key_down(Key::from('h'))?;
        h.tick()?;
        assert_eq!(fired(&h, owner)?, 1);
        Ok(())
    }

    #[test]
    fn held_shortcut_repeats() -> Result<()> {
        let (mut h, owner) = setup()?;
        h.core_mut()
            .add_shortcut(owner, KeyCode::Down, ShortcutScope::Global, true)?;

        h.ui.key_down(Key::from(KeyCode::Down))?;
        h.tick()?;
        assert_eq!(fired(&h, owner)?, 1);
        h.advance(Duration::from_millis(100))?;
        assert_eq!(fired(&h, owner)?, 1);
        h.advance(Duration::from_millis(450))?;
        assert_eq!(fired(&h, owner)?, 2);
        h.advance(Duration::from_millis(60))?;
        assert_eq!(fired(&h, owner)?, 3);

        h.ui.key_up(Key::from(KeyCode::Down))?;
        h.advance(Duration::from_millis(100))?;
        h.advance(Duration::from_millis(600))?;
        assert_eq!(fired(&h, owner)?, 3);
        Ok(())
    }

    #[test]
    fn selected_scope_needs_focus() -> Result<()> {
        let (mut h, owner) = setup()?;
        h.core_mut()
            .add_shortcut(owner, 'q', ShortcutScope::Selected, false)?;

        h.ui.key_down(Key::from('q'))?;
        h.tick()?;
        assert_eq!(fired(&h, owner)?, 0);
        h.ui.key_up(Key::from('q'))?;
        h.tick()?;

        h.core_mut().set_selected(Some(owner))?;
        h.ui.key_down(Key::from('q'))?;
        h.tick()?;
        assert_eq!(fired(&h, owner)?, 1);
        Ok(())
    }

    #[test]
    fn inaccessible_owner_does_not_fire() -> Result<()> {
        let (mut h, owner) = setup()?;
        h.core_mut()
            .add_shortcut(owner, 'q', ShortcutScope::Global, false)?;
        h.core_mut().set_visible(owner, false)?;
        h.ui.key_down(Key::from('q'))?;
        h.tick()?;
        assert_eq!(fired(&h, owner)?, 0);
        Ok(())
    }

    #[test]
    fn removed_shortcuts_stop_and_are_pruned() -> Result<()> {
        let (mut h, owner) = setup()?;
        let core = h.core_mut();
        let a = core.add_shortcut(owner, 'a', ShortcutScope::Global, false)?;
        let b = core.add_shortcut(owner, 'b', ShortcutScope::Global, false)?;
        core.remove_shortcut(a);
        assert!(core.shortcut(a).is_some_and(|s| s.is_removed()));

        h.ui.key_down(Key::from('a'))?;
        h.tick()?;
        assert_eq!(fired(&h, owner)?, 0);
        assert!(h.core().shortcut(a).is_none());

        h.core_mut().dispose(owner)?;
        assert!(h.core().shortcut(b).is_some_and(|s| s.is_removed()));
        h.tick()?;
        assert!(h.core().shortcut(b).is_none());
        Ok(())
    }
}
