//! Creation, disposal, render order and shutdown.

#[cfg(test)]
mod tests {
    use std::{cell::RefCell, rc::Rc};

    use bough::{
        Context, Error, NodeId,
        dump::dump_plain,
        error::Result,
        focus::FocusManager,
        geom::{Expanse, Point},
        name::NodeName,
        testing::Harness,
        widget::Widget,
        widgets::Panel,
    };

    type Log = Rc<RefCell<Vec<String>>>;

    /// Logs lifecycle hooks under a label.
    struct Tracked {
        label: &'static str,
        log: Log,
        veto: bool,
    }

    impl Tracked {
        fn new(label: &'static str, log: &Log) -> Self {
            Self {
                label,
                log: log.clone(),
                veto: false,
            }
        }
    }

    impl Widget for Tracked {
        fn name(&self) -> NodeName {
            NodeName::convert(self.label)
        }

        fn selectable(&self) -> bool {
            true
        }

        fn on_mount(&mut self, _ctx: &mut dyn Context) -> Result<()> {
            self.log.borrow_mut().push(format!("mount {}", self.label));
            Ok(())
        }

        fn before_dispose(&mut self, _ctx: &mut dyn Context) -> bool {
            self.log.borrow_mut().push(format!("before {}", self.label));
            !self.veto
        }

        fn on_dispose(&mut self, _ctx: &mut dyn Context) {
            self.log.borrow_mut().push(format!("dispose {}", self.label));
        }
    }

    fn sized(h: &mut Harness, parent: NodeId, widget: impl Widget, size: (u32, u32)) -> Result<NodeId> {
        let core = h.core_mut();
        let id = core.add(parent, widget)?.id();
        core.set_size(id, Expanse::new(size.0, size.1))?;
        Ok(id)
    }

    #[test]
    fn veto_keeps_the_subtree() -> Result<()> {
        let log = Log::default();
        let mut h = Harness::new(Expanse::new(100, 100))?;
        let root = h.root();
        let mut parent = Tracked::new("parent", &log);
        parent.veto = true;
        let p = sized(&mut h, root, parent, (50, 50))?;
        let c = sized(&mut h, p, Tracked::new("child", &log), (10, 10))?;

        assert!(!h.core_mut().dispose(p)?);
        assert!(h.core().contains(p));
        assert!(h.core().contains(c));
        assert_eq!(*log.borrow(), vec!["mount parent", "mount child", "before parent"]);
        Ok(())
    }

    #[test]
    fn dispose_runs_hooks_top_down() -> Result<()> {
        let log = Log::default();
        let mut h = Harness::new(Expanse::new(100, 100))?;
        let root = h.root();
        let p = sized(&mut h, root, Tracked::new("parent", &log), (50, 50))?;
        let c = sized(&mut h, p, Tracked::new("child", &log), (10, 10))?;
        let g = sized(&mut h, c, Tracked::new("grandchild", &log), (5, 5))?;
        log.borrow_mut().clear();

        assert!(h.core_mut().dispose(p)?);
        assert_eq!(
            *log.borrow(),
            vec!["before parent", "dispose parent", "dispose child", "dispose grandchild"]
        );
        for id in [p, c, g] {
            assert!(!h.core().contains(id));
            assert_eq!(h.core().node(id).err(), Some(Error::Disposed(id)));
        }
        assert_eq!(h.core().children(root)?, Vec::<NodeId>::new());
        assert_eq!(h.core().len(), 1);
        Ok(())
    }

    #[test]
    fn self_disposal_still_runs_the_dispose_hook() -> Result<()> {
        let log = Log::default();
        let mut h = Harness::new(Expanse::new(100, 100))?;
        let root = h.root();
        let p = sized(&mut h, root, Tracked::new("parent", &log), (50, 50))?;
        let c = sized(&mut h, p, Tracked::new("child", &log), (10, 10))?;
        log.borrow_mut().clear();

        let disposed = h
            .core_mut()
            .with_widget::<Tracked, _>(p, |_, ctx| ctx.dispose())?;
        assert!(disposed);
        assert_eq!(*log.borrow(), vec!["dispose child", "dispose parent"]);
        assert!(!h.core().contains(p));
        assert!(!h.core().contains(c));
        assert_eq!(h.core().children(root)?, Vec::<NodeId>::new());
        Ok(())
    }

    #[test]
    fn releases_reach_the_renderer() -> Result<()> {
        let mut h = Harness::new(Expanse::new(100, 100))?;
        let root = h.root();
        let p = sized(&mut h, root, Panel::new(), (50, 50))?;
        let c = sized(&mut h, p, Panel::new(), (10, 10))?;
        h.tick()?;
        assert!(h.renderer.released().is_empty());

        h.core_mut().dispose(p)?;
        h.tick()?;
        let released = h.renderer.released();
        assert_eq!(released.len(), 2);
        assert!(released.contains(&p));
        assert!(released.contains(&c));
        Ok(())
    }

    #[test]
    fn stale_handles_are_rejected() -> Result<()> {
        let mut h = Harness::new(Expanse::new(100, 100))?;
        let root = h.root();
        let p = sized(&mut h, root, Panel::new(), (50, 50))?;
        h.core_mut().dispose(p)?;
        assert_eq!(
            h.core_mut().set_position(p, Point::new(1, 1)),
            Err(Error::Disposed(p))
        );
        assert_eq!(h.core_mut().add(p, Panel::new()).err(), Some(Error::Disposed(p)));
        assert_eq!(h.core_mut().dispose(p), Err(Error::Disposed(p)));
        Ok(())
    }

    #[test]
    fn root_cannot_be_disposed() -> Result<()> {
        let mut h = Harness::new(Expanse::new(100, 100))?;
        let root = h.root();
        assert!(matches!(h.core_mut().dispose(root), Err(Error::RootUnsupported(_))));
        Ok(())
    }

    #[test]
    fn render_order_follows_z_then_tree() -> Result<()> {
        let mut h = Harness::new(Expanse::new(100, 100))?;
        let root = h.root();
        let a = sized(&mut h, root, Panel::new(), (10, 10))?;
        let b = sized(&mut h, root, Panel::new(), (10, 10))?;
        let hidden = sized(&mut h, root, Panel::new(), (10, 10))?;
        let empty = sized(&mut h, root, Panel::new(), (0, 0))?;
        h.core_mut().set_visible(hidden, false)?;
        h.tick()?;
        let frame = h.renderer.last_frame().ok_or(Error::Internal("no frame".into()))?;
        assert_eq!(frame.order(), vec![root, a, b]);
        assert!(frame.get(empty).is_none());

        h.core_mut().set_z_index(a, 5)?;
        h.tick()?;
        let frame = h.renderer.last_frame().ok_or(Error::Internal("no frame".into()))?;
        assert_eq!(frame.order(), vec![root, b, a]);
        assert_eq!(frame.get(a).map(|p| p.viewport.z), Some(5));
        Ok(())
    }

    #[test]
    fn z_and_layers_inherit() -> Result<()> {
        let mut h = Harness::new(Expanse::new(100, 100))?;
        let root = h.root();
        let p = sized(&mut h, root, Panel::new(), (50, 50))?;
        let c = sized(&mut h, p, Panel::new(), (10, 10))?;
        let core = h.core_mut();
        core.set_z_index(p, 3)?;
        core.set_z_index(c, 2)?;
        core.set_window_layer(p, 2)?;
        core.set_window_layer(c, 1)?;
        assert_eq!(core.z_index(c)?, 5);
        assert_eq!(core.node(c)?.viewport().z, 5);
        assert_eq!(core.window_layer(c)?, 2);
        core.set_window_layer(c, 4)?;
        assert_eq!(core.window_layer(c)?, 4);
        assert_eq!(core.window_layer(root)?, 0);
        assert!(matches!(core.set_window_layer(root, 1), Err(Error::RootUnsupported(_))));
        Ok(())
    }

    #[test]
    fn shutdown_clears_everything_but_the_root() -> Result<()> {
        let log = Log::default();
        let mut h = Harness::new(Expanse::new(100, 100))?;
        let root = h.root();
        let mut stubborn = Tracked::new("stubborn", &log);
        stubborn.veto = true;
        let s = sized(&mut h, root, stubborn, (50, 50))?;
        let modal = sized(&mut h, root, Panel::new(), (10, 10))?;
        h.click((5, 5))?;
        assert_eq!(h.core().selected(), Some(s));
        h.core_mut().push_active(modal)?;

        h.ui.shutdown()?;
        let core = h.core();
        assert_eq!(core.len(), 1);
        assert!(core.contains(root));
        assert_eq!(core.selected(), None);
        assert_eq!(core.active(), None);
        assert!(log.borrow().contains(&"dispose stubborn".to_string()));
        assert!(!log.borrow().contains(&"before stubborn".to_string()));
        assert!(h.renderer.released().contains(&modal));
        Ok(())
    }

    #[test]
    fn dump_shows_names_and_state() -> Result<()> {
        let log = Log::default();
        let mut h = Harness::new(Expanse::new(100, 100))?;
        let root = h.root();
        let p = sized(&mut h, root, Tracked::new("toolbar", &log), (50, 20))?;
        sized(&mut h, p, Panel::new(), (10, 10))?;
        h.click((5, 5))?;

        let out = dump_plain(h.core(), root)?;
        let lines: Vec<&str> = out.lines().collect();
        assert!(lines[0].starts_with("root"));
        assert!(out.contains("    toolbar"));
        assert!(out.lines().any(|l| l.contains("toolbar") && l.contains("SELECTED")));
        assert!(out.contains("        panel"));
        assert!(out.contains("size: 50 × 20"));
        Ok(())
    }
}
