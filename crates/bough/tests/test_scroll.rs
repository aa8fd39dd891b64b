//! Auto-scroll measurement, scroll bar sync, wheel scrolling and thumb
//! dragging.

#[cfg(test)]
mod tests {
    use bough::{
        Core, NodeId,
        error::{Error, Result},
        event::mouse::Button,
        geom::{Axis, Expanse, Point, Rect},
        node::AutoScroll,
        testing::Harness,
        widgets::{Panel, ScrollBar},
    };

    const VERTICAL: AutoScroll = AutoScroll {
        horizontal: false,
        vertical: true,
        resize: false,
    };

    struct Scene {
        h: Harness,
        viewer: NodeId,
        bar: NodeId,
        content: NodeId,
    }

    /// A 100x50 viewer with a vertical bar and 200 pixels of content.
    fn scene() -> Result<Scene> {
        let mut h = Harness::new(Expanse::new(200, 100))?;
        let root = h.root();
        let core = h.core_mut();
        let viewer = core.add(root, Panel::new())?.id();
        core.set_size(viewer, Expanse::new(100, 50))?;
        let bar = ScrollBar::attach(core, viewer, Axis::Vertical)?.id();
        core.set_auto_scroll(viewer, VERTICAL)?;
        let content = core.add(viewer, Panel::new())?.id();
        core.set_size(content, Expanse::new(50, 200))?;
        Ok(Scene {
            h,
            viewer,
            bar,
            content,
        })
    }

    fn bar(core: &Core, id: NodeId) -> Result<&ScrollBar> {
        core.widget::<ScrollBar>(id)
    }

    #[test]
    fn overflow_shows_and_sizes_the_bar() -> Result<()> {
        let s = scene()?;
        let core = s.h.core();
        let node = core.node(s.bar)?;
        assert!(node.is_visible());
        assert_eq!(node.viewport().rect, Rect::new(90, 0, 10, 50));
        assert_eq!(core.node(s.viewer)?.max_child(), Expanse::new(50, 200));
        assert_eq!(bar(core, s.bar)?.slider(), 0.25);
        assert_eq!(bar(core, s.bar)?.value(), 0.0);
        Ok(())
    }

    #[test]
    fn scroll_is_clamped_to_content() -> Result<()> {
        let mut s = scene()?;
        let core = s.h.core_mut();
        core.set_scroll(s.viewer, Point::new(0, 500))?;
        assert_eq!(core.node(s.viewer)?.scroll(), Point::new(0, 150));
        assert_eq!(bar(core, s.bar)?.value(), 1.0);
        // Content moves, the bar does not.
        assert_eq!(core.node(s.content)?.viewport().top_cut_off, 150);
        assert_eq!(core.node(s.bar)?.viewport().rect, Rect::new(90, 0, 10, 50));

        core.set_size(s.content, Expanse::new(50, 100))?;
        assert_eq!(core.node(s.viewer)?.scroll(), Point::new(0, 50));

        core.set_size(s.content, Expanse::new(50, 40))?;
        assert_eq!(core.node(s.viewer)?.scroll(), Point::zero());
        assert!(!core.node(s.bar)?.is_visible());
        Ok(())
    }

    #[test]
    fn overflow_without_a_bar_is_an_error() -> Result<()> {
        let mut h = Harness::new(Expanse::new(200, 100))?;
        let root = h.root();
        let core = h.core_mut();
        let viewer = core.add(root, Panel::new())?.id();
        core.set_size(viewer, Expanse::new(100, 50))?;
        core.set_auto_scroll(viewer, VERTICAL)?;
        let content = core.add(viewer, Panel::new())?;
        assert_eq!(
            core.set_size(content, Expanse::new(50, 200)),
            Err(Error::MissingScrollBar {
                node: viewer,
                axis: Axis::Vertical,
            })
        );
        // Width overflow on a disabled axis is fine.
        core.set_size(content, Expanse::new(500, 10))?;
        Ok(())
    }

    #[test]
    fn auto_resize_fits_content() -> Result<()> {
        let mut h = Harness::new(Expanse::new(200, 100))?;
        let root = h.root();
        let core = h.core_mut();
        let holder = core.add(root, Panel::new())?.id();
        core.set_auto_scroll(
            holder,
            AutoScroll {
                resize: true,
                ..AutoScroll::default()
            },
        )?;
        let a = core.add(holder, Panel::new())?;
        core.set_position(a, Point::new(10, 5))?;
        core.set_size(a, Expanse::new(20, 20))?;
        assert_eq!(core.node(holder)?.size(), Expanse::new(30, 25));
        Ok(())
    }

    #[test]
    fn wheel_scrolls_the_viewer() -> Result<()> {
        let mut s = scene()?;
        s.h.move_to((20, 20))?;
        assert!(s.h.wheel(0, 1)?);
        assert_eq!(s.h.core().node(s.viewer)?.scroll(), Point::new(0, 20));
        s.h.wheel(0, -5)?;
        assert_eq!(s.h.core().node(s.viewer)?.scroll(), Point::zero());
        // Nothing left to scroll, so the event stays unhandled.
        assert!(!s.h.wheel(0, -1)?);
        Ok(())
    }

    #[test]
    fn dragging_the_thumb_scrolls() -> Result<()> {
        let mut s = scene()?;
        s.h.move_to((95, 5))?;
        s.h.press(Button::Left)?;
        assert!(bar(s.h.core(), s.bar)?.is_dragging());
        s.h.move_to((95, 42))?;
        assert_eq!(s.h.core().node(s.viewer)?.scroll(), Point::new(0, 150));
        assert_eq!(bar(s.h.core(), s.bar)?.value(), 1.0);
        s.h.release(Button::Left)?;
        assert!(!bar(s.h.core(), s.bar)?.is_dragging());
        Ok(())
    }

    #[test]
    fn clicking_the_track_pages() -> Result<()> {
        let mut s = scene()?;
        s.h.click((95, 40))?;
        assert_eq!(s.h.core().node(s.viewer)?.scroll(), Point::new(0, 50));
        s.h.click((95, 45))?;
        assert_eq!(s.h.core().node(s.viewer)?.scroll(), Point::new(0, 100));
        Ok(())
    }

    #[test]
    fn disposing_the_bar_unlinks_it() -> Result<()> {
        let mut s = scene()?;
        let core = s.h.core_mut();
        core.dispose(s.bar)?;
        assert_eq!(core.node(s.viewer)?.scrollbars().vertical, None);
        Ok(())
    }
}
