use crate::{
    Context, NodeId, TypedId,
    core::{
        Core,
        node::{Dock, HDock, VDock},
        viewport::{Color, Sprite, SpriteKey},
    },
    error::Result,
    event::mouse::{Button, MouseEvent},
    geom::{Axis, Expanse, Rect},
    widget::{DrawContext, EventOutcome, NodeOptions, Pressable, ScrollBarControl, Widget},
};

/// Default cross-axis thickness of a bar.
pub const THICKNESS: u32 = 10;
/// Shortest thumb, so it stays grabbable on huge content.
const MIN_THUMB: u32 = 8;

const TRACK: Color = Color::rgb(40, 40, 40);
const THUMB: Color = Color::rgb(120, 120, 120);
const THUMB_ACTIVE: Color = Color::rgb(170, 170, 170);

/// Thumb start and length along a track of `track` pixels, for a scroll
/// position and visible fraction in `0..=1`.
pub fn thumb_span(track: u32, value: f32, slider: f32) -> (u32, u32) {
    if track == 0 {
        return (0, 0);
    }
    let len = ((track as f32 * slider.clamp(0.0, 1.0)).round() as u32).clamp(MIN_THUMB.min(track), track);
    let travel = track - len;
    let start = (travel as f32 * value.clamp(0.0, 1.0)).round() as u32;
    (start, len)
}

/// A scroll bar for one axis of a target node.
///
/// The target pushes its range through [`ScrollBarControl`]; clicks on the
/// track page by one view, and dragging the thumb scrolls the target
/// proportionally.
#[derive(Debug, Clone)]
pub struct ScrollBar {
    /// Node being scrolled.
    target: NodeId,
    /// Axis the bar controls.
    axis: Axis,
    /// Scroll position as a fraction of the range.
    value: f32,
    /// Visible fraction of the content.
    slider: f32,
    /// Offset of the pointer from the thumb start while dragging.
    grab: Option<i32>,
}

impl ScrollBar {
    /// A bar scrolling `target` along `axis`.
    pub fn new(target: impl Into<NodeId>, axis: Axis) -> Self {
        Self {
            target: target.into(),
            axis,
            value: 0.0,
            slider: 1.0,
            grab: None,
        }
    }

    /// Create a bar as a child of `target`, docked to its right or bottom
    /// edge, and link it to the target's axis.
    pub fn attach(core: &mut Core, target: impl Into<NodeId>, axis: Axis) -> Result<TypedId<Self>> {
        let target = target.into();
        let bar = core.add(target, Self::new(target, axis))?;
        let (dock, size) = match axis {
            Axis::Vertical => (
                Dock {
                    horizontal: HDock::Right,
                    vertical: VDock::Fill,
                },
                Expanse::new(THICKNESS, 0),
            ),
            Axis::Horizontal => (
                Dock {
                    horizontal: HDock::Fill,
                    vertical: VDock::Bottom,
                },
                Expanse::new(0, THICKNESS),
            ),
        };
        core.set_size(bar, size)?;
        core.set_dock(bar, dock)?;
        core.link_scrollbar(target, axis, bar)?;
        Ok(bar)
    }

    /// Node being scrolled.
    pub fn target(&self) -> NodeId {
        self.target
    }

    /// Axis the bar controls.
    pub fn axis(&self) -> Axis {
        self.axis
    }

    /// Scroll position as a fraction of the range.
    pub fn value(&self) -> f32 {
        self.value
    }

    /// Visible fraction of the content.
    pub fn slider(&self) -> f32 {
        self.slider
    }

    /// Is the thumb being dragged?
    pub fn is_dragging(&self) -> bool {
        self.grab.is_some()
    }

    /// Track length along the bar's axis.
    fn track(&self, ctx: &dyn Context) -> Result<u32> {
        Ok(ctx.size()?.along(self.axis))
    }

    /// Pointer offset along the track, in bar-local pixels.
    fn local(&self, event: &MouseEvent, ctx: &dyn Context) -> Result<i32> {
        let origin = ctx.viewport()?.content_origin();
        Ok(event.position.along(self.axis) - origin.along(self.axis))
    }

    /// Scroll the target and re-read the position it settled on.
    fn scroll_to(&mut self, fraction: f32, ctx: &mut dyn Context) -> Result<()> {
        let target = self.target;
        let axis = self.axis;
        ctx.core_mut().set_scroll_fraction(target, axis, fraction)?;

        // The target's range update skips this bar while its own callback
        // runs, so read the settled offset back directly.
        let node = ctx.core().node(target)?;
        let range = node
            .max_child()
            .along(axis)
            .saturating_sub(node.size().along(axis));
        if range > 0 {
            self.value = node.scroll().along(axis) as f32 / range as f32;
        }
        Ok(())
    }
}

impl ScrollBarControl for ScrollBar {
    fn set_range(&mut self, value: f32, slider: f32) {
        self.value = value.clamp(0.0, 1.0);
        self.slider = slider.clamp(0.0, 1.0);
    }
}

impl Pressable for ScrollBar {
    fn on_mouse_down_inside(
        &mut self,
        event: &MouseEvent,
        button: Button,
        ctx: &mut dyn Context,
    ) -> Result<EventOutcome> {
        if button != Button::Left {
            return Ok(EventOutcome::Ignore);
        }
        let track = self.track(ctx)?;
        let (start, len) = thumb_span(track, self.value, self.slider);
        let at = self.local(event, ctx)?;
        if at >= start as i32 && at < (start + len) as i32 {
            self.grab = Some(at - start as i32);
            return Ok(EventOutcome::Handle);
        }
        let page = if at < start as i32 { -self.slider } else { self.slider };
        let range_fraction = 1.0 - self.slider;
        let step = if range_fraction > 0.0 { page / range_fraction } else { 0.0 };
        self.scroll_to(self.value + step, ctx)?;
        Ok(EventOutcome::Handle)
    }

    fn on_mouse_press(
        &mut self,
        event: &MouseEvent,
        button: Button,
        started_inside: bool,
        ctx: &mut dyn Context,
    ) -> Result<EventOutcome> {
        let Some(grab) = self.grab else {
            return Ok(EventOutcome::Ignore);
        };
        if button != Button::Left || !started_inside {
            return Ok(EventOutcome::Ignore);
        }
        let track = self.track(ctx)?;
        let (_, len) = thumb_span(track, self.value, self.slider);
        let travel = track.saturating_sub(len);
        if travel == 0 {
            return Ok(EventOutcome::Consume);
        }
        let start = self.local(event, ctx)? - grab;
        self.scroll_to(start as f32 / travel as f32, ctx)?;
        Ok(EventOutcome::Handle)
    }

    fn on_mouse_up(
        &mut self,
        _event: &MouseEvent,
        button: Button,
        _inside: bool,
        ctx: &mut dyn Context,
    ) -> Result<EventOutcome> {
        if button == Button::Left && self.grab.take().is_some() {
            ctx.redraw()?;
        }
        Ok(EventOutcome::Ignore)
    }
}

impl Widget for ScrollBar {
    fn options(&self) -> NodeOptions {
        NodeOptions {
            consider_scroll: false,
            scroll_participant: false,
            always_active_mouse: false,
            is_scrollbar: true,
        }
    }

    fn draw(&mut self, dc: &mut DrawContext<'_>) -> Result<()> {
        dc.sprites
            .set(SpriteKey::Background, Sprite::filled(dc.size.rect(), TRACK));
        let (start, len) = thumb_span(dc.size.along(self.axis), self.value, self.slider);
        let thumb = match self.axis {
            Axis::Vertical => Rect::new(0, start as i32, dc.size.w, len),
            Axis::Horizontal => Rect::new(start as i32, 0, len, dc.size.h),
        };
        let color = if self.grab.is_some() || dc.hovered { THUMB_ACTIVE } else { THUMB };
        dc.sprites.set(SpriteKey::Content, Sprite::filled(thumb, color));
        Ok(())
    }

    fn pressable(&mut self) -> Option<&mut dyn Pressable> {
        Some(self)
    }

    fn scroll_bar(&mut self) -> Option<&mut dyn ScrollBarControl> {
        Some(self)
    }
}
