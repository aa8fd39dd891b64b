use std::io::{self, Write};

use termcolor::{Buffer, Color, ColorSpec, WriteColor};

use crate::{
    NodeId,
    core::{Core, focus::FocusManager},
    error::{Error, Result},
};

/// Traverses a tree of nodes and returns a string showing the node names,
/// viewports, layers and z order for visual display. This is a debug
/// function.
pub fn dump(core: &Core, root: NodeId) -> Result<String> {
    let mut buffer = Buffer::ansi();
    dump_node(&mut buffer, core, root, 0).map_err(io_error)?;
    Ok(String::from_utf8_lossy(buffer.as_slice()).into_owned())
}

/// Like [`dump`], but without colour codes.
pub fn dump_plain(core: &Core, root: NodeId) -> Result<String> {
    let mut buffer = Buffer::no_color();
    dump_node(&mut buffer, core, root, 0).map_err(io_error)?;
    Ok(String::from_utf8_lossy(buffer.as_slice()).into_owned())
}

/// Map a buffer write failure.
fn io_error(e: io::Error) -> Error {
    Error::Internal(format!("dump: {e}"))
}

/// Helper to write an indented, colored label followed by a value.
fn write_field(buffer: &mut Buffer, indent: &str, label: &str, value: &str) -> io::Result<()> {
    write!(buffer, "{indent}  ")?;
    buffer.set_color(ColorSpec::new().set_fg(Some(Color::Green)))?;
    write!(buffer, "{label}")?;
    buffer.reset()?;
    writeln!(buffer, " {value}")
}

/// Walk a node subtree and emit formatted debug output.
fn dump_node(buffer: &mut Buffer, core: &Core, node_id: NodeId, level: usize) -> io::Result<()> {
    let Some(node) = core.nodes.get(node_id) else {
        return Ok(());
    };
    let indent = "    ".repeat(level);

    write!(buffer, "{indent}")?;
    buffer.set_color(ColorSpec::new().set_fg(Some(Color::Cyan)).set_bold(true))?;
    write!(buffer, "{}", node.name)?;
    buffer.reset()?;
    write!(buffer, " {node_id:?}")?;

    let mut indicators = Vec::new();
    if core.is_selected(node_id) {
        indicators.push(("SELECTED", Color::Magenta));
    }
    if core.active() == Some(node_id) {
        indicators.push(("ACTIVE", Color::Red));
    }
    if !node.visible {
        indicators.push(("hidden", Color::Yellow));
    }
    if node.mouse.inside {
        indicators.push(("hover", Color::Blue));
    }
    for (i, (label, color)) in indicators.iter().enumerate() {
        write!(buffer, "{}", if i == 0 { " " } else { ", " })?;
        buffer.set_color(ColorSpec::new().set_fg(Some(*color)))?;
        write!(buffer, "{label}")?;
        buffer.reset()?;
    }
    writeln!(buffer)?;

    let pos = node.position;
    write_field(
        buffer,
        &indent,
        "pos:",
        &format!("({}, {}) size: {} × {}", pos.x, pos.y, node.size.w, node.size.h),
    )?;
    let vp = node.viewport;
    write_field(
        buffer,
        &indent,
        "viewport:",
        &format!(
            "x: {}, y: {}, w: {}, h: {}, cut: ({}, {})",
            vp.rect.tl.x, vp.rect.tl.y, vp.rect.w, vp.rect.h, vp.left_cut_off, vp.top_cut_off
        ),
    )?;
    let layer = core.window_layer(node_id).unwrap_or_default();
    write_field(buffer, &indent, "layer:", &format!("{layer} z: {}", vp.z))?;
    if !node.scroll.is_zero() || node.auto_scroll.enabled() {
        write_field(
            buffer,
            &indent,
            "scroll:",
            &format!(
                "({}, {}) content: {} × {}",
                node.scroll.x, node.scroll.y, node.max_child.w, node.max_child.h
            ),
        )?;
    }

    for child in &node.children {
        dump_node(buffer, core, *child, level + 1)?;
    }
    Ok(())
}
