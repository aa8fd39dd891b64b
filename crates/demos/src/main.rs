//! scrollgym: builds a scrolling list of buttons, replays a scripted input
//! sequence against it and prints the resulting tree.

use std::{fs, time::Duration};

use anyhow::{Context as _, Result, bail};
use bough::{prelude::*, dump, testing::Harness};
use clap::Parser;
use tracing::info;
use tracing_subscriber::EnvFilter;

/// Replay input against a scrolling list and dump the tree.
#[derive(Parser, Debug)]
#[clap(author, version, about, long_about = None)]
struct Args {
    /// Window width.
    #[clap(long, default_value_t = 240)]
    width: u32,

    /// Window height.
    #[clap(long, default_value_t = 120)]
    height: u32,

    /// Number of buttons in the list.
    #[clap(short, long, default_value_t = 12)]
    items: usize,

    /// JSON configuration file.
    #[clap(short, long)]
    config: Option<String>,

    /// Semicolon-separated commands: `move X Y`, `click X Y`, `down X Y`,
    /// `up`, `wheel DX DY`, `wait MS`, `menu`, `dump`.
    #[clap(short, long, default_value = "move 20 10; wait 700; wheel 0 2; click 20 30; dump")]
    script: String,

    /// Print the tree with colour codes.
    #[clap(long)]
    color: bool,
}

/// One scripted input step.
#[derive(Debug, PartialEq)]
enum Step {
    /// Move the pointer.
    Move(i32, i32),
    /// Move and left-click.
    Click(i32, i32),
    /// Move and put the left button down.
    Down(i32, i32),
    /// Release the left button.
    Up,
    /// Turn the wheel.
    Wheel(i32, i32),
    /// Advance the clock by milliseconds.
    Wait(u64),
    /// Open a context menu on the list.
    Menu,
    /// Print the tree.
    Dump,
}

/// Parse a script into steps.
fn parse_script(script: &str) -> Result<Vec<Step>> {
    let mut steps = Vec::new();
    for command in script.split(';').map(str::trim).filter(|c| !c.is_empty()) {
        let words: Vec<&str> = command.split_whitespace().collect();
        let int = |i: usize| -> Result<i32> {
            let word = words.get(i).with_context(|| format!("{command:?}: missing argument"))?;
            word.parse().with_context(|| format!("{command:?}: bad number {word:?}"))
        };
        let step = match words.first().copied().unwrap_or_default() {
            "move" => Step::Move(int(1)?, int(2)?),
            "click" => Step::Click(int(1)?, int(2)?),
            "down" => Step::Down(int(1)?, int(2)?),
            "up" => Step::Up,
            "wheel" => Step::Wheel(int(1)?, int(2)?),
            "wait" => Step::Wait(u64::try_from(int(1)?).context("negative wait")?),
            "menu" => Step::Menu,
            "dump" => Step::Dump,
            other => bail!("unknown command {other:?}"),
        };
        steps.push(step);
    }
    Ok(steps)
}

/// The scene: a viewer with a vertical bar holding a stack of buttons.
struct Scene {
    /// Scrolling viewport.
    viewer: NodeId,
    /// Button stack inside the viewer.
    list: NodeId,
}

/// Populate the root.
fn build(core: &mut Core, items: usize) -> Result<Scene> {
    let root = core.root();
    let viewer = core.add(root, Panel::with_background(Color::rgb(30, 30, 40)))?.id();
    core.set_dock(viewer, Dock::fill())?;
    ScrollBar::attach(core, viewer, Axis::Vertical)?;
    core.set_auto_scroll(
        viewer,
        AutoScroll {
            vertical: true,
            ..AutoScroll::default()
        },
    )?;

    let list = core.add(viewer, Stack::vertical().with_uniform(120))?.id();
    for i in 0..items {
        let button = core.add(list, ButtonWidget::new(format!("item {i}")))?.id();
        core.set_size(button, Expanse::new(120, 20))?;
        core.set_margins(button, Margins::new(2, 4, 2, 4))?;
        core.set_help_text(button, Some(format!("Button number {i}")))?;
    }
    Ok(Scene { viewer, list })
}

/// Dump the whole tree to stdout.
fn print_tree(h: &Harness, color: bool) -> Result<()> {
    let root = h.root();
    let out = if color {
        dump::dump(h.core(), root)?
    } else {
        dump::dump_plain(h.core(), root)?
    };
    println!("{out}");
    Ok(())
}

fn main() -> Result<()> {
    let args = Args::parse();
    tracing_subscriber::fmt()
        .with_env_filter(EnvFilter::from_default_env())
        .with_writer(std::io::stderr)
        .init();

    let config = match &args.config {
        Some(path) => {
            let source = fs::read_to_string(path).with_context(|| format!("reading {path}"))?;
            Config::from_json(&source)?
        }
        None => Config::default(),
    };
    let steps = parse_script(&args.script)?;

    let mut h = Harness::with_config(Expanse::new(args.width, args.height), config)?;
    let scene = build(h.core_mut(), args.items)?;
    h.tick()?;
    info!(items = args.items, steps = steps.len(), "scene ready");

    for step in steps {
        match step {
            Step::Move(x, y) => {
                h.move_to((x, y))?;
            }
            Step::Click(x, y) => h.click((x, y))?,
            Step::Down(x, y) => {
                h.move_to((x, y))?;
                h.press(Button::Left)?;
            }
            Step::Up => {
                h.release(Button::Left)?;
            }
            Step::Wheel(dx, dy) => {
                h.wheel(dx, dy)?;
            }
            Step::Wait(ms) => h.advance(Duration::from_millis(ms))?,
            Step::Menu => {
                let items = vec![MenuItem::new("Scroll to top"), MenuItem::disabled("Delete")];
                h.core_mut().queue_context_menu(scene.list, items)?;
            }
            Step::Dump => print_tree(&h, args.color)?,
        }
        h.tick()?;
    }

    let viewer = h.core().node(scene.viewer)?;
    info!(
        scroll = ?viewer.scroll(),
        content = ?viewer.max_child(),
        frames = h.renderer.frame_count(),
        "replay finished"
    );
    h.ui.shutdown()?;
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn scripts_parse() -> Result<()> {
        assert_eq!(
            parse_script("move 1 2; wait 30;; dump")?,
            vec![Step::Move(1, 2), Step::Wait(30), Step::Dump]
        );
        assert!(parse_script("click 1").is_err());
        assert!(parse_script("jump").is_err());
        assert!(parse_script("wait -4").is_err());
        Ok(())
    }

    #[test]
    fn scene_overflows_and_scrolls() -> Result<()> {
        let mut h = Harness::new(Expanse::new(240, 120))?;
        let scene = build(h.core_mut(), 12)?;
        h.tick()?;
        h.tick()?;
        let content = h.core().node(scene.viewer)?.max_child();
        assert_eq!(content.h, 12 * 28);
        h.move_to((20, 20))?;
        assert!(h.wheel(0, 1)?);
        assert_eq!(h.core().node(scene.viewer)?.scroll().y, 20);
        Ok(())
    }
}
