//! Headless walkthrough of the segment control.
//!
//! Drives a control with simulated taps, drags and wheel input on a stepped
//! clock and logs what it would draw. Pass a JSON `SegmentDescription` path
//! to start from that instead of the built-in titles.
//!
//! `RUST_LOG=debug cargo run -p pinstrip-demo [description.json]`

use anyhow::Context;
use pinstrip_core::prelude::*;
use pinstrip_ui::{SegmentControl, SegmentDescription, SegmentStyle};
use web_time::Duration;

const FRAME: Duration = Duration::from_millis(16);

fn load_control() -> anyhow::Result<SegmentControl> {
    if let Some(path) = std::env::args().nth(1) {
        let json = std::fs::read_to_string(&path).with_context(|| format!("reading {path}"))?;
        let desc: SegmentDescription =
            serde_json::from_str(&json).with_context(|| format!("parsing {path}"))?;
        return Ok(SegmentControl::from_description(desc)?);
    }

    let style = SegmentStyle::default()
        .with_cover_color(Color::from_hex("#E9E9E9"))
        .with_title_colors(Color::from_hex("#9A9A9A"), Color::from_hex("#111111"));
    Ok(SegmentControl::new(
        Rect::new(0.0, 64.0, 375.0, 44.0),
        style,
        [
            "For you", "Following", "Recipes", "Home decor", "Fashion", "Travel", "Art",
            "Quotes", "DIY",
        ],
    )?)
}

// Steps the clock until the control settles.
fn settle(control: &mut SegmentControl, clock: &TestClock) -> usize {
    let mut frames = 0;
    while control.is_animating() && frames < 600 {
        clock.advance(FRAME);
        control.tick();
        frames += 1;
    }
    frames
}

fn report(control: &SegmentControl, what: &str) {
    let scene = control.paint();
    let visible = scene
        .resolve()
        .iter()
        .filter(|p| p.visible_rect().is_some_and(|r| r.w > 0.0 && r.h > 0.0))
        .count();
    let title = control
        .selected_segment()
        .map(|s| s.title.as_str())
        .unwrap_or("-");
    log::info!(
        "{what}: selected {} ({title}), offset {:.1}/{:.1}, cover {:?}, {} nodes ({visible} visible)",
        control.selected_index(),
        control.scroll_offset(),
        control.max_scroll_offset(),
        control.indicator_rect(),
        scene.nodes.len(),
    );
}

fn main() -> anyhow::Result<()> {
    env_logger::init();
    log::info!("Starting pinstrip demo");

    let clock = TestClock::install();
    let mut control = load_control()?;
    control.set_on_value_change(|i| log::info!("value changed -> {i}"));
    let target = control.add_target(ControlEvents::VALUE_CHANGED, |ev| {
        log::debug!("target got {:?} ({})", ev.kind, ev.value)
    });
    report(&control, "initial");

    // tap the third segment, at its center on screen
    if let Some(seg) = control.segments().get(2) {
        let x = seg.rect.mid_x() - control.scroll_offset();
        let y = seg.rect.mid_y();
        control.handle_pointer(&PointerEvent::down(x, y));
        control.handle_pointer(&PointerEvent::up(x, y));
        let frames = settle(&mut control, &clock);
        report(&control, &format!("tap ({frames} frames)"));
    }

    // drag the strip left and let it fling
    let y = control.frame().h / 2.0;
    control.handle_pointer(&PointerEvent::down(300.0, y));
    for x in [280.0, 240.0, 190.0, 150.0] {
        clock.advance(FRAME);
        control.handle_pointer(&PointerEvent::moved(x, y));
    }
    control.handle_pointer(&PointerEvent::up(150.0, y));
    let frames = settle(&mut control, &clock);
    report(&control, &format!("drag + fling ({frames} frames)"));

    let leftover = control.handle_scroll(-10_000.0);
    report(&control, &format!("wheel to start (leftover {leftover:.1})"));

    let last = control.segments().len().saturating_sub(1);
    control.set_selected_index(last, false);
    report(&control, "jump to last");

    control.remove_target(target);
    control.set_style(control.style().clone().with_margin(24.0).with_padding(18.0, 10.0));
    report(&control, "restyled");

    control.set_titles(["Today", "Ideas", "Saved"]);
    let frames = settle(&mut control, &clock);
    report(&control, &format!("new titles ({frames} frames)"));

    Ok(())
}
