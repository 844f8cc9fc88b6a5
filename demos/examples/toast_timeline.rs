// Copyright 2025 the Understory Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! Headless toast timeline: a scripted host driving a `Viewport`.
//!
//! The "host" here is a loop that pretends to be a UI framework. Each frame
//! it processes queued actions, renders, prints what it would paint, and then
//! reports measured sizes back. Text width is faked from the string length.
//!
//! Run:
//! - `cargo run -p understory_toast_demos --example toast_timeline`
//! - `cargo run -p understory_toast_demos --example toast_timeline -- bottom`

use kurbo::{Rect, Size};
use tracing_subscriber::filter::LevelFilter;
use understory_anchor_layout::Placement;
use understory_toast::{
    DefaultToastData, DefaultToastPatch, ShowOptions, ToastConfig, ToastKind, Viewport,
};

type DemoResult = Result<(), Box<dyn std::error::Error + Send + Sync>>;

const FRAME_MS: u64 = 50;

fn fake_measure(data: &DefaultToastData) -> Size {
    Size::new(16.0 + 7.0 * data.text.chars().count() as f64, 24.0)
}

fn main() -> DemoResult {
    // The default `tracing-log` feature forwards the toast runtime's `log`
    // records, so warnings about unknown anchors show up here.
    tracing_subscriber::fmt()
        .with_max_level(LevelFilter::WARN)
        .with_writer(std::io::stderr)
        .try_init()?;

    // Side of the "save" button the first toast attaches to; the follow-up
    // toast goes on the opposite side.
    let save_side = match std::env::args().nth(1) {
        Some(name) => Placement::from_name(&name)
            .ok_or_else(|| format!("unknown placement '{name}', expected top/right/bottom/left"))?,
        None => Placement::Top,
    };

    let config = ToastConfig::default().with_animation_duration(200);
    let mut viewport = Viewport::<DefaultToastData>::new(config)?;

    // Toasts queued before mount wait for the surface.
    let toaster = viewport.toaster();
    let hello = toaster.show_toast(
        "save",
        "Saving...",
        ShowOptions {
            placement: Some(save_side),
            ..ShowOptions::default()
        },
    );

    viewport.mount(Size::new(640.0, 480.0));
    viewport.register_anchor("save", Rect::new(280.0, 220.0, 360.0, 250.0));
    viewport.register_anchor("name", Rect::new(40.0, 100.0, 240.0, 124.0));

    let mut now = 0;
    for step in 0..40 {
        match step {
            4 => {
                toaster.update_toast(
                    hello,
                    DefaultToastPatch {
                        text: Some("Saved".into()),
                        kind: Some(ToastKind::Success),
                    },
                );
                toaster.show_toast(
                    "save",
                    "3 files written",
                    ShowOptions {
                        placement: Some(save_side.opposite()),
                        duration_ms: 600,
                        ..ShowOptions::default()
                    },
                );
            }
            6 => {
                toaster.show_toast(
                    "name",
                    "Name is required",
                    ShowOptions {
                        kind: ToastKind::Error,
                        placement: Some(Placement::Right),
                        duration_ms: 0,
                    },
                );
                // Nobody registered this one; the viewport warns and moves on.
                toaster.remove_all_toasts_by_name("nowhere");
            }
            12 => viewport.set_anchor_bounds("save", Rect::new(300.0, 260.0, 380.0, 290.0)),
            20 => toaster.remove_toast(hello),
            26 => viewport.unregister_anchor("name"),
            _ => {}
        }

        let report = viewport.frame(now);
        for event in &report.events {
            println!("{now:>5}ms  event {event:?}");
        }

        if viewport.needs_render() {
            let mut sizes = Vec::new();
            for toast in viewport.render(now) {
                match toast.rect {
                    Some(rect) => println!(
                        "{now:>5}ms  {:<8} {:<6} {:<9} ({:>6.1}, {:>6.1}) {:>5.1}x{:<4.1} slide ({:.1}, {:.1}) {:?}",
                        toast.id.to_string(),
                        toast.anchor,
                        format!("{:?}", toast.phase),
                        rect.x0,
                        rect.y0,
                        rect.width(),
                        rect.height(),
                        toast.slide.x,
                        toast.slide.y,
                        toast.data.text,
                    ),
                    None => println!(
                        "{now:>5}ms  {:<8} {:<6} {:<9} off-screen {:?}",
                        toast.id.to_string(),
                        toast.anchor,
                        format!("{:?}", toast.phase),
                        toast.data.text,
                    ),
                }
                sizes.push((toast.id, fake_measure(toast.data)));
            }
            // Paint happened; report natural sizes for the next layout.
            for (id, size) in sizes {
                viewport.measure(id, size);
            }
        }

        if viewport.is_empty() && step > 26 {
            println!("{now:>5}ms  all toasts gone");
            break;
        }
        now += FRAME_MS;
    }
    Ok(())
}
