// Example: a host loop feeding taps and scroll echoes into the tween controller.
use scroll_pager::{Easing, PagerOptions};
use scroll_pager_adapter::Controller;

fn main() {
    let mut c: Controller =
        Controller::new(PagerOptions::default().with_transition(240, Easing::EaseOut));
    c.set_titles(["News", "Sports", "Weather", "Travel"]);
    c.on_bounds(400.0, 44.0, 0);
    c.on_viewport(400.0, 700.0);

    c.on_tap(3, 0).expect("index in range");

    let mut now_ms = 0u64;
    loop {
        // Simulate a 60fps "tick".
        now_ms = now_ms.saturating_add(16);
        let Some(frame) = c.tick(now_ms) else {
            break;
        };

        // The host applies the frame; its scroll view reports the offset straight back.
        if let Some(offset) = frame.scroll_offset {
            c.on_scroll(offset, 400.0, now_ms);
        }
        println!(
            "t={now_ms}ms indicator.x={:.1} scroll={:?}",
            frame.indicator.x, frame.scroll_offset
        );

        // Interrupt the animation with a second tap.
        if (96..96 + 16).contains(&now_ms) {
            c.on_tap(1, now_ms).expect("index in range");
        }

        if frame.finished && !c.is_animating() {
            break;
        }
    }

    println!(
        "done: selected={:?} indicator={:?} scroll={}",
        c.pager().selected_index(),
        c.indicator(),
        c.scroll_offset()
    );
}
