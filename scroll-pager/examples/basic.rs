// Example: drive a pager with taps and drags, completing every transition immediately.
use scroll_pager::{Font, PagerController, PagerOptions, StyleConfig, Transition};

fn settle(pager: &mut PagerController, transition: Option<Transition>) {
    if let Some(t) = transition {
        println!(
            "transition #{}: {} -> {} indicator={:?} scroll_to={:?}",
            t.id.0, t.from_index, t.to_index, t.indicator, t.scroll_to
        );
        pager.finish_transition(t.id);
    }
}

fn main() {
    let options = PagerOptions::new(|text: &str, font: &Font| text.len() as f32 * font.size * 0.6)
        .with_style(StyleConfig::default().with_indicator_matches_title_width(true))
        .with_on_selection_changed(Some(|index: usize| println!("selection changed -> {index}")));

    let mut pager: PagerController = PagerController::new(options);
    pager.set_titles(["Inbox", "Starred", "Archive"]);
    pager.set_bounds(360.0, 44.0);
    pager.set_viewport(360.0, 640.0);

    let layout = pager.layout();
    println!("buttons={:?}", layout.button_frames);
    println!("indicator={:?}", layout.indicator_frame);
    println!("content_size={:?}", layout.content_size);

    // A tap notifies first, then asks the container to follow.
    let tapped = pager.on_segment_tapped(2).expect("index in range");
    settle(&mut pager, tapped);

    // Dragging back past the midpoint of page 1 selects it without moving the container.
    for offset in [700.0, 560.0, 540.0] {
        let dragged = pager.on_container_scrolled(offset, 360.0);
        settle(&mut pager, dragged);
    }

    println!("final state={:?}", pager.state());
}
