use crate::*;

use alloc::string::ToString;
use alloc::sync::Arc;
use alloc::vec;
use alloc::vec::Vec;
use std::sync::Mutex;

use proptest::prelude::*;

/// Each title char is 10 units wide, whatever the font.
fn ten_per_char(text: &str, _font: &Font) -> f32 {
    text.chars().count() as f32 * 10.0
}

fn pager(titles: &[&str], width: f32, height: f32) -> PagerController {
    let mut p = PagerController::new(PagerOptions::new(ten_per_char));
    p.set_titles(titles.iter().copied());
    p.set_bounds(width, height);
    p
}

/// A synchronous animation executor: every transition completes as soon as it is issued.
fn settle(p: &mut PagerController, t: Option<Transition>) {
    if let Some(t) = t {
        assert!(p.finish_transition(t.id));
    }
}

fn recording_pager(titles: &[&str], width: f32) -> (PagerController, Arc<Mutex<Vec<usize>>>) {
    let seen = Arc::new(Mutex::new(Vec::new()));
    let sink = Arc::clone(&seen);
    let mut p = pager(titles, width, 44.0);
    p.set_on_selection_changed(Some(move |i: usize| sink.lock().unwrap().push(i)));
    (p, seen)
}

#[test]
fn set_segments_selects_first_segment() {
    let p = pager(&["A", "B", "C"], 300.0, 44.0);
    assert_eq!(p.segment_count(), 3);
    assert_eq!(p.selected_index(), Some(0));
    assert!(!p.is_animating());
}

#[test]
fn set_segments_resets_selection() {
    let mut p = pager(&["A", "B", "C"], 300.0, 44.0);
    let t = p.select_index(2, false, false).unwrap();
    settle(&mut p, t);
    assert_eq!(p.selected_index(), Some(2));

    p.set_titles(["X", "Y"]);
    assert_eq!(p.selected_index(), Some(0));
    assert_eq!(p.segment(1).map(|s| s.title.as_str()), Some("Y"));
}

#[test]
fn set_segments_ignores_empty_input() {
    let mut p = pager(&["A", "B"], 200.0, 44.0);
    p.set_segments(Vec::new());
    assert_eq!(p.segment_count(), 2);
}

#[test]
fn segments_carry_pages() {
    let mut p: PagerController<u32> = PagerController::default();
    p.set_segments(vec![Segment::with_page("Inbox", 7), Segment::titled("Sent")]);
    assert_eq!(p.page(0), Some(&7));
    assert_eq!(p.page(1), None);
    assert_eq!(p.page(5), None);
}

#[test]
fn zero_segments_render_nothing() {
    let mut p = pager(&["A"], 300.0, 44.0);
    p.clear_segments();
    assert_eq!(p.selected_index(), None);

    let layout = p.compute_layout(300.0, 44.0, &StyleConfig::default());
    assert!(layout.is_empty());
    assert!(layout.page_frames.is_empty());
    assert_eq!(layout.indicator_frame, Rect::ZERO);
    assert_eq!(layout.selected_index, None);
}

#[test]
fn tap_moves_selection_and_notifies_new_index() {
    let (mut p, seen) = recording_pager(&["A", "B", "C"], 300.0);

    let t = p.on_segment_tapped(2).unwrap().unwrap();
    assert_eq!(*seen.lock().unwrap(), vec![2]);
    assert_eq!(p.selected_index(), Some(2));
    assert!(p.is_animating());
    assert_eq!(t.from_index, 0);
    assert_eq!(t.to_index, 2);
    assert!(t.is_animated());
    assert_eq!(t.scroll_to, Some(600.0));

    let layout = p.compute_layout(300.0, 44.0, &StyleConfig::default());
    assert_eq!(layout.indicator_frame.x, 200.0);
    assert_eq!(layout.indicator_frame.width, 100.0);
    assert_eq!(t.indicator, layout.indicator_frame);

    settle(&mut p, Some(t));
    assert!(!p.is_animating());
}

#[test]
fn tapping_selected_segment_is_a_noop() {
    let (mut p, seen) = recording_pager(&["A", "B", "C"], 300.0);
    let before = p.state();

    assert_eq!(p.on_segment_tapped(0).unwrap(), None);
    assert!(seen.lock().unwrap().is_empty());
    assert_eq!(p.state(), before);
}

#[test]
fn tap_out_of_range_is_an_error() {
    let (mut p, seen) = recording_pager(&["A", "B"], 200.0);
    assert_eq!(
        p.on_segment_tapped(2),
        Err(PagerError::IndexOutOfRange { index: 2, count: 2 })
    );
    assert!(seen.lock().unwrap().is_empty());
    assert_eq!(p.selected_index(), Some(0));
}

#[test]
fn scroll_rounds_half_up() {
    let mut p = pager(&["A", "B", "C"], 300.0, 44.0);
    let t = p.on_container_scrolled(1.5 * 300.0, 300.0);
    assert_eq!(t.map(|t| t.to_index), Some(2));
    assert_eq!(p.selected_index(), Some(2));

    let mut p = pager(&["A", "B", "C"], 300.0, 44.0);
    let t = p.on_container_scrolled(1.49 * 300.0, 300.0);
    assert_eq!(t.map(|t| t.to_index), Some(1));
    assert_eq!(p.selected_index(), Some(1));
}

#[test]
fn scroll_selection_notifies_without_syncing_container() {
    let (mut p, seen) = recording_pager(&["A", "B", "C"], 300.0);

    let t = p.on_container_scrolled(310.0, 300.0).unwrap();
    assert_eq!(*seen.lock().unwrap(), vec![1]);
    assert_eq!(t.scroll_to, None);
    assert!(t.is_animated());
    settle(&mut p, Some(t));

    // Still on page 1: no new selection, no notification.
    assert_eq!(p.on_container_scrolled(320.0, 300.0), None);
    assert_eq!(*seen.lock().unwrap(), vec![1]);
}

#[test]
fn scroll_is_ignored_while_animating() {
    let (mut p, seen) = recording_pager(&["A", "B", "C"], 300.0);
    let t = p.on_segment_tapped(2).unwrap().unwrap();

    // The programmatic scroll towards page 2 passes over page 1.
    for offset in [0.0, 150.0, 300.0, 450.0, 600.0] {
        assert_eq!(p.on_container_scrolled(offset, 300.0), None);
        assert_eq!(p.selected_index(), Some(2));
    }
    assert_eq!(*seen.lock().unwrap(), vec![2]);

    settle(&mut p, Some(t));
    let back = p.on_container_scrolled(0.0, 300.0);
    assert_eq!(back.map(|t| t.to_index), Some(0));
}

#[test]
fn scroll_clamps_overscroll() {
    let mut p = pager(&["A", "B", "C"], 300.0, 44.0);
    assert_eq!(p.on_container_scrolled(-80.0, 300.0), None);
    assert_eq!(p.selected_index(), Some(0));

    let t = p.on_container_scrolled(3000.0, 300.0);
    assert_eq!(t.map(|t| t.to_index), Some(2));
}

#[test]
fn scroll_with_unusable_geometry_is_ignored() {
    let mut p = pager(&["A", "B"], 200.0, 44.0);
    assert_eq!(p.on_container_scrolled(150.0, 0.0), None);
    assert_eq!(p.on_container_scrolled(150.0, f32::NAN), None);
    assert_eq!(p.on_container_scrolled(f32::INFINITY, 200.0), None);
    assert_eq!(p.selected_index(), Some(0));
}

#[test]
fn scroll_tracks_container_width() {
    let mut p = pager(&["A", "B", "C"], 300.0, 44.0);
    p.set_viewport(300.0, 500.0);
    let _ = p.on_container_scrolled(0.0, 320.0);
    let state = p.state();
    assert_eq!(state.viewport_width, 320.0);
    assert_eq!(state.viewport_height, 500.0);
    assert_eq!(p.page_offset(2), 640.0);
}

#[test]
fn select_index_validates_range() {
    let mut p = pager(&["A", "B"], 200.0, 44.0);
    assert_eq!(
        p.select_index(9, true, true),
        Err(PagerError::IndexOutOfRange { index: 9, count: 2 })
    );

    let mut empty: PagerController = PagerController::default();
    assert_eq!(
        empty.select_index(0, false, false),
        Err(PagerError::IndexOutOfRange { index: 0, count: 0 })
    );
}

#[test]
fn select_index_same_index_is_a_noop_unless_forced() {
    let mut p = pager(&["A", "B"], 200.0, 44.0);
    assert_eq!(p.select_index(0, true, true).unwrap(), None);
    assert!(!p.is_animating());

    let t = p.select_index_forced(0, false, true).unwrap();
    assert!(p.is_animating());
    assert_eq!(t.from_index, 0);
    assert_eq!(t.to_index, 0);
    assert_eq!(t.scroll_to, Some(0.0));
    settle(&mut p, Some(t));
}

#[test]
fn non_animated_selection_has_zero_duration() {
    let mut p = pager(&["A", "B"], 200.0, 44.0);
    let t = p.select_index(1, false, false).unwrap().unwrap();
    assert_eq!(t.duration_ms, 0);
    assert!(!t.is_animated());
    assert_eq!(t.scroll_to, None);
    // Still animating until the executor reports back.
    assert!(p.is_animating());
    settle(&mut p, Some(t));
}

#[test]
fn transition_uses_configured_timing() {
    let mut p = pager(&["A", "B"], 200.0, 44.0);
    p.update_options(|o| {
        o.transition_duration_ms = 350;
        o.easing = Easing::Linear;
    });
    let t = p.select_index(1, true, false).unwrap().unwrap();
    assert_eq!(t.duration_ms, 350);
    assert_eq!(t.easing, Easing::Linear);
}

#[test]
fn new_selection_replaces_in_flight_transition() {
    let mut p = pager(&["A", "B", "C"], 300.0, 44.0);
    let first = p.select_index(1, true, true).unwrap().unwrap();
    let second = p.select_index(2, true, true).unwrap().unwrap();

    assert_eq!(first.replaces, None);
    assert_eq!(second.replaces, Some(first.id));
    assert_eq!(second.from_index, 1);
    assert!(second.id > first.id);

    // The replaced transition's completion must not end the animation.
    assert!(!p.finish_transition(first.id));
    assert!(p.is_animating());
    assert_eq!(p.phase(), Phase::Animating { id: second.id });

    assert!(p.finish_transition(second.id));
    assert_eq!(p.phase(), Phase::Idle);
}

#[test]
fn set_segments_drops_in_flight_transition() {
    let mut p = pager(&["A", "B", "C"], 300.0, 44.0);
    let t = p.select_index(2, true, true).unwrap().unwrap();
    p.set_titles(["X", "Y"]);
    assert!(!p.is_animating());
    assert!(!p.finish_transition(t.id));
}

#[test]
fn indicator_matches_title_width_is_centered() {
    let mut p: PagerController = PagerController::new(PagerOptions::new(|text: &str, _font: &Font| -> f32 {
        if text == "Middle" { 40.0 } else { 10.0 }
    }));
    p.set_titles(["Left", "Middle", "Right"]);
    p.set_bounds(300.0, 44.0);
    let style = StyleConfig::default().with_indicator_matches_title_width(true);
    p.set_style(style);

    let t = p.select_index(1, true, false).unwrap().unwrap();
    let layout = p.compute_layout(300.0, 44.0, &style);
    assert_eq!(layout.button_frames[1], Rect::new(100.0, 0.0, 100.0, 44.0));
    assert_eq!(layout.indicator_frame, Rect::new(130.0, 42.0, 40.0, 2.0));
    assert_eq!(t.indicator, layout.indicator_frame);
}

#[test]
fn indicator_title_width_uses_selected_font() {
    let mut p: PagerController = PagerController::new(PagerOptions::new(|text: &str, font: &Font| -> f32 {
        let per_char = match font.weight {
            FontWeight::Bold => 12.0,
            FontWeight::Regular => 6.0,
        };
        text.len() as f32 * per_char
    }));
    p.set_titles(["abc", "def"]);
    let style = StyleConfig::default().with_indicator_matches_title_width(true);
    let layout = p.compute_layout(200.0, 30.0, &style);
    assert_eq!(layout.indicator_frame.width, 36.0);
    assert_eq!(layout.indicator_frame.x, 32.0);
}

#[test]
fn indicator_title_width_is_clamped_to_slot() {
    let mut p = pager(&["A very long segment title", "B"], 100.0, 20.0);
    let style = StyleConfig::default().with_indicator_matches_title_width(true);
    let layout = p.compute_layout(100.0, 20.0, &style);
    assert_eq!(layout.indicator_frame.x, 0.0);
    assert_eq!(layout.indicator_frame.width, 50.0);

    p.set_options(PagerOptions::new(|_: &str, _: &Font| f32::NAN));
    let layout = p.compute_layout(100.0, 20.0, &style);
    assert_eq!(layout.indicator_frame.width, 0.0);
    assert_eq!(layout.indicator_frame.x, 25.0);
}

#[test]
fn indicator_is_bottom_anchored_and_clamped() {
    let p = pager(&["A", "B"], 200.0, 44.0);
    let style = StyleConfig::default().with_indicator_height(4.0);
    let layout = p.compute_layout(200.0, 44.0, &style);
    assert_eq!(layout.indicator_frame.y, 40.0);
    assert_eq!(layout.indicator_frame.max_y(), 44.0);

    let tall = StyleConfig::default().with_indicator_height(100.0);
    let layout = p.compute_layout(200.0, 44.0, &tall);
    assert_eq!(layout.indicator_frame.y, 0.0);
    assert_eq!(layout.indicator_frame.height, 44.0);

    let negative = StyleConfig::default().with_indicator_height(-3.0);
    let layout = p.compute_layout(200.0, 44.0, &negative);
    assert_eq!(layout.indicator_frame.height, 0.0);
}

#[test]
fn unusable_bounds_produce_empty_layout() {
    let p = pager(&["A", "B"], 0.0, 44.0);
    let style = StyleConfig::default();
    for (w, h) in [(0.0, 44.0), (-10.0, 44.0), (f32::NAN, 44.0), (f32::INFINITY, 44.0), (100.0, f32::NAN)] {
        let layout = p.compute_layout(w, h, &style);
        assert!(layout.is_empty(), "w={w} h={h}");
        assert_eq!(layout.indicator_frame, Rect::ZERO);
    }
    assert_eq!(p.indicator_frame(), Rect::ZERO);
    assert_eq!(p.page_offset(1), 0.0);
}

#[test]
fn pages_tile_the_viewport() {
    let mut p = pager(&["A", "B", "C"], 300.0, 44.0);
    p.set_viewport(320.0, 480.0);
    let layout = p.layout();

    assert_eq!(layout.button_frames.len(), 3);
    assert_eq!(
        layout.page_frames,
        vec![
            Rect::new(0.0, 0.0, 320.0, 480.0),
            Rect::new(320.0, 0.0, 320.0, 480.0),
            Rect::new(640.0, 0.0, 320.0, 480.0),
        ]
    );
    assert_eq!(layout.content_size, Size::new(960.0, 480.0));

    let t = p.on_segment_tapped(1).unwrap().unwrap();
    assert_eq!(t.scroll_to, Some(320.0));
}

#[test]
fn compute_layout_shares_size_between_header_and_pages() {
    let p = pager(&["A", "B"], 10.0, 10.0);
    let layout = p.compute_layout(200.0, 50.0, &StyleConfig::default());
    assert_eq!(layout.button_frames[1], Rect::new(100.0, 0.0, 100.0, 50.0));
    assert_eq!(layout.page_frames[1], Rect::new(200.0, 0.0, 200.0, 50.0));
    assert_eq!(layout.selected_index, Some(0));
}

#[test]
fn unusable_viewport_only_drops_pages() {
    let p = pager(&["A", "B"], 200.0, 44.0);
    let layout = p.compute_layout_in(
        Size::new(200.0, 44.0),
        Size::ZERO,
        &StyleConfig::default(),
    );
    assert_eq!(layout.button_frames.len(), 2);
    assert!(layout.page_frames.is_empty());
    assert_eq!(layout.content_size, Size::ZERO);
}

#[test]
fn style_changes_invalidate_layout() {
    let mut p = pager(&["A", "B"], 200.0, 44.0);
    let _ = p.layout();
    assert!(!p.needs_layout());

    p.update_style(|s| s.indicator_color = Color::WHITE);
    assert!(p.needs_layout());
    assert_eq!(p.style().indicator_color, Color::WHITE);

    let _ = p.layout();
    p.set_bounds(200.0, 44.0);
    assert!(!p.needs_layout());
    p.set_bounds(250.0, 44.0);
    assert!(p.needs_layout());
}

#[test]
fn title_style_follows_selection() {
    let style = StyleConfig::default()
        .with_text_colors(Color::LIGHT_GRAY, Color::BLACK)
        .with_fonts(Font::regular(12.0), Font::bold(14.0));
    assert_eq!(
        style.title_style(true),
        TitleStyle {
            color: Color::BLACK,
            font: Font::bold(14.0),
        }
    );
    assert_eq!(style.title_style(false).font, Font::regular(12.0));
}

#[test]
fn default_style_matches_stock_look() {
    let style = StyleConfig::default();
    assert_eq!(style.indicator_height, 2.0);
    assert!(!style.indicator_matches_title_width);
    assert_eq!(style.border_color, None);
    assert_eq!(style.border_width, 0.0);
    assert_eq!(style.font.size, 13.0);
    assert_eq!(style.selected_font.weight, FontWeight::Bold);
}

#[test]
fn state_snapshot_reflects_controller() {
    let mut p = pager(&["A", "B", "C"], 300.0, 44.0);
    let _ = p.select_index(1, true, true).unwrap();
    assert_eq!(
        p.state(),
        PagerState {
            selected_index: 1,
            segment_count: 3,
            is_animating: true,
            container_width: 300.0,
            container_height: 44.0,
            viewport_width: 300.0,
            viewport_height: 44.0,
        }
    );
}

#[test]
fn fixed_advance_scales_with_font() {
    let m = FixedAdvance::default();
    assert_eq!(m.text_width("abcd", &Font::regular(10.0)), 20.0);
    assert_eq!(m.text_width("", &Font::bold(10.0)), 0.0);
    assert!(m.text_width("abcd", &Font::bold(10.0)) > 20.0);
}

#[test]
fn easing_endpoints() {
    for e in [
        Easing::Linear,
        Easing::SmoothStep,
        Easing::EaseOut,
        Easing::EaseInOutCubic,
    ] {
        assert_eq!(e.sample(0.0), 0.0, "{e:?}");
        assert_eq!(e.sample(1.0), 1.0, "{e:?}");
    }
    assert!(Easing::EaseOut.sample(0.5) > 0.5);
}

#[test]
fn error_message_names_index_and_count() {
    let err = PagerError::IndexOutOfRange { index: 4, count: 3 };
    assert_eq!(
        err.to_string(),
        "segment index 4 out of range (segment count 3)"
    );
}

proptest! {
    #[test]
    fn buttons_tile_the_header(n in 0usize..24, width in 1.0f32..4000.0, height in 0.0f32..200.0) {
        let titles: Vec<_> = (0..n).map(|i| i.to_string()).collect();
        let mut p: PagerController = PagerController::default();
        p.set_titles(titles);
        let layout = p.compute_layout(width, height, &StyleConfig::default());

        prop_assert_eq!(layout.button_frames.len(), n);
        let tolerance = width * 1e-5;
        let mut edge = 0.0f32;
        let mut total = 0.0f32;
        for frame in &layout.button_frames {
            prop_assert!((frame.x - edge).abs() <= tolerance);
            prop_assert!(frame.width > 0.0);
            prop_assert_eq!(frame.height, height);
            edge = frame.max_x();
            total += frame.width;
        }
        if n > 0 {
            prop_assert!((total - width).abs() <= tolerance);
            prop_assert!((edge - width).abs() <= tolerance);
        }
    }

    #[test]
    fn indicator_stays_within_selected_button(
        n in 1usize..20,
        pick in 0usize..20,
        width in 1.0f32..4000.0,
        title_width in 0.0f32..5000.0,
        matches in any::<bool>(),
    ) {
        let index = pick % n;
        let mut p: PagerController = PagerController::new(PagerOptions::new(move |_: &str, _: &Font| title_width));
        p.set_titles((0..n).map(|i| i.to_string()));
        p.set_bounds(width, 40.0);
        let style = StyleConfig::default().with_indicator_matches_title_width(matches);
        p.set_style(style);

        let t = p.select_index(index, true, true).unwrap();
        if let Some(t) = t {
            p.finish_transition(t.id);
        }
        let layout = p.compute_layout(width, 40.0, &style);
        let button = layout.button_frames[index];
        prop_assert!(button.contains_x(layout.indicator_frame.x));
        prop_assert!(layout.indicator_frame.max_x() <= button.max_x() + width * 1e-5);
    }

    #[test]
    fn scroll_while_animating_never_changes_selection(
        offsets in proptest::collection::vec(-500.0f32..5000.0, 1..16),
    ) {
        let mut p = pager(&["A", "B", "C", "D"], 400.0, 44.0);
        let _ = p.on_segment_tapped(3).unwrap();
        for offset in offsets {
            prop_assert_eq!(p.on_container_scrolled(offset, 400.0), None);
            prop_assert_eq!(p.selected_index(), Some(3));
        }
    }
}
