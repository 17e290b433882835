//! Scripted pointer and keyboard input for running egui frames headless.

use egui::{
    Context, Event, FullOutput, Key, Modifiers, PointerButton, Pos2, RawInput, Rect, Shape, Vec2,
};

pub(crate) const SCREEN_SIZE: Vec2 = Vec2::new(1100.0, 780.0);

/// Empty frames run before any scripted input, so areas finish their
/// sizing pass and hit testing sees last frame's widget rects
const WARM_UP_FRAMES: usize = 2;

pub(crate) fn pointer_moved(pos: Pos2) -> Event {
    Event::PointerMoved(pos)
}

pub(crate) fn primary_button(pos: Pos2, pressed: bool) -> Event {
    Event::PointerButton {
        pos,
        button: PointerButton::Primary,
        pressed,
        modifiers: Modifiers::NONE,
    }
}

pub(crate) fn key_press(key: Key) -> Event {
    Event::Key {
        key,
        physical_key: None,
        pressed: true,
        repeat: false,
        modifiers: Modifiers::NONE,
    }
}

/// Hover, press and release over `pos`, one frame each
pub(crate) fn click_at(pos: Pos2) -> Vec<Vec<Event>> {
    vec![
        vec![pointer_moved(pos)],
        vec![primary_button(pos, true)],
        vec![primary_button(pos, false)],
    ]
}

/// Press at `from`, travel to `to` in a few steps and release there
pub(crate) fn drag_between(from: Pos2, to: Pos2) -> Vec<Vec<Event>> {
    let mut frames = vec![vec![pointer_moved(from)], vec![primary_button(from, true)]];
    for step in 1..=4 {
        frames.push(vec![pointer_moved(from.lerp(to, step as f32 / 4.0))]);
    }
    frames.push(vec![primary_button(to, false)]);
    frames
}

pub(crate) fn run_frame(ctx: &Context, events: Vec<Event>, run_ui: impl FnOnce(&Context)) -> FullOutput {
    ctx.run(
        RawInput {
            screen_rect: Some(Rect::from_min_size(Pos2::ZERO, SCREEN_SIZE)),
            events,
            ..Default::default()
        },
        run_ui,
    )
}

/// Warm up, then run one frame per scripted entry. Returns the output of the
/// last frame.
pub(crate) fn run_script(
    ctx: &Context,
    frames: Vec<Vec<Event>>,
    mut run_ui: impl FnMut(&Context),
) -> FullOutput {
    let mut output = FullOutput::default();
    for _ in 0..WARM_UP_FRAMES {
        output = run_frame(ctx, Vec::new(), &mut run_ui);
    }
    for events in frames {
        output = run_frame(ctx, events, &mut run_ui);
    }
    output
}

fn collect_texts<'a>(shape: &'a Shape, found: &mut Vec<(&'a str, Rect)>) {
    match shape {
        Shape::Text(text) => found.push((
            text.galley.text(),
            Rect::from_min_size(text.pos, text.galley.size()),
        )),
        Shape::Vec(shapes) => shapes.iter().for_each(|inner| collect_texts(inner, found)),
        _ => {}
    }
}

/// Every text painted in a frame, with the rect it was laid out in
pub(crate) fn painted_texts(output: &FullOutput) -> Vec<(&str, Rect)> {
    let mut found = Vec::new();
    for clipped in &output.shapes {
        collect_texts(&clipped.shape, &mut found);
    }
    found
}

pub(crate) fn text_rect(output: &FullOutput, needle: &str) -> Option<Rect> {
    painted_texts(output)
        .into_iter()
        .find(|(text, _)| *text == needle)
        .map(|(_, rect)| rect)
}
