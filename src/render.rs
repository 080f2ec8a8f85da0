use nannou::color::Srgb;
use nannou::prelude::*;
use sinegraph::{Color, DrawCall, Pos, Stroke};

use crate::model::Model;

/// Inverse of [`crate::input::to_screen`].
pub fn to_nannou(rect: Rect, pos: Pos) -> Point2 {
    pt2(rect.left() + pos.x as f32, rect.top() - pos.y as f32)
}

fn rgb(color: Color) -> Srgb<u8> {
    match color {
        Color::White => WHITE,
        Color::Red => RED,
        Color::Gray => GRAY,
    }
}

fn draw_calls(draw: &Draw, rect: Rect, calls: &[DrawCall]) {
    for call in calls {
        match call {
            DrawCall::Clear(color) => {
                draw.background().color(rgb(*color));
            }
            DrawCall::Polyline {
                points,
                stroke: Stroke { color, width },
            } => {
                draw.polyline()
                    .weight(*width as f32)
                    .points(points.iter().map(|p| to_nannou(rect, *p)))
                    .color(rgb(*color));
            }
            DrawCall::Line {
                start,
                end,
                stroke: Stroke { color, width },
            } => {
                draw.line()
                    .start(to_nannou(rect, *start))
                    .end(to_nannou(rect, *end))
                    .weight(*width as f32)
                    .color(rgb(*color));
            }
        }
    }
}

pub fn view(app: &App, model: &Model, frame: Frame) {
    let draw = app.draw();
    draw_calls(&draw, app.window_rect(), &model.widget.on_paint());

    if let Err(err) = draw.to_frame(app, &frame) {
        log::error!("failed to render curve: {err:?}");
        return;
    }
    if let Some(egui) = model.egui.as_ref() {
        if let Err(err) = egui.draw_to_frame(&frame) {
            log::error!("failed to render readout panel: {err:?}");
        }
    }
}
