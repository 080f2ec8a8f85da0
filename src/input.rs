//! Forwards nannou window events to the curve widget.
//!
//! nannou reports positions relative to the window centre with y pointing up;
//! the widget works in pixels from the top-left corner with y pointing down.

use nannou::prelude::*;
use sinegraph::{PointerButton, Pos};

use crate::model::Model;

pub fn to_screen(rect: Rect, p: Point2) -> Pos {
    Pos::new((p.x - rect.left()) as f64, (rect.top() - p.y) as f64)
}

fn pointer_button(button: MouseButton) -> Option<PointerButton> {
    match button {
        MouseButton::Left => Some(PointerButton::Left),
        MouseButton::Middle => Some(PointerButton::Middle),
        MouseButton::Right => Some(PointerButton::Right),
        _ => None,
    }
}

pub fn event(app: &App, model: &mut Model, event: WindowEvent) {
    let rect = app.window_rect();
    let redraw = match event {
        WindowEvent::MousePressed(button) => {
            if model.pointer_over_panel {
                return;
            }
            let Some(button) = pointer_button(button) else {
                return;
            };
            model
                .widget
                .on_pointer_down(to_screen(rect, app.mouse.position()), button)
        }
        WindowEvent::MouseMoved(pos) => model.widget.on_pointer_move(to_screen(rect, pos)),
        WindowEvent::MouseReleased(button) => {
            let Some(button) = pointer_button(button) else {
                return;
            };
            model
                .widget
                .on_pointer_up(to_screen(rect, app.mouse.position()), button)
        }
        WindowEvent::Resized(size) => model.widget.resize(size.x as f64, size.y as f64),
        _ => false,
    };

    if redraw {
        model.request_redraw(app);
    }
}

pub fn raw_window_event(_app: &App, model: &mut Model, event: &nannou::winit::event::WindowEvent) {
    // Let egui see the pointer so it can track hover over the panel.
    if let Some(egui) = model.egui.as_mut() {
        egui.handle_raw_event(event);
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use assert_approx_eq::assert_approx_eq;

    #[test]
    fn centre_maps_to_canvas_middle() {
        let rect = Rect::from_w_h(800.0, 400.0);
        let pos = to_screen(rect, pt2(0.0, 0.0));
        assert_approx_eq!(pos.x, 400.0);
        assert_approx_eq!(pos.y, 200.0);
    }

    #[test]
    fn corners_flip_y() {
        let rect = Rect::from_w_h(800.0, 400.0);
        let top_left = to_screen(rect, pt2(-400.0, 200.0));
        let bottom_right = to_screen(rect, pt2(400.0, -200.0));
        assert_approx_eq!(top_left.x, 0.0);
        assert_approx_eq!(top_left.y, 0.0);
        assert_approx_eq!(bottom_right.x, 800.0);
        assert_approx_eq!(bottom_right.y, 400.0);
    }

    #[test]
    fn only_standard_buttons_map() {
        assert_eq!(pointer_button(MouseButton::Left), Some(PointerButton::Left));
        assert_eq!(pointer_button(MouseButton::Other(7)), None);
    }
}
