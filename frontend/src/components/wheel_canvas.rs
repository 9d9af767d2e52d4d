use std::f64::consts::PI;

use shared::shared_wheel_game::WheelConfig;
use wasm_bindgen::JsCast;
use web_sys::{CanvasRenderingContext2d, HtmlCanvasElement};
use yew::prelude::*;

use super::wheel_utils::{degrees_to_radians, segment_arc, segment_color, segment_label};

#[derive(Properties, PartialEq)]
pub struct WheelCanvasProps {
    pub wheel: WheelConfig,
    /// Clockwise rotation in degrees.
    pub rotation: f64,
    pub is_spinning: bool,
}

#[function_component(WheelCanvas)]
pub fn wheel_canvas(props: &WheelCanvasProps) -> Html {
    let canvas_ref = use_node_ref();

    {
        let canvas_ref = canvas_ref.clone();
        let wheel = props.wheel.clone();

        use_effect_with(
            (props.rotation, props.is_spinning),
            move |(rotation, is_spinning)| {
                if let Some(canvas) = canvas_ref.cast::<HtmlCanvasElement>() {
                    if let Some(context) = context_2d(&canvas) {
                        draw_wheel(&context, &canvas, &wheel, *rotation, *is_spinning);
                    }
                }
                || ()
            },
        );
    }

    html! {
        <div class="relative">
            <canvas
                ref={canvas_ref}
                width="450"
                height="450"
                class="w-full max-w-[450px] h-auto rounded-full shadow-lg transition-all duration-300"
                style={if props.is_spinning {
                    "filter: drop-shadow(0px 5px 20px rgba(130, 100, 255, 0.4));"
                } else {
                    "filter: drop-shadow(0px 5px 15px rgba(0, 0, 0, 0.2));"
                }}
            />
        </div>
    }
}

fn context_2d(canvas: &HtmlCanvasElement) -> Option<CanvasRenderingContext2d> {
    canvas
        .get_context("2d")
        .ok()
        .flatten()
        .and_then(|context| context.dyn_into::<CanvasRenderingContext2d>().ok())
}

fn draw_wheel(
    context: &CanvasRenderingContext2d,
    canvas: &HtmlCanvasElement,
    wheel: &WheelConfig,
    rotation: f64,
    is_spinning: bool,
) {
    let width = canvas.width() as f64;
    let height = canvas.height() as f64;
    let center_x = width / 2.0;
    let center_y = height / 2.0;
    let radius = width.min(height) / 2.0 - 30.0;

    context.clear_rect(0.0, 0.0, width, height);

    // Glow behind the rim
    context.begin_path();
    let glow_intensity = if is_spinning { 0.25 } else { 0.15 };
    context.set_fill_style_str(&format!("rgba(100, 130, 255, {})", glow_intensity));
    let _ = context.arc(center_x, center_y, radius + 15.0, 0.0, 2.0 * PI);
    context.fill();

    context.save();
    let _ = context.translate(center_x, center_y);
    let _ = context.rotate(degrees_to_radians(rotation));
    let _ = context.translate(-center_x, -center_y);

    let segment_count = wheel.segment_count();
    for index in 0..segment_count {
        let (start, end) = segment_arc(segment_count, index);

        context.begin_path();
        context.set_fill_style_str(segment_color(wheel, index));
        context.move_to(center_x, center_y);
        let _ = context.arc(center_x, center_y, radius, start, end);
        context.close_path();
        context.fill();

        context.set_stroke_style_str("rgba(255, 255, 255, 0.9)");
        context.set_line_width(2.5);
        context.stroke();

        context.save();
        let _ = context.translate(center_x, center_y);
        let _ = context.rotate((start + end) / 2.0);
        let _ = context.translate(radius * 0.62, 0.0);
        context.set_text_align("center");
        context.set_text_baseline("middle");
        context.set_fill_style_str("#ffffff");
        context.set_shadow_color("rgba(0, 0, 0, 0.5)");
        context.set_shadow_blur(3.0);
        context.set_font("bold 16px 'Segoe UI', Roboto, system-ui, sans-serif");
        let _ = context.fill_text(segment_label(wheel, index), 0.0, 0.0);
        context.restore();
    }

    context.restore();

    // Hub
    context.begin_path();
    context.set_fill_style_str("#8b5cf6");
    let _ = context.arc(center_x, center_y, radius * 0.15, 0.0, 2.0 * PI);
    context.fill();

    // Rim
    context.begin_path();
    context.set_stroke_style_str("rgba(130, 100, 255, 0.5)");
    context.set_line_width(if is_spinning { 5.0 } else { 4.0 });
    let _ = context.arc(center_x, center_y, radius - 2.0, 0.0, 2.0 * PI);
    context.stroke();

    // Pointer at twelve o'clock, tip into the wheel
    let pointer_width = 16.0;
    let pointer_height = 26.0;
    context.begin_path();
    context.move_to(center_x, center_y - radius + 10.0);
    context.line_to(center_x - pointer_width, center_y - radius - pointer_height + 10.0);
    context.line_to(center_x + pointer_width, center_y - radius - pointer_height + 10.0);
    context.close_path();
    context.set_fill_style_str(if is_spinning { "#ffd700" } else { "#f59e0b" });
    context.fill();
    context.set_stroke_style_str("#e69500");
    context.set_line_width(1.5);
    context.stroke();
}
