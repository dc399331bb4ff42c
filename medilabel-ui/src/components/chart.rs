//! Chart Components
//!
//! Completion pie and weekly dose bars drawn on HTML5 Canvas.

use leptos::*;
use std::f64::consts::PI;
use wasm_bindgen::JsCast;
use web_sys::{CanvasRenderingContext2d, HtmlCanvasElement};

use crate::state::models::{CompletionData, WeeklyDoses};

/// Two-slice completion pie chart
#[component]
pub fn PieChart(data: CompletionData) -> impl IntoView {
    let canvas_ref = create_node_ref::<html::Canvas>();
    let slices = data.slices.clone();

    create_effect(move |_| {
        if let Some(canvas) = canvas_ref.get() {
            draw_pie(&canvas, &data);
        }
    });

    view! {
        <div class="flex flex-col items-center">
            <canvas node_ref=canvas_ref width="240" height="240" class="w-40 h-40" />
            <div class="flex justify-center flex-wrap gap-4 mt-3">
                {slices
                    .into_iter()
                    .map(|slice| view! { <LegendItem label=slice.label color=slice.color /> })
                    .collect_view()}
            </div>
        </div>
    }
}

/// Grouped bar chart of completed and missed doses per day
#[component]
pub fn BarChart(data: WeeklyDoses) -> impl IntoView {
    let canvas_ref = create_node_ref::<html::Canvas>();
    let series = data.series.clone();

    create_effect(move |_| {
        if let Some(canvas) = canvas_ref.get() {
            draw_bars(&canvas, &data);
        }
    });

    view! {
        <div>
            <canvas node_ref=canvas_ref width="560" height="240" class="w-full h-48" />
            <div class="flex justify-center flex-wrap gap-4 mt-3">
                {series
                    .into_iter()
                    .map(|s| view! { <LegendItem label=s.label color=s.color /> })
                    .collect_view()}
            </div>
        </div>
    }
}

#[component]
fn LegendItem(#[prop(into)] label: String, #[prop(into)] color: String) -> impl IntoView {
    view! {
        <div class="flex items-center space-x-2">
            <div class="w-3 h-3 rounded-full" style=format!("background-color: {}", color) />
            <span class="text-sm text-gray-300">{label}</span>
        </div>
    }
}

fn context_2d(canvas: &HtmlCanvasElement) -> Option<CanvasRenderingContext2d> {
    canvas
        .get_context("2d")
        .ok()
        .flatten()?
        .dyn_into::<CanvasRenderingContext2d>()
        .ok()
}

/// Start and end angles for each slice, starting at twelve o'clock
pub fn slice_angles(values: &[u32]) -> Vec<(f64, f64)> {
    let total: u32 = values.iter().sum();
    if total == 0 {
        return Vec::new();
    }

    let mut start = -PI / 2.0;
    values
        .iter()
        .map(|&v| {
            let end = start + (v as f64 / total as f64) * PI * 2.0;
            let span = (start, end);
            start = end;
            span
        })
        .collect()
}

fn draw_pie(canvas: &HtmlCanvasElement, data: &CompletionData) {
    let Some(ctx) = context_2d(canvas) else {
        return;
    };

    let width = canvas.width() as f64;
    let height = canvas.height() as f64;
    let (cx, cy) = (width / 2.0, height / 2.0);
    let radius = cx.min(cy) - 10.0;

    ctx.clear_rect(0.0, 0.0, width, height);

    let values: Vec<u32> = data.slices.iter().map(|s| s.value).collect();
    for (slice, (start, end)) in data.slices.iter().zip(slice_angles(&values)) {
        ctx.set_fill_style(&slice.color.as_str().into());
        ctx.begin_path();
        ctx.move_to(cx, cy);
        let _ = ctx.arc(cx, cy, radius, start, end);
        ctx.close_path();
        ctx.fill();
    }
}

fn draw_bars(canvas: &HtmlCanvasElement, data: &WeeklyDoses) {
    let Some(ctx) = context_2d(canvas) else {
        return;
    };

    let width = canvas.width() as f64;
    let height = canvas.height() as f64;

    // Margins
    let margin_left = 30.0;
    let margin_right = 10.0;
    let margin_top = 10.0;
    let margin_bottom = 30.0;

    let chart_width = width - margin_left - margin_right;
    let chart_height = height - margin_top - margin_bottom;

    ctx.clear_rect(0.0, 0.0, width, height);

    let max = data.max_value().max(1) as f64;

    // Horizontal grid lines with y-axis labels
    ctx.set_stroke_style(&"#374151".into()); // gray-700
    ctx.set_line_width(1.0);
    ctx.set_fill_style(&"#9ca3af".into()); // gray-400
    ctx.set_font("12px sans-serif");
    for i in 0..=4 {
        let y = margin_top + (i as f64 / 4.0) * chart_height;
        ctx.begin_path();
        ctx.move_to(margin_left, y);
        ctx.line_to(width - margin_right, y);
        ctx.stroke();

        let value = max - (i as f64 / 4.0) * max;
        let _ = ctx.fill_text(&format!("{:.0}", value), 5.0, y + 4.0);
    }

    let days = data.days.len().max(1) as f64;
    let group_width = chart_width / days;
    let series_count = data.series.len().max(1) as f64;
    let bar_width = group_width * 0.8 / series_count;

    for (day_idx, day) in data.days.iter().enumerate() {
        let group_x = margin_left + day_idx as f64 * group_width + group_width * 0.1;

        for (series_idx, series) in data.series.iter().enumerate() {
            let value = series.data.get(day_idx).copied().unwrap_or(0) as f64;
            let bar_height = value / max * chart_height;
            let x = group_x + series_idx as f64 * bar_width;
            let y = margin_top + chart_height - bar_height;

            ctx.set_fill_style(&series.color.as_str().into());
            ctx.fill_rect(x, y, bar_width - 2.0, bar_height);
        }

        ctx.set_fill_style(&"#9ca3af".into());
        let _ = ctx.fill_text(day, group_x + group_width * 0.3, height - 10.0);
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_slice_angles_cover_circle() {
        let angles = slice_angles(&[75, 25]);
        assert_eq!(angles.len(), 2);
        assert!((angles[0].0 + PI / 2.0).abs() < 1e-9);
        assert!((angles[0].1 - PI).abs() < 1e-9);
        assert!((angles[1].1 - 3.0 * PI / 2.0).abs() < 1e-9);
    }

    #[test]
    fn test_slice_angles_empty_total() {
        assert!(slice_angles(&[0, 0]).is_empty());
    }
}
