//! Revenue Chart Component
//!
//! Monthly revenue line chart on HTML5 Canvas, with loading and error
//! placeholders driven by the chart lifecycle phase.

use leptos::*;
use wasm_bindgen::JsCast;
use web_sys::{CanvasRenderingContext2d, HtmlCanvasElement};

use crate::components::loading::Spinner;
use crate::format::format_currency;
use crate::state::global::{month_labels, revenue_values, ChartPhase, GlobalState, RevenuePoint};
use crate::state::refresh::refresh_revenue_chart;

const LINE_COLOR: &str = "#0d6efd";
const FILL_COLOR: &str = "rgba(13, 110, 253, 0.1)";
const GRID_COLOR: &str = "#e5e7eb";
const LABEL_COLOR: &str = "#6b7280";

const Y_GRID_LINES: usize = 5;

/// Revenue chart with lifecycle placeholders.
///
/// `Loading` replaces the surface with a spinner, `Error` with a static
/// message plus a retry button that re-enters the refresh entry point.
#[component]
pub fn RevenueChart() -> impl IntoView {
    let state = use_context::<GlobalState>().expect("GlobalState not found");
    let phase = state.chart_phase;

    // Refresh on mount; the timer, visibility listener, and retry button
    // drive later refreshes
    create_effect(move |_| {
        refresh_revenue_chart(state.clone());
    });

    view! {
        <div class="relative">
            {move || match phase.get() {
                ChartPhase::Idle | ChartPhase::Loading => view! { <ChartLoading /> }.into_view(),
                ChartPhase::Error(_) => view! { <ChartError /> }.into_view(),
                ChartPhase::Rendered => view! { <ChartCanvas /> }.into_view(),
            }}
        </div>
    }
}

/// Spinner placeholder shown while the series is being fetched
#[component]
fn ChartLoading() -> impl IntoView {
    view! {
        <div class="h-64 flex flex-col items-center justify-center text-center">
            <Spinner />
            <p class="mt-2 text-gray-500">"Loading chart data..."</p>
        </div>
    }
}

/// Error placeholder with a manual retry action.
///
/// Network and server failures are not distinguished here; the detailed
/// message has already gone to the console.
#[component]
fn ChartError() -> impl IntoView {
    let state = use_context::<GlobalState>().expect("GlobalState not found");

    let on_retry = move |_| {
        refresh_revenue_chart(state.clone());
    };

    view! {
        <div class="h-64 flex flex-col items-center justify-center text-center">
            <span class="text-3xl text-red-500 mb-2">"⚠"</span>
            <p class="text-gray-500 mb-4">"Failed to load revenue data"</p>
            <button
                on:click=on_retry
                class="px-4 py-2 rounded-lg text-sm font-medium border border-blue-600
                       text-blue-600 hover:bg-blue-600 hover:text-white transition-colors"
            >
                "Retry"
            </button>
        </div>
    }
}

/// The canvas surface. Redraws whenever the series changes or the canvas
/// (re)mounts; when no canvas is mounted the draw is a silent no-op.
#[component]
fn ChartCanvas() -> impl IntoView {
    let state = use_context::<GlobalState>().expect("GlobalState not found");
    let canvas_ref = create_node_ref::<html::Canvas>();

    create_effect(move |_| {
        let series = state.revenue.get();
        if let Some(canvas) = canvas_ref.get() {
            draw_revenue_chart(&canvas, &series);
        }
    });

    view! {
        <canvas
            node_ref=canvas_ref
            width="800"
            height="400"
            class="w-full h-64 md:h-96 rounded-lg"
        />
    }
}

/// Draw the revenue chart on canvas
fn draw_revenue_chart(canvas: &HtmlCanvasElement, series: &[RevenuePoint]) {
    let ctx = match canvas.get_context("2d") {
        Ok(Some(ctx)) => match ctx.dyn_into::<CanvasRenderingContext2d>() {
            Ok(ctx) => ctx,
            Err(_) => return,
        },
        _ => return,
    };

    let width = canvas.width() as f64;
    let height = canvas.height() as f64;

    // Clear the previous drawing before painting the new series
    ctx.set_fill_style(&"#ffffff".into());
    ctx.fill_rect(0.0, 0.0, width, height);

    let scale = match ChartScale::new(width, height, series) {
        Some(scale) => scale,
        None => {
            ctx.set_fill_style(&LABEL_COLOR.into());
            ctx.set_font("16px sans-serif");
            let _ = ctx.fill_text("No revenue data", width / 2.0 - 60.0, height / 2.0);
            return;
        }
    };

    // Horizontal grid lines with dollar labels, top down from the ceiling
    ctx.set_line_width(1.0);
    ctx.set_font("12px sans-serif");
    for i in 0..=Y_GRID_LINES {
        let frac = i as f64 / Y_GRID_LINES as f64;
        let y = scale.margin_top + frac * scale.chart_height;

        ctx.set_stroke_style(&GRID_COLOR.into());
        ctx.begin_path();
        ctx.move_to(scale.margin_left, y);
        ctx.line_to(width - scale.margin_right, y);
        ctx.stroke();

        let value = scale.y_max * (1.0 - frac);
        ctx.set_fill_style(&LABEL_COLOR.into());
        let _ = ctx.fill_text(&format_currency(value), 5.0, y + 4.0);
    }

    // Translucent area fill under the line
    let baseline = scale.margin_top + scale.chart_height;
    ctx.set_fill_style(&FILL_COLOR.into());
    ctx.begin_path();
    ctx.move_to(scale.x(0), baseline);
    for (i, point) in series.iter().enumerate() {
        ctx.line_to(scale.x(i), scale.y(point.revenue));
    }
    ctx.line_to(scale.x(series.len() - 1), baseline);
    ctx.close_path();
    ctx.fill();

    // Revenue line
    ctx.set_stroke_style(&LINE_COLOR.into());
    ctx.set_line_width(3.0);
    ctx.begin_path();
    for (i, point) in series.iter().enumerate() {
        let x = scale.x(i);
        let y = scale.y(point.revenue);
        if i == 0 {
            ctx.move_to(x, y);
        } else {
            ctx.line_to(x, y);
        }
    }
    ctx.stroke();

    // Point markers
    ctx.set_fill_style(&LINE_COLOR.into());
    for (i, point) in series.iter().enumerate() {
        ctx.begin_path();
        let _ = ctx.arc(
            scale.x(i),
            scale.y(point.revenue),
            4.0,
            0.0,
            std::f64::consts::PI * 2.0,
        );
        ctx.fill();
    }

    // Month labels along the x axis
    ctx.set_fill_style(&LABEL_COLOR.into());
    for (i, label) in month_labels(series).iter().enumerate() {
        let _ = ctx.fill_text(label, scale.x(i) - 12.0, height - 10.0);
    }
}

/// Projects series indices and revenue values into canvas coordinates.
///
/// The y axis starts at zero with headroom above the largest value; x
/// positions are evenly spaced by index (category axis, not time axis).
struct ChartScale {
    margin_left: f64,
    margin_right: f64,
    margin_top: f64,
    chart_width: f64,
    chart_height: f64,
    y_max: f64,
    points: usize,
}

impl ChartScale {
    fn new(width: f64, height: f64, series: &[RevenuePoint]) -> Option<Self> {
        if series.is_empty() {
            return None;
        }

        let margin_left = 70.0;
        let margin_right = 20.0;
        let margin_top = 20.0;
        let margin_bottom = 40.0;

        let max = revenue_values(series)
            .into_iter()
            .fold(f64::NEG_INFINITY, f64::max);
        let y_max = if max > 0.0 { max * 1.1 } else { 1.0 };

        Some(Self {
            margin_left,
            margin_right,
            margin_top,
            chart_width: width - margin_left - margin_right,
            chart_height: height - margin_top - margin_bottom,
            y_max,
            points: series.len(),
        })
    }

    /// X coordinate for the i-th point; a lone point sits at the left edge
    /// of the plot area
    fn x(&self, i: usize) -> f64 {
        if self.points < 2 {
            return self.margin_left;
        }
        self.margin_left + (i as f64 / (self.points - 1) as f64) * self.chart_width
    }

    /// Y coordinate for a revenue value, inverted for canvas space
    fn y(&self, value: f64) -> f64 {
        self.margin_top + (1.0 - value / self.y_max) * self.chart_height
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn series(values: &[f64]) -> Vec<RevenuePoint> {
        values
            .iter()
            .enumerate()
            .map(|(i, &revenue)| RevenuePoint {
                month: format!("M{}", i + 1),
                revenue,
            })
            .collect()
    }

    #[test]
    fn test_empty_series_has_no_scale() {
        assert!(ChartScale::new(800.0, 400.0, &[]).is_none());
    }

    #[test]
    fn test_x_spacing_is_even() {
        let s = series(&[100.0, 200.0, 300.0]);
        let scale = ChartScale::new(800.0, 400.0, &s).unwrap();

        let x0 = scale.x(0);
        let x1 = scale.x(1);
        let x2 = scale.x(2);
        assert_eq!(x0, scale.margin_left);
        assert!((x1 - x0 - (x2 - x1)).abs() < 1e-9);
        assert_eq!(x2, scale.margin_left + scale.chart_width);
    }

    #[test]
    fn test_y_axis_is_zero_based_with_headroom() {
        let s = series(&[500.0, 1000.0]);
        let scale = ChartScale::new(800.0, 400.0, &s).unwrap();

        // Zero sits on the baseline
        assert_eq!(scale.y(0.0), scale.margin_top + scale.chart_height);
        // The maximum stays below the top margin thanks to the headroom
        assert!(scale.y(1000.0) > scale.margin_top);
        assert!((scale.y_max - 1100.0).abs() < 1e-9);
    }

    #[test]
    fn test_all_zero_series_still_scales() {
        let s = series(&[0.0, 0.0]);
        let scale = ChartScale::new(800.0, 400.0, &s).unwrap();
        assert_eq!(scale.y_max, 1.0);
        assert_eq!(scale.y(0.0), scale.margin_top + scale.chart_height);
    }

    #[test]
    fn test_single_point_sits_at_plot_left_edge() {
        let s = series(&[750.0]);
        let scale = ChartScale::new(800.0, 400.0, &s).unwrap();
        assert_eq!(scale.x(0), scale.margin_left);
    }
}
