//! Burndown Chart Component
//!
//! SVG coloring sheet: one column per day, one row per point, and the
//! reference lines of the current projection.

use burndown_core::Projection;
use leptos::prelude::*;

use crate::store::{use_app_store, AppStateStoreFields};

const WIDTH: f64 = 760.0;
const HEIGHT: f64 = 400.0;
const PLOT_LEFT: f64 = 80.0;
const PLOT_RIGHT: f64 = WIDTH - 20.0;
const PLOT_TOP: f64 = 20.0;
const PLOT_BOTTOM: f64 = HEIGHT - 40.0;

const IDEAL_LINE_COLOR: &str = "#3498db";
const LAST_MINUTE_LINE_COLOR: &str = "#e74c3c";

/// Maps days and points onto the plot area
#[derive(Debug, Clone, Copy)]
struct ChartFrame {
    day_count: usize,
    total: f64,
}

impl ChartFrame {
    fn new(projection: &Projection) -> Self {
        Self {
            day_count: projection.days.len(),
            total: projection.total_points as f64,
        }
    }

    fn x(&self, day: usize) -> f64 {
        let span = self.day_count.saturating_sub(1).max(1) as f64;
        PLOT_LEFT + (PLOT_RIGHT - PLOT_LEFT) * day as f64 / span
    }

    fn y(&self, points: f64) -> f64 {
        if self.total <= 0.0 {
            return PLOT_BOTTOM;
        }
        PLOT_BOTTOM - (PLOT_BOTTOM - PLOT_TOP) * points / self.total
    }

    /// `points` attribute of a polyline through `line`
    fn polyline(&self, line: &[f64]) -> String {
        line.iter()
            .enumerate()
            .map(|(day, points)| format!("{},{}", coord(self.x(day)), coord(self.y(*points))))
            .collect::<Vec<_>>()
            .join(" ")
    }
}

fn coord(value: f64) -> String {
    format!("{:.1}", value)
}

#[component]
pub fn BurndownChart() -> impl IntoView {
    let store = use_app_store();
    let projection = Memo::new(move |_| Projection::from_print_data(&store.print_data().read()));

    view! {
        <div class="burndown-chart">
            <h2>"Burndown chart"</h2>
            {move || match projection.get() {
                None => view! {
                    <p class="chart-empty">"Set a period to draw the chart."</p>
                }.into_any(),
                Some(p) if p.days.is_empty() => view! {
                    <p class="chart-empty">"The period has no days."</p>
                }.into_any(),
                Some(p) => chart_svg(&p).into_any(),
            }}
        </div>
    }
}

fn chart_svg(projection: &Projection) -> impl IntoView {
    let frame = ChartFrame::new(projection);

    // one row per point: each band between rows is a cell to color
    let rows = projection.grid_rows().into_iter().map(|row| {
        let y = coord(frame.y(row.value as f64));
        let class = if row.label.is_some() { "grid-row labelled" } else { "grid-row" };
        let label = row.label.map(|label| view! {
            <text class="tick-label" x=coord(PLOT_LEFT - 6.0) y=y.clone() dy="4" text-anchor="end">{label}</text>
        });
        view! {
            <line class=class x1=coord(PLOT_LEFT) x2=coord(PLOT_RIGHT) y1=y.clone() y2=y />
            {label}
        }
    }).collect_view();

    let columns = projection.day_labels().into_iter().enumerate().map(|(day, label)| {
        let x = coord(frame.x(day));
        view! {
            <line class="grid-column" x1=x.clone() x2=x.clone() y1=coord(PLOT_TOP) y2=coord(PLOT_BOTTOM) />
            <text class="day-label" x=x y=coord(PLOT_BOTTOM + 18.0) text-anchor="middle">{label}</text>
        }
    }).collect_view();

    let last_minute = projection.last_minute_line.as_ref().map(|line| view! {
        <polyline class="last-minute-line" fill="none" stroke=LAST_MINUTE_LINE_COLOR stroke-width="2" points=frame.polyline(line) />
    });
    let ideal = projection.ideal_line.as_ref().map(|line| view! {
        <polyline class="ideal-line" fill="none" stroke=IDEAL_LINE_COLOR stroke-width="2" stroke-dasharray="6 4" points=frame.polyline(line) />
    });
    let has_ideal = projection.ideal_line.is_some();
    let has_last_minute = projection.last_minute_line.is_some();

    view! {
        <svg class="chart-svg" xmlns="http://www.w3.org/2000/svg" viewBox=format!("0 0 {} {}", WIDTH, HEIGHT)>
            {rows}
            {columns}
            {last_minute}
            {ideal}
        </svg>
        <div class="chart-legend">
            <Show when=move || has_ideal>
                <span class="legend-item" style=format!("color: {}", IDEAL_LINE_COLOR)>"- - Ideal"</span>
            </Show>
            <Show when=move || has_last_minute>
                <span class="legend-item" style=format!("color: {}", LAST_MINUTE_LINE_COLOR)>"── Last minute"</span>
            </Show>
        </div>
    }
}
