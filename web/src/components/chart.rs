//! SVG price chart.

use leptos::prelude::*;
use shared::history::HistoryPoint;

const VIEW_WIDTH: f64 = 800.0;
const VIEW_HEIGHT: f64 = 300.0;

/// Scale a series into the `points` attribute of an SVG polyline.
/// Returns `None` for fewer than two samples.
pub fn polyline_points(series: &[HistoryPoint], width: f64, height: f64) -> Option<String> {
    if series.len() < 2 {
        return None;
    }
    let min = series.iter().map(|p| p.close).fold(f64::INFINITY, f64::min);
    let max = series
        .iter()
        .map(|p| p.close)
        .fold(f64::NEG_INFINITY, f64::max);
    // A flat series draws a mid-height line instead of dividing by zero.
    let span = if (max - min).abs() < f64::EPSILON {
        1.0
    } else {
        max - min
    };
    let step = width / (series.len() - 1) as f64;
    Some(
        series
            .iter()
            .enumerate()
            .map(|(index, point)| {
                let x = step * index as f64;
                let y = if (max - min).abs() < f64::EPSILON {
                    height / 2.0
                } else {
                    height - (point.close - min) / span * height
                };
                format!("{x:.1},{y:.1}")
            })
            .collect::<Vec<_>>()
            .join(" "),
    )
}

#[component]
pub fn PriceChart(series: ReadSignal<Vec<HistoryPoint>>) -> impl IntoView {
    view! {
        {move || {
            let points = series.get();
            match polyline_points(&points, VIEW_WIDTH, VIEW_HEIGHT) {
                Some(path) => {
                    let first = points.first().map(|p| p.date.clone()).unwrap_or_default();
                    let last = points.last().map(|p| p.date.clone()).unwrap_or_default();
                    let min = points.iter().map(|p| p.close).fold(f64::INFINITY, f64::min);
                    let max = points.iter().map(|p| p.close).fold(f64::NEG_INFINITY, f64::max);
                    view! {
                        <div class="chart">
                            <svg
                                viewBox=format!("0 0 {VIEW_WIDTH} {VIEW_HEIGHT}")
                                preserveAspectRatio="none"
                                class="chart-svg"
                            >
                                <polyline
                                    points=path
                                    fill="none"
                                    stroke="#2563eb"
                                    stroke-width="2"
                                />
                            </svg>
                            <div class="chart-scale">
                                <span>{format!("min {min:.2} €")}</span>
                                <span>{format!("max {max:.2} €")}</span>
                            </div>
                            <div class="chart-dates">
                                <span>{first}</span>
                                <span>{last}</span>
                            </div>
                        </div>
                    }
                        .into_any()
                }
                None => view! { <p class="chart-empty">"Pas assez de données à afficher."</p> }
                    .into_any(),
            }
        }}
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn point(date: &str, close: f64) -> HistoryPoint {
        HistoryPoint {
            date: date.to_string(),
            close,
        }
    }

    #[test]
    fn too_few_samples_draw_nothing() {
        assert_eq!(polyline_points(&[], 800.0, 300.0), None);
        assert_eq!(polyline_points(&[point("01/05/2024", 10.0)], 800.0, 300.0), None);
    }

    #[test]
    fn endpoints_span_the_full_width() {
        let series = vec![
            point("01/05/2024", 10.0),
            point("02/05/2024", 20.0),
            point("03/05/2024", 15.0),
        ];
        let path = polyline_points(&series, 800.0, 300.0).unwrap();
        let coords: Vec<&str> = path.split(' ').collect();
        assert_eq!(coords.len(), 3);
        assert!(coords[0].starts_with("0.0,"));
        assert!(coords[2].starts_with("800.0,"));
        // min maps to the bottom edge, max to the top
        assert_eq!(coords[0], "0.0,300.0");
        assert_eq!(coords[1], "400.0,0.0");
    }

    #[test]
    fn flat_series_sits_at_mid_height() {
        let series = vec![point("01/05/2024", 10.0), point("02/05/2024", 10.0)];
        let path = polyline_points(&series, 800.0, 300.0).unwrap();
        assert_eq!(path, "0.0,150.0 800.0,150.0");
    }
}
