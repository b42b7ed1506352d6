use std::path::Path;

use chrono::Duration;
use plotters::prelude::*;
use thiserror::Error;

use crate::domain::burndown::BurndownSeries;
use crate::domain::calendar_date::{CalendarDate, format_calendar_date};
use crate::domain::status_sample::BurnupSeries;

#[derive(Error, Debug)]
pub enum ChartPlotError {
    #[error("series is empty")]
    EmptySeries,
    #[error("failed to render chart: {0}")]
    Render(String),
}

fn render_error<E: std::fmt::Display>(e: E) -> ChartPlotError {
    ChartPlotError::Render(e.to_string())
}

fn day_offset(first_day: CalendarDate, day: CalendarDate) -> Result<i32, ChartPlotError> {
    i32::try_from((day - first_day).num_days()).map_err(render_error)
}

fn offset_label(first_day: CalendarDate, offset: i32) -> String {
    first_day
        .checked_add_signed(Duration::days(i64::from(offset)))
        .map(format_calendar_date)
        .unwrap_or_default()
}

/// Draws one line per status, days on the x axis.
pub fn write_burnup_png<P: AsRef<Path>>(
    output_path: P,
    series: &BurnupSeries,
) -> Result<(), ChartPlotError> {
    let points = series.by_status.values().flatten();
    let first_day = points
        .clone()
        .map(|point| point.day)
        .min()
        .ok_or(ChartPlotError::EmptySeries)?;
    let last_day = points.clone().map(|point| point.day).max().unwrap_or(first_day);
    let max_qty = points.map(|point| point.qty).max().unwrap_or(0);

    let max_x = day_offset(first_day, last_day)?.max(1);
    let max_y = max_qty.saturating_add(1).max(1);

    let root = BitMapBackend::new(output_path.as_ref(), (900, 600)).into_drawing_area();
    root.fill(&WHITE).map_err(render_error)?;

    let mut chart = ChartBuilder::on(&root)
        .margin(20)
        .caption("Burnup", ("sans-serif", 30))
        .x_label_area_size(55)
        .y_label_area_size(65)
        .build_cartesian_2d(0..max_x, 0..max_y)
        .map_err(render_error)?;

    chart
        .configure_mesh()
        .disable_mesh()
        .x_desc("Date")
        .y_desc("Issues")
        .label_style(("sans-serif", 18))
        .axis_desc_style(("sans-serif", 22))
        .x_labels((max_x as usize).clamp(1, 10))
        .x_label_formatter(&|offset| offset_label(first_day, *offset))
        .draw()
        .map_err(render_error)?;

    for (index, (status, points)) in series.by_status.iter().enumerate() {
        let color = Palette99::pick(index).to_rgba();
        let line = points
            .iter()
            .map(|point| day_offset(first_day, point.day).map(|x| (x, point.qty)))
            .collect::<Result<Vec<_>, _>>()?;
        chart
            .draw_series(LineSeries::new(line, color.stroke_width(2)))
            .map_err(render_error)?
            .label(status.as_str())
            .legend(move |(x, y)| PathElement::new(vec![(x, y), (x + 20, y)], color));
    }

    chart
        .configure_series_labels()
        .background_style(WHITE.mix(0.8))
        .border_style(BLACK)
        .draw()
        .map_err(render_error)?;

    root.present().map_err(render_error)?;
    Ok(())
}

/// Draws remaining work against the ideal line across the iteration window.
pub fn write_burndown_png<P: AsRef<Path>>(
    output_path: P,
    series: &BurndownSeries,
) -> Result<(), ChartPlotError> {
    if series.is_empty() {
        return Err(ChartPlotError::EmptySeries);
    }

    let first_day = series.window.start_date;
    let max_x = day_offset(first_day, series.window.end_date)?.max(1);
    let max_value = series
        .samples
        .iter()
        .map(|sample| sample.remaining.max(sample.ideal))
        .fold(0.0_f64, f64::max);
    let max_y = (max_value + 1.0).ceil();

    let root = BitMapBackend::new(output_path.as_ref(), (900, 600)).into_drawing_area();
    root.fill(&WHITE).map_err(render_error)?;

    let mut chart = ChartBuilder::on(&root)
        .margin(20)
        .caption("Burndown", ("sans-serif", 30))
        .x_label_area_size(55)
        .y_label_area_size(65)
        .build_cartesian_2d(0..max_x, 0.0..max_y)
        .map_err(render_error)?;

    chart
        .configure_mesh()
        .disable_mesh()
        .x_desc("Iteration day")
        .y_desc("Remaining work")
        .label_style(("sans-serif", 18))
        .axis_desc_style(("sans-serif", 22))
        .x_labels((max_x as usize).clamp(1, 10))
        .x_label_formatter(&|offset| offset_label(first_day, *offset))
        .draw()
        .map_err(render_error)?;

    let remaining_color = RGBColor(30, 122, 204);
    let ideal_color = RGBColor(160, 160, 160);
    let offsets = series
        .samples
        .iter()
        .map(|sample| day_offset(first_day, sample.day))
        .collect::<Result<Vec<_>, _>>()?;

    chart
        .draw_series(LineSeries::new(
            offsets
                .iter()
                .zip(&series.samples)
                .map(|(x, sample)| (*x, sample.remaining)),
            remaining_color.stroke_width(2),
        ))
        .map_err(render_error)?
        .label("Remaining")
        .legend(move |(x, y)| PathElement::new(vec![(x, y), (x + 20, y)], remaining_color));

    chart
        .draw_series(LineSeries::new(
            offsets
                .iter()
                .zip(&series.samples)
                .map(|(x, sample)| (*x, sample.ideal)),
            ideal_color.stroke_width(1),
        ))
        .map_err(render_error)?
        .label("Ideal")
        .legend(move |(x, y)| PathElement::new(vec![(x, y), (x + 20, y)], ideal_color));

    chart
        .configure_series_labels()
        .background_style(WHITE.mix(0.8))
        .border_style(BLACK)
        .draw()
        .map_err(render_error)?;

    root.present().map_err(render_error)?;
    Ok(())
}
