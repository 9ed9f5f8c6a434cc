//! Chart widgets for the analysis models.

use ratatui::layout::Rect;
use ratatui::style::{Color, Modifier, Style};
use ratatui::symbols;
use ratatui::text::Span;
use ratatui::widgets::{Axis, Block, Borders, Chart, Dataset, GraphType};
use ratatui::Frame;

use benchtop_analysis::{HeatingCurve, XrdScan};

/// Widen degenerate bounds so the chart scale stays finite.
fn padded(bounds: [f64; 2]) -> [f64; 2] {
    if bounds[0] < bounds[1] {
        bounds
    } else {
        [bounds[0] - 1.0, bounds[1] + 1.0]
    }
}

/// Render a heating curve: dashed plateau guides under a bold schedule
/// line, with the model's tick labels on both axes.
pub fn render_heating_curve(frame: &mut Frame, area: Rect, curve: &HeatingCurve) {
    let mut datasets = Vec::with_capacity(curve.reference_lines.len() + 1);
    for line in &curve.reference_lines {
        datasets.push(
            Dataset::default()
                .marker(symbols::Marker::Dot)
                .graph_type(GraphType::Line)
                .style(Style::default().fg(Color::DarkGray))
                .data(line),
        );
    }
    datasets.push(
        Dataset::default()
            .name("schedule")
            .marker(symbols::Marker::Braille)
            .graph_type(GraphType::Line)
            .style(
                Style::default()
                    .fg(Color::White)
                    .add_modifier(Modifier::BOLD),
            )
            .data(&curve.points),
    );

    let x_labels: Vec<Span> = curve
        .x_tick_labels
        .iter()
        .map(|s| Span::raw(s.clone()))
        .collect();
    let y_labels: Vec<Span> = curve
        .y_tick_labels
        .iter()
        .map(|s| Span::raw(s.clone()))
        .collect();

    let chart = Chart::new(datasets)
        .block(
            Block::default()
                .borders(Borders::ALL)
                .title(" Heating Curve "),
        )
        .x_axis(
            Axis::default()
                .title(format!("time / {}", curve.time_unit.label()))
                .style(Style::default().fg(Color::Gray))
                .bounds(padded(curve.x_bounds))
                .labels(x_labels),
        )
        .y_axis(
            Axis::default()
                .title("temperature / \u{b0}C")
                .style(Style::default().fg(Color::Gray))
                .bounds(padded(curve.y_bounds))
                .labels(y_labels),
        );

    frame.render_widget(chart, area);
}

/// Render an XRD scan as a single intensity trace.
pub fn render_xrd_scan(frame: &mut Frame, area: Rect, scan: &XrdScan) {
    let dataset = Dataset::default()
        .name("intensity")
        .marker(symbols::Marker::Braille)
        .graph_type(GraphType::Line)
        .style(Style::default().fg(Color::Cyan))
        .data(&scan.points);

    let x_bounds = padded(scan.x_bounds);
    let y_bounds = padded(scan.y_bounds);
    let x_labels: Vec<Span> = [x_bounds[0], (x_bounds[0] + x_bounds[1]) / 2.0, x_bounds[1]]
        .iter()
        .map(|v| Span::raw(format!("{v:.1}")))
        .collect();
    let y_labels: Vec<Span> = [y_bounds[0], y_bounds[1]]
        .iter()
        .map(|v| Span::raw(format!("{v:.0}")))
        .collect();

    let chart = Chart::new(vec![dataset])
        .block(Block::default().borders(Borders::ALL).title(" XRD Scan "))
        .x_axis(
            Axis::default()
                .title("2\u{3b8} / deg")
                .style(Style::default().fg(Color::Gray))
                .bounds(x_bounds)
                .labels(x_labels),
        )
        .y_axis(
            Axis::default()
                .title("intensity / counts")
                .style(Style::default().fg(Color::Gray))
                .bounds(y_bounds)
                .labels(y_labels),
        );

    frame.render_widget(chart, area);
}

#[cfg(test)]
mod tests {
    use super::*;
    use benchtop_analysis::TimeUnit;
    use ratatui::backend::TestBackend;
    use ratatui::Terminal;

    fn render_in_test_terminal(width: u16, height: u16, draw: impl Fn(&mut Frame)) {
        let backend = TestBackend::new(width, height);
        let mut terminal = Terminal::new(backend).unwrap();
        terminal.draw(|frame| draw(frame)).unwrap();
    }

    fn sample_curve() -> HeatingCurve {
        HeatingCurve::new(
            &[0.0, 120.0, 360.0, 180.0],
            &[20.0, 950.0, 950.0, 20.0],
            TimeUnit::Hours,
        )
        .unwrap()
    }

    fn sample_scan() -> XrdScan {
        XrdScan::new(&[10.0, 20.0, 30.0, 40.0], &[5.0, 120.0, 14.0, 60.0]).unwrap()
    }

    #[test]
    fn heating_curve_renders() {
        let curve = sample_curve();
        render_in_test_terminal(80, 24, |frame| {
            let area = frame.area();
            render_heating_curve(frame, area, &curve);
        });
    }

    #[test]
    fn heating_curve_renders_in_small_area() {
        let curve = sample_curve();
        render_in_test_terminal(20, 6, |frame| {
            let area = frame.area();
            render_heating_curve(frame, area, &curve);
        });
    }

    #[test]
    fn single_point_curve_renders() {
        let curve = HeatingCurve::new(&[0.0], &[25.0], TimeUnit::Minutes).unwrap();
        render_in_test_terminal(80, 24, |frame| {
            let area = frame.area();
            render_heating_curve(frame, area, &curve);
        });
    }

    #[test]
    fn xrd_scan_renders() {
        let scan = sample_scan();
        render_in_test_terminal(80, 24, |frame| {
            let area = frame.area();
            render_xrd_scan(frame, area, &scan);
        });
    }

    #[test]
    fn normalized_scan_renders() {
        let scan = sample_scan().normalized();
        render_in_test_terminal(80, 24, |frame| {
            let area = frame.area();
            render_xrd_scan(frame, area, &scan);
        });
    }

    #[test]
    fn padded_widens_degenerate_bounds() {
        assert_eq!(padded([5.0, 5.0]), [4.0, 6.0]);
        assert_eq!(padded([0.0, 10.0]), [0.0, 10.0]);
    }
}
