//! Chart command implementation - profit versus starting cash in a TUI.

// Chart coordinates are f64 by construction
#![allow(clippy::cast_precision_loss, clippy::needless_pass_by_value)]

use super::output::{best_label, format_thousands, format_tick};
use super::{CliError, SweepArgs, configure_threads};
use crossterm::{
    event::{self, Event, KeyCode, KeyEventKind},
    execute,
    terminal::{EnterAlternateScreen, LeaveAlternateScreen, disable_raw_mode, enable_raw_mode},
};
use miscellania::experiment::linspace;
use miscellania::{SweepPoint, SweepReport, run_sweep};
use ratatui::{
    Frame, Terminal,
    backend::CrosstermBackend,
    layout::{Constraint, Direction, Layout, Rect},
    style::{Color, Modifier, Style},
    symbols::Marker,
    text::{Line, Span},
    widgets::{Axis, Block, Borders, Chart, Dataset, GraphType, LegendPosition, Paragraph},
};
use std::io::stdout;
use std::time::Duration;

/// Ticks per axis.
const TICKS: usize = 6;

/// Execute the chart command.
///
/// # Errors
///
/// Returns an error if the sweep fails, produces no points, or the TUI fails.
pub(crate) fn execute(args: SweepArgs) -> Result<(), CliError> {
    configure_threads(args.threads);
    let report = run_sweep(&args.to_config())?;
    let plot = ChartData::from_report(&report)
        .ok_or_else(|| CliError::new("Sweep produced no points to chart"))?;

    run_tui(&plot)
}

/// Everything the chart draws, precomputed from a sweep.
#[derive(Debug)]
struct ChartData {
    curve: Vec<(f64, f64)>,
    best_marker: Vec<(f64, f64)>,
    zero_line: Vec<(f64, f64)>,
    x_bounds: [f64; 2],
    y_bounds: [f64; 2],
    best: SweepPoint,
    base_revenue: i64,
}

impl ChartData {
    fn from_report(report: &SweepReport) -> Option<Self> {
        let best = *report.best()?;
        let (cash_lo, cash_hi) = report.cash_range()?;
        let (profit_lo, profit_hi) = report.profit_range()?;

        let x_bounds = widen(cash_lo as f64, cash_hi as f64);
        // Keep the zero-profit line in view
        let y_bounds = widen((profit_lo as f64).min(0.0), (profit_hi as f64).max(0.0));

        let curve = report
            .points
            .iter()
            .map(|p| (p.starting_cash as f64, p.profit as f64))
            .collect();
        let best_x = best.starting_cash as f64;

        Some(Self {
            curve,
            best_marker: vec![(best_x, y_bounds[0]), (best_x, y_bounds[1])],
            zero_line: vec![(x_bounds[0], 0.0), (x_bounds[1], 0.0)],
            x_bounds,
            y_bounds,
            best,
            base_revenue: report.base_revenue,
        })
    }

    fn x_labels(&self) -> Vec<Span<'static>> {
        axis_labels(self.x_bounds)
    }

    fn y_labels(&self) -> Vec<Span<'static>> {
        axis_labels(self.y_bounds)
    }
}

/// Axis bounds, padded when the range is a single value.
fn widen(lo: f64, hi: f64) -> [f64; 2] {
    if hi > lo { [lo, hi] } else { [lo - 1.0, hi + 1.0] }
}

fn axis_labels(bounds: [f64; 2]) -> Vec<Span<'static>> {
    linspace(bounds[0], bounds[1], TICKS)
        .into_iter()
        .map(|v| Span::raw(format_tick(v)))
        .collect()
}

fn run_tui(plot: &ChartData) -> Result<(), CliError> {
    // Setup terminal
    enable_raw_mode()?;
    let mut stdout = stdout();
    execute!(stdout, EnterAlternateScreen)?;
    let backend = CrosstermBackend::new(stdout);
    let mut terminal = Terminal::new(backend).map_err(|e| CliError::new(e.to_string()))?;

    loop {
        terminal.draw(|f| ui(f, plot)).map_err(|e| CliError::new(e.to_string()))?;

        if event::poll(Duration::from_millis(100)).map_err(|e| CliError::new(e.to_string()))?
            && let Event::Key(key) = event::read().map_err(|e| CliError::new(e.to_string()))?
            && key.kind == KeyEventKind::Press
            && matches!(key.code, KeyCode::Char('q') | KeyCode::Esc)
        {
            break;
        }
    }

    // Restore terminal
    disable_raw_mode()?;
    execute!(terminal.backend_mut(), LeaveAlternateScreen)?;

    Ok(())
}

fn ui(f: &mut Frame, plot: &ChartData) {
    let chunks = Layout::default()
        .direction(Direction::Vertical)
        .constraints([
            Constraint::Min(10),   // Chart
            Constraint::Length(4), // Annotation
            Constraint::Length(3), // Footer
        ])
        .split(f.area());

    render_chart(f, chunks[0], plot);
    render_annotation(f, chunks[1], plot);
    render_footer(f, chunks[2]);
}

fn render_chart(f: &mut Frame, area: Rect, plot: &ChartData) {
    let datasets = vec![
        Dataset::default()
            .name(format!("Base revenue = {}", format_thousands(plot.base_revenue)))
            .marker(Marker::Braille)
            .graph_type(GraphType::Line)
            .style(Style::default().fg(Color::Cyan))
            .data(&plot.curve),
        Dataset::default()
            .name("Best")
            .marker(Marker::Braille)
            .graph_type(GraphType::Line)
            .style(Style::default().fg(Color::Red))
            .data(&plot.best_marker),
        Dataset::default()
            .name("0 profit")
            .marker(Marker::Dot)
            .graph_type(GraphType::Line)
            .style(Style::default().fg(Color::DarkGray))
            .data(&plot.zero_line),
    ];

    let chart = Chart::new(datasets)
        .block(
            Block::default()
                .borders(Borders::ALL)
                .title(" Profits vs. Starting Cash "),
        )
        .x_axis(
            Axis::default()
                .title("Starting cash")
                .style(Style::default().fg(Color::Gray))
                .bounds(plot.x_bounds)
                .labels(plot.x_labels()),
        )
        .y_axis(
            Axis::default()
                .title("Profits")
                .style(Style::default().fg(Color::Gray))
                .bounds(plot.y_bounds)
                .labels(plot.y_labels()),
        )
        .legend_position(Some(LegendPosition::TopRight));

    f.render_widget(chart, area);
}

fn render_annotation(f: &mut Frame, area: Rect, plot: &ChartData) {
    let lines = vec![
        Line::from(Span::styled(
            best_label(&plot.best),
            Style::default().fg(Color::Red).add_modifier(Modifier::BOLD),
        )),
        Line::from(format!(
            "Axis ticks span {} to {} starting cash",
            format_tick(plot.x_bounds[0]),
            format_tick(plot.x_bounds[1])
        )),
    ];

    let annotation = Paragraph::new(lines).block(Block::default().borders(Borders::ALL));
    f.render_widget(annotation, area);
}

fn render_footer(f: &mut Frame, area: Rect) {
    let footer = Paragraph::new(" [q] Quit ")
        .style(Style::default().fg(Color::Gray))
        .block(Block::default().borders(Borders::ALL));

    f.render_widget(footer, area);
}

#[cfg(test)]
mod tests {
    use super::*;
    use miscellania::QuestStatus;

    fn report(points: Vec<SweepPoint>) -> SweepReport {
        SweepReport {
            base_revenue: 125_000,
            quest: QuestStatus::Completed,
            starting_approval: 1.0,
            points,
        }
    }

    #[test]
    fn test_chart_data_marks_best() {
        let plot = ChartData::from_report(&report(vec![
            SweepPoint { starting_cash: 0, profit: 0, days: 0 },
            SweepPoint { starting_cash: 100, profit: 50, days: 4 },
            SweepPoint { starting_cash: 200, profit: -30, days: 6 },
        ]))
        .unwrap();

        assert_eq!(plot.best.starting_cash, 100);
        assert_eq!(plot.x_bounds, [0.0, 200.0]);
        assert_eq!(plot.y_bounds, [-30.0, 50.0]);
        assert_eq!(plot.best_marker, vec![(100.0, -30.0), (100.0, 50.0)]);
        assert_eq!(plot.curve.len(), 3);
    }

    #[test]
    fn test_chart_keeps_zero_in_view() {
        let plot = ChartData::from_report(&report(vec![
            SweepPoint { starting_cash: 10, profit: 5, days: 5 },
            SweepPoint { starting_cash: 20, profit: 9, days: 7 },
        ]))
        .unwrap();
        assert_eq!(plot.y_bounds, [0.0, 9.0]);
    }

    #[test]
    fn test_chart_single_point_is_widened() {
        let plot = ChartData::from_report(&report(vec![SweepPoint {
            starting_cash: 0,
            profit: 0,
            days: 0,
        }]))
        .unwrap();
        assert_eq!(plot.x_bounds, [-1.0, 1.0]);
        assert_eq!(plot.x_labels().len(), TICKS);
    }

    #[test]
    fn test_chart_empty_report() {
        assert!(ChartData::from_report(&report(Vec::new())).is_none());
    }

    #[test]
    fn test_axis_labels_are_comma_formatted() {
        let labels: Vec<String> = axis_labels([0.0, 10_000_000.0])
            .into_iter()
            .map(|s| s.content.into_owned())
            .collect();
        assert_eq!(
            labels,
            vec!["0", "2,000,000", "4,000,000", "6,000,000", "8,000,000", "10,000,000"]
        );
    }
}
