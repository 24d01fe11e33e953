use std::fs;
use std::io::{self, Write};

use crossterm::ExecutableCommand;
use crossterm::cursor;
use crossterm::terminal::{self, Clear, ClearType};
use plotgrid::logging::FileSink;
use plotgrid::render::render_to_canvas;
use plotgrid::{
    AlignmentSpec, AnsiRenderer, Cell, ChartPanel, ComposerConfig, GridComposer, GridSpec,
    LabelSpec, Logger, Picture, Result, Size,
};

fn main() -> Result<()> {
    let log_path = std::env::temp_dir().join("plotgrid-showcase.log");
    let sink = FileSink::new(&log_path, 64 * 1024)?;
    let mut config = ComposerConfig::default().with_logger(Logger::new(sink));
    config.enable_metrics();
    let composer = GridComposer::new(config)?;

    let sales = ChartPanel::builder("sales")
        .title("Sales")
        .x_axis(Some("month"), ["Jan", "Jun", "Dec"])
        .y_axis(Some("units"), ["1200", "600", "0"])
        .body('.')
        .build()?
        .into_ref();
    let returns = ChartPanel::builder("returns")
        .title("Returns")
        .x_axis(Some("month"), ["Jan", "Jun", "Dec"])
        .y_axis(None, ["9", "0"])
        .legend(["online", "store"])
        .body(':')
        .build()?
        .into_ref();
    let logo = Picture::new("logo", " /\\ \n/  \\\n\\  /\n \\/ ").into_ref();

    // Top row: both charts share their panel edges on every side.
    let top = composer
        .compose(
            vec![Cell::new(sales.clone()), Cell::new(returns.clone())],
            &GridSpec::new()
                .ncol(2)
                .align(AlignmentSpec::parse("hv", "tblr")?),
            &composer.labels("AUTO"),
        )?
        .into_drawable();

    // Bottom row: the picture cannot be aligned and is reported.
    let bottom = composer.compose(
        vec![Cell::new(logo), Cell::new(sales)],
        &GridSpec::new()
            .ncol(2)
            .rel_widths(vec![1.0, 2.0])
            .align(AlignmentSpec::parse("h", "")?),
        &composer.labels(vec!["C", "D"]).color("cyan"),
    )?;
    let diagnostics = bottom.diagnostics.clone();

    let page = composer.compose(
        vec![Cell::new(top), Cell::new(bottom.into_drawable())],
        &GridSpec::new().ncol(1),
        &LabelSpec::default(),
    )?;

    let canvas = render_to_canvas(&page.grid, Size::new(80.0, 24.0))?;

    let mut stdout = io::stdout();
    stdout.execute(Clear(ClearType::All))?;
    let mut renderer = AnsiRenderer::with_default();
    renderer.settings_mut().restore_cursor = Some((canvas.height(), 0));
    renderer.render(&mut stdout, &canvas)?;
    stdout.execute(cursor::MoveToNextLine(1))?;

    let (cols, _) = terminal::size().unwrap_or((80, 24));
    if canvas.width() > cols {
        writeln!(stdout, "(terminal narrower than the {} column composition)", canvas.width())?;
    }
    for diagnostic in &diagnostics {
        writeln!(stdout, "diagnostic {}: {diagnostic:?}", diagnostic.code())?;
    }
    writeln!(stdout, "log file: {}", log_path.display())?;
    for line in fs::read_to_string(&log_path)?.lines().rev().take(6) {
        writeln!(stdout, "  {line}")?;
    }
    if let Some(metrics) = composer.config().metrics_handle() {
        if let Ok(guard) = metrics.lock() {
            writeln!(stdout, "metrics: {:?}", guard.snapshot())?;
        }
    }
    Ok(())
}
