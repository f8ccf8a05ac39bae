//! Inkcut erase report: runs a named erase scenario and logs the result.
//!
//! Usage:
//! ```text
//! cargo run --example erase_report                 # default (corner_bite)
//! cargo run --example erase_report -- band
//! RUST_LOG=inkcut=trace cargo run --example erase_report -- touch
//! ```

use inkcut::geometry::Path;
use inkcut::math::Point2;
use inkcut::stroke::{Color, Stroke, StrokePart, Style};
use inkcut::viewport::{eraser_outline, CanvasViewport};
use inkcut::Result;
use tracing::{info, warn};

/// All available scenario names.
const SCENARIOS: &[&str] = &["corner_bite", "band", "comb", "outline", "touch", "sweep"];

fn p(x: f64, y: f64) -> Point2 {
    Point2::new(x, y)
}

fn rect(x0: f64, y0: f64, x1: f64, y1: f64) -> Result<Path> {
    Path::from_points(&[p(x0, y0), p(x1, y0), p(x1, y1), p(x0, y1)], true)
}

fn filled_square() -> Result<Stroke> {
    Ok(Stroke::from_part(
        StrokePart::new(rect(0.0, 0.0, 10.0, 10.0)?, Style::fill(Color::BLACK)),
        0,
    ))
}

fn horizontal_line(y: f64) -> Result<Stroke> {
    Ok(Stroke::from_part(
        StrokePart::new(
            Path::from_points(&[p(0.0, y), p(20.0, y)], false)?,
            Style::stroke(Color::BLACK, 1.0)?,
        ),
        0,
    ))
}

/// Builds the stroke and eraser for the named scenario.
fn scenario(name: &str) -> Result<Option<(Stroke, Path)>> {
    let pair = match name {
        "corner_bite" => (filled_square()?, rect(5.0, -5.0, 15.0, 5.0)?),
        "band" => (filled_square()?, rect(-5.0, 4.0, 15.0, 6.0)?),
        "comb" => {
            let comb = Path::from_points(
                &[
                    p(1.0, -5.0),
                    p(9.0, -5.0),
                    p(9.0, -2.0),
                    p(8.0, -2.0),
                    p(8.0, 3.0),
                    p(7.0, 3.0),
                    p(7.0, -2.0),
                    p(5.0, -2.0),
                    p(5.0, 3.0),
                    p(4.0, 3.0),
                    p(4.0, -2.0),
                    p(2.0, -2.0),
                    p(2.0, 3.0),
                    p(1.0, 3.0),
                ],
                true,
            )?;
            (filled_square()?, comb)
        }
        "outline" => (horizontal_line(5.0)?, rect(5.0, 0.0, 15.0, 10.0)?),
        "touch" => {
            let wedge = Path::from_points(
                &[p(2.0, 4.0), p(5.0, 0.0), p(10.0, 3.0), p(15.0, 0.0), p(18.0, 4.0)],
                true,
            )?;
            (horizontal_line(0.0)?, wedge)
        }
        "sweep" => (
            filled_square()?,
            eraser_outline(p(-2.0, 12.0), p(12.0, -2.0), 3.0)?,
        ),
        _ => return Ok(None),
    };
    Ok(Some(pair))
}

fn main() -> Result<()> {
    // Default: WARN for everything, INFO for the demo and inkcut.
    // Override with RUST_LOG env var (e.g. RUST_LOG=inkcut=trace).
    let env_filter = tracing_subscriber::EnvFilter::from_default_env()
        .add_directive(tracing_subscriber::filter::LevelFilter::WARN.into())
        .add_directive("erase_report=info".parse().unwrap_or_default())
        .add_directive("inkcut=info".parse().unwrap_or_default());
    tracing_subscriber::fmt().with_env_filter(env_filter).init();

    let name = std::env::args().nth(1).unwrap_or_else(|| "corner_bite".to_owned());
    let Some((stroke, eraser)) = scenario(&name)? else {
        warn!(%name, available = ?SCENARIOS, "unknown scenario");
        return Ok(());
    };

    let viewport = CanvasViewport::new(1.0)?;
    let result = stroke.with_region_erased(&eraser, &viewport);
    let unchanged = result.len() == 1 && result[0] == stroke;
    info!(%name, strokes = result.len(), unchanged, "erase finished");

    for (i, survivor) in result.iter().enumerate() {
        for part in survivor.parts() {
            let bbox = part.path.exact_bbox();
            info!(
                stroke = i,
                kind = ?part.style.kind(),
                closed = part.path.is_closed(),
                commands = part.path.command_count(),
                area = part.path.area(),
                length = part.path.length(),
                min = ?(bbox.min.x, bbox.min.y),
                max = ?(bbox.max.x, bbox.max.y),
                "surviving part"
            );
        }
    }
    Ok(())
}
