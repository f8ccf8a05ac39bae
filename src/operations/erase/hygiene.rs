use crate::geometry::Path;
use crate::stroke::StrokePart;

/// What to do with a candidate surviving fragment.
#[derive(Debug)]
pub(super) enum Candidate {
    Keep(StrokePart),
    /// Draws nothing; leave it out of the result.
    Drop,
    /// Geometry that must not reach the caller.
    Degenerate,
}

/// Normalizes `path` into a fragment styled like `source` and decides
/// whether it belongs in the result.
///
/// Filled candidates are closed. Visible fills with fewer than two drawn
/// commands and outlines with nothing to draw are dropped.
pub(super) fn prepare(source: &StrokePart, path: Path) -> Candidate {
    let path = if source.is_filled() {
        path.as_closed()
    } else {
        path
    };
    let part = source.with_path(path);

    if !part.path.exact_bbox().area().is_finite() {
        return Candidate::Degenerate;
    }
    if part.is_filled() {
        if part.style.color().alpha() > 0.0 && part.is_visually_empty() {
            return Candidate::Drop;
        }
    } else if part.path.segments().all(|seg| seg.is_degenerate()) {
        return Candidate::Drop;
    }
    Candidate::Keep(part)
}
