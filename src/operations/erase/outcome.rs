use tracing::trace;

use crate::error::EraseAbort;
use crate::geometry::Path;
use crate::stroke::StrokePart;

use super::hygiene::{self, Candidate};

/// Result of erasing a region out of one fragment.
///
/// When `abort` is set, `fragments` holds the untouched input fragment.
#[derive(Debug, Clone, PartialEq)]
pub struct EraseOutcome {
    pub fragments: Vec<StrokePart>,
    pub abort: Option<EraseAbort>,
}

impl EraseOutcome {
    /// Whether the erase fell back to leaving the fragment unchanged.
    #[must_use]
    pub fn aborted(&self) -> bool {
        self.abort.is_some()
    }

    /// Whether the outcome is exactly the input fragment.
    #[must_use]
    pub fn is_unchanged(&self, source: &StrokePart) -> bool {
        self.fragments.len() == 1 && self.fragments[0] == *source
    }
}

/// Accumulates kept fragments and the extent of everything discarded while
/// one fragment is erased.
#[derive(Debug)]
pub(super) struct Collector<'a> {
    source: &'a StrokePart,
    kept: Vec<StrokePart>,
    discarded_extent: f64,
    abort: Option<EraseAbort>,
}

impl<'a> Collector<'a> {
    pub(super) fn new(source: &'a StrokePart) -> Self {
        Self {
            source,
            kept: Vec::new(),
            discarded_extent: 0.0,
            abort: None,
        }
    }

    /// Keeps the input fragment as it is.
    pub(super) fn keep_source(&mut self) {
        self.kept.push(self.source.clone());
    }

    /// Keeps `path` styled like the input, subject to hygiene checks.
    pub(super) fn keep(&mut self, path: Path) {
        match hygiene::prepare(self.source, path) {
            Candidate::Keep(part) => self.kept.push(part),
            Candidate::Drop => trace!("dropping fragment that draws nothing"),
            Candidate::Degenerate => self.abort(EraseAbort::DegenerateGeometry),
        }
    }

    /// Records `path` as removed by the eraser.
    pub(super) fn discard(&mut self, path: &Path) {
        self.discard_extent(path.exact_bbox().max_dimension());
    }

    pub(super) fn discard_extent(&mut self, extent: f64) {
        if extent.is_finite() {
            self.discarded_extent = self.discarded_extent.max(extent);
        } else {
            self.abort(EraseAbort::DegenerateGeometry);
        }
    }

    /// Abandons the erase; the first reason wins.
    pub(super) fn abort(&mut self, reason: EraseAbort) {
        self.abort.get_or_insert(reason);
    }

    /// Applies the plausibility check and produces the outcome.
    pub(super) fn finish(self, eraser_extent: f64, safety_ratio: f64) -> EraseOutcome {
        let mut abort = self.abort;
        if abort.is_none() && self.discarded_extent > safety_ratio * eraser_extent {
            abort = Some(EraseAbort::ImplausibleDiscard {
                discarded: self.discarded_extent,
                eraser: eraser_extent,
            });
        }
        match abort {
            Some(reason) => EraseOutcome {
                fragments: vec![self.source.clone()],
                abort: Some(reason),
            },
            None => EraseOutcome {
                fragments: self.kept,
                abort: None,
            },
        }
    }
}
