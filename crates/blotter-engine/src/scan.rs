//! Forward window scans over the price series.

/// Outcome of scanning a bounded window of bars for a predicate hit.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub(crate) enum WindowOutcome {
    /// The predicate first held at this bar index.
    Hit(usize),
    /// The whole window exists and the predicate never held; `last` is the
    /// window's final bar index.
    NoHit { last: usize },
    /// The window runs past the end of the series and the predicate never
    /// held on the bars that do exist.
    Truncated,
}

/// Scan bars `first..=last` for the first index where `hit` holds, walking
/// only the part of the window that exists in a series of `len` bars.
///
/// The three-way outcome keeps the no-fill branches honest: an order can
/// only be cancelled once its full window has been observed, while a
/// truncated window leaves it unresolved.
pub(crate) fn scan_forward(
    len: usize,
    first: usize,
    last: usize,
    hit: impl Fn(usize) -> bool,
) -> WindowOutcome {
    if first >= len {
        return WindowOutcome::Truncated;
    }
    for index in first..=last.min(len - 1) {
        if hit(index) {
            return WindowOutcome::Hit(index);
        }
    }
    if last < len {
        WindowOutcome::NoHit { last }
    } else {
        WindowOutcome::Truncated
    }
}
