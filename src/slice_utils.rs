use serde::{Deserialize, Serialize};

use crate::error::Error;

/// How [`rotate_slice_with`] treats a negative offset.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum NegativeOffsets {
    #[default]
    Reject,
    /// `-k` rotates left by `k`.
    RotateLeft,
}

/// Reduces `offset` modulo `len`.
///
/// Returns `Ok(None)` when rotating by `offset` would leave a sequence of
/// length `len` unchanged.
pub fn normalize_offset(offset: i64, len: usize) -> Result<Option<usize>, Error> {
    if offset < 0 {
        return Err(Error::NegativeOffset { offset });
    }

    if len <= 1 {
        return Ok(None);
    }

    let offset = (offset.unsigned_abs() % len as u64) as usize;

    Ok((offset != 0).then_some(offset))
}

/// Rotates `s` to the right by `offset` positions in place.
///
/// Uses three reversals, so no auxiliary buffer is allocated. A negative
/// offset is rejected before the slice is touched.
pub fn rotate_slice<T>(s: &mut [T], offset: i64) -> Result<(), Error> {
    let normalized = normalize_offset(offset, s.len()).inspect_err(|_| {
        tracing::debug!(offset, "Rejecting negative offset");
    })?;

    let Some(offset) = normalized else {
        tracing::trace!(len = s.len(), "Rotation is a no-op");
        return Ok(());
    };

    rotate_right_by(s, offset);

    Ok(())
}

/// Like [`rotate_slice`], but `policy` decides what a negative offset means.
/// Non-negative offsets behave the same under every policy.
pub fn rotate_slice_with<T>(
    s: &mut [T],
    offset: i64,
    policy: NegativeOffsets,
) -> Result<(), Error> {
    match policy {
        NegativeOffsets::RotateLeft if offset < 0 => {
            let len = s.len();
            let left = match len {
                0 | 1 => 0,
                _ => (offset.unsigned_abs() % len as u64) as usize,
            };

            if left == 0 {
                tracing::trace!(len, offset, "Left rotation is a no-op");
                return Ok(());
            }

            tracing::trace!(len, left, "Rotating slice left");

            rotate_right_by(s, len - left);

            Ok(())
        }
        _ => rotate_slice(s, offset),
    }
}

/// Reverses the elements of `s` between `start` and `end`, both inclusive.
///
/// Bounds are checked before any element moves.
pub fn reverse_range<T>(s: &mut [T], start: usize, end: usize) -> Result<(), Error> {
    if start > end {
        tracing::debug!(start, end, "Rejecting inverted range");
        return Err(Error::InvertedRange { start, end });
    }

    if end >= s.len() {
        tracing::debug!(len = s.len(), end, "Rejecting out of bounds range");
        return Err(Error::RangeOutOfBounds { end, len: s.len() });
    }

    tracing::trace!(len = s.len(), start, end, "Reversing range");

    reverse_inclusive(s, start, end);

    Ok(())
}

// `offset` must be in `1..s.len()`
fn rotate_right_by<T>(s: &mut [T], offset: usize) {
    let last = s.len() - 1;

    tracing::trace!(len = s.len(), offset, "Rotating slice");

    // The tail that wraps around ends up reversed at the front
    reverse_inclusive(s, 0, last);

    reverse_inclusive(s, 0, offset - 1);
    reverse_inclusive(s, offset, last);
}

fn reverse_inclusive<T>(s: &mut [T], start: usize, end: usize) {
    let (mut i, mut j) = (start, end);
    while i < j {
        s.swap(i, j);
        i += 1;
        j -= 1;
    }
}
