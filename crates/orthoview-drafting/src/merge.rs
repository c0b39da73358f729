//! Collinear segment merging.
//!
//! Segments are bucketed by their normalized direction rounded to six
//! decimals, sorted within each bucket by the `x + y` scalar of their
//! start point, and swept: an active chain absorbs the next segment when
//! its start lies within a perpendicular tolerance of the chain's
//! extended line, keeping whichever endpoint reaches farther along the
//! direction. This merges collinear end-to-end or overlapping runs; it
//! deliberately does not merge segments whose direction differs even
//! slightly outside the rounding bucket.

use std::collections::HashMap;

use orthoview_math::{Vec2, MERGE_EPS};

use crate::types::Line2D;

/// Merge collinear runs of segments sharing a direction bucket.
///
/// Segments shorter than the merge tolerance are discarded as degenerate
/// before grouping.
pub(crate) fn merge_collinear(segments: Vec<Line2D>) -> Vec<Line2D> {
    let mut groups: HashMap<(i64, i64), Vec<Line2D>> = HashMap::new();

    for seg in segments {
        let len = seg.length();
        if len < MERGE_EPS {
            continue;
        }
        let key = (
            direction_key((seg.end.x - seg.start.x) / len),
            direction_key((seg.end.y - seg.start.y) / len),
        );
        groups.entry(key).or_default().push(seg);
    }

    // Sorted bucket order keeps output deterministic across runs.
    let mut buckets: Vec<_> = groups.into_iter().collect();
    buckets.sort_unstable_by_key(|(key, _)| *key);

    let mut merged = Vec::new();
    for (_, mut group) in buckets {
        group.sort_by(|a, b| (a.start.x + a.start.y).total_cmp(&(b.start.x + b.start.y)));
        sweep_group(&group, &mut merged);
    }
    merged
}

/// Sweep one direction bucket, appending closed chains to `out`.
fn sweep_group(group: &[Line2D], out: &mut Vec<Line2D>) {
    let mut chains = group.iter();
    let Some(first) = chains.next() else {
        return;
    };

    let mut chain = *first;
    let mut dir = unit_direction(&chain);

    for seg in chains {
        let offset = Vec2::new(seg.start.x - chain.start.x, seg.start.y - chain.start.y);
        let perp = (offset.x * dir.y - offset.y * dir.x).abs();

        if perp <= MERGE_EPS {
            // Collinear: extend to whichever endpoint is farther along.
            let t_end = along(&chain, dir, chain.end.x, chain.end.y);
            let t_seg = along(&chain, dir, seg.end.x, seg.end.y);
            if t_seg > t_end {
                chain.end = seg.end;
            }
        } else {
            out.push(chain);
            chain = *seg;
            dir = unit_direction(&chain);
        }
    }
    out.push(chain);
}

fn unit_direction(line: &Line2D) -> Vec2 {
    let len = line.length();
    Vec2::new(
        (line.end.x - line.start.x) / len,
        (line.end.y - line.start.y) / len,
    )
}

fn along(chain: &Line2D, dir: Vec2, x: f64, y: f64) -> f64 {
    (x - chain.start.x) * dir.x + (y - chain.start.y) * dir.y
}

/// Quantize a direction component to six decimals as an integer key.
///
/// Integer keys sidestep the -0.0/0.0 bit-pattern split a float key
/// would introduce for near-axis directions.
fn direction_key(component: f64) -> i64 {
    (component * 1e6).round() as i64
}
