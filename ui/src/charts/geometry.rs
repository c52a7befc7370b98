//! Pure mapping from series values to drawable primitives.
//!
//! Nothing here fails: degenerate input (empty series, zero totals, inverted
//! ranges, non-finite scores) yields zero extents or no shapes.

use std::f64::consts::PI;

#[derive(Debug, Clone, Copy, Default, PartialEq)]
pub struct Point {
    pub x: f64,
    pub y: f64,
}

/// Sweep in degrees of a half-circle gauge for `score` on `[min, max]`.
///
/// The score is clamped first, so the result always lies in `[0, 180]`.
pub fn gauge_angle(score: f64, min: f64, max: f64) -> f64 {
    if score.is_nan() || min.is_nan() || max.is_nan() || max <= min {
        return 0.0;
    }
    let clamped = score.clamp(min, max);
    (clamped - min) / (max - min) * 180.0
}

/// An angular run on a gauge or donut, in degrees.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct AngleSpan {
    pub start: f64,
    pub end: f64,
}

impl AngleSpan {
    pub fn sweep(&self) -> f64 {
        self.end - self.start
    }
}

/// Partitions the half circle into contiguous bands proportional to `weights`.
pub fn gauge_bands(weights: &[f64]) -> Vec<AngleSpan> {
    let total: f64 = weights.iter().filter(|w| **w > 0.0).sum();
    if total <= 0.0 {
        return Vec::new();
    }
    let mut cursor = 0.0;
    weights
        .iter()
        .map(|weight| {
            let start = cursor;
            cursor += weight.max(0.0) / total * 180.0;
            AngleSpan { start, end: cursor }
        })
        .collect()
}

/// Half-circle gauge geometry. Angle 0 is the left end, 180 the right end.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct GaugeFrame {
    pub cx: f64,
    pub cy: f64,
    pub radius: f64,
}

impl GaugeFrame {
    pub const STANDARD: GaugeFrame = GaugeFrame {
        cx: 72.0,
        cy: 65.0,
        radius: 60.0,
    };

    /// Point on the arc at `angle`, pulled `inset` units towards the center.
    pub fn point_at(&self, angle: f64, inset: f64) -> Point {
        let theta = PI + angle.to_radians();
        let r = self.radius - inset;
        Point {
            x: self.cx + r * theta.cos(),
            y: self.cy + r * theta.sin(),
        }
    }

    /// SVG path for the arc between two angles, swept clockwise.
    pub fn arc_path(&self, span: AngleSpan) -> String {
        let from = self.point_at(span.start, 0.0);
        let to = self.point_at(span.end, 0.0);
        let large = u8::from(span.sweep() > 180.0);
        let r = self.radius;
        format!(
            "M {:.3} {:.3} A {r} {r} 0 {large} 1 {:.3} {:.3}",
            from.x, from.y, to.x, to.y
        )
    }
}

#[derive(Debug, Clone, Copy, PartialEq)]
pub struct DonutSegment {
    pub index: usize,
    /// Degrees clockwise from the start direction.
    pub start: f64,
    pub sweep: f64,
}

impl DonutSegment {
    pub fn end(&self) -> f64 {
        self.start + self.sweep
    }

    pub fn mid_angle(&self) -> f64 {
        self.start + self.sweep / 2.0
    }
}

/// Lays out donut segments with a fixed `gap` (degrees) after every segment.
///
/// The `360 - n * gap` degrees left over are split in proportion to the values.
/// Returns no segments when the total is zero or the gaps consume the circle.
pub fn donut_segments<T>(values: &[T], gap: f64, start: f64) -> Vec<DonutSegment>
where
    T: Copy + Into<f64>,
{
    let total: f64 = values.iter().map(|v| (*v).into().max(0.0)).sum();
    let available = 360.0 - values.len() as f64 * gap;
    if total <= 0.0 || available <= 0.0 {
        return Vec::new();
    }

    let mut cursor = start;
    values
        .iter()
        .enumerate()
        .map(|(index, value)| {
            let sweep = (*value).into().max(0.0) / total * available;
            let segment = DonutSegment {
                index,
                start: cursor,
                sweep,
            };
            cursor += sweep + gap;
            segment
        })
        .collect()
}

/// Ring geometry with angles measured clockwise from straight up.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct DonutFrame {
    pub center: f64,
    pub radius: f64,
}

impl DonutFrame {
    pub const STANDARD: DonutFrame = DonutFrame {
        center: 60.0,
        radius: 50.0,
    };

    pub fn point_at(&self, angle: f64) -> Point {
        let theta = angle.to_radians();
        Point {
            x: self.center + self.radius * theta.sin(),
            y: self.center - self.radius * theta.cos(),
        }
    }

    /// SVG arc for one segment; `None` for an empty sweep.
    pub fn arc_path(&self, segment: &DonutSegment) -> Option<String> {
        if segment.sweep <= 0.0 {
            return None;
        }
        let from = self.point_at(segment.start);
        let to = self.point_at(segment.end());
        let large = u8::from(segment.sweep > 180.0);
        let r = self.radius;
        Some(format!(
            "M {:.3} {:.3} A {r} {r} 0 {large} 1 {:.3} {:.3}",
            from.x, from.y, to.x, to.y
        ))
    }
}

/// Bar extents as `value / max * track`; an all-zero series yields zeros.
pub fn bar_extents<T>(values: &[T], track: f64) -> Vec<f64>
where
    T: Copy + Into<f64>,
{
    let peak = values
        .iter()
        .map(|v| (*v).into())
        .fold(0.0_f64, f64::max);
    let peak = if peak > 0.0 { peak } else { 1.0 };
    values
        .iter()
        .map(|v| ((*v).into() / peak * track).max(0.0))
        .collect()
}

/// Evenly sized slots along one axis (one per bar or bucket).
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct SlotLayout {
    pub count: usize,
    pub extent: f64,
}

impl SlotLayout {
    pub fn new(count: usize, extent: f64) -> Self {
        Self { count, extent }
    }

    pub fn center(&self, index: usize) -> f64 {
        if self.count == 0 {
            return 0.0;
        }
        (index as f64 + 0.5) / self.count as f64 * self.extent
    }

    /// Slot under `offset`, if any.
    pub fn index_at(&self, offset: f64) -> Option<usize> {
        if self.count == 0 || self.extent <= 0.0 || !(0.0..self.extent).contains(&offset) {
            return None;
        }
        Some(((offset / self.extent) * self.count as f64) as usize).filter(|i| *i < self.count)
    }
}

/// One stacked box, positioned by its distance from the bottom of the track.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct SegmentBox {
    pub index: usize,
    pub offset: f64,
    pub height: f64,
}

/// Stacks `shares` (percent) bottom to top in the given order.
pub fn stacked_boxes(shares: &[u32], track: f64) -> Vec<SegmentBox> {
    let mut offset = 0.0;
    shares
        .iter()
        .enumerate()
        .map(|(index, share)| {
            let height = f64::from(*share) / 100.0 * track;
            let segment = SegmentBox {
                index,
                offset,
                height,
            };
            offset += height;
            segment
        })
        .collect()
}

#[cfg(test)]
mod tests {
    use super::*;

    fn close(a: f64, b: f64) -> bool {
        (a - b).abs() < 1e-9
    }

    #[test]
    fn gauge_angle_spans_half_circle() {
        assert_eq!(gauge_angle(0.0, 0.0, 100.0), 0.0);
        assert_eq!(gauge_angle(100.0, 0.0, 100.0), 180.0);
        assert_eq!(gauge_angle(0.0, -100.0, 100.0), 90.0);
        assert_eq!(gauge_angle(250.0, 0.0, 100.0), 180.0);
        assert_eq!(gauge_angle(-5.0, 0.0, 100.0), 0.0);
        assert_eq!(gauge_angle(f64::NAN, 0.0, 100.0), 0.0);
        assert_eq!(gauge_angle(10.0, 5.0, 5.0), 0.0);
    }

    #[test]
    fn nps_bands_split_six_two_two() {
        let bands = gauge_bands(&[6.0, 2.0, 2.0]);
        let sweeps: Vec<f64> = bands.iter().map(AngleSpan::sweep).collect();
        assert!(close(sweeps[0], 108.0) && close(sweeps[1], 36.0) && close(sweeps[2], 36.0));
        assert!(close(bands[2].end, 180.0));
        assert!(gauge_bands(&[0.0, 0.0]).is_empty());
    }

    #[test]
    fn gauge_points_follow_the_upper_half() {
        let frame = GaugeFrame::STANDARD;
        let left = frame.point_at(0.0, 0.0);
        let top = frame.point_at(90.0, 0.0);
        let right = frame.point_at(180.0, 2.0);
        assert!(close(left.x, 12.0) && close(left.y, 65.0));
        assert!(close(top.x, 72.0) && close(top.y, 5.0));
        assert!(close(right.x, 130.0));
        assert!(frame
            .arc_path(AngleSpan { start: 0.0, end: 180.0 })
            .starts_with("M 12.000 65.000 A 60 60 0 0 1"));
    }

    #[test]
    fn donut_sweeps_and_gaps_fill_the_circle() {
        let segments = donut_segments(&[40u32, 30, 20, 10], 3.0, 0.0);
        assert_eq!(segments.len(), 4);
        let swept: f64 = segments.iter().map(|s| s.sweep).sum();
        assert!(close(swept + 4.0 * 3.0, 360.0));
        assert!(close(segments[0].sweep, 0.4 * 348.0));
        for pair in segments.windows(2) {
            assert!(close(pair[1].start, pair[0].end() + 3.0));
        }
    }

    #[test]
    fn donut_with_zero_total_draws_nothing() {
        assert!(donut_segments(&[0u32, 0, 0], 3.0, 0.0).is_empty());
        assert!(donut_segments::<u32>(&[], 3.0, 0.0).is_empty());
        assert!(donut_segments(&[1u32; 200], 3.0, 0.0).is_empty());
    }

    #[test]
    fn donut_arc_skips_empty_segments() {
        let frame = DonutFrame::STANDARD;
        let empty = DonutSegment {
            index: 0,
            start: 10.0,
            sweep: 0.0,
        };
        assert_eq!(frame.arc_path(&empty), None);
        let top = frame.point_at(0.0);
        assert!(close(top.x, 60.0) && close(top.y, 10.0));
    }

    #[test]
    fn bar_extents_scale_to_peak() {
        assert_eq!(bar_extents(&[5u32, 10, 0], 120.0), vec![60.0, 120.0, 0.0]);
        assert_eq!(bar_extents(&[0u32, 0], 120.0), vec![0.0, 0.0]);
        assert!(bar_extents::<u32>(&[], 120.0).is_empty());
    }

    #[test]
    fn slot_centers_and_lookup() {
        let slots = SlotLayout::new(10, 500.0);
        assert_eq!(slots.center(0), 25.0);
        assert_eq!(slots.center(9), 475.0);
        assert_eq!(slots.index_at(499.0), Some(9));
        assert_eq!(slots.index_at(500.0), None);
        assert_eq!(SlotLayout::new(0, 500.0).center(3), 0.0);
    }

    #[test]
    fn stacked_boxes_fill_the_track() {
        let boxes = stacked_boxes(&[20, 30, 50], 120.0);
        assert_eq!(boxes[1].offset, 24.0);
        let top = boxes[2].offset + boxes[2].height;
        assert!(close(top, 120.0));
    }
}
