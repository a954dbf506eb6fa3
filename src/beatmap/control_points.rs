use crate::parse::ControlPoint;

use super::Beatmap;

/// Maximum forward tolerance when matching a query time to the nearest
/// preceding control point, in milliseconds.
pub const CONTROL_POINT_LENIENCY: f64 = 5.0;

impl Beatmap {
    /// The control point in effect at `time`.
    ///
    /// Falls back to [`ControlPoint::DEFAULT`] on maps without control
    /// points; this lookup never fails.
    #[inline]
    pub fn control_point_at(&self, time: f64) -> ControlPoint {
        self.control_point_at_matching(time, |_| true)
    }

    /// The timing point governing the BPM at `time`, skipping inherited
    /// points.
    #[inline]
    pub fn timing_point_at(&self, time: f64) -> ControlPoint {
        self.control_point_at_matching(time, |point| !point.inherited)
    }

    /// The last point satisfying `predicate` whose offset does not exceed
    /// `time` by more than [`CONTROL_POINT_LENIENCY`].
    pub fn control_point_at_matching(
        &self,
        time: f64,
        predicate: impl Fn(&ControlPoint) -> bool,
    ) -> ControlPoint {
        let mut closest = None;

        for point in self.control_points() {
            if !predicate(point) {
                continue;
            }

            if closest.is_none() || point.offset - time <= CONTROL_POINT_LENIENCY {
                closest = Some(point);
            } else {
                break;
            }
        }

        closest.copied().unwrap_or(ControlPoint::DEFAULT)
    }

    /// The uninherited subset of the control points, derived on demand.
    #[inline]
    pub fn timing_points(&self) -> impl Iterator<Item = &ControlPoint> {
        self.control_points().iter().filter(|point| !point.inherited)
    }
}

#[cfg(test)]
mod tests {
    use std::io::Cursor;

    use super::*;

    fn map(timing_points: &str) -> Beatmap {
        let text = format!("[TimingPoints]\n{timing_points}\n");

        Beatmap::parse(Cursor::new(text), "lookup.osu").unwrap()
    }

    #[test]
    fn lookup_on_empty_map_returns_default() {
        let map = map("");

        assert_eq!(map.control_point_at(1234.5), ControlPoint::DEFAULT);
        assert_eq!(map.timing_point_at(1234.5), ControlPoint::DEFAULT);
    }

    #[test]
    fn lookup_returns_latest_preceding_point() {
        let map = map("0,500,4,1,0,100,1\n1000,400,4,1,0,100,1\n2000,300,4,1,0,100,1");

        assert_eq!(map.control_point_at(500.0).offset, 0.0);
        assert_eq!(map.control_point_at(1500.0).offset, 1000.0);
        assert_eq!(map.control_point_at(9999.0).offset, 2000.0);
    }

    #[test]
    fn leniency_window_pulls_in_slightly_late_points() {
        let map = map("0,500,4,1,0,100,1\n1000,400,4,1,0,100,1");

        assert_eq!(map.control_point_at(996.0).offset, 1000.0);
        assert_eq!(map.control_point_at(994.0).offset, 0.0);
    }

    #[test]
    fn timing_lookup_skips_inherited_points() {
        let map = map("0,500,4,1,0,100,1\n1000,-50,4,1,0,100,0");

        assert_eq!(map.control_point_at(2000.0).offset, 1000.0);
        assert!(map.control_point_at(2000.0).inherited);
        assert_eq!(map.timing_point_at(2000.0).offset, 0.0);
    }

    #[test]
    fn fully_filtered_lookup_returns_default() {
        let map = map("1000,-50,4,1,0,100,0");

        assert_eq!(map.timing_point_at(2000.0), ControlPoint::DEFAULT);
    }

    #[test]
    fn timing_points_iterator_filters_inherited() {
        let map = map("0,500,4,1,0,100,1\n1000,-50,4,1,0,100,0\n2000,400,4,1,0,100,1");

        let offsets: Vec<_> = map.timing_points().map(|point| point.offset).collect();

        assert_eq!(offsets, [0.0, 2000.0]);
    }
}
