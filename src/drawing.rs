//! Interactive polygon construction from pointer input.
//!
//! A single ephemeral session accumulates clicked vertices, enforces the
//! vertex cap and closure rules, and runs the overlap check against existing
//! regions on completion. Overlap is not an error: the session parks the
//! finished vertex list behind [`DrawingState::PendingOverlapDecision`] until
//! the user confirms or discards.

use crate::geometry::{polygons_overlap, LatLon};
use crate::regions::region::Region;
use haversine::{distance, Location, Units};
use thiserror::Error;

/// Hard cap on accumulated vertices; the 9th click force-completes with the
/// existing 8.
pub const MAX_POINTS: usize = 8;

/// Clicking within this geodesic distance of the first vertex closes the
/// polygon (with at least 3 vertices held).
pub const CLOSE_DISTANCE_METERS: f64 = 100.0;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum DrawingState {
    #[default]
    Idle,
    Drawing,
    PendingOverlapDecision,
}

#[derive(Debug, Error)]
pub enum DrawingError {
    #[error("coordinate ({0}, {1}) is not finite")]
    NonFiniteCoordinate(f64, f64),
}

/// Outcome of feeding one pointer event into the session.
#[derive(Debug, Clone, PartialEq)]
pub enum DrawEvent {
    /// The call was not valid in the current state and changed nothing.
    Ignored,
    /// Vertex appended; `count` vertices held now.
    PointAdded { count: usize },
    /// Completion succeeded with no overlap: the finished cyclic vertex list,
    /// ready for region creation.
    Polygon(Vec<LatLon>),
    /// Completion found an overlap with an existing region; the vertex list
    /// is held until [`DrawingSession::confirm`] resolves the conflict.
    OverlapConflict,
}

/// Ephemeral drawing state; exactly one instance lives in the dashboard.
#[derive(Debug, Default)]
pub struct DrawingSession {
    state: DrawingState,
    points: Vec<LatLon>,
}

impl DrawingSession {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn state(&self) -> DrawingState {
        self.state
    }

    pub fn is_active(&self) -> bool {
        self.state == DrawingState::Drawing
    }

    /// Vertices accumulated so far (or held pending an overlap decision).
    pub fn points(&self) -> &[LatLon] {
        &self.points
    }

    /// Enters drawing mode and clears any previously accumulated vertices.
    pub fn start(&mut self) {
        self.state = DrawingState::Drawing;
        self.points.clear();
    }

    /// Leaves drawing mode, discarding accumulated vertices. Valid only while
    /// drawing; a pending overlap decision is resolved via [`confirm`].
    ///
    /// [`confirm`]: DrawingSession::confirm
    pub fn cancel(&mut self) {
        if self.state == DrawingState::Drawing {
            self.state = DrawingState::Idle;
            self.points.clear();
        }
    }

    /// Drops the session back to idle from any state. Used when the dashboard
    /// switches location.
    pub fn reset(&mut self) {
        self.state = DrawingState::Idle;
        self.points.clear();
    }

    /// Feeds one clicked point into the session.
    ///
    /// At the vertex cap the session force-completes with the held vertices
    /// and the new point is ignored. Otherwise the point is appended, and the
    /// polygon auto-closes when at least 3 vertices are held and the click
    /// lands within [`CLOSE_DISTANCE_METERS`] of the first vertex.
    ///
    /// # Errors
    ///
    /// [`DrawingError::NonFiniteCoordinate`] for NaN/infinite input; the
    /// session is left unchanged.
    pub fn add_point(
        &mut self,
        point: LatLon,
        existing: &[Region],
    ) -> Result<DrawEvent, DrawingError> {
        if !point.is_finite() {
            return Err(DrawingError::NonFiniteCoordinate(point.0, point.1));
        }
        if self.state != DrawingState::Drawing {
            return Ok(DrawEvent::Ignored);
        }

        if self.points.len() >= MAX_POINTS {
            return Ok(self.complete(existing));
        }

        self.points.push(point);
        if self.points.len() >= 3 && meters_between(self.points[0], point) < CLOSE_DISTANCE_METERS
        {
            return Ok(self.complete(existing));
        }
        Ok(DrawEvent::PointAdded {
            count: self.points.len(),
        })
    }

    /// Manual completion (double-click / finish button). Requires at least 3
    /// vertices; with fewer the call is ignored and the session keeps drawing.
    pub fn finish(&mut self, existing: &[Region]) -> DrawEvent {
        if self.state != DrawingState::Drawing {
            return DrawEvent::Ignored;
        }
        self.complete(existing)
    }

    /// Resolves a pending overlap conflict. `force` creates the region anyway
    /// (the held vertices are returned for creation); `false` discards them.
    /// Returns `None` when nothing is pending or the vertices were discarded.
    pub fn confirm(&mut self, force: bool) -> Option<Vec<LatLon>> {
        if self.state != DrawingState::PendingOverlapDecision {
            return None;
        }
        self.state = DrawingState::Idle;
        let points = std::mem::take(&mut self.points);
        force.then_some(points)
    }

    fn complete(&mut self, existing: &[Region]) -> DrawEvent {
        if self.points.len() < 3 {
            return DrawEvent::Ignored;
        }

        let overlaps = existing
            .iter()
            .any(|region| polygons_overlap(&self.points, &region.vertices));
        if overlaps {
            self.state = DrawingState::PendingOverlapDecision;
            return DrawEvent::OverlapConflict;
        }

        self.state = DrawingState::Idle;
        DrawEvent::Polygon(std::mem::take(&mut self.points))
    }
}

fn meters_between(a: LatLon, b: LatLon) -> f64 {
    distance(
        Location {
            latitude: a.0,
            longitude: a.1,
        },
        Location {
            latitude: b.0,
            longitude: b.1,
        },
        Units::Kilometers,
    ) * 1000.0
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::regions::region::RegionId;

    fn far_point(i: usize) -> LatLon {
        // Roughly 1.1 km of latitude per step: never within closure range.
        LatLon(52.5 + 0.01 * i as f64, 13.4)
    }

    fn no_regions() -> Vec<Region> {
        Vec::new()
    }

    #[test]
    fn points_ignored_while_idle() {
        let mut session = DrawingSession::new();
        let event = session.add_point(LatLon(52.5, 13.4), &no_regions()).unwrap();
        assert_eq!(event, DrawEvent::Ignored);
        assert_eq!(session.state(), DrawingState::Idle);
    }

    #[test]
    fn start_clears_previous_points() {
        let mut session = DrawingSession::new();
        session.start();
        session.add_point(far_point(0), &no_regions()).unwrap();
        session.add_point(far_point(1), &no_regions()).unwrap();

        session.start();
        assert!(session.points().is_empty());
    }

    #[test]
    fn manual_finish_needs_three_points() {
        let mut session = DrawingSession::new();
        session.start();
        session.add_point(far_point(0), &no_regions()).unwrap();
        session.add_point(far_point(1), &no_regions()).unwrap();

        assert_eq!(session.finish(&no_regions()), DrawEvent::Ignored);
        assert_eq!(session.state(), DrawingState::Drawing);
        assert_eq!(session.points().len(), 2);

        session.add_point(LatLon(52.5, 13.5), &no_regions()).unwrap();
        match session.finish(&no_regions()) {
            DrawEvent::Polygon(points) => assert_eq!(points.len(), 3),
            other => panic!("expected polygon, got {other:?}"),
        }
        assert_eq!(session.state(), DrawingState::Idle);
    }

    #[test]
    fn clicking_near_the_first_point_auto_closes() {
        let mut session = DrawingSession::new();
        session.start();
        session.add_point(LatLon(52.5, 13.4), &no_regions()).unwrap();
        session.add_point(LatLon(52.51, 13.4), &no_regions()).unwrap();
        session.add_point(LatLon(52.51, 13.41), &no_regions()).unwrap();

        // ~5 meters from the first vertex.
        let event = session
            .add_point(LatLon(52.50005, 13.4), &no_regions())
            .unwrap();
        match event {
            DrawEvent::Polygon(points) => assert_eq!(points.len(), 4),
            other => panic!("expected polygon, got {other:?}"),
        }
    }

    #[test]
    fn far_clicks_do_not_auto_close() {
        let mut session = DrawingSession::new();
        session.start();
        for i in 0..4 {
            let event = session.add_point(far_point(i), &no_regions()).unwrap();
            assert_eq!(event, DrawEvent::PointAdded { count: i + 1 });
        }
    }

    #[test]
    fn ninth_point_force_completes_with_first_eight() {
        let mut session = DrawingSession::new();
        session.start();
        for i in 0..MAX_POINTS {
            session.add_point(far_point(i), &no_regions()).unwrap();
        }
        assert_eq!(session.points().len(), MAX_POINTS);

        let expected: Vec<LatLon> = (0..MAX_POINTS).map(far_point).collect();
        match session.add_point(LatLon(10.0, 10.0), &no_regions()).unwrap() {
            DrawEvent::Polygon(points) => {
                assert_eq!(points, expected, "the 9th point is dropped");
            }
            other => panic!("expected polygon, got {other:?}"),
        }
    }

    #[test]
    fn overlap_parks_the_polygon_behind_a_decision() {
        let existing = vec![Region::new(
            RegionId(1),
            vec![LatLon(52.0, 13.0), LatLon(53.0, 13.0), LatLon(52.5, 14.0)],
            "#ff6b6b",
            None,
        )];

        let mut session = DrawingSession::new();
        session.start();
        // First vertex inside the existing region.
        session.add_point(LatLon(52.5, 13.3), &existing).unwrap();
        session.add_point(LatLon(55.0, 13.3), &existing).unwrap();
        session.add_point(LatLon(55.0, 15.0), &existing).unwrap();

        assert_eq!(session.finish(&existing), DrawEvent::OverlapConflict);
        assert_eq!(session.state(), DrawingState::PendingOverlapDecision);
        assert_eq!(session.points().len(), 3, "vertices held for the decision");
    }

    #[test]
    fn confirm_resolves_the_pending_decision() {
        let existing = vec![Region::new(
            RegionId(1),
            vec![LatLon(52.0, 13.0), LatLon(53.0, 13.0), LatLon(52.5, 14.0)],
            "#ff6b6b",
            None,
        )];

        let mut session = DrawingSession::new();
        session.start();
        session.add_point(LatLon(52.5, 13.3), &existing).unwrap();
        session.add_point(LatLon(55.0, 13.3), &existing).unwrap();
        session.add_point(LatLon(55.0, 15.0), &existing).unwrap();
        session.finish(&existing);

        // Discard: back to idle, nothing returned.
        assert_eq!(session.confirm(false), None);
        assert_eq!(session.state(), DrawingState::Idle);
        assert!(session.points().is_empty());

        // Force-create path.
        session.start();
        session.add_point(LatLon(52.5, 13.3), &existing).unwrap();
        session.add_point(LatLon(55.0, 13.3), &existing).unwrap();
        session.add_point(LatLon(55.0, 15.0), &existing).unwrap();
        session.finish(&existing);
        let points = session.confirm(true).unwrap();
        assert_eq!(points.len(), 3);
        assert_eq!(session.state(), DrawingState::Idle);

        // Nothing pending anymore.
        assert_eq!(session.confirm(true), None);
    }

    #[test]
    fn non_finite_points_are_rejected_without_side_effects() {
        let mut session = DrawingSession::new();
        session.start();
        session.add_point(far_point(0), &no_regions()).unwrap();

        let err = session
            .add_point(LatLon(f64::NAN, 13.4), &no_regions())
            .unwrap_err();
        assert!(matches!(err, DrawingError::NonFiniteCoordinate(_, _)));
        assert_eq!(session.points().len(), 1);
        assert_eq!(session.state(), DrawingState::Drawing);

        session
            .add_point(LatLon(52.5, f64::INFINITY), &no_regions())
            .unwrap_err();
        assert_eq!(session.points().len(), 1);
    }

    #[test]
    fn cancel_only_applies_while_drawing() {
        let mut session = DrawingSession::new();
        session.cancel();
        assert_eq!(session.state(), DrawingState::Idle);

        session.start();
        session.add_point(far_point(0), &no_regions()).unwrap();
        session.cancel();
        assert_eq!(session.state(), DrawingState::Idle);
        assert!(session.points().is_empty());
    }
}
