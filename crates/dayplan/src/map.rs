//! Map-facing projections: numbered pins, viewport bounds and the route
//! preview drawn while navigating.

use crate::model::{Category, Coordinate, DayItinerary, EventId};
use crate::navigation::NavigationTarget;

/// Where the map looks when there is nothing to show.
pub const DEFAULT_CENTER: Coordinate = Coordinate::new(40.758, -73.9855);

/// Smallest span (degrees) of a viewport, so a single pin still has room.
const MIN_SPAN: f64 = 0.01;

#[derive(Debug, Clone, PartialEq)]
pub struct Pin {
    pub id: EventId,
    pub coordinate: Coordinate,
    pub number: usize,
    pub category: Category,
}

pub fn pins(day: &DayItinerary) -> Vec<Pin> {
    day.events
        .iter()
        .map(|e| Pin {
            id: e.id.clone(),
            coordinate: e.coordinate,
            number: e.number,
            category: e.category,
        })
        .collect()
}

#[derive(Debug, Clone, Copy, PartialEq)]
pub struct BoundingBox {
    pub min: Coordinate,
    pub max: Coordinate,
}

impl BoundingBox {
    pub fn around(coords: impl IntoIterator<Item = Coordinate>) -> Option<Self> {
        let mut iter = coords.into_iter();
        let first = iter.next()?;
        let mut bb = BoundingBox {
            min: first,
            max: first,
        };

        for c in iter {
            bb.min.lat = bb.min.lat.min(c.lat);
            bb.min.lng = bb.min.lng.min(c.lng);
            bb.max.lat = bb.max.lat.max(c.lat);
            bb.max.lng = bb.max.lng.max(c.lng);
        }

        Some(bb.with_min_span(MIN_SPAN))
    }

    pub fn centered(center: Coordinate, span: f64) -> Self {
        let half = span / 2.0;
        BoundingBox {
            min: center.offset(-half, -half),
            max: center.offset(half, half),
        }
    }

    pub fn center(&self) -> Coordinate {
        self.min.midpoint(self.max)
    }

    pub fn lat_span(&self) -> f64 {
        self.max.lat - self.min.lat
    }

    pub fn lng_span(&self) -> f64 {
        self.max.lng - self.min.lng
    }

    pub fn contains(&self, c: Coordinate) -> bool {
        (self.min.lat..=self.max.lat).contains(&c.lat)
            && (self.min.lng..=self.max.lng).contains(&c.lng)
    }

    fn with_min_span(mut self, span: f64) -> Self {
        let center = self.center();
        if self.lat_span() < span {
            self.min.lat = center.lat - span / 2.0;
            self.max.lat = center.lat + span / 2.0;
        }
        if self.lng_span() < span {
            self.min.lng = center.lng - span / 2.0;
            self.max.lng = center.lng + span / 2.0;
        }
        self
    }

    /// Grows each side by `fraction` of the span.
    pub fn padded(&self, fraction: f64) -> Self {
        let dlat = self.lat_span() * fraction;
        let dlng = self.lng_span() * fraction;
        BoundingBox {
            min: self.min.offset(-dlat, -dlng),
            max: self.max.offset(dlat, dlng),
        }
    }

    /// Grows the box so its ground shape matches a `width / height` viewport.
    pub fn fit_aspect(&self, aspect: f64) -> Self {
        if !(aspect.is_finite() && aspect > 0.0) {
            return *self;
        }

        let center = self.center();
        let lng_scale = center.lat.to_radians().cos().max(1e-6);
        let ground_w = self.lng_span() * lng_scale;
        let ground_h = self.lat_span();

        let (w, h) = if ground_w / ground_h > aspect {
            (ground_w, ground_w / aspect)
        } else {
            (ground_h * aspect, ground_h)
        };

        let half_lat = h / 2.0;
        let half_lng = w / lng_scale / 2.0;
        BoundingBox {
            min: Coordinate::new(
                self.min.lat.min(center.lat - half_lat),
                self.min.lng.min(center.lng - half_lng),
            ),
            max: Coordinate::new(
                self.max.lat.max(center.lat + half_lat),
                self.max.lng.max(center.lng + half_lng),
            ),
        }
    }

    /// Normalized position inside the box, `(0, 0)` top-left (north-west).
    pub fn project(&self, c: Coordinate) -> [f32; 2] {
        let x = (c.lng - self.min.lng) / self.lng_span();
        let y = (self.max.lat - c.lat) / self.lat_span();
        [x as f32, y as f32]
    }
}

/// Viewport for a day's pins, or the default area for an empty day.
pub fn day_bounds(day: &DayItinerary, padding: f64) -> BoundingBox {
    BoundingBox::around(day.events.iter().map(|e| e.coordinate))
        .map(|bb| bb.padded(padding))
        .unwrap_or_else(|| BoundingBox::centered(DEFAULT_CENTER, MIN_SPAN * 4.0))
}

/// A dashed placeholder route: start, a kinked midpoint, destination.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct RoutePreview {
    pub from: Coordinate,
    pub via: Coordinate,
    pub to: Coordinate,
}

impl RoutePreview {
    pub fn for_target(target: &NavigationTarget) -> Self {
        let from = target.start();
        let to = target.destination.coordinate;
        Self {
            from,
            via: from.midpoint(to).offset(0.002, -0.003),
            to,
        }
    }

    pub fn points(&self) -> [Coordinate; 3] {
        [self.from, self.via, self.to]
    }

    /// Viewport fitted to both endpoints.
    pub fn bounds(&self, padding: f64) -> BoundingBox {
        BoundingBox::around([self.from, self.to])
            .unwrap_or_else(|| BoundingBox::centered(self.to, MIN_SPAN))
            .padded(padding)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::model::tests::day;
    use crate::navigation::Destination;
    use chrono::NaiveDate;
    use pretty_assertions::assert_eq;

    fn date() -> NaiveDate {
        NaiveDate::from_ymd_opt(2026, 10, 16).unwrap()
    }

    #[test]
    fn pins_carry_numbers() {
        let day = day(date(), &["a", "b", "c"]);
        let numbers: Vec<_> = pins(&day).iter().map(|p| p.number).collect();
        assert_eq!(numbers, vec![1, 2, 3]);
    }

    #[test]
    fn empty_day_has_no_pins_and_default_bounds() {
        let day = DayItinerary::new(date(), "Empty");
        assert!(pins(&day).is_empty());
        assert!(day_bounds(&day, 0.1).contains(DEFAULT_CENTER));
    }

    #[test]
    fn bounds_cover_all_points() {
        let coords = [
            Coordinate::new(40.7829, -73.9654),
            Coordinate::new(40.7401, -73.9903),
            Coordinate::new(40.7536, -73.9832),
        ];
        let bb = BoundingBox::around(coords).unwrap();
        assert_eq!(bb.min.lat, 40.7401);
        assert_eq!(bb.max.lng, -73.9654);
        for c in coords {
            assert!(bb.contains(c));
            let [x, y] = bb.project(c);
            assert!((0.0..=1.0).contains(&x) && (0.0..=1.0).contains(&y));
        }
    }

    #[test]
    fn single_point_gets_minimum_span() {
        let bb = BoundingBox::around([DEFAULT_CENTER]).unwrap();
        assert!((bb.lat_span() - MIN_SPAN).abs() < 1e-12);
        assert_eq!(bb.project(DEFAULT_CENTER), [0.5, 0.5]);
    }

    #[test]
    fn projection_is_north_up() {
        let bb = BoundingBox::centered(DEFAULT_CENTER, 0.1);
        let [_, north_y] = bb.project(DEFAULT_CENTER.offset(0.04, 0.0));
        let [east_x, _] = bb.project(DEFAULT_CENTER.offset(0.0, 0.04));
        assert!(north_y < 0.5);
        assert!(east_x > 0.5);
    }

    #[test]
    fn fit_aspect_only_grows() {
        let bb = BoundingBox::centered(DEFAULT_CENTER, 0.02);
        for aspect in [0.4, 1.0, 2.5] {
            let fitted = bb.fit_aspect(aspect);
            assert!(fitted.lat_span() >= bb.lat_span() - 1e-12);
            assert!(fitted.lng_span() >= bb.lng_span() - 1e-12);
            assert!(fitted.contains(bb.min) && fitted.contains(bb.max));
        }
        assert_eq!(bb.fit_aspect(f64::NAN), bb);
    }

    #[test]
    fn route_preview_kinks_midpoint() {
        let target = NavigationTarget::new(
            Destination {
                name: "MoMA".to_string(),
                coordinate: Coordinate::new(40.7614, -73.9776),
                address: None,
                arrive_by: None,
            },
            None,
            None,
        );
        let route = RoutePreview::for_target(&target);
        let mid = route.from.midpoint(route.to);
        assert!((route.via.lat - (mid.lat + 0.002)).abs() < 1e-9);
        assert!((route.via.lng - (mid.lng - 0.003)).abs() < 1e-9);

        let bounds = route.bounds(0.2);
        assert!(bounds.contains(route.from) && bounds.contains(route.to));
    }
}
