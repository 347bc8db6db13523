//! Zone Locator
//!
//! Maps a position to the named zone whose polygon contains it.
//!
//! Resolution rules:
//! 1. Zones are tested in catalog order and the first containing polygon wins,
//!    so overlapping zones resolve deterministically to the earlier entry.
//!    A point on a polygon edge counts as inside.
//! 2. If no polygon contains the point, the zone with the nearest centroid
//!    (haversine distance) is returned; equal distances keep catalog order.
//! 3. Invalid positions and empty catalogs resolve to `None`.

use geo::{Centroid, Coord, HaversineDistance, Intersects, LineString, Point, Polygon};

use crate::models::{Apartment, GeoPoint, Zone};

/// Max gap in degrees between first and last vertex for a ring to count as closed
pub const RING_CLOSE_TOLERANCE: f64 = 0.0007;

/// Zone with its polygon and centroid prepared for repeated lookups
#[derive(Debug, Clone)]
struct PreparedZone {
    zone: Zone,
    polygon: Polygon<f64>,
    centroid: Option<Point<f64>>,
}

impl PreparedZone {
    fn prepare(zone: Zone) -> Option<Self> {
        let ring = close_ring(&zone.polygon, RING_CLOSE_TOLERANCE)?;
        let polygon = Polygon::new(LineString::from(ring), vec![]);
        let centroid = polygon.centroid();
        Some(Self {
            zone,
            polygon,
            centroid,
        })
    }
}

/// Zone catalog ready for point lookups
#[derive(Debug, Clone, Default)]
pub struct ZoneLocator {
    zones: Vec<PreparedZone>,
}

impl ZoneLocator {
    /// Prepare a catalog. Zones with fewer than 3 usable vertices are skipped.
    pub fn new(zones: impl IntoIterator<Item = Zone>) -> Self {
        let zones = zones
            .into_iter()
            .filter_map(|zone| {
                let id = zone.id.clone();
                let prepared = PreparedZone::prepare(zone);
                if prepared.is_none() {
                    tracing::warn!(zone = %id, "Skipping zone with fewer than 3 valid vertices");
                }
                prepared
            })
            .collect();
        Self { zones }
    }

    pub fn len(&self) -> usize {
        self.zones.len()
    }

    pub fn is_empty(&self) -> bool {
        self.zones.is_empty()
    }

    pub fn zones(&self) -> impl Iterator<Item = &Zone> {
        self.zones.iter().map(|p| &p.zone)
    }

    /// Zone for an apartment, `None` when it has no usable coordinates
    pub fn locate(&self, apartment: &Apartment) -> Option<&Zone> {
        let Some(point) = apartment.location() else {
            tracing::debug!(apartment = %apartment.id, "No coordinates, skipping zone lookup");
            return None;
        };
        self.resolve(point)
    }

    /// Zone for a position: first containing polygon, else nearest centroid
    pub fn resolve(&self, point: GeoPoint) -> Option<&Zone> {
        if !point.is_valid() {
            return None;
        }
        let target = Point::new(point.lng, point.lat);

        if let Some(zone) = self.containing(target) {
            tracing::debug!(zone = %zone.id, name = %zone.name, "Zone detected");
            return Some(zone);
        }

        let nearest = self.nearest(target);
        if let Some(zone) = nearest {
            tracing::debug!(
                zone = %zone.id,
                lat = point.lat,
                lng = point.lng,
                "Point outside every zone, using nearest centroid"
            );
        }
        nearest
    }

    fn containing(&self, target: Point<f64>) -> Option<&Zone> {
        self.zones
            .iter()
            .find(|p| target.intersects(&p.polygon))
            .map(|p| &p.zone)
    }

    fn nearest(&self, target: Point<f64>) -> Option<&Zone> {
        let mut best: Option<(&Zone, f64)> = None;
        for prepared in &self.zones {
            let Some(centroid) = prepared.centroid else {
                continue;
            };
            let distance = target.haversine_distance(&centroid);
            // Strict comparison keeps the earlier zone on ties
            if best.is_none_or(|(_, d)| distance < d) {
                best = Some((&prepared.zone, distance));
            }
        }
        best.map(|(zone, _)| zone)
    }
}

/// Resolve a position against a catalog in one call.
///
/// Prefer a long-lived [`ZoneLocator`] when resolving repeatedly.
pub fn resolve_zone(point: GeoPoint, zones: &[Zone]) -> Option<Zone> {
    ZoneLocator::new(zones.iter().cloned())
        .resolve(point)
        .cloned()
}

/// Build a closed ring from `[lng, lat]` vertices.
///
/// Non-finite vertices are dropped. If the first and last vertex differ by more
/// than `tolerance` on either axis the first vertex is appended. Returns `None`
/// when fewer than 3 vertices remain.
pub fn close_ring(vertices: &[[f64; 2]], tolerance: f64) -> Option<Vec<Coord<f64>>> {
    let mut ring: Vec<Coord<f64>> = vertices
        .iter()
        .filter(|[x, y]| x.is_finite() && y.is_finite())
        .map(|&[x, y]| Coord { x, y })
        .collect();
    if ring.len() < 3 {
        return None;
    }

    let first = ring[0];
    let last = ring[ring.len() - 1];
    if (first.x - last.x).abs() > tolerance || (first.y - last.y).abs() > tolerance {
        ring.push(first);
    }
    Some(ring)
}
