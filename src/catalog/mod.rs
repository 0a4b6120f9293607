//! Route and van catalog.
//!
//! The static route and van tables are parsed and validated once at startup
//! into the [`RouteCatalog`] resource. Everything downstream (fleet, hover,
//! stroke rendering) only ever reads it.

use bevy::prelude::*;
use smallvec::SmallVec;
use std::collections::HashMap;
use thiserror::Error;

pub mod indicators;
pub mod path;
pub mod routes;

pub use path::{PathError, PathGeometry, RoutePath};

pub struct CatalogPlugin;

impl Plugin for CatalogPlugin {
    fn build(&self, app: &mut App) {
        // Inserted at build time: the initial motion-mode transition runs
        // before any startup schedule and already needs the catalog.
        app.insert_resource(RouteCatalog::load(
            routes::ROUTE_DEFS,
            indicators::INDICATOR_DEFS,
        ));
    }
}

/// Stroke colour shared by every route in the shipped table (#00A8E2).
pub const ROUTE_BLUE: Color = Color::srgb(0.0, 0.659, 0.886);

/// Accent colours a route switches to while the pointer is near it.
pub const REVEAL_COLORS: [Color; 7] = [
    Color::srgb(1.0, 0.502, 0.631),   // #FF80A1
    Color::srgb(0.173, 0.749, 0.545), // #2CBF8B
    Color::srgb(0.612, 0.561, 1.0),   // #9C8FFF
    Color::srgb(0.325, 0.835, 0.859), // #53D5DB
    Color::srgb(1.0, 0.812, 0.329),   // #FFCF54
    Color::srgb(0.0, 0.659, 0.886),   // #00A8E2
    Color::srgb(1.0, 0.569, 0.259),   // #FF9142
];

/// Stop positions along a route, as fractional progress.
pub type StopNodes = SmallVec<[f32; 4]>;

#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub enum RouteCategory {
    Highway,
    Arterial,
    Local,
    Connector,
}

/// Static route definition as written in the route table.
#[derive(Clone, Copy, Debug)]
pub struct RouteDef {
    pub id: &'static str,
    /// SVG path data in logical map space.
    pub path: &'static str,
    pub stroke_color: Color,
    pub base_opacity: f32,
    pub stroke_width: f32,
    pub category: RouteCategory,
    pub stop_nodes: &'static [f32],
    /// Divides the van's base speed: a larger value means a shorter lap.
    pub speed_multiplier: f32,
}

/// Static van definition.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct IndicatorDef {
    pub id: &'static str,
    pub route_id: &'static str,
    /// Seconds for one full lap at cruising speed, before the route multiplier.
    pub base_speed: f32,
    pub size: f32,
    pub opacity: f32,
    pub start_offset: f32,
}

/// A validated route with its path ready for geometry queries.
#[derive(Clone, Debug)]
pub struct Route {
    pub id: String,
    pub path: RoutePath,
    pub stroke_color: Color,
    pub base_opacity: f32,
    pub stroke_width: f32,
    pub category: RouteCategory,
    pub stop_nodes: StopNodes,
    pub speed_multiplier: f32,
    pub reveal_color: Color,
}

#[derive(Debug, Error)]
pub enum CatalogError {
    #[error("route '{route}' has unusable path data: {source}")]
    InvalidPath {
        route: String,
        #[source]
        source: PathError,
    },

    #[error("route '{0}' is defined more than once")]
    DuplicateRoute(String),

    #[error("route '{route}' stop nodes must be strictly increasing within [0, 1), got {nodes:?}")]
    UnorderedStops { route: String, nodes: Vec<f32> },

    #[error("'{id}' has a non-positive {field}: {value}")]
    NonPositiveSpeed {
        id: String,
        field: &'static str,
        value: f32,
    },

    #[error("indicator '{indicator}' runs on unknown route '{route}'")]
    UnknownRoute { indicator: String, route: String },

    #[error("indicator '{id}' has a non-finite start offset")]
    InvalidStartOffset { id: String },
}

/// All routes and vans of the map, validated.
#[derive(Resource, Default, Debug)]
pub struct RouteCatalog {
    routes: Vec<Route>,
    indicators: Vec<IndicatorDef>,
    by_id: HashMap<String, usize>,
}

impl RouteCatalog {
    /// Build the catalog and log every defect found along the way.
    pub fn load(route_defs: &[RouteDef], indicator_defs: &[IndicatorDef]) -> Self {
        let (catalog, errors) = Self::build(route_defs, indicator_defs);
        for error in &errors {
            warn!("Route catalog: {error}");
        }
        for route in &catalog.routes {
            debug!(
                "Route '{}' ({:?}): {:.0} units, {} stops",
                route.id,
                route.category,
                route.path.total_length(),
                route.stop_nodes.len()
            );
        }
        info!(
            "Loaded {} routes and {} indicators ({} catalog issues)",
            catalog.routes.len(),
            catalog.indicators.len(),
            errors.len()
        );
        catalog
    }

    /// Build the catalog, returning the defects instead of logging them.
    ///
    /// Routes with unusable paths or speeds and vans with unusable speeds are
    /// left out. Unordered stop lists are repaired rather than rejected.
    pub fn build(
        route_defs: &[RouteDef],
        indicator_defs: &[IndicatorDef],
    ) -> (Self, Vec<CatalogError>) {
        let mut catalog = Self::default();
        let mut errors = Vec::new();

        for (index, def) in route_defs.iter().enumerate() {
            if catalog.by_id.contains_key(def.id) {
                errors.push(CatalogError::DuplicateRoute(def.id.to_string()));
                continue;
            }
            if !(def.speed_multiplier.is_finite() && def.speed_multiplier > 0.0) {
                errors.push(CatalogError::NonPositiveSpeed {
                    id: def.id.to_string(),
                    field: "speed multiplier",
                    value: def.speed_multiplier,
                });
                continue;
            }

            let path = match RoutePath::parse(def.path) {
                Ok(path) => path,
                Err(source) => {
                    errors.push(CatalogError::InvalidPath {
                        route: def.id.to_string(),
                        source,
                    });
                    continue;
                }
            };

            if !stops_are_ordered(def.stop_nodes) {
                errors.push(CatalogError::UnorderedStops {
                    route: def.id.to_string(),
                    nodes: def.stop_nodes.to_vec(),
                });
            }

            catalog.by_id.insert(def.id.to_string(), catalog.routes.len());
            catalog.routes.push(Route {
                id: def.id.to_string(),
                path,
                stroke_color: def.stroke_color,
                base_opacity: def.base_opacity,
                stroke_width: def.stroke_width,
                category: def.category,
                stop_nodes: sanitize_stops(def.stop_nodes),
                speed_multiplier: def.speed_multiplier,
                // Keyed on the table position so colours stay put when an
                // earlier route is rejected.
                reveal_color: REVEAL_COLORS[index % REVEAL_COLORS.len()],
            });
        }

        for def in indicator_defs {
            if !(def.base_speed.is_finite() && def.base_speed > 0.0) {
                errors.push(CatalogError::NonPositiveSpeed {
                    id: def.id.to_string(),
                    field: "base speed",
                    value: def.base_speed,
                });
                continue;
            }

            // Still listed; the fleet never drives it.
            if catalog.route_index(def.route_id).is_none() {
                errors.push(CatalogError::UnknownRoute {
                    indicator: def.id.to_string(),
                    route: def.route_id.to_string(),
                });
            }

            let mut def = *def;
            if def.start_offset.is_finite() {
                def.start_offset = def.start_offset.rem_euclid(1.0);
            } else {
                errors.push(CatalogError::InvalidStartOffset {
                    id: def.id.to_string(),
                });
                def.start_offset = 0.0;
            }
            catalog.indicators.push(def);
        }

        (catalog, errors)
    }

    pub fn routes(&self) -> &[Route] {
        &self.routes
    }

    pub fn route(&self, index: usize) -> Option<&Route> {
        self.routes.get(index)
    }

    pub fn route_index(&self, id: &str) -> Option<usize> {
        self.by_id.get(id).copied()
    }

    pub fn indicators(&self) -> &[IndicatorDef] {
        &self.indicators
    }
}

fn stops_are_ordered(nodes: &[f32]) -> bool {
    nodes.iter().all(|n| (0.0..1.0).contains(n)) && nodes.windows(2).all(|w| w[0] < w[1])
}

/// Drop out-of-range entries, then sort and dedup.
fn sanitize_stops(nodes: &[f32]) -> StopNodes {
    let mut stops: StopNodes = nodes
        .iter()
        .copied()
        .filter(|n| (0.0..1.0).contains(n))
        .collect();
    stops.sort_by(f32::total_cmp);
    stops.dedup();
    stops
}

#[cfg(test)]
mod tests {
    use super::*;

    const SQUARE: &str = "M0 0H100V100H0Z";

    fn route(id: &'static str, stop_nodes: &'static [f32]) -> RouteDef {
        RouteDef {
            id,
            path: SQUARE,
            stroke_color: ROUTE_BLUE,
            base_opacity: 0.38,
            stroke_width: 2.5,
            category: RouteCategory::Local,
            stop_nodes,
            speed_multiplier: 1.0,
        }
    }

    fn van(id: &'static str, route_id: &'static str, base_speed: f32) -> IndicatorDef {
        IndicatorDef {
            id,
            route_id,
            base_speed,
            size: 3.0,
            opacity: 1.0,
            start_offset: 0.25,
        }
    }

    #[test]
    fn shipped_tables_load_cleanly() {
        let (catalog, errors) =
            RouteCatalog::build(routes::ROUTE_DEFS, indicators::INDICATOR_DEFS);

        assert!(errors.is_empty(), "unexpected catalog issues: {errors:?}");
        assert_eq!(catalog.routes().len(), 20);
        assert_eq!(catalog.indicators().len(), 22);

        for route in catalog.routes() {
            assert!(route.path.total_length() > 100.0, "{} is too short", route.id);
        }
        for van in catalog.indicators() {
            assert!(
                catalog.route_index(van.route_id).is_some(),
                "{} points at a missing route",
                van.id
            );
        }
    }

    #[test]
    fn reveal_colours_cycle_through_palette() {
        let (catalog, _) = RouteCatalog::build(routes::ROUTE_DEFS, &[]);
        assert_eq!(catalog.routes()[0].reveal_color, REVEAL_COLORS[0]);
        assert_eq!(catalog.routes()[6].reveal_color, REVEAL_COLORS[6]);
        assert_eq!(catalog.routes()[7].reveal_color, REVEAL_COLORS[0]);
        assert_eq!(catalog.routes()[9].reveal_color, REVEAL_COLORS[2]);
    }

    #[test]
    fn unordered_stops_are_reported_and_repaired() {
        let defs = [route("loop", &[0.6, 0.2, 0.6, 1.2, -0.1, 0.4])];
        let (catalog, errors) = RouteCatalog::build(&defs, &[]);

        assert_eq!(errors.len(), 1);
        assert!(matches!(errors[0], CatalogError::UnorderedStops { .. }));
        assert_eq!(catalog.routes()[0].stop_nodes.as_slice(), &[0.2, 0.4, 0.6]);
    }

    #[test]
    fn duplicate_routes_keep_the_first_definition() {
        let defs = [route("a", &[0.5]), route("a", &[0.3])];
        let (catalog, errors) = RouteCatalog::build(&defs, &[]);

        assert_eq!(errors.len(), 1);
        assert!(matches!(&errors[0], CatalogError::DuplicateRoute(id) if id == "a"));
        assert_eq!(catalog.routes().len(), 1);
        assert_eq!(catalog.routes()[0].stop_nodes.as_slice(), &[0.5]);
    }

    #[test]
    fn broken_paths_and_speeds_are_left_out() {
        let mut bad_path = route("bad-path", &[]);
        bad_path.path = "L10 10";
        let mut bad_speed = route("bad-speed", &[]);
        bad_speed.speed_multiplier = 0.0;

        let vans = [van("ok", "good", 30.0), van("stalled", "good", 0.0)];
        let (catalog, errors) =
            RouteCatalog::build(&[bad_path, bad_speed, route("good", &[])], &vans);

        assert_eq!(errors.len(), 3);
        assert!(matches!(
            &errors[0],
            CatalogError::InvalidPath { source: PathError::MissingMoveTo('L'), .. }
        ));
        assert_eq!(catalog.routes().len(), 1);
        assert_eq!(catalog.route_index("good"), Some(0));
        assert_eq!(catalog.route_index("bad-path"), None);
        assert_eq!(catalog.indicators().len(), 1);
        assert_eq!(catalog.indicators()[0].id, "ok");
    }

    #[test]
    fn vans_on_missing_routes_are_reported() {
        let vans = [van("stray", "gone", 30.0), van("ok", "good", 30.0)];
        let (catalog, errors) = RouteCatalog::build(&[route("good", &[])], &vans);

        assert_eq!(errors.len(), 1);
        assert!(matches!(
            &errors[0],
            CatalogError::UnknownRoute { indicator, route } if indicator == "stray" && route == "gone"
        ));
        assert_eq!(catalog.indicators().len(), 2);
    }

    #[test]
    fn start_offsets_are_wrapped() {
        let mut late = van("late", "good", 30.0);
        late.start_offset = 1.25;
        let (catalog, errors) = RouteCatalog::build(&[route("good", &[])], &[late]);

        assert!(errors.is_empty());
        assert!((catalog.indicators()[0].start_offset - 0.25).abs() < 1e-6);
    }
}
