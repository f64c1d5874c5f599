//! manizales — demo catalog of ten restaurants around Manizales and
//! Villamaría, Colombia.
//!
//! Builds a proximity engine over the catalog, drops a query point in the
//! city center, and prints what a map front end would render: the bounding
//! perimeter, the ranked list of available restaurants, and the nearest
//! one.  Radius values walk the 0.2–0.5 km range a UI slider would cover.

use std::io::Cursor;

use anyhow::Result;

use prox_core::{GeoPoint, load_catalog_reader};
use prox_engine::{EngineBuilder, ProximityEngine};

// ── Catalog ───────────────────────────────────────────────────────────────────

const CATALOG_CSV: &str = "\
name,category,address,phone,lon,lat\n\
La Terraza Gourmet,restaurant,\"Calle 23 #25-41, Manizales\",(6) 887 4521,-75.5175,5.0689\n\
El Buen Sabor,restaurant,\"Carrera 23 #30-15, Manizales\",(6) 883 2190,-75.5142,5.0702\n\
Restaurante Los Nevados,restaurant,\"Avenida Santander #45-20, Manizales\",(6) 885 6734,-75.5201,5.0665\n\
Café de la Montaña,restaurant,\"Calle 31 #22-10, Manizales\",(6) 889 1023,-75.5189,5.0712\n\
Parrilla El Fogón,restaurant,\"Carrera 25 #27-33, Manizales\",(6) 884 5678,-75.5163,5.0681\n\
Restaurante Villa María,restaurant,\"Calle 10 #5-22, Villamaría\",(6) 859 3412,-75.5088,5.0492\n\
El Rincón Caldense,restaurant,\"Carrera 8 #12-45, Villamaría\",(6) 859 7821,-75.5102,5.0478\n\
Sabores del Eje,restaurant,\"Calle 15 #10-30, Villamaría\",(6) 859 4567,-75.5121,5.0505\n\
Pizza y Pasta,restaurant,\"Calle 28 #20-18, Manizales\",(6) 886 2345,-75.5195,5.0698\n\
Asados Don Pepe,restaurant,\"Carrera 24 #26-50, Manizales\",(6) 888 9012,-75.5156,5.0673\n\
";

/// A click in the middle of the Manizales cluster.
const QUERY: GeoPoint = GeoPoint {
    lon: -75.5170,
    lat: 5.0690,
};

// ── Main ──────────────────────────────────────────────────────────────────────

fn main() -> Result<()> {
    env_logger::init();

    let catalog = load_catalog_reader(Cursor::new(CATALOG_CSV))?;
    let mut engine = EngineBuilder::new(catalog).radius_km(0.5).build()?;

    println!("Total perimeter: {:.2} km", engine.envelope().perimeter_km);
    println!("Query point: {QUERY}");

    engine.set_query_point(QUERY);

    for radius in [0.2, 0.3, 0.4, 0.5] {
        engine.set_buffer_radius(radius)?;
        println!("\n── radius {radius:.1} km ──");
        print_available(&engine);
    }

    Ok(())
}

fn print_available(engine: &ProximityEngine) {
    let count = engine.candidate_set().count();
    if count == 0 {
        println!("No restaurants in range.");
        return;
    }

    println!("Available restaurants ({count}):");
    for buffer in engine.candidate_set() {
        let venue = match engine.venue(buffer.venue) {
            Some(v) => v,
            None => continue,
        };
        let distance = buffer.distance_km.unwrap_or_default();
        let travel = buffer
            .travel
            .map(|t| t.to_string())
            .unwrap_or_else(|| "-".into());
        println!("  {:<25} {:>5.2} km  {}", venue.name, distance, travel);
        println!("    {} · {}", venue.address, venue.phone);
    }

    if let Some(nearest) = engine.nearest_route() {
        println!("Nearest: {} → {}", nearest.from, nearest.to);
    }
}
