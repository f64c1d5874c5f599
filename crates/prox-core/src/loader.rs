//! CSV venue catalog loader.
//!
//! # CSV format
//!
//! One row per venue.  Coordinates are decimal degrees, longitude first,
//! matching the GeoJSON axis convention used throughout the workspace.
//!
//! ```csv
//! name,category,address,phone,lon,lat
//! La Terraza Gourmet,restaurant,"Calle 23 #25-41, Manizales",(6) 887 4521,-75.5175,5.0689
//! El Buen Sabor,restaurant,"Carrera 23 #30-15, Manizales",(6) 883 2190,-75.5142,5.0702
//! ```
//!
//! Row order becomes catalog order, which in turn fixes `VenueId`
//! assignment and distance tie-breaking.

use std::io::Read;
use std::path::Path;

use serde::Deserialize;

use crate::{GeoPoint, ProxError, ProxResult, Venue, VenueCatalog};

// ── CSV record ────────────────────────────────────────────────────────────────

#[derive(Deserialize)]
struct CatalogRecord {
    name:     String,
    category: String,
    address:  String,
    phone:    String,
    lon:      f64,
    lat:      f64,
}

// ── Public API ────────────────────────────────────────────────────────────────

/// Load a `VenueCatalog` from a CSV file.
pub fn load_catalog_csv(path: &Path) -> ProxResult<VenueCatalog> {
    let file = std::fs::File::open(path).map_err(ProxError::Io)?;
    load_catalog_reader(file)
}

/// Like [`load_catalog_csv`] but accepts any `Read` source.
///
/// Useful for testing (pass a `std::io::Cursor`) or catalogs embedded as
/// string constants.
pub fn load_catalog_reader<R: Read>(reader: R) -> ProxResult<VenueCatalog> {
    let mut csv_reader = csv::Reader::from_reader(reader);
    let mut venues = Vec::new();

    for result in csv_reader.deserialize::<CatalogRecord>() {
        let row = result.map_err(|e| ProxError::Parse(e.to_string()))?;
        if !row.lon.is_finite() || !row.lat.is_finite() {
            return Err(ProxError::Parse(format!(
                "venue {:?}: non-finite coordinates ({}, {})",
                row.name, row.lon, row.lat
            )));
        }
        venues.push(Venue {
            position: GeoPoint::new(row.lon, row.lat),
            name:     row.name,
            category: row.category,
            address:  row.address,
            phone:    row.phone,
        });
    }

    Ok(VenueCatalog::new(venues))
}
