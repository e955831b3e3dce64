//! Test helpers for writing work order and gazetteer fixtures to disk.

use camino::{Utf8Path, Utf8PathBuf};
use geo::Coord;
use tempfile::TempDir;
use vectores_data::{GazetteerGeocoder, Geocoder};

use crate::CliError;
use crate::route::{GeocoderBuilder, RouteConfig};

/// Three pending orders (one with an appointment) and one completed order
/// with two logged visits.
pub(super) const ORDERS_JSON: &str = r#"[
  {
    "_id": "a1",
    "numeroOrden": 101,
    "vecino": {"nombre": "Ana Pérez", "direccion": "Av. Santa Fe 1200", "telefono": "4792-1111"},
    "tipoServicio": "Desratización"
  },
  {
    "_id": "b2",
    "numeroOrden": 102,
    "vecino": {"nombre": "Bruno Gómez", "direccion": "Alvear 45", "telefono": "4792-2222"},
    "tipoServicio": "Alacranes",
    "horario": ""
  },
  {
    "_id": "c3",
    "numeroOrden": 103,
    "vecino": {"nombre": "Carla Díaz", "direccion": "Belgrano 300", "telefono": "4792-3333"},
    "tipoServicio": "Desinfección",
    "horario": "09:30"
  },
  {
    "_id": "d4",
    "numeroOrden": 104,
    "vecino": {
      "nombre": "Diego Ruiz",
      "direccion": "Rivadavia 900",
      "barrio": "Las Lomas",
      "telefono": "4792-4444"
    },
    "tipoServicio": "Desratización",
    "estado": "completada",
    "visitas": [
      {"fecha": "2024-05-02", "observaciones": "", "cantidadProducto": "", "tecnicos": []},
      {
        "fecha": "2024-05-16T00:00:00.000Z",
        "observaciones": "cebo en patio",
        "estado": "CONTROL",
        "cantidadProducto": 2.5,
        "tipoProducto": "Brodifacoum",
        "tecnicos": ["Ruiz", "Paz"]
      }
    ]
  }
]"#;

/// Coordinates for every address in [`ORDERS_JSON`].
pub(super) const GAZETTEER_JSON: &str = r#"[
  {"address": "Av. Santa Fe 1200", "lat": -34.480, "lon": -58.500},
  {"address": "Alvear 45", "lat": -34.490, "lon": -58.520},
  {"address": "Belgrano 300", "lat": -34.470, "lon": -58.540},
  {"address": "Rivadavia 900", "lat": -34.500, "lon": -58.530}
]"#;

pub(super) fn write_utf8(path: &Utf8Path, contents: &[u8]) {
    std::fs::write(path, contents).expect("write fixture");
}

/// Temporary directory holding an orders file and a gazetteer.
#[derive(Debug)]
pub(super) struct FixtureFiles {
    _dir: TempDir,
    root: Utf8PathBuf,
}

impl FixtureFiles {
    pub(super) fn new() -> Self {
        let dir = TempDir::new().expect("tempdir");
        let root = Utf8PathBuf::from_path_buf(dir.path().to_path_buf()).expect("utf-8 tempdir");
        let files = Self { _dir: dir, root };
        write_utf8(&files.orders(), ORDERS_JSON.as_bytes());
        write_utf8(&files.gazetteer(), GAZETTEER_JSON.as_bytes());
        files
    }

    pub(super) fn root(&self) -> &Utf8Path {
        &self.root
    }

    pub(super) fn orders(&self) -> Utf8PathBuf {
        self.root.join("orders.json")
    }

    pub(super) fn gazetteer(&self) -> Utf8PathBuf {
        self.root.join("gazetteer.json")
    }
}

/// Geocoder builder that ignores the configured gazetteer path.
pub(super) struct StubGeocoderBuilder {
    pub(super) known: Vec<(&'static str, Coord<f64>)>,
}

impl GeocoderBuilder for StubGeocoderBuilder {
    fn build(&self, _config: &RouteConfig) -> Result<Box<dyn Geocoder>, CliError> {
        let mut gazetteer = GazetteerGeocoder::new();
        for (address, location) in &self.known {
            gazetteer.insert(address, *location);
        }
        Ok(Box::new(gazetteer))
    }
}
