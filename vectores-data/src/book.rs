//! The office's list of work orders.

use std::io;

use camino::{Utf8Path, Utf8PathBuf};
use thiserror::Error;
use vectores_core::WorkOrder;

/// Errors raised while loading a [`WorkOrderBook`].
#[derive(Debug, Error)]
pub enum BookError {
    /// The orders file could not be read.
    #[error("failed to read work orders from {path}")]
    Open {
        /// Path that was read.
        path: Utf8PathBuf,
        /// Underlying I/O failure.
        #[source]
        source: io::Error,
    },
    /// The orders file is not a JSON array of work orders.
    #[error("work orders file {path} is malformed")]
    Parse {
        /// Path that was parsed.
        path: Utf8PathBuf,
        /// Underlying decode failure.
        #[source]
        source: serde_json::Error,
    },
}

/// Work orders in the order they were recorded.
///
/// Lookup by id returns the first order carrying that id.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct WorkOrderBook {
    orders: Vec<WorkOrder>,
}

impl WorkOrderBook {
    /// Wrap an existing list of orders.
    #[must_use]
    pub const fn new(orders: Vec<WorkOrder>) -> Self {
        Self { orders }
    }

    /// Read a JSON array of work orders from `path`.
    ///
    /// # Errors
    ///
    /// Returns [`BookError::Open`] if the file cannot be read and
    /// [`BookError::Parse`] if it does not decode.
    pub fn load(path: &Utf8Path) -> Result<Self, BookError> {
        let text = vectores_fs::read_utf8_file(path).map_err(|source| BookError::Open {
            path: path.to_path_buf(),
            source,
        })?;
        let orders: Vec<WorkOrder> =
            serde_json::from_str(&text).map_err(|source| BookError::Parse {
                path: path.to_path_buf(),
                source,
            })?;
        log::debug!("loaded {} work orders from {path}", orders.len());
        Ok(Self::new(orders))
    }

    /// Order with identifier `id`, if recorded.
    #[must_use]
    pub fn get(&self, id: &str) -> Option<&WorkOrder> {
        self.orders.iter().find(|order| order.id.as_str() == id)
    }

    /// All orders in recorded order.
    pub fn iter(&self) -> impl Iterator<Item = &WorkOrder> {
        self.orders.iter()
    }

    /// Orders whose number, resident name, address, or phone match `term`.
    ///
    /// A blank term matches everything.
    pub fn search<'a>(&'a self, term: &'a str) -> impl Iterator<Item = &'a WorkOrder> + 'a {
        self.orders.iter().filter(move |order| order.matches(term))
    }

    /// Orders that have not been completed.
    pub fn pending(&self) -> impl Iterator<Item = &WorkOrder> {
        self.orders.iter().filter(|order| !order.is_completed())
    }

    /// Number of recorded orders.
    #[must_use]
    pub fn len(&self) -> usize {
        self.orders.len()
    }

    /// Whether no orders are recorded.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.orders.is_empty()
    }
}

impl FromIterator<WorkOrder> for WorkOrderBook {
    fn from_iter<I: IntoIterator<Item = WorkOrder>>(iter: I) -> Self {
        Self::new(iter.into_iter().collect())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use rstest::{fixture, rstest};
    use tempfile::TempDir;
    use vectores_core::test_support::work_order;

    #[fixture]
    fn book() -> WorkOrderBook {
        let mut done = work_order("c", 3, "Carla Díaz", "Belgrano 300");
        done.complete();
        WorkOrderBook::from_iter([
            work_order("a", 1, "Ana Pérez", "Av. Santa Fe 1200"),
            work_order("b", 2, "Bruno Gómez", "Alvear 45"),
            done,
        ])
    }

    #[rstest]
    fn looks_up_orders_by_id(book: WorkOrderBook) {
        assert_eq!(book.get("b").map(|order| order.number), Some(2));
        assert!(book.get("zzz").is_none());
    }

    #[rstest]
    #[case("ana", &[1])]
    #[case("ALVEAR", &[2])]
    #[case("3", &[3])]
    #[case("", &[1, 2, 3])]
    fn searches_by_number_name_and_address(
        book: WorkOrderBook,
        #[case] term: &str,
        #[case] expected: &[u32],
    ) {
        let numbers: Vec<u32> = book.search(term).map(|order| order.number).collect();
        assert_eq!(numbers, expected);
    }

    #[rstest]
    fn pending_skips_completed_orders(book: WorkOrderBook) {
        let ids: Vec<&str> = book.pending().map(|order| order.id.as_str()).collect();
        assert_eq!(ids, ["a", "b"]);
    }

    #[rstest]
    fn loads_orders_from_json() {
        let dir = TempDir::new().expect("tempdir");
        let path =
            Utf8PathBuf::from_path_buf(dir.path().join("orders.json")).expect("utf-8 tempdir");
        std::fs::write(
            &path,
            r#"[{
                "_id": "665f1c",
                "numeroOrden": 42,
                "vecino": {"nombre": "Ana Pérez", "direccion": "Av. Santa Fe 1200"},
                "tipoServicio": "Desratización",
                "horario": "09:30"
            }]"#,
        )
        .expect("write fixture");

        let loaded = WorkOrderBook::load(&path).expect("load orders");
        let order = loaded.get("665f1c").expect("order present");
        assert_eq!(order.formatted_number(), "00042");
        assert!(order.fixed_time_slot.is_some());
    }

    #[rstest]
    fn reports_malformed_files() {
        let dir = TempDir::new().expect("tempdir");
        let path =
            Utf8PathBuf::from_path_buf(dir.path().join("orders.json")).expect("utf-8 tempdir");
        std::fs::write(&path, r#"[{"numeroOrden": "x"}]"#).expect("write fixture");

        let err = WorkOrderBook::load(&path).expect_err("malformed");
        assert!(matches!(err, BookError::Parse { .. }));
    }
}
