use std::collections::HashMap;
use std::path::{Path, PathBuf};
use std::sync::{Arc, Mutex, PoisonError};

use crate::error::StoreError;
use crate::store::CoefficientStore;
use crate::table::Element;

/// Source of raw coefficient tables.
///
/// Implement this to serve tables from somewhere other than the standard
/// directory layout (an archive, an in-memory fixture, ...). Closures of the
/// right shape implement it too.
pub trait TableLoader: Send + Sync {
    fn load(&self, aircraft_type: &str) -> Result<Element, StoreError>;
}

impl<F> TableLoader for F
where
    F: Fn(&str) -> Result<Element, StoreError> + Send + Sync,
{
    fn load(&self, aircraft_type: &str) -> Result<Element, StoreError> {
        self(aircraft_type)
    }
}

/// Reads `{root}/{type}/{type}.xml`.
#[derive(Debug, Clone)]
pub struct DirectoryLoader {
    root: PathBuf,
}

impl DirectoryLoader {
    pub fn new(root: impl Into<PathBuf>) -> Self {
        Self { root: root.into() }
    }

    pub fn root(&self) -> &Path {
        &self.root
    }

    pub fn file_path(&self, aircraft_type: &str) -> PathBuf {
        self.root
            .join(aircraft_type)
            .join(format!("{aircraft_type}.xml"))
    }
}

impl TableLoader for DirectoryLoader {
    fn load(&self, aircraft_type: &str) -> Result<Element, StoreError> {
        let path = self.file_path(aircraft_type);
        if !path.is_file() {
            return Err(StoreError::AircraftNotFound {
                aircraft: aircraft_type.to_owned(),
                location: path,
            });
        }
        let xml = std::fs::read_to_string(&path).map_err(|source| StoreError::Io {
            path: path.clone(),
            source,
        })?;
        Element::parse(&xml).map_err(|source| StoreError::Xml {
            aircraft: aircraft_type.to_owned(),
            source,
        })
    }
}

/// Load-once cache of coefficient stores keyed by aircraft type.
///
/// The lock is held across the check-and-load, so concurrent first requests
/// for a type load it exactly once and all callers share the same instance.
/// Entries are never evicted.
pub struct AircraftRegistry {
    loader: Box<dyn TableLoader>,
    stores: Mutex<HashMap<String, Arc<CoefficientStore>>>,
}

impl AircraftRegistry {
    pub fn new(loader: impl TableLoader + 'static) -> Self {
        Self {
            loader: Box::new(loader),
            stores: Mutex::new(HashMap::new()),
        }
    }

    /// Registry over the standard directory layout rooted at `root`.
    pub fn from_dir(root: impl Into<PathBuf>) -> Self {
        Self::new(DirectoryLoader::new(root))
    }

    /// Shared store for `aircraft_type`, loading it on first request.
    pub fn get_aircraft(&self, aircraft_type: &str) -> Result<Arc<CoefficientStore>, StoreError> {
        let mut stores = self.stores.lock().unwrap_or_else(PoisonError::into_inner);
        if let Some(store) = stores.get(aircraft_type) {
            return Ok(Arc::clone(store));
        }

        let root = self.loader.load(aircraft_type)?;
        log::debug!("loaded coefficient table for {aircraft_type}");
        let store = Arc::new(CoefficientStore::new(aircraft_type, root));
        stores.insert(aircraft_type.to_owned(), Arc::clone(&store));
        Ok(store)
    }

    /// Number of aircraft types loaded so far.
    pub fn len(&self) -> usize {
        self.stores.lock().unwrap_or_else(PoisonError::into_inner).len()
    }

    pub fn is_empty(&self) -> bool {
        self.len() == 0
    }
}

impl std::fmt::Debug for AircraftRegistry {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("AircraftRegistry")
            .field("loaded", &self.len())
            .finish_non_exhaustive()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::sync::atomic::{AtomicUsize, Ordering};

    const DOC: &str = "<BADA4_jet><PFM><MREF>64000</MREF></PFM></BADA4_jet>";

    #[test]
    fn same_type_returns_same_instance() {
        let loads = Arc::new(AtomicUsize::new(0));
        let counter = Arc::clone(&loads);
        let registry = AircraftRegistry::new(move |_: &str| -> Result<Element, StoreError> {
            counter.fetch_add(1, Ordering::SeqCst);
            Ok(Element::parse(DOC).unwrap())
        });

        let a = registry.get_aircraft("A-TEST").unwrap();
        let b = registry.get_aircraft("A-TEST").unwrap();
        assert!(Arc::ptr_eq(&a, &b));
        assert_eq!(loads.load(Ordering::SeqCst), 1);
        assert_eq!(registry.len(), 1);
    }

    #[test]
    fn concurrent_first_requests_converge() {
        let loads = Arc::new(AtomicUsize::new(0));
        let counter = Arc::clone(&loads);
        let load = move |_: &str| -> Result<Element, StoreError> {
            counter.fetch_add(1, Ordering::SeqCst);
            Ok(Element::parse(DOC).unwrap())
        };
        let registry = Arc::new(AircraftRegistry::new(load));

        let handles: Vec<_> = (0..8)
            .map(|_| {
                let registry = Arc::clone(&registry);
                std::thread::spawn(move || registry.get_aircraft("A-TEST").unwrap())
            })
            .collect();
        let stores: Vec<_> = handles.into_iter().map(|h| h.join().unwrap()).collect();

        assert_eq!(loads.load(Ordering::SeqCst), 1);
        assert!(stores.windows(2).all(|w| Arc::ptr_eq(&w[0], &w[1])));
        assert_eq!(stores[0].scalar("PFM/MREF").unwrap(), 64_000.0);
    }

    #[test]
    fn failed_load_is_not_cached() {
        let registry = AircraftRegistry::new(|t: &str| -> Result<Element, StoreError> {
            Err(StoreError::AircraftNotFound {
                aircraft: t.to_owned(),
                location: PathBuf::from("nowhere"),
            })
        });
        assert!(registry.get_aircraft("NOPE").is_err());
        assert!(registry.is_empty());
    }

    #[test]
    fn directory_layout() {
        let dir = tempfile::tempdir().unwrap();
        let ac_dir = dir.path().join("A-TEST");
        std::fs::create_dir(&ac_dir).unwrap();
        std::fs::write(ac_dir.join("A-TEST.xml"), DOC).unwrap();

        let loader = DirectoryLoader::new(dir.path());
        assert_eq!(loader.root(), dir.path());
        assert_eq!(loader.file_path("A-TEST"), ac_dir.join("A-TEST.xml"));

        let registry = AircraftRegistry::from_dir(dir.path());
        let store = registry.get_aircraft("A-TEST").unwrap();
        assert_eq!(store.aircraft_type(), "A-TEST");
        assert_eq!(store.scalar("PFM/MREF").unwrap(), 64_000.0);

        let err = registry.get_aircraft("B-MISSING").unwrap_err();
        match err {
            StoreError::AircraftNotFound { aircraft, location } => {
                assert_eq!(aircraft, "B-MISSING");
                assert!(location.ends_with("B-MISSING/B-MISSING.xml"));
            }
            other => panic!("unexpected error: {other}"),
        }
    }
}
