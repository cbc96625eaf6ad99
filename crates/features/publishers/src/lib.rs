//! Publishers feature slice: an in-memory catalog of publishers and the domains
//! they own, with uniqueness enforced across the whole catalog.
//!
//! The catalog is held behind a single [`RwLock`] so reads run concurrently and
//! each write is applied as one atomic step against both indexes.

#[cfg(feature = "server")]
pub mod api;
pub mod catalog;
pub mod error;
pub mod model;
pub mod seed;

pub use crate::catalog::Catalog;
pub use crate::error::{PublisherError, PublisherErrorExt};
pub use crate::model::{Domain, Publisher};

use parking_lot::RwLock;
use plist_kernel::domain::config::ApiConfig;
use plist_kernel::domain::registry::InitializedSlice;
use tracing::{debug, info};

/// Publishers feature state.
#[plist_derive::plist_slice]
pub struct Publishers {
    catalog: RwLock<Catalog>,
}

impl Publishers {
    #[must_use]
    pub fn from_catalog(catalog: Catalog) -> Self {
        Self::new(PublishersInner { catalog: RwLock::new(catalog) })
    }

    /// Copy of every publisher in insertion order.
    #[must_use]
    pub fn snapshot(&self) -> Vec<Publisher> {
        self.catalog.read().publishers().to_vec()
    }

    /// # Errors
    /// See [`Catalog::add_publisher`].
    pub fn add_publisher(&self, publisher: Publisher) -> Result<(), PublisherError> {
        let name = publisher.publisher.clone();
        let domains = publisher.domains.len();
        self.catalog.write().add_publisher(publisher)?;
        info!(publisher = %name, domains, "Publisher added");
        Ok(())
    }

    /// # Errors
    /// See [`Catalog::add_domain`].
    pub fn add_domain(&self, publisher_name: &str, domain: Domain) -> Result<(), PublisherError> {
        let name = domain.domain.clone();
        self.catalog.write().add_domain(publisher_name, domain)?;
        info!(publisher = %publisher_name, domain = %name, "Domain added");
        Ok(())
    }

    /// # Errors
    /// See [`Catalog::update_domain`].
    pub fn update_domain(&self, original: &Domain, input: Domain) -> Result<(), PublisherError> {
        let name = input.domain.clone();
        self.catalog.write().update_domain(original, input)?;
        if name == original.domain {
            info!(domain = %name, "Domain updated");
        } else {
            info!(from = %original.domain, to = %name, "Domain renamed");
        }
        Ok(())
    }
}

/// Initialize the publishers feature.
///
/// Loads `catalog.seed` when configured; otherwise the catalog starts empty.
///
/// # Errors
/// Returns an error if the seed file cannot be read, is not a publishers array,
/// or repeats a publisher or domain name.
pub fn init(config: &ApiConfig) -> Result<InitializedSlice, PublisherError> {
    let catalog = match &config.catalog.seed {
        Some(path) => {
            debug!(path = %path.display(), "Loading publishers seed");
            let publishers = seed::load_seed(path)?;
            Catalog::from_snapshot(publishers)
                .context(format!("validating {}", path.display()))?
        },
        None => Catalog::new(),
    };

    info!(
        publishers = catalog.len(),
        domains = catalog.domain_count(),
        "Publishers slice initialized"
    );

    Ok(InitializedSlice::new(Publishers::from_catalog(catalog)))
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;
    use std::fs;

    #[test]
    fn init_without_seed_starts_empty() {
        let slice = init(&ApiConfig::default()).unwrap();
        let publishers = slice.downcast_ref::<Publishers>().unwrap();
        assert!(publishers.snapshot().is_empty());
    }

    #[test]
    fn init_loads_seed_file() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("data.json");
        fs::write(
            &path,
            r#"[{"publisher":"A","domains":[{"domain":"a.com","desktopAds":1,"mobileAds":2}]}]"#,
        )
        .unwrap();

        let mut config = ApiConfig::default();
        config.catalog.seed = Some(path);
        let slice = init(&config).unwrap();

        let publishers = slice.downcast_ref::<Publishers>().unwrap();
        assert_eq!(
            publishers.snapshot(),
            vec![Publisher::new("A", vec![Domain::new("a.com", json!(1), json!(2))])]
        );
    }

    #[test]
    fn clones_share_the_catalog() {
        let publishers = Publishers::from_catalog(Catalog::new());
        let clone = publishers.clone();
        clone.add_publisher(Publisher::new("A", vec![])).unwrap();
        assert_eq!(publishers.snapshot().len(), 1);
    }
}
