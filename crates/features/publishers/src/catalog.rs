//! In-memory publishers store with its two derived indexes.
//!
//! The store keeps publishers in insertion order. `positions` answers "does this
//! publisher exist, and where", `owners` maps every domain name to its publisher.
//! Every write validates completely before mutating anything, so a rejected
//! request leaves the store and both indexes untouched.

use crate::error::PublisherError;
use crate::model::{Domain, Publisher};
use fxhash::{FxHashMap, FxHashSet};
use std::borrow::Cow;

type Result<T> = std::result::Result<T, PublisherError>;

#[derive(Debug, Default)]
pub struct Catalog {
    publishers: Vec<Publisher>,
    positions: FxHashMap<String, usize>,
    owners: FxHashMap<String, String>,
}

impl Catalog {
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Builds a catalog from a snapshot, rebuilding both indexes.
    ///
    /// # Errors
    /// Fails if the snapshot repeats a publisher or a domain name, or contains a blank name.
    pub fn from_snapshot(publishers: Vec<Publisher>) -> Result<Self> {
        let mut catalog = Self::new();
        for publisher in publishers {
            catalog.add_publisher(publisher)?;
        }
        Ok(catalog)
    }

    /// All publishers in insertion order.
    #[must_use]
    pub fn publishers(&self) -> &[Publisher] {
        &self.publishers
    }

    #[must_use]
    pub fn len(&self) -> usize {
        self.publishers.len()
    }

    #[must_use]
    pub fn domain_count(&self) -> usize {
        self.owners.len()
    }

    #[must_use]
    pub fn contains_publisher(&self, name: &str) -> bool {
        self.positions.contains_key(name)
    }

    /// Name of the publisher owning `domain`.
    #[must_use]
    pub fn owner_of(&self, domain: &str) -> Option<&str> {
        self.owners.get(domain).map(String::as_str)
    }

    /// Appends a publisher and indexes every domain it brings along.
    ///
    /// # Errors
    /// * [`PublisherError::PublisherExists`] if the name is taken.
    /// * [`PublisherError::DomainExists`] if a supplied domain is already owned or
    ///   appears twice in `publisher.domains`.
    /// * [`PublisherError::Validation`] for blank names.
    pub fn add_publisher(&mut self, publisher: Publisher) -> Result<()> {
        require_name("publisher", &publisher.publisher)?;
        if self.contains_publisher(&publisher.publisher) {
            return Err(PublisherError::PublisherExists {
                publisher: publisher.publisher,
                context: None,
            });
        }

        let mut incoming = FxHashSet::default();
        for domain in &publisher.domains {
            require_name("domain", &domain.domain)?;
            self.ensure_domain_free(&domain.domain)?;
            if !incoming.insert(domain.domain.as_str()) {
                return Err(PublisherError::DomainExists {
                    domain: domain.domain.clone(),
                    publisher: publisher.publisher.clone(),
                    context: Some("Repeated in request".into()),
                });
            }
        }

        for domain in &publisher.domains {
            self.owners.insert(domain.domain.clone(), publisher.publisher.clone());
        }
        self.positions.insert(publisher.publisher.clone(), self.publishers.len());
        self.publishers.push(publisher);
        Ok(())
    }

    /// Appends `domain` to the publisher named `publisher_name`.
    ///
    /// # Errors
    /// * [`PublisherError::DomainExists`] if the domain is already owned.
    /// * [`PublisherError::PublisherNotFound`] if the publisher does not exist.
    /// * [`PublisherError::Validation`] for blank names.
    pub fn add_domain(&mut self, publisher_name: &str, domain: Domain) -> Result<()> {
        require_name("domain", &domain.domain)?;
        require_name("publisherName", publisher_name)?;
        self.ensure_domain_free(&domain.domain)?;

        let publisher = self.publisher_mut(publisher_name)?;
        let name = domain.domain.clone();
        publisher.domains.push(domain);
        self.owners.insert(name, publisher_name.to_owned());
        Ok(())
    }

    /// Overwrites the stored `original` domain with `input`, renaming it if needed.
    ///
    /// Checks run in order: rename conflict, no-op edit, owner lookup, domain lookup.
    ///
    /// # Errors
    /// * [`PublisherError::DomainExists`] if renaming onto a name that is already owned.
    /// * [`PublisherError::NoEdit`] if name and both configs are unchanged.
    /// * [`PublisherError::OwnerNotFound`] if no publisher owns `original`.
    /// * [`PublisherError::PublisherNotFound`] / [`PublisherError::DomainNotFound`]
    ///   if the owner or the record itself is missing from the store.
    pub fn update_domain(&mut self, original: &Domain, input: Domain) -> Result<()> {
        require_name("domain", &input.domain)?;
        let renamed = original.domain != input.domain;

        if renamed {
            self.ensure_domain_free(&input.domain)?;
        } else if original.same_ads(&input) {
            return Err(PublisherError::NoEdit { domain: input.domain, context: None });
        }

        let owner = self.owners.get(&original.domain).cloned().ok_or_else(|| {
            PublisherError::OwnerNotFound { domain: original.domain.clone(), context: None }
        })?;

        let record = self
            .publisher_mut(&owner)?
            .domains
            .iter_mut()
            .find(|d| d.domain == original.domain)
            .ok_or_else(|| PublisherError::DomainNotFound {
                domain: original.domain.clone(),
                context: Some(Cow::Owned(format!("publisher {owner}"))),
            })?;

        let new_name = renamed.then(|| input.domain.clone());
        *record = input;

        if let Some(new_name) = new_name {
            self.owners.remove(&original.domain);
            self.owners.insert(new_name, owner);
        }
        Ok(())
    }

    fn ensure_domain_free(&self, domain: &str) -> Result<()> {
        match self.owner_of(domain) {
            Some(owner) => Err(PublisherError::DomainExists {
                domain: domain.to_owned(),
                publisher: owner.to_owned(),
                context: None,
            }),
            None => Ok(()),
        }
    }

    fn publisher_mut(&mut self, name: &str) -> Result<&mut Publisher> {
        let Some(&position) = self.positions.get(name) else {
            return Err(PublisherError::PublisherNotFound { publisher: name.to_owned(), context: None });
        };
        self.publishers.get_mut(position).ok_or_else(|| PublisherError::Internal {
            message: Cow::Owned(format!("publisher index points past the store: {name}")),
            context: None,
        })
    }
}

fn require_name(field: &'static str, value: &str) -> Result<()> {
    if value.trim().is_empty() {
        return Err(PublisherError::Validation {
            message: Cow::Owned(format!("Field `{field}` must not be blank")),
            context: None,
        });
    }
    Ok(())
}
