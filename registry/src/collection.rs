//! Ordered in-memory collection of certificates.
//!
//! Insertion order is preserved; records are owned exclusively by the
//! collection. There is no delete or in-place update; records are replaced
//! by re-adding.

use std::ops::Index;
use std::slice;

use crate::certificate::{Certificate, Field};

/// An insertion-ordered collection of validated certificates.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct CertificateCollection {
    certificates: Vec<Certificate>,
}

impl CertificateCollection {
    pub fn new() -> Self {
        Self::default()
    }

    /// Append a record, preserving insertion order.
    pub fn add(&mut self, certificate: Certificate) {
        self.certificates.push(certificate);
    }

    pub fn len(&self) -> usize {
        self.certificates.len()
    }

    pub fn is_empty(&self) -> bool {
        self.certificates.is_empty()
    }

    pub fn get(&self, index: usize) -> Option<&Certificate> {
        self.certificates.get(index)
    }

    /// Forward iteration in collection order.
    pub fn iter(&self) -> slice::Iter<'_, Certificate> {
        self.certificates.iter()
    }

    /// Stable sort by the named field's natural ordering.
    ///
    /// Numeric fields compare numerically, text fields lexicographically,
    /// dates chronologically. An empty collection is a no-op.
    pub fn sort_by_field(&mut self, field: Field, descending: bool) {
        self.certificates.sort_by(|left, right| {
            let ordering = match field {
                Field::Number => left.number().cmp(&right.number()),
                Field::Date => left.date().cmp(&right.date()),
                Field::FullName => left.full_name().cmp(right.full_name()),
                Field::Stipend => left.stipend().total_cmp(&right.stipend()),
                Field::Destination => left.destination().cmp(right.destination()),
            };
            if descending { ordering.reverse() } else { ordering }
        });
    }

    /// Records whose stipend strictly exceeds `threshold`, in collection
    /// order. Lazy and restartable: every call yields a fresh iterator and
    /// consuming it never mutates the collection.
    pub fn with_min_stipend(&self, threshold: f64) -> impl Iterator<Item = &Certificate> {
        self.iter()
            .filter(move |certificate| certificate.has_high_stipend(threshold))
    }
}

impl Index<usize> for CertificateCollection {
    type Output = Certificate;

    fn index(&self, index: usize) -> &Certificate {
        &self.certificates[index]
    }
}

impl<'a> IntoIterator for &'a CertificateCollection {
    type Item = &'a Certificate;
    type IntoIter = slice::Iter<'a, Certificate>;

    fn into_iter(self) -> Self::IntoIter {
        self.certificates.iter()
    }
}
