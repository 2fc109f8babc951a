//! Known-collection catalog for dashboard selection inputs.
//!
//! The selection interface offers a fixed, externally configured list of
//! collections. The SDK never checks that an address names a real
//! collection beyond what the remote service reports.

use crate::shared::CollectionAddress;

/// A selectable collection: display label + chain address.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct CollectionInfo {
    pub label: String,
    pub address: CollectionAddress,
}

impl CollectionInfo {
    pub fn new(label: impl Into<String>, address: impl Into<CollectionAddress>) -> Self {
        Self {
            label: label.into(),
            address: address.into(),
        }
    }
}

/// The built-in catalog of well-known mainnet collections.
pub fn default_catalog() -> Vec<CollectionInfo> {
    vec![
        CollectionInfo::new("Art Blocks", "0xa7d8d9ef8D8Ce8992Df33D8b8CF4Aebabd5bD270"),
        CollectionInfo::new("Binkies", "0xa06fda2caa66148603314451ba0f30c9c5d539e3"),
        CollectionInfo::new("Zorbs", "0xca21d4228cdcc68d4e23807e5e370c07577dd152"),
        CollectionInfo::new("Doodles", "0x8a90CAb2b38dba80c64b7734e58Ee1dB38B8992e"),
        CollectionInfo::new("Nouns", "0x4b10701Bfd7BFEdc47d50562b76b436fbB5BdB3B"),
        CollectionInfo::new("SuperRare", "0xb932a70A57673d89f4acfFBE830E8ed7f75Fb9e0"),
    ]
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_default_catalog_addresses() {
        let catalog = default_catalog();
        assert_eq!(catalog.len(), 6);
        for entry in &catalog {
            assert!(entry.address.as_str().starts_with("0x"));
            assert!(!entry.label.is_empty());
        }
    }

    #[test]
    fn test_default_catalog_labels_unique() {
        let catalog = default_catalog();
        let mut labels: Vec<_> = catalog.iter().map(|c| c.label.as_str()).collect();
        labels.sort();
        labels.dedup();
        assert_eq!(labels.len(), catalog.len());
    }
}
