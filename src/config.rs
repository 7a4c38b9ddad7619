//! Defines the [`Config`] type: the generator's options, deserializable
//! from the host's YAML project file.

use serde::Deserialize;
use std::io::Read;

/// The key under which a site object holds its category map unless the host
/// says otherwise.
pub const CATEGORIES_KEY: &str = "categories";

/// The key under which the ranked list is published unless the host says
/// otherwise.
pub const SORTED_CATEGORIES_KEY: &str = "sorted_categories";

/// Options for the generation step. Every field defaults to its well-known
/// key, so a host only ever spells out the keys it wants to move.
#[derive(Clone, Debug, Deserialize, PartialEq, Eq)]
#[serde(default)]
pub struct Config {
    /// The key in the site object that holds the category map.
    pub categories_key: String,

    /// The key in the site object under which the ranked list is published.
    pub sorted_categories_key: String,
}

impl Default for Config {
    fn default() -> Config {
        Config {
            categories_key: CATEGORIES_KEY.to_owned(),
            sorted_categories_key: SORTED_CATEGORIES_KEY.to_owned(),
        }
    }
}

impl Config {
    /// Reads a [`Config`] from a YAML document, e.g. the options block of a
    /// host's project file.
    pub fn from_reader<R: Read>(reader: R) -> Result<Config> {
        serde_yaml::from_reader(reader)
    }
}

/// The result of loading a [`Config`].
pub type Result<T> = std::result::Result<T, serde_yaml::Error>;
