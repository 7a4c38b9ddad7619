//! Exports the [`generate`] function which stitches together the high-level
//! steps of the generation pass: read the category map out of the site
//! object ([`crate::value`]), rank it ([`crate::rank`]), and publish the
//! result back into the site object where the index templates can find it.
//! A host calls this once per build, after its posts are grouped and before
//! any page is rendered.

use crate::config::Config;
use crate::rank::rank;
use crate::value::{categories_from_value, category_slot, publish, Error};
use gtmpl_value::Value;

/// Runs the whole generation pass over `site`: looks up the category map
/// under [`Config::categories_key`], ranks it, and publishes the ranked
/// list under [`Config::sorted_categories_key`]. A site without a category
/// slot counts as having no categories and gets an empty list published, so
/// a site with nothing categorized still builds.
pub fn generate(config: &Config, site: &mut Value) -> Result<()> {
    let categories = match category_slot(site, &config.categories_key)? {
        Some(value) => categories_from_value(value)?,
        None => Vec::new(),
    };

    let ranked = rank(categories);
    log::debug!(
        "publishing {} ranked categories under '{}'",
        ranked.len(),
        config.sorted_categories_key
    );
    publish(site, &config.sorted_categories_key, &ranked)
}

/// The result of a generation pass.
type Result<T> = std::result::Result<T, Error>;
