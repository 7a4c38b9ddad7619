//! The library code for the `catrank` sorted-categories generator. The
//! architecture can be generally broken down into three distinct steps:
//!
//! 1. Grouping a site's posts by category label ([`crate::group`])
//! 2. Ranking the categories by descending post count ([`crate::rank`])
//! 3. Publishing the ranked list into the site's templating context
//!    ([`crate::value`] and [`crate::generate`])
//!
//! Of the three, only the second step is essential: [`crate::rank::rank`] is
//! a pure function from a category map to a ranked list, and a host that
//! already groups its own posts and owns its own templating context needs
//! nothing else. The surrounding steps adapt the ranking to hosts in the
//! mold of Jekyll's generator plugins: the host hands over its
//! dynamically-typed site object, and the generation step writes the ranked
//! list back into it under a well-known key where the index templates can
//! find it.
//!
//! The ranked list always omits its head entry: the host renders the most
//! popular category by other means, so templates receive everything from
//! the runner-up down. An input with zero or one categories therefore
//! yields an empty list rather than an error.

#![cfg_attr(feature = "fail-on-warnings", deny(warnings))]

pub mod config;
pub mod generate;
pub mod group;
pub mod rank;
pub mod value;
