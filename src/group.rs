//! Groups posts by category label. This is the step Jekyll-style hosts run
//! before ranking: walk the post list and file each post under every label
//! it carries.

use crate::rank::CategoryMap;
use std::collections::HashMap;

/// Groups `posts` into a [`CategoryMap`] keyed by the labels the `labels`
/// function yields for each post. The map's encounter order is
/// first-appearance order: the first post to carry a label decides where
/// that label sorts among equal-count categories later on. A post carrying
/// several labels is filed under each of them; a post carrying none is
/// filed under none.
///
/// ```
/// struct Post {
///     categories: Vec<String>,
/// }
///
/// let posts = vec![Post {
///     categories: vec!["rust".to_owned()],
/// }];
/// let categories =
///     catrank::group::group_posts(&posts, |p| p.categories.iter().map(String::as_str));
/// assert_eq!(1, categories.len());
/// ```
pub fn group_posts<'a, P, F, I>(posts: &'a [P], labels: F) -> CategoryMap<&'a P>
where
    F: Fn(&'a P) -> I,
    I: IntoIterator<Item = &'a str>,
{
    // Side table from label to its slot in `categories`; the map itself must
    // stay in encounter order.
    let mut slots: HashMap<String, usize> = HashMap::new();
    let mut categories: CategoryMap<&'a P> = Vec::new();
    for post in posts {
        for label in labels(post) {
            match slots.get(label) {
                Some(&slot) => categories[slot].1.push(post),
                None => {
                    slots.insert(label.to_owned(), categories.len());
                    categories.push((label.to_owned(), vec![post]));
                }
            }
        }
    }
    categories
}
