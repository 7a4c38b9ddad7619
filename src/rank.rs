//! Defines the core ranking transformation: [`rank`] turns a category map
//! into a list of [`RankedEntry`] values ordered by descending post count,
//! minus the most popular entry.
//!
//! The post type is an opaque handle: [`rank`] never looks inside a post, it
//! only counts them. Borrowed handles are handles too, so a host can rank
//! `&Post` references without giving up ownership of its post list.

/// A category map: each label paired with the posts that carry it. The pair
/// order is the encounter order, which decides ties between equal-count
/// categories in [`rank`]'s output.
pub type CategoryMap<P> = Vec<(String, Vec<P>)>;

/// The result of [`rank`]: entries ordered by descending post count.
pub type RankedList<P> = Vec<RankedEntry<P>>;

/// A category label together with the posts counted under it.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct RankedEntry<P> {
    /// The category label, exactly as the host spelled it.
    pub label: String,

    /// The number of posts in the category. Always equal to `posts.len()`
    /// at ranking time; the field exists so templates can read the count
    /// without a length lookup.
    pub count: usize,

    /// The posts counted under the label.
    pub posts: Vec<P>,
}

/// Ranks a category map by descending post count and drops the single most
/// popular entry. Categories with equal counts keep their encounter order,
/// and on a tie for the maximum the first-encountered category is the one
/// dropped. An input with zero or one categories produces an empty list:
/// dropping the head of an empty ranking is a no-op, not a panic.
pub fn rank<P>(categories: impl IntoIterator<Item = (String, Vec<P>)>) -> RankedList<P> {
    let mut entries: RankedList<P> = categories
        .into_iter()
        .map(|(label, posts)| RankedEntry {
            label,
            count: posts.len(),
            posts,
        })
        .collect();

    // `sort_by` is stable: equal counts keep their encounter order.
    entries.sort_by(|a, b| b.count.cmp(&a.count));

    if !entries.is_empty() {
        entries.remove(0);
    }
    entries
}
