//! Converts between the host's dynamically-typed site model and the typed
//! category structures, in both directions: [`categories_from_value`] reads
//! a category map out of a site object and [`publish`] writes a ranked list
//! back into one. Hosts in the Jekyll mold expose the whole site to their
//! templates as one [`Value`]; this module is the boundary where that model
//! meets the ranking.

use crate::rank::{CategoryMap, RankedEntry};
use gtmpl_value::Value;
use std::collections::HashMap;
use std::fmt;

/// Extracts a category map from `categories`, which must be a map from
/// label to a list of posts. The posts themselves stay opaque [`Value`]s.
/// [`Value`]'s maps have arbitrary iteration order, so the extracted pairs
/// are sorted by label to give every build the same encounter order.
pub fn categories_from_value(categories: &Value) -> Result<CategoryMap<Value>> {
    let map = match categories {
        Value::Object(map) => map,
        other => {
            return Err(Error::Categories {
                found: type_name(other),
            })
        }
    };

    let mut result: CategoryMap<Value> = Vec::with_capacity(map.len());
    for (label, posts) in map {
        match posts {
            Value::Array(posts) => result.push((label.clone(), posts.clone())),
            other => {
                return Err(Error::Posts {
                    label: label.clone(),
                    found: type_name(other),
                })
            }
        }
    }
    result.sort_by(|a, b| a.0.cmp(&b.0));
    Ok(result)
}

/// Looks up the category slot in a site object. A site without the slot is
/// a site without categories, so the lookup distinguishes "absent" from
/// "present but malformed": only a site that isn't a map at all is an
/// error.
pub fn category_slot<'a>(site: &'a Value, key: &str) -> Result<Option<&'a Value>> {
    match site {
        Value::Object(map) => Ok(map.get(key)),
        other => Err(Error::Site {
            found: type_name(other),
        }),
    }
}

impl From<&RankedEntry<Value>> for Value {
    /// Converts [`RankedEntry`]s into [`Value`]s for templating. Templates
    /// read the fields as `{{.label}}`, `{{.count}}`, and `{{.posts}}`.
    fn from(entry: &RankedEntry<Value>) -> Value {
        let mut m: HashMap<String, Value> = HashMap::new();
        m.insert("label".to_owned(), (&entry.label).into());
        m.insert("count".to_owned(), (entry.count as u64).into());
        m.insert("posts".to_owned(), Value::Array(entry.posts.clone()));
        Value::Object(m)
    }
}

/// Converts a ranked list into the [`Value`] templates iterate over.
pub fn list_to_value(entries: &[RankedEntry<Value>]) -> Value {
    Value::Array(entries.iter().map(Value::from).collect())
}

/// Writes `entries` into the site context under `key`. The context must be
/// a map; the caller owns it and decides when to hand it to the renderer.
pub fn publish(site: &mut Value, key: &str, entries: &[RankedEntry<Value>]) -> Result<()> {
    match site {
        Value::Object(map) => {
            map.insert(key.to_owned(), list_to_value(entries));
            Ok(())
        }
        other => Err(Error::Site {
            found: type_name(other),
        }),
    }
}

fn type_name(value: &Value) -> &'static str {
    match value {
        Value::Nil => "nil",
        Value::Bool(_) => "a bool",
        Value::Number(_) => "a number",
        Value::String(_) => "a string",
        Value::Array(_) => "an array",
        Value::Object(_) => "an object",
        _ => "an opaque value",
    }
}

/// The result of a fallible site-model operation.
pub type Result<T> = std::result::Result<T, Error>;

/// Represents a site model the generator can't work with. There is nothing
/// to recover; the build should surface these to the user and stop.
#[derive(Debug)]
pub enum Error {
    /// Returned when the value supplied as the category map is not a map
    /// from label to posts.
    Categories { found: &'static str },

    /// Returned when a category label maps to something other than a list
    /// of posts.
    Posts { label: String, found: &'static str },

    /// Returned when the site context is not a map and so can neither hold
    /// categories nor receive the ranked list.
    Site { found: &'static str },
}

impl fmt::Display for Error {
    /// Displays an [`Error`] as presentable text.
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        match self {
            Error::Categories { found } => write!(
                f,
                "Reading categories: expected a map from label to posts, found {}",
                found
            ),
            Error::Posts { label, found } => write!(
                f,
                "Reading category '{}': expected a list of posts, found {}",
                label, found
            ),
            Error::Site { found } => {
                write!(f, "Site context: expected a map, found {}", found)
            }
        }
    }
}

impl std::error::Error for Error {
    /// Implements the [`std::error::Error`] trait for [`Error`]. No variant
    /// wraps an underlying error, so there is never a source.
    fn source(&self) -> Option<&(dyn std::error::Error + 'static)> {
        None
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn posts(label: &str, count: usize) -> Value {
        Value::Array(
            (0..count)
                .map(|i| Value::String(format!("{}-{}", label, i)))
                .collect(),
        )
    }

    fn categories_value(counts: &[(&str, usize)]) -> Value {
        let mut m: HashMap<String, Value> = HashMap::new();
        for &(label, count) in counts {
            m.insert(label.to_owned(), posts(label, count));
        }
        Value::Object(m)
    }

    fn entry(label: &str, count: usize) -> RankedEntry<Value> {
        RankedEntry {
            label: label.to_owned(),
            count,
            posts: match posts(label, count) {
                Value::Array(posts) => posts,
                _ => unreachable!(),
            },
        }
    }

    #[test]
    fn test_categories_from_value() -> Result<()> {
        let found = categories_from_value(&categories_value(&[
            ("rust", 2),
            ("blog", 3),
            ("life", 0),
        ]))?;
        let wanted: Vec<(String, usize)> = vec![
            ("blog".to_owned(), 3),
            ("life".to_owned(), 0),
            ("rust".to_owned(), 2),
        ];
        let found: Vec<(String, usize)> = found
            .into_iter()
            .map(|(label, posts)| (label, posts.len()))
            .collect();
        assert_eq!(wanted, found);
        Ok(())
    }

    #[test]
    fn test_categories_from_value_rejects_non_map() {
        match categories_from_value(&Value::String("nope".to_owned())) {
            Err(Error::Categories { found }) => assert_eq!("a string", found),
            other => panic!("wanted a Categories error; found {:?}", other),
        }
    }

    #[test]
    fn test_categories_from_value_rejects_non_list_posts() {
        let mut m: HashMap<String, Value> = HashMap::new();
        m.insert("rust".to_owned(), Value::from(3u64));
        match categories_from_value(&Value::Object(m)) {
            Err(Error::Posts { label, found }) => {
                assert_eq!("rust", label);
                assert_eq!("a number", found);
            }
            other => panic!("wanted a Posts error; found {:?}", other),
        }
    }

    #[test]
    fn test_category_slot() -> Result<()> {
        let mut m: HashMap<String, Value> = HashMap::new();
        m.insert("categories".to_owned(), categories_value(&[("rust", 1)]));
        let site = Value::Object(m);
        assert!(category_slot(&site, "categories")?.is_some());
        assert!(category_slot(&site, "absent")?.is_none());
        Ok(())
    }

    #[test]
    fn test_category_slot_rejects_non_map_site() {
        match category_slot(&Value::Nil, "categories") {
            Err(Error::Site { found }) => assert_eq!("nil", found),
            other => panic!("wanted a Site error; found {:?}", other),
        }
    }

    #[test]
    fn test_entry_to_value() {
        let value = Value::from(&entry("rust", 2));
        let fields = match &value {
            Value::Object(fields) => fields,
            other => panic!("wanted an object; found {:?}", other),
        };
        assert_eq!(
            Some(&Value::String("rust".to_owned())),
            fields.get("label")
        );
        assert_eq!(Some(&Value::from(2u64)), fields.get("count"));
        assert_eq!(Some(&posts("rust", 2)), fields.get("posts"));
    }

    #[test]
    fn test_publish() -> Result<()> {
        let mut site = Value::Object(HashMap::new());
        publish(&mut site, "sorted_categories", &[entry("a", 3), entry("c", 1)])?;
        let published = match &site {
            Value::Object(map) => map.get("sorted_categories"),
            other => panic!("wanted an object; found {:?}", other),
        };
        assert_eq!(
            Some(&Value::Array(vec![
                Value::from(&entry("a", 3)),
                Value::from(&entry("c", 1)),
            ])),
            published
        );
        Ok(())
    }

    #[test]
    fn test_publish_rejects_non_map_site() {
        match publish(&mut Value::Bool(true), "sorted_categories", &[]) {
            Err(Error::Site { found }) => assert_eq!("a bool", found),
            other => panic!("wanted a Site error; found {:?}", other),
        }
    }
}
