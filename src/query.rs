//! Data-fetch cache shared by every page.
//!
//! A [`QueryClient`] is created once when the application shell starts and
//! lives for the rest of the process. Entries are keyed by request identity
//! ([`QueryKey`]); the first [`fetch_query`](QueryClient::fetch_query) for a
//! key runs the fetcher and stores the value, later calls are served from
//! memory until the key is invalidated.
//!
//! Failed fetches are not cached and not retried: the error goes back to the
//! caller and the next request for the key fetches again.

use std::any::Any;
use std::collections::HashMap;
use std::fmt;

/// Request identity: an ordered list of segments, e.g. `["posts"]` or
/// `["service", "branding"]`.
#[derive(Debug, Clone, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub struct QueryKey(Vec<String>);

impl QueryKey {
    pub fn new<I, S>(segments: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        Self(segments.into_iter().map(Into::into).collect())
    }

    /// Whether `prefix` is a leading run of this key's segments.
    pub fn starts_with(&self, prefix: &QueryKey) -> bool {
        self.0.starts_with(&prefix.0)
    }
}

impl fmt::Display for QueryKey {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "[{}]", self.0.join(", "))
    }
}

struct QueryEntry {
    data: Box<dyn Any>,
    stale: bool,
}

/// Counters for build output.
#[derive(Debug, Default, Clone, Copy, PartialEq, Eq)]
pub struct QueryStats {
    pub hits: u32,
    pub fetches: u32,
    pub failures: u32,
}

impl fmt::Display for QueryStats {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{} fetched, {} from cache", self.fetches, self.hits)?;
        if self.failures > 0 {
            write!(f, ", {} failed", self.failures)?;
        }
        Ok(())
    }
}

#[derive(Default)]
pub struct QueryClient {
    entries: HashMap<QueryKey, QueryEntry>,
    stats: QueryStats,
}

impl QueryClient {
    pub fn new() -> Self {
        Self::default()
    }

    /// Return the cached value for `key`, or run `fetch` and cache its result.
    ///
    /// A cached value of a different type than `T` counts as a miss and is
    /// replaced.
    pub fn fetch_query<T, E, F>(&mut self, key: &QueryKey, fetch: F) -> Result<T, E>
    where
        T: Clone + 'static,
        F: FnOnce() -> Result<T, E>,
    {
        if let Some(entry) = self.entries.get(key)
            && !entry.stale
            && let Some(value) = entry.data.downcast_ref::<T>()
        {
            self.stats.hits += 1;
            return Ok(value.clone());
        }

        let value = match fetch() {
            Ok(value) => value,
            Err(err) => {
                self.stats.failures += 1;
                return Err(err);
            }
        };
        self.stats.fetches += 1;
        self.set_query_data(key, value.clone());
        Ok(value)
    }

    pub fn get_query_data<T: 'static>(&self, key: &QueryKey) -> Option<&T> {
        self.entries.get(key)?.data.downcast_ref::<T>()
    }

    pub fn set_query_data<T: 'static>(&mut self, key: &QueryKey, value: T) {
        self.entries.insert(
            key.clone(),
            QueryEntry {
                data: Box::new(value),
                stale: false,
            },
        );
    }

    /// Mark every key starting with `prefix` stale; the next fetch refreshes it.
    pub fn invalidate(&mut self, prefix: &QueryKey) {
        for (key, entry) in self.entries.iter_mut() {
            if key.starts_with(prefix) {
                entry.stale = true;
            }
        }
    }

    pub fn len(&self) -> usize {
        self.entries.len()
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    pub fn stats(&self) -> QueryStats {
        self.stats
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::cell::Cell;

    fn key(segments: &[&str]) -> QueryKey {
        QueryKey::new(segments.iter().copied())
    }

    #[test]
    fn second_fetch_is_served_from_cache() {
        let mut client = QueryClient::new();
        let calls = Cell::new(0);
        let fetch = || -> Result<Vec<u32>, String> {
            calls.set(calls.get() + 1);
            Ok(vec![1, 2, 3])
        };

        assert_eq!(client.fetch_query(&key(&["posts"]), fetch).unwrap(), vec![1, 2, 3]);
        assert_eq!(client.fetch_query(&key(&["posts"]), fetch).unwrap(), vec![1, 2, 3]);
        assert_eq!(calls.get(), 1);
        assert_eq!(
            client.stats(),
            QueryStats {
                hits: 1,
                fetches: 1,
                failures: 0
            }
        );
    }

    #[test]
    fn keys_are_distinct() {
        let mut client = QueryClient::new();
        client.set_query_data(&key(&["service", "a"]), "A".to_string());
        client.set_query_data(&key(&["service", "b"]), "B".to_string());
        assert_eq!(
            client.get_query_data::<String>(&key(&["service", "a"])).map(String::as_str),
            Some("A")
        );
        assert_eq!(client.len(), 2);
    }

    #[test]
    fn failures_are_not_cached() {
        let mut client = QueryClient::new();
        let first: Result<u32, &str> = client.fetch_query(&key(&["x"]), || Err("offline"));
        assert_eq!(first, Err("offline"));
        assert!(client.is_empty());

        let second: Result<u32, &str> = client.fetch_query(&key(&["x"]), || Ok(7));
        assert_eq!(second, Ok(7));
        assert_eq!(client.stats().failures, 1);
    }

    #[test]
    fn invalidate_prefix_forces_refetch() {
        let mut client = QueryClient::new();
        client.set_query_data(&key(&["service", "a"]), 1u32);
        client.set_query_data(&key(&["posts"]), 2u32);
        client.invalidate(&key(&["service"]));

        let refreshed: Result<u32, ()> = client.fetch_query(&key(&["service", "a"]), || Ok(10));
        assert_eq!(refreshed, Ok(10));
        let cached: Result<u32, ()> = client.fetch_query(&key(&["posts"]), || Ok(20));
        assert_eq!(cached, Ok(2));
    }

    #[test]
    fn type_mismatch_is_a_miss() {
        let mut client = QueryClient::new();
        client.set_query_data(&key(&["k"]), 5u32);
        let value: Result<String, ()> = client.fetch_query(&key(&["k"]), || Ok("five".into()));
        assert_eq!(value, Ok("five".to_string()));
        assert!(client.get_query_data::<u32>(&key(&["k"])).is_none());
    }

    #[test]
    fn key_display() {
        assert_eq!(key(&["service", "branding"]).to_string(), "[service, branding]");
    }
}
