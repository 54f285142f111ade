//! A separate-chaining hash map.
//!
//! ```
//! use chainmap::ChainedHashMap;
//!
//! let mut map = ChainedHashMap::new();
//! map.put("a", 1);
//! map.put("b", 2);
//! map.put("c", 3);
//! map.put("d", 4); // 4 > 5 * 0.75, the table grows to 11 buckets
//!
//! assert_eq!(map.capacity(), 11);
//! assert_eq!(map.get(&"d"), Some(&4));
//! assert_eq!(map.remove(&"a"), Some(1));
//! assert_eq!(map.len(), 3);
//! ```
pub mod chained_map;
pub mod config;
pub mod error;
pub mod key;
pub mod map;

pub use chained_map::{
    ChainedHashMap, IntoIter, Iter, IterMut, Keys, MapEntry, OccupiedEntry, VacantEntry, Values,
    ValuesMut,
};
pub use config::{DEFAULT_INITIAL_CAPACITY, DEFAULT_LOAD_FACTOR, MapConfig};
pub use error::{ChainMapError, Result};
pub use key::MapKey;
pub use map::Map;
