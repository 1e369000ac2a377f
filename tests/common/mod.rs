#![allow(dead_code)]

use elastic_list::{ArrayList, ListConfig, ListError};

/// List with an explicit capacity, filled by repeated `add`
pub fn list_with_capacity<T>(capacity: usize, values: impl IntoIterator<Item = T>) -> ArrayList<T> {
    let mut list = ArrayList::with_config(ListConfig::with_capacity(capacity));
    for value in values {
        list.add(value);
    }
    list
}

/// Default-capacity list of `&str`
pub fn strings(values: &[&'static str]) -> ArrayList<&'static str> {
    list_with_capacity(elastic_list::DEFAULT_CAPACITY, values.iter().copied())
}

/// Walk `list` with a cursor, calling `body` after each yielded element
///
/// Mirrors a for-each loop whose body mutates the list it walks.
pub fn for_each_mut<T, F>(list: &mut ArrayList<T>, mut body: F) -> Result<usize, ListError>
where
    T: Clone,
    F: FnMut(&mut ArrayList<T>, T),
{
    let mut cursor = list.cursor();
    let mut visited = 0;
    while cursor.has_next(list)? {
        let item = cursor.try_next(list)?.cloned();
        if let Some(item) = item {
            visited += 1;
            body(list, item);
        }
    }
    Ok(visited)
}
