//! 只读的内存实现，排序规则与 PostgreSQL 一致：
//! 升序时 NULL 排在最后，降序时排在最前，字段相同时按 id 升序。

use std::cmp::Ordering;

pub mod country;
pub mod gold_medal;

fn cmp_nulls_last<T, F>(a: &Option<T>, b: &Option<T>, cmp: F) -> Ordering
where
    F: Fn(&T, &T) -> Ordering,
{
    match (a, b) {
        (Some(a), Some(b)) => cmp(a, b),
        (Some(_), None) => Ordering::Less,
        (None, Some(_)) => Ordering::Greater,
        (None, None) => Ordering::Equal,
    }
}

fn directed(ordering: Ordering, ascending: bool) -> Ordering {
    if ascending {
        ordering
    } else {
        ordering.reverse()
    }
}
