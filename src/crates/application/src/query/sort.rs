use crate::query::QueryError;
use domain::SortDirection;

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SortBy {
    /// 已转为小写的排序字段名
    pub key: String,
    pub direction: SortDirection,
}

impl SortBy {
    pub fn new(key: &str, ascending: bool) -> Self {
        Self {
            key: key.to_lowercase(),
            direction: SortDirection::from_ascending(ascending),
        }
    }

    pub fn is_ascending(&self) -> bool {
        self.direction.is_ascending()
    }

    /// 在存储层支持的字段表中查找排序字段
    pub fn resolve<T: Copy>(&self, columns: &[(&str, T)]) -> Result<T, QueryError> {
        columns
            .iter()
            .find(|(name, _)| *name == self.key)
            .map(|(_, column)| *column)
            .ok_or_else(|| QueryError::InvalidSortKey(self.key.clone()))
    }
}

/// 稳定排序：键相同的元素保持原有的相对顺序，升序和降序都是如此
pub fn sort_by_direction<T, K, F>(items: &mut [T], direction: SortDirection, key: F)
where
    K: Ord,
    F: Fn(&T) -> K,
{
    match direction {
        SortDirection::Asc => items.sort_by(|a, b| key(a).cmp(&key(b))),
        SortDirection::Desc => items.sort_by(|a, b| key(b).cmp(&key(a))),
    }
}
