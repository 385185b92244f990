/// 国家名称规范化，在查询之前由接口层调用
/// 查询服务本身只做精确匹配
pub trait CountryNameNormalizer: Send + Sync {
    fn normalize(&self, name: &str) -> String;
}
