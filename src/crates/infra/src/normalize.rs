use application::query::shared::CountryNameNormalizer;

/// 将每个单词转为首字母大写、其余字母小写，单词之间的空白原样保留
pub fn capitalize_fully(value: &str) -> String {
    let mut result = String::with_capacity(value.len());
    let mut word_start = true;
    for c in value.chars() {
        if c.is_whitespace() {
            word_start = true;
            result.push(c);
        } else if word_start {
            result.extend(c.to_uppercase());
            word_start = false;
        } else {
            result.extend(c.to_lowercase());
        }
    }
    result
}

#[derive(Debug, Clone, Default)]
pub struct TitleCaseNormalizer;

impl TitleCaseNormalizer {
    pub fn new() -> Self {
        Self
    }
}

impl CountryNameNormalizer for TitleCaseNormalizer {
    fn normalize(&self, name: &str) -> String {
        capitalize_fully(name)
    }
}
