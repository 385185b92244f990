use std::fmt::{self, Display};
use std::str::FromStr;
use thiserror::Error;

#[derive(Debug, Error, PartialEq)]
pub enum ValueError {
    #[error("unknown season: {0}")]
    UnknownSeason(String),
    #[error("unknown gender: {0}")]
    UnknownGender(String),
}

// 数据库中以文本存储的枚举值，字面量必须与原始数据集保持一致
macro_rules! define_text_enum {
    ($name:ident, $err:ident, { $($variant:ident => $text:literal),+ $(,)? }) => {
        #[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
        pub enum $name {
            $($variant,)+
        }

        impl $name {
            pub fn as_str(&self) -> &'static str {
                match self {
                    $(Self::$variant => $text,)+
                }
            }
        }

        impl FromStr for $name {
            type Err = ValueError;

            fn from_str(s: &str) -> Result<Self, Self::Err> {
                match s {
                    $($text => Ok(Self::$variant),)+
                    other => Err(ValueError::$err(other.to_string())),
                }
            }
        }

        impl Display for $name {
            fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
                f.write_str(self.as_str())
            }
        }
    };
}

define_text_enum!(Season, UnknownSeason, {
    Summer => "Summer",
    Winter => "Winter",
});

define_text_enum!(Gender, UnknownGender, {
    Male => "male",
    Female => "female",
});

/// 排序方向
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum SortDirection {
    #[default]
    Asc,
    Desc,
}

impl SortDirection {
    pub fn from_ascending(ascending: bool) -> Self {
        if ascending {
            Self::Asc
        } else {
            Self::Desc
        }
    }

    pub fn is_ascending(&self) -> bool {
        matches!(self, Self::Asc)
    }
}
