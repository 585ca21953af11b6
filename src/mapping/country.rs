use serde::{Serialize, Serializer};
use std::fmt;
use std::str::FromStr;
use thiserror::Error;

/// One of the countries the alias table knows about.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Country {
    UnitedStates,
    China,
    Japan,
    Germany,
    UnitedKingdom,
    France,
    Italy,
    Brazil,
    Canada,
    Australia,
    India,
    Russia,
    SouthKorea,
    Mexico,
    Spain,
    Indonesia,
    Netherlands,
    Turkey,
    SaudiArabia,
    Switzerland,
}

#[derive(Debug, Clone, PartialEq, Eq, Error)]
#[error("unknown country: {0:?}")]
pub struct UnknownCountry(pub String);

impl Country {
    /// Every supported country, in whitelist order.
    pub const ALL: [Country; 20] = [
        Country::UnitedStates,
        Country::China,
        Country::Japan,
        Country::Germany,
        Country::UnitedKingdom,
        Country::France,
        Country::Italy,
        Country::Brazil,
        Country::Canada,
        Country::Australia,
        Country::India,
        Country::Russia,
        Country::SouthKorea,
        Country::Mexico,
        Country::Spain,
        Country::Indonesia,
        Country::Netherlands,
        Country::Turkey,
        Country::SaudiArabia,
        Country::Switzerland,
    ];

    /// The canonical English name, as used by map datasets.
    pub const fn english_name(self) -> &'static str {
        match self {
            Country::UnitedStates => "United States",
            Country::China => "China",
            Country::Japan => "Japan",
            Country::Germany => "Germany",
            Country::UnitedKingdom => "United Kingdom",
            Country::France => "France",
            Country::Italy => "Italy",
            Country::Brazil => "Brazil",
            Country::Canada => "Canada",
            Country::Australia => "Australia",
            Country::India => "India",
            Country::Russia => "Russia",
            Country::SouthKorea => "South Korea",
            Country::Mexico => "Mexico",
            Country::Spain => "Spain",
            Country::Indonesia => "Indonesia",
            Country::Netherlands => "Netherlands",
            Country::Turkey => "Turkey",
            Country::SaudiArabia => "Saudi Arabia",
            Country::Switzerland => "Switzerland",
        }
    }

    pub const fn chinese_name(self) -> &'static str {
        match self {
            Country::UnitedStates => "美国",
            Country::China => "中国",
            Country::Japan => "日本",
            Country::Germany => "德国",
            Country::UnitedKingdom => "英国",
            Country::France => "法国",
            Country::Italy => "意大利",
            Country::Brazil => "巴西",
            Country::Canada => "加拿大",
            Country::Australia => "澳大利亚",
            Country::India => "印度",
            Country::Russia => "俄罗斯",
            Country::SouthKorea => "韩国",
            Country::Mexico => "墨西哥",
            Country::Spain => "西班牙",
            Country::Indonesia => "印度尼西亚",
            Country::Netherlands => "荷兰",
            Country::Turkey => "土耳其",
            Country::SaudiArabia => "沙特阿拉伯",
            Country::Switzerland => "瑞士",
        }
    }

    /// Two-letter code. Not ISO 3166: the United Kingdom is `UK`.
    pub const fn code(self) -> &'static str {
        match self {
            Country::UnitedStates => "US",
            Country::China => "CN",
            Country::Japan => "JP",
            Country::Germany => "DE",
            Country::UnitedKingdom => "UK",
            Country::France => "FR",
            Country::Italy => "IT",
            Country::Brazil => "BR",
            Country::Canada => "CA",
            Country::Australia => "AU",
            Country::India => "IN",
            Country::Russia => "RU",
            Country::SouthKorea => "KR",
            Country::Mexico => "MX",
            Country::Spain => "ES",
            Country::Indonesia => "ID",
            Country::Netherlands => "NL",
            Country::Turkey => "TR",
            Country::SaudiArabia => "SA",
            Country::Switzerland => "CH",
        }
    }

    pub fn from_english(name: &str) -> Option<Country> {
        Country::ALL.into_iter().find(|c| c.english_name() == name)
    }

    /// Resolves any alias the table knows (English, Chinese, code, any case).
    pub fn from_alias(alias: &str) -> Option<Country> {
        Country::from_english(super::get_standard_english_name(alias))
    }
}

impl fmt::Display for Country {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.english_name())
    }
}

impl FromStr for Country {
    type Err = UnknownCountry;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Country::from_alias(s).ok_or_else(|| UnknownCountry(s.to_string()))
    }
}

impl Serialize for Country {
    fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        serializer.serialize_str(self.english_name())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_from_english() {
        assert_eq!(Country::from_english("South Korea"), Some(Country::SouthKorea));
        assert_eq!(Country::from_english("south korea"), None);
        assert_eq!(Country::from_english("Atlantis"), None);
    }

    #[test]
    fn test_from_alias() {
        assert_eq!(Country::from_alias("中国"), Some(Country::China));
        assert_eq!(Country::from_alias("uk"), Some(Country::UnitedKingdom));
        assert_eq!(Country::from_alias("USA"), Some(Country::UnitedStates));
        assert_eq!(Country::from_alias("Saudi Arabia"), Some(Country::SaudiArabia));
        assert_eq!(Country::from_alias("GB"), None);
        assert_eq!(Country::from_alias(""), None);
    }

    #[test]
    fn test_every_country_resolves_from_each_alias() {
        for country in Country::ALL {
            assert_eq!(Country::from_alias(country.english_name()), Some(country));
            assert_eq!(Country::from_alias(country.chinese_name()), Some(country));
            assert_eq!(Country::from_alias(country.code()), Some(country));
        }
    }

    #[test]
    fn test_from_str() {
        assert_eq!("jp".parse::<Country>(), Ok(Country::Japan));
        let err = "Unknownland".parse::<Country>().unwrap_err();
        assert_eq!(err, UnknownCountry("Unknownland".to_string()));
        assert_eq!(err.to_string(), "unknown country: \"Unknownland\"");
        assert!("".parse::<Country>().is_err());
    }

    #[test]
    fn test_display_and_serialize() {
        assert_eq!(Country::UnitedKingdom.to_string(), "United Kingdom");
        let json = serde_json::to_string(&[Country::China, Country::Turkey]).unwrap();
        assert_eq!(json, r#"["China","Turkey"]"#);
    }
}
