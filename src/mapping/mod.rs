pub mod country;

use self::country::Country;
use std::collections::HashMap;
use std::sync::LazyLock;

/// The alias table in lookup order: English to Chinese, Chinese to English,
/// then codes to English. Earlier entries win when folded keys collide.
const COUNTRY_MAPPING: [(&str, &str); 61] = [
    ("United States", "美国"),
    ("China", "中国"),
    ("Japan", "日本"),
    ("Germany", "德国"),
    ("United Kingdom", "英国"),
    ("France", "法国"),
    ("Italy", "意大利"),
    ("Brazil", "巴西"),
    ("Canada", "加拿大"),
    ("Australia", "澳大利亚"),
    ("India", "印度"),
    ("Russia", "俄罗斯"),
    ("South Korea", "韩国"),
    ("Mexico", "墨西哥"),
    ("Spain", "西班牙"),
    ("Indonesia", "印度尼西亚"),
    ("Netherlands", "荷兰"),
    ("Turkey", "土耳其"),
    ("Saudi Arabia", "沙特阿拉伯"),
    ("Switzerland", "瑞士"),
    ("美国", "United States"),
    ("中国", "China"),
    ("日本", "Japan"),
    ("德国", "Germany"),
    ("英国", "United Kingdom"),
    ("法国", "France"),
    ("意大利", "Italy"),
    ("巴西", "Brazil"),
    ("加拿大", "Canada"),
    ("澳大利亚", "Australia"),
    ("印度", "India"),
    ("俄罗斯", "Russia"),
    ("韩国", "South Korea"),
    ("墨西哥", "Mexico"),
    ("西班牙", "Spain"),
    ("印度尼西亚", "Indonesia"),
    ("荷兰", "Netherlands"),
    ("土耳其", "Turkey"),
    ("沙特阿拉伯", "Saudi Arabia"),
    ("瑞士", "Switzerland"),
    ("US", "United States"),
    ("USA", "United States"),
    ("UK", "United Kingdom"),
    ("CN", "China"),
    ("JP", "Japan"),
    ("DE", "Germany"),
    ("FR", "France"),
    ("IT", "Italy"),
    ("BR", "Brazil"),
    ("CA", "Canada"),
    ("AU", "Australia"),
    ("IN", "India"),
    ("RU", "Russia"),
    ("KR", "South Korea"),
    ("MX", "Mexico"),
    ("ES", "Spain"),
    ("ID", "Indonesia"),
    ("NL", "Netherlands"),
    ("TR", "Turkey"),
    ("SA", "Saudi Arabia"),
    ("CH", "Switzerland"),
];

struct AliasIndex {
    exact: HashMap<&'static str, &'static str>,
    folded: HashMap<String, &'static str>,
    // Chinese value -> whitelisted English key
    reverse: HashMap<&'static str, &'static str>,
}

impl AliasIndex {
    fn build() -> Self {
        let mut exact = HashMap::with_capacity(COUNTRY_MAPPING.len());
        let mut folded = HashMap::with_capacity(COUNTRY_MAPPING.len());
        let mut reverse = HashMap::new();

        for (key, value) in COUNTRY_MAPPING {
            exact.entry(key).or_insert(value);
            folded.entry(key.to_lowercase()).or_insert(value);
            if is_standard_english(key) {
                reverse.entry(value).or_insert(key);
            }
        }

        Self {
            exact,
            folded,
            reverse,
        }
    }
}

static INDEX: LazyLock<AliasIndex> = LazyLock::new(AliasIndex::build);

/// Iterates the alias table as `(alias, canonical)` pairs in lookup order.
pub fn country_mapping() -> impl Iterator<Item = (&'static str, &'static str)> {
    COUNTRY_MAPPING.into_iter()
}

/// The whitelisted English names, in order.
pub fn english_countries() -> impl Iterator<Item = &'static str> {
    Country::ALL.into_iter().map(Country::english_name)
}

pub fn is_standard_english(name: &str) -> bool {
    Country::from_english(name).is_some()
}

/// Maps an alias to its counterpart: English to Chinese, Chinese or code to
/// English. Exact matches are tried before case-insensitive ones. Unknown
/// input is returned unchanged.
pub fn normalize_country_name(name: &str) -> &str {
    if name.is_empty() {
        return "";
    }

    if let Some(&value) = INDEX.exact.get(name) {
        tracing::trace!(input = name, output = value, "exact alias match");
        return value;
    }

    if let Some(&value) = INDEX.folded.get(name.to_lowercase().as_str()) {
        tracing::trace!(input = name, output = value, "case-insensitive alias match");
        return value;
    }

    name
}

/// Resolves an alias to the English name map datasets are keyed by.
/// Unknown input is returned unchanged.
pub fn get_standard_english_name(name: &str) -> &str {
    if name.is_empty() {
        return "";
    }

    if is_standard_english(name) {
        return name;
    }

    let normalized = normalize_country_name(name);
    if is_standard_english(normalized) {
        return normalized;
    }

    // Case-sensitive on purpose, unlike the forward lookup.
    if let Some(&key) = INDEX.reverse.get(name) {
        tracing::trace!(input = name, output = key, "reverse alias match");
        return key;
    }

    name
}
