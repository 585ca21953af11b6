//! Country-name normalization between English names, Chinese names and short
//! codes, for reconciling data sources against map datasets keyed by English
//! country names.
//!
//! ```
//! use countrynorm::{get_standard_english_name, normalize_country_name};
//!
//! assert_eq!(normalize_country_name("Japan"), "日本");
//! assert_eq!(normalize_country_name("us"), "United States");
//! assert_eq!(get_standard_english_name("中国"), "China");
//! assert_eq!(get_standard_english_name("Atlantis"), "Atlantis");
//! ```

pub mod mapping;

pub use mapping::country::{Country, UnknownCountry};
pub use mapping::{
    country_mapping, english_countries, get_standard_english_name, is_standard_english,
    normalize_country_name,
};
