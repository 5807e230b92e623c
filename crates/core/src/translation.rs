//! The fixed set of scripture translations.
//!
//! Sixteen short codes identify the translations the scripture database
//! carries, one text column per code. The code set is an external contract
//! and must match other implementations exactly. `BSB` is the default for
//! users with no stored preference.

use serde::{Deserialize, Serialize};
use std::str::FromStr;

/// One of the sixteen supported translation codes.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum Translation {
    #[default]
    #[serde(rename = "BSB")]
    Bsb,
    #[serde(rename = "NASB")]
    Nasb,
    #[serde(rename = "KJV")]
    Kjv,
    #[serde(rename = "NKJV")]
    Nkjv,
    #[serde(rename = "ASV")]
    Asv,
    #[serde(rename = "AKJV")]
    Akjv,
    #[serde(rename = "CPDV")]
    Cpdv,
    #[serde(rename = "DBT")]
    Dbt,
    #[serde(rename = "DRB")]
    Drb,
    #[serde(rename = "ERV")]
    Erv,
    #[serde(rename = "JPSWEY")]
    Jpswey,
    #[serde(rename = "NHEB")]
    Nheb,
    #[serde(rename = "SLT")]
    Slt,
    #[serde(rename = "WBT")]
    Wbt,
    #[serde(rename = "WEB")]
    Web,
    #[serde(rename = "YLT")]
    Ylt,
}

impl Translation {
    /// Every supported translation, in display order.
    pub const ALL: [Translation; 16] = [
        Translation::Bsb,
        Translation::Nasb,
        Translation::Kjv,
        Translation::Nkjv,
        Translation::Asv,
        Translation::Akjv,
        Translation::Cpdv,
        Translation::Dbt,
        Translation::Drb,
        Translation::Erv,
        Translation::Jpswey,
        Translation::Nheb,
        Translation::Slt,
        Translation::Wbt,
        Translation::Web,
        Translation::Ylt,
    ];

    /// The canonical short code, also the scripture-database column name.
    pub fn as_str(self) -> &'static str {
        match self {
            Translation::Bsb => "BSB",
            Translation::Nasb => "NASB",
            Translation::Kjv => "KJV",
            Translation::Nkjv => "NKJV",
            Translation::Asv => "ASV",
            Translation::Akjv => "AKJV",
            Translation::Cpdv => "CPDV",
            Translation::Dbt => "DBT",
            Translation::Drb => "DRB",
            Translation::Erv => "ERV",
            Translation::Jpswey => "JPSWEY",
            Translation::Nheb => "NHEB",
            Translation::Slt => "SLT",
            Translation::Wbt => "WBT",
            Translation::Web => "WEB",
            Translation::Ylt => "YLT",
        }
    }
}

impl FromStr for Translation {
    type Err = String;

    /// Case-insensitive parse; `"JPS/WEY"` is accepted as the display form
    /// of `JPSWEY`.
    fn from_str(s: &str) -> std::result::Result<Self, Self::Err> {
        let code = s.trim().to_ascii_uppercase();
        let code = if code == "JPS/WEY" { "JPSWEY".into() } else { code };

        Translation::ALL
            .into_iter()
            .find(|t| t.as_str() == code)
            .ok_or_else(|| format!("unknown translation code: {s}"))
    }
}

impl std::fmt::Display for Translation {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.as_str())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn all_codes_round_trip() {
        for translation in Translation::ALL {
            let parsed: Translation = translation.as_str().parse().unwrap();
            assert_eq!(parsed, translation);
        }
    }

    #[test]
    fn parse_is_case_insensitive() {
        assert_eq!("kjv".parse::<Translation>().unwrap(), Translation::Kjv);
        assert_eq!(" bsb ".parse::<Translation>().unwrap(), Translation::Bsb);
        assert_eq!("jps/wey".parse::<Translation>().unwrap(), Translation::Jpswey);
    }

    #[test]
    fn rejects_unknown_codes() {
        assert!("NIV".parse::<Translation>().is_err());
        assert!("".parse::<Translation>().is_err());
    }

    #[test]
    fn default_is_bsb() {
        assert_eq!(Translation::default(), Translation::Bsb);
    }

    #[test]
    fn serde_uses_short_codes() {
        let json = serde_json::to_string(&Translation::Nkjv).unwrap();
        assert_eq!(json, "\"NKJV\"");
        let back: Translation = serde_json::from_str("\"YLT\"").unwrap();
        assert_eq!(back, Translation::Ylt);
    }
}
