pub mod prefs;
pub mod resolve;
pub mod verse;
