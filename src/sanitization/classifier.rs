//! Field-name classifier for PII and KVKK special categories
//!
//! Classification looks only at the field *name*: a field is sensitive when
//! its lowercased name contains any marker. Matching is deliberately
//! permissive; `tcKimlikNo`, `veliTelefon` and `aylikGelir` all match.

use crate::config::ClassifierConfig;
use serde::{Deserialize, Serialize};

/// Built-in PII markers (identity numbers, phone, email, address, birth data,
/// parent names)
pub const PII_MARKERS: &[&str] = &[
    "tcno",
    "tckimlik",
    "kimlikno",
    "identity",
    "telefon",
    "phone",
    "gsm",
    "email",
    "eposta",
    "e-posta",
    "adres",
    "address",
    "dogum",
    "doğum",
    "birth",
    "annead",
    "babaad",
    "mothername",
    "fathername",
];

/// Built-in KVKK special-category markers (health, disability, income, debt)
pub const KVKK_MARKERS: &[&str] = &[
    "saglik",
    "sağlık",
    "health",
    "engel",
    "disability",
    "gelir",
    "income",
    "borc",
    "borç",
    "debt",
];

/// Classification of a single field name
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum FieldClass {
    /// Not sensitive
    Ordinary,
    /// Personally identifying
    Pii,
    /// KVKK special category
    Kvkk,
}

impl FieldClass {
    /// Both PII and KVKK fields are masked identically
    pub fn is_sensitive(&self) -> bool {
        !matches!(self, Self::Ordinary)
    }
}

/// Marker-table classifier
///
/// # Examples
///
/// ```
/// use belediye_export::sanitization::{FieldClass, FieldClassifier};
///
/// let classifier = FieldClassifier::new();
/// assert_eq!(classifier.classify("tcNo"), FieldClass::Pii);
/// assert_eq!(classifier.classify("aylikGelir"), FieldClass::Kvkk);
/// assert_eq!(classifier.classify("ad"), FieldClass::Ordinary);
/// ```
#[derive(Debug, Clone)]
pub struct FieldClassifier {
    pii_markers: Vec<String>,
    kvkk_markers: Vec<String>,
}

impl FieldClassifier {
    /// Classifier with the built-in vocabulary
    pub fn new() -> Self {
        Self {
            pii_markers: PII_MARKERS.iter().map(|m| m.to_string()).collect(),
            kvkk_markers: KVKK_MARKERS.iter().map(|m| m.to_string()).collect(),
        }
    }

    /// Built-in vocabulary extended with configured markers
    pub fn from_config(config: &ClassifierConfig) -> Self {
        let mut classifier = Self::new();
        classifier.extend_pii(config.extra_pii_markers.iter().map(String::as_str));
        classifier.extend_kvkk(config.extra_kvkk_markers.iter().map(String::as_str));
        classifier
    }

    /// Add PII markers; they are stored lowercased
    pub fn extend_pii<'a>(&mut self, markers: impl IntoIterator<Item = &'a str>) {
        push_markers(&mut self.pii_markers, markers);
    }

    /// Add KVKK markers; they are stored lowercased
    pub fn extend_kvkk<'a>(&mut self, markers: impl IntoIterator<Item = &'a str>) {
        push_markers(&mut self.kvkk_markers, markers);
    }

    /// Classify a field name
    ///
    /// PII wins when a name matches both tables; the distinction has no
    /// effect on masking.
    pub fn classify(&self, field_name: &str) -> FieldClass {
        let lowered = field_name.to_lowercase();
        if self.pii_markers.iter().any(|m| lowered.contains(m.as_str())) {
            FieldClass::Pii
        } else if self.kvkk_markers.iter().any(|m| lowered.contains(m.as_str())) {
            FieldClass::Kvkk
        } else {
            FieldClass::Ordinary
        }
    }

    pub fn is_sensitive(&self, field_name: &str) -> bool {
        self.classify(field_name).is_sensitive()
    }
}

impl Default for FieldClassifier {
    fn default() -> Self {
        Self::new()
    }
}

fn push_markers<'a>(target: &mut Vec<String>, markers: impl IntoIterator<Item = &'a str>) {
    for marker in markers {
        let marker = marker.trim().to_lowercase();
        if !marker.is_empty() && !target.contains(&marker) {
            target.push(marker);
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use test_case::test_case;

    #[test_case("tcNo" => FieldClass::Pii)]
    #[test_case("TCKimlikNo" => FieldClass::Pii)]
    #[test_case("veliTelefon" => FieldClass::Pii)]
    #[test_case("email" => FieldClass::Pii)]
    #[test_case("ePosta" => FieldClass::Pii)]
    #[test_case("ikametAdresi" => FieldClass::Pii)]
    #[test_case("dogumTarihi" => FieldClass::Pii)]
    #[test_case("anneAdi" => FieldClass::Pii)]
    #[test_case("babaAdi" => FieldClass::Pii)]
    #[test_case("saglikDurumu" => FieldClass::Kvkk)]
    #[test_case("engelOrani" => FieldClass::Kvkk)]
    #[test_case("aylikGelir" => FieldClass::Kvkk)]
    #[test_case("borcTutari" => FieldClass::Kvkk)]
    #[test_case("ad" => FieldClass::Ordinary)]
    #[test_case("soyad" => FieldClass::Ordinary)]
    #[test_case("basvuruNo" => FieldClass::Ordinary)]
    #[test_case("" => FieldClass::Ordinary)]
    fn test_classify(field: &str) -> FieldClass {
        FieldClassifier::new().classify(field)
    }

    #[test]
    fn test_builtin_tables_are_disjoint() {
        for marker in PII_MARKERS {
            assert!(!KVKK_MARKERS.contains(marker), "{marker} in both tables");
        }
    }

    #[test]
    fn test_builtin_markers_are_lowercase() {
        for marker in PII_MARKERS.iter().chain(KVKK_MARKERS.iter()) {
            assert_eq!(marker.to_lowercase(), *marker);
        }
    }

    #[test]
    fn test_from_config_extends_vocabulary() {
        let config = ClassifierConfig {
            extra_pii_markers: vec!["Plaka".to_string()],
            extra_kvkk_markers: vec!["sabika".to_string()],
        };
        let classifier = FieldClassifier::from_config(&config);
        assert_eq!(classifier.classify("aracPlakasi"), FieldClass::Pii);
        assert_eq!(classifier.classify("sabikaKaydi"), FieldClass::Kvkk);
        assert_eq!(classifier.classify("tcNo"), FieldClass::Pii);
    }

    #[test]
    fn test_sensitivity() {
        assert!(!FieldClass::Ordinary.is_sensitive());
        assert!(FieldClass::Pii.is_sensitive());
        assert!(FieldClass::Kvkk.is_sensitive());
    }
}
