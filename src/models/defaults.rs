// ============================================================================
// Valeurs par défaut à la frontière de chargement
// ============================================================================
// Les documents JSON sont produits par un pipeline pandas : un champ peut
// manquer, valoir null, ou contenir des null au milieu d'une série (NaN).
// Tout est résolu ici, une seule fois, pendant la désérialisation.
//
// CONCEPT RUST : deserialize_with
// - #[serde(default)] gère un champ absent
// - deserialize_with gère un champ présent mais null
// - Les deux ensemble : absent ou null -> Default::default()
// ============================================================================

use serde::{Deserialize, Deserializer};

/// Champ absent ou null -> valeur par défaut du type (0, "", vec![])
pub(crate) fn null_as_default<'de, D, T>(deserializer: D) -> Result<T, D::Error>
where
    D: Deserializer<'de>,
    T: Default + Deserialize<'de>,
{
    Ok(Option::<T>::deserialize(deserializer)?.unwrap_or_default())
}

/// Série numérique : null -> série vide, élément null -> 0
pub(crate) fn lenient_numbers<'de, D>(deserializer: D) -> Result<Vec<f64>, D::Error>
where
    D: Deserializer<'de>,
{
    let values = Option::<Vec<Option<f64>>>::deserialize(deserializer)?.unwrap_or_default();
    Ok(values.into_iter().map(|v| v.unwrap_or(0.0)).collect())
}

/// Série optionnelle : absente ou null -> None, éléments null -> 0
pub(crate) fn optional_numbers<'de, D>(deserializer: D) -> Result<Option<Vec<f64>>, D::Error>
where
    D: Deserializer<'de>,
{
    let values = Option::<Vec<Option<f64>>>::deserialize(deserializer)?;
    Ok(values.map(|v| v.into_iter().map(|x| x.unwrap_or(0.0)).collect()))
}

/// Série de labels : null -> série vide, élément null -> ""
pub(crate) fn lenient_strings<'de, D>(deserializer: D) -> Result<Vec<String>, D::Error>
where
    D: Deserializer<'de>,
{
    let values = Option::<Vec<Option<String>>>::deserialize(deserializer)?.unwrap_or_default();
    Ok(values.into_iter().map(Option::unwrap_or_default).collect())
}

/// Texte optionnel : absent, null ou vide -> None
pub(crate) fn non_empty_string<'de, D>(deserializer: D) -> Result<Option<String>, D::Error>
where
    D: Deserializer<'de>,
{
    let value = Option::<String>::deserialize(deserializer)?;
    Ok(value.filter(|s| !s.trim().is_empty()))
}

/// Tronque des séries parallèles à la longueur de la plus courte
///
/// Retourne la longueur commune. Les séries qui partagent un index doivent
/// avoir la même longueur ; un document incohérent est ramené au préfixe
/// commun plutôt que rejeté.
pub(crate) fn align_lengths(lengths: &[usize]) -> usize {
    lengths.iter().copied().min().unwrap_or(0)
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde::Deserialize;

    #[derive(Debug, Deserialize)]
    struct Probe {
        #[serde(default, deserialize_with = "null_as_default")]
        count: u32,
        #[serde(default, deserialize_with = "lenient_numbers")]
        values: Vec<f64>,
        #[serde(default, deserialize_with = "optional_numbers")]
        extra: Option<Vec<f64>>,
        #[serde(default, deserialize_with = "lenient_strings")]
        labels: Vec<String>,
        #[serde(default, deserialize_with = "non_empty_string")]
        class: Option<String>,
    }

    #[test]
    fn test_absent_fields_default() {
        let probe: Probe = serde_json::from_str("{}").unwrap();
        assert_eq!(probe.count, 0);
        assert!(probe.values.is_empty());
        assert!(probe.extra.is_none());
        assert!(probe.labels.is_empty());
        assert!(probe.class.is_none());
    }

    #[test]
    fn test_null_fields_default() {
        let json = r#"{"count": null, "values": [1.5, null, 2], "extra": null,
                       "labels": ["a", null], "class": ""}"#;
        let probe: Probe = serde_json::from_str(json).unwrap();
        assert_eq!(probe.count, 0);
        assert_eq!(probe.values, vec![1.5, 0.0, 2.0]);
        assert!(probe.extra.is_none());
        assert_eq!(probe.labels, vec!["a".to_string(), String::new()]);
        assert!(probe.class.is_none());
    }

    #[test]
    fn test_align_lengths() {
        assert_eq!(align_lengths(&[3, 5, 4]), 3);
        assert_eq!(align_lengths(&[]), 0);
    }
}
