// ============================================================================
// Structure : HistoricalPlayerRecords
// ============================================================================
// Document historical_players.json : effectifs par saison (export Excel)
//
// Les clés viennent directement des en-têtes du tableur ("Saison",
// "1.Mannschaft", ...), d'où les #[serde(rename)].
// ============================================================================

use serde::{Deserialize, Serialize};

use crate::models::defaults::{non_empty_string, null_as_default};

/// Une ligne du tableau historique
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct SeasonRecord {
    #[serde(rename = "Saison", default, deserialize_with = "null_as_default")]
    pub season: String,

    /// Classe / ligue de la première équipe (ex: "Kreisklasse")
    #[serde(rename = "Klasse", default, deserialize_with = "non_empty_string")]
    pub league: Option<String>,

    #[serde(rename = "1.Mannschaft", default, deserialize_with = "null_as_default")]
    pub first_team: f64,

    #[serde(rename = "2.Mannschaft", default, deserialize_with = "null_as_default")]
    pub second_team: f64,

    #[serde(rename = "A-Jugend", default, deserialize_with = "null_as_default")]
    pub youth: f64,

    /// Nombre total de joueurs de la saison
    #[serde(rename = "Spieler", default, deserialize_with = "null_as_default")]
    pub total_players: f64,
}

impl SeasonRecord {
    /// Label de l'axe X : "Saison (Klasse)" ou "Saison" seule
    pub fn label(&self) -> String {
        match &self.league {
            Some(league) => format!("{} ({})", self.season, league),
            None => self.season.clone(),
        }
    }
}

/// Document complet : lignes ordonnées par saison
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct HistoricalPlayerRecords {
    #[serde(default, deserialize_with = "null_as_default")]
    pub data: Vec<SeasonRecord>,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_parse_rows_with_missing_counts() {
        let json = r#"{"data": [
            {"Saison": "2015/16", "Klasse": "A-Klasse", "1.Mannschaft": 22, "2.Mannschaft": 18,
             "A-Jugend": 15, "Spieler": 55},
            {"Saison": "2016/17", "1.Mannschaft": 20.0, "A-Jugend": null}
        ]}"#;
        let records: HistoricalPlayerRecords = serde_json::from_str(json).unwrap();

        assert_eq!(records.data.len(), 2);
        assert_eq!(records.data[0].label(), "2015/16 (A-Klasse)");
        assert_eq!(records.data[1].label(), "2016/17");
        assert_eq!(records.data[1].second_team, 0.0);
        assert_eq!(records.data[1].youth, 0.0);
        assert_eq!(records.data[1].total_players, 0.0);
    }
}
