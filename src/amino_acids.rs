use csv::ReaderBuilder;
use serde::{Deserialize, Serialize};
use std::collections::HashMap;

#[derive(Clone, Debug, Default, Serialize, Deserialize)]
pub struct AminoAcidHydrophobicity {
    pub von_heijne: f64,
    pub kyte_doolittle: f64,
}

#[derive(Clone, Debug, Default, Serialize, Deserialize)]
pub struct AminoAcid {
    pub aa: char,
    pub tla: String,
    pub name: String,
    pub hydrophobicity: AminoAcidHydrophobicity,
    #[serde(default)]
    pub molecular_weight: f64,
    #[serde(default)]
    pub isoelectric_point: f64,
}

/// Row shape of the bundled physicochemical property table.
#[derive(Debug, Deserialize)]
struct AminoAcidProperties {
    aa: char,
    molecular_weight: f64,
    isoelectric_point: f64,
}

#[derive(Clone, Debug, Default)]
pub struct AminoAcids {
    aas: HashMap<char, AminoAcid>,
}

impl AminoAcids {
    pub fn load() -> Self {
        let mut ret = Self::default();
        let data = include_str!("../assets/amino_acids.json");
        let res: serde_json::Value = serde_json::from_str(data).expect("Invalid JSON");
        let arr = res.as_array().expect("JSON is not an array");
        for row in arr {
            let aa: AminoAcid = match serde_json::from_str(&row.to_string()) {
                Ok(aa) => aa,
                Err(e) => {
                    eprintln!("Bad amino acid: {}: {e}", row);
                    continue;
                }
            };
            ret.aas.insert(aa.aa, aa);
        }
        ret.load_properties();
        ret
    }

    fn load_properties(&mut self) {
        let data = include_str!("../assets/aa_properties.csv");
        let mut rdr = ReaderBuilder::new()
            .has_headers(true)
            .from_reader(data.as_bytes());
        for result in rdr.deserialize() {
            let props: AminoAcidProperties = match result {
                Ok(props) => props,
                Err(e) => {
                    eprintln!("Bad amino acid property row: {e}");
                    continue;
                }
            };
            if let Some(aa) = self.aas.get_mut(&props.aa) {
                aa.molecular_weight = props.molecular_weight;
                aa.isoelectric_point = props.isoelectric_point;
            }
        }
    }

    #[inline(always)]
    pub fn get(&self, aa: char) -> Option<&AminoAcid> {
        self.aas.get(&aa)
    }

    pub fn from_three_letter(&self, tla: &str) -> Option<&AminoAcid> {
        self.aas
            .values()
            .find(|aa| aa.tla.eq_ignore_ascii_case(tla))
    }

    /// Von Heijne hydrophobicity, the scale the membrane predictor uses.
    #[inline(always)]
    pub fn von_heijne(&self, aa: char) -> Option<f64> {
        self.get(aa).map(|a| a.hydrophobicity.von_heijne)
    }

    pub fn len(&self) -> usize {
        self.aas.len()
    }

    pub fn is_empty(&self) -> bool {
        self.aas.is_empty()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_load_table() {
        let aas = AminoAcids::load();
        assert_eq!(aas.len(), 20);
        assert_eq!(aas.get('C').unwrap().tla, "Cys");
        assert_eq!(aas.get('K').unwrap().hydrophobicity.von_heijne, -2.996);
        assert_eq!(aas.get('I').unwrap().hydrophobicity.kyte_doolittle, 4.5);
    }

    #[test]
    fn test_csv_properties_merged() {
        let aas = AminoAcids::load();
        assert_eq!(aas.get('G').unwrap().molecular_weight, 75.07);
        assert_eq!(aas.get('R').unwrap().isoelectric_point, 10.76);
    }

    #[test]
    fn test_from_three_letter() {
        let aas = AminoAcids::load();
        assert_eq!(aas.from_three_letter("Met").unwrap().aa, 'M');
        assert_eq!(aas.from_three_letter("trp").unwrap().aa, 'W');
        assert!(aas.from_three_letter("Xyz").is_none());
    }
}
