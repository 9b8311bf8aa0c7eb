use crossword_core::{Entry, EntryError};
use serde::Deserialize;
use std::path::Path;

/// Built-in puzzle definition: "Una Sola Salud" (One Health) themed clues.
pub const RAW_ENTRIES: &[(&str, &str)] = &[
    ("Organismo mexicano encargado de proteger los recursos agrícolas, acuícolas y pecuarios contra plagas y enfermedades de importancia cuarentenaria.", "SENASICA"),
    ("Organismo internacional que da seguimiento al desarrollo de enfermedades animales terrestres y acuáticas para proteger la sanidad animal.", "WOAH"),
    ("Clasificación de zoonosis en la cual el patógeno necesita un huésped vertebrado y un reservorio inanimado (comida, suelo, planta) para completar su ciclo de vida.", "SAPROZOONOSIS"),
    ("Clasificación de zoonosis en la que el patógeno puede transmitirse en ambas direcciones: animal-humano y humano-animal.", "ANFIXENOSIS"),
    ("Concepto que reconoce la interconexión entre salud humana, salud animal y medio ambiente.", "UNA SOLA SALUD"),
    ("Biólogo alemán con ideología parecida al concepto de Una Sola Salud.", "VIRCHOW"),
    ("Zoonosis en la que el agente se transmite de animal a humano (ejemplo: rabia).", "ANTROPOZOONOSIS"),
    ("Enfermedades que los animales pueden transmitir a los humanos (más de 200 tipos).", "ZOONOSIS"),
    ("Se requiere una dosis mínima para generar una infección en el paciente.", "AGENTE"),
    ("Estado en que el animal o ser humano se encuentra en equilibrio fisiológico a nivel celular, tejido, órgano y sistema.", "SALUD"),
    ("Pérdida parcial o total del equilibrio fisiológico que produce signos.", "ENFERMEDAD"),
    ("Estado físico y mental de un animal en relación con las condiciones en las que vive y muere.", "BIENESTAR ANIMAL"),
    ("Comportamiento de los animales en su entorno natural que brinda información útil sobre el bienestar animal.", "ETIOLOGÍA"),
    ("Interacción entre agente, huésped y ambiente en la aparición de enfermedades.", "TRIADA EPIDEMIOLÓGICA"),
    ("Secuencia de eventos que describe cómo se propaga un patógeno.", "CADENA EPIDEMIOLÓGICA"),
    ("Ciencia encargada de estudiar las relaciones entre los organismos vivos y su entorno.", "ECOLOGÍA"),
    ("Amenaza global para casi todos los sistemas biológicos por cambios en temperatura, precipitaciones, humedad, calidad del aire y agua.", "CAMBIO CLIMÁTICO"),
    ("Reducción y aislamiento de un hábitat natural continuo en fragmentos más pequeños, con pérdida de biodiversidad y conflictos humano-fauna.", "FRAGMENTACIÓN DEL HÁBITAT"),
];

/// The built-in entry list
pub fn builtin_entries() -> Vec<Entry> {
    Entry::from_pairs(RAW_ENTRIES.iter().copied()).expect("built-in answers are well formed")
}

/// Errors loading an entries file
#[derive(Debug)]
pub enum EntriesFileError {
    Io(std::io::Error),
    Parse(serde_json::Error),
    Entry(EntryError),
}

impl std::fmt::Display for EntriesFileError {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::Io(e) => write!(f, "Cannot read entries file: {}", e),
            Self::Parse(e) => write!(f, "Cannot parse entries file: {}", e),
            Self::Entry(e) => write!(f, "Bad entry: {}", e),
        }
    }
}

impl std::error::Error for EntriesFileError {}

#[derive(Deserialize)]
struct RawEntry {
    clue: String,
    answer: String,
}

/// Load entries from a JSON file of `[{"clue": ..., "answer": ...}]`
pub fn load_entries_file(path: &Path) -> Result<Vec<Entry>, EntriesFileError> {
    let json = std::fs::read_to_string(path).map_err(EntriesFileError::Io)?;
    let raw: Vec<RawEntry> = serde_json::from_str(&json).map_err(EntriesFileError::Parse)?;
    raw.iter()
        .map(|e| Entry::new(&e.clue, &e.answer).map_err(EntriesFileError::Entry))
        .collect()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_builtin_entries_are_well_formed() {
        let entries = builtin_entries();
        assert_eq!(entries.len(), RAW_ENTRIES.len());
        for entry in &entries {
            assert!(!entry.answer_normalized.is_empty());
            assert!(entry
                .answer_normalized
                .chars()
                .all(|ch| ch.is_ascii_uppercase()));
        }
    }

    #[test]
    fn test_builtin_entries_fit_default_grid() {
        let longest = builtin_entries()
            .iter()
            .map(|e| e.len())
            .max()
            .unwrap();
        assert!(longest <= crossword_core::DEFAULT_GRID_SIZE);
    }
}
