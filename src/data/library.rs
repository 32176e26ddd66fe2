// ============================================================
// Layer 4 — Built-in Reference Library
// ============================================================
// The four short science passages the demo ships with.
// Used whenever no --corpus or --docs-dir is given.

use anyhow::Result;

use crate::domain::document::Document;
use crate::domain::traits::DocumentSource;

const SOLAR_SYSTEM: &str = "The Solar System has the Sun at the center.\n\
Planets like Mercury, Venus, Earth, and Mars are inner rocky planets.\n\
Jupiter and Saturn are gas giants. Uranus and Neptune are ice giants.\n\
Moons orbit many planets. Asteroids and comets also belong to the Solar System.";

const PHOTOSYNTHESIS: &str = "Photosynthesis happens in the chloroplasts of plant cells.\n\
Plants use sunlight, carbon dioxide, and water to make glucose and oxygen.\n\
Chlorophyll captures light energy. This process is vital for life on Earth.";

const ELECTRICITY: &str = "Electric current is the flow of electrons through a conductor.\n\
Voltage is the push that drives electrons. Resistance opposes current flow.\n\
Ohm's Law connects them: V = I × R. Batteries provide a voltage difference.";

const GRAVITY: &str = "Gravity is a force that pulls objects together.\n\
The Sun's gravity keeps planets in orbit. Faster sideways speed plus gravity\n\
creates circular or elliptical paths. Satellites orbit Earth using the same idea.";

/// The static, in-process document set.
pub struct BuiltinLibrary;

impl BuiltinLibrary {
    pub fn new() -> Self {
        Self
    }

    /// The reference documents in their fixed order
    pub fn documents() -> Vec<Document> {
        vec![
            Document::new("Solar System Basics", SOLAR_SYSTEM),
            Document::new("Photosynthesis Explained", PHOTOSYNTHESIS),
            Document::new("Basic Electricity", ELECTRICITY),
            Document::new("Gravity and Orbits", GRAVITY),
        ]
    }
}

impl Default for BuiltinLibrary {
    fn default() -> Self {
        Self::new()
    }
}

impl DocumentSource for BuiltinLibrary {
    fn load_all(&self) -> Result<Vec<Document>> {
        Ok(Self::documents())
    }

    fn describe(&self) -> String {
        "built-in library".to_string()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_has_four_documents_in_order() {
        let docs   = BuiltinLibrary::new().load_all().unwrap();
        let titles: Vec<&str> = docs.iter().map(|d| d.title.as_str()).collect();
        assert_eq!(
            titles,
            vec![
                "Solar System Basics",
                "Photosynthesis Explained",
                "Basic Electricity",
                "Gravity and Orbits",
            ]
        );
    }

    #[test]
    fn test_every_document_has_at_least_two_sentences() {
        for doc in BuiltinLibrary::documents() {
            let sentences = doc.text.split('.').filter(|s| !s.trim().is_empty()).count();
            assert!(sentences >= 2, "{} has {} sentences", doc.title, sentences);
        }
    }
}
