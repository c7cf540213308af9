//! Built-in ceremonies of the Rectitude.

use std::collections::BTreeMap;

use tracing::{debug, warn};

use crate::events::Position;

/// Ceremonies, special days and historical dates shipped with the calendar.
///
/// Several keys appear twice. Later definitions replace earlier ones, so the
/// "special dates" at the end of the recurring block take precedence over the
/// ceremonies on 10 Laboris, 20 Fortium and 30 Decorum.
const RECTITUDE_CEREMONIES: &[(&str, &str)] = &[
    ("15 Ordium", "Cérémonie de la Fondation"),
    ("25 Fervor", "Rite de la Fraternité"),
    ("5 Laboris", "Cérémonie des Mains du Travail"),
    ("10 Laboris", "Rituel de la Diligence"),
    ("15 Prudium", "Rituel de la Vigilance"),
    ("18 Valoris", "Honneur aux Méritants"),
    ("28 Constium", "Serment de l’Éternelle Fidélité"),
    ("5 Septium", "Marche de la Dévotion"),
    ("14 Septium", "Jour de la Perfection"),
    ("15 Septium", "Anniversaire du Premier Prototype Homo Mecanicus"),
    ("18 Servium", "Fête du Service"),
    ("20 Fortium", "Fête de la Résilience"),
    ("12 Fortium", "Épreuves de Résilience"),
    ("10 Decorum", "Semaine de la Rectitude"),
    ("15 Decorum", "Rites de la Perfection Esthétique"),
    ("30 Decorum", "Cérémonie du Serment de Pureté"),
    ("10 Rectium", "Cérémonie des Légataires"),
    ("15 Rectium", "Apparition des enfants hybrides"),
    ("20 Finalis", "Rite de la Purification"),
    ("25 Finalis", "Veillée de la Pureté"),
    ("30 Finalis", "La Veillée du Recueillement"),
    ("1 Jours du Silence", "L'Apurement"),
    ("2 Jours du Silence", "Les Jours de la Conformité"),
    ("3 Jours du Silence", "La Récitation de la Rectitude"),
    ("4 Jours du Silence", "Le Jour du Réveil"),
    (
        "5 Jours du Silence",
        "Le Grand Appurement (année bissextile uniquement)",
    ),
    ("10 Laboris", "100e jour de l'année"),
    ("20 Fortium", "200e jour de l'année"),
    ("30 Decorum", "300e jour de l'année"),
    (
        "1 Ordium, An 0",
        "Création officielle de la Rectitude (1er janvier 1972)",
    ),
    (
        "8 Fervor, An 20",
        "Commémoration de la Première Rébellion Contrôlée (8 février 1992)",
    ),
    (
        "15 Septium, An 42",
        "Premier prototype Homo Mecanicus (15 juillet 2014)",
    ),
    (
        "15 Rectium, An 45",
        "Naissance des enfants hybrides (15 novembre 2017)",
    ),
];

/// Read-only table of built-in events keyed by position.
///
/// A catalog is built once and handed to every [`EventStore`](crate::events::EventStore)
/// by reference; nothing in the crate mutates it afterwards.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct CeremonyCatalog {
    entries: BTreeMap<Position, String>,
}

impl CeremonyCatalog {
    /// Builds a catalog from `(position, label)` pairs.
    ///
    /// When a position occurs more than once, the last label wins.
    pub fn from_entries<I, S>(entries: I) -> Self
    where
        I: IntoIterator<Item = (Position, S)>,
        S: Into<String>,
    {
        let mut map = BTreeMap::new();
        for (position, label) in entries {
            let label = label.into();
            if let Some(previous) = map.insert(position, label) {
                debug!(%position, %previous, "built-in event redefined, keeping later label");
            }
        }
        Self { entries: map }
    }

    /// The ceremonies of the Rectitude.
    pub fn rectitude() -> Self {
        let entries = RECTITUDE_CEREMONIES.iter().filter_map(|(key, label)| {
            match key.parse::<Position>() {
                Ok(position) => Some((position, *label)),
                Err(e) => {
                    warn!(key, error = %e, "skipping malformed built-in ceremony");
                    None
                }
            }
        });
        Self::from_entries(entries)
    }

    pub fn get(&self, position: &Position) -> Option<&str> {
        self.entries.get(position).map(String::as_str)
    }

    /// Entries in position order.
    pub fn iter(&self) -> impl Iterator<Item = (&Position, &str)> {
        self.entries.iter().map(|(p, l)| (p, l.as_str()))
    }

    pub fn len(&self) -> usize {
        self.entries.len()
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }
}
