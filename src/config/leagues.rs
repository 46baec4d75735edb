// src/config/leagues.rs
//
// Fixed competition catalog. Built once, read-only afterwards.

use std::collections::BTreeMap;
use std::sync::OnceLock;

use crate::model::League;

/// (id, country, name)
const LEAGUES: &[(u32, &str, &str)] = &[
    (13, "England", "Premier League"),
    (16, "France", "Ligue 1"),
    (19, "Germany", "Bundesliga"),
    (31, "Italy", "Serie A"),
    (53, "Spain", "La Liga"),
    (4, "Belgium", "Pro League"),
    (7, "Brazil", "Série A"),
    (10, "Netherlands", "Eredivisie"),
    (14, "England", "Championship"),
    (17, "France", "Ligue 2"),
    (20, "Germany", "2. Bundesliga"),
    (32, "Italy", "Serie B"),
    (39, "United States", "Major League Soccer"),
    (41, "Norway", "Eliteserien"),
    (50, "Scotland", "Premiership"),
    (54, "Spain", "La Liga 2"),
    (56, "Sweden", "Allsvenskan"),
    (60, "England", "League One"),
    (61, "England", "League Two"),
    (63, "Greece", "Super League"),
    (64, "Hungary", "Nemzeti Bajnokság I"),
    (65, "Republic of Ireland", "Premier Division"),
    (66, "Poland", "Ekstraklasa"),
    (68, "Türkiye", "Süper Lig"),
    (80, "Austria", "Bundesliga"),
    (83, "Korea Republic", "K League 1"),
    (189, "Switzerland", "Super League"),
    (308, "Portugal", "Primeira Liga"),
    (313, "Azerbaijan", "Premyer Liqa"),
    (317, "Croatia", "Hrvatska nogometna liga"),
    (318, "Cyprus", "1. Division"),
    (319, "Czechia", "První liga"),
    (322, "Finland", "Veikkausliiga"),
    (330, "Romania", "Liga I"),
    (332, "Ukraine", "Premier League"),
    (335, "Chile", "Primera Division"),
    (336, "Colombia", "Categoría Primera A"),
    (337, "Paraguay", "División Profesional"),
    (338, "Uruguay", "Primera División"),
    (350, "Saudi Arabia", "Pro League"),
    (351, "Australia", "A-League Men"),
    (353, "Argentina", "Liga Profesional de Fútbol"),
    (2012, "China PR", "Super League"),
    (2013, "United Arab Emirates", "Pro League"),
    (2017, "Bolivia", "División de Fútbol Profesional"),
    (2018, "Ecuador", "Serie A"),
    (2019, "Venezuela", "Primera Division"),
    (2020, "Peru", "Liga 1"),
    (2076, "Germany", "3. Liga"),
    (2149, "India", "Super League"),
];

/// Read-only id → League lookup.
#[derive(Clone, Debug, Default)]
pub struct LeagueCatalog {
    by_id: BTreeMap<u32, League>,
}

impl LeagueCatalog {
    pub fn new(leagues: impl IntoIterator<Item = League>) -> Self {
        Self { by_id: leagues.into_iter().map(|l| (l.id, l)).collect() }
    }

    pub fn get(&self, id: u32) -> Option<&League> {
        self.by_id.get(&id)
    }

    pub fn contains(&self, id: u32) -> bool {
        self.by_id.contains_key(&id)
    }

    /// Sorted by id.
    pub fn ids(&self) -> impl Iterator<Item = u32> + '_ {
        self.by_id.keys().copied()
    }

    pub fn iter(&self) -> impl Iterator<Item = &League> {
        self.by_id.values()
    }

    pub fn len(&self) -> usize { self.by_id.len() }
    pub fn is_empty(&self) -> bool { self.by_id.is_empty() }
}

/// The built-in catalog, built on first use.
pub fn catalog() -> &'static LeagueCatalog {
    static CATALOG: OnceLock<LeagueCatalog> = OnceLock::new();
    CATALOG.get_or_init(|| {
        LeagueCatalog::new(LEAGUES.iter().map(|&(id, country, name)| League {
            id,
            country: s!(country),
            name: s!(name),
        }))
    })
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn builtin_catalog_lookup() {
        let c = catalog();
        assert_eq!(c.len(), 50);
        let pl = c.get(13).unwrap();
        assert_eq!(pl.name, "Premier League");
        assert_eq!(pl.country, "England");
        assert_eq!(c.get(68).map(|l| l.display()).as_deref(), Some("Süper Lig (Türkiye)"));
        assert!(c.get(9999).is_none());
    }

    #[test]
    fn ids_are_sorted() {
        let ids: Vec<u32> = catalog().ids().take(3).collect();
        assert_eq!(ids, vec![4, 7, 10]);
    }
}
