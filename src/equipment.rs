//! Equipment catalog and achievement rewards.
//!
//! Contains the equipment the game can award, the achievement-to-equipment
//! mapping, and the stat-bonus folding over a character's equipment list.

use crate::character::{Character, StatKind, Stats};

/// A piece of equipment a character can earn.
#[derive(Debug, Clone)]
pub struct EquipmentItem {
    /// Stable identifier stored on the character.
    pub id: String,
    /// Display name.
    pub name: String,
    /// Stat bonuses this item contributes while owned.
    pub bonuses: Vec<(StatKind, u32)>,
}

impl EquipmentItem {
    pub fn new(id: impl Into<String>, name: impl Into<String>) -> Self {
        Self {
            id: id.into(),
            name: name.into(),
            bonuses: Vec::new(),
        }
    }

    pub fn with_bonus(mut self, kind: StatKind, amount: u32) -> Self {
        self.bonuses.push((kind, amount));
        self
    }
}

lazy_static::lazy_static! {
    /// Every piece of equipment the game can award.
    pub static ref EQUIPMENT: Vec<EquipmentItem> = vec![
        EquipmentItem::new("warrior_sword", "Warrior's Sword")
            .with_bonus(StatKind::Health, 5)
            .with_bonus(StatKind::Discipline, 3),
        EquipmentItem::new("leather_armor", "Leather Armor")
            .with_bonus(StatKind::Health, 3)
            .with_bonus(StatKind::Discipline, 2),
        EquipmentItem::new("scholar_tome", "Scholar's Tome")
            .with_bonus(StatKind::Wisdom, 5)
            .with_bonus(StatKind::Focus, 3),
        EquipmentItem::new("artist_brush", "Artist's Brush")
            .with_bonus(StatKind::Creativity, 5)
            .with_bonus(StatKind::Wisdom, 2),
        EquipmentItem::new("explorer_compass", "Explorer's Compass")
            .with_bonus(StatKind::Social, 4)
            .with_bonus(StatKind::Focus, 2),
        EquipmentItem::new("sage_staff", "Sage's Staff")
            .with_bonus(StatKind::Wisdom, 4)
            .with_bonus(StatKind::Discipline, 3),
        // Fallback award for unrecognized achievements; no bonuses.
        EquipmentItem::new("basic_equipment", "Basic Equipment"),
    ];
}

/// Look up an equipment item by id.
pub fn find_equipment(id: &str) -> Option<EquipmentItem> {
    let id_lower = id.to_lowercase();
    EQUIPMENT.iter().find(|e| e.id == id_lower).cloned()
}

/// Map an achievement to the equipment it awards.
///
/// Unknown achievement keys award generic basic equipment rather than
/// failing. Appending the returned id to the character's equipment list is
/// the caller's responsibility.
pub fn equipment_for_achievement(achievement: &str) -> &'static str {
    match achievement {
        "strength_mastery" => "warrior_sword",
        "wisdom_seeker" => "scholar_tome",
        "creative_soul" => "artist_brush",
        "social_butterfly" => "explorer_compass",
        "inner_peace" => "sage_staff",
        _ => "basic_equipment",
    }
}

/// Fold the catalog's bonuses over an equipment list.
///
/// Unknown ids contribute nothing; every channel starts at zero.
pub fn bonuses_for(equipment: &[String]) -> Stats {
    let mut bonuses = Stats::default();
    for id in equipment {
        if let Some(item) = find_equipment(id) {
            for (kind, amount) in &item.bonuses {
                bonuses.add(*kind, *amount);
            }
        }
    }
    bonuses
}

impl Character {
    /// Total stat bonuses from this character's equipment.
    pub fn equipment_bonuses(&self) -> Stats {
        bonuses_for(&self.equipment)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::character::CharacterClass;

    #[test]
    fn test_catalog_lookup() {
        let sword = find_equipment("warrior_sword").unwrap();
        assert_eq!(sword.name, "Warrior's Sword");
        assert!(find_equipment("WARRIOR_SWORD").is_some());
        assert!(find_equipment("excalibur").is_none());
    }

    #[test]
    fn test_achievement_awards() {
        assert_eq!(equipment_for_achievement("strength_mastery"), "warrior_sword");
        assert_eq!(equipment_for_achievement("inner_peace"), "sage_staff");
        assert_eq!(equipment_for_achievement("unknown_feat"), "basic_equipment");
    }

    #[test]
    fn test_bonus_folding() {
        let mut character = Character::new("Test Hero", CharacterClass::Warrior);
        character.equipment = vec!["warrior_sword".to_string(), "leather_armor".to_string()];

        let bonuses = character.equipment_bonuses();
        assert_eq!(bonuses.health, 8);
        assert_eq!(bonuses.discipline, 5);
        assert_eq!(bonuses.focus, 0);
        assert_eq!(bonuses.creativity, 0);
        assert_eq!(bonuses.social, 0);
        assert_eq!(bonuses.wisdom, 0);
    }

    #[test]
    fn test_unknown_equipment_contributes_nothing() {
        let bonuses = bonuses_for(&["mystery_box".to_string()]);
        assert_eq!(bonuses, Stats::default());
    }

    #[test]
    fn test_basic_equipment_has_no_bonuses() {
        let item = find_equipment("basic_equipment").unwrap();
        assert!(item.bonuses.is_empty());
    }
}
