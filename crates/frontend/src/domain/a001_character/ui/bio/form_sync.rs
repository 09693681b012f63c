use contracts::domain::a001_character::{
    CharacterRecord, CharacterUpdate, ContactDto, EnemyDto, EnemyPart, SaveAck, SheetSide,
    FIELD_MAP,
};
use contracts::enums::ContactType;

use super::model::CharacterStore;
use crate::routes::fragment::Fragment;
use crate::shared::dom::FieldSurface;

/// Gather the edit form into one save payload.
///
/// Only scalars whose control exists are staged, so a fragment without a
/// control leaves the stored column alone. Contact slots with a blank name
/// are left out.
pub fn collect_update(surface: &impl FieldSurface) -> CharacterUpdate {
    let side = SheetSide::Edit;
    let mut update = CharacterUpdate::default();

    for descriptor in FIELD_MAP {
        if let Some(value) = surface.read(descriptor.element_id(side)) {
            update.stage(descriptor, value);
        }
    }

    update.contacts.friends = collect_named(surface, ContactType::Friend);
    update.contacts.loves = collect_named(surface, ContactType::Love);

    for slot in 1..=ContactType::Enemy.slot_count() {
        let part = |p: EnemyPart| {
            surface
                .read(&side.enemy_id(slot, p))
                .map(|v| v.trim().to_string())
                .unwrap_or_default()
        };
        let who = part(EnemyPart::Who);
        if who.is_empty() {
            continue;
        }
        update.contacts.enemies.push(EnemyDto {
            name: who.clone(),
            who_wronged: who,
            what_caused: part(EnemyPart::Caused),
            what_throw_down: part(EnemyPart::Throw),
            what_happened: part(EnemyPart::Happen),
            notes: String::new(),
        });
    }

    update.critical_injuries = surface
        .read(&side.critical_injuries_id())
        .unwrap_or_default();
    update.addictions = surface.read(&side.addictions_id()).unwrap_or_default();
    update
}

fn collect_named(surface: &impl FieldSurface, kind: ContactType) -> Vec<ContactDto> {
    (1..=kind.slot_count())
        .filter_map(|slot| surface.read(&SheetSide::Edit.contact_id(kind, slot)))
        .map(|name| name.trim().to_string())
        .filter(|name| !name.is_empty())
        .map(ContactDto::named)
        .collect()
}

/// Write a loaded record into one side of the sheet.
///
/// Contacts fill slots from 1 upward and never clear the remaining ones.
/// Text blocks are only touched when something is stored.
pub fn apply_record(surface: &impl FieldSurface, record: &CharacterRecord, side: SheetSide) {
    for descriptor in FIELD_MAP {
        surface.write(descriptor.element_id(side), &record.value_of(descriptor));
    }

    for (index, friend) in record.contacts.friends.iter().enumerate() {
        surface.write(&side.contact_id(ContactType::Friend, index + 1), &friend.name);
    }
    for (index, love) in record.contacts.loves.iter().enumerate() {
        surface.write(&side.contact_id(ContactType::Love, index + 1), &love.name);
    }
    for (index, enemy) in record.contacts.enemies.iter().enumerate() {
        let slot = index + 1;
        surface.write(&side.enemy_id(slot, EnemyPart::Who), &enemy.name);
        surface.write(&side.enemy_id(slot, EnemyPart::Caused), &enemy.what_caused);
        surface.write(&side.enemy_id(slot, EnemyPart::Throw), &enemy.what_throw_down);
        surface.write(&side.enemy_id(slot, EnemyPart::Happen), &enemy.what_happened);
    }

    if let Some(text) = record.critical_injuries_text() {
        surface.write(&side.critical_injuries_id(), &text);
    }
    if let Some(text) = record.addictions_text() {
        surface.write(&side.addictions_id(), &text);
    }
}

/// Moves the bio sheet between the form and a [`CharacterStore`]
pub struct FormSync<S> {
    store: S,
}

impl<S: CharacterStore> FormSync<S> {
    pub fn new(store: S) -> Self {
        Self { store }
    }

    pub async fn save(&self, surface: &impl FieldSurface) -> Result<SaveAck, String> {
        let update = collect_update(surface);
        let ack = self.store.save(&update).await?;
        log::info!("Character saved: {}", ack.message);
        Ok(ack)
    }

    pub async fn load_to_edit(&self, surface: &impl FieldSurface) -> Result<(), String> {
        self.load_into(surface, SheetSide::Edit).await
    }

    pub async fn load_to_display(&self, surface: &impl FieldSurface) -> Result<(), String> {
        self.load_into(surface, SheetSide::Display).await
    }

    async fn load_into(&self, surface: &impl FieldSurface, side: SheetSide) -> Result<(), String> {
        match self.store.load().await? {
            Some(record) => apply_record(surface, &record, side),
            None => log::debug!("No character data saved yet"),
        }
        Ok(())
    }
}

/// What the sheet does once a save attempt finishes
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum SaveFollowUp {
    Navigate(Fragment),
    Alert(String),
}

pub fn save_follow_up(result: &Result<SaveAck, String>) -> SaveFollowUp {
    match result {
        Ok(_) => SaveFollowUp::Navigate(Fragment::Bio),
        Err(e) => SaveFollowUp::Alert(format!(
            "Failed to save character data ({}).\n\n\
             Make sure the API server is running:\n  cargo run -p backend",
            e
        )),
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::shared::dom::memory::MemorySurface;
    use contracts::domain::a001_character::{AddictionDto, CriticalInjuryDto};
    use futures::executor::block_on;
    use serde_json::{json, Value};
    use std::cell::RefCell;

    #[derive(Default)]
    struct MemoryStore {
        record: Option<CharacterRecord>,
        fail_with: Option<String>,
        saved: RefCell<Vec<CharacterUpdate>>,
    }

    impl CharacterStore for MemoryStore {
        async fn load(&self) -> Result<Option<CharacterRecord>, String> {
            match &self.fail_with {
                Some(e) => Err(e.clone()),
                None => Ok(self.record.clone()),
            }
        }

        async fn save(&self, update: &CharacterUpdate) -> Result<SaveAck, String> {
            if let Some(e) = &self.fail_with {
                return Err(e.clone());
            }
            self.saved.borrow_mut().push(update.clone());
            Ok(SaveAck {
                success: true,
                message: "Character data saved successfully".into(),
            })
        }
    }

    fn surface(side: SheetSide) -> MemorySurface {
        MemorySurface::with_ids(side.all_element_ids())
    }

    fn section(pairs: &[(&str, Value)]) -> serde_json::Map<String, Value> {
        pairs
            .iter()
            .map(|(k, v)| (k.to_string(), v.clone()))
            .collect()
    }

    #[test]
    fn collect_stages_only_present_scalars() {
        let form = surface(SheetSide::Edit);
        form.fill("handle", "V");
        form.fill("reputation", "7");
        form.fill("family-background", "Nomads");
        form.remove("affectation");

        let update = collect_update(&form);
        assert_eq!(update.character["handle"], "V");
        assert_eq!(update.reputation["reputation_score"], "7");
        assert_eq!(update.background["family_background"], "Nomads");
        // empty controls are staged, missing ones are not
        assert_eq!(update.character["role"], "");
        assert!(!update.character.contains_key("affectation"));
        assert_eq!(
            update.character.len() + update.background.len() + update.reputation.len(),
            FIELD_MAP.len() - 1
        );
    }

    #[test]
    fn collect_keeps_only_named_contacts() {
        let form = surface(SheetSide::Edit);
        form.fill("friend-1", "Jackie");
        form.fill("friend-2", "   ");
        form.fill("friend-3", " Misty ");
        form.fill("enemy-2-who", " Arasaka ");
        form.fill("enemy-2-caused", " Betrayal ");
        form.fill("enemy-3-caused", "orphaned detail");

        let update = collect_update(&form);
        let friends: Vec<_> = update.contacts.friends.iter().map(|f| f.name.as_str()).collect();
        assert_eq!(friends, vec!["Jackie", "Misty"]);
        assert!(update.contacts.loves.is_empty());
        assert_eq!(update.contacts.enemies.len(), 1);
        let enemy = &update.contacts.enemies[0];
        assert_eq!(enemy.name, "Arasaka");
        assert_eq!(enemy.who_wronged, "Arasaka");
        assert_eq!(enemy.what_caused, "Betrayal");
        assert_eq!(enemy.what_happened, "");
    }

    #[test]
    fn collect_takes_text_blocks_verbatim() {
        let form = surface(SheetSide::Edit);
        form.fill("critical-injuries", "  Cracked ribs\nConcussion ");
        let update = collect_update(&form);
        assert_eq!(update.critical_injuries, "  Cracked ribs\nConcussion ");
        assert_eq!(update.addictions, "");
    }

    #[test]
    fn apply_fills_display_side() {
        let record = CharacterRecord {
            character: section(&[("handle", json!("V")), ("rank", json!(4)), ("role", Value::Null)]),
            reputation: section(&[("reputation_score", json!("7"))]),
            contacts: contracts::domain::a001_character::ContactsDto {
                friends: vec![ContactDto::named("Jackie")],
                ..Default::default()
            },
            critical_injuries: vec![
                CriticalInjuryDto {
                    injury_name: Some("Ribs".into()),
                    description: Some("Cracked ribs".into()),
                },
                CriticalInjuryDto {
                    injury_name: Some("Concussion".into()),
                    description: None,
                },
            ],
            ..Default::default()
        };
        let display = surface(SheetSide::Display);
        display.fill("display-friend-2", "stale");
        display.fill("display-addictions", "untouched");

        apply_record(&display, &record, SheetSide::Display);

        assert_eq!(display.get("display-handle").as_deref(), Some("V"));
        assert_eq!(display.get("display-rank").as_deref(), Some("4"));
        assert_eq!(display.get("display-role").as_deref(), Some(""));
        assert_eq!(display.get("display-reputation").as_deref(), Some("7"));
        assert_eq!(display.get("display-friend-1").as_deref(), Some("Jackie"));
        // slots beyond the stored list keep what they had
        assert_eq!(display.get("display-friend-2").as_deref(), Some("stale"));
        assert_eq!(
            display.get("display-critical-injuries").as_deref(),
            Some("Cracked ribs\nConcussion")
        );
        assert_eq!(display.get("display-addictions").as_deref(), Some("untouched"));
    }

    #[test]
    fn apply_skips_missing_controls() {
        let record = CharacterRecord {
            character: section(&[("handle", json!("V"))]),
            addictions: vec![AddictionDto {
                substance: Some("Nicotine".into()),
                severity: Some("mild".into()),
                description: None,
            }],
            ..Default::default()
        };
        let form = MemorySurface::with_ids(["handle", "addictions"]);
        apply_record(&form, &record, SheetSide::Edit);
        assert_eq!(form.get("handle").as_deref(), Some("V"));
        assert_eq!(form.get("addictions").as_deref(), Some("Nicotine"));
        assert_eq!(form.get("role"), None);
    }

    #[test]
    fn saved_handle_and_friend_show_on_display() {
        let sync = FormSync::new(MemoryStore::default());
        let form = surface(SheetSide::Edit);
        form.fill("handle", "Raven");
        form.fill("friend-1", "Miko");

        block_on(sync.save(&form)).unwrap();
        let saved = sync.store.saved.borrow()[0].clone();

        // what a backend would hand back for that payload
        let mut record = CharacterRecord::default();
        for d in FIELD_MAP {
            record
                .section_mut(d.table)
                .insert(d.db_column.into(), json!(saved.section(d.table)[d.db_column]));
        }
        record.contacts = saved.contacts.clone();

        let display = surface(SheetSide::Display);
        apply_record(&display, &record, SheetSide::Display);
        assert_eq!(display.get("display-handle").as_deref(), Some("Raven"));
        assert_eq!(display.get("display-friend-1").as_deref(), Some("Miko"));
        assert_eq!(display.get("display-friend-2").as_deref(), Some(""));
        assert_eq!(display.get("display-role").as_deref(), Some(""));
    }

    #[test]
    fn nothing_saved_yet_leaves_form_untouched() {
        let sync = FormSync::new(MemoryStore::default());
        let form = surface(SheetSide::Edit);
        form.fill("handle", "typed");
        assert!(block_on(sync.load_to_edit(&form)).is_ok());
        assert_eq!(form.get("handle").as_deref(), Some("typed"));
        assert_eq!(form.get("role").as_deref(), Some(""));
    }

    #[test]
    fn stored_record_loads_into_edit_form() {
        let record = CharacterRecord {
            character: section(&[("handle", json!("V"))]),
            ..Default::default()
        };
        let sync = FormSync::new(MemoryStore {
            record: Some(record),
            ..Default::default()
        });
        let form = surface(SheetSide::Edit);
        block_on(sync.load_to_edit(&form)).unwrap();
        assert_eq!(form.get("handle").as_deref(), Some("V"));
    }

    #[test]
    fn failed_load_leaves_form_untouched() {
        let sync = FormSync::new(MemoryStore {
            fail_with: Some("HTTP 500".into()),
            ..Default::default()
        });
        let form = surface(SheetSide::Edit);
        form.fill("handle", "typed");
        assert!(block_on(sync.load_to_edit(&form)).is_err());
        assert_eq!(form.get("handle").as_deref(), Some("typed"));
    }

    #[test]
    fn failed_save_asks_to_start_backend() {
        let sync = FormSync::new(MemoryStore {
            fail_with: Some("HTTP 500".into()),
            ..Default::default()
        });
        let result = block_on(sync.save(&surface(SheetSide::Edit)));
        match save_follow_up(&result) {
            SaveFollowUp::Alert(message) => {
                assert!(message.contains("HTTP 500"));
                assert!(message.contains("cargo run -p backend"));
            }
            other => panic!("expected alert, got {:?}", other),
        }

        let ok = Ok(SaveAck {
            success: true,
            message: String::new(),
        });
        assert_eq!(save_follow_up(&ok), SaveFollowUp::Navigate(Fragment::Bio));
    }
}
