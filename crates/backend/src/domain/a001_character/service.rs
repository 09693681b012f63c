use contracts::domain::a001_character::{
    AddictionDto, CharacterRecord, CharacterSummary, CharacterUpdate, ContactDto, ContactsDto,
    CriticalInjuryDto, EnemyDto,
};
use contracts::enums::ContactType;
use sea_orm::{DatabaseConnection, TransactionTrait};
use serde::Serialize;
use serde_json::{Map, Value};

use super::repository;
use super::tables::contacts;

fn to_section<T: Serialize>(row: Option<T>) -> anyhow::Result<Map<String, Value>> {
    match row {
        Some(row) => match serde_json::to_value(row)? {
            Value::Object(map) => Ok(map),
            other => Err(anyhow::anyhow!("row serialized to non-object: {}", other)),
        },
        None => Ok(Map::new()),
    }
}

fn group_contacts(rows: Vec<contacts::Model>) -> ContactsDto {
    let mut list = ContactsDto::default();
    for row in rows {
        match ContactType::from_code(&row.contact_type) {
            Some(ContactType::Friend) => list.friends.push(ContactDto {
                name: row.name,
                notes: row.notes,
            }),
            Some(ContactType::Love) => list.loves.push(ContactDto {
                name: row.name,
                notes: row.notes,
            }),
            Some(ContactType::Enemy) => list.enemies.push(EnemyDto {
                name: row.name,
                who_wronged: row.who_wronged,
                what_caused: row.what_caused,
                what_throw_down: row.what_throw_down,
                what_happened: row.what_happened,
                notes: row.notes,
            }),
            None => tracing::warn!(
                "Skipping contact {} with unknown type '{}'",
                row.contact_id,
                row.contact_type
            ),
        }
    }
    list
}

/// Full sheet of a character, `None` when the character does not exist
pub async fn get_sheet(db: &DatabaseConnection, id: i32) -> anyhow::Result<Option<CharacterRecord>> {
    let character = match repository::find_character(db, id).await? {
        Some(c) => c,
        None => return Ok(None),
    };

    let background = repository::find_background(db, id).await?;
    let reputation = repository::find_reputation(db, id).await?;
    let contacts = repository::list_contacts(db, id).await?;
    let injuries = repository::list_open_injuries(db, id).await?;
    let addictions = repository::list_addictions(db, id).await?;

    Ok(Some(CharacterRecord {
        character: to_section(Some(character))?,
        background: to_section(background)?,
        reputation: to_section(reputation)?,
        contacts: group_contacts(contacts),
        critical_injuries: injuries
            .into_iter()
            .map(|i| CriticalInjuryDto {
                injury_name: Some(i.injury_name),
                description: Some(i.description),
            })
            .collect(),
        addictions: addictions
            .into_iter()
            .map(|a| AddictionDto {
                substance: Some(a.substance),
                severity: Some(a.severity),
                description: Some(a.description),
            })
            .collect(),
    }))
}

/// Apply a full sheet in one transaction
pub async fn save_sheet(
    db: &DatabaseConnection,
    id: i32,
    update: &CharacterUpdate,
) -> anyhow::Result<()> {
    let txn = db.begin().await?;

    repository::upsert_character(&txn, id, &update.character).await?;
    repository::upsert_background(&txn, id, &update.background).await?;
    repository::upsert_reputation(&txn, id, &update.reputation).await?;
    repository::replace_contacts(&txn, id, &update.contacts).await?;
    repository::replace_open_injuries(&txn, id, &update.critical_injuries).await?;
    repository::replace_addictions(&txn, id, &update.addictions).await?;

    txn.commit().await?;
    tracing::info!(
        "Character {} saved: {} friends, {} loves, {} enemies",
        id,
        update.contacts.friends.len(),
        update.contacts.loves.len(),
        update.contacts.enemies.len()
    );
    Ok(())
}

/// Every character, ordered by handle
pub async fn list_summaries(db: &DatabaseConnection) -> anyhow::Result<Vec<CharacterSummary>> {
    Ok(repository::list_characters(db)
        .await?
        .into_iter()
        .map(|c| CharacterSummary {
            character_id: c.character_id,
            handle: c.handle,
            role: c.role,
        })
        .collect())
}
