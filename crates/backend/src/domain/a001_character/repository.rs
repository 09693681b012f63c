use chrono::Utc;
use contracts::domain::a001_character::{is_known_column, ColumnValues, ContactsDto};
use contracts::enums::{ContactType, ProfileTable};
use sea_orm::{
    ActiveModelTrait, ColumnTrait, ConnectionTrait, EntityTrait, IntoActiveModel, PaginatorTrait,
    QueryFilter, QueryOrder, Set,
};

use super::tables::{addictions, background, characters, contacts, critical_injuries, reputation};

/// Stored names of injuries and substances are cut to this many characters
const SHORT_NAME_LEN: usize = 50;

// ============================================================================
// Reads
// ============================================================================

pub async fn find_character<C: ConnectionTrait>(
    db: &C,
    id: i32,
) -> anyhow::Result<Option<characters::Model>> {
    Ok(characters::Entity::find_by_id(id).one(db).await?)
}

pub async fn find_background<C: ConnectionTrait>(
    db: &C,
    id: i32,
) -> anyhow::Result<Option<background::Model>> {
    Ok(background::Entity::find()
        .filter(background::Column::CharacterId.eq(id))
        .one(db)
        .await?)
}

pub async fn find_reputation<C: ConnectionTrait>(
    db: &C,
    id: i32,
) -> anyhow::Result<Option<reputation::Model>> {
    Ok(reputation::Entity::find()
        .filter(reputation::Column::CharacterId.eq(id))
        .one(db)
        .await?)
}

/// Contacts ordered by kind, then slot number
pub async fn list_contacts<C: ConnectionTrait>(
    db: &C,
    id: i32,
) -> anyhow::Result<Vec<contacts::Model>> {
    Ok(contacts::Entity::find()
        .filter(contacts::Column::CharacterId.eq(id))
        .order_by_asc(contacts::Column::ContactType)
        .order_by_asc(contacts::Column::ContactNumber)
        .all(db)
        .await?)
}

/// Injuries that have not healed yet
pub async fn list_open_injuries<C: ConnectionTrait>(
    db: &C,
    id: i32,
) -> anyhow::Result<Vec<critical_injuries::Model>> {
    Ok(critical_injuries::Entity::find()
        .filter(critical_injuries::Column::CharacterId.eq(id))
        .filter(critical_injuries::Column::Healed.eq(false))
        .order_by_asc(critical_injuries::Column::InjuryId)
        .all(db)
        .await?)
}

pub async fn list_addictions<C: ConnectionTrait>(
    db: &C,
    id: i32,
) -> anyhow::Result<Vec<addictions::Model>> {
    Ok(addictions::Entity::find()
        .filter(addictions::Column::CharacterId.eq(id))
        .order_by_asc(addictions::Column::AddictionId)
        .all(db)
        .await?)
}

pub async fn list_characters<C: ConnectionTrait>(db: &C) -> anyhow::Result<Vec<characters::Model>> {
    Ok(characters::Entity::find()
        .order_by_asc(characters::Column::Handle)
        .all(db)
        .await?)
}

pub async fn count_characters<C: ConnectionTrait>(db: &C) -> anyhow::Result<u64> {
    Ok(characters::Entity::find().count(db).await?)
}

// ============================================================================
// Writes
// ============================================================================

/// Copy mapped columns into an active model; anything outside the field map is dropped.
fn apply_columns<A>(active: &mut A, table: ProfileTable, values: &ColumnValues)
where
    A: ActiveModelTrait,
    <A::Entity as EntityTrait>::Column: std::str::FromStr,
{
    for (column, value) in values {
        if !is_known_column(table, column) {
            tracing::warn!("Ignoring unknown {} column '{}'", table, column);
            continue;
        }
        match column.parse::<<A::Entity as EntityTrait>::Column>() {
            Ok(col) => active.set(col, value.clone().into()),
            Err(_) => tracing::warn!("Column '{}' missing from table {}", column, table),
        }
    }
}

/// Update the character row, creating it under `id` when missing
pub async fn upsert_character<C: ConnectionTrait>(
    db: &C,
    id: i32,
    values: &ColumnValues,
) -> anyhow::Result<()> {
    let existing = find_character(db, id).await?;
    let is_new = existing.is_none();
    let mut active = match existing {
        Some(model) => model.into_active_model(),
        None => characters::ActiveModel {
            character_id: Set(id),
            ..Default::default()
        },
    };
    apply_columns(&mut active, ProfileTable::Character, values);
    active.last_modified = Set(Some(Utc::now()));

    if is_new {
        tracing::info!("Creating character {}", id);
        active.insert(db).await?;
    } else {
        active.update(db).await?;
    }
    Ok(())
}

pub async fn upsert_background<C: ConnectionTrait>(
    db: &C,
    id: i32,
    values: &ColumnValues,
) -> anyhow::Result<()> {
    match find_background(db, id).await? {
        Some(model) => {
            let mut active = model.into_active_model();
            apply_columns(&mut active, ProfileTable::Background, values);
            if active.is_changed() {
                active.update(db).await?;
            }
        }
        None => {
            let mut active = background::ActiveModel {
                character_id: Set(id),
                ..Default::default()
            };
            apply_columns(&mut active, ProfileTable::Background, values);
            active.insert(db).await?;
        }
    }
    Ok(())
}

pub async fn upsert_reputation<C: ConnectionTrait>(
    db: &C,
    id: i32,
    values: &ColumnValues,
) -> anyhow::Result<()> {
    match find_reputation(db, id).await? {
        Some(model) => {
            let mut active = model.into_active_model();
            apply_columns(&mut active, ProfileTable::Reputation, values);
            if active.is_changed() {
                active.update(db).await?;
            }
        }
        None => {
            let mut active = reputation::ActiveModel {
                character_id: Set(id),
                ..Default::default()
            };
            apply_columns(&mut active, ProfileTable::Reputation, values);
            active.insert(db).await?;
        }
    }
    Ok(())
}

fn contact_row(id: i32, kind: ContactType, number: usize, name: &str) -> contacts::ActiveModel {
    contacts::ActiveModel {
        character_id: Set(id),
        contact_type: Set(kind.code().to_string()),
        contact_number: Set(number as i32),
        name: Set(name.to_string()),
        ..Default::default()
    }
}

/// Drop every stored contact and write the given lists; nameless entries are skipped.
pub async fn replace_contacts<C: ConnectionTrait>(
    db: &C,
    id: i32,
    list: &ContactsDto,
) -> anyhow::Result<()> {
    contacts::Entity::delete_many()
        .filter(contacts::Column::CharacterId.eq(id))
        .exec(db)
        .await?;

    for (kind, entries) in [
        (ContactType::Friend, &list.friends),
        (ContactType::Love, &list.loves),
    ] {
        for (i, contact) in entries.iter().enumerate() {
            if contact.name.is_empty() {
                continue;
            }
            let mut row = contact_row(id, kind, i + 1, &contact.name);
            row.notes = Set(contact.notes.clone());
            row.insert(db).await?;
        }
    }

    for (i, enemy) in list.enemies.iter().enumerate() {
        if enemy.name.is_empty() {
            continue;
        }
        let mut row = contact_row(id, ContactType::Enemy, i + 1, &enemy.name);
        row.who_wronged = Set(enemy.who_wronged.clone());
        row.what_caused = Set(enemy.what_caused.clone());
        row.what_throw_down = Set(enemy.what_throw_down.clone());
        row.what_happened = Set(enemy.what_happened.clone());
        row.notes = Set(enemy.notes.clone());
        row.insert(db).await?;
    }
    Ok(())
}

fn short_name(line: &str) -> String {
    line.chars().take(SHORT_NAME_LEN).collect()
}

fn non_blank_lines(text: &str) -> impl Iterator<Item = &str> {
    text.split('\n').filter(|line| !line.trim().is_empty())
}

/// Replace the unhealed injuries with one row per non-blank line of `text`
pub async fn replace_open_injuries<C: ConnectionTrait>(
    db: &C,
    id: i32,
    text: &str,
) -> anyhow::Result<()> {
    critical_injuries::Entity::delete_many()
        .filter(critical_injuries::Column::CharacterId.eq(id))
        .filter(critical_injuries::Column::Healed.eq(false))
        .exec(db)
        .await?;

    for line in non_blank_lines(text) {
        critical_injuries::ActiveModel {
            character_id: Set(id),
            injury_name: Set(short_name(line)),
            description: Set(line.to_string()),
            healed: Set(false),
            ..Default::default()
        }
        .insert(db)
        .await?;
    }
    Ok(())
}

/// Replace all addictions with one row per non-blank line of `text`
pub async fn replace_addictions<C: ConnectionTrait>(
    db: &C,
    id: i32,
    text: &str,
) -> anyhow::Result<()> {
    addictions::Entity::delete_many()
        .filter(addictions::Column::CharacterId.eq(id))
        .exec(db)
        .await?;

    for line in non_blank_lines(text) {
        addictions::ActiveModel {
            character_id: Set(id),
            substance: Set(short_name(line)),
            severity: Set("mild".to_string()),
            description: Set(line.to_string()),
            ..Default::default()
        }
        .insert(db)
        .await?;
    }
    Ok(())
}
