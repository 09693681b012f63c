use contracts::domain::a001_character::{CharacterUpdate, ColumnValues, ContactDto, ContactsDto, EnemyDto};
use sea_orm::DatabaseConnection;

use super::{repository, service};

fn columns(pairs: &[(&str, &str)]) -> ColumnValues {
    pairs
        .iter()
        .map(|(k, v)| (k.to_string(), v.to_string()))
        .collect()
}

fn solo_v() -> CharacterUpdate {
    CharacterUpdate {
        character: columns(&[
            ("handle", "V"),
            ("role", "Solo"),
            ("role_ability", "Combat Awareness"),
            ("rank", "4"),
            (
                "ability",
                "Can perceive threats and attack 3 enemies in one turn",
            ),
            ("languages", "English, Streetslang, Japanese"),
            ("improvement_points", "12"),
            ("cultural_region", "North America - Street"),
            ("clothing_style", "Edgerunner Casual"),
            ("hairstyle", "Undercut with neon highlights"),
            ("affectation", "Always checks exits in a room"),
        ]),
        background: columns(&[
            (
                "family_background",
                "Nomad family, lost contact after corp raid",
            ),
            (
                "childhood_environment",
                "Urban Combat Zone - learned to fight early",
            ),
        ]),
        reputation: columns(&[
            ("reputation_score", "7"),
            (
                "reputation_event",
                "Successful gigs in Watson, saved Aldecaldos member",
            ),
        ]),
        contacts: ContactsDto {
            friends: vec![
                ContactDto {
                    name: "Jackie Welles".into(),
                    notes: "Best friend and partner, loyal to the end".into(),
                },
                ContactDto {
                    name: "Misty Olszewski".into(),
                    notes: "Spiritual guide and friend".into(),
                },
            ],
            loves: vec![ContactDto {
                name: "Judy Alvarez".into(),
                notes: "Braindance technician, complicated relationship".into(),
            }],
            enemies: vec![EnemyDto {
                name: "Arasaka Corporation".into(),
                who_wronged: "They wronged me".into(),
                what_caused: "Betrayed during a heist".into(),
                what_throw_down: "Public humiliation".into(),
                what_happened: "Still hunting me".into(),
                notes: String::new(),
            }],
        },
        critical_injuries: "Took heavy damage in last firefight, -2 to BODY checks".into(),
        addictions: "Nicotine".into(),
    }
}

fn rockerboy_johnny() -> CharacterUpdate {
    CharacterUpdate {
        character: columns(&[
            ("handle", "Johnny Silverhand"),
            ("role", "Rockerboy"),
            ("role_ability", "Charismatic Impact"),
            ("rank", "8"),
            ("languages", "English, Streetslang"),
            ("cultural_region", "North America"),
            ("clothing_style", "Punk Rock Icon"),
            ("hairstyle", "Long dark hair"),
            ("affectation", "Always wears aviator sunglasses"),
        ]),
        ..Default::default()
    }
}

/// Populate an empty database with two example characters.
///
/// Returns `false` when characters already exist and nothing was written.
pub async fn seed_if_empty(db: &DatabaseConnection) -> anyhow::Result<bool> {
    if repository::count_characters(db).await? > 0 {
        return Ok(false);
    }
    tracing::info!("Empty database, inserting example characters");
    service::save_sheet(db, 1, &solo_v()).await?;
    service::save_sheet(db, 2, &rockerboy_johnny()).await?;
    Ok(true)
}
