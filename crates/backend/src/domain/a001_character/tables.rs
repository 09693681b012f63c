//! sea-orm entities of the character sheet tables

pub mod characters {
    use sea_orm::entity::prelude::*;
    use serde::{Deserialize, Serialize};

    #[derive(Clone, Debug, PartialEq, Eq, DeriveEntityModel, Serialize, Deserialize)]
    #[sea_orm(table_name = "characters")]
    pub struct Model {
        #[sea_orm(primary_key)]
        pub character_id: i32,
        pub handle: String,
        pub role: String,
        pub role_ability: String,
        pub rank: String,
        pub ability: String,
        pub languages: String,
        pub improvement_points: String,
        pub cultural_region: String,
        pub clothing_style: String,
        pub hairstyle: String,
        pub affectation: String,
        pub last_modified: Option<chrono::DateTime<chrono::Utc>>,
    }

    #[derive(Copy, Clone, Debug, EnumIter, DeriveRelation)]
    pub enum Relation {}

    impl ActiveModelBehavior for ActiveModel {}
}

pub mod background {
    use sea_orm::entity::prelude::*;
    use serde::{Deserialize, Serialize};

    #[derive(Clone, Debug, PartialEq, Eq, DeriveEntityModel, Serialize, Deserialize)]
    #[sea_orm(table_name = "background")]
    pub struct Model {
        #[sea_orm(primary_key)]
        pub background_id: i32,
        pub character_id: i32,
        pub family_background: String,
        pub childhood_environment: String,
    }

    #[derive(Copy, Clone, Debug, EnumIter, DeriveRelation)]
    pub enum Relation {}

    impl ActiveModelBehavior for ActiveModel {}
}

pub mod reputation {
    use sea_orm::entity::prelude::*;
    use serde::{Deserialize, Serialize};

    #[derive(Clone, Debug, PartialEq, Eq, DeriveEntityModel, Serialize, Deserialize)]
    #[sea_orm(table_name = "reputation")]
    pub struct Model {
        #[sea_orm(primary_key)]
        pub reputation_id: i32,
        pub character_id: i32,
        pub reputation_score: String,
        pub reputation_event: String,
    }

    #[derive(Copy, Clone, Debug, EnumIter, DeriveRelation)]
    pub enum Relation {}

    impl ActiveModelBehavior for ActiveModel {}
}

pub mod contacts {
    use sea_orm::entity::prelude::*;
    use serde::{Deserialize, Serialize};

    #[derive(Clone, Debug, PartialEq, Eq, DeriveEntityModel, Serialize, Deserialize)]
    #[sea_orm(table_name = "contacts")]
    pub struct Model {
        #[sea_orm(primary_key)]
        pub contact_id: i32,
        pub character_id: i32,
        pub contact_type: String,
        pub contact_number: i32,
        pub name: String,
        pub who_wronged: String,
        pub what_caused: String,
        pub what_throw_down: String,
        pub what_happened: String,
        pub notes: String,
    }

    #[derive(Copy, Clone, Debug, EnumIter, DeriveRelation)]
    pub enum Relation {}

    impl ActiveModelBehavior for ActiveModel {}
}

pub mod critical_injuries {
    use sea_orm::entity::prelude::*;
    use serde::{Deserialize, Serialize};

    #[derive(Clone, Debug, PartialEq, Eq, DeriveEntityModel, Serialize, Deserialize)]
    #[sea_orm(table_name = "critical_injuries")]
    pub struct Model {
        #[sea_orm(primary_key)]
        pub injury_id: i32,
        pub character_id: i32,
        pub injury_name: String,
        pub description: String,
        pub healed: bool,
    }

    #[derive(Copy, Clone, Debug, EnumIter, DeriveRelation)]
    pub enum Relation {}

    impl ActiveModelBehavior for ActiveModel {}
}

pub mod addictions {
    use sea_orm::entity::prelude::*;
    use serde::{Deserialize, Serialize};

    #[derive(Clone, Debug, PartialEq, Eq, DeriveEntityModel, Serialize, Deserialize)]
    #[sea_orm(table_name = "addictions")]
    pub struct Model {
        #[sea_orm(primary_key)]
        pub addiction_id: i32,
        pub character_id: i32,
        pub substance: String,
        pub severity: String,
        pub description: String,
    }

    #[derive(Copy, Clone, Debug, EnumIter, DeriveRelation)]
    pub enum Relation {}

    impl ActiveModelBehavior for ActiveModel {}
}
