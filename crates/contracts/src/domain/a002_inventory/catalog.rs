use once_cell::sync::Lazy;

/// Unit appended to item values in the detail panel
pub const CURRENCY_LABEL: &str = "EB";

/// Key of the synthetic category that aggregates every other one
pub const ALL_CATEGORY: &str = "all";

#[derive(Debug, PartialEq, Eq)]
pub struct InventoryItem {
    pub id: &'static str,
    pub name: &'static str,
    pub description: &'static str,
    pub value: u32,
    pub quantity: u32,
}

impl InventoryItem {
    pub fn value_label(&self) -> String {
        format!("{} {}", self.value, CURRENCY_LABEL)
    }
}

#[derive(Debug)]
pub struct InventoryCategory {
    pub key: &'static str,
    pub name: &'static str,
    pub items: Vec<&'static InventoryItem>,
}

/// Category list with the derived "all" category first.
#[derive(Debug)]
pub struct InventoryCatalog {
    categories: Vec<InventoryCategory>,
}

type CategorySource = (&'static str, &'static str, &'static [InventoryItem]);

impl InventoryCatalog {
    /// Builds the catalog; "all" holds references to the source items, never copies.
    pub fn build(sources: &[CategorySource]) -> Self {
        let mut categories = Vec::with_capacity(sources.len() + 1);
        let all_items: Vec<&'static InventoryItem> = sources
            .iter()
            .flat_map(|&(_, _, items)| items.iter())
            .collect();
        categories.push(InventoryCategory {
            key: ALL_CATEGORY,
            name: "Kaikki",
            items: all_items,
        });
        for &(key, name, items) in sources {
            categories.push(InventoryCategory {
                key,
                name,
                items: items.iter().collect(),
            });
        }
        Self { categories }
    }

    pub fn categories(&self) -> &[InventoryCategory] {
        &self.categories
    }

    pub fn category(&self, key: &str) -> Option<&InventoryCategory> {
        self.categories.iter().find(|c| c.key == key)
    }

    /// First match across all categories
    pub fn find_item(&self, id: &str) -> Option<&'static InventoryItem> {
        self.categories
            .iter()
            .flat_map(|c| c.items.iter().copied())
            .find(|item| item.id == id)
    }
}

// ============================================================================
// Static data
// ============================================================================

static WEAPONS: [InventoryItem; 2] = [
    InventoryItem {
        id: "weapon-1",
        name: "Katakana asetta",
        description: "Tehokas rinnakkain ampuja",
        value: 1500,
        quantity: 1,
    },
    InventoryItem {
        id: "weapon-2",
        name: "Pulssariifle",
        description: "Energiaseikka vaikutus",
        value: 3200,
        quantity: 2,
    },
];

static VEHICLES: [InventoryItem; 2] = [
    InventoryItem {
        id: "vehicle-1",
        name: "Ajoneuvo - Jalokivi Ground",
        description: "Nopea ja väärä maastoajoneuvon",
        value: 45000,
        quantity: 1,
    },
    InventoryItem {
        id: "vehicle-2",
        name: "Ilmakulkuneuvo - Air ja Sea",
        description: "Amphibious ajoneuvon monipuolinen liikutteluun",
        value: 75000,
        quantity: 1,
    },
];

static EQUIPMENT: [InventoryItem; 2] = [
    InventoryItem {
        id: "equipment-1",
        name: "Pansari, vaatteet",
        description: "Suojava varuste",
        value: 2500,
        quantity: 3,
    },
    InventoryItem {
        id: "equipment-2",
        name: "Turvalaitteet",
        description: "Ammus-, väliaine- ja kuorinsuojaksi",
        value: 1800,
        quantity: 2,
    },
];

static CYBERWARE: [InventoryItem; 3] = [
    InventoryItem {
        id: "cyberware-1",
        name: "Kyberware - Pään sisäosa",
        description: "Neurologiset parannukset",
        value: 5000,
        quantity: 1,
    },
    InventoryItem {
        id: "cyberware-2",
        name: "Kyberware - Käsi",
        description: "Käden parannetut toiminnot",
        value: 4200,
        quantity: 1,
    },
    InventoryItem {
        id: "cyberware-3",
        name: "Kyberware - Silmä, sisäinen",
        description: "Näön parantaminen kyberneettisesti",
        value: 3500,
        quantity: 1,
    },
];

static MISC: [InventoryItem; 1] = [InventoryItem {
    id: "misc-1",
    name: "Kaikki misc tavarat",
    description: "Sekalainen kokoelma",
    value: 800,
    quantity: 5,
}];

static SOURCES: [CategorySource; 5] = [
    ("weapons", "Aseet & Ammo", &WEAPONS),
    ("vehicles", "Ajoneuvot", &VEHICLES),
    ("equipment", "Varusteet", &EQUIPMENT),
    ("cyberware", "Kyberware", &CYBERWARE),
    ("misc", "Muuta", &MISC),
];

static CATALOG: Lazy<InventoryCatalog> = Lazy::new(|| InventoryCatalog::build(&SOURCES));

/// Process-wide catalog, built on first access
pub fn catalog() -> &'static InventoryCatalog {
    &CATALOG
}
