/// HTML fragments the content area can show
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Fragment {
    Bio,
    BioEdit,
    Inventory,
}

impl Fragment {
    pub const ALL: [Fragment; 3] = [Fragment::Bio, Fragment::BioEdit, Fragment::Inventory];

    pub fn path(&self) -> &'static str {
        match self {
            Fragment::Bio => "bio.html",
            Fragment::BioEdit => "bio-edit.html",
            Fragment::Inventory => "inventory.html",
        }
    }

    /// Exact match on the fragment file, as written in `data-page`
    pub fn from_path(path: &str) -> Option<Self> {
        let path = path.trim().trim_start_matches("./");
        Self::ALL.into_iter().find(|f| f.path() == path)
    }

    /// Navigation entry this fragment is reached from
    pub fn nav_hash(&self) -> &'static str {
        match self {
            Fragment::Bio | Fragment::BioEdit => "#bio",
            Fragment::Inventory => "#inventory",
        }
    }
}

/// One top-level navigation control
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct NavEntry {
    pub hash: &'static str,
    pub label: &'static str,
    pub fragment: Fragment,
}

pub const DEFAULT_HASH: &str = "#bio";

pub const NAV_ENTRIES: &[NavEntry] = &[
    NavEntry {
        hash: "#bio",
        label: "Bio",
        fragment: Fragment::Bio,
    },
    NavEntry {
        hash: "#inventory",
        label: "Inventory",
        fragment: Fragment::Inventory,
    },
];

/// Entry for a `location.hash` value; an empty hash means [`DEFAULT_HASH`].
pub fn resolve_hash(hash: &str) -> Option<&'static NavEntry> {
    let hash = match hash.trim() {
        "" | "#" => DEFAULT_HASH,
        other => other,
    };
    NAV_ENTRIES.iter().find(|entry| entry.hash == hash)
}
