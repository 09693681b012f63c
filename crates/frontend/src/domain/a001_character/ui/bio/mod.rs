pub mod form_sync;
pub mod model;

pub use form_sync::{save_follow_up, FormSync, SaveFollowUp};
pub use model::{ApiStore, CharacterStore};
