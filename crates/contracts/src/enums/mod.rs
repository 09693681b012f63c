pub mod contact_type;
pub mod profile_table;

pub use contact_type::ContactType;
pub use profile_table::ProfileTable;
