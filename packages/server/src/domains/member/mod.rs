// Member domain - platform accounts (staff, brands, creators)
//
// Account authentication itself is an external collaborator; this domain
// only persists the identity rows the workflow references.

pub mod models;

pub use models::Member;
