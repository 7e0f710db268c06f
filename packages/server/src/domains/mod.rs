// Business domains
pub mod campaigns;
pub mod member;
pub mod payments;
pub mod submissions;
