pub mod alteration;
pub mod civic;
pub mod oncokb;
pub mod pharmacodb;
pub mod profile;
pub mod source;
pub mod study;
pub mod survival;
