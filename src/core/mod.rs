pub mod alternative;
pub mod analyze;
pub mod dosage;
pub mod extract;
pub mod interaction;
pub mod overdose;
pub mod recommend;
pub mod regimen;
