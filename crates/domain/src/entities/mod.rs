//! Domain entities

mod hospital;

pub use hospital::HospitalRecord;
