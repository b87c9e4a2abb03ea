pub mod equipment;
pub mod record;
pub mod system;

pub use equipment::{Category, Equipment, EquipmentType, RawEquipment};
pub use record::CertificationRecord;
pub use system::{OutputRecord, SystemCombination, SystemType};
