pub mod dat;
pub mod error;
pub mod matcher;
pub mod title;

pub use dat::{load_dat_lines, parse_dat_lines, rom_entry_filename};
pub use error::DatError;
pub use matcher::{ArcadeMatcher, MatchReport, MetadataRecord};
pub use title::{OffsetTitle, TitleStrategy, normalize_title};
