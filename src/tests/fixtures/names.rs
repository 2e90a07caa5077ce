// Student names used across the test suites. Hangul and Latin names are mixed
// on purpose: membership is exact-match on the raw text.

pub const PARK_EUICHAN: &str = "박의찬";
pub const EUICHAN: &str = "의찬";
pub const EUICHAN_PARK: &str = "의찬박";
pub const PARKPARK: &str = "박박";
pub const SONG_JAEWON: &str = "송재원";
pub const SHIN_KYUNGCHUL: &str = "신경철";
pub const UNDAV: &str = "Undav";
pub const STILLER: &str = "Stiller";
