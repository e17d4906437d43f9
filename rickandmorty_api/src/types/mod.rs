mod meta;
pub use self::meta::{PageEnvelope, PageInfo, Response};

mod character;
pub use self::character::{Character, CharacterGender, CharacterStatus, ResourceLink};
