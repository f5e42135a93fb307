pub mod tags;
pub mod urls;
pub mod users;

pub use tags::Entity as TagEntity;
pub use urls::Entity as UrlEntity;
pub use users::Entity as UserEntity;
