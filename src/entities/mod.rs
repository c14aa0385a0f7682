//! Entity module - Contains all SeaORM entity definitions for the database.
//! These entities mirror the tables of the shop's data store and their
//! relationships. Each entity has a Model struct for data and an Entity
//! struct for operations.

pub mod app_state;
pub mod coupon;
pub mod full_season_visit;
pub mod message;
pub mod notice;
pub mod promo_athlete;
pub mod schedule;
pub mod season_visit;
pub mod service_record;
pub mod user;

// Re-export specific types to avoid conflicts
pub use app_state::{Column as AppStateColumn, Entity as AppState, Model as AppStateModel};
pub use coupon::{Column as CouponColumn, Entity as Coupon, Model as CouponModel};
pub use full_season_visit::{
    Column as FullSeasonVisitColumn, Entity as FullSeasonVisit, Model as FullSeasonVisitModel,
};
pub use message::{Column as MessageColumn, Entity as Message, Model as MessageModel};
pub use notice::{Column as NoticeColumn, Entity as Notice, Model as NoticeModel};
pub use promo_athlete::{
    Column as PromoAthleteColumn, Entity as PromoAthlete, Model as PromoAthleteModel,
};
pub use schedule::{Column as ScheduleColumn, Entity as Schedule, Model as ScheduleModel};
pub use season_visit::{
    Column as SeasonVisitColumn, Entity as SeasonVisit, Model as SeasonVisitModel,
};
pub use service_record::{
    Column as ServiceRecordColumn, Entity as ServiceRecord, Model as ServiceRecordModel,
};
pub use user::{Column as UserColumn, Entity as User, Model as UserModel};
