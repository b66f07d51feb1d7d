//! Entity module - Contains all SeaORM entity definitions for the record store.
//! Each entity has a Model struct for data and an Entity struct for operations.
//! Ownership runs Account → Project → Room/Specification → Cabinet → Drawer;
//! Material, Hardware and Labor are free-standing catalog tables.

pub mod account;
pub mod cabinet;
pub mod drawer;
pub mod hardware;
pub mod labor;
pub mod material;
pub mod project;
pub mod room;
pub mod specification;

// Re-export specific types to avoid conflicts
pub use account::{Column as AccountColumn, Entity as Account, Model as AccountModel};
pub use cabinet::{Column as CabinetColumn, Entity as Cabinet, Model as CabinetModel};
pub use drawer::{Column as DrawerColumn, Entity as Drawer, Model as DrawerModel};
pub use hardware::{Column as HardwareColumn, Entity as Hardware, Model as HardwareModel};
pub use labor::{Column as LaborColumn, Entity as Labor, Model as LaborModel};
pub use material::{Column as MaterialColumn, Entity as Material, Model as MaterialModel};
pub use project::{Column as ProjectColumn, Entity as Project, Model as ProjectModel};
pub use room::{Column as RoomColumn, Entity as Room, Model as RoomModel};
pub use specification::{
    Column as SpecificationColumn, Entity as Specification, Model as SpecificationModel,
};
